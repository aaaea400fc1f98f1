//! Rendering: buffers, rasterization and the per-frame loop.

pub mod framebuffer;
pub mod rasterizer;
pub mod renderer;

pub use framebuffer::{DirtyRect, FrameBuffer, FAR_DEPTH};
pub use rasterizer::{Rasterizer, ScanlineRasterizer, Triangle};
pub use renderer::{FrameStats, Renderer};

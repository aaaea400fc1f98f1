//! Renderer configuration.

use crate::colors;
use crate::error::{Result, SceneError};

/// Camera-space depth at or below which a vertex is clipped.
pub const NEAR_PLANE: f32 = 0.01;

/// Output surface parameters, fixed for the lifetime of a renderer.
///
/// ```ignore
/// let config = RendererConfig::default()
///     .with_size(1024, 768)
///     .with_background(colors::pack(20, 20, 30, 255));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RendererConfig {
    pub width: u32,
    pub height: u32,
    /// Row pitch in pixels. `None` means tightly packed (`width`).
    pub stride: Option<u32>,
    /// ARGB8888 clear color.
    pub background: u32,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            stride: None,
            background: colors::BLACK,
        }
    }
}

impl RendererConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self::default().with_size(width, height)
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_stride(mut self, stride: u32) -> Self {
        self.stride = Some(stride);
        self
    }

    pub fn with_background(mut self, color: u32) -> Self {
        self.background = color;
        self
    }

    /// Row pitch in pixels.
    pub fn stride(&self) -> u32 {
        self.stride.unwrap_or(self.width)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 || self.stride() < self.width {
            return Err(SceneError::InvalidResolution {
                width: self.width,
                height: self.height,
                stride: self.stride(),
            });
        }
        Ok(())
    }
}

//! Frame buffer abstraction for 2D pixel access.
//!
//! Provides a safe view into color and depth buffers with bounds-checked access.
//! The depth buffer enables hidden surface removal via the z-buffer algorithm.

/// Depth value meaning "nothing drawn here yet".
pub const FAR_DEPTH: f32 = f32::INFINITY;

/// A rectangular region of the color buffer that changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirtyRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl DirtyRect {
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }
}

/// Exclusive, scoped view into a renderer's color and depth buffers.
///
/// Obtained from [`Renderer::lock`](crate::Renderer::lock). While it lives,
/// nothing else can read or write the buffers. When it is dropped, on any
/// exit path, the whole surface is reported as dirty.
///
/// # Layout
///
/// The color buffer is row-major with a pitch of `stride` pixels; only the
/// first `width` pixels of each row are ever written. The depth buffer is
/// tightly packed (`width * height`).
///
/// # Depth Buffer
///
/// Depth is camera-space distance, so smaller values are closer. A fragment
/// is kept only if it is strictly closer than what is stored; equal depth
/// keeps the earlier fragment.
pub struct FrameBuffer<'a> {
    color_buffer: &'a mut [u32],
    depth_buffer: &'a mut [f32],
    width: u32,
    height: u32,
    stride: u32,
    dirty: &'a mut Option<DirtyRect>,
}

impl<'a> FrameBuffer<'a> {
    /// Create a new FrameBuffer view from buffer slices and dimensions.
    pub(crate) fn new(
        color_buffer: &'a mut [u32],
        depth_buffer: &'a mut [f32],
        width: u32,
        height: u32,
        stride: u32,
        dirty: &'a mut Option<DirtyRect>,
    ) -> Self {
        debug_assert_eq!(
            color_buffer.len(),
            stride as usize * height as usize,
            "Color buffer size doesn't match dimensions"
        );
        debug_assert_eq!(
            depth_buffer.len(),
            width as usize * height as usize,
            "Depth buffer size doesn't match dimensions"
        );
        Self {
            color_buffer,
            depth_buffer,
            width,
            height,
            stride,
            dirty,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn stride(&self) -> u32 {
        self.stride
    }

    /// Fills the visible area with `color`, leaving row padding untouched.
    pub fn clear(&mut self, color: u32) {
        let (width, stride) = (self.width as usize, self.stride as usize);
        for row in self.color_buffer.chunks_exact_mut(stride) {
            row[..width].fill(color);
        }
    }

    /// Resets every depth cell to [`FAR_DEPTH`].
    pub fn clear_depth(&mut self) {
        self.depth_buffer.fill(FAR_DEPTH);
    }

    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    #[inline]
    fn color_index(&self, x: i32, y: i32) -> usize {
        y as usize * self.stride as usize + x as usize
    }

    #[inline]
    fn depth_index(&self, x: i32, y: i32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Set a pixel at (x, y) with depth testing.
    ///
    /// If `depth` is strictly less than the stored depth, the depth is
    /// updated, `shade` is called and its result written. Returns whether the
    /// fragment was kept. Out-of-bounds coordinates are ignored.
    #[inline]
    pub fn set_pixel_with_depth<F>(&mut self, x: i32, y: i32, depth: f32, shade: F) -> bool
    where
        F: FnOnce() -> u32,
    {
        if !self.in_bounds(x, y) {
            return false;
        }
        let depth_idx = self.depth_index(x, y);
        // `!(a < b)` rather than `a >= b` so NaN depth is rejected too
        if !(depth < self.depth_buffer[depth_idx]) {
            return false;
        }
        self.depth_buffer[depth_idx] = depth;
        let color_idx = self.color_index(x, y);
        self.color_buffer[color_idx] = shade();
        true
    }

    /// Set a pixel without depth testing.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if self.in_bounds(x, y) {
            let idx = self.color_index(x, y);
            self.color_buffer[idx] = color;
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.in_bounds(x, y)
            .then(|| self.color_buffer[self.color_index(x, y)])
    }

    /// Get the stored depth at (x, y), or None if out of bounds.
    #[inline]
    pub fn depth_at(&self, x: i32, y: i32) -> Option<f32> {
        self.in_bounds(x, y)
            .then(|| self.depth_buffer[self.depth_index(x, y)])
    }
}

impl Drop for FrameBuffer<'_> {
    fn drop(&mut self) {
        *self.dirty = Some(DirtyRect::full(self.width, self.height));
    }
}

use std::path::Path;

use log::info;

use crate::error::{Result, SceneError};

/// Represents an immutable 2D texture for texture mapping.
///
/// Meshes hold textures behind an `Arc`, so one image can be shared by any
/// number of meshes; the renderer only ever reads from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    data: Vec<u32>, // The pixel data of the texture in ARGB format.
    width: u32,     // The width of the texture in pixels.
    height: u32,    // The height of the texture in pixels.
}

impl Texture {
    /// Builds a texture from packed ARGB8888 pixels in row-major order.
    pub fn from_argb(width: u32, height: u32, data: Vec<u32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(SceneError::InvalidTexture(format!(
                "dimensions must be non-zero, got {width}x{height}"
            )));
        }
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(SceneError::InvalidTexture(format!(
                "expected {expected} pixels for {width}x{height}, got {}",
                data.len()
            )));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Builds a texture from tightly packed RGBA8 bytes.
    pub fn from_rgba8(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        if bytes.len() % 4 != 0 {
            return Err(SceneError::InvalidTexture(format!(
                "RGBA byte count {} is not a multiple of 4",
                bytes.len()
            )));
        }
        let data = bytes
            .chunks_exact(4)
            .map(|p| crate::colors::pack(p[0], p[1], p[2], p[3]))
            .collect();
        Self::from_argb(width, height, data)
    }

    /// Load a texture from an image file (PNG, JPG, etc.)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let img = image::open(path)?.to_rgba8();
        let (width, height) = img.dimensions();
        info!("Loaded texture {} ({width}x{height})", path.display());
        Self::from_rgba8(width, height, img.as_raw())
    }

    /// Sample the texture at UV coordinates using nearest-neighbor filtering.
    ///
    /// `(u * width, v * height)` is truncated toward zero and each axis is
    /// clamped to the image, so out-of-range UVs return an edge texel.
    /// `v = 0` is the top row.
    #[inline]
    pub fn sample(&self, u: f32, v: f32) -> u32 {
        let x = Self::texel_coord(u, self.width);
        let y = Self::texel_coord(v, self.height);
        self.data[y as usize * self.width as usize + x as usize]
    }

    #[inline]
    fn texel_coord(t: f32, size: u32) -> u32 {
        // `as i64` saturates on overflow and maps NaN to 0
        let coord = (t * size as f32) as i64;
        coord.clamp(0, size as i64 - 1) as u32
    }

    /// Texel at integer coordinates, or `None` outside the image.
    pub fn texel(&self, x: u32, y: u32) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.data[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

//! Packed pixel helpers.
//!
//! Every pixel in the crate, texel or framebuffer, is a `u32` laid out as
//! `0xAARRGGBB` (ARGB8888). In little-endian memory the byte order is
//! B, G, R, A, which is what BGRA32 display surfaces expect.

pub const BLACK: u32 = 0xFF00_0000;
pub const WHITE: u32 = 0xFFFF_FFFF;

const ALPHA_MASK: u32 = 0xFF00_0000;

/// Packs 8-bit channels into ARGB8888.
#[inline]
pub const fn pack(r: u8, g: u8, b: u8, a: u8) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Unpacks ARGB8888 into `(r, g, b, a)`.
#[inline]
pub const fn unpack(color: u32) -> (u8, u8, u8, u8) {
    (
        (color >> 16) as u8,
        (color >> 8) as u8,
        color as u8,
        (color >> 24) as u8,
    )
}

/// Forces the alpha channel to fully opaque.
#[inline]
pub const fn opaque(color: u32) -> u32 {
    color | ALPHA_MASK
}

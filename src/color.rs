//! Pixel color representation and packed `0x00RRGGBB` conversion.
//!
//! Pixels are stored as `palette::Srgb<u8>`: one byte per channel, already in
//! the form the wire encoder consumes. No gamma or color-space conversion is
//! applied anywhere in this crate.

use palette::Srgb;

/// A single pixel color, 8 bits per channel.
pub type Rgb8 = Srgb<u8>;

/// The "off" color every pixel starts with.
pub const OFF: Rgb8 = Srgb::new(0, 0, 0);

/// Converts a packed `0x00RRGGBB` value into a color. Bits 24-31 are ignored.
#[inline]
pub const fn unpack(rgb: u32) -> Rgb8 {
    Srgb::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

/// Packs a color into `0x00RRGGBB`.
#[inline]
pub const fn pack(color: Rgb8) -> u32 {
    (color.red as u32) << 16 | (color.green as u32) << 8 | color.blue as u32
}

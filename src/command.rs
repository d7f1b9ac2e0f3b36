//! Command-based control for strip drivers.

use crate::color::{self, Rgb8};

/// A pixel color in one of the accepted representations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PixelColor {
    /// Separate 8-bit red, green and blue components.
    Components(u8, u8, u8),
    /// Packed `0x00RRGGBB`; the high byte is ignored.
    Packed(u32),
    /// Typed color value.
    Srgb(Rgb8),
}

impl PixelColor {
    /// Resolves to the stored pixel representation.
    pub fn to_rgb8(self) -> Rgb8 {
        match self {
            PixelColor::Components(red, green, blue) => Rgb8::new(red, green, blue),
            PixelColor::Packed(rgb) => color::unpack(rgb),
            PixelColor::Srgb(color) => color,
        }
    }
}

/// Actions for controlling a strip driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StripAction {
    /// Set one pixel. Out-of-range indices are ignored.
    SetPixel { index: u16, color: PixelColor },
    /// Set every pixel to the same color.
    Fill(PixelColor),
    /// Turn every pixel off.
    Clear,
    /// Change the global brightness.
    SetBrightness(u8),
    /// Transmit the buffer.
    Show,
}

//! Fixed-capacity pixel storage.
//!
//! [`PixelBuffer`] holds one [`Rgb8`] per LED in strip order. It never fails
//! loudly: asking for more pixels than the buffer can hold leaves it empty,
//! and out-of-range indices are ignored on write and read back as black.
//! A refresh loop fed a bad index keeps running instead of halting.

use crate::color::{self, OFF, Rgb8};
use heapless::Vec;

/// Dense, zero-initialized array of pixel colors.
///
/// # Type Parameters
/// * `N` - Maximum number of pixels this buffer can hold
#[derive(Debug, Clone)]
pub struct PixelBuffer<const N: usize> {
    colors: Vec<Rgb8, N>,
}

impl<const N: usize> PixelBuffer<N> {
    /// Reserves `count` pixels, all off.
    ///
    /// If `count` exceeds the capacity `N` the buffer is created empty
    /// (`len() == 0`) and every pixel operation becomes a no-op.
    pub fn allocate(count: u16) -> Self {
        let mut colors = Vec::new();
        if colors.resize(usize::from(count), OFF).is_err() {
            warn!("pixel buffer: {} pixels requested, capacity is {}", count, N);
            colors.clear();
        }
        Self { colors }
    }

    /// Number of addressable pixels.
    #[inline]
    pub fn len(&self) -> u16 {
        // allocate() never exceeds a u16 count
        self.colors.len() as u16
    }

    /// Returns true if the buffer holds no pixels (including the degraded state).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Maximum number of pixels this buffer type can hold.
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Sets a pixel from separate 8-bit components. Ignored if `index >= len()`.
    pub fn set_pixel(&mut self, index: u16, red: u8, green: u8, blue: u8) {
        self.set_pixel_srgb(index, Rgb8::new(red, green, blue));
    }

    /// Sets a pixel from a packed `0x00RRGGBB` value. Ignored if `index >= len()`.
    pub fn set_pixel_packed(&mut self, index: u16, rgb: u32) {
        self.set_pixel_srgb(index, color::unpack(rgb));
    }

    /// Sets a pixel from a color value. Ignored if `index >= len()`.
    pub fn set_pixel_srgb(&mut self, index: u16, color: Rgb8) {
        if let Some(slot) = self.colors.get_mut(usize::from(index)) {
            *slot = color;
        }
    }

    /// Returns the packed `0x00RRGGBB` color of a pixel, or `0` if `index >= len()`.
    pub fn get_pixel(&self, index: u16) -> u32 {
        self.pixel(index).map_or(0, color::pack)
    }

    /// Returns the color of a pixel, or `None` if `index >= len()`.
    pub fn pixel(&self, index: u16) -> Option<Rgb8> {
        self.colors.get(usize::from(index)).copied()
    }

    /// Turns every pixel off.
    pub fn clear(&mut self) {
        self.fill(OFF);
    }

    /// Sets every pixel to the same color.
    pub fn fill(&mut self, color: Rgb8) {
        for slot in self.colors.iter_mut() {
            *slot = color;
        }
    }

    /// Iterates over pixel colors in strip order.
    pub fn iter(&self) -> impl Iterator<Item = Rgb8> + '_ {
        self.colors.iter().copied()
    }

    /// Pixel colors as a slice, in strip order.
    pub fn as_slice(&self) -> &[Rgb8] {
        &self.colors
    }
}

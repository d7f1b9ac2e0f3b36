//! APA102 wire encoding.
//!
//! A frame is a start word, one word per LED, and an end word:
//!
//! ```text
//! 0x0000_0000                                   start frame
//! 111b bbbb  BBBB BBBB  GGGG GGGG  RRRR RRRR    one per LED, strip order
//! 0xFFFF_FFFF                                   end frame
//! ```
//!
//! `bbbbb` is the 5-bit global brightness. The LED chain decodes these exact
//! bit positions, so the layout must not change.

use crate::buffer::PixelBuffer;
use crate::color::Rgb8;

/// Word that opens a frame.
pub const START_FRAME: u32 = 0x0000_0000;

/// Word that closes a frame.
pub const END_FRAME: u32 = 0xFFFF_FFFF;

/// Fixed marker in the top three bits of every LED word.
pub const PIXEL_MARKER: u32 = 0b111 << 29;

/// Only the low 5 bits of the brightness reach the wire.
pub const BRIGHTNESS_MASK: u8 = 0x1F;

/// Encodes one LED word. Brightness bits above the low five are ignored.
#[inline]
pub const fn encode_pixel(brightness: u8, color: Rgb8) -> u32 {
    PIXEL_MARKER
        | ((brightness & BRIGHTNESS_MASK) as u32) << 24
        | (color.blue as u32) << 16
        | (color.green as u32) << 8
        | color.red as u32
}

/// Position of the encoder within a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameState {
    /// Nothing sent yet.
    Idle,
    /// Start word sent.
    StartFrame,
    /// Streaming LED words; holds the index of the next pixel to send.
    Streaming(u16),
    /// End word sent; the frame is complete.
    EndFrame,
}

/// Iterator over the words of one frame.
///
/// Yields exactly `buffer.len() + 2` words: [`START_FRAME`], one
/// [`encode_pixel`] word per pixel in index order, then [`END_FRAME`].
#[derive(Debug, Clone)]
pub struct FrameEncoder<'a, const N: usize> {
    buffer: &'a PixelBuffer<N>,
    brightness: u8,
    state: FrameState,
}

impl<'a, const N: usize> FrameEncoder<'a, N> {
    /// Creates an encoder positioned before the start word.
    pub fn new(buffer: &'a PixelBuffer<N>, brightness: u8) -> Self {
        Self {
            buffer,
            brightness,
            state: FrameState::Idle,
        }
    }

    /// Returns the current position within the frame.
    pub fn state(&self) -> FrameState {
        self.state
    }
}

impl<const N: usize> Iterator for FrameEncoder<'_, N> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let (word, next_state) = match self.state {
            FrameState::Idle => (START_FRAME, FrameState::StartFrame),
            FrameState::StartFrame => self.stream_from(0),
            FrameState::Streaming(index) => self.stream_from(index),
            FrameState::EndFrame => return None,
        };
        self.state = next_state;
        Some(word)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.buffer.len());
        let remaining = match self.state {
            FrameState::Idle => len + 2,
            FrameState::StartFrame => len + 1,
            FrameState::Streaming(index) => len - usize::from(index) + 1,
            FrameState::EndFrame => 0,
        };
        (remaining, Some(remaining))
    }
}

impl<const N: usize> ExactSizeIterator for FrameEncoder<'_, N> {}

impl<const N: usize> FrameEncoder<'_, N> {
    /// Emits the pixel at `index`, or the end word once the pixels run out.
    fn stream_from(&self, index: u16) -> (u32, FrameState) {
        match self.buffer.pixel(index) {
            Some(color) => (
                encode_pixel(self.brightness, color),
                FrameState::Streaming(index + 1),
            ),
            None => (END_FRAME, FrameState::EndFrame),
        }
    }
}

/// Returns the words of one frame for `buffer` at `brightness`.
pub fn frame_words<const N: usize>(
    buffer: &PixelBuffer<N>,
    brightness: u8,
) -> FrameEncoder<'_, N> {
    FrameEncoder::new(buffer, brightness)
}

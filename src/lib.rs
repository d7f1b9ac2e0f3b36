#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`PixelBuffer`**: Fixed-capacity array of per-LED colors with silent bounds handling
//! - **`Apa102`**: Owns a buffer and a serial channel; `show()` sends one full frame
//! - **`FrameEncoder`**: The start / per-pixel / end word sequence of one frame
//! - **`SerialChannel`**: Trait to implement for your clocked serial output (e.g. a PIO state machine)
//! - **`ChannelPool`**: Trait to implement for claiming free channel slots
//! - **`DelayNs`**: `embedded-hal` delay used for the blocking post-frame latch delay
//! - **`DriverConfig`**: Brightness, clock rate and settle time with defaults
//! - **`StripAction`**: Commands that can be sent to control a driver
//!
//! Pixels are stored as `Srgb<u8>`. Packed colors are always `0x00RRGGBB`,
//! regardless of the byte order used on the wire.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

// Settle delays are requested through the embedded-hal delay trait
pub use embedded_hal::delay::DelayNs;

#[macro_use]
mod fmt;

pub mod buffer;
pub mod channel;
pub mod color;
pub mod command;
pub mod config;
pub mod driver;
pub mod frame;
pub mod types;

pub use buffer::PixelBuffer;
pub use channel::{Acquisition, ChannelError, ChannelPool, SerialChannel, acquire_channel};
pub use color::{OFF, Rgb8};
pub use command::{PixelColor, StripAction};
pub use config::{
    DEFAULT_BRIGHTNESS, DEFAULT_FREQUENCY_HZ, DEFAULT_SETTLE_MS, DriverConfig, MAX_BRIGHTNESS,
};
pub use driver::{Apa102, DriverError};
pub use frame::{END_FRAME, FrameEncoder, FrameState, START_FRAME, encode_pixel, frame_words};
pub use types::{DriverState, PinPair};

//! APA102 strip driver with lifecycle and frame transmission.
//!
//! Provides [`Apa102`], which owns a pixel buffer and a serial channel and
//! pushes the buffer to the strip on every [`show`](Apa102::show).

use crate::buffer::PixelBuffer;
use crate::channel::{Acquisition, ChannelError, ChannelPool, SerialChannel, acquire_channel};
use crate::color::Rgb8;
use crate::command::StripAction;
use crate::config::DriverConfig;
use crate::frame::frame_words;
use crate::types::{DriverState, PinPair};
use embedded_hal::delay::DelayNs;

/// Errors that can occur during driver operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverError {
    /// Operation called from an invalid state.
    InvalidState {
        /// The state the operation requires
        expected: DriverState,
        /// The actual current state
        actual: DriverState,
    },
    /// Neither channel pool had a free slot.
    ChannelExhausted,
    /// The channel could not be configured.
    Channel(ChannelError),
}

impl core::fmt::Display for DriverError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DriverError::InvalidState { expected, actual } => {
                write!(
                    f,
                    "invalid state: expected {:?}, but driver is in {:?}",
                    expected, actual
                )
            }
            DriverError::ChannelExhausted => {
                write!(f, "no free serial channel available")
            }
            DriverError::Channel(err) => {
                write!(f, "channel error: {}", err)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DriverError {}

impl From<ChannelError> for DriverError {
    fn from(err: ChannelError) -> Self {
        DriverError::Channel(err)
    }
}

/// Drives an APA102 strip through an exclusively owned serial channel.
///
/// Every [`show`](Self::show) sends the whole buffer: a start word, one word
/// per pixel, an end word, then waits for the configured settle time. The
/// call blocks until all of that is done. There is no dirty tracking.
///
/// The channel is released when the driver is dropped.
///
/// # Type Parameters
/// * `C` - Serial channel implementation type
/// * `D` - Delay implementation type (any `embedded_hal::delay::DelayNs`)
/// * `N` - Maximum number of pixels
pub struct Apa102<C: SerialChannel, D: DelayNs, const N: usize> {
    channel: C,
    delay: D,
    pins: PinPair,
    config: DriverConfig,
    state: DriverState,
    pixels: PixelBuffer<N>,
}

impl<C: SerialChannel, D: DelayNs, const N: usize> Apa102<C, D, N> {
    /// Creates a driver for `count` pixels on an already claimed channel.
    ///
    /// If `count` exceeds `N` the driver is still created but holds no
    /// pixels; check [`num_pixels`](Self::num_pixels).
    pub fn new(count: u16, pins: PinPair, channel: C, delay: D, config: DriverConfig) -> Self {
        Self {
            channel,
            delay,
            pins,
            config,
            state: DriverState::Created,
            pixels: PixelBuffer::allocate(count),
        }
    }

    /// Creates a driver on the first free channel of `primary`, else `secondary`.
    ///
    /// # Returns
    /// * `Ok(driver)` - A channel was claimed
    /// * `Err(DriverError::ChannelExhausted)` - Both pools were full
    pub fn from_pools<P, S>(
        count: u16,
        pins: PinPair,
        primary: &mut P,
        secondary: &mut S,
        delay: D,
        config: DriverConfig,
    ) -> Result<Self, DriverError>
    where
        P: ChannelPool<Channel = C>,
        S: ChannelPool<Channel = C>,
    {
        match acquire_channel(primary, secondary) {
            Acquisition::Acquired(channel) => Ok(Self::new(count, pins, channel, delay, config)),
            Acquisition::Exhausted => Err(DriverError::ChannelExhausted),
        }
    }

    /// Configures the channel for the pin pair and clock rate.
    ///
    /// Must be called once, from `Created` state, before the first `show()`.
    /// On a channel error the driver stays in `Created` and `begin()` may be
    /// retried.
    pub fn begin(&mut self) -> Result<(), DriverError> {
        if self.state != DriverState::Created {
            return Err(DriverError::InvalidState {
                expected: DriverState::Created,
                actual: self.state,
            });
        }

        debug!(
            "apa102: configuring data={} clock={} at {} Hz",
            self.pins.data, self.pins.clock, self.config.frequency_hz
        );
        self.channel.configure(self.pins, self.config.frequency_hz)?;
        self.state = DriverState::Ready;
        Ok(())
    }

    /// Sends the buffer to the strip and waits for it to latch.
    ///
    /// Must be called from `Ready` state.
    pub fn show(&mut self) -> Result<(), DriverError> {
        if self.state != DriverState::Ready {
            return Err(DriverError::InvalidState {
                expected: DriverState::Ready,
                actual: self.state,
            });
        }

        trace!("apa102: sending {} pixels", self.pixels.len());
        for word in frame_words(&self.pixels, self.config.brightness) {
            self.channel.send_blocking(word);
        }
        self.delay.delay_ms(self.config.settle_ms);
        Ok(())
    }

    /// Handles a strip action by dispatching to the appropriate method.
    ///
    /// Only [`StripAction::Show`] can fail.
    pub fn handle_action(&mut self, action: StripAction) -> Result<(), DriverError> {
        match action {
            StripAction::SetPixel { index, color } => {
                self.pixels.set_pixel_srgb(index, color.to_rgb8());
            }
            StripAction::Fill(color) => self.pixels.fill(color.to_rgb8()),
            StripAction::Clear => self.pixels.clear(),
            StripAction::SetBrightness(brightness) => self.set_brightness(brightness),
            StripAction::Show => return self.show(),
        }
        Ok(())
    }

    /// Number of pixels; `0` if the buffer could not be allocated.
    pub fn num_pixels(&self) -> u16 {
        self.pixels.len()
    }

    /// Sets a pixel from separate components. Ignored if out of range.
    pub fn set_pixel_color(&mut self, index: u16, red: u8, green: u8, blue: u8) {
        self.pixels.set_pixel(index, red, green, blue);
    }

    /// Sets a pixel from a packed `0x00RRGGBB` value. Ignored if out of range.
    pub fn set_pixel_color_packed(&mut self, index: u16, rgb: u32) {
        self.pixels.set_pixel_packed(index, rgb);
    }

    /// Sets a pixel from a color value. Ignored if out of range.
    pub fn set_pixel_srgb(&mut self, index: u16, color: Rgb8) {
        self.pixels.set_pixel_srgb(index, color);
    }

    /// Returns a pixel as packed `0x00RRGGBB`, or `0` if out of range.
    pub fn get_pixel_color(&self, index: u16) -> u32 {
        self.pixels.get_pixel(index)
    }

    /// Turns every pixel off. Takes effect on the next `show()`.
    pub fn clear(&mut self) {
        self.pixels.clear();
    }

    /// Returns the global brightness as stored (may exceed 31).
    pub fn brightness(&self) -> u8 {
        self.config.brightness
    }

    /// Sets the global brightness. Only the low 5 bits are transmitted.
    pub fn set_brightness(&mut self, brightness: u8) {
        self.config.brightness = brightness;
    }

    /// Returns the lifecycle state.
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Returns the pin pair the strip is wired to.
    pub fn pins(&self) -> PinPair {
        self.pins
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Returns the pixel buffer.
    pub fn pixels(&self) -> &PixelBuffer<N> {
        &self.pixels
    }

    /// Returns the pixel buffer for direct mutation.
    pub fn pixels_mut(&mut self) -> &mut PixelBuffer<N> {
        &mut self.pixels
    }
}

impl<C: SerialChannel, D: DelayNs, const N: usize> Drop for Apa102<C, D, N> {
    fn drop(&mut self) {
        self.channel.release();
    }
}

//! Driver configuration with documented defaults.

/// Brightness used when none is configured (mid-scale of 0-31).
pub const DEFAULT_BRIGHTNESS: u8 = 16;

/// Highest brightness the wire format can carry.
pub const MAX_BRIGHTNESS: u8 = 31;

/// Serial clock rate used by `begin()` when none is configured.
pub const DEFAULT_FREQUENCY_HZ: u32 = 5_000_000;

/// Latch time requested after every frame when none is configured.
///
/// Shorter values cause visible flicker on real strips.
pub const DEFAULT_SETTLE_MS: u32 = 10;

/// Tunable parameters of an [`Apa102`](crate::Apa102) driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DriverConfig {
    /// Global brightness. Only the low 5 bits are sent; values above
    /// [`MAX_BRIGHTNESS`] are accepted and masked when encoding.
    pub brightness: u8,

    /// Serial clock rate in Hz.
    pub frequency_hz: u32,

    /// Delay after the end frame, in milliseconds.
    pub settle_ms: u32,
}

impl DriverConfig {
    /// Creates a configuration with the default values.
    pub const fn new() -> Self {
        Self {
            brightness: DEFAULT_BRIGHTNESS,
            frequency_hz: DEFAULT_FREQUENCY_HZ,
            settle_ms: DEFAULT_SETTLE_MS,
        }
    }

    /// Sets the global brightness.
    pub const fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }

    /// Sets the serial clock rate.
    pub const fn with_frequency_hz(mut self, frequency_hz: u32) -> Self {
        self.frequency_hz = frequency_hz;
        self
    }

    /// Sets the post-frame settle delay.
    pub const fn with_settle_ms(mut self, settle_ms: u32) -> Self {
        self.settle_ms = settle_ms;
        self
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_timing() {
        let config = DriverConfig::default();
        assert_eq!(config.brightness, 16);
        assert_eq!(config.frequency_hz, 5_000_000);
        assert_eq!(config.settle_ms, 10);
    }

    #[test]
    fn builder_overrides_single_field() {
        let config = DriverConfig::new().with_brightness(31).with_settle_ms(20);
        assert_eq!(config.brightness, 31);
        assert_eq!(config.settle_ms, 20);
        assert_eq!(config.frequency_hz, DEFAULT_FREQUENCY_HZ);
    }
}

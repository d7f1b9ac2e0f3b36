//! Core types shared by the channel and driver layers.

/// The data/clock pin pair a strip is wired to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinPair {
    /// Data (MOSI) pin number.
    pub data: u8,

    /// Clock (SCK) pin number.
    pub clock: u8,
}

impl PinPair {
    /// Creates a pin pair.
    #[inline]
    pub const fn new(data: u8, clock: u8) -> Self {
        Self { data, clock }
    }
}

/// Lifecycle state of a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverState {
    /// Channel held but not yet configured. `show()` is rejected.
    Created,

    /// Channel configured by `begin()`; frames can be sent.
    Ready,
}

//! Serial output channel abstraction and acquisition policy.
//!
//! A channel is one slot of a clocked serial engine (on the RP2040, a PIO
//! state machine) that shifts 32-bit words out on a data/clock pin pair.
//! Channels come from a [`ChannelPool`]; [`acquire_channel`] tries a primary
//! pool first and falls back to a secondary one.

use crate::types::PinPair;

/// Trait for abstracting a clocked serial output slot.
///
/// Implement this for your hardware (PIO state machine, bit-banged GPIO,
/// SPI peripheral, ...). The driver holds the channel exclusively and calls
/// [`release`](SerialChannel::release) when it is dropped.
pub trait SerialChannel {
    /// Loads the shifting program and configures the clock rate and pins.
    fn configure(&mut self, pins: PinPair, frequency_hz: u32) -> Result<(), ChannelError>;

    /// Queues one word for transmission, MSB first.
    ///
    /// Blocks until the channel has room. There is no timeout; a stalled
    /// channel stalls the caller.
    fn send_blocking(&mut self, word: u32);

    /// Returns the slot to its pool. Called once, when the owner is dropped.
    fn release(&mut self);
}

/// Outcome of probing a pool for a free channel.
#[derive(Debug)]
pub enum Acquisition<C> {
    /// A free slot was claimed.
    Acquired(C),

    /// Every slot in the pool is in use.
    Exhausted,
}

impl<C> Acquisition<C> {
    /// Converts into an `Option`, discarding the exhaustion marker.
    pub fn ok(self) -> Option<C> {
        match self {
            Acquisition::Acquired(channel) => Some(channel),
            Acquisition::Exhausted => None,
        }
    }
}

/// Trait for a group of channel slots that can be claimed.
pub trait ChannelPool {
    /// The channel type handed out by this pool.
    type Channel: SerialChannel;

    /// Claims an unused slot without blocking or panicking.
    fn try_claim(&mut self) -> Acquisition<Self::Channel>;
}

/// Errors reported by a channel while configuring it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelError {
    /// No instruction memory left to load the shifting program.
    ProgramSpaceFull,

    /// The pins cannot be routed to this channel.
    InvalidPins(PinPair),

    /// The clock rate cannot be derived from the system clock.
    UnsupportedFrequency(u32),
}

impl core::fmt::Display for ChannelError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ChannelError::ProgramSpaceFull => {
                write!(f, "no program space left on the serial engine")
            }
            ChannelError::InvalidPins(pins) => {
                write!(
                    f,
                    "pins data={} clock={} cannot be used by this channel",
                    pins.data, pins.clock
                )
            }
            ChannelError::UnsupportedFrequency(hz) => {
                write!(f, "clock rate of {} Hz is not supported", hz)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ChannelError {}

/// Claims a channel from `primary`, falling back to `secondary`.
///
/// Both pools are probed without panicking. Returns
/// [`Acquisition::Exhausted`] only if both are exhausted; the driver surfaces
/// that as [`DriverError::ChannelExhausted`](crate::DriverError::ChannelExhausted).
///
/// Both pools must hand out the same channel type. HALs that give each
/// engine's slots a distinct type (e.g. `rp2040-hal` state machines on PIO0
/// and PIO1) need a wrapper enum implementing [`SerialChannel`] over both,
/// with each pool returning its own variant.
pub fn acquire_channel<P, S>(primary: &mut P, secondary: &mut S) -> Acquisition<P::Channel>
where
    P: ChannelPool,
    S: ChannelPool<Channel = P::Channel>,
{
    if let Acquisition::Acquired(channel) = primary.try_claim() {
        return Acquisition::Acquired(channel);
    }

    debug!("primary channel pool exhausted, trying secondary");
    let acquisition = secondary.try_claim();
    if matches!(acquisition, Acquisition::Exhausted) {
        warn!("no free channel in either pool");
    }
    acquisition
}

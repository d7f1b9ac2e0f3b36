//! Shared test infrastructure for apa102-pio integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use apa102_pio::{Acquisition, ChannelError, ChannelPool, PinPair, SerialChannel};
use core::cell::{Cell, RefCell};
use embedded_hal::delay::DelayNs;
use heapless::Vec;

// ============================================================================
// Hardware Event Log
// ============================================================================

/// Something the driver did to the mock hardware
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Configure { pool: u8, pins: PinPair, frequency_hz: u32 },
    Word { pool: u8, word: u32 },
    Delay(u32),
    DelayNs(u32),
    Release { pool: u8 },
}

/// Records hardware events in call order
pub struct HardwareLog {
    events: RefCell<Vec<Event, 128>>,
    configure_error: Cell<Option<ChannelError>>,
}

impl HardwareLog {
    pub fn new() -> Self {
        Self {
            events: RefCell::new(Vec::new()),
            configure_error: Cell::new(None),
        }
    }

    /// Makes the next `configure()` call fail with `err`
    pub fn fail_next_configure(&self, err: ChannelError) {
        self.configure_error.set(Some(err));
    }

    pub fn events(&self) -> Vec<Event, 128> {
        self.events.borrow().clone()
    }

    /// Only the words sent to the channel, in order
    pub fn words(&self) -> Vec<u32, 128> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::Word { word, .. } => Some(*word),
                _ => None,
            })
            .collect()
    }

    /// Only the requested delays, in order
    pub fn delays(&self) -> Vec<u32, 128> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::Delay(ms) => Some(*ms),
                _ => None,
            })
            .collect()
    }

    pub fn released(&self) -> bool {
        self.events
            .borrow()
            .iter()
            .any(|event| matches!(event, Event::Release { .. }))
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    fn record(&self, event: Event) {
        let _ = self.events.borrow_mut().push(event);
    }
}

// ============================================================================
// Mock Channel
// ============================================================================

/// Mock serial channel that records everything into a shared log
pub struct RecordingChannel<'a> {
    pool: u8,
    log: &'a HardwareLog,
}

impl<'a> RecordingChannel<'a> {
    pub fn new(log: &'a HardwareLog) -> Self {
        Self { pool: 0, log }
    }

    pub fn pool(&self) -> u8 {
        self.pool
    }
}

impl SerialChannel for RecordingChannel<'_> {
    fn configure(&mut self, pins: PinPair, frequency_hz: u32) -> Result<(), ChannelError> {
        if let Some(err) = self.log.configure_error.take() {
            return Err(err);
        }
        self.log.record(Event::Configure {
            pool: self.pool,
            pins,
            frequency_hz,
        });
        Ok(())
    }

    fn send_blocking(&mut self, word: u32) {
        self.log.record(Event::Word {
            pool: self.pool,
            word,
        });
    }

    fn release(&mut self) {
        self.log.record(Event::Release { pool: self.pool });
    }
}

// ============================================================================
// Mock Pool
// ============================================================================

/// Mock channel pool with a fixed number of free slots
pub struct MockPool<'a> {
    id: u8,
    free: usize,
    log: &'a HardwareLog,
}

impl<'a> MockPool<'a> {
    pub fn new(id: u8, free: usize, log: &'a HardwareLog) -> Self {
        Self { id, free, log }
    }

    pub fn free(&self) -> usize {
        self.free
    }
}

impl<'a> ChannelPool for MockPool<'a> {
    type Channel = RecordingChannel<'a>;

    fn try_claim(&mut self) -> Acquisition<RecordingChannel<'a>> {
        if self.free == 0 {
            return Acquisition::Exhausted;
        }
        self.free -= 1;
        Acquisition::Acquired(RecordingChannel {
            pool: self.id,
            log: self.log,
        })
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

/// Mock delay that records requests instead of sleeping
pub struct MockDelay<'a> {
    log: &'a HardwareLog,
}

impl<'a> MockDelay<'a> {
    pub fn new(log: &'a HardwareLog) -> Self {
        Self { log }
    }
}

impl DelayNs for MockDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.log.record(Event::DelayNs(ns));
    }

    fn delay_ms(&mut self, millis: u32) {
        self.log.record(Event::Delay(millis));
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub const PINS: PinPair = PinPair::new(3, 2);

pub type TestStrip<'a, const N: usize> = apa102_pio::Apa102<RecordingChannel<'a>, MockDelay<'a>, N>;

/// Builds a driver on a recording channel with default configuration
pub fn strip<const N: usize>(log: &HardwareLog, count: u16) -> TestStrip<'_, N> {
    apa102_pio::Apa102::new(
        count,
        PINS,
        RecordingChannel::new(log),
        MockDelay::new(log),
        apa102_pio::DriverConfig::default(),
    )
}

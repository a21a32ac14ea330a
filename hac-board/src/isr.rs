//! Interrupt handler slots and CPU-busy accounting
//!
//! The background context registers a handler before interrupts are
//! enabled; the interrupt entry only reads the slot. The slot is swapped
//! inside a critical section so the entry never sees a half-written
//! handler, and the busy figures are plain atomics.

use core::cell::Cell;

use critical_section::Mutex;
use portable_atomic::{AtomicBool, AtomicU32, Ordering};

/// Work done in interrupt context
///
/// The handler owns whatever context it needs. State it shares with the
/// background loop must be interior-mutable (atomics, `critical_section`
/// mutexes).
pub trait Handler {
    fn run(&self);
}

impl<F: Fn()> Handler for F {
    fn run(&self) {
        self()
    }
}

/// One interrupt path
pub struct IsrSlot<'h> {
    handler: Mutex<Cell<Option<&'h dyn Handler>>>,
    enabled: AtomicBool,
}

impl<'h> IsrSlot<'h> {
    pub const fn new() -> Self {
        Self {
            handler: Mutex::new(Cell::new(None)),
            enabled: AtomicBool::new(false),
        }
    }

    /// Install `handler`, replacing any previous one
    pub fn register(&self, handler: &'h dyn Handler) {
        critical_section::with(|cs| self.handler.borrow(cs).set(Some(handler)));
    }

    /// Remove the handler
    pub fn unregister(&self) {
        critical_section::with(|cs| self.handler.borrow(cs).set(None));
        self.enabled.store(false, Ordering::Release);
    }

    pub fn handler(&self) -> Option<&'h dyn Handler> {
        critical_section::with(|cs| self.handler.borrow(cs).get())
    }

    pub fn is_registered(&self) -> bool {
        self.handler().is_some()
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Release);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }
}

impl Default for IsrSlot<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Stopwatch ticks spent in the interrupt entry
#[derive(Debug, Default)]
pub struct BusyMeter {
    last: AtomicU32,
    peak: AtomicU32,
    runs: AtomicU32,
}

impl BusyMeter {
    pub const fn new() -> Self {
        Self {
            last: AtomicU32::new(0),
            peak: AtomicU32::new(0),
            runs: AtomicU32::new(0),
        }
    }

    /// Record one pass through the entry
    pub fn record(&self, ticks: u32) {
        self.last.store(ticks, Ordering::Relaxed);
        self.peak.fetch_max(ticks, Ordering::Relaxed);
        self.runs.fetch_add(1, Ordering::Relaxed);
    }

    /// Ticks of the most recent pass
    pub fn last(&self) -> u32 {
        self.last.load(Ordering::Relaxed)
    }

    /// Longest pass since the last [`BusyMeter::reset_peak`]
    pub fn peak(&self) -> u32 {
        self.peak.load(Ordering::Relaxed)
    }

    pub fn runs(&self) -> u32 {
        self.runs.load(Ordering::Relaxed)
    }

    pub fn reset_peak(&self) {
        self.peak.store(0, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_swaps_handler() {
        let hits = AtomicU32::new(0);
        let count = || {
            hits.fetch_add(1, Ordering::Relaxed);
        };
        let other = || {
            hits.fetch_add(10, Ordering::Relaxed);
        };

        let slot = IsrSlot::new();
        assert!(!slot.is_registered());
        slot.register(&count);
        slot.handler().unwrap().run();
        slot.register(&other);
        slot.handler().unwrap().run();
        assert_eq!(hits.load(Ordering::Relaxed), 11);

        slot.set_enabled(true);
        slot.unregister();
        assert!(slot.handler().is_none());
        assert!(!slot.is_enabled());
    }

    #[test]
    fn test_busy_meter_keeps_peak() {
        let meter = BusyMeter::new();
        meter.record(12);
        meter.record(40);
        meter.record(8);
        assert_eq!(meter.last(), 8);
        assert_eq!(meter.peak(), 40);
        assert_eq!(meter.runs(), 3);
        meter.reset_peak();
        assert_eq!(meter.peak(), 0);
    }
}

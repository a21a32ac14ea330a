//! CPU timer port
//!
//! The C28x CPU has three 32-bit down-counting timers. Timer 2 can be
//! clocked from the crystal instead of SYSCLK, which the clock driver uses
//! to measure the crystal frequency.

/// Number of CPU timers
pub const CPU_TIMER_COUNT: usize = 3;

/// Timer clock source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerClock {
    /// System clock (default)
    SysClk,
    /// External crystal (timer 2 only)
    Xtal,
}

/// CPU timer port
pub trait CpuTimers {
    /// Stop, load and restart a timer
    ///
    /// # Arguments
    /// * `index` - Timer index (0..2)
    /// * `period` - Reload value; the timer counts `period + 1` ticks
    /// * `clock` - Clock source
    fn start(&self, index: u8, period: u32, clock: TimerClock);

    /// Stop a timer
    fn stop(&self, index: u8);

    /// Current counter value (counts down from the period)
    fn counter(&self, index: u8) -> u32;

    /// Read and clear the overflow flag
    fn take_overflow(&self, index: u8) -> bool;
}

//! CPU timer pool
//!
//! The three 32-bit CPU timers are handed out by token. The HAL takes one
//! as a free-running [`Stopwatch`] and one as the 1 kHz [`Tick`]; the third
//! stays available to the application.

use hac_core::{debug, Error};
use hac_hal::timer::{CpuTimers, TimerClock, CPU_TIMER_COUNT};

/// Allocated CPU timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerId(u8);

impl TimerId {
    pub fn index(self) -> u8 {
        self.0
    }
}

/// Reload value for a timer firing at `freq` Hz
///
/// A frequency of zero gives the maximum period (free-running).
pub const fn period_for(cpu_hz: u32, freq: u32) -> u32 {
    if freq > 0 {
        (cpu_hz / freq).saturating_sub(1)
    } else {
        u32::MAX
    }
}

/// Ticks elapsed between two readings of a down-counter
///
/// Correct across one wrap of a full 32-bit period.
pub const fn elapsed(start: u32, now: u32) -> u32 {
    start.wrapping_sub(now)
}

/// CPU timer allocator
pub struct Timers<'p, T: CpuTimers> {
    port: &'p T,
    cpu_hz: u32,
    taken: [bool; CPU_TIMER_COUNT],
}

impl<'p, T: CpuTimers> Timers<'p, T> {
    pub fn new(port: &'p T, cpu_hz: u32) -> Self {
        Self {
            port,
            cpu_hz,
            taken: [false; CPU_TIMER_COUNT],
        }
    }

    /// Allocate the first free timer and start it at `freq` Hz
    ///
    /// # Returns
    /// The timer token, or `Unavailable` when all timers are taken.
    pub fn setup(&mut self, freq: u32) -> Result<TimerId, Error> {
        let index = self
            .taken
            .iter()
            .position(|t| !*t)
            .ok_or(Error::Unavailable)?;
        self.taken[index] = true;

        let id = TimerId(index as u8);
        let period = period_for(self.cpu_hz, freq);
        self.port.stop(id.0);
        self.port.start(id.0, period, TimerClock::SysClk);
        debug!("Timer {} started, period {}", id.0, period);
        Ok(id)
    }

    /// Stop a timer and return it to the pool
    pub fn free(&mut self, id: TimerId) {
        self.port.stop(id.0);
        self.taken[usize::from(id.0)] = false;
    }

    /// Read and clear the overflow flag
    pub fn status(&self, id: TimerId) -> bool {
        self.port.take_overflow(id.0)
    }

    /// Current counter value
    pub fn state(&self, id: TimerId) -> u32 {
        self.port.counter(id.0)
    }

    pub fn is_free(&self, index: u8) -> bool {
        !self.taken[usize::from(index)]
    }

    /// Allocate a free-running stopwatch
    pub fn stopwatch(&mut self) -> Result<Stopwatch<'p, T>, Error> {
        let id = self.setup(0)?;
        Ok(Stopwatch {
            port: self.port,
            id,
        })
    }

    /// Allocate a tick source firing at `hz`
    pub fn tick(&mut self, hz: u32) -> Result<Tick<'p, T>, Error> {
        if hz == 0 || hz > self.cpu_hz {
            return Err(Error::Range);
        }
        let id = self.setup(hz)?;
        Ok(Tick {
            port: self.port,
            id,
            hz,
        })
    }
}

/// Free-running stopwatch in SYSCLK ticks
///
/// Readable from both the background loop and the ISR; reading has no side
/// effect.
pub struct Stopwatch<'p, T: CpuTimers> {
    port: &'p T,
    id: TimerId,
}

impl<T: CpuTimers> Clone for Stopwatch<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: CpuTimers> Copy for Stopwatch<'_, T> {}

impl<T: CpuTimers> Stopwatch<'_, T> {
    /// Start of a measured section
    pub fn tic(&self) -> u32 {
        self.port.counter(self.id.0)
    }

    /// Ticks since `tic`
    pub fn toc(&self, tic: u32) -> u32 {
        elapsed(tic, self.port.counter(self.id.0))
    }

    pub fn id(&self) -> TimerId {
        self.id
    }
}

/// Periodic tick
pub struct Tick<'p, T: CpuTimers> {
    port: &'p T,
    id: TimerId,
    hz: u32,
}

impl<T: CpuTimers> Clone for Tick<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: CpuTimers> Copy for Tick<'_, T> {}

impl<T: CpuTimers> Tick<'_, T> {
    /// True once per period boundary
    pub fn fired(&self) -> bool {
        self.port.take_overflow(self.id.0)
    }

    pub fn hz(&self) -> u32 {
        self.hz
    }

    pub fn id(&self) -> TimerId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use proptest::prelude::*;

    /// Down-counter that the test positions directly
    struct MockTimers {
        counter: Cell<u32>,
        overflow: Cell<bool>,
        started: Cell<[Option<u32>; CPU_TIMER_COUNT]>,
    }

    impl MockTimers {
        fn new() -> Self {
            Self {
                counter: Cell::new(u32::MAX),
                overflow: Cell::new(false),
                started: Cell::new([None; CPU_TIMER_COUNT]),
            }
        }
    }

    impl CpuTimers for MockTimers {
        fn start(&self, index: u8, period: u32, _clock: TimerClock) {
            let mut s = self.started.get();
            s[usize::from(index)] = Some(period);
            self.started.set(s);
        }

        fn stop(&self, index: u8) {
            let mut s = self.started.get();
            s[usize::from(index)] = None;
            self.started.set(s);
        }

        fn counter(&self, _index: u8) -> u32 {
            self.counter.get()
        }

        fn take_overflow(&self, _index: u8) -> bool {
            self.overflow.replace(false)
        }
    }

    #[test]
    fn test_allocates_first_free_timer() {
        let port = MockTimers::new();
        let mut timers = Timers::new(&port, 100_000_000);
        let a = timers.setup(1000).unwrap();
        let b = timers.setup(0).unwrap();
        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(port.started.get()[0], Some(99_999));
        assert_eq!(port.started.get()[1], Some(u32::MAX));

        timers.free(a);
        assert!(timers.is_free(0));
        assert_eq!(port.started.get()[0], None);
        assert_eq!(timers.setup(10).unwrap().index(), 0);
    }

    #[test]
    fn test_pool_exhaustion() {
        let port = MockTimers::new();
        let mut timers = Timers::new(&port, 100_000_000);
        for _ in 0..CPU_TIMER_COUNT {
            timers.setup(0).unwrap();
        }
        assert_eq!(timers.setup(0), Err(Error::Unavailable));
    }

    #[test]
    fn test_tick_reports_overflow_once() {
        let port = MockTimers::new();
        let mut timers = Timers::new(&port, 100_000_000);
        let tick = timers.tick(1000).unwrap();
        assert!(!tick.fired());
        port.overflow.set(true);
        assert!(tick.fired());
        assert!(!tick.fired());
        assert_eq!(timers.tick(0).err(), Some(Error::Range));
    }

    #[test]
    fn test_stopwatch_across_wrap() {
        let port = MockTimers::new();
        let mut timers = Timers::new(&port, 100_000_000);
        let sw = timers.stopwatch().unwrap();
        port.counter.set(5);
        let t = sw.tic();
        port.counter.set(u32::MAX - 4);
        assert_eq!(sw.toc(t), 10);
    }

    #[test]
    fn test_period_for() {
        assert_eq!(period_for(100_000_000, 1000), 99_999);
        assert_eq!(period_for(100_000_000, 0), u32::MAX);
        assert_eq!(period_for(100, 1000), 0);
    }

    proptest! {
        #[test]
        fn prop_toc_matches_elapsed_ticks(start in any::<u32>(), ticks in any::<u32>()) {
            // A down-counter with full period moves from `start` to `start - ticks`
            let now = start.wrapping_sub(ticks);
            prop_assert_eq!(elapsed(start, now), ticks);
        }
    }
}

//! Simulated time base, system control and CPU timers
//!
//! Time only moves when the code under test looks at it: every timer poll
//! costs [`POLL_CYCLES`] and `delay_cycles` advances by the requested
//! amount. Busy-wait loops therefore terminate deterministically.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use hac_hal::sysctl::{ClockSource, Peripheral};
use hac_hal::timer::{TimerClock, CPU_TIMER_COUNT};
use hac_hal::{CpuTimers, Eallow, SysCtl};

/// CPU cycles consumed by one register poll
pub const POLL_CYCLES: u64 = 4;

/// Internal oscillator frequency
pub const INTOSC_HZ: u32 = 10_000_000;

/// Shared simulated time
#[derive(Debug)]
pub struct SimClock {
    cycles: Cell<u64>,
    nanos: Cell<u64>,
    sysclk_hz: Cell<u32>,
    xtal_hz: Cell<u32>,
}

impl SimClock {
    pub fn new(xtal_hz: u32) -> Rc<Self> {
        Rc::new(Self {
            cycles: Cell::new(0),
            nanos: Cell::new(0),
            sysclk_hz: Cell::new(INTOSC_HZ),
            xtal_hz: Cell::new(xtal_hz),
        })
    }

    /// CPU cycles since power-up
    pub fn now(&self) -> u64 {
        self.cycles.get()
    }

    pub fn advance(&self, cycles: u64) {
        self.cycles.set(self.cycles.get().wrapping_add(cycles));
        let hz = u64::from(self.sysclk_hz.get().max(1));
        self.nanos.set(self.nanos.get() + cycles * 1_000_000_000 / hz);
    }

    pub fn sysclk_hz(&self) -> u32 {
        self.sysclk_hz.get()
    }

    pub fn xtal_hz(&self) -> u32 {
        self.xtal_hz.get()
    }

    /// Microseconds since power-up, independent of clock changes
    pub fn now_us(&self) -> u64 {
        self.nanos.get() / 1000
    }

    fn set_sysclk(&self, hz: u32) {
        self.sysclk_hz.set(hz);
    }
}

/// Recorded PLL request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PllRequest {
    pub source: ClockSource,
    pub input_hz: u32,
    pub output_hz: u32,
    pub locked: bool,
}

/// Simulated system control block
#[derive(Debug)]
pub struct SimSysCtl {
    clock: Rc<SimClock>,
    wait_states: Cell<Option<(u8, u8, u8)>>,
    pll: RefCell<Vec<PllRequest>>,
    pll_failures: Cell<u32>,
    enabled: RefCell<Vec<Peripheral>>,
    resets: RefCell<Vec<Peripheral>>,
    tbclk_sync: Cell<bool>,
}

impl SimSysCtl {
    pub fn new(clock: Rc<SimClock>) -> Self {
        Self {
            clock,
            wait_states: Cell::new(None),
            pll: RefCell::new(Vec::new()),
            pll_failures: Cell::new(0),
            enabled: RefCell::new(Vec::new()),
            resets: RefCell::new(Vec::new()),
            tbclk_sync: Cell::new(false),
        }
    }

    /// Make the next `count` PLL requests fail to lock
    pub fn fail_pll(&self, count: u32) {
        self.pll_failures.set(count);
    }

    pub fn wait_states(&self) -> Option<(u8, u8, u8)> {
        self.wait_states.get()
    }

    pub fn pll_requests(&self) -> Vec<PllRequest> {
        self.pll.borrow().clone()
    }

    pub fn is_enabled(&self, periph: Peripheral) -> bool {
        self.enabled.borrow().contains(&periph)
    }

    pub fn reset_count(&self, periph: Peripheral) -> usize {
        self.resets.borrow().iter().filter(|p| **p == periph).count()
    }

    pub fn tbclk_sync(&self) -> bool {
        self.tbclk_sync.get()
    }
}

impl SysCtl for SimSysCtl {
    fn set_flash_wait_states(&self, _ep: &Eallow<'_>, paged: u8, random: u8, otp: u8) {
        self.wait_states.set(Some((paged, random, otp)));
    }

    fn set_pll(
        &self,
        _ep: &Eallow<'_>,
        source: ClockSource,
        input_hz: u32,
        output_hz: u32,
    ) -> bool {
        let reference = match source {
            ClockSource::Internal => INTOSC_HZ,
            ClockSource::Xtal => self.clock.xtal_hz(),
        };
        let mut locked = reference == input_hz && output_hz > 0;
        if self.pll_failures.get() > 0 {
            self.pll_failures.set(self.pll_failures.get() - 1);
            locked = false;
        }
        if locked {
            self.clock.set_sysclk(output_hz);
        }
        self.pll.borrow_mut().push(PllRequest {
            source,
            input_hz,
            output_hz,
            locked,
        });
        self.clock.advance(1000);
        locked
    }

    fn enable_peripheral(&self, _ep: &Eallow<'_>, periph: Peripheral) {
        let mut enabled = self.enabled.borrow_mut();
        if !enabled.contains(&periph) {
            enabled.push(periph);
        }
    }

    fn disable_peripheral(&self, _ep: &Eallow<'_>, periph: Peripheral) {
        self.enabled.borrow_mut().retain(|p| *p != periph);
    }

    fn reset_peripheral(&self, _ep: &Eallow<'_>, periph: Peripheral) {
        self.resets.borrow_mut().push(periph);
    }

    fn set_tbclk_sync(&self, _ep: &Eallow<'_>, enabled: bool) {
        self.tbclk_sync.set(enabled);
    }

    fn delay_cycles(&self, cycles: u32) {
        self.clock.advance(u64::from(cycles));
    }
}

#[derive(Debug, Clone, Copy)]
struct TimerState {
    running: bool,
    period: u32,
    clock: TimerClock,
    started: u64,
    wraps_taken: u64,
    stopped_at: u32,
}

impl TimerState {
    const IDLE: Self = Self {
        running: false,
        period: u32::MAX,
        clock: TimerClock::SysClk,
        started: 0,
        wraps_taken: 0,
        stopped_at: u32::MAX,
    };
}

/// Simulated CPU timers
#[derive(Debug)]
pub struct SimTimers {
    clock: Rc<SimClock>,
    timers: RefCell<[TimerState; CPU_TIMER_COUNT]>,
}

impl SimTimers {
    pub fn new(clock: Rc<SimClock>) -> Self {
        Self {
            clock,
            timers: RefCell::new([TimerState::IDLE; CPU_TIMER_COUNT]),
        }
    }

    pub fn is_running(&self, index: u8) -> bool {
        self.timers.borrow()[usize::from(index)].running
    }

    pub fn period(&self, index: u8) -> u32 {
        self.timers.borrow()[usize::from(index)].period
    }

    /// Timer input ticks since the timer was started
    fn ticks(&self, t: &TimerState) -> u64 {
        let cycles = self.clock.now().saturating_sub(t.started);
        match t.clock {
            TimerClock::SysClk => cycles,
            TimerClock::Xtal => {
                let num = u128::from(cycles) * u128::from(self.clock.xtal_hz());
                (num / u128::from(self.clock.sysclk_hz().max(1))) as u64
            }
        }
    }
}

impl CpuTimers for SimTimers {
    fn start(&self, index: u8, period: u32, clock: TimerClock) {
        let now = self.clock.now();
        self.timers.borrow_mut()[usize::from(index)] = TimerState {
            running: true,
            period,
            clock,
            started: now,
            wraps_taken: 0,
            stopped_at: period,
        };
    }

    fn stop(&self, index: u8) {
        let value = self.counter(index);
        let mut timers = self.timers.borrow_mut();
        let t = &mut timers[usize::from(index)];
        t.running = false;
        t.stopped_at = value;
    }

    fn counter(&self, index: u8) -> u32 {
        self.clock.advance(POLL_CYCLES);
        let t = self.timers.borrow()[usize::from(index)];
        if !t.running {
            return t.stopped_at;
        }
        let span = u64::from(t.period) + 1;
        let phase = self.ticks(&t) % span;
        (u64::from(t.period) - phase) as u32
    }

    fn take_overflow(&self, index: u8) -> bool {
        self.clock.advance(POLL_CYCLES);
        let mut timers = self.timers.borrow_mut();
        let t = timers[usize::from(index)];
        if !t.running {
            return false;
        }
        let wraps = self.ticks(&t) / (u64::from(t.period) + 1);
        if wraps > t.wraps_taken {
            timers[usize::from(index)].wraps_taken = wraps;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_counts_down_and_wraps() {
        let clock = SimClock::new(20_000_000);
        let timers = SimTimers::new(clock.clone());
        timers.start(0, 99, TimerClock::SysClk);
        let first = timers.counter(0);
        assert!(first < 99);
        clock.advance(200);
        assert!(timers.take_overflow(0));
        assert!(!timers.take_overflow(0));
    }

    #[test]
    fn test_xtal_timer_runs_at_crystal_rate() {
        let clock = SimClock::new(20_000_000);
        clock.set_sysclk(100_000_000);
        let timers = SimTimers::new(clock.clone());
        timers.start(2, 9, TimerClock::Xtal);
        // 500 SYSCLK cycles are 100 crystal ticks, ten wraps of a period of 10
        clock.advance(500);
        assert!(timers.take_overflow(2));
    }

    #[test]
    fn test_pll_locks_only_on_matching_reference() {
        struct NoProtect;
        impl hac_hal::Protect for NoProtect {
            fn allow(&self) {}
            fn deny(&self) {}
        }
        let clock = SimClock::new(20_000_000);
        let sysctl = SimSysCtl::new(clock.clone());
        let ep = Eallow::new(&NoProtect);
        assert!(!sysctl.set_pll(&ep, ClockSource::Xtal, 25_000_000, 100_000_000));
        assert_eq!(clock.sysclk_hz(), INTOSC_HZ);
        assert!(sysctl.set_pll(&ep, ClockSource::Xtal, 20_000_000, 100_000_000));
        assert_eq!(clock.sysclk_hz(), 100_000_000);

        sysctl.fail_pll(1);
        assert!(!sysctl.set_pll(&ep, ClockSource::Internal, INTOSC_HZ, 100_000_000));
        assert_eq!(sysctl.pll_requests().len(), 3);
    }
}

//! System clock
//!
//! Bring-up locks the PLL on the internal oscillator first, measures the
//! crystal against SYSCLK with CPU timers 1 and 2, then re-locks the PLL on
//! the crystal. The resulting [`Clocks`] record is what every driver uses to
//! derive its dividers.
//!
//! # Crystal estimate
//!
//! Timer 1 runs from SYSCLK and timer 2 from the crystal, both with the same
//! period. After [`ESTIMATE_WRAPS`] wraps of timer 1 the number of timer 2
//! wraps is proportional to the crystal frequency:
//!
//! ```text
//! f_xtal = f_cpu / ESTIMATE_WRAPS * xtal_wraps   (rounded to 5 MHz)
//! ```

use core::cell::Cell;

use embedded_hal::delay::DelayNs;
use hac_core::silicon::Silicon;
use hac_core::{debug, info, warn, Error};
use hac_hal::protect::{protected, Protect};
use hac_hal::sysctl::{ClockSource, SysCtl};
use hac_hal::timer::{CpuTimers, TimerClock};

/// Internal oscillator frequency
pub const INTOSC_HZ: u32 = 10_000_000;

/// Timer 1 wraps counted during the crystal estimate
pub const ESTIMATE_WRAPS: u32 = 1000;

const ESTIMATE_PERIOD: u32 = 100;
/// Each poll costs at least one cycle, so this bounds a stuck timer
const ESTIMATE_POLLS: u32 = ESTIMATE_WRAPS * (ESTIMATE_PERIOD + 1) * 4;
const XTAL_ALIGN: u32 = 5_000_000;

/// Derived clock frequencies (Hz)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Clocks {
    pub xtal: u32,
    pub cpu: u32,
    pub can: u32,
    pub pwm: u32,
    /// Low-speed peripheral clock
    pub lspclk: u32,
    /// ADC clock, zero until the ADC driver picked a divider
    pub adc: u32,
}

impl Clocks {
    /// Clocks of silicon `S` running from a crystal of `xtal` Hz
    pub fn derive<S: Silicon>(xtal: u32) -> Self {
        let cpu = S::CPU_HZ;
        Self {
            xtal,
            cpu,
            can: cpu / S::CAN_CLK_DIV,
            pwm: cpu,
            lspclk: cpu / 2,
            adc: 0,
        }
    }
}

/// Program the flash wait states for code running at `S::CPU_HZ`
///
/// Must run before the PLL raises SYSCLK.
pub fn init_flash<S: Silicon>(cpu: &dyn Protect, sysctl: &impl SysCtl) {
    let w = S::FLASH_WAIT;
    protected(cpu, |ep| {
        sysctl.set_flash_wait_states(ep, w.paged as u8, w.random as u8, w.otp as u8)
    });
    debug!(
        "Flash wait states {}/{}/{}",
        w.paged,
        w.random,
        w.otp
    );
}

/// Busy-wait assuming SYSCLK already runs at `S::CPU_HZ`
///
/// For use before a [`Clock`] exists, e.g. between PLL attempts.
pub fn delay_us<S: Silicon>(sysctl: &impl SysCtl, us: u32) {
    spin(sysctl, S::CPU_HZ, us);
}

fn spin(sysctl: &impl SysCtl, cpu_hz: u32, us: u32) {
    let mut cycles = u64::from(us) * u64::from(cpu_hz / 1_000_000);
    while cycles > 0 {
        let step = cycles.min(u64::from(u32::MAX));
        sysctl.delay_cycles(step as u32);
        cycles -= step;
    }
}

/// Measure the crystal frequency
///
/// Leaves timers 1 and 2 stopped and timer 2 back on SYSCLK.
///
/// # Arguments
/// * `timers` - CPU timer port
/// * `cpu_hz` - Current SYSCLK frequency
///
/// # Returns
/// Crystal frequency rounded to 5 MHz, or `Hardware` when a timer did not
/// run.
pub fn estimate_xtal<T: CpuTimers>(timers: &T, cpu_hz: u32) -> Result<u32, Error> {
    timers.start(1, ESTIMATE_PERIOD, TimerClock::SysClk);
    timers.start(2, ESTIMATE_PERIOD, TimerClock::Xtal);

    let mut sys_wraps = 0u32;
    let mut xtal_wraps = 0u32;
    let mut polls = 0u32;
    while sys_wraps < ESTIMATE_WRAPS && polls < ESTIMATE_POLLS {
        polls += 1;
        if timers.take_overflow(1) {
            sys_wraps += 1;
            if timers.take_overflow(2) {
                xtal_wraps += 1;
            }
        }
    }

    timers.stop(1);
    timers.stop(2);
    timers.start(2, u32::MAX, TimerClock::SysClk);
    timers.stop(2);

    if sys_wraps < ESTIMATE_WRAPS || xtal_wraps == 0 {
        return Err(Error::Hardware);
    }

    let f = (cpu_hz / ESTIMATE_WRAPS) * xtal_wraps;
    Ok((f + XTAL_ALIGN / 2) / XTAL_ALIGN * XTAL_ALIGN)
}

/// Running system clock
///
/// Owns nothing but a borrow of the system control port; the ADC clock is
/// interior-mutable so drivers can record it through a shared reference.
pub struct Clock<'p, C: SysCtl> {
    sysctl: &'p C,
    clocks: Clocks,
    adc: Cell<u32>,
}

impl<'p, C: SysCtl> Clock<'p, C> {
    /// Bring up SYSCLK on silicon `S`
    ///
    /// # Arguments
    /// * `cpu` - Write-protection control
    /// * `sysctl` - System control port
    /// * `timers` - CPU timers used for the crystal estimate
    pub fn init<S: Silicon, T: CpuTimers>(
        cpu: &dyn Protect,
        sysctl: &'p C,
        timers: &T,
    ) -> Result<Self, Error> {
        let locked = protected(cpu, |ep| {
            sysctl.set_pll(ep, ClockSource::Internal, INTOSC_HZ, S::CPU_HZ)
        });
        if !locked {
            warn!("PLL did not lock on the internal oscillator");
            return Err(Error::Hardware);
        }

        let xtal = estimate_xtal(timers, S::CPU_HZ)?;
        if !S::XTAL_HZ.contains(&xtal) {
            warn!("Crystal estimate {} Hz not allowed on {}", xtal, S::NAME);
            return Err(Error::Hardware);
        }

        let locked = protected(cpu, |ep| {
            sysctl.set_pll(ep, ClockSource::Xtal, xtal, S::CPU_HZ)
        });
        if !locked {
            warn!("PLL did not lock on the {} Hz crystal", xtal);
            return Err(Error::Hardware);
        }

        let clocks = Clocks::derive::<S>(xtal);
        info!("SYSCLK {} Hz from {} Hz crystal", clocks.cpu, xtal);
        Ok(Self::from_clocks(sysctl, clocks))
    }

    /// Wrap clocks that are already running
    pub fn from_clocks(sysctl: &'p C, clocks: Clocks) -> Self {
        Self {
            sysctl,
            adc: Cell::new(clocks.adc),
            clocks,
        }
    }

    pub fn clocks(&self) -> Clocks {
        Clocks {
            adc: self.adc.get(),
            ..self.clocks
        }
    }

    pub fn cpu_hz(&self) -> u32 {
        self.clocks.cpu
    }

    /// Record the ADC clock chosen by the ADC driver
    pub fn set_adc(&self, hz: u32) {
        self.adc.set(hz);
    }

    pub fn sysctl(&self) -> &'p C {
        self.sysctl
    }

    /// Busy-wait `us` microseconds
    pub fn delay_us(&self, us: u32) {
        spin(self.sysctl, self.clocks.cpu, us);
    }
}

impl<C: SysCtl> DelayNs for Clock<'_, C> {
    fn delay_ns(&mut self, ns: u32) {
        let cycles = (u64::from(ns) * u64::from(self.clocks.cpu)).div_ceil(1_000_000_000);
        self.sysctl.delay_cycles(cycles as u32);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hac_core::silicon::{F2803x, F28004x, F28p65x};
    use hac_hal::Platform;
    use hac_hal_sim::SimPlatform;

    #[test]
    fn test_bring_up_measures_crystal() {
        let p = SimPlatform::new();
        let clock = Clock::init::<F28004x, _>(p.cpu(), p.sysctl(), p.timers()).unwrap();
        let c = clock.clocks();
        assert_eq!(c.xtal, 20_000_000);
        assert_eq!(c.cpu, 100_000_000);
        assert_eq!(c.can, 100_000_000);
        assert_eq!(c.lspclk, 50_000_000);
        assert_eq!(c.adc, 0);

        let last = *p.sim_sysctl().pll_requests().last().unwrap();
        assert_eq!(last.source, ClockSource::Xtal);
        assert!(last.locked);
        assert!(!p.sim_timers().is_running(1));
        assert!(!p.sim_timers().is_running(2));
    }

    #[test]
    fn test_crystal_outside_allowed_set() {
        let p = SimPlatform::with_xtal(25_000_000);
        let r = Clock::init::<F28004x, _>(p.cpu(), p.sysctl(), p.timers());
        assert_eq!(r.err(), Some(Error::Hardware));

        // The same crystal is fine on F28P65x
        let p = SimPlatform::with_xtal(25_000_000);
        let clock = Clock::init::<F28p65x, _>(p.cpu(), p.sysctl(), p.timers()).unwrap();
        assert_eq!(clock.clocks().xtal, 25_000_000);
    }

    #[test]
    fn test_pll_failure_is_hardware_error() {
        let p = SimPlatform::new();
        p.sim_sysctl().fail_pll(1);
        let r = Clock::init::<F28004x, _>(p.cpu(), p.sysctl(), p.timers());
        assert_eq!(r.err(), Some(Error::Hardware));
    }

    #[test]
    fn test_can_clock_halved_on_f2803x() {
        let c = Clocks::derive::<F2803x>(20_000_000);
        assert_eq!(c.can, c.cpu / 2);
    }

    #[test]
    fn test_delays_advance_by_cpu_cycles() {
        let p = SimPlatform::new();
        let mut clock = Clock::init::<F28004x, _>(p.cpu(), p.sysctl(), p.timers()).unwrap();
        let t0 = p.clock().now();
        clock.delay_us(10);
        assert_eq!(p.clock().now() - t0, 1000);

        let t0 = p.clock().now();
        clock.delay_ns(1000);
        assert_eq!(p.clock().now() - t0, 100);

        let t0 = p.clock().now();
        clock.delay_us(0);
        assert_eq!(p.clock().now(), t0);
    }

    #[test]
    fn test_flash_wait_states() {
        let p = SimPlatform::new();
        init_flash::<F2803x>(p.cpu(), p.sysctl());
        assert_eq!(p.sim_sysctl().wait_states(), Some((2, 2, 3)));
        assert!(!p.sim_cpu().is_allowed());
    }
}

//! ePWM driver
//!
//! Generators count up-down. The prescaler is the smallest one that fits
//! the period into 16 bits; A is high while the counter is below CMPA and B
//! either complements A through the dead band or follows CMPB on its own.
//! Every generator comes out of setup tripped (outputs low) and stays that
//! way until the application releases it.

use hac_core::io::registry::PinMux;
use hac_core::{debug, error, Error, PinCode, PinGroup};
use hac_hal::protect::{protected, Protect};
use hac_hal::pwm::{
    Compare, GeneratorConfig, Phase, PwmPort, SocOutput, SocSource, SyncDirection,
};
use hac_hal::sysctl::{Peripheral, SysCtl};

use crate::clk::Clock;

/// Highest generator number
pub const MAX_GENERATOR: u8 = 8;

const MAX_DIV: u8 = 8;

/// PWM channel descriptor
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PwmChannel {
    pub enable: bool,
    /// Generator number (1 is EPWM1)
    pub num: u8,
    pub io_a: PinCode,
    pub io_b: PinCode,
    /// Drive B from CMPB instead of complementing A
    pub independent_b: bool,
    /// Switching frequency (Hz)
    pub freq: u32,
    /// Phase shift as a fraction of the period (0..1)
    pub phase: Option<f32>,
    /// Dead band (µs), used when B complements A
    pub dead_us: f32,
}

fn round(x: f32) -> u32 {
    (x + 0.5) as u32
}

/// Time base for a generator
///
/// # Returns
/// `(div, period)` with the prescaler exponent and the up-down period
pub fn time_base(pwm_hz: u32, freq: u32) -> Result<(u8, u16), Error> {
    if freq == 0 {
        return Err(Error::Range);
    }
    for div in 0..MAX_DIV {
        let denom = (1u64 << div) * 2 * u64::from(freq);
        let period = (u64::from(pwm_hz) + denom / 2) / denom;
        if period == 0 {
            return Err(Error::Range);
        }
        if period <= u64::from(u16::MAX) {
            return Ok((div, period as u16));
        }
    }
    Err(Error::Range)
}

/// Phase register value for a fractional shift
pub fn phase_for(fraction: f32, period: u16) -> Phase {
    let full = 2 * u32::from(period);
    let count = round(fraction * full as f32);
    if count > u32::from(period) {
        Phase {
            count: full.saturating_sub(count) as u16,
            direction: SyncDirection::Down,
        }
    } else {
        Phase {
            count: count as u16,
            direction: SyncDirection::Up,
        }
    }
}

/// Dead band in time-base ticks
pub fn dead_band(dead_us: f32, pwm_hz: u32, div: u8) -> u16 {
    let mhz = (pwm_hz / 1_000_000) as f32;
    round(dead_us * mhz / (1u32 << div) as f32).min(u32::from(u16::MAX)) as u16
}

/// Check that a pin code carries the right output of generator `num`
fn check_pin(code: PinCode, num: u8, b: bool) -> Result<(), Error> {
    if code.is_none() {
        return Ok(());
    }
    if code.group() != PinGroup::EPWM {
        return Err(Error::FunMismatch);
    }
    let index = code.fun().index();
    if (index >> 1) + 1 != num || (index & 1 != 0) != b {
        return Err(Error::FunMismatch);
    }
    Ok(())
}

/// Route an ADC start-of-conversion from a generator
///
/// # Arguments
/// * `prescale` - Events per trigger (0..3, 0 disables)
pub fn trigger<P: PwmPort>(
    port: &P,
    num: u8,
    output: SocOutput,
    source: SocSource,
    prescale: u8,
) -> Result<(), Error> {
    if !(1..=MAX_GENERATOR).contains(&num) || prescale > 3 {
        return Err(Error::Range);
    }
    port.set_adc_trigger(num, output, source, prescale);
    Ok(())
}

/// PWM driver over a board-declared channel list
pub struct Pwm<'c> {
    channels: &'c [PwmChannel],
    /// Generators configured, bit per generator number
    init: u16,
    periods: [u16; MAX_GENERATOR as usize + 1],
}

impl<'c> Pwm<'c> {
    pub fn new(channels: &'c [PwmChannel]) -> Self {
        Self {
            channels,
            init: 0,
            periods: [0; MAX_GENERATOR as usize + 1],
        }
    }

    pub fn is_configured(&self, num: u8) -> bool {
        num <= MAX_GENERATOR && self.init & (1 << num) != 0
    }

    /// Period of a configured generator
    pub fn period(&self, num: u8) -> Result<u16, Error> {
        if !self.is_configured(num) {
            return Err(Error::State);
        }
        Ok(self.periods[usize::from(num)])
    }

    /// Program every enabled generator not configured yet
    ///
    /// Time-base clocks are stopped while generators are programmed and
    /// restarted together at the end, so all counters start in step.
    pub fn setup<P: PwmPort, C: SysCtl>(
        &mut self,
        port: &P,
        clock: &Clock<'_, C>,
        cpu: &dyn Protect,
        pins: &mut dyn PinMux,
    ) -> Result<(), Error> {
        let sysctl = clock.sysctl();
        protected(cpu, |ep| sysctl.set_tbclk_sync(ep, false));

        let channels = self.channels;
        let mut result = Ok(());
        for ch in channels.iter().filter(|c| c.enable) {
            if self.is_configured(ch.num) {
                continue;
            }
            if let Err(e) = self.setup_generator(port, clock, cpu, pins, ch) {
                error!("EPWM{} setup failed: {}", ch.num, e);
                result = Err(e);
                break;
            }
        }

        protected(cpu, |ep| sysctl.set_tbclk_sync(ep, true));
        result
    }

    fn setup_generator<P: PwmPort, C: SysCtl>(
        &mut self,
        port: &P,
        clock: &Clock<'_, C>,
        cpu: &dyn Protect,
        pins: &mut dyn PinMux,
        ch: &PwmChannel,
    ) -> Result<(), Error> {
        if !(1..=MAX_GENERATOR).contains(&ch.num) {
            return Err(Error::Range);
        }
        check_pin(ch.io_a, ch.num, false)?;
        check_pin(ch.io_b, ch.num, true)?;

        let pwm_hz = clock.clocks().pwm;
        let (div, period) = time_base(pwm_hz, ch.freq)?;
        let cfg = GeneratorConfig {
            div,
            period,
            phase: ch.phase.map(|p| phase_for(p, period)),
            independent_b: ch.independent_b,
            dead_band: if ch.independent_b {
                0
            } else {
                dead_band(ch.dead_us, pwm_hz, div)
            },
        };

        let sysctl = clock.sysctl();
        protected(cpu, |ep| {
            sysctl.enable_peripheral(ep, Peripheral::Epwm(ch.num));
            port.configure(ep, ch.num, &cfg);
        });

        if !ch.io_a.is_none() {
            pins.connect(ch.io_a, ch.io_a.fun())?;
        }
        if !ch.io_b.is_none() {
            if let Err(e) = pins.connect(ch.io_b, ch.io_b.fun()) {
                // Leave no half-connected generator behind
                if !ch.io_a.is_none() {
                    pins.disconnect(ch.io_a)?;
                }
                return Err(e.into());
            }
        }

        self.periods[usize::from(ch.num)] = period;
        self.init |= 1 << ch.num;
        debug!("EPWM{} div {} period {}", ch.num, div, period);
        Ok(())
    }

    /// Set a duty cycle (0..1) on one compare register
    pub fn update<P: PwmPort>(
        &self,
        port: &P,
        num: u8,
        compare: Compare,
        duty: f32,
    ) -> Result<(), Error> {
        let period = self.period(num)?;
        if !(0.0..=1.0).contains(&duty) {
            return Err(Error::Range);
        }
        let value = round(duty * f32::from(period)).min(u32::from(period));
        port.set_compare(num, compare, value as u16);
        Ok(())
    }

    /// Put a generator's outputs in the safe state
    pub fn trip<P: PwmPort>(&self, port: &P, cpu: &dyn Protect, num: u8) -> Result<(), Error> {
        self.period(num)?;
        protected(cpu, |ep| port.force_trip(ep, num));
        Ok(())
    }

    /// Release a tripped generator
    pub fn release<P: PwmPort>(
        &self,
        port: &P,
        cpu: &dyn Protect,
        num: u8,
    ) -> Result<(), Error> {
        self.period(num)?;
        protected(cpu, |ep| port.clear_trip(ep, num));
        Ok(())
    }

    /// Trip every configured generator
    pub fn trip_all<P: PwmPort>(&self, port: &P, cpu: &dyn Protect) {
        protected(cpu, |ep| {
            for num in (1..=MAX_GENERATOR).filter(|n| self.is_configured(*n)) {
                port.force_trip(ep, num);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clk::Clocks;
    use hac_core::id::Identity;
    use hac_core::io::registry::PinRegistry;
    use hac_core::silicon::f28004x::pins as p4;
    use hac_core::silicon::F28004x;
    use hac_core::PinFun;
    use hac_hal::Platform;
    use hac_hal_sim::SimPlatform;

    fn channel(num: u8, io_a: PinCode, io_b: PinCode) -> PwmChannel {
        PwmChannel {
            enable: true,
            num,
            io_a,
            io_b,
            independent_b: false,
            freq: 20_000,
            phase: None,
            dead_us: 0.5,
        }
    }

    #[test]
    fn test_time_base_picks_smallest_divider() {
        // 100 MHz, 20 kHz: 2500 fits without a prescaler
        assert_eq!(time_base(100_000_000, 20_000), Ok((0, 2500)));
        // 500 Hz needs 100_000 at div 0, 50_000 at div 1
        assert_eq!(time_base(100_000_000, 500), Ok((1, 50_000)));
        assert_eq!(time_base(100_000_000, 0), Err(Error::Range));
        assert_eq!(time_base(100_000_000, 300_000_000), Err(Error::Range));
        assert_eq!(time_base(100_000_000, 1), Err(Error::Range));
    }

    #[test]
    fn test_phase_direction() {
        let p = phase_for(0.25, 1000);
        assert_eq!(p.count, 500);
        assert_eq!(p.direction, SyncDirection::Up);
        let p = phase_for(0.75, 1000);
        assert_eq!(p.count, 500);
        assert_eq!(p.direction, SyncDirection::Down);
    }

    #[test]
    fn test_dead_band_ticks() {
        assert_eq!(dead_band(0.5, 100_000_000, 0), 50);
        assert_eq!(dead_band(0.5, 100_000_000, 2), 13);
    }

    #[test]
    fn test_setup_starts_tripped_and_connects_pins() {
        let p = SimPlatform::new();
        let clock = Clock::from_clocks(p.sysctl(), Clocks::derive::<F28004x>(20_000_000));
        let mut reg = PinRegistry::<F28004x, _>::new(p.gpio(), p.cpu());
        reg.reset(&Identity::virtual_for::<F28004x>());

        let channels = [
            channel(1, p4::IO0_EPWM1_A, p4::IO1_EPWM1_B),
            PwmChannel {
                phase: Some(0.5),
                independent_b: true,
                ..channel(2, p4::IO2_EPWM2_A, PinCode::IOX)
            },
        ];
        let mut pwm = Pwm::new(&channels);
        pwm.setup(p.pwm(), &clock, p.cpu(), &mut reg).unwrap();

        let g1 = p.sim_pwm().generator(1).unwrap();
        assert!(g1.tripped);
        assert_eq!(g1.config.period, 2500);
        assert_eq!(g1.config.dead_band, 50);
        let g2 = p.sim_pwm().generator(2).unwrap();
        assert_eq!(g2.config.dead_band, 0);
        assert_eq!(
            g2.config.phase,
            Some(Phase {
                count: 2500,
                direction: SyncDirection::Up
            })
        );
        assert!(reg.status(p4::IO1_EPWM1_B).unwrap().connected);
        assert!(p.sim_sysctl().tbclk_sync());
        assert!(p.sim_sysctl().is_enabled(Peripheral::Epwm(2)));

        // Second setup leaves configured generators alone
        pwm.setup(p.pwm(), &clock, p.cpu(), &mut reg).unwrap();

        pwm.update(p.pwm(), 1, Compare::A, 0.5).unwrap();
        assert_eq!(p.sim_pwm().generator(1).unwrap().cmpa, 1250);
        assert_eq!(pwm.update(p.pwm(), 1, Compare::A, 1.5), Err(Error::Range));
        assert_eq!(pwm.update(p.pwm(), 3, Compare::A, 0.5), Err(Error::State));

        pwm.release(p.pwm(), p.cpu(), 1).unwrap();
        assert!(!p.sim_pwm().tripped(1));
        pwm.trip_all(p.pwm(), p.cpu());
        assert!(p.sim_pwm().tripped(1));
    }

    #[test]
    fn test_pin_of_other_generator_is_refused() {
        let p = SimPlatform::new();
        let clock = Clock::from_clocks(p.sysctl(), Clocks::derive::<F28004x>(20_000_000));
        let mut reg = PinRegistry::<F28004x, _>::new(p.gpio(), p.cpu());
        reg.reset(&Identity::virtual_for::<F28004x>());

        // A output given where B is expected
        let channels = [channel(1, p4::IO0_EPWM1_A, p4::IO0_EPWM1_A)];
        let mut pwm = Pwm::new(&channels);
        assert_eq!(
            pwm.setup(p.pwm(), &clock, p.cpu(), &mut reg),
            Err(Error::FunMismatch)
        );

        let channels = [channel(2, p4::IO0_EPWM1_A, PinCode::IOX)];
        let mut pwm = Pwm::new(&channels);
        assert_eq!(
            pwm.setup(p.pwm(), &clock, p.cpu(), &mut reg),
            Err(Error::FunMismatch)
        );
        // Clocks are released even after a failure
        assert!(p.sim_sysctl().tbclk_sync());
        assert!(!pwm.is_configured(2));
    }

    #[test]
    fn test_busy_b_pin_releases_a_pin() {
        let p = SimPlatform::new();
        let clock = Clock::from_clocks(p.sysctl(), Clocks::derive::<F28004x>(20_000_000));
        let mut reg = PinRegistry::<F28004x, _>::new(p.gpio(), p.cpu());
        reg.reset(&Identity::virtual_for::<F28004x>());
        reg.connect(p4::IO1_DOUT, PinFun::NONE).unwrap();

        let channels = [channel(1, p4::IO0_EPWM1_A, p4::IO1_EPWM1_B)];
        let mut pwm = Pwm::new(&channels);
        assert_eq!(
            pwm.setup(p.pwm(), &clock, p.cpu(), &mut reg),
            Err(Error::Busy)
        );
        assert!(!reg.status(p4::IO0_EPWM1_A).unwrap().connected);
        assert!(!pwm.is_configured(1));

        // Once B is free the same channel comes up
        reg.disconnect(p4::IO1_DOUT).unwrap();
        pwm.setup(p.pwm(), &clock, p.cpu(), &mut reg).unwrap();
        assert!(reg.status(p4::IO0_EPWM1_A).unwrap().connected);
        assert!(reg.status(p4::IO1_EPWM1_B).unwrap().connected);
    }

    #[test]
    fn test_adc_trigger_route() {
        let p = SimPlatform::new();
        trigger(p.pwm(), 1, SocOutput::SocA, SocSource::CounterZero, 1).unwrap();
        assert_eq!(
            p.sim_pwm().generator(1).unwrap().soc_a,
            Some((SocSource::CounterZero, 1))
        );
        assert_eq!(
            trigger(p.pwm(), 1, SocOutput::SocA, SocSource::CounterZero, 4),
            Err(Error::Range)
        );
    }
}

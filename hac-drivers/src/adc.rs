//! ADC driver
//!
//! A channel is one analog input sampled by a list of SOC wrappers on one
//! core. Reading a channel averages the results of its wrappers, so the
//! list length must be 1, 2, 4 or 8.
//!
//! Cores are brought up on first use: clock, reset, prescaler, power-up
//! delay and an offset self-calibration against VREFLO.
//!
//! ```text
//!   setup ─┬─► divider search (once) ─► Clock::set_adc
//!          └─► per channel ─► core init (once per core) ─► SOC list ─► EOC line
//! ```

use hac_core::silicon::{Family, Silicon};
use hac_core::{debug, error, info, Error};
use hac_hal::adc::{AdcPort, SocConfig, SOC_COUNT};
use hac_hal::protect::{protected, Protect};
use hac_hal::sysctl::{Peripheral, SysCtl};

use crate::clk::Clock;

/// Channel objects tracked by one driver
pub const MAX_CHANNELS: usize = 32;

/// Codes of the 12-bit converter; one LSB is `1 / CODES` of full scale
pub const CODES: f32 = 4096.0;

/// Input converted during offset calibration
const CAL_CHANNEL: u8 = 13;
const CAL_WINDOW_NS: u32 = 200;
const CAL_ROUNDS: u32 = 32;
/// Completion polls and their spacing
const CAL_POLLS: u32 = 10;
const CAL_POLL_US: u32 = 10;

/// F2803x acquisition windows the converter cannot use
const F2803X_INVALID: [(u32, u32); 5] = [(0, 5), (16, 20), (29, 33), (42, 46), (55, 59)];

/// Start-of-conversion trigger source
///
/// Values follow the silicon's trigger select field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Trigger(pub u8);

impl Trigger {
    pub const SW_ONLY: Self = Self(0);
    pub const CPU1_TINT0: Self = Self(1);
    pub const CPU1_TINT1: Self = Self(2);
    pub const CPU1_TINT2: Self = Self(3);
    pub const GPIO: Self = Self(4);
    pub const EPWM1_SOCA: Self = Self(5);
    pub const EPWM1_SOCB: Self = Self(6);
    pub const EPWM2_SOCA: Self = Self(7);
    pub const EPWM2_SOCB: Self = Self(8);
    pub const EPWM3_SOCA: Self = Self(9);
    pub const EPWM3_SOCB: Self = Self(10);
    pub const EPWM4_SOCA: Self = Self(11);
    pub const EPWM4_SOCB: Self = Self(12);
}

/// ADC channel descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AdcChannel {
    pub enable: bool,
    /// Core (1 is ADCA)
    pub core: u8,
    /// Analog input (ADCINx)
    pub channel: u8,
    pub trigger: Trigger,
    /// Acquisition window (ns)
    pub sample_ns: u32,
    /// End-of-conversion interrupt line raised by the last SOC, 0 for none
    pub int_line: u8,
    /// SOC wrappers sampling this input
    pub socs: &'static [u8],
}

/// Raw-to-engineering conversion record
///
/// `value = raw * scale + offset` with `raw` the averaged result.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Conversion {
    /// Per-LSB factor; [`Adc::data`] gives `1 / CODES`, boards multiply
    /// in their reference voltage
    pub scale: f32,
    pub offset: f32,
    /// SOC results averaged per reading
    pub samples: u8,
}

/// Convert an acquisition time into the encoded window of silicon `S`
///
/// # Arguments
/// * `ns` - Acquisition time in nanoseconds
/// * `adc_hz` - ADC clock
pub fn sample_window<S: Silicon>(ns: u32, adc_hz: u32) -> Result<u32, Error> {
    if S::FAMILY == Family::F28004x && ns < 75 {
        return Err(Error::Range);
    }
    let cycles = (u64::from(ns) * u64::from(adc_hz)).div_ceil(1_000_000_000) as u32;
    if cycles == 0 {
        return Err(Error::Range);
    }

    match S::FAMILY {
        Family::F2803x => {
            // ACQPS holds cycles - 1
            let mut window = cycles - 1;
            if window > 63 {
                return Err(Error::Range);
            }
            if let Some(&(_, last)) = F2803X_INVALID
                .iter()
                .find(|(first, last)| (*first..=*last).contains(&window))
            {
                window = last + 1;
            }
            Ok(window)
        }
        Family::F28004x if cycles > 513 => Err(Error::Range),
        _ => Ok(cycles),
    }
}

/// First SYSCLK divider giving an ADC clock inside the silicon's range
///
/// # Returns
/// `(divider, adc_hz)`
pub fn divider<S: Silicon>(cpu_hz: u32) -> Result<(u8, u32), Error> {
    let a = S::ADC;
    (1..=a.div_max)
        .map(|div| (div, cpu_hz / div))
        .find(|(_, f)| (a.clk_min..=a.clk_max).contains(f))
        .map(|(div, f)| (div as u8, f))
        .ok_or(Error::Range)
}

/// ADC driver over a board-declared channel list
pub struct Adc<'c> {
    channels: &'c [AdcChannel],
    /// Cores brought up, bit per core number
    cores: u16,
    /// Channels configured, bit per list index
    configured: u32,
}

impl<'c> Adc<'c> {
    pub fn new(channels: &'c [AdcChannel]) -> Self {
        Self {
            channels,
            cores: 0,
            configured: 0,
        }
    }

    pub fn channels(&self) -> &'c [AdcChannel] {
        self.channels
    }

    pub fn is_configured(&self, index: usize) -> bool {
        index < MAX_CHANNELS && self.configured & (1 << index) != 0
    }

    /// Program every enabled channel not configured yet
    ///
    /// Stops at the first failing channel; channels configured before it
    /// stay configured.
    pub fn setup<S: Silicon, P: AdcPort, C: SysCtl>(
        &mut self,
        port: &P,
        clock: &Clock<'_, C>,
        cpu: &dyn Protect,
    ) -> Result<(), Error> {
        if self.channels.len() > MAX_CHANNELS {
            return Err(Error::Range);
        }
        let (div, adc_hz) = divider::<S>(clock.cpu_hz())?;
        clock.set_adc(adc_hz);

        let channels = self.channels;
        for (i, ch) in channels.iter().enumerate() {
            if !ch.enable || self.is_configured(i) {
                continue;
            }
            if let Err(e) = self.setup_channel::<S, P, C>(port, clock, cpu, div, adc_hz, ch) {
                error!("ADC channel {} setup failed: {}", i, e);
                return Err(e);
            }
            self.configured |= 1 << i;
        }
        Ok(())
    }

    fn setup_channel<S: Silicon, P: AdcPort, C: SysCtl>(
        &mut self,
        port: &P,
        clock: &Clock<'_, C>,
        cpu: &dyn Protect,
        div: u8,
        adc_hz: u32,
        ch: &AdcChannel,
    ) -> Result<(), Error> {
        if ch.core == 0 || ch.core > S::ADC.cores {
            return Err(Error::Unavailable);
        }
        if !matches!(ch.socs.len(), 1 | 2 | 4 | 8) || ch.socs.iter().any(|s| *s >= SOC_COUNT) {
            return Err(Error::Range);
        }
        if ch.int_line > S::ADC.int_lines {
            return Err(Error::Range);
        }
        let window = sample_window::<S>(ch.sample_ns, adc_hz)?;

        if self.cores & (1 << ch.core) == 0 {
            setup_core::<S, P, C>(port, clock, cpu, ch.core, div, adc_hz)?;
            self.cores |= 1 << ch.core;
        }

        let cfg = SocConfig {
            trigger: ch.trigger.0,
            channel: ch.channel,
            window,
        };
        protected(cpu, |ep| {
            for &soc in ch.socs {
                port.configure_soc(ep, ch.core, soc, cfg);
            }
            if let (true, Some(&last)) = (ch.int_line > 0, ch.socs.last()) {
                port.configure_interrupt(ep, ch.core, ch.int_line, last);
            }
        });
        debug!(
            "ADC{} input {} on {} SOC(s), window {}",
            ch.core,
            ch.channel,
            ch.socs.len(),
            window
        );
        Ok(())
    }

    /// Software-force the conversions of a channel
    pub fn convert<P: AdcPort>(&self, port: &P, index: usize) -> Result<(), Error> {
        let ch = self.configured_channel(index)?;
        let mask = ch.socs.iter().fold(0u16, |m, s| m | (1 << s));
        port.force_soc(ch.core, mask);
        Ok(())
    }

    /// Averaged result of a channel
    pub fn read<P: AdcPort>(&self, port: &P, index: usize) -> Result<u16, Error> {
        let ch = self.configured_channel(index)?;
        let sum: u32 = ch
            .socs
            .iter()
            .map(|s| u32::from(port.result(ch.core, *s)))
            .sum();
        Ok((sum >> ch.socs.len().trailing_zeros()) as u16)
    }

    /// Conversion record of a channel
    pub fn data(&self, index: usize) -> Result<Conversion, Error> {
        let ch = self.configured_channel(index)?;
        Ok(Conversion {
            scale: 1.0 / CODES,
            offset: 0.0,
            samples: ch.socs.len() as u8,
        })
    }

    fn configured_channel(&self, index: usize) -> Result<&'c AdcChannel, Error> {
        if !self.is_configured(index) {
            return Err(Error::State);
        }
        self.channels.get(index).ok_or(Error::Range)
    }
}

fn setup_core<S: Silicon, P: AdcPort, C: SysCtl>(
    port: &P,
    clock: &Clock<'_, C>,
    cpu: &dyn Protect,
    core: u8,
    div: u8,
    adc_hz: u32,
) -> Result<(), Error> {
    let sysctl = clock.sysctl();
    protected(cpu, |ep| {
        sysctl.enable_peripheral(ep, Peripheral::Adc(core));
        sysctl.reset_peripheral(ep, Peripheral::Adc(core));
        port.init_core(ep, core, div);
    });
    clock.delay_us(S::ADC.power_up_us);

    let trim = calibrate::<S, P, C>(port, clock, cpu, core, adc_hz)?;
    info!("ADC{} up, divider {}, offset trim {}", core, div, trim);
    Ok(())
}

/// Offset self-calibration
///
/// Converts the calibration input on all 16 wrappers for
/// [`CAL_ROUNDS`] rounds and moves the trim by the mean result.
fn calibrate<S: Silicon, P: AdcPort, C: SysCtl>(
    port: &P,
    clock: &Clock<'_, C>,
    cpu: &dyn Protect,
    core: u8,
    adc_hz: u32,
) -> Result<u16, Error> {
    let window = sample_window::<S>(CAL_WINDOW_NS, adc_hz)?;
    let vreflo = S::FAMILY == Family::F2803x;

    protected(cpu, |ep| {
        let cfg = SocConfig {
            trigger: Trigger::SW_ONLY.0,
            channel: CAL_CHANNEL,
            window,
        };
        for soc in 0..SOC_COUNT {
            port.configure_soc(ep, core, soc, cfg);
        }
        port.configure_interrupt(ep, core, 1, SOC_COUNT - 1);
        port.set_offset_trim(ep, core, S::ADC.offset_trim);
        if vreflo {
            port.connect_vreflo(ep, core, true);
        }
    });

    let sum = sample_offset(port, clock, core);

    protected(cpu, |ep| {
        port.disable_interrupt(ep, core, 1);
        if vreflo {
            port.connect_vreflo(ep, core, false);
        }
    });

    let samples = CAL_ROUNDS * u32::from(SOC_COUNT);
    let mean = (sum? / samples) as i32;
    let trim = (i32::from(S::ADC.offset_trim) - mean) as i16 as u16;
    protected(cpu, |ep| port.set_offset_trim(ep, core, trim));
    Ok(trim)
}

fn sample_offset<P: AdcPort, C: SysCtl>(
    port: &P,
    clock: &Clock<'_, C>,
    core: u8,
) -> Result<u32, Error> {
    let mut sum = 0u32;
    for _ in 0..CAL_ROUNDS {
        port.force_soc(core, 0xFFFF);
        let mut polls = 0;
        while !port.interrupt_flag(core, 1) {
            if polls == CAL_POLLS {
                return Err(Error::Hardware);
            }
            clock.delay_us(CAL_POLL_US);
            polls += 1;
        }
        port.clear_interrupt_flag(core, 1);
        sum += (0..SOC_COUNT)
            .map(|soc| u32::from(port.result(core, soc)))
            .sum::<u32>();
    }
    Ok(sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clk::Clocks;
    use hac_core::silicon::{F2803x, F28004x};
    use hac_hal::Platform;
    use hac_hal_sim::SimPlatform;

    const SOCS_A: &[u8] = &[0, 1];
    const SOCS_B: &[u8] = &[4];

    fn channel(core: u8, channel: u8, socs: &'static [u8]) -> AdcChannel {
        AdcChannel {
            enable: true,
            core,
            channel,
            trigger: Trigger::EPWM1_SOCA,
            sample_ns: 200,
            int_line: 0,
            socs,
        }
    }

    #[test]
    fn test_sample_window_f28004x() {
        // 50 MHz ADC clock: 20 ns per cycle
        assert_eq!(sample_window::<F28004x>(74, 50_000_000), Err(Error::Range));
        assert_eq!(sample_window::<F28004x>(200, 50_000_000), Ok(10));
        assert_eq!(sample_window::<F28004x>(201, 50_000_000), Ok(11));
        assert_eq!(sample_window::<F28004x>(10_260, 50_000_000), Ok(513));
        assert_eq!(sample_window::<F28004x>(10_280, 50_000_000), Err(Error::Range));
    }

    #[test]
    fn test_sample_window_f2803x_skips_invalid() {
        // 30 MHz: 200 ns -> 6 cycles -> ACQPS 5, bumped past 0..5
        assert_eq!(sample_window::<F2803x>(200, 30_000_000), Ok(6));
        // 600 ns -> 18 cycles -> ACQPS 17, inside 16..20
        assert_eq!(sample_window::<F2803x>(600, 30_000_000), Ok(21));
        assert_eq!(sample_window::<F2803x>(500, 30_000_000), Ok(14));
        assert_eq!(sample_window::<F2803x>(3000, 30_000_000), Err(Error::Range));
    }

    #[test]
    fn test_divider_search() {
        assert_eq!(divider::<F28004x>(100_000_000), Ok((2, 50_000_000)));
        assert_eq!(divider::<F28004x>(1_000_000_000), Err(Error::Range));
    }

    #[test]
    fn test_setup_calibrates_and_programs_socs() {
        let p = SimPlatform::new();
        let clock = Clock::from_clocks(p.sysctl(), Clocks::derive::<F28004x>(20_000_000));
        p.sim_adc().set_offset_error(1, 3);

        const CHANNELS: &[AdcChannel] = &[
            AdcChannel {
                enable: true,
                core: 1,
                channel: 2,
                trigger: Trigger::EPWM1_SOCA,
                sample_ns: 200,
                int_line: 1,
                socs: SOCS_A,
            },
            AdcChannel {
                enable: false,
                core: 2,
                channel: 0,
                trigger: Trigger::SW_ONLY,
                sample_ns: 200,
                int_line: 0,
                socs: SOCS_B,
            },
        ];
        let mut adc = Adc::new(CHANNELS);
        adc.setup::<F28004x, _, _>(p.adc(), &clock, p.cpu()).unwrap();

        assert_eq!(clock.clocks().adc, 50_000_000);
        assert_eq!(p.sim_adc().divider(1), Some(2));
        assert_eq!(p.sim_adc().divider(2), None);
        assert_eq!(p.sim_adc().trim(1), (-3i16) as u16);
        assert_eq!(p.sim_adc().interrupt_source(1, 1), Some(1));
        let soc = p.sim_adc().soc(1, 1).unwrap();
        assert_eq!(soc.channel, 2);
        assert_eq!(soc.trigger, 5);
        assert_eq!(soc.window, 10);
        assert!(adc.is_configured(0));
        assert!(!adc.is_configured(1));
        assert!(!p.sim_cpu().is_allowed());
    }

    #[test]
    fn test_read_averages_socs() {
        let p = SimPlatform::new();
        let clock = Clock::from_clocks(p.sysctl(), Clocks::derive::<F28004x>(20_000_000));
        let channels = [channel(1, 3, SOCS_A)];
        let mut adc = Adc::new(&channels);
        assert_eq!(adc.read(p.adc(), 0), Err(Error::State));

        adc.setup::<F28004x, _, _>(p.adc(), &clock, p.cpu()).unwrap();
        p.sim_adc().set_input(1, 3, 2000);
        adc.convert(p.adc(), 0).unwrap();
        assert_eq!(adc.read(p.adc(), 0), Ok(2000));
        assert_eq!(adc.data(0).unwrap().samples, 2);
    }

    #[test]
    fn test_conversion_is_fraction_of_full_scale() {
        let p = SimPlatform::new();
        let clock = Clock::from_clocks(p.sysctl(), Clocks::derive::<F28004x>(20_000_000));
        let channels = [channel(1, 3, SOCS_A)];
        let mut adc = Adc::new(&channels);
        assert_eq!(adc.data(0), Err(Error::State));

        adc.setup::<F28004x, _, _>(p.adc(), &clock, p.cpu()).unwrap();
        let data = adc.data(0).unwrap();
        assert_eq!(data.scale, 1.0 / 4096.0);
        assert_eq!(data.offset, 0.0);
        assert_eq!(2048.0 * data.scale + data.offset, 0.5);
    }

    #[test]
    fn test_setup_rejects_bad_channels() {
        let p = SimPlatform::new();
        let clock = Clock::from_clocks(p.sysctl(), Clocks::derive::<F28004x>(20_000_000));

        let odd = [AdcChannel {
            socs: &[0, 1, 2],
            ..channel(1, 0, SOCS_A)
        }];
        let mut adc = Adc::new(&odd);
        assert_eq!(
            adc.setup::<F28004x, _, _>(p.adc(), &clock, p.cpu()),
            Err(Error::Range)
        );

        let channels = [channel(1, 0, SOCS_A), channel(4, 0, SOCS_B)];
        let mut adc = Adc::new(&channels);
        assert_eq!(
            adc.setup::<F28004x, _, _>(p.adc(), &clock, p.cpu()),
            Err(Error::Unavailable)
        );
        // The first channel stays configured
        assert!(adc.is_configured(0));
    }

    #[test]
    fn test_setup_is_idempotent_per_core() {
        let p = SimPlatform::new();
        let clock = Clock::from_clocks(p.sysctl(), Clocks::derive::<F28004x>(20_000_000));
        let channels = [channel(1, 0, SOCS_A), channel(1, 1, SOCS_B)];
        let mut adc = Adc::new(&channels);
        adc.setup::<F28004x, _, _>(p.adc(), &clock, p.cpu()).unwrap();
        adc.setup::<F28004x, _, _>(p.adc(), &clock, p.cpu()).unwrap();
        assert_eq!(p.sim_sysctl().reset_count(Peripheral::Adc(1)), 1);
    }
}

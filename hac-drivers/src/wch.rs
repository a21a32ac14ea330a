//! Window comparator driver
//!
//! A window comparator watches one ADC input with the high and low
//! comparators of a CMPSS core and trips the PWM through the ePWM X-BAR
//! when the input leaves the window. The CMPSS core and analog mux setting
//! follow from the ADC core and input being watched.

use hac_core::silicon::Silicon;
use hac_core::{debug, error, Error};
use hac_hal::cmpss::CmpssPort;
use hac_hal::protect::{protected, Protect};
use hac_hal::sysctl::{Peripheral, SysCtl};

pub const MAX_CORE: u8 = 7;
/// DAC full scale
pub const DAC_MAX: u16 = 4095;

const NC: u8 = 255;
/// Input used for out-of-range channel numbers; not wired anywhere
const UNWIRED: usize = 13;

/// CMPSS core per ADC input, one row per ADC core
const CORE: [[u8; 16]; 3] = [
    [NC, NC, 1, 1, 2, 2, 5, 5, 6, 6, 7, 1, 2, NC, 5, 6],
    [7, 7, 3, 3, 4, 4, 1, 1, 2, 2, 3, 4, 7, NC, NC, NC],
    [1, 2, 3, 4, 5, 6, 3, 3, 4, 4, 7, 7, NC, NC, 7, NC],
];

/// Analog subsystem mux select
const MUX: [[u8; 16]; 3] = [
    [NC, NC, 0, 0, 3, 3, 0xC, 0xC, 0x10, 0x10, 0x13, 0, 3, NC, 0xC, 0x10],
    [0x13, 0x13, 6, 6, 9, 9, 0, 0, 3, 3, 6, 9, 0x13, NC, NC, NC],
    [0, 3, 6, 9, 0xC, 0x10, 6, 6, 9, 9, 0x13, 0x13, NC, NC, 0x13, NC],
];

/// Positive-input selection within the mux
const VALUE: [[u8; 16]; 3] = [
    [NC, NC, 0, 3, 0, 3, 0, 3, 0, 3, 0, 4, 4, NC, 4, 4],
    [3, 0, 0, 3, 0, 3, 0, 4, 0, 4, 4, 4, 4, NC, NC, NC],
    [1, 1, 1, 1, 1, 1, 0, 4, 0, 4, 0, 4, NC, NC, 1, NC],
];

/// Comparator wiring of an ADC input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Route {
    /// CMPSS core (1..7)
    pub core: u8,
    pub mux: u16,
    pub value: u16,
}

/// Resolve the comparator wiring of ADC input `channel` on `adc_core`
///
/// # Returns
/// `Unavailable` when no comparator can see that input
pub fn resolve(adc_core: u8, channel: u8) -> Result<Route, Error> {
    let row = match adc_core {
        1..=3 => usize::from(adc_core - 1),
        _ => return Err(Error::Unavailable),
    };
    let ch = match usize::from(channel) {
        c if c > 15 => UNWIRED,
        c => c,
    };
    let (core, mux, value) = (CORE[row][ch], MUX[row][ch], VALUE[row][ch]);
    if core == NC || mux == NC || value == NC {
        return Err(Error::Unavailable);
    }
    Ok(Route {
        core,
        mux: u16::from(mux),
        value: u16::from(value),
    })
}

/// Window comparator descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WchChannel {
    pub enable: bool,
    pub adc_core: u8,
    pub adc_channel: u8,
    /// X-BAR trip raised by the high comparator, 0 for none
    pub trip_high: u16,
    /// X-BAR trip raised by the low comparator, 0 for none
    pub trip_low: u16,
    /// ePWM providing the ramp sync
    pub pwm_sync: u16,
}

pub struct Wch<'c> {
    channels: &'c [WchChannel],
    init: u16,
    /// CMPSS core resolved per channel
    cores: [u8; 16],
}

impl<'c> Wch<'c> {
    pub fn new(channels: &'c [WchChannel]) -> Self {
        Self {
            channels,
            init: 0,
            cores: [0; 16],
        }
    }

    pub fn is_configured(&self, core: u8) -> bool {
        core <= MAX_CORE && self.init & (1 << core) != 0
    }

    /// Wire every enabled channel and set up its CMPSS core once
    ///
    /// Thresholds start at the DAC extremes so nothing trips until the
    /// application narrows the window.
    pub fn setup<S: Silicon, P: CmpssPort, C: SysCtl>(
        &mut self,
        port: &P,
        sysctl: &C,
        cpu: &dyn Protect,
    ) -> Result<(), Error> {
        if !S::HAS_WCH {
            return Err(Error::Unavailable);
        }
        if self.channels.len() > self.cores.len() {
            return Err(Error::Range);
        }
        let channels = self.channels;
        for (i, ch) in channels.iter().enumerate().filter(|(_, c)| c.enable) {
            let route = match resolve(ch.adc_core, ch.adc_channel) {
                Ok(r) => r,
                Err(e) => {
                    error!(
                        "No comparator for ADC{} input {}",
                        ch.adc_core,
                        ch.adc_channel
                    );
                    return Err(e);
                }
            };
            protected(cpu, |ep| port.select_input(ep, route.mux, route.value));
            self.cores[i] = route.core;

            if self.is_configured(route.core) {
                continue;
            }
            setup_core(port, sysctl, cpu, route.core, ch);
            self.init |= 1 << route.core;
        }
        Ok(())
    }

    /// Set the window of a channel
    ///
    /// # Arguments
    /// * `index` - Channel index in the descriptor list
    /// * `high` - Upper threshold (DAC counts)
    /// * `low` - Lower threshold (DAC counts)
    pub fn set_thresholds<P: CmpssPort>(
        &self,
        port: &P,
        index: usize,
        high: u16,
        low: u16,
    ) -> Result<(), Error> {
        if high > DAC_MAX || low > DAC_MAX {
            return Err(Error::Range);
        }
        let core = self.core(index)?;
        port.set_thresholds(core, high, low);
        Ok(())
    }

    /// Clear the latched trip of a channel's comparators
    pub fn clear<P: CmpssPort>(&self, port: &P, index: usize) -> Result<(), Error> {
        let core = self.core(index)?;
        port.clear_latch(core);
        Ok(())
    }

    fn core(&self, index: usize) -> Result<u8, Error> {
        match self.cores.get(index) {
            Some(&core) if self.is_configured(core) && core > 0 => Ok(core),
            Some(_) => Err(Error::State),
            None => Err(Error::Range),
        }
    }
}

fn setup_core<P: CmpssPort, C: SysCtl>(
    port: &P,
    sysctl: &C,
    cpu: &dyn Protect,
    core: u8,
    ch: &WchChannel,
) {
    let c = u32::from(core - 1);
    let mux = (c * 4) << 8;
    protected(cpu, |ep| {
        sysctl.enable_peripheral(ep, Peripheral::Cmpss(core));
        sysctl.reset_peripheral(ep, Peripheral::Cmpss(core));
        port.configure(ep, core, ch.pwm_sync);
        port.set_thresholds(core, DAC_MAX, 0);
        port.clear_latch(core);

        if ch.trip_high == ch.trip_low && ch.trip_high > 0 {
            // Either comparator raises the same trip
            port.route_trip(ep, ch.trip_high, mux | 1, 1 << (2 * c));
        } else {
            if ch.trip_high > 0 {
                port.route_trip(ep, ch.trip_high, mux, 1 << (2 * c));
            }
            if ch.trip_low > 0 {
                port.route_trip(ep, ch.trip_low, mux | 0x200, 1 << (2 * c + 1));
            }
        }
    });
    debug!(
        "CMPSS{} trips high {} low {}",
        core,
        ch.trip_high,
        ch.trip_low
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use hac_core::silicon::{F2803x, F28004x};
    use hac_hal::Platform;
    use hac_hal_sim::analog::TripRoute;
    use hac_hal_sim::SimPlatform;

    fn channel(adc_core: u8, adc_channel: u8, high: u16, low: u16) -> WchChannel {
        WchChannel {
            enable: true,
            adc_core,
            adc_channel,
            trip_high: high,
            trip_low: low,
            pwm_sync: 1,
        }
    }

    #[test]
    fn test_resolve_tables() {
        assert_eq!(
            resolve(1, 2),
            Ok(Route {
                core: 1,
                mux: 0,
                value: 0
            })
        );
        assert_eq!(
            resolve(2, 0),
            Ok(Route {
                core: 7,
                mux: 0x13,
                value: 3
            })
        );
        assert_eq!(
            resolve(3, 14),
            Ok(Route {
                core: 7,
                mux: 0x13,
                value: 1
            })
        );
        assert_eq!(resolve(1, 0), Err(Error::Unavailable));
        assert_eq!(resolve(1, 13), Err(Error::Unavailable));
        assert_eq!(resolve(1, 40), Err(Error::Unavailable));
        assert_eq!(resolve(4, 2), Err(Error::Unavailable));
    }

    #[test]
    fn test_shared_trip_uses_one_route() {
        let p = SimPlatform::new();
        let channels = [channel(1, 4, 4, 4)];
        let mut wch = Wch::new(&channels);
        wch.setup::<F28004x, _, _>(p.cmpss(), p.sysctl(), p.cpu())
            .unwrap();

        // ADC A4 is CMPSS2, mux 3 value 0
        assert_eq!(p.sim_cmpss().inputs(), vec![(3, 0)]);
        let cmp = p.sim_cmpss().comparator(2).unwrap();
        assert_eq!((cmp.high, cmp.low), (DAC_MAX, 0));
        assert_eq!(cmp.latch_clears, 1);
        assert_eq!(
            p.sim_cmpss().trips(),
            vec![TripRoute {
                trip: 4,
                mux_config: 0x401,
                mux_enable: 1 << 2
            }]
        );
    }

    #[test]
    fn test_separate_trips_and_thresholds() {
        let p = SimPlatform::new();
        let channels = [channel(1, 2, 4, 5), channel(1, 3, 4, 5)];
        let mut wch = Wch::new(&channels);
        wch.setup::<F28004x, _, _>(p.cmpss(), p.sysctl(), p.cpu())
            .unwrap();

        // Both inputs land on CMPSS1, set up once
        assert_eq!(p.sim_cmpss().inputs(), vec![(0, 0), (0, 3)]);
        assert_eq!(
            p.sim_cmpss().trips(),
            vec![
                TripRoute {
                    trip: 4,
                    mux_config: 0,
                    mux_enable: 1
                },
                TripRoute {
                    trip: 5,
                    mux_config: 0x200,
                    mux_enable: 2
                },
            ]
        );
        assert_eq!(p.sim_sysctl().reset_count(Peripheral::Cmpss(1)), 1);

        wch.set_thresholds(p.cmpss(), 1, 3000, 1000).unwrap();
        let cmp = p.sim_cmpss().comparator(1).unwrap();
        assert_eq!((cmp.high, cmp.low), (3000, 1000));
        assert_eq!(
            wch.set_thresholds(p.cmpss(), 0, 4096, 0),
            Err(Error::Range)
        );
        assert_eq!(wch.set_thresholds(p.cmpss(), 2, 10, 0), Err(Error::State));
        assert_eq!(wch.set_thresholds(p.cmpss(), 16, 10, 0), Err(Error::Range));
    }

    #[test]
    fn test_unavailable_on_f2803x() {
        let p = SimPlatform::new();
        let mut wch = Wch::new(&[]);
        assert_eq!(
            wch.setup::<F2803x, _, _>(p.cmpss(), p.sysctl(), p.cpu()),
            Err(Error::Unavailable)
        );
    }
}

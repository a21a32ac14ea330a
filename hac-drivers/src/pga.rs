//! Programmable gain amplifier driver

use hac_core::silicon::Silicon;
use hac_core::{debug, error, Error};
use hac_hal::pga::{Gain, PgaPort};
use hac_hal::protect::{protected, Protect};
use hac_hal::sysctl::{Peripheral, SysCtl};

pub const MAX_CORE: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PgaChannel {
    pub enable: bool,
    /// Core (1 is PGA1)
    pub core: u8,
    pub gain: Gain,
}

pub struct Pga<'c> {
    channels: &'c [PgaChannel],
    init: u16,
}

impl<'c> Pga<'c> {
    pub fn new(channels: &'c [PgaChannel]) -> Self {
        Self { channels, init: 0 }
    }

    pub fn is_configured(&self, core: u8) -> bool {
        core <= MAX_CORE && self.init & (1 << core) != 0
    }

    pub fn setup<S: Silicon, P: PgaPort, C: SysCtl>(
        &mut self,
        port: &P,
        sysctl: &C,
        cpu: &dyn Protect,
    ) -> Result<(), Error> {
        if !S::HAS_PGA {
            return Err(Error::Unavailable);
        }
        for ch in self.channels.iter().filter(|c| c.enable) {
            if !(1..=MAX_CORE).contains(&ch.core) {
                error!("PGA core {} out of range", ch.core);
                return Err(Error::Range);
            }
            if self.init & (1 << ch.core) != 0 {
                continue;
            }
            protected(cpu, |ep| {
                sysctl.enable_peripheral(ep, Peripheral::Pga(ch.core));
                sysctl.reset_peripheral(ep, Peripheral::Pga(ch.core));
                port.configure(ep, ch.core, ch.gain);
            });
            self.init |= 1 << ch.core;
            debug!("PGA{} gain {}", ch.core, ch.gain);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hac_core::silicon::{F28004x, F28p65x};
    use hac_hal::Platform;
    use hac_hal_sim::SimPlatform;

    #[test]
    fn test_setup_sets_gain_once() {
        let p = SimPlatform::new();
        let channels = [
            PgaChannel {
                enable: true,
                core: 3,
                gain: Gain::X12,
            },
            PgaChannel {
                enable: false,
                core: 4,
                gain: Gain::X3,
            },
        ];
        let mut pga = Pga::new(&channels);
        pga.setup::<F28004x, _, _>(p.pga(), p.sysctl(), p.cpu()).unwrap();
        pga.setup::<F28004x, _, _>(p.pga(), p.sysctl(), p.cpu()).unwrap();

        assert_eq!(p.sim_pga().gain(3), Some(Gain::X12));
        assert_eq!(p.sim_pga().gain(4), None);
        assert_eq!(p.sim_sysctl().reset_count(Peripheral::Pga(3)), 1);
        assert!(pga.is_configured(3));
    }

    #[test]
    fn test_range_and_family() {
        let p = SimPlatform::new();
        let channels = [PgaChannel {
            enable: true,
            core: 6,
            gain: Gain::X3,
        }];
        let mut pga = Pga::new(&channels);
        assert_eq!(
            pga.setup::<F28004x, _, _>(p.pga(), p.sysctl(), p.cpu()),
            Err(Error::Range)
        );
        assert_eq!(
            pga.setup::<F28p65x, _, _>(p.pga(), p.sysctl(), p.cpu()),
            Err(Error::Unavailable)
        );
    }
}

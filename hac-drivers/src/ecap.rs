//! eCAP driver
//!
//! Each core measures one digital input routed through the input X-BAR
//! line of the same number: event 1 latches the period on the rising edge
//! and restarts the counter, event 2 latches the high time on the falling
//! edge.

use hac_core::io::registry::PinMux;
use hac_core::silicon::Silicon;
use hac_core::{debug, error, Error, PinCode, PinFun};
use hac_hal::ecap::EcapPort;
use hac_hal::protect::{protected, Protect};
use hac_hal::sysctl::{Peripheral, SysCtl};

pub const MAX_CORE: u8 = 7;

/// eCAP channel descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EcapChannel {
    pub enable: bool,
    /// Core (1 is ECAP1)
    pub core: u8,
    /// Input pin, connected as a digital input
    pub io: PinCode,
    /// Input divider (1 or an even number up to 62)
    pub div: u16,
}

/// Latest capture of a core, in SYSCLK ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Capture {
    pub period: u32,
    pub high: u32,
}

pub struct Ecap<'c> {
    channels: &'c [EcapChannel],
    init: u16,
}

impl<'c> Ecap<'c> {
    pub fn new(channels: &'c [EcapChannel]) -> Self {
        Self { channels, init: 0 }
    }

    pub fn is_configured(&self, core: u8) -> bool {
        core <= MAX_CORE && self.init & (1 << core) != 0
    }

    /// Set up the core of every enabled channel once
    pub fn setup<S: Silicon, P: EcapPort, C: SysCtl>(
        &mut self,
        port: &P,
        sysctl: &C,
        cpu: &dyn Protect,
        pins: &mut dyn PinMux,
    ) -> Result<(), Error> {
        if !S::HAS_ECAP {
            return Err(Error::Unavailable);
        }
        let channels = self.channels;
        for ch in channels.iter().filter(|c| c.enable) {
            if !(1..=MAX_CORE).contains(&ch.core) {
                return Err(Error::Range);
            }
            if self.is_configured(ch.core) {
                continue;
            }
            if let Err(e) = setup_core(port, sysctl, cpu, pins, ch) {
                error!("ECAP{} setup failed: {}", ch.core, e);
                return Err(e);
            }
            self.init |= 1 << ch.core;
        }
        Ok(())
    }

    /// Period and high time last captured on a core
    pub fn capture<P: EcapPort>(&self, port: &P, core: u8) -> Result<Capture, Error> {
        if !self.is_configured(core) {
            return Err(Error::State);
        }
        Ok(Capture {
            period: port.capture(core, 1),
            high: port.capture(core, 2),
        })
    }
}

fn setup_core<P: EcapPort, C: SysCtl>(
    port: &P,
    sysctl: &C,
    cpu: &dyn Protect,
    pins: &mut dyn PinMux,
    ch: &EcapChannel,
) -> Result<(), Error> {
    protected(cpu, |ep| sysctl.enable_peripheral(ep, Peripheral::Ecap(ch.core)));
    pins.connect(ch.io, PinFun::DIN)?;
    protected(cpu, |ep| {
        port.route_input(ep, ch.core, ch.io.pin());
        port.configure(ep, ch.core, ch.div >> 1);
    });
    debug!("ECAP{} on pin {}", ch.core, ch.io.pin());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hac_core::id::Identity;
    use hac_core::io::registry::PinRegistry;
    use hac_core::silicon::f28004x::pins as p4;
    use hac_core::silicon::{F2803x, F28004x};
    use hac_hal::Platform;
    use hac_hal_sim::SimPlatform;

    #[test]
    fn test_setup_routes_input() {
        let p = SimPlatform::new();
        let mut reg = PinRegistry::<F28004x, _>::new(p.gpio(), p.cpu());
        reg.reset(&Identity::virtual_for::<F28004x>());

        let channels = [EcapChannel {
            enable: true,
            core: 2,
            io: p4::IO24_DIN,
            div: 4,
        }];
        let mut ecap = Ecap::new(&channels);
        assert_eq!(ecap.capture(p.ecap(), 2), Err(Error::State));

        ecap.setup::<F28004x, _, _>(p.ecap(), p.sysctl(), p.cpu(), &mut reg)
            .unwrap();
        assert_eq!(p.sim_ecap().route(2), Some(24));
        assert_eq!(p.sim_ecap().prescale(2), Some(2));
        assert!(p.sim_sysctl().is_enabled(Peripheral::Ecap(2)));
        assert!(reg.status(p4::IO24_DIN).unwrap().connected);

        p.sim_ecap().set_capture(2, 1, 1000);
        p.sim_ecap().set_capture(2, 2, 250);
        assert_eq!(
            ecap.capture(p.ecap(), 2),
            Ok(Capture {
                period: 1000,
                high: 250
            })
        );

        // Already set up: no second connect of the same pin
        ecap.setup::<F28004x, _, _>(p.ecap(), p.sysctl(), p.cpu(), &mut reg)
            .unwrap();
    }

    #[test]
    fn test_unavailable_on_f2803x() {
        let p = SimPlatform::new();
        let mut reg = PinRegistry::<F28004x, _>::new(p.gpio(), p.cpu());
        reg.reset(&Identity::virtual_for::<F28004x>());
        let mut ecap = Ecap::new(&[]);
        assert_eq!(
            ecap.setup::<F2803x, _, _>(p.ecap(), p.sysctl(), p.cpu(), &mut reg),
            Err(Error::Unavailable)
        );
    }

    #[test]
    fn test_core_out_of_range() {
        let p = SimPlatform::new();
        let mut reg = PinRegistry::<F28004x, _>::new(p.gpio(), p.cpu());
        reg.reset(&Identity::virtual_for::<F28004x>());
        let channels = [EcapChannel {
            enable: true,
            core: 8,
            io: p4::IO24_DIN,
            div: 1,
        }];
        let mut ecap = Ecap::new(&channels);
        assert_eq!(
            ecap.setup::<F28004x, _, _>(p.ecap(), p.sysctl(), p.cpu(), &mut reg),
            Err(Error::Range)
        );
    }
}

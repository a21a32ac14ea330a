//! Sigma-delta filter driver
//!
//! Channels run Sinc3 data filters with 16-bit output. The data pin picks
//! the filter (`SD1_Dn` feeds filter `n - 1`); the result shift is derived
//! from the oversampling ratio so the output never overflows.

use hac_core::io::registry::PinMux;
use hac_core::silicon::Silicon;
use hac_core::{debug, error, info, Error, PinCode, PinFun, PinGroup};
use hac_hal::protect::{protected, Protect};
use hac_hal::sdfm::{FilterConfig, SdfmPort};
use hac_hal::sysctl::{Peripheral, SysCtl};

/// Filters of the module
pub const FILTERS: u8 = 4;
pub const MAX_OVERSAMPLING: u16 = 256;

/// Upper oversampling bound of each shift step
const OSR_LIMIT: [u16; 12] = [31, 40, 50, 63, 80, 101, 127, 161, 181, 203, 255, 256];
const OSR_SHIFT: [u16; 12] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 8, 9, 10];

/// SDFM channel descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SdfmChannel {
    pub enable: bool,
    /// Modulator data pin
    pub io: PinCode,
    /// Modulator clock pin, [`PinCode::IOX`] when shared
    pub io_clk: PinCode,
    /// Sinc3 oversampling ratio (1..256)
    pub oversampling: u16,
    /// Modulator clock mode
    pub clock_mode: u16,
}

/// Result shift for a Sinc3 filter with 16-bit output
pub fn shift_for(oversampling: u16) -> Result<u16, Error> {
    if oversampling == 0 {
        return Err(Error::Range);
    }
    OSR_LIMIT
        .iter()
        .position(|limit| oversampling <= *limit)
        .map(|i| OSR_SHIFT[i])
        .ok_or(Error::Range)
}

/// Filter fed by an `SD1_Dn` / `SD1_Cn` pin function
pub fn filter_of(fun: PinFun) -> Result<u8, Error> {
    if fun.group() != PinGroup::SD {
        return Err(Error::FunMismatch);
    }
    Ok(fun.index() >> 1)
}

pub struct Sdfm<'c> {
    channels: &'c [SdfmChannel],
    master: bool,
    /// Filters configured, bit per filter
    init: u16,
}

impl<'c> Sdfm<'c> {
    pub fn new(channels: &'c [SdfmChannel]) -> Self {
        Self {
            channels,
            master: false,
            init: 0,
        }
    }

    pub fn is_configured(&self, filter: u8) -> bool {
        filter < FILTERS && self.init & (1 << filter) != 0
    }

    /// Enable the module once and configure every enabled channel
    pub fn setup<S: Silicon, P: SdfmPort, C: SysCtl>(
        &mut self,
        port: &P,
        sysctl: &C,
        cpu: &dyn Protect,
        pins: &mut dyn PinMux,
    ) -> Result<(), Error> {
        if !S::HAS_SDFM {
            return Err(Error::Unavailable);
        }
        if !self.master {
            protected(cpu, |ep| {
                sysctl.enable_peripheral(ep, Peripheral::Sdfm(1));
                port.enable_master(ep);
            });
            self.master = true;
            info!("SDFM1 enabled");
        }

        let channels = self.channels;
        for ch in channels.iter().filter(|c| c.enable) {
            if let Err(e) = self.setup_channel(port, cpu, pins, ch) {
                error!("SDFM channel on pin {} failed: {}", ch.io.pin(), e);
                return Err(e);
            }
        }
        Ok(())
    }

    fn setup_channel<P: SdfmPort>(
        &mut self,
        port: &P,
        cpu: &dyn Protect,
        pins: &mut dyn PinMux,
        ch: &SdfmChannel,
    ) -> Result<(), Error> {
        let filter = filter_of(ch.io.fun())?;
        let shift = shift_for(ch.oversampling)?;
        if self.is_configured(filter) {
            return Ok(());
        }

        let cfg = FilterConfig {
            oversampling: ch.oversampling,
            shift,
            clock_mode: ch.clock_mode,
        };
        protected(cpu, |ep| port.configure_filter(ep, filter, cfg));

        pins.connect(ch.io, PinFun::NONE)?;
        if !ch.io_clk.is_none() {
            pins.connect(ch.io_clk, PinFun::NONE)?;
        }

        self.init |= 1 << filter;
        debug!("SDFM filter {} OSR {} shift {}", filter, ch.oversampling, shift);
        Ok(())
    }

    /// Latest output of a configured filter
    pub fn data<P: SdfmPort>(&self, port: &P, filter: u8) -> Result<i16, Error> {
        if !self.is_configured(filter) {
            return Err(Error::State);
        }
        Ok(port.data(filter))
    }
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
    fn test_shift_table_edges() {
        assert_eq!(shift_for(1), Ok(0));
        assert_eq!(shift_for(31), Ok(0));
        assert_eq!(shift_for(32), Ok(1));
        assert_eq!(shift_for(128), Ok(7));
        assert_eq!(shift_for(200), Ok(8));
        assert_eq!(shift_for(256), Ok(10));
        assert_eq!(shift_for(257), Err(Error::Range));
        assert_eq!(shift_for(0), Err(Error::Range));
    }

    #[test]
    fn test_filter_from_pin_function() {
        assert_eq!(filter_of(PinFun::SD1_D1), Ok(0));
        assert_eq!(filter_of(PinFun::SD1_C3), Ok(2));
        assert_eq!(filter_of(PinFun::DIN), Err(Error::FunMismatch));
    }

    #[test]
    fn test_setup_configures_filter_and_pins() {
        let p = SimPlatform::new();
        let mut reg = PinRegistry::<F28004x, _>::new(p.gpio(), p.cpu());
        reg.reset(&Identity::virtual_for::<F28004x>());

        let channels = [SdfmChannel {
            enable: true,
            io: p4::IO16_SD1_D1,
            io_clk: p4::IO17_SD1_C1,
            oversampling: 128,
            clock_mode: 0,
        }];
        let mut sdfm = Sdfm::new(&channels);
        sdfm.setup::<F28004x, _, _>(p.sdfm(), p.sysctl(), p.cpu(), &mut reg)
            .unwrap();

        assert!(p.sim_sdfm().master_enabled());
        assert_eq!(
            p.sim_sdfm().filter(0),
            Some(FilterConfig {
                oversampling: 128,
                shift: 7,
                clock_mode: 0
            })
        );
        assert!(reg.status(p4::IO17_SD1_C1).unwrap().connected);

        p.sim_sdfm().set_data(0, -1234);
        assert_eq!(sdfm.data(p.sdfm(), 0), Ok(-1234));
        assert_eq!(sdfm.data(p.sdfm(), 1), Err(Error::State));

        sdfm.setup::<F28004x, _, _>(p.sdfm(), p.sysctl(), p.cpu(), &mut reg)
            .unwrap();
    }

    #[test]
    fn test_rejects_non_sd_pin_and_family() {
        let p = SimPlatform::new();
        let mut reg = PinRegistry::<F28004x, _>::new(p.gpio(), p.cpu());
        reg.reset(&Identity::virtual_for::<F28004x>());

        let channels = [SdfmChannel {
            enable: true,
            io: p4::IO16_DIN,
            io_clk: PinCode::IOX,
            oversampling: 64,
            clock_mode: 0,
        }];
        let mut sdfm = Sdfm::new(&channels);
        assert_eq!(
            sdfm.setup::<F28004x, _, _>(p.sdfm(), p.sysctl(), p.cpu(), &mut reg),
            Err(Error::FunMismatch)
        );
        assert_eq!(
            sdfm.setup::<F2803x, _, _>(p.sdfm(), p.sysctl(), p.cpu(), &mut reg),
            Err(Error::Unavailable)
        );
    }
}

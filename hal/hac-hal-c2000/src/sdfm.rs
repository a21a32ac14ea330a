//! Sigma-delta filter module
//!
//! Four filter channels, each with a 16-word parameter block starting at
//! word 0x10.

use hac_hal::sdfm::{FilterConfig, SdfmPort};
use hac_hal::Eallow;

use crate::reg::{Field, Reg};

/// SDFM1 of the F28004x
pub const SDFM1_F28004X: usize = 0x5E00;

const SDMFILEN: u16 = 0x06;
const CHANNEL_BASE: u16 = 0x10;
const CHANNEL_STRIDE: u16 = 0x10;
const SDCTLPARM: u16 = 0x00;
const SDDFPARM: u16 = 0x01;
const SDDPARM: u16 = 0x02;
const SDDATA: u16 = 0x06;

const MFE: Field = Field::bit(11);
const MOD: Field = Field::new(0, 2);
const DOSR: Field = Field::new(0, 8);
const FEN: Field = Field::bit(8);
const SST: Field = Field::new(10, 2);
const SINC3: u32 = 3;
/// 0 selects the 16-bit data format
const DR: Field = Field::bit(10);
const SH: Field = Field::new(11, 5);

pub struct C2000Sdfm {
    base: *mut u16,
}

impl C2000Sdfm {
    /// # Safety
    /// `base` must be the SDFM register file of the running device.
    pub const unsafe fn new(base: usize) -> Self {
        Self {
            base: base as *mut u16,
        }
    }

    fn reg<T: crate::reg::RegValue>(&self, offset: u16) -> Reg<T> {
        // SAFETY: offsets stay inside the module's register file
        unsafe { Reg::offset(self.base, offset) }
    }

    fn channel(&self, filter: u8, offset: u16) -> Reg<u16> {
        self.reg(CHANNEL_BASE + u16::from(filter) * CHANNEL_STRIDE + offset)
    }
}

impl SdfmPort for C2000Sdfm {
    fn enable_master(&self, _ep: &Eallow<'_>) {
        self.reg::<u16>(SDMFILEN).set_bits(MFE.mask());
    }

    fn configure_filter(&self, _ep: &Eallow<'_>, filter: u8, cfg: FilterConfig) {
        self.channel(filter, SDCTLPARM)
            .write_field(MOD, u32::from(cfg.clock_mode));
        let df = self.channel(filter, SDDFPARM);
        df.write_field(DOSR, u32::from(cfg.oversampling.clamp(1, 256) - 1));
        df.write_field(SST, SINC3);
        df.set_bits(FEN.mask());
        let dp = self.channel(filter, SDDPARM);
        dp.write_field(DR, 0);
        dp.write_field(SH, u32::from(cfg.shift));
    }

    fn data(&self, filter: u8) -> i16 {
        // 16-bit results sit in the low word of SDDATA
        self.channel(filter, SDDATA).read() as i16
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reg::fake::Block;
    use hac_hal::Protect;

    struct NoProtect;

    impl Protect for NoProtect {
        fn allow(&self) {}
        fn deny(&self) {}
    }

    #[test]
    fn test_filter_parameters() {
        let mut b = Block::<0x60>::new();
        let sdfm = unsafe { C2000Sdfm::new(b.base() as usize) };
        let ep = Eallow::new(&NoProtect);
        sdfm.enable_master(&ep);
        sdfm.configure_filter(&ep, 2, FilterConfig { oversampling: 128, shift: 6, clock_mode: 0 });
        drop(ep);
        assert_eq!(b.0[SDMFILEN as usize], 1 << 11);
        assert_eq!(b.0[0x31], 127 | (1 << 8) | (3 << 10));
        assert_eq!(b.0[0x32], 6 << 11);
        b.0[0x36] = (-1200i16) as u16;
        assert_eq!(sdfm.data(2), -1200);
    }
}

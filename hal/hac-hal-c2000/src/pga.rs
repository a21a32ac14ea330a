//! Programmable gain amplifiers

use hac_hal::pga::{Gain, PgaPort};
use hac_hal::Eallow;

use crate::reg::{Field, Reg};

/// PGA1 of the F28004x (PGA2..7 follow at the stride)
pub const PGA1_F28004X: usize = 0x5B00;
pub const PGA_STRIDE_F28004X: usize = 0x10;

const PGACTL: u16 = 0x00;
const PGAEN: Field = Field::bit(0);
const FILTRESSEL: Field = Field::new(1, 4);
const GAIN: Field = Field::new(5, 3);

pub struct C2000Pga {
    base: usize,
    stride: usize,
}

impl C2000Pga {
    /// # Safety
    /// `base` must be the PGA1 register file and `stride` the distance
    /// between amplifiers of the running device.
    pub const unsafe fn new(base: usize, stride: usize) -> Self {
        Self { base, stride }
    }
}

impl PgaPort for C2000Pga {
    fn configure(&self, _ep: &Eallow<'_>, core: u8, gain: Gain) {
        let base = self.base + usize::from(core.saturating_sub(1)) * self.stride;
        // SAFETY: control word of the amplifier's register file
        let ctl = unsafe { Reg::<u16>::offset(base as *mut u16, PGACTL) };
        let code = match gain {
            Gain::X3 => 0,
            Gain::X6 => 1,
            Gain::X12 => 2,
            Gain::X24 => 3,
        };
        ctl.write_field(GAIN, code);
        ctl.write_field(FILTRESSEL, 0);
        ctl.set_bits(PGAEN.mask());
    }
}

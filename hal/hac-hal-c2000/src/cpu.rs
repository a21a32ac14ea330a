//! C28x CPU controls
//!
//! The protection bracket and interrupt mask are single instructions
//! (EALLOW, EDIS, EINT, DINT, IDLE) with no Rust spelling; the runtime
//! shim linked under the `rt` feature exports them as C symbols. ST1
//! bit 0 (INTM) is read back through the shim as well.

use hac_hal::{Cpu, Protect};

use crate::reg::{Field, Reg};

extern "C" {
    fn hac_rt_eallow();
    fn hac_rt_edis();
    fn hac_rt_eint();
    fn hac_rt_dint();
    fn hac_rt_idle();
    fn hac_rt_st1() -> u16;
}

/// Watchdog control register of the F28004x
pub const WDCR_F28004X: usize = 0x7029;

/// Check bits must read 0b101, anything else resets the device
const WDCHK: Field = Field::new(3, 3);
const INTM: u16 = 1 << 0;

pub struct C2000Cpu {
    wdcr: Reg<u16>,
}

impl C2000Cpu {
    /// # Safety
    /// `wdcr` must be the watchdog control register of the running device.
    pub const unsafe fn new(wdcr: usize) -> Self {
        Self { wdcr: Reg::at(wdcr) }
    }
}

impl Protect for C2000Cpu {
    fn allow(&self) {
        // SAFETY: single instruction, no memory effects
        unsafe { hac_rt_eallow() }
    }

    fn deny(&self) {
        // SAFETY: single instruction, no memory effects
        unsafe { hac_rt_edis() }
    }
}

impl Cpu for C2000Cpu {
    fn enable_interrupts(&self) {
        // SAFETY: single instruction
        unsafe { hac_rt_eint() }
    }

    fn disable_interrupts(&self) {
        // SAFETY: single instruction
        unsafe { hac_rt_dint() }
    }

    fn interrupts_enabled(&self) -> bool {
        // SAFETY: reads the status register only
        unsafe { hac_rt_st1() & INTM == 0 }
    }

    fn idle(&self) {
        // SAFETY: single instruction
        unsafe { hac_rt_idle() }
    }

    fn reset_device(&self) {
        self.allow();
        // Wrong check bits trigger an immediate watchdog reset
        self.wdcr.write_field(WDCHK, 0);
        loop {
            self.idle();
        }
    }
}

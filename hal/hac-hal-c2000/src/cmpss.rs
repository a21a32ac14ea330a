//! Comparator subsystems, their analog input muxes and the ePWM X-BAR
//!
//! The high and low comparators of a core share one analog input. Both
//! positive-input muxes live in the analog subsystem block; the comparator
//! outputs reach the ePWMs through the ePWM X-BAR.

use hac_hal::cmpss::CmpssPort;
use hac_hal::Eallow;

use crate::reg::{Field, Reg};

/// Register block bases
#[derive(Debug, Clone, Copy)]
pub struct CmpssMap {
    /// CMPSS1 register file
    pub base: usize,
    pub stride: usize,
    /// Analog subsystem block
    pub analog: usize,
    /// ePWM X-BAR block
    pub xbar: usize,
}

pub const CMPSS_F28004X: CmpssMap = CmpssMap {
    base: 0x5C80,
    stride: 0x20,
    analog: 0x5D700,
    xbar: 0x7A00,
};

mod off {
    pub const COMPCTL: u16 = 0x00;
    pub const COMPHYSCTL: u16 = 0x01;
    pub const COMPSTSCLR: u16 = 0x03;
    pub const COMPDACCTL: u16 = 0x04;
    pub const DACHVALS: u16 = 0x06;
    pub const DACLVALS: u16 = 0x12;
}

/// Analog subsystem positive-input muxes (32-bit)
const CMPHPMXSEL: u16 = 0x82;
const CMPLPMXSEL: u16 = 0x84;
const MXSEL_WIDTH: u8 = 3;

/// Trip `t` mux configuration is at `4 * slot(t)`, its enable at
/// `TRIPMUXENABLE + 2 * slot(t)`
const TRIPMUXENABLE: u16 = 0x20;

/// Low comparator inverted, DAC enabled, both sourced from the DAC and
/// routed asynchronously
const COMPCTL_WINDOW: u16 = (1 << 9) | (1 << 15);
const RAMPSOURCE: Field = Field::new(1, 4);
const HLATCHCLR: u16 = 1 << 1;
const LLATCHCLR: u16 = 1 << 9;

/// X-BAR trips 4, 5 and 7..12 in register order (TRIP6 has no X-BAR)
fn trip_slot(trip: u16) -> Option<u16> {
    match trip {
        4 | 5 => Some(trip - 4),
        7..=12 => Some(trip - 5),
        _ => None,
    }
}

pub struct C2000Cmpss {
    map: CmpssMap,
}

impl C2000Cmpss {
    /// # Safety
    /// Every base in `map` must be the matching register block of the
    /// running device.
    pub const unsafe fn new(map: CmpssMap) -> Self {
        Self { map }
    }

    fn reg(&self, core: u8, offset: u16) -> Reg<u16> {
        let base = self.map.base + usize::from(core.saturating_sub(1)) * self.map.stride;
        // SAFETY: offsets stay inside the core's register file
        unsafe { Reg::offset(base as *mut u16, offset) }
    }

    fn reg32(base: usize, offset: u16) -> Reg<u32> {
        // SAFETY: offsets stay inside the block given to `new`
        unsafe { Reg::offset(base as *mut u16, offset) }
    }
}

impl CmpssPort for C2000Cmpss {
    fn select_input(&self, _ep: &Eallow<'_>, mux: u16, value: u16) {
        let field = Field::new(mux as u8, MXSEL_WIDTH);
        Self::reg32(self.map.analog, CMPHPMXSEL).write_field(field, u32::from(value));
        Self::reg32(self.map.analog, CMPLPMXSEL).write_field(field, u32::from(value));
    }

    fn configure(&self, _ep: &Eallow<'_>, core: u8, pwm_sync: u16) {
        self.reg(core, off::COMPCTL).write(COMPCTL_WINDOW);
        self.reg(core, off::COMPHYSCTL).write(0);
        // DAC from the shadow value, VDDA reference, blanking off
        let dac = self.reg(core, off::COMPDACCTL);
        dac.write(0);
        dac.write_field(RAMPSOURCE, u32::from(pwm_sync.saturating_sub(1)));
    }

    fn set_thresholds(&self, core: u8, high: u16, low: u16) {
        self.reg(core, off::DACHVALS).write(high);
        self.reg(core, off::DACLVALS).write(low);
    }

    fn clear_latch(&self, core: u8) {
        self.reg(core, off::COMPSTSCLR).write(HLATCHCLR | LLATCHCLR);
    }

    fn route_trip(&self, _ep: &Eallow<'_>, trip: u16, mux_config: u32, mux_enable: u32) {
        let Some(slot) = trip_slot(trip) else {
            return;
        };
        // Upper byte is the field position across MUX0TO15CFG:MUX16TO31CFG
        let shift = (mux_config >> 8) as u16;
        let cfg = Self::reg32(self.map.xbar, 4 * slot + 2 * (shift / 32));
        cfg.write_field(Field::new((shift % 32) as u8, 2), mux_config & 0b11);
        Self::reg32(self.map.xbar, TRIPMUXENABLE + 2 * slot).set_bits(mux_enable);
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

    struct Blocks {
        base: Block<0x40>,
        analog: Block<0x88>,
        xbar: Block<0x40>,
    }

    impl Blocks {
        fn cmpss(&mut self) -> C2000Cmpss {
            let map = CmpssMap {
                base: self.base.base() as usize,
                stride: 0x20,
                analog: self.analog.base() as usize,
                xbar: self.xbar.base() as usize,
            };
            unsafe { C2000Cmpss::new(map) }
        }
    }

    fn blocks() -> Blocks {
        Blocks {
            base: Block::new(),
            analog: Block::new(),
            xbar: Block::new(),
        }
    }

    #[test]
    fn test_window_comparator_setup() {
        let mut b = blocks();
        let cmpss = b.cmpss();
        let ep = Eallow::new(&NoProtect);
        cmpss.select_input(&ep, 0x06, 3);
        cmpss.configure(&ep, 2, 1);
        drop(ep);
        cmpss.set_thresholds(2, 4095, 0);
        cmpss.clear_latch(2);
        assert_eq!(b.analog.word32(CMPHPMXSEL as usize), 3 << 6);
        assert_eq!(b.analog.word32(CMPLPMXSEL as usize), 3 << 6);
        assert_eq!(b.base.0[0x20], (1 << 9) | (1 << 15));
        assert_eq!(b.base.0[0x20 + off::COMPDACCTL as usize], 0);
        assert_eq!(b.base.0[0x20 + off::DACHVALS as usize], 4095);
        assert_eq!(b.base.0[0x20 + off::COMPSTSCLR as usize], (1 << 1) | (1 << 9));
    }

    #[test]
    fn test_trip_routing_skips_trip6() {
        let mut b = blocks();
        let cmpss = b.cmpss();
        let ep = Eallow::new(&NoProtect);
        // CMPSS2 high or low (mux 2) to TRIP7
        cmpss.route_trip(&ep, 7, (4 << 8) | 1, 1 << 2);
        // CMPSS1 high or low to TRIP4
        cmpss.route_trip(&ep, 4, 1, 1);
        cmpss.route_trip(&ep, 6, 1, 1);
        drop(ep);
        assert_eq!(b.xbar.word32(8), 1 << 4);
        assert_eq!(b.xbar.word32(0x20 + 4), 1 << 2);
        assert_eq!(b.xbar.word32(0), 1);
        assert_eq!(b.xbar.word32(0x20), 1);
        assert_eq!(trip_slot(6), None);
    }
}

//! Type-1 eCAP modules and their input X-BAR lines

use hac_hal::ecap::EcapPort;
use hac_hal::Eallow;

use crate::reg::{Field, Reg};

/// ECAP1 of the F28004x (ECAP2..7 follow at the stride)
pub const ECAP1_F28004X: usize = 0x5200;
pub const ECAP_STRIDE_F28004X: usize = 0x40;
/// Input X-BAR block of the F28004x; INPUTnSELECT is word `n - 1`
pub const INPUT_XBAR_F28004X: usize = 0x7900;

/// CAPn is at `CAP1 + 2 * (n - 1)`
const CAP1: u16 = 0x04;
const ECCTL0: u16 = 0x12;
const ECCTL1: u16 = 0x14;
const ECCTL2: u16 = 0x15;

const INPUTSEL: Field = Field::new(0, 7);

const CAP1POL: Field = Field::bit(0);
const CTRRST1: Field = Field::bit(1);
const CAP2POL: Field = Field::bit(2);
const CAPLDEN: Field = Field::bit(8);
const PRESCALE: Field = Field::new(9, 5);
const FREE_SOFT: Field = Field::new(14, 2);

/// Continuous mode is CONT_ONESHT = 0
const STOP_WRAP: Field = Field::new(1, 2);
/// Wrap after event 2
const WRAP_EVENT_2: u32 = 1;
const TSCTRSTOP: Field = Field::bit(4);

pub struct C2000Ecap {
    base: usize,
    stride: usize,
    xbar: usize,
}

impl C2000Ecap {
    /// # Safety
    /// `base` must be the ECAP1 register file, `stride` the distance
    /// between modules and `xbar` the input X-BAR block of the running
    /// device.
    pub const unsafe fn new(base: usize, stride: usize, xbar: usize) -> Self {
        Self { base, stride, xbar }
    }

    fn reg<T: crate::reg::RegValue>(&self, core: u8, offset: u16) -> Reg<T> {
        let base = self.base + usize::from(core.saturating_sub(1)) * self.stride;
        // SAFETY: offsets stay inside the module's register file
        unsafe { Reg::offset(base as *mut u16, offset) }
    }
}

impl EcapPort for C2000Ecap {
    fn route_input(&self, _ep: &Eallow<'_>, core: u8, pin: u16) {
        // SAFETY: one select word per input line inside the X-BAR block
        let select = unsafe {
            Reg::<u16>::offset(self.xbar as *mut u16, u16::from(core.saturating_sub(1)))
        };
        select.write(pin);
        // Core n listens to input X-BAR line n
        self.reg::<u32>(core, ECCTL0)
            .write_field(INPUTSEL, u32::from(core.saturating_sub(1)));
    }

    fn configure(&self, _ep: &Eallow<'_>, core: u8, prescale: u16) {
        let ctl2 = self.reg::<u16>(core, ECCTL2);
        ctl2.clear_bits(TSCTRSTOP.mask());

        let ctl1 = self.reg::<u16>(core, ECCTL1);
        ctl1.write(0);
        ctl1.write_field(PRESCALE, u32::from(prescale));
        // Rising edge on event 1, falling on event 2
        ctl1.write_field(CAP1POL, 0);
        ctl1.write_field(CAP2POL, 1);
        ctl1.set_bits(CTRRST1.mask() | CAPLDEN.mask());
        ctl1.write_field(FREE_SOFT, 2);

        ctl2.write(0);
        ctl2.write_field(STOP_WRAP, WRAP_EVENT_2);
        ctl2.set_bits(TSCTRSTOP.mask());
    }

    fn capture(&self, core: u8, event: u8) -> u32 {
        let offset = CAP1 + 2 * u16::from(event.clamp(1, 4) - 1);
        self.reg::<u32>(core, offset).read()
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
    fn test_second_core_routes_and_captures() {
        let mut m = Block::<0x80>::new();
        let mut x = Block::<0x10>::new();
        let ecap = unsafe { C2000Ecap::new(m.base() as usize, 0x40, x.base() as usize) };
        let ep = Eallow::new(&NoProtect);
        ecap.route_input(&ep, 2, 24);
        ecap.configure(&ep, 2, 3);
        drop(ep);
        assert_eq!(x.0[1], 24);
        assert_eq!(m.word32(0x40 + ECCTL0 as usize), 1);
        let ctl1 = m.0[0x40 + ECCTL1 as usize];
        assert_eq!((ctl1 >> 9) & 0x1F, 3);
        assert_eq!(ctl1 & 0b111, 0b110);
        assert_ne!(ctl1 & (1 << 8), 0);
        assert_eq!(m.0[0x40 + ECCTL2 as usize], (1 << 1) | (1 << 4));

        m.set_word32(0x40 + 0x06, 70_000);
        assert_eq!(ecap.capture(2, 2), 70_000);
    }
}

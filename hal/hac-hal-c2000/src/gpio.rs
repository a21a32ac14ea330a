//! Type-4 GPIO block (F28004x, F28P65x)
//!
//! Control registers are laid out per port of 32 pins with a stride of
//! 0x40 words; data registers per port with a stride of 8 words. Two bits
//! per pin in the MUX/GMUX/QSEL pairs, one bit per pin elsewhere.

use hac_hal::gpio::{AnalogMode, Direction, GpioPort, PadType, Qualification};
use hac_hal::Eallow;

use crate::reg::{Field, Reg};

/// GPIO control block base of the F28004x
pub const CTRL_F28004X: usize = 0x7C00;
/// GPIO data block base of the F28004x
pub const DATA_F28004X: usize = 0x7F00;

const CTRL_STRIDE: u16 = 0x40;
const DATA_STRIDE: u16 = 0x08;
/// Ports A..H
const PORTS: u8 = 8;

mod ctrl {
    pub const QSEL1: u16 = 0x02;
    pub const MUX1: u16 = 0x06;
    pub const DIR: u16 = 0x0A;
    pub const PUD: u16 = 0x0C;
    pub const INV: u16 = 0x10;
    pub const ODR: u16 = 0x12;
    pub const AMSEL: u16 = 0x14;
    pub const GMUX1: u16 = 0x20;
    pub const LOCK: u16 = 0x3C;
}

mod data {
    pub const DAT: u16 = 0x00;
    pub const SET: u16 = 0x02;
    pub const CLEAR: u16 = 0x04;
    pub const TOGGLE: u16 = 0x06;
}

/// GPIO port over the control and data register blocks
pub struct C2000Gpio {
    ctrl: *mut u16,
    data: *mut u16,
}

impl C2000Gpio {
    /// # Safety
    /// `ctrl` and `data` must be the GPIO control and data block bases of
    /// the running device, and no other code may own these blocks.
    pub const unsafe fn new(ctrl: usize, data: usize) -> Self {
        Self {
            ctrl: ctrl as *mut u16,
            data: data as *mut u16,
        }
    }

    fn ctrl32(&self, offset: u16) -> Reg<u32> {
        // SAFETY: offsets stay inside the control block given to `new`
        unsafe { Reg::offset(self.ctrl, offset) }
    }

    fn data32(&self, offset: u16) -> Reg<u32> {
        // SAFETY: offsets stay inside the data block given to `new`
        unsafe { Reg::offset(self.data, offset) }
    }

    /// Per-port control register of `pin`
    fn port_reg(&self, pin: u16, reg: u16) -> Reg<u32> {
        self.ctrl32((pin / 32) * CTRL_STRIDE + reg)
    }

    /// Two-bit field of `pin` in a 1/2 register pair (QSEL, MUX, GMUX)
    fn pair_field(&self, pin: u16, first: u16) -> (Reg<u32>, Field) {
        let bit = pin % 32;
        let reg = self.port_reg(pin, first + (bit / 16) * 2);
        (reg, Field::nth((bit % 16) as u8, 2))
    }

    fn pin_bit(pin: u16) -> u32 {
        1 << (pin % 32)
    }

    fn set_pin_bit(&self, pin: u16, reg: u16, on: bool) {
        let r = self.port_reg(pin, reg);
        if on {
            r.set_bits(Self::pin_bit(pin));
        } else {
            r.clear_bits(Self::pin_bit(pin));
        }
    }

    fn data_reg(&self, pin: u16, reg: u16) -> Reg<u32> {
        self.data32((pin / 32) * DATA_STRIDE + reg)
    }
}

impl GpioPort for C2000Gpio {
    fn unlock_port(&self, _ep: &Eallow<'_>, port: u8) {
        self.ctrl32(u16::from(port) * CTRL_STRIDE + ctrl::LOCK).write(0);
    }

    fn write_ctrl(&self, _ep: &Eallow<'_>, offset: u16, value: u32) {
        self.ctrl32(offset).write(value);
    }

    fn clear_data(&self, _ep: &Eallow<'_>) {
        for port in 0..u16::from(PORTS) {
            self.data32(port * DATA_STRIDE + data::DAT).write(0);
        }
    }

    fn set_analog_mode(&self, _ep: &Eallow<'_>, pin: u16, mode: AnalogMode) {
        self.set_pin_bit(pin, ctrl::AMSEL, mode == AnalogMode::Enabled);
    }

    fn set_pad(&self, _ep: &Eallow<'_>, pin: u16, pad: PadType) {
        let (pud, inv, odr) = match pad {
            PadType::Standard => (true, false, false),
            PadType::PullUp => (false, false, false),
            PadType::Invert => (true, true, false),
            PadType::OpenDrain => (true, false, true),
        };
        self.set_pin_bit(pin, ctrl::PUD, pud);
        self.set_pin_bit(pin, ctrl::INV, inv);
        self.set_pin_bit(pin, ctrl::ODR, odr);
    }

    fn set_qualification(&self, _ep: &Eallow<'_>, pin: u16, qual: Qualification) {
        let value = match qual {
            Qualification::Sync => 0,
            Qualification::ThreeSample => 1,
            Qualification::SixSample => 2,
            Qualification::Async => 3,
        };
        let (reg, field) = self.pair_field(pin, ctrl::QSEL1);
        reg.write_field(field, value);
    }

    fn set_direction(&self, _ep: &Eallow<'_>, pin: u16, dir: Direction) {
        self.set_pin_bit(pin, ctrl::DIR, dir == Direction::Output);
    }

    fn set_mux(&self, _ep: &Eallow<'_>, pin: u16, mux: u8) {
        // GMUX before MUX, or the pin glitches through an unrelated function
        let (gmux, field) = self.pair_field(pin, ctrl::GMUX1);
        let (mux_reg, _) = self.pair_field(pin, ctrl::MUX1);
        mux_reg.write_field(field, 0);
        gmux.write_field(field, u32::from(mux >> 2));
        mux_reg.write_field(field, u32::from(mux & 0x3));
    }

    fn write(&self, pin: u16, high: bool) {
        let reg = if high { data::SET } else { data::CLEAR };
        self.data_reg(pin, reg).write(Self::pin_bit(pin));
    }

    fn toggle(&self, pin: u16) {
        self.data_reg(pin, data::TOGGLE).write(Self::pin_bit(pin));
    }

    fn read(&self, pin: u16) -> bool {
        self.data_reg(pin, data::DAT).read() & Self::pin_bit(pin) != 0
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
    fn test_mux_splits_into_gmux_and_mux() {
        let mut c = Block::<0x200>::new();
        let mut d = Block::<0x40>::new();
        let gpio = unsafe { C2000Gpio::new(c.base() as usize, d.base() as usize) };
        let ep = Eallow::new(&NoProtect);
        // GPIO33 (port B, bit 1), mux 6 = GMUX 1 / MUX 2
        gpio.set_mux(&ep, 33, 6);
        drop(ep);
        assert_eq!(c.word32(0x40 + 0x20), 1 << 2);
        assert_eq!(c.word32(0x40 + 0x06), 2 << 2);
    }

    #[test]
    fn test_qualification_uses_second_register_above_pin_15() {
        let mut c = Block::<0x200>::new();
        let mut d = Block::<0x40>::new();
        let gpio = unsafe { C2000Gpio::new(c.base() as usize, d.base() as usize) };
        let ep = Eallow::new(&NoProtect);
        gpio.set_qualification(&ep, 17, Qualification::Async);
        drop(ep);
        assert_eq!(c.word32(0x04), 0b11 << 2);
        assert_eq!(c.word32(0x02), 0);
    }

    #[test]
    fn test_pad_pull_up_clears_pud() {
        let mut c = Block::<0x200>::new();
        let mut d = Block::<0x40>::new();
        c.set_word32(0x0C, u32::MAX);
        let gpio = unsafe { C2000Gpio::new(c.base() as usize, d.base() as usize) };
        let ep = Eallow::new(&NoProtect);
        gpio.set_pad(&ep, 5, PadType::PullUp);
        drop(ep);
        assert_eq!(c.word32(0x0C), !(1 << 5));
    }

    #[test]
    fn test_data_set_clear_registers() {
        let mut c = Block::<0x200>::new();
        let mut d = Block::<0x40>::new();
        let gpio = unsafe { C2000Gpio::new(c.base() as usize, d.base() as usize) };
        gpio.write(40, true);
        assert_eq!(d.word32(0x08 + 0x02), 1 << 8);
        gpio.write(40, false);
        assert_eq!(d.word32(0x08 + 0x04), 1 << 8);
        d.set_word32(0x08, 1 << 8);
        assert!(gpio.read(40));
    }
}

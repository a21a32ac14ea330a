//! I2C controllers
//!
//! Repeat-mode master with the FIFOs disabled; the transport drives every
//! byte through the status flags.

use hac_hal::i2c::{I2cPort, Mode, Status};

use crate::reg::{Field, Reg};

/// I2C-A and I2C-B of the F28004x
pub const I2C_F28004X: [usize; 2] = [0x7300, 0x7340];

mod off {
    pub const STR: u16 = 0x02;
    pub const CLKL: u16 = 0x03;
    pub const CLKH: u16 = 0x04;
    pub const DRR: u16 = 0x06;
    pub const SAR: u16 = 0x07;
    pub const DXR: u16 = 0x08;
    pub const MDR: u16 = 0x09;
    pub const PSC: u16 = 0x0C;
    pub const FFTX: u16 = 0x20;
    pub const FFRX: u16 = 0x21;
}

const BC: Field = Field::new(0, 3);
const IRS: u16 = 1 << 5;
const RM: u16 = 1 << 7;
const XA: u16 = 1 << 8;
const TRX: u16 = 1 << 9;
const MST: u16 = 1 << 10;
const STP: u16 = 1 << 11;
const STT: u16 = 1 << 13;
const FREE: u16 = 1 << 14;
const NACKMOD: u16 = 1 << 15;
const BB: u16 = 1 << 12;

/// Prescaled module clock inside the 7..12 MHz window
const MODULE_HZ: u32 = 10_000_000;

/// `(IPSC, ICCL, ICCH)` for a 50 % duty bus clock
fn clock_dividers(sysclk_hz: u32, bitrate: u32) -> (u16, u16, u16) {
    let ipsc = (sysclk_hz / MODULE_HZ).saturating_sub(1);
    // Fixed low/high extension of the divider, set by IPSC
    let d = match ipsc {
        0 => 7,
        1 => 6,
        _ => 5,
    };
    let module_hz = sysclk_hz / (ipsc + 1);
    let total = (module_hz / bitrate.max(1)).saturating_sub(2 * d);
    let low = total / 2;
    (ipsc as u16, low as u16, (total - low) as u16)
}

pub struct C2000I2c {
    bases: [usize; 2],
}

impl C2000I2c {
    /// # Safety
    /// `bases` must be the I2C-A and I2C-B register files of the running
    /// device.
    pub const unsafe fn new(bases: [usize; 2]) -> Self {
        Self { bases }
    }

    fn reg(&self, index: u8, offset: u16) -> Reg<u16> {
        let base = self.bases[usize::from(index).min(1)];
        // SAFETY: offsets stay inside the controller's register file
        unsafe { Reg::offset(base as *mut u16, offset) }
    }

    fn mdr(&self, index: u8) -> Reg<u16> {
        self.reg(index, off::MDR)
    }
}

impl I2cPort for C2000I2c {
    fn init_master(&self, index: u8, sysclk_hz: u32, bitrate: u32, bits: u8) {
        let (psc, low, high) = clock_dividers(sysclk_hz, bitrate);
        self.mdr(index).write(0);
        self.reg(index, off::PSC).write(psc);
        self.reg(index, off::CLKL).write(low);
        self.reg(index, off::CLKH).write(high);
        self.reg(index, off::FFTX).write(0);
        self.reg(index, off::FFRX).write(0);
        let mdr = self.mdr(index);
        mdr.write_field(BC, u32::from(bits & 0x7));
        mdr.set_bits(u32::from(FREE));
    }

    fn set_enabled(&self, index: u8, enabled: bool) {
        if enabled {
            self.mdr(index).set_bits(u32::from(IRS));
        } else {
            self.mdr(index).clear_bits(u32::from(IRS));
        }
    }

    fn clear_start_stop(&self, index: u8) {
        self.mdr(index).clear_bits(u32::from(STT | STP));
    }

    fn bus_busy(&self, index: u8) -> bool {
        self.reg(index, off::STR).read() & BB != 0
    }

    fn status(&self, index: u8) -> Status {
        Status(self.reg(index, off::STR).read())
    }

    fn clear_status(&self, index: u8, flags: Status) {
        // Write-one-to-clear
        self.reg(index, off::STR).write(flags.0);
    }

    fn set_transfer(&self, index: u8, mode: Mode, address: u16, ten_bit: bool) {
        self.reg(index, off::SAR).write(address & 0x3FF);
        self.mdr(index).modify(|v| {
            let mut v = (v & !(TRX | XA)) | MST | RM;
            if mode == Mode::Transmit {
                v |= TRX;
            }
            if ten_bit {
                v |= XA;
            }
            v
        });
    }

    fn send_start(&self, index: u8) {
        self.mdr(index).set_bits(u32::from(STT));
    }

    fn send_stop(&self, index: u8) {
        self.mdr(index).set_bits(u32::from(STP));
    }

    fn stop_pending(&self, index: u8) -> bool {
        self.mdr(index).read() & STP != 0
    }

    fn send_nack(&self, index: u8) {
        self.mdr(index).set_bits(u32::from(NACKMOD));
    }

    fn put(&self, index: u8, byte: u8) {
        self.reg(index, off::DXR).write(u16::from(byte));
    }

    fn get(&self, index: u8) -> u8 {
        self.reg(index, off::DRR).read() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reg::fake::Block;

    #[test]
    fn test_clock_dividers() {
        // 100 MHz: IPSC 9, 10 MHz module clock, 400 kHz needs 25 module
        // ticks of which 10 are the fixed extension
        assert_eq!(clock_dividers(100_000_000, 400_000), (9, 7, 8));
        assert_eq!(clock_dividers(100_000_000, 100_000), (9, 45, 45));
    }

    #[test]
    fn test_ten_bit_receive_transfer() {
        let mut b = Block::<0x40>::new();
        let port = unsafe { C2000I2c::new([b.base() as usize, 0]) };
        port.init_master(0, 100_000_000, 100_000, 8);
        port.set_enabled(0, true);
        port.set_transfer(0, Mode::Receive, 0x2A5, true);
        let mdr = b.0[off::MDR as usize];
        assert_eq!(b.0[off::SAR as usize], 0x2A5);
        assert_eq!(mdr & (XA | MST | RM | IRS | FREE), XA | MST | RM | IRS | FREE);
        assert_eq!(mdr & TRX, 0);
        assert_eq!(mdr & 0b111, 0);

        port.set_transfer(0, Mode::Transmit, 0x50, false);
        let mdr = b.0[off::MDR as usize];
        assert_eq!(mdr & (XA | TRX), TRX);
    }

    #[test]
    fn test_start_stop_and_flags() {
        let mut b = Block::<0x40>::new();
        let port = unsafe { C2000I2c::new([b.base() as usize, 0]) };
        port.send_start(0);
        port.send_stop(0);
        assert!(port.stop_pending(0));
        port.clear_start_stop(0);
        assert!(!port.stop_pending(0));
        assert_eq!(b.0[off::MDR as usize] & STT, 0);

        b.0[off::STR as usize] = BB | Status::XRDY.0;
        assert!(port.bus_busy(0));
        assert!(port.status(0).contains(Status::XRDY));
        b.0[off::DRR as usize] = 0x1A5;
        assert_eq!(port.get(0), 0xA5);
    }
}

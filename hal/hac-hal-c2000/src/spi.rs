//! SPI controllers with 16-word FIFOs

use hac_hal::spi::{Config, Protocol, SpiPort};

use crate::reg::{Field, Reg};

/// SPI-A and SPI-B of the F28004x
pub const SPI_F28004X: [usize; 2] = [0x6100, 0x6110];

mod off {
    pub const CCR: u16 = 0x00;
    pub const CTL: u16 = 0x01;
    pub const BRR: u16 = 0x04;
    pub const RXBUF: u16 = 0x07;
    pub const TXBUF: u16 = 0x08;
    pub const FFTX: u16 = 0x0A;
    pub const FFRX: u16 = 0x0B;
    pub const PRI: u16 = 0x0F;
}

const SPICHAR: Field = Field::new(0, 4);
const SPILBK: u16 = 1 << 4;
const CLKPOLARITY: u16 = 1 << 6;
const SPISWRESET: u16 = 1 << 7;
const TALK: u16 = 1 << 1;
const MASTER: u16 = 1 << 2;
const CLK_PHASE: u16 = 1 << 3;
/// FIFO enhancements on, both FIFOs out of reset
const FFTX_ENABLE: u16 = (1 << 15) | (1 << 14) | (1 << 13);
const FFRX_ENABLE: u16 = 1 << 13;
const FFST: Field = Field::new(8, 5);
const FREE: u16 = 1 << 4;

const FIFO_DEPTH: u32 = 16;
/// Divider floor: BRR values 0..2 all divide by 4
const BRR_MIN: u32 = 3;
const BRR_MAX: u32 = 127;

pub struct C2000Spi {
    bases: [usize; 2],
}

impl C2000Spi {
    /// # Safety
    /// `bases` must be the SPI-A and SPI-B register files of the running
    /// device.
    pub const unsafe fn new(bases: [usize; 2]) -> Self {
        Self { bases }
    }

    fn reg(&self, index: u8, offset: u16) -> Reg<u16> {
        let base = self.bases[usize::from(index).min(1)];
        // SAFETY: offsets stay inside the controller's register file
        unsafe { Reg::offset(base as *mut u16, offset) }
    }

    fn bits(&self, index: u8) -> u32 {
        self.reg(index, off::CCR).read_field(SPICHAR) + 1
    }
}

impl SpiPort for C2000Spi {
    fn configure(&self, index: u8, cfg: &Config) {
        let (polarity, phase) = match cfg.protocol {
            Protocol::Pol0Pha0 => (0, 0),
            Protocol::Pol0Pha1 => (0, CLK_PHASE),
            Protocol::Pol1Pha0 => (CLKPOLARITY, 0),
            Protocol::Pol1Pha1 => (CLKPOLARITY, CLK_PHASE),
        };
        let lbk = if cfg.loopback { SPILBK } else { 0 };
        let ccr = self.reg(index, off::CCR);
        // Keep the module in reset while it is reconfigured
        ccr.write(polarity | lbk);
        ccr.write_field(SPICHAR, u32::from(cfg.bits.clamp(1, 16) - 1));
        self.reg(index, off::CTL).write(MASTER | TALK | phase);

        let brr = (cfg.clock_hz / cfg.bitrate.max(1)).saturating_sub(1);
        self.reg(index, off::BRR).write(brr.clamp(BRR_MIN, BRR_MAX) as u16);
        self.reg(index, off::FFTX).write(FFTX_ENABLE);
        self.reg(index, off::FFRX).write(FFRX_ENABLE);
        self.reg(index, off::PRI).write(FREE);
    }

    fn set_enabled(&self, index: u8, enabled: bool) {
        let ccr = self.reg(index, off::CCR);
        if enabled {
            ccr.set_bits(u32::from(SPISWRESET));
        } else {
            ccr.clear_bits(u32::from(SPISWRESET));
        }
    }

    fn busy(&self, index: u8) -> bool {
        self.reg(index, off::FFTX).read_field(FFST) >= FIFO_DEPTH
    }

    fn rx_level(&self, index: u8) -> u8 {
        self.reg(index, off::FFRX).read_field(FFST) as u8
    }

    fn write(&self, index: u8, word: u16) {
        // Transmit words are left-justified
        let shift = 16 - self.bits(index);
        self.reg(index, off::TXBUF).write(word << shift);
    }

    fn read(&self, index: u8) -> u16 {
        let mask = ((1u32 << self.bits(index)) - 1) as u16;
        self.reg(index, off::RXBUF).read() & mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reg::fake::Block;

    const CFG: Config = Config {
        clock_hz: 25_000_000,
        bitrate: 1_000_000,
        protocol: Protocol::Pol1Pha0,
        bits: 8,
        loopback: false,
    };

    #[test]
    fn test_master_configuration() {
        let mut b = Block::<0x10>::new();
        let port = unsafe { C2000Spi::new([0, b.base() as usize]) };
        port.configure(1, &CFG);
        assert_eq!(b.0[off::CCR as usize], CLKPOLARITY | 7);
        assert_eq!(b.0[off::CTL as usize], MASTER | TALK);
        assert_eq!(b.0[off::BRR as usize], 24);
        port.set_enabled(1, true);
        assert_ne!(b.0[off::CCR as usize] & SPISWRESET, 0);
    }

    #[test]
    fn test_slow_clock_clamps_divider() {
        let mut b = Block::<0x10>::new();
        let port = unsafe { C2000Spi::new([b.base() as usize, 0]) };
        port.configure(0, &Config { bitrate: 20_000_000, ..CFG });
        assert_eq!(b.0[off::BRR as usize], 3);
        port.configure(0, &Config { bitrate: 1_000, ..CFG });
        assert_eq!(b.0[off::BRR as usize], 127);
    }

    #[test]
    fn test_word_justification_and_fifo_levels() {
        let mut b = Block::<0x10>::new();
        let port = unsafe { C2000Spi::new([b.base() as usize, 0]) };
        port.configure(0, &CFG);
        port.write(0, 0xA5);
        assert_eq!(b.0[off::TXBUF as usize], 0xA500);
        b.0[off::RXBUF as usize] = 0x1234;
        assert_eq!(port.read(0), 0x34);
        b.0[off::FFRX as usize] = 3 << 8;
        assert_eq!(port.rx_level(0), 3);
        b.0[off::FFTX as usize] = 16 << 8;
        assert!(port.busy(0));
    }
}

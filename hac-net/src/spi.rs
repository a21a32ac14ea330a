//! SPI master transport
//!
//! One frame is one word of 1 to 16 bits. `write` pushes words into the
//! transmit FIFO and `read` pops them from the receive FIFO; neither blocks
//! longer than 20 bit times per word. When a wait runs out the module is
//! pulsed through reset and the words moved so far are reported.

use hac_core::io::registry::PinMux;
use hac_core::{debug, info, Error, PinCode, PinFun};
use hac_hal::spi::{Config, Protocol};
use hac_hal::sysctl::{Peripheral, SysCtl};
use hac_hal::SpiPort;

use crate::net::{Kind, Link, Net, State, Sys};

pub const BITRATE_MAX: u32 = 75_000_000;
pub const BITS_MAX: u8 = 16;
/// SPI-A and SPI-B
pub const MODULES: u8 = 2;

const WAIT_BITS: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiConfig {
    /// Bus speed (bps)
    pub bitrate: u32,
    /// Word length (1..16)
    pub bits: u8,
    pub protocol: Protocol,
    /// Route SIMO back to SOMI inside the module
    pub loopback: bool,
}

impl Default for SpiConfig {
    fn default() -> Self {
        Self {
            bitrate: 1_000_000,
            bits: 8,
            protocol: Protocol::default(),
            loopback: false,
        }
    }
}

/// SPI master on controller `index`
pub struct Spi<'p, P: SpiPort, C: SysCtl> {
    port: &'p P,
    sys: Sys<'p, C>,
    index: u8,
    link: Link<4>,
    /// Polls covering 20 bit times
    timeout: u32,
}

impl<'p, P: SpiPort, C: SysCtl> Spi<'p, P, C> {
    pub fn new(port: &'p P, sys: Sys<'p, C>, index: u8) -> Result<Self, Error> {
        if index >= MODULES {
            return Err(Error::Unavailable);
        }
        Ok(Self {
            port,
            sys,
            index,
            link: Link::new(Kind::Spi),
            timeout: 0,
        })
    }

    pub fn index(&self) -> u8 {
        self.index
    }

    /// Claim the clock, SIMO, SOMI and STE pins
    pub fn connect(
        &mut self,
        pins: &mut dyn PinMux,
        clk: PinCode,
        simo: PinCode,
        somi: PinCode,
        ste: PinCode,
    ) -> Result<(), Error> {
        let expected = if self.index == 0 {
            [PinFun::SPIA_CLK, PinFun::SPIA_SIMO, PinFun::SPIA_SOMI, PinFun::SPIA_STE]
        } else {
            [PinFun::SPIB_CLK, PinFun::SPIB_SIMO, PinFun::SPIB_SOMI, PinFun::SPIB_STE]
        };
        self.link.connect(pins, [clk, simo, somi, ste], &expected)
    }

    pub fn disconnect(&mut self, pins: &mut dyn PinMux) -> Result<(), Error> {
        self.link.disconnect(pins)
    }

    pub fn pins(&self) -> &[PinCode; 4] {
        self.link.io()
    }

    fn wait(&self, mut ready: impl FnMut(&P, u8) -> bool) -> Result<(), Error> {
        let (port, index) = (self.port, self.index);
        self.sys.wait(self.timeout, || ready(port, index))
    }

    fn restart(&self, moved: usize) -> usize {
        debug!("SPI{} timed out after {} words", self.index, moved);
        self.port.set_enabled(self.index, false);
        self.sys.delay_us(1);
        self.port.set_enabled(self.index, true);
        moved
    }
}

impl<P: SpiPort, C: SysCtl> Net for Spi<'_, P, C> {
    const KIND: Kind = Kind::Spi;
    type Config = SpiConfig;
    type Frame<'f> = u16;

    fn state(&self) -> State {
        self.link.state()
    }

    fn open(&mut self, config: &SpiConfig) -> Result<(), Error> {
        self.link.begin_open()?;
        if config.bitrate == 0
            || config.bitrate > BITRATE_MAX
            || config.bits == 0
            || config.bits > BITS_MAX
        {
            return Err(Error::Range);
        }
        self.sys.enable(Peripheral::Spi(self.index));
        self.port.set_enabled(self.index, false);

        self.timeout = (WAIT_BITS * 1_000_000 / config.bitrate).max(1);
        self.port.configure(
            self.index,
            &Config {
                clock_hz: self.sys.clocks().lspclk,
                bitrate: config.bitrate,
                protocol: config.protocol,
                bits: config.bits,
                loopback: config.loopback,
            },
        );
        self.port.set_enabled(self.index, true);
        self.link.set_open();
        info!(
            "SPI{} open at {} bps, {} bits",
            self.index,
            config.bitrate,
            config.bits
        );
        Ok(())
    }

    fn close(&mut self) -> Result<(), Error> {
        if self.link.close()? {
            self.port.set_enabled(self.index, false);
            self.sys.disable(Peripheral::Spi(self.index));
        }
        Ok(())
    }

    /// Pop received words; a short count means the FIFO stayed empty
    fn read(&mut self, words: &mut [u16]) -> Result<usize, Error> {
        self.link.ensure_open()?;
        for (i, word) in words.iter_mut().enumerate() {
            if self.wait(|p, n| p.rx_level(n) > 0).is_err() {
                return Ok(self.restart(i));
            }
            *word = self.port.read(self.index);
        }
        Ok(words.len())
    }

    /// Push words; a short count means the transmit FIFO stayed busy
    fn write(&mut self, words: &mut [u16]) -> Result<usize, Error> {
        self.link.ensure_open()?;
        for (i, word) in words.iter().enumerate() {
            if self.wait(|p, n| !p.busy(n)).is_err() {
                return Ok(self.restart(i));
            }
            self.port.write(self.index, *word);
        }
        Ok(words.len())
    }
}

//! Module information memory
//!
//! [`Eeprom`] puts a [`Mem`] layout on top of a byte store: the serial
//! EEPROM on I2C, the in-memory image on simulated runs, or a flash sector
//! on boards without an EEPROM. Every access is checked against the layout
//! before it reaches the bus.

use hac_core::silicon::Silicon;
use hac_core::{debug, info, Error};
use hac_hal::sysctl::SysCtl;
use hac_hal::{FlashPort, I2cPort};

use crate::file::{FileFrame, MemFile};
use crate::flash::{Flash, FlashBlock};
use crate::i2c::{I2c, I2cConfig, I2cFrame};
use crate::mem::{Access, Mem};
use crate::net::{Kind, Link, Net, State};

/// Bytes at a memory address
#[derive(Debug, PartialEq, Eq)]
pub struct EepromFrame<'f> {
    pub address: u32,
    pub data: &'f mut [u8],
}

/// Byte store an [`Eeprom`] can sit on
///
/// Accesses handed to a backend have already passed [`Mem::check`].
pub trait Backend {
    const KIND: Kind;

    fn open(&mut self, mem: &Mem) -> Result<(), Error>;

    fn close(&mut self) -> Result<(), Error>;

    fn read(&mut self, mem: &Mem, address: u32, data: &mut [u8]) -> Result<(), Error>;

    fn write(&mut self, mem: &Mem, address: u32, data: &[u8]) -> Result<(), Error>;

    /// Bring the writable area back to its blank state where writes
    /// cannot overwrite in place
    fn erase(&mut self, _mem: &Mem) -> Result<(), Error> {
        Ok(())
    }
}

/// Largest I2C write payload per transaction
const I2C_CHUNK: usize = 64;

impl<P: I2cPort, C: SysCtl> Backend for I2c<'_, P, C> {
    const KIND: Kind = Kind::I2c;

    fn open(&mut self, mem: &Mem) -> Result<(), Error> {
        Net::open(
            self,
            &I2cConfig {
                bitrate: mem.bitrate,
                bits: 8,
            },
        )
    }

    fn close(&mut self) -> Result<(), Error> {
        Net::close(self)
    }

    fn read(&mut self, mem: &Mem, address: u32, data: &mut [u8]) -> Result<(), Error> {
        let slave = mem.bus_address();
        let mut pointer = (address as u16).to_be_bytes();
        let mut frames = [
            I2cFrame::write(slave, &mut pointer),
            I2cFrame::read(slave, data),
        ];
        match Net::read(self, &mut frames)? {
            2 => Ok(()),
            _ => Err(Error::Hardware),
        }
    }

    fn write(&mut self, mem: &Mem, address: u32, data: &[u8]) -> Result<(), Error> {
        let slave = mem.bus_address();
        let mut buffer = [0u8; I2C_CHUNK];
        for (n, chunk) in data.chunks(I2C_CHUNK).enumerate() {
            let at = address + (n * I2C_CHUNK) as u32;
            let payload = &mut buffer[..chunk.len()];
            payload.copy_from_slice(chunk);

            let mut pointer = (at as u16).to_be_bytes();
            let mut frames = [
                I2cFrame::write(slave, &mut pointer),
                I2cFrame {
                    chain: true,
                    ..I2cFrame::write(slave, payload)
                },
            ];
            if Net::write(self, &mut frames)? != 2 {
                return Err(Error::Hardware);
            }

            // Acknowledge polling: the part ignores its address until the
            // page is committed
            let mut pointer = (at as u16).to_be_bytes();
            let mut poll = [I2cFrame {
                start_us: mem.wait_us,
                ..I2cFrame::write(slave, &mut pointer)
            }];
            if Net::write(self, &mut poll)? != 1 {
                debug!("EEPROM busy after write at {:x}", at);
                return Err(Error::Timeout);
            }
        }
        Ok(())
    }
}

impl<const N: usize> Backend for MemFile<N> {
    const KIND: Kind = Kind::File;

    fn open(&mut self, _mem: &Mem) -> Result<(), Error> {
        Net::open(self, &())
    }

    fn close(&mut self) -> Result<(), Error> {
        Net::close(self)
    }

    fn read(&mut self, _mem: &Mem, address: u32, data: &mut [u8]) -> Result<(), Error> {
        Net::read(self, &mut [FileFrame { address, data }]).map(|_| ())
    }

    fn write(&mut self, _mem: &Mem, address: u32, data: &[u8]) -> Result<(), Error> {
        let mut buffer = [0u8; I2C_CHUNK];
        for (n, chunk) in data.chunks(I2C_CHUNK).enumerate() {
            let payload = &mut buffer[..chunk.len()];
            payload.copy_from_slice(chunk);
            let frame = FileFrame {
                address: address + (n * I2C_CHUNK) as u32,
                data: payload,
            };
            Net::write(self, &mut [frame])?;
        }
        Ok(())
    }
}

/// Words moved per flash access
const FLASH_CHUNK: usize = 32;

/// One byte per 16-bit flash word, upper byte clear
impl<S: Silicon, P: FlashPort> Backend for Flash<'_, S, P> {
    const KIND: Kind = Kind::Flash;

    fn open(&mut self, _mem: &Mem) -> Result<(), Error> {
        Net::open(self, &())
    }

    fn close(&mut self) -> Result<(), Error> {
        Net::close(self)
    }

    fn read(&mut self, _mem: &Mem, address: u32, data: &mut [u8]) -> Result<(), Error> {
        let mut words = [0u16; FLASH_CHUNK];
        for (n, chunk) in data.chunks_mut(FLASH_CHUNK).enumerate() {
            let buffer = &mut words[..chunk.len()];
            let block = FlashBlock {
                address: address + (n * FLASH_CHUNK) as u32,
                data: buffer,
            };
            Net::read(self, &mut [block])?;
            for (byte, word) in chunk.iter_mut().zip(words.iter()) {
                *byte = *word as u8;
            }
        }
        Ok(())
    }

    fn write(&mut self, _mem: &Mem, address: u32, data: &[u8]) -> Result<(), Error> {
        let mut words = [0u16; FLASH_CHUNK];
        for (n, chunk) in data.chunks(FLASH_CHUNK).enumerate() {
            for (word, byte) in words.iter_mut().zip(chunk.iter()) {
                *word = u16::from(*byte);
            }
            let block = FlashBlock {
                address: address + (n * FLASH_CHUNK) as u32,
                data: &mut words[..chunk.len()],
            };
            if Net::write(self, &mut [block])? != 1 {
                return Err(Error::Hardware);
            }
        }
        Ok(())
    }

    fn erase(&mut self, mem: &Mem) -> Result<(), Error> {
        let sector = mem.sector.ok_or(Error::Unavailable)?;
        Flash::<S, P>::erase(self, usize::from(sector))
    }
}

/// Checked memory on top of backend `B`
pub struct Eeprom<B: Backend> {
    bus: B,
    mem: Option<Mem>,
    link: Link<0>,
}

impl<B: Backend> Eeprom<B> {
    pub const fn new(bus: B) -> Self {
        Self {
            bus,
            mem: None,
            link: Link::new(Kind::Eeprom),
        }
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Layout of the open memory
    pub fn mem(&self) -> Option<&Mem> {
        self.mem.as_ref()
    }

    fn layout(&self) -> Result<Mem, Error> {
        self.link.ensure_open()?;
        self.mem.ok_or(Error::State)
    }

    pub fn read_at(&mut self, address: u32, data: &mut [u8]) -> Result<(), Error> {
        let mem = self.layout()?;
        if !mem.check(address, data.len() as u32, Access::Read) {
            return Err(Error::Range);
        }
        self.bus.read(&mem, address, data)
    }

    pub fn write_at(&mut self, address: u32, data: &[u8]) -> Result<(), Error> {
        let mem = self.layout()?;
        if !mem.check(address, data.len() as u32, Access::Write) {
            return Err(Error::Range);
        }
        self.bus.write(&mem, address, data)
    }

    /// Factory serial number, most significant byte first
    pub fn serial(&mut self) -> Result<u32, Error> {
        let mem = self.layout()?;
        let mut bytes = [0; 4];
        // Flash layouts keep the serial outside the readable block
        self.bus.read(&mem, mem.serial, &mut bytes)?;
        Ok(u32::from_be_bytes(bytes))
    }

    /// Number a blank part
    pub fn write_serial(&mut self, serial: u32) -> Result<(), Error> {
        let mem = self.layout()?;
        self.write_at(mem.serial, &serial.to_be_bytes())
    }

    pub fn erase(&mut self) -> Result<(), Error> {
        let mem = self.layout()?;
        self.bus.erase(&mem)
    }
}

impl<B: Backend> Net for Eeprom<B> {
    const KIND: Kind = Kind::Eeprom;
    type Config = Mem;
    type Frame<'f> = EepromFrame<'f>;

    fn state(&self) -> State {
        self.link.state()
    }

    fn open(&mut self, mem: &Mem) -> Result<(), Error> {
        self.link.begin_open()?;
        self.bus.open(mem)?;
        self.mem = Some(*mem);
        self.link.set_open();
        info!("EEPROM open on {}", B::KIND);
        Ok(())
    }

    fn close(&mut self) -> Result<(), Error> {
        if self.link.close()? {
            self.bus.close()?;
        }
        Ok(())
    }

    fn read(&mut self, frames: &mut [EepromFrame<'_>]) -> Result<usize, Error> {
        for frame in frames.iter_mut() {
            self.read_at(frame.address, frame.data)?;
        }
        Ok(frames.len())
    }

    fn write(&mut self, frames: &mut [EepromFrame<'_>]) -> Result<usize, Error> {
        for frame in frames.iter() {
            self.write_at(frame.address, &*frame.data)?;
        }
        Ok(frames.len())
    }
}

//! I2C master transport
//!
//! A `write` runs a list of frames as one bus transaction: a START (or
//! repeated START) before each frame, one STOP after the last. Reads are
//! frames with `read` set and go through the same path.
//!
//! Every wait is bounded by 20 bit times. A wait that runs out resets the
//! module and ends the transaction early; the returned count tells how many
//! frames completed.

use hac_core::io::registry::PinMux;
use hac_core::{debug, info, Error, PinCode, PinFun};
use hac_hal::i2c::{Mode, Status};
use hac_hal::sysctl::{Peripheral, SysCtl};
use hac_hal::I2cPort;

use crate::net::{Kind, Link, Net, State, Sys};

pub const BITRATE_MAX: u32 = 400_000;
pub const BITS_MAX: u8 = 8;
/// 7-bit address space
pub const ADDRESS_MAX_7: u16 = 0x007F;
/// 10-bit address space
pub const ADDRESS_MAX_10: u16 = 0x03FF;

/// Bit times per wait
const WAIT_BITS: u32 = 20;
/// Bit times of an address frame including the acknowledge
const FRAME_BITS: u32 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// Bus speed (bps)
    pub bitrate: u32,
    /// Bits per data byte (1..8)
    pub bits: u8,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self {
            bitrate: 400_000,
            bits: 8,
        }
    }
}

/// One addressed frame of a transaction
#[derive(Debug, PartialEq, Eq)]
pub struct I2cFrame<'f> {
    /// Master receiver when set
    pub read: bool,
    /// Continue the previous write frame without a repeated START
    ///
    /// Only honoured when both frames are writes to the same address.
    pub chain: bool,
    /// How long to keep re-sending START while the slave does not
    /// acknowledge its address (µs), 0 for a single attempt
    pub start_us: u32,
    /// Slave address, 7 bits unless `ten_bit` is set
    pub address: u16,
    /// Address the slave in 10-bit mode
    pub ten_bit: bool,
    pub data: &'f mut [u8],
}

impl<'f> I2cFrame<'f> {
    pub fn write(address: u16, data: &'f mut [u8]) -> Self {
        Self {
            read: false,
            chain: false,
            start_us: 0,
            address,
            ten_bit: false,
            data,
        }
    }

    pub fn read(address: u16, data: &'f mut [u8]) -> Self {
        Self {
            read: true,
            ..Self::write(address, data)
        }
    }

    /// Same frame, addressed in 10-bit mode
    pub fn ten_bit(self) -> Self {
        Self {
            ten_bit: true,
            ..self
        }
    }

    fn address_valid(&self) -> bool {
        let max = if self.ten_bit {
            ADDRESS_MAX_10
        } else {
            ADDRESS_MAX_7
        };
        self.address <= max
    }
}

/// Why a transaction stopped early
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum Abort {
    Timeout,
    Nack,
}

impl From<Error> for Abort {
    fn from(_: Error) -> Self {
        Abort::Timeout
    }
}

/// I2C-A master
pub struct I2c<'p, P: I2cPort, C: SysCtl> {
    port: &'p P,
    sys: Sys<'p, C>,
    link: Link<2>,
    /// Polls covering 20 bit times
    timeout: u32,
    /// One bit time rounded up (µs)
    bit_us: u32,
}

const INDEX: u8 = 0;

impl<'p, P: I2cPort, C: SysCtl> I2c<'p, P, C> {
    pub fn new(port: &'p P, sys: Sys<'p, C>) -> Self {
        Self {
            port,
            sys,
            link: Link::new(Kind::I2c),
            timeout: 0,
            bit_us: 0,
        }
    }

    pub fn connect(
        &mut self,
        pins: &mut dyn PinMux,
        sda: PinCode,
        scl: PinCode,
    ) -> Result<(), Error> {
        self.link
            .connect(pins, [sda, scl], &[PinFun::I2CA_SDA, PinFun::I2CA_SCL])
    }

    pub fn disconnect(&mut self, pins: &mut dyn PinMux) -> Result<(), Error> {
        self.link.disconnect(pins)
    }

    pub fn pins(&self) -> &[PinCode; 2] {
        self.link.io()
    }

    fn wait(&self, mut ready: impl FnMut(&P) -> bool) -> Result<(), Error> {
        let port = self.port;
        self.sys.wait(self.timeout, || ready(port))
    }

    fn wait_status(&self, flag: Status) -> Result<(), Error> {
        self.wait(|p| p.status(INDEX).contains(flag))
    }

    /// Generate START and the address frame, retrying while NACKed
    fn start(&self, frame: &I2cFrame<'_>) -> Result<(), Abort> {
        let port = self.port;
        let mode = if frame.read {
            Mode::Receive
        } else {
            Mode::Transmit
        };
        port.set_transfer(INDEX, mode, frame.address, frame.ten_bit);
        port.clear_status(INDEX, Status::NACK);

        let mut retries = frame.start_us / (FRAME_BITS * self.bit_us.max(1));
        loop {
            port.send_start(INDEX);
            // The only byte of a read is clocked in right after the address
            if frame.read && frame.data.len() == 1 {
                port.send_nack(INDEX);
            }
            self.wait_status(Status::ARDY)?;

            if !port.status(INDEX).contains(Status::NACK) {
                return Ok(());
            }
            port.clear_status(INDEX, Status::NACK);
            if retries == 0 {
                return Err(Abort::Nack);
            }
            retries -= 1;
        }
    }

    fn receive(&self, data: &mut [u8]) -> Result<(), Abort> {
        let port = self.port;
        let last = data.len() - 1;
        for (j, byte) in data.iter_mut().enumerate() {
            if last > 0 && j == last {
                port.send_nack(INDEX);
            }
            self.wait_status(Status::RRDY)?;
            *byte = port.get(INDEX);
        }
        if !port.status(INDEX).contains(Status::NACK_SENT) {
            return Err(Abort::Nack);
        }
        port.clear_status(INDEX, Status::NACK_SENT);
        Ok(())
    }

    fn transmit(&self, data: &[u8]) -> Result<(), Abort> {
        let port = self.port;
        for byte in data {
            self.wait_status(Status::XRDY)?;
            port.clear_status(INDEX, Status::XSMT);
            port.put(INDEX, *byte);
            self.wait_status(Status::XSMT)?;
            if port.status(INDEX).contains(Status::NACK) {
                return Err(Abort::Nack);
            }
        }
        Ok(())
    }

    fn run(&self, frames: &mut [I2cFrame<'_>], done: &mut usize) -> Result<(), Abort> {
        for i in 0..frames.len() {
            let needs_start = i == 0 || {
                let (prev, frame) = (&frames[i - 1], &frames[i]);
                frame.read
                    || prev.read
                    || !frame.chain
                    || frame.address != prev.address
                    || frame.ten_bit != prev.ten_bit
            };
            let frame = &mut frames[i];
            if needs_start {
                self.start(frame)?;
            }
            if frame.read {
                self.receive(frame.data)?;
            } else {
                self.transmit(frame.data)?;
            }
            *done = i + 1;
        }
        self.port.send_stop(INDEX);
        self.wait(|p| !p.stop_pending(INDEX))?;
        Ok(())
    }

    /// Pulse the module through reset after an aborted transaction
    fn restart(&self) {
        let port = self.port;
        port.clear_start_stop(INDEX);
        port.set_enabled(INDEX, false);
        self.sys.delay_us(self.timeout);
        port.set_enabled(INDEX, true);
    }

    fn transfer(&mut self, frames: &mut [I2cFrame<'_>]) -> Result<usize, Error> {
        self.link.ensure_open()?;
        if frames.iter().any(|f| f.data.is_empty() || !f.address_valid()) {
            return Err(Error::Range);
        }
        // The busy flag is only valid once a START or STOP was seen
        self.wait(|p| !p.bus_busy(INDEX))?;
        self.port.clear_status(INDEX, Status::NACK_SENT);

        let mut done = 0;
        match self.run(frames, &mut done) {
            Ok(()) => Ok(frames.len()),
            Err(abort) => {
                debug!("I2C transaction stopped after {} frames: {}", done, abort);
                self.restart();
                Ok(done)
            }
        }
    }
}

impl<P: I2cPort, C: SysCtl> Net for I2c<'_, P, C> {
    const KIND: Kind = Kind::I2c;
    type Config = I2cConfig;
    type Frame<'f> = I2cFrame<'f>;

    fn state(&self) -> State {
        self.link.state()
    }

    fn open(&mut self, config: &I2cConfig) -> Result<(), Error> {
        self.link.begin_open()?;
        if config.bitrate == 0
            || config.bitrate > BITRATE_MAX
            || config.bits == 0
            || config.bits > BITS_MAX
        {
            return Err(Error::Range);
        }
        let port = self.port;
        self.sys.enable(Peripheral::I2c(INDEX));
        port.clear_start_stop(INDEX);
        port.set_enabled(INDEX, false);

        self.timeout = WAIT_BITS * 1_000_000 / config.bitrate;
        self.bit_us = self.timeout.div_ceil(WAIT_BITS);

        // Eight bits is encoded as zero
        port.init_master(INDEX, self.sys.clocks().cpu, config.bitrate, config.bits & 0x7);
        port.set_enabled(INDEX, true);
        self.link.set_open();
        info!("I2C open at {} bps", config.bitrate);
        Ok(())
    }

    fn close(&mut self) -> Result<(), Error> {
        if self.link.close()? {
            self.port.set_enabled(INDEX, false);
            self.sys.disable(Peripheral::I2c(INDEX));
        }
        Ok(())
    }

    /// Same as [`I2c::write`]: the direction is carried by each frame
    fn read(&mut self, frames: &mut [I2cFrame<'_>]) -> Result<usize, Error> {
        self.transfer(frames)
    }

    fn write(&mut self, frames: &mut [I2cFrame<'_>]) -> Result<usize, Error> {
        self.transfer(frames)
    }
}

//! Transport lifecycle shared by every bus
//!
//! ```text
//!             connect              open
//!   Disconnected ───► Connected ◄───────► Open
//!               ◄───            close
//!            disconnect
//! ```
//!
//! Transports without pins (flash, in-memory file, EEPROM on top of another
//! transport) are born `Connected`. `read` and `write` are legal only while
//! `Open`; `close` of a transport that is not open is a no-op.

use hac_core::io::registry::PinMux;
use hac_core::{error, Error, PinCode, PinFun};
use hac_drivers::{Clock, Clocks};
use hac_hal::protect::{protected, Protect};
use hac_hal::sysctl::{Peripheral, SysCtl};

/// Transport kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Kind {
    Can,
    I2c,
    Spi,
    Fsi,
    Flash,
    Eeprom,
    File,
}

/// Lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    Disconnected,
    Connected,
    Open,
}

/// Lifecycle and pin ownership of one transport with `N` pins
#[derive(Debug, Clone, Copy)]
pub struct Link<const N: usize> {
    kind: Kind,
    io: [PinCode; N],
    state: State,
}

impl<const N: usize> Link<N> {
    pub const fn new(kind: Kind) -> Self {
        Self {
            kind,
            io: [PinCode::IOX; N],
            state: if N == 0 {
                State::Connected
            } else {
                State::Disconnected
            },
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Pins held while connected
    pub fn io(&self) -> &[PinCode; N] {
        &self.io
    }

    /// Claim every pin or none
    ///
    /// A [`PinFun::NONE`] expectation accepts any function.
    pub fn connect(
        &mut self,
        pins: &mut dyn PinMux,
        io: [PinCode; N],
        expected: &[PinFun; N],
    ) -> Result<(), Error> {
        if self.state != State::Disconnected {
            return Err(Error::State);
        }
        for (i, (code, fun)) in io.iter().zip(expected.iter()).enumerate() {
            if let Err(e) = pins.connect(*code, *fun) {
                for claimed in &io[..i] {
                    let _ = pins.disconnect(*claimed);
                }
                error!("{} pin {} refused: {}", self.kind, code.pin(), e);
                return Err(e.into());
            }
        }
        self.io = io;
        self.state = State::Connected;
        Ok(())
    }

    /// Release the pins of a closed transport
    pub fn disconnect(&mut self, pins: &mut dyn PinMux) -> Result<(), Error> {
        if N == 0 || self.state != State::Connected {
            return Err(Error::State);
        }
        for code in self.io.iter() {
            pins.disconnect(*code)?;
        }
        self.io = [PinCode::IOX; N];
        self.state = State::Disconnected;
        Ok(())
    }

    /// Check that `open` may proceed
    pub fn begin_open(&self) -> Result<(), Error> {
        match self.state {
            State::Connected => Ok(()),
            State::Open => Err(Error::Busy),
            State::Disconnected => Err(Error::State),
        }
    }

    pub fn set_open(&mut self) {
        self.state = State::Open;
    }

    /// Leave the open state
    ///
    /// # Returns
    /// True when the transport was open and the hardware must be released
    pub fn close(&mut self) -> Result<bool, Error> {
        match self.state {
            State::Open => {
                self.state = State::Connected;
                Ok(true)
            }
            State::Connected => Ok(false),
            State::Disconnected => Err(Error::State),
        }
    }

    pub fn ensure_open(&self) -> Result<(), Error> {
        if self.state == State::Open {
            Ok(())
        } else {
            Err(Error::State)
        }
    }
}

/// System services a transport borrows from the platform
///
/// Carries its own copy of the running clock so a transport never borrows
/// the object that owns the clock.
pub struct Sys<'p, C: SysCtl> {
    clock: Clock<'p, C>,
    cpu: &'p dyn Protect,
}

impl<'p, C: SysCtl> Sys<'p, C> {
    pub fn new(clock: &Clock<'p, C>, cpu: &'p dyn Protect) -> Self {
        Self {
            clock: Clock::from_clocks(clock.sysctl(), clock.clocks()),
            cpu,
        }
    }

    pub fn clocks(&self) -> Clocks {
        self.clock.clocks()
    }

    pub fn delay_us(&self, us: u32) {
        self.clock.delay_us(us);
    }

    pub fn cpu(&self) -> &'p dyn Protect {
        self.cpu
    }

    /// Gate the peripheral clock on
    pub fn enable(&self, periph: Peripheral) {
        let sysctl = self.clock.sysctl();
        protected(self.cpu, |ep| sysctl.enable_peripheral(ep, periph));
    }

    /// Gate the peripheral clock off
    pub fn disable(&self, periph: Peripheral) {
        let sysctl = self.clock.sysctl();
        protected(self.cpu, |ep| sysctl.disable_peripheral(ep, periph));
    }

    /// Busy-wait up to `polls` microseconds for `ready`
    pub fn wait(&self, polls: u32, mut ready: impl FnMut() -> bool) -> Result<(), Error> {
        for _ in 0..polls {
            if ready() {
                return Ok(());
            }
            self.delay_us(1);
        }
        Err(Error::Timeout)
    }
}

/// Byte or frame transport
///
/// `read` and `write` return the number of frames transferred. A bus
/// timeout in the middle of a transfer is reported as a short count, not
/// as an error.
pub trait Net {
    const KIND: Kind;

    /// Open parameters
    type Config;
    /// Unit of transfer
    type Frame<'f>;

    fn state(&self) -> State;

    fn open(&mut self, config: &Self::Config) -> Result<(), Error>;

    fn close(&mut self) -> Result<(), Error>;

    fn read(&mut self, frames: &mut [Self::Frame<'_>]) -> Result<usize, Error>;

    fn write(&mut self, frames: &mut [Self::Frame<'_>]) -> Result<usize, Error>;

    fn kind(&self) -> Kind {
        Self::KIND
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hac_core::id::Identity;
    use hac_core::io::registry::PinRegistry;
    use hac_core::silicon::f28004x::pins as p4;
    use hac_core::silicon::F28004x;
    use hac_hal::Platform;
    use hac_hal_sim::SimPlatform;

    const EXP: [PinFun; 2] = [PinFun::CANB_TX, PinFun::CANB_RX];

    #[test]
    fn test_lifecycle_order() {
        let p = SimPlatform::new();
        let mut reg = PinRegistry::<F28004x, _>::new(p.gpio(), p.cpu());
        reg.reset(&Identity::virtual_for::<F28004x>());
        let mut link = Link::<2>::new(Kind::Can);

        assert_eq!(link.begin_open(), Err(Error::State));
        assert_eq!(link.ensure_open(), Err(Error::State));
        assert_eq!(link.close(), Err(Error::State));

        link.connect(&mut reg, [p4::IO12_CANB_TX, p4::IO13_CANB_RX], &EXP)
            .unwrap();
        assert_eq!(link.state(), State::Connected);
        assert_eq!(
            link.connect(&mut reg, [p4::IO12_CANB_TX, p4::IO13_CANB_RX], &EXP),
            Err(Error::State)
        );

        link.begin_open().unwrap();
        link.set_open();
        assert_eq!(link.begin_open(), Err(Error::Busy));
        assert_eq!(link.disconnect(&mut reg), Err(Error::State));

        assert_eq!(link.close(), Ok(true));
        assert_eq!(link.close(), Ok(false));
        link.disconnect(&mut reg).unwrap();
        assert!(!reg.status(p4::IO12_CANB_TX).unwrap().connected);
    }

    #[test]
    fn test_connect_rolls_back_on_refusal() {
        let p = SimPlatform::new();
        let mut reg = PinRegistry::<F28004x, _>::new(p.gpio(), p.cpu());
        reg.reset(&Identity::virtual_for::<F28004x>());
        reg.connect(p4::IO13_CANB_RX, PinFun::NONE).unwrap();

        let mut link = Link::<2>::new(Kind::Can);
        assert_eq!(
            link.connect(&mut reg, [p4::IO12_CANB_TX, p4::IO13_CANB_RX], &EXP),
            Err(Error::Busy)
        );
        assert!(!reg.status(p4::IO12_CANB_TX).unwrap().connected);
        assert_eq!(link.state(), State::Disconnected);
    }

    #[test]
    fn test_expected_function_is_enforced() {
        let p = SimPlatform::new();
        let mut reg = PinRegistry::<F28004x, _>::new(p.gpio(), p.cpu());
        reg.reset(&Identity::virtual_for::<F28004x>());

        let mut link = Link::<2>::new(Kind::Can);
        assert_eq!(
            link.connect(&mut reg, [p4::IO32_CANA_TX, p4::IO13_CANB_RX], &EXP),
            Err(Error::FunMismatch)
        );
    }

    #[test]
    fn test_pinless_link_is_born_connected() {
        let mut link = Link::<0>::new(Kind::Flash);
        assert_eq!(link.state(), State::Connected);
        link.begin_open().unwrap();
        link.set_open();
        assert_eq!(link.close(), Ok(true));
        assert_eq!(link.kind(), Kind::Flash);
    }
}

//! Pin registry
//!
//! Single source of truth for pin ownership. Every physical pin has one
//! slot holding the configuration code currently applied to it, with the
//! connected and available flags. A pin is in one of three states:
//!
//! ```text
//!   boot ──► unavailable                      (identity, never left)
//!   boot ──► available ──connect──► connected
//!                ▲                      │
//!                └──────disconnect──────┘
//! ```
//!
//! Registers are only touched after all checks passed, so a refused
//! connect leaves both the slot and the hardware as they were.

use core::marker::PhantomData;

use hac_hal::gpio::{AnalogMode, Direction, GpioPort, PadType, Qualification};
use hac_hal::protect::{Eallow, Protect};

use super::{PinCode, PinFun, PinGroup};
use crate::error::{ConnectError, Error};
use crate::id::Identity;
use crate::silicon::{Family, Silicon};

/// Registry slots (covers the largest digital + analog pin set)
pub const MAX_SLOTS: usize = 256;

/// Current state of a physical pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinStatus {
    pub pin: u16,
    pub fun: PinFun,
    pub group: PinGroup,
    pub connected: bool,
    pub available: bool,
}

impl PinStatus {
    fn from_slot(code: PinCode) -> Self {
        Self {
            pin: code.pin(),
            fun: code.fun(),
            group: code.group(),
            connected: code.is_connected(),
            available: code.is_available(),
        }
    }
}

/// Pin ownership arbitration
///
/// Drivers take `&mut dyn PinMux` so they do not depend on the silicon or
/// GPIO port types.
pub trait PinMux {
    /// Route the function embedded in `code` to its pin
    ///
    /// # Arguments
    /// * `code` - Pin configuration code
    /// * `expected` - Required function, [`PinFun::NONE`] accepts any
    fn connect(&mut self, code: PinCode, expected: PinFun) -> Result<(), ConnectError>;

    /// Return the pin of `code` to its reset configuration
    fn disconnect(&mut self, code: PinCode) -> Result<(), Error>;

    /// State of the physical pin addressed by `code`
    ///
    /// Reports the code currently applied to the pin, which may differ from
    /// `code` itself. `None` for the sentinel or a pin the silicon lacks.
    fn status(&self, code: PinCode) -> Option<PinStatus>;
}

/// Pin registry of silicon `S` over GPIO port `G`
pub struct PinRegistry<'p, S: Silicon, G: GpioPort> {
    gpio: &'p G,
    cpu: &'p dyn Protect,
    slots: [PinCode; MAX_SLOTS],
    initialized: bool,
    _silicon: PhantomData<S>,
}

impl<'p, S: Silicon, G: GpioPort> PinRegistry<'p, S, G> {
    /// Create an empty registry
    ///
    /// Every pin reads as unavailable until [`reset`](Self::reset) runs.
    pub fn new(gpio: &'p G, cpu: &'p dyn Protect) -> Self {
        Self {
            gpio,
            cpu,
            slots: [PinCode::IOX; MAX_SLOTS],
            initialized: false,
            _silicon: PhantomData,
        }
    }

    /// Restore reset register state and seed every slot
    ///
    /// Pins missing from the package reported by `id` become unavailable.
    pub fn reset(&mut self, id: &Identity) {
        {
            let ep = Eallow::new(self.cpu);
            for &port in S::UNLOCK_PORTS {
                self.gpio.unlock_port(&ep, port);
            }
            for &offset in S::CTRL_REGS {
                self.gpio.write_ctrl(&ep, offset, 0);
            }
            for &(offset, value) in S::RESET_DEFAULTS {
                self.gpio.write_ctrl(&ep, offset, value);
            }
            self.gpio.clear_data(&ep);
        }

        let slots = (S::NUM_DIO + S::NUM_AN) as usize;
        for i in 0..slots {
            self.slots[i] = Self::default_slot(S::pin_at(i));
        }

        let mut disabled = 0u16;
        for list in S::disabled_lists(id.pin_count, id.q100) {
            for &pin in list {
                if let Some(i) = S::index(pin) {
                    self.slots[i] = PinCode::new(pin, 0, PinFun::NONE);
                    disabled += 1;
                }
            }
        }

        self.initialized = true;
        info!(
            "Pin registry reset: {} pins, {} disabled for package",
            slots,
            disabled
        );
    }

    /// Post-reset slot of a pin
    fn default_slot(pin: u16) -> PinCode {
        if let Some(&forced) = S::FORCED_DISABLED.iter().find(|c| c.pin() == pin) {
            return forced.with_connected(false).with_available(false);
        }
        let fun = if S::is_analog(pin) {
            PinFun::AIN
        } else {
            PinFun::DIN
        };
        PinCode::new(pin, 0, fun).with_available(true)
    }

    /// Silicon default function of a pin
    pub fn default_fun(pin: u16) -> PinFun {
        Self::default_slot(pin).fun()
    }

    /// True once [`reset`](Self::reset) has run
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Iterate the state of every pin
    pub fn iter(&self) -> impl Iterator<Item = PinStatus> + '_ {
        let slots = (S::NUM_DIO + S::NUM_AN) as usize;
        self.slots[..slots].iter().map(|&c| PinStatus::from_slot(c))
    }

    /// Program the pin for its group, checks before writes
    fn apply(&self, code: PinCode) -> Result<(), ConnectError> {
        let pin = code.pin();
        let fun = code.fun();
        let group = code.group();
        let analog = S::is_analog(pin);
        let family = S::FAMILY;

        // Validate first so a refusal leaves the registers untouched
        match group {
            PinGroup::DIO => {
                if analog && family != Family::F2803x && pin >= S::AN0 && fun == PinFun::DOUT {
                    return Err(ConnectError::AnalogOnly);
                }
            }
            PinGroup::CAN | PinGroup::SPI | PinGroup::I2C | PinGroup::EPWM => {
                if analog {
                    return Err(ConnectError::AnalogPin(group));
                }
            }
            PinGroup::SD | PinGroup::FSI if family == Family::F28004x => {
                if analog && !(group == PinGroup::SD && pin == 22) {
                    return Err(ConnectError::AnalogPin(group));
                }
            }
            PinGroup::OUTXBAR => {}
            _ => return Err(ConnectError::Unsupported(group)),
        }

        let ep = Eallow::new(self.cpu);
        let gpio = self.gpio;
        match group {
            PinGroup::DIO => {
                if analog {
                    gpio.set_analog_mode(&ep, pin, AnalogMode::Disabled);
                }
                if family == Family::F2803x {
                    gpio.set_pad(&ep, pin, PadType::Standard);
                }
                let dir = if fun == PinFun::DOUT {
                    Direction::Output
                } else {
                    Direction::Input
                };
                gpio.set_direction(&ep, pin, dir);
            }
            PinGroup::I2C => {
                gpio.set_qualification(&ep, pin, Qualification::Async);
                gpio.set_pad(&ep, pin, PadType::PullUp);
            }
            PinGroup::EPWM => {
                if family == Family::F2803x {
                    gpio.set_pad(&ep, pin, PadType::Standard);
                }
                gpio.set_direction(&ep, pin, Direction::Output);
            }
            PinGroup::SD => {
                if pin == 22 {
                    gpio.set_analog_mode(&ep, pin, AnalogMode::Disabled);
                }
                gpio.set_qualification(&ep, pin, Qualification::Async);
                gpio.set_pad(&ep, pin, PadType::Invert);
            }
            PinGroup::FSI => {
                gpio.set_qualification(&ep, pin, Qualification::Async);
            }
            _ => {}
        }

        // MUX last
        if pin < S::NUM_DIO {
            gpio.set_mux(&ep, pin, code.mux());
        }
        Ok(())
    }

    /// Return the pin to its reset register state
    fn restore(&self, pin: u16) {
        let analog = S::is_analog(pin);
        let ep = Eallow::new(self.cpu);
        let gpio = self.gpio;

        if S::FAMILY == Family::F2803x {
            gpio.set_direction(&ep, pin, Direction::Input);
            gpio.write(pin, false);
            if analog {
                gpio.set_analog_mode(&ep, pin, AnalogMode::Enabled);
            } else {
                gpio.set_mux(&ep, pin, 0);
                gpio.set_qualification(&ep, pin, Qualification::Sync);
                // Pull-ups are off for GPIO0..GPIO11 at reset
                let pad = if pin <= 11 {
                    PadType::Standard
                } else {
                    PadType::PullUp
                };
                gpio.set_pad(&ep, pin, pad);
            }
        } else {
            if analog {
                gpio.set_analog_mode(&ep, pin, AnalogMode::Enabled);
            }
            if pin < S::NUM_DIO {
                gpio.set_direction(&ep, pin, Direction::Input);
                gpio.write(pin, false);
                gpio.set_mux(&ep, pin, 0);
            }
            gpio.set_qualification(&ep, pin, Qualification::Sync);
            gpio.set_pad(&ep, pin, PadType::Standard);
        }
    }
}

impl<S: Silicon, G: GpioPort> PinMux for PinRegistry<'_, S, G> {
    fn connect(&mut self, code: PinCode, expected: PinFun) -> Result<(), ConnectError> {
        debug_assert!(self.initialized, "pin registry used before reset");

        if code.is_none() {
            return Err(ConnectError::Code);
        }
        if expected != PinFun::NONE && code.fun() != expected {
            return Err(ConnectError::FunMismatch);
        }
        let i = S::index(code.pin()).ok_or(ConnectError::Code)?;
        let slot = self.slots[i];
        if !slot.is_available() {
            return Err(ConnectError::Unavailable);
        }
        if slot.is_connected() {
            return Err(ConnectError::Busy);
        }

        if let Err(e) = self.apply(code) {
            warn!("Connect of pin {} refused: {}", code.pin(), e);
            return Err(e);
        }

        self.slots[i] = code.with_available(true).with_connected(true);
        debug!("Pin {} connected to function {:x}", code.pin(), code.fun().0);
        Ok(())
    }

    fn disconnect(&mut self, code: PinCode) -> Result<(), Error> {
        debug_assert!(self.initialized, "pin registry used before reset");

        if code.is_none() {
            return Err(Error::Unavailable);
        }
        let pin = code.pin();
        let i = S::index(pin).ok_or(Error::Unavailable)?;
        if !self.slots[i].is_available() {
            return Err(Error::Unavailable);
        }

        self.restore(pin);
        self.slots[i] = Self::default_slot(pin);
        debug!("Pin {} disconnected", pin);
        Ok(())
    }

    fn status(&self, code: PinCode) -> Option<PinStatus> {
        if code.is_none() {
            return None;
        }
        S::index(code.pin()).map(|i| PinStatus::from_slot(self.slots[i]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::silicon::f28004x::pins as p4;
    use crate::silicon::{f2803x, F2803x, F28004x};
    use core::cell::{Cell, RefCell};
    use proptest::prelude::*;
    use std::vec::Vec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Call {
        Unlock(u8),
        Ctrl(u16, u32),
        Clear,
        Analog(u16, AnalogMode),
        Pad(u16, PadType),
        Qual(u16, Qualification),
        Dir(u16, Direction),
        Mux(u16, u8),
        Write(u16, bool),
    }

    #[derive(Default)]
    struct MockGpio {
        calls: RefCell<Vec<Call>>,
    }

    impl MockGpio {
        fn take(&self) -> Vec<Call> {
            core::mem::take(&mut *self.calls.borrow_mut())
        }

        fn push(&self, c: Call) {
            self.calls.borrow_mut().push(c);
        }
    }

    impl GpioPort for MockGpio {
        fn unlock_port(&self, _ep: &Eallow<'_>, port: u8) {
            self.push(Call::Unlock(port));
        }
        fn write_ctrl(&self, _ep: &Eallow<'_>, offset: u16, value: u32) {
            self.push(Call::Ctrl(offset, value));
        }
        fn clear_data(&self, _ep: &Eallow<'_>) {
            self.push(Call::Clear);
        }
        fn set_analog_mode(&self, _ep: &Eallow<'_>, pin: u16, mode: AnalogMode) {
            self.push(Call::Analog(pin, mode));
        }
        fn set_pad(&self, _ep: &Eallow<'_>, pin: u16, pad: PadType) {
            self.push(Call::Pad(pin, pad));
        }
        fn set_qualification(&self, _ep: &Eallow<'_>, pin: u16, qual: Qualification) {
            self.push(Call::Qual(pin, qual));
        }
        fn set_direction(&self, _ep: &Eallow<'_>, pin: u16, dir: Direction) {
            self.push(Call::Dir(pin, dir));
        }
        fn set_mux(&self, _ep: &Eallow<'_>, pin: u16, mux: u8) {
            self.push(Call::Mux(pin, mux));
        }
        fn write(&self, pin: u16, high: bool) {
            self.push(Call::Write(pin, high));
        }
        fn toggle(&self, _pin: u16) {}
        fn read(&self, _pin: u16) -> bool {
            false
        }
    }

    #[derive(Default)]
    struct MockCpu {
        open: Cell<bool>,
        brackets: Cell<u32>,
    }

    impl Protect for MockCpu {
        fn allow(&self) {
            assert!(!self.open.get(), "nested bracket");
            self.open.set(true);
            self.brackets.set(self.brackets.get() + 1);
        }
        fn deny(&self) {
            self.open.set(false);
        }
    }

    fn identity(pin_count: u16, q100: bool) -> Identity {
        Identity {
            pin_count,
            q100,
            ..Identity::virtual_for::<F28004x>()
        }
    }

    #[test]
    fn test_reset_applies_64_pin_lists() {
        let gpio = MockGpio::default();
        let cpu = MockCpu::default();
        let mut reg = PinRegistry::<F28004x, _>::new(&gpio, &cpu);
        reg.reset(&identity(64, false));

        let calls = gpio.take();
        assert_eq!(&calls[..3], &[Call::Unlock(0), Call::Unlock(1), Call::Unlock(7)]);
        assert!(calls.contains(&Call::Ctrl(0x14, 0x00C0_0000)));
        assert_eq!(calls.last(), Some(&Call::Clear));
        assert!(!cpu.open.get());

        for pin in [19u16, 20, 36, 14, 15, 25, 30, 31, 59] {
            let s = reg.status(PinCode::new(pin, 0, PinFun::NONE)).unwrap();
            assert!(!s.available, "pin {}", pin);
            assert_eq!(s.fun, PinFun::NONE);
        }
        // Q100-only pins stay available on the standard package
        assert!(reg.status(p4::IO12_CANB_TX).unwrap().available);
        assert!(reg.status(p4::IO16_DOUT).unwrap().available);
        assert_eq!(reg.status(p4::IO16_DOUT).unwrap().fun, PinFun::DIN);
        assert_eq!(reg.status(p4::IO224_AIN).unwrap().fun, PinFun::AIN);
    }

    #[test]
    fn test_reset_q100_disables_extra_pins() {
        let gpio = MockGpio::default();
        let cpu = MockCpu::default();
        let mut reg = PinRegistry::<F28004x, _>::new(&gpio, &cpu);
        reg.reset(&identity(64, true));
        assert!(!reg.status(p4::IO12_CANB_TX).unwrap().available);
        assert!(!reg.status(p4::IO33_I2CA_SCL).unwrap().available);
    }

    #[test]
    fn test_forced_disabled_keep_their_function() {
        let gpio = MockGpio::default();
        let cpu = MockCpu::default();
        let mut reg = PinRegistry::<F28004x, _>::new(&gpio, &cpu);
        reg.reset(&identity(100, false));
        let s = reg.status(p4::IO18_X2).unwrap();
        assert!(!s.available);
        assert_eq!(s.fun, PinFun::X2);
        assert_eq!(
            reg.connect(p4::IO35_JTAG_TDI, PinFun::NONE),
            Err(ConnectError::Unavailable)
        );
        assert_eq!(reg.disconnect(p4::IO37_JTAG_TDO), Err(Error::Unavailable));
    }

    #[test]
    fn test_pin_conflict() {
        let gpio = MockGpio::default();
        let cpu = MockCpu::default();
        let mut reg = PinRegistry::<F28004x, _>::new(&gpio, &cpu);
        reg.reset(&identity(64, false));

        assert_eq!(reg.connect(p4::IO16_SPIA_SIMO, PinFun::SPIA_SIMO), Ok(()));
        assert_eq!(reg.connect(p4::IO16_DOUT, PinFun::DOUT), Err(ConnectError::Busy));
        // Status of any code for pin 16 reports what is applied
        let s = reg.status(p4::IO16_DOUT).unwrap();
        assert!(s.connected);
        assert_eq!(s.fun, PinFun::SPIA_SIMO);

        assert_eq!(reg.disconnect(p4::IO16_SPIA_SIMO), Ok(()));
        assert_eq!(reg.connect(p4::IO16_DOUT, PinFun::DOUT), Ok(()));
    }

    #[test]
    fn test_connect_refusals() {
        let gpio = MockGpio::default();
        let cpu = MockCpu::default();
        let mut reg = PinRegistry::<F28004x, _>::new(&gpio, &cpu);
        reg.reset(&identity(100, false));
        gpio.take();

        assert_eq!(reg.connect(PinCode::IOX, PinFun::NONE), Err(ConnectError::Code));
        assert_eq!(
            reg.connect(p4::IO16_DOUT, PinFun::DIN),
            Err(ConnectError::FunMismatch)
        );
        assert_eq!(
            reg.connect(PinCode::new(224, 0, PinFun::DOUT), PinFun::DOUT),
            Err(ConnectError::AnalogOnly)
        );
        assert_eq!(
            reg.connect(p4::IO16_SCIA_TX, PinFun::NONE),
            Err(ConnectError::Unsupported(PinGroup::SCI))
        );
        // Nothing was written for refused requests
        assert!(gpio.take().is_empty());
        assert_eq!(cpu.brackets.get(), 1);
    }

    #[test]
    fn test_i2c_connect_order() {
        let gpio = MockGpio::default();
        let cpu = MockCpu::default();
        let mut reg = PinRegistry::<F28004x, _>::new(&gpio, &cpu);
        reg.reset(&identity(100, false));
        gpio.take();

        reg.connect(p4::IO32_I2CA_SDA, PinFun::I2CA_SDA).unwrap();
        assert_eq!(
            gpio.take(),
            [
                Call::Qual(32, Qualification::Async),
                Call::Pad(32, PadType::PullUp),
                Call::Mux(32, p4::IO32_I2CA_SDA.mux()),
            ]
        );
    }

    #[test]
    fn test_sd_on_gpio22_leaves_analog_mode() {
        let gpio = MockGpio::default();
        let cpu = MockCpu::default();
        let mut reg = PinRegistry::<F28004x, _>::new(&gpio, &cpu);
        reg.reset(&identity(100, false));
        gpio.take();

        let code = PinCode::new(22, 0xE, PinFun::SD1_D1);
        reg.connect(code, PinFun::NONE).unwrap();
        let calls = gpio.take();
        assert_eq!(calls[0], Call::Analog(22, AnalogMode::Disabled));
        assert!(calls.contains(&Call::Pad(22, PadType::Invert)));
        assert_eq!(calls.last(), Some(&Call::Mux(22, 0xE)));
    }

    #[test]
    fn test_disconnect_restores_default() {
        let gpio = MockGpio::default();
        let cpu = MockCpu::default();
        let mut reg = PinRegistry::<F28004x, _>::new(&gpio, &cpu);
        reg.reset(&identity(100, false));

        reg.connect(p4::IO17_DOUT, PinFun::DOUT).unwrap();
        gpio.take();
        reg.disconnect(p4::IO17_DOUT).unwrap();
        let calls = gpio.take();
        assert!(calls.contains(&Call::Dir(17, Direction::Input)));
        assert!(calls.contains(&Call::Mux(17, 0)));
        let s = reg.status(p4::IO17_DOUT).unwrap();
        assert!(!s.connected);
        assert!(s.available);
        assert_eq!(s.fun, PinFun::DIN);
    }

    #[test]
    fn test_f2803x_pull_up_policy() {
        let gpio = MockGpio::default();
        let cpu = MockCpu::default();
        let mut reg = PinRegistry::<F2803x, _>::new(&gpio, &cpu);
        reg.reset(&Identity {
            pin_count: 80,
            ..Identity::virtual_for::<F2803x>()
        });
        reg.disconnect(f2803x::pins::IO6_DOUT).unwrap();
        reg.disconnect(f2803x::pins::IO16_DOUT).unwrap();
        let calls = gpio.take();
        assert!(calls.contains(&Call::Pad(6, PadType::Standard)));
        assert!(calls.contains(&Call::Pad(16, PadType::PullUp)));
    }

    proptest! {
        #[test]
        fn prop_connect_disconnect_round_trip(idx in 0usize..p4::ALL.len()) {
            let gpio = MockGpio::default();
            let cpu = MockCpu::default();
            let mut reg = PinRegistry::<F28004x, _>::new(&gpio, &cpu);
            reg.reset(&identity(100, false));

            let code = p4::ALL[idx];
            let before = reg.status(code).unwrap();
            match reg.connect(code, PinFun::NONE) {
                Ok(()) => {
                    let s = reg.status(code).unwrap();
                    prop_assert!(s.connected);
                    prop_assert_eq!(s.fun, code.fun());

                    reg.disconnect(code).unwrap();
                    let s = reg.status(code).unwrap();
                    prop_assert!(!s.connected);
                    prop_assert_eq!(s.fun, PinRegistry::<F28004x, MockGpio>::default_fun(code.pin()));

                    reg.connect(code, PinFun::NONE).unwrap();
                    prop_assert_eq!(reg.status(code).unwrap().fun, code.fun());
                }
                Err(_) => {
                    // Refusals leave the pin untouched
                    prop_assert_eq!(reg.status(code).unwrap(), before);
                }
            }
        }

        #[test]
        fn prop_availability_never_changes(a in 0usize..p4::ALL.len(), b in 0usize..p4::ALL.len()) {
            let gpio = MockGpio::default();
            let cpu = MockCpu::default();
            let mut reg = PinRegistry::<F28004x, _>::new(&gpio, &cpu);
            reg.reset(&identity(64, true));
            let avail: Vec<bool> = reg.iter().map(|s| s.available).collect();

            let _ = reg.connect(p4::ALL[a], PinFun::NONE);
            let _ = reg.disconnect(p4::ALL[b]);
            let _ = reg.connect(p4::ALL[b], PinFun::NONE);
            let after: Vec<bool> = reg.iter().map(|s| s.available).collect();
            prop_assert_eq!(avail, after);
        }
    }
}

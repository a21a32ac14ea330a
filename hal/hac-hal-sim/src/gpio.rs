//! Simulated GPIO block with an optional interlock latch
//!
//! The latch models the board-level fault circuit: a rising edge on the
//! trip line sets the internal fault, a rising edge on the clear line resets
//! it. Both read lines are active low at the pin.

use std::cell::{Cell, RefCell};

use hac_hal::gpio::{AnalogMode, Direction, PadType, Qualification};
use hac_hal::{Eallow, GpioPort};

/// Pins addressable by the simulated block
pub const PIN_COUNT: usize = 256;

/// Register-visible state of one pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinState {
    pub mux: u8,
    pub direction: Direction,
    pub pad: PadType,
    pub qualification: Qualification,
    pub analog: AnalogMode,
    /// Output latch
    pub output: bool,
    /// Externally applied level
    pub input: bool,
}

impl PinState {
    const RESET: Self = Self {
        mux: 0,
        direction: Direction::Input,
        pad: PadType::PullUp,
        qualification: Qualification::Sync,
        analog: AnalogMode::Disabled,
        output: false,
        input: false,
    };
}

/// Pins wired to the interlock latch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterlockWiring {
    pub trip: u16,
    pub clear: u16,
    /// Combined fault line, `None` when not wired
    pub combined: Option<u16>,
    /// Internal fault line, `None` when not wired
    pub internal: Option<u16>,
}

#[derive(Debug, Default)]
struct Latch {
    wiring: Option<InterlockWiring>,
    internal: bool,
    external: bool,
}

/// Simulated GPIO block
#[derive(Debug)]
pub struct SimGpio {
    pins: RefCell<Vec<PinState>>,
    ctrl: RefCell<Vec<(u16, u32)>>,
    unlocked: RefCell<Vec<u8>>,
    data_clears: Cell<u32>,
    latch: RefCell<Latch>,
}

impl Default for SimGpio {
    fn default() -> Self {
        Self::new()
    }
}

impl SimGpio {
    pub fn new() -> Self {
        Self {
            pins: RefCell::new(vec![PinState::RESET; PIN_COUNT]),
            ctrl: RefCell::new(Vec::new()),
            unlocked: RefCell::new(Vec::new()),
            data_clears: Cell::new(0),
            latch: RefCell::new(Latch::default()),
        }
    }

    /// Register state of a pin
    pub fn pin(&self, pin: u16) -> PinState {
        self.pins.borrow()[usize::from(pin)]
    }

    /// Drive the external level of an input pin
    pub fn set_input(&self, pin: u16, level: bool) {
        self.pins.borrow_mut()[usize::from(pin)].input = level;
    }

    /// Raw control register writes in order
    pub fn ctrl_writes(&self) -> Vec<(u16, u32)> {
        self.ctrl.borrow().clone()
    }

    pub fn unlocked_ports(&self) -> Vec<u8> {
        self.unlocked.borrow().clone()
    }

    pub fn data_clears(&self) -> u32 {
        self.data_clears.get()
    }

    /// Attach the interlock latch to the given pins
    pub fn wire_interlock(&self, wiring: InterlockWiring) {
        self.latch.borrow_mut().wiring = Some(wiring);
    }

    /// Assert or release the external fault source
    pub fn set_external_fault(&self, fault: bool) {
        self.latch.borrow_mut().external = fault;
    }

    /// Internal fault latch state
    pub fn internal_fault(&self) -> bool {
        self.latch.borrow().internal
    }

    fn drive(&self, pin: u16, high: bool) {
        let was = {
            let mut pins = self.pins.borrow_mut();
            let state = &mut pins[usize::from(pin)];
            let was = state.output;
            state.output = high;
            was
        };
        let mut latch = self.latch.borrow_mut();
        let Some(wiring) = latch.wiring else {
            return;
        };
        let rising = !was && high;
        if rising && pin == wiring.trip {
            latch.internal = true;
        } else if rising && pin == wiring.clear {
            latch.internal = false;
        }
    }
}

impl GpioPort for SimGpio {
    fn unlock_port(&self, _ep: &Eallow<'_>, port: u8) {
        self.unlocked.borrow_mut().push(port);
    }

    fn write_ctrl(&self, _ep: &Eallow<'_>, offset: u16, value: u32) {
        self.ctrl.borrow_mut().push((offset, value));
    }

    fn clear_data(&self, _ep: &Eallow<'_>) {
        self.data_clears.set(self.data_clears.get() + 1);
        for state in self.pins.borrow_mut().iter_mut() {
            state.output = false;
        }
    }

    fn set_analog_mode(&self, _ep: &Eallow<'_>, pin: u16, mode: AnalogMode) {
        self.pins.borrow_mut()[usize::from(pin)].analog = mode;
    }

    fn set_pad(&self, _ep: &Eallow<'_>, pin: u16, pad: PadType) {
        self.pins.borrow_mut()[usize::from(pin)].pad = pad;
    }

    fn set_qualification(&self, _ep: &Eallow<'_>, pin: u16, qual: Qualification) {
        self.pins.borrow_mut()[usize::from(pin)].qualification = qual;
    }

    fn set_direction(&self, _ep: &Eallow<'_>, pin: u16, dir: Direction) {
        self.pins.borrow_mut()[usize::from(pin)].direction = dir;
    }

    fn set_mux(&self, _ep: &Eallow<'_>, pin: u16, mux: u8) {
        self.pins.borrow_mut()[usize::from(pin)].mux = mux;
    }

    fn write(&self, pin: u16, high: bool) {
        self.drive(pin, high);
    }

    fn toggle(&self, pin: u16) {
        let level = self.pins.borrow()[usize::from(pin)].output;
        self.drive(pin, !level);
    }

    fn read(&self, pin: u16) -> bool {
        let state = self.pin(pin);
        if state.direction == Direction::Output {
            return state.output;
        }
        let latch = self.latch.borrow();
        if let Some(wiring) = latch.wiring {
            if wiring.combined == Some(pin) {
                return !(latch.internal || latch.external);
            }
            if wiring.internal == Some(pin) {
                return !latch.internal;
            }
        }
        state.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoProtect;

    impl hac_hal::Protect for NoProtect {
        fn allow(&self) {}
        fn deny(&self) {}
    }

    fn wired() -> SimGpio {
        let gpio = SimGpio::new();
        gpio.wire_interlock(InterlockWiring {
            trip: 24,
            clear: 16,
            combined: Some(7),
            internal: Some(6),
        });
        gpio
    }

    #[test]
    fn test_trip_edge_latches_fault() {
        let gpio = wired();
        assert!(gpio.read(7));
        gpio.write(24, true);
        gpio.write(24, false);
        assert!(gpio.internal_fault());
        assert!(!gpio.read(7));
        assert!(!gpio.read(6));
    }

    #[test]
    fn test_clear_edge_releases_internal_only() {
        let gpio = wired();
        gpio.write(24, true);
        gpio.set_external_fault(true);
        gpio.write(16, true);
        gpio.write(16, false);
        assert!(!gpio.internal_fault());
        assert!(gpio.read(6));
        assert!(!gpio.read(7));
    }

    #[test]
    fn test_output_reads_back_latch() {
        let gpio = SimGpio::new();
        let ep = Eallow::new(&NoProtect);
        gpio.set_direction(&ep, 3, Direction::Output);
        gpio.toggle(3);
        assert!(gpio.read(3));
        gpio.toggle(3);
        assert!(!gpio.read(3));
    }
}

//! GPIO port abstraction
//!
//! Register-level access to the pin multiplexer, pad and qualification
//! controls and the data registers. Ownership of pins is not tracked here;
//! that is the job of the pin registry in `hac-core`.

use crate::protect::Eallow;

/// Pin direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Input,
    Output,
}

/// Pad configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PadType {
    /// Push-pull output, floating input, no pull-up
    Standard,
    /// Internal pull-up enabled
    PullUp,
    /// Input polarity inverted
    Invert,
    /// Open-drain output
    OpenDrain,
}

/// Input qualification mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Qualification {
    /// Synchronized to SYSCLK (reset default)
    Sync,
    /// Qualified over three samples
    ThreeSample,
    /// Qualified over six samples
    SixSample,
    /// No synchronization
    Async,
}

/// Analog mode of an AIO-capable pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnalogMode {
    Enabled,
    Disabled,
}

/// GPIO register port
///
/// Methods that modify configuration registers take an open
/// write-protection bracket.
pub trait GpioPort {
    /// Unlock the configuration of every pin of a port
    ///
    /// # Arguments
    /// * `port` - Port index (0 is port A)
    fn unlock_port(&self, ep: &Eallow<'_>, port: u8);

    /// Write a raw control register
    ///
    /// Used by the pin registry to restore documented reset values.
    ///
    /// # Arguments
    /// * `offset` - Register offset from the GPIO control block base
    /// * `value` - 32-bit register value
    fn write_ctrl(&self, ep: &Eallow<'_>, offset: u16, value: u32);

    /// Clear all data registers
    fn clear_data(&self, ep: &Eallow<'_>);

    /// Enable or disable analog mode of an AIO-capable pin
    fn set_analog_mode(&self, ep: &Eallow<'_>, pin: u16, mode: AnalogMode);

    /// Set pad configuration
    fn set_pad(&self, ep: &Eallow<'_>, pin: u16, pad: PadType);

    /// Set input qualification
    fn set_qualification(&self, ep: &Eallow<'_>, pin: u16, qual: Qualification);

    /// Set pin direction
    fn set_direction(&self, ep: &Eallow<'_>, pin: u16, dir: Direction);

    /// Select the peripheral function routed to the pin
    ///
    /// # Arguments
    /// * `pin` - GPIO pin number
    /// * `mux` - Combined (G)MUX selector value (0..15)
    fn set_mux(&self, ep: &Eallow<'_>, pin: u16, mux: u8);

    /// Drive an output pin
    fn write(&self, pin: u16, high: bool);

    /// Toggle an output pin
    fn toggle(&self, pin: u16);

    /// Read the pin level
    fn read(&self, pin: u16) -> bool;
}

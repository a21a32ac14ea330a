//! I2C controller port
//!
//! Status-flag level access to the master controller. The byte-level
//! protocol (START retry, NACK generation, STOP) is driven by the transport
//! in `hac-net`, which polls these flags with its own timeouts.

/// Status register flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Status(pub u16);

impl Status {
    /// Registers ready to be accessed again
    pub const ARDY: Self = Self(1 << 2);
    /// No acknowledge received
    pub const NACK: Self = Self(1 << 1);
    /// Receive data ready
    pub const RRDY: Self = Self(1 << 3);
    /// Transmit data register ready
    pub const XRDY: Self = Self(1 << 4);
    /// Stop condition detected
    pub const SCD: Self = Self(1 << 5);
    /// Transmit shift register has shifted the last byte out
    pub const XSMT: Self = Self(1 << 11);
    /// NACK generated by the master receiver
    pub const NACK_SENT: Self = Self(1 << 13);

    /// True when every flag of `other` is set
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

/// Master transfer direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    Transmit,
    Receive,
}

/// I2C controller port
///
/// `index` selects the controller (0 is I2C-A).
pub trait I2cPort {
    /// Initialize as master
    ///
    /// # Arguments
    /// * `sysclk_hz` - Module input clock
    /// * `bitrate` - Bus speed (bps)
    /// * `bits` - Bit-count field (0 means 8 bits)
    fn init_master(&self, index: u8, sysclk_hz: u32, bitrate: u32, bits: u8);

    /// Take the module in or out of reset
    fn set_enabled(&self, index: u8, enabled: bool);

    /// Clear pending START and STOP requests
    fn clear_start_stop(&self, index: u8);

    /// Bus busy flag
    fn bus_busy(&self, index: u8) -> bool;

    /// Current status flags
    fn status(&self, index: u8) -> Status;

    /// Clear status flags
    fn clear_status(&self, index: u8, flags: Status);

    /// Select repeat-mode master transfer direction and slave address
    ///
    /// # Arguments
    /// * `address` - Slave address, 7 or 10 bits
    /// * `ten_bit` - Expanded address mode (XA)
    fn set_transfer(&self, index: u8, mode: Mode, address: u16, ten_bit: bool);

    /// Generate a START and address frame
    fn send_start(&self, index: u8);

    /// Generate a STOP after the current byte
    fn send_stop(&self, index: u8);

    /// True while a requested STOP has not been generated yet
    fn stop_pending(&self, index: u8) -> bool;

    /// NACK the next received byte
    fn send_nack(&self, index: u8);

    /// Write the transmit data register
    fn put(&self, index: u8, byte: u8);

    /// Read the receive data register
    fn get(&self, index: u8) -> u8;
}

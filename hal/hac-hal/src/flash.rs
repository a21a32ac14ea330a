//! On-chip flash port
//!
//! Addresses and lengths are in 16-bit words, the C28x addressable unit.

/// Errors reported by the flash state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlashError {
    /// Program or erase verify failed
    Verify,
    /// Access outside the device flash
    Address,
}

/// On-chip flash port
pub trait FlashPort {
    /// Read words starting at `address`
    fn read(&self, address: u32, data: &mut [u16]) -> Result<(), FlashError>;

    /// Program words starting at `address`
    fn program(&self, address: u32, data: &[u16]) -> Result<(), FlashError>;

    /// Erase the sector starting at `address` of `length` words
    fn erase(&self, address: u32, length: u32) -> Result<(), FlashError>;
}

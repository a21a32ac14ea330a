//! Silicon identity source

/// Raw identity words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IdWords {
    /// PARTIDL register
    pub partid_low: u32,
    /// PARTIDH register (or part type word on older parts)
    pub partid_high: u32,
    /// REVID register
    pub revid: u32,
    /// Unique identifier word from OTP
    pub uid: u32,
    /// Device capability word used for CLB detection
    pub dc: u32,
}

/// Reads the silicon identification locations
pub trait IdSource {
    /// Read the identity words
    fn read(&self) -> IdWords;
}

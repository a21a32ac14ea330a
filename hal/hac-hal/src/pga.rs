//! Programmable gain amplifier (PGA) port

use crate::protect::Eallow;

/// PGA gain setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gain {
    X3,
    X6,
    X12,
    X24,
}

/// PGA port
pub trait PgaPort {
    /// Set gain, disable the output filter and enable the amplifier
    ///
    /// # Arguments
    /// * `core` - PGA core (1..5)
    fn configure(&self, ep: &Eallow<'_>, core: u8, gain: Gain);
}

//! Peripheral interrupt expansion (PIE) port

use crate::protect::Eallow;

/// PIE interrupt vector code
///
/// Encoded as `(group << 8) | index`, matching the vendor interrupt
/// numbering: group 1..12, index 1..16.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Vector(pub u16);

impl Vector {
    /// ADC-A interrupt 1
    pub const ADCA1: Self = Self(0x0101);
    /// ADC-A interrupt 2
    pub const ADCA2: Self = Self(0x0A02);
    /// ADC-B interrupt 1
    pub const ADCB1: Self = Self(0x0102);
    /// ADC-C interrupt 1
    pub const ADCC1: Self = Self(0x0103);

    /// PIE group number
    pub const fn group(self) -> u16 {
        (self.0 >> 8) & 0xFF
    }

    /// Index within the group
    pub const fn index(self) -> u16 {
        self.0 & 0xFF
    }
}

/// PIE port
pub trait Pie {
    /// Reset the PIE block: disable and clear every vector, enable the block
    fn init(&self, ep: &Eallow<'_>);

    /// Enable a vector
    fn enable(&self, ep: &Eallow<'_>, vector: Vector);

    /// Disable a vector
    fn disable(&self, ep: &Eallow<'_>, vector: Vector);

    /// Acknowledge a group so further interrupts of it reach the CPU
    fn acknowledge(&self, group: u16);
}

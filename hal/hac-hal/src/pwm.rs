//! ePWM port abstraction
//!
//! Generators are numbered from 1 (EPWM1).

use crate::protect::Eallow;

/// Counter direction after a synchronization event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SyncDirection {
    Up,
    Down,
}

/// Phase shift loaded on synchronization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Phase {
    /// Counter value loaded on sync
    pub count: u16,
    /// Count direction after sync
    pub direction: SyncDirection,
}

/// Generator time-base and output configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GeneratorConfig {
    /// Time-base clock prescaler exponent (divider is `1 << div`)
    pub div: u8,
    /// Up-down counter period
    pub period: u16,
    /// Phase shift, `None` disables phase loading
    pub phase: Option<Phase>,
    /// B output driven by CMPB instead of complementing A
    pub independent_b: bool,
    /// Rising and falling edge dead band in time-base ticks when B
    /// complements A
    pub dead_band: u16,
}

/// Compare register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Compare {
    A,
    B,
}

/// ADC start-of-conversion output of a generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SocOutput {
    SocA,
    SocB,
}

/// Event that fires an ADC start-of-conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum SocSource {
    /// Time-base counter equals zero
    CounterZero = 1,
    /// Time-base counter equals period
    CounterPeriod = 2,
    /// Counter equals zero or period
    CounterZeroOrPeriod = 3,
    /// Counter equals CMPA while counting up
    CompareAUp = 4,
    /// Counter equals CMPA while counting down
    CompareADown = 5,
    /// Counter equals CMPB while counting up
    CompareBUp = 6,
    /// Counter equals CMPB while counting down
    CompareBDown = 7,
}

/// ePWM port
pub trait PwmPort {
    /// Program a generator
    ///
    /// Sets up the time base in up-down mode with shadowed period, the
    /// action qualifiers (A set on CMPA down, cleared on CMPA up; B inverse
    /// on CMPB when independent), the dead band, the digital-compare trip
    /// input and the trip-zone safe state (both outputs low). Ends with a
    /// forced one-shot trip so the outputs stay safe until released.
    fn configure(&self, ep: &Eallow<'_>, num: u8, cfg: &GeneratorConfig);

    /// Write a compare register
    fn set_compare(&self, num: u8, compare: Compare, value: u16);

    /// Route a start-of-conversion event
    ///
    /// # Arguments
    /// * `output` - SOCA or SOCB output
    /// * `source` - Counter event
    /// * `prescale` - Events per trigger (1..3, 0 disables)
    fn set_adc_trigger(&self, num: u8, output: SocOutput, source: SocSource, prescale: u8);

    /// Force the one-shot trip (outputs low)
    fn force_trip(&self, ep: &Eallow<'_>, num: u8);

    /// Clear the one-shot trip
    fn clear_trip(&self, ep: &Eallow<'_>, num: u8);

    /// True while the one-shot trip is latched
    fn tripped(&self, num: u8) -> bool;
}

//! ADC port abstraction
//!
//! Cores are numbered from 1 (ADCA). Each core has 16 start-of-conversion
//! (SOC) wrappers, a result register per SOC and up to [`AdcPort::int_lines`]
//! interrupt lines.

use crate::protect::Eallow;

/// Number of SOC wrappers per ADC core
pub const SOC_COUNT: u8 = 16;

/// Start-of-conversion wrapper configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SocConfig {
    /// Trigger source code (0 is software only)
    pub trigger: u8,
    /// Analog input channel (ADCINx)
    pub channel: u8,
    /// Acquisition window in ADC clock cycles, already encoded for the
    /// silicon's ACQPS field
    pub window: u32,
}

/// ADC port
pub trait AdcPort {
    /// Bring an ADC core out of reset
    ///
    /// Disables the converter, programs the clock prescaler and internal
    /// reference, powers the converter up, selects end-of-conversion
    /// interrupt pulses and round-robin-free (high priority) SOC arbitration.
    /// The caller is responsible for the power-up settling delay.
    ///
    /// # Arguments
    /// * `core` - ADC core (1 is ADCA)
    /// * `div` - SYSCLK divider (1..8)
    fn init_core(&self, ep: &Eallow<'_>, core: u8, div: u8);

    /// Configure a SOC wrapper
    fn configure_soc(&self, ep: &Eallow<'_>, core: u8, soc: u8, cfg: SocConfig);

    /// Route an interrupt line to fire on the end of conversion of `soc`
    ///
    /// The line is re-armed in non-continuous mode and its flag cleared.
    ///
    /// # Arguments
    /// * `line` - Interrupt line (1-based)
    fn configure_interrupt(&self, ep: &Eallow<'_>, core: u8, line: u8, soc: u8);

    /// Disable an interrupt line
    fn disable_interrupt(&self, ep: &Eallow<'_>, core: u8, line: u8);

    /// Software-force the SOC wrappers selected by `mask`
    fn force_soc(&self, core: u8, mask: u16);

    /// Interrupt line flag
    fn interrupt_flag(&self, core: u8, line: u8) -> bool;

    /// Clear an interrupt line flag
    fn clear_interrupt_flag(&self, core: u8, line: u8);

    /// Conversion result of a SOC wrapper
    fn result(&self, core: u8, soc: u8) -> u16;

    /// Program the zero-offset trim register
    fn set_offset_trim(&self, ep: &Eallow<'_>, core: u8, trim: u16);

    /// Connect or disconnect VREFLO to the calibration input
    fn connect_vreflo(&self, ep: &Eallow<'_>, core: u8, connected: bool);
}

//! Sigma-delta filter module (SDFM) port

use crate::protect::Eallow;

/// Data filter configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FilterConfig {
    /// Sinc3 oversampling ratio (1..256)
    pub oversampling: u16,
    /// Result right shift for 16-bit output
    pub shift: u16,
    /// Modulator clock mode
    pub clock_mode: u16,
}

/// SDFM port
pub trait SdfmPort {
    /// Enable the master filter of the module
    fn enable_master(&self, ep: &Eallow<'_>);

    /// Configure a data filter in Sinc3 mode with 16-bit output
    ///
    /// # Arguments
    /// * `filter` - Filter index (0-based)
    fn configure_filter(&self, ep: &Eallow<'_>, filter: u8, cfg: FilterConfig);

    /// Latest 16-bit filter output
    fn data(&self, filter: u8) -> i16;
}

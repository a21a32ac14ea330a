//! Comparator subsystem (CMPSS) port
//!
//! Used as a hardware window comparator: the high and low comparators
//! watch the same analog input against two DAC thresholds and trip the PWM
//! through the ePWM X-BAR.

use crate::protect::Eallow;

/// CMPSS port
pub trait CmpssPort {
    /// Select the analog input of a comparator pair
    ///
    /// # Arguments
    /// * `mux` - Analog subsystem mux select
    /// * `value` - Positive-input selection value
    fn select_input(&self, ep: &Eallow<'_>, mux: u16, value: u16);

    /// Configure a comparator core
    ///
    /// Both comparators compare against their DAC, the low one inverted.
    /// Outputs are asynchronous, hysteresis zero, blanking off, the ramp
    /// is synchronized from the given PWM and the DAC is referenced to VDDA.
    ///
    /// # Arguments
    /// * `core` - Comparator core (1..7)
    /// * `pwm_sync` - ePWM providing the ramp sync
    fn configure(&self, ep: &Eallow<'_>, core: u8, pwm_sync: u16);

    /// Program the high and low DAC thresholds
    fn set_thresholds(&self, core: u8, high: u16, low: u16);

    /// Clear the latched filter outputs
    fn clear_latch(&self, core: u8);

    /// Route a comparator output to an ePWM X-BAR trip
    ///
    /// # Arguments
    /// * `trip` - X-BAR trip number
    /// * `mux_config` - Mux configuration word
    /// * `mux_enable` - Mux enable mask
    fn route_trip(&self, ep: &Eallow<'_>, trip: u16, mux_config: u32, mux_enable: u32);
}

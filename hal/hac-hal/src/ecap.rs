//! Enhanced capture (eCAP) port

use crate::protect::Eallow;

/// eCAP port
///
/// Cores are numbered from 1. Each core is fed from the input X-BAR line of
/// the same number.
pub trait EcapPort {
    /// Route a GPIO to the core's input X-BAR line
    fn route_input(&self, ep: &Eallow<'_>, core: u8, pin: u16);

    /// Configure continuous capture
    ///
    /// Event 1 captures the rising edge and resets the counter, event 2 the
    /// falling edge, wrapping after event 2. The counter is started.
    ///
    /// # Arguments
    /// * `prescale` - Event prescaler field (input divided by `2 * prescale`)
    fn configure(&self, ep: &Eallow<'_>, core: u8, prescale: u16);

    /// Captured counter value of an event (1..4)
    fn capture(&self, core: u8, event: u8) -> u32;
}

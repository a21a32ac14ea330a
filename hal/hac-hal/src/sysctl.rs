//! System control port
//!
//! Flash wait states, PLL configuration, peripheral clock gating and the
//! calibrated busy-wait primitive.

use crate::protect::Eallow;

/// PLL reference clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockSource {
    /// Internal 10 MHz oscillator
    Internal,
    /// External crystal
    Xtal,
}

/// Peripheral clock gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Peripheral {
    Can(u8),
    I2c(u8),
    Spi(u8),
    FsiTx(u8),
    FsiRx(u8),
    Adc(u8),
    Epwm(u8),
    Ecap(u8),
    Sdfm(u8),
    Pga(u8),
    Cmpss(u8),
}

/// System control port
pub trait SysCtl {
    /// Program flash wait states for the executing code
    ///
    /// # Arguments
    /// * `paged` - Paged read wait states
    /// * `random` - Random read wait states
    /// * `otp` - OTP read wait states
    fn set_flash_wait_states(&self, ep: &Eallow<'_>, paged: u8, random: u8, otp: u8);

    /// Program the PLL and wait for lock
    ///
    /// # Arguments
    /// * `source` - PLL reference clock
    /// * `input_hz` - Reference frequency
    /// * `output_hz` - Requested SYSCLK frequency
    ///
    /// # Returns
    /// True when the PLL reported lock and SYSCLK was switched over.
    fn set_pll(&self, ep: &Eallow<'_>, source: ClockSource, input_hz: u32, output_hz: u32)
        -> bool;

    /// Enable the peripheral clock
    fn enable_peripheral(&self, ep: &Eallow<'_>, periph: Peripheral);

    /// Disable the peripheral clock
    fn disable_peripheral(&self, ep: &Eallow<'_>, periph: Peripheral);

    /// Pulse the peripheral soft reset
    fn reset_peripheral(&self, ep: &Eallow<'_>, periph: Peripheral);

    /// Gate the ePWM time-base clocks together
    fn set_tbclk_sync(&self, ep: &Eallow<'_>, enabled: bool);

    /// Busy-wait the given number of CPU cycles
    fn delay_cycles(&self, cycles: u32);
}

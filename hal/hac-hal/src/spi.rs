//! SPI controller port

/// Clock polarity and phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Protocol {
    Pol0Pha0,
    Pol0Pha1,
    #[default]
    Pol1Pha0,
    Pol1Pha1,
}

/// Master configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Module input clock (LSPCLK)
    pub clock_hz: u32,
    /// Bus speed (bps)
    pub bitrate: u32,
    pub protocol: Protocol,
    /// Word length (1..16)
    pub bits: u8,
    /// Internal loopback of SIMO to SOMI
    pub loopback: bool,
}

/// SPI controller port
///
/// `index` selects the controller (0 is SPI-A). The controller runs as
/// master with both FIFOs enabled.
pub trait SpiPort {
    /// Configure the controller (module must be disabled)
    fn configure(&self, index: u8, cfg: &Config);

    /// Take the module in or out of reset
    fn set_enabled(&self, index: u8, enabled: bool);

    /// True while the transmit FIFO cannot accept a word
    fn busy(&self, index: u8) -> bool;

    /// Number of words waiting in the receive FIFO
    fn rx_level(&self, index: u8) -> u8;

    /// Push a word into the transmit FIFO
    fn write(&self, index: u8, word: u16);

    /// Pop a word from the receive FIFO
    fn read(&self, index: u8) -> u16;
}

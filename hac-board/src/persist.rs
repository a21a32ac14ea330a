//! Configuration storage in the module-information memory
//!
//! The record is one length byte followed by the binary configuration
//! image. It sits at the top of the writable window of the on-board
//! EEPROM, below the factory area.
//!
//! Flash-backed memories only program erased words; erase the sector
//! before [`store`] there.

use hac_core::config::{ConfigError, HalConfig, MAX_CONFIG_SIZE};
use hac_core::{info, warn, Error};
use hac_net::{Backend, Eeprom};

/// Record address in the 24AA256UID layout
pub const CONFIG_ADDRESS: u32 = 0x7000 - MAX_CONFIG_SIZE as u32;

/// Largest encoded image that fits behind the length byte
const MAX_IMAGE: usize = MAX_CONFIG_SIZE - 1;

/// Storage errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PersistError {
    /// Memory access failed
    Io(Error),
    /// Image could not be encoded or decoded
    Config(ConfigError),
    /// No record stored
    Empty,
}

impl From<Error> for PersistError {
    fn from(e: Error) -> Self {
        Self::Io(e)
    }
}

impl From<ConfigError> for PersistError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Write `config` at `address`
pub fn store<B: Backend>(
    eeprom: &mut Eeprom<B>,
    address: u32,
    config: &HalConfig,
) -> Result<(), PersistError> {
    let mut record = [0u8; MAX_CONFIG_SIZE];
    let len = config.to_bytes(&mut record[1..])?.len();
    record[0] = len as u8;
    eeprom.write_at(address, &record[..=len])?;
    info!("Configuration stored, {} bytes", len);
    Ok(())
}

/// Read the configuration stored at `address`
pub fn load<B: Backend>(eeprom: &mut Eeprom<B>, address: u32) -> Result<HalConfig, PersistError> {
    let mut len = [0u8; 1];
    eeprom.read_at(address, &mut len)?;
    let len = usize::from(len[0]);
    // Blank memory reads as 0xFF
    if len == 0 || len > MAX_IMAGE {
        return Err(PersistError::Empty);
    }
    let mut image = [0u8; MAX_IMAGE];
    eeprom.read_at(address + 1, &mut image[..len])?;
    Ok(HalConfig::from_bytes(&image[..len])?)
}

/// Stored configuration, or defaults
pub fn load_or_default<B: Backend>(eeprom: &mut Eeprom<B>, address: u32) -> HalConfig {
    match load(eeprom, address) {
        Ok(config) => config,
        Err(e) => {
            warn!("No usable stored configuration ({}), using defaults", e);
            HalConfig::default()
        }
    }
}

/// Configuration from TOML text, falling back to the stored record
///
/// Host tools pass the text of a configuration file; a missing or broken
/// file falls through to the binary record and then to defaults.
#[cfg(feature = "std")]
pub fn load_with_toml<B: Backend>(
    text: Option<&str>,
    eeprom: &mut Eeprom<B>,
    address: u32,
) -> HalConfig {
    match text.map(HalConfig::from_toml) {
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            warn!("Configuration text rejected: {}", e);
            load_or_default(eeprom, address)
        }
        None => load_or_default(eeprom, address),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hac_core::config::{BoardId, BoardInfo, CONFIG_VERSION};
    use hac_net::{MemFile, Net, EEPROM_24AA256UID};

    fn memory() -> Eeprom<MemFile<0x8000>> {
        let mut eeprom = Eeprom::new(MemFile::new());
        eeprom.open(&EEPROM_24AA256UID).unwrap();
        eeprom
    }

    #[test]
    fn test_record_fits_writable_window() {
        assert_eq!(CONFIG_ADDRESS, 0x6FC0);
        assert!(EEPROM_24AA256UID.wr.address + EEPROM_24AA256UID.wr.length >= 0x7000);
    }

    #[test]
    fn test_store_then_load() {
        let mut eeprom = memory();
        let config = HalConfig {
            board: BoardInfo::new(BoardId::BP25, 1, 0),
            can_bitrate: 250_000,
            ..HalConfig::default()
        };
        store(&mut eeprom, CONFIG_ADDRESS, &config).unwrap();
        assert_eq!(load(&mut eeprom, CONFIG_ADDRESS), Ok(config));
    }

    #[test]
    fn test_blank_memory_gives_defaults() {
        let mut eeprom = memory();
        assert_eq!(load(&mut eeprom, CONFIG_ADDRESS), Err(PersistError::Empty));
        assert_eq!(
            load_or_default(&mut eeprom, CONFIG_ADDRESS),
            HalConfig::default()
        );
    }

    #[test]
    fn test_old_layout_rejected() {
        let mut eeprom = memory();
        let old = HalConfig {
            version: CONFIG_VERSION + 1,
            ..HalConfig::default()
        };
        store(&mut eeprom, CONFIG_ADDRESS, &old).unwrap();
        assert_eq!(
            load(&mut eeprom, CONFIG_ADDRESS),
            Err(PersistError::Config(ConfigError::VersionMismatch(
                CONFIG_VERSION + 1
            )))
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_text_overrides_record() {
        let mut eeprom = memory();
        store(&mut eeprom, CONFIG_ADDRESS, &HalConfig::default()).unwrap();
        let text = "version = 1\ncan_bitrate = 125000\ncan_id = 0\ncan_mask = 0\n\
                    i2c_bitrate = 400000\nled_period_ms = 100\n\
                    [board]\nid = 7\nrevision = 0\nvariant = 0\n";
        let config = load_with_toml(Some(text), &mut eeprom, CONFIG_ADDRESS);
        assert_eq!(config.can_bitrate, 125_000);
        assert_eq!(config.led_period_ms, 100);

        let fallback = load_with_toml(Some("version ="), &mut eeprom, CONFIG_ADDRESS);
        assert_eq!(fallback, HalConfig::default());
    }
}

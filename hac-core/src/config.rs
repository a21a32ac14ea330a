//! Run-time HAL configuration
//!
//! The configuration is stored as a postcard image in the EEPROM
//! configuration area. Host tools can write the TOML form instead (`std`
//! feature). Both carry a version number; a mismatch is an error.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Current configuration layout version
pub const CONFIG_VERSION: u8 = 1;

/// Largest encoded configuration image
pub const MAX_CONFIG_SIZE: usize = 64;

/// Board identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardId(pub u16);

impl BoardId {
    pub const NONE: Self = Self(0x00);
    /// Line filter (45 A)
    pub const LF45: Self = Self(0x01);
    /// Unidirectional PFC/boost converter (25 kW)
    pub const UP25: Self = Self(0x02);
    /// Unidirectional LLC converter (25 kW)
    pub const LL25: Self = Self(0x03);
    /// Unidirectional buck converter (25 kW)
    pub const BC25: Self = Self(0x04);
    /// Bidirectional PFC/AFE converter (25 kW)
    pub const BP25: Self = Self(0x07);
    /// Bidirectional isolated converter (25 kW)
    pub const BI25: Self = Self(0x08);
    /// Bidirectional charger, primary side
    pub const VG11_FM01: Self = Self(0x0C);
    /// Bidirectional charger, secondary side
    pub const VG11_FM02: Self = Self(0x0D);
    /// Combiner board
    pub const CB01: Self = Self(0x0E);
    /// Fan controller
    pub const FAN1: Self = Self(0x11);
    /// ADC test board
    pub const TBTE: Self = Self(0x12);
    /// Front panel
    pub const FP: Self = Self(0x42);
    pub const BOOT: Self = Self(0xAA);
}

/// Board identification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardInfo {
    pub id: BoardId,
    /// Hardware revision
    pub revision: u16,
    /// Hardware variant
    pub variant: u16,
}

impl BoardInfo {
    pub const fn new(id: BoardId, revision: u16, variant: u16) -> Self {
        Self {
            id,
            revision,
            variant,
        }
    }
}

impl Default for BoardInfo {
    fn default() -> Self {
        Self::new(BoardId::NONE, 0, 0)
    }
}

/// HAL configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HalConfig {
    /// Layout version, must equal [`CONFIG_VERSION`]
    pub version: u8,
    pub board: BoardInfo,
    /// Primary CAN bus speed (bps)
    pub can_bitrate: u32,
    /// CAN acceptance identifier
    pub can_id: u32,
    /// CAN acceptance mask (1 bits must match)
    pub can_mask: u32,
    /// I2C bus speed (bps)
    pub i2c_bitrate: u32,
    /// MCU LED heartbeat half-period (ms)
    pub led_period_ms: u16,
}

impl Default for HalConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            board: BoardInfo::default(),
            can_bitrate: 500_000,
            can_id: 0,
            can_mask: 0,
            i2c_bitrate: 400_000,
            led_period_ms: 500,
        }
    }
}

/// Configuration decode errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Serialization failed or buffer too small
    Serialize,
    /// Binary image could not be decoded
    Deserialize,
    /// TOML text could not be parsed
    TomlParse,
    /// Stored layout version differs from [`CONFIG_VERSION`]
    VersionMismatch(u8),
}

#[cfg(feature = "serde")]
impl HalConfig {
    /// Encode into `buf`, returning the used part
    pub fn to_bytes<'b>(&self, buf: &'b mut [u8]) -> Result<&'b mut [u8], ConfigError> {
        postcard::to_slice(self, buf).map_err(|_| ConfigError::Serialize)
    }

    /// Decode a binary image
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: HalConfig =
            postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)?;
        config.check_version()
    }

    /// Parse the TOML form
    #[cfg(feature = "std")]
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: HalConfig = toml::from_str(text).map_err(|_| ConfigError::TomlParse)?;
        config.check_version()
    }

    fn check_version(self) -> Result<Self, ConfigError> {
        if self.version != CONFIG_VERSION {
            warn!(
                "Config version mismatch: found {}, expected {}",
                self.version,
                CONFIG_VERSION
            );
            return Err(ConfigError::VersionMismatch(self.version));
        }
        Ok(self)
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn test_binary_image_version_checked() {
        let mut config = HalConfig::default();
        config.board = BoardInfo::new(BoardId::BP25, 1, 2);
        let mut buf = [0u8; MAX_CONFIG_SIZE];
        let used = config.to_bytes(&mut buf).unwrap().len();
        assert_eq!(HalConfig::from_bytes(&buf[..used]), Ok(config));

        config.version = 7;
        let used = config.to_bytes(&mut buf).unwrap().len();
        assert_eq!(
            HalConfig::from_bytes(&buf[..used]),
            Err(ConfigError::VersionMismatch(7))
        );
    }

    #[test]
    fn test_garbage_image_rejected() {
        assert_eq!(HalConfig::from_bytes(&[]), Err(ConfigError::Deserialize));
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_toml_form() {
        let text = r#"
            version = 1
            can_bitrate = 250000
            can_id = 0x100
            can_mask = 0x1FFFFF00
            i2c_bitrate = 100000
            led_period_ms = 250

            [board]
            id = 7
            revision = 0
            variant = 1
        "#;
        let config = HalConfig::from_toml(text).unwrap();
        assert_eq!(config.board, BoardInfo::new(BoardId::BP25, 0, 1));
        assert_eq!(config.can_bitrate, 250_000);
        assert_eq!(config.can_mask, 0x1FFF_FF00);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_toml_syntax_error() {
        assert_eq!(
            HalConfig::from_toml("version = "),
            Err(ConfigError::TomlParse)
        );
    }
}

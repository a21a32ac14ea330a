//! Silicon model
//!
//! One zero-sized type per supported part implements [`Silicon`]. All three
//! are always compiled so host tests can exercise every variant; the
//! `Target` alias picks the one the firmware is built for.

pub mod f2803x;
pub mod f28004x;
pub mod f28p65x;

pub use f2803x::F2803x;
pub use f28004x::F28004x;
pub use f28p65x::F28p65x;

use heapless::Vec;

use crate::io::PinCode;

/// Silicon selected by cargo feature
#[cfg(feature = "f2803x")]
pub type Target = F2803x;
#[cfg(all(feature = "f28p65x", not(feature = "f2803x")))]
pub type Target = F28p65x;
#[cfg(not(any(feature = "f2803x", feature = "f28p65x")))]
pub type Target = F28004x;

/// Device family, used where behavior differs per part
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Family {
    F2803x,
    F28004x,
    F28p65x,
}

/// Flash wait states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WaitStates {
    pub paged: u16,
    pub random: u16,
    pub otp: u16,
}

/// ADC characteristics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AdcTraits {
    /// Number of converter cores (A, B, ...)
    pub cores: u8,
    /// Core power-up time (µs)
    pub power_up_us: u32,
    /// Largest clock divider
    pub div_max: u32,
    /// Allowed ADC clock range (Hz)
    pub clk_min: u32,
    pub clk_max: u32,
    /// Interrupt lines per core
    pub int_lines: u8,
    /// Offset trim written before self-calibration
    pub offset_trim: u16,
}

/// CAN bit-timing limits (inclusive ranges)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CanLimits {
    /// Time quanta per bit
    pub nq: (u16, u16),
    pub brp: (u16, u16),
    pub tseg1: (u16, u16),
    pub tseg2: (u16, u16),
    pub sjw: (u16, u16),
    /// Highest accepted sample point (%)
    pub max_sample_point: u16,
}

/// Contiguous erasable flash region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FlashSector {
    /// First word address
    pub address: u32,
    /// Length in words
    pub length: u32,
}

/// Build `N` equal sectors starting at `base`
pub const fn sectors<const N: usize>(base: u32, length: u32) -> [FlashSector; N] {
    let mut map = [FlashSector { address: 0, length: 0 }; N];
    let mut i = 0;
    while i < N {
        map[i] = FlashSector {
            address: base + (i as u32) * length,
            length,
        };
        i += 1;
    }
    map
}

/// Pins the HAL connects during boot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HalPins {
    /// Index of the primary CAN module (0 = CAN-A)
    pub can_id: u8,
    pub can_tx: PinCode,
    pub can_rx: PinCode,
    pub i2c_sda: PinCode,
    pub i2c_scl: PinCode,
    /// Default MCU LED
    pub led: PinCode,
}

/// Package-dependent disabled pin lists
pub type DisabledLists = Vec<&'static [u16], 4>;

/// Per-silicon constants and tables
pub trait Silicon: 'static {
    const NAME: &'static str;
    const FAMILY: Family;

    /// Number of digital pins (GPIO0 .. GPIO<n-1>)
    const NUM_DIO: u16;
    /// Number of analog-only pins
    const NUM_AN: u16;
    /// Pin number of the first analog-only pin
    const AN0: u16;

    /// Target CPU clock (Hz)
    const CPU_HZ: u32;
    /// Crystal frequencies the board may carry (Hz)
    const XTAL_HZ: &'static [u32];
    const FLASH_WAIT: WaitStates;

    /// GPIO ports whose configuration lock is released at reset
    const UNLOCK_PORTS: &'static [u8];
    /// Control registers zeroed at reset (word offsets)
    const CTRL_REGS: &'static [u16];
    /// Registers written with their documented reset value
    const RESET_DEFAULTS: &'static [(u16, u32)];
    /// Pins reserved for JTAG or the crystal
    const FORCED_DISABLED: &'static [PinCode];
    /// Every legal pin code
    const PINS: &'static [PinCode];

    const ADC: AdcTraits;
    const HAS_ECAP: bool;
    const HAS_SDFM: bool;
    const HAS_PGA: bool;
    const HAS_WCH: bool;
    const HAS_FSI: bool;

    /// Number of CAN modules
    const CAN_MODULES: u8;
    /// CAN module clock divider from SYSCLK
    const CAN_CLK_DIV: u32;
    const CAN_LIMITS: CanLimits;

    const FLASH_SECTORS: &'static [FlashSector];
    /// Flash address of the module information block
    const MODULE_INFO: u32;

    const HAL_PINS: HalPins;

    /// True for pins with an analog function
    fn is_analog(pin: u16) -> bool;

    /// Disabled pin lists for a package
    ///
    /// # Arguments
    /// * `pin_count` - Package pin count from identity
    /// * `q100` - Automotive Q100 rated part
    fn disabled_lists(pin_count: u16, q100: bool) -> DisabledLists;

    /// Registry slot for a pin number
    ///
    /// Analog-only pins are packed right after the digital ones.
    fn index(pin: u16) -> Option<usize> {
        if pin < Self::NUM_DIO {
            Some(pin as usize)
        } else if pin >= Self::AN0 && pin < Self::AN0 + Self::NUM_AN {
            Some((pin - Self::AN0 + Self::NUM_DIO) as usize)
        } else {
            None
        }
    }

    /// Pin number stored in a registry slot
    fn pin_at(index: usize) -> u16 {
        let i = index as u16;
        if i < Self::NUM_DIO {
            i
        } else {
            i - Self::NUM_DIO + Self::AN0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_tables<S: Silicon>() {
        // Every disabled pin addresses a registry slot
        for count in [56, 64, 80, 100, 169, 176, 256] {
            for list in S::disabled_lists(count, true) {
                for &pin in list {
                    assert!(S::index(pin).is_some(), "{} pin {}", S::NAME, pin);
                }
            }
        }
        for code in S::PINS {
            assert!(S::index(code.pin()).is_some(), "{} {:?}", S::NAME, code);
        }
        for code in S::FORCED_DISABLED {
            assert!(S::index(code.pin()).is_some());
        }
        let slots = (S::NUM_DIO + S::NUM_AN) as usize;
        for i in 0..slots {
            assert_eq!(S::index(S::pin_at(i)), Some(i));
        }
    }

    #[test]
    fn test_tables_consistent() {
        check_tables::<F2803x>();
        check_tables::<F28004x>();
        check_tables::<F28p65x>();
    }

    #[test]
    fn test_sectors_builder() {
        let map: [FlashSector; 3] = sectors(0x1000, 0x100);
        assert_eq!(map[2].address, 0x1200);
        assert_eq!(map[2].length, 0x100);
    }

    #[test]
    fn test_hal_pins_use_expected_functions() {
        use crate::io::PinFun;
        fn check<S: Silicon>() {
            let p = S::HAL_PINS;
            assert_eq!(p.led.fun(), PinFun::DOUT);
            assert_eq!(p.i2c_sda.fun(), PinFun::I2CA_SDA);
            assert_eq!(p.i2c_scl.fun(), PinFun::I2CA_SCL);
            assert!(p.can_id < S::CAN_MODULES);
        }
        check::<F2803x>();
        check::<F28004x>();
        check::<F28p65x>();
    }
}

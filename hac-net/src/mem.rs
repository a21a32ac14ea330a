//! Memory layouts for module information storage
//!
//! A [`Mem`] describes where an external EEPROM, or the flash sector that
//! stands in for one, accepts reads and writes. Addresses are in the unit of
//! the backing store: bytes for an EEPROM, words for flash.

use hac_core::silicon::Silicon;

/// Contiguous address range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Block {
    pub address: u32,
    pub length: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Access {
    Read,
    Write,
}

/// Words reserved for module information in flash
///
/// Two serial words, two key words and fifteen 64-word pages. Flash writes
/// are aligned to four words.
pub const FLASH_INFO_WORDS: u32 = 964;

/// Storage layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Mem {
    /// Readable block
    pub rd: Block,
    /// Writable block
    pub wr: Block,
    /// Address of the 32-bit serial number
    pub serial: u32,
    /// Write page size, 0 for no page limit
    pub page: u16,
    /// Write cycle after a page write (µs)
    pub wait_us: u32,
    /// 8-bit bus address with the R/W bit clear
    pub address: u16,
    /// Bus speed (bps)
    pub bitrate: u32,
    /// Flash sector holding the layout, if flash backed
    pub sector: Option<u16>,
}

/// Microchip 24AA256UID
pub const EEPROM_24AA256UID: Mem = Mem {
    rd: Block {
        address: 0x0000,
        length: 0x8000,
    },
    wr: Block {
        address: 0x0000,
        length: 0x7000,
    },
    serial: 0x7FFC,
    page: 64,
    wait_us: 6000,
    address: 0x00A0,
    bitrate: 200_000,
    sector: None,
};

impl Mem {
    /// Module information kept in the flash sector at `S::MODULE_INFO`
    ///
    /// The serial number sits at the sector start and data follows four
    /// words later.
    pub const fn flash<S: Silicon>() -> Self {
        let data = Block {
            address: S::MODULE_INFO + 4,
            length: FLASH_INFO_WORDS,
        };
        Self {
            rd: data,
            wr: data,
            serial: S::MODULE_INFO,
            page: 64,
            wait_us: 0,
            address: 0,
            bitrate: 0,
            sector: Some(4),
        }
    }

    /// 7-bit slave address
    pub const fn bus_address(&self) -> u16 {
        self.address >> 1
    }

    /// True when `length` units from `address` may be accessed
    ///
    /// Writes must stay within one page. A four-unit write of the serial
    /// number is always accepted so blank parts can be numbered.
    pub fn check(&self, address: u32, length: u32, access: Access) -> bool {
        let block = match access {
            Access::Read => &self.rd,
            Access::Write => &self.wr,
        };
        if access == Access::Write && address == self.serial && length == 4 {
            return true;
        }
        if length == 0 || length > block.length || address < block.address {
            return false;
        }
        if address - block.address > block.length - length {
            return false;
        }
        if access == Access::Write && self.page > 0 {
            let page = u32::from(self.page);
            if address / page != (address + length - 1) / page {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hac_core::silicon::F28004x;
    use proptest::prelude::*;

    #[test]
    fn test_eeprom_blocks() {
        let mem = EEPROM_24AA256UID;
        assert_eq!(mem.bus_address(), 0x50);
        assert!(mem.check(0x0000, 64, Access::Write));
        assert!(mem.check(0x7FC0, 64, Access::Read));
        assert!(!mem.check(0x7FC0, 64, Access::Write));
        assert!(!mem.check(0x7FFF, 2, Access::Read));
        assert!(!mem.check(0x0000, 0, Access::Read));
        assert!(!mem.check(0x0000, 0x8001, Access::Read));
    }

    #[test]
    fn test_serial_write_bypasses_block() {
        let mem = EEPROM_24AA256UID;
        assert!(mem.check(0x7FFC, 4, Access::Write));
        assert!(!mem.check(0x7FFC, 3, Access::Write));
        assert!(mem.check(0x7FFC, 4, Access::Read));
    }

    #[test]
    fn test_writes_stay_in_one_page() {
        let mem = EEPROM_24AA256UID;
        assert!(mem.check(0x0030, 16, Access::Write));
        assert!(!mem.check(0x0030, 17, Access::Write));
        assert!(mem.check(0x0030, 17, Access::Read));
    }

    #[test]
    fn test_flash_layout() {
        let mem = Mem::flash::<F28004x>();
        assert_eq!(mem.serial, 0x084000);
        assert_eq!(mem.rd.address, 0x084004);
        assert_eq!(mem.sector, Some(4));
        assert!(mem.check(0x084004, 60, Access::Write));
        assert!(!mem.check(0x084000, 8, Access::Read));
    }

    proptest! {
        #[test]
        fn prop_accepted_reads_stay_in_block(address in 0u32..0x9000, length in 0u32..0x9000) {
            let mem = EEPROM_24AA256UID;
            if mem.check(address, length, Access::Read) {
                prop_assert!(length > 0);
                prop_assert!(address + length <= mem.rd.address + mem.rd.length);
            }
        }
    }
}

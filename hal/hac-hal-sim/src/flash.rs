//! Simulated on-chip flash
//!
//! Sparse word array, erased state 0xFFFF. Programming can only clear
//! bits, as on NOR flash.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use hac_hal::flash::FlashError;
use hac_hal::FlashPort;

const ERASED: u16 = 0xFFFF;

#[derive(Debug)]
pub struct SimFlash {
    start: u32,
    end: u32,
    words: RefCell<BTreeMap<u32, u16>>,
    erases: Cell<u32>,
}

impl SimFlash {
    /// Flash occupying word addresses `start..end`
    pub fn new(start: u32, end: u32) -> Self {
        Self {
            start,
            end,
            words: RefCell::new(BTreeMap::new()),
            erases: Cell::new(0),
        }
    }

    pub fn word(&self, address: u32) -> u16 {
        self.words
            .borrow()
            .get(&address)
            .copied()
            .unwrap_or(ERASED)
    }

    pub fn erase_count(&self) -> u32 {
        self.erases.get()
    }

    fn check(&self, address: u32, len: usize) -> Result<(), FlashError> {
        let end = u64::from(address) + len as u64;
        if address < self.start || end > u64::from(self.end) {
            return Err(FlashError::Address);
        }
        Ok(())
    }
}

impl FlashPort for SimFlash {
    fn read(&self, address: u32, data: &mut [u16]) -> Result<(), FlashError> {
        self.check(address, data.len())?;
        for (i, w) in data.iter_mut().enumerate() {
            *w = self.word(address + i as u32);
        }
        Ok(())
    }

    fn program(&self, address: u32, data: &[u16]) -> Result<(), FlashError> {
        self.check(address, data.len())?;
        let mut words = self.words.borrow_mut();
        for (i, w) in data.iter().enumerate() {
            let a = address + i as u32;
            let old = words.get(&a).copied().unwrap_or(ERASED);
            if old & *w != *w {
                return Err(FlashError::Verify);
            }
            words.insert(a, *w);
        }
        Ok(())
    }

    fn erase(&self, address: u32, length: u32) -> Result<(), FlashError> {
        self.check(address, length as usize)?;
        self.erases.set(self.erases.get() + 1);
        self.words
            .borrow_mut()
            .retain(|a, _| *a < address || *a >= address + length);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_cannot_set_bits() {
        let flash = SimFlash::new(0x1000, 0x2000);
        flash.program(0x1000, &[0x00FF]).unwrap();
        assert_eq!(flash.program(0x1000, &[0x0F0F]), Err(FlashError::Verify));
        flash.erase(0x1000, 0x100).unwrap();
        flash.program(0x1000, &[0x0F0F]).unwrap();
        assert_eq!(flash.word(0x1000), 0x0F0F);
    }

    #[test]
    fn test_out_of_range() {
        let flash = SimFlash::new(0x1000, 0x2000);
        let mut buf = [0u16; 4];
        assert_eq!(flash.read(0x1FFE, &mut buf), Err(FlashError::Address));
    }
}

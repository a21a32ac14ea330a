//! Simulated identity words

use std::cell::Cell;

use hac_hal::id::IdWords;
use hac_hal::IdSource;

/// F280049, 100-pin, TMS rev B with a unique identifier
pub const F280049_100PIN: IdWords = IdWords {
    partid_low: (2 << 6) | (5 << 8) | (6 << 16),
    partid_high: 0xFF << 16,
    revid: 2,
    uid: 0x0BA5_E001,
    dc: 0x000F,
};

#[derive(Debug)]
pub struct SimId {
    words: Cell<IdWords>,
}

impl SimId {
    pub fn new(words: IdWords) -> Self {
        Self {
            words: Cell::new(words),
        }
    }

    pub fn set(&self, words: IdWords) {
        self.words.set(words);
    }
}

impl Default for SimId {
    fn default() -> Self {
        Self::new(F280049_100PIN)
    }
}

impl IdSource for SimId {
    fn read(&self) -> IdWords {
        self.words.get()
    }
}

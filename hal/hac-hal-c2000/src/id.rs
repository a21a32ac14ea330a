//! Identification registers

use hac_hal::id::{IdSource, IdWords};

use crate::reg::Reg;

/// Word addresses of the identity locations
#[derive(Debug, Clone, Copy)]
pub struct IdMap {
    pub partid_low: usize,
    pub partid_high: usize,
    pub revid: usize,
    pub uid: usize,
    pub dc: usize,
}

/// F28004x: DevCfgRegs PARTIDL/PARTIDH/REVID, UID_UNIQUE in OTP, DC21
pub const ID_F28004X: IdMap = IdMap {
    partid_low: 0x5D008,
    partid_high: 0x5D00A,
    revid: 0x5D00C,
    uid: 0x703CC,
    dc: 0x5D05A,
};

pub struct C2000Id {
    map: IdMap,
}

impl C2000Id {
    /// # Safety
    /// Every address in `map` must be a readable 32-bit location.
    pub const unsafe fn new(map: IdMap) -> Self {
        Self { map }
    }

    fn word(addr: usize) -> u32 {
        // SAFETY: address validity is the constructor's contract
        unsafe { Reg::<u32>::at(addr) }.read()
    }
}

impl IdSource for C2000Id {
    fn read(&self) -> IdWords {
        IdWords {
            partid_low: Self::word(self.map.partid_low),
            partid_high: Self::word(self.map.partid_high),
            revid: Self::word(self.map.revid),
            uid: Self::word(self.map.uid),
            dc: Self::word(self.map.dc),
        }
    }
}

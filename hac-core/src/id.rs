//! Silicon identity
//!
//! Decodes the part identification words into an immutable [`Identity`].
//! Pin count and the Q100 flag gate pin availability in the registry.

use hac_hal::id::IdWords;

use crate::error::Error;
use crate::silicon::{Family, Silicon};

/// Silicon revision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Revision {
    Rev0,
    RevA,
    RevB,
    Other(u16),
}

impl From<u16> for Revision {
    fn from(raw: u16) -> Self {
        match raw {
            0 => Revision::Rev0,
            1 => Revision::RevA,
            2 => Revision::RevB,
            other => Revision::Other(other),
        }
    }
}

/// Device qualification status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Qualification {
    /// Engineering sample
    Tmx,
    /// Pilot production
    Tmp,
    /// Fully qualified
    Tms,
    Unknown,
}

/// Flash size code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlashSize {
    None,
    K128,
    K256,
    Other(u8),
}

impl From<u8> for FlashSize {
    fn from(raw: u8) -> Self {
        match raw {
            0 => FlashSize::None,
            5 => FlashSize::K128,
            6 => FlashSize::K256,
            other => FlashSize::Other(other),
        }
    }
}

/// Part numbers of the reference devices
pub mod part {
    pub const F28035: u16 = 0xBF;
    pub const F280041: u16 = 0xF7;
    pub const F280049: u16 = 0xFF;
    pub const F28P650DK6: u16 = 0xFB;
}

/// Decoded identity record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Identity {
    /// Part number
    pub part: u16,
    pub rev: Revision,
    pub qual: Qualification,
    /// Automotive Q100 rated package
    pub q100: bool,
    /// Package pin count
    pub pin_count: u16,
    pub flash: FlashSize,
    /// Device unique identifier, 0 when the part has none
    pub uid: u32,
    /// Configurable logic block present
    pub clb: bool,
}

const F2803X_COUNT: [u16; 4] = [0, 56, 64, 80];
const F28004X_COUNT: [u16; 8] = [56, 64, 64, 0, 0, 100, 0, 0];
const F28P65X_COUNT: [u16; 8] = [100, 176, 169, 256, 0, 0, 0, 0];

impl Identity {
    /// Decode the identification words of silicon `S`
    ///
    /// Fails with [`Error::Hardware`] on a pin-count code the silicon does
    /// not define.
    pub fn decode<S: Silicon>(w: &IdWords) -> Result<Self, Error> {
        let id = match S::FAMILY {
            Family::F2803x => {
                let code = (w.partid_high & 0x3) as usize;
                Identity {
                    part: (w.partid_low & 0xFF) as u16,
                    rev: Revision::from((w.partid_low >> 16) as u16),
                    qual: Qualification::Unknown,
                    q100: false,
                    pin_count: F2803X_COUNT[code],
                    flash: FlashSize::K128,
                    uid: 0,
                    clb: false,
                }
            }
            Family::F28004x | Family::F28p65x => {
                let code = ((w.partid_low >> 8) & 0x7) as usize;
                let qual = match (w.partid_low >> 6) & 0x3 {
                    0 => Qualification::Tmx,
                    1 => Qualification::Tmp,
                    2 => Qualification::Tms,
                    _ => Qualification::Unknown,
                };
                let rev = Revision::from((w.revid & 0xFFFF) as u16);
                let mut id = Identity {
                    part: ((w.partid_high >> 16) & 0xFF) as u16,
                    rev,
                    qual,
                    q100: false,
                    pin_count: 0,
                    flash: FlashSize::from(((w.partid_low >> 16) & 0xFF) as u8),
                    uid: 0,
                    clb: false,
                };
                if S::FAMILY == Family::F28004x {
                    id.pin_count = F28004X_COUNT[code];
                    id.q100 = code == 1;
                    // Only TMS rev B parts carry a per-device UID
                    if qual == Qualification::Tms && rev == Revision::RevB {
                        id.uid = w.uid;
                    }
                    id.clb = (w.dc & 0xF) == 0xF;
                } else {
                    id.pin_count = F28P65X_COUNT[code];
                    id.uid = w.uid;
                    id.clb = true;
                }
                id
            }
        };

        if id.pin_count == 0 {
            error!("Unknown pin count code");
            return Err(Error::Hardware);
        }
        Ok(id)
    }

    /// Identity used for simulated runs
    pub fn virtual_for<S: Silicon>() -> Self {
        let (part, rev) = match S::FAMILY {
            Family::F2803x => (part::F28035, Revision::RevA),
            Family::F28004x => (part::F280041, Revision::RevB),
            Family::F28p65x => (part::F28P650DK6, Revision::RevA),
        };
        Identity {
            part,
            rev,
            qual: Qualification::Unknown,
            q100: false,
            pin_count: 64,
            flash: FlashSize::K128,
            uid: 0,
            clb: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::silicon::{F2803x, F28004x, F28p65x};

    #[test]
    fn test_f28004x_tms_rev_b_reads_uid() {
        let w = IdWords {
            // qual TMS, count code 1 (64 pin Q100), size 5
            partid_low: (2 << 6) | (1 << 8) | (5 << 16),
            partid_high: (part::F280049 as u32) << 16,
            revid: 2,
            uid: 0x1234_5678,
            dc: 0x000F,
        };
        let id = Identity::decode::<F28004x>(&w).unwrap();
        assert_eq!(id.part, part::F280049);
        assert_eq!(id.pin_count, 64);
        assert!(id.q100);
        assert_eq!(id.flash, FlashSize::K128);
        assert_eq!(id.uid, 0x1234_5678);
        assert!(id.clb);
    }

    #[test]
    fn test_f28004x_rev_a_has_no_uid() {
        let w = IdWords {
            partid_low: (2 << 6) | (5 << 8) | (6 << 16),
            partid_high: 0,
            revid: 1,
            uid: 0xDEAD_BEEF,
            dc: 0,
        };
        let id = Identity::decode::<F28004x>(&w).unwrap();
        assert_eq!(id.pin_count, 100);
        assert!(!id.q100);
        assert_eq!(id.flash, FlashSize::K256);
        assert_eq!(id.uid, 0);
        assert!(!id.clb);
    }

    #[test]
    fn test_f2803x_count_from_part_word() {
        let w = IdWords {
            partid_low: (1 << 16) | part::F28035 as u32,
            partid_high: 2,
            ..Default::default()
        };
        let id = Identity::decode::<F2803x>(&w).unwrap();
        assert_eq!(id.part, part::F28035);
        assert_eq!(id.rev, Revision::RevA);
        assert_eq!(id.pin_count, 64);
        assert_eq!(id.flash, FlashSize::K128);
    }

    #[test]
    fn test_undefined_count_code_fails() {
        let w = IdWords {
            partid_low: 3 << 8,
            ..Default::default()
        };
        assert_eq!(Identity::decode::<F28004x>(&w), Err(Error::Hardware));
        let w = IdWords::default();
        assert_eq!(Identity::decode::<F2803x>(&w), Err(Error::Hardware));
    }

    #[test]
    fn test_f28p65x_always_has_uid_and_clb() {
        let w = IdWords {
            partid_low: 1 << 8,
            uid: 42,
            ..Default::default()
        };
        let id = Identity::decode::<F28p65x>(&w).unwrap();
        assert_eq!(id.pin_count, 176);
        assert_eq!(id.uid, 42);
        assert!(id.clb);
    }

    #[test]
    fn test_virtual_identity() {
        let id = Identity::virtual_for::<F28004x>();
        assert_eq!(id.pin_count, 64);
        assert_eq!(id.flash, FlashSize::K128);
        assert_eq!(id.part, part::F280041);
    }
}

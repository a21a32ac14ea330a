//! On-chip flash transport
//!
//! Blocks are addressed in 16-bit words and may span sectors as long as the
//! sectors they touch are contiguous. Programming only clears bits; erase a
//! sector before writing it again.

use core::marker::PhantomData;

use hac_core::silicon::{FlashSector, Silicon};
use hac_core::{error, info, Error};
use hac_hal::flash::FlashError;
use hac_hal::FlashPort;

use crate::net::{Kind, Link, Net, State};

/// Block of words at a flash address
#[derive(Debug, PartialEq, Eq)]
pub struct FlashBlock<'f> {
    pub address: u32,
    pub data: &'f mut [u16],
}

/// True when `length` words from `address` lie in `map` without crossing a
/// gap between sectors
///
/// The map may list sectors in either address order. A map whose sectors
/// overlap or are out of order rejects every access.
pub fn in_map(map: &[FlashSector], address: u32, length: u32) -> bool {
    if map.is_empty() || length == 0 {
        return false;
    }
    let increasing = map[0].address <= map[map.len() - 1].address;
    let sector = |i: usize| {
        if increasing {
            map[i]
        } else {
            map[map.len() - 1 - i]
        }
    };

    let mut end: Option<u32> = None;
    for s in (0..map.len()).map(sector).filter(|s| s.length != 0) {
        if end.is_some_and(|e| s.address <= e) {
            return false;
        }
        end = Some(s.address + (s.length - 1));
    }

    let (mut address, mut length) = (address, length);
    let mut found = false;
    for s in (0..map.len()).map(sector).filter(|s| s.length != 0) {
        let last = s.address + (s.length - 1);
        if (s.address..=last).contains(&address) {
            found = true;
            let residual = last - address + 1;
            if length <= residual {
                return true;
            }
            address += residual;
            length -= residual;
        } else if found {
            return false;
        }
    }
    false
}

fn map_err(e: FlashError) -> Error {
    match e {
        FlashError::Verify => Error::Hardware,
        FlashError::Address => Error::Range,
    }
}

/// Flash transport for silicon `S`
pub struct Flash<'p, S: Silicon, P: FlashPort> {
    port: &'p P,
    link: Link<0>,
    _silicon: PhantomData<S>,
}

impl<'p, S: Silicon, P: FlashPort> Flash<'p, S, P> {
    pub fn new(port: &'p P) -> Self {
        Self {
            port,
            link: Link::new(Kind::Flash),
            _silicon: PhantomData,
        }
    }

    pub fn sectors(&self) -> &'static [FlashSector] {
        S::FLASH_SECTORS
    }

    /// Erase sector `index` of the sector map
    pub fn erase(&mut self, index: usize) -> Result<(), Error> {
        self.link.ensure_open()?;
        let sector = S::FLASH_SECTORS.get(index).ok_or(Error::Range)?;
        self.port
            .erase(sector.address, sector.length)
            .map_err(|e| {
                error!("Flash sector {} erase failed: {}", index, e);
                map_err(e)
            })
    }

    fn check(&self, block: &FlashBlock<'_>) -> Result<(), Error> {
        match u32::try_from(block.data.len()) {
            Ok(len) if in_map(S::FLASH_SECTORS, block.address, len) => Ok(()),
            _ => Err(Error::Range),
        }
    }
}

impl<S: Silicon, P: FlashPort> Net for Flash<'_, S, P> {
    const KIND: Kind = Kind::Flash;
    type Config = ();
    type Frame<'f> = FlashBlock<'f>;

    fn state(&self) -> State {
        self.link.state()
    }

    fn open(&mut self, _config: &()) -> Result<(), Error> {
        self.link.begin_open()?;
        self.link.set_open();
        info!("Flash open, {} sectors", S::FLASH_SECTORS.len());
        Ok(())
    }

    fn close(&mut self) -> Result<(), Error> {
        self.link.close().map(|_| ())
    }

    fn read(&mut self, blocks: &mut [FlashBlock<'_>]) -> Result<usize, Error> {
        self.link.ensure_open()?;
        for block in blocks.iter_mut() {
            self.check(block)?;
            self.port.read(block.address, block.data).map_err(map_err)?;
        }
        Ok(blocks.len())
    }

    fn write(&mut self, blocks: &mut [FlashBlock<'_>]) -> Result<usize, Error> {
        self.link.ensure_open()?;
        for block in blocks.iter() {
            self.check(block)?;
        }
        for (i, block) in blocks.iter().enumerate() {
            if let Err(e) = self.port.program(block.address, block.data) {
                error!("Flash program at {:x} failed: {}", block.address, e);
                return match e {
                    FlashError::Verify => Ok(i),
                    FlashError::Address => Err(Error::Range),
                };
            }
        }
        Ok(blocks.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hac_core::silicon::F28004x;
    use hac_hal::Platform;
    use hac_hal_sim::SimPlatform;
    use proptest::prelude::*;

    const MAP: [FlashSector; 3] = [
        FlashSector {
            address: 0x1000,
            length: 0x100,
        },
        FlashSector {
            address: 0x1100,
            length: 0x100,
        },
        FlashSector {
            address: 0x1400,
            length: 0x100,
        },
    ];

    #[test]
    fn test_map_spans_contiguous_sectors_only() {
        assert!(in_map(&MAP, 0x1000, 1));
        assert!(in_map(&MAP, 0x10F0, 0x20));
        assert!(in_map(&MAP, 0x1000, 0x200));
        assert!(!in_map(&MAP, 0x1000, 0x201));
        assert!(!in_map(&MAP, 0x11F0, 0x20));
        assert!(!in_map(&MAP, 0x0FFF, 2));
        assert!(!in_map(&MAP, 0x1200, 1));
        assert!(in_map(&MAP, 0x14FF, 1));
        assert!(!in_map(&MAP, 0x1000, 0));

        let mut reversed = MAP;
        reversed.reverse();
        assert!(in_map(&reversed, 0x10F0, 0x20));

        let overlapping = [MAP[0], MAP[0]];
        assert!(!in_map(&overlapping, 0x1000, 1));

        // A bad pair anywhere in the map poisons it
        let shuffled = [MAP[0], MAP[2], MAP[1], MAP[2]];
        assert!(!in_map(&shuffled, 0x1000, 1));
    }

    #[test]
    fn test_program_read_and_erase() {
        let p = SimPlatform::new();
        let mut flash = Flash::<F28004x, _>::new(p.flash());
        assert_eq!(flash.state(), State::Connected);
        assert_eq!(flash.erase(4), Err(Error::State));
        flash.open(&()).unwrap();

        let info = F28004x::MODULE_INFO;
        let mut words = [0x1234, 0x5678];
        let mut blocks = [FlashBlock {
            address: info,
            data: &mut words,
        }];
        assert_eq!(flash.write(&mut blocks), Ok(1));
        assert_eq!(p.sim_flash().word(info + 1), 0x5678);

        let mut back = [0; 3];
        let mut blocks = [FlashBlock {
            address: info,
            data: &mut back,
        }];
        assert_eq!(flash.read(&mut blocks), Ok(1));
        assert_eq!(back, [0x1234, 0x5678, 0xFFFF]);

        // Setting bits needs an erase first
        let mut ones = [0xFFFF];
        let mut blocks = [FlashBlock {
            address: info,
            data: &mut ones,
        }];
        assert_eq!(flash.write(&mut blocks), Ok(0));

        assert_eq!(flash.sectors()[4].address, info);
        flash.erase(4).unwrap();
        assert_eq!(p.sim_flash().word(info), 0xFFFF);
        assert_eq!(p.sim_flash().erase_count(), 1);
        assert_eq!(flash.erase(32), Err(Error::Range));

        let mut outside = [0; 1];
        let mut blocks = [FlashBlock {
            address: 0x0100,
            data: &mut outside,
        }];
        assert_eq!(flash.read(&mut blocks), Err(Error::Range));
        flash.close().unwrap();
        flash.open(&()).unwrap();
    }

    proptest! {
        #[test]
        fn prop_single_sector_access(offset in 0u32..0x1000, len in 1u32..=0x1000) {
            let sector = F28004x::FLASH_SECTORS[4];
            let fits = offset + len <= sector.length;
            prop_assert_eq!(in_map(&[sector], sector.address + offset, len), fits);
        }
    }
}

//! In-memory image transport
//!
//! Stands in for an external EEPROM on simulated runs. The image starts out
//! erased (all `0xFF`) and keeps its content across close and open.

use hac_core::Error;

use crate::net::{Kind, Link, Net, State};

/// Bytes at an image offset
#[derive(Debug, PartialEq, Eq)]
pub struct FileFrame<'f> {
    pub address: u32,
    pub data: &'f mut [u8],
}

/// `N`-byte image
pub struct MemFile<const N: usize> {
    image: [u8; N],
    link: Link<0>,
}

impl<const N: usize> MemFile<N> {
    pub const fn new() -> Self {
        Self::from_image([0xFF; N])
    }

    pub const fn from_image(image: [u8; N]) -> Self {
        Self {
            image,
            link: Link::new(Kind::File),
        }
    }

    pub fn image(&self) -> &[u8; N] {
        &self.image
    }

    fn span(&self, address: u32, len: usize) -> Result<core::ops::Range<usize>, Error> {
        let start = usize::try_from(address).map_err(|_| Error::Range)?;
        match start.checked_add(len) {
            Some(end) if end <= N => Ok(start..end),
            _ => Err(Error::Range),
        }
    }
}

impl<const N: usize> Default for MemFile<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Net for MemFile<N> {
    const KIND: Kind = Kind::File;
    type Config = ();
    type Frame<'f> = FileFrame<'f>;

    fn state(&self) -> State {
        self.link.state()
    }

    fn open(&mut self, _config: &()) -> Result<(), Error> {
        self.link.begin_open()?;
        self.link.set_open();
        Ok(())
    }

    fn close(&mut self) -> Result<(), Error> {
        self.link.close().map(|_| ())
    }

    fn read(&mut self, frames: &mut [FileFrame<'_>]) -> Result<usize, Error> {
        self.link.ensure_open()?;
        for frame in frames.iter_mut() {
            let span = self.span(frame.address, frame.data.len())?;
            frame.data.copy_from_slice(&self.image[span]);
        }
        Ok(frames.len())
    }

    fn write(&mut self, frames: &mut [FileFrame<'_>]) -> Result<usize, Error> {
        self.link.ensure_open()?;
        for frame in frames.iter() {
            let span = self.span(frame.address, frame.data.len())?;
            self.image[span].copy_from_slice(&*frame.data);
        }
        Ok(frames.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_persists_across_reopen() {
        let mut file = MemFile::<16>::new();
        assert_eq!(file.state(), State::Connected);

        let mut data = [1, 2, 3];
        assert_eq!(
            file.write(&mut [FileFrame {
                address: 0,
                data: &mut data
            }]),
            Err(Error::State)
        );
        file.open(&()).unwrap();
        assert_eq!(file.open(&()), Err(Error::Busy));
        assert_eq!(
            file.write(&mut [FileFrame {
                address: 14,
                data: &mut data[..2]
            }]),
            Ok(1)
        );
        file.close().unwrap();
        file.open(&()).unwrap();

        let mut back = [0; 4];
        assert_eq!(
            file.read(&mut [FileFrame {
                address: 12,
                data: &mut back
            }]),
            Ok(1)
        );
        assert_eq!(back, [0xFF, 0xFF, 1, 2]);
    }

    #[test]
    fn test_out_of_image_is_range() {
        let mut file = MemFile::<16>::new();
        file.open(&()).unwrap();
        let mut data = [0; 4];
        assert_eq!(
            file.read(&mut [FileFrame {
                address: 13,
                data: &mut data
            }]),
            Err(Error::Range)
        );
        assert_eq!(file.image(), &[0xFF; 16]);
    }
}

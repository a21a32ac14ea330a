//! Board support
//!
//! - [`Generic`]: any board, no interlock or interrupt paths
//! - [`bp25`]: bidirectional PFC/AFE converter on F28004x

pub mod bp25;

use hac_core::config::BoardInfo;
use hac_core::silicon::Silicon;
use hac_core::Error;
use hac_hal::pie::Vector;
use hac_hal::Platform;

use crate::hapi::{Board, InterlockMap, Io, Path};

pub use bp25::Bp25;

/// Board without a HAPI
///
/// Gives a [`crate::Hal`] with the MCU LED and the shared transports
/// only; interrupts cannot be enabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Generic;

impl<S: Silicon, P: Platform> Board<S, P> for Generic {
    fn resolve(_info: &BoardInfo) -> Result<Self, Error> {
        Ok(Self)
    }

    fn interlock(&self) -> InterlockMap {
        InterlockMap::NONE
    }

    fn vector(&self, _path: Path) -> Option<Vector> {
        None
    }

    fn setup(&mut self, _io: &mut Io<'_, '_, S, P>) -> Result<(), Error> {
        Ok(())
    }

    fn isr_clear(&self, _platform: &P, _path: Path) -> Result<(), Error> {
        Err(Error::Unavailable)
    }
}

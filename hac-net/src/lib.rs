//! Bus transports for the hardware abstraction core
//!
//! Every transport implements [`Net`]: connect its pins through the pin
//! registry, `open` with a transport-specific configuration, then move
//! frames with `read`/`write`. The frame type is the transport's own: CAN
//! messages, addressed I2C frames, SPI words, FSI data frames, flash word
//! blocks, or byte blocks for the module-information memory.
//!
//! ```text
//!   PinMux ──connect──► Link ──open──► Can / I2c / Spi / Fsi / Flash
//!                                         │
//!                                 Eeprom<I2c | Flash | MemFile>
//! ```

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod can;
pub mod eeprom;
pub mod file;
pub mod flash;
pub mod fsi;
pub mod i2c;
pub mod mem;
pub mod net;
pub mod spi;

pub use can::{Can, CanConfig, CanFrame, TxStatus};
pub use eeprom::{Backend, Eeprom, EepromFrame};
pub use file::{FileFrame, MemFile};
pub use flash::{Flash, FlashBlock};
pub use fsi::{Fsi, FsiConfig, FsiFrame, Phase, Role};
pub use i2c::{I2c, I2cConfig, I2cFrame};
pub use mem::{Mem, EEPROM_24AA256UID};
pub use net::{Kind, Link, Net, State, Sys};
pub use spi::{Spi, SpiConfig};

//! Silicon model and pin registry for C2000-class controllers
//!
//! This crate holds everything below the drivers that does not touch a
//! register directly:
//!
//! ```text
//!   identity words ──► id::Identity ──┐
//!                                     ▼
//!   silicon::Silicon ──────────► io::PinRegistry ──► GpioPort (hac-hal)
//!   (pin counts, tables,              │
//!    reset defaults)                  ▼
//!                               connect / disconnect / status
//! ```
//!
//! - Error kinds shared by every layer ([`Error`])
//! - Pin configuration codes and their decode ([`io::PinCode`])
//! - Per-silicon constants, pin tables and disabled-pin lists ([`silicon`])
//! - The process-wide pin registry ([`io::PinRegistry`])
//! - Identity decode ([`id`])
//! - Run-time HAL configuration ([`config`])

#![no_std]
#![deny(unsafe_code)]

#[cfg(any(test, feature = "std"))]
extern crate std;

#[macro_use]
mod fmt;

pub mod config;
pub mod error;
pub mod id;
pub mod io;
pub mod silicon;

pub use error::{ConnectError, Error};
pub use io::{PinCode, PinFun, PinGroup};

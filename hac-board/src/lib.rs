//! HAL composition and board dispatch
//!
//! [`Hal`] ties the pin registry, drivers and transports of one device
//! together. Board-specific bring-up goes through the [`Board`] trait
//! (the HAPI), which also carries the interlock lines and the interrupt
//! paths of the board.
//!
//! ```text
//!   Hal::init ──► clock, identity, pins, CAN/I2C/SPI/FSI/flash, timers
//!       │
//!   Hal::setup ──► MCU LED ──► Board::resolve ──► interlock ──► Board::setup
//!       │
//!   isr_register / isr_enable ──► isr_run (handler, clear, busy ticks)
//! ```
//!
//! The background loop drives a [`Scheduler`] from the HAL tick.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod boards;
pub mod hal;
pub mod hapi;
pub mod isr;
pub mod persist;
pub mod scheduler;

pub use boards::{Bp25, Generic};
pub use hal::{mcu_led, Hal};
pub use hapi::{Board, Interlock, InterlockMap, Io, Path};
pub use isr::{BusyMeter, Handler, IsrSlot};
pub use persist::PersistError;
pub use scheduler::{Scheduler, TaskId};

//! Register-level ports for C2000 digital signal controllers
//!
//! Implements the [`hac_hal`] port traits on top of memory-mapped
//! registers. Addresses are C28x word addresses: one address step is one
//! 16-bit word, so a 32-bit register spans two steps.
//!
//! | Module | Port |
//! |--------|------|
//! | [`reg`] | Volatile register and bit-field primitives |
//! | [`cpu`] | EALLOW/EDIS, EINT/DINT, IDLE, watchdog reset (`rt` only) |
//! | [`gpio`] | [`hac_hal::GpioPort`] for the Type-4 GPIO block |
//! | [`timer`] | [`hac_hal::CpuTimers`] |
//! | [`sysctl`] | [`hac_hal::SysCtl`]: PLL, clock gates, soft resets, flash wait |
//! | [`pie`] | [`hac_hal::Pie`] |
//! | [`adc`], [`pwm`] | [`hac_hal::AdcPort`], [`hac_hal::PwmPort`] |
//! | [`ecap`], [`sdfm`], [`pga`], [`cmpss`] | Capture, sigma-delta, gain and comparator ports |
//! | [`can`], [`i2c`], [`spi`], [`fsi`] | Communication controllers |
//! | [`flash`] | [`hac_hal::FlashPort`] over the vendor flash state machine |
//! | [`id`] | [`hac_hal::IdSource`] |
//! | [`platform`] | [`hac_hal::Platform`] bundle of the F28004x (`rt` only) |
//!
//! Every port is constructed from base addresses with an `unsafe`
//! constructor; the caller vouches that the addresses are the device's.
//! The `*_F28004X` constants hold the addresses of the reference part.
//! Instructions and vendor library calls without a register interface
//! (CPU intrinsics, cycle delays, flash program and erase) are reached
//! through the `hac_rt_*` symbols of the runtime shim linked under `rt`.

#![no_std]

pub mod adc;
pub mod can;
pub mod cmpss;
#[cfg(feature = "rt")]
pub mod cpu;
pub mod ecap;
pub mod flash;
pub mod fsi;
pub mod gpio;
pub mod i2c;
pub mod id;
pub mod pga;
pub mod pie;
#[cfg(feature = "rt")]
pub mod platform;
pub mod pwm;
pub mod reg;
pub mod sdfm;
pub mod spi;
pub mod sysctl;
pub mod timer;

pub use adc::C2000Adc;
pub use can::C2000Can;
pub use cmpss::C2000Cmpss;
#[cfg(feature = "rt")]
pub use cpu::C2000Cpu;
pub use ecap::C2000Ecap;
pub use flash::{C2000Flash, FlashApi};
pub use fsi::C2000Fsi;
pub use gpio::C2000Gpio;
pub use i2c::C2000I2c;
pub use id::C2000Id;
pub use pga::C2000Pga;
pub use pie::C2000Pie;
#[cfg(feature = "rt")]
pub use platform::C2000Platform;
pub use pwm::C2000Pwm;
pub use reg::{Field, Reg};
pub use sdfm::C2000Sdfm;
pub use spi::C2000Spi;
pub use sysctl::C2000SysCtl;
pub use timer::C2000Timers;

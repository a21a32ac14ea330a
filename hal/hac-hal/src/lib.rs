//! HAC Hardware Abstraction Layer
//!
//! This crate defines the peripheral port traits the rest of the core is
//! written against. A port is a thin, register-level view of one peripheral
//! block: it knows how to program bits, not which bits a product needs.
//! Policy (pin ownership, timeouts, lifecycle rules) lives above it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  hac-board (HAL composition, HAPI, ISR) │
//! └─────────────────────────────────────────┘
//!                     │
//! ┌─────────────────────────────────────────┐
//! │  hac-core / hac-drivers / hac-net       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  hac-hal (this crate - port traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ hac-hal-c2000 │       │  hac-hal-sim  │
//! │  (registers)  │       │ (host model)  │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! All port methods take `&self`. Register-backed ports write through
//! volatile pointers; the simulated ports use interior mutability. Writes to
//! protected configuration registers additionally require an [`Eallow`]
//! token, which can only be obtained from a [`Protect`] implementation and
//! releases the protection bracket when dropped.
//!
//! # Traits
//!
//! - [`Protect`], [`Cpu`] - Write-protection bracket and global interrupts
//! - [`gpio::GpioPort`] - Pin mux, pad, qualification and data registers
//! - [`timer::CpuTimers`] - The three 32-bit CPU timers
//! - [`sysctl::SysCtl`] - Flash wait states, PLL, peripheral clocks, delays
//! - [`pie::Pie`] - Peripheral interrupt expansion block
//! - [`adc::AdcPort`], [`pwm::PwmPort`] - Control-loop peripherals
//! - [`ecap::EcapPort`], [`sdfm::SdfmPort`], [`pga::PgaPort`], [`cmpss::CmpssPort`]
//! - [`can::CanPort`], [`i2c::I2cPort`], [`spi::SpiPort`], [`fsi::FsiPort`]
//! - [`flash::FlashPort`] - On-chip flash program/erase
//! - [`id::IdSource`] - Silicon identity words
//! - [`Platform`] - One value giving access to every port of a device

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod can;
pub mod cmpss;
pub mod ecap;
pub mod flash;
pub mod fsi;
pub mod gpio;
pub mod i2c;
pub mod id;
pub mod pga;
pub mod pie;
pub mod platform;
pub mod protect;
pub mod pwm;
pub mod sdfm;
pub mod spi;
pub mod sysctl;
pub mod timer;

// Re-export key traits at crate root for convenience
pub use adc::AdcPort;
pub use can::CanPort;
pub use cmpss::CmpssPort;
pub use ecap::EcapPort;
pub use flash::FlashPort;
pub use fsi::FsiPort;
pub use gpio::GpioPort;
pub use i2c::I2cPort;
pub use id::IdSource;
pub use pga::PgaPort;
pub use pie::Pie;
pub use platform::Platform;
pub use protect::{Cpu, Eallow, Protect};
pub use pwm::PwmPort;
pub use sdfm::SdfmPort;
pub use spi::SpiPort;
pub use sysctl::SysCtl;
pub use timer::CpuTimers;

//! Clock, timer and control-peripheral drivers
//!
//! Each control driver follows the same shape: a channel descriptor type
//! declared by the board (usually as a `const` slice), an object that
//! borrows the slice and keeps the init masks, and a `setup` entrypoint
//! that programs every enabled channel once.
//!
//! ```text
//!   board consts ──► AdcChannel[] ──► Adc::setup ──► AdcPort (hac-hal)
//!                                        │
//!                         Clock ◄────────┤ (ADC clock, delays)
//!                     PinMux ◄───────────┘ (pin ownership)
//! ```
//!
//! - System clock bring-up and calibrated delays ([`clk`])
//! - CPU timer pool, stopwatch and 1 kHz tick ([`timer`])
//! - Interrupt vector enable and acknowledge ([`pie`])
//! - Digital I/O through the pin registry ([`dio`])
//! - ADC, PWM, eCAP, SDFM, PGA and window comparator drivers
//!
//! A failing `setup` leaves the channels configured before the failure as
//! they are. The caller is expected to trip the interlock.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod adc;
pub mod clk;
pub mod dio;
pub mod ecap;
pub mod pga;
pub mod pie;
pub mod pwm;
pub mod sdfm;
pub mod timer;
pub mod wch;

pub use clk::{Clock, Clocks};
pub use timer::{Stopwatch, Tick, TimerId, Timers};


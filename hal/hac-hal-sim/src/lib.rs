//! Simulated C2000 platform for host tests
//!
//! Every port of [`hac_hal`] has a host model here. The models share one
//! [`SimClock`] so that timers, delays and bus traffic all move the same
//! notion of time:
//!
//! ```text
//!             ┌──────────┐
//!             │ SimClock │◄──── delay_cycles, timer polls, I2C bit times
//!             └────┬─────┘
//!        ┌─────────┼──────────┬──────────┐
//!        ▼         ▼          ▼          ▼
//!   SimSysCtl  SimTimers   SimI2c ── Eeprom @ 0x50
//! ```
//!
//! The models are small. They reproduce the register
//! behavior the drivers depend on (flags, latches, FIFOs, acknowledge
//! timing) and expose helpers to inject faults and inspect what the
//! driver programmed.

pub mod adc;
pub mod analog;
pub mod can;
pub mod clock;
pub mod cpu;
pub mod flash;
pub mod fsi;
pub mod gpio;
pub mod i2c;
pub mod id;
pub mod pie;
pub mod pwm;
pub mod spi;

use std::rc::Rc;

use hac_hal::id::IdWords;
use hac_hal::Platform;

pub use adc::SimAdc;
pub use analog::{SimCmpss, SimEcap, SimPga, SimSdfm};
pub use can::SimCan;
pub use clock::{SimClock, SimSysCtl, SimTimers};
pub use cpu::SimCpu;
pub use flash::SimFlash;
pub use fsi::SimFsi;
pub use gpio::SimGpio;
pub use i2c::{Eeprom, SimI2c};
pub use id::SimId;
pub use pie::SimPie;
pub use pwm::SimPwm;
pub use spi::SimSpi;

/// Crystal fitted on the reference boards
pub const DEFAULT_XTAL_HZ: u32 = 20_000_000;

/// 7-bit address of the on-board configuration EEPROM
pub const EEPROM_ADDRESS: u16 = 0x50;

/// Flash window covering the sector maps of every supported part
const FLASH_START: u32 = 0x080000;
const FLASH_END: u32 = 0x400000;

/// A complete simulated device
#[derive(Debug)]
pub struct SimPlatform {
    clock: Rc<SimClock>,
    cpu: SimCpu,
    gpio: SimGpio,
    timers: SimTimers,
    sysctl: SimSysCtl,
    pie: SimPie,
    adc: SimAdc,
    pwm: SimPwm,
    ecap: SimEcap,
    sdfm: SimSdfm,
    pga: SimPga,
    cmpss: SimCmpss,
    can: SimCan,
    i2c: SimI2c,
    spi: SimSpi,
    fsi: SimFsi,
    flash: SimFlash,
    id: SimId,
}

impl Default for SimPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl SimPlatform {
    /// Device with a 20 MHz crystal and an empty EEPROM at 0x50
    pub fn new() -> Self {
        Self::with_xtal(DEFAULT_XTAL_HZ)
    }

    pub fn with_xtal(xtal_hz: u32) -> Self {
        let clock = SimClock::new(xtal_hz);
        let i2c = SimI2c::new(clock.clone());
        i2c.attach_eeprom(EEPROM_ADDRESS, Eeprom::new());
        Self {
            cpu: SimCpu::new(),
            gpio: SimGpio::new(),
            timers: SimTimers::new(clock.clone()),
            sysctl: SimSysCtl::new(clock.clone()),
            pie: SimPie::new(),
            adc: SimAdc::new(),
            pwm: SimPwm::new(),
            ecap: SimEcap::new(),
            sdfm: SimSdfm::new(),
            pga: SimPga::new(),
            cmpss: SimCmpss::new(),
            can: SimCan::new(),
            i2c,
            spi: SimSpi::new(),
            fsi: SimFsi::looped(),
            flash: SimFlash::new(FLASH_START, FLASH_END),
            id: SimId::default(),
            clock,
        }
    }

    pub fn with_id(self, words: IdWords) -> Self {
        self.id.set(words);
        self
    }

    /// Replace the FSI endpoint, e.g. one half of [`SimFsi::pair`]
    pub fn with_fsi(mut self, fsi: SimFsi) -> Self {
        self.fsi = fsi;
        self
    }

    pub fn clock(&self) -> &Rc<SimClock> {
        &self.clock
    }

    pub fn sim_cpu(&self) -> &SimCpu {
        &self.cpu
    }

    pub fn sim_gpio(&self) -> &SimGpio {
        &self.gpio
    }

    pub fn sim_timers(&self) -> &SimTimers {
        &self.timers
    }

    pub fn sim_sysctl(&self) -> &SimSysCtl {
        &self.sysctl
    }

    pub fn sim_pie(&self) -> &SimPie {
        &self.pie
    }

    pub fn sim_adc(&self) -> &SimAdc {
        &self.adc
    }

    pub fn sim_pwm(&self) -> &SimPwm {
        &self.pwm
    }

    pub fn sim_ecap(&self) -> &SimEcap {
        &self.ecap
    }

    pub fn sim_sdfm(&self) -> &SimSdfm {
        &self.sdfm
    }

    pub fn sim_pga(&self) -> &SimPga {
        &self.pga
    }

    pub fn sim_cmpss(&self) -> &SimCmpss {
        &self.cmpss
    }

    pub fn sim_can(&self) -> &SimCan {
        &self.can
    }

    pub fn sim_i2c(&self) -> &SimI2c {
        &self.i2c
    }

    pub fn sim_spi(&self) -> &SimSpi {
        &self.spi
    }

    pub fn sim_fsi(&self) -> &SimFsi {
        &self.fsi
    }

    pub fn sim_flash(&self) -> &SimFlash {
        &self.flash
    }

    pub fn sim_id(&self) -> &SimId {
        &self.id
    }
}

impl Platform for SimPlatform {
    type Cpu = SimCpu;
    type Gpio = SimGpio;
    type Timers = SimTimers;
    type SysCtl = SimSysCtl;
    type Pie = SimPie;
    type Adc = SimAdc;
    type Pwm = SimPwm;
    type Ecap = SimEcap;
    type Sdfm = SimSdfm;
    type Pga = SimPga;
    type Cmpss = SimCmpss;
    type Can = SimCan;
    type I2c = SimI2c;
    type Spi = SimSpi;
    type Fsi = SimFsi;
    type Flash = SimFlash;
    type Id = SimId;

    fn cpu(&self) -> &SimCpu {
        &self.cpu
    }

    fn gpio(&self) -> &SimGpio {
        &self.gpio
    }

    fn timers(&self) -> &SimTimers {
        &self.timers
    }

    fn sysctl(&self) -> &SimSysCtl {
        &self.sysctl
    }

    fn pie(&self) -> &SimPie {
        &self.pie
    }

    fn adc(&self) -> &SimAdc {
        &self.adc
    }

    fn pwm(&self) -> &SimPwm {
        &self.pwm
    }

    fn ecap(&self) -> &SimEcap {
        &self.ecap
    }

    fn sdfm(&self) -> &SimSdfm {
        &self.sdfm
    }

    fn pga(&self) -> &SimPga {
        &self.pga
    }

    fn cmpss(&self) -> &SimCmpss {
        &self.cmpss
    }

    fn can(&self) -> &SimCan {
        &self.can
    }

    fn i2c(&self) -> &SimI2c {
        &self.i2c
    }

    fn spi(&self) -> &SimSpi {
        &self.spi
    }

    fn fsi(&self) -> &SimFsi {
        &self.fsi
    }

    fn flash(&self) -> &SimFlash {
        &self.flash
    }

    fn id(&self) -> &SimId {
        &self.id
    }
}

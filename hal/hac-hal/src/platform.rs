//! Device platform
//!
//! A [`Platform`] bundles every port of one device. Drivers borrow the
//! ports they need from it; nothing in the core owns a port exclusively.

use crate::{
    AdcPort, CanPort, CmpssPort, Cpu, CpuTimers, EcapPort, FlashPort, FsiPort, GpioPort, I2cPort,
    IdSource, PgaPort, Pie, PwmPort, SdfmPort, SpiPort, SysCtl,
};

/// Access to all peripheral ports of a device
pub trait Platform {
    type Cpu: Cpu;
    type Gpio: GpioPort;
    type Timers: CpuTimers;
    type SysCtl: SysCtl;
    type Pie: Pie;
    type Adc: AdcPort;
    type Pwm: PwmPort;
    type Ecap: EcapPort;
    type Sdfm: SdfmPort;
    type Pga: PgaPort;
    type Cmpss: CmpssPort;
    type Can: CanPort;
    type I2c: I2cPort;
    type Spi: SpiPort;
    type Fsi: FsiPort;
    type Flash: FlashPort;
    type Id: IdSource;

    fn cpu(&self) -> &Self::Cpu;
    fn gpio(&self) -> &Self::Gpio;
    fn timers(&self) -> &Self::Timers;
    fn sysctl(&self) -> &Self::SysCtl;
    fn pie(&self) -> &Self::Pie;
    fn adc(&self) -> &Self::Adc;
    fn pwm(&self) -> &Self::Pwm;
    fn ecap(&self) -> &Self::Ecap;
    fn sdfm(&self) -> &Self::Sdfm;
    fn pga(&self) -> &Self::Pga;
    fn cmpss(&self) -> &Self::Cmpss;
    fn can(&self) -> &Self::Can;
    fn i2c(&self) -> &Self::I2c;
    fn spi(&self) -> &Self::Spi;
    fn fsi(&self) -> &Self::Fsi;
    fn flash(&self) -> &Self::Flash;
    fn id(&self) -> &Self::Id;
}

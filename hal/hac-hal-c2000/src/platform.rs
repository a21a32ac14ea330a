//! F28004x port bundle

use hac_hal::Platform;

use crate::adc::{C2000Adc, ADC_F28004X};
use crate::can::{C2000Can, CAN_F28004X};
use crate::cmpss::{C2000Cmpss, CMPSS_F28004X};
use crate::cpu::{C2000Cpu, WDCR_F28004X};
use crate::ecap::{C2000Ecap, ECAP1_F28004X, ECAP_STRIDE_F28004X, INPUT_XBAR_F28004X};
use crate::flash::{C2000Flash, RtFlashApi, FLASH_START_F28004X, FLASH_WORDS_F28004X};
use crate::fsi::{C2000Fsi, FSIRXA_F28004X, FSITXA_F28004X};
use crate::gpio::{C2000Gpio, CTRL_F28004X, DATA_F28004X};
use crate::i2c::{C2000I2c, I2C_F28004X};
use crate::id::{C2000Id, ID_F28004X};
use crate::pga::{C2000Pga, PGA1_F28004X, PGA_STRIDE_F28004X};
use crate::pie::{C2000Pie, PIE_F28004X};
use crate::pwm::{C2000Pwm, EPWM1_F28004X, EPWM_STRIDE_F28004X};
use crate::sdfm::{C2000Sdfm, SDFM1_F28004X};
use crate::spi::{C2000Spi, SPI_F28004X};
use crate::sysctl::{C2000SysCtl, SYSCTL_F28004X};
use crate::timer::{C2000Timers, TIMERS_F28004X, TMR2CLKCTL_F28004X};

/// Every port of an F28004x at its reset address map
pub struct C2000Platform {
    cpu: C2000Cpu,
    gpio: C2000Gpio,
    timers: C2000Timers,
    sysctl: C2000SysCtl,
    pie: C2000Pie,
    adc: C2000Adc,
    pwm: C2000Pwm,
    ecap: C2000Ecap,
    sdfm: C2000Sdfm,
    pga: C2000Pga,
    cmpss: C2000Cmpss,
    can: C2000Can,
    i2c: C2000I2c,
    spi: C2000Spi,
    fsi: C2000Fsi,
    flash: C2000Flash<RtFlashApi>,
    id: C2000Id,
}

impl C2000Platform {
    /// # Safety
    /// Must run on an F28004x, and at most one platform may exist: the
    /// ports assume they are the only writers of their blocks.
    pub unsafe fn f28004x() -> Self {
        Self {
            cpu: C2000Cpu::new(WDCR_F28004X),
            gpio: C2000Gpio::new(CTRL_F28004X, DATA_F28004X),
            timers: C2000Timers::new(TIMERS_F28004X, TMR2CLKCTL_F28004X),
            sysctl: C2000SysCtl::new(SYSCTL_F28004X),
            pie: C2000Pie::new(PIE_F28004X),
            adc: C2000Adc::new(ADC_F28004X),
            pwm: C2000Pwm::new(EPWM1_F28004X, EPWM_STRIDE_F28004X),
            ecap: C2000Ecap::new(ECAP1_F28004X, ECAP_STRIDE_F28004X, INPUT_XBAR_F28004X),
            sdfm: C2000Sdfm::new(SDFM1_F28004X),
            pga: C2000Pga::new(PGA1_F28004X, PGA_STRIDE_F28004X),
            cmpss: C2000Cmpss::new(CMPSS_F28004X),
            can: C2000Can::new(CAN_F28004X),
            i2c: C2000I2c::new(I2C_F28004X),
            spi: C2000Spi::new(SPI_F28004X),
            fsi: C2000Fsi::new(FSITXA_F28004X, FSIRXA_F28004X),
            flash: C2000Flash::new(
                FLASH_START_F28004X as usize,
                FLASH_START_F28004X,
                FLASH_WORDS_F28004X,
                RtFlashApi,
            ),
            id: C2000Id::new(ID_F28004X),
        }
    }
}

impl Platform for C2000Platform {
    type Cpu = C2000Cpu;
    type Gpio = C2000Gpio;
    type Timers = C2000Timers;
    type SysCtl = C2000SysCtl;
    type Pie = C2000Pie;
    type Adc = C2000Adc;
    type Pwm = C2000Pwm;
    type Ecap = C2000Ecap;
    type Sdfm = C2000Sdfm;
    type Pga = C2000Pga;
    type Cmpss = C2000Cmpss;
    type Can = C2000Can;
    type I2c = C2000I2c;
    type Spi = C2000Spi;
    type Fsi = C2000Fsi;
    type Flash = C2000Flash<RtFlashApi>;
    type Id = C2000Id;

    fn cpu(&self) -> &C2000Cpu {
        &self.cpu
    }

    fn gpio(&self) -> &C2000Gpio {
        &self.gpio
    }

    fn timers(&self) -> &C2000Timers {
        &self.timers
    }

    fn sysctl(&self) -> &C2000SysCtl {
        &self.sysctl
    }

    fn pie(&self) -> &C2000Pie {
        &self.pie
    }

    fn adc(&self) -> &C2000Adc {
        &self.adc
    }

    fn pwm(&self) -> &C2000Pwm {
        &self.pwm
    }

    fn ecap(&self) -> &C2000Ecap {
        &self.ecap
    }

    fn sdfm(&self) -> &C2000Sdfm {
        &self.sdfm
    }

    fn pga(&self) -> &C2000Pga {
        &self.pga
    }

    fn cmpss(&self) -> &C2000Cmpss {
        &self.cmpss
    }

    fn can(&self) -> &C2000Can {
        &self.can
    }

    fn i2c(&self) -> &C2000I2c {
        &self.i2c
    }

    fn spi(&self) -> &C2000Spi {
        &self.spi
    }

    fn fsi(&self) -> &C2000Fsi {
        &self.fsi
    }

    fn flash(&self) -> &C2000Flash<RtFlashApi> {
        &self.flash
    }

    fn id(&self) -> &C2000Id {
        &self.id
    }
}

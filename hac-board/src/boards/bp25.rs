//! BP25: bidirectional PFC/AFE converter, 25 kW (F28004x)
//!
//! Revision 0 runs one interrupt path from ADC-A line 1. Revision 1 routes
//! the internal interlock fault to IO23 and splits the ADC-A interrupt in
//! two paths. Variant 0 senses the front buttons through the ADC; variants
//! 1 and 2 are assembled without the button board.

use hac_core::config::{BoardId, BoardInfo};
use hac_core::io::registry::PinMux;
use hac_core::silicon::f28004x::pins as p4;
use hac_core::silicon::F28004x;
use hac_core::{debug, Error, PinCode, PinFun};
use hac_drivers::adc::{Adc, AdcChannel, Conversion, Trigger};
use hac_drivers::pwm::{self, Pwm, PwmChannel};
use hac_hal::adc::AdcPort;
use hac_hal::pie::Vector;
use hac_hal::pwm::{Compare, SocOutput, SocSource};
use hac_hal::Platform;
use hac_net::spi::SpiConfig;
use hac_net::{Net, State};

use crate::hal::Hal;
use crate::hapi::{Board, InterlockMap, Io, Path};

/// Pin map
pub mod pins {
    use super::p4;
    use hac_core::PinCode;

    pub const LED_2: PinCode = p4::IO8_DOUT;
    pub const LED_B0: PinCode = p4::IO0_DOUT;
    pub const LED_B1: PinCode = p4::IO1_DOUT;
    pub const LED_B2: PinCode = p4::IO2_DOUT;
    pub const LED_B3_RED: PinCode = p4::IO4_DOUT;
    pub const LED_B3_GREEN: PinCode = p4::IO28_DOUT;

    pub const CODING_A: PinCode = p4::IO29_DIN;
    pub const CODING_B: PinCode = p4::IO22_DIN;

    pub const DISPLAY_RST: PinCode = p4::IO3_DOUT;
    pub const DISPLAY_DC: PinCode = p4::IO6_DOUT;
    pub const DISPLAY_CLK: PinCode = p4::IO9_SPIA_CLK;
    pub const DISPLAY_SIMO: PinCode = p4::IO16_SPIA_SIMO;
    pub const DISPLAY_SOMI: PinCode = p4::IO10_SPIA_SOMI;
    pub const DISPLAY_STE: PinCode = p4::IO11_SPIA_STE;

    pub const INTERLOCK_TRIP: PinCode = p4::IO24_DOUT;
    pub const INTERLOCK_CLEAR: PinCode = p4::IO5_DOUT;
    pub const INTERLOCK_COMBINED: PinCode = p4::IO7_DIN;
    /// Revision 1 and later
    pub const INTERLOCK_INTERNAL: PinCode = p4::IO23_DIN;
}

const OUTPUTS: [PinCode; 8] = [
    pins::LED_2,
    pins::LED_B0,
    pins::LED_B1,
    pins::LED_B2,
    pins::LED_B3_RED,
    pins::LED_B3_GREEN,
    pins::DISPLAY_RST,
    pins::DISPLAY_DC,
];

/// Generator pacing the ADC
pub const ADC_TRIGGER_PWM: u8 = 1;

/// ADC trigger rate (Hz)
pub const ADC_TRIGGER_HZ: u32 = 20_000;

/// Display bus speed (bps)
pub const DISPLAY_BITRATE: u32 = 50_000_000;

/// Display reset pulse and settle time (µs)
pub const DISPLAY_RESET_US: u32 = 500_000;

/// Raw reading above which a button counts as pressed
pub const BUTTON_THRESHOLD: u16 = 2048;

/// Full-scale ADC input (V)
const VREF: f32 = 3.3;

const PWM: [PwmChannel; 1] = [PwmChannel {
    enable: true,
    num: ADC_TRIGGER_PWM,
    io_a: PinCode::IOX,
    io_b: PinCode::IOX,
    independent_b: false,
    freq: ADC_TRIGGER_HZ,
    phase: None,
    dead_us: 0.0,
}];

const fn button(core: u8, channel: u8, socs: &'static [u8], int_line: u8) -> AdcChannel {
    AdcChannel {
        enable: true,
        core,
        channel,
        trigger: Trigger::EPWM1_SOCA,
        sample_ns: 300,
        int_line,
        socs,
    }
}

/// Button channels, revision 0: one interrupt at the end of ADC-A
const BUTTONS_REV0: [AdcChannel; 5] = [
    button(3, 0, &[0], 0),
    button(3, 2, &[1], 0),
    button(1, 1, &[2], 0),
    button(1, 0, &[3], 1),
    button(2, 4, &[4], 0),
];

/// Button channels, revision 1: ADC-A line 2 raised halfway through
const BUTTONS_REV1: [AdcChannel; 5] = [
    button(3, 0, &[0], 0),
    button(3, 2, &[1], 0),
    button(1, 1, &[2], 2),
    button(1, 0, &[3], 1),
    button(2, 4, &[4], 0),
];

/// Front-panel button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    B0,
    B1,
    B2,
    B3,
    /// Encoder push
    Encoder,
}

impl Button {
    /// ADC channel index
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Status LED
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Led {
    Led2,
    B0,
    B1,
    B2,
    B3Red,
    B3Green,
}

impl Led {
    pub fn pin(self) -> PinCode {
        match self {
            Self::Led2 => pins::LED_2,
            Self::B0 => pins::LED_B0,
            Self::B1 => pins::LED_B1,
            Self::B2 => pins::LED_B2,
            Self::B3Red => pins::LED_B3_RED,
            Self::B3Green => pins::LED_B3_GREEN,
        }
    }
}

/// BP25 board support
pub struct Bp25 {
    revision: u16,
    variant: u16,
    adc: Adc<'static>,
    pwm: Pwm<'static>,
}

impl Bp25 {
    pub fn revision(&self) -> u16 {
        self.revision
    }

    pub fn variant(&self) -> u16 {
        self.variant
    }

    /// True when the variant carries the button board
    pub fn has_buttons(&self) -> bool {
        self.variant == 0
    }

    /// Software-start the conversions of one ADC channel
    pub fn convert<P: Platform>(&self, platform: &P, index: usize) -> Result<(), Error> {
        self.adc.convert(platform.adc(), index)
    }
}

impl<P: Platform> Board<F28004x, P> for Bp25 {
    fn resolve(info: &BoardInfo) -> Result<Self, Error> {
        if info.id != BoardId::BP25 {
            return Err(Error::Unavailable);
        }
        let buttons: &'static [AdcChannel] = match info.revision {
            0 => &BUTTONS_REV0,
            1 => &BUTTONS_REV1,
            _ => return Err(Error::Unavailable),
        };
        let buttons = match info.variant {
            0 => buttons,
            1 | 2 => &[],
            _ => return Err(Error::Range),
        };
        Ok(Self {
            revision: info.revision,
            variant: info.variant,
            adc: Adc::new(buttons),
            pwm: Pwm::new(&PWM),
        })
    }

    fn interlock(&self) -> InterlockMap {
        InterlockMap {
            trip: pins::INTERLOCK_TRIP,
            clear: pins::INTERLOCK_CLEAR,
            internal: if self.revision == 0 {
                PinCode::IOX
            } else {
                pins::INTERLOCK_INTERNAL
            },
            combined: pins::INTERLOCK_COMBINED,
        }
    }

    fn paths(&self) -> u8 {
        if self.revision == 0 {
            1
        } else {
            2
        }
    }

    fn vector(&self, path: Path) -> Option<Vector> {
        match path {
            Path::Primary => Some(Vector::ADCA1),
            Path::Secondary if self.revision > 0 => Some(Vector::ADCA2),
            Path::Secondary => None,
        }
    }

    fn setup(&mut self, io: &mut Io<'_, '_, F28004x, P>) -> Result<(), Error> {
        for code in OUTPUTS {
            io.pins.connect(code, PinFun::DOUT)?;
        }
        for code in [pins::CODING_A, pins::CODING_B] {
            io.pins.connect(code, PinFun::DIN)?;
        }

        let cpu = io.platform.cpu();
        self.pwm
            .setup(io.platform.pwm(), io.clock, cpu, &mut *io.pins)?;
        pwm::trigger(
            io.platform.pwm(),
            ADC_TRIGGER_PWM,
            SocOutput::SocA,
            SocSource::CounterZero,
            1,
        )?;
        self.adc
            .setup::<F28004x, _, _>(io.platform.adc(), io.clock, cpu)?;
        debug!(
            "BP25 rev {} variant {}: {} ADC channel(s)",
            self.revision,
            self.variant,
            self.adc.channels().len()
        );
        Ok(())
    }

    fn isr_clear(&self, platform: &P, path: Path) -> Result<(), Error> {
        let line = match path {
            Path::Primary => 1,
            Path::Secondary if self.revision > 0 => 2,
            Path::Secondary => return Err(Error::Unavailable),
        };
        platform.adc().clear_interrupt_flag(1, line);
        Ok(())
    }

    fn adc_data(&self, index: usize) -> Result<Conversion, Error> {
        let data = self.adc.data(index)?;
        Ok(Conversion {
            scale: data.scale * VREF,
            ..data
        })
    }

    fn adc_read(&self, platform: &P, index: usize) -> Result<u16, Error> {
        self.adc.read(platform.adc(), index)
    }

    fn pwm_update(&self, platform: &P, num: u8, compare: Compare, duty: f32) -> Result<(), Error> {
        self.pwm.update(platform.pwm(), num, compare, duty)
    }
}

/// HAL of a BP25
pub type Bp25Hal<'p, P> = Hal<'p, F28004x, P, Bp25>;

impl<P: Platform> Hal<'_, F28004x, P, Bp25> {
    pub fn set_led(&self, led: Led, on: bool) -> Result<(), Error> {
        self.dio.write(&self.pins, led.pin(), on)
    }

    pub fn toggle_led(&self, led: Led) -> Result<(), Error> {
        self.dio.toggle(&self.pins, led.pin())
    }

    /// Assembly coding straps, A in bit 0
    pub fn coding(&self) -> Result<u8, Error> {
        let a = self.dio.read(&self.pins, pins::CODING_A)?;
        let b = self.dio.read(&self.pins, pins::CODING_B)?;
        Ok(u8::from(a) | u8::from(b) << 1)
    }

    /// Latest reading of a button
    ///
    /// `State` on variants without the button board.
    pub fn button(&self, button: Button) -> Result<bool, Error> {
        Ok(self.adc_read(button.index())? > BUTTON_THRESHOLD)
    }

    /// Bring up the display bus and reset the display
    ///
    /// # Returns
    /// `false` if the display was already up
    pub fn enable_display(&mut self) -> Result<bool, Error> {
        if self.spi.state() == State::Open {
            return Ok(false);
        }
        if self.spi.state() == State::Disconnected {
            self.spi.connect(
                &mut self.pins,
                pins::DISPLAY_CLK,
                pins::DISPLAY_SIMO,
                pins::DISPLAY_SOMI,
                pins::DISPLAY_STE,
            )?;
        }
        self.spi.open(&SpiConfig {
            bitrate: DISPLAY_BITRATE,
            bits: 8,
            ..SpiConfig::default()
        })?;

        self.dio.write(&self.pins, pins::DISPLAY_RST, false)?;
        self.clock.delay_us(DISPLAY_RESET_US);
        self.dio.write(&self.pins, pins::DISPLAY_RST, true)?;
        self.clock.delay_us(DISPLAY_RESET_US);
        Ok(true)
    }

    /// Select data (`true`) or command (`false`) display writes
    pub fn display_data_mode(&self, data: bool) -> Result<(), Error> {
        self.dio.write(&self.pins, pins::DISPLAY_DC, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hac_hal_sim::SimPlatform;

    fn resolve(revision: u16, variant: u16) -> Result<Bp25, Error> {
        <Bp25 as Board<F28004x, SimPlatform>>::resolve(&BoardInfo::new(
            BoardId::BP25,
            revision,
            variant,
        ))
    }

    #[test]
    fn test_resolve_checks_revision_and_variant() {
        assert!(resolve(0, 0).is_ok());
        assert!(resolve(1, 2).is_ok());
        assert_eq!(resolve(2, 0).err(), Some(Error::Unavailable));
        assert_eq!(resolve(0, 3).err(), Some(Error::Range));
        let other = <Bp25 as Board<F28004x, SimPlatform>>::resolve(&BoardInfo::new(
            BoardId::BI25,
            0,
            0,
        ));
        assert_eq!(other.err(), Some(Error::Unavailable));
    }

    #[test]
    fn test_revision_selects_paths_and_interlock() {
        let rev0 = resolve(0, 0).unwrap();
        let rev1 = resolve(1, 0).unwrap();
        let paths = |b: &Bp25| <Bp25 as Board<F28004x, SimPlatform>>::paths(b);
        let vector = |b: &Bp25, p| <Bp25 as Board<F28004x, SimPlatform>>::vector(b, p);
        let map = |b: &Bp25| <Bp25 as Board<F28004x, SimPlatform>>::interlock(b);

        assert_eq!((paths(&rev0), paths(&rev1)), (1, 2));
        assert_eq!(vector(&rev0, Path::Secondary), None);
        assert_eq!(vector(&rev1, Path::Secondary), Some(Vector::ADCA2));
        assert!(map(&rev0).internal.is_none());
        assert_eq!(map(&rev1).internal, pins::INTERLOCK_INTERNAL);
    }

    #[test]
    fn test_only_variant_zero_has_buttons() {
        assert!(resolve(0, 0).unwrap().has_buttons());
        assert!(!resolve(0, 1).unwrap().has_buttons());
    }
}

//! Digital I/O
//!
//! Every access first asks the pin registry what the physical pin is
//! currently connected as. Writing needs a connected digital output,
//! reading accepts a digital input or output.

use hac_core::io::registry::PinMux;
use hac_core::{Error, PinCode, PinFun};
use hac_hal::gpio::GpioPort;

/// Digital I/O driver
pub struct Dio<'p, G: GpioPort> {
    gpio: &'p G,
}

impl<'p, G: GpioPort> Dio<'p, G> {
    pub fn new(gpio: &'p G) -> Self {
        Self { gpio }
    }

    /// Resolve `code` to a pin connected as one of `funs`
    fn pin(pins: &dyn PinMux, code: PinCode, funs: &[PinFun]) -> Result<u16, Error> {
        if code.is_none() {
            return Err(Error::Code);
        }
        let status = pins.status(code).ok_or(Error::Unavailable)?;
        if !status.connected {
            return Err(Error::State);
        }
        if !funs.contains(&status.fun) {
            return Err(Error::FunMismatch);
        }
        Ok(status.pin)
    }

    /// Drive an output pin
    pub fn write(&self, pins: &dyn PinMux, code: PinCode, high: bool) -> Result<(), Error> {
        let pin = Self::pin(pins, code, &[PinFun::DOUT])?;
        self.gpio.write(pin, high);
        Ok(())
    }

    /// Invert an output pin
    pub fn toggle(&self, pins: &dyn PinMux, code: PinCode) -> Result<(), Error> {
        let pin = Self::pin(pins, code, &[PinFun::DOUT])?;
        self.gpio.toggle(pin);
        Ok(())
    }

    /// Level of an input or output pin
    pub fn read(&self, pins: &dyn PinMux, code: PinCode) -> Result<bool, Error> {
        let pin = Self::pin(pins, code, &[PinFun::DIN, PinFun::DOUT])?;
        Ok(self.gpio.read(pin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hac_core::id::Identity;
    use hac_core::io::registry::PinRegistry;
    use hac_core::silicon::f28004x::pins as p4;
    use hac_core::silicon::F28004x;
    use hac_hal_sim::{SimCpu, SimGpio};

    #[test]
    fn test_write_requires_connected_output() {
        let cpu = SimCpu::new();
        let gpio = SimGpio::new();
        let mut reg = PinRegistry::<F28004x, _>::new(&gpio, &cpu);
        reg.reset(&Identity::virtual_for::<F28004x>());
        let dio = Dio::new(&gpio);

        assert_eq!(dio.write(&reg, p4::IO16_DOUT, true), Err(Error::State));
        assert_eq!(dio.write(&reg, PinCode::IOX, true), Err(Error::Code));

        reg.connect(p4::IO16_DOUT, PinFun::DOUT).unwrap();
        dio.write(&reg, p4::IO16_DOUT, true).unwrap();
        assert!(gpio.pin(16).output);
        dio.toggle(&reg, p4::IO16_DOUT).unwrap();
        assert!(!gpio.pin(16).output);
        assert_eq!(dio.read(&reg, p4::IO16_DOUT), Ok(false));
    }

    #[test]
    fn test_function_mismatch() {
        let cpu = SimCpu::new();
        let gpio = SimGpio::new();
        let mut reg = PinRegistry::<F28004x, _>::new(&gpio, &cpu);
        reg.reset(&Identity::virtual_for::<F28004x>());
        let dio = Dio::new(&gpio);

        reg.connect(p4::IO24_DIN, PinFun::DIN).unwrap();
        assert_eq!(dio.write(&reg, p4::IO24_DIN, true), Err(Error::FunMismatch));
        gpio.set_input(24, true);
        assert_eq!(dio.read(&reg, p4::IO24_DIN), Ok(true));

        reg.connect(p4::IO16_SPIA_SIMO, PinFun::NONE).unwrap();
        assert_eq!(dio.read(&reg, p4::IO16_DIN), Err(Error::FunMismatch));
    }
}

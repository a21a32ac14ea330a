//! HAL composition
//!
//! [`Hal::init`] brings a device from reset to a state where the shared
//! buses can be used. The order matters:
//!
//! 1. flash wait states for the code being executed
//! 2. PLL, retried [`PLL_TRIALS`] times
//! 3. identity decode and pin registry reset
//! 4. default CAN, I2C (inside the EEPROM), SPI, FSI and flash transports
//! 5. CAN and I2C pins
//! 6. free-running stopwatch and the 1 kHz tick
//!
//! [`Hal::setup`] then picks the MCU LED from the board identifier and
//! hands the rest of the board over to the HAPI. [`Hal::configure`] opens
//! the CAN bus and the on-board EEPROM with the run-time configuration.

use hac_core::config::{BoardId, BoardInfo, HalConfig};
use hac_core::id::Identity;
use hac_core::io::registry::{PinMux, PinRegistry};
use hac_core::silicon::{Family, Silicon};
use hac_core::{error, info, warn, Error, PinCode, PinFun};
use hac_drivers::clk::{self, Clock};
use hac_drivers::dio::Dio;
use hac_drivers::timer::{Stopwatch, Tick, Timers};
use hac_hal::{Cpu, IdSource, Platform};
use hac_net::{
    Can, CanConfig, Eeprom, Flash, Fsi, I2c, Mem, Net, Spi, State, Sys,
    EEPROM_24AA256UID,
};
use portable_atomic::{AtomicU32, Ordering};

use crate::hapi::{Board, Hapi};
use crate::persist;

/// Clock bring-up attempts before giving up
pub const PLL_TRIALS: u32 = 3;

/// Pause between clock bring-up attempts (µs)
pub const PLL_RETRY_US: u32 = 5;

/// Background tick rate (Hz)
pub const TICK_HZ: u32 = 1000;

/// MCU LED of board `id` on silicon `S`
///
/// # Returns
/// `Ok(None)` for a known board without an LED, `Unavailable` for a board
/// the silicon does not host.
pub fn mcu_led<S: Silicon>(id: BoardId) -> Result<Option<PinCode>, Error> {
    let default = Some(S::HAL_PINS.led);
    match S::FAMILY {
        Family::F2803x => match id {
            BoardId::LF45 => Ok(Some(hac_core::silicon::f2803x::pins::IO4_DOUT)),
            BoardId::LL25 | BoardId::UP25 | BoardId::BC25 => Ok(default),
            _ => Err(Error::Unavailable),
        },
        Family::F28004x => match id {
            BoardId::BP25
            | BoardId::BI25
            | BoardId::VG11_FM01
            | BoardId::VG11_FM02
            | BoardId::CB01
            | BoardId::TBTE => Ok(default),
            BoardId::FAN1 => Ok(None),
            _ => Err(Error::Unavailable),
        },
        Family::F28p65x => match id {
            BoardId::NONE | BoardId::BOOT | BoardId::FP | BoardId::FAN1 => Ok(default),
            _ => Err(Error::Unavailable),
        },
    }
}

/// Hardware abstraction layer of one device
///
/// Owns the pin registry and the shared transports. Board support `B`
/// is resolved in [`Hal::setup`].
pub struct Hal<'p, S: Silicon, P: Platform, B> {
    pub(crate) platform: &'p P,
    pub(crate) clock: Clock<'p, P::SysCtl>,
    identity: Identity,
    pub(crate) pins: PinRegistry<'p, S, P::Gpio>,
    pub(crate) dio: Dio<'p, P::Gpio>,
    timers: Timers<'p, P::Timers>,
    pub(crate) stopwatch: Stopwatch<'p, P::Timers>,
    tick: Tick<'p, P::Timers>,
    can: Can<'p, S, P::Can, P::SysCtl>,
    eeprom: Eeprom<I2c<'p, P::I2c, P::SysCtl>>,
    pub(crate) spi: Spi<'p, P::Spi, P::SysCtl>,
    fsi: Option<Fsi<'p, S, P::Fsi, P::SysCtl>>,
    flash: Flash<'p, S, P::Flash>,
    board_info: BoardInfo,
    config: HalConfig,
    led: PinCode,
    tic: AtomicU32,
    pub(crate) hapi: Hapi<'p, P, B>,
}

impl<'p, S: Silicon, P: Platform, B: Board<S, P>> Hal<'p, S, P, B> {
    /// Boot-time bring-up
    ///
    /// Fails with `Hardware` when the PLL does not lock within
    /// [`PLL_TRIALS`] attempts or the identity cannot be decoded.
    pub fn init(platform: &'p P) -> Result<Self, Error> {
        let cpu = platform.cpu();
        clk::init_flash::<S>(cpu, platform.sysctl());
        let clock = start_clock::<S, P>(platform)?;

        let identity = Identity::decode::<S>(&platform.id().read())?;
        let mut pins = PinRegistry::<S, _>::new(platform.gpio(), cpu);
        pins.reset(&identity);

        let map = S::HAL_PINS;
        let mut can = Can::new(platform.can(), Sys::new(&clock, cpu), map.can_id)?;
        let i2c = I2c::new(platform.i2c(), Sys::new(&clock, cpu));
        let spi = Spi::new(platform.spi(), Sys::new(&clock, cpu), 0)?;
        let fsi = if S::HAS_FSI {
            Some(Fsi::new(platform.fsi(), Sys::new(&clock, cpu))?)
        } else {
            None
        };
        let mut eeprom = Eeprom::new(i2c);
        let flash = Flash::new(platform.flash());

        can.connect(&mut pins, map.can_tx, map.can_rx)?;
        eeprom
            .bus_mut()
            .connect(&mut pins, map.i2c_sda, map.i2c_scl)?;

        let mut timers = Timers::new(platform.timers(), clock.cpu_hz());
        let stopwatch = timers.stopwatch()?;
        let tick = timers.tick(TICK_HZ)?;

        let hal = Self {
            platform,
            dio: Dio::new(platform.gpio()),
            hapi: Hapi::new(platform.pie(), cpu),
            clock,
            identity,
            pins,
            timers,
            stopwatch,
            tick,
            can,
            eeprom,
            spi,
            fsi,
            flash,
            board_info: BoardInfo::default(),
            config: HalConfig::default(),
            led: PinCode::IOX,
            tic: AtomicU32::new(0),
        };
        hal.tic();
        info!(
            "{} up: {} pins, CAN{} primary",
            S::NAME,
            hal.identity.pin_count,
            map.can_id
        );
        Ok(hal)
    }

    /// Board bring-up
    ///
    /// Connects the MCU LED for `board.id`, then runs the HAPI setup of
    /// the board's revision.
    pub fn setup(&mut self, board: BoardInfo) -> Result<(), Error> {
        let led = mcu_led::<S>(board.id).map_err(|e| {
            error!("No MCU LED known for board {=u16:#x}", board.id.0);
            e
        })?;
        if let Some(led) = led {
            self.pins.connect(led, PinFun::DOUT)?;
            self.led = led;
        }
        self.board_info = board;
        self.hapi_setup(&board)
    }

    /// Trip the interlock and reset the device
    ///
    /// Peers see the interlock fault before the device goes silent.
    pub fn reset(&self) {
        if let Err(e) = self.interlock_trip() {
            warn!("Interlock trip before reset failed: {}", e);
        }
        self.platform.cpu().reset_device();
    }

    /// Start a measured section
    pub fn tic(&self) -> u32 {
        let now = self.stopwatch.tic();
        self.tic.store(now, Ordering::Relaxed);
        now
    }

    /// Stopwatch ticks since the last [`Hal::tic`]
    pub fn toc(&self) -> u32 {
        self.stopwatch.toc(self.tic.load(Ordering::Relaxed))
    }

    /// True once per millisecond boundary
    pub fn tick(&self) -> bool {
        self.tick.fired()
    }

    /// Tick rate (Hz)
    pub fn frequency(&self) -> u32 {
        self.tick.hz()
    }

    pub fn led(&self, on: bool) -> Result<(), Error> {
        self.dio.write(&self.pins, self.led, on)
    }

    pub fn led_toggle(&self) -> Result<(), Error> {
        self.dio.toggle(&self.pins, self.led)
    }

    /// MCU LED, [`PinCode::IOX`] before setup or on boards without one
    pub fn led_pin(&self) -> PinCode {
        self.led
    }

    /// Stopwatch ticks spent in the last interrupt
    pub fn busy_ticks(&self) -> u32 {
        self.hapi.busy.last()
    }

    /// Device serial number
    pub fn serial(&self) -> u32 {
        self.identity.uid
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn board_info(&self) -> BoardInfo {
        self.board_info
    }

    pub fn clock(&self) -> &Clock<'p, P::SysCtl> {
        &self.clock
    }

    pub fn platform(&self) -> &'p P {
        self.platform
    }

    pub fn pins(&self) -> &PinRegistry<'p, S, P::Gpio> {
        &self.pins
    }

    pub fn pins_mut(&mut self) -> &mut PinRegistry<'p, S, P::Gpio> {
        &mut self.pins
    }

    pub fn dio(&self) -> &Dio<'p, P::Gpio> {
        &self.dio
    }

    /// Timer pool, with the stopwatch and tick already taken
    pub fn timers(&mut self) -> &mut Timers<'p, P::Timers> {
        &mut self.timers
    }

    pub fn stopwatch(&self) -> Stopwatch<'p, P::Timers> {
        self.stopwatch
    }

    pub fn can(&mut self) -> &mut Can<'p, S, P::Can, P::SysCtl> {
        &mut self.can
    }

    pub fn eeprom(&mut self) -> &mut Eeprom<I2c<'p, P::I2c, P::SysCtl>> {
        &mut self.eeprom
    }

    pub fn spi(&mut self) -> &mut Spi<'p, P::Spi, P::SysCtl> {
        &mut self.spi
    }

    /// FSI link, `None` on silicon without one
    pub fn fsi(&mut self) -> Option<&mut Fsi<'p, S, P::Fsi, P::SysCtl>> {
        self.fsi.as_mut()
    }

    pub fn flash(&mut self) -> &mut Flash<'p, S, P::Flash> {
        &mut self.flash
    }

    /// Configuration in effect
    pub fn config(&self) -> &HalConfig {
        &self.config
    }

    /// Stored configuration, or defaults when none can be read
    ///
    /// Opens the on-board EEPROM first if needed.
    pub fn load_config(&mut self) -> HalConfig {
        if self.eeprom.state() != State::Open {
            let mem = eeprom_mem(&self.config);
            if let Err(e) = self.eeprom.open(&mem) {
                warn!("EEPROM open failed: {}, using default configuration", e);
                return HalConfig::default();
            }
        }
        persist::load_or_default(&mut self.eeprom, persist::CONFIG_ADDRESS)
    }

    /// Apply `config` to the shared buses
    ///
    /// Re-opens the primary CAN bus with the configured bit rate and
    /// acceptance filter, and the on-board EEPROM with the I2C bit rate
    /// capped by the configured one.
    ///
    /// The configuration is kept only when both buses opened.
    pub fn configure(&mut self, config: HalConfig) -> Result<(), Error> {
        self.can.close()?;
        self.can.open(&CanConfig {
            bitrate: config.can_bitrate,
            id: config.can_id,
            mask: config.can_mask,
        })?;

        self.eeprom.close()?;
        self.eeprom.open(&eeprom_mem(&config))?;
        self.config = config;
        info!(
            "Configured: CAN {} bps, I2C {} bps, LED {} ms",
            config.can_bitrate,
            config.i2c_bitrate,
            config.led_period_ms
        );
        Ok(())
    }

    /// Load the stored configuration and apply it
    pub fn configure_from_storage(&mut self) -> Result<HalConfig, Error> {
        let config = self.load_config();
        self.configure(config)?;
        Ok(config)
    }

    /// MCU LED heartbeat period in ticks
    pub fn heartbeat_period(&self) -> u32 {
        (u32::from(self.config.led_period_ms) * self.frequency() / 1000).max(1)
    }
}

/// On-board EEPROM layout at the configured bus speed
fn eeprom_mem(config: &HalConfig) -> Mem {
    Mem {
        bitrate: EEPROM_24AA256UID.bitrate.min(config.i2c_bitrate),
        ..EEPROM_24AA256UID
    }
}

/// PLL bring-up with retries
fn start_clock<'p, S: Silicon, P: Platform>(
    platform: &'p P,
) -> Result<Clock<'p, P::SysCtl>, Error> {
    for trial in 1..=PLL_TRIALS {
        match Clock::init::<S, _>(platform.cpu(), platform.sysctl(), platform.timers()) {
            Ok(clock) => return Ok(clock),
            Err(e) => {
                warn!("Clock bring-up trial {} of {} failed: {}", trial, PLL_TRIALS, e);
                clk::delay_us::<S>(platform.sysctl(), PLL_RETRY_US);
            }
        }
    }
    error!("Clock bring-up failed");
    Err(Error::Hardware)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hac_core::silicon::{f28004x, f28p65x, F2803x, F28004x, F28p65x};

    #[test]
    fn test_led_per_silicon() {
        assert_eq!(
            mcu_led::<F28004x>(BoardId::BP25),
            Ok(Some(f28004x::pins::IO17_DOUT))
        );
        assert_eq!(mcu_led::<F28004x>(BoardId::FAN1), Ok(None));
        assert_eq!(mcu_led::<F28004x>(BoardId::LF45), Err(Error::Unavailable));
        assert_eq!(
            mcu_led::<F2803x>(BoardId::LF45),
            Ok(Some(hac_core::silicon::f2803x::pins::IO4_DOUT))
        );
        assert_eq!(
            mcu_led::<F2803x>(BoardId::UP25),
            Ok(Some(<F2803x as Silicon>::HAL_PINS.led))
        );
        assert_eq!(
            mcu_led::<F28p65x>(BoardId::FP),
            Ok(Some(f28p65x::pins::IO84_DOUT))
        );
        assert_eq!(mcu_led::<F28p65x>(BoardId::BP25), Err(Error::Unavailable));
    }
}

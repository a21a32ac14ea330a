//! Hardware API
//!
//! Board-specific bring-up behind one trait. A [`Board`] implementation
//! describes a board revision: its interlock lines, the interrupt vectors
//! of its control paths, and the peripherals it programs in
//! [`Board::setup`]. The generic half lives on [`Hal`]: interlock control,
//! interrupt registration, and the interrupt entries with their busy
//! accounting.
//!
//! The interlock is a hardware fault loop shared with the other boards of
//! a system. `trip` latches an internal fault, `clear` releases it, and
//! the `combined` input reports any fault on the loop. All read lines are
//! active low.

use hac_core::config::BoardInfo;
use hac_core::io::registry::{PinMux, PinRegistry};
use hac_core::silicon::Silicon;
use hac_core::{debug, error, info, warn, Error, PinCode, PinFun};
use hac_drivers::adc::Conversion;
use hac_drivers::clk::Clock;
use hac_drivers::pie::Interrupts;
use hac_hal::pie::Vector;
use hac_hal::pwm::Compare;
use hac_hal::{Cpu, Platform};

use crate::hal::Hal;
use crate::isr::{BusyMeter, Handler, IsrSlot};

/// Interlock pulse width (µs)
pub const INTERLOCK_PULSE_US: u32 = 5;

/// Interlock lines of a board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterlockMap {
    /// Output latching the internal fault on a rising edge
    pub trip: PinCode,
    /// Output releasing the internal fault on a rising edge
    pub clear: PinCode,
    /// Internal fault input, [`PinCode::IOX`] if not routed
    pub internal: PinCode,
    /// Loop fault input
    pub combined: PinCode,
}

impl InterlockMap {
    /// Board without an interlock
    pub const NONE: Self = Self {
        trip: PinCode::IOX,
        clear: PinCode::IOX,
        internal: PinCode::IOX,
        combined: PinCode::IOX,
    };
}

/// Interlock status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Interlock {
    /// Fault latched by this board
    pub internal: bool,
    /// Fault raised elsewhere on the loop
    pub external: bool,
}

/// Interrupt path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Path {
    Primary,
    Secondary,
}

/// Resources lent to [`Board::setup`]
pub struct Io<'a, 'p, S: Silicon, P: Platform> {
    pub platform: &'p P,
    pub clock: &'a Clock<'p, P::SysCtl>,
    pub pins: &'a mut PinRegistry<'p, S, P::Gpio>,
}

/// Board support for silicon `S` on platform `P`
pub trait Board<S: Silicon, P: Platform>: Sized {
    /// Support for `info`, if this type handles that board revision
    fn resolve(info: &BoardInfo) -> Result<Self, Error>;

    fn interlock(&self) -> InterlockMap;

    /// Number of interrupt paths (1 or 2)
    fn paths(&self) -> u8 {
        1
    }

    /// PIE vector of an interrupt path
    fn vector(&self, path: Path) -> Option<Vector>;

    /// Connect pins and program peripherals
    ///
    /// Runs after the interlock lines are connected. PIE vectors are
    /// enabled by the caller once this succeeds.
    fn setup(&mut self, io: &mut Io<'_, '_, S, P>) -> Result<(), Error>;

    /// Clear the peripheral flag that raised `path`
    fn isr_clear(&self, platform: &P, path: Path) -> Result<(), Error>;

    fn adc_data(&self, _index: usize) -> Result<Conversion, Error> {
        Err(Error::Unavailable)
    }

    fn adc_read(&self, _platform: &P, _index: usize) -> Result<u16, Error> {
        Err(Error::Unavailable)
    }

    /// Window comparator conversion record
    fn wcs_data(&self, _index: usize) -> Result<Conversion, Error> {
        Err(Error::Unavailable)
    }

    fn pwm_update(&self, _platform: &P, _num: u8, _compare: Compare, _duty: f32) -> Result<(), Error> {
        Err(Error::Unavailable)
    }
}

/// HAPI state kept by the [`Hal`]
pub struct Hapi<'p, P: Platform, B> {
    board: Option<B>,
    map: InterlockMap,
    pie: Interrupts<'p, P::Pie>,
    isr: IsrSlot<'p>,
    isr_2: IsrSlot<'p>,
    pub(crate) busy: BusyMeter,
}

impl<'p, P: Platform, B> Hapi<'p, P, B> {
    pub(crate) fn new(pie: &'p P::Pie, cpu: &'p P::Cpu) -> Self {
        Self {
            board: None,
            map: InterlockMap::NONE,
            pie: Interrupts::new(pie, cpu),
            isr: IsrSlot::new(),
            isr_2: IsrSlot::new(),
            busy: BusyMeter::new(),
        }
    }
}

impl<'p, S: Silicon, P: Platform, B: Board<S, P>> Hal<'p, S, P, B> {
    pub(crate) fn hapi_setup(&mut self, info: &BoardInfo) -> Result<(), Error> {
        let mut board = B::resolve(info).map_err(|e| {
            error!(
                "No HAPI for board {=u16:#x} rev {} variant {}",
                info.id.0,
                info.revision,
                info.variant
            );
            e
        })?;
        let map = board.interlock();
        self.hapi.map = map;
        self.hapi.pie.init();

        let result = self.hapi_bring_up(&mut board, map);
        if let Err(e) = result {
            error!("HAPI setup failed: {}", e);
            // Release the clear line so a dead board cannot hold the loop
            if !map.clear.is_none() {
                let _ = self.pins.disconnect(map.clear);
            }
            return Err(e);
        }
        info!(
            "HAPI up: board {=u16:#x} rev {} variant {}",
            info.id.0,
            info.revision,
            info.variant
        );
        self.hapi.board = Some(board);
        Ok(())
    }

    fn hapi_bring_up(&mut self, board: &mut B, map: InterlockMap) -> Result<(), Error> {
        for (code, fun) in [
            (map.trip, PinFun::DOUT),
            (map.clear, PinFun::DOUT),
            (map.internal, PinFun::DIN),
            (map.combined, PinFun::DIN),
        ] {
            if !code.is_none() {
                self.pins.connect(code, fun)?;
            }
        }

        board.setup(&mut Io {
            platform: self.platform,
            clock: &self.clock,
            pins: &mut self.pins,
        })?;

        for path in [Path::Primary, Path::Secondary].into_iter().take(usize::from(board.paths())) {
            if let Some(vector) = board.vector(path) {
                self.hapi.pie.enable(vector)?;
            }
        }
        Ok(())
    }

    /// Resolved board support
    pub fn board(&self) -> Option<&B> {
        self.hapi.board.as_ref()
    }

    fn board_ref(&self) -> Result<&B, Error> {
        self.hapi.board.as_ref().ok_or(Error::Unavailable)
    }

    pub fn interlock_map(&self) -> InterlockMap {
        self.hapi.map
    }

    fn pulse(&self, code: PinCode, levels: &[bool]) -> Result<(), Error> {
        let mut result = Ok(());
        for (i, level) in levels.iter().enumerate() {
            if i > 0 {
                self.clock.delay_us(INTERLOCK_PULSE_US);
            }
            result = result.and(self.dio.write(&self.pins, code, *level));
        }
        result
    }

    /// Latch the internal fault
    pub fn interlock_trip(&self) -> Result<(), Error> {
        warn!("Interlock trip");
        self.pulse(self.hapi.map.trip, &[true, false])
    }

    /// Release the internal fault
    ///
    /// The loop reports no fault afterwards only if every other board has
    /// released its fault too.
    pub fn interlock_clear(&self) -> Result<(), Error> {
        debug!("Interlock clear");
        self.pulse(self.hapi.map.clear, &[false, true, false])
    }

    /// Interlock status
    ///
    /// Without an internal fault input both fields report the loop. With
    /// one, a latched internal fault masks the external status.
    pub fn interlock_read(&self) -> Result<Interlock, Error> {
        let map = self.hapi.map;
        let combined = !self.dio.read(&self.pins, map.combined)?;
        let Ok(level) = self.dio.read(&self.pins, map.internal) else {
            return Ok(Interlock {
                internal: combined,
                external: combined,
            });
        };
        let internal = !level;
        Ok(Interlock {
            internal,
            external: !internal && combined,
        })
    }

    /// Internal fault, from the loop when no internal input is routed
    pub fn interlock_internal_read(&self) -> Result<bool, Error> {
        let map = self.hapi.map;
        self.dio
            .read(&self.pins, map.internal)
            .or_else(|_| self.dio.read(&self.pins, map.combined))
            .map(|level| !level)
            .map_err(|_| Error::Unavailable)
    }

    /// Install the primary interrupt handler
    ///
    /// Interrupts are disabled first; call [`Hal::isr_enable`] afterwards.
    pub fn isr_register(&self, handler: &'p dyn Handler) {
        self.isr_disable();
        self.hapi.isr.register(handler);
    }

    /// Install the secondary interrupt handler
    pub fn isr_2_register(&self, handler: &'p dyn Handler) {
        self.isr_disable();
        self.hapi.isr_2.register(handler);
    }

    fn path_ready(&self, board: &B, path: Path) -> bool {
        let slot = match path {
            Path::Primary => &self.hapi.isr,
            Path::Secondary => &self.hapi.isr_2,
        };
        slot.is_registered() && board.vector(path).is_some()
    }

    /// Enable the board's interrupt paths
    ///
    /// Every path the board has needs a registered handler. On failure
    /// interrupts are left disabled.
    pub fn isr_enable(&mut self) -> Result<(), Error> {
        let ready = match self.hapi.board.as_ref() {
            Some(board) => match board.paths() {
                1 => self.path_ready(board, Path::Primary),
                2 => {
                    self.path_ready(board, Path::Primary)
                        && self.path_ready(board, Path::Secondary)
                }
                _ => false,
            },
            None => false,
        };
        if !ready {
            self.isr_disable();
            return Err(Error::State);
        }
        self.enable_paths()
    }

    /// Enable only the secondary interrupt path
    pub fn isr_2_enable(&mut self) -> Result<(), Error> {
        let ready = match self.hapi.board.as_ref() {
            Some(board) => board.paths() == 2 && self.path_ready(board, Path::Secondary),
            None => false,
        };
        if !ready {
            self.isr_disable();
            return Err(Error::State);
        }
        self.enable_paths()
    }

    fn enable_paths(&mut self) -> Result<(), Error> {
        let Some(board) = self.hapi.board.as_ref() else {
            return Err(Error::State);
        };
        let paths = board.paths();
        let mut vectors = [None; 2];
        vectors[0] = board.vector(Path::Primary);
        if paths == 2 {
            vectors[1] = board.vector(Path::Secondary);
        }
        for vector in vectors.into_iter().flatten() {
            self.hapi.pie.enable(vector)?;
        }
        self.hapi.isr.set_enabled(self.hapi.isr.is_registered());
        self.hapi.isr_2.set_enabled(paths == 2 && self.hapi.isr_2.is_registered());
        self.platform.cpu().enable_interrupts();
        Ok(())
    }

    /// Disable interrupts at the CPU
    pub fn isr_disable(&self) {
        self.platform.cpu().disable_interrupts();
        self.hapi.isr.set_enabled(false);
        self.hapi.isr_2.set_enabled(false);
    }

    /// True while the primary path is enabled
    pub fn isr_enabled(&self) -> bool {
        self.hapi.isr.is_enabled()
    }

    pub fn isr_2_enabled(&self) -> bool {
        self.hapi.isr_2.is_enabled()
    }

    /// Peak stopwatch ticks spent in the primary entry
    pub fn busy_peak(&self) -> u32 {
        self.hapi.busy.peak()
    }

    pub fn busy_meter(&self) -> &BusyMeter {
        &self.hapi.busy
    }

    /// Primary interrupt entry
    ///
    /// Runs the handler, clears the source, and records the time spent.
    /// Entering without a handler disables interrupts and idles the CPU.
    pub fn isr_run(&self) {
        let start = self.stopwatch.tic();
        self.isr_dispatch(&self.hapi.isr, Path::Primary);
        self.hapi.busy.record(self.stopwatch.toc(start));
    }

    /// Secondary interrupt entry
    pub fn isr_2_run(&self) {
        self.isr_dispatch(&self.hapi.isr_2, Path::Secondary);
    }

    fn isr_dispatch(&self, slot: &IsrSlot<'p>, path: Path) {
        let Some(handler) = slot.handler() else {
            self.isr_disable();
            self.platform.cpu().idle();
            return;
        };
        handler.run();
        if self.isr_clear(path).is_err() {
            self.isr_disable();
        }
    }

    fn isr_clear(&self, path: Path) -> Result<(), Error> {
        let board = self.board_ref()?;
        let vector = board.vector(path).ok_or(Error::State)?;
        board.isr_clear(self.platform, path)?;
        self.hapi.pie.acknowledge(vector)
    }

    /// Conversion record of a board ADC channel
    pub fn adc_data(&self, index: usize) -> Result<Conversion, Error> {
        self.board_ref()?.adc_data(index)
    }

    /// Raw result of a board ADC channel
    pub fn adc_read(&self, index: usize) -> Result<u16, Error> {
        self.board_ref()?.adc_read(self.platform, index)
    }

    pub fn wcs_data(&self, index: usize) -> Result<Conversion, Error> {
        self.board_ref()?.wcs_data(index)
    }

    /// Set a duty cycle (0..1) on a board PWM generator
    pub fn pwm_update(&self, num: u8, compare: Compare, duty: f32) -> Result<(), Error> {
        self.board_ref()?.pwm_update(self.platform, num, compare, duty)
    }
}

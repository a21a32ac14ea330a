//! Fast serial interface transport
//!
//! Master and slave agree on the link with a ping handshake before any data
//! moves. [`Fsi::run`] advances the handshake and is meant to be called from
//! the 1 kHz background tick:
//!
//! ```text
//!  master: IDLE ─ping 0─► WAIT_TAG0 ─ping 1─► WAIT_TAG1 ──────────────► OPERATION
//!  slave:  IDLE ────────► WAIT_TAG0 ─ping 0─► WAIT_TAG1 ─ping 1─► EXTRA_WAIT ─► OPERATION
//! ```
//!
//! In operation the transmitter sends tag-1 pings on the external trigger
//! and the receiver watchdog expects them; a missed ping or a receiver core
//! error drops the link back to IDLE.

use core::marker::PhantomData;

use hac_core::io::registry::PinMux;
use hac_core::silicon::Silicon;
use hac_core::{debug, info, warn, Error, PinCode, PinFun};
use hac_hal::fsi::{Events, FRAME_WORDS};
use hac_hal::sysctl::{Peripheral, SysCtl};
use hac_hal::FsiPort;

use crate::net::{Kind, Link, Net, State, Sys};

pub const CLOCK_MAX: u32 = 50_000_000;
/// Ticks of [`Fsi::run`] before a handshake starts over
pub const HANDSHAKE_TIMEOUT: u16 = 1000;
/// Ticks of [`Fsi::run`] spent in one handshake state
pub const STATE_TIMEOUT: u16 = 200;
/// External trigger source of the slave's pings, ePWM X-BAR TRIP5
pub const SLAVE_TRIGGER: u16 = 49;

const TAG0: u8 = 0;
const TAG1: u8 = 1;
/// Bits on the wire for a 16-word data frame
const DATA_FRAME_BITS: u32 = 296;
/// Receiver ping watchdog period
const WATCHDOG_DIV: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Role {
    Master,
    Slave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FsiConfig {
    pub role: Role,
    /// Transmit clock (Hz)
    pub clock_hz: u32,
    /// External ping trigger source of a master
    pub trigger: u16,
}

/// Link phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    Idle,
    WaitTag0,
    WaitTag1,
    /// Slave only: one tick of grace before data may flow
    ExtraWait,
    Operation,
}

/// Data frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FsiFrame {
    /// User-defined frame identifier
    pub user: u8,
    pub data: [u16; FRAME_WORDS],
}

/// FSI-A transmitter and receiver
pub struct Fsi<'p, S: Silicon, P: FsiPort, C: SysCtl> {
    port: &'p P,
    sys: Sys<'p, C>,
    link: Link<4>,
    role: Role,
    trigger: u16,
    prescaler: u16,
    watchdog: u32,
    /// Polls allowed for one data frame to leave
    tx_timeout: u32,
    phase: Phase,
    /// Ticks since the handshake started
    elapsed: u16,
    /// Ticks in the current handshake state
    in_state: u16,
    _silicon: PhantomData<S>,
}

impl<'p, S: Silicon, P: FsiPort, C: SysCtl> Fsi<'p, S, P, C> {
    pub fn new(port: &'p P, sys: Sys<'p, C>) -> Result<Self, Error> {
        if !S::HAS_FSI {
            return Err(Error::Unavailable);
        }
        Ok(Self {
            port,
            sys,
            link: Link::new(Kind::Fsi),
            role: Role::Master,
            trigger: 0,
            prescaler: 1,
            watchdog: 0,
            tx_timeout: 0,
            phase: Phase::Idle,
            elapsed: 0,
            in_state: 0,
            _silicon: PhantomData,
        })
    }

    /// Claim transmit clock, transmit D0, receive clock and receive D0
    pub fn connect(
        &mut self,
        pins: &mut dyn PinMux,
        tx_clk: PinCode,
        tx_d0: PinCode,
        rx_clk: PinCode,
        rx_d0: PinCode,
    ) -> Result<(), Error> {
        self.link.connect(
            pins,
            [tx_clk, tx_d0, rx_clk, rx_d0],
            &[
                PinFun::FSITXA_CLK,
                PinFun::FSITXA_D0,
                PinFun::FSIRXA_CLK,
                PinFun::FSIRXA_D0,
            ],
        )
    }

    pub fn disconnect(&mut self, pins: &mut dyn PinMux) -> Result<(), Error> {
        self.link.disconnect(pins)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Advance the handshake or supervise the running link
    pub fn run(&mut self) -> Result<Phase, Error> {
        self.link.ensure_open()?;
        let before = self.phase;
        match (self.role, self.phase) {
            (_, Phase::Operation) => self.supervise(),
            (Role::Master, Phase::Idle) => {
                self.port.set_software_mode();
                self.port.flush();
                self.port.send_ping(TAG0);
                self.enter_handshake();
            }
            (Role::Slave, Phase::Idle) => {
                self.port.set_software_mode();
                self.enter_handshake();
            }
            (Role::Master, _) => self.handshake_master(),
            (Role::Slave, _) => self.handshake_slave(),
        }
        if self.phase != before {
            debug!("FSI {} -> {}", before, self.phase);
            if self.phase == Phase::Operation {
                info!("FSI link up as {}", self.role);
            }
        }
        Ok(self.phase)
    }

    fn enter_handshake(&mut self) {
        self.phase = Phase::WaitTag0;
        self.elapsed = 0;
        self.in_state = 0;
    }

    fn handshake_master(&mut self) {
        self.elapsed = self.elapsed.saturating_add(1);
        self.in_state = self.in_state.saturating_add(1);
        match self.phase {
            Phase::WaitTag0 => {
                if self.elapsed > HANDSHAKE_TIMEOUT || self.in_state > STATE_TIMEOUT {
                    self.phase = Phase::Idle;
                } else if self.ping_received(TAG0) {
                    self.port.send_ping(TAG1);
                    self.phase = Phase::WaitTag1;
                    self.in_state = 0;
                }
            }
            Phase::WaitTag1 => {
                if self.elapsed > HANDSHAKE_TIMEOUT {
                    self.phase = Phase::Idle;
                } else if self.in_state > STATE_TIMEOUT {
                    self.port.send_ping(TAG1);
                    self.in_state = 0;
                } else if self.ping_received(TAG1) {
                    self.set_ping_mode();
                    self.phase = Phase::Operation;
                }
            }
            _ => {}
        }
    }

    fn handshake_slave(&mut self) {
        self.elapsed = self.elapsed.saturating_add(1);
        self.in_state = self.in_state.saturating_add(1);
        match self.phase {
            Phase::WaitTag0 => {
                if self.elapsed > HANDSHAKE_TIMEOUT || self.in_state > STATE_TIMEOUT {
                    self.phase = Phase::Idle;
                } else if self.ping_received(TAG0) {
                    self.port.flush();
                    self.port.send_ping(TAG0);
                    self.phase = Phase::WaitTag1;
                    self.in_state = 0;
                }
            }
            Phase::WaitTag1 => {
                if self.elapsed > HANDSHAKE_TIMEOUT {
                    self.phase = Phase::Idle;
                } else if self.in_state > STATE_TIMEOUT {
                    self.port.flush();
                    self.port.send_ping(TAG0);
                    self.in_state = 0;
                } else if self.ping_received(TAG1) {
                    self.port.send_ping(TAG1);
                    self.set_ping_mode();
                    // Hold data back for one tick so it cannot collide with
                    // the master's last handshake step
                    self.phase = Phase::ExtraWait;
                }
            }
            Phase::ExtraWait => self.phase = Phase::Operation,
            _ => {}
        }
    }

    fn supervise(&mut self) {
        let events = self.port.rx_events();
        if events.contains(Events::PING_WD_TIMEOUT) {
            warn!("FSI ping watchdog expired");
            self.port.clear_rx_events(Events::PING_WD_TIMEOUT);
            self.phase = Phase::Idle;
        } else if self.port.rx_core_error() {
            warn!("FSI receiver core error");
            self.port.clear_rx_events(events);
            self.port.reset_rx();
            self.phase = Phase::Idle;
        }
    }

    /// True when the only pending receive events are a ping carrying `tag`
    ///
    /// Receive events are consumed either way.
    fn ping_received(&self, tag: u8) -> bool {
        let events = self.port.rx_events();
        let tag_rx = self.port.rx_ping_tag();
        self.port.clear_rx_events(events);
        events == Events::PING_FRAME.union(Events::FRAME_DONE) && tag_rx == tag
    }

    fn set_ping_mode(&self) {
        self.port.set_ping_mode(self.trigger, self.watchdog);
    }
}

impl<S: Silicon, P: FsiPort, C: SysCtl> Net for Fsi<'_, S, P, C> {
    const KIND: Kind = Kind::Fsi;
    type Config = FsiConfig;
    type Frame<'f> = FsiFrame;

    fn state(&self) -> State {
        self.link.state()
    }

    fn open(&mut self, config: &FsiConfig) -> Result<(), Error> {
        self.link.begin_open()?;
        let cpu_hz = self.sys.clocks().cpu;
        if config.clock_hz == 0 || config.clock_hz > CLOCK_MAX || config.clock_hz > cpu_hz {
            return Err(Error::Range);
        }
        let prescaler = u16::try_from(cpu_hz / config.clock_hz).map_err(|_| Error::Range)?;

        self.sys.enable(Peripheral::FsiRx(0));
        self.sys.enable(Peripheral::FsiTx(0));
        self.port.init(prescaler);

        self.role = config.role;
        self.trigger = match config.role {
            Role::Master => config.trigger,
            Role::Slave => SLAVE_TRIGGER,
        };
        self.prescaler = prescaler;
        self.watchdog = cpu_hz / WATCHDOG_DIV;
        self.tx_timeout = 2 * (DATA_FRAME_BITS * 1_000_000 / config.clock_hz).max(1);
        self.phase = Phase::Idle;
        self.link.set_open();
        info!(
            "FSI open as {} at {} Hz, prescaler {}",
            config.role,
            config.clock_hz,
            prescaler
        );
        Ok(())
    }

    fn close(&mut self) -> Result<(), Error> {
        if self.link.close()? {
            self.port.set_software_mode();
            self.port.reset_rx();
            self.sys.disable(Peripheral::FsiTx(0));
            self.sys.disable(Peripheral::FsiRx(0));
            self.phase = Phase::Idle;
        }
        Ok(())
    }

    /// Run the link, then take the pending data frame if there is one
    ///
    /// Reports zero frames while the handshake is still running or when the
    /// frame failed its CRC.
    fn read(&mut self, frames: &mut [FsiFrame]) -> Result<usize, Error> {
        self.run()?;
        let Some(frame) = frames.first_mut() else {
            return Ok(0);
        };
        if self.phase != Phase::Operation {
            return Ok(0);
        }
        let events = self.port.rx_events();
        if events.contains(Events::CRC_ERR) {
            self.port.clear_rx_events(Events::CRC_ERR);
            return Ok(0);
        }
        let data_events = Events::DATA_FRAME.union(Events::FRAME_DONE);
        if !events.intersects(data_events) || usize::from(self.port.rx_word_count()) != FRAME_WORDS
        {
            return Ok(0);
        }
        self.port.clear_rx_events(data_events);
        frame.user = self.port.rx_user_data();
        self.port.read_rx(&mut frame.data);
        Ok(1)
    }

    /// Send data frames between pings; nothing is sent before the
    /// handshake completed
    fn write(&mut self, frames: &mut [FsiFrame]) -> Result<usize, Error> {
        self.link.ensure_open()?;
        if self.phase != Phase::Operation {
            return Ok(0);
        }
        let port = self.port;
        let mut sent = 0;
        for frame in frames.iter() {
            port.set_software_mode();
            port.clear_tx_events(Events::FRAME_DONE);
            port.send_data(frame.user, &frame.data);
            let done = self
                .sys
                .wait(self.tx_timeout, || port.tx_events().contains(Events::FRAME_DONE));
            port.clear_tx_events(Events::FRAME_DONE);
            self.set_ping_mode();
            if done.is_err() {
                warn!("FSI data frame {} not confirmed", frame.user);
                break;
            }
            sent += 1;
        }
        Ok(sent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hac_core::id::Identity;
    use hac_core::io::registry::PinRegistry;
    use hac_core::silicon::f28004x::pins as p4;
    use hac_core::silicon::{F2803x, F28004x};
    use hac_drivers::Clock;
    use hac_hal::Platform;
    use hac_hal_sim::fsi::{SimFsi, TxMode};
    use hac_hal_sim::SimPlatform;
    use std::vec::Vec;

    const MASTER: FsiConfig = FsiConfig {
        role: Role::Master,
        clock_hz: 50_000_000,
        trigger: 8,
    };

    fn connect<S: Silicon, P: FsiPort, C: SysCtl>(
        p: &SimPlatform,
        fsi: &mut Fsi<'_, S, P, C>,
    ) {
        let mut reg = PinRegistry::<F28004x, _>::new(p.gpio(), p.cpu());
        reg.reset(&Identity::virtual_for::<F28004x>());
        fsi.connect(
            &mut reg,
            p4::IO7_FSITXA_CLK,
            p4::IO6_FSITXA_D0,
            p4::IO4_FSIRXA_CLK,
            p4::IO3_FSIRXA_D0,
        )
        .unwrap();
    }

    #[test]
    fn test_open_derives_prescaler_and_timeouts() {
        let p = SimPlatform::new();
        let clock = Clock::init::<F28004x, _>(p.cpu(), p.sysctl(), p.timers()).unwrap();
        let mut fsi = Fsi::<F28004x, _, _>::new(p.fsi(), Sys::new(&clock, p.cpu())).unwrap();
        connect(&p, &mut fsi);

        assert_eq!(
            fsi.open(&FsiConfig {
                clock_hz: 60_000_000,
                ..MASTER
            }),
            Err(Error::Range)
        );
        fsi.open(&MASTER).unwrap();
        assert_eq!(p.sim_fsi().prescaler(), Some(2));
        assert!(p.sim_sysctl().is_enabled(Peripheral::FsiTx(0)));
        assert_eq!(fsi.tx_timeout, 2 * 5);
        assert_eq!(fsi.watchdog, 10_000_000);

        fsi.close().unwrap();
        assert!(!p.sim_sysctl().is_enabled(Peripheral::FsiRx(0)));
        assert_eq!(fsi.run(), Err(Error::State));
    }

    #[test]
    fn test_unavailable_without_fsi() {
        let p = SimPlatform::new();
        let clock = Clock::init::<F28004x, _>(p.cpu(), p.sysctl(), p.timers()).unwrap();
        assert!(Fsi::<F2803x, _, _>::new(p.fsi(), Sys::new(&clock, p.cpu())).is_err());
    }

    #[test]
    fn test_master_and_slave_handshake() {
        let (a, b) = SimFsi::pair();
        let pm = SimPlatform::new().with_fsi(a);
        let ps = SimPlatform::new().with_fsi(b);
        let cm = Clock::init::<F28004x, _>(pm.cpu(), pm.sysctl(), pm.timers()).unwrap();
        let cs = Clock::init::<F28004x, _>(ps.cpu(), ps.sysctl(), ps.timers()).unwrap();

        let mut master = Fsi::<F28004x, _, _>::new(pm.fsi(), Sys::new(&cm, pm.cpu())).unwrap();
        let mut slave = Fsi::<F28004x, _, _>::new(ps.fsi(), Sys::new(&cs, ps.cpu())).unwrap();
        connect(&pm, &mut master);
        connect(&ps, &mut slave);
        master.open(&MASTER).unwrap();
        slave
            .open(&FsiConfig {
                role: Role::Slave,
                ..MASTER
            })
            .unwrap();

        let mut trace = Vec::new();
        for _ in 0..4 {
            let m = master.run().unwrap();
            let s = slave.run().unwrap();
            trace.push((m, s));
        }
        assert_eq!(
            trace,
            vec![
                (Phase::WaitTag0, Phase::WaitTag0),
                (Phase::WaitTag0, Phase::WaitTag1),
                (Phase::WaitTag1, Phase::ExtraWait),
                (Phase::Operation, Phase::Operation),
            ]
        );
        assert_eq!(pm.sim_fsi().sent_pings(), vec![0, 1]);
        assert_eq!(ps.sim_fsi().sent_pings(), vec![0, 1]);
        assert_eq!(
            ps.sim_fsi().mode(),
            TxMode::Ping {
                trigger: SLAVE_TRIGGER,
                watchdog: 10_000_000
            }
        );

        let mut data = [0u16; FRAME_WORDS];
        data[0] = 0xBEEF;
        data[15] = 7;
        let mut out = [FsiFrame { user: 3, data }];
        assert_eq!(master.write(&mut out), Ok(1));
        assert_eq!(
            pm.sim_fsi().mode(),
            TxMode::Ping {
                trigger: 8,
                watchdog: 10_000_000
            }
        );

        let mut inp = [FsiFrame::default()];
        assert_eq!(slave.read(&mut inp), Ok(1));
        assert_eq!(inp[0], out[0]);
        assert_eq!(slave.read(&mut inp), Ok(0));

        ps.sim_fsi().corrupt_rx();
        assert_eq!(slave.read(&mut inp), Ok(0));
        assert!(!ps.sim_fsi().rx_events().contains(Events::CRC_ERR));
    }

    #[test]
    fn test_handshake_gives_up_without_peer() {
        let p = SimPlatform::new().with_fsi(SimFsi::looped());
        let clock = Clock::init::<F28004x, _>(p.cpu(), p.sysctl(), p.timers()).unwrap();
        let mut fsi = Fsi::<F28004x, _, _>::new(p.fsi(), Sys::new(&clock, p.cpu())).unwrap();
        connect(&p, &mut fsi);
        fsi.open(&FsiConfig {
            role: Role::Slave,
            ..MASTER
        })
        .unwrap();
        p.sim_fsi().unplug();

        assert_eq!(fsi.run(), Ok(Phase::WaitTag0));
        for _ in 0..STATE_TIMEOUT {
            assert_eq!(fsi.run(), Ok(Phase::WaitTag0));
        }
        assert_eq!(fsi.run(), Ok(Phase::Idle));

        let mut out = [FsiFrame::default()];
        assert_eq!(fsi.write(&mut out), Ok(0));
        assert_eq!(fsi.read(&mut out), Ok(0));
    }

    #[test]
    fn test_operation_drops_to_idle_on_faults() {
        let (a, b) = SimFsi::pair();
        let pm = SimPlatform::new().with_fsi(a);
        let ps = SimPlatform::new().with_fsi(b);
        let cm = Clock::init::<F28004x, _>(pm.cpu(), pm.sysctl(), pm.timers()).unwrap();
        let cs = Clock::init::<F28004x, _>(ps.cpu(), ps.sysctl(), ps.timers()).unwrap();
        let mut master = Fsi::<F28004x, _, _>::new(pm.fsi(), Sys::new(&cm, pm.cpu())).unwrap();
        let mut slave = Fsi::<F28004x, _, _>::new(ps.fsi(), Sys::new(&cs, ps.cpu())).unwrap();
        connect(&pm, &mut master);
        connect(&ps, &mut slave);
        master.open(&MASTER).unwrap();
        slave
            .open(&FsiConfig {
                role: Role::Slave,
                ..MASTER
            })
            .unwrap();
        for _ in 0..4 {
            master.run().unwrap();
            slave.run().unwrap();
        }
        assert_eq!(master.phase(), Phase::Operation);

        pm.sim_fsi().expire_watchdog();
        assert_eq!(master.run(), Ok(Phase::Idle));

        ps.sim_fsi().fault_rx_core();
        let resets = ps.sim_fsi().rx_resets();
        assert_eq!(slave.run(), Ok(Phase::Idle));
        assert_eq!(ps.sim_fsi().rx_resets(), resets + 1);
    }
}

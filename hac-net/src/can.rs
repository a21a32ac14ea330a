//! CAN transport
//!
//! Extended (29-bit) identifiers only. The 32 mailboxes are split as:
//!
//! | Mailboxes | Use                    |
//! |-----------|------------------------|
//! | 1..=20    | regular receive        |
//! | 21..=30   | regular transmit       |
//! | 31        | low-latency receive    |
//! | 32        | low-latency transmit   |
//!
//! `open` programs the regular mailboxes with the acceptance filter it is
//! given; the low-latency pair stays disabled until [`Can::setup`] selects
//! it. Standard-identifier and remote frames are dropped on receive.

use core::marker::PhantomData;

use hac_core::io::registry::PinMux;
use hac_core::silicon::{CanLimits, Silicon};
use hac_core::{debug, info, warn, Error, PinCode, PinFun};
use hac_hal::can::{BitTiming, MailboxConfig, MailboxDir, Message};
use hac_hal::sysctl::{Peripheral, SysCtl};
use hac_hal::CanPort;

use crate::net::{Kind, Link, Net, State, Sys};

pub const BITRATE_MAX: u32 = 1_000_000;
/// Extended identifier bits
pub const ID_MASK: u32 = 0x1FFF_FFFF;
/// Payload capacity
pub const DATA_MAX: usize = 8;

pub const MAILBOXES: u8 = 32;
const RX_FIRST: u8 = 1;
const RX_LAST: u8 = 20;
const TX_FIRST: u8 = 21;
const TX_LAST: u8 = 30;
/// Low-latency receive mailbox
pub const RX_LOW: u8 = 31;
/// Low-latency transmit mailbox
pub const TX_LOW: u8 = 32;

/// Mailbox selections for [`Setup::mailboxes`], bit `n - 1` is mailbox `n`
pub mod select {
    pub const RX: u32 = 0x000F_FFFF;
    pub const TX: u32 = 0x3FF0_0000;
    pub const RX_LOW: u32 = 1 << 30;
    pub const TX_LOW: u32 = 1 << 31;
    pub const REGULAR: u32 = RX | TX;
    pub const LOW_LATENCY: u32 = RX_LOW | TX_LOW;
}

const SYNC_QUANTA: u16 = 1;
/// Configuration-change acknowledge budget in bit times
const ACK_BITS: u32 = 20;
const ACK_POLLS_MIN: u32 = 10;

/// Solved bit timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    /// Time quanta per bit
    pub nq: u16,
    pub brp: u16,
    pub tseg1: u16,
    pub tseg2: u16,
    pub sjw: u16,
    /// Sample point (%)
    pub sample_point: u16,
    /// Absolute bit-rate error (bps)
    pub error: u32,
}

impl Timing {
    pub fn is_exact(&self) -> bool {
        self.error == 0
    }

    pub fn registers(&self) -> BitTiming {
        BitTiming {
            brp: self.brp,
            tseg1: self.tseg1,
            tseg2: self.tseg2,
            sjw: self.sjw,
        }
    }
}

fn div_round(n: u64, d: u64) -> u64 {
    (n + d / 2) / d
}

/// Search the bit timing closest to `bitrate`
///
/// Every quanta count and phase split allowed by `limits` is tried. The
/// lowest absolute bit-rate error wins; between equal errors the higher
/// sample point wins, up to `limits.max_sample_point`.
///
/// # Arguments
/// * `clk` - CAN module clock (Hz)
/// * `bitrate` - Target bit rate (bps)
///
/// # Returns
/// `Range` when no parameter set satisfies the limits
pub fn bit_timing(limits: &CanLimits, clk: u32, bitrate: u32) -> Result<Timing, Error> {
    if clk == 0 || bitrate == 0 {
        return Err(Error::Range);
    }
    let mut best: Option<Timing> = None;

    for nq in limits.nq.0..=limits.nq.1 {
        let brp = div_round(u64::from(clk), u64::from(nq) * u64::from(bitrate));
        if brp < u64::from(limits.brp.0) || brp > u64::from(limits.brp.1) {
            continue;
        }
        let actual = div_round(u64::from(clk), u64::from(nq) * brp);
        let error = actual.abs_diff(u64::from(bitrate)) as u32;

        for tseg2 in limits.tseg2.0..=limits.tseg2.1 {
            let Some(tseg1) = nq.checked_sub(SYNC_QUANTA + tseg2) else {
                continue;
            };
            if tseg1 < limits.tseg1.0 || tseg1 > limits.tseg1.1 {
                continue;
            }
            let sample_point =
                div_round(u64::from(SYNC_QUANTA + tseg1) * 100, u64::from(nq)) as u16;
            if sample_point > limits.max_sample_point {
                continue;
            }
            let candidate = Timing {
                nq,
                brp: brp as u16,
                tseg1,
                tseg2,
                sjw: tseg2.max(limits.sjw.0).min(limits.sjw.1),
                sample_point,
                error,
            };
            let better = match best {
                None => true,
                Some(b) => {
                    error < b.error || (error == b.error && sample_point > b.sample_point)
                }
            };
            if better {
                best = Some(candidate);
            }
        }
    }
    best.ok_or(Error::Range)
}

/// Open parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CanConfig {
    /// Bus speed (bps)
    pub bitrate: u32,
    /// Acceptance identifier of the regular receive mailboxes
    pub id: u32,
    /// Acceptance mask, 1 bits must match `id`
    pub mask: u32,
}

/// Extended data frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CanFrame {
    /// 29-bit identifier
    pub id: u32,
    pub len: u8,
    pub data: [u8; DATA_MAX],
}

impl CanFrame {
    pub fn new(id: u32, payload: &[u8]) -> Result<Self, Error> {
        if payload.len() > DATA_MAX {
            return Err(Error::Range);
        }
        let mut data = [0; DATA_MAX];
        data[..payload.len()].copy_from_slice(payload);
        Ok(Self {
            id: id & ID_MASK,
            len: payload.len() as u8,
            data,
        })
    }

    pub fn payload(&self) -> &[u8] {
        &self.data[..usize::from(self.len).min(DATA_MAX)]
    }

    fn message(&self) -> Result<Message, Error> {
        if usize::from(self.len) > DATA_MAX {
            return Err(Error::Range);
        }
        Ok(Message {
            id: self.id & ID_MASK,
            extended: true,
            remote: false,
            len: self.len,
            data: self.data,
        })
    }
}

/// Mailbox re-programming request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Setup {
    /// Mailboxes to touch, see [`select`]
    pub mailboxes: u32,
    /// False leaves the selected mailboxes disabled
    pub enable: bool,
    /// Acceptance identifier of selected receive mailboxes
    pub id: u32,
    /// Acceptance mask of selected receive mailboxes
    pub mask: u32,
    /// Frame preloaded into the low-latency transmit mailbox
    pub frame: Option<CanFrame>,
}

/// Low-latency transmit state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TxStatus {
    /// Request pending that this driver did not trigger
    Error,
    /// Triggered frame not yet sent
    Pending,
    /// Triggered frame left the mailbox since the last query
    Sent,
    /// Idle
    Ready,
}

impl TxStatus {
    pub const fn code(self) -> i16 {
        match self {
            TxStatus::Error => -1,
            TxStatus::Pending => 0,
            TxStatus::Sent => 1,
            TxStatus::Ready => 2,
        }
    }
}

fn is_receive(mbox: u8) -> bool {
    (RX_FIRST..=RX_LAST).contains(&mbox) || mbox == RX_LOW
}

/// CAN controller transport
pub struct Can<'p, S: Silicon, P: CanPort, C: SysCtl> {
    port: &'p P,
    sys: Sys<'p, C>,
    index: u8,
    link: Link<2>,
    timing: Option<Timing>,
    /// Low-latency send triggered and not yet reported
    trig: bool,
    _silicon: PhantomData<S>,
}

impl<'p, S: Silicon, P: CanPort, C: SysCtl> Can<'p, S, P, C> {
    /// Transport on controller `index` (0 is CAN-A)
    pub fn new(port: &'p P, sys: Sys<'p, C>, index: u8) -> Result<Self, Error> {
        if index >= S::CAN_MODULES {
            return Err(Error::Unavailable);
        }
        Ok(Self {
            port,
            sys,
            index,
            link: Link::new(Kind::Can),
            timing: None,
            trig: false,
            _silicon: PhantomData,
        })
    }

    pub fn index(&self) -> u8 {
        self.index
    }

    /// Bit timing in use while open
    pub fn timing(&self) -> Option<Timing> {
        self.timing
    }

    pub fn pins(&self) -> &[PinCode; 2] {
        self.link.io()
    }

    fn expected(&self) -> [PinFun; 2] {
        if self.index == 0 {
            [PinFun::CANA_TX, PinFun::CANA_RX]
        } else {
            [PinFun::CANB_TX, PinFun::CANB_RX]
        }
    }

    pub fn connect(&mut self, pins: &mut dyn PinMux, tx: PinCode, rx: PinCode) -> Result<(), Error> {
        let expected = self.expected();
        self.link.connect(pins, [tx, rx], &expected)
    }

    pub fn disconnect(&mut self, pins: &mut dyn PinMux) -> Result<(), Error> {
        self.link.disconnect(pins)
    }

    /// Re-program the mailboxes selected by `setup.mailboxes`
    pub fn setup(&mut self, setup: &Setup) -> Result<(), Error> {
        self.link.ensure_open()?;
        let frame = match setup.frame {
            Some(f) => Some(f.message()?),
            None => None,
        };
        let (port, index) = (self.port, self.index);

        for mbox in 1..=MAILBOXES {
            if setup.mailboxes & (1 << (mbox - 1)) == 0 {
                continue;
            }
            port.clear_mailbox(index, mbox);
            if !setup.enable {
                continue;
            }
            if is_receive(mbox) {
                let cfg = MailboxConfig {
                    dir: MailboxDir::Receive,
                    id: setup.id & ID_MASK,
                    mask: setup.mask & ID_MASK,
                    overwrite_protect: true,
                };
                port.configure_mailbox(index, mbox, &cfg);
            } else {
                let cfg = MailboxConfig {
                    dir: MailboxDir::Transmit,
                    id: 0,
                    mask: 0,
                    overwrite_protect: false,
                };
                port.configure_mailbox(index, mbox, &cfg);
                if let (TX_LOW, Some(msg)) = (mbox, frame.as_ref()) {
                    port.load(index, mbox, msg);
                }
            }
        }
        if setup.mailboxes & select::TX_LOW != 0 {
            self.trig = false;
        }
        debug!(
            "CAN{} mailboxes {:x} {}",
            index,
            setup.mailboxes,
            if setup.enable { "enabled" } else { "disabled" }
        );
        Ok(())
    }

    /// Take a frame from the low-latency receive mailbox
    pub fn get(&mut self) -> Result<Option<CanFrame>, Error> {
        self.link.ensure_open()?;
        Ok(self.take(RX_LOW))
    }

    /// Trigger the low-latency transmit mailbox
    ///
    /// `None` re-sends the frame already loaded (see [`Setup::frame`]).
    ///
    /// # Returns
    /// False while a previous request is still pending
    pub fn send(&mut self, frame: Option<&CanFrame>) -> Result<bool, Error> {
        self.link.ensure_open()?;
        let msg = match frame {
            Some(f) => Some(f.message()?),
            None => None,
        };
        if self.port.tx_pending(self.index, TX_LOW) {
            return Ok(false);
        }
        if let Some(msg) = msg {
            self.port.load(self.index, TX_LOW, &msg);
        }
        self.port.request_tx(self.index, TX_LOW);
        self.trig = true;
        Ok(true)
    }

    /// State of the low-latency transmit mailbox
    ///
    /// `Sent` is reported once per triggered frame.
    pub fn status(&mut self) -> Result<TxStatus, Error> {
        self.link.ensure_open()?;
        let pending = self.port.tx_pending(self.index, TX_LOW);
        let status = if self.trig {
            self.trig = pending;
            if pending {
                TxStatus::Pending
            } else {
                TxStatus::Sent
            }
        } else if pending {
            TxStatus::Error
        } else {
            TxStatus::Ready
        };
        Ok(status)
    }

    fn take(&self, mbox: u8) -> Option<CanFrame> {
        let msg = self.port.receive(self.index, mbox)?;
        if !msg.extended || msg.remote {
            return None;
        }
        let len = msg.len.min(DATA_MAX as u8);
        Some(CanFrame {
            id: msg.id & ID_MASK,
            len,
            data: msg.data,
        })
    }

    /// Enter or leave configuration mode
    fn change_config(&self, on: bool, bitrate: u32) -> Result<(), Error> {
        let (port, index) = (self.port, self.index);
        let polls = (ACK_BITS * 1_000_000 / bitrate).max(ACK_POLLS_MIN);
        port.request_config(index, on);
        self.sys
            .wait(polls, || port.config_acknowledged(index) == on)
    }

    fn configure(&mut self, timing: &Timing, bitrate: u32) -> Result<(), Error> {
        self.port.init(self.index);
        self.change_config(true, bitrate)?;
        self.port.set_bit_timing(self.index, &timing.registers());
        self.change_config(false, bitrate)
    }
}

impl<S: Silicon, P: CanPort, C: SysCtl> Net for Can<'_, S, P, C> {
    const KIND: Kind = Kind::Can;
    type Config = CanConfig;
    type Frame<'f> = CanFrame;

    fn state(&self) -> State {
        self.link.state()
    }

    fn open(&mut self, config: &CanConfig) -> Result<(), Error> {
        self.link.begin_open()?;
        if config.bitrate == 0 || config.bitrate > BITRATE_MAX {
            return Err(Error::Range);
        }
        let timing = bit_timing(&S::CAN_LIMITS, self.sys.clocks().can, config.bitrate)?;
        if !timing.is_exact() {
            warn!(
                "CAN{} bit rate off by {} bps",
                self.index,
                timing.error
            );
        }

        self.sys.enable(Peripheral::Can(self.index));
        if let Err(e) = self.configure(&timing, config.bitrate) {
            warn!("CAN{} configuration change not acknowledged", self.index);
            self.sys.disable(Peripheral::Can(self.index));
            return Err(e);
        }

        self.link.set_open();
        self.timing = Some(timing);
        self.trig = false;
        self.setup(&Setup {
            mailboxes: select::REGULAR,
            enable: true,
            id: config.id,
            mask: config.mask,
            frame: None,
        })?;
        info!(
            "CAN{} open at {} bps, {} quanta, sample point {}%",
            self.index,
            config.bitrate,
            timing.nq,
            timing.sample_point
        );
        Ok(())
    }

    fn close(&mut self) -> Result<(), Error> {
        if self.link.close()? {
            self.port.init(self.index);
            self.sys.disable(Peripheral::Can(self.index));
            self.timing = None;
            self.trig = false;
        }
        Ok(())
    }

    /// Drain regular receive mailboxes from 20 down into `frames`
    fn read(&mut self, frames: &mut [CanFrame]) -> Result<usize, Error> {
        self.link.ensure_open()?;
        let mut count = 0;
        for mbox in (RX_FIRST..=RX_LAST).rev() {
            if count == frames.len() {
                break;
            }
            if let Some(frame) = self.take(mbox) {
                frames[count] = frame;
                count += 1;
            }
        }
        Ok(count)
    }

    /// Queue `frames` on free regular transmit mailboxes from 30 down
    fn write(&mut self, frames: &mut [CanFrame]) -> Result<usize, Error> {
        self.link.ensure_open()?;
        let mut queued = 0;
        for mbox in (TX_FIRST..=TX_LAST).rev() {
            let Some(frame) = frames.get(queued) else {
                break;
            };
            if self.port.tx_pending(self.index, mbox) {
                continue;
            }
            let msg = frame.message()?;
            self.port.load(self.index, mbox, &msg);
            self.port.request_tx(self.index, mbox);
            queued += 1;
        }
        Ok(queued)
    }
}

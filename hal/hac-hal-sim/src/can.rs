//! Simulated CAN controllers
//!
//! Each controller keeps 32 mailboxes. A transmit request completes at
//! once: the frame is appended to the bus log and, with loopback enabled,
//! delivered to the lowest-numbered matching receive mailbox of the same
//! controller.

use std::cell::RefCell;

use hac_hal::can::{BitTiming, MailboxConfig, MailboxDir, Message};
use hac_hal::CanPort;

/// Mailboxes per controller
pub const MAILBOXES: usize = 32;
const CONTROLLERS: usize = 2;

#[derive(Debug, Clone, Copy, Default)]
struct Mailbox {
    cfg: Option<MailboxConfig>,
    rx: Option<Message>,
    tx: Option<Message>,
    pending: bool,
}

#[derive(Debug, Clone)]
struct Controller {
    inits: u32,
    config_requested: bool,
    ack_delay: u32,
    polls: u32,
    timing: Option<BitTiming>,
    mailboxes: [Mailbox; MAILBOXES],
    loopback: bool,
    hold_tx: bool,
    bus: Vec<Message>,
}

impl Controller {
    fn new() -> Self {
        Self {
            inits: 0,
            config_requested: false,
            ack_delay: 0,
            polls: 0,
            timing: None,
            mailboxes: [Mailbox::default(); MAILBOXES],
            loopback: false,
            hold_tx: false,
            bus: Vec::new(),
        }
    }

    fn deliver(&mut self, msg: &Message) -> bool {
        for mbox in self.mailboxes.iter_mut() {
            let Some(cfg) = mbox.cfg else { continue };
            if cfg.dir != MailboxDir::Receive {
                continue;
            }
            if (msg.id & cfg.mask) != (cfg.id & cfg.mask) {
                continue;
            }
            if mbox.rx.is_some() && cfg.overwrite_protect {
                continue;
            }
            mbox.rx = Some(*msg);
            return true;
        }
        false
    }

    fn transmit(&mut self, slot: usize) {
        let Some(msg) = self.mailboxes[slot].tx else {
            return;
        };
        self.mailboxes[slot].pending = false;
        self.bus.push(msg);
        if self.loopback {
            self.deliver(&msg);
        }
    }
}

#[derive(Debug)]
pub struct SimCan {
    controllers: RefCell<Vec<Controller>>,
}

impl Default for SimCan {
    fn default() -> Self {
        Self::new()
    }
}

fn mslot(mbox: u8) -> usize {
    usize::from(mbox.saturating_sub(1)) % MAILBOXES
}

impl SimCan {
    pub fn new() -> Self {
        Self {
            controllers: RefCell::new(vec![Controller::new(); CONTROLLERS]),
        }
    }

    /// Route transmitted frames back to the controller's receive mailboxes
    pub fn set_loopback(&self, index: u8, on: bool) {
        self.controllers.borrow_mut()[usize::from(index)].loopback = on;
    }

    /// Number of polls before a configuration request is acknowledged
    pub fn set_ack_delay(&self, index: u8, polls: u32) {
        self.controllers.borrow_mut()[usize::from(index)].ack_delay = polls;
    }

    /// Keep transmit requests pending until [`SimCan::release_tx`]
    pub fn hold_tx(&self, index: u8, hold: bool) {
        self.controllers.borrow_mut()[usize::from(index)].hold_tx = hold;
    }

    /// Complete every pending transmit request
    pub fn release_tx(&self, index: u8) {
        let mut controllers = self.controllers.borrow_mut();
        let c = &mut controllers[usize::from(index)];
        for slot in 0..MAILBOXES {
            if c.mailboxes[slot].pending {
                c.transmit(slot);
            }
        }
    }

    /// Present a frame from a peer on the bus
    pub fn inject(&self, index: u8, msg: Message) -> bool {
        self.controllers.borrow_mut()[usize::from(index)].deliver(&msg)
    }

    /// Frames transmitted so far
    pub fn bus(&self, index: u8) -> Vec<Message> {
        self.controllers.borrow()[usize::from(index)].bus.clone()
    }

    pub fn timing(&self, index: u8) -> Option<BitTiming> {
        self.controllers.borrow()[usize::from(index)].timing
    }

    pub fn mailbox_config(&self, index: u8, mbox: u8) -> Option<MailboxConfig> {
        self.controllers.borrow()[usize::from(index)].mailboxes[mslot(mbox)].cfg
    }

    pub fn init_count(&self, index: u8) -> u32 {
        self.controllers.borrow()[usize::from(index)].inits
    }
}

impl CanPort for SimCan {
    fn init(&self, index: u8) {
        let mut controllers = self.controllers.borrow_mut();
        let c = &mut controllers[usize::from(index)];
        c.inits += 1;
        c.config_requested = false;
        c.mailboxes = [Mailbox::default(); MAILBOXES];
    }

    fn request_config(&self, index: u8, on: bool) {
        let mut controllers = self.controllers.borrow_mut();
        let c = &mut controllers[usize::from(index)];
        c.config_requested = on;
        c.polls = 0;
    }

    fn config_acknowledged(&self, index: u8) -> bool {
        let mut controllers = self.controllers.borrow_mut();
        let c = &mut controllers[usize::from(index)];
        if !c.config_requested {
            return false;
        }
        c.polls += 1;
        c.polls > c.ack_delay
    }

    fn set_bit_timing(&self, index: u8, timing: &BitTiming) {
        let mut controllers = self.controllers.borrow_mut();
        let c = &mut controllers[usize::from(index)];
        if c.config_requested {
            c.timing = Some(*timing);
        }
    }

    fn clear_mailbox(&self, index: u8, mbox: u8) {
        self.controllers.borrow_mut()[usize::from(index)].mailboxes[mslot(mbox)] =
            Mailbox::default();
    }

    fn configure_mailbox(&self, index: u8, mbox: u8, cfg: &MailboxConfig) {
        let mut controllers = self.controllers.borrow_mut();
        let m = &mut controllers[usize::from(index)].mailboxes[mslot(mbox)];
        *m = Mailbox {
            cfg: Some(*cfg),
            ..Mailbox::default()
        };
    }

    fn receive(&self, index: u8, mbox: u8) -> Option<Message> {
        self.controllers.borrow_mut()[usize::from(index)].mailboxes[mslot(mbox)]
            .rx
            .take()
    }

    fn tx_pending(&self, index: u8, mbox: u8) -> bool {
        self.controllers.borrow()[usize::from(index)].mailboxes[mslot(mbox)].pending
    }

    fn load(&self, index: u8, mbox: u8, msg: &Message) {
        self.controllers.borrow_mut()[usize::from(index)].mailboxes[mslot(mbox)].tx = Some(*msg);
    }

    fn request_tx(&self, index: u8, mbox: u8) {
        let mut controllers = self.controllers.borrow_mut();
        let c = &mut controllers[usize::from(index)];
        let slot = mslot(mbox);
        if c.mailboxes[slot].tx.is_none() {
            return;
        }
        c.mailboxes[slot].pending = true;
        if !c.hold_tx {
            c.transmit(slot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rx(id: u32, mask: u32) -> MailboxConfig {
        MailboxConfig {
            dir: MailboxDir::Receive,
            id,
            mask,
            overwrite_protect: true,
        }
    }

    #[test]
    fn test_loopback_respects_acceptance_mask() {
        let can = SimCan::new();
        can.set_loopback(0, true);
        can.configure_mailbox(0, 1, &rx(0x100, 0x1FFF_FFFF));
        let msg = Message {
            id: 0x101,
            extended: true,
            len: 1,
            ..Message::default()
        };
        can.load(0, 21, &msg);
        can.request_tx(0, 21);
        assert_eq!(can.receive(0, 1), None);

        let msg = Message { id: 0x100, ..msg };
        can.load(0, 21, &msg);
        can.request_tx(0, 21);
        assert_eq!(can.receive(0, 1), Some(msg));
        assert_eq!(can.bus(0).len(), 2);
    }

    #[test]
    fn test_config_ack_after_delay() {
        let can = SimCan::new();
        can.set_ack_delay(0, 2);
        can.request_config(0, true);
        assert!(!can.config_acknowledged(0));
        assert!(!can.config_acknowledged(0));
        assert!(can.config_acknowledged(0));
    }
}

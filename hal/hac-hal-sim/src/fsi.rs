//! Simulated FSI link
//!
//! An endpoint delivers what it transmits into its peer's receiver. A
//! looped endpoint is its own peer; [`SimFsi::pair`] builds two linked
//! endpoints for master/slave tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use hac_hal::fsi::{Events, FRAME_WORDS};
use hac_hal::FsiPort;

#[derive(Debug, Default)]
struct Receiver {
    events: u16,
    ping_tag: u8,
    words: u16,
    user: u8,
    data: [u16; FRAME_WORDS],
    core_error: bool,
}

/// Transmit mode as last programmed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxMode {
    Software,
    Ping { trigger: u16, watchdog: u32 },
}

#[derive(Debug)]
pub struct SimFsi {
    rx: Rc<RefCell<Receiver>>,
    peer: RefCell<Rc<RefCell<Receiver>>>,
    tx_events: Cell<u16>,
    prescaler: Cell<Option<u16>>,
    mode: Cell<TxMode>,
    flushes: Cell<u32>,
    rx_resets: Cell<u32>,
    sent_pings: RefCell<Vec<u8>>,
    sent_frames: Cell<u32>,
}

impl SimFsi {
    fn with_peer(rx: Rc<RefCell<Receiver>>, peer: Rc<RefCell<Receiver>>) -> Self {
        Self {
            rx,
            peer: RefCell::new(peer),
            tx_events: Cell::new(0),
            prescaler: Cell::new(None),
            mode: Cell::new(TxMode::Software),
            flushes: Cell::new(0),
            rx_resets: Cell::new(0),
            sent_pings: RefCell::new(Vec::new()),
            sent_frames: Cell::new(0),
        }
    }

    /// Endpoint whose transmitter feeds its own receiver
    pub fn looped() -> Self {
        let rx = Rc::new(RefCell::new(Receiver::default()));
        Self::with_peer(rx.clone(), rx)
    }

    /// Two endpoints wired to each other
    pub fn pair() -> (Self, Self) {
        let a = Rc::new(RefCell::new(Receiver::default()));
        let b = Rc::new(RefCell::new(Receiver::default()));
        (Self::with_peer(a.clone(), b.clone()), Self::with_peer(b, a))
    }

    pub fn prescaler(&self) -> Option<u16> {
        self.prescaler.get()
    }

    pub fn mode(&self) -> TxMode {
        self.mode.get()
    }

    /// Ping tags transmitted in software mode
    pub fn sent_pings(&self) -> Vec<u8> {
        self.sent_pings.borrow().clone()
    }

    pub fn sent_frames(&self) -> u32 {
        self.sent_frames.get()
    }

    pub fn rx_resets(&self) -> u32 {
        self.rx_resets.get()
    }

    /// Raise the receive ping watchdog timeout
    pub fn expire_watchdog(&self) {
        self.rx.borrow_mut().events |= Events::PING_WD_TIMEOUT.0;
    }

    /// Flag a CRC error on the receiver
    pub fn corrupt_rx(&self) {
        self.rx.borrow_mut().events |= Events::CRC_ERR.0;
    }

    /// Put the receiver core into its error state
    pub fn fault_rx_core(&self) {
        self.rx.borrow_mut().core_error = true;
    }

    /// Detach from the peer: transmissions go nowhere
    pub fn unplug(&self) {
        *self.peer.borrow_mut() = Rc::new(RefCell::new(Receiver::default()));
    }
}

impl FsiPort for SimFsi {
    fn init(&self, prescaler: u16) {
        self.prescaler.set(Some(prescaler));
        self.mode.set(TxMode::Software);
        let mut rx = self.rx.borrow_mut();
        rx.events = 0;
        rx.core_error = false;
    }

    fn flush(&self) {
        self.flushes.set(self.flushes.get() + 1);
    }

    fn set_software_mode(&self) {
        self.mode.set(TxMode::Software);
    }

    fn set_ping_mode(&self, trigger: u16, watchdog: u32) {
        self.mode.set(TxMode::Ping { trigger, watchdog });
    }

    fn send_ping(&self, tag: u8) {
        self.sent_pings.borrow_mut().push(tag);
        {
            let peer = self.peer.borrow();
            let mut rx = peer.borrow_mut();
            rx.events |= Events::PING_FRAME.0 | Events::FRAME_DONE.0;
            rx.ping_tag = tag;
        }
        self.tx_events
            .set(self.tx_events.get() | Events::FRAME_DONE.0);
    }

    fn send_data(&self, user: u8, data: &[u16; FRAME_WORDS]) {
        self.sent_frames.set(self.sent_frames.get() + 1);
        {
            let peer = self.peer.borrow();
            let mut rx = peer.borrow_mut();
            rx.events |= Events::DATA_FRAME.0 | Events::FRAME_DONE.0;
            rx.words = FRAME_WORDS as u16;
            rx.user = user;
            rx.data = *data;
        }
        self.tx_events
            .set(self.tx_events.get() | Events::FRAME_DONE.0);
    }

    fn rx_events(&self) -> Events {
        Events(self.rx.borrow().events)
    }

    fn clear_rx_events(&self, events: Events) {
        self.rx.borrow_mut().events &= !events.0;
    }

    fn rx_ping_tag(&self) -> u8 {
        self.rx.borrow().ping_tag
    }

    fn rx_word_count(&self) -> u16 {
        self.rx.borrow().words
    }

    fn rx_user_data(&self) -> u8 {
        self.rx.borrow().user
    }

    fn read_rx(&self, data: &mut [u16; FRAME_WORDS]) {
        *data = self.rx.borrow().data;
    }

    fn tx_events(&self) -> Events {
        Events(self.tx_events.get())
    }

    fn clear_tx_events(&self, events: Events) {
        self.tx_events.set(self.tx_events.get() & !events.0);
    }

    fn rx_core_error(&self) -> bool {
        self.rx.borrow().core_error
    }

    fn reset_rx(&self) {
        self.rx_resets.set(self.rx_resets.get() + 1);
        let mut rx = self.rx.borrow_mut();
        rx.core_error = false;
        rx.events = 0;
    }
}

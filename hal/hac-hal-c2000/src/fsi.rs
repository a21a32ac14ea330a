//! Fast serial interface, one transmitter and one receiver
//!
//! Control registers of both cores are keyed: writes to the master control
//! registers only take effect with 0xA5 in the key field.

use hac_hal::fsi::{Events, FsiPort, FRAME_WORDS};

use crate::reg::{Field, Reg};

/// FSITXA of the F28004x
pub const FSITXA_F28004X: usize = 0x6600;
/// FSIRXA of the F28004x
pub const FSIRXA_F28004X: usize = 0x6680;

mod tx {
    pub const MASTER_CTRL: u16 = 0x00;
    pub const CLK_CTRL: u16 = 0x04;
    pub const OPER_CTRL_LO: u16 = 0x05;
    pub const FRAME_CTRL: u16 = 0x07;
    pub const FRAME_TAG_UDATA: u16 = 0x08;
    pub const BUF_PTR_LOAD: u16 = 0x09;
    pub const PING_CTRL: u16 = 0x0B;
    pub const PING_TAG: u16 = 0x0C;
    pub const EVT_STS: u16 = 0x16;
    pub const EVT_CLR: u16 = 0x18;
    pub const BUF_BASE: u16 = 0x40;
}

mod rx {
    pub const MASTER_CTRL: u16 = 0x00;
    pub const OPER_CTRL: u16 = 0x04;
    pub const FRAME_INFO: u16 = 0x06;
    pub const FRAME_TAG_UDATA: u16 = 0x07;
    pub const EVT_STS: u16 = 0x0A;
    pub const EVT_CLR: u16 = 0x0E;
    pub const BUF_PTR_LOAD: u16 = 0x12;
    pub const PING_WD_CTRL: u16 = 0x1E;
    pub const PING_TAG: u16 = 0x1F;
    /// 32-bit
    pub const PING_WD_REF: u16 = 0x20;
    pub const VIS_1: u16 = 0x24;
    pub const BUF_BASE: u16 = 0x40;
}

const KEY: u16 = 0xA5 << 8;
const CORE_RST: u16 = 1 << 0;
const FLUSH: u16 = 1 << 2;
const INT_LOOPBACK: u16 = 1 << 1;

const CLK_RST: u16 = 1 << 0;
const CLK_EN: u16 = 1 << 1;
const PRESCALE_VAL: Field = Field::new(2, 8);

/// Single lane, software-started frames (both fields zero)
const TX_DATA_WIDTH: Field = Field::new(0, 2);
const TX_START_MODE: Field = Field::new(3, 3);
const RX_DATA_WIDTH: Field = Field::new(0, 2);
const RX_N_WORDS: Field = Field::new(3, 4);

const FRAME_TYPE: Field = Field::new(0, 4);
const TX_N_WORDS: Field = Field::new(4, 4);
const START: u16 = 1 << 15;
const TYPE_PING: u32 = 0x0;
const TYPE_NWORD: u32 = 0x3;
const TX_FRAME_TAG: Field = Field::new(0, 4);
const USER_DATA: Field = Field::new(8, 8);
const RX_FRAME_TAG: Field = Field::new(1, 4);
const RX_FRAME_WORDS: Field = Field::new(4, 4);

const PING_TIMER_EN: u16 = 1 << 1;
const PING_EXT_TRIG_EN: u16 = 1 << 2;
const PING_EXT_TRIG_SEL: Field = Field::new(3, 5);
const PING_WD_RST: u16 = 1 << 0;
const PING_WD_EN: u16 = 1 << 1;

const RX_CORE_STS: u16 = 1 << 3;

/// Receive event bits to the port's event flags
const RX_EVENTS: [(u16, Events); 5] = [
    (1 << 6, Events::FRAME_DONE),
    (1 << 9, Events::PING_FRAME),
    (1 << 11, Events::DATA_FRAME),
    (1 << 2, Events::CRC_ERR),
    (1 << 0, Events::PING_WD_TIMEOUT),
];
const TX_FRAME_DONE: u16 = 1 << 0;

fn from_rx(bits: u16) -> Events {
    RX_EVENTS
        .iter()
        .filter(|(bit, _)| bits & bit != 0)
        .fold(Events::NONE, |acc, (_, ev)| acc.union(*ev))
}

fn to_rx(events: Events) -> u16 {
    RX_EVENTS
        .iter()
        .filter(|(_, ev)| events.intersects(*ev))
        .fold(0, |acc, (bit, _)| acc | bit)
}

pub struct C2000Fsi {
    tx: *mut u16,
    rx: *mut u16,
}

impl C2000Fsi {
    /// # Safety
    /// `tx` and `rx` must be the FSI transmitter and receiver register
    /// files of the running device.
    pub const unsafe fn new(tx: usize, rx: usize) -> Self {
        Self {
            tx: tx as *mut u16,
            rx: rx as *mut u16,
        }
    }

    fn tx<T: crate::reg::RegValue>(&self, offset: u16) -> Reg<T> {
        // SAFETY: offsets stay inside the transmitter register file
        unsafe { Reg::offset(self.tx, offset) }
    }

    fn rx<T: crate::reg::RegValue>(&self, offset: u16) -> Reg<T> {
        // SAFETY: offsets stay inside the receiver register file
        unsafe { Reg::offset(self.rx, offset) }
    }

    fn start_frame(&self, frame_type: u32) {
        let ctrl = self.tx::<u16>(tx::FRAME_CTRL);
        ctrl.write_field(FRAME_TYPE, frame_type);
        ctrl.write_field(TX_N_WORDS, FRAME_WORDS as u32 - 1);
        ctrl.set_bits(u32::from(START));
    }
}

impl FsiPort for C2000Fsi {
    fn init(&self, prescaler: u16) {
        self.tx::<u16>(tx::MASTER_CTRL).write(KEY | CORE_RST);
        let clk = self.tx::<u16>(tx::CLK_CTRL);
        clk.write(CLK_RST);
        clk.write(0);
        clk.write_field(PRESCALE_VAL, u32::from(prescaler));
        clk.set_bits(u32::from(CLK_EN));
        let oper = self.tx::<u16>(tx::OPER_CTRL_LO);
        oper.write_field(TX_DATA_WIDTH, 0);
        oper.write_field(TX_START_MODE, 0);
        self.tx::<u16>(tx::FRAME_CTRL)
            .write_field(TX_N_WORDS, FRAME_WORDS as u32 - 1);
        self.tx::<u16>(tx::MASTER_CTRL).write(KEY);

        let master = self.rx::<u16>(rx::MASTER_CTRL);
        master.write(KEY | CORE_RST);
        let oper = self.rx::<u16>(rx::OPER_CTRL);
        oper.write_field(RX_DATA_WIDTH, 0);
        oper.write_field(RX_N_WORDS, FRAME_WORDS as u32 - 1);
        // Internal loopback stays off
        master.write(KEY & !INT_LOOPBACK);
    }

    fn flush(&self) {
        let master = self.tx::<u16>(tx::MASTER_CTRL);
        master.write(KEY | FLUSH);
        master.write(KEY);
    }

    fn set_software_mode(&self) {
        self.tx::<u16>(tx::PING_CTRL).write(0);
        self.rx::<u16>(rx::PING_WD_CTRL).write(0);
    }

    fn set_ping_mode(&self, trigger: u16, watchdog: u32) {
        self.tx::<u16>(tx::PING_TAG).write_field(TX_FRAME_TAG, 1);
        let ping = self.tx::<u16>(tx::PING_CTRL);
        ping.write(PING_EXT_TRIG_EN & !PING_TIMER_EN);
        ping.write_field(PING_EXT_TRIG_SEL, u32::from(trigger));
        self.rx::<u32>(rx::PING_WD_REF).write(watchdog);
        let wd = self.rx::<u16>(rx::PING_WD_CTRL);
        wd.write(PING_WD_RST);
        wd.write(PING_WD_EN);
    }

    fn send_ping(&self, tag: u8) {
        self.tx::<u16>(tx::FRAME_TAG_UDATA)
            .write_field(TX_FRAME_TAG, u32::from(tag));
        self.start_frame(TYPE_PING);
    }

    fn send_data(&self, user: u8, data: &[u16; FRAME_WORDS]) {
        self.tx::<u16>(tx::BUF_PTR_LOAD).write(0);
        for (i, word) in data.iter().enumerate() {
            self.tx::<u16>(tx::BUF_BASE + i as u16).write(*word);
        }
        self.tx::<u16>(tx::FRAME_TAG_UDATA)
            .write_field(USER_DATA, u32::from(user));
        self.start_frame(TYPE_NWORD);
    }

    fn rx_events(&self) -> Events {
        from_rx(self.rx::<u16>(rx::EVT_STS).read())
    }

    fn clear_rx_events(&self, events: Events) {
        self.rx::<u16>(rx::EVT_CLR).write(to_rx(events));
    }

    fn rx_ping_tag(&self) -> u8 {
        self.rx::<u16>(rx::PING_TAG).read_field(RX_FRAME_TAG) as u8
    }

    fn rx_word_count(&self) -> u16 {
        self.rx::<u16>(rx::FRAME_INFO).read_field(RX_FRAME_WORDS) as u16 + 1
    }

    fn rx_user_data(&self) -> u8 {
        self.rx::<u16>(rx::FRAME_TAG_UDATA).read_field(USER_DATA) as u8
    }

    fn read_rx(&self, data: &mut [u16; FRAME_WORDS]) {
        self.rx::<u16>(rx::BUF_PTR_LOAD).write(0);
        for (i, word) in data.iter_mut().enumerate() {
            *word = self.rx::<u16>(rx::BUF_BASE + i as u16).read();
        }
    }

    fn tx_events(&self) -> Events {
        if self.tx::<u16>(tx::EVT_STS).read() & TX_FRAME_DONE != 0 {
            Events::FRAME_DONE
        } else {
            Events::NONE
        }
    }

    fn clear_tx_events(&self, events: Events) {
        if events.contains(Events::FRAME_DONE) {
            self.tx::<u16>(tx::EVT_CLR).write(TX_FRAME_DONE);
        }
    }

    fn rx_core_error(&self) -> bool {
        self.rx::<u16>(rx::VIS_1).read() & RX_CORE_STS != 0
    }

    fn reset_rx(&self) {
        let master = self.rx::<u16>(rx::MASTER_CTRL);
        master.write(KEY | CORE_RST);
        master.write(KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reg::fake::Block;

    fn fsi(t: &mut Block<0x60>, r: &mut Block<0x60>) -> C2000Fsi {
        unsafe { C2000Fsi::new(t.base() as usize, r.base() as usize) }
    }

    #[test]
    fn test_init_releases_cores_with_key() {
        let mut t = Block::<0x60>::new();
        let mut r = Block::<0x60>::new();
        let port = fsi(&mut t, &mut r);
        port.init(4);
        assert_eq!(t.0[tx::MASTER_CTRL as usize], KEY);
        assert_eq!(r.0[rx::MASTER_CTRL as usize], KEY);
        assert_eq!(t.0[tx::CLK_CTRL as usize], (4 << 2) | CLK_EN);
        assert_eq!(r.0[rx::OPER_CTRL as usize], 15 << 3);
    }

    #[test]
    fn test_data_frame_fills_buffer_and_starts() {
        let mut t = Block::<0x60>::new();
        let mut r = Block::<0x60>::new();
        let port = fsi(&mut t, &mut r);
        let mut data = [0u16; FRAME_WORDS];
        data[0] = 0x1111;
        data[15] = 0xFFFF;
        port.send_data(0x42, &data);
        assert_eq!(t.0[0x40], 0x1111);
        assert_eq!(t.0[0x4F], 0xFFFF);
        assert_eq!(t.0[tx::FRAME_TAG_UDATA as usize], 0x42 << 8);
        assert_eq!(t.0[tx::FRAME_CTRL as usize], START | (15 << 4) | 3);

        port.send_ping(1);
        assert_eq!(t.0[tx::FRAME_CTRL as usize] & 0xF, 0);
        assert_eq!(t.0[tx::FRAME_TAG_UDATA as usize], (0x42 << 8) | 1);
    }

    #[test]
    fn test_receive_events_map_both_ways() {
        let mut t = Block::<0x60>::new();
        let mut r = Block::<0x60>::new();
        let port = fsi(&mut t, &mut r);
        r.0[rx::EVT_STS as usize] = (1 << 6) | (1 << 11) | (1 << 5);
        let ev = port.rx_events();
        assert_eq!(ev, Events::FRAME_DONE.union(Events::DATA_FRAME));
        port.clear_rx_events(Events::DATA_FRAME.union(Events::PING_WD_TIMEOUT));
        assert_eq!(r.0[rx::EVT_CLR as usize], (1 << 11) | 1);

        r.0[rx::FRAME_INFO as usize] = 15 << 4;
        r.0[rx::FRAME_TAG_UDATA as usize] = 0x07 << 8;
        r.0[rx::PING_TAG as usize] = 1 << 1;
        r.0[0x45] = 0xBEEF;
        assert_eq!(port.rx_word_count(), 16);
        assert_eq!(port.rx_user_data(), 7);
        assert_eq!(port.rx_ping_tag(), 1);
        let mut buf = [0u16; FRAME_WORDS];
        port.read_rx(&mut buf);
        assert_eq!(buf[5], 0xBEEF);
    }

    #[test]
    fn test_ping_mode_arms_watchdog() {
        let mut t = Block::<0x60>::new();
        let mut r = Block::<0x60>::new();
        let port = fsi(&mut t, &mut r);
        port.set_ping_mode(9, 1_000_000);
        assert_eq!(t.0[tx::PING_CTRL as usize], PING_EXT_TRIG_EN | (9 << 3));
        assert_eq!(r.word32(rx::PING_WD_REF as usize), 1_000_000);
        assert_eq!(r.0[rx::PING_WD_CTRL as usize], PING_WD_EN);
        port.set_software_mode();
        assert_eq!(t.0[tx::PING_CTRL as usize], 0);
        assert!(!port.rx_core_error());
        r.0[rx::VIS_1 as usize] = RX_CORE_STS;
        assert!(port.rx_core_error());
    }
}

//! DCAN controllers
//!
//! The 32 message objects live in message RAM and are reached through
//! interface register sets: IF1 is used for writes, IF2 for reads. Every
//! 32-bit register occupies four words of the controller's address window.

use hac_hal::can::{BitTiming, CanPort, MailboxConfig, MailboxDir, Message};

use crate::reg::{Field, Reg};

/// CAN-A and CAN-B of the F28004x
pub const CAN_F28004X: [usize; 2] = [0x48000, 0x4A000];

mod off {
    pub const CTL: u16 = 0x00;
    pub const BTR: u16 = 0x0C;
    pub const TXRQ_21: u16 = 0x88;
    pub const NDAT_21: u16 = 0x9C;
    pub const IF1: u16 = 0x100;
    pub const IF2: u16 = 0x120;
    /// Offsets inside an interface register set
    pub const CMD: u16 = 0x00;
    pub const MSK: u16 = 0x04;
    pub const ARB: u16 = 0x08;
    pub const MCTL: u16 = 0x0C;
    pub const DATA: u16 = 0x10;
    pub const DATB: u16 = 0x14;
}

const INIT: u32 = 1 << 0;
const CCE: u32 = 1 << 6;
const DAR: u32 = 1 << 5;
const ABO: u32 = 1 << 9;
const SWR: u32 = 1 << 15;

const BRP: Field = Field::new(0, 6);
const SJW: Field = Field::new(6, 2);
const TSEG1: Field = Field::new(8, 4);
const TSEG2: Field = Field::new(12, 3);
const BRPE: Field = Field::new(16, 4);

mod cmd {
    pub const BUSY: u32 = 1 << 15;
    pub const DATA_B: u32 = 1 << 16;
    pub const DATA_A: u32 = 1 << 17;
    /// TXRQST on writes, NEWDAT clear on reads
    pub const TXRQST: u32 = 1 << 18;
    pub const CLRINTPND: u32 = 1 << 19;
    pub const CONTROL: u32 = 1 << 20;
    pub const ARB: u32 = 1 << 21;
    pub const MASK: u32 = 1 << 22;
    /// Interface registers to message RAM
    pub const DIR: u32 = 1 << 23;
    pub const ALL: u32 = DATA_A | DATA_B | CONTROL | ARB | MASK | CLRINTPND;
}

const ID_EXT: u32 = 0x1FFF_FFFF;
const ID_STD_SHIFT: u32 = 18;
const ID_STD: u32 = 0x7FF;
const ARB_DIR: u32 = 1 << 29;
const ARB_XTD: u32 = 1 << 30;
const ARB_MSGVAL: u32 = 1 << 31;
const MSK_MXTD: u32 = 1 << 31;
const MCTL_DLC: u32 = 0xF;
const MCTL_EOB: u32 = 1 << 7;
const MCTL_UMASK: u32 = 1 << 12;

const BUSY_POLLS: u32 = 1_000;
const RESET_POLLS: u32 = 1_000;

pub struct C2000Can {
    bases: [usize; 2],
}

impl C2000Can {
    /// # Safety
    /// `bases` must be the CAN-A and CAN-B controller bases of the running
    /// device.
    pub const unsafe fn new(bases: [usize; 2]) -> Self {
        Self { bases }
    }

    fn reg(&self, index: u8, offset: u16) -> Reg<u32> {
        let base = self.bases[usize::from(index).min(1)];
        // SAFETY: offsets stay inside the controller window
        unsafe { Reg::offset(base as *mut u16, offset) }
    }

    fn iface(&self, index: u8, set: u16, offset: u16) -> Reg<u32> {
        self.reg(index, set + offset)
    }

    /// Issue an interface command and wait for the transfer
    fn command(&self, index: u8, set: u16, command: u32, mbox: u8) {
        let reg = self.iface(index, set, off::CMD);
        reg.write(command | u32::from(mbox));
        let _ = (0..BUSY_POLLS).any(|_| reg.read() & cmd::BUSY == 0);
    }

    fn mbox_bit(mbox: u8) -> u32 {
        Field::bit(mbox.saturating_sub(1)).mask()
    }

    fn write_data(&self, index: u8, data: &[u8; 8]) {
        let a = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);
        let b = u32::from_le_bytes([data[4], data[5], data[6], data[7]]);
        self.iface(index, off::IF1, off::DATA).write(a);
        self.iface(index, off::IF1, off::DATB).write(b);
    }

    fn read_data(&self, index: u8) -> [u8; 8] {
        let a = self.iface(index, off::IF2, off::DATA).read().to_le_bytes();
        let b = self.iface(index, off::IF2, off::DATB).read().to_le_bytes();
        [a[0], a[1], a[2], a[3], b[0], b[1], b[2], b[3]]
    }
}

impl CanPort for C2000Can {
    fn init(&self, index: u8) {
        let ctl = self.reg(index, off::CTL);
        ctl.set_bits(INIT | CCE);
        ctl.set_bits(SWR);
        let _ = (0..RESET_POLLS).any(|_| ctl.read() & SWR == 0);
        // Bus-off recovery and automatic retransmission on
        ctl.modify(|v| (v | INIT | ABO) & !(DAR | CCE));
    }

    fn request_config(&self, index: u8, on: bool) {
        let ctl = self.reg(index, off::CTL);
        if on {
            ctl.set_bits(INIT | CCE);
        } else {
            ctl.clear_bits(INIT | CCE);
        }
    }

    fn config_acknowledged(&self, index: u8) -> bool {
        self.reg(index, off::CTL).read() & (INIT | CCE) == INIT | CCE
    }

    fn set_bit_timing(&self, index: u8, timing: &BitTiming) {
        let brp = u32::from(timing.brp.saturating_sub(1));
        let btr = self.reg(index, off::BTR);
        btr.write(0);
        btr.write_field(BRP, brp & 0x3F);
        btr.write_field(BRPE, brp >> 6);
        btr.write_field(SJW, u32::from(timing.sjw.saturating_sub(1)));
        btr.write_field(TSEG1, u32::from(timing.tseg1.saturating_sub(1)));
        btr.write_field(TSEG2, u32::from(timing.tseg2.saturating_sub(1)));
    }

    fn clear_mailbox(&self, index: u8, mbox: u8) {
        self.iface(index, off::IF1, off::MSK).write(0);
        self.iface(index, off::IF1, off::ARB).write(0);
        self.iface(index, off::IF1, off::MCTL).write(0);
        self.command(index, off::IF1, cmd::DIR | cmd::ALL, mbox);
    }

    fn configure_mailbox(&self, index: u8, mbox: u8, cfg: &MailboxConfig) {
        // Message objects always overwrite; a lost message only sets MSGLST
        let (dir, mctl) = match cfg.dir {
            MailboxDir::Receive => (0, MCTL_EOB | MCTL_UMASK),
            MailboxDir::Transmit => (ARB_DIR, MCTL_EOB),
        };
        self.iface(index, off::IF1, off::MSK)
            .write((cfg.mask & ID_EXT) | MSK_MXTD);
        self.iface(index, off::IF1, off::ARB)
            .write((cfg.id & ID_EXT) | ARB_XTD | ARB_MSGVAL | dir);
        self.iface(index, off::IF1, off::MCTL).write(mctl);
        self.command(index, off::IF1, cmd::DIR | cmd::ALL, mbox);
    }

    fn receive(&self, index: u8, mbox: u8) -> Option<Message> {
        if self.reg(index, off::NDAT_21).read() & Self::mbox_bit(mbox) == 0 {
            return None;
        }
        self.command(index, off::IF2, cmd::ALL | cmd::TXRQST, mbox);
        let arb = self.iface(index, off::IF2, off::ARB).read();
        let mctl = self.iface(index, off::IF2, off::MCTL).read();
        let extended = arb & ARB_XTD != 0;
        let id = if extended {
            arb & ID_EXT
        } else {
            (arb >> ID_STD_SHIFT) & ID_STD
        };
        Some(Message {
            id,
            extended,
            remote: arb & ARB_DIR != 0,
            len: (mctl & MCTL_DLC).min(8) as u8,
            data: self.read_data(index),
        })
    }

    fn tx_pending(&self, index: u8, mbox: u8) -> bool {
        self.reg(index, off::TXRQ_21).read() & Self::mbox_bit(mbox) != 0
    }

    fn load(&self, index: u8, mbox: u8, msg: &Message) {
        let id = if msg.extended {
            (msg.id & ID_EXT) | ARB_XTD
        } else {
            (msg.id & ID_STD) << ID_STD_SHIFT
        };
        // A transmit object with DIR clear sends a remote frame
        let dir = if msg.remote { 0 } else { ARB_DIR };
        self.iface(index, off::IF1, off::ARB)
            .write(id | ARB_MSGVAL | dir);
        self.iface(index, off::IF1, off::MCTL)
            .write(MCTL_EOB | (u32::from(msg.len.min(8)) & MCTL_DLC));
        self.write_data(index, &msg.data);
        self.command(
            index,
            off::IF1,
            cmd::DIR | cmd::ARB | cmd::CONTROL | cmd::DATA_A | cmd::DATA_B,
            mbox,
        );
    }

    fn request_tx(&self, index: u8, mbox: u8) {
        self.command(index, off::IF1, cmd::DIR | cmd::TXRQST, mbox);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reg::fake::Block;

    const IF1: usize = off::IF1 as usize;
    const IF2: usize = off::IF2 as usize;

    fn can(a: &mut Block<0x140>, b: &mut Block<0x140>) -> C2000Can {
        unsafe { C2000Can::new([a.base() as usize, b.base() as usize]) }
    }

    #[test]
    fn test_bit_timing_splits_prescaler() {
        let mut a = Block::<0x140>::new();
        let mut b = Block::<0x140>::new();
        let port = can(&mut a, &mut b);
        port.set_bit_timing(1, &BitTiming { brp: 100, tseg1: 13, tseg2: 6, sjw: 4 });
        let btr = b.word32(off::BTR as usize);
        assert_eq!(btr & 0x3F, 99 & 0x3F);
        assert_eq!(btr >> 16, 99 >> 6);
        assert_eq!((btr >> 6) & 0b11, 3);
        assert_eq!((btr >> 8) & 0xF, 12);
        assert_eq!((btr >> 12) & 0b111, 5);
        assert_eq!(a.word32(off::BTR as usize), 0);
    }

    #[test]
    fn test_config_mode_handshake() {
        let mut a = Block::<0x140>::new();
        let mut b = Block::<0x140>::new();
        let port = can(&mut a, &mut b);
        port.init(0);
        assert_eq!(a.word32(0) & (INIT | ABO | CCE), INIT | ABO);
        assert!(!port.config_acknowledged(0));
        port.request_config(0, true);
        assert!(port.config_acknowledged(0));
        port.request_config(0, false);
        assert!(!port.config_acknowledged(0));
    }

    #[test]
    fn test_receive_mailbox_setup_and_read() {
        let mut a = Block::<0x140>::new();
        let mut b = Block::<0x140>::new();
        let port = can(&mut a, &mut b);
        let cfg = MailboxConfig {
            dir: MailboxDir::Receive,
            id: 0x0123_4567,
            mask: 0x1FFF_FF00,
            overwrite_protect: true,
        };
        port.configure_mailbox(0, 5, &cfg);
        assert_eq!(a.word32(IF1 + off::ARB as usize), 0x0123_4567 | ARB_XTD | ARB_MSGVAL);
        assert_eq!(a.word32(IF1 + off::MSK as usize), 0x1FFF_FF00 | MSK_MXTD);
        assert_eq!(a.word32(IF1) & 0xFF, 5);
        assert_ne!(a.word32(IF1) & cmd::DIR, 0);

        assert_eq!(port.receive(0, 5), None);
        a.set_word32(off::NDAT_21 as usize, 1 << 4);
        a.set_word32(IF2 + off::ARB as usize, 0x0123_4567 | ARB_XTD | ARB_MSGVAL);
        a.set_word32(IF2 + off::MCTL as usize, 3);
        a.set_word32(IF2 + off::DATA as usize, 0x0033_2211);
        let msg = port.receive(0, 5).unwrap();
        assert_eq!(msg.id, 0x0123_4567);
        assert!(msg.extended);
        assert_eq!(msg.len, 3);
        assert_eq!(&msg.data[..3], &[0x11, 0x22, 0x33]);
        assert_eq!(a.word32(IF2) & cmd::DIR, 0);
    }

    #[test]
    fn test_standard_transmit_and_request() {
        let mut a = Block::<0x140>::new();
        let mut b = Block::<0x140>::new();
        let port = can(&mut a, &mut b);
        let msg = Message {
            id: 0x123,
            extended: false,
            remote: false,
            len: 2,
            data: [0xAA, 0xBB, 0, 0, 0, 0, 0, 0],
        };
        port.load(0, 1, &msg);
        assert_eq!(a.word32(IF1 + off::ARB as usize), (0x123 << 18) | ARB_MSGVAL | ARB_DIR);
        assert_eq!(a.word32(IF1 + off::MCTL as usize), MCTL_EOB | 2);
        assert_eq!(a.word32(IF1 + off::DATA as usize), 0xBBAA);
        assert_eq!(a.word32(IF1) & cmd::TXRQST, 0);
        port.request_tx(0, 1);
        assert_eq!(a.word32(IF1), cmd::DIR | cmd::TXRQST | 1);
        assert!(!port.tx_pending(0, 1));
        a.set_word32(off::TXRQ_21 as usize, 1);
        assert!(port.tx_pending(0, 1));
    }
}

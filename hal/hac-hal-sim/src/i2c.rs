//! Simulated I2C master with attached EEPROM slaves
//!
//! Every address frame and data byte costs nine bit times of simulated
//! time. The EEPROM commits a page write on STOP and refuses its address
//! until the write cycle has elapsed, which is what acknowledge polling
//! waits for.

use std::cell::RefCell;
use std::rc::Rc;

use hac_hal::i2c::{Mode, Status};
use hac_hal::I2cPort;

use crate::clock::SimClock;

/// 24AA256-class serial EEPROM
#[derive(Debug, Clone)]
pub struct Eeprom {
    memory: Vec<u8>,
    page: usize,
    write_us: u64,
    pointer: usize,
    received: usize,
    buffer: Vec<u8>,
    busy_until_us: u64,
    writing: bool,
}

impl Eeprom {
    /// 32 KiB array, 64-byte pages, 5 ms write cycle
    pub fn new() -> Self {
        Self::with_geometry(0x8000, 64, 5000)
    }

    pub fn with_geometry(size: usize, page: usize, write_us: u64) -> Self {
        Self {
            memory: vec![0xFF; size],
            page,
            write_us,
            pointer: 0,
            received: 0,
            buffer: Vec::new(),
            busy_until_us: 0,
            writing: false,
        }
    }

    pub fn peek(&self, address: usize, len: usize) -> Vec<u8> {
        (0..len)
            .map(|i| self.memory[(address + i) % self.memory.len()])
            .collect()
    }

    pub fn poke(&mut self, address: usize, data: &[u8]) {
        let size = self.memory.len();
        for (i, b) in data.iter().enumerate() {
            self.memory[(address + i) % size] = *b;
        }
    }

    fn start(&mut self, now_us: u64, read: bool) -> bool {
        if now_us < self.busy_until_us {
            return false;
        }
        self.writing = !read;
        self.received = 0;
        self.buffer.clear();
        true
    }

    fn write(&mut self, byte: u8) -> bool {
        match self.received {
            0 => self.pointer = (usize::from(byte) << 8) | (self.pointer & 0xFF),
            1 => self.pointer = ((self.pointer & 0xFF00) | usize::from(byte)) % self.memory.len(),
            _ => self.buffer.push(byte),
        }
        self.received += 1;
        true
    }

    fn read(&mut self) -> u8 {
        let b = self.memory[self.pointer];
        self.pointer = (self.pointer + 1) % self.memory.len();
        b
    }

    fn stop(&mut self, now_us: u64) {
        if self.writing && !self.buffer.is_empty() {
            let base = self.pointer - self.pointer % self.page;
            let offset = self.pointer % self.page;
            for (i, b) in self.buffer.iter().enumerate() {
                self.memory[base + (offset + i) % self.page] = *b;
            }
            self.busy_until_us = now_us + self.write_us;
        }
        self.writing = false;
        self.buffer.clear();
    }

    fn abort(&mut self) {
        self.writing = false;
        self.buffer.clear();
    }
}

impl Default for Eeprom {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Default)]
struct Bus {
    enabled: bool,
    init: Option<(u32, u32, u8)>,
    mode: Option<Mode>,
    address: u16,
    ten_bit: bool,
    status: u16,
    busy: bool,
    stuck: bool,
    nack_next: bool,
    rx: u8,
    active: Option<usize>,
    resets: u32,
    stops: u32,
}

/// Simulated I2C controllers
#[derive(Debug)]
pub struct SimI2c {
    clock: Rc<SimClock>,
    buses: RefCell<Vec<Bus>>,
    /// (address, 10-bit, slave)
    slaves: RefCell<Vec<(u16, bool, Eeprom)>>,
}

impl SimI2c {
    pub fn new(clock: Rc<SimClock>) -> Self {
        Self {
            clock,
            buses: RefCell::new(vec![Bus::default(); 2]),
            slaves: RefCell::new(Vec::new()),
        }
    }

    /// Attach an EEPROM answering at the 7-bit `address`
    pub fn attach_eeprom(&self, address: u16, eeprom: Eeprom) {
        self.slaves.borrow_mut().push((address, false, eeprom));
    }

    /// Attach an EEPROM answering at the 10-bit `address`
    pub fn attach_eeprom_ten_bit(&self, address: u16, eeprom: Eeprom) {
        self.slaves.borrow_mut().push((address, true, eeprom));
    }

    /// Run `f` on the EEPROM at the 7-bit `address`
    pub fn with_eeprom<R>(&self, address: u16, f: impl FnOnce(&mut Eeprom) -> R) -> Option<R> {
        self.with_slave(address, false, f)
    }

    /// Run `f` on the EEPROM at the 10-bit `address`
    pub fn with_eeprom_ten_bit<R>(
        &self,
        address: u16,
        f: impl FnOnce(&mut Eeprom) -> R,
    ) -> Option<R> {
        self.with_slave(address, true, f)
    }

    fn with_slave<R>(
        &self,
        address: u16,
        ten_bit: bool,
        f: impl FnOnce(&mut Eeprom) -> R,
    ) -> Option<R> {
        self.slaves
            .borrow_mut()
            .iter_mut()
            .find(|(a, x, _)| *a == address && *x == ten_bit)
            .map(|(_, _, e)| f(e))
    }

    /// Last programmed direction, address and address mode
    pub fn transfer(&self, index: u8) -> Option<(Mode, u16, bool)> {
        let buses = self.buses.borrow();
        let bus = &buses[usize::from(index)];
        bus.mode.map(|m| (m, bus.address, bus.ten_bit))
    }

    /// Hold the bus-busy flag as if another master owned the bus
    pub fn set_stuck(&self, index: u8, stuck: bool) {
        self.buses.borrow_mut()[usize::from(index)].stuck = stuck;
    }

    /// Number of times the module was taken out of reset
    pub fn resets(&self, index: u8) -> u32 {
        self.buses.borrow()[usize::from(index)].resets
    }

    pub fn stops(&self, index: u8) -> u32 {
        self.buses.borrow()[usize::from(index)].stops
    }

    pub fn configuration(&self, index: u8) -> Option<(u32, u32, u8)> {
        self.buses.borrow()[usize::from(index)].init
    }

    /// Spend `bits` bit times on the wire
    fn spend_bits(&self, bus: &Bus, bits: u64) {
        let bitrate = bus.init.map(|(_, b, _)| u64::from(b.max(1))).unwrap_or(100_000);
        let cycles = bits * u64::from(self.clock.sysclk_hz()) / bitrate;
        self.clock.advance(cycles);
    }
}

impl I2cPort for SimI2c {
    fn init_master(&self, index: u8, sysclk_hz: u32, bitrate: u32, bits: u8) {
        self.buses.borrow_mut()[usize::from(index)].init = Some((sysclk_hz, bitrate, bits));
    }

    fn set_enabled(&self, index: u8, enabled: bool) {
        let mut buses = self.buses.borrow_mut();
        let bus = &mut buses[usize::from(index)];
        if !enabled {
            if let Some(slot) = bus.active.take() {
                self.slaves.borrow_mut()[slot].2.abort();
            }
            bus.status = 0;
            bus.busy = false;
            bus.nack_next = false;
        } else if !bus.enabled {
            bus.resets += 1;
        }
        bus.enabled = enabled;
    }

    fn clear_start_stop(&self, _index: u8) {}

    fn bus_busy(&self, index: u8) -> bool {
        let buses = self.buses.borrow();
        let bus = &buses[usize::from(index)];
        bus.busy || bus.stuck
    }

    fn status(&self, index: u8) -> Status {
        Status(self.buses.borrow()[usize::from(index)].status)
    }

    fn clear_status(&self, index: u8, flags: Status) {
        self.buses.borrow_mut()[usize::from(index)].status &= !flags.0;
    }

    fn set_transfer(&self, index: u8, mode: Mode, address: u16, ten_bit: bool) {
        let mut buses = self.buses.borrow_mut();
        let bus = &mut buses[usize::from(index)];
        bus.mode = Some(mode);
        bus.address = address;
        bus.ten_bit = ten_bit;
    }

    fn send_start(&self, index: u8) {
        let now = self.clock.now_us();
        let mut buses = self.buses.borrow_mut();
        let bus = &mut buses[usize::from(index)];
        if !bus.enabled {
            return;
        }
        // A 10-bit address takes two address bytes
        self.spend_bits(bus, if bus.ten_bit { 18 } else { 9 });
        bus.status &= !(Status::ARDY.0 | Status::NACK.0 | Status::RRDY.0 | Status::XRDY.0);
        bus.busy = true;
        let read = bus.mode == Some(Mode::Receive);
        let mut slaves = self.slaves.borrow_mut();
        let found = slaves
            .iter()
            .position(|(a, x, _)| *a == bus.address && *x == bus.ten_bit);
        let acked = match found {
            Some(slot) => slaves[slot].2.start(now, read),
            None => false,
        };
        if !acked {
            bus.active = None;
            bus.status |= Status::NACK.0 | Status::ARDY.0;
            return;
        }
        bus.active = found;
        bus.status |= Status::ARDY.0;
        if let Some(slot) = found.filter(|_| read) {
            bus.rx = slaves[slot].2.read();
            bus.status |= Status::RRDY.0;
        } else {
            bus.status |= Status::XRDY.0;
        }
    }

    fn send_stop(&self, index: u8) {
        let now = self.clock.now_us();
        let mut buses = self.buses.borrow_mut();
        let bus = &mut buses[usize::from(index)];
        if let Some(slot) = bus.active.take() {
            self.slaves.borrow_mut()[slot].2.stop(now);
        }
        bus.busy = false;
        bus.stops += 1;
        bus.status |= Status::SCD.0;
    }

    fn stop_pending(&self, _index: u8) -> bool {
        false
    }

    fn send_nack(&self, index: u8) {
        self.buses.borrow_mut()[usize::from(index)].nack_next = true;
    }

    fn put(&self, index: u8, byte: u8) {
        let mut buses = self.buses.borrow_mut();
        let bus = &mut buses[usize::from(index)];
        self.spend_bits(bus, 9);
        let acked = match bus.active {
            Some(slot) => self.slaves.borrow_mut()[slot].2.write(byte),
            None => false,
        };
        bus.status |= Status::XSMT.0 | Status::XRDY.0;
        if !acked {
            bus.status |= Status::NACK.0;
        }
    }

    fn get(&self, index: u8) -> u8 {
        let mut buses = self.buses.borrow_mut();
        let bus = &mut buses[usize::from(index)];
        let byte = bus.rx;
        bus.status &= !Status::RRDY.0;
        if bus.nack_next {
            bus.nack_next = false;
            bus.status |= Status::NACK_SENT.0;
        } else if let Some(slot) = bus.active {
            self.spend_bits(bus, 9);
            bus.rx = self.slaves.borrow_mut()[slot].2.read();
            bus.status |= Status::RRDY.0;
        }
        byte
    }
}

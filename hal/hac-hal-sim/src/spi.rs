//! Simulated SPI controllers
//!
//! Words leave the transmit FIFO at once. In loopback the word lands in
//! the receive FIFO; otherwise the next queued peripheral reply does, or
//! all ones when nothing is queued.

use std::cell::RefCell;
use std::collections::VecDeque;

use hac_hal::spi::Config;
use hac_hal::SpiPort;

/// FIFO depth of the controller
pub const FIFO_DEPTH: usize = 16;

#[derive(Debug, Clone, Default)]
struct Controller {
    config: Option<Config>,
    enabled: bool,
    stalled: bool,
    rx: VecDeque<u16>,
    replies: VecDeque<u16>,
    sent: Vec<u16>,
    resets: u32,
}

#[derive(Debug)]
pub struct SimSpi {
    controllers: RefCell<Vec<Controller>>,
}

impl Default for SimSpi {
    fn default() -> Self {
        Self::new()
    }
}

impl SimSpi {
    pub fn new() -> Self {
        Self {
            controllers: RefCell::new(vec![Controller::default(); 2]),
        }
    }

    pub fn config(&self, index: u8) -> Option<Config> {
        self.controllers.borrow()[usize::from(index)].config
    }

    /// Words shifted out so far
    pub fn sent(&self, index: u8) -> Vec<u16> {
        self.controllers.borrow()[usize::from(index)].sent.clone()
    }

    /// Queue words the peripheral answers with
    pub fn queue_reply(&self, index: u8, words: &[u16]) {
        self.controllers.borrow_mut()[usize::from(index)]
            .replies
            .extend(words.iter().copied());
    }

    /// Stop shifting: the transmit FIFO reports busy forever
    pub fn stall(&self, index: u8, stalled: bool) {
        self.controllers.borrow_mut()[usize::from(index)].stalled = stalled;
    }

    /// Number of times the module was taken out of reset
    pub fn resets(&self, index: u8) -> u32 {
        self.controllers.borrow()[usize::from(index)].resets
    }
}

impl SpiPort for SimSpi {
    fn configure(&self, index: u8, cfg: &Config) {
        self.controllers.borrow_mut()[usize::from(index)].config = Some(*cfg);
    }

    fn set_enabled(&self, index: u8, enabled: bool) {
        let mut controllers = self.controllers.borrow_mut();
        let c = &mut controllers[usize::from(index)];
        if enabled && !c.enabled {
            c.resets += 1;
        }
        if !enabled {
            c.rx.clear();
        }
        c.enabled = enabled;
    }

    fn busy(&self, index: u8) -> bool {
        let controllers = self.controllers.borrow();
        let c = &controllers[usize::from(index)];
        c.stalled || !c.enabled || c.rx.len() >= FIFO_DEPTH
    }

    fn rx_level(&self, index: u8) -> u8 {
        self.controllers.borrow()[usize::from(index)].rx.len() as u8
    }

    fn write(&self, index: u8, word: u16) {
        let mut controllers = self.controllers.borrow_mut();
        let c = &mut controllers[usize::from(index)];
        if !c.enabled || c.stalled {
            return;
        }
        let Some(cfg) = c.config else {
            return;
        };
        let mask = if cfg.bits >= 16 {
            0xFFFF
        } else {
            (1u16 << cfg.bits) - 1
        };
        c.sent.push(word & mask);
        let echo = if cfg.loopback {
            word
        } else {
            c.replies.pop_front().unwrap_or(0xFFFF)
        };
        if c.rx.len() < FIFO_DEPTH {
            c.rx.push_back(echo & mask);
        }
    }

    fn read(&self, index: u8) -> u16 {
        self.controllers.borrow_mut()[usize::from(index)]
            .rx
            .pop_front()
            .unwrap_or(0)
    }
}

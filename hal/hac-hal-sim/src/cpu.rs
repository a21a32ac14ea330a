//! Simulated CPU: protection bracket, global interrupts, reset

use std::cell::Cell;

use hac_hal::{Cpu, Protect};

/// Simulated C28x CPU
///
/// Records bracket usage so tests can check that protected writes were
/// issued inside one, and that brackets never nest.
#[derive(Debug, Default)]
pub struct SimCpu {
    allowed: Cell<bool>,
    brackets: Cell<u32>,
    nested: Cell<u32>,
    interrupts: Cell<bool>,
    idles: Cell<u32>,
    resets: Cell<u32>,
}

impl SimCpu {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a write-protection bracket is open
    pub fn is_allowed(&self) -> bool {
        self.allowed.get()
    }

    /// Number of brackets opened so far
    pub fn brackets(&self) -> u32 {
        self.brackets.get()
    }

    /// Number of brackets opened while another one was still open
    pub fn nested_brackets(&self) -> u32 {
        self.nested.get()
    }

    pub fn idle_count(&self) -> u32 {
        self.idles.get()
    }

    pub fn reset_requests(&self) -> u32 {
        self.resets.get()
    }
}

impl Protect for SimCpu {
    fn allow(&self) {
        if self.allowed.get() {
            self.nested.set(self.nested.get() + 1);
        }
        self.allowed.set(true);
        self.brackets.set(self.brackets.get() + 1);
    }

    fn deny(&self) {
        self.allowed.set(false);
    }
}

impl Cpu for SimCpu {
    fn enable_interrupts(&self) {
        self.interrupts.set(true);
    }

    fn disable_interrupts(&self) {
        self.interrupts.set(false);
    }

    fn interrupts_enabled(&self) -> bool {
        self.interrupts.get()
    }

    fn idle(&self) {
        self.idles.set(self.idles.get() + 1);
    }

    fn reset_device(&self) {
        self.interrupts.set(false);
        self.resets.set(self.resets.get() + 1);
    }
}

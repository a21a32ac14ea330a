//! Simulated peripheral interrupt expansion block

use std::cell::{Cell, RefCell};

use hac_hal::pie::Vector;
use hac_hal::{Eallow, Pie};

#[derive(Debug, Default)]
pub struct SimPie {
    inits: Cell<u32>,
    enabled: RefCell<Vec<Vector>>,
    acks: RefCell<Vec<u16>>,
}

impl SimPie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init_count(&self) -> u32 {
        self.inits.get()
    }

    pub fn is_enabled(&self, vector: Vector) -> bool {
        self.enabled.borrow().contains(&vector)
    }

    /// Groups acknowledged so far, in order
    pub fn acknowledged(&self) -> Vec<u16> {
        self.acks.borrow().clone()
    }
}

impl Pie for SimPie {
    fn init(&self, _ep: &Eallow<'_>) {
        self.inits.set(self.inits.get() + 1);
        self.enabled.borrow_mut().clear();
    }

    fn enable(&self, _ep: &Eallow<'_>, vector: Vector) {
        let mut enabled = self.enabled.borrow_mut();
        if !enabled.contains(&vector) {
            enabled.push(vector);
        }
    }

    fn disable(&self, _ep: &Eallow<'_>, vector: Vector) {
        self.enabled.borrow_mut().retain(|v| *v != vector);
    }

    fn acknowledge(&self, group: u16) {
        self.acks.borrow_mut().push(group);
    }
}

//! Simulated eCAP, SDFM, PGA and CMPSS blocks
//!
//! These only record what was programmed and return values set by the
//! test.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use hac_hal::pga::Gain;
use hac_hal::sdfm::FilterConfig;
use hac_hal::{CmpssPort, EcapPort, Eallow, PgaPort, SdfmPort};

#[derive(Debug, Default)]
pub struct SimEcap {
    routes: RefCell<BTreeMap<u8, u16>>,
    prescale: RefCell<BTreeMap<u8, u16>>,
    captures: RefCell<BTreeMap<(u8, u8), u32>>,
}

impl SimEcap {
    pub fn new() -> Self {
        Self::default()
    }

    /// GPIO routed to a core's input
    pub fn route(&self, core: u8) -> Option<u16> {
        self.routes.borrow().get(&core).copied()
    }

    pub fn prescale(&self, core: u8) -> Option<u16> {
        self.prescale.borrow().get(&core).copied()
    }

    pub fn set_capture(&self, core: u8, event: u8, value: u32) {
        self.captures.borrow_mut().insert((core, event), value);
    }
}

impl EcapPort for SimEcap {
    fn route_input(&self, _ep: &Eallow<'_>, core: u8, pin: u16) {
        self.routes.borrow_mut().insert(core, pin);
    }

    fn configure(&self, _ep: &Eallow<'_>, core: u8, prescale: u16) {
        self.prescale.borrow_mut().insert(core, prescale);
    }

    fn capture(&self, core: u8, event: u8) -> u32 {
        self.captures
            .borrow()
            .get(&(core, event))
            .copied()
            .unwrap_or(0)
    }
}

#[derive(Debug, Default)]
pub struct SimSdfm {
    master: Cell<bool>,
    filters: RefCell<BTreeMap<u8, FilterConfig>>,
    data: RefCell<BTreeMap<u8, i16>>,
}

impl SimSdfm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn master_enabled(&self) -> bool {
        self.master.get()
    }

    pub fn filter(&self, filter: u8) -> Option<FilterConfig> {
        self.filters.borrow().get(&filter).copied()
    }

    pub fn set_data(&self, filter: u8, value: i16) {
        self.data.borrow_mut().insert(filter, value);
    }
}

impl SdfmPort for SimSdfm {
    fn enable_master(&self, _ep: &Eallow<'_>) {
        self.master.set(true);
    }

    fn configure_filter(&self, _ep: &Eallow<'_>, filter: u8, cfg: FilterConfig) {
        self.filters.borrow_mut().insert(filter, cfg);
    }

    fn data(&self, filter: u8) -> i16 {
        self.data.borrow().get(&filter).copied().unwrap_or(0)
    }
}

#[derive(Debug, Default)]
pub struct SimPga {
    gains: RefCell<BTreeMap<u8, Gain>>,
}

impl SimPga {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gain(&self, core: u8) -> Option<Gain> {
        self.gains.borrow().get(&core).copied()
    }
}

impl PgaPort for SimPga {
    fn configure(&self, _ep: &Eallow<'_>, core: u8, gain: Gain) {
        self.gains.borrow_mut().insert(core, gain);
    }
}

/// Programmed state of one comparator core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Comparator {
    pub pwm_sync: u16,
    pub high: u16,
    pub low: u16,
    pub latch_clears: u32,
}

/// ePWM X-BAR trip route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripRoute {
    pub trip: u16,
    pub mux_config: u32,
    pub mux_enable: u32,
}

#[derive(Debug, Default)]
pub struct SimCmpss {
    inputs: RefCell<Vec<(u16, u16)>>,
    cores: RefCell<BTreeMap<u8, Comparator>>,
    trips: RefCell<Vec<TripRoute>>,
}

impl SimCmpss {
    pub fn new() -> Self {
        Self::default()
    }

    /// Analog mux selections in order
    pub fn inputs(&self) -> Vec<(u16, u16)> {
        self.inputs.borrow().clone()
    }

    pub fn comparator(&self, core: u8) -> Option<Comparator> {
        self.cores.borrow().get(&core).copied()
    }

    pub fn trips(&self) -> Vec<TripRoute> {
        self.trips.borrow().clone()
    }
}

impl CmpssPort for SimCmpss {
    fn select_input(&self, _ep: &Eallow<'_>, mux: u16, value: u16) {
        self.inputs.borrow_mut().push((mux, value));
    }

    fn configure(&self, _ep: &Eallow<'_>, core: u8, pwm_sync: u16) {
        self.cores.borrow_mut().insert(
            core,
            Comparator {
                pwm_sync,
                ..Comparator::default()
            },
        );
    }

    fn set_thresholds(&self, core: u8, high: u16, low: u16) {
        let mut cores = self.cores.borrow_mut();
        let c = cores.entry(core).or_default();
        c.high = high;
        c.low = low;
    }

    fn clear_latch(&self, core: u8) {
        self.cores.borrow_mut().entry(core).or_default().latch_clears += 1;
    }

    fn route_trip(&self, _ep: &Eallow<'_>, trip: u16, mux_config: u32, mux_enable: u32) {
        self.trips.borrow_mut().push(TripRoute {
            trip,
            mux_config,
            mux_enable,
        });
    }
}

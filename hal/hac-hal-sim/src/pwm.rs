//! Simulated ePWM generators

use std::cell::RefCell;
use std::collections::BTreeMap;

use hac_hal::pwm::{Compare, GeneratorConfig, SocOutput, SocSource};
use hac_hal::{Eallow, PwmPort};

/// Register-visible state of one generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generator {
    pub config: GeneratorConfig,
    pub cmpa: u16,
    pub cmpb: u16,
    pub soc_a: Option<(SocSource, u8)>,
    pub soc_b: Option<(SocSource, u8)>,
    pub tripped: bool,
}

#[derive(Debug, Default)]
pub struct SimPwm {
    generators: RefCell<BTreeMap<u8, Generator>>,
}

impl SimPwm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generator(&self, num: u8) -> Option<Generator> {
        self.generators.borrow().get(&num).copied()
    }

    fn with(&self, num: u8, f: impl FnOnce(&mut Generator)) {
        if let Some(g) = self.generators.borrow_mut().get_mut(&num) {
            f(g);
        }
    }
}

impl PwmPort for SimPwm {
    fn configure(&self, _ep: &Eallow<'_>, num: u8, cfg: &GeneratorConfig) {
        self.generators.borrow_mut().insert(
            num,
            Generator {
                config: *cfg,
                cmpa: 0,
                cmpb: 0,
                soc_a: None,
                soc_b: None,
                tripped: true,
            },
        );
    }

    fn set_compare(&self, num: u8, compare: Compare, value: u16) {
        self.with(num, |g| match compare {
            Compare::A => g.cmpa = value,
            Compare::B => g.cmpb = value,
        });
    }

    fn set_adc_trigger(&self, num: u8, output: SocOutput, source: SocSource, prescale: u8) {
        let mut generators = self.generators.borrow_mut();
        let g = generators.entry(num).or_insert(Generator {
            config: GeneratorConfig {
                div: 0,
                period: 0,
                phase: None,
                independent_b: false,
                dead_band: 0,
            },
            cmpa: 0,
            cmpb: 0,
            soc_a: None,
            soc_b: None,
            tripped: false,
        });
        let route = (prescale > 0).then_some((source, prescale));
        match output {
            SocOutput::SocA => g.soc_a = route,
            SocOutput::SocB => g.soc_b = route,
        }
    }

    fn force_trip(&self, _ep: &Eallow<'_>, num: u8) {
        self.with(num, |g| g.tripped = true);
    }

    fn clear_trip(&self, _ep: &Eallow<'_>, num: u8) {
        self.with(num, |g| g.tripped = false);
    }

    fn tripped(&self, num: u8) -> bool {
        self.generators
            .borrow()
            .get(&num)
            .map(|g| g.tripped)
            .unwrap_or(false)
    }
}

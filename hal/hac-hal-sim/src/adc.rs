//! Simulated ADC cores
//!
//! Conversions complete the moment they are forced. A result is the input
//! applied to the SOC's channel plus the core's offset error, corrected by
//! the offset trim register. With VREFLO connected the input is zero.

use std::cell::RefCell;

use hac_hal::adc::{SocConfig, SOC_COUNT};
use hac_hal::{AdcPort, Eallow};

/// Cores modelled (ADCA..ADCD)
pub const CORES: usize = 4;
const LINES: usize = 16;
const CHANNELS: usize = 16;
const FULL_SCALE: i32 = 4095;

#[derive(Debug, Clone)]
struct Core {
    div: Option<u8>,
    socs: [Option<SocConfig>; SOC_COUNT as usize],
    lines: [Option<u8>; LINES],
    flags: [bool; LINES],
    results: [u16; SOC_COUNT as usize],
    inputs: [u16; CHANNELS],
    trim: u16,
    offset_error: i16,
    vreflo: bool,
}

impl Core {
    fn new() -> Self {
        Self {
            div: None,
            socs: [None; SOC_COUNT as usize],
            lines: [None; LINES],
            flags: [false; LINES],
            results: [0; SOC_COUNT as usize],
            inputs: [0; CHANNELS],
            trim: 0,
            offset_error: 0,
            vreflo: false,
        }
    }
}

#[derive(Debug)]
pub struct SimAdc {
    cores: RefCell<Vec<Core>>,
}

impl Default for SimAdc {
    fn default() -> Self {
        Self::new()
    }
}

fn slot(core: u8) -> usize {
    usize::from(core.saturating_sub(1))
}

impl SimAdc {
    pub fn new() -> Self {
        Self {
            cores: RefCell::new(vec![Core::new(); CORES]),
        }
    }

    /// Apply a raw level to an analog input
    pub fn set_input(&self, core: u8, channel: u8, value: u16) {
        self.cores.borrow_mut()[slot(core)].inputs[usize::from(channel)] = value;
    }

    /// Offset error of the converter in LSB
    pub fn set_offset_error(&self, core: u8, error: i16) {
        self.cores.borrow_mut()[slot(core)].offset_error = error;
    }

    /// Prescaler programmed at core init, `None` if never initialized
    pub fn divider(&self, core: u8) -> Option<u8> {
        self.cores.borrow()[slot(core)].div
    }

    pub fn soc(&self, core: u8, soc: u8) -> Option<SocConfig> {
        self.cores.borrow()[slot(core)].socs[usize::from(soc)]
    }

    /// SOC routed to an interrupt line
    pub fn interrupt_source(&self, core: u8, line: u8) -> Option<u8> {
        self.cores.borrow()[slot(core)].lines[usize::from(line.saturating_sub(1))]
    }

    pub fn trim(&self, core: u8) -> u16 {
        self.cores.borrow()[slot(core)].trim
    }

    pub fn vreflo_connected(&self, core: u8) -> bool {
        self.cores.borrow()[slot(core)].vreflo
    }

    fn convert(c: &Core, channel: u8) -> u16 {
        let input = if c.vreflo {
            0
        } else {
            i32::from(c.inputs[usize::from(channel) % CHANNELS])
        };
        let raw = input + i32::from(c.offset_error) + i32::from(c.trim as i16);
        raw.clamp(0, FULL_SCALE) as u16
    }
}

impl AdcPort for SimAdc {
    fn init_core(&self, _ep: &Eallow<'_>, core: u8, div: u8) {
        let mut cores = self.cores.borrow_mut();
        let c = &mut cores[slot(core)];
        let (inputs, offset_error) = (c.inputs, c.offset_error);
        *c = Core::new();
        c.inputs = inputs;
        c.offset_error = offset_error;
        c.div = Some(div);
    }

    fn configure_soc(&self, _ep: &Eallow<'_>, core: u8, soc: u8, cfg: SocConfig) {
        self.cores.borrow_mut()[slot(core)].socs[usize::from(soc)] = Some(cfg);
    }

    fn configure_interrupt(&self, _ep: &Eallow<'_>, core: u8, line: u8, soc: u8) {
        let mut cores = self.cores.borrow_mut();
        let c = &mut cores[slot(core)];
        let l = usize::from(line.saturating_sub(1));
        c.lines[l] = Some(soc);
        c.flags[l] = false;
    }

    fn disable_interrupt(&self, _ep: &Eallow<'_>, core: u8, line: u8) {
        let mut cores = self.cores.borrow_mut();
        cores[slot(core)].lines[usize::from(line.saturating_sub(1))] = None;
    }

    fn force_soc(&self, core: u8, mask: u16) {
        let mut cores = self.cores.borrow_mut();
        let c = &mut cores[slot(core)];
        for soc in 0..SOC_COUNT {
            if mask & (1 << soc) == 0 {
                continue;
            }
            let Some(cfg) = c.socs[usize::from(soc)] else {
                continue;
            };
            let value = Self::convert(c, cfg.channel);
            c.results[usize::from(soc)] = value;
            for l in 0..LINES {
                if c.lines[l] == Some(soc) {
                    c.flags[l] = true;
                }
            }
        }
    }

    fn interrupt_flag(&self, core: u8, line: u8) -> bool {
        self.cores.borrow()[slot(core)].flags[usize::from(line.saturating_sub(1))]
    }

    fn clear_interrupt_flag(&self, core: u8, line: u8) {
        self.cores.borrow_mut()[slot(core)].flags[usize::from(line.saturating_sub(1))] = false;
    }

    fn result(&self, core: u8, soc: u8) -> u16 {
        self.cores.borrow()[slot(core)].results[usize::from(soc)]
    }

    fn set_offset_trim(&self, _ep: &Eallow<'_>, core: u8, trim: u16) {
        self.cores.borrow_mut()[slot(core)].trim = trim;
    }

    fn connect_vreflo(&self, _ep: &Eallow<'_>, core: u8, connected: bool) {
        self.cores.borrow_mut()[slot(core)].vreflo = connected;
    }
}

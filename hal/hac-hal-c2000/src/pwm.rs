//! Type-4 ePWM generators
//!
//! Generators share one register file layout at a fixed stride. The
//! digital compare A event 2 is wired to TRIPIN4 and trips cycle by cycle;
//! the comparator subsystem decides what drives TRIPIN4.

use hac_hal::pwm::{Compare, GeneratorConfig, PwmPort, SocOutput, SocSource, SyncDirection};
use hac_hal::Eallow;

use crate::reg::{Field, Reg};

/// EPWM1 of the F28004x (EPWM2..8 follow at the stride)
pub const EPWM1_F28004X: usize = 0x4000;
pub const EPWM_STRIDE_F28004X: usize = 0x100;

mod off {
    pub const TBCTL: u16 = 0x00;
    pub const CMPCTL: u16 = 0x08;
    pub const DBCTL: u16 = 0x0C;
    pub const AQCTLA: u16 = 0x10;
    pub const AQCTLB: u16 = 0x12;
    pub const DBRED: u16 = 0x51;
    pub const DBFED: u16 = 0x53;
    /// High word of the 32-bit TBPHS:TBPHSHR pair
    pub const TBPHS: u16 = 0x61;
    pub const TBPRD: u16 = 0x63;
    pub const CMPA: u16 = 0x6B;
    pub const CMPB: u16 = 0x6D;
    pub const TZSEL: u16 = 0x80;
    pub const TZDCSEL: u16 = 0x82;
    pub const TZCTL: u16 = 0x84;
    pub const TZFLG: u16 = 0x93;
    pub const TZCLR: u16 = 0x97;
    pub const TZFRC: u16 = 0x9B;
    pub const ETSEL: u16 = 0xA4;
    pub const ETPS: u16 = 0xA6;
    pub const DCTRIPSEL: u16 = 0xC0;
    pub const DCACTL: u16 = 0xC3;
}

const CTRMODE: Field = Field::new(0, 2);
const CTRMODE_UP_DOWN: u32 = 2;
const PHSEN: Field = Field::bit(2);
const SYNCOSEL: Field = Field::new(4, 2);
const SYNCOSEL_CTR_ZERO: u32 = 1;
const CLKDIV: Field = Field::new(10, 3);
const PHSDIR: Field = Field::bit(13);
const FREE_SOFT: Field = Field::new(14, 2);
const FREE_RUN: u32 = 2;

/// Load CMPA and CMPB from shadow on counter equal period
const CMPCTL_LOAD_ON_PERIOD: u16 = 1 | (1 << 2);

const OUT_MODE_BOTH: u16 = 3;
/// Active high complementary: FED output inverted
const POLSEL_AHC: u16 = 2 << 2;

/// Action qualifier fields
const CAU: Field = Field::new(4, 2);
const CAD: Field = Field::new(6, 2);
const CBU: Field = Field::new(8, 2);
const CBD: Field = Field::new(10, 2);
const AQ_CLEAR: u32 = 1;
const AQ_SET: u32 = 2;

/// TZSEL cycle-by-cycle DCAEVT2
const TZSEL_DCAEVT2: u16 = 1 << 6;
/// TZDCSEL DCAEVT2 on DCAH high
const DCAEVT2_DCAH_HIGH: Field = Field::new(3, 3);
const DCAHCOMPSEL: Field = Field::new(0, 4);
const TRIPIN4: u32 = 3;
/// DCACTL event 2 from the original signal, not synchronized
const EVT2FRCSYNCSEL: Field = Field::bit(9);
const TZA: Field = Field::new(0, 2);
const TZB: Field = Field::new(2, 2);
const TZ_FORCE_LOW: u32 = 2;
const OST: u16 = 1 << 2;

const SOCASEL: Field = Field::new(8, 3);
const SOCAEN: Field = Field::bit(11);
const SOCBSEL: Field = Field::new(12, 3);
const SOCBEN: Field = Field::bit(15);
const SOCAPRD: Field = Field::new(8, 2);
const SOCBPRD: Field = Field::new(12, 2);

pub struct C2000Pwm {
    base: usize,
    stride: usize,
}

impl C2000Pwm {
    /// # Safety
    /// `base` must be the EPWM1 register file of the running device and
    /// `stride` the distance between generators.
    pub const unsafe fn new(base: usize, stride: usize) -> Self {
        Self { base, stride }
    }

    fn reg(&self, num: u8, offset: u16) -> Reg<u16> {
        let base = self.base + usize::from(num.saturating_sub(1)) * self.stride;
        // SAFETY: offsets stay inside the generator's register file
        unsafe { Reg::offset(base as *mut u16, offset) }
    }
}

impl PwmPort for C2000Pwm {
    fn configure(&self, ep: &Eallow<'_>, num: u8, cfg: &GeneratorConfig) {
        let tbctl = self.reg(num, off::TBCTL);
        tbctl.write_field(CTRMODE, CTRMODE_UP_DOWN);
        tbctl.write_field(CLKDIV, u32::from(cfg.div));
        tbctl.write_field(FREE_SOFT, FREE_RUN);
        // The first generator drives the sync chain, the rest pass it on
        tbctl.write_field(SYNCOSEL, if num == 1 { SYNCOSEL_CTR_ZERO } else { 0 });
        match cfg.phase {
            Some(phase) => {
                self.reg(num, off::TBPHS).write(phase.count);
                tbctl.write_field(PHSDIR, u32::from(phase.direction == SyncDirection::Up));
                tbctl.set_bits(PHSEN.mask());
            }
            None => tbctl.clear_bits(PHSEN.mask()),
        }
        self.reg(num, off::TBPRD).write(cfg.period);

        self.reg(num, off::CMPCTL).write(CMPCTL_LOAD_ON_PERIOD);
        self.set_compare(num, Compare::A, 0);
        self.set_compare(num, Compare::B, 0);

        let aqa = self.reg(num, off::AQCTLA);
        aqa.write(0);
        aqa.write_field(CAU, AQ_CLEAR);
        aqa.write_field(CAD, AQ_SET);
        let aqb = self.reg(num, off::AQCTLB);
        aqb.write(0);
        if cfg.independent_b {
            aqb.write_field(CBU, AQ_SET);
            aqb.write_field(CBD, AQ_CLEAR);
            self.reg(num, off::DBCTL).write(0);
        } else {
            self.reg(num, off::DBRED).write(cfg.dead_band);
            self.reg(num, off::DBFED).write(cfg.dead_band);
            self.reg(num, off::DBCTL).write(OUT_MODE_BOTH | POLSEL_AHC);
        }

        self.reg(num, off::DCTRIPSEL).write_field(DCAHCOMPSEL, TRIPIN4);
        self.reg(num, off::TZDCSEL).write_field(DCAEVT2_DCAH_HIGH, 2);
        self.reg(num, off::DCACTL).set_bits(EVT2FRCSYNCSEL.mask());
        self.reg(num, off::TZSEL).set_bits(u32::from(TZSEL_DCAEVT2));

        let tzctl = self.reg(num, off::TZCTL);
        tzctl.write_field(TZA, TZ_FORCE_LOW);
        tzctl.write_field(TZB, TZ_FORCE_LOW);
        self.reg(num, off::TZCLR).write(OST);
        self.force_trip(ep, num);
    }

    fn set_compare(&self, num: u8, compare: Compare, value: u16) {
        let offset = match compare {
            Compare::A => off::CMPA,
            Compare::B => off::CMPB,
        };
        self.reg(num, offset).write(value);
    }

    fn set_adc_trigger(&self, num: u8, output: SocOutput, source: SocSource, prescale: u8) {
        let (sel, en, prd) = match output {
            SocOutput::SocA => (SOCASEL, SOCAEN, SOCAPRD),
            SocOutput::SocB => (SOCBSEL, SOCBEN, SOCBPRD),
        };
        let etsel = self.reg(num, off::ETSEL);
        etsel.write_field(sel, source as u32);
        self.reg(num, off::ETPS).write_field(prd, u32::from(prescale.min(3)));
        etsel.write_field(en, u32::from(prescale != 0));
    }

    fn force_trip(&self, _ep: &Eallow<'_>, num: u8) {
        self.reg(num, off::TZFRC).write(OST);
    }

    fn clear_trip(&self, _ep: &Eallow<'_>, num: u8) {
        self.reg(num, off::TZCLR).write(OST);
    }

    fn tripped(&self, num: u8) -> bool {
        self.reg(num, off::TZFLG).read() & OST != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reg::fake::Block;
    use hac_hal::pwm::Phase;
    use hac_hal::Protect;

    struct NoProtect;

    impl Protect for NoProtect {
        fn allow(&self) {}
        fn deny(&self) {}
    }

    const CFG: GeneratorConfig = GeneratorConfig {
        div: 1,
        period: 1000,
        phase: Some(Phase { count: 120, direction: SyncDirection::Up }),
        independent_b: false,
        dead_band: 25,
    };

    #[test]
    fn test_second_generator_time_base() {
        let mut b = Block::<0x200>::new();
        let pwm = unsafe { C2000Pwm::new(b.base() as usize, 0x100) };
        let ep = Eallow::new(&NoProtect);
        pwm.configure(&ep, 2, &CFG);
        drop(ep);
        let g = 0x100;
        let tbctl = b.0[g];
        assert_eq!(tbctl & 0b11, 2);
        assert_ne!(tbctl & (1 << 2), 0);
        assert_ne!(tbctl & (1 << 13), 0);
        assert_eq!((tbctl >> 10) & 0b111, 1);
        assert_eq!((tbctl >> 4) & 0b11, 0);
        assert_eq!(b.0[g + off::TBPRD as usize], 1000);
        assert_eq!(b.0[g + off::TBPHS as usize], 120);
        assert_eq!(b.0[0], 0);
    }

    #[test]
    fn test_complementary_outputs_get_dead_band() {
        let mut b = Block::<0x100>::new();
        let pwm = unsafe { C2000Pwm::new(b.base() as usize, 0x100) };
        let ep = Eallow::new(&NoProtect);
        pwm.configure(&ep, 1, &CFG);
        drop(ep);
        assert_eq!(b.0[off::DBCTL as usize], 0b1011);
        assert_eq!(b.0[off::DBRED as usize], 25);
        assert_eq!(b.0[off::DBFED as usize], 25);
        assert_eq!(b.0[off::AQCTLA as usize], (1 << 4) | (2 << 6));
        assert_eq!(b.0[off::AQCTLB as usize], 0);
        // Sync chain head
        assert_eq!((b.0[0] >> 4) & 0b11, 1);
    }

    #[test]
    fn test_independent_b_and_trip_setup() {
        let mut b = Block::<0x100>::new();
        let pwm = unsafe { C2000Pwm::new(b.base() as usize, 0x100) };
        let cfg = GeneratorConfig { independent_b: true, phase: None, ..CFG };
        let ep = Eallow::new(&NoProtect);
        pwm.configure(&ep, 1, &cfg);
        drop(ep);
        assert_eq!(b.0[off::DBCTL as usize], 0);
        assert_eq!(b.0[off::AQCTLB as usize], (2 << 8) | (1 << 10));
        assert_eq!(b.0[off::TZCTL as usize], 0b1010);
        assert_eq!(b.0[off::TZSEL as usize], 1 << 6);
        assert_eq!(b.0[off::DCTRIPSEL as usize], 3);
        assert_eq!(b.0[off::TZFRC as usize], OST);
        assert_eq!(b.0[0] & (1 << 2), 0);
    }

    #[test]
    fn test_adc_trigger_and_trip_flag() {
        let mut b = Block::<0x100>::new();
        let pwm = unsafe { C2000Pwm::new(b.base() as usize, 0x100) };
        pwm.set_adc_trigger(1, SocOutput::SocB, SocSource::CompareAUp, 1);
        assert_eq!(b.0[off::ETSEL as usize], (4 << 12) | (1 << 15));
        assert_eq!(b.0[off::ETPS as usize], 1 << 12);
        pwm.set_adc_trigger(1, SocOutput::SocB, SocSource::CompareAUp, 0);
        assert_eq!(b.0[off::ETSEL as usize], 4 << 12);
        pwm.set_compare(1, Compare::B, 333);
        assert_eq!(b.0[off::CMPB as usize], 333);
        assert!(!pwm.tripped(1));
        b.0[off::TZFLG as usize] = OST;
        assert!(pwm.tripped(1));
    }
}

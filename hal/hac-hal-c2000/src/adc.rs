//! Type-4 ADC cores
//!
//! Each core has a control block and a separate result block. Cores are
//! laid out at a fixed stride in both regions.

use hac_hal::adc::{AdcPort, SocConfig};
use hac_hal::Eallow;

use crate::reg::{Field, Reg};

/// Core layout
#[derive(Debug, Clone, Copy)]
pub struct AdcMap {
    pub ctrl: usize,
    pub ctrl_stride: usize,
    pub result: usize,
    pub result_stride: usize,
}

/// ADCA..ADCC of the F28004x
pub const ADC_F28004X: AdcMap = AdcMap {
    ctrl: 0x7400,
    ctrl_stride: 0x80,
    result: 0x0B00,
    result_stride: 0x20,
};

const ADCCTL1: u16 = 0x00;
const ADCCTL2: u16 = 0x01;
const ADCINTFLG: u16 = 0x03;
const ADCINTFLGCLR: u16 = 0x04;
const ADCINTOVFCLR: u16 = 0x06;
/// ADCINTSEL1N2; lines 3 and 4 are in the next word
const ADCINTSEL1N2: u16 = 0x07;
const ADCSOCPRICTL: u16 = 0x09;
const ADCSOCFRC1: u16 = 0x0D;
/// SOCn control is at `ADCSOC0CTL + 2 * n`
const ADCSOC0CTL: u16 = 0x10;
const ADCOFFTRIM: u16 = 0x3B;

const INTPULSEPOS: Field = Field::bit(2);
const ADCPWDNZ: Field = Field::bit(7);
const PRESCALE: Field = Field::new(0, 4);
/// Every SOC in high priority, no round robin
const SOCPRIORITY: Field = Field::new(0, 5);
const ALL_HIGH_PRIORITY: u32 = 0x10;

const ACQPS: Field = Field::new(0, 9);
const CHSEL: Field = Field::new(15, 4);
const TRIGSEL: Field = Field::new(20, 5);

/// Interrupt line select fields, relative to the line's byte
const INTSEL: Field = Field::new(0, 4);
const INTE: Field = Field::bit(5);
const INTCONT: Field = Field::bit(6);

pub struct C2000Adc {
    map: AdcMap,
}

impl C2000Adc {
    /// # Safety
    /// `map` must describe the ADC control and result blocks of the
    /// running device.
    pub const unsafe fn new(map: AdcMap) -> Self {
        Self { map }
    }

    fn ctrl<T: crate::reg::RegValue>(&self, core: u8, offset: u16) -> Reg<T> {
        let base = self.map.ctrl + usize::from(core.saturating_sub(1)) * self.map.ctrl_stride;
        // SAFETY: offsets stay inside the core's control block
        unsafe { Reg::offset(base as *mut u16, offset) }
    }

    /// Interrupt select register of `line` and the field shift of its byte
    fn intsel(&self, core: u8, line: u8) -> (Reg<u16>, u8) {
        let index = line.saturating_sub(1);
        let reg = self.ctrl(core, ADCINTSEL1N2 + u16::from(index / 2));
        (reg, (index % 2) * 8)
    }

    fn shifted(field: Field, by: u8) -> Field {
        Field::new(field.shift + by, field.width)
    }

    fn line_bit(line: u8) -> u32 {
        Field::bit(line.saturating_sub(1)).mask()
    }
}

/// PRESCALE encoding of an integer SYSCLK divider (half steps are skipped)
fn prescale(div: u8) -> u32 {
    match div {
        0 | 1 => 0,
        d => 2 * (u32::from(d.min(8)) - 1),
    }
}

impl AdcPort for C2000Adc {
    fn init_core(&self, _ep: &Eallow<'_>, core: u8, div: u8) {
        let ctl1 = self.ctrl::<u16>(core, ADCCTL1);
        ctl1.write_field(ADCPWDNZ, 0);
        self.ctrl::<u16>(core, ADCCTL2).write_field(PRESCALE, prescale(div));
        // The analog reference stays at its reset default (internal)
        ctl1.set_bits(ADCPWDNZ.mask() | INTPULSEPOS.mask());
        self.ctrl::<u16>(core, ADCSOCPRICTL)
            .write_field(SOCPRIORITY, ALL_HIGH_PRIORITY);
    }

    fn configure_soc(&self, _ep: &Eallow<'_>, core: u8, soc: u8, cfg: SocConfig) {
        let reg = self.ctrl::<u32>(core, ADCSOC0CTL + 2 * u16::from(soc));
        reg.write(
            (cfg.window << ACQPS.shift) & ACQPS.mask()
                | (u32::from(cfg.channel) << CHSEL.shift) & CHSEL.mask()
                | (u32::from(cfg.trigger) << TRIGSEL.shift) & TRIGSEL.mask(),
        );
    }

    fn configure_interrupt(&self, _ep: &Eallow<'_>, core: u8, line: u8, soc: u8) {
        let (reg, by) = self.intsel(core, line);
        reg.write_field(Self::shifted(INTSEL, by), u32::from(soc));
        reg.write_field(Self::shifted(INTCONT, by), 0);
        reg.set_bits(Self::shifted(INTE, by).mask());
        self.ctrl::<u16>(core, ADCINTFLGCLR).write(Self::line_bit(line) as u16);
        self.ctrl::<u16>(core, ADCINTOVFCLR).write(Self::line_bit(line) as u16);
    }

    fn disable_interrupt(&self, _ep: &Eallow<'_>, core: u8, line: u8) {
        let (reg, by) = self.intsel(core, line);
        reg.clear_bits(Self::shifted(INTE, by).mask());
    }

    fn force_soc(&self, core: u8, mask: u16) {
        self.ctrl::<u16>(core, ADCSOCFRC1).write(mask);
    }

    fn interrupt_flag(&self, core: u8, line: u8) -> bool {
        u32::from(self.ctrl::<u16>(core, ADCINTFLG).read()) & Self::line_bit(line) != 0
    }

    fn clear_interrupt_flag(&self, core: u8, line: u8) {
        self.ctrl::<u16>(core, ADCINTFLGCLR).write(Self::line_bit(line) as u16);
    }

    fn result(&self, core: u8, soc: u8) -> u16 {
        let base =
            self.map.result + usize::from(core.saturating_sub(1)) * self.map.result_stride;
        // SAFETY: one result word per SOC inside the core's result block
        unsafe { Reg::<u16>::offset(base as *mut u16, u16::from(soc)) }.read()
    }

    fn set_offset_trim(&self, _ep: &Eallow<'_>, core: u8, trim: u16) {
        self.ctrl::<u16>(core, ADCOFFTRIM).write(trim);
    }

    fn connect_vreflo(&self, _ep: &Eallow<'_>, _core: u8, _connected: bool) {
        // VREFLO is a fixed converter input on this part
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reg::fake::Block;
    use hac_hal::Protect;

    struct NoProtect;

    impl Protect for NoProtect {
        fn allow(&self) {}
        fn deny(&self) {}
    }

    fn adc(ctrl: &mut Block<0x100>, result: &mut Block<0x40>) -> C2000Adc {
        let map = AdcMap {
            ctrl: ctrl.base() as usize,
            ctrl_stride: 0x80,
            result: result.base() as usize,
            result_stride: 0x20,
        };
        unsafe { C2000Adc::new(map) }
    }

    #[test]
    fn test_prescale_encoding() {
        assert_eq!(prescale(1), 0);
        assert_eq!(prescale(2), 2);
        assert_eq!(prescale(4), 6);
        assert_eq!(prescale(8), 14);
    }

    #[test]
    fn test_init_and_soc_fields() {
        let mut c = Block::<0x100>::new();
        let mut r = Block::<0x40>::new();
        let port = adc(&mut c, &mut r);
        let ep = Eallow::new(&NoProtect);
        port.init_core(&ep, 2, 4);
        port.configure_soc(&ep, 2, 3, SocConfig { trigger: 5, channel: 2, window: 14 });
        drop(ep);
        assert_eq!(c.0[0x80 + ADCCTL2 as usize], 6);
        assert_eq!(c.0[0x80 + ADCCTL1 as usize], (1 << 7) | (1 << 2));
        assert_eq!(c.0[0x80 + ADCSOCPRICTL as usize], 0x10);
        assert_eq!(c.word32(0x80 + 0x16), 14 | (2 << 15) | (5 << 20));
    }

    #[test]
    fn test_interrupt_line_four_uses_upper_byte() {
        let mut c = Block::<0x100>::new();
        let mut r = Block::<0x40>::new();
        let port = adc(&mut c, &mut r);
        let ep = Eallow::new(&NoProtect);
        port.configure_interrupt(&ep, 1, 4, 7);
        drop(ep);
        assert_eq!(c.0[0x08], (7 << 8) | (1 << 13));
        assert_eq!(c.0[ADCINTFLGCLR as usize], 1 << 3);
        c.0[ADCINTFLG as usize] = 1 << 3;
        assert!(port.interrupt_flag(1, 4));
        assert!(!port.interrupt_flag(1, 1));
    }

    #[test]
    fn test_result_block_per_core() {
        let mut c = Block::<0x100>::new();
        let mut r = Block::<0x40>::new();
        r.0[0x20 + 5] = 2048;
        let port = adc(&mut c, &mut r);
        assert_eq!(port.result(2, 5), 2048);
        assert_eq!(port.result(1, 5), 0);
    }
}

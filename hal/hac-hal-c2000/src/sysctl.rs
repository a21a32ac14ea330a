//! System control: clock tree, peripheral clock gates, soft resets and
//! flash read timing
//!
//! Spread over four register blocks: ClkCfgRegs (oscillator select and
//! PLL), CpuSysRegs (PCLKCRx gates), DevCfgRegs (SOFTPRESx resets) and the
//! flash controller (FRDCNTL).

use hac_hal::sysctl::{ClockSource, Peripheral, SysCtl};
use hac_hal::Eallow;

use crate::reg::{Field, Reg};

/// Register block bases
#[derive(Debug, Clone, Copy)]
pub struct SysCtlMap {
    pub clk: usize,
    pub cpusys: usize,
    pub devcfg: usize,
    pub flash: usize,
}

pub const SYSCTL_F28004X: SysCtlMap = SysCtlMap {
    clk: 0x5D200,
    cpusys: 0x5D300,
    devcfg: 0x5D000,
    flash: 0x5F800,
};

mod clk {
    pub const CLKSRCCTL1: u16 = 0x08;
    pub const SYSPLLCTL1: u16 = 0x0E;
    pub const SYSPLLMULT: u16 = 0x14;
    pub const SYSPLLSTS: u16 = 0x16;
    pub const SYSCLKDIVSEL: u16 = 0x22;
    pub const XTALCR: u16 = 0x32;
}

/// PCLKCRn is at `PCLKCR0 + 2 * n`
const PCLKCR0: u16 = 0x22;
/// SOFTPRESn is at `SOFTPRES0 + 2 * n`
const SOFTPRES0: u16 = 0x82;
const FRDCNTL: u16 = 0x00;

const OSCCLKSRCSEL: Field = Field::new(0, 2);
const PLLEN: Field = Field::bit(0);
const PLLCLKEN: Field = Field::bit(1);
const IMULT: Field = Field::new(0, 7);
const FMULT: Field = Field::new(8, 2);
const LOCKS: Field = Field::bit(0);
const PLLSYSCLKDIV: Field = Field::new(0, 6);
const OSCOFF: Field = Field::bit(0);
const TBCLKSYNC: Field = Field::bit(2);
const RWAIT: Field = Field::new(8, 4);

const SRC_INTOSC2: u32 = 0;
const SRC_XTAL: u32 = 1;

/// PLL output (PLLRAWCLK) operating range
const PLL_RAW_MIN_HZ: u64 = 120_000_000;
const PLL_RAW_MAX_HZ: u64 = 200_000_000;
const IMULT_MAX: u64 = 127;
/// Largest even SYSCLK divider (PLLSYSCLKDIV field 63)
const SYSDIV_MAX: u64 = 126;
const LOCK_POLLS: u32 = 10_000;

/// PLL settings reaching one SYSCLK frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PllSetting {
    imult: u32,
    fmult: u32,
    /// PLLSYSCLKDIV field (divider is twice the field, 0 divides by 1)
    div_field: u32,
}

/// First setting with an exact quarter-step multiplier and the PLL output
/// in range, smallest divider first
fn pll_setting(input_hz: u32, output_hz: u32) -> Option<PllSetting> {
    let input = u64::from(input_hz);
    let output = u64::from(output_hz);
    if input == 0 || output == 0 {
        return None;
    }
    core::iter::once(1)
        .chain((2..=SYSDIV_MAX).step_by(2))
        .find_map(|div| {
            let raw = output * div;
            if !(PLL_RAW_MIN_HZ..=PLL_RAW_MAX_HZ).contains(&raw) || (raw * 4) % input != 0 {
                return None;
            }
            let quarters = raw * 4 / input;
            let imult = quarters / 4;
            if imult == 0 || imult > IMULT_MAX {
                return None;
            }
            Some(PllSetting {
                imult: imult as u32,
                fmult: (quarters % 4) as u32,
                div_field: (div / 2) as u32,
            })
        })
}

/// Peripheral to `(PCLKCR/SOFTPRES index, bit)`
fn gate(periph: Peripheral) -> (u16, u8) {
    match periph {
        Peripheral::Epwm(n) => (2, n.saturating_sub(1)),
        Peripheral::Ecap(n) => (3, n.saturating_sub(1)),
        Peripheral::Sdfm(n) => (6, n.saturating_sub(1)),
        Peripheral::Spi(n) => (8, n),
        Peripheral::I2c(n) => (9, n),
        Peripheral::Can(n) => (10, n),
        Peripheral::Adc(n) => (13, n.saturating_sub(1)),
        Peripheral::Cmpss(n) => (14, n.saturating_sub(1)),
        Peripheral::Pga(n) => (15, n.saturating_sub(1)),
        Peripheral::FsiTx(n) => (18, n),
        Peripheral::FsiRx(n) => (18, 16 + n),
    }
}

pub struct C2000SysCtl {
    map: SysCtlMap,
}

impl C2000SysCtl {
    /// # Safety
    /// Every base in `map` must be the matching register block of the
    /// running device.
    pub const unsafe fn new(map: SysCtlMap) -> Self {
        Self { map }
    }

    fn reg<T: crate::reg::RegValue>(base: usize, offset: u16) -> Reg<T> {
        // SAFETY: offsets stay inside the blocks given to `new`
        unsafe { Reg::offset(base as *mut u16, offset) }
    }

    fn clk32(&self, offset: u16) -> Reg<u32> {
        Self::reg(self.map.clk, offset)
    }

    fn pclkcr(&self, index: u16) -> Reg<u32> {
        Self::reg(self.map.cpusys, PCLKCR0 + 2 * index)
    }

    fn softpres(&self, index: u16) -> Reg<u32> {
        Self::reg(self.map.devcfg, SOFTPRES0 + 2 * index)
    }

    fn wait_lock(&self) -> bool {
        let sts = self.clk32(clk::SYSPLLSTS);
        (0..LOCK_POLLS).any(|_| sts.is_set(LOCKS))
    }
}

impl SysCtl for C2000SysCtl {
    fn set_flash_wait_states(&self, _ep: &Eallow<'_>, paged: u8, random: u8, otp: u8) {
        // One read wait count covers every access type on this part
        let wait = paged.max(random).max(otp);
        Self::reg::<u32>(self.map.flash, FRDCNTL).write_field(RWAIT, u32::from(wait));
    }

    fn set_pll(
        &self,
        _ep: &Eallow<'_>,
        source: ClockSource,
        input_hz: u32,
        output_hz: u32,
    ) -> bool {
        let Some(setting) = pll_setting(input_hz, output_hz) else {
            return false;
        };

        let ctl = self.clk32(clk::SYSPLLCTL1);
        let divsel = self.clk32(clk::SYSCLKDIVSEL);
        // Run from the raw oscillator while the PLL is reprogrammed
        ctl.clear_bits(PLLCLKEN.mask());
        ctl.clear_bits(PLLEN.mask());

        let src = match source {
            ClockSource::Internal => SRC_INTOSC2,
            ClockSource::Xtal => {
                self.clk32(clk::XTALCR).write_field(OSCOFF, 0);
                SRC_XTAL
            }
        };
        self.clk32(clk::CLKSRCCTL1).write_field(OSCCLKSRCSEL, src);

        // Slowest divider until lock so the switch-over cannot overshoot
        divsel.write_field(PLLSYSCLKDIV, PLLSYSCLKDIV.mask());
        let mult = self.clk32(clk::SYSPLLMULT);
        mult.write_field(FMULT, setting.fmult);
        mult.write_field(IMULT, setting.imult);
        ctl.set_bits(PLLEN.mask());

        if !self.wait_lock() {
            ctl.clear_bits(PLLEN.mask());
            return false;
        }
        ctl.set_bits(PLLCLKEN.mask());
        divsel.write_field(PLLSYSCLKDIV, setting.div_field);
        true
    }

    fn enable_peripheral(&self, _ep: &Eallow<'_>, periph: Peripheral) {
        let (index, bit) = gate(periph);
        self.pclkcr(index).set_bits(Field::bit(bit).mask());
    }

    fn disable_peripheral(&self, _ep: &Eallow<'_>, periph: Peripheral) {
        let (index, bit) = gate(periph);
        self.pclkcr(index).clear_bits(Field::bit(bit).mask());
    }

    fn reset_peripheral(&self, _ep: &Eallow<'_>, periph: Peripheral) {
        let (index, bit) = gate(periph);
        let reg = self.softpres(index);
        reg.set_bits(Field::bit(bit).mask());
        reg.clear_bits(Field::bit(bit).mask());
    }

    fn set_tbclk_sync(&self, _ep: &Eallow<'_>, enabled: bool) {
        self.pclkcr(0).write_field(TBCLKSYNC, u32::from(enabled));
    }

    fn delay_cycles(&self, cycles: u32) {
        #[cfg(feature = "rt")]
        {
            extern "C" {
                fn hac_rt_delay_cycles(cycles: u32);
            }
            // SAFETY: busy loop in the runtime shim, no memory effects
            unsafe { hac_rt_delay_cycles(cycles) }
        }
        #[cfg(not(feature = "rt"))]
        for _ in 0..cycles {
            core::hint::spin_loop();
        }
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

    struct Blocks {
        clk: Block<0x40>,
        cpusys: Block<0x50>,
        devcfg: Block<0xA0>,
        flash: Block<0x04>,
    }

    impl Blocks {
        fn new() -> Self {
            Self {
                clk: Block::new(),
                cpusys: Block::new(),
                devcfg: Block::new(),
                flash: Block::new(),
            }
        }

        fn sysctl(&mut self) -> C2000SysCtl {
            let map = SysCtlMap {
                clk: self.clk.base() as usize,
                cpusys: self.cpusys.base() as usize,
                devcfg: self.devcfg.base() as usize,
                flash: self.flash.base() as usize,
            };
            unsafe { C2000SysCtl::new(map) }
        }
    }

    #[test]
    fn test_pll_setting_search() {
        // 10 MHz to 100 MHz: 100 MHz raw is below range, 200 MHz / 2 fits
        assert_eq!(
            pll_setting(10_000_000, 100_000_000),
            Some(PllSetting { imult: 20, fmult: 0, div_field: 1 })
        );
        // 20 MHz crystal to 125 MHz: x6.25 undivided
        assert_eq!(
            pll_setting(20_000_000, 125_000_000),
            Some(PllSetting { imult: 6, fmult: 1, div_field: 0 })
        );
        assert_eq!(pll_setting(10_000_000, 300_000_000), None);
        assert_eq!(pll_setting(0, 100_000_000), None);
    }

    #[test]
    fn test_set_pll_programs_multiplier_and_divider() {
        let mut b = Blocks::new();
        b.clk.set_word32(clk::SYSPLLSTS as usize, 1);
        let sys = b.sysctl();
        let ep = Eallow::new(&NoProtect);
        assert!(sys.set_pll(&ep, ClockSource::Xtal, 20_000_000, 100_000_000));
        drop(ep);
        // 20 MHz x 10 = 200 MHz, divided by 2
        assert_eq!(b.clk.word32(clk::SYSPLLMULT as usize), 10);
        assert_eq!(b.clk.word32(clk::SYSCLKDIVSEL as usize), 1);
        assert_eq!(b.clk.word32(clk::CLKSRCCTL1 as usize) & 0b11, SRC_XTAL);
        assert_eq!(b.clk.word32(clk::SYSPLLCTL1 as usize), 0b11);
    }

    #[test]
    fn test_set_pll_without_lock_stays_bypassed() {
        let mut b = Blocks::new();
        let sys = b.sysctl();
        let ep = Eallow::new(&NoProtect);
        assert!(!sys.set_pll(&ep, ClockSource::Internal, 10_000_000, 100_000_000));
        drop(ep);
        assert_eq!(b.clk.word32(clk::SYSPLLCTL1 as usize), 0);
    }

    #[test]
    fn test_peripheral_gates_and_resets() {
        let mut b = Blocks::new();
        let sys = b.sysctl();
        let ep = Eallow::new(&NoProtect);
        sys.enable_peripheral(&ep, Peripheral::Epwm(3));
        sys.enable_peripheral(&ep, Peripheral::FsiRx(0));
        sys.enable_peripheral(&ep, Peripheral::Can(1));
        sys.disable_peripheral(&ep, Peripheral::Epwm(3));
        sys.reset_peripheral(&ep, Peripheral::Adc(1));
        sys.set_tbclk_sync(&ep, true);
        drop(ep);
        assert_eq!(b.cpusys.word32((PCLKCR0 + 4) as usize), 0);
        assert_eq!(b.cpusys.word32((PCLKCR0 + 36) as usize), 1 << 16);
        assert_eq!(b.cpusys.word32((PCLKCR0 + 20) as usize), 1 << 1);
        assert_eq!(b.cpusys.word32(PCLKCR0 as usize), 1 << 2);
        // Reset pulse leaves the bit released
        assert_eq!(b.devcfg.word32((SOFTPRES0 + 26) as usize), 0);
    }

    #[test]
    fn test_flash_wait_uses_slowest_access() {
        let mut b = Blocks::new();
        let sys = b.sysctl();
        let ep = Eallow::new(&NoProtect);
        sys.set_flash_wait_states(&ep, 2, 4, 3);
        drop(ep);
        assert_eq!(b.flash.word32(0), 4 << 8);
    }
}

//! CPU timers
//!
//! Each timer is an 8-word register file: TIM (32), PRD (32), TCR, a
//! reserved word, TPR and TPRH. Timer 2's clock source lives in the
//! system control block.

use hac_hal::timer::{CpuTimers, TimerClock};

use crate::reg::{Field, Reg};

/// Timer 0 register file of the F28004x (timers 1 and 2 follow at +8)
pub const TIMERS_F28004X: usize = 0x0C00;
/// TMR2CLKCTL of the F28004x
pub const TMR2CLKCTL_F28004X: usize = 0x5D37C;

const STRIDE: u16 = 0x08;
const TIM: u16 = 0x00;
const PRD: u16 = 0x02;
const TCR: u16 = 0x04;
const TPR: u16 = 0x06;
const TPRH: u16 = 0x07;

/// Stop
const TSS: Field = Field::bit(4);
/// Reload
const TRB: Field = Field::bit(5);
/// Free run under emulation halt
const FREE_SOFT: Field = Field::new(10, 2);
/// Overflow flag, write 1 to clear
const TIF: Field = Field::bit(15);

const CLKSRC_SYSCLK: u32 = 0;
const CLKSRC_XTAL: u32 = 3;
const CLKSRC: Field = Field::new(0, 3);

pub struct C2000Timers {
    base: *mut u16,
    clkctl: Reg<u16>,
}

impl C2000Timers {
    /// # Safety
    /// `base` must be the timer 0 register file and `clkctl` the timer 2
    /// clock control register of the running device.
    pub unsafe fn new(base: usize, clkctl: usize) -> Self {
        Self {
            base: base as *mut u16,
            clkctl: Reg::at(clkctl),
        }
    }

    fn reg16(&self, index: u8, offset: u16) -> Reg<u16> {
        // SAFETY: offsets stay inside the three register files
        unsafe { Reg::offset(self.base, u16::from(index) * STRIDE + offset) }
    }

    fn reg32(&self, index: u8, offset: u16) -> Reg<u32> {
        // SAFETY: offsets stay inside the three register files
        unsafe { Reg::offset(self.base, u16::from(index) * STRIDE + offset) }
    }
}

impl CpuTimers for C2000Timers {
    fn start(&self, index: u8, period: u32, clock: TimerClock) {
        let tcr = self.reg16(index, TCR);
        tcr.write_field(TSS, 1);
        if index == 2 {
            let src = match clock {
                TimerClock::SysClk => CLKSRC_SYSCLK,
                TimerClock::Xtal => CLKSRC_XTAL,
            };
            self.clkctl.write_field(CLKSRC, src);
        }
        self.reg32(index, PRD).write(period);
        self.reg16(index, TPR).write(0);
        self.reg16(index, TPRH).write(0);
        // Reload, clear the overflow flag, run free, start
        tcr.write(((TRB.mask() | TIF.mask() | FREE_SOFT.mask()) & !TSS.mask()) as u16);
    }

    fn stop(&self, index: u8) {
        self.reg16(index, TCR).set_bits(TSS.mask());
    }

    fn counter(&self, index: u8) -> u32 {
        self.reg32(index, TIM).read()
    }

    fn take_overflow(&self, index: u8) -> bool {
        let tcr = self.reg16(index, TCR);
        if !tcr.is_set(TIF) {
            return false;
        }
        // Write-one-to-clear
        tcr.set_bits(TIF.mask());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reg::fake::Block;

    #[test]
    fn test_start_programs_period_and_clock() {
        let mut t = Block::<0x18>::new();
        let mut clk = Block::<2>::new();
        let timers = unsafe { C2000Timers::new(t.base() as usize, clk.base() as usize) };
        timers.start(2, 99, TimerClock::Xtal);
        assert_eq!(t.word32(0x10 + PRD as usize), 99);
        assert_eq!(clk.0[0], 3);
        let tcr = t.0[0x10 + TCR as usize];
        assert_eq!(tcr & (1 << 4), 0);
        assert_ne!(tcr & (1 << 5), 0);
    }

    #[test]
    fn test_overflow_read_and_clear_flag() {
        let mut t = Block::<0x18>::new();
        let mut clk = Block::<2>::new();
        let timers = unsafe { C2000Timers::new(t.base() as usize, clk.base() as usize) };
        assert!(!timers.take_overflow(1));
        t.0[0x08 + TCR as usize] = 1 << 15;
        assert!(timers.take_overflow(1));
    }
}

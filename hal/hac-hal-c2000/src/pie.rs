//! Peripheral interrupt expansion block

use hac_hal::pie::{Pie, Vector};
use hac_hal::Eallow;

use crate::reg::{Field, Reg};

/// PIE control block of the F28004x
pub const PIE_F28004X: usize = 0x0CE0;

const PIECTRL: u16 = 0x00;
const PIEACK: u16 = 0x01;
/// PIEIER1; group `n` is at `PIEIER1 + 2 * (n - 1)`
const PIEIER1: u16 = 0x02;
const PIEIFR1: u16 = 0x03;
const GROUPS: u16 = 12;

const ENPIE: Field = Field::bit(0);

pub struct C2000Pie {
    base: *mut u16,
}

impl C2000Pie {
    /// # Safety
    /// `base` must be the PIE control block of the running device.
    pub const unsafe fn new(base: usize) -> Self {
        Self {
            base: base as *mut u16,
        }
    }

    fn reg(&self, offset: u16) -> Reg<u16> {
        // SAFETY: offsets stay inside the PIE control block
        unsafe { Reg::offset(self.base, offset) }
    }

    fn ier(&self, group: u16) -> Reg<u16> {
        self.reg(PIEIER1 + 2 * (group - 1))
    }
}

impl Pie for C2000Pie {
    fn init(&self, _ep: &Eallow<'_>) {
        self.reg(PIECTRL).clear_bits(ENPIE.mask());
        for group in 1..=GROUPS {
            self.ier(group).write(0);
            self.reg(PIEIFR1 + 2 * (group - 1)).write(0);
        }
        self.reg(PIECTRL).set_bits(ENPIE.mask());
        self.reg(PIEACK).write(0xFFFF);
    }

    fn enable(&self, _ep: &Eallow<'_>, vector: Vector) {
        self.ier(vector.group())
            .set_bits(1 << (vector.index() - 1));
    }

    fn disable(&self, _ep: &Eallow<'_>, vector: Vector) {
        self.ier(vector.group())
            .clear_bits(1 << (vector.index() - 1));
    }

    fn acknowledge(&self, group: u16) {
        self.reg(PIEACK).write(1 << (group - 1));
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

    #[test]
    fn test_enable_sets_group_bit() {
        let mut b = Block::<0x1A>::new();
        let pie = unsafe { C2000Pie::new(b.base() as usize) };
        let ep = Eallow::new(&NoProtect);
        pie.init(&ep);
        pie.enable(&ep, Vector::ADCA2);
        drop(ep);
        // ADCA2 is group 10, index 2
        assert_eq!(b.0[(PIEIER1 + 18) as usize], 0b10);
        assert_eq!(b.0[PIECTRL as usize], 1);
        pie.acknowledge(10);
        assert_eq!(b.0[PIEACK as usize], 1 << 9);
    }
}

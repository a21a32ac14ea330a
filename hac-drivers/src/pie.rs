//! Interrupt vector control
//!
//! Vectors are `(group << 8) | index` codes. The handlers themselves are
//! owned by the ISR layer; this driver only enables, disables and
//! acknowledges vectors in the PIE block.

use hac_core::{debug, Error};
use hac_hal::pie::{Pie, Vector};
use hac_hal::protect::{protected, Protect};

/// PIE groups
pub const GROUPS: u16 = 12;
/// Vectors per group
pub const INDICES: u16 = 16;

/// Check that a vector code addresses a real PIE entry
pub fn check(vector: Vector) -> Result<(), Error> {
    let (group, index) = (vector.group(), vector.index());
    if (1..=GROUPS).contains(&group) && (1..=INDICES).contains(&index) {
        Ok(())
    } else {
        Err(Error::Range)
    }
}

/// PIE driver
pub struct Interrupts<'p, P: Pie> {
    port: &'p P,
    cpu: &'p dyn Protect,
    /// Enabled vectors, one bit per index, per group
    enabled: [u16; GROUPS as usize],
}

impl<'p, P: Pie> Interrupts<'p, P> {
    pub fn new(port: &'p P, cpu: &'p dyn Protect) -> Self {
        Self {
            port,
            cpu,
            enabled: [0; GROUPS as usize],
        }
    }

    /// Reset the PIE block with every vector disabled
    pub fn init(&mut self) {
        protected(self.cpu, |ep| self.port.init(ep));
        self.enabled = [0; GROUPS as usize];
    }

    /// Enable a vector
    pub fn enable(&mut self, vector: Vector) -> Result<(), Error> {
        check(vector)?;
        protected(self.cpu, |ep| self.port.enable(ep, vector));
        self.enabled[usize::from(vector.group() - 1)] |= 1 << (vector.index() - 1);
        debug!("PIE vector {=u16:#x} enabled", vector.0);
        Ok(())
    }

    /// Disable a vector
    pub fn disable(&mut self, vector: Vector) -> Result<(), Error> {
        check(vector)?;
        protected(self.cpu, |ep| self.port.disable(ep, vector));
        self.enabled[usize::from(vector.group() - 1)] &= !(1 << (vector.index() - 1));
        Ok(())
    }

    pub fn is_enabled(&self, vector: Vector) -> bool {
        check(vector).is_ok()
            && self.enabled[usize::from(vector.group() - 1)] & (1 << (vector.index() - 1)) != 0
    }

    /// Acknowledge the group of `vector` so it can interrupt again
    ///
    /// Called from interrupt context; takes `&self` and touches no driver
    /// state.
    pub fn acknowledge(&self, vector: Vector) -> Result<(), Error> {
        check(vector)?;
        self.port.acknowledge(vector.group());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hac_hal_sim::{SimCpu, SimPie};

    #[test]
    fn test_enable_and_acknowledge() {
        let cpu = SimCpu::new();
        let pie = SimPie::new();
        let mut ints = Interrupts::new(&pie, &cpu);
        ints.init();
        assert_eq!(pie.init_count(), 1);

        ints.enable(Vector::ADCA2).unwrap();
        assert!(pie.is_enabled(Vector::ADCA2));
        assert!(ints.is_enabled(Vector::ADCA2));
        assert!(!ints.is_enabled(Vector::ADCA1));

        ints.acknowledge(Vector::ADCA2).unwrap();
        ints.acknowledge(Vector::ADCA1).unwrap();
        assert_eq!(pie.acknowledged(), vec![10, 1]);

        ints.disable(Vector::ADCA2).unwrap();
        assert!(!pie.is_enabled(Vector::ADCA2));
        assert!(!cpu.is_allowed());
    }

    #[test]
    fn test_out_of_range_vectors() {
        assert_eq!(check(Vector(0x0001)), Err(Error::Range));
        assert_eq!(check(Vector(0x0D01)), Err(Error::Range));
        assert_eq!(check(Vector(0x0100)), Err(Error::Range));
        assert_eq!(check(Vector(0x0111)), Err(Error::Range));
        assert_eq!(check(Vector(0x0C10)), Ok(()));
    }
}

//! Write-protection bracket and CPU-level controls
//!
//! The C28x core gates writes to configuration registers behind the
//! EALLOW/EDIS instruction pair. The bracket is modelled as a scoped token:
//! [`Eallow::new`] opens it, dropping the token closes it, and every
//! protected port method takes the token by reference so a protected write
//! cannot be issued outside a bracket.

/// Write-protection control of the CPU
pub trait Protect {
    /// Allow writes to protected registers (EALLOW)
    fn allow(&self);

    /// Deny writes to protected registers (EDIS)
    fn deny(&self);
}

/// Global CPU controls
///
/// Interrupt enable state and device-level actions that are not owned by
/// any single peripheral.
pub trait Cpu: Protect {
    /// Globally enable maskable interrupts (EINT)
    fn enable_interrupts(&self);

    /// Globally disable maskable interrupts (DINT)
    fn disable_interrupts(&self);

    /// True while maskable interrupts are globally enabled
    fn interrupts_enabled(&self) -> bool;

    /// Park the CPU until the next interrupt or reset
    fn idle(&self);

    /// Issue a device reset
    ///
    /// On silicon this does not return. Simulated CPUs record the request
    /// and return so tests can observe it.
    fn reset_device(&self);
}

/// Open write-protection bracket
///
/// Holding an `Eallow` proves that protected writes are currently allowed.
/// The bracket is closed when the token is dropped, on every exit path.
/// Brackets do not nest: the hardware has a single EALLOW bit, so the inner
/// token's drop would close the outer bracket too. Port methods therefore
/// borrow the caller's token instead of opening their own.
pub struct Eallow<'a> {
    cpu: &'a dyn Protect,
}

impl<'a> Eallow<'a> {
    /// Open the bracket
    pub fn new(cpu: &'a dyn Protect) -> Self {
        cpu.allow();
        Self { cpu }
    }
}

impl Drop for Eallow<'_> {
    fn drop(&mut self) {
        self.cpu.deny();
    }
}

/// Run `f` inside a write-protection bracket
///
/// # Arguments
/// * `cpu` - Protection control of the executing CPU
/// * `f` - Closure receiving the open bracket token
pub fn protected<R>(cpu: &dyn Protect, f: impl FnOnce(&Eallow<'_>) -> R) -> R {
    let ep = Eallow::new(cpu);
    f(&ep)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    struct MockCpu {
        allowed: Cell<bool>,
        brackets: Cell<u32>,
    }

    impl Protect for MockCpu {
        fn allow(&self) {
            self.allowed.set(true);
            self.brackets.set(self.brackets.get() + 1);
        }

        fn deny(&self) {
            self.allowed.set(false);
        }
    }

    fn mock() -> MockCpu {
        MockCpu {
            allowed: Cell::new(false),
            brackets: Cell::new(0),
        }
    }

    #[test]
    fn test_token_closes_bracket_on_drop() {
        let cpu = mock();
        {
            let _ep = Eallow::new(&cpu);
            assert!(cpu.allowed.get());
        }
        assert!(!cpu.allowed.get());
        assert_eq!(cpu.brackets.get(), 1);
    }

    #[test]
    fn test_protected_closes_bracket_on_early_return() {
        let cpu = mock();
        let result: Result<(), ()> = protected(&cpu, |_ep| {
            if cpu.allowed.get() {
                return Err(());
            }
            Ok(())
        });
        assert_eq!(result, Err(()));
        assert!(!cpu.allowed.get());
    }
}

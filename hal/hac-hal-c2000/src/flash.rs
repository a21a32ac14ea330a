//! On-chip flash
//!
//! Reads are plain memory reads of the flash window. Program and erase go
//! through the vendor flash state-machine library, reached via
//! [`FlashApi`]; under the `rt` feature [`RtFlashApi`] binds it through the
//! runtime shim. Every program and erase is verified by reading back.

use hac_hal::flash::{FlashError, FlashPort};

use crate::reg::Reg;

/// Bank 0 and bank 1 of the F28004x, contiguous
pub const FLASH_START_F28004X: u32 = 0x8_0000;
pub const FLASH_WORDS_F28004X: u32 = 0x2_0000;

/// Words the state machine programs in one command (128 bits)
const PROGRAM_WORDS: u32 = 8;
const ERASED: u16 = 0xFFFF;

/// Flash state-machine commands
pub trait FlashApi {
    /// Program up to [`PROGRAM_WORDS`] words inside one aligned block
    fn program(&self, address: u32, data: &[u16]) -> Result<(), FlashError>;

    /// Erase the sector containing `address`
    fn erase_sector(&self, address: u32) -> Result<(), FlashError>;
}

/// State machine reached through the runtime shim
#[cfg(feature = "rt")]
pub struct RtFlashApi;

#[cfg(feature = "rt")]
impl FlashApi for RtFlashApi {
    fn program(&self, address: u32, data: &[u16]) -> Result<(), FlashError> {
        extern "C" {
            fn hac_rt_flash_program(address: u32, data: *const u16, len: u16) -> u16;
        }
        // SAFETY: the shim reads exactly `len` words from `data`
        let status = unsafe { hac_rt_flash_program(address, data.as_ptr(), data.len() as u16) };
        if status == 0 {
            Ok(())
        } else {
            Err(FlashError::Verify)
        }
    }

    fn erase_sector(&self, address: u32) -> Result<(), FlashError> {
        extern "C" {
            fn hac_rt_flash_erase(address: u32) -> u16;
        }
        // SAFETY: the shim only drives the flash state machine
        if unsafe { hac_rt_flash_erase(address) } == 0 {
            Ok(())
        } else {
            Err(FlashError::Verify)
        }
    }
}

pub struct C2000Flash<A> {
    /// First word of the flash window as seen by the CPU
    window: *mut u16,
    /// Device address of `window`
    start: u32,
    words: u32,
    api: A,
}

impl<A: FlashApi> C2000Flash<A> {
    /// # Safety
    /// `window` must map `words` readable words of flash starting at the
    /// device address `start`.
    pub const unsafe fn new(window: usize, start: u32, words: u32, api: A) -> Self {
        Self {
            window: window as *mut u16,
            start,
            words,
            api,
        }
    }

    fn check(&self, address: u32, len: usize) -> Result<(), FlashError> {
        let end = u64::from(self.start) + u64::from(self.words);
        let last = u64::from(address) + len as u64;
        if address < self.start || last > end {
            return Err(FlashError::Address);
        }
        Ok(())
    }

    fn word(&self, address: u32) -> u16 {
        let offset = (address - self.start) as usize;
        // SAFETY: callers checked the address against the window
        unsafe { Reg::<u16>::at(self.window.add(offset) as usize) }.read()
    }

    fn matches(&self, address: u32, data: &[u16]) -> bool {
        (address..).zip(data).all(|(a, w)| self.word(a) == *w)
    }
}

impl<A: FlashApi> FlashPort for C2000Flash<A> {
    fn read(&self, address: u32, data: &mut [u16]) -> Result<(), FlashError> {
        self.check(address, data.len())?;
        for (a, w) in (address..).zip(data.iter_mut()) {
            *w = self.word(a);
        }
        Ok(())
    }

    fn program(&self, address: u32, data: &[u16]) -> Result<(), FlashError> {
        self.check(address, data.len())?;
        let mut at = address;
        let mut rest = data;
        while !rest.is_empty() {
            // Commands never straddle a 128-bit block
            let room = (PROGRAM_WORDS - at % PROGRAM_WORDS) as usize;
            let (chunk, tail) = rest.split_at(room.min(rest.len()));
            self.api.program(at, chunk)?;
            at += chunk.len() as u32;
            rest = tail;
        }
        if self.matches(address, data) {
            Ok(())
        } else {
            Err(FlashError::Verify)
        }
    }

    fn erase(&self, address: u32, length: u32) -> Result<(), FlashError> {
        self.check(address, length as usize)?;
        self.api.erase_sector(address)?;
        if (address..address + length).all(|a| self.word(a) == ERASED) {
            Ok(())
        } else {
            Err(FlashError::Verify)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reg::fake::Block;
    use core::cell::{Cell, RefCell};

    const START: u32 = 0x8_0000;
    const WORDS: usize = 0x40;

    /// State machine writing straight into the fake window
    struct FakeApi {
        window: *mut u16,
        commands: RefCell<[(u32, usize); 8]>,
        count: Cell<usize>,
        stuck: Cell<bool>,
    }

    impl FakeApi {
        fn new(window: *mut u16) -> Self {
            Self {
                window,
                commands: RefCell::new([(0, 0); 8]),
                count: Cell::new(0),
                stuck: Cell::new(false),
            }
        }
    }

    impl FlashApi for FakeApi {
        fn program(&self, address: u32, data: &[u16]) -> Result<(), FlashError> {
            let n = self.count.get();
            self.commands.borrow_mut()[n] = (address, data.len());
            self.count.set(n + 1);
            if self.stuck.get() {
                return Ok(());
            }
            for (i, w) in data.iter().enumerate() {
                let offset = (address - START) as usize + i;
                unsafe { *self.window.add(offset) &= *w };
            }
            Ok(())
        }

        fn erase_sector(&self, _address: u32) -> Result<(), FlashError> {
            if self.stuck.get() {
                return Ok(());
            }
            for i in 0..WORDS {
                unsafe { *self.window.add(i) = ERASED };
            }
            Ok(())
        }
    }

    fn flash(b: &mut Block<WORDS>) -> C2000Flash<FakeApi> {
        let api = FakeApi::new(b.base());
        unsafe { C2000Flash::new(b.base() as usize, START, WORDS as u32, api) }
    }

    #[test]
    fn test_program_splits_at_block_boundaries() {
        let mut b = Block::<WORDS>::new();
        b.0 = [ERASED; WORDS];
        let f = flash(&mut b);
        let data = [1u16, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
        assert_eq!(f.program(START + 5, &data), Ok(()));
        assert_eq!(f.api.count.get(), 3);
        let cmds = f.api.commands.borrow();
        assert_eq!(cmds[0], (START + 5, 3));
        assert_eq!(cmds[1], (START + 8, 8));
        assert_eq!(cmds[2], (START + 16, 1));
        let mut back = [0u16; 12];
        assert_eq!(f.read(START + 5, &mut back), Ok(()));
        assert_eq!(back, data);
    }

    #[test]
    fn test_program_verify_failure() {
        let mut b = Block::<WORDS>::new();
        b.0 = [ERASED; WORDS];
        let f = flash(&mut b);
        f.api.stuck.set(true);
        assert_eq!(f.program(START, &[0x1234]), Err(FlashError::Verify));
    }

    #[test]
    fn test_erase_blank_checks_sector() {
        let mut b = Block::<WORDS>::new();
        let f = flash(&mut b);
        assert_eq!(f.erase(START, WORDS as u32), Ok(()));
        f.api.stuck.set(true);
        assert_eq!(f.program(START + 1, &[0]), Err(FlashError::Verify));
        b.0[2] = 0;
        assert_eq!(f.erase(START, 4), Err(FlashError::Verify));
    }

    #[test]
    fn test_accesses_outside_window_rejected() {
        let mut b = Block::<WORDS>::new();
        let f = flash(&mut b);
        let mut buf = [0u16; 2];
        assert_eq!(f.read(START - 1, &mut buf), Err(FlashError::Address));
        assert_eq!(f.read(START + WORDS as u32 - 1, &mut buf), Err(FlashError::Address));
        assert_eq!(f.program(START + WORDS as u32, &[0]), Err(FlashError::Address));
        assert_eq!(f.erase(0, 1), Err(FlashError::Address));
        assert_eq!(f.api.count.get(), 0);
    }
}

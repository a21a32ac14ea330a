//! Volatile register access
//!
//! [`Reg`] wraps a raw register address. Reads and writes are volatile and
//! never elided or merged. [`Field`] describes a bit field inside a
//! register so that read-modify-write sequences do not hand-roll masks.

use core::marker::PhantomData;
use core::ptr;

/// Bit field within a register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub shift: u8,
    pub width: u8,
}

impl Field {
    pub const fn new(shift: u8, width: u8) -> Self {
        Self { shift, width }
    }

    /// Single-bit field
    pub const fn bit(shift: u8) -> Self {
        Self { shift, width: 1 }
    }

    /// Field mask in register position
    pub const fn mask(self) -> u32 {
        let ones = if self.width >= 32 {
            u32::MAX
        } else {
            (1u32 << self.width) - 1
        };
        ones << self.shift
    }

    /// Field `index` of a register made of equal `width`-bit fields
    pub const fn nth(index: u8, width: u8) -> Self {
        Self {
            shift: index * width,
            width,
        }
    }
}

/// Unsigned register widths
pub trait RegValue: Copy {
    fn to_u32(self) -> u32;
    fn from_u32(v: u32) -> Self;
}

impl RegValue for u16 {
    fn to_u32(self) -> u32 {
        u32::from(self)
    }

    fn from_u32(v: u32) -> Self {
        v as u16
    }
}

impl RegValue for u32 {
    fn to_u32(self) -> u32 {
        self
    }

    fn from_u32(v: u32) -> Self {
        v
    }
}

/// Memory-mapped register of width `T`
#[derive(Debug)]
pub struct Reg<T> {
    ptr: *mut T,
    _t: PhantomData<T>,
}

impl<T> Clone for Reg<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Reg<T> {}

impl<T: RegValue> Reg<T> {
    /// Register at a word address
    ///
    /// # Safety
    /// `addr` must be a valid, suitably aligned register address for `T`
    /// for as long as the handle is used.
    pub const unsafe fn at(addr: usize) -> Self {
        Self {
            ptr: addr as *mut T,
            _t: PhantomData,
        }
    }

    /// Register at `offset` words from `base`
    ///
    /// # Safety
    /// Same as [`Reg::at`] for the resulting address.
    pub unsafe fn offset(base: *mut u16, offset: u16) -> Self {
        Self {
            ptr: base.add(usize::from(offset)) as *mut T,
            _t: PhantomData,
        }
    }

    pub fn read(self) -> T {
        // SAFETY: address validity is the constructor's contract
        unsafe { ptr::read_volatile(self.ptr) }
    }

    pub fn write(self, value: T) {
        // SAFETY: address validity is the constructor's contract
        unsafe { ptr::write_volatile(self.ptr, value) }
    }

    pub fn modify(self, f: impl FnOnce(T) -> T) {
        self.write(f(self.read()));
    }

    pub fn set_bits(self, mask: u32) {
        self.modify(|v| T::from_u32(v.to_u32() | mask));
    }

    pub fn clear_bits(self, mask: u32) {
        self.modify(|v| T::from_u32(v.to_u32() & !mask));
    }

    pub fn read_field(self, field: Field) -> u32 {
        (self.read().to_u32() & field.mask()) >> field.shift
    }

    pub fn write_field(self, field: Field, value: u32) {
        let mask = field.mask();
        self.modify(|v| T::from_u32((v.to_u32() & !mask) | ((value << field.shift) & mask)));
    }

    pub fn is_set(self, field: Field) -> bool {
        self.read_field(field) != 0
    }
}

/// RAM-backed register block for host tests
#[cfg(test)]
pub(crate) mod fake {
    /// Word-addressed block, 32-bit aligned like the device register files
    #[repr(C, align(4))]
    pub struct Block<const N: usize>(pub [u16; N]);

    impl<const N: usize> Block<N> {
        pub fn new() -> Self {
            Self([0; N])
        }

        pub fn base(&mut self) -> *mut u16 {
            self.0.as_mut_ptr()
        }

        pub fn word32(&self, offset: usize) -> u32 {
            u32::from(self.0[offset]) | (u32::from(self.0[offset + 1]) << 16)
        }

        pub fn set_word32(&mut self, offset: usize, value: u32) {
            self.0[offset] = value as u16;
            self.0[offset + 1] = (value >> 16) as u16;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_masks() {
        assert_eq!(Field::bit(15).mask(), 0x8000);
        assert_eq!(Field::new(4, 3).mask(), 0x70);
        assert_eq!(Field::nth(3, 2).mask(), 0b11 << 6);
        assert_eq!(Field::new(0, 32).mask(), u32::MAX);
    }

    #[test]
    fn test_field_write_keeps_neighbours() {
        let mut word: u32 = 0xFFFF_0000;
        let reg = unsafe { Reg::<u32>::at(&mut word as *mut u32 as usize) };
        reg.write_field(Field::new(4, 4), 0xA);
        assert_eq!(reg.read(), 0xFFFF_00A0);
        reg.write_field(Field::new(16, 4), 0x3);
        assert_eq!(reg.read(), 0xFFF3_00A0);
        assert_eq!(reg.read_field(Field::new(4, 4)), 0xA);
    }

    #[test]
    fn test_value_wider_than_field_is_truncated() {
        let mut word: u16 = 0;
        let reg = unsafe { Reg::<u16>::at(&mut word as *mut u16 as usize) };
        reg.write_field(Field::new(2, 2), 0xFF);
        assert_eq!(reg.read(), 0b1100);
        reg.clear_bits(0b0100);
        assert_eq!(reg.read(), 0b1000);
        reg.set_bits(1);
        assert!(reg.is_set(Field::bit(0)));
    }
}

//! Pin configuration codes
//!
//! A [`PinCode`] packs one legal (pin, MUX selector, function) combination
//! together with the registry's state flags:
//!
//! ```text
//!  31  30  29..28   27 ........ 12   11..8   7 ..... 0
//! ┌───┬───┬──────┬────────────────┬───────┬─────────┐
//! │ A │ C │  -   │    function    │  mux  │   pin   │
//! └───┴───┴──────┴────────────────┴───────┴─────────┘
//!  A = available, C = connected
//! ```
//!
//! The function's upper bits name its group; the low nibble tells signals
//! of one group apart (e.g. `EPWM3_B` is group `EPWM`, generator 3, side B).

pub mod registry;

pub use registry::{PinMux, PinRegistry, PinStatus};

/// Packed pin configuration code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PinCode(pub u32);

/// Peripheral function tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PinFun(pub u16);

/// Peripheral function group
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PinGroup(pub u16);

/// Result of decoding a pin code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Decoded {
    pub pin: u16,
    pub mux: u8,
    pub fun: PinFun,
    pub group: PinGroup,
}

const PIN_MASK: u32 = 0xFF;
const MUX_SHIFT: u32 = 8;
const MUX_MASK: u32 = 0xF;
const FUN_SHIFT: u32 = 12;
const FUN_MASK: u32 = 0xFFFF;
const CONNECTED: u32 = 1 << 30;
const AVAILABLE: u32 = 1 << 31;

impl PinCode {
    /// Sentinel "no pin"
    pub const IOX: Self = Self(0);

    /// Assemble a code from its fields (flags cleared)
    pub const fn new(pin: u16, mux: u8, fun: PinFun) -> Self {
        Self(
            (pin as u32 & PIN_MASK)
                | ((mux as u32 & MUX_MASK) << MUX_SHIFT)
                | ((fun.0 as u32 & FUN_MASK) << FUN_SHIFT),
        )
    }

    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    pub const fn pin(self) -> u16 {
        (self.0 & PIN_MASK) as u16
    }

    pub const fn mux(self) -> u8 {
        ((self.0 >> MUX_SHIFT) & MUX_MASK) as u8
    }

    pub const fn fun(self) -> PinFun {
        PinFun(((self.0 >> FUN_SHIFT) & FUN_MASK) as u16)
    }

    pub const fn group(self) -> PinGroup {
        self.fun().group()
    }

    pub const fn is_connected(self) -> bool {
        self.0 & CONNECTED != 0
    }

    pub const fn is_available(self) -> bool {
        self.0 & AVAILABLE != 0
    }

    pub const fn with_connected(self, connected: bool) -> Self {
        if connected {
            Self(self.0 | CONNECTED)
        } else {
            Self(self.0 & !CONNECTED)
        }
    }

    pub const fn with_available(self, available: bool) -> Self {
        if available {
            Self(self.0 | AVAILABLE)
        } else {
            Self(self.0 & !AVAILABLE)
        }
    }

    /// Pure decode, no registry state involved
    pub const fn decode(self) -> Decoded {
        Decoded {
            pin: self.pin(),
            mux: self.mux(),
            fun: self.fun(),
            group: self.group(),
        }
    }
}

impl PinFun {
    pub const NONE: Self = Self(0x00);
    pub const RESERVED: Self = Self(0x01);
    pub const SYNCIN: Self = Self(0x02);
    pub const SYNCOUT: Self = Self(0x03);
    pub const XCLKIN: Self = Self(0x04);
    pub const XCLKOUT: Self = Self(0x05);
    pub const ERRORSTS: Self = Self(0x06);
    pub const ADCSOCAO: Self = Self(0x07);
    pub const ADCSOCBO: Self = Self(0x08);
    pub const X2: Self = Self(0x09);
    pub const VSW: Self = Self(0x0A);
    pub const VFBSW: Self = Self(0x0B);

    pub const AIN: Self = Self(0x10);
    pub const AOUT: Self = Self(0x11);

    pub const DIN: Self = Self(0x20);
    pub const DOUT: Self = Self(0x21);

    pub const CANA_TX: Self = Self(0x30);
    pub const CANA_RX: Self = Self(0x31);
    pub const CANB_TX: Self = Self(0x32);
    pub const CANB_RX: Self = Self(0x33);

    pub const I2CA_SDA: Self = Self(0x40);
    pub const I2CA_SCL: Self = Self(0x41);

    pub const SCIA_TX: Self = Self(0x50);
    pub const SCIA_RX: Self = Self(0x51);
    pub const SCIB_TX: Self = Self(0x52);
    pub const SCIB_RX: Self = Self(0x53);

    pub const LINA_TX: Self = Self(0x60);
    pub const LINA_RX: Self = Self(0x61);

    pub const SPIA_SIMO: Self = Self(0x70);
    pub const SPIA_SOMI: Self = Self(0x71);
    pub const SPIA_CLK: Self = Self(0x72);
    pub const SPIA_STE: Self = Self(0x73);
    pub const SPIB_SIMO: Self = Self(0x74);
    pub const SPIB_SOMI: Self = Self(0x75);
    pub const SPIB_CLK: Self = Self(0x76);
    pub const SPIB_STE: Self = Self(0x77);

    pub const EPWM1_A: Self = Self(0x80);
    pub const EPWM1_B: Self = Self(0x81);
    pub const EPWM2_A: Self = Self(0x82);
    pub const EPWM2_B: Self = Self(0x83);
    pub const EPWM3_A: Self = Self(0x84);
    pub const EPWM3_B: Self = Self(0x85);
    pub const EPWM4_A: Self = Self(0x86);
    pub const EPWM4_B: Self = Self(0x87);
    pub const EPWM5_A: Self = Self(0x88);
    pub const EPWM5_B: Self = Self(0x89);
    pub const EPWM6_A: Self = Self(0x8A);
    pub const EPWM6_B: Self = Self(0x8B);
    pub const EPWM7_A: Self = Self(0x8C);
    pub const EPWM7_B: Self = Self(0x8D);
    pub const EPWM8_A: Self = Self(0x8E);
    pub const EPWM8_B: Self = Self(0x8F);

    pub const SD1_D1: Self = Self(0x90);
    pub const SD1_C1: Self = Self(0x91);
    pub const SD1_D2: Self = Self(0x92);
    pub const SD1_C2: Self = Self(0x93);
    pub const SD1_D3: Self = Self(0x94);
    pub const SD1_C3: Self = Self(0x95);
    pub const SD1_D4: Self = Self(0x96);
    pub const SD1_C4: Self = Self(0x97);

    pub const OUTXBAR1: Self = Self(0xA0);
    pub const OUTXBAR2: Self = Self(0xA1);
    pub const OUTXBAR3: Self = Self(0xA2);
    pub const OUTXBAR4: Self = Self(0xA3);
    pub const OUTXBAR5: Self = Self(0xA4);
    pub const OUTXBAR6: Self = Self(0xA5);
    pub const OUTXBAR7: Self = Self(0xA6);
    pub const OUTXBAR8: Self = Self(0xA7);

    pub const TZ1: Self = Self(0xB0);
    pub const TZ2: Self = Self(0xB1);
    pub const TZ3: Self = Self(0xB2);

    pub const COMP1_OUT: Self = Self(0xC0);
    pub const COMP2_OUT: Self = Self(0xC1);
    pub const COMP3_OUT: Self = Self(0xC2);

    pub const EQEP1_A: Self = Self(0xD0);
    pub const EQEP1_B: Self = Self(0xD1);
    pub const EQEP1_INDEX: Self = Self(0xD2);
    pub const EQEP1_STROBE: Self = Self(0xD3);
    pub const EQEP2_A: Self = Self(0xD4);
    pub const EQEP2_B: Self = Self(0xD5);
    pub const EQEP2_INDEX: Self = Self(0xD6);
    pub const EQEP2_STROBE: Self = Self(0xD7);

    pub const ECAP1: Self = Self(0xE0);

    pub const HRCAP1: Self = Self(0xF0);
    pub const HRCAP2: Self = Self(0xF1);

    pub const FSITXA_D0: Self = Self(0x100);
    pub const FSITXA_D1: Self = Self(0x101);
    pub const FSITXA_CLK: Self = Self(0x102);
    pub const FSIRXA_D0: Self = Self(0x103);
    pub const FSIRXA_D1: Self = Self(0x104);
    pub const FSIRXA_CLK: Self = Self(0x105);

    pub const PMBUSA_SDA: Self = Self(0x110);
    pub const PMBUSA_SCL: Self = Self(0x111);
    pub const PMBUSA_CTL: Self = Self(0x112);
    pub const PMBUSA_ALERT: Self = Self(0x113);

    pub const JTAG_TDI: Self = Self(0x120);
    pub const JTAG_TDO: Self = Self(0x121);
    pub const JTAG_TMS: Self = Self(0x122);
    pub const JTAG_TCK: Self = Self(0x123);

    pub const fn group(self) -> PinGroup {
        PinGroup(self.0 & 0xFFF0)
    }

    /// Signal index within the group (low nibble)
    pub const fn index(self) -> u8 {
        (self.0 & 0xF) as u8
    }
}

impl PinGroup {
    pub const NO_GROUP: Self = Self(0x00);
    pub const AIO: Self = Self(0x10);
    pub const DIO: Self = Self(0x20);
    pub const CAN: Self = Self(0x30);
    pub const I2C: Self = Self(0x40);
    pub const SCI: Self = Self(0x50);
    pub const LIN: Self = Self(0x60);
    pub const SPI: Self = Self(0x70);
    pub const EPWM: Self = Self(0x80);
    pub const SD: Self = Self(0x90);
    pub const OUTXBAR: Self = Self(0xA0);
    pub const TZ: Self = Self(0xB0);
    pub const COMP: Self = Self(0xC0);
    pub const EQEP: Self = Self(0xD0);
    pub const ECAP: Self = Self(0xE0);
    pub const HRCAP: Self = Self(0xF0);
    pub const FSI: Self = Self(0x100);
    pub const PMBUS: Self = Self(0x110);
    pub const JTAG: Self = Self(0x120);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_decode_known_code() {
        // GPIO16 as SPI-A SIMO, mux 1
        let d = PinCode(0xC0070110).decode();
        assert_eq!(d.pin, 16);
        assert_eq!(d.mux, 1);
        assert_eq!(d.fun, PinFun::SPIA_SIMO);
        assert_eq!(d.group, PinGroup::SPI);
    }

    #[test]
    fn test_flags() {
        let c = PinCode::new(16, 0, PinFun::DOUT);
        assert!(!c.is_available());
        assert!(!c.is_connected());
        let c = c.with_available(true).with_connected(true);
        assert!(c.is_available() && c.is_connected());
        assert_eq!(c.with_connected(false).fun(), PinFun::DOUT);
    }

    #[test]
    fn test_epwm_fun_index() {
        assert_eq!(PinFun::EPWM3_B.group(), PinGroup::EPWM);
        assert_eq!(PinFun::EPWM3_B.index(), 5);
        assert_eq!(PinFun::FSIRXA_CLK.group(), PinGroup::FSI);
    }

    #[test]
    fn test_iox_is_none() {
        assert!(PinCode::IOX.is_none());
        assert_eq!(PinCode::IOX.fun(), PinFun::NONE);
    }

    proptest! {
        #[test]
        fn prop_fields_survive_packing(pin in 0u16..256, mux in 0u8..16, fun in 0u16..0x130) {
            let d = PinCode::new(pin, mux, PinFun(fun)).decode();
            prop_assert_eq!(d.pin, pin);
            prop_assert_eq!(d.mux, mux);
            prop_assert_eq!(d.fun, PinFun(fun));
            prop_assert_eq!(d.group, PinGroup(fun & 0xFFF0));
        }

        #[test]
        fn prop_flags_do_not_touch_fields(raw in 0u32..0x1000_0000, c in any::<bool>(), a in any::<bool>()) {
            let code = PinCode(raw);
            let flagged = code.with_connected(c).with_available(a);
            prop_assert_eq!(flagged.decode(), code.decode());
            prop_assert_eq!(flagged.is_connected(), c);
            prop_assert_eq!(flagged.is_available(), a);
        }
    }
}

//! F28004x silicon
//!
//! 60 digital pins on ports A/B/C, analog port H (GPIO224..GPIO247). GPIO22
//! and GPIO23 double as analog pins.

pub mod pins;

use heapless::Vec;

use super::{
    sectors, AdcTraits, CanLimits, DisabledLists, Family, FlashSector, HalPins, Silicon,
    WaitStates,
};
use crate::io::PinCode;

/// F28004x family marker
#[derive(Debug, Clone, Copy, Default)]
pub struct F28004x;

/// GPIO control register offsets shared by the Type-4 GPIO parts
pub(super) mod reg {
    pub const PORT_STRIDE: u16 = 0x40;
    pub const PORT_B: u16 = PORT_STRIDE;
    pub const PORT_H: u16 = 0x1C0;

    pub const CTRL: u16 = 0x00;
    pub const QSEL1: u16 = 0x02;
    pub const QSEL2: u16 = 0x04;
    pub const MUX1: u16 = 0x06;
    pub const MUX2: u16 = 0x08;
    pub const DIR: u16 = 0x0A;
    pub const PUD: u16 = 0x0C;
    pub const INV: u16 = 0x10;
    pub const ODR: u16 = 0x12;
    pub const AMSEL: u16 = 0x14;
    pub const GMUX1: u16 = 0x20;
    pub const GMUX2: u16 = 0x22;
    pub const CSEL1: u16 = 0x28;
    pub const CSEL2: u16 = 0x2A;
    pub const CSEL3: u16 = 0x2C;
    pub const CSEL4: u16 = 0x2E;

    pub const CTRL_REGS: &[u16] = &[
        CTRL,
        QSEL1,
        QSEL2,
        MUX1,
        MUX2,
        DIR,
        INV,
        ODR,
        GMUX1,
        GMUX2,
        CSEL1,
        CSEL2,
        CSEL3,
        CSEL4,
        PORT_B + CTRL,
        PORT_B + QSEL1,
        PORT_B + QSEL2,
        PORT_B + MUX2,
        PORT_B + DIR,
        PORT_B + INV,
        PORT_B + ODR,
        PORT_B + GMUX2,
        PORT_B + CSEL1,
        PORT_B + CSEL2,
        PORT_B + CSEL3,
        PORT_B + CSEL4,
        PORT_H + CTRL,
        PORT_H + QSEL1,
        PORT_H + QSEL2,
        PORT_H + INV,
    ];
}

const IO_0: &[u16] = &[
    19, 20, 21, 36, 38, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50, 51, 52, 53, 54, 55,
];
const IO_56: &[u16] = &[10];
const IO_64: &[u16] = &[14, 15, 25, 26, 27, 30, 31, 34, 39, 40, 56, 57, 58, 59];
/// Missing on the 64-pin Q100 package only
const IO_64Q: &[u16] = &[12, 33];

const FLASH_MAP: [FlashSector; 32] = sectors(0x080000, 0x1000);

impl Silicon for F28004x {
    const NAME: &'static str = "F28004x";
    const FAMILY: Family = Family::F28004x;

    const NUM_DIO: u16 = 60;
    const NUM_AN: u16 = 24;
    const AN0: u16 = 224;

    const CPU_HZ: u32 = 100_000_000;
    const XTAL_HZ: &'static [u32] = &[20_000_000];
    const FLASH_WAIT: WaitStates = WaitStates {
        paged: 4,
        random: 4,
        otp: 4,
    };

    const UNLOCK_PORTS: &'static [u8] = &[0, 1, 7];
    const CTRL_REGS: &'static [u16] = reg::CTRL_REGS;
    const RESET_DEFAULTS: &'static [(u16, u32)] = &[
        (reg::PUD, 0xFFFF_FFFF),
        (reg::AMSEL, 0x00C0_0000),
        (reg::PORT_B + reg::MUX1, 0x0000_0CC0),
        (reg::PORT_B + reg::PUD, 0xFFFF_FFFF),
        (reg::PORT_B + reg::GMUX1, 0x0000_0CC0),
        (reg::PORT_H + reg::PUD, 0xFFFF_FFFF),
        (reg::PORT_H + reg::AMSEL, 0xFFFF_FFFF),
    ];
    const FORCED_DISABLED: &'static [PinCode] =
        &[pins::IO18_X2, pins::IO35_JTAG_TDI, pins::IO37_JTAG_TDO];
    const PINS: &'static [PinCode] = pins::ALL;

    const ADC: AdcTraits = AdcTraits {
        cores: 3,
        power_up_us: 5000,
        div_max: 8,
        clk_min: 5_000_000,
        clk_max: 50_000_000,
        int_lines: 4,
        offset_trim: 112,
    };
    const HAS_ECAP: bool = true;
    const HAS_SDFM: bool = true;
    const HAS_PGA: bool = true;
    const HAS_WCH: bool = true;
    const HAS_FSI: bool = true;

    const CAN_MODULES: u8 = 2;
    const CAN_CLK_DIV: u32 = 1;
    const CAN_LIMITS: CanLimits = CanLimits {
        nq: (8, 25),
        brp: (1, 1024),
        tseg1: (2, 16),
        tseg2: (2, 8),
        sjw: (1, 4),
        max_sample_point: 87,
    };

    const FLASH_SECTORS: &'static [FlashSector] = &FLASH_MAP;
    const MODULE_INFO: u32 = 0x084000;

    const HAL_PINS: HalPins = HalPins {
        can_id: 1,
        can_tx: pins::IO12_CANB_TX,
        can_rx: pins::IO13_CANB_RX,
        i2c_sda: pins::IO32_I2CA_SDA,
        i2c_scl: pins::IO33_I2CA_SCL,
        led: pins::IO17_DOUT,
    };

    fn is_analog(pin: u16) -> bool {
        (224..=247).contains(&pin) || pin == 22 || pin == 23
    }

    fn disabled_lists(pin_count: u16, q100: bool) -> DisabledLists {
        let mut lists = Vec::new();
        let _ = lists.push(IO_0);
        match pin_count {
            56 => {
                let _ = lists.push(IO_56);
                let _ = lists.push(IO_64);
            }
            64 => {
                let _ = lists.push(IO_64);
                if q100 {
                    let _ = lists.push(IO_64Q);
                }
            }
            _ => {}
        }
        lists
    }
}

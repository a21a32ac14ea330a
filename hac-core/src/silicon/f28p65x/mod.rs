//! F28P65x silicon
//!
//! 224 digital pins on ports A..G and the analog port H starting at
//! GPIO224. All ports carry a configuration lock.

pub mod pins;

use heapless::Vec;

use super::f28004x::reg;
use super::{
    sectors, AdcTraits, CanLimits, DisabledLists, Family, FlashSector, HalPins, Silicon,
    WaitStates,
};
use crate::io::PinCode;

/// F28P65x family marker
#[derive(Debug, Clone, Copy, Default)]
pub struct F28p65x;

const IO_100: &[u16] = &[
    5, 6, 7, 8, 9, 16, 17, 18, 19, 20, 21, 22, 23, 24, 26, 27, 28, 29, 31, 32, 33, 36, 37, 38, 39,
    40, 44, 45, 48, 49, 50, 51, 52, 53, 54, 55, 56, 57, 67, 68, 74, 75, 76, 77, 79, 81, 82, 83, 88,
    93, 94, 95, 96, 97, 98, 99,
];

const FLASH_MAP: [FlashSector; 4] = sectors(0x080000, 0x20000);

impl Silicon for F28p65x {
    const NAME: &'static str = "F28P65x";
    const FAMILY: Family = Family::F28p65x;

    const NUM_DIO: u16 = 224;
    const NUM_AN: u16 = 18;
    const AN0: u16 = 224;

    const CPU_HZ: u32 = 200_000_000;
    const XTAL_HZ: &'static [u32] = &[20_000_000, 25_000_000];
    const FLASH_WAIT: WaitStates = WaitStates {
        paged: 4,
        random: 4,
        otp: 4,
    };

    const UNLOCK_PORTS: &'static [u8] = &[0, 1, 2, 3, 4, 5, 6, 7];
    const CTRL_REGS: &'static [u16] = reg::CTRL_REGS;
    const RESET_DEFAULTS: &'static [(u16, u32)] = &[
        (reg::PUD, 0xFFFF_FFFF),
        (reg::PORT_B + reg::MUX1, 0x0000_0CC0),
        (reg::PORT_B + reg::PUD, 0xFFFF_FFFF),
        (reg::PORT_B + reg::GMUX1, 0x0000_0CC0),
        (reg::PORT_H + reg::PUD, 0xFFFF_FFFF),
        (reg::PORT_H + reg::AMSEL, 0xFFFF_FFFF),
    ];
    const FORCED_DISABLED: &'static [PinCode] =
        &[pins::IO221_X2, pins::IO222_JTAG_TDI, pins::IO223_JTAG_TDO];
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
    const HAS_PGA: bool = false;
    const HAS_WCH: bool = true;
    const HAS_FSI: bool = true;

    const CAN_MODULES: u8 = 1;
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
    const MODULE_INFO: u32 = 0x0C0000;

    const HAL_PINS: HalPins = HalPins {
        can_id: 0,
        can_tx: pins::IO71_CANA_TX,
        can_rx: pins::IO70_CANA_RX,
        i2c_sda: pins::IO0_I2CA_SDA,
        i2c_scl: pins::IO1_I2CA_SCL,
        led: pins::IO84_DOUT,
    };

    fn is_analog(pin: u16) -> bool {
        matches!(pin, 224..=247 | 199 | 200 | 203..=209 | 213 | 214)
    }

    fn disabled_lists(pin_count: u16, _q100: bool) -> DisabledLists {
        let mut lists = Vec::new();
        // 176/169/256-pin packages expose every pin
        if pin_count == 100 {
            let _ = lists.push(IO_100);
        }
        lists
    }
}

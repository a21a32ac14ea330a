//! F2803x (Piccolo) silicon
//!
//! 45 digital pins on ports A/B, sixteen analog pins GPIO96..GPIO111 on the
//! AIO port. No port lock, no eCAP/SDFM/PGA/comparator subsystem.

pub mod pins;

use heapless::Vec;

use super::{
    sectors, AdcTraits, CanLimits, DisabledLists, Family, FlashSector, HalPins, Silicon,
    WaitStates,
};
use crate::io::PinCode;

/// F2803x family marker
#[derive(Debug, Clone, Copy, Default)]
pub struct F2803x;

mod reg {
    pub const GPACTRL: u16 = 0x00;
    pub const GPAQSEL1: u16 = 0x02;
    pub const GPAQSEL2: u16 = 0x04;
    pub const GPAMUX1: u16 = 0x06;
    pub const GPAMUX2: u16 = 0x08;
    pub const GPADIR: u16 = 0x0A;
    pub const GPAPUD: u16 = 0x0C;
    pub const GPBCTRL: u16 = 0x10;
    pub const GPBQSEL1: u16 = 0x12;
    pub const GPBMUX1: u16 = 0x16;
    pub const GPBDIR: u16 = 0x1A;
    pub const GPBPUD: u16 = 0x1C;
    pub const AIOMUX1: u16 = 0x36;
    pub const AIODIR: u16 = 0x3A;
}

const IO_0: &[u16] = &[96, 97, 99, 101, 103, 104, 105, 107, 108, 111];
/// Missing on the 56-pin package
const IO_56: &[u16] = &[8, 9, 10, 11, 24, 32, 33];
/// Missing on the 64-pin package (and the 56-pin one)
const IO_64: &[u16] = &[13, 14, 15, 25, 26, 27, 39, 40, 41, 42, 43, 44];

const FLASH_MAP: [FlashSector; 8] = sectors(0x3E8000, 0x2000);

impl Silicon for F2803x {
    const NAME: &'static str = "F2803x";
    const FAMILY: Family = Family::F2803x;

    const NUM_DIO: u16 = 45;
    const NUM_AN: u16 = 16;
    const AN0: u16 = 96;

    const CPU_HZ: u32 = 60_000_000;
    const XTAL_HZ: &'static [u32] = &[20_000_000, 30_000_000];
    const FLASH_WAIT: WaitStates = WaitStates {
        paged: 2,
        random: 2,
        otp: 3,
    };

    const UNLOCK_PORTS: &'static [u8] = &[];
    const CTRL_REGS: &'static [u16] = &[
        reg::GPACTRL,
        reg::GPAQSEL1,
        reg::GPAQSEL2,
        reg::GPAMUX1,
        reg::GPAMUX2,
        reg::GPADIR,
        reg::GPBCTRL,
        reg::GPBQSEL1,
        reg::GPBMUX1,
        reg::GPBDIR,
        reg::GPBPUD,
        reg::AIODIR,
    ];
    const RESET_DEFAULTS: &'static [(u16, u32)] =
        &[(reg::GPAPUD, 0x0000_0FFF), (reg::AIOMUX1, 0x3330_3330)];
    const FORCED_DISABLED: &'static [PinCode] = &[
        pins::IO35_JTAG_TDI,
        pins::IO36_JTAG_TMS,
        pins::IO37_JTAG_TDO,
        pins::IO38_JTAG_TCK,
    ];
    const PINS: &'static [PinCode] = pins::ALL;

    const ADC: AdcTraits = AdcTraits {
        cores: 1,
        power_up_us: 1000,
        div_max: 2,
        clk_min: 1_000,
        clk_max: 60_000_000,
        int_lines: 9,
        offset_trim: 80,
    };
    const HAS_ECAP: bool = false;
    const HAS_SDFM: bool = false;
    const HAS_PGA: bool = false;
    const HAS_WCH: bool = false;
    const HAS_FSI: bool = false;

    const CAN_MODULES: u8 = 1;
    const CAN_CLK_DIV: u32 = 2;
    const CAN_LIMITS: CanLimits = CanLimits {
        nq: (8, 25),
        brp: (1, 256),
        tseg1: (2, 16),
        tseg2: (2, 8),
        sjw: (1, 4),
        max_sample_point: 87,
    };

    const FLASH_SECTORS: &'static [FlashSector] = &FLASH_MAP;
    const MODULE_INFO: u32 = 0x3E8000;

    const HAL_PINS: HalPins = HalPins {
        can_id: 0,
        can_tx: pins::IO31_CANA_TX,
        can_rx: pins::IO30_CANA_RX,
        i2c_sda: pins::IO32_I2CA_SDA,
        i2c_scl: pins::IO33_I2CA_SCL,
        led: pins::IO6_DOUT,
    };

    fn is_analog(pin: u16) -> bool {
        (96..=111).contains(&pin)
    }

    fn disabled_lists(pin_count: u16, _q100: bool) -> DisabledLists {
        let mut lists = Vec::new();
        // Capacity is 4, at most three lists are pushed
        let _ = lists.push(IO_0);
        match pin_count {
            56 => {
                let _ = lists.push(IO_56);
                let _ = lists.push(IO_64);
            }
            64 => {
                let _ = lists.push(IO_64);
            }
            _ => {}
        }
        lists
    }
}

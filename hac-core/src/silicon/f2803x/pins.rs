//! Pin configuration codes of the F2803X family
//!
//! One constant per legal (pin, function) pair. [`ALL`] lists every code in
//! pin order.

use crate::io::PinCode;

pub const IO0_DIN: PinCode = PinCode(0xC0020000);
pub const IO0_DOUT: PinCode = PinCode(0xC0021000);
pub const IO0_EPWM1_A: PinCode = PinCode(0xC0080100);

pub const IO1_DIN: PinCode = PinCode(0xC0020001);
pub const IO1_DOUT: PinCode = PinCode(0xC0021001);
pub const IO1_EPWM1_B: PinCode = PinCode(0xC0081101);
pub const IO1_COMP1_OUT: PinCode = PinCode(0xC00C0301);

pub const IO2_DIN: PinCode = PinCode(0xC0020002);
pub const IO2_DOUT: PinCode = PinCode(0xC0021002);
pub const IO2_EPWM2_A: PinCode = PinCode(0xC0082102);

pub const IO3_DIN: PinCode = PinCode(0xC0020003);
pub const IO3_DOUT: PinCode = PinCode(0xC0021003);
pub const IO3_EPWM2_B: PinCode = PinCode(0xC0083103);
pub const IO3_SPIA_SOMI: PinCode = PinCode(0xC0071203);
pub const IO3_COMP2_OUT: PinCode = PinCode(0xC00C1303);

pub const IO4_DIN: PinCode = PinCode(0xC0020004);
pub const IO4_DOUT: PinCode = PinCode(0xC0021004);
pub const IO4_EPWM3_A: PinCode = PinCode(0xC0084104);

pub const IO5_DIN: PinCode = PinCode(0xC0020005);
pub const IO5_DOUT: PinCode = PinCode(0xC0021005);
pub const IO5_EPWM3_B: PinCode = PinCode(0xC0085105);
pub const IO5_SPIA_SIMO: PinCode = PinCode(0xC0070205);
pub const IO5_ECAP1: PinCode = PinCode(0xC00E0305);

pub const IO6_DIN: PinCode = PinCode(0xC0020006);
pub const IO6_DOUT: PinCode = PinCode(0xC0021006);
pub const IO6_EPWM4_A: PinCode = PinCode(0xC0086106);
pub const IO6_SYNCIN: PinCode = PinCode(0xC0002206);
pub const IO6_SYNCOUT: PinCode = PinCode(0xC0003306);

pub const IO7_DIN: PinCode = PinCode(0xC0020007);
pub const IO7_DOUT: PinCode = PinCode(0xC0021007);
pub const IO7_EPWM4_B: PinCode = PinCode(0xC0087107);
pub const IO7_SCIA_RX: PinCode = PinCode(0xC0051207);

pub const IO8_DIN: PinCode = PinCode(0xC0020008);
pub const IO8_DOUT: PinCode = PinCode(0xC0021008);
pub const IO8_EPWM5_A: PinCode = PinCode(0xC0088108);
pub const IO8_ADCSOCAO: PinCode = PinCode(0xC0007308);

pub const IO9_DIN: PinCode = PinCode(0xC0020009);
pub const IO9_DOUT: PinCode = PinCode(0xC0021009);
pub const IO9_EPWM5_B: PinCode = PinCode(0xC0089109);
pub const IO9_LINA_TX: PinCode = PinCode(0xC0060209);
pub const IO9_HRCAP1: PinCode = PinCode(0xC00F0309);

pub const IO10_DIN: PinCode = PinCode(0xC002000A);
pub const IO10_DOUT: PinCode = PinCode(0xC002100A);
pub const IO10_EPWM6_A: PinCode = PinCode(0xC008A10A);
pub const IO10_ADCSOCBO: PinCode = PinCode(0xC000830A);

pub const IO11_DIN: PinCode = PinCode(0xC002000B);
pub const IO11_DOUT: PinCode = PinCode(0xC002100B);
pub const IO11_EPWM6_B: PinCode = PinCode(0xC008B10B);
pub const IO11_LINA_RX: PinCode = PinCode(0xC006120B);
pub const IO11_HRCAP2: PinCode = PinCode(0xC00F130B);

pub const IO12_DIN: PinCode = PinCode(0xC002000C);
pub const IO12_DOUT: PinCode = PinCode(0xC002100C);
pub const IO12_TZ1: PinCode = PinCode(0xC00B010C);
pub const IO12_SCIA_TX: PinCode = PinCode(0xC005020C);
pub const IO12_SPIB_SIMO: PinCode = PinCode(0xC007430C);

pub const IO13_DIN: PinCode = PinCode(0xC002000D);
pub const IO13_DOUT: PinCode = PinCode(0xC002100D);
pub const IO13_TZ2: PinCode = PinCode(0xC00B110D);
pub const IO13_SPIB_SOMI: PinCode = PinCode(0xC007530D);

pub const IO14_DIN: PinCode = PinCode(0xC002000E);
pub const IO14_DOUT: PinCode = PinCode(0xC002100E);
pub const IO14_TZ3: PinCode = PinCode(0xC00B210E);
pub const IO14_LINA_TX: PinCode = PinCode(0xC006020E);
pub const IO14_SPIB_CLK: PinCode = PinCode(0xC007630E);

pub const IO15_DIN: PinCode = PinCode(0xC002000F);
pub const IO15_DOUT: PinCode = PinCode(0xC002100F);
pub const IO15_TZ1: PinCode = PinCode(0xC00B010F);
pub const IO15_LINA_RX: PinCode = PinCode(0xC006120F);
pub const IO15_SPIB_STE: PinCode = PinCode(0xC007730F);

pub const IO16_DIN: PinCode = PinCode(0xC0020010);
pub const IO16_DOUT: PinCode = PinCode(0xC0021010);
pub const IO16_SPIA_SIMO: PinCode = PinCode(0xC0070110);
pub const IO16_TZ2: PinCode = PinCode(0xC00B1310);

pub const IO17_DIN: PinCode = PinCode(0xC0020011);
pub const IO17_DOUT: PinCode = PinCode(0xC0021011);
pub const IO17_SPIA_SOMI: PinCode = PinCode(0xC0071111);
pub const IO17_TZ3: PinCode = PinCode(0xC00B2311);

pub const IO18_DIN: PinCode = PinCode(0xC0020012);
pub const IO18_DOUT: PinCode = PinCode(0xC0021012);
pub const IO18_SPIA_CLK: PinCode = PinCode(0xC0072112);
pub const IO18_LINA_TX: PinCode = PinCode(0xC0060212);
pub const IO18_XCLKOUT: PinCode = PinCode(0xC0005312);

pub const IO19_DIN: PinCode = PinCode(0xC0020013);
pub const IO19_DOUT: PinCode = PinCode(0xC0021013);
pub const IO19_XCLKIN: PinCode = PinCode(0xC0004013);
pub const IO19_SPIA_STE: PinCode = PinCode(0xC0073113);
pub const IO19_LINA_RX: PinCode = PinCode(0xC0061213);
pub const IO19_ECAP1: PinCode = PinCode(0xC00E0313);

pub const IO20_DIN: PinCode = PinCode(0xC0020014);
pub const IO20_DOUT: PinCode = PinCode(0xC0021014);
pub const IO20_EQEP1_A: PinCode = PinCode(0xC00D0114);
pub const IO20_COMP1_OUT: PinCode = PinCode(0xC00C0314);

pub const IO21_DIN: PinCode = PinCode(0xC0020015);
pub const IO21_DOUT: PinCode = PinCode(0xC0021015);
pub const IO21_EQEP1_B: PinCode = PinCode(0xC00D1115);
pub const IO21_COMP2_OUT: PinCode = PinCode(0xC00C1315);

pub const IO22_DIN: PinCode = PinCode(0xC0020016);
pub const IO22_DOUT: PinCode = PinCode(0xC0021016);
pub const IO22_EQEP1_STROBE: PinCode = PinCode(0xC00D3116);
pub const IO22_LINA_TX: PinCode = PinCode(0xC0060316);

pub const IO23_DIN: PinCode = PinCode(0xC0020017);
pub const IO23_DOUT: PinCode = PinCode(0xC0021017);
pub const IO23_EQEP1_INDEX: PinCode = PinCode(0xC00D2117);
pub const IO23_LINA_RX: PinCode = PinCode(0xC0061317);

pub const IO24_DIN: PinCode = PinCode(0xC0020018);
pub const IO24_DOUT: PinCode = PinCode(0xC0021018);
pub const IO24_ECAP1: PinCode = PinCode(0xC00E0118);
pub const IO24_SPIB_SIMO: PinCode = PinCode(0xC0074318);

pub const IO25_DIN: PinCode = PinCode(0xC0020019);
pub const IO25_DOUT: PinCode = PinCode(0xC0021019);
pub const IO25_SPIB_SOMI: PinCode = PinCode(0xC0075319);

pub const IO26_DIN: PinCode = PinCode(0xC002001A);
pub const IO26_DOUT: PinCode = PinCode(0xC002101A);
pub const IO26_HRCAP1: PinCode = PinCode(0xC00F011A);
pub const IO26_SPIB_CLK: PinCode = PinCode(0xC007631A);

pub const IO27_DIN: PinCode = PinCode(0xC002001B);
pub const IO27_DOUT: PinCode = PinCode(0xC002101B);
pub const IO27_HRCAP2: PinCode = PinCode(0xC00F111B);
pub const IO27_SPIB_STE: PinCode = PinCode(0xC007731B);

pub const IO28_DIN: PinCode = PinCode(0xC002001C);
pub const IO28_DOUT: PinCode = PinCode(0xC002101C);
pub const IO28_SCIA_RX: PinCode = PinCode(0xC005111C);
pub const IO28_I2CA_SDA: PinCode = PinCode(0xC004021C);
pub const IO28_TZ2: PinCode = PinCode(0xC00B131C);

pub const IO29_DIN: PinCode = PinCode(0xC002001D);
pub const IO29_DOUT: PinCode = PinCode(0xC002101D);
pub const IO29_SCIA_TX: PinCode = PinCode(0xC005011D);
pub const IO29_I2CA_SCL: PinCode = PinCode(0xC004121D);
pub const IO29_TZ3: PinCode = PinCode(0xC00B231D);

pub const IO30_DIN: PinCode = PinCode(0xC002001E);
pub const IO30_DOUT: PinCode = PinCode(0xC002101E);
pub const IO30_CANA_RX: PinCode = PinCode(0xC003111E);

pub const IO31_DIN: PinCode = PinCode(0xC002001F);
pub const IO31_DOUT: PinCode = PinCode(0xC002101F);
pub const IO31_CANA_TX: PinCode = PinCode(0xC003011F);

pub const IO32_DIN: PinCode = PinCode(0xC0020020);
pub const IO32_DOUT: PinCode = PinCode(0xC0021020);
pub const IO32_I2CA_SDA: PinCode = PinCode(0xC0040120);
pub const IO32_SYNCIN: PinCode = PinCode(0xC0002220);
pub const IO32_ADCSOCAO: PinCode = PinCode(0xC0007320);

pub const IO33_DIN: PinCode = PinCode(0xC0020021);
pub const IO33_DOUT: PinCode = PinCode(0xC0021021);
pub const IO33_I2CA_SCL: PinCode = PinCode(0xC0041121);
pub const IO33_SYNCOUT: PinCode = PinCode(0xC0003221);
pub const IO33_ADCSOCBO: PinCode = PinCode(0xC0008321);

pub const IO34_DIN: PinCode = PinCode(0xC0020022);
pub const IO34_DOUT: PinCode = PinCode(0xC0021022);
pub const IO34_COMP2_OUT: PinCode = PinCode(0xC00C1122);
pub const IO34_COMP3_OUT: PinCode = PinCode(0xC00C2322);

pub const IO35_DIN: PinCode = PinCode(0xC0020023);
pub const IO35_DOUT: PinCode = PinCode(0xC0021023);
pub const IO35_JTAG_TDI: PinCode = PinCode(0xC0120023);

pub const IO36_DIN: PinCode = PinCode(0xC0020024);
pub const IO36_DOUT: PinCode = PinCode(0xC0021024);
pub const IO36_JTAG_TMS: PinCode = PinCode(0xC0122024);

pub const IO37_DIN: PinCode = PinCode(0xC0020025);
pub const IO37_DOUT: PinCode = PinCode(0xC0021025);
pub const IO37_JTAG_TDO: PinCode = PinCode(0xC0121025);

pub const IO38_DIN: PinCode = PinCode(0xC0020026);
pub const IO38_DOUT: PinCode = PinCode(0xC0021026);
pub const IO38_JTAG_TCK: PinCode = PinCode(0xC0123026);
pub const IO38_XCLKIN: PinCode = PinCode(0xC0004026);

pub const IO39_DIN: PinCode = PinCode(0xC0020027);
pub const IO39_DOUT: PinCode = PinCode(0xC0021027);

pub const IO40_DIN: PinCode = PinCode(0xC0020028);
pub const IO40_DOUT: PinCode = PinCode(0xC0021028);
pub const IO40_EPWM7_A: PinCode = PinCode(0xC008C128);

pub const IO41_DIN: PinCode = PinCode(0xC0020029);
pub const IO41_DOUT: PinCode = PinCode(0xC0021029);
pub const IO41_EPWM7_B: PinCode = PinCode(0xC008D129);

pub const IO42_DIN: PinCode = PinCode(0xC002002A);
pub const IO42_DOUT: PinCode = PinCode(0xC002102A);
pub const IO42_COMP1_OUT: PinCode = PinCode(0xC00C032A);

pub const IO43_DIN: PinCode = PinCode(0xC002002B);
pub const IO43_DOUT: PinCode = PinCode(0xC002102B);
pub const IO43_COMP2_OUT: PinCode = PinCode(0xC00C132B);

pub const IO44_DIN: PinCode = PinCode(0xC002002C);
pub const IO44_DOUT: PinCode = PinCode(0xC002102C);

pub const IO98_AIN: PinCode = PinCode(0xC0010062);
pub const IO98_AOUT: PinCode = PinCode(0xC0011062);
pub const IO98_DIN: PinCode = PinCode(0xC0020062);
pub const IO98_DOUT: PinCode = PinCode(0xC0021062);

pub const IO100_AIN: PinCode = PinCode(0xC0010064);
pub const IO100_AOUT: PinCode = PinCode(0xC0011064);
pub const IO100_DIN: PinCode = PinCode(0xC0020064);
pub const IO100_DOUT: PinCode = PinCode(0xC0021064);

pub const IO102_AIN: PinCode = PinCode(0xC0010066);
pub const IO102_AOUT: PinCode = PinCode(0xC0011066);
pub const IO102_DIN: PinCode = PinCode(0xC0020066);
pub const IO102_DOUT: PinCode = PinCode(0xC0021066);

pub const IO106_AIN: PinCode = PinCode(0xC001006A);
pub const IO106_AOUT: PinCode = PinCode(0xC001106A);
pub const IO106_DIN: PinCode = PinCode(0xC002006A);
pub const IO106_DOUT: PinCode = PinCode(0xC002106A);

pub const IO108_AIN: PinCode = PinCode(0xC001006C);
pub const IO108_AOUT: PinCode = PinCode(0xC001106C);
pub const IO108_DIN: PinCode = PinCode(0xC002006C);
pub const IO108_DOUT: PinCode = PinCode(0xC002106C);

pub const IO110_AIN: PinCode = PinCode(0xC001006E);
pub const IO110_AOUT: PinCode = PinCode(0xC001106E);
pub const IO110_DIN: PinCode = PinCode(0xC002006E);
pub const IO110_DOUT: PinCode = PinCode(0xC002106E);

/// Every pin code of the family
pub const ALL: &[PinCode] = &[
    IO0_DIN,
    IO0_DOUT,
    IO0_EPWM1_A,
    IO1_DIN,
    IO1_DOUT,
    IO1_EPWM1_B,
    IO1_COMP1_OUT,
    IO2_DIN,
    IO2_DOUT,
    IO2_EPWM2_A,
    IO3_DIN,
    IO3_DOUT,
    IO3_EPWM2_B,
    IO3_SPIA_SOMI,
    IO3_COMP2_OUT,
    IO4_DIN,
    IO4_DOUT,
    IO4_EPWM3_A,
    IO5_DIN,
    IO5_DOUT,
    IO5_EPWM3_B,
    IO5_SPIA_SIMO,
    IO5_ECAP1,
    IO6_DIN,
    IO6_DOUT,
    IO6_EPWM4_A,
    IO6_SYNCIN,
    IO6_SYNCOUT,
    IO7_DIN,
    IO7_DOUT,
    IO7_EPWM4_B,
    IO7_SCIA_RX,
    IO8_DIN,
    IO8_DOUT,
    IO8_EPWM5_A,
    IO8_ADCSOCAO,
    IO9_DIN,
    IO9_DOUT,
    IO9_EPWM5_B,
    IO9_LINA_TX,
    IO9_HRCAP1,
    IO10_DIN,
    IO10_DOUT,
    IO10_EPWM6_A,
    IO10_ADCSOCBO,
    IO11_DIN,
    IO11_DOUT,
    IO11_EPWM6_B,
    IO11_LINA_RX,
    IO11_HRCAP2,
    IO12_DIN,
    IO12_DOUT,
    IO12_TZ1,
    IO12_SCIA_TX,
    IO12_SPIB_SIMO,
    IO13_DIN,
    IO13_DOUT,
    IO13_TZ2,
    IO13_SPIB_SOMI,
    IO14_DIN,
    IO14_DOUT,
    IO14_TZ3,
    IO14_LINA_TX,
    IO14_SPIB_CLK,
    IO15_DIN,
    IO15_DOUT,
    IO15_TZ1,
    IO15_LINA_RX,
    IO15_SPIB_STE,
    IO16_DIN,
    IO16_DOUT,
    IO16_SPIA_SIMO,
    IO16_TZ2,
    IO17_DIN,
    IO17_DOUT,
    IO17_SPIA_SOMI,
    IO17_TZ3,
    IO18_DIN,
    IO18_DOUT,
    IO18_SPIA_CLK,
    IO18_LINA_TX,
    IO18_XCLKOUT,
    IO19_DIN,
    IO19_DOUT,
    IO19_XCLKIN,
    IO19_SPIA_STE,
    IO19_LINA_RX,
    IO19_ECAP1,
    IO20_DIN,
    IO20_DOUT,
    IO20_EQEP1_A,
    IO20_COMP1_OUT,
    IO21_DIN,
    IO21_DOUT,
    IO21_EQEP1_B,
    IO21_COMP2_OUT,
    IO22_DIN,
    IO22_DOUT,
    IO22_EQEP1_STROBE,
    IO22_LINA_TX,
    IO23_DIN,
    IO23_DOUT,
    IO23_EQEP1_INDEX,
    IO23_LINA_RX,
    IO24_DIN,
    IO24_DOUT,
    IO24_ECAP1,
    IO24_SPIB_SIMO,
    IO25_DIN,
    IO25_DOUT,
    IO25_SPIB_SOMI,
    IO26_DIN,
    IO26_DOUT,
    IO26_HRCAP1,
    IO26_SPIB_CLK,
    IO27_DIN,
    IO27_DOUT,
    IO27_HRCAP2,
    IO27_SPIB_STE,
    IO28_DIN,
    IO28_DOUT,
    IO28_SCIA_RX,
    IO28_I2CA_SDA,
    IO28_TZ2,
    IO29_DIN,
    IO29_DOUT,
    IO29_SCIA_TX,
    IO29_I2CA_SCL,
    IO29_TZ3,
    IO30_DIN,
    IO30_DOUT,
    IO30_CANA_RX,
    IO31_DIN,
    IO31_DOUT,
    IO31_CANA_TX,
    IO32_DIN,
    IO32_DOUT,
    IO32_I2CA_SDA,
    IO32_SYNCIN,
    IO32_ADCSOCAO,
    IO33_DIN,
    IO33_DOUT,
    IO33_I2CA_SCL,
    IO33_SYNCOUT,
    IO33_ADCSOCBO,
    IO34_DIN,
    IO34_DOUT,
    IO34_COMP2_OUT,
    IO34_COMP3_OUT,
    IO35_DIN,
    IO35_DOUT,
    IO35_JTAG_TDI,
    IO36_DIN,
    IO36_DOUT,
    IO36_JTAG_TMS,
    IO37_DIN,
    IO37_DOUT,
    IO37_JTAG_TDO,
    IO38_DIN,
    IO38_DOUT,
    IO38_JTAG_TCK,
    IO38_XCLKIN,
    IO39_DIN,
    IO39_DOUT,
    IO40_DIN,
    IO40_DOUT,
    IO40_EPWM7_A,
    IO41_DIN,
    IO41_DOUT,
    IO41_EPWM7_B,
    IO42_DIN,
    IO42_DOUT,
    IO42_COMP1_OUT,
    IO43_DIN,
    IO43_DOUT,
    IO43_COMP2_OUT,
    IO44_DIN,
    IO44_DOUT,
    IO98_AIN,
    IO98_AOUT,
    IO98_DIN,
    IO98_DOUT,
    IO100_AIN,
    IO100_AOUT,
    IO100_DIN,
    IO100_DOUT,
    IO102_AIN,
    IO102_AOUT,
    IO102_DIN,
    IO102_DOUT,
    IO106_AIN,
    IO106_AOUT,
    IO106_DIN,
    IO106_DOUT,
    IO108_AIN,
    IO108_AOUT,
    IO108_DIN,
    IO108_DOUT,
    IO110_AIN,
    IO110_AOUT,
    IO110_DIN,
    IO110_DOUT,
];

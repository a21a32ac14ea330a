//! Pin configuration codes of the F28P65X family
//!
//! One constant per legal (pin, function) pair. [`ALL`] lists every code in
//! pin order.

use crate::io::PinCode;

pub const IO0_DIN: PinCode = PinCode(0xC0020000);
pub const IO0_DOUT: PinCode = PinCode(0xC0021000);
pub const IO0_EPWM1_A: PinCode = PinCode(0xC0080100);
pub const IO0_I2CA_SDA: PinCode = PinCode(0xC0040600);
pub const IO0_FSITXA_D0: PinCode = PinCode(0xC0100D00);

pub const IO1_DIN: PinCode = PinCode(0xC0020001);
pub const IO1_DOUT: PinCode = PinCode(0xC0021001);
pub const IO1_EPWM1_B: PinCode = PinCode(0xC0081101);
pub const IO1_I2CA_SCL: PinCode = PinCode(0xC0041601);
pub const IO1_FSITXA_D1: PinCode = PinCode(0xC0101D01);

pub const IO2_DIN: PinCode = PinCode(0xC0020002);
pub const IO2_DOUT: PinCode = PinCode(0xC0021002);
pub const IO2_EPWM2_A: PinCode = PinCode(0xC0082102);
pub const IO2_FSITXA_CLK: PinCode = PinCode(0xC0102D02);

pub const IO3_DIN: PinCode = PinCode(0xC0020003);
pub const IO3_DOUT: PinCode = PinCode(0xC0021003);
pub const IO3_EPWM2_B: PinCode = PinCode(0xC0083103);
pub const IO3_FSIRXA_D0: PinCode = PinCode(0xC0103D03);

pub const IO4_DIN: PinCode = PinCode(0xC0020004);
pub const IO4_DOUT: PinCode = PinCode(0xC0021004);
pub const IO4_EPWM3_A: PinCode = PinCode(0xC0084104);
pub const IO4_CANA_TX: PinCode = PinCode(0xC0030604);
pub const IO4_FSIRXA_D1: PinCode = PinCode(0xC0104D04);

pub const IO5_DIN: PinCode = PinCode(0xC0020005);
pub const IO5_DOUT: PinCode = PinCode(0xC0021005);
pub const IO5_EPWM3_B: PinCode = PinCode(0xC0085105);
pub const IO5_CANA_RX: PinCode = PinCode(0xC0031605);
pub const IO5_FSIRXA_CLK: PinCode = PinCode(0xC0105D05);

pub const IO6_DIN: PinCode = PinCode(0xC0020006);
pub const IO6_DOUT: PinCode = PinCode(0xC0021006);
pub const IO6_EPWM4_A: PinCode = PinCode(0xC0086106);
pub const IO6_LINA_TX: PinCode = PinCode(0xC0060706);

pub const IO7_DIN: PinCode = PinCode(0xC0020007);
pub const IO7_DOUT: PinCode = PinCode(0xC0021007);
pub const IO7_EPWM4_B: PinCode = PinCode(0xC0087107);
pub const IO7_LINA_RX: PinCode = PinCode(0xC0061707);

pub const IO8_DIN: PinCode = PinCode(0xC0020008);
pub const IO8_DOUT: PinCode = PinCode(0xC0021008);
pub const IO8_EPWM5_A: PinCode = PinCode(0xC0088108);
pub const IO8_ADCSOCAO: PinCode = PinCode(0xC0007308);
pub const IO8_SCIA_TX: PinCode = PinCode(0xC0050608);
pub const IO8_FSITXA_D1: PinCode = PinCode(0xC0101E08);
pub const IO8_FSIRXA_D0: PinCode = PinCode(0xC0103F08);

pub const IO9_DIN: PinCode = PinCode(0xC0020009);
pub const IO9_DOUT: PinCode = PinCode(0xC0021009);
pub const IO9_EPWM5_B: PinCode = PinCode(0xC0089109);
pub const IO9_SCIB_TX: PinCode = PinCode(0xC0052209);
pub const IO9_SCIA_RX: PinCode = PinCode(0xC0051609);
pub const IO9_FSITXA_D0: PinCode = PinCode(0xC0100E09);
pub const IO9_FSIRXA_CLK: PinCode = PinCode(0xC0105F09);

pub const IO10_DIN: PinCode = PinCode(0xC002000A);
pub const IO10_DOUT: PinCode = PinCode(0xC002100A);
pub const IO10_EPWM6_A: PinCode = PinCode(0xC008A10A);
pub const IO10_ADCSOCBO: PinCode = PinCode(0xC000830A);
pub const IO10_EQEP1_A: PinCode = PinCode(0xC00D050A);
pub const IO10_SCIB_TX: PinCode = PinCode(0xC005260A);
pub const IO10_FSITXA_CLK: PinCode = PinCode(0xC0102E0A);
pub const IO10_FSIRXA_D1: PinCode = PinCode(0xC0104F0A);

pub const IO11_DIN: PinCode = PinCode(0xC002000B);
pub const IO11_DOUT: PinCode = PinCode(0xC002100B);
pub const IO11_EPWM6_B: PinCode = PinCode(0xC008B10B);
pub const IO11_SCIB_RX: PinCode = PinCode(0xC005320B);
pub const IO11_EQEP1_B: PinCode = PinCode(0xC00D150B);
pub const IO11_FSIRXA_D1: PinCode = PinCode(0xC0104E0B);
pub const IO11_PMBUSA_ALERT: PinCode = PinCode(0xC0113F0B);

pub const IO12_DIN: PinCode = PinCode(0xC002000C);
pub const IO12_DOUT: PinCode = PinCode(0xC002100C);
pub const IO12_EPWM7_A: PinCode = PinCode(0xC008C10C);
pub const IO12_ADCSOCAO: PinCode = PinCode(0xC000730C);
pub const IO12_EQEP1_STROBE: PinCode = PinCode(0xC00D350C);
pub const IO12_SCIA_TX: PinCode = PinCode(0xC005060C);
pub const IO12_FSIRXA_D0: PinCode = PinCode(0xC0103E0C);
pub const IO12_PMBUSA_CTL: PinCode = PinCode(0xC0112F0C);

pub const IO13_DIN: PinCode = PinCode(0xC002000D);
pub const IO13_DOUT: PinCode = PinCode(0xC002100D);
pub const IO13_EPWM7_B: PinCode = PinCode(0xC008D10D);
pub const IO13_EQEP1_INDEX: PinCode = PinCode(0xC00D250D);
pub const IO13_SCIA_RX: PinCode = PinCode(0xC005160D);
pub const IO13_FSIRXA_CLK: PinCode = PinCode(0xC0105E0D);
pub const IO13_PMBUSA_SDA: PinCode = PinCode(0xC0110F0D);

pub const IO14_DIN: PinCode = PinCode(0xC002000E);
pub const IO14_DOUT: PinCode = PinCode(0xC002100E);
pub const IO14_EPWM8_A: PinCode = PinCode(0xC008E10E);
pub const IO14_SCIB_TX: PinCode = PinCode(0xC005220E);
pub const IO14_LINA_TX: PinCode = PinCode(0xC006050E);
pub const IO14_PMBUSA_SCL: PinCode = PinCode(0xC0111F0E);

pub const IO15_DIN: PinCode = PinCode(0xC002000F);
pub const IO15_DOUT: PinCode = PinCode(0xC002100F);
pub const IO15_EPWM8_B: PinCode = PinCode(0xC008F10F);
pub const IO15_SCIB_RX: PinCode = PinCode(0xC005320F);
pub const IO15_LINA_RX: PinCode = PinCode(0xC006150F);

pub const IO16_DIN: PinCode = PinCode(0xC0020010);
pub const IO16_DOUT: PinCode = PinCode(0xC0021010);
pub const IO16_SPIA_SIMO: PinCode = PinCode(0xC0070110);
pub const IO16_SD1_D1: PinCode = PinCode(0xC0090710);

pub const IO17_DIN: PinCode = PinCode(0xC0020011);
pub const IO17_DOUT: PinCode = PinCode(0xC0021011);
pub const IO17_SPIA_SOMI: PinCode = PinCode(0xC0071111);
pub const IO17_SD1_C1: PinCode = PinCode(0xC0091711);

pub const IO18_DIN: PinCode = PinCode(0xC0020012);
pub const IO18_DOUT: PinCode = PinCode(0xC0021012);
pub const IO18_SPIA_CLK: PinCode = PinCode(0xC0072112);
pub const IO18_SCIB_TX: PinCode = PinCode(0xC0052212);
pub const IO18_CANA_RX: PinCode = PinCode(0xC0031312);
pub const IO18_SD1_D2: PinCode = PinCode(0xC0092712);

pub const IO19_DIN: PinCode = PinCode(0xC0020013);
pub const IO19_DOUT: PinCode = PinCode(0xC0021013);
pub const IO19_SPIA_STE: PinCode = PinCode(0xC0073113);
pub const IO19_SCIB_RX: PinCode = PinCode(0xC0053213);
pub const IO19_CANA_TX: PinCode = PinCode(0xC0030313);
pub const IO19_SD1_C2: PinCode = PinCode(0xC0093713);

pub const IO20_DIN: PinCode = PinCode(0xC0020014);
pub const IO20_DOUT: PinCode = PinCode(0xC0021014);
pub const IO20_EQEP1_A: PinCode = PinCode(0xC00D0114);
pub const IO20_SD1_D3: PinCode = PinCode(0xC0094714);

pub const IO21_DIN: PinCode = PinCode(0xC0020015);
pub const IO21_DOUT: PinCode = PinCode(0xC0021015);
pub const IO21_EQEP1_B: PinCode = PinCode(0xC00D1115);
pub const IO21_SD1_C3: PinCode = PinCode(0xC0095715);

pub const IO22_DIN: PinCode = PinCode(0xC0020016);
pub const IO22_DOUT: PinCode = PinCode(0xC0021016);
pub const IO22_EQEP1_STROBE: PinCode = PinCode(0xC00D3116);
pub const IO22_SCIB_TX: PinCode = PinCode(0xC0052316);
pub const IO22_SPIB_CLK: PinCode = PinCode(0xC0076616);
pub const IO22_SD1_D4: PinCode = PinCode(0xC0096716);

pub const IO23_DIN: PinCode = PinCode(0xC0020017);
pub const IO23_DOUT: PinCode = PinCode(0xC0021017);
pub const IO23_EQEP1_INDEX: PinCode = PinCode(0xC00D2117);
pub const IO23_SCIB_RX: PinCode = PinCode(0xC0053317);
pub const IO23_SPIB_STE: PinCode = PinCode(0xC0077617);
pub const IO23_SD1_C4: PinCode = PinCode(0xC0097717);

pub const IO24_DIN: PinCode = PinCode(0xC0020018);
pub const IO24_DOUT: PinCode = PinCode(0xC0021018);
pub const IO24_EQEP2_A: PinCode = PinCode(0xC00D4218);
pub const IO24_SPIB_SIMO: PinCode = PinCode(0xC0074618);
pub const IO24_PMBUSA_SCL: PinCode = PinCode(0xC0111918);

pub const IO25_DIN: PinCode = PinCode(0xC0020019);
pub const IO25_DOUT: PinCode = PinCode(0xC0021019);
pub const IO25_EQEP2_B: PinCode = PinCode(0xC00D5219);
pub const IO25_SPIB_SOMI: PinCode = PinCode(0xC0075619);
pub const IO25_PMBUSA_SDA: PinCode = PinCode(0xC0110919);
pub const IO25_FSITXA_D1: PinCode = PinCode(0xC0101E19);

pub const IO26_DIN: PinCode = PinCode(0xC002001A);
pub const IO26_DOUT: PinCode = PinCode(0xC002101A);
pub const IO26_EQEP2_INDEX: PinCode = PinCode(0xC00D621A);
pub const IO26_SPIB_CLK: PinCode = PinCode(0xC007661A);
pub const IO26_PMBUSA_ALERT: PinCode = PinCode(0xC011391A);
pub const IO26_FSITXA_D0: PinCode = PinCode(0xC0100E1A);

pub const IO27_DIN: PinCode = PinCode(0xC002001B);
pub const IO27_DOUT: PinCode = PinCode(0xC002101B);
pub const IO27_EQEP2_STROBE: PinCode = PinCode(0xC00D721B);
pub const IO27_SPIB_STE: PinCode = PinCode(0xC007761B);
pub const IO27_PMBUSA_CTL: PinCode = PinCode(0xC011291B);
pub const IO27_FSITXA_CLK: PinCode = PinCode(0xC0102E1B);

pub const IO28_DIN: PinCode = PinCode(0xC002001C);
pub const IO28_DOUT: PinCode = PinCode(0xC002101C);
pub const IO28_SCIA_RX: PinCode = PinCode(0xC005111C);

pub const IO29_DIN: PinCode = PinCode(0xC002001D);
pub const IO29_DOUT: PinCode = PinCode(0xC002101D);
pub const IO29_SCIA_TX: PinCode = PinCode(0xC005011D);

pub const IO30_DIN: PinCode = PinCode(0xC002001E);
pub const IO30_DOUT: PinCode = PinCode(0xC002101E);
pub const IO30_CANA_RX: PinCode = PinCode(0xC003111E);

pub const IO31_DIN: PinCode = PinCode(0xC002001F);
pub const IO31_DOUT: PinCode = PinCode(0xC002101F);
pub const IO31_CANA_TX: PinCode = PinCode(0xC003011F);
pub const IO31_I2CA_SDA: PinCode = PinCode(0xC0040A1F);

pub const IO32_DIN: PinCode = PinCode(0xC0020020);
pub const IO32_DOUT: PinCode = PinCode(0xC0021020);
pub const IO32_I2CA_SDA: PinCode = PinCode(0xC0040120);
pub const IO32_SPIA_SIMO: PinCode = PinCode(0xC0070320);
pub const IO32_I2CA_SCL: PinCode = PinCode(0xC0041A20);

pub const IO33_DIN: PinCode = PinCode(0xC0020021);
pub const IO33_DOUT: PinCode = PinCode(0xC0021021);
pub const IO33_I2CA_SCL: PinCode = PinCode(0xC0041121);
pub const IO33_SPIA_SOMI: PinCode = PinCode(0xC0071321);

pub const IO34_DIN: PinCode = PinCode(0xC0020022);
pub const IO34_DOUT: PinCode = PinCode(0xC0021022);
pub const IO34_SPIA_CLK: PinCode = PinCode(0xC0072322);
pub const IO34_SCIA_TX: PinCode = PinCode(0xC0050D22);

pub const IO35_DIN: PinCode = PinCode(0xC0020023);
pub const IO35_DOUT: PinCode = PinCode(0xC0021023);
pub const IO35_SCIA_RX: PinCode = PinCode(0xC0051123);
pub const IO35_SPIA_STE: PinCode = PinCode(0xC0073323);

pub const IO36_DIN: PinCode = PinCode(0xC0020024);
pub const IO36_DOUT: PinCode = PinCode(0xC0021024);
pub const IO36_SCIA_TX: PinCode = PinCode(0xC0050124);
pub const IO36_CANA_RX: PinCode = PinCode(0xC0031624);
pub const IO36_SD1_D1: PinCode = PinCode(0xC0090D24);

pub const IO37_DIN: PinCode = PinCode(0xC0020025);
pub const IO37_DOUT: PinCode = PinCode(0xC0021025);
pub const IO37_CANA_TX: PinCode = PinCode(0xC0030625);
pub const IO37_SD1_D2: PinCode = PinCode(0xC0092D25);

pub const IO38_DIN: PinCode = PinCode(0xC0020026);
pub const IO38_DOUT: PinCode = PinCode(0xC0021026);
pub const IO38_SCIB_TX: PinCode = PinCode(0xC0052626);
pub const IO38_SD1_D3: PinCode = PinCode(0xC0094D26);

pub const IO39_DIN: PinCode = PinCode(0xC0020027);
pub const IO39_DOUT: PinCode = PinCode(0xC0021027);
pub const IO39_SCIB_RX: PinCode = PinCode(0xC0053627);
pub const IO39_SD1_D4: PinCode = PinCode(0xC0096D27);

pub const IO40_DIN: PinCode = PinCode(0xC0020028);
pub const IO40_DOUT: PinCode = PinCode(0xC0021028);

pub const IO41_DIN: PinCode = PinCode(0xC0020029);
pub const IO41_DOUT: PinCode = PinCode(0xC0021029);

pub const IO42_DIN: PinCode = PinCode(0xC002002A);
pub const IO42_DOUT: PinCode = PinCode(0xC002102A);
pub const IO42_I2CA_SDA: PinCode = PinCode(0xC004062A);
pub const IO42_SCIA_TX: PinCode = PinCode(0xC0050F2A);

pub const IO43_DIN: PinCode = PinCode(0xC002002B);
pub const IO43_DOUT: PinCode = PinCode(0xC002102B);
pub const IO43_I2CA_SCL: PinCode = PinCode(0xC004162B);
pub const IO43_SCIA_RX: PinCode = PinCode(0xC0051F2B);

pub const IO44_DIN: PinCode = PinCode(0xC002002C);
pub const IO44_DOUT: PinCode = PinCode(0xC002102C);

pub const IO45_DIN: PinCode = PinCode(0xC002002D);
pub const IO45_DOUT: PinCode = PinCode(0xC002102D);

pub const IO46_DIN: PinCode = PinCode(0xC002002E);
pub const IO46_DOUT: PinCode = PinCode(0xC002102E);
pub const IO46_EPWM4_A: PinCode = PinCode(0xC008612E);
pub const IO46_SCIA_RX: PinCode = PinCode(0xC005162E);

pub const IO47_DIN: PinCode = PinCode(0xC002002F);
pub const IO47_DOUT: PinCode = PinCode(0xC002102F);
pub const IO47_EPWM4_B: PinCode = PinCode(0xC008712F);
pub const IO47_SCIA_TX: PinCode = PinCode(0xC005062F);

pub const IO48_DIN: PinCode = PinCode(0xC0020030);
pub const IO48_DOUT: PinCode = PinCode(0xC0021030);
pub const IO48_SCIA_TX: PinCode = PinCode(0xC0050630);
pub const IO48_SD1_D1: PinCode = PinCode(0xC0090730);

pub const IO49_DIN: PinCode = PinCode(0xC0020031);
pub const IO49_DOUT: PinCode = PinCode(0xC0021031);
pub const IO49_SCIA_RX: PinCode = PinCode(0xC0051631);
pub const IO49_SD1_C1: PinCode = PinCode(0xC0091731);
pub const IO49_FSITXA_D0: PinCode = PinCode(0xC0100E31);

pub const IO50_DIN: PinCode = PinCode(0xC0020032);
pub const IO50_DOUT: PinCode = PinCode(0xC0021032);
pub const IO50_EQEP1_A: PinCode = PinCode(0xC00D0132);
pub const IO50_SD1_D2: PinCode = PinCode(0xC0092732);
pub const IO50_FSITXA_D1: PinCode = PinCode(0xC0101E32);

pub const IO51_DIN: PinCode = PinCode(0xC0020033);
pub const IO51_DOUT: PinCode = PinCode(0xC0021033);
pub const IO51_EQEP1_B: PinCode = PinCode(0xC00D1133);
pub const IO51_SD1_C2: PinCode = PinCode(0xC0093733);
pub const IO51_FSITXA_CLK: PinCode = PinCode(0xC0102E33);

pub const IO52_DIN: PinCode = PinCode(0xC0020034);
pub const IO52_DOUT: PinCode = PinCode(0xC0021034);
pub const IO52_EQEP1_STROBE: PinCode = PinCode(0xC00D3134);
pub const IO52_SD1_D3: PinCode = PinCode(0xC0094734);
pub const IO52_FSIRXA_D0: PinCode = PinCode(0xC0103E34);

pub const IO53_DIN: PinCode = PinCode(0xC0020035);
pub const IO53_DOUT: PinCode = PinCode(0xC0021035);
pub const IO53_EQEP1_INDEX: PinCode = PinCode(0xC00D2135);
pub const IO53_SD1_C3: PinCode = PinCode(0xC0095735);
pub const IO53_SD1_C1: PinCode = PinCode(0xC0091D35);
pub const IO53_FSIRXA_D1: PinCode = PinCode(0xC0104E35);

pub const IO54_DIN: PinCode = PinCode(0xC0020036);
pub const IO54_DOUT: PinCode = PinCode(0xC0021036);
pub const IO54_SPIA_SIMO: PinCode = PinCode(0xC0070136);
pub const IO54_EQEP2_A: PinCode = PinCode(0xC00D4536);
pub const IO54_SCIB_TX: PinCode = PinCode(0xC0052636);
pub const IO54_SD1_D4: PinCode = PinCode(0xC0096736);
pub const IO54_SD1_C2: PinCode = PinCode(0xC0093D36);
pub const IO54_FSIRXA_CLK: PinCode = PinCode(0xC0105E36);

pub const IO55_DIN: PinCode = PinCode(0xC0020037);
pub const IO55_DOUT: PinCode = PinCode(0xC0021037);
pub const IO55_SPIA_SOMI: PinCode = PinCode(0xC0071137);
pub const IO55_EQEP2_B: PinCode = PinCode(0xC00D5537);
pub const IO55_SCIB_RX: PinCode = PinCode(0xC0053637);
pub const IO55_SD1_C4: PinCode = PinCode(0xC0097737);
pub const IO55_SD1_C3: PinCode = PinCode(0xC0095D37);

pub const IO56_DIN: PinCode = PinCode(0xC0020038);
pub const IO56_DOUT: PinCode = PinCode(0xC0021038);
pub const IO56_SPIA_CLK: PinCode = PinCode(0xC0072138);
pub const IO56_EQEP2_STROBE: PinCode = PinCode(0xC00D7538);
pub const IO56_I2CA_SDA: PinCode = PinCode(0xC0040A38);
pub const IO56_SD1_C4: PinCode = PinCode(0xC0097D38);

pub const IO57_DIN: PinCode = PinCode(0xC0020039);
pub const IO57_DOUT: PinCode = PinCode(0xC0021039);
pub const IO57_SPIA_STE: PinCode = PinCode(0xC0073139);
pub const IO57_EQEP2_INDEX: PinCode = PinCode(0xC00D6539);
pub const IO57_I2CA_SCL: PinCode = PinCode(0xC0041A39);

pub const IO58_DIN: PinCode = PinCode(0xC002003A);
pub const IO58_DOUT: PinCode = PinCode(0xC002103A);
pub const IO58_SPIA_SIMO: PinCode = PinCode(0xC007013A);
pub const IO58_EPWM8_A: PinCode = PinCode(0xC008E33A);
pub const IO58_SPIB_CLK: PinCode = PinCode(0xC007663A);
pub const IO58_CANA_RX: PinCode = PinCode(0xC0031B3A);

pub const IO59_DIN: PinCode = PinCode(0xC002003B);
pub const IO59_DOUT: PinCode = PinCode(0xC002103B);
pub const IO59_EPWM5_A: PinCode = PinCode(0xC008813B);
pub const IO59_EPWM8_B: PinCode = PinCode(0xC008F33B);
pub const IO59_SPIB_STE: PinCode = PinCode(0xC007763B);
pub const IO59_CANA_TX: PinCode = PinCode(0xC0030B3B);
pub const IO59_SPIA_SOMI: PinCode = PinCode(0xC0071F3B);

pub const IO60_DIN: PinCode = PinCode(0xC002003C);
pub const IO60_DOUT: PinCode = PinCode(0xC002103C);
pub const IO60_EPWM3_B: PinCode = PinCode(0xC008513C);
pub const IO60_SPIB_SIMO: PinCode = PinCode(0xC007463C);
pub const IO60_SPIA_CLK: PinCode = PinCode(0xC0072F3C);

pub const IO61_DIN: PinCode = PinCode(0xC002003D);
pub const IO61_DOUT: PinCode = PinCode(0xC002103D);
pub const IO61_SPIB_SOMI: PinCode = PinCode(0xC007563D);
pub const IO61_CANA_RX: PinCode = PinCode(0xC0031E3D);
pub const IO61_SPIA_STE: PinCode = PinCode(0xC0073F3D);

pub const IO62_DIN: PinCode = PinCode(0xC002003E);
pub const IO62_DOUT: PinCode = PinCode(0xC002103E);
pub const IO62_SCIA_RX: PinCode = PinCode(0xC005113E);
pub const IO62_CANA_RX: PinCode = PinCode(0xC003163E);
pub const IO62_CANA_TX: PinCode = PinCode(0xC0030E3E);

pub const IO63_DIN: PinCode = PinCode(0xC002003F);
pub const IO63_DOUT: PinCode = PinCode(0xC002103F);
pub const IO63_SCIA_TX: PinCode = PinCode(0xC005013F);
pub const IO63_CANA_TX: PinCode = PinCode(0xC003063F);
pub const IO63_SD1_D1: PinCode = PinCode(0xC0090D3F);
pub const IO63_SPIB_SIMO: PinCode = PinCode(0xC0074F3F);

pub const IO64_DIN: PinCode = PinCode(0xC0020040);
pub const IO64_DOUT: PinCode = PinCode(0xC0021040);
pub const IO64_SCIA_RX: PinCode = PinCode(0xC0051640);
pub const IO64_SD1_C1: PinCode = PinCode(0xC0091D40);
pub const IO64_SPIB_SOMI: PinCode = PinCode(0xC0075F40);

pub const IO65_DIN: PinCode = PinCode(0xC0020041);
pub const IO65_DOUT: PinCode = PinCode(0xC0021041);
pub const IO65_SCIA_TX: PinCode = PinCode(0xC0050641);
pub const IO65_SD1_D2: PinCode = PinCode(0xC0092D41);
pub const IO65_SPIB_CLK: PinCode = PinCode(0xC0076F41);

pub const IO66_DIN: PinCode = PinCode(0xC0020042);
pub const IO66_DOUT: PinCode = PinCode(0xC0021042);
pub const IO66_SD1_C2: PinCode = PinCode(0xC0093D42);
pub const IO66_SPIB_STE: PinCode = PinCode(0xC0077F42);

pub const IO67_DIN: PinCode = PinCode(0xC0020043);
pub const IO67_DOUT: PinCode = PinCode(0xC0021043);
pub const IO67_SD1_D3: PinCode = PinCode(0xC0094D43);

pub const IO68_DIN: PinCode = PinCode(0xC0020044);
pub const IO68_DOUT: PinCode = PinCode(0xC0021044);
pub const IO68_SD1_C3: PinCode = PinCode(0xC0095D44);

pub const IO69_DIN: PinCode = PinCode(0xC0020045);
pub const IO69_DOUT: PinCode = PinCode(0xC0021045);
pub const IO69_SD1_D4: PinCode = PinCode(0xC0096D45);

pub const IO70_DIN: PinCode = PinCode(0xC0020046);
pub const IO70_DOUT: PinCode = PinCode(0xC0021046);
pub const IO70_CANA_RX: PinCode = PinCode(0xC0031546);
pub const IO70_SCIB_TX: PinCode = PinCode(0xC0052646);
pub const IO70_SD1_C4: PinCode = PinCode(0xC0097D46);

pub const IO71_DIN: PinCode = PinCode(0xC0020047);
pub const IO71_DOUT: PinCode = PinCode(0xC0021047);
pub const IO71_CANA_TX: PinCode = PinCode(0xC0030547);
pub const IO71_SCIB_RX: PinCode = PinCode(0xC0053647);

pub const IO72_DIN: PinCode = PinCode(0xC0020048);
pub const IO72_DOUT: PinCode = PinCode(0xC0021048);

pub const IO73_DIN: PinCode = PinCode(0xC0020049);
pub const IO73_DOUT: PinCode = PinCode(0xC0021049);
pub const IO73_XCLKOUT: PinCode = PinCode(0xC0005349);
pub const IO73_EPWM5_B: PinCode = PinCode(0xC0089749);

pub const IO74_DIN: PinCode = PinCode(0xC002004A);
pub const IO74_DOUT: PinCode = PinCode(0xC002104A);
pub const IO74_EPWM8_A: PinCode = PinCode(0xC008E14A);
pub const IO74_SD1_D4: PinCode = PinCode(0xC0096A4A);

pub const IO75_DIN: PinCode = PinCode(0xC002004B);
pub const IO75_DOUT: PinCode = PinCode(0xC002104B);
pub const IO75_EPWM8_B: PinCode = PinCode(0xC008F14B);

pub const IO76_DIN: PinCode = PinCode(0xC002004C);
pub const IO76_DOUT: PinCode = PinCode(0xC002104C);

pub const IO77_DIN: PinCode = PinCode(0xC002004D);
pub const IO77_DOUT: PinCode = PinCode(0xC002104D);
pub const IO77_SD1_D4: PinCode = PinCode(0xC0096A4D);

pub const IO78_DIN: PinCode = PinCode(0xC002004E);
pub const IO78_DOUT: PinCode = PinCode(0xC002104E);
pub const IO78_EQEP2_A: PinCode = PinCode(0xC00D464E);

pub const IO79_DIN: PinCode = PinCode(0xC002004F);
pub const IO79_DOUT: PinCode = PinCode(0xC002104F);
pub const IO79_ERRORSTS: PinCode = PinCode(0xC000654F);
pub const IO79_EQEP2_B: PinCode = PinCode(0xC00D564F);

pub const IO80_DIN: PinCode = PinCode(0xC0020050);
pub const IO80_DOUT: PinCode = PinCode(0xC0021050);
pub const IO80_ERRORSTS: PinCode = PinCode(0xC0006550);
pub const IO80_EQEP2_STROBE: PinCode = PinCode(0xC00D7650);
pub const IO80_SD1_D4: PinCode = PinCode(0xC0096A50);

pub const IO81_DIN: PinCode = PinCode(0xC0020051);
pub const IO81_DOUT: PinCode = PinCode(0xC0021051);
pub const IO81_EQEP2_INDEX: PinCode = PinCode(0xC00D6651);

pub const IO82_DIN: PinCode = PinCode(0xC0020052);
pub const IO82_DOUT: PinCode = PinCode(0xC0021052);

pub const IO83_DIN: PinCode = PinCode(0xC0020053);
pub const IO83_DOUT: PinCode = PinCode(0xC0021053);

pub const IO84_DIN: PinCode = PinCode(0xC0020054);
pub const IO84_DOUT: PinCode = PinCode(0xC0021054);
pub const IO84_SCIA_TX: PinCode = PinCode(0xC0050554);

pub const IO85_DIN: PinCode = PinCode(0xC0020055);
pub const IO85_DOUT: PinCode = PinCode(0xC0021055);
pub const IO85_SCIA_RX: PinCode = PinCode(0xC0051555);

pub const IO86_DIN: PinCode = PinCode(0xC0020056);
pub const IO86_DOUT: PinCode = PinCode(0xC0021056);
pub const IO86_SCIB_TX: PinCode = PinCode(0xC0052556);

pub const IO87_DIN: PinCode = PinCode(0xC0020057);
pub const IO87_DOUT: PinCode = PinCode(0xC0021057);
pub const IO87_SCIB_RX: PinCode = PinCode(0xC0053557);

pub const IO88_DIN: PinCode = PinCode(0xC0020058);
pub const IO88_DOUT: PinCode = PinCode(0xC0021058);

pub const IO89_DIN: PinCode = PinCode(0xC0020059);
pub const IO89_DOUT: PinCode = PinCode(0xC0021059);
pub const IO89_SD1_D3: PinCode = PinCode(0xC0094759);

pub const IO90_DIN: PinCode = PinCode(0xC002005A);
pub const IO90_DOUT: PinCode = PinCode(0xC002105A);
pub const IO90_SD1_C3: PinCode = PinCode(0xC009575A);

pub const IO91_DIN: PinCode = PinCode(0xC002005B);
pub const IO91_DOUT: PinCode = PinCode(0xC002105B);
pub const IO91_I2CA_SDA: PinCode = PinCode(0xC004065B);
pub const IO91_PMBUSA_SCL: PinCode = PinCode(0xC0111A5B);

pub const IO92_DIN: PinCode = PinCode(0xC002005C);
pub const IO92_DOUT: PinCode = PinCode(0xC002105C);
pub const IO92_I2CA_SCL: PinCode = PinCode(0xC004165C);
pub const IO92_PMBUSA_SDA: PinCode = PinCode(0xC0110A5C);

pub const IO93_DIN: PinCode = PinCode(0xC002005D);
pub const IO93_DOUT: PinCode = PinCode(0xC002105D);
pub const IO93_PMBUSA_ALERT: PinCode = PinCode(0xC0113A5D);

pub const IO94_DIN: PinCode = PinCode(0xC002005E);
pub const IO94_DOUT: PinCode = PinCode(0xC002105E);
pub const IO94_PMBUSA_CTL: PinCode = PinCode(0xC0112A5E);

pub const IO95_DIN: PinCode = PinCode(0xC002005F);
pub const IO95_DOUT: PinCode = PinCode(0xC002105F);
pub const IO95_SD1_D1: PinCode = PinCode(0xC009065F);

pub const IO96_DIN: PinCode = PinCode(0xC0020060);
pub const IO96_DOUT: PinCode = PinCode(0xC0021060);
pub const IO96_EQEP1_A: PinCode = PinCode(0xC00D0560);
pub const IO96_SD1_C1: PinCode = PinCode(0xC0091660);

pub const IO97_DIN: PinCode = PinCode(0xC0020061);
pub const IO97_DOUT: PinCode = PinCode(0xC0021061);
pub const IO97_EQEP1_B: PinCode = PinCode(0xC00D1561);
pub const IO97_SD1_D2: PinCode = PinCode(0xC0092661);

pub const IO98_DIN: PinCode = PinCode(0xC0020062);
pub const IO98_DOUT: PinCode = PinCode(0xC0021062);
pub const IO98_EQEP1_STROBE: PinCode = PinCode(0xC00D3562);
pub const IO98_SD1_C2: PinCode = PinCode(0xC0093662);

pub const IO99_DIN: PinCode = PinCode(0xC0020063);
pub const IO99_DOUT: PinCode = PinCode(0xC0021063);
pub const IO99_EPWM8_A: PinCode = PinCode(0xC008E363);
pub const IO99_EQEP1_INDEX: PinCode = PinCode(0xC00D2563);

pub const IO100_DIN: PinCode = PinCode(0xC0020064);
pub const IO100_DOUT: PinCode = PinCode(0xC0021064);
pub const IO100_SPIA_SIMO: PinCode = PinCode(0xC0070164);
pub const IO100_EQEP2_A: PinCode = PinCode(0xC00D4564);
pub const IO100_SD1_D1: PinCode = PinCode(0xC0090964);
pub const IO100_FSITXA_D0: PinCode = PinCode(0xC0100D64);

pub const IO101_DIN: PinCode = PinCode(0xC0020065);
pub const IO101_DOUT: PinCode = PinCode(0xC0021065);
pub const IO101_EQEP2_B: PinCode = PinCode(0xC00D5565);
pub const IO101_FSITXA_D1: PinCode = PinCode(0xC0101D65);

pub const IO102_DIN: PinCode = PinCode(0xC0020066);
pub const IO102_DOUT: PinCode = PinCode(0xC0021066);
pub const IO102_EQEP2_STROBE: PinCode = PinCode(0xC00D7566);
pub const IO102_FSITXA_CLK: PinCode = PinCode(0xC0102D66);

pub const IO103_DIN: PinCode = PinCode(0xC0020067);
pub const IO103_DOUT: PinCode = PinCode(0xC0021067);
pub const IO103_EPWM8_B: PinCode = PinCode(0xC008F367);
pub const IO103_EQEP2_INDEX: PinCode = PinCode(0xC00D6567);
pub const IO103_FSIRXA_D0: PinCode = PinCode(0xC0103D67);

pub const IO104_DIN: PinCode = PinCode(0xC0020068);
pub const IO104_DOUT: PinCode = PinCode(0xC0021068);
pub const IO104_I2CA_SDA: PinCode = PinCode(0xC0040168);
pub const IO104_FSIRXA_D1: PinCode = PinCode(0xC0104D68);

pub const IO105_DIN: PinCode = PinCode(0xC0020069);
pub const IO105_DOUT: PinCode = PinCode(0xC0021069);
pub const IO105_I2CA_SCL: PinCode = PinCode(0xC0041169);
pub const IO105_FSIRXA_CLK: PinCode = PinCode(0xC0105D69);

pub const IO106_DIN: PinCode = PinCode(0xC002006A);
pub const IO106_DOUT: PinCode = PinCode(0xC002106A);

pub const IO107_DIN: PinCode = PinCode(0xC002006B);
pub const IO107_DOUT: PinCode = PinCode(0xC002106B);

pub const IO108_DIN: PinCode = PinCode(0xC002006C);
pub const IO108_DOUT: PinCode = PinCode(0xC002106C);

pub const IO109_DIN: PinCode = PinCode(0xC002006D);
pub const IO109_DOUT: PinCode = PinCode(0xC002106D);

pub const IO110_DIN: PinCode = PinCode(0xC002006E);
pub const IO110_DOUT: PinCode = PinCode(0xC002106E);

pub const IO111_DIN: PinCode = PinCode(0xC002006F);
pub const IO111_DOUT: PinCode = PinCode(0xC002106F);

pub const IO112_DIN: PinCode = PinCode(0xC0020070);
pub const IO112_DOUT: PinCode = PinCode(0xC0021070);
pub const IO112_SD1_D3: PinCode = PinCode(0xC0094770);

pub const IO113_DIN: PinCode = PinCode(0xC0020071);
pub const IO113_DOUT: PinCode = PinCode(0xC0021071);
pub const IO113_SD1_C3: PinCode = PinCode(0xC0095771);

pub const IO114_DIN: PinCode = PinCode(0xC0020072);
pub const IO114_DOUT: PinCode = PinCode(0xC0021072);
pub const IO114_SD1_D4: PinCode = PinCode(0xC0096772);

pub const IO115_DIN: PinCode = PinCode(0xC0020073);
pub const IO115_DOUT: PinCode = PinCode(0xC0021073);
pub const IO115_SD1_C4: PinCode = PinCode(0xC0097773);

pub const IO116_DIN: PinCode = PinCode(0xC0020074);
pub const IO116_DOUT: PinCode = PinCode(0xC0021074);

pub const IO119_DIN: PinCode = PinCode(0xC0020077);
pub const IO119_DOUT: PinCode = PinCode(0xC0021077);

pub const IO120_DIN: PinCode = PinCode(0xC0020078);
pub const IO120_DOUT: PinCode = PinCode(0xC0021078);

pub const IO122_DIN: PinCode = PinCode(0xC002007A);
pub const IO122_DOUT: PinCode = PinCode(0xC002107A);
pub const IO122_SD1_D1: PinCode = PinCode(0xC009077A);

pub const IO123_DIN: PinCode = PinCode(0xC002007B);
pub const IO123_DOUT: PinCode = PinCode(0xC002107B);
pub const IO123_SD1_C1: PinCode = PinCode(0xC009177B);

pub const IO124_DIN: PinCode = PinCode(0xC002007C);
pub const IO124_DOUT: PinCode = PinCode(0xC002107C);
pub const IO124_SD1_D2: PinCode = PinCode(0xC009277C);

pub const IO125_DIN: PinCode = PinCode(0xC002007D);
pub const IO125_DOUT: PinCode = PinCode(0xC002107D);
pub const IO125_SD1_C2: PinCode = PinCode(0xC009377D);

pub const IO126_DIN: PinCode = PinCode(0xC002007E);
pub const IO126_DOUT: PinCode = PinCode(0xC002107E);
pub const IO126_SD1_D3: PinCode = PinCode(0xC009477E);

pub const IO127_DIN: PinCode = PinCode(0xC002007F);
pub const IO127_DOUT: PinCode = PinCode(0xC002107F);
pub const IO127_SD1_C3: PinCode = PinCode(0xC009577F);

pub const IO128_DIN: PinCode = PinCode(0xC0020080);
pub const IO128_DOUT: PinCode = PinCode(0xC0021080);
pub const IO128_SD1_D4: PinCode = PinCode(0xC0096780);

pub const IO129_DIN: PinCode = PinCode(0xC0020081);
pub const IO129_DOUT: PinCode = PinCode(0xC0021081);
pub const IO129_SD1_C4: PinCode = PinCode(0xC0097781);

pub const IO130_DIN: PinCode = PinCode(0xC0020082);
pub const IO130_DOUT: PinCode = PinCode(0xC0021082);

pub const IO131_DIN: PinCode = PinCode(0xC0020083);
pub const IO131_DOUT: PinCode = PinCode(0xC0021083);

pub const IO132_DIN: PinCode = PinCode(0xC0020084);
pub const IO132_DOUT: PinCode = PinCode(0xC0021084);

pub const IO133_DIN: PinCode = PinCode(0xC0020085);
pub const IO133_DOUT: PinCode = PinCode(0xC0021085);

pub const IO134_DIN: PinCode = PinCode(0xC0020086);
pub const IO134_DOUT: PinCode = PinCode(0xC0021086);

pub const IO141_DIN: PinCode = PinCode(0xC002008D);
pub const IO141_DOUT: PinCode = PinCode(0xC002108D);
pub const IO141_SCIB_TX: PinCode = PinCode(0xC005268D);

pub const IO142_DIN: PinCode = PinCode(0xC002008E);
pub const IO142_DOUT: PinCode = PinCode(0xC002108E);
pub const IO142_SCIB_RX: PinCode = PinCode(0xC005368E);

pub const IO145_DIN: PinCode = PinCode(0xC0020091);
pub const IO145_DOUT: PinCode = PinCode(0xC0021091);
pub const IO145_EPWM1_A: PinCode = PinCode(0xC0080191);

pub const IO146_DIN: PinCode = PinCode(0xC0020092);
pub const IO146_DOUT: PinCode = PinCode(0xC0021092);
pub const IO146_EPWM1_B: PinCode = PinCode(0xC0081192);

pub const IO147_DIN: PinCode = PinCode(0xC0020093);
pub const IO147_DOUT: PinCode = PinCode(0xC0021093);
pub const IO147_EPWM2_A: PinCode = PinCode(0xC0082193);

pub const IO148_DIN: PinCode = PinCode(0xC0020094);
pub const IO148_DOUT: PinCode = PinCode(0xC0021094);
pub const IO148_EPWM2_B: PinCode = PinCode(0xC0083194);

pub const IO149_DIN: PinCode = PinCode(0xC0020095);
pub const IO149_DOUT: PinCode = PinCode(0xC0021095);
pub const IO149_EPWM3_A: PinCode = PinCode(0xC0084195);

pub const IO150_DIN: PinCode = PinCode(0xC0020096);
pub const IO150_DOUT: PinCode = PinCode(0xC0021096);
pub const IO150_EPWM3_B: PinCode = PinCode(0xC0085196);

pub const IO151_DIN: PinCode = PinCode(0xC0020097);
pub const IO151_DOUT: PinCode = PinCode(0xC0021097);
pub const IO151_EPWM4_A: PinCode = PinCode(0xC0086197);
pub const IO151_PMBUSA_SCL: PinCode = PinCode(0xC0111697);
pub const IO151_FSITXA_D0: PinCode = PinCode(0xC0100D97);

pub const IO152_DIN: PinCode = PinCode(0xC0020098);
pub const IO152_DOUT: PinCode = PinCode(0xC0021098);
pub const IO152_EPWM4_B: PinCode = PinCode(0xC0087198);
pub const IO152_PMBUSA_SDA: PinCode = PinCode(0xC0110698);
pub const IO152_FSITXA_D1: PinCode = PinCode(0xC0101D98);

pub const IO153_DIN: PinCode = PinCode(0xC0020099);
pub const IO153_DOUT: PinCode = PinCode(0xC0021099);
pub const IO153_EPWM5_A: PinCode = PinCode(0xC0088199);
pub const IO153_PMBUSA_ALERT: PinCode = PinCode(0xC0113699);
pub const IO153_FSITXA_CLK: PinCode = PinCode(0xC0102D99);

pub const IO154_DIN: PinCode = PinCode(0xC002009A);
pub const IO154_DOUT: PinCode = PinCode(0xC002109A);
pub const IO154_EPWM5_B: PinCode = PinCode(0xC008919A);
pub const IO154_PMBUSA_CTL: PinCode = PinCode(0xC011269A);
pub const IO154_FSIRXA_D0: PinCode = PinCode(0xC0103D9A);

pub const IO155_DIN: PinCode = PinCode(0xC002009B);
pub const IO155_DOUT: PinCode = PinCode(0xC002109B);
pub const IO155_EPWM6_A: PinCode = PinCode(0xC008A19B);
pub const IO155_FSIRXA_D1: PinCode = PinCode(0xC0104D9B);

pub const IO156_DIN: PinCode = PinCode(0xC002009C);
pub const IO156_DOUT: PinCode = PinCode(0xC002109C);
pub const IO156_EPWM6_B: PinCode = PinCode(0xC008B19C);
pub const IO156_FSIRXA_CLK: PinCode = PinCode(0xC0105D9C);

pub const IO157_DIN: PinCode = PinCode(0xC002009D);
pub const IO157_DOUT: PinCode = PinCode(0xC002109D);
pub const IO157_EPWM7_A: PinCode = PinCode(0xC008C19D);

pub const IO158_DIN: PinCode = PinCode(0xC002009E);
pub const IO158_DOUT: PinCode = PinCode(0xC002109E);
pub const IO158_EPWM7_B: PinCode = PinCode(0xC008D19E);

pub const IO159_DIN: PinCode = PinCode(0xC002009F);
pub const IO159_DOUT: PinCode = PinCode(0xC002109F);
pub const IO159_EPWM8_A: PinCode = PinCode(0xC008E19F);

pub const IO160_DIN: PinCode = PinCode(0xC00200A0);
pub const IO160_DOUT: PinCode = PinCode(0xC00210A0);
pub const IO160_EPWM8_B: PinCode = PinCode(0xC008F1A0);

pub const IO161_DIN: PinCode = PinCode(0xC00200A1);
pub const IO161_DOUT: PinCode = PinCode(0xC00210A1);

pub const IO162_DIN: PinCode = PinCode(0xC00200A2);
pub const IO162_DOUT: PinCode = PinCode(0xC00210A2);

pub const IO163_DIN: PinCode = PinCode(0xC00200A3);
pub const IO163_DOUT: PinCode = PinCode(0xC00210A3);

pub const IO164_DIN: PinCode = PinCode(0xC00200A4);
pub const IO164_DOUT: PinCode = PinCode(0xC00210A4);

pub const IO165_DIN: PinCode = PinCode(0xC00200A5);
pub const IO165_DOUT: PinCode = PinCode(0xC00210A5);

pub const IO166_DIN: PinCode = PinCode(0xC00200A6);
pub const IO166_DOUT: PinCode = PinCode(0xC00210A6);

pub const IO167_DIN: PinCode = PinCode(0xC00200A7);
pub const IO167_DOUT: PinCode = PinCode(0xC00210A7);

pub const IO168_DIN: PinCode = PinCode(0xC00200A8);
pub const IO168_DOUT: PinCode = PinCode(0xC00210A8);

pub const IO198_DIN: PinCode = PinCode(0xC00200C6);
pub const IO198_DOUT: PinCode = PinCode(0xC00210C6);
pub const IO198_EQEP1_A: PinCode = PinCode(0xC00D01C6);
pub const IO198_SPIA_SIMO: PinCode = PinCode(0xC00703C6);

pub const IO199_DIN: PinCode = PinCode(0xC00200C7);
pub const IO199_DOUT: PinCode = PinCode(0xC00210C7);
pub const IO199_EQEP1_STROBE: PinCode = PinCode(0xC00D31C7);
pub const IO199_SCIB_TX: PinCode = PinCode(0xC00523C7);
pub const IO199_SPIB_CLK: PinCode = PinCode(0xC00766C7);
pub const IO199_SD1_D4: PinCode = PinCode(0xC00967C7);

pub const IO200_DIN: PinCode = PinCode(0xC00200C8);
pub const IO200_DOUT: PinCode = PinCode(0xC00210C8);
pub const IO200_EQEP1_INDEX: PinCode = PinCode(0xC00D21C8);
pub const IO200_SCIB_RX: PinCode = PinCode(0xC00533C8);
pub const IO200_SPIB_STE: PinCode = PinCode(0xC00776C8);
pub const IO200_SD1_C4: PinCode = PinCode(0xC00977C8);

pub const IO201_DIN: PinCode = PinCode(0xC00200C9);
pub const IO201_DOUT: PinCode = PinCode(0xC00210C9);
pub const IO201_EQEP2_A: PinCode = PinCode(0xC00D42C9);
pub const IO201_SPIB_SIMO: PinCode = PinCode(0xC00746C9);
pub const IO201_PMBUSA_SCL: PinCode = PinCode(0xC01119C9);

pub const IO202_DIN: PinCode = PinCode(0xC00200CA);
pub const IO202_DOUT: PinCode = PinCode(0xC00210CA);
pub const IO202_EQEP2_B: PinCode = PinCode(0xC00D52CA);
pub const IO202_SPIB_SOMI: PinCode = PinCode(0xC00756CA);
pub const IO202_PMBUSA_SDA: PinCode = PinCode(0xC01109CA);
pub const IO202_FSITXA_D1: PinCode = PinCode(0xC0101ECA);

pub const IO203_DIN: PinCode = PinCode(0xC00200CB);
pub const IO203_DOUT: PinCode = PinCode(0xC00210CB);
pub const IO203_EQEP2_INDEX: PinCode = PinCode(0xC00D62CB);
pub const IO203_SPIA_SOMI: PinCode = PinCode(0xC00713CB);
pub const IO203_SPIB_CLK: PinCode = PinCode(0xC00766CB);
pub const IO203_PMBUSA_ALERT: PinCode = PinCode(0xC01139CB);
pub const IO203_FSITXA_D0: PinCode = PinCode(0xC0100ECB);
pub const IO203_EPWM8_B: PinCode = PinCode(0xC008FFCB);

pub const IO204_DIN: PinCode = PinCode(0xC00200CC);
pub const IO204_DOUT: PinCode = PinCode(0xC00210CC);
pub const IO204_EQEP2_STROBE: PinCode = PinCode(0xC00D72CC);
pub const IO204_SPIA_CLK: PinCode = PinCode(0xC00723CC);
pub const IO204_SPIB_STE: PinCode = PinCode(0xC00776CC);
pub const IO204_PMBUSA_CTL: PinCode = PinCode(0xC01129CC);
pub const IO204_FSITXA_CLK: PinCode = PinCode(0xC0102ECC);
pub const IO204_SD1_D3: PinCode = PinCode(0xC0094FCC);

pub const IO205_DIN: PinCode = PinCode(0xC00200CD);
pub const IO205_DOUT: PinCode = PinCode(0xC00210CD);
pub const IO205_EQEP1_INDEX: PinCode = PinCode(0xC00D21CD);
pub const IO205_SPIA_STE: PinCode = PinCode(0xC00733CD);
pub const IO205_SD1_C3: PinCode = PinCode(0xC0095FCD);

pub const IO206_DIN: PinCode = PinCode(0xC00200CE);
pub const IO206_DOUT: PinCode = PinCode(0xC00210CE);

pub const IO207_DIN: PinCode = PinCode(0xC00200CF);
pub const IO207_DOUT: PinCode = PinCode(0xC00210CF);
pub const IO207_EQEP2_A: PinCode = PinCode(0xC00D41CF);
pub const IO207_CANA_TX: PinCode = PinCode(0xC00305CF);
pub const IO207_SCIA_RX: PinCode = PinCode(0xC00517CF);
pub const IO207_LINA_RX: PinCode = PinCode(0xC00619CF);
pub const IO207_PMBUSA_ALERT: PinCode = PinCode(0xC0113FCF);

pub const IO208_DIN: PinCode = PinCode(0xC00200D0);
pub const IO208_DOUT: PinCode = PinCode(0xC00210D0);
pub const IO208_EQEP2_B: PinCode = PinCode(0xC00D51D0);
pub const IO208_SPIB_SIMO: PinCode = PinCode(0xC00745D0);
pub const IO208_SCIA_TX: PinCode = PinCode(0xC00507D0);
pub const IO208_PMBUSA_CTL: PinCode = PinCode(0xC0112FD0);

pub const IO209_DIN: PinCode = PinCode(0xC00200D1);
pub const IO209_DOUT: PinCode = PinCode(0xC00210D1);
pub const IO209_EQEP2_STROBE: PinCode = PinCode(0xC00D71D1);
pub const IO209_SPIB_SOMI: PinCode = PinCode(0xC00755D1);
pub const IO209_PMBUSA_SDA: PinCode = PinCode(0xC0110FD1);

pub const IO210_DIN: PinCode = PinCode(0xC00200D2);
pub const IO210_DOUT: PinCode = PinCode(0xC00210D2);
pub const IO210_EQEP2_INDEX: PinCode = PinCode(0xC00D61D2);
pub const IO210_PMBUSA_SCL: PinCode = PinCode(0xC0111FD2);

pub const IO211_DIN: PinCode = PinCode(0xC00200D3);
pub const IO211_DOUT: PinCode = PinCode(0xC00210D3);

pub const IO212_DIN: PinCode = PinCode(0xC00200D4);
pub const IO212_DOUT: PinCode = PinCode(0xC00210D4);

pub const IO213_DIN: PinCode = PinCode(0xC00200D5);
pub const IO213_DOUT: PinCode = PinCode(0xC00210D5);
pub const IO213_EPWM8_A: PinCode = PinCode(0xC008E2D5);

pub const IO214_DIN: PinCode = PinCode(0xC00200D6);
pub const IO214_DOUT: PinCode = PinCode(0xC00210D6);
pub const IO214_CANA_RX: PinCode = PinCode(0xC00311D6);

pub const IO215_DIN: PinCode = PinCode(0xC00200D7);
pub const IO215_DOUT: PinCode = PinCode(0xC00210D7);
pub const IO215_SCIA_RX: PinCode = PinCode(0xC00511D7);
pub const IO215_CANA_RX: PinCode = PinCode(0xC00313D7);
pub const IO215_LINA_TX: PinCode = PinCode(0xC0060ED7);

pub const IO216_DIN: PinCode = PinCode(0xC00200D8);
pub const IO216_DOUT: PinCode = PinCode(0xC00210D8);
pub const IO216_SCIA_TX: PinCode = PinCode(0xC00501D8);

pub const IO217_DIN: PinCode = PinCode(0xC00200D9);
pub const IO217_DOUT: PinCode = PinCode(0xC00210D9);
pub const IO217_CANA_TX: PinCode = PinCode(0xC00301D9);
pub const IO217_I2CA_SDA: PinCode = PinCode(0xC0040AD9);

pub const IO218_DIN: PinCode = PinCode(0xC00200DA);
pub const IO218_DOUT: PinCode = PinCode(0xC00210DA);
pub const IO218_I2CA_SDA: PinCode = PinCode(0xC00401DA);
pub const IO218_SPIA_SIMO: PinCode = PinCode(0xC00703DA);
pub const IO218_I2CA_SCL: PinCode = PinCode(0xC0041ADA);

pub const IO219_DIN: PinCode = PinCode(0xC00200DB);
pub const IO219_DOUT: PinCode = PinCode(0xC00210DB);
pub const IO219_EPWM8_B: PinCode = PinCode(0xC008F2DB);

pub const IO220_DIN: PinCode = PinCode(0xC00200DC);
pub const IO220_DOUT: PinCode = PinCode(0xC00210DC);
pub const IO220_EPWM6_A: PinCode = PinCode(0xC008A2DC);
pub const IO220_SCIB_TX: PinCode = PinCode(0xC00526DC);
pub const IO220_PMBUSA_ALERT: PinCode = PinCode(0xC0113FDC);

pub const IO221_DIN: PinCode = PinCode(0xC00200DD);
pub const IO221_DOUT: PinCode = PinCode(0xC00210DD);
pub const IO221_EPWM6_B: PinCode = PinCode(0xC008B2DD);
pub const IO221_SCIB_RX: PinCode = PinCode(0xC00536DD);
pub const IO221_PMBUSA_CTL: PinCode = PinCode(0xC0112FDD);
pub const IO221_X2: PinCode = PinCode(0xC00090DD);

pub const IO222_DIN: PinCode = PinCode(0xC00200DE);
pub const IO222_DOUT: PinCode = PinCode(0xC00210DE);
pub const IO222_JTAG_TDI: PinCode = PinCode(0xC01201DE);
pub const IO222_EPWM7_A: PinCode = PinCode(0xC008C2DE);
pub const IO222_SPIA_SIMO: PinCode = PinCode(0xC00703DE);
pub const IO222_SCIA_RX: PinCode = PinCode(0xC00516DE);
pub const IO222_I2CA_SDA: PinCode = PinCode(0xC00409DE);
pub const IO222_PMBUSA_SDA: PinCode = PinCode(0xC0110FDE);

pub const IO223_DIN: PinCode = PinCode(0xC00200DF);
pub const IO223_DOUT: PinCode = PinCode(0xC00210DF);
pub const IO223_JTAG_TDO: PinCode = PinCode(0xC01211DF);
pub const IO223_EPWM7_B: PinCode = PinCode(0xC008D2DF);
pub const IO223_SCIA_TX: PinCode = PinCode(0xC00506DF);
pub const IO223_I2CA_SCL: PinCode = PinCode(0xC00419DF);
pub const IO223_PMBUSA_SCL: PinCode = PinCode(0xC0111FDF);

pub const IO224_DIN: PinCode = PinCode(0xC00200E0);
pub const IO224_DOUT: PinCode = PinCode(0xC00210E0);
pub const IO224_ERRORSTS: PinCode = PinCode(0xC00061E0);
pub const IO224_XCLKOUT: PinCode = PinCode(0xC00053E0);

pub const IO225_AIN: PinCode = PinCode(0xC00100E1);
pub const IO225_DIN: PinCode = PinCode(0xC00200E1);

pub const IO226_AIN: PinCode = PinCode(0xC00100E2);
pub const IO226_DIN: PinCode = PinCode(0xC00200E2);

pub const IO227_AIN: PinCode = PinCode(0xC00100E3);
pub const IO227_DIN: PinCode = PinCode(0xC00200E3);

pub const IO228_AIN: PinCode = PinCode(0xC00100E4);
pub const IO228_DIN: PinCode = PinCode(0xC00200E4);

pub const IO229_AIN: PinCode = PinCode(0xC00100E5);
pub const IO229_DIN: PinCode = PinCode(0xC00200E5);

pub const IO230_AIN: PinCode = PinCode(0xC00100E6);
pub const IO230_DIN: PinCode = PinCode(0xC00200E6);

pub const IO231_AIN: PinCode = PinCode(0xC00100E7);
pub const IO231_DIN: PinCode = PinCode(0xC00200E7);

pub const IO232_AIN: PinCode = PinCode(0xC00100E8);
pub const IO232_DIN: PinCode = PinCode(0xC00200E8);

pub const IO233_AIN: PinCode = PinCode(0xC00100E9);
pub const IO233_DIN: PinCode = PinCode(0xC00200E9);

pub const IO234_AIN: PinCode = PinCode(0xC00100EA);
pub const IO234_DIN: PinCode = PinCode(0xC00200EA);

pub const IO235_AIN: PinCode = PinCode(0xC00100EB);
pub const IO235_DIN: PinCode = PinCode(0xC00200EB);

pub const IO236_AIN: PinCode = PinCode(0xC00100EC);
pub const IO236_DIN: PinCode = PinCode(0xC00200EC);

pub const IO237_AIN: PinCode = PinCode(0xC00100ED);
pub const IO237_DIN: PinCode = PinCode(0xC00200ED);

pub const IO238_AIN: PinCode = PinCode(0xC00100EE);
pub const IO238_DIN: PinCode = PinCode(0xC00200EE);

pub const IO239_AIN: PinCode = PinCode(0xC00100EF);
pub const IO239_DIN: PinCode = PinCode(0xC00200EF);

pub const IO240_AIN: PinCode = PinCode(0xC00100F0);
pub const IO240_DIN: PinCode = PinCode(0xC00200F0);

pub const IO241_AIN: PinCode = PinCode(0xC00100F1);
pub const IO241_DIN: PinCode = PinCode(0xC00200F1);

/// Every pin code of the family
pub const ALL: &[PinCode] = &[
    IO0_DIN,
    IO0_DOUT,
    IO0_EPWM1_A,
    IO0_I2CA_SDA,
    IO0_FSITXA_D0,
    IO1_DIN,
    IO1_DOUT,
    IO1_EPWM1_B,
    IO1_I2CA_SCL,
    IO1_FSITXA_D1,
    IO2_DIN,
    IO2_DOUT,
    IO2_EPWM2_A,
    IO2_FSITXA_CLK,
    IO3_DIN,
    IO3_DOUT,
    IO3_EPWM2_B,
    IO3_FSIRXA_D0,
    IO4_DIN,
    IO4_DOUT,
    IO4_EPWM3_A,
    IO4_CANA_TX,
    IO4_FSIRXA_D1,
    IO5_DIN,
    IO5_DOUT,
    IO5_EPWM3_B,
    IO5_CANA_RX,
    IO5_FSIRXA_CLK,
    IO6_DIN,
    IO6_DOUT,
    IO6_EPWM4_A,
    IO6_LINA_TX,
    IO7_DIN,
    IO7_DOUT,
    IO7_EPWM4_B,
    IO7_LINA_RX,
    IO8_DIN,
    IO8_DOUT,
    IO8_EPWM5_A,
    IO8_ADCSOCAO,
    IO8_SCIA_TX,
    IO8_FSITXA_D1,
    IO8_FSIRXA_D0,
    IO9_DIN,
    IO9_DOUT,
    IO9_EPWM5_B,
    IO9_SCIB_TX,
    IO9_SCIA_RX,
    IO9_FSITXA_D0,
    IO9_FSIRXA_CLK,
    IO10_DIN,
    IO10_DOUT,
    IO10_EPWM6_A,
    IO10_ADCSOCBO,
    IO10_EQEP1_A,
    IO10_SCIB_TX,
    IO10_FSITXA_CLK,
    IO10_FSIRXA_D1,
    IO11_DIN,
    IO11_DOUT,
    IO11_EPWM6_B,
    IO11_SCIB_RX,
    IO11_EQEP1_B,
    IO11_FSIRXA_D1,
    IO11_PMBUSA_ALERT,
    IO12_DIN,
    IO12_DOUT,
    IO12_EPWM7_A,
    IO12_ADCSOCAO,
    IO12_EQEP1_STROBE,
    IO12_SCIA_TX,
    IO12_FSIRXA_D0,
    IO12_PMBUSA_CTL,
    IO13_DIN,
    IO13_DOUT,
    IO13_EPWM7_B,
    IO13_EQEP1_INDEX,
    IO13_SCIA_RX,
    IO13_FSIRXA_CLK,
    IO13_PMBUSA_SDA,
    IO14_DIN,
    IO14_DOUT,
    IO14_EPWM8_A,
    IO14_SCIB_TX,
    IO14_LINA_TX,
    IO14_PMBUSA_SCL,
    IO15_DIN,
    IO15_DOUT,
    IO15_EPWM8_B,
    IO15_SCIB_RX,
    IO15_LINA_RX,
    IO16_DIN,
    IO16_DOUT,
    IO16_SPIA_SIMO,
    IO16_SD1_D1,
    IO17_DIN,
    IO17_DOUT,
    IO17_SPIA_SOMI,
    IO17_SD1_C1,
    IO18_DIN,
    IO18_DOUT,
    IO18_SPIA_CLK,
    IO18_SCIB_TX,
    IO18_CANA_RX,
    IO18_SD1_D2,
    IO19_DIN,
    IO19_DOUT,
    IO19_SPIA_STE,
    IO19_SCIB_RX,
    IO19_CANA_TX,
    IO19_SD1_C2,
    IO20_DIN,
    IO20_DOUT,
    IO20_EQEP1_A,
    IO20_SD1_D3,
    IO21_DIN,
    IO21_DOUT,
    IO21_EQEP1_B,
    IO21_SD1_C3,
    IO22_DIN,
    IO22_DOUT,
    IO22_EQEP1_STROBE,
    IO22_SCIB_TX,
    IO22_SPIB_CLK,
    IO22_SD1_D4,
    IO23_DIN,
    IO23_DOUT,
    IO23_EQEP1_INDEX,
    IO23_SCIB_RX,
    IO23_SPIB_STE,
    IO23_SD1_C4,
    IO24_DIN,
    IO24_DOUT,
    IO24_EQEP2_A,
    IO24_SPIB_SIMO,
    IO24_PMBUSA_SCL,
    IO25_DIN,
    IO25_DOUT,
    IO25_EQEP2_B,
    IO25_SPIB_SOMI,
    IO25_PMBUSA_SDA,
    IO25_FSITXA_D1,
    IO26_DIN,
    IO26_DOUT,
    IO26_EQEP2_INDEX,
    IO26_SPIB_CLK,
    IO26_PMBUSA_ALERT,
    IO26_FSITXA_D0,
    IO27_DIN,
    IO27_DOUT,
    IO27_EQEP2_STROBE,
    IO27_SPIB_STE,
    IO27_PMBUSA_CTL,
    IO27_FSITXA_CLK,
    IO28_DIN,
    IO28_DOUT,
    IO28_SCIA_RX,
    IO29_DIN,
    IO29_DOUT,
    IO29_SCIA_TX,
    IO30_DIN,
    IO30_DOUT,
    IO30_CANA_RX,
    IO31_DIN,
    IO31_DOUT,
    IO31_CANA_TX,
    IO31_I2CA_SDA,
    IO32_DIN,
    IO32_DOUT,
    IO32_I2CA_SDA,
    IO32_SPIA_SIMO,
    IO32_I2CA_SCL,
    IO33_DIN,
    IO33_DOUT,
    IO33_I2CA_SCL,
    IO33_SPIA_SOMI,
    IO34_DIN,
    IO34_DOUT,
    IO34_SPIA_CLK,
    IO34_SCIA_TX,
    IO35_DIN,
    IO35_DOUT,
    IO35_SCIA_RX,
    IO35_SPIA_STE,
    IO36_DIN,
    IO36_DOUT,
    IO36_SCIA_TX,
    IO36_CANA_RX,
    IO36_SD1_D1,
    IO37_DIN,
    IO37_DOUT,
    IO37_CANA_TX,
    IO37_SD1_D2,
    IO38_DIN,
    IO38_DOUT,
    IO38_SCIB_TX,
    IO38_SD1_D3,
    IO39_DIN,
    IO39_DOUT,
    IO39_SCIB_RX,
    IO39_SD1_D4,
    IO40_DIN,
    IO40_DOUT,
    IO41_DIN,
    IO41_DOUT,
    IO42_DIN,
    IO42_DOUT,
    IO42_I2CA_SDA,
    IO42_SCIA_TX,
    IO43_DIN,
    IO43_DOUT,
    IO43_I2CA_SCL,
    IO43_SCIA_RX,
    IO44_DIN,
    IO44_DOUT,
    IO45_DIN,
    IO45_DOUT,
    IO46_DIN,
    IO46_DOUT,
    IO46_EPWM4_A,
    IO46_SCIA_RX,
    IO47_DIN,
    IO47_DOUT,
    IO47_EPWM4_B,
    IO47_SCIA_TX,
    IO48_DIN,
    IO48_DOUT,
    IO48_SCIA_TX,
    IO48_SD1_D1,
    IO49_DIN,
    IO49_DOUT,
    IO49_SCIA_RX,
    IO49_SD1_C1,
    IO49_FSITXA_D0,
    IO50_DIN,
    IO50_DOUT,
    IO50_EQEP1_A,
    IO50_SD1_D2,
    IO50_FSITXA_D1,
    IO51_DIN,
    IO51_DOUT,
    IO51_EQEP1_B,
    IO51_SD1_C2,
    IO51_FSITXA_CLK,
    IO52_DIN,
    IO52_DOUT,
    IO52_EQEP1_STROBE,
    IO52_SD1_D3,
    IO52_FSIRXA_D0,
    IO53_DIN,
    IO53_DOUT,
    IO53_EQEP1_INDEX,
    IO53_SD1_C3,
    IO53_SD1_C1,
    IO53_FSIRXA_D1,
    IO54_DIN,
    IO54_DOUT,
    IO54_SPIA_SIMO,
    IO54_EQEP2_A,
    IO54_SCIB_TX,
    IO54_SD1_D4,
    IO54_SD1_C2,
    IO54_FSIRXA_CLK,
    IO55_DIN,
    IO55_DOUT,
    IO55_SPIA_SOMI,
    IO55_EQEP2_B,
    IO55_SCIB_RX,
    IO55_SD1_C4,
    IO55_SD1_C3,
    IO56_DIN,
    IO56_DOUT,
    IO56_SPIA_CLK,
    IO56_EQEP2_STROBE,
    IO56_I2CA_SDA,
    IO56_SD1_C4,
    IO57_DIN,
    IO57_DOUT,
    IO57_SPIA_STE,
    IO57_EQEP2_INDEX,
    IO57_I2CA_SCL,
    IO58_DIN,
    IO58_DOUT,
    IO58_SPIA_SIMO,
    IO58_EPWM8_A,
    IO58_SPIB_CLK,
    IO58_CANA_RX,
    IO59_DIN,
    IO59_DOUT,
    IO59_EPWM5_A,
    IO59_EPWM8_B,
    IO59_SPIB_STE,
    IO59_CANA_TX,
    IO59_SPIA_SOMI,
    IO60_DIN,
    IO60_DOUT,
    IO60_EPWM3_B,
    IO60_SPIB_SIMO,
    IO60_SPIA_CLK,
    IO61_DIN,
    IO61_DOUT,
    IO61_SPIB_SOMI,
    IO61_CANA_RX,
    IO61_SPIA_STE,
    IO62_DIN,
    IO62_DOUT,
    IO62_SCIA_RX,
    IO62_CANA_RX,
    IO62_CANA_TX,
    IO63_DIN,
    IO63_DOUT,
    IO63_SCIA_TX,
    IO63_CANA_TX,
    IO63_SD1_D1,
    IO63_SPIB_SIMO,
    IO64_DIN,
    IO64_DOUT,
    IO64_SCIA_RX,
    IO64_SD1_C1,
    IO64_SPIB_SOMI,
    IO65_DIN,
    IO65_DOUT,
    IO65_SCIA_TX,
    IO65_SD1_D2,
    IO65_SPIB_CLK,
    IO66_DIN,
    IO66_DOUT,
    IO66_SD1_C2,
    IO66_SPIB_STE,
    IO67_DIN,
    IO67_DOUT,
    IO67_SD1_D3,
    IO68_DIN,
    IO68_DOUT,
    IO68_SD1_C3,
    IO69_DIN,
    IO69_DOUT,
    IO69_SD1_D4,
    IO70_DIN,
    IO70_DOUT,
    IO70_CANA_RX,
    IO70_SCIB_TX,
    IO70_SD1_C4,
    IO71_DIN,
    IO71_DOUT,
    IO71_CANA_TX,
    IO71_SCIB_RX,
    IO72_DIN,
    IO72_DOUT,
    IO73_DIN,
    IO73_DOUT,
    IO73_XCLKOUT,
    IO73_EPWM5_B,
    IO74_DIN,
    IO74_DOUT,
    IO74_EPWM8_A,
    IO74_SD1_D4,
    IO75_DIN,
    IO75_DOUT,
    IO75_EPWM8_B,
    IO76_DIN,
    IO76_DOUT,
    IO77_DIN,
    IO77_DOUT,
    IO77_SD1_D4,
    IO78_DIN,
    IO78_DOUT,
    IO78_EQEP2_A,
    IO79_DIN,
    IO79_DOUT,
    IO79_ERRORSTS,
    IO79_EQEP2_B,
    IO80_DIN,
    IO80_DOUT,
    IO80_ERRORSTS,
    IO80_EQEP2_STROBE,
    IO80_SD1_D4,
    IO81_DIN,
    IO81_DOUT,
    IO81_EQEP2_INDEX,
    IO82_DIN,
    IO82_DOUT,
    IO83_DIN,
    IO83_DOUT,
    IO84_DIN,
    IO84_DOUT,
    IO84_SCIA_TX,
    IO85_DIN,
    IO85_DOUT,
    IO85_SCIA_RX,
    IO86_DIN,
    IO86_DOUT,
    IO86_SCIB_TX,
    IO87_DIN,
    IO87_DOUT,
    IO87_SCIB_RX,
    IO88_DIN,
    IO88_DOUT,
    IO89_DIN,
    IO89_DOUT,
    IO89_SD1_D3,
    IO90_DIN,
    IO90_DOUT,
    IO90_SD1_C3,
    IO91_DIN,
    IO91_DOUT,
    IO91_I2CA_SDA,
    IO91_PMBUSA_SCL,
    IO92_DIN,
    IO92_DOUT,
    IO92_I2CA_SCL,
    IO92_PMBUSA_SDA,
    IO93_DIN,
    IO93_DOUT,
    IO93_PMBUSA_ALERT,
    IO94_DIN,
    IO94_DOUT,
    IO94_PMBUSA_CTL,
    IO95_DIN,
    IO95_DOUT,
    IO95_SD1_D1,
    IO96_DIN,
    IO96_DOUT,
    IO96_EQEP1_A,
    IO96_SD1_C1,
    IO97_DIN,
    IO97_DOUT,
    IO97_EQEP1_B,
    IO97_SD1_D2,
    IO98_DIN,
    IO98_DOUT,
    IO98_EQEP1_STROBE,
    IO98_SD1_C2,
    IO99_DIN,
    IO99_DOUT,
    IO99_EPWM8_A,
    IO99_EQEP1_INDEX,
    IO100_DIN,
    IO100_DOUT,
    IO100_SPIA_SIMO,
    IO100_EQEP2_A,
    IO100_SD1_D1,
    IO100_FSITXA_D0,
    IO101_DIN,
    IO101_DOUT,
    IO101_EQEP2_B,
    IO101_FSITXA_D1,
    IO102_DIN,
    IO102_DOUT,
    IO102_EQEP2_STROBE,
    IO102_FSITXA_CLK,
    IO103_DIN,
    IO103_DOUT,
    IO103_EPWM8_B,
    IO103_EQEP2_INDEX,
    IO103_FSIRXA_D0,
    IO104_DIN,
    IO104_DOUT,
    IO104_I2CA_SDA,
    IO104_FSIRXA_D1,
    IO105_DIN,
    IO105_DOUT,
    IO105_I2CA_SCL,
    IO105_FSIRXA_CLK,
    IO106_DIN,
    IO106_DOUT,
    IO107_DIN,
    IO107_DOUT,
    IO108_DIN,
    IO108_DOUT,
    IO109_DIN,
    IO109_DOUT,
    IO110_DIN,
    IO110_DOUT,
    IO111_DIN,
    IO111_DOUT,
    IO112_DIN,
    IO112_DOUT,
    IO112_SD1_D3,
    IO113_DIN,
    IO113_DOUT,
    IO113_SD1_C3,
    IO114_DIN,
    IO114_DOUT,
    IO114_SD1_D4,
    IO115_DIN,
    IO115_DOUT,
    IO115_SD1_C4,
    IO116_DIN,
    IO116_DOUT,
    IO119_DIN,
    IO119_DOUT,
    IO120_DIN,
    IO120_DOUT,
    IO122_DIN,
    IO122_DOUT,
    IO122_SD1_D1,
    IO123_DIN,
    IO123_DOUT,
    IO123_SD1_C1,
    IO124_DIN,
    IO124_DOUT,
    IO124_SD1_D2,
    IO125_DIN,
    IO125_DOUT,
    IO125_SD1_C2,
    IO126_DIN,
    IO126_DOUT,
    IO126_SD1_D3,
    IO127_DIN,
    IO127_DOUT,
    IO127_SD1_C3,
    IO128_DIN,
    IO128_DOUT,
    IO128_SD1_D4,
    IO129_DIN,
    IO129_DOUT,
    IO129_SD1_C4,
    IO130_DIN,
    IO130_DOUT,
    IO131_DIN,
    IO131_DOUT,
    IO132_DIN,
    IO132_DOUT,
    IO133_DIN,
    IO133_DOUT,
    IO134_DIN,
    IO134_DOUT,
    IO141_DIN,
    IO141_DOUT,
    IO141_SCIB_TX,
    IO142_DIN,
    IO142_DOUT,
    IO142_SCIB_RX,
    IO145_DIN,
    IO145_DOUT,
    IO145_EPWM1_A,
    IO146_DIN,
    IO146_DOUT,
    IO146_EPWM1_B,
    IO147_DIN,
    IO147_DOUT,
    IO147_EPWM2_A,
    IO148_DIN,
    IO148_DOUT,
    IO148_EPWM2_B,
    IO149_DIN,
    IO149_DOUT,
    IO149_EPWM3_A,
    IO150_DIN,
    IO150_DOUT,
    IO150_EPWM3_B,
    IO151_DIN,
    IO151_DOUT,
    IO151_EPWM4_A,
    IO151_PMBUSA_SCL,
    IO151_FSITXA_D0,
    IO152_DIN,
    IO152_DOUT,
    IO152_EPWM4_B,
    IO152_PMBUSA_SDA,
    IO152_FSITXA_D1,
    IO153_DIN,
    IO153_DOUT,
    IO153_EPWM5_A,
    IO153_PMBUSA_ALERT,
    IO153_FSITXA_CLK,
    IO154_DIN,
    IO154_DOUT,
    IO154_EPWM5_B,
    IO154_PMBUSA_CTL,
    IO154_FSIRXA_D0,
    IO155_DIN,
    IO155_DOUT,
    IO155_EPWM6_A,
    IO155_FSIRXA_D1,
    IO156_DIN,
    IO156_DOUT,
    IO156_EPWM6_B,
    IO156_FSIRXA_CLK,
    IO157_DIN,
    IO157_DOUT,
    IO157_EPWM7_A,
    IO158_DIN,
    IO158_DOUT,
    IO158_EPWM7_B,
    IO159_DIN,
    IO159_DOUT,
    IO159_EPWM8_A,
    IO160_DIN,
    IO160_DOUT,
    IO160_EPWM8_B,
    IO161_DIN,
    IO161_DOUT,
    IO162_DIN,
    IO162_DOUT,
    IO163_DIN,
    IO163_DOUT,
    IO164_DIN,
    IO164_DOUT,
    IO165_DIN,
    IO165_DOUT,
    IO166_DIN,
    IO166_DOUT,
    IO167_DIN,
    IO167_DOUT,
    IO168_DIN,
    IO168_DOUT,
    IO198_DIN,
    IO198_DOUT,
    IO198_EQEP1_A,
    IO198_SPIA_SIMO,
    IO199_DIN,
    IO199_DOUT,
    IO199_EQEP1_STROBE,
    IO199_SCIB_TX,
    IO199_SPIB_CLK,
    IO199_SD1_D4,
    IO200_DIN,
    IO200_DOUT,
    IO200_EQEP1_INDEX,
    IO200_SCIB_RX,
    IO200_SPIB_STE,
    IO200_SD1_C4,
    IO201_DIN,
    IO201_DOUT,
    IO201_EQEP2_A,
    IO201_SPIB_SIMO,
    IO201_PMBUSA_SCL,
    IO202_DIN,
    IO202_DOUT,
    IO202_EQEP2_B,
    IO202_SPIB_SOMI,
    IO202_PMBUSA_SDA,
    IO202_FSITXA_D1,
    IO203_DIN,
    IO203_DOUT,
    IO203_EQEP2_INDEX,
    IO203_SPIA_SOMI,
    IO203_SPIB_CLK,
    IO203_PMBUSA_ALERT,
    IO203_FSITXA_D0,
    IO203_EPWM8_B,
    IO204_DIN,
    IO204_DOUT,
    IO204_EQEP2_STROBE,
    IO204_SPIA_CLK,
    IO204_SPIB_STE,
    IO204_PMBUSA_CTL,
    IO204_FSITXA_CLK,
    IO204_SD1_D3,
    IO205_DIN,
    IO205_DOUT,
    IO205_EQEP1_INDEX,
    IO205_SPIA_STE,
    IO205_SD1_C3,
    IO206_DIN,
    IO206_DOUT,
    IO207_DIN,
    IO207_DOUT,
    IO207_EQEP2_A,
    IO207_CANA_TX,
    IO207_SCIA_RX,
    IO207_LINA_RX,
    IO207_PMBUSA_ALERT,
    IO208_DIN,
    IO208_DOUT,
    IO208_EQEP2_B,
    IO208_SPIB_SIMO,
    IO208_SCIA_TX,
    IO208_PMBUSA_CTL,
    IO209_DIN,
    IO209_DOUT,
    IO209_EQEP2_STROBE,
    IO209_SPIB_SOMI,
    IO209_PMBUSA_SDA,
    IO210_DIN,
    IO210_DOUT,
    IO210_EQEP2_INDEX,
    IO210_PMBUSA_SCL,
    IO211_DIN,
    IO211_DOUT,
    IO212_DIN,
    IO212_DOUT,
    IO213_DIN,
    IO213_DOUT,
    IO213_EPWM8_A,
    IO214_DIN,
    IO214_DOUT,
    IO214_CANA_RX,
    IO215_DIN,
    IO215_DOUT,
    IO215_SCIA_RX,
    IO215_CANA_RX,
    IO215_LINA_TX,
    IO216_DIN,
    IO216_DOUT,
    IO216_SCIA_TX,
    IO217_DIN,
    IO217_DOUT,
    IO217_CANA_TX,
    IO217_I2CA_SDA,
    IO218_DIN,
    IO218_DOUT,
    IO218_I2CA_SDA,
    IO218_SPIA_SIMO,
    IO218_I2CA_SCL,
    IO219_DIN,
    IO219_DOUT,
    IO219_EPWM8_B,
    IO220_DIN,
    IO220_DOUT,
    IO220_EPWM6_A,
    IO220_SCIB_TX,
    IO220_PMBUSA_ALERT,
    IO221_DIN,
    IO221_DOUT,
    IO221_EPWM6_B,
    IO221_SCIB_RX,
    IO221_PMBUSA_CTL,
    IO221_X2,
    IO222_DIN,
    IO222_DOUT,
    IO222_JTAG_TDI,
    IO222_EPWM7_A,
    IO222_SPIA_SIMO,
    IO222_SCIA_RX,
    IO222_I2CA_SDA,
    IO222_PMBUSA_SDA,
    IO223_DIN,
    IO223_DOUT,
    IO223_JTAG_TDO,
    IO223_EPWM7_B,
    IO223_SCIA_TX,
    IO223_I2CA_SCL,
    IO223_PMBUSA_SCL,
    IO224_DIN,
    IO224_DOUT,
    IO224_ERRORSTS,
    IO224_XCLKOUT,
    IO225_AIN,
    IO225_DIN,
    IO226_AIN,
    IO226_DIN,
    IO227_AIN,
    IO227_DIN,
    IO228_AIN,
    IO228_DIN,
    IO229_AIN,
    IO229_DIN,
    IO230_AIN,
    IO230_DIN,
    IO231_AIN,
    IO231_DIN,
    IO232_AIN,
    IO232_DIN,
    IO233_AIN,
    IO233_DIN,
    IO234_AIN,
    IO234_DIN,
    IO235_AIN,
    IO235_DIN,
    IO236_AIN,
    IO236_DIN,
    IO237_AIN,
    IO237_DIN,
    IO238_AIN,
    IO238_DIN,
    IO239_AIN,
    IO239_DIN,
    IO240_AIN,
    IO240_DIN,
    IO241_AIN,
    IO241_DIN,
];

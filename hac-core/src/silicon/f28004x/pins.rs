//! Pin configuration codes of the F28004X family
//!
//! One constant per legal (pin, function) pair. [`ALL`] lists every code in
//! pin order.

use crate::io::PinCode;

pub const IO0_DIN: PinCode = PinCode(0xC0020000);
pub const IO0_DOUT: PinCode = PinCode(0xC0021000);
pub const IO0_EPWM1_A: PinCode = PinCode(0xC0080100);
pub const IO0_I2CA_SDA: PinCode = PinCode(0xC0040600);

pub const IO1_DIN: PinCode = PinCode(0xC0020001);
pub const IO1_DOUT: PinCode = PinCode(0xC0021001);
pub const IO1_EPWM1_B: PinCode = PinCode(0xC0081101);
pub const IO1_I2CA_SCL: PinCode = PinCode(0xC0041601);

pub const IO2_DIN: PinCode = PinCode(0xC0020002);
pub const IO2_DOUT: PinCode = PinCode(0xC0021002);
pub const IO2_EPWM2_A: PinCode = PinCode(0xC0082102);
pub const IO2_OUTXBAR1: PinCode = PinCode(0xC00A0502);
pub const IO2_PMBUSA_SDA: PinCode = PinCode(0xC0110602);
pub const IO2_SCIA_TX: PinCode = PinCode(0xC0050902);
pub const IO2_FSIRXA_D1: PinCode = PinCode(0xC0104A02);

pub const IO3_DIN: PinCode = PinCode(0xC0020003);
pub const IO3_DOUT: PinCode = PinCode(0xC0021003);
pub const IO3_EPWM2_B: PinCode = PinCode(0xC0083103);
pub const IO3_OUTXBAR2: PinCode = PinCode(0xC00A1203);
pub const IO3_PMBUSA_SCL: PinCode = PinCode(0xC0111603);
pub const IO3_SPIA_CLK: PinCode = PinCode(0xC0072703);
pub const IO3_SCIA_RX: PinCode = PinCode(0xC0051903);
pub const IO3_FSIRXA_D0: PinCode = PinCode(0xC0103A03);

pub const IO4_DIN: PinCode = PinCode(0xC0020004);
pub const IO4_DOUT: PinCode = PinCode(0xC0021004);
pub const IO4_EPWM3_A: PinCode = PinCode(0xC0084104);
pub const IO4_OUTXBAR3: PinCode = PinCode(0xC00A2504);
pub const IO4_CANA_TX: PinCode = PinCode(0xC0030604);
pub const IO4_FSIRXA_CLK: PinCode = PinCode(0xC0105A04);

pub const IO5_DIN: PinCode = PinCode(0xC0020005);
pub const IO5_DOUT: PinCode = PinCode(0xC0021005);
pub const IO5_EPWM3_B: PinCode = PinCode(0xC0085105);
pub const IO5_OUTXBAR3: PinCode = PinCode(0xC00A2305);
pub const IO5_CANA_RX: PinCode = PinCode(0xC0031605);
pub const IO5_SPIA_STE: PinCode = PinCode(0xC0073705);
pub const IO5_FSITXA_D1: PinCode = PinCode(0xC0101905);

pub const IO6_DIN: PinCode = PinCode(0xC0020006);
pub const IO6_DOUT: PinCode = PinCode(0xC0021006);
pub const IO6_EPWM4_A: PinCode = PinCode(0xC0086106);
pub const IO6_OUTXBAR4: PinCode = PinCode(0xC00A3206);
pub const IO6_SYNCOUT: PinCode = PinCode(0xC0003306);
pub const IO6_EQEP1_A: PinCode = PinCode(0xC00D0506);
pub const IO6_CANB_TX: PinCode = PinCode(0xC0032606);
pub const IO6_SPIB_SOMI: PinCode = PinCode(0xC0075706);
pub const IO6_FSITXA_D0: PinCode = PinCode(0xC0100906);

pub const IO7_DIN: PinCode = PinCode(0xC0020007);
pub const IO7_DOUT: PinCode = PinCode(0xC0021007);
pub const IO7_EPWM4_B: PinCode = PinCode(0xC0087107);
pub const IO7_OUTXBAR5: PinCode = PinCode(0xC00A4307);
pub const IO7_EQEP1_B: PinCode = PinCode(0xC00D1507);
pub const IO7_CANB_RX: PinCode = PinCode(0xC0033607);
pub const IO7_SPIB_SIMO: PinCode = PinCode(0xC0074707);
pub const IO7_FSITXA_CLK: PinCode = PinCode(0xC0102907);

pub const IO8_DIN: PinCode = PinCode(0xC0020008);
pub const IO8_DOUT: PinCode = PinCode(0xC0021008);
pub const IO8_EPWM5_A: PinCode = PinCode(0xC0088108);
pub const IO8_CANB_TX: PinCode = PinCode(0xC0032208);
pub const IO8_ADCSOCAO: PinCode = PinCode(0xC0007308);
pub const IO8_EQEP1_STROBE: PinCode = PinCode(0xC00D3508);
pub const IO8_SCIA_TX: PinCode = PinCode(0xC0050608);
pub const IO8_SPIA_SIMO: PinCode = PinCode(0xC0070708);
pub const IO8_I2CA_SCL: PinCode = PinCode(0xC0041908);
pub const IO8_FSITXA_D1: PinCode = PinCode(0xC0101A08);

pub const IO9_DIN: PinCode = PinCode(0xC0020009);
pub const IO9_DOUT: PinCode = PinCode(0xC0021009);
pub const IO9_EPWM5_B: PinCode = PinCode(0xC0089109);
pub const IO9_SCIB_TX: PinCode = PinCode(0xC0052209);
pub const IO9_OUTXBAR6: PinCode = PinCode(0xC00A5309);
pub const IO9_EQEP1_INDEX: PinCode = PinCode(0xC00D2509);
pub const IO9_SCIA_RX: PinCode = PinCode(0xC0051609);
pub const IO9_SPIA_CLK: PinCode = PinCode(0xC0072709);
pub const IO9_FSITXA_D0: PinCode = PinCode(0xC0100A09);

pub const IO10_DIN: PinCode = PinCode(0xC002000A);
pub const IO10_DOUT: PinCode = PinCode(0xC002100A);
pub const IO10_EPWM6_A: PinCode = PinCode(0xC008A10A);
pub const IO10_CANB_RX: PinCode = PinCode(0xC003320A);
pub const IO10_ADCSOCBO: PinCode = PinCode(0xC000830A);
pub const IO10_EQEP1_A: PinCode = PinCode(0xC00D050A);
pub const IO10_SCIB_TX: PinCode = PinCode(0xC005260A);
pub const IO10_SPIA_SOMI: PinCode = PinCode(0xC007170A);
pub const IO10_I2CA_SDA: PinCode = PinCode(0xC004090A);
pub const IO10_FSITXA_CLK: PinCode = PinCode(0xC0102A0A);

pub const IO11_DIN: PinCode = PinCode(0xC002000B);
pub const IO11_DOUT: PinCode = PinCode(0xC002100B);
pub const IO11_EPWM6_B: PinCode = PinCode(0xC008B10B);
pub const IO11_SCIB_RX: PinCode = PinCode(0xC005320B);
pub const IO11_OUTXBAR7: PinCode = PinCode(0xC00A630B);
pub const IO11_EQEP1_B: PinCode = PinCode(0xC00D150B);
pub const IO11_SPIA_STE: PinCode = PinCode(0xC007370B);
pub const IO11_FSIRXA_D1: PinCode = PinCode(0xC010490B);

pub const IO12_DIN: PinCode = PinCode(0xC002000C);
pub const IO12_DOUT: PinCode = PinCode(0xC002100C);
pub const IO12_EPWM7_A: PinCode = PinCode(0xC008C10C);
pub const IO12_CANB_TX: PinCode = PinCode(0xC003220C);
pub const IO12_EQEP1_STROBE: PinCode = PinCode(0xC00D350C);
pub const IO12_SCIB_TX: PinCode = PinCode(0xC005260C);
pub const IO12_PMBUSA_CTL: PinCode = PinCode(0xC011270C);
pub const IO12_FSIRXA_D0: PinCode = PinCode(0xC010390C);

pub const IO13_DIN: PinCode = PinCode(0xC002000D);
pub const IO13_DOUT: PinCode = PinCode(0xC002100D);
pub const IO13_EPWM7_B: PinCode = PinCode(0xC008D10D);
pub const IO13_CANB_RX: PinCode = PinCode(0xC003320D);
pub const IO13_EQEP1_INDEX: PinCode = PinCode(0xC00D250D);
pub const IO13_SCIB_RX: PinCode = PinCode(0xC005360D);
pub const IO13_PMBUSA_ALERT: PinCode = PinCode(0xC011370D);
pub const IO13_FSIRXA_CLK: PinCode = PinCode(0xC010590D);

pub const IO14_DIN: PinCode = PinCode(0xC002000E);
pub const IO14_DOUT: PinCode = PinCode(0xC002100E);
pub const IO14_EPWM8_A: PinCode = PinCode(0xC008E10E);
pub const IO14_SCIB_TX: PinCode = PinCode(0xC005220E);
pub const IO14_OUTXBAR3: PinCode = PinCode(0xC00A260E);
pub const IO14_PMBUSA_SDA: PinCode = PinCode(0xC011070E);
pub const IO14_SPIB_CLK: PinCode = PinCode(0xC007690E);
pub const IO14_EQEP2_A: PinCode = PinCode(0xC00D4A0E);

pub const IO15_DIN: PinCode = PinCode(0xC002000F);
pub const IO15_DOUT: PinCode = PinCode(0xC002100F);
pub const IO15_EPWM8_B: PinCode = PinCode(0xC008F10F);
pub const IO15_SCIB_RX: PinCode = PinCode(0xC005320F);
pub const IO15_OUTXBAR4: PinCode = PinCode(0xC00A360F);
pub const IO15_PMBUSA_SCL: PinCode = PinCode(0xC011170F);
pub const IO15_SPIB_STE: PinCode = PinCode(0xC007790F);
pub const IO15_EQEP2_B: PinCode = PinCode(0xC00D5A0F);

pub const IO16_DIN: PinCode = PinCode(0xC0020010);
pub const IO16_DOUT: PinCode = PinCode(0xC0021010);
pub const IO16_SPIA_SIMO: PinCode = PinCode(0xC0070110);
pub const IO16_CANB_TX: PinCode = PinCode(0xC0032210);
pub const IO16_OUTXBAR7: PinCode = PinCode(0xC00A6310);
pub const IO16_EPWM5_A: PinCode = PinCode(0xC0088510);
pub const IO16_SCIA_TX: PinCode = PinCode(0xC0050610);
pub const IO16_SD1_D1: PinCode = PinCode(0xC0090710);
pub const IO16_EQEP1_STROBE: PinCode = PinCode(0xC00D3910);
pub const IO16_PMBUSA_SCL: PinCode = PinCode(0xC0111A10);
pub const IO16_XCLKOUT: PinCode = PinCode(0xC0005B10);

pub const IO17_DIN: PinCode = PinCode(0xC0020011);
pub const IO17_DOUT: PinCode = PinCode(0xC0021011);
pub const IO17_SPIA_SOMI: PinCode = PinCode(0xC0071111);
pub const IO17_CANB_RX: PinCode = PinCode(0xC0033211);
pub const IO17_OUTXBAR8: PinCode = PinCode(0xC00A7311);
pub const IO17_EPWM5_B: PinCode = PinCode(0xC0089511);
pub const IO17_SCIA_RX: PinCode = PinCode(0xC0051611);
pub const IO17_SD1_C1: PinCode = PinCode(0xC0091711);
pub const IO17_EQEP1_INDEX: PinCode = PinCode(0xC00D2911);
pub const IO17_PMBUSA_SDA: PinCode = PinCode(0xC0110A11);

pub const IO18_DIN: PinCode = PinCode(0xC0020012);
pub const IO18_DOUT: PinCode = PinCode(0xC0021012);
pub const IO18_X2: PinCode = PinCode(0xC0009012);
pub const IO18_SPIA_CLK: PinCode = PinCode(0xC0072112);
pub const IO18_SCIB_TX: PinCode = PinCode(0xC0052212);
pub const IO18_CANA_RX: PinCode = PinCode(0xC0031312);
pub const IO18_EPWM6_A: PinCode = PinCode(0xC008A512);
pub const IO18_I2CA_SCL: PinCode = PinCode(0xC0041612);
pub const IO18_SD1_D2: PinCode = PinCode(0xC0092712);
pub const IO18_EQEP2_A: PinCode = PinCode(0xC00D4912);
pub const IO18_PMBUSA_CTL: PinCode = PinCode(0xC0112A12);
pub const IO18_XCLKOUT: PinCode = PinCode(0xC0005B12);

pub const IO22_AIN: PinCode = PinCode(0xC0010016);
pub const IO22_DIN: PinCode = PinCode(0xC0020016);
pub const IO22_DOUT: PinCode = PinCode(0xC0021016);
pub const IO22_VFBSW: PinCode = PinCode(0xC000B016);
pub const IO22_EQEP1_STROBE: PinCode = PinCode(0xC00D3116);
pub const IO22_SCIB_TX: PinCode = PinCode(0xC0052316);
pub const IO22_SPIB_CLK: PinCode = PinCode(0xC0076616);
pub const IO22_SD1_D4: PinCode = PinCode(0xC0096716);
pub const IO22_LINA_TX: PinCode = PinCode(0xC0060916);

pub const IO23_AIN: PinCode = PinCode(0xC0010017);
pub const IO23_DIN: PinCode = PinCode(0xC0020017);
pub const IO23_DOUT: PinCode = PinCode(0xC0021017);
pub const IO23_VSW: PinCode = PinCode(0xC000A017);

pub const IO24_DIN: PinCode = PinCode(0xC0020018);
pub const IO24_DOUT: PinCode = PinCode(0xC0021018);
pub const IO24_OUTXBAR1: PinCode = PinCode(0xC00A0118);
pub const IO24_EQEP2_A: PinCode = PinCode(0xC00D4218);
pub const IO24_EPWM8_A: PinCode = PinCode(0xC008E518);
pub const IO24_SPIB_SIMO: PinCode = PinCode(0xC0074618);
pub const IO24_SD1_D1: PinCode = PinCode(0xC0090718);
pub const IO24_PMBUSA_SCL: PinCode = PinCode(0xC0111A18);
pub const IO24_SCIA_TX: PinCode = PinCode(0xC0050B18);
pub const IO24_ERRORSTS: PinCode = PinCode(0xC0006D18);

pub const IO25_DIN: PinCode = PinCode(0xC0020019);
pub const IO25_DOUT: PinCode = PinCode(0xC0021019);
pub const IO25_OUTXBAR2: PinCode = PinCode(0xC00A1119);
pub const IO25_EQEP2_B: PinCode = PinCode(0xC00D5219);
pub const IO25_SPIB_SOMI: PinCode = PinCode(0xC0075619);
pub const IO25_SD1_C1: PinCode = PinCode(0xC0091719);
pub const IO25_FSITXA_D1: PinCode = PinCode(0xC0101919);
pub const IO25_PMBUSA_SDA: PinCode = PinCode(0xC0110A19);
pub const IO25_SCIA_RX: PinCode = PinCode(0xC0051B19);

pub const IO26_DIN: PinCode = PinCode(0xC002001A);
pub const IO26_DOUT: PinCode = PinCode(0xC002101A);
pub const IO26_OUTXBAR3: PinCode = PinCode(0xC00A211A);
pub const IO26_EQEP2_INDEX: PinCode = PinCode(0xC00D621A);
pub const IO26_SPIB_CLK: PinCode = PinCode(0xC007661A);
pub const IO26_SD1_D2: PinCode = PinCode(0xC009271A);
pub const IO26_FSITXA_D0: PinCode = PinCode(0xC010091A);
pub const IO26_PMBUSA_CTL: PinCode = PinCode(0xC0112A1A);
pub const IO26_I2CA_SDA: PinCode = PinCode(0xC0040B1A);

pub const IO27_DIN: PinCode = PinCode(0xC002001B);
pub const IO27_DOUT: PinCode = PinCode(0xC002101B);
pub const IO27_OUTXBAR4: PinCode = PinCode(0xC00A311B);
pub const IO27_EQEP2_STROBE: PinCode = PinCode(0xC00D721B);
pub const IO27_SPIB_STE: PinCode = PinCode(0xC007761B);
pub const IO27_SD1_C2: PinCode = PinCode(0xC009371B);
pub const IO27_FSITXA_CLK: PinCode = PinCode(0xC010291B);
pub const IO27_PMBUSA_ALERT: PinCode = PinCode(0xC0113A1B);
pub const IO27_I2CA_SCL: PinCode = PinCode(0xC0041B1B);

pub const IO28_DIN: PinCode = PinCode(0xC002001C);
pub const IO28_DOUT: PinCode = PinCode(0xC002101C);
pub const IO28_SCIA_RX: PinCode = PinCode(0xC005111C);
pub const IO28_EPWM7_A: PinCode = PinCode(0xC008C31C);
pub const IO28_OUTXBAR5: PinCode = PinCode(0xC00A451C);
pub const IO28_EQEP1_A: PinCode = PinCode(0xC00D061C);
pub const IO28_SD1_D3: PinCode = PinCode(0xC009471C);
pub const IO28_EQEP2_STROBE: PinCode = PinCode(0xC00D791C);
pub const IO28_LINA_TX: PinCode = PinCode(0xC0060A1C);
pub const IO28_SPIB_CLK: PinCode = PinCode(0xC0076B1C);
pub const IO28_ERRORSTS: PinCode = PinCode(0xC0006D1C);

pub const IO29_DIN: PinCode = PinCode(0xC002001D);
pub const IO29_DOUT: PinCode = PinCode(0xC002101D);
pub const IO29_SCIA_TX: PinCode = PinCode(0xC005011D);
pub const IO29_EPWM7_B: PinCode = PinCode(0xC008D31D);
pub const IO29_OUTXBAR6: PinCode = PinCode(0xC00A551D);
pub const IO29_EQEP1_B: PinCode = PinCode(0xC00D161D);
pub const IO29_SD1_C3: PinCode = PinCode(0xC009571D);
pub const IO29_EQEP2_INDEX: PinCode = PinCode(0xC00D691D);
pub const IO29_LINA_RX: PinCode = PinCode(0xC0061A1D);
pub const IO29_SPIB_STE: PinCode = PinCode(0xC0077B1D);
pub const IO29_ERRORSTS: PinCode = PinCode(0xC0006D1D);

pub const IO30_DIN: PinCode = PinCode(0xC002001E);
pub const IO30_DOUT: PinCode = PinCode(0xC002101E);
pub const IO30_CANA_RX: PinCode = PinCode(0xC003111E);
pub const IO30_SPIB_SIMO: PinCode = PinCode(0xC007431E);
pub const IO30_OUTXBAR7: PinCode = PinCode(0xC00A651E);
pub const IO30_EQEP1_STROBE: PinCode = PinCode(0xC00D361E);
pub const IO30_SD1_D4: PinCode = PinCode(0xC009671E);

pub const IO31_DIN: PinCode = PinCode(0xC002001F);
pub const IO31_DOUT: PinCode = PinCode(0xC002101F);
pub const IO31_CANA_TX: PinCode = PinCode(0xC003011F);
pub const IO31_SPIB_SOMI: PinCode = PinCode(0xC007531F);
pub const IO31_OUTXBAR8: PinCode = PinCode(0xC00A751F);
pub const IO31_EQEP1_INDEX: PinCode = PinCode(0xC00D261F);
pub const IO31_SD1_C4: PinCode = PinCode(0xC009771F);
pub const IO31_FSIRXA_D1: PinCode = PinCode(0xC010491F);

pub const IO32_DIN: PinCode = PinCode(0xC0020020);
pub const IO32_DOUT: PinCode = PinCode(0xC0021020);
pub const IO32_I2CA_SDA: PinCode = PinCode(0xC0040120);
pub const IO32_SPIB_CLK: PinCode = PinCode(0xC0076320);
pub const IO32_EPWM8_B: PinCode = PinCode(0xC008F520);
pub const IO32_LINA_TX: PinCode = PinCode(0xC0060620);
pub const IO32_SD1_D3: PinCode = PinCode(0xC0094720);
pub const IO32_FSIRXA_D0: PinCode = PinCode(0xC0103920);
pub const IO32_CANA_TX: PinCode = PinCode(0xC0030A20);

pub const IO33_DIN: PinCode = PinCode(0xC0020021);
pub const IO33_DOUT: PinCode = PinCode(0xC0021021);
pub const IO33_I2CA_SCL: PinCode = PinCode(0xC0041121);
pub const IO33_SPIB_STE: PinCode = PinCode(0xC0077321);
pub const IO33_OUTXBAR4: PinCode = PinCode(0xC00A3521);
pub const IO33_LINA_RX: PinCode = PinCode(0xC0061621);
pub const IO33_SD1_C3: PinCode = PinCode(0xC0095721);
pub const IO33_FSIRXA_CLK: PinCode = PinCode(0xC0105921);
pub const IO33_CANA_RX: PinCode = PinCode(0xC0031A21);

pub const IO34_DIN: PinCode = PinCode(0xC0020022);
pub const IO34_DOUT: PinCode = PinCode(0xC0021022);
pub const IO34_OUTXBAR1: PinCode = PinCode(0xC00A0122);
pub const IO34_PMBUSA_SDA: PinCode = PinCode(0xC0110622);

pub const IO35_DIN: PinCode = PinCode(0xC0020023);
pub const IO35_DOUT: PinCode = PinCode(0xC0021023);
pub const IO35_SCIA_RX: PinCode = PinCode(0xC0051123);
pub const IO35_I2CA_SDA: PinCode = PinCode(0xC0040323);
pub const IO35_CANA_RX: PinCode = PinCode(0xC0031523);
pub const IO35_PMBUSA_SCL: PinCode = PinCode(0xC0111623);
pub const IO35_LINA_RX: PinCode = PinCode(0xC0061723);
pub const IO35_EQEP1_A: PinCode = PinCode(0xC00D0923);
pub const IO35_PMBUSA_CTL: PinCode = PinCode(0xC0112A23);
pub const IO35_JTAG_TDI: PinCode = PinCode(0xC0120F23);

pub const IO37_DIN: PinCode = PinCode(0xC0020025);
pub const IO37_DOUT: PinCode = PinCode(0xC0021025);
pub const IO37_OUTXBAR2: PinCode = PinCode(0xC00A1125);
pub const IO37_I2CA_SCL: PinCode = PinCode(0xC0041325);
pub const IO37_SCIA_TX: PinCode = PinCode(0xC0050525);
pub const IO37_CANA_TX: PinCode = PinCode(0xC0030625);
pub const IO37_LINA_TX: PinCode = PinCode(0xC0060725);
pub const IO37_EQEP1_B: PinCode = PinCode(0xC00D1925);
pub const IO37_PMBUSA_ALERT: PinCode = PinCode(0xC0113A25);
pub const IO37_JTAG_TDO: PinCode = PinCode(0xC0121F25);

pub const IO39_DIN: PinCode = PinCode(0xC0020027);
pub const IO39_DOUT: PinCode = PinCode(0xC0021027);
pub const IO39_CANB_RX: PinCode = PinCode(0xC0033627);
pub const IO39_FSIRXA_CLK: PinCode = PinCode(0xC0105727);

pub const IO40_DIN: PinCode = PinCode(0xC0020028);
pub const IO40_DOUT: PinCode = PinCode(0xC0021028);
pub const IO40_PMBUSA_SDA: PinCode = PinCode(0xC0110628);
pub const IO40_FSIRXA_D0: PinCode = PinCode(0xC0103728);
pub const IO40_SCIB_TX: PinCode = PinCode(0xC0052928);
pub const IO40_EQEP1_A: PinCode = PinCode(0xC00D0A28);

pub const IO56_DIN: PinCode = PinCode(0xC0020038);
pub const IO56_DOUT: PinCode = PinCode(0xC0021038);
pub const IO56_SPIA_CLK: PinCode = PinCode(0xC0072138);
pub const IO56_EQEP2_STROBE: PinCode = PinCode(0xC00D7538);
pub const IO56_SCIB_TX: PinCode = PinCode(0xC0052638);
pub const IO56_SD1_D3: PinCode = PinCode(0xC0094738);
pub const IO56_SPIB_SIMO: PinCode = PinCode(0xC0074938);
pub const IO56_EQEP1_A: PinCode = PinCode(0xC00D0B38);

pub const IO57_DIN: PinCode = PinCode(0xC0020039);
pub const IO57_DOUT: PinCode = PinCode(0xC0021039);
pub const IO57_SPIA_STE: PinCode = PinCode(0xC0073139);
pub const IO57_EQEP2_INDEX: PinCode = PinCode(0xC00D6539);
pub const IO57_SCIB_RX: PinCode = PinCode(0xC0053639);
pub const IO57_SD1_C3: PinCode = PinCode(0xC0095739);
pub const IO57_SPIB_SOMI: PinCode = PinCode(0xC0075939);
pub const IO57_EQEP1_B: PinCode = PinCode(0xC00D1B39);

pub const IO58_DIN: PinCode = PinCode(0xC002003A);
pub const IO58_DOUT: PinCode = PinCode(0xC002103A);
pub const IO58_OUTXBAR1: PinCode = PinCode(0xC00A053A);
pub const IO58_SPIB_CLK: PinCode = PinCode(0xC007663A);
pub const IO58_SD1_D4: PinCode = PinCode(0xC009673A);
pub const IO58_LINA_TX: PinCode = PinCode(0xC006093A);
pub const IO58_CANB_TX: PinCode = PinCode(0xC0032A3A);
pub const IO58_EQEP1_STROBE: PinCode = PinCode(0xC00D3B3A);

pub const IO59_DIN: PinCode = PinCode(0xC002003B);
pub const IO59_DOUT: PinCode = PinCode(0xC002103B);
pub const IO59_OUTXBAR2: PinCode = PinCode(0xC00A153B);
pub const IO59_SPIB_STE: PinCode = PinCode(0xC007763B);
pub const IO59_SD1_C4: PinCode = PinCode(0xC009773B);
pub const IO59_LINA_RX: PinCode = PinCode(0xC006193B);
pub const IO59_CANB_RX: PinCode = PinCode(0xC0033A3B);
pub const IO59_EQEP1_INDEX: PinCode = PinCode(0xC00D2B3B);

pub const IO224_AIN: PinCode = PinCode(0xC00100E0);
pub const IO224_DIN: PinCode = PinCode(0xC00200E0);

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

pub const IO242_AIN: PinCode = PinCode(0xC00100F2);
pub const IO242_DIN: PinCode = PinCode(0xC00200F2);

pub const IO243_AIN: PinCode = PinCode(0xC00100F3);
pub const IO243_DIN: PinCode = PinCode(0xC00200F3);

pub const IO244_AIN: PinCode = PinCode(0xC00100F4);
pub const IO244_DIN: PinCode = PinCode(0xC00200F4);

pub const IO245_AIN: PinCode = PinCode(0xC00100F5);
pub const IO245_DIN: PinCode = PinCode(0xC00200F5);

pub const IO246_AIN: PinCode = PinCode(0xC00100F6);
pub const IO246_DIN: PinCode = PinCode(0xC00200F6);

pub const IO247_AIN: PinCode = PinCode(0xC00100F7);
pub const IO247_DIN: PinCode = PinCode(0xC00200F7);

/// Every pin code of the family
pub const ALL: &[PinCode] = &[
    IO0_DIN,
    IO0_DOUT,
    IO0_EPWM1_A,
    IO0_I2CA_SDA,
    IO1_DIN,
    IO1_DOUT,
    IO1_EPWM1_B,
    IO1_I2CA_SCL,
    IO2_DIN,
    IO2_DOUT,
    IO2_EPWM2_A,
    IO2_OUTXBAR1,
    IO2_PMBUSA_SDA,
    IO2_SCIA_TX,
    IO2_FSIRXA_D1,
    IO3_DIN,
    IO3_DOUT,
    IO3_EPWM2_B,
    IO3_OUTXBAR2,
    IO3_PMBUSA_SCL,
    IO3_SPIA_CLK,
    IO3_SCIA_RX,
    IO3_FSIRXA_D0,
    IO4_DIN,
    IO4_DOUT,
    IO4_EPWM3_A,
    IO4_OUTXBAR3,
    IO4_CANA_TX,
    IO4_FSIRXA_CLK,
    IO5_DIN,
    IO5_DOUT,
    IO5_EPWM3_B,
    IO5_OUTXBAR3,
    IO5_CANA_RX,
    IO5_SPIA_STE,
    IO5_FSITXA_D1,
    IO6_DIN,
    IO6_DOUT,
    IO6_EPWM4_A,
    IO6_OUTXBAR4,
    IO6_SYNCOUT,
    IO6_EQEP1_A,
    IO6_CANB_TX,
    IO6_SPIB_SOMI,
    IO6_FSITXA_D0,
    IO7_DIN,
    IO7_DOUT,
    IO7_EPWM4_B,
    IO7_OUTXBAR5,
    IO7_EQEP1_B,
    IO7_CANB_RX,
    IO7_SPIB_SIMO,
    IO7_FSITXA_CLK,
    IO8_DIN,
    IO8_DOUT,
    IO8_EPWM5_A,
    IO8_CANB_TX,
    IO8_ADCSOCAO,
    IO8_EQEP1_STROBE,
    IO8_SCIA_TX,
    IO8_SPIA_SIMO,
    IO8_I2CA_SCL,
    IO8_FSITXA_D1,
    IO9_DIN,
    IO9_DOUT,
    IO9_EPWM5_B,
    IO9_SCIB_TX,
    IO9_OUTXBAR6,
    IO9_EQEP1_INDEX,
    IO9_SCIA_RX,
    IO9_SPIA_CLK,
    IO9_FSITXA_D0,
    IO10_DIN,
    IO10_DOUT,
    IO10_EPWM6_A,
    IO10_CANB_RX,
    IO10_ADCSOCBO,
    IO10_EQEP1_A,
    IO10_SCIB_TX,
    IO10_SPIA_SOMI,
    IO10_I2CA_SDA,
    IO10_FSITXA_CLK,
    IO11_DIN,
    IO11_DOUT,
    IO11_EPWM6_B,
    IO11_SCIB_RX,
    IO11_OUTXBAR7,
    IO11_EQEP1_B,
    IO11_SPIA_STE,
    IO11_FSIRXA_D1,
    IO12_DIN,
    IO12_DOUT,
    IO12_EPWM7_A,
    IO12_CANB_TX,
    IO12_EQEP1_STROBE,
    IO12_SCIB_TX,
    IO12_PMBUSA_CTL,
    IO12_FSIRXA_D0,
    IO13_DIN,
    IO13_DOUT,
    IO13_EPWM7_B,
    IO13_CANB_RX,
    IO13_EQEP1_INDEX,
    IO13_SCIB_RX,
    IO13_PMBUSA_ALERT,
    IO13_FSIRXA_CLK,
    IO14_DIN,
    IO14_DOUT,
    IO14_EPWM8_A,
    IO14_SCIB_TX,
    IO14_OUTXBAR3,
    IO14_PMBUSA_SDA,
    IO14_SPIB_CLK,
    IO14_EQEP2_A,
    IO15_DIN,
    IO15_DOUT,
    IO15_EPWM8_B,
    IO15_SCIB_RX,
    IO15_OUTXBAR4,
    IO15_PMBUSA_SCL,
    IO15_SPIB_STE,
    IO15_EQEP2_B,
    IO16_DIN,
    IO16_DOUT,
    IO16_SPIA_SIMO,
    IO16_CANB_TX,
    IO16_OUTXBAR7,
    IO16_EPWM5_A,
    IO16_SCIA_TX,
    IO16_SD1_D1,
    IO16_EQEP1_STROBE,
    IO16_PMBUSA_SCL,
    IO16_XCLKOUT,
    IO17_DIN,
    IO17_DOUT,
    IO17_SPIA_SOMI,
    IO17_CANB_RX,
    IO17_OUTXBAR8,
    IO17_EPWM5_B,
    IO17_SCIA_RX,
    IO17_SD1_C1,
    IO17_EQEP1_INDEX,
    IO17_PMBUSA_SDA,
    IO18_DIN,
    IO18_DOUT,
    IO18_X2,
    IO18_SPIA_CLK,
    IO18_SCIB_TX,
    IO18_CANA_RX,
    IO18_EPWM6_A,
    IO18_I2CA_SCL,
    IO18_SD1_D2,
    IO18_EQEP2_A,
    IO18_PMBUSA_CTL,
    IO18_XCLKOUT,
    IO22_AIN,
    IO22_DIN,
    IO22_DOUT,
    IO22_VFBSW,
    IO22_EQEP1_STROBE,
    IO22_SCIB_TX,
    IO22_SPIB_CLK,
    IO22_SD1_D4,
    IO22_LINA_TX,
    IO23_AIN,
    IO23_DIN,
    IO23_DOUT,
    IO23_VSW,
    IO24_DIN,
    IO24_DOUT,
    IO24_OUTXBAR1,
    IO24_EQEP2_A,
    IO24_EPWM8_A,
    IO24_SPIB_SIMO,
    IO24_SD1_D1,
    IO24_PMBUSA_SCL,
    IO24_SCIA_TX,
    IO24_ERRORSTS,
    IO25_DIN,
    IO25_DOUT,
    IO25_OUTXBAR2,
    IO25_EQEP2_B,
    IO25_SPIB_SOMI,
    IO25_SD1_C1,
    IO25_FSITXA_D1,
    IO25_PMBUSA_SDA,
    IO25_SCIA_RX,
    IO26_DIN,
    IO26_DOUT,
    IO26_OUTXBAR3,
    IO26_EQEP2_INDEX,
    IO26_SPIB_CLK,
    IO26_SD1_D2,
    IO26_FSITXA_D0,
    IO26_PMBUSA_CTL,
    IO26_I2CA_SDA,
    IO27_DIN,
    IO27_DOUT,
    IO27_OUTXBAR4,
    IO27_EQEP2_STROBE,
    IO27_SPIB_STE,
    IO27_SD1_C2,
    IO27_FSITXA_CLK,
    IO27_PMBUSA_ALERT,
    IO27_I2CA_SCL,
    IO28_DIN,
    IO28_DOUT,
    IO28_SCIA_RX,
    IO28_EPWM7_A,
    IO28_OUTXBAR5,
    IO28_EQEP1_A,
    IO28_SD1_D3,
    IO28_EQEP2_STROBE,
    IO28_LINA_TX,
    IO28_SPIB_CLK,
    IO28_ERRORSTS,
    IO29_DIN,
    IO29_DOUT,
    IO29_SCIA_TX,
    IO29_EPWM7_B,
    IO29_OUTXBAR6,
    IO29_EQEP1_B,
    IO29_SD1_C3,
    IO29_EQEP2_INDEX,
    IO29_LINA_RX,
    IO29_SPIB_STE,
    IO29_ERRORSTS,
    IO30_DIN,
    IO30_DOUT,
    IO30_CANA_RX,
    IO30_SPIB_SIMO,
    IO30_OUTXBAR7,
    IO30_EQEP1_STROBE,
    IO30_SD1_D4,
    IO31_DIN,
    IO31_DOUT,
    IO31_CANA_TX,
    IO31_SPIB_SOMI,
    IO31_OUTXBAR8,
    IO31_EQEP1_INDEX,
    IO31_SD1_C4,
    IO31_FSIRXA_D1,
    IO32_DIN,
    IO32_DOUT,
    IO32_I2CA_SDA,
    IO32_SPIB_CLK,
    IO32_EPWM8_B,
    IO32_LINA_TX,
    IO32_SD1_D3,
    IO32_FSIRXA_D0,
    IO32_CANA_TX,
    IO33_DIN,
    IO33_DOUT,
    IO33_I2CA_SCL,
    IO33_SPIB_STE,
    IO33_OUTXBAR4,
    IO33_LINA_RX,
    IO33_SD1_C3,
    IO33_FSIRXA_CLK,
    IO33_CANA_RX,
    IO34_DIN,
    IO34_DOUT,
    IO34_OUTXBAR1,
    IO34_PMBUSA_SDA,
    IO35_DIN,
    IO35_DOUT,
    IO35_SCIA_RX,
    IO35_I2CA_SDA,
    IO35_CANA_RX,
    IO35_PMBUSA_SCL,
    IO35_LINA_RX,
    IO35_EQEP1_A,
    IO35_PMBUSA_CTL,
    IO35_JTAG_TDI,
    IO37_DIN,
    IO37_DOUT,
    IO37_OUTXBAR2,
    IO37_I2CA_SCL,
    IO37_SCIA_TX,
    IO37_CANA_TX,
    IO37_LINA_TX,
    IO37_EQEP1_B,
    IO37_PMBUSA_ALERT,
    IO37_JTAG_TDO,
    IO39_DIN,
    IO39_DOUT,
    IO39_CANB_RX,
    IO39_FSIRXA_CLK,
    IO40_DIN,
    IO40_DOUT,
    IO40_PMBUSA_SDA,
    IO40_FSIRXA_D0,
    IO40_SCIB_TX,
    IO40_EQEP1_A,
    IO56_DIN,
    IO56_DOUT,
    IO56_SPIA_CLK,
    IO56_EQEP2_STROBE,
    IO56_SCIB_TX,
    IO56_SD1_D3,
    IO56_SPIB_SIMO,
    IO56_EQEP1_A,
    IO57_DIN,
    IO57_DOUT,
    IO57_SPIA_STE,
    IO57_EQEP2_INDEX,
    IO57_SCIB_RX,
    IO57_SD1_C3,
    IO57_SPIB_SOMI,
    IO57_EQEP1_B,
    IO58_DIN,
    IO58_DOUT,
    IO58_OUTXBAR1,
    IO58_SPIB_CLK,
    IO58_SD1_D4,
    IO58_LINA_TX,
    IO58_CANB_TX,
    IO58_EQEP1_STROBE,
    IO59_DIN,
    IO59_DOUT,
    IO59_OUTXBAR2,
    IO59_SPIB_STE,
    IO59_SD1_C4,
    IO59_LINA_RX,
    IO59_CANB_RX,
    IO59_EQEP1_INDEX,
    IO224_AIN,
    IO224_DIN,
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
    IO242_AIN,
    IO242_DIN,
    IO243_AIN,
    IO243_DIN,
    IO244_AIN,
    IO244_DIN,
    IO245_AIN,
    IO245_DIN,
    IO246_AIN,
    IO246_DIN,
    IO247_AIN,
    IO247_DIN,
];

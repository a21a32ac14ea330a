//! Transports sharing one simulated F28004x
//!
//! Pins are claimed from a single registry, so transports can only coexist
//! on pins that do not overlap.

use hac_core::id::Identity;
use hac_core::io::registry::{PinMux, PinRegistry};
use hac_core::silicon::f28004x::pins as p4;
use hac_core::silicon::F28004x;
use hac_core::Error;
use hac_drivers::Clock;
use hac_hal::Platform;
use hac_hal_sim::SimPlatform;
use hac_net::eeprom::Backend;
use hac_net::spi::SpiConfig;
use hac_net::{
    Can, CanConfig, CanFrame, Eeprom, Flash, I2c, Mem, MemFile, Net, Spi, State, Sys,
    EEPROM_24AA256UID,
};

/// Write a record and read it back through any backend
fn store_and_load<B: Backend>(eeprom: &mut Eeprom<B>, address: u32) -> [u8; 8] {
    eeprom.write_at(address, b"HAC-0001").unwrap();
    let mut back = [0; 8];
    eeprom.read_at(address, &mut back).unwrap();
    back
}

#[test]
fn test_serial_broadcast_over_can() {
    let p = SimPlatform::new();
    let clock = Clock::init::<F28004x, _>(p.cpu(), p.sysctl(), p.timers()).unwrap();
    let mut pins = PinRegistry::<F28004x, _>::new(p.gpio(), p.cpu());
    pins.reset(&Identity::virtual_for::<F28004x>());

    let mut i2c = I2c::new(p.i2c(), Sys::new(&clock, p.cpu()));
    i2c.connect(&mut pins, p4::IO32_I2CA_SDA, p4::IO33_I2CA_SCL)
        .unwrap();
    let mut eeprom = Eeprom::new(i2c);
    eeprom.open(&EEPROM_24AA256UID).unwrap();
    eeprom.write_serial(0x0102_0304).unwrap();

    // CAN-A shares its pins with I2C-A
    let mut can_a = Can::<F28004x, _, _>::new(p.can(), Sys::new(&clock, p.cpu()), 0).unwrap();
    assert_eq!(
        can_a.connect(&mut pins, p4::IO32_CANA_TX, p4::IO33_CANA_RX),
        Err(Error::Busy)
    );

    let mut can = Can::<F28004x, _, _>::new(p.can(), Sys::new(&clock, p.cpu()), 1).unwrap();
    can.connect(&mut pins, p4::IO12_CANB_TX, p4::IO13_CANB_RX)
        .unwrap();
    can.open(&CanConfig {
        bitrate: 500_000,
        id: 0,
        mask: 0,
    })
    .unwrap();

    let serial = eeprom.serial().unwrap();
    let mut out = [CanFrame::new(0x100, &serial.to_be_bytes()).unwrap()];
    assert_eq!(can.write(&mut out), Ok(1));

    let sent = p.sim_can().bus(1);
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].id, 0x100);
    assert!(sent[0].extended);
    assert_eq!(&sent[0].data[..4], &[1, 2, 3, 4]);
}

#[test]
fn test_spi_pins_return_to_registry() {
    let p = SimPlatform::new();
    let clock = Clock::init::<F28004x, _>(p.cpu(), p.sysctl(), p.timers()).unwrap();
    let mut pins = PinRegistry::<F28004x, _>::new(p.gpio(), p.cpu());
    pins.reset(&Identity::virtual_for::<F28004x>());

    let mut spi = Spi::new(p.spi(), Sys::new(&clock, p.cpu()), 0).unwrap();
    spi.connect(
        &mut pins,
        p4::IO9_SPIA_CLK,
        p4::IO16_SPIA_SIMO,
        p4::IO17_SPIA_SOMI,
        p4::IO11_SPIA_STE,
    )
    .unwrap();
    spi.open(&SpiConfig {
        bits: 12,
        loopback: true,
        ..SpiConfig::default()
    })
    .unwrap();

    let mut words = [0x0ABC, 0x0123];
    assert_eq!(spi.write(&mut words), Ok(2));
    let mut back = [0; 2];
    assert_eq!(spi.read(&mut back), Ok(2));
    assert_eq!(back, words);

    // Pins stay claimed until the transport is closed and disconnected
    assert_eq!(spi.disconnect(&mut pins), Err(Error::State));
    spi.close().unwrap();
    spi.disconnect(&mut pins).unwrap();
    assert_eq!(spi.state(), State::Disconnected);
    assert!(!pins.status(p4::IO16_SPIA_SIMO).unwrap().connected);
}

#[test]
fn test_module_info_on_every_backend() {
    let mut file = Eeprom::new(MemFile::<0x8000>::new());
    file.open(&EEPROM_24AA256UID).unwrap();
    assert_eq!(&store_and_load(&mut file, 0x0200), b"HAC-0001");

    let p = SimPlatform::new();
    let mem = Mem::flash::<F28004x>();
    let mut flash = Eeprom::new(Flash::<F28004x, _>::new(p.flash()));
    flash.open(&mem).unwrap();
    flash.erase().unwrap();
    assert_eq!(&store_and_load(&mut flash, mem.wr.address), b"HAC-0001");
    assert_eq!(p.sim_flash().word(mem.wr.address), u16::from(b'H'));
}

//! Device and board bring-up on the simulated F28004x
//!
//! Boot, board setup, interrupt entry timing and the interlock cycle, in
//! the order the firmware runs them.

use hac_board::boards::bp25::{self, Bp25Hal, Button, Led};
use hac_board::{Bp25, Generic, Hal, Interlock, Scheduler};
use hac_core::config::{BoardId, BoardInfo, HalConfig};
use hac_core::id::FlashSize;
use hac_core::io::registry::PinMux;
use hac_core::silicon::f28004x::pins as p4;
use hac_core::silicon::F28004x;
use hac_core::{Error, PinFun};
use hac_hal::id::IdWords;
use hac_hal::pie::Vector;
use hac_hal::Cpu;
use hac_hal_sim::gpio::InterlockWiring;
use hac_hal_sim::id::F280049_100PIN;
use hac_hal_sim::SimPlatform;
use hac_net::{Net, State};
use hac_board::Handler;
use portable_atomic::{AtomicU32, Ordering};
use static_cell::StaticCell;

/// F280045, 64-pin, 128K flash, not automotive qualified
const F280045_64PIN: IdWords = IdWords {
    partid_low: (2 << 6) | (2 << 8) | (5 << 16),
    ..F280049_100PIN
};

fn wired(p: &SimPlatform, internal: Option<u16>) {
    p.sim_gpio().wire_interlock(InterlockWiring {
        trip: 24,
        clear: 5,
        combined: Some(7),
        internal,
    });
}

#[test]
fn test_boot_on_64_pin_package() {
    let p = SimPlatform::new().with_id(F280045_64PIN);
    let mut hal: Bp25Hal<'_, SimPlatform> = Hal::init(&p).unwrap();

    assert_eq!(hal.identity().pin_count, 64);
    assert_eq!(hal.identity().flash, FlashSize::K128);
    assert_eq!(hal.serial(), 0x0BA5_E001);
    assert_eq!(hal.frequency(), 1000);

    // Bonded out on 100 pins only
    let status = hal.pins().status(p4::IO40_DIN).unwrap();
    assert!(!status.available);
    // HAL transports claimed their pins
    assert!(hal.pins().status(p4::IO12_CANB_TX).unwrap().connected);
    assert!(hal.pins().status(p4::IO33_I2CA_SCL).unwrap().connected);

    // Every BP25 line is bonded out on the small package
    hal.setup(BoardInfo::new(BoardId::BP25, 1, 0)).unwrap();
    assert!(hal.pins().status(p4::IO17_DOUT).unwrap().connected);
    assert_eq!(
        hal.pins().status(bp25::pins::INTERLOCK_INTERNAL).unwrap().fun,
        PinFun::DIN
    );
}

#[test]
fn test_pll_retried_before_giving_up() {
    let p = SimPlatform::new();
    p.sim_sysctl().fail_pll(2);
    assert!(Hal::<F28004x, _, Generic>::init(&p).is_ok());

    let p = SimPlatform::new();
    p.sim_sysctl().fail_pll(3);
    assert_eq!(
        Hal::<F28004x, _, Generic>::init(&p).err(),
        Some(Error::Hardware)
    );
}

#[test]
fn test_bp25_setup_and_led() {
    let p = SimPlatform::new();
    let mut hal: Bp25Hal<'_, SimPlatform> = Hal::init(&p).unwrap();
    hal.setup(BoardInfo::new(BoardId::BP25, 0, 0)).unwrap();

    assert_eq!(hal.led_pin(), p4::IO17_DOUT);
    let led = hal.pins().status(p4::IO17_DOUT).unwrap();
    assert!(led.connected);
    assert_eq!(led.fun, PinFun::DOUT);

    hal.led(true).unwrap();
    assert!(p.sim_gpio().pin(17).output);
    hal.led_toggle().unwrap();
    assert!(!p.sim_gpio().pin(17).output);

    hal.set_led(Led::B3Green, true).unwrap();
    assert!(p.sim_gpio().pin(28).output);

    // Five button inputs on the EPWM1 trigger, ADC-A line 1 at the end
    for (core, soc) in [(3, 0), (3, 1), (1, 2), (1, 3), (2, 4)] {
        let cfg = p.sim_adc().soc(core, soc).unwrap();
        assert_eq!(cfg.trigger, hac_drivers::adc::Trigger::EPWM1_SOCA.0);
    }
    assert_eq!(p.sim_adc().interrupt_source(1, 1), Some(3));
    assert!(p.sim_pie().is_enabled(Vector::ADCA1));
    assert_eq!(hal.adc_data(0).unwrap().scale, 3.3 / 4096.0);
}

#[test]
fn test_buttons_read_through_adc() {
    let p = SimPlatform::new();
    let mut hal: Bp25Hal<'_, SimPlatform> = Hal::init(&p).unwrap();
    hal.setup(BoardInfo::new(BoardId::BP25, 0, 0)).unwrap();

    // B3 is ADC-A input 0
    p.sim_adc().set_input(1, 0, 4000);
    p.sim_adc().set_input(1, 1, 100);
    let board = hal.board().unwrap();
    board.convert(&p, Button::B3.index()).unwrap();
    board.convert(&p, Button::B2.index()).unwrap();
    assert_eq!(hal.button(Button::B3), Ok(true));
    assert_eq!(hal.button(Button::B2), Ok(false));
}

#[test]
fn test_variant_without_buttons() {
    let p = SimPlatform::new();
    let mut hal: Bp25Hal<'_, SimPlatform> = Hal::init(&p).unwrap();
    hal.setup(BoardInfo::new(BoardId::BP25, 0, 1)).unwrap();
    assert_eq!(hal.button(Button::B0), Err(Error::State));
    assert!(p.sim_adc().soc(1, 2).is_none());
}

#[test]
fn test_unknown_board_rejected() {
    let p = SimPlatform::new();
    let mut hal: Bp25Hal<'_, SimPlatform> = Hal::init(&p).unwrap();
    assert_eq!(
        hal.setup(BoardInfo::new(BoardId::LF45, 0, 0)),
        Err(Error::Unavailable)
    );
    assert_eq!(
        hal.setup(BoardInfo::new(BoardId::BP25, 7, 0)),
        Err(Error::Unavailable)
    );
    assert!(hal.board().is_none());
}

#[test]
fn test_failed_setup_releases_clear_line() {
    let p = SimPlatform::new();
    let mut hal: Bp25Hal<'_, SimPlatform> = Hal::init(&p).unwrap();
    // Status LED pin already taken
    hal.pins_mut().connect(p4::IO8_DOUT, PinFun::DOUT).unwrap();

    assert_eq!(
        hal.setup(BoardInfo::new(BoardId::BP25, 0, 0)),
        Err(Error::Busy)
    );
    assert!(!hal.pins().status(bp25::pins::INTERLOCK_CLEAR).unwrap().connected);
    assert!(hal.board().is_none());
}

#[test]
fn test_isr_entry_timing() {
    let p = SimPlatform::new();
    let hits = AtomicU32::new(0);
    let handler = || {
        hits.fetch_add(1, Ordering::Relaxed);
    };
    let mut hal: Bp25Hal<'_, SimPlatform> = Hal::init(&p).unwrap();
    hal.setup(BoardInfo::new(BoardId::BP25, 0, 0)).unwrap();

    assert_eq!(hal.isr_enable(), Err(Error::State));
    hal.isr_register(&handler);
    hal.isr_enable().unwrap();
    assert!(hal.isr_enabled());
    assert!(p.sim_cpu().interrupts_enabled());

    for _ in 0..3 {
        hal.isr_run();
    }
    assert_eq!(hits.load(Ordering::Relaxed), 3);
    let busy = hal.busy_ticks();
    assert!(busy > 0 && busy < 200, "busy {busy}");
    assert!(hal.busy_peak() >= busy);
    // ADCA1 is in PIE group 1
    assert_eq!(p.sim_pie().acknowledged(), vec![1, 1, 1]);

    hal.isr_disable();
    assert!(!hal.isr_enabled());
}

/// Interrupt-side state living for the whole program
#[derive(Default)]
struct Sampler {
    runs: AtomicU32,
}

impl Handler for Sampler {
    fn run(&self) {
        self.runs.fetch_add(1, Ordering::Relaxed);
    }
}

#[test]
fn test_static_handler() {
    static SAMPLER: StaticCell<Sampler> = StaticCell::new();
    let sampler: &'static Sampler = SAMPLER.init(Sampler::default());

    let p = SimPlatform::new();
    let mut hal: Bp25Hal<'_, SimPlatform> = Hal::init(&p).unwrap();
    hal.setup(BoardInfo::new(BoardId::BP25, 0, 0)).unwrap();
    hal.isr_register(sampler);
    hal.isr_enable().unwrap();
    hal.isr_run();
    hal.isr_run();
    assert_eq!(sampler.runs.load(Ordering::Relaxed), 2);
    assert_eq!(hal.busy_meter().runs(), 2);
}

#[test]
fn test_isr_without_handler_idles() {
    let p = SimPlatform::new();
    let hal: Bp25Hal<'_, SimPlatform> = Hal::init(&p).unwrap();
    hal.isr_run();
    assert_eq!(p.sim_cpu().idle_count(), 1);
    assert!(!hal.isr_enabled());
}

#[test]
fn test_two_paths_need_two_handlers() {
    let p = SimPlatform::new();
    let first = || {};
    let second = || {};
    let mut hal: Bp25Hal<'_, SimPlatform> = Hal::init(&p).unwrap();
    hal.setup(BoardInfo::new(BoardId::BP25, 1, 0)).unwrap();

    hal.isr_register(&first);
    assert_eq!(hal.isr_enable(), Err(Error::State));
    hal.isr_2_register(&second);
    hal.isr_enable().unwrap();
    assert!(hal.isr_enabled() && hal.isr_2_enabled());
    assert!(p.sim_pie().is_enabled(Vector::ADCA2));
    assert_eq!(p.sim_adc().interrupt_source(1, 2), Some(2));

    hal.isr_2_run();
    assert_eq!(p.sim_pie().acknowledged(), vec![10]);
}

#[test]
fn test_interlock_cycle() {
    let p = SimPlatform::new();
    wired(&p, Some(23));
    let mut hal: Bp25Hal<'_, SimPlatform> = Hal::init(&p).unwrap();
    hal.setup(BoardInfo::new(BoardId::BP25, 1, 0)).unwrap();

    assert_eq!(hal.interlock_read(), Ok(Interlock::default()));

    hal.interlock_trip().unwrap();
    assert!(p.sim_gpio().internal_fault());
    assert_eq!(
        hal.interlock_read(),
        Ok(Interlock {
            internal: true,
            external: false,
        })
    );
    assert_eq!(hal.interlock_internal_read(), Ok(true));

    hal.interlock_clear().unwrap();
    assert_eq!(hal.interlock_read(), Ok(Interlock::default()));

    p.sim_gpio().set_external_fault(true);
    assert_eq!(
        hal.interlock_read(),
        Ok(Interlock {
            internal: false,
            external: true,
        })
    );
}

#[test]
fn test_interlock_without_internal_line() {
    let p = SimPlatform::new();
    wired(&p, None);
    let mut hal: Bp25Hal<'_, SimPlatform> = Hal::init(&p).unwrap();
    hal.setup(BoardInfo::new(BoardId::BP25, 0, 0)).unwrap();

    p.sim_gpio().set_external_fault(true);
    // The loop fault is all a revision 0 board can see
    assert_eq!(
        hal.interlock_read(),
        Ok(Interlock {
            internal: true,
            external: true,
        })
    );
    assert_eq!(hal.interlock_internal_read(), Ok(true));
}

#[test]
fn test_reset_trips_interlock() {
    let p = SimPlatform::new();
    wired(&p, Some(23));
    let mut hal: Bp25Hal<'_, SimPlatform> = Hal::init(&p).unwrap();
    hal.setup(BoardInfo::new(BoardId::BP25, 1, 0)).unwrap();

    hal.reset();
    assert!(p.sim_gpio().internal_fault());
    assert_eq!(p.sim_cpu().reset_requests(), 1);
}

#[test]
fn test_display_bring_up() {
    let p = SimPlatform::new();
    let mut hal: Bp25Hal<'_, SimPlatform> = Hal::init(&p).unwrap();
    hal.setup(BoardInfo::new(BoardId::BP25, 0, 0)).unwrap();

    let start = p.clock().now_us();
    assert_eq!(hal.enable_display(), Ok(true));
    assert!(p.clock().now_us() - start >= 1_000_000);
    assert!(p.sim_gpio().pin(3).output);
    assert_eq!(hal.spi().state(), State::Open);
    assert_eq!(p.sim_spi().config(0).unwrap().bitrate, bp25::DISPLAY_BITRATE);

    assert_eq!(hal.enable_display(), Ok(false));
}

#[test]
fn test_heartbeat_from_tick() {
    let p = SimPlatform::new();
    let mut hal: Bp25Hal<'_, SimPlatform> = Hal::init(&p).unwrap();
    hal.setup(BoardInfo::new(BoardId::BP25, 0, 0)).unwrap();

    let mut sched: Scheduler = Scheduler::new();
    assert_eq!(hal.heartbeat_period(), 500);
    let heartbeat = sched.add(hal.heartbeat_period()).unwrap();
    let mut beats = 0;
    for _ in 0..1000 {
        p.clock().advance(100_000);
        sched.poll(hal.tick(), |task| {
            if task == heartbeat {
                hal.led_toggle().unwrap();
                beats += 1;
            }
        });
    }
    assert_eq!((sched.ticks(), beats), (1000, 2));
    assert!(!p.sim_gpio().pin(17).output);
}

#[test]
fn test_generic_board_has_no_interrupts() {
    let p = SimPlatform::new();
    let handler = || {};
    let mut hal: Hal<'_, F28004x, SimPlatform, Generic> = Hal::init(&p).unwrap();
    hal.setup(BoardInfo::new(BoardId::CB01, 0, 0)).unwrap();
    hal.isr_register(&handler);
    assert_eq!(hal.isr_enable(), Err(Error::State));
    assert_eq!(hal.interlock_trip(), Err(Error::Code));
    assert_eq!(hal.adc_read(0), Err(Error::Unavailable));
}

#[test]
fn test_stored_configuration_on_board_eeprom() {
    let p = SimPlatform::new();
    let mut hal: Bp25Hal<'_, SimPlatform> = Hal::init(&p).unwrap();
    let defaults = hal.load_config();
    assert_eq!(defaults.board, BoardInfo::default());

    let config = hac_core::config::HalConfig {
        board: BoardInfo::new(BoardId::BP25, 1, 0),
        ..defaults
    };
    hac_board::persist::store(hal.eeprom(), hac_board::persist::CONFIG_ADDRESS, &config).unwrap();
    assert_eq!(hal.load_config(), config);
    assert_eq!(hal.eeprom().state(), State::Open);

    hal.setup(config.board).unwrap();
    let board: &Bp25 = hal.board().unwrap();
    assert_eq!((board.revision(), board.has_buttons()), (1, true));
}

#[test]
fn test_stored_configuration_sets_up_buses() {
    let p = SimPlatform::new();
    let mut hal: Bp25Hal<'_, SimPlatform> = Hal::init(&p).unwrap();
    let stored = HalConfig {
        board: BoardInfo::new(BoardId::BP25, 0, 0),
        can_bitrate: 250_000,
        can_id: 0x0123_4567,
        can_mask: 0x1FFF_FF00,
        i2c_bitrate: 100_000,
        led_period_ms: 250,
        ..HalConfig::default()
    };
    hal.load_config();
    hac_board::persist::store(hal.eeprom(), hac_board::persist::CONFIG_ADDRESS, &stored).unwrap();

    assert_eq!(hal.configure_from_storage(), Ok(stored));
    assert_eq!(hal.config(), &stored);

    // Primary bus is CAN-B on this part
    let can = hal.can().index();
    assert_eq!(hal.can().state(), State::Open);
    let timing = hal.can().timing().unwrap();
    let can_hz = hal.clock().clocks().can;
    assert_eq!(can_hz / (u32::from(timing.brp) * u32::from(timing.nq)), 250_000);
    assert_eq!(p.sim_can().timing(can), Some(timing.registers()));
    let rx = p.sim_can().mailbox_config(can, 1).unwrap();
    assert_eq!((rx.id, rx.mask), (0x0123_4567, 0x1FFF_FF00));

    let (_, i2c_bitrate, _) = p.sim_i2c().configuration(0).unwrap();
    assert_eq!(i2c_bitrate, 100_000);
    assert_eq!(hal.eeprom().state(), State::Open);
    assert_eq!(hal.load_config(), stored);

    assert_eq!(hal.heartbeat_period(), 250);
}

#[test]
fn test_configured_i2c_rate_capped_by_memory() {
    let p = SimPlatform::new();
    let mut hal: Bp25Hal<'_, SimPlatform> = Hal::init(&p).unwrap();
    hal.configure(HalConfig::default()).unwrap();
    let (_, i2c_bitrate, _) = p.sim_i2c().configuration(0).unwrap();
    assert_eq!(i2c_bitrate, 200_000);

    let fast_can = HalConfig {
        can_bitrate: 2_000_000,
        ..HalConfig::default()
    };
    assert_eq!(hal.configure(fast_can), Err(Error::Range));
    assert_eq!(hal.config(), &HalConfig::default());
}

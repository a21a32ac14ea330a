//! Control-loop bring-up on the simulated F28004x
//!
//! Clock, PWM, ADC triggered from PWM, end-of-conversion interrupt and a
//! window comparator on the same input, in the order a board brings them
//! up.

use hac_core::id::Identity;
use hac_core::io::registry::PinRegistry;
use hac_core::silicon::f28004x::pins as p4;
use hac_core::silicon::F28004x;
use hac_drivers::adc::{Adc, AdcChannel, Trigger};
use hac_drivers::pie::Interrupts;
use hac_drivers::pwm::{self, Pwm, PwmChannel};
use hac_drivers::wch::{Wch, WchChannel};
use hac_drivers::Clock;
use hac_hal::pie::Vector;
use hac_hal::pwm::{Compare, SocOutput, SocSource};
use hac_hal::Platform;
use hac_hal_sim::SimPlatform;

const SOCS: &[u8] = &[0, 1, 2, 3];

const ADC: &[AdcChannel] = &[AdcChannel {
    enable: true,
    core: 1,
    channel: 4,
    trigger: Trigger::EPWM1_SOCA,
    sample_ns: 100,
    int_line: 1,
    socs: SOCS,
}];

const WCH: &[WchChannel] = &[WchChannel {
    enable: true,
    adc_core: 1,
    adc_channel: 4,
    trip_high: 4,
    trip_low: 4,
    pwm_sync: 1,
}];

#[test]
fn test_control_loop_bring_up() {
    let p = SimPlatform::new();
    let clock = Clock::init::<F28004x, _>(p.cpu(), p.sysctl(), p.timers()).unwrap();
    let mut pins = PinRegistry::<F28004x, _>::new(p.gpio(), p.cpu());
    pins.reset(&Identity::virtual_for::<F28004x>());

    let pwm_channels = [PwmChannel {
        enable: true,
        num: 1,
        io_a: p4::IO0_EPWM1_A,
        io_b: p4::IO1_EPWM1_B,
        independent_b: false,
        freq: 50_000,
        phase: None,
        dead_us: 0.2,
    }];
    let mut pwm = Pwm::new(&pwm_channels);
    pwm.setup(p.pwm(), &clock, p.cpu(), &mut pins).unwrap();
    pwm::trigger(p.pwm(), 1, SocOutput::SocA, SocSource::CounterZero, 1).unwrap();

    let mut adc = Adc::new(ADC);
    adc.setup::<F28004x, _, _>(p.adc(), &clock, p.cpu()).unwrap();

    let mut wch = Wch::new(WCH);
    wch.setup::<F28004x, _, _>(p.cmpss(), p.sysctl(), p.cpu())
        .unwrap();
    wch.set_thresholds(p.cmpss(), 0, 3500, 500).unwrap();

    let mut ints = Interrupts::new(p.pie(), p.cpu());
    ints.init();
    ints.enable(Vector::ADCA1).unwrap();

    // 100 MHz / (2 * 50 kHz)
    assert_eq!(pwm.period(1), Ok(1000));
    assert_eq!(p.sim_adc().interrupt_source(1, 1), Some(3));
    assert_eq!(p.sim_adc().soc(1, 3).unwrap().trigger, Trigger::EPWM1_SOCA.0);

    // A forced conversion stands in for the PWM event
    p.sim_adc().set_input(1, 4, 1024);
    adc.convert(p.adc(), 0).unwrap();
    assert_eq!(adc.read(p.adc(), 0), Ok(1024));

    pwm.release(p.pwm(), p.cpu(), 1).unwrap();
    pwm.update(p.pwm(), 1, Compare::A, 0.25).unwrap();
    let g = p.sim_pwm().generator(1).unwrap();
    assert_eq!(g.cmpa, 250);
    assert!(!g.tripped);
    assert_eq!(p.sim_pwm().generator(1).unwrap().soc_a, Some((SocSource::CounterZero, 1)));

    // Every protected write was closed again
    assert!(!p.sim_cpu().is_allowed());
}

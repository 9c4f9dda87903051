// File: crates/chart-core/tests/transition.rs
// Purpose: Easing curve and retargeting of animated values.

use std::time::Duration;

use chart_core::transition::{ease_cubic_in_out, Animated};
use chart_core::Timing;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn easing_hits_endpoints_and_is_monotonic() {
    assert_eq!(ease_cubic_in_out(0.0), 0.0);
    assert_eq!(ease_cubic_in_out(1.0), 1.0);
    assert_eq!(ease_cubic_in_out(0.5), 0.5);
    assert_eq!(ease_cubic_in_out(-1.0), 0.0);
    assert_eq!(ease_cubic_in_out(2.0), 1.0);
    let mut prev = 0.0;
    for i in 1..=20 {
        let v = ease_cubic_in_out(i as f64 / 20.0);
        assert!(v >= prev);
        prev = v;
    }
}

#[test]
fn timing_progress_is_clamped() {
    let t = Timing::new(ms(100), ms(200));
    assert_eq!(t.progress(ms(0)), 0.0);
    assert_eq!(t.progress(ms(200)), 0.5);
    assert_eq!(t.progress(ms(500)), 1.0);
    assert_eq!(Timing::immediate(ms(100)).progress(ms(0)), 1.0);
}

#[test]
fn retarget_continues_from_current_value() {
    let mut a = Animated::fixed(0.0_f64);
    a.retarget(10.0, Timing::new(ms(0), ms(1000)));
    assert!(a.is_running(ms(500)));
    assert_eq!(a.value_at(ms(500)), 5.0);

    a.retarget(-10.0, Timing::new(ms(500), ms(1000)));
    assert_eq!(a.from(), 5.0);
    assert_eq!(a.value_at(ms(500)), 5.0);
    assert_eq!(a.value_at(ms(1500)), -10.0);
    assert!(!a.is_running(ms(1500)));
}

// Host-side tests for frame timing.

#![allow(dead_code)]
mod rig_core {
    pub mod clock {
        include!("../src/core/clock.rs");
    }
}

use instant::Instant;
use rig_core::clock::*;
use std::time::Duration;

#[test]
fn first_tick_has_zero_delta() {
    let mut clock = FrameClock::new(0.1);
    let t = clock.tick(Instant::now());
    assert_eq!(t, FrameTime::default());
}

#[test]
fn delta_is_time_between_ticks() {
    let mut clock = FrameClock::new(0.1);
    let t0 = Instant::now();
    clock.tick(t0);
    let t = clock.tick(t0 + Duration::from_millis(16));
    assert!((t.delta - 0.016).abs() < 1e-4);
    let t = clock.tick(t0 + Duration::from_millis(50));
    assert!((t.delta - 0.034).abs() < 1e-4);
    assert!((t.elapsed - 0.05).abs() < 1e-4);
    assert_eq!(clock.elapsed(), t.elapsed);
}

#[test]
fn stalls_are_clamped() {
    let mut clock = FrameClock::new(0.1);
    let t0 = Instant::now();
    clock.tick(t0);
    let t = clock.tick(t0 + Duration::from_secs(5));
    assert_eq!(t.delta, 0.1);
}

#[test]
fn non_advancing_time_gives_zero_delta() {
    let mut clock = FrameClock::new(0.1);
    let t0 = Instant::now() + Duration::from_millis(100);
    clock.tick(t0);
    assert_eq!(clock.tick(t0).delta, 0.0);
    assert_eq!(clock.tick(t0 - Duration::from_millis(10)).delta, 0.0);
}

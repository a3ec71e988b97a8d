// Host-side tests for the spring and lerp followers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod rig_core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod error {
        include!("../src/core/error.rs");
    }
    pub mod spring {
        include!("../src/core/spring.rs");
    }
}

use glam::Vec2;
use rig_core::error::ConfigError;
use rig_core::spring::*;

fn head_spring() -> SpringFollower {
    SpringFollower::new(SpringConfig::new(0.08, 0.92, None).unwrap())
}

fn frames_to_settle(f: &mut SpringFollower, target: Vec2, tolerance: f32, max: usize) -> Option<usize> {
    let mut last_outside = None;
    for i in 0..max {
        let c = f.update(target);
        if (c - target).length() > tolerance {
            last_outside = Some(i);
        }
    }
    Some(last_outside.map_or(0, |i| i + 1)).filter(|n| *n < max)
}

#[test]
fn first_step_matches_damped_spring_formula() {
    let mut f = SpringFollower::new(SpringConfig::default());
    let c = f.update(Vec2::new(1.0, 0.0));
    // v = 0.92 * (0 + 1 * 0.08) = 0.0736, under the 0.1 clamp
    assert!((f.state().velocity.x - 0.0736).abs() < 1e-6);
    assert!((c.x - 0.0736).abs() < 1e-6);
    assert_eq!(c.y, 0.0);
}

#[test]
fn converges_to_constant_target_within_200_frames() {
    for target in [Vec2::new(1.0, 0.0), Vec2::new(0.18, -0.1), Vec2::new(-0.5, 0.5)] {
        let tol = 0.01 * target.length();
        let mut unclamped = head_spring();
        let n = frames_to_settle(&mut unclamped, target, tol, 400).expect("unclamped settles");
        assert!(n < 200, "unclamped took {n} frames for {target:?}");

        let mut clamped = SpringFollower::new(SpringConfig::default());
        let n = frames_to_settle(&mut clamped, target, tol, 400).expect("clamped settles");
        assert!(n < 200, "clamped took {n} frames for {target:?}");
    }
}

#[test]
fn reset_then_zero_target_stays_at_rest() {
    let mut f = head_spring();
    for _ in 0..30 {
        f.update(Vec2::new(0.7, -0.3));
    }
    assert_ne!(f.state().current, Vec2::ZERO);
    f.reset();
    for _ in 0..100 {
        let c = f.update(Vec2::ZERO);
        assert_eq!(c, Vec2::ZERO);
        assert_eq!(f.state().velocity, Vec2::ZERO);
    }
}

#[test]
fn velocity_envelope_decays_for_constant_target() {
    // Underdamped: |v| oscillates, so compare peaks over one oscillation (~23 frames).
    let mut f = head_spring();
    let target = Vec2::new(1.0, -0.5);
    let window = 23;
    let mut peaks = Vec::new();
    for _ in 0..10 {
        let mut peak = 0.0f32;
        for _ in 0..window {
            f.update(target);
            peak = peak.max(f.state().velocity.length());
        }
        peaks.push(peak);
    }
    for pair in peaks.windows(2) {
        assert!(pair[1] <= pair[0], "velocity peaks grew: {peaks:?}");
    }
}

#[test]
fn velocity_stays_zero_once_at_target() {
    let mut f = head_spring();
    let mut prev = f.state().velocity.length();
    for _ in 0..50 {
        f.update(Vec2::ZERO);
        let v = f.state().velocity.length();
        assert!(v <= prev);
        prev = v;
    }
}

#[test]
fn max_velocity_bounds_every_step() {
    let mut f = SpringFollower::new(SpringConfig::new(0.5, 0.9, Some(0.05)).unwrap());
    for _ in 0..100 {
        f.update(Vec2::new(100.0, -100.0));
        let v = f.state().velocity;
        assert!(v.x.abs() <= 0.05 + 1e-7 && v.y.abs() <= 0.05 + 1e-7);
    }
}

#[test]
fn rejects_non_converging_configs() {
    assert_eq!(
        SpringConfig::new(0.08, 1.0, None),
        Err(ConfigError::DampingFactor(1.0))
    );
    assert_eq!(
        SpringConfig::new(0.08, 0.0, None),
        Err(ConfigError::DampingFactor(0.0))
    );
    assert!(SpringConfig::new(0.08, f32::NAN, None).is_err());
    assert_eq!(
        SpringConfig::new(0.0, 0.9, None),
        Err(ConfigError::SpringForce(0.0))
    );
    assert_eq!(
        SpringConfig::new(0.08, 0.9, Some(0.0)),
        Err(ConfigError::MaxVelocity(0.0))
    );
    assert!(SpringConfig::new(0.06, 0.92, Some(0.1)).is_ok());
}

#[test]
fn lerp_never_overshoots() {
    let mut l = LerpFollower::new(0.12).unwrap();
    let target = Vec2::new(0.12, -0.08);
    let mut prev = Vec2::ZERO;
    for _ in 0..300 {
        let c = l.update(target);
        assert!(c.x >= prev.x - 1e-7 && c.x <= target.x + 1e-7);
        assert!(c.y <= prev.y + 1e-7 && c.y >= target.y - 1e-7);
        prev = c;
    }
    assert!((prev - target).length() < 1e-5);
}

#[test]
fn lerp_factor_is_validated() {
    assert_eq!(LerpFollower::new(0.0).unwrap_err(), ConfigError::LerpFactor(0.0));
    assert!(LerpFollower::new(1.5).is_err());
    let mut snap = LerpFollower::new(1.0).unwrap();
    assert_eq!(snap.update(Vec2::new(0.3, 0.4)), Vec2::new(0.3, 0.4));
}

#[test]
fn follower_strategies_are_interchangeable() {
    let choices = [
        Smoothing::Spring(SpringConfig::default()),
        Smoothing::Lerp(0.12),
    ];
    for s in choices {
        let mut f = Follower::from_smoothing(s).unwrap();
        let target = Vec2::new(0.1, 0.05);
        for _ in 0..300 {
            f.update(target);
        }
        assert!((f.current() - target).length() < 1e-3, "{s:?} did not settle");
        f.reset();
        assert_eq!(f.current(), Vec2::ZERO);
    }
    assert!(Follower::from_smoothing(Smoothing::Lerp(-1.0)).is_err());
}

#[test]
fn spring_overshoots_but_lerp_does_not() {
    let target = Vec2::new(1.0, 0.0);
    let mut spring = head_spring();
    let mut lerp = LerpFollower::new(0.12).unwrap();
    let mut spring_peak = 0.0f32;
    let mut lerp_peak = 0.0f32;
    for _ in 0..200 {
        spring_peak = spring_peak.max(spring.update(target).x);
        lerp_peak = lerp_peak.max(lerp.update(target).x);
    }
    assert!(spring_peak > 1.0);
    assert!(lerp_peak <= 1.0 + 1e-6);
}

#[test]
fn unchecked_configs_are_validated_before_use() {
    let bad = Smoothing::Spring(SpringConfig::unchecked(0.08, 1.2, None));
    assert_eq!(bad.validate(), Err(ConfigError::DampingFactor(1.2)));
    assert!(Follower::from_smoothing(bad).is_err());
    let good = Smoothing::Spring(SpringConfig::unchecked(0.08, 0.92, None));
    assert!(Follower::from_smoothing(good).is_ok());
}

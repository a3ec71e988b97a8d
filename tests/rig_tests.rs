// Host-side tests for the character rig: targets, smoothing order,
// breathing and placement.

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
    pub mod pointer {
        include!("../src/core/pointer.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
    pub mod rig {
        include!("../src/core/rig.rs");
    }
}

use glam::{Vec2, Vec3};
use rig_core::constants::*;
use rig_core::error::ConfigError;
use rig_core::pointer::PointerSignal;
use rig_core::rig::*;
use rig_core::scene::Aabb;
use rig_core::spring::{Smoothing, SpringConfig};

const DT: f32 = 1.0 / 60.0;

fn active_rig() -> CharacterRig {
    let mut rig = CharacterRig::new(RigConfig::default()).unwrap();
    rig.activate(Placement::fixed(Vec3::ZERO, 1.0));
    rig
}

fn p(x: f32, y: f32) -> PointerSignal {
    PointerSignal { x, y }
}

#[test]
fn inactive_rig_produces_nothing() {
    let mut rig = CharacterRig::new(RigConfig::default()).unwrap();
    assert_eq!(rig.lifecycle(), Lifecycle::Uninitialized);
    for _ in 0..5 {
        assert!(rig.update(p(1.0, 1.0), DT).is_none());
    }
    assert_eq!(rig.breathing_phase(), 0.0);
}

#[test]
fn activation_happens_once() {
    let mut rig = CharacterRig::new(RigConfig::default()).unwrap();
    let first = Placement::fixed(Vec3::new(0.0, -0.2, 0.0), 0.5);
    rig.activate(first);
    rig.activate(Placement::fixed(Vec3::ONE, 3.0));
    assert!(rig.is_active());
    assert_eq!(rig.placement(), first);
}

#[test]
fn targets_stay_within_limits_for_any_pointer() {
    let mut rig = active_rig();
    let extremes = [-1.0e6, -1.0, -0.5, 0.0, 0.5, 1.0, 1.0e6, f32::INFINITY];
    for &x in &extremes {
        for &y in &extremes {
            let pose = rig.update(p(x, y), DT).unwrap();
            assert!(pose.head_target.x.abs() <= HEAD_MAX[0]);
            assert!(pose.head_target.y.abs() <= HEAD_MAX[1]);
            assert!(pose.eye_target.x.abs() <= EYE_MAX[0]);
            assert!(pose.eye_target.y.abs() <= EYE_MAX[1]);
        }
    }
}

#[test]
fn target_mapping_follows_scale_and_preclamp() {
    let mut rig = active_rig();
    let pose = rig.update(p(0.5, 1.0), DT).unwrap();
    // y is pre-clamped to 0.8 before scaling: 0.8 * 0.12 = 0.096 (< 0.10)
    assert!((pose.head_target.x - 0.096).abs() < 1e-6);
    assert!((pose.head_target.y - 0.11).abs() < 1e-6);
    // 0.8 * 0.10 = 0.08 hits the eye limit exactly; 0.5 * 0.15 = 0.075
    assert!((pose.eye_target.x - 0.08).abs() < 1e-6);
    assert!((pose.eye_target.y - 0.075).abs() < 1e-6);

    let pose = rig.update(p(1.0, -1.0), DT).unwrap();
    assert!((pose.head_target.y - 0.18).abs() < 1e-6);
    assert!((pose.eye_target.y - 0.12).abs() < 1e-6);
    assert!((pose.head_target.x + 0.096).abs() < 1e-6);
}

#[test]
fn pupils_follow_smoothed_eye_rotation() {
    let mut rig = active_rig();
    let pose = rig.update(p(1.0, 0.0), DT).unwrap();
    // eye yaw after one lerp step: 0.12 * 0.12
    let eye_yaw = 0.12 * EYE_LERP;
    assert!((pose.eye_rotation.y - eye_yaw).abs() < 1e-7);
    let expected_x = eye_yaw * PUPIL_FROM_EYE[0] * PUPIL_LERP;
    assert!((pose.pupils.offset.x - expected_x).abs() < 1e-8);
    assert_eq!(pose.pupils.offset.y, 0.0);
    assert_eq!(pose.pupils.offset.z, 0.0);
}

#[test]
fn head_settles_on_constant_pointer() {
    let mut rig = active_rig();
    let mut pose = rig.update(p(0.6, 0.4), DT).unwrap();
    for _ in 0..300 {
        pose = rig.update(p(0.6, 0.4), DT).unwrap();
    }
    assert!((pose.head.rotation - pose.head_target).length() < 1e-3);
    assert!((pose.eye_rotation - pose.eye_target).length() < 1e-4);
    let settled_pupil = Vec2::new(
        pose.eye_target.y * PUPIL_FROM_EYE[0],
        pose.eye_target.x * PUPIL_FROM_EYE[1],
    );
    assert!((pose.pupils.offset.truncate() - settled_pupil).length() < 1e-4);
}

#[test]
fn same_inputs_give_identical_poses() {
    let inputs: Vec<(PointerSignal, f32)> = (0..240)
        .map(|i| {
            let t = i as f32 * 0.05;
            (p(t.sin(), (t * 0.7).cos()), DT + (i % 3) as f32 * 0.001)
        })
        .collect();
    let run = || {
        let mut rig = active_rig();
        inputs
            .iter()
            .map(|&(ptr, dt)| rig.update(ptr, dt).unwrap())
            .collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
}

#[test]
fn reset_matches_fresh_rig() {
    let mut used = active_rig();
    for _ in 0..50 {
        used.update(p(-0.9, 0.3), DT);
    }
    used.reset();
    assert!(used.is_active());
    assert_eq!(used.breathing_phase(), 0.0);

    let mut fresh = active_rig();
    for i in 0..20 {
        let ptr = p(0.1 * i as f32 - 1.0, 0.5);
        assert_eq!(used.update(ptr, DT), fresh.update(ptr, DT));
    }
}

#[test]
fn breathing_phase_accumulates_delta() {
    let mut rig = active_rig();
    let deltas = [0.016, 0.017, 0.0, 0.1, 0.033];
    for d in deltas {
        rig.update(PointerSignal::CENTER, d);
    }
    let expected: f32 = deltas.iter().sum::<f32>() * BREATH_RATE;
    assert!((rig.breathing_phase() - expected).abs() < 1e-5);

    // Negative deltas never run the phase backwards.
    rig.update(PointerSignal::CENTER, -1.0);
    assert!((rig.breathing_phase() - expected).abs() < 1e-5);
}

#[test]
fn breathing_is_layered_on_placement() {
    let mut rig = CharacterRig::new(RigConfig::default()).unwrap();
    let base = Placement::fixed(Vec3::new(0.1, -0.2, 0.0), 0.5);
    rig.activate(base);

    let pose = rig.update(PointerSignal::CENTER, 0.0).unwrap();
    assert_eq!(pose.body.offset, base.offset);
    assert_eq!(pose.body.scale, base.scale);

    // Quarter period: sin(phase) == 1
    let quarter = std::f32::consts::FRAC_PI_2 / BREATH_RATE;
    let pose = rig.update(PointerSignal::CENTER, quarter).unwrap();
    assert!((pose.body.offset.y - (-0.2 + BREATH_OFFSET_AMPLITUDE)).abs() < 1e-5);
    assert!((pose.body.offset.x - 0.1).abs() < 1e-7);
    assert!((pose.body.scale - 0.5 * (1.0 + BREATH_SCALE_AMPLITUDE)).abs() < 1e-5);
}

#[test]
fn breathing_ignores_pointer() {
    let mut a = active_rig();
    let mut b = active_rig();
    for i in 0..60 {
        let pa = a.update(p(1.0, 1.0), DT * i as f32).unwrap();
        let pb = b.update(p(-1.0, 0.0), DT * i as f32).unwrap();
        assert_eq!(pa.body, pb.body);
    }
}

#[test]
fn fit_scales_largest_side_and_recenters() {
    let centered = Aabb::new(Vec3::new(-1.0, -2.0, -1.0), Vec3::new(1.0, 2.0, 1.0));
    let fit = Placement::fit(&centered, FIT_EXTENT, FIT_Y_BIAS);
    assert!((fit.scale - 0.55).abs() < 1e-6);
    assert!((fit.offset - Vec3::new(0.0, -0.2, 0.0)).length() < 1e-6);

    let shifted = Aabb::new(Vec3::ZERO, Vec3::splat(2.0));
    let fit = Placement::fit(&shifted, FIT_EXTENT, FIT_Y_BIAS);
    assert!((fit.scale - 1.1).abs() < 1e-6);
    assert!((fit.offset - Vec3::new(-1.1, -1.3, -1.1)).length() < 1e-5);
}

#[test]
fn fit_of_empty_bounds_keeps_unit_scale() {
    let fit = Placement::fit(&Aabb::empty(), FIT_EXTENT, 0.0);
    assert_eq!(fit.scale, 1.0);
    assert_eq!(fit.offset, Vec3::ZERO);
}

#[test]
fn invalid_config_is_rejected() {
    let mut config = RigConfig::default();
    config.eyes.smoothing = Smoothing::Lerp(0.0);
    assert_eq!(
        CharacterRig::new(config).unwrap_err(),
        ConfigError::LerpFactor(0.0)
    );

    let mut config = RigConfig::default();
    config.head.limits = ChannelLimits::new(HEAD_SCALE, [-0.1, 0.18]);
    assert_eq!(
        CharacterRig::new(config).unwrap_err(),
        ConfigError::ChannelLimit(-0.1)
    );

    assert!(RigConfig::default().validate().is_ok());
}

#[test]
fn aim_channel_with_lerp_is_swappable() {
    let mut config = RigConfig::default();
    config.head.smoothing = Smoothing::Lerp(0.2);
    let mut rig = CharacterRig::new(config).unwrap();
    rig.activate(Placement::fixed(Vec3::ZERO, 1.0));
    let mut peak = 0.0f32;
    for _ in 0..200 {
        let pose = rig.update(p(1.0, 0.0), DT).unwrap();
        peak = peak.max(pose.head.rotation.y);
    }
    assert!(peak <= HEAD_MAX[1] + 1e-6);
}

#[test]
fn default_head_spring_has_no_velocity_clamp() {
    let config = RigConfig::default();
    match config.head.smoothing {
        Smoothing::Spring(spring) => {
            assert_eq!(spring.spring_force(), HEAD_SPRING_FORCE);
            assert_eq!(spring.damping_factor(), HEAD_DAMPING);
            assert_eq!(spring.max_velocity(), None);
        }
        other => panic!("head should spring, got {other:?}"),
    }
}

#[test]
fn invalid_head_spring_is_reported_not_replaced() {
    let mut config = RigConfig::default();
    config.head.smoothing = Smoothing::Spring(SpringConfig::unchecked(HEAD_SPRING_FORCE, 1.0, None));
    assert_eq!(
        CharacterRig::new(config).unwrap_err(),
        ConfigError::DampingFactor(1.0)
    );
}

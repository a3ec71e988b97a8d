// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn follower_tuning_converges() {
    // Damping in (0, 1) or the spring never settles
    assert!(HEAD_DAMPING > 0.0 && HEAD_DAMPING < 1.0);
    assert!(DEFAULT_DAMPING > 0.0 && DEFAULT_DAMPING < 1.0);
    assert!(HEAD_SPRING_FORCE > 0.0 && DEFAULT_SPRING_FORCE > 0.0);
    assert!(DEFAULT_MAX_VELOCITY > 0.0);

    // Lerp factors in (0, 1]
    assert!(EYE_LERP > 0.0 && EYE_LERP <= 1.0);
    assert!(PUPIL_LERP > 0.0 && PUPIL_LERP <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn aim_limits_are_consistent() {
    for i in 0..2 {
        assert!(HEAD_SCALE[i] > 0.0 && HEAD_MAX[i] > 0.0);
        assert!(EYE_SCALE[i] > 0.0 && EYE_MAX[i] > 0.0);
        // Eyes move less than the head
        assert!(EYE_MAX[i] < HEAD_MAX[i]);
        assert!(PUPIL_FROM_EYE[i] > 0.0);
    }
    assert!(POINTER_Y_LIMIT > 0.0 && POINTER_Y_LIMIT <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn breathing_is_subtle() {
    assert!(BREATH_RATE > 0.0);
    assert!(BREATH_OFFSET_AMPLITUDE > 0.0 && BREATH_OFFSET_AMPLITUDE < 0.05);
    assert!(BREATH_SCALE_AMPLITUDE > 0.0 && BREATH_SCALE_AMPLITUDE < 0.05);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_and_frame_timing_are_sane() {
    assert!(CAMERA_Z > 0.0);
    assert!(CAMERA_ZNEAR > 0.0 && CAMERA_ZFAR > CAMERA_ZNEAR);
    assert!(CAMERA_Z > CAMERA_ZNEAR && CAMERA_Z < CAMERA_ZFAR);
    assert!(CAMERA_FOVY_DEG > 0.0 && CAMERA_FOVY_DEG < 180.0);
    assert!(MAX_FRAME_DELTA_SEC > 0.0 && MAX_FRAME_DELTA_SEC < 1.0);
    assert!(MAX_RENDER_FAILURES >= 1);
    // Fitted model must fit inside the view at the camera distance
    let half_view = CAMERA_Z * (CAMERA_FOVY_DEG.to_radians() * 0.5).tan();
    assert!(FIT_EXTENT * 0.5 + FIT_Y_BIAS.abs() < half_view);
    assert_ne!(DEFAULT_CANVAS_ID, DEFAULT_FALLBACK_ID);
}

#[test]
fn shader_node_array_matches_uniform_size() {
    let wgsl = include_str!("../shaders/scene.wgsl");
    let decl = format!("const MAX_NODES: u32 = {}u;", MAX_SCENE_NODES);
    assert!(wgsl.contains(&decl), "scene.wgsl must declare {decl}");
}

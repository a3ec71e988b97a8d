// Rig tuning constants shared by the character rig and its tests.

// Pointer pre-clamp
pub const POINTER_Y_LIMIT: f32 = 0.8; // vertical pointer range used for aiming

// Head aim (spring)
pub const HEAD_SCALE: [f32; 2] = [0.12, 0.22]; // [pitch from pointer y, yaw from pointer x]
pub const HEAD_MAX: [f32; 2] = [0.10, 0.18]; // radians
pub const HEAD_SPRING_FORCE: f32 = 0.08;
pub const HEAD_DAMPING: f32 = 0.92;

// Eye aim (lerp, no overshoot)
pub const EYE_SCALE: [f32; 2] = [0.10, 0.15];
pub const EYE_MAX: [f32; 2] = [0.08, 0.12];
pub const EYE_LERP: f32 = 0.12;

// Pupil coupling: offset = (eye yaw * x, eye pitch * y)
pub const PUPIL_FROM_EYE: [f32; 2] = [0.025, 0.015];
pub const PUPIL_LERP: f32 = 0.15;

// Idle breathing
pub const BREATH_RATE: f32 = 1.2; // radians of phase per second
pub const BREATH_OFFSET_AMPLITUDE: f32 = 0.008; // world units on y
pub const BREATH_SCALE_AMPLITUDE: f32 = 0.005; // fraction of base scale

// Generic follower defaults
pub const DEFAULT_SPRING_FORCE: f32 = 0.08;
pub const DEFAULT_DAMPING: f32 = 0.92;
pub const DEFAULT_MAX_VELOCITY: f32 = 0.1;

// Placement
pub const FIT_EXTENT: f32 = 2.2; // largest model dimension after fitting
pub const FIT_Y_BIAS: f32 = -0.2; // lowers the fitted model slightly

// Tessellation
pub const SPHERE_SEGMENTS: u32 = 24;
pub const SPHERE_RINGS: u32 = 16;
pub const ROUND_SEGMENTS: u32 = 24; // cylinders, capsules, torus rings
pub const MAX_SCENE_NODES: usize = 96; // size of the node matrix uniform array

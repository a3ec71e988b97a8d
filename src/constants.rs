// Host-side constants for mounting and drawing the scene.
// Rig tuning lives in `core::constants`.

// DOM
pub const DEFAULT_CANVAS_ID: &str = "developer-scene";
pub const DEFAULT_FALLBACK_ID: &str = "developer-scene-fallback";

// Camera (matches the hero canvas: eye at z=4, 45° vertical fov)
pub const CAMERA_Z: f32 = 4.0;
pub const CAMERA_FOVY_DEG: f32 = 45.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Lighting: direction toward the light, intensity
pub const KEY_LIGHT: [f32; 4] = [4.0, 6.0, 6.0, 0.9];
pub const FILL_LIGHT: [f32; 4] = [-3.0, 4.0, -2.0, 0.35];
pub const AMBIENT_LIGHT: [f32; 4] = [0.85, 0.9, 1.0, 0.45]; // slight blue tint

// Frame timing
pub const MAX_FRAME_DELTA_SEC: f32 = 0.1; // clamp after a stalled frame
pub const MAX_RENDER_FAILURES: u32 = 5; // consecutive failed frames before falling back

// Transparent clear so the page background shows through
pub const CLEAR_RGBA: [f64; 4] = [0.0, 0.0, 0.0, 0.0];

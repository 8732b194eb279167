// Shared tuning constants for both scenes. Change them together with the
// tests in `tests/`.

// Easing gains
pub const ROTATION_EASE_GAIN: f32 = 0.07;
pub const POSITION_EASE_GAIN: f32 = 0.03;

// Knot scene: pointer -> easing target scale
pub const KNOT_TARGET_SCALE_X: f32 = 0.0001;
pub const KNOT_TARGET_SCALE_Y: f32 = 0.001;
pub const KNOT_FRAME_THRESHOLD: u32 = 7;

// Knot scene: base rotation speeds (radians per second)
pub const TORUS_SPIN_Y: f32 = 0.3;
pub const TORUS_SPIN_Z: f32 = 0.3;
pub const SPHERE_SPIN_Y: f32 = -1.7;
pub const SPHERE_SPIN_X: f32 = 0.7;

// Knot scene: scroll offset -> position
pub const SCROLL_LIFT: f32 = 0.002; // y
pub const SCROLL_SPREAD: f32 = 0.005; // x and z

// Terrain scene
pub const TERRAIN_TARGET_SCALE: f32 = 0.001;
pub const TERRAIN_FRAME_THRESHOLD: u32 = 70;
pub const PLANE_SPIN_Z: f32 = 0.5;
pub const PLANE_BASE_TILT: f32 = -1.05;

// Displacement scale = base + pointer_y * gain, clamped
pub const DISPLACEMENT_BASE: f32 = 0.3;
pub const DISPLACEMENT_POINTER_GAIN: f32 = 0.0008;
pub const DISPLACEMENT_MIN: f32 = -0.3;
pub const DISPLACEMENT_MAX: f32 = 0.53;

// Cameras
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const KNOT_CAMERA_Z: f32 = 2.0;
pub const TERRAIN_CAMERA_Z: f32 = 3.0;

// Height map
pub const HEIGHTMAP_SIZE: u32 = 256;
pub const HEIGHTMAP_OCTAVES: u32 = 4;
pub const DEFAULT_HEIGHTMAP_SEED: u64 = 42;

// Renderer limits
pub const MAX_LIGHTS: usize = 4;

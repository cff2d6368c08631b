use glam::Vec3;

// Picking tuning constants and the default demo scene.

// Ray construction
pub const UNPROJECT_DEPTH: f32 = 0.5; // NDC depth inside both [0,1] and [-1,1] clip conventions
pub const DEGENERATE_RAY_EPSILON: f32 = 1e-6; // shortest camera->point span we will normalize

// Default camera, matching the demo page
pub const DEFAULT_FOVY_DEGREES: f32 = 45.0;
pub const DEFAULT_ZNEAR: f32 = 0.1;
pub const DEFAULT_ZFAR: f32 = 100.0;
pub const DEFAULT_EYE: Vec3 = Vec3::new(8.0, 18.0, 8.0);
pub const DEFAULT_LOOK_AT: Vec3 = Vec3::ZERO;

// Ball layout bounds
pub const OUTER_RADIUS: f32 = 8.0; // every ball center lies within this distance of the origin
pub const BALL_MIN_RADIUS: f32 = 0.5;
pub const BALL_MAX_RADIUS: f32 = 1.5;

// Fixed layout of ten balls as [x, y, z, radius]
pub const DEFAULT_BALLS: [[f32; 4]; 10] = [
    [0.0, 0.0, 0.0, 1.2],
    [4.5, 1.0, -2.0, 0.8],
    [-3.5, 2.5, 1.5, 1.0],
    [2.0, -4.0, 3.0, 0.6],
    [-5.0, -1.5, -3.5, 1.4],
    [1.5, 5.5, -1.0, 0.9],
    [-1.0, -3.0, -5.5, 0.7],
    [6.0, -2.0, 2.5, 1.1],
    [-2.5, 4.0, 5.0, 0.5],
    [3.0, 3.0, 4.5, 1.3],
];

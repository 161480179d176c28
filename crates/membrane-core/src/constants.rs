// Shared tuning constants for the membrane simulation and its shader.
//
// `SimulationConfig::default()` is built from these; the shader receives the
// noise values through the uniform block so both sides stay phase-locked.

// Mesh layout
pub const GRID_SEGMENTS: u32 = 200; // 201 x 201 control points
pub const MESH_VIEWPORT_SCALE: f32 = 1.4; // mesh extends past the visible viewport
pub const OFFSET_LIMIT: f32 = 2.0; // clamp for lateral offset and height
pub const LATERAL_SCALE: f32 = 0.25; // lateral offset -> local position units

// Pointer smoothing (cubic ease-out, duration shrinks with speed)
pub const EASE_BASE_DURATION_SEC: f32 = 0.3;
pub const EASE_MIN_DURATION_SEC: f32 = 0.05;
pub const EASE_SPEED_SENSITIVITY: f32 = 0.05;
pub const POINTER_VELOCITY_DECAY: f32 = 0.8; // per 60 Hz frame

// Wave emission
pub const WAVE_MIN_SPACING: f32 = 0.35;
pub const WAVE_LIFETIME_SEC: f32 = 8.0;
pub const WAVE_STRENGTH_BASE: f32 = 0.6;
pub const WAVE_STRENGTH_GAIN: f32 = 0.9;
pub const WAVE_SPEED_SCALE: f32 = 2.5;
pub const WAVE_SPEED_CAP: f32 = 2.0;

// Wave propagation
pub const WAVE_PROPAGATION_RATE: f32 = 0.5; // units per second, deliberately viscous
pub const WAVE_FRONT_WIDTH: f32 = 3.0;
pub const WAVE_DECAY_RATE: f32 = 0.15;
pub const WAVE_AMPLITUDE: f32 = 0.5;
pub const WAVE_INFLUENCE_EPSILON: f32 = 0.01;

// Ambient noise layers: spatial frequency, temporal speed (x, y), amplitude
pub const PULSE_NOISE_FREQ: f32 = 0.2;
pub const PULSE_NOISE_SPEED: [f32; 2] = [0.015, 0.018];
pub const PULSE_NOISE_AMPLITUDE: f32 = 0.15;
pub const ORGANIC_NOISE_FREQ: f32 = 0.4;
pub const ORGANIC_NOISE_SPEED: [f32; 2] = [0.01, 0.015];
pub const ORGANIC_NOISE_AMPLITUDE: f32 = 0.06;

// Pointer proximity (fraction of the larger viewport extent)
pub const PROXIMITY_RADIUS_FRACTION: f32 = 0.25;
pub const PROXIMITY_GAIN: f32 = 0.01;
pub const VISCOSITY_BASE: f32 = 0.4;
pub const VISCOSITY_SPAN: f32 = 0.3;

// Click impulse
pub const CLICK_STRENGTH: f32 = 0.085;
pub const CLICK_DURATION_SEC: f32 = 0.8;
pub const CLICK_DECAY_RATE: f32 = 2.5;
pub const CLICK_GAIN: f32 = 3.0;

// Lateral spring-damper and drag forcing
pub const SPRING_CONSTANT: f32 = 4.0;
pub const DAMPING: f32 = 0.88; // velocity multiplier per step
pub const DRAG_RADIUS_FRACTION: f32 = 0.45;
pub const DRAG_SPEED_GAIN: f32 = 1.2;
pub const DRAG_STRENGTH_CAP: f32 = 4.0;
pub const DRAG_ACCEL: f32 = 20.0;
pub const DRAG_MIN_SPEED: f32 = 0.01;

// Boundary push-back
pub const BOUNDARY_MARGIN: f32 = 0.2; // fraction of the half extent
pub const BOUNDARY_FORCE: f32 = 3.0;
pub const BOUNDARY_OFFSET_SHARE: f32 = 0.1; // part of the force applied directly to offset

// Shader pulse channel
pub const CLICK_SHADER_PULSE_STRENGTH: f32 = 1.6;
pub const SHADER_PULSE_SPEED: f32 = 0.9;
pub const SHADER_PULSE_WIDTH: f32 = 0.6;
pub const SHADER_REFRACTION_BLEND: f32 = 0.25;
pub const SHADER_REFRACTION_PROJECTION: f32 = 0.3;

// Camera
pub const CAMERA_HEIGHT: f32 = 10.0;
pub const CAMERA_DISTANCE: f32 = 6.0;
pub const CAMERA_FOVY_DEG: f32 = 60.0;
pub const CAMERA_SHAKE_GAIN: f32 = 0.003;
pub const CAMERA_SETTLE_PER_FRAME: f32 = 0.1; // lerp factor at 60 Hz

// Frame stepping
pub const REFERENCE_FRAME_RATE: f32 = 60.0;
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

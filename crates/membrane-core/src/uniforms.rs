//! Uniform block for the refraction shader and the pulse slot that feeds it.

use crate::camera::Camera;
use crate::config::SimulationConfig;
use crate::constants::{
    SHADER_PULSE_SPEED, SHADER_PULSE_WIDTH, SHADER_REFRACTION_BLEND, SHADER_REFRACTION_PROJECTION,
};
use glam::{Mat4, Vec2};

/// Pulse start value meaning "no pulse".
pub const NO_PULSE: f32 = -1.0;

/// Layout mirrors `MembraneUniforms` in `shaders/membrane.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ShaderUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    /// xyz = camera eye, w = elapsed time
    pub camera_pos_time: [f32; 4],
    /// xy = smoothed pointer, zw = pulse origin
    pub pointer_pulse: [f32; 4],
    /// start, strength, refraction blend, refraction projection
    pub pulse: [f32; 4],
    /// frequency, speed x, speed y, amplitude
    pub pulse_noise: [f32; 4],
    pub organic_noise: [f32; 4],
}

/// Pending pulse written by input events, consumed once per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PulseRequest {
    pub origin: Vec2,
    pub strength: f32,
}

/// The single live radial pulse seen by the shader. A new request
/// overwrites whatever was there.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PulseChannel {
    pub origin: Vec2,
    pub start: f32,
    pub strength: f32,
}

impl Default for PulseChannel {
    fn default() -> Self {
        Self {
            origin: Vec2::ZERO,
            start: NO_PULSE,
            strength: 0.0,
        }
    }
}

impl PulseChannel {
    pub fn fire(&mut self, request: PulseRequest, now: f32) {
        self.origin = request.origin;
        self.start = now;
        self.strength = request.strength;
    }

    pub fn is_active(&self) -> bool {
        self.start >= 0.0
    }

    /// CPU mirror of the shader's radial front: a gaussian ring expanding
    /// from `origin`.
    pub fn radial(&self, p: Vec2, now: f32) -> f32 {
        if !self.is_active() || now < self.start {
            return 0.0;
        }
        let front = (now - self.start) * SHADER_PULSE_SPEED;
        let k = (p.distance(self.origin) - front) / SHADER_PULSE_WIDTH;
        (-k * k * 4.0).exp() * self.strength
    }
}

/// Model transform of the membrane: the local XY plane laid flat, with local
/// +z (height) pointing up.
#[inline]
pub fn membrane_model() -> Mat4 {
    Mat4::from_rotation_x(-std::f32::consts::FRAC_PI_2)
}

impl ShaderUniforms {
    pub fn assemble(
        camera: &Camera,
        time: f32,
        pointer: Vec2,
        pulse: &PulseChannel,
        config: &SimulationConfig,
    ) -> Self {
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            model: membrane_model().to_cols_array_2d(),
            camera_pos_time: camera.eye.extend(time).to_array(),
            pointer_pulse: [pointer.x, pointer.y, pulse.origin.x, pulse.origin.y],
            pulse: [
                pulse.start,
                pulse.strength,
                SHADER_REFRACTION_BLEND,
                SHADER_REFRACTION_PROJECTION,
            ],
            pulse_noise: config.pulse_noise.packed(),
            organic_noise: config.organic_noise.packed(),
        }
    }

    pub fn time(&self) -> f32 {
        self.camera_pos_time[3]
    }
}

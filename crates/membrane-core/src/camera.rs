//! Camera description and the slow "heavy" settling toward a shake target.

use crate::constants::{
    CAMERA_DISTANCE, CAMERA_FOVY_DEG, CAMERA_HEIGHT, CAMERA_SETTLE_PER_FRAME, CAMERA_SHAKE_GAIN,
};
use crate::input::frame_decay;
use glam::{Mat4, Vec2, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: rest_eye(),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: 0.1,
            zfar: 100.0,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Distance from the eye to the look-at point.
    pub fn distance(&self) -> f32 {
        self.eye.distance(self.target)
    }
}

/// Pool view: high above the membrane, looking down at the origin.
#[inline]
pub fn rest_eye() -> Vec3 {
    Vec3::new(0.0, CAMERA_HEIGHT, CAMERA_DISTANCE)
}

/// Eases the camera eye toward a target that wobbles with pointer speed.
#[derive(Clone, Debug)]
pub struct CameraSettler {
    eye: Vec3,
}

impl Default for CameraSettler {
    fn default() -> Self {
        Self { eye: rest_eye() }
    }
}

impl CameraSettler {
    /// Target eye for the current pointer velocity and time. Heavy surfaces
    /// barely shake.
    pub fn target(pointer_velocity: Vec2, time: f32) -> Vec3 {
        let shake = pointer_velocity.length() * CAMERA_SHAKE_GAIN;
        let rest = rest_eye();
        Vec3::new(
            (time * 0.3).sin() * shake * 0.3,
            rest.y + (time * 0.2).cos() * shake * 0.3,
            rest.z,
        )
    }

    pub fn step(&mut self, pointer_velocity: Vec2, time: f32, dt: f32) -> Vec3 {
        let target = Self::target(pointer_velocity, time);
        let alpha = 1.0 - frame_decay(1.0 - CAMERA_SETTLE_PER_FRAME, dt);
        self.eye = self.eye.lerp(target, alpha);
        self.eye
    }

    pub fn eye(&self) -> Vec3 {
        self.eye
    }
}

// Shared fixtures for the membrane integration tests.

#![allow(dead_code)]

use glam::Vec2;
use membrane_core::{Membrane, NoiseLayer, SimulationConfig, Viewport};

pub const FRAME: f32 = 1.0 / 60.0;

/// 200x200 px canvas showing a 20x20 world.
pub fn test_viewport() -> Viewport {
    Viewport::new(200.0, 200.0, 20.0, 20.0)
}

/// Pixel position of a world point in [`test_viewport`].
pub fn px(world: Vec2) -> Vec2 {
    Vec2::new((world.x + 10.0) * 10.0, (10.0 - world.y) * 10.0)
}

/// Small grid with the ambient noise switched off.
pub fn quiet_config(segments: u32) -> SimulationConfig {
    SimulationConfig {
        segments: [segments, segments],
        pulse_noise: NoiseLayer::pulse().silent(),
        organic_noise: NoiseLayer::organic().silent(),
        ..SimulationConfig::default()
    }
}

pub fn quiet_membrane(segments: u32) -> Membrane {
    Membrane::new(quiet_config(segments), test_viewport()).expect("valid config")
}

pub fn run_frames(m: &mut Membrane, frames: usize) {
    for _ in 0..frames {
        m.update(FRAME);
    }
}

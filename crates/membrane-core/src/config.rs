//! Simulation configuration.
//!
//! All knobs default to the values in [`crate::constants`]. A configuration is
//! validated once, when the [`crate::Membrane`] is built; the per-frame code
//! assumes every divisor is non-zero and every constant finite.

use crate::constants::*;
use thiserror::Error;

/// Rejected configuration values. These are set-up mistakes, never runtime
/// conditions of the simulation itself.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid needs at least 1 segment per axis, got {0}x{1}")]
    GridTooSmall(u32, u32),
    #[error("mesh extent must be positive and finite, got {0} x {1}")]
    BadExtent(f32, f32),
    #[error("wave front width must be positive, got {0}")]
    ZeroWaveWidth(f32),
    #[error("boundary margin must lie in (0, 1), got {0}")]
    BoundaryMargin(f32),
    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("{name} must lie in [0, 1], got {value}")]
    OutOfUnitRange { name: &'static str, value: f32 },
    #[error("{0} is not finite")]
    NotFinite(&'static str),
}

/// Parameters of one noise layer, shared verbatim with the shader.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoiseLayer {
    pub frequency: f32,
    pub speed: [f32; 2],
    pub amplitude: f32,
}

impl NoiseLayer {
    pub const fn pulse() -> Self {
        Self {
            frequency: PULSE_NOISE_FREQ,
            speed: PULSE_NOISE_SPEED,
            amplitude: PULSE_NOISE_AMPLITUDE,
        }
    }

    pub const fn organic() -> Self {
        Self {
            frequency: ORGANIC_NOISE_FREQ,
            speed: ORGANIC_NOISE_SPEED,
            amplitude: ORGANIC_NOISE_AMPLITUDE,
        }
    }

    /// Same layer with its contribution switched off.
    pub const fn silent(self) -> Self {
        Self {
            amplitude: 0.0,
            ..self
        }
    }

    /// Packed as `[frequency, speed.x, speed.y, amplitude]` for the uniform block.
    pub fn packed(&self) -> [f32; 4] {
        [self.frequency, self.speed[0], self.speed[1], self.amplitude]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Grid segments along x and y; vertex count is `(sx + 1) * (sy + 1)`.
    pub segments: [u32; 2],
    /// Noise seed for the CPU-side OpenSimplex field.
    pub seed: u32,

    pub offset_limit: f32,
    pub lateral_scale: f32,

    pub ease_base_duration: f32,
    pub ease_min_duration: f32,
    pub ease_speed_sensitivity: f32,
    pub pointer_velocity_decay: f32,

    pub wave_min_spacing: f32,
    pub wave_lifetime: f32,
    pub wave_strength_base: f32,
    pub wave_strength_gain: f32,
    pub wave_speed_scale: f32,
    pub wave_speed_cap: f32,
    pub wave_propagation_rate: f32,
    pub wave_front_width: f32,
    pub wave_decay_rate: f32,
    pub wave_amplitude: f32,

    pub pulse_noise: NoiseLayer,
    pub organic_noise: NoiseLayer,

    pub proximity_radius_fraction: f32,
    pub proximity_gain: f32,

    pub click_strength: f32,
    pub click_duration: f32,
    pub click_decay_rate: f32,
    pub click_gain: f32,

    pub spring_constant: f32,
    pub damping: f32,
    pub drag_radius_fraction: f32,

    pub boundary_margin: f32,
    pub boundary_force: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            segments: [GRID_SEGMENTS, GRID_SEGMENTS],
            seed: 0x0B51_D1A4,
            offset_limit: OFFSET_LIMIT,
            lateral_scale: LATERAL_SCALE,
            ease_base_duration: EASE_BASE_DURATION_SEC,
            ease_min_duration: EASE_MIN_DURATION_SEC,
            ease_speed_sensitivity: EASE_SPEED_SENSITIVITY,
            pointer_velocity_decay: POINTER_VELOCITY_DECAY,
            wave_min_spacing: WAVE_MIN_SPACING,
            wave_lifetime: WAVE_LIFETIME_SEC,
            wave_strength_base: WAVE_STRENGTH_BASE,
            wave_strength_gain: WAVE_STRENGTH_GAIN,
            wave_speed_scale: WAVE_SPEED_SCALE,
            wave_speed_cap: WAVE_SPEED_CAP,
            wave_propagation_rate: WAVE_PROPAGATION_RATE,
            wave_front_width: WAVE_FRONT_WIDTH,
            wave_decay_rate: WAVE_DECAY_RATE,
            wave_amplitude: WAVE_AMPLITUDE,
            pulse_noise: NoiseLayer::pulse(),
            organic_noise: NoiseLayer::organic(),
            proximity_radius_fraction: PROXIMITY_RADIUS_FRACTION,
            proximity_gain: PROXIMITY_GAIN,
            click_strength: CLICK_STRENGTH,
            click_duration: CLICK_DURATION_SEC,
            click_decay_rate: CLICK_DECAY_RATE,
            click_gain: CLICK_GAIN,
            spring_constant: SPRING_CONSTANT,
            damping: DAMPING,
            drag_radius_fraction: DRAG_RADIUS_FRACTION,
            boundary_margin: BOUNDARY_MARGIN,
            boundary_force: BOUNDARY_FORCE,
        }
    }
}

impl SimulationConfig {
    /// Default configuration with a fresh noise seed.
    pub fn with_random_seed() -> Self {
        Self {
            seed: rand::random(),
            ..Self::default()
        }
    }

    /// Number of control points along x and y.
    pub fn grid_points(&self) -> (usize, usize) {
        (
            self.segments[0] as usize + 1,
            self.segments[1] as usize + 1,
        )
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let [sx, sy] = self.segments;
        if sx == 0 || sy == 0 {
            return Err(ConfigError::GridTooSmall(sx, sy));
        }
        let finite: [(&'static str, f32); 18] = [
            ("offset_limit", self.offset_limit),
            ("lateral_scale", self.lateral_scale),
            ("ease_speed_sensitivity", self.ease_speed_sensitivity),
            ("wave_speed_scale", self.wave_speed_scale),
            ("wave_speed_cap", self.wave_speed_cap),
            ("wave_strength_base", self.wave_strength_base),
            ("wave_strength_gain", self.wave_strength_gain),
            ("wave_decay_rate", self.wave_decay_rate),
            ("wave_amplitude", self.wave_amplitude),
            ("pulse_noise", self.pulse_noise.amplitude + self.pulse_noise.frequency),
            ("organic_noise", self.organic_noise.amplitude + self.organic_noise.frequency),
            ("pulse_noise_speed", self.pulse_noise.speed[0] + self.pulse_noise.speed[1]),
            ("organic_noise_speed", self.organic_noise.speed[0] + self.organic_noise.speed[1]),
            ("proximity_gain", self.proximity_gain),
            ("click_strength", self.click_strength),
            ("click_decay_rate", self.click_decay_rate),
            ("click_gain", self.click_gain),
            ("boundary_force", self.boundary_force),
        ];
        if let Some((name, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NotFinite(name));
        }
        if self.wave_front_width <= 0.0 || !self.wave_front_width.is_finite() {
            return Err(ConfigError::ZeroWaveWidth(self.wave_front_width));
        }
        if !(self.boundary_margin > 0.0 && self.boundary_margin < 1.0) {
            return Err(ConfigError::BoundaryMargin(self.boundary_margin));
        }
        let positive: [(&'static str, f32); 10] = [
            ("offset_limit", self.offset_limit),
            ("ease_min_duration", self.ease_min_duration),
            ("ease_base_duration", self.ease_base_duration),
            ("wave_min_spacing", self.wave_min_spacing),
            ("wave_lifetime", self.wave_lifetime),
            ("wave_propagation_rate", self.wave_propagation_rate),
            ("click_duration", self.click_duration),
            ("proximity_radius_fraction", self.proximity_radius_fraction),
            ("drag_radius_fraction", self.drag_radius_fraction),
            ("spring_constant", self.spring_constant),
        ];
        for (name, value) in positive {
            if value <= 0.0 || !value.is_finite() {
                return Err(ConfigError::NotPositive { name, value });
            }
        }
        for (name, value) in [
            ("damping", self.damping),
            ("pointer_velocity_decay", self.pointer_velocity_decay),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::OutOfUnitRange { name, value });
            }
        }
        Ok(())
    }
}

/// Checks mesh extents supplied by the host at construction time.
pub(crate) fn validate_extent(width: f32, height: f32) -> Result<(), ConfigError> {
    if width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::BadExtent(width, height))
    }
}

//! Per-vertex displacement field.
//!
//! Each frame every vertex gets a vertical `height` made of four additive
//! terms (travelling waves, two ambient noise layers, pointer proximity, click
//! impact) and a lateral `offset` integrated by a spring-damper driven by drag
//! motion. Both are sanitized and clamped before they leave the step.

use crate::boundary::BoundaryEnforcer;
use crate::config::{NoiseLayer, SimulationConfig};
use crate::constants::{
    DRAG_ACCEL, DRAG_MIN_SPEED, DRAG_SPEED_GAIN, DRAG_STRENGTH_CAP, VISCOSITY_BASE,
    VISCOSITY_SPAN, WAVE_INFLUENCE_EPSILON,
};
use crate::waves::WaveOrigin;
use glam::{Vec2, Vec3};
use noise::{NoiseFn, OpenSimplex};
use std::f32::consts::PI;

/// Simulation-owned state of one grid control point.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VertexRecord {
    pub rest: Vec3,
    pub offset: Vec2,
    pub velocity: Vec2,
    pub height: f32,
}

impl VertexRecord {
    pub fn at_rest(rest: Vec3) -> Self {
        Self {
            rest,
            ..Self::default()
        }
    }

    /// Displaced local position.
    #[inline]
    pub fn position(&self, lateral_scale: f32) -> Vec3 {
        self.rest + (self.offset * lateral_scale).extend(self.height)
    }
}

/// Short-lived localized impact armed by a pointer press. `origin` records
/// where the press landed; the impact itself tracks the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickImpulse {
    pub origin: Vec2,
    pub start_time: f32,
    pub strength: f32,
}

impl ClickImpulse {
    #[inline]
    pub fn age(&self, now: f32) -> f32 {
        now - self.start_time
    }
}

/// Smoothstep-based falloff: 1 at `n <= 0`, 0 at `n >= 1`.
#[inline]
pub fn smooth_falloff(n: f32) -> f32 {
    let n = n.clamp(0.0, 1.0);
    1.0 - n * n * (3.0 - 2.0 * n)
}

#[inline]
fn sanitize(v: f32, limit: f32) -> f32 {
    if v.is_finite() {
        v.clamp(-limit, limit)
    } else {
        0.0
    }
}

/// Radial wave profile shared by every origin.
#[derive(Clone, Copy, Debug)]
pub struct WaveShape {
    pub propagation_rate: f32,
    pub width: f32,
    pub decay_rate: f32,
    pub amplitude: f32,
}

impl WaveShape {
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            propagation_rate: config.wave_propagation_rate,
            width: config.wave_front_width,
            decay_rate: config.wave_decay_rate,
            amplitude: config.wave_amplitude,
        }
    }

    /// Zero-mean profile `sin(phase) * influence` at `distance` from an origin
    /// of the given age.
    #[inline]
    pub fn profile(&self, distance: f32, age: f32) -> f32 {
        self.front(distance - age * self.propagation_rate)
    }

    /// Profile at signed distance `ahead` from the wave front.
    #[inline]
    pub fn front(&self, ahead: f32) -> f32 {
        let influence = smooth_falloff(ahead.abs() / self.width);
        if influence > WAVE_INFLUENCE_EPSILON {
            (ahead / self.width * PI).sin() * influence
        } else {
            0.0
        }
    }

    /// Amplitude of an origin of `strength` after `age` seconds.
    #[inline]
    pub fn gain(&self, strength: f32, age: f32) -> f32 {
        self.amplitude * strength * (-age * self.decay_rate).exp()
    }
}

/// Frame inputs consumed by [`DisplacementField::step`].
#[derive(Clone, Copy, Debug)]
pub struct FieldInputs<'a> {
    pub now: f32,
    pub dt: f32,
    pub pointer: Vec2,
    pub pointer_velocity: Vec2,
    pub dragging: bool,
    pub waves: &'a [WaveOrigin],
    pub click: Option<&'a ClickImpulse>,
}

struct LiveWave {
    position: Vec2,
    radius: f32,
    gain: f32,
}

pub struct DisplacementField {
    vertices: Vec<VertexRecord>,
    boundary_forces: Vec<Vec2>,
    boundary: BoundaryEnforcer,
    noise: OpenSimplex,
    shape: WaveShape,
    pulse_noise: NoiseLayer,
    organic_noise: NoiseLayer,
    viewport_extent: f32,
    proximity_radius_fraction: f32,
    proximity_gain: f32,
    drag_radius_fraction: f32,
    click_duration: f32,
    click_decay_rate: f32,
    click_gain: f32,
    spring_constant: f32,
    damping: f32,
    offset_limit: f32,
    lateral_scale: f32,
    live_waves: Vec<LiveWave>,
}

impl DisplacementField {
    /// `mesh_size` is the full mesh extent; `viewport_extent` the larger of
    /// the visible world width and height, which sizes the pointer radii.
    pub fn new(
        config: &SimulationConfig,
        rest: &[Vec3],
        mesh_size: Vec2,
        viewport_extent: f32,
    ) -> Self {
        let boundary = BoundaryEnforcer::new(
            mesh_size * 0.5,
            config.boundary_margin,
            config.boundary_force,
        );
        let mut field = Self {
            vertices: Vec::new(),
            boundary_forces: Vec::new(),
            boundary,
            noise: OpenSimplex::new(config.seed),
            shape: WaveShape::from_config(config),
            pulse_noise: config.pulse_noise,
            organic_noise: config.organic_noise,
            viewport_extent,
            proximity_radius_fraction: config.proximity_radius_fraction,
            proximity_gain: config.proximity_gain,
            drag_radius_fraction: config.drag_radius_fraction,
            click_duration: config.click_duration,
            click_decay_rate: config.click_decay_rate,
            click_gain: config.click_gain,
            spring_constant: config.spring_constant,
            damping: config.damping,
            offset_limit: config.offset_limit,
            lateral_scale: config.lateral_scale,
            live_waves: Vec::new(),
        };
        field.rebuild(rest);
        field
    }

    /// Regenerates every record from rest positions.
    pub fn rebuild(&mut self, rest: &[Vec3]) {
        self.vertices = rest.iter().copied().map(VertexRecord::at_rest).collect();
        self.boundary_forces = rest
            .iter()
            .map(|r| self.boundary.rest_force(r.truncate()))
            .collect();
    }

    pub fn set_viewport_extent(&mut self, extent: f32) {
        if extent.is_finite() && extent > 0.0 {
            self.viewport_extent = extent;
        }
    }

    pub fn vertices(&self) -> &[VertexRecord] {
        &self.vertices
    }

    fn noise_layer(&self, layer: &NoiseLayer, p: Vec2, t: f32) -> f32 {
        if layer.amplitude == 0.0 {
            return 0.0;
        }
        let x = p.x * layer.frequency + t * layer.speed[0];
        let y = p.y * layer.frequency + t * layer.speed[1];
        self.noise.get([x as f64, y as f64]) as f32 * layer.amplitude
    }

    /// Ambient "breathing": pulse plus organic noise at `p` and time `t`.
    pub fn ambient_noise(&self, p: Vec2, t: f32) -> f32 {
        self.noise_layer(&self.pulse_noise, p, t) + self.noise_layer(&self.organic_noise, p, t)
    }

    fn proximity_radius(&self) -> f32 {
        (self.viewport_extent * self.proximity_radius_fraction).max(f32::EPSILON)
    }

    /// Smoothstep falloff of `p` around `center` over the proximity radius.
    #[inline]
    pub fn proximity_falloff(&self, p: Vec2, center: Vec2) -> f32 {
        smooth_falloff(p.distance(center) / self.proximity_radius())
    }

    /// Viscous pointer term: buildup is faster close to the pointer but
    /// stays heavily damped.
    #[inline]
    pub fn proximity_term(&self, p: Vec2, pointer: Vec2) -> f32 {
        let s = self.proximity_falloff(p, pointer);
        let viscosity = VISCOSITY_BASE + s * VISCOSITY_SPAN;
        s * self.proximity_gain * viscosity
    }

    /// Click impact at `p`, centred on the eased `pointer` so the impact
    /// follows a drag. Zero once the impulse is past its duration.
    #[inline]
    pub fn click_term(&self, click: &ClickImpulse, p: Vec2, pointer: Vec2, now: f32) -> f32 {
        let age = click.age(now);
        if !(0.0..self.click_duration).contains(&age) {
            return 0.0;
        }
        let decay = (-age * self.click_decay_rate).exp();
        click.strength * decay * self.proximity_falloff(p, pointer) * self.click_gain
    }

    pub fn click_expired(&self, click: &ClickImpulse, now: f32) -> bool {
        click.age(now) >= self.click_duration
    }

    /// One simulation step over every vertex. Cost is
    /// O(vertices x live waves) for the wave sum.
    pub fn step(&mut self, inputs: &FieldInputs<'_>) {
        let now = inputs.now;
        let dt = inputs.dt;

        self.live_waves.clear();
        for w in inputs.waves {
            let age = w.age(now);
            if age < 0.0 {
                continue;
            }
            self.live_waves.push(LiveWave {
                position: w.position,
                radius: age * self.shape.propagation_rate,
                gain: self.shape.gain(w.strength, age),
            });
        }

        let speed = inputs.pointer_velocity.length();
        let drag = if inputs.dragging && speed > DRAG_MIN_SPEED {
            let strength = (speed * DRAG_SPEED_GAIN).min(DRAG_STRENGTH_CAP);
            Some(inputs.pointer_velocity / speed * strength * dt * DRAG_ACCEL)
        } else {
            None
        };
        let drag_radius = (self.viewport_extent * self.drag_radius_fraction).max(f32::EPSILON);
        let click = inputs.click.filter(|c| !self.click_expired(c, now));
        let limit = self.offset_limit;

        for i in 0..self.vertices.len() {
            let rec = self.vertices[i];
            let p = rec.rest.truncate();

            let waves: f32 = self
                .live_waves
                .iter()
                .map(|w| w.gain * self.shape.front(p.distance(w.position) - w.radius))
                .sum();
            let mut height = waves + self.ambient_noise(p, now);
            height += self.proximity_term(p, inputs.pointer);
            if let Some(c) = click {
                height += self.click_term(c, p, inputs.pointer, now);
            }

            let mut velocity = rec.velocity;
            let mut offset = rec.offset;
            if let Some(push) = drag {
                let influence = (1.0 - p.distance(inputs.pointer) / drag_radius).max(0.0);
                if influence > WAVE_INFLUENCE_EPSILON {
                    velocity += push * influence;
                }
            }
            velocity -= offset * self.spring_constant * dt;
            velocity *= self.damping;
            self.boundary
                .apply(self.boundary_forces[i], &mut offset, &mut velocity, dt);
            offset += velocity * dt;

            if !offset.is_finite() || !velocity.is_finite() {
                offset = Vec2::ZERO;
                velocity = Vec2::ZERO;
            }
            let rec = &mut self.vertices[i];
            rec.offset = Vec2::new(sanitize(offset.x, limit), sanitize(offset.y, limit));
            rec.velocity = velocity;
            rec.height = sanitize(height, limit);
        }
    }

    /// Writes displaced positions into `out`. Returns `false` when the buffer
    /// does not match the vertex count, leaving it untouched.
    pub fn write_positions(&self, out: &mut [Vec3]) -> bool {
        if out.len() != self.vertices.len() {
            return false;
        }
        for (dst, rec) in out.iter_mut().zip(&self.vertices) {
            *dst = rec.position(self.lateral_scale);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falloff_endpoints() {
        assert_eq!(smooth_falloff(0.0), 1.0);
        assert_eq!(smooth_falloff(1.0), 0.0);
        assert_eq!(smooth_falloff(-3.0), 1.0);
        assert_eq!(smooth_falloff(7.0), 0.0);
        assert!((smooth_falloff(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn sanitize_replaces_non_finite() {
        assert_eq!(sanitize(f32::NAN, 2.0), 0.0);
        assert_eq!(sanitize(f32::INFINITY, 2.0), 0.0);
        assert_eq!(sanitize(5.0, 2.0), 2.0);
        assert_eq!(sanitize(-5.0, 2.0), -2.0);
    }

    #[test]
    fn profile_at_origin_is_finite() {
        let shape = WaveShape::from_config(&SimulationConfig::default());
        assert!(shape.profile(0.0, 0.0).is_finite());
        assert_eq!(shape.profile(0.0, 0.0), 0.0);
    }
}

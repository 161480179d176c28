use crate::config::SimulationConfig;
use glam::Vec2;

/// Source of a travelling radial displacement wave.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveOrigin {
    pub position: Vec2,
    pub birth_time: f32,
    pub strength: f32,
}

impl WaveOrigin {
    #[inline]
    pub fn age(&self, now: f32) -> f32 {
        now - self.birth_time
    }
}

/// Spawns wave origins along a drag path and prunes them by age.
#[derive(Clone, Debug)]
pub struct WaveEmitter {
    origins: Vec<WaveOrigin>,
    min_spacing: f32,
    lifetime: f32,
    strength_base: f32,
    strength_gain: f32,
    speed_scale: f32,
    speed_cap: f32,
}

impl WaveEmitter {
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            origins: Vec::new(),
            min_spacing: config.wave_min_spacing,
            lifetime: config.wave_lifetime,
            strength_base: config.wave_strength_base,
            strength_gain: config.wave_strength_gain,
            speed_scale: config.wave_speed_scale,
            speed_cap: config.wave_speed_cap,
        }
    }

    /// Strength for a drag moving `drag_speed` world units per event.
    /// Monotonic in speed and capped.
    pub fn strength_for(&self, drag_speed: f32) -> f32 {
        let speed = (drag_speed.max(0.0) * self.speed_scale).min(self.speed_cap);
        self.strength_base + speed * self.strength_gain
    }

    /// One frame of emission. Returns the origin spawned this frame, if any.
    pub fn update(
        &mut self,
        now: f32,
        pointer: Vec2,
        dragging: bool,
        drag_speed: f32,
    ) -> Option<WaveOrigin> {
        let mut spawned = None;
        if dragging {
            let far_enough = self
                .origins
                .last()
                .map_or(true, |last| last.position.distance(pointer) > self.min_spacing);
            if far_enough {
                let origin = WaveOrigin {
                    position: pointer,
                    birth_time: now,
                    strength: self.strength_for(drag_speed),
                };
                log::debug!(
                    "[waves] spawn at ({:.2},{:.2}) strength {:.2}",
                    pointer.x,
                    pointer.y,
                    origin.strength
                );
                self.origins.push(origin);
                spawned = Some(origin);
            }
        }
        self.prune(now);
        spawned
    }

    pub fn prune(&mut self, now: f32) {
        let lifetime = self.lifetime;
        self.origins.retain(|o| o.age(now) < lifetime);
    }

    pub fn origins(&self) -> &[WaveOrigin] {
        &self.origins
    }
}

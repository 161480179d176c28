use crate::config::SimulationConfig;
use glam::Vec2;

/// Logical viewport: pixel size of the canvas plus the world-space extents
/// visible through the camera at the membrane plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width_px: f32,
    pub height_px: f32,
    pub world_width: f32,
    pub world_height: f32,
}

impl Viewport {
    pub fn new(width_px: f32, height_px: f32, world_width: f32, world_height: f32) -> Self {
        Self {
            width_px,
            height_px,
            world_width,
            world_height,
        }
    }

    /// World extents seen by a perspective camera `distance` away from the plane.
    pub fn from_perspective(
        width_px: f32,
        height_px: f32,
        fovy_radians: f32,
        distance: f32,
    ) -> Self {
        let world_height = 2.0 * distance * (fovy_radians * 0.5).tan();
        let aspect = width_px / height_px.max(1.0);
        Self::new(width_px, height_px, world_height * aspect, world_height)
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.world_width, self.world_height) * 0.5
    }

    #[inline]
    pub fn max_extent(&self) -> f32 {
        self.world_width.max(self.world_height)
    }

    /// Screen pixels (origin top-left, y down) to normalized device coordinates.
    #[inline]
    pub fn screen_to_ndc(&self, screen: Vec2) -> Vec2 {
        if self.width_px <= 0.0 || self.height_px <= 0.0 {
            return Vec2::ZERO;
        }
        Vec2::new(
            (screen.x / self.width_px) * 2.0 - 1.0,
            1.0 - (screen.y / self.height_px) * 2.0,
        )
    }

    /// Screen pixels to membrane-plane world coordinates.
    #[inline]
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        self.screen_to_ndc(screen) * self.half_extents()
    }
}

/// Cubic ease-out toward a target over a fixed duration, restarted from the
/// current value whenever a new target arrives.
#[derive(Clone, Copy, Debug)]
pub struct Ease {
    from: Vec2,
    to: Vec2,
    elapsed: f32,
    duration: f32,
}

impl Ease {
    pub fn settled(at: Vec2) -> Self {
        Self {
            from: at,
            to: at,
            elapsed: 0.0,
            duration: 0.0,
        }
    }

    pub fn value(&self) -> Vec2 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let u = (self.elapsed / self.duration).clamp(0.0, 1.0);
        self.from.lerp(self.to, ease_out_cubic(u))
    }

    pub fn retarget(&mut self, to: Vec2, duration: f32) {
        self.from = self.value();
        self.to = to;
        self.elapsed = 0.0;
        self.duration = duration.max(0.0);
    }

    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[inline]
pub fn ease_out_cubic(u: f32) -> f32 {
    let inv = 1.0 - u;
    1.0 - inv * inv * inv
}

/// Pointer state in membrane space. Event handlers call the `pointer_*`
/// methods; the frame pass calls [`PointerTracker::step`].
#[derive(Clone, Debug)]
pub struct PointerTracker {
    raw_target: Vec2,
    last_target: Vec2,
    velocity: Vec2,
    drag_speed: f32,
    dragging: bool,
    ease: Ease,
    base_duration: f32,
    min_duration: f32,
    sensitivity: f32,
    velocity_decay: f32,
}

impl PointerTracker {
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            raw_target: Vec2::ZERO,
            last_target: Vec2::ZERO,
            velocity: Vec2::ZERO,
            drag_speed: 0.0,
            dragging: false,
            ease: Ease::settled(Vec2::ZERO),
            base_duration: config.ease_base_duration,
            min_duration: config.ease_min_duration,
            sensitivity: config.ease_speed_sensitivity,
            velocity_decay: config.pointer_velocity_decay,
        }
    }

    /// Easing window for a pointer moving `speed` world units per event.
    pub fn ease_duration(&self, speed: f32) -> f32 {
        (self.base_duration - speed * self.sensitivity).max(self.min_duration)
    }

    pub fn pointer_move(&mut self, world: Vec2) {
        self.raw_target = world;
        self.velocity = self.raw_target - self.last_target;
        let speed = self.velocity.length();
        self.drag_speed = speed;
        self.last_target = self.raw_target;
        let duration = self.ease_duration(speed);
        self.ease.retarget(self.raw_target, duration);
    }

    pub fn pointer_down(&mut self, world: Vec2) {
        self.dragging = true;
        self.raw_target = world;
        self.last_target = world;
        self.velocity = Vec2::ZERO;
        self.drag_speed = 0.0;
        let duration = self.ease_duration(0.0);
        self.ease.retarget(world, duration);
    }

    pub fn pointer_up(&mut self) {
        self.dragging = false;
    }

    /// Advances the ease and decays the event velocity.
    pub fn step(&mut self, dt: f32) {
        self.ease.advance(dt);
        self.velocity *= frame_decay(self.velocity_decay, dt);
    }

    pub fn smoothed(&self) -> Vec2 {
        self.ease.value()
    }

    pub fn raw_target(&self) -> Vec2 {
        self.raw_target
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Speed of the last move event, used for wave strength.
    pub fn drag_speed(&self) -> f32 {
        self.drag_speed
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_settled(&self) -> bool {
        self.ease.is_done()
    }
}

/// Per-frame multiplier `factor` rescaled to an arbitrary `dt`.
#[inline]
pub(crate) fn frame_decay(factor: f32, dt: f32) -> f32 {
    factor.powf(dt * crate::constants::REFERENCE_FRAME_RATE)
}

//! Edge push-back for vertices resting near the mesh perimeter.
//!
//! The push is directed inward and scales with how far the rest position sits
//! inside the edge band `(1 - margin, 1]` of the normalized half extent. It only
//! acts on an axis while the lateral offset on that axis points outward, so it
//! cancels outward drift without leaving a standing offset at rest.
//!
//! Order within a step is fixed: force, then velocity, then offset.

use glam::Vec2;

#[derive(Clone, Debug)]
pub struct BoundaryEnforcer {
    half_extent: Vec2,
    margin: f32,
    strength: f32,
    offset_share: f32,
}

impl BoundaryEnforcer {
    pub fn new(half_extent: Vec2, margin: f32, strength: f32) -> Self {
        Self {
            half_extent,
            margin,
            strength,
            offset_share: crate::constants::BOUNDARY_OFFSET_SHARE,
        }
    }

    /// Inward force for a vertex resting at `rest`; zero away from the edges.
    pub fn rest_force(&self, rest: Vec2) -> Vec2 {
        Vec2::new(
            self.axis_force(rest.x, self.half_extent.x),
            self.axis_force(rest.y, self.half_extent.y),
        )
    }

    fn axis_force(&self, coord: f32, half: f32) -> f32 {
        if half <= 0.0 {
            return 0.0;
        }
        let edge = coord.abs() / half;
        let inner = 1.0 - self.margin;
        if edge <= inner {
            return 0.0;
        }
        let penetration = (edge - inner) / self.margin;
        -coord.signum() * penetration * self.strength
    }

    /// Applies a precomputed rest force to one vertex.
    #[inline]
    pub fn apply(&self, force: Vec2, offset: &mut Vec2, velocity: &mut Vec2, dt: f32) {
        if force == Vec2::ZERO {
            return;
        }
        let gate = Vec2::new(
            outward_gate(force.x, offset.x),
            outward_gate(force.y, offset.y),
        );
        let f = force * gate;
        *velocity += f * dt;
        *offset += f * dt * self.offset_share;
    }
}

/// 1 while `offset` points against `force` (outward), else 0.
#[inline]
fn outward_gate(force: f32, offset: f32) -> f32 {
    if force != 0.0 && offset * force < 0.0 {
        1.0
    } else {
        0.0
    }
}

//! Viewport wall collisions for point masses.

use crate::config::SimConfig;
use crate::float::Float;
use crate::point_mass::PointMass;
use crate::vec::{Vec, Vec2};

/// Axis-aligned walls at `[radius, extent - radius]` on both axes.
///
/// A hit on one axis negates the *other* axis' velocity component before the
/// whole velocity is damped by `bounce`. The reflection then comes from
/// rewriting `prev_pos`, so the next tick sees the bounced velocity.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds<F: Float> {
    pub width: F,
    pub height: F,
    pub radius: F,
    pub bounce: F,
}

impl<F: Float> Bounds<F> {
    pub fn new(width: F, height: F, radius: F, bounce: F) -> Self {
        Bounds { width, height, radius, bounce }
    }

    pub fn from_config(config: &SimConfig<F>) -> Self {
        Self::new(config.viewport_width, config.viewport_height, config.radius, config.bounce)
    }

    /// Clamp `point` into the walls using the velocity it just moved with.
    ///
    /// Returns true if either axis collided.
    pub fn collide(&self, point: &mut PointMass<F>, velocity: Vec2<F>) -> bool {
        let mut velocity = velocity;
        let mut collided = false;

        if let Some(x) = Self::clamp_axis(point.pos.x, self.width, self.radius) {
            velocity.y = -velocity.y;
            velocity = velocity.scale(self.bounce);
            point.pos.x = x;
            collided = true;
        }

        if let Some(y) = Self::clamp_axis(point.pos.y, self.height, self.radius) {
            velocity.x = -velocity.x;
            velocity = velocity.scale(self.bounce);
            point.pos.y = y;
            collided = true;
        }

        if collided {
            point.prev_pos = point.pos + velocity;
        }
        collided
    }

    /// The bound `coord` has crossed, if any.
    fn clamp_axis(coord: F, extent: F, radius: F) -> Option<F> {
        let upper = extent - radius;
        if coord < radius {
            Some(radius)
        } else if coord > upper {
            Some(upper)
        } else {
            None
        }
    }
}

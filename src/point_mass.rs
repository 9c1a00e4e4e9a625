//! Verlet point masses with implicit velocity.

use crate::float::Float;
use crate::vec::{Vec, Vec2};

/// A Verlet point mass. Velocity is never stored; it is `pos - prev_pos`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointMass<F: Float> {
    pub pos: Vec2<F>,
    pub prev_pos: Vec2<F>,
    pub pinned: bool,
    /// Carried for callers; relaxation treats every free point mass alike.
    pub mass: F,
}

impl<F: Float> PointMass<F> {
    pub fn new(pos: Vec2<F>, mass: F) -> Self {
        PointMass {
            pos,
            prev_pos: pos,
            pinned: false,
            mass,
        }
    }

    /// A point mass that starts out moving by `velocity` per tick.
    pub fn with_velocity(pos: Vec2<F>, velocity: Vec2<F>, mass: F) -> Self {
        PointMass {
            pos,
            prev_pos: pos - velocity,
            pinned: false,
            mass,
        }
    }

    pub fn pinned(pos: Vec2<F>) -> Self {
        PointMass {
            pos,
            prev_pos: pos,
            pinned: true,
            mass: F::one(),
        }
    }

    /// Implicit per-tick velocity.
    pub fn velocity(&self) -> Vec2<F> {
        self.pos - self.prev_pos
    }

    /// Advance one tick and return the damped velocity used for the move.
    ///
    /// Gravity is a per-tick displacement added to `y` after the move, so it
    /// shows up in the next tick's implicit velocity. Pinned point masses are
    /// left alone and report zero velocity.
    pub fn integrate(&mut self, drag: F, gravity: F) -> Vec2<F> {
        if self.pinned {
            return Vec2::zero();
        }
        let velocity = self.velocity().scale(drag);
        self.prev_pos = self.pos;
        self.pos = self.pos + velocity;
        self.pos.y = self.pos.y + gravity;
        velocity
    }

    pub fn pin(&mut self) {
        self.pinned = true;
        self.prev_pos = self.pos;
    }

    pub fn unpin(&mut self) {
        self.pinned = false;
    }

    /// Translate by `offset` unless pinned.
    pub fn nudge(&mut self, offset: Vec2<F>) {
        if !self.pinned {
            self.pos = self.pos + offset;
        }
    }
}

//! Distance links between point masses and their relaxation step.

use crate::float::Float;
use crate::point_mass::PointMass;
use crate::vec::{Vec, Vec2};

/// How a link reacts when its length departs from rest.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Material {
    /// Resists stretching and compression alike; behaves like a rod.
    #[default]
    Rigid,
    /// Resists stretching only; goes slack when compressed.
    Elastic,
}

/// Outcome of relaxing a single link once.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Relaxation<F: Float> {
    /// Endpoints were moved toward rest length.
    Adjusted,
    /// Elastic link shorter than rest; nothing moved.
    Slack,
    /// Endpoints coincide, so there is no direction to correct along.
    Degenerate,
    /// Stretch exceeded the tear length. The caller must drop the link.
    Torn { stretch: F },
}

/// A distance constraint between two point masses, addressed by index.
///
/// Links never own their endpoints; indices resolve through the point slice
/// of the cloth that created them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Link<F: Float> {
    pub start: usize,
    pub end: usize,
    pub rest_length: F,
    pub material: Material,
}

impl<F: Float> Link<F> {
    /// Rigid link whose rest length is the current distance between endpoints.
    pub fn new(start: usize, end: usize, points: &[PointMass<F>]) -> Self {
        Self::with_material(start, end, points, Material::Rigid)
    }

    pub fn with_material(
        start: usize,
        end: usize,
        points: &[PointMass<F>],
        material: Material,
    ) -> Self {
        let rest_length = points[start].pos.distance(points[end].pos);
        Link { start, end, rest_length, material }
    }

    /// `start - end`.
    pub fn diff(&self, points: &[PointMass<F>]) -> Vec2<F> {
        points[self.start].pos - points[self.end].pos
    }

    pub fn current_length(&self, points: &[PointMass<F>]) -> F {
        self.diff(points).length()
    }

    pub fn midpoint(&self, points: &[PointMass<F>]) -> Vec2<F> {
        points[self.start].pos.midpoint(points[self.end].pos)
    }

    /// One Gauss-Seidel correction toward rest length.
    ///
    /// Each free endpoint moves half of the error. A pinned endpoint stays put
    /// and the other end still only moves its half, and neighbouring links
    /// disturb each other, so accuracy comes from repeated iterations.
    pub fn relax(&self, points: &mut [PointMass<F>], tear_length: F) -> Relaxation<F> {
        let diff = self.diff(points);
        let current = diff.length();
        let stretch = current - self.rest_length;

        if stretch > tear_length {
            return Relaxation::Torn { stretch };
        }
        if self.material == Material::Elastic && stretch < F::zero() {
            return Relaxation::Slack;
        }
        if current.is_near_zero(F::from_f32(1e-10)) {
            return Relaxation::Degenerate;
        }

        let adjust = stretch / current * F::half();
        let offset = diff.scale(adjust);
        points[self.start].nudge(-offset);
        points[self.end].nudge(offset);
        Relaxation::Adjusted
    }
}

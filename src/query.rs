//! Nearest-link lookup for interactive cutting.

use crate::float::Float;
use crate::link::Link;
use crate::point_mass::PointMass;
use crate::vec::{Vec, Vec2};

/// The link whose midpoint lies closest to a query point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NearestLink<F: Float> {
    pub index: usize,
    pub distance: F,
}

/// Linear scan for the link midpoint nearest to `point`.
///
/// Ties keep the earliest link. Returns `None` when there are no links.
pub fn nearest_link<F: Float>(
    links: &[Link<F>],
    points: &[PointMass<F>],
    point: Vec2<F>,
) -> Option<NearestLink<F>> {
    let mut best: Option<(usize, F)> = None;
    for (index, link) in links.iter().enumerate() {
        let distance_sq = link.midpoint(points).distance_sq(point);
        match best {
            Some((_, best_sq)) if distance_sq >= best_sq => {}
            _ => best = Some((index, distance_sq)),
        }
    }
    best.map(|(index, distance_sq)| NearestLink { index, distance: distance_sq.sqrt() })
}

/// Like [`nearest_link`], but only if it lies strictly within `radius`.
pub fn link_within<F: Float>(
    links: &[Link<F>],
    points: &[PointMass<F>],
    point: Vec2<F>,
    radius: F,
) -> Option<NearestLink<F>> {
    nearest_link(links, points, point).filter(|nearest| nearest.distance < radius)
}

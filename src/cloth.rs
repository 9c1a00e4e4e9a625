//! Cloth topology: point masses plus the links between them.

use crate::config::ClothConfig;
use crate::error::ClothError;
use crate::float::Float;
use crate::link::Link;
use crate::point_mass::PointMass;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Owns every point mass and the active links between them.
///
/// Point masses are never removed, so link indices stay valid for the life of
/// the cloth. Link order is insertion order and is observable: relaxation
/// walks links front to back.
#[derive(Clone, Debug, Default)]
pub struct Cloth<F: Float> {
    points: AllocVec<PointMass<F>>,
    links: AllocVec<Link<F>>,
    width: usize,
    height: usize,
}

impl<F: Float> Cloth<F> {
    /// Empty cloth with no grid shape; populate with `add_point`/`add_link`.
    pub fn new() -> Self {
        Cloth {
            points: AllocVec::new(),
            links: AllocVec::new(),
            width: 0,
            height: 0,
        }
    }

    /// Build a `width` x `height` grid hanging from its top row.
    ///
    /// Point masses are stored column-major: cell `(x, y)` sits at
    /// `origin + (x * spacing, y * spacing)` with index `x * height + y`.
    /// Each cell links up to `(x, y - 1)` and then left to `(x - 1, y)`, giving
    /// `width * (height - 1) + (width - 1) * height` links. Row `y = 0` is pinned.
    pub fn build(config: &ClothConfig<F>) -> Result<Self, ClothError> {
        config.validate()?;
        let (width, height) = (config.width, config.height);
        let mut points = AllocVec::with_capacity(width * height);
        let mut links = AllocVec::with_capacity(width * (height - 1) + (width - 1) * height);

        for x in 0..width {
            for y in 0..height {
                let pos = Vec2::new(
                    config.origin.x + F::from_usize(x) * config.spacing,
                    config.origin.y + F::from_usize(y) * config.spacing,
                );
                let index = points.len();
                let mut point = PointMass::new(pos, config.point_mass);
                if y == 0 {
                    point.pin();
                }
                points.push(point);

                // Up
                if y > 0 {
                    links.push(Link::with_material(index - 1, index, &points, config.material));
                }
                // Left
                if x > 0 {
                    links.push(Link::with_material(index - height, index, &points, config.material));
                }
            }
        }

        log::debug!(
            "built {}x{} cloth: {} point masses, {} links",
            width,
            height,
            points.len(),
            links.len()
        );
        Ok(Cloth { points, links, width, height })
    }

    pub fn add_point(&mut self, point: PointMass<F>) -> usize {
        let idx = self.points.len();
        self.points.push(point);
        idx
    }

    /// Append a link; both endpoints must already exist.
    pub fn add_link(&mut self, link: Link<F>) -> Result<usize, ClothError> {
        let count = self.points.len();
        for index in [link.start, link.end] {
            if index >= count {
                return Err(ClothError::PointOutOfBounds { index, count });
            }
        }
        let idx = self.links.len();
        self.links.push(link);
        Ok(idx)
    }

    /// Remove one link, keeping the order of the rest.
    pub fn remove_link(&mut self, index: usize) -> Result<Link<F>, ClothError> {
        let count = self.links.len();
        if index >= count {
            return Err(ClothError::LinkOutOfBounds { index, count });
        }
        Ok(self.links.remove(index))
    }

    /// Remove a link found by scanning the current list.
    ///
    /// # Panics
    /// If `index` is out of bounds, which means the caller's bookkeeping is
    /// broken.
    pub(crate) fn take_link(&mut self, index: usize) -> Link<F> {
        self.links.remove(index)
    }

    /// Drop every link whose index appears in `doomed` (ascending), in one
    /// order-preserving pass.
    pub(crate) fn compact_links(&mut self, doomed: &[usize]) {
        if doomed.is_empty() {
            return;
        }
        let mut doomed = doomed.iter().copied().peekable();
        let mut index = 0;
        self.links.retain(|_| {
            let keep = doomed.peek() != Some(&index);
            if !keep {
                doomed.next();
            }
            index += 1;
            keep
        });
    }

    /// Mutable point masses alongside the read-only link list.
    pub(crate) fn split_mut(&mut self) -> (&mut [PointMass<F>], &[Link<F>]) {
        (&mut self.points, &self.links)
    }

    /// Flat index of grid cell `(x, y)`, or `None` outside the grid.
    pub fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| x * self.height + y)
    }

    pub fn pin(&mut self, index: usize) {
        self.points[index].pin();
    }

    pub fn unpin(&mut self, index: usize) {
        self.points[index].unpin();
    }

    pub fn points(&self) -> &[PointMass<F>] {
        &self.points
    }

    pub fn points_mut(&mut self) -> &mut [PointMass<F>] {
        &mut self.points
    }

    pub fn links(&self) -> &[Link<F>] {
        &self.links
    }

    pub fn point(&self, index: usize) -> &PointMass<F> {
        &self.points[index]
    }

    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.points.iter().map(|p| p.pos).collect()
    }

    /// Start and end positions of every active link, in link order.
    pub fn segments(&self) -> impl Iterator<Item = (Vec2<F>, Vec2<F>)> + '_ {
        self.links
            .iter()
            .map(|l| (self.points[l.start].pos, self.points[l.end].pos))
    }

    pub fn width(&self) -> usize { self.width }
    pub fn height(&self) -> usize { self.height }
    pub fn point_count(&self) -> usize { self.points.len() }
    pub fn link_count(&self) -> usize { self.links.len() }
}

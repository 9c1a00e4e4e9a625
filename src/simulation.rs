//! Fixed-rate cloth stepping: integrate, collide, relax with tearing, cut.

use crate::bounds::Bounds;
use crate::cloth::Cloth;
use crate::config::{ClothConfig, SimConfig};
use crate::error::ClothError;
use crate::float::Float;
use crate::link::{Link, Relaxation};
use crate::observer::StepObserver;
use crate::query::link_within;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Pointer state sampled once per tick by the host.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TickInput<F: Float> {
    /// Cursor in simulation (screen) coordinates.
    pub cursor: Vec2<F>,
    /// True while the cut button is held.
    pub cut: bool,
}

impl<F: Float> TickInput<F> {
    /// No cut this tick.
    pub fn idle() -> Self {
        TickInput { cursor: Vec2::default(), cut: false }
    }

    /// Cut the link nearest to `cursor`, if close enough.
    pub fn cut_at(cursor: Vec2<F>) -> Self {
        TickInput { cursor, cut: true }
    }
}

/// A cloth plus the parameters that drive it.
///
/// The simulation has exclusive write access to its cloth during `step`;
/// renderers read through [`Simulation::cloth`] between ticks.
pub struct Simulation<F: Float> {
    cloth: Cloth<F>,
    config: SimConfig<F>,
    bounds: Bounds<F>,
    torn: AllocVec<usize>,
}

impl<F: Float> Simulation<F> {
    pub fn new(cloth: Cloth<F>, config: SimConfig<F>) -> Result<Self, ClothError> {
        config.validate()?;
        let bounds = Bounds::from_config(&config);
        Ok(Simulation { cloth, config, bounds, torn: AllocVec::new() })
    }

    /// Build a grid cloth and wrap it.
    pub fn from_config(cloth: &ClothConfig<F>, config: SimConfig<F>) -> Result<Self, ClothError> {
        Self::new(Cloth::build(cloth)?, config)
    }

    /// Advance one tick.
    ///
    /// Every free point mass is integrated and collided before any link is
    /// relaxed. Relaxation then runs `iterations` full passes, and a cut (if
    /// requested) is applied last.
    pub fn step<O: StepObserver>(&mut self, input: &TickInput<F>, observer: &mut O) {
        self.integrate();
        observer.on_integrate();

        for i in 0..self.config.iterations {
            self.relax_pass(observer);
            observer.on_relax_iteration(i);
        }

        if input.cut {
            self.cut_at(input.cursor, observer);
        }

        log::trace!(
            "tick complete: {} links active",
            self.cloth.link_count()
        );
        observer.on_step_complete();
    }

    fn integrate(&mut self) {
        let (drag, gravity) = (self.config.drag, self.config.gravity);
        for p in self.cloth.points_mut() {
            if p.pinned {
                continue;
            }
            let velocity = p.integrate(drag, gravity);
            self.bounds.collide(p, velocity);
        }
    }

    /// One pass over the links in order. Links that tear are skipped for the
    /// rest of the pass and compacted out once it ends.
    fn relax_pass<O: StepObserver>(&mut self, observer: &mut O) {
        let tear_length = self.config.tear_length;
        self.torn.clear();

        let (points, links) = self.cloth.split_mut();
        for (index, link) in links.iter().enumerate() {
            if let Relaxation::Torn { stretch } = link.relax(points, tear_length) {
                log::debug!(
                    "link {} ({} -> {}) tore at stretch {}",
                    index,
                    link.start,
                    link.end,
                    stretch
                );
                self.torn.push(index);
            }
        }

        for &index in &self.torn {
            observer.on_tear(index);
        }
        self.cloth.compact_links(&self.torn);
    }

    /// Remove the link whose midpoint is nearest to `point`, if it lies
    /// within the cut radius.
    pub fn cut_at<O: StepObserver>(&mut self, point: Vec2<F>, observer: &mut O) -> Option<Link<F>> {
        let nearest = link_within(
            self.cloth.links(),
            self.cloth.points(),
            point,
            self.config.cut_radius,
        )?;
        log::debug!("cut link {} at distance {}", nearest.index, nearest.distance);
        observer.on_cut(nearest.index);
        Some(self.cloth.take_link(nearest.index))
    }

    pub fn cloth(&self) -> &Cloth<F> {
        &self.cloth
    }

    pub fn cloth_mut(&mut self) -> &mut Cloth<F> {
        &mut self.cloth
    }

    pub fn config(&self) -> &SimConfig<F> {
        &self.config
    }

    pub fn into_cloth(self) -> Cloth<F> {
        self.cloth
    }
}

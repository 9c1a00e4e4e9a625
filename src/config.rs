//! Configuration types for the cloth and the per-tick solver.

use crate::error::ClothError;
use crate::float::Float;
use crate::link::Material;
use crate::vec::Vec2;

/// Solver and world parameters, fixed at startup.
///
/// All quantities are per tick: the model assumes one fixed-rate tick per
/// rendered frame, so nothing is scaled by elapsed time.
///
/// # Builder Pattern
/// ```
/// use tearcloth::config::SimConfig;
///
/// let config: SimConfig<f32> = SimConfig::new()
///     .with_viewport(800.0, 600.0)
///     .with_iterations(4)
///     .with_gravity(0.3)
///     .with_tear_length(40.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig<F: Float> {
    /// Viewport width; right wall for collisions. Default: 1200.
    pub viewport_width: F,
    /// Viewport height; floor for collisions. Default: 800.
    pub viewport_height: F,
    /// Point-mass collision radius against the walls. Default: 1.
    pub radius: F,
    /// Velocity damping factor in (0, 1]. 1.0 = no damping. Default: 0.99.
    pub drag: F,
    /// Downward displacement added each tick. Default: 0.5.
    pub gravity: F,
    /// Fraction of velocity kept after a wall hit, in [0, 1]. Default: 0.3.
    pub bounce: F,
    /// Relaxation passes over every link per tick. Default: 1.
    pub iterations: usize,
    /// Cursor must be closer than this to a link midpoint to cut it. Default: 8.
    pub cut_radius: F,
    /// Stretch beyond rest length at which a link tears. Default: 68.
    pub tear_length: F,
}

impl<F: Float> SimConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SimConfig {
            viewport_width: F::from_f32(1200.0),
            viewport_height: F::from_f32(800.0),
            radius: F::one(),
            drag: F::from_f32(0.99),
            gravity: F::half(),
            bounce: F::from_f32(0.3),
            iterations: 1,
            cut_radius: F::from_f32(8.0),
            tear_length: F::from_f32(68.0),
        }
    }

    pub fn with_viewport(mut self, width: F, height: F) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }

    pub fn with_radius(mut self, radius: F) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_drag(mut self, drag: F) -> Self {
        self.drag = drag;
        self
    }

    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_bounce(mut self, bounce: F) -> Self {
        self.bounce = bounce;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_cut_radius(mut self, cut_radius: F) -> Self {
        self.cut_radius = cut_radius;
        self
    }

    pub fn with_tear_length(mut self, tear_length: F) -> Self {
        self.tear_length = tear_length;
        self
    }

    /// Reject parameter sets the solver cannot run with.
    pub fn validate(&self) -> Result<(), ClothError> {
        if self.iterations == 0 {
            return Err(ClothError::InvalidIterations);
        }
        if !(self.drag > F::zero() && self.drag <= F::one()) {
            return Err(ClothError::InvalidDrag);
        }
        if !(self.bounce >= F::zero() && self.bounce <= F::one()) {
            return Err(ClothError::InvalidBounce);
        }
        let min_extent = self.radius * F::two();
        if !(self.viewport_width > min_extent && self.viewport_height > min_extent) {
            return Err(ClothError::InvalidViewport);
        }
        Ok(())
    }
}

impl<F: Float> Default for SimConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Parameters for building a rectangular cloth grid.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClothConfig<F: Float> {
    /// Point masses per row.
    pub width: usize,
    /// Point masses per column.
    pub height: usize,
    pub spacing: F,
    /// Position of the top-left point mass.
    pub origin: Vec2<F>,
    /// Material of every grid edge. Default: elastic.
    pub material: Material,
    pub point_mass: F,
}

impl<F: Float> ClothConfig<F> {
    pub fn new(width: usize, height: usize, spacing: F, origin: Vec2<F>) -> Self {
        ClothConfig {
            width,
            height,
            spacing,
            origin,
            material: Material::Elastic,
            point_mass: F::one(),
        }
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn with_point_mass(mut self, mass: F) -> Self {
        self.point_mass = mass;
        self
    }

    pub fn validate(&self) -> Result<(), ClothError> {
        if self.width == 0 || self.height == 0 {
            return Err(ClothError::InvalidGridDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.spacing > F::zero() && self.spacing.is_finite()) {
            return Err(ClothError::InvalidSpacing);
        }
        Ok(())
    }
}

impl<F: Float> Default for ClothConfig<F> {
    fn default() -> Self {
        Self::new(105, 20, F::from_f32(11.0), Vec2::new(F::from_f32(8.0), F::from_f32(8.0)))
    }
}

//! Error types for cloth construction and topology edits.

/// Errors that can occur while building or editing a cloth.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClothError {
    /// Grid width and height must both be at least 1.
    #[error("cloth grid must be at least 1x1 (got {width}x{height})")]
    InvalidGridDimensions { width: usize, height: usize },
    /// Grid spacing must be positive and finite.
    #[error("grid spacing must be positive and finite")]
    InvalidSpacing,
    /// At least one relaxation iteration is required per tick.
    #[error("relaxation iteration count must be at least 1")]
    InvalidIterations,
    /// Drag must be in (0, 1].
    #[error("drag must be in (0, 1]")]
    InvalidDrag,
    /// Bounce must be in [0, 1].
    #[error("bounce must be in [0, 1]")]
    InvalidBounce,
    /// Viewport must leave room for a point mass inside its collision radius.
    #[error("viewport must be larger than twice the collision radius")]
    InvalidViewport,
    /// A link refers to a point mass that does not exist.
    #[error("point index {index} out of bounds (count: {count})")]
    PointOutOfBounds { index: usize, count: usize },
    /// Link index is out of bounds.
    #[error("link index {index} out of bounds (count: {count})")]
    LinkOutOfBounds { index: usize, count: usize },
}

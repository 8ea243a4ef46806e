use thiserror::Error;

/// Top-level error type for polygeom.
#[derive(Debug, Error)]
pub enum PolygeomError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),
}

/// Errors caused by malformed coordinate input.
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("coordinate sequences differ in length: {xs} x-values, {ys} y-values")]
    LengthMismatch { xs: usize, ys: usize },

    #[error("a polygon needs at least 3 points, got {0}")]
    TooFewPoints(usize),

    #[error("coordinate of point {index} is not finite")]
    NonFiniteCoordinate { index: usize },

    #[error("query point ({x}, {y}) is not finite")]
    NonFiniteQueryPoint { x: f64, y: f64 },
}

/// Errors related to geometric computations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("the unbounded face of the arrangement has no hole")]
    NoHole,

    #[error("outer boundary collapses to {0} vertices and encloses no area")]
    DegenerateBoundary(usize),

    #[error("outer boundary cannot be cut open at pinch vertex {0}")]
    UnresolvedPinch(String),

    #[error("exact value cannot be represented as f64: {0}")]
    InexactConversion(String),

    #[error("orientation value {0} is not one of -1, 0, 1")]
    UnclassifiedOrientation(i32),
}

/// Errors related to the arrangement's topology.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(&'static str),

    #[error("boundary cycle does not close")]
    OpenCycle,
}

/// Convenience type alias for results using [`PolygeomError`].
pub type Result<T> = std::result::Result<T, PolygeomError>;

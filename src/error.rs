use thiserror::Error;

/// Top-level error type for meshtools.
#[derive(Debug, Error)]
pub enum MeshtoolsError {
    #[error(transparent)]
    Curve(#[from] CurveError),

    #[error(transparent)]
    Boundary(#[from] BoundaryError),

    #[error(transparent)]
    Mesh(#[from] MeshError),
}

/// Errors raised while generating or composing curves.
#[derive(Debug, Error)]
pub enum CurveError {
    #[error("invalid parameter {parameter} = {value}")]
    InvalidParameter { parameter: &'static str, value: f64 },

    #[error("curve needs at least {required} points, got {actual}")]
    TooFewPoints { required: usize, actual: usize },
}

/// Errors raised while sorting boundaries or looking up nodes.
#[derive(Debug, Error)]
pub enum BoundaryError {
    #[error("node {node} is out of range for {len} points")]
    NodeOutOfRange { node: usize, len: usize },

    #[error("no nodes to search")]
    EmptyNodeSet,

    #[error("expected {expected} distance constraints, got {actual}")]
    ConstraintLengthMismatch { expected: usize, actual: usize },

    #[error("invalid coordinates: {0}")]
    InvalidCoordinates(String),
}

/// Errors raised while building a triangle mesh.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("mesh needs at least 3 points, got {0}")]
    TooFewPoints(usize),

    #[error("segment {segment} references point {point}, but only {len} points exist")]
    PointOutOfRange {
        segment: usize,
        point: usize,
        len: usize,
    },

    #[error("segment {0} starts and ends at the same point")]
    DegenerateSegment(usize),

    #[error("point {point} duplicates point {original}")]
    DuplicatePoint { point: usize, original: usize },

    #[error("segment {0} intersects a previously inserted segment")]
    IntersectingSegments(usize),

    #[error("triangulation insert failed: {0}")]
    Insertion(String),

    #[error("invalid mesh parameter {parameter} = {value}")]
    InvalidParameter { parameter: &'static str, value: f64 },
}

/// Convenience type alias for results using [`MeshtoolsError`].
pub type Result<T> = std::result::Result<T, MeshtoolsError>;

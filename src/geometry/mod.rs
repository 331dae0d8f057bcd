pub mod curve;
pub mod sampling;
pub mod segment;

pub use curve::Curve;
pub use sampling::Sampling;
pub use segment::Segment;

mod closest;
mod connect;
mod sort;

pub use closest::{find_closest_node, ClosestNode, DistanceConstraint, NodeIndex};
pub use connect::ConnectBoundary;
pub use sort::{find_next_segment, sort_segments, SortedSegments};

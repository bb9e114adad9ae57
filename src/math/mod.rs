pub mod interval;
pub mod points;

pub use interval::{is_between, Bounds};
pub use points::{distance, points_around, points_equal, sort_by_distance};

/// 2D point type.
///
/// Coordinates are compared exactly; no tolerance is applied anywhere in
/// the classifiers.
pub type Point2 = nalgebra::Point2<f64>;

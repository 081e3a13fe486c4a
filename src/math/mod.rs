pub mod angle;
pub mod bounds;
pub mod distance_2d;

pub use bounds::Bounds;

/// 2D point type (pixel or planar coordinates).
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

pub mod error;
pub mod geodesy;
pub mod geometry;
pub mod math;
pub mod polyline;

pub use error::{MapgeomError, Result};

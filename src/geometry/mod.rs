pub mod sector;

pub use sector::{PixelSector, Sector, SectorHandles, SectorOptions};

use crate::math::{Bounds, Point2};

/// Shapes that can be turned into a closed ring of vertices for drawing.
pub trait Outline {
    /// Ring vertex type (geographic or pixel).
    type Vertex;

    /// Returns the ordered vertices of the closed outline.
    fn outline(&self) -> Vec<Self::Vertex>;
}

/// Shapes a rendering surface can hit-test in pixel space.
pub trait HitTest {
    /// Axis-aligned pixel extent, including any click tolerance.
    fn pixel_bounds(&self) -> Bounds;

    /// Returns whether the pixel `p` falls on the shape.
    fn contains_point(&self, p: &Point2) -> bool;
}

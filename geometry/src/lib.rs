//! Plane geometry of the acquisition: points on sampling curves, their
//! rotation about the origin, and the indicator functions of the shapes being
//! imaged.

mod point;
mod shape;

pub use point::{Point, Rotation};
pub use shape::{Shape, Ellipse, Rectangle, ShapeError};

/// Coordinates are normalized to the radius of the acquisition circle, so
/// these are plain floats rather than unit-carrying quantities.
pub type Length = f64;
pub type Angle  = f64;
pub type Weight = f64;

use crate::{Angle, Length, Weight};

/// A point on a sampling curve.
///
/// `weight` is the arc-length element of the curve at this point: it scales
/// the contribution of the point to the line integral along the curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: Length,
    pub y: Length,
    pub weight: Weight,
}

impl Point {
    pub fn new(x: Length, y: Length, weight: Weight) -> Self { Self { x, y, weight } }

    /// Rotate anticlockwise about the origin by `theta`. The weight is a
    /// property of the curve, not of the frame, so it is carried over as is.
    #[inline]
    pub fn rotate(&self, theta: Angle) -> Self { Rotation::new(theta).apply(self) }

    /// Distance from the origin
    pub fn norm(&self) -> Length { self.x.hypot(self.y) }
}

/// Rotation about the origin with its sine and cosine evaluated once, for
/// rotating many points by the same angle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation {
    sin: f64,
    cos: f64,
}

impl Rotation {
    pub fn new(theta: Angle) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self { sin, cos }
    }

    #[inline]
    pub fn apply(&self, p: &Point) -> Point {
        let Self { sin, cos } = *self;
        Point {
            x: cos * p.x - sin * p.y,
            y: sin * p.x + cos * p.y,
            weight: p.weight,
        }
    }
}

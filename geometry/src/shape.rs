//! The closed set of shapes which can be imaged, each characterized by its
//! indicator function.

use crate::Length;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("ellipse radii must be positive, got x-radius {x_radius} and y-radius {y_radius}")]
    NonPositiveRadius { x_radius: Length, y_radius: Length },
    #[error("rectangle requires min < max on both axes, got [{min_x}, {max_x}] x [{min_y}, {max_y}]")]
    EmptyRectangle { min_x: Length, max_x: Length, min_y: Length, max_y: Length },
    #[error("shape parameters must be finite")]
    NotFinite,
}

/// Axis-aligned ellipse
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipse {
    pub center_x: Length,
    pub center_y: Length,
    pub x_radius: Length,
    pub y_radius: Length,
}

/// Axis-aligned rectangle, closed on all sides
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    pub min_x: Length,
    pub max_x: Length,
    pub min_y: Length,
    pub max_y: Length,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Ellipse(Ellipse),
    Rectangle(Rectangle),
}

impl Ellipse {
    #[inline]
    pub fn contains(&self, x: Length, y: Length) -> bool {
        let u = (x - self.center_x) / self.x_radius;
        let v = (y - self.center_y) / self.y_radius;
        u.powi(2) + v.powi(2) <= 1.0
    }
}

impl Rectangle {
    #[inline]
    pub fn contains(&self, x: Length, y: Length) -> bool {
        self.min_x <= x && x <= self.max_x &&
        self.min_y <= y && y <= self.max_y
    }
}

impl Shape {

    pub fn ellipse(
        (center_x, center_y): (Length, Length),
        (x_radius, y_radius): (Length, Length),
    ) -> Result<Self, ShapeError> {
        if ![center_x, center_y, x_radius, y_radius].iter().all(|v| v.is_finite()) {
            return Err(ShapeError::NotFinite)
        }
        if x_radius <= 0.0 || y_radius <= 0.0 {
            return Err(ShapeError::NonPositiveRadius { x_radius, y_radius })
        }
        Ok(Self::Ellipse(Ellipse { center_x, center_y, x_radius, y_radius }))
    }

    /// An ellipse with equal radii
    pub fn circle(center: (Length, Length), radius: Length) -> Result<Self, ShapeError> {
        Self::ellipse(center, (radius, radius))
    }

    pub fn rectangle(
        (min_x, max_x): (Length, Length),
        (min_y, max_y): (Length, Length),
    ) -> Result<Self, ShapeError> {
        if ![min_x, max_x, min_y, max_y].iter().all(|v| v.is_finite()) {
            return Err(ShapeError::NotFinite)
        }
        if min_x >= max_x || min_y >= max_y {
            return Err(ShapeError::EmptyRectangle { min_x, max_x, min_y, max_y })
        }
        Ok(Self::Rectangle(Rectangle { min_x, max_x, min_y, max_y }))
    }

    /// 1 inside the shape (boundary included), 0 outside
    #[inline]
    pub fn indicator(&self, x: Length, y: Length) -> f64 {
        let inside = match self {
            Shape::Ellipse  (e) => e.contains(x, y),
            Shape::Rectangle(r) => r.contains(x, y),
        };
        if inside { 1.0 } else { 0.0 }
    }
}

use core::fmt;
impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Shape::Ellipse(Ellipse { center_x, center_y, x_radius, y_radius }) =>
                write!(f, "Ellipse: center ({center_x}, {center_y}), x-radius {x_radius}, y-radius {y_radius}"),
            Shape::Rectangle(Rectangle { min_x, max_x, min_y, max_y }) =>
                write!(f, "Rectangle: [{min_x}, {max_x}] x [{min_y}, {max_y}]"),
        }
    }
}

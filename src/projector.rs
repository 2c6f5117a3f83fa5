//! Forward projection: the line integral of a shape's indicator function
//! along one rotated sampling curve.

use geometry::{Point, Rotation, Shape};
use crate::{Angle, quadrature::composite_rule};

/// Integrate `shape`'s indicator, weighted by arc length, along the sampling
/// curve `points` rotated by `theta`.
///
/// Only the first `num_phi` points are used: the last point of a curve
/// repeats its first (at `phi = 2π`) and is never part of the sum.
pub fn project(shape: &Shape, points: &[Point], num_phi: usize, del_phi: Angle, theta: Angle) -> f64 {
    debug_assert!(points.len() >= num_phi);
    let rotation = Rotation::new(theta);
    composite_rule(num_phi, del_phi, |i| {
        let p = rotation.apply(&points[i]);
        shape.indicator(p.x, p.y) * p.weight
    })
}

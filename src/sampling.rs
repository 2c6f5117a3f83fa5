//! Discretization of the acquisition.
//!
//! The sampling curves are ellipses whose foci are the origin and the point
//! `(1, 0)` on the unit circle: the ellipse labelled `t` is the locus of
//! points whose distances to the two foci add up to `t`. Rotating the whole
//! family by `theta` moves the second focus to `(cos theta, sin theta)`.

use log::debug;

use geometry::Point;
use crate::{Angle, Length, TWOPI, Error, Result};

/// Smallest radius label: the degenerate ellipse, which is the segment
/// between the foci.
pub const T_MIN: Length = 1.0;

/// Extent of the radius labels above `T_MIN`
pub const T_RANGE: Length = 2.0;

/// Angles, radius labels, sub-angles and the points of every sampling curve.
///
/// Each sequence starts at its origin and grows by repeated addition of its
/// step, so `thetas` and `phis` contain both `0` and (up to rounding) `2π`.
#[derive(Clone, Debug)]
pub struct SamplingGrid {
    thetas: Vec<Angle>,
    del_theta: Angle,
    ts: Vec<Length>,
    del_t: Length,
    phis: Vec<Angle>,
    del_phi: Angle,
    curves: Vec<Vec<Point>>,
}

impl SamplingGrid {

    /// All counts must be positive; this is not checked here (see
    /// [`crate::Resolution::new`]).
    pub fn new(num_theta: usize, num_t: usize, num_phi: usize) -> Result<Self> {
        let del_theta = TWOPI   / num_theta as f64;
        let del_t     = T_RANGE / num_t     as f64;
        let del_phi   = TWOPI   / num_phi   as f64;

        let thetas = uniform_sequence(0.0  , del_theta, num_theta);
        let ts     = uniform_sequence(T_MIN, del_t    , num_t    );
        let phis   = uniform_sequence(0.0  , del_phi  , num_phi  );

        let curves = ts.iter()
            .map(|&t| sampling_curve(t, &phis))
            .collect::<Result<Vec<_>>>()?;

        debug!("Sampling grid: {} angles, {} curves of {} points",
               thetas.len(), curves.len(), phis.len());

        Ok(Self { thetas, del_theta, ts, del_t, phis, del_phi, curves })
    }

    pub fn thetas   (&self) -> &[Angle]  { &self.thetas }
    pub fn ts       (&self) -> &[Length] { &self.ts }
    pub fn phis     (&self) -> &[Angle]  { &self.phis }
    pub fn del_theta(&self) -> Angle     { self.del_theta }
    pub fn del_t    (&self) -> Length    { self.del_t }
    pub fn del_phi  (&self) -> Angle     { self.del_phi }

    /// Number of sub-angle intervals on each curve
    pub fn num_phi(&self) -> usize { self.phis.len() - 1 }

    /// Points of the sampling curve with radius label `ts()[i]`
    pub fn curve(&self, i: usize) -> &[Point] { &self.curves[i] }

    pub fn curves(&self) -> impl ExactSizeIterator<Item = (Length, &[Point])> {
        self.ts.iter().copied().zip(self.curves.iter().map(Vec::as_slice))
    }
}

/// `start`, followed by `count` values each one `step` larger than the last
pub fn uniform_sequence(start: f64, step: f64, count: usize) -> Vec<f64> {
    let mut values = Vec::with_capacity(count + 1);
    let mut value = start;
    values.push(value);
    for _ in 0..count {
        value += step;
        values.push(value);
    }
    values
}

/// Points of the sampling ellipse labelled `t`, one per sub-angle.
///
/// The ellipse has centre `(0.5, 0)`, semi-major axis `t/2` and semi-minor
/// axis `sqrt((t/2)² - 1/4)`. Each point carries the arc-length element
/// `|d(x,y)/d(phi)|` as its weight. Labels below `T_MIN` do not describe an
/// ellipse and are rejected.
pub fn sampling_curve(t: Length, phis: &[Angle]) -> Result<Vec<Point>> {
    let half_t = t / 2.0;
    phis.iter().map(|&phi| {
        let (sin, cos) = phi.sin_cos();
        let semi_minor_squared = half_t.powi(2) - 0.25;
        let weight_squared     = half_t.powi(2) - cos.powi(2) * 0.25;
        for argument in [semi_minor_squared, weight_squared] {
            if !(argument >= 0.0) {
                return Err(Error::Domain { t, phi, argument })
            }
        }
        let x = 0.5 + half_t * cos;
        let y = sin * semi_minor_squared.sqrt();
        Ok(Point::new(x, y, weight_squared.sqrt()))
    }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use proptest::prelude::*;
    use float_eq::assert_float_eq;
    #[allow(unused)] use pretty_assertions::{assert_eq, assert_ne};

    fn strictly_increasing(v: &[f64]) -> bool { v.windows(2).all(|w| w[0] < w[1]) }

    #[rstest(/**/ num_theta, num_t, num_phi,
             case(        1,     1,       1),
             case(        8,    20,      20),
             case(      120,   600,    1000),
    )]
    fn sequence_lengths_and_ranges(num_theta: usize, num_t: usize, num_phi: usize) {
        let grid = SamplingGrid::new(num_theta, num_t, num_phi).unwrap();

        assert_eq!(grid.thetas().len(), num_theta + 1);
        assert_eq!(grid.ts    ().len(), num_t     + 1);
        assert_eq!(grid.phis  ().len(), num_phi   + 1);
        assert_eq!(grid.num_phi(), num_phi);

        for v in [grid.thetas(), grid.ts(), grid.phis()] {
            assert!(strictly_increasing(v));
        }

        assert_eq!(grid.thetas()[0], 0.0);
        assert_eq!(grid.ts    ()[0], 1.0);
        assert_eq!(grid.phis  ()[0], 0.0);
        assert_float_eq!(*grid.thetas().last().unwrap(), TWOPI, abs <= 1e-9);
        assert_float_eq!(*grid.ts    ().last().unwrap(), 3.0  , abs <= 1e-9);
        assert_float_eq!(*grid.phis  ().last().unwrap(), TWOPI, abs <= 1e-9);

        assert_float_eq!(grid.del_t(), 2.0 / num_t as f64, ulps <= 1);
        assert_eq!(grid.curves().len(), num_t + 1);
        for (_, curve) in grid.curves() {
            assert_eq!(curve.len(), num_phi + 1);
        }
    }

    #[test]
    fn sequence_is_built_by_repeated_addition() {
        // 0.1 is not representable: ten additions do not give 1.0 exactly
        let v = uniform_sequence(0.0, 0.1, 10);
        assert_eq!(v.len(), 11);
        assert_eq!(v[10], (0..10).fold(0.0, |acc, _| acc + 0.1));
        assert_ne!(v[10], 1.0);
    }

    #[test]
    fn degenerate_curve_is_segment_between_foci() {
        let grid = SamplingGrid::new(4, 10, 16).unwrap();
        for p in grid.curve(0) {
            assert_eq!(p.y, 0.0);
            assert!((-1e-12..=1.0 + 1e-12).contains(&p.x));
        }
    }

    #[test]
    fn radius_below_degenerate_ellipse_is_a_domain_error() {
        let phis = uniform_sequence(0.0, TWOPI / 8.0, 8);
        let result = sampling_curve(0.5, &phis);
        match result {
            Err(Error::Domain { t, phi, argument }) => {
                assert_eq!(t, 0.5);
                assert_eq!(phi, 0.0);
                assert!(argument < 0.0);
            }
            other => panic!("expected domain error, got {other:?}"),
        }
    }

    proptest! {
        #[test]
        fn curve_points_have_focal_distance_sum_t(
            t   in 1.0..(3.0 as Length),
            phi in 0.0..TWOPI,
        ) {
            let p = sampling_curve(t, &[phi]).unwrap()[0];
            let to_origin = p.x.hypot(p.y);
            let to_other  = (p.x - 1.0).hypot(p.y);
            assert_float_eq!(to_origin + to_other, t, abs <= 1e-9);
        }

        #[test]
        fn weight_is_arc_length_element(
            t   in 1.0..(3.0 as Length),
            phi in 0.0..TWOPI,
        ) {
            let a = t / 2.0;
            let b = (a * a - 0.25).sqrt();
            let dx = -a * phi.sin();
            let dy =  b * phi.cos();
            let p = sampling_curve(t, &[phi]).unwrap()[0];
            assert!(p.weight >= 0.0);
            assert_float_eq!(p.weight, dx.hypot(dy), abs <= 1e-9);
        }
    }
}

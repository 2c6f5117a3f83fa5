//! The simulated measurements: one projection per (angle, radius label), and
//! its second derivative with respect to the radius label.

use log::{debug, info};

#[cfg(not(feature = "serial"))]
use rayon::prelude::*;

use geometry::Shape;
use crate::{
    Angle, Length,
    derivative::estimate_derivatives,
    projector::project,
    reconstruction::{OnStep, Step},
    sampling::SamplingGrid,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectionSample {
    pub theta: Angle,
    pub t: Length,
    pub value: f64,
    /// Second derivative of `value` with respect to `t`. Stays zero for the
    /// last two radius labels of each angle.
    pub derivative: f64,
}

impl ProjectionSample {
    pub fn new(theta: Angle, t: Length, value: f64) -> Self {
        Self { theta, t, value, derivative: 0.0 }
    }
}

/// Projection samples, one row per acquisition angle, each row ordered by
/// radius label.
#[derive(Clone, Debug)]
pub struct Sinogram {
    rows: Vec<Vec<ProjectionSample>>,
    del_t: Length,
}

impl Sinogram {

    /// Project `shape` along every sampling curve of `grid` at every angle.
    /// Angles are independent of each other, and are processed in parallel
    /// unless the `serial` feature is enabled.
    pub fn acquire(shape: &Shape, grid: &SamplingGrid, on_step: Option<OnStep>) -> Self {
        info!("Acquiring {} angles x {} radii", grid.thetas().len(), grid.ts().len());

        #[cfg    (feature = "serial") ] let thetas = grid.thetas().    iter();
        #[cfg(not(feature = "serial"))] let thetas = grid.thetas().par_iter();

        let rows = thetas
            .map(|&theta| {
                let row = acquire_angle(shape, grid, theta);
                if let Some(report) = on_step { report(Step::Projected { theta }) }
                row
            })
            .collect();

        Self { rows, del_t: grid.del_t() }
    }

    /// Wrap projection data that was obtained elsewhere. Every row must be
    /// ordered by `t`, with consecutive labels `del_t` apart.
    pub fn from_rows(rows: Vec<Vec<ProjectionSample>>, del_t: Length) -> Self {
        Self { rows, del_t }
    }

    pub fn rows(&self) -> &[Vec<ProjectionSample>] { &self.rows }

    /// All samples measured at the `i`th angle
    pub fn row(&self, i: usize) -> &[ProjectionSample] { &self.rows[i] }

    pub fn del_t(&self) -> Length { self.del_t }

    pub fn samples(&self) -> impl Iterator<Item = &ProjectionSample> {
        self.rows.iter().flatten()
    }
}

/// One row of the sinogram: projections at all radius labels for a single
/// angle, with their derivatives.
pub fn acquire_angle(shape: &Shape, grid: &SamplingGrid, theta: Angle) -> Vec<ProjectionSample> {
    let (num_phi, del_phi) = (grid.num_phi(), grid.del_phi());
    let mut row = grid.curves()
        .map(|(t, points)| ProjectionSample::new(theta, t, project(shape, points, num_phi, del_phi, theta)))
        .collect::<Vec<_>>();
    estimate_derivatives(&mut row, grid.del_t());
    debug!("theta = {theta:.4}: peak projection {:.4}",
           row.iter().map(|s| s.value).fold(0.0, f64::max));
    row
}

//! Back projection of the second-derivative data onto the pixels of the FOV.
//!
//! The sampling ellipse through pixel `(x, y)` at angle `theta` is the one
//! whose radius label is the sum of the pixel's distances to the two foci,
//! the origin and `(cos theta, sin theta)`. The derivative at that label is
//! interpolated from the sinogram and integrated over all angles.

use log::info;

#[cfg(not(feature = "serial"))]
use rayon::prelude::*;

use crate::{
    Angle, Error, Index2, Intensity, Length, Result,
    fov::FOV,
    image::ReconstructionGrid,
    quadrature::try_composite_rule,
    reconstruction::{OnStep, Step},
    sampling::{SamplingGrid, T_MIN},
    sinogram::{ProjectionSample, Sinogram},
};

/// Radius label of the sampling ellipse through `(x, y)` at angle `theta`
#[inline]
pub fn radius_label(x: Length, y: Length, theta: Angle) -> Length {
    let (sin, cos) = theta.sin_cos();
    (x.powi(2) + y.powi(2)).sqrt() + ((x - cos).powi(2) + (y - sin).powi(2)).sqrt()
}

/// The bucket of a radius label lies outside the range in which both
/// bracketing samples carry a derivative. `index` is the truncated bucket
/// as computed, so a NaN label shows up as a NaN bucket.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutOfRange {
    pub index: f64,
    pub max_index: i64,
}

/// Linear interpolation of the derivative at radius label `t`, between the
/// samples at the bucket containing `t` and the next one.
///
/// `samples` is one sinogram row. Its last two samples carry no derivative,
/// so the highest usable bucket is `samples.len() - 4`.
pub fn interpolate_derivative(
    samples: &[ProjectionSample],
    del_t  : Length,
    t      : Length,
) -> std::result::Result<f64, OutOfRange> {
    let max_index = samples.len() as i64 - 4;
    // Truncation toward zero, not floor: on the segment between the foci
    // rounding can push a label just below T_MIN, and it must still land in
    // the first bucket
    let index = ((t - T_MIN) / del_t).trunc();
    if !(0.0..=max_index as f64).contains(&index) {
        return Err(OutOfRange { index, max_index })
    }
    let index = index as usize;
    let (lo, hi) = (&samples[index], &samples[index + 1]);
    let slope = (hi.derivative - lo.derivative) / del_t;
    let intercept = lo.derivative - slope * lo.t;
    Ok(slope * t + intercept)
}

pub struct BackProjector<'a> {
    sinogram : &'a Sinogram,
    thetas   : &'a [Angle],
    del_theta: Angle,
}

impl<'a> BackProjector<'a> {

    /// `sinogram` must have one row per angle of `grid`
    pub fn new(sinogram: &'a Sinogram, grid: &'a SamplingGrid) -> Self {
        debug_assert_eq!(sinogram.rows().len(), grid.thetas().len());
        Self { sinogram, thetas: grid.thetas(), del_theta: grid.del_theta() }
    }

    /// Reconstructed intensity of pixel `pixel` located at `(x, y)`: the
    /// integral over all angles (both ends of the angle sequence included) of
    /// the interpolated derivative.
    pub fn pixel(&self, pixel: Index2, (x, y): (Length, Length)) -> Result<Intensity> {
        let del_t = self.sinogram.del_t();
        try_composite_rule(self.thetas.len(), self.del_theta, |k| {
            let theta = self.thetas[k];
            let t = radius_label(x, y, theta);
            interpolate_derivative(self.sinogram.row(k), del_t, t)
                .map_err(|OutOfRange { index, max_index }| Error::IndexOutOfRange {
                    pixel, x, y, theta, t, index, max_index,
                })
        })
    }

    /// Values of all pixels in one row of the FOV, left to right. Stops at the
    /// first failing pixel.
    pub fn row(&self, fov: &FOV, row: usize) -> Result<Vec<Intensity>> {
        (0..fov.xs.len())
            .map(|col| {
                let pixel = [row, col];
                self.pixel(pixel, fov.pixel_position(pixel))
            })
            .collect()
    }

    /// Reconstruct every pixel of `fov`. Rows are independent and are
    /// processed in parallel unless the `serial` feature is enabled.
    ///
    /// If any pixel fails, the error reported is that of the first failing
    /// pixel in row-major order, regardless of the order of evaluation.
    pub fn image(&self, fov: FOV, on_step: Option<OnStep>) -> Result<ReconstructionGrid> {
        info!("Back projecting onto {} x {} pixels", fov.ys.len(), fov.xs.len());

        #[cfg    (feature = "serial") ] let rows = 0..fov.ys.len();
        #[cfg(not(feature = "serial"))] let rows = (0..fov.ys.len()).into_par_iter();

        let rows = rows
            .map(|row| {
                let values = self.row(&fov, row);
                if let Some(report) = on_step { report(Step::Reconstructed { row }) }
                values
            })
            .collect::<Vec<_>>()
            .into_iter()
            .collect::<Result<Vec<_>>>()?;

        Ok(ReconstructionGrid::from_rows(fov, rows))
    }
}

//! Second derivative of the projection data with respect to the radius label.

use itertools::Itertools;

use crate::{Length, sinogram::ProjectionSample};

/// Second differences `(v[i+2] - 2 v[i+1] + v[i]) / del_t²` of consecutive
/// triples: two fewer values than in `values`.
pub fn second_differences(values: &[f64], del_t: Length) -> impl Iterator<Item = f64> + '_ {
    let del_t_squared = del_t.powi(2);
    values.iter()
        .tuple_windows()
        .map(move |(a, b, c)| (c - 2.0 * b + a) / del_t_squared)
}

/// Fill in the `derivative` of every sample (all at the same angle, ordered
/// by radius) which has two successors. The stencil does not reach the last
/// two samples, whose derivatives are left untouched.
pub fn estimate_derivatives(samples: &mut [ProjectionSample], del_t: Length) {
    let values = samples.iter().map(|s| s.value).collect::<Vec<_>>();
    for (sample, derivative) in samples.iter_mut().zip(second_differences(&values, del_t)) {
        sample.derivative = derivative;
    }
}

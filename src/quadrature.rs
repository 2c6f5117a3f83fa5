//! The composite integration rule shared by the forward projection (over the
//! sub-angles of a sampling curve) and by the back projection (over the
//! acquisition angles).
//!
//! The first and last samples are weighted by 1, all others by 2, and the sum
//! is scaled by half the step. Terms are accumulated in index order (ends
//! first), which fixes the rounding of the result.

use std::convert::Infallible;

/// Apply the rule to the `n` samples `f(0) .. f(n-1)`, stopping at the first
/// sample which fails.
///
/// With `n == 1` the single sample is both first and last, and so counted
/// twice.
pub fn try_composite_rule<E>(n: usize, step: f64, mut f: impl FnMut(usize) -> Result<f64, E>) -> Result<f64, E> {
    debug_assert!(n > 0, "composite rule needs at least one sample");
    let mut sum = f(0)?;
    sum += f(n - 1)?;
    for i in 1..n.saturating_sub(1) {
        sum += 2.0 * f(i)?;
    }
    Ok(step / 2.0 * sum)
}

/// Infallible version of [`try_composite_rule`]
pub fn composite_rule(n: usize, step: f64, mut f: impl FnMut(usize) -> f64) -> f64 {
    match try_composite_rule(n, step, |i| Ok::<_, Infallible>(f(i))) {
        Ok(sum) => sum,
        Err(never) => match never {},
    }
}

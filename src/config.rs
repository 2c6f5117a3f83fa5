//! Validated simulation parameters, and the configuration file from which
//! they can be read.

pub mod file;

use crate::{Error, Result};

/// Discretization of acquisition and reconstruction. All counts are
/// positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// Number of acquisition angle intervals around the unit circle
    pub num_theta: usize,
    /// Number of sampling ellipses (radius label intervals) per angle
    pub num_t: usize,
    /// Number of sub-angle intervals in each line integral
    pub num_phi: usize,
    /// Number of pixel intervals along each axis of the image
    pub num_xy: usize,
}

impl Resolution {
    pub fn new(num_theta: usize, num_t: usize, num_phi: usize, num_xy: usize) -> Result<Self> {
        for (value, name) in [(num_theta, "num_theta"), (num_t, "num_t"), (num_phi, "num_phi"), (num_xy, "num_xy")] {
            if value == 0 { return Err(Error::InvalidResolution(name)) }
        }
        Ok(Self { num_theta, num_t, num_phi, num_xy })
    }
}

impl Default for Resolution {
    /// The faster of the settings suggested for interactive use
    fn default() -> Self {
        Self { num_theta: 120, num_t: 600, num_phi: 1000, num_xy: 250 }
    }
}

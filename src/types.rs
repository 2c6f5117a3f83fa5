pub use geometry::{Length, Angle, Weight};

pub type Ratio     = f64;
pub type Intensity = f64;

/// (row, column) of a pixel in the reconstructed image
pub type Index2 = [usize; 2];

pub const TWOPI: Angle = std::f64::consts::TAU;

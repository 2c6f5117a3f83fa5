//! The square Field of View (FOV) `[-0.5, 0.5] x [-0.5, 0.5]` in which the
//! image is reconstructed, and the positions of its pixels.

use crate::{Index2, Length, sampling::uniform_sequence};

pub const HALF_WIDTH: Length = 0.5;

#[derive(Clone, Debug, PartialEq)]
pub struct FOV {
    /// Number of pixel intervals along each axis: there are `n + 1` pixels
    /// per row and per column, on both edges of the FOV.
    pub n: usize,
    /// x of each column, increasing
    pub xs: Vec<Length>,
    /// y of each row, decreasing
    pub ys: Vec<Length>,
}

impl FOV {

    pub fn new(n: usize) -> Self {
        let step = 2.0 * HALF_WIDTH / n as f64;
        Self {
            n,
            xs: uniform_sequence(-HALF_WIDTH,  step, n),
            ys: uniform_sequence( HALF_WIDTH, -step, n),
        }
    }

    /// Number of (rows, columns)
    pub fn dims(&self) -> (usize, usize) { (self.ys.len(), self.xs.len()) }

    /// `[x_min, x_max, y_min, y_max]`, as expected by image viewers
    pub fn extent(&self) -> [Length; 4] { [-HALF_WIDTH, HALF_WIDTH, -HALF_WIDTH, HALF_WIDTH] }

    /// Position of pixel `[row, column]`
    pub fn pixel_position(&self, [row, col]: Index2) -> (Length, Length) {
        (self.xs[col], self.ys[row])
    }
}

#[cfg(test)]
mod test_fov {
    use super::*;
    use rstest::rstest;
    use float_eq::assert_float_eq;

    #[rstest(/**/ index,  expected_position,
             case([0,0], (-0.5,  0.5 )),
             case([0,4], ( 0.5,  0.5 )),
             case([4,0], (-0.5, -0.5 )),
             case([4,4], ( 0.5, -0.5 )),
             case([2,2], ( 0.0,  0.0 )),
             case([1,3], ( 0.25, 0.25)),
    )]
    fn test_pixel_position(index: Index2, expected_position: (Length, Length)) {
        let fov = FOV::new(4);
        let p = fov.pixel_position(index);
        assert_float_eq!(p, expected_position, abs <= (1e-15, 1e-15));
    }

    #[test]
    fn rows_descend_columns_ascend() {
        let fov = FOV::new(7);
        assert_eq!(fov.dims(), (8, 8));
        assert!(fov.xs.windows(2).all(|w| w[0] < w[1]));
        assert!(fov.ys.windows(2).all(|w| w[0] > w[1]));
        assert_float_eq!(*fov.xs.last().unwrap(),  HALF_WIDTH, abs <= 1e-12);
        assert_float_eq!(*fov.ys.last().unwrap(), -HALF_WIDTH, abs <= 1e-12);
    }
}

use std::path::Path;

use ndarray::{Array2, ArrayView1};

use crate::{Index2, Intensity, Length, Result, fov::FOV, io};

/// The reconstructed image: one intensity per pixel of the FOV, rows of
/// decreasing y, columns of increasing x.
#[derive(Clone, Debug)]
pub struct ReconstructionGrid {
    pub fov: FOV,
    pub data: Array2<Intensity>,
}

impl ReconstructionGrid {

    /// Assemble from rows, in FOV order. Every row must have one value per
    /// column of `fov`.
    pub fn from_rows(fov: FOV, rows: impl IntoIterator<Item = Vec<Intensity>>) -> Self {
        let mut data = Array2::zeros(fov.dims());
        for (mut destination, row) in data.rows_mut().into_iter().zip(rows) {
            destination.assign(&ArrayView1::from(&row));
        }
        Self { fov, data }
    }

    pub fn zeros(fov: FOV) -> Self {
        let data = Array2::zeros(fov.dims());
        Self { fov, data }
    }

    pub fn dims(&self) -> (usize, usize) { self.data.dim() }

    pub fn extent(&self) -> [Length; 4] { self.fov.extent() }

    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, Intensity>> { self.data.rows().into_iter() }

    pub fn max(&self) -> Intensity { self.data.iter().copied().fold(Intensity::NEG_INFINITY, Intensity::max) }
    pub fn min(&self) -> Intensity { self.data.iter().copied().fold(Intensity::INFINITY    , Intensity::min) }

    pub fn write_to_raw_file(&self, path: &Path) -> Result<()> {
        io::raw::write(self.data.iter().copied(), path)?;
        Ok(())
    }

    /// Read an image written by `write_to_raw_file` for a FOV with `n`
    /// intervals per axis.
    pub fn from_raw_file(path: &Path, n: usize) -> Result<Self> {
        let fov = FOV::new(n);
        let data = io::raw::read(path)?.collect::<std::io::Result<Vec<_>>>()?;
        let (rows, cols) = fov.dims();
        if data.len() != rows * cols {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("{path:?} holds {} values, expected {rows} x {cols}", data.len()),
            ).into())
        }
        Ok(Self::from_rows(fov, data.chunks(cols).map(<[Intensity]>::to_vec)))
    }
}

impl core::ops::Index<Index2> for ReconstructionGrid {
    type Output = Intensity;
    #[inline]
    fn index(&self, [row, col]: Index2) -> &Self::Output { &self.data[[row, col]] }
}

impl core::ops::IndexMut<Index2> for ReconstructionGrid {
    #[inline]
    fn index_mut(&mut self, [row, col]: Index2) -> &mut Self::Output { &mut self.data[[row, col]] }
}

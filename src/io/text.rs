//! Human-readable dumps of the projection data and of the reconstructed image

use std::io::Write;

use crate::{image::ReconstructionGrid, sinogram::Sinogram};

/// One line per projection sample: `theta  t  value  derivative`, tab-separated
pub fn write_sinogram(sinogram: &Sinogram, out: &mut impl Write) -> std::io::Result<()> {
    for s in sinogram.samples() {
        writeln!(out, "{:.6}\t{:.6}\t{:.6}\t{:.6}", s.theta, s.t, s.value, s.derivative)?;
    }
    Ok(())
}

/// One line per image row, top row first
pub fn write_rows(image: &ReconstructionGrid, out: &mut impl Write) -> std::io::Result<()> {
    for row in image.rows() {
        let line = row.iter().map(|v| format!("{v:12.4}")).collect::<Vec<_>>().join(" ");
        writeln!(out, "{line}")?;
    }
    Ok(())
}

//! The whole simulation: acquisition of the sinogram of a shape, followed by
//! back projection onto the FOV.

use log::info;

use geometry::Shape;
use crate::{
    Angle, Result, Resolution,
    backprojection::BackProjector,
    fov::FOV,
    image::ReconstructionGrid,
    sampling::SamplingGrid,
    sinogram::Sinogram,
};

/// Unit of work completed, as reported to progress callbacks
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    /// All radius labels at this angle have been projected
    Projected { theta: Angle },
    /// All pixels in this row have been reconstructed
    Reconstructed { row: usize },
}

/// Progress callback. Called from worker threads, hence `Sync`.
pub type OnStep<'a> = &'a (dyn Fn(Step) + Sync);

pub struct Reconstruction<'a> {
    shape: Shape,
    resolution: Resolution,
    on_step: Option<OnStep<'a>>,
}

impl<'a> Reconstruction<'a> {

    pub fn new(shape: Shape, resolution: Resolution) -> Self {
        Self { shape, resolution, on_step: None }
    }

    pub fn with_progress(self, on_step: OnStep<'a>) -> Self {
        Self { on_step: Some(on_step), ..self }
    }

    pub fn shape     (&self) -> &Shape     { &self.shape }
    pub fn resolution(&self) -> Resolution {  self.resolution }

    /// Number of progress steps that `run` will report
    pub fn n_steps(&self) -> usize {
        let Resolution { num_theta, num_xy, .. } = self.resolution;
        (num_theta + 1) + (num_xy + 1)
    }

    pub fn sampling_grid(&self) -> Result<SamplingGrid> {
        let Resolution { num_theta, num_t, num_phi, .. } = self.resolution;
        SamplingGrid::new(num_theta, num_t, num_phi)
    }

    pub fn acquire(&self, grid: &SamplingGrid) -> Sinogram {
        Sinogram::acquire(&self.shape, grid, self.on_step)
    }

    /// Requires the complete sinogram: this is the only synchronization
    /// point between the two parallel phases.
    pub fn back_project(&self, grid: &SamplingGrid, sinogram: &Sinogram) -> Result<ReconstructionGrid> {
        BackProjector::new(sinogram, grid).image(FOV::new(self.resolution.num_xy), self.on_step)
    }

    pub fn run(&self) -> Result<ReconstructionGrid> {
        info!("Reconstructing {}", self.shape);
        let grid = self.sampling_grid()?;
        let sinogram = self.acquire(&grid);
        self.back_project(&grid, &sinogram)
    }
}

/// Simulate acquisition of `shape` and reconstruct it, without progress reports
pub fn reconstruct(shape: Shape, resolution: Resolution) -> Result<ReconstructionGrid> {
    Reconstruction::new(shape, resolution).run()
}

//! Simulated tomography along elliptical sampling curves.
//!
//! A shape is "measured" by integrating its indicator function along a family
//! of ellipses with one focus at the origin and the other on the unit circle,
//! for many rotations of that second focus. The image is then recovered by
//! back projecting the second derivative (with respect to ellipse size) of
//! these measurements onto a square grid of pixels.
//!
//! ```
//! use ellitomo::{reconstruct, Resolution, Shape};
//!
//! let shape = Shape::circle((0.0, 0.0), 0.2)?;
//! let image = reconstruct(shape, Resolution::new(16, 40, 40, 4)?)?;
//! assert_eq!(image.dims(), (5, 5));
//! # Ok::<(), ellitomo::Error>(())
//! ```

mod types;
pub use types::*;

mod error;
pub use error::{Error, Result};

pub mod quadrature;
pub mod sampling;
pub mod projector;
pub mod derivative;
pub mod sinogram;
pub mod fov;
pub mod backprojection;
pub mod image;
pub mod reconstruction;
pub mod config;
pub mod io;
pub mod utils;

pub use geometry::{Point, Shape};
pub use config::Resolution;
pub use fov::FOV;
pub use image::ReconstructionGrid;
pub use reconstruction::{reconstruct, Reconstruction, Step};

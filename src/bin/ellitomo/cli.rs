#[derive(clap::Parser, Debug, Clone)]
#[clap(name = "ellitomo", about = "Simulate acquisition of a shape along elliptical curves, and reconstruct it")]
pub struct Cli {

    /// TOML file describing the shape and the resolution
    #[clap(short, long)]
    pub config: Option<PathBuf>,

    /// Number of acquisition angles around the unit circle [default: 120]
    #[clap(long)]
    pub num_theta: Option<usize>,

    /// Number of sampling ellipses per angle [default: 600]
    #[clap(long)]
    pub num_t: Option<usize>,

    /// Number of partitions in each line integral [default: 1000]
    #[clap(long)]
    pub num_phi: Option<usize>,

    /// Number of pixel intervals along each axis of the image [default: 250]
    #[clap(long)]
    pub num_xy: Option<usize>,

    /// Where to write the reconstructed image (raw little-endian f64, row-major)
    #[clap(short, long)]
    pub output: Option<PathBuf>,

    /// Also write the projection data as text (theta, t, value, derivative)
    #[clap(long)]
    pub sinogram: Option<PathBuf>,

    /// Print the reconstructed rows to stdout
    #[clap(long)]
    pub print: bool,

    /// Maximum number of rayon threads
    #[clap(short = 'j', long, default_value = "4")]
    pub n_threads: usize,

    /// Shape to image, if not given in the config file
    #[clap(subcommand)]
    pub shape: Option<ShapeCmd>,
}

#[derive(clap::Subcommand, Debug, Clone, Copy)]
pub enum ShapeCmd {

    /// Axis-aligned ellipse
    Ellipse {
        /// Centre, e.g. '0.1,-0.2'
        #[clap(long, allow_hyphen_values = true, value_parser = parse_pair::<Length>)]
        center: (Length, Length),

        /// x- and y-radii
        #[clap(long, value_parser = parse_pair::<Length>)]
        radii: (Length, Length),
    },

    /// Circle
    Circle {
        /// Centre, e.g. '0.1,-0.2'
        #[clap(long, allow_hyphen_values = true, value_parser = parse_pair::<Length>)]
        center: (Length, Length),

        #[clap(long)]
        radius: Length,
    },

    /// Axis-aligned rectangle
    Rectangle {
        /// x-range, e.g. '-0.5,0.5'
        #[clap(long, allow_hyphen_values = true, value_parser = parse_pair::<Length>)]
        x: (Length, Length),

        /// y-range, e.g. '-0.5,0.5'
        #[clap(long, allow_hyphen_values = true, value_parser = parse_pair::<Length>)]
        y: (Length, Length),
    },
}

impl Cli {

    /// Shape from the subcommand, or else from the config file. Resolution
    /// from the flags, or else from the config file, or else the defaults.
    pub fn shape_and_resolution(&self) -> Result<(Shape, Resolution), Box<dyn Error>> {
        let config = self.config.as_deref().map(read_config_file).transpose()?;

        let shape = match (self.shape, &config) {
            (Some(cmd), _) => cmd.shape()?,
            (None, Some(config)) => config.shape.shape()?,
            (None, None) => return Err("no shape given: use a shape subcommand or --config".into()),
        };

        let base = config.map(|c| c.resolution).unwrap_or_default();
        let resolution = Resolution::new(
            self.num_theta.unwrap_or(base.num_theta),
            self.num_t    .unwrap_or(base.num_t    ),
            self.num_phi  .unwrap_or(base.num_phi  ),
            self.num_xy   .unwrap_or(base.num_xy   ),
        )?;
        Ok((shape, resolution))
    }
}

impl ShapeCmd {
    fn shape(self) -> Result<Shape, ShapeError> {
        match self {
            ShapeCmd::Ellipse   { center, radii  } => Shape::ellipse  (center, radii ),
            ShapeCmd::Circle    { center, radius } => Shape::circle   (center, radius),
            ShapeCmd::Rectangle { x, y           } => Shape::rectangle(x, y          ),
        }
    }
}

// ----- Imports -----------------------------------------------------------------------------------------
use std::{
    error::Error,
    path::PathBuf,
};

use geometry::ShapeError;
use ellitomo::{
    Length, Resolution, Shape,
    config::file::read_config_file,
    utils::parse_pair,
};

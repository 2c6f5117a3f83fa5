use crate::{Angle, Index2, Length};

/// Everything that can go wrong in building the acquisition, projecting or
/// reconstructing. Domain and indexing faults abort the whole reconstruction:
/// no partial image is ever returned.
#[derive(thiserror::Error, Debug)]
pub enum Error {

    #[error("sampling curve t = {t}, phi = {phi}: negative square root argument {argument}")]
    Domain { t: Length, phi: Angle, argument: f64 },

    #[error("pixel {pixel:?} at ({x}, {y}), theta = {theta}: radius t = {t} falls in bucket {index}, \
             but interpolation needs buckets in 0..={max_index}; increase num_t")]
    IndexOutOfRange {
        pixel: Index2,
        x: Length,
        y: Length,
        theta: Angle,
        t: Length,
        /// Truncated bucket of `t`; NaN if `t` is NaN
        index: f64,
        max_index: i64,
    },

    #[error("invalid shape: {0}")]
    InvalidShape(#[from] geometry::ShapeError),

    #[error("resolution parameter `{0}` must be positive")]
    InvalidResolution(&'static str),

    #[error("could not parse configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

//! Configuration file parser

use std::fs;
use std::path::Path;

use serde::Deserialize;

use geometry::Shape;
use crate::{Length, Result, Resolution};

#[derive(Deserialize, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {

    /// The object to be imaged
    pub shape: ShapeConfig,

    /// Missing fields take the values of `Resolution::default()`
    #[serde(default)]
    pub resolution: ResolutionConfig,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShapeConfig {
    Ellipse   { center: (Length, Length), radii: (Length, Length) },
    Circle    { center: (Length, Length), radius: Length },
    Rectangle { x: (Length, Length), y: (Length, Length) },
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ResolutionConfig {
    pub num_theta: usize,
    pub num_t: usize,
    pub num_phi: usize,
    pub num_xy: usize,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        let Resolution { num_theta, num_t, num_phi, num_xy } = Resolution::default();
        Self { num_theta, num_t, num_phi, num_xy }
    }
}

impl ShapeConfig {
    pub fn shape(self) -> Result<Shape> {
        Ok(match self {
            ShapeConfig::Ellipse   { center, radii  } => Shape::ellipse  (center, radii )?,
            ShapeConfig::Circle    { center, radius } => Shape::circle   (center, radius)?,
            ShapeConfig::Rectangle { x, y           } => Shape::rectangle(x, y          )?,
        })
    }
}

impl ResolutionConfig {
    pub fn resolution(self) -> Result<Resolution> {
        let Self { num_theta, num_t, num_phi, num_xy } = self;
        Resolution::new(num_theta, num_t, num_phi, num_xy)
    }
}

impl Config {
    /// Validated shape and resolution
    pub fn validate(self) -> Result<(Shape, Resolution)> {
        Ok((self.shape.shape()?, self.resolution.resolution()?))
    }
}

pub fn parse_config(text: &str) -> Result<Config> {
    Ok(toml::from_str(text)?)
}

pub fn read_config_file(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path)?;
    parse_config(&text)
}

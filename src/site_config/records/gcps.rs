use serde::{Deserialize, Serialize};

use crate::site_config::common::error::{ConfigError, Result};
use crate::site_config::reproject::CoordinateTransformer;

/// Ground control points: pixel locations paired with real-world locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundControlPoints {
    /// Pixel coordinates (column, row)
    pub src: Vec<[f64; 2]>,
    /// Real-world coordinates, geographic or projected depending on the stage
    pub dst: Vec<[f64; 2]>,
    /// Reference height of zero water level in the site CRS
    pub z_0: f64,
    /// Water level at the time the points were surveyed
    pub h_ref: f64,
}

impl GroundControlPoints {
    pub fn len(&self) -> usize {
        self.src.len()
    }

    pub fn is_empty(&self) -> bool {
        self.src.is_empty()
    }

    pub fn validate(&self) -> Result<()> {
        if self.src.len() != self.dst.len() {
            return Err(ConfigError::LengthMismatch {
                expected: self.src.len(),
                actual: self.dst.len(),
            });
        }
        Ok(())
    }

    /// Returns a copy whose `dst` points are reprojected; `self` keeps the originals.
    pub fn reprojected<T: CoordinateTransformer + ?Sized>(&self, transformer: &T) -> Result<Self> {
        self.validate()?;
        Ok(Self {
            src: self.src.clone(),
            dst: transformer.forward_points(&self.dst)?,
            z_0: self.z_0,
            h_ref: self.h_ref,
        })
    }
}

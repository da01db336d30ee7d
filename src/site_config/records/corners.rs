use serde::{Deserialize, Serialize};

use crate::site_config::common::error::{ConfigError, Result};
use crate::site_config::records::polygon::Polygon;

/// Pixel corners of the image area of interest.
///
/// Ordered upstream-left, downstream-left, downstream-right, upstream-right.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Corners {
    pub up_left: [f64; 2],
    pub down_left: [f64; 2],
    pub down_right: [f64; 2],
    pub up_right: [f64; 2],
}

impl Corners {
    pub fn points(&self) -> [[f64; 2]; 4] {
        [self.up_left, self.down_left, self.down_right, self.up_right]
    }

    pub fn polygon(&self) -> Polygon {
        Polygon::new(self.points().to_vec())
    }

    /// The corners must span a simple quadrilateral with non-zero area.
    pub fn validate(&self) -> Result<()> {
        let polygon = self.polygon();
        if !polygon.is_simple() {
            return Err(ConfigError::InvalidCorners(format!(
                "{} is self-intersecting",
                polygon
            )));
        }
        if polygon.area() <= f64::EPSILON {
            return Err(ConfigError::InvalidCorners(format!("{} has no area", polygon)));
        }
        Ok(())
    }
}

use serde::{Deserialize, Serialize};

use crate::site_config::common::error::{ConfigError, Result};
use crate::site_config::reproject::CoordinateTransformer;

/// Cross-section of the river bed as (x, y, z) points in a projected CRS.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bathymetry {
    /// EPSG code, projected systems only
    pub crs: u32,
    pub coords: Vec<[f64; 3]>,
}

impl Bathymetry {
    /// Reprojects parallel lon/lat/elevation sequences into `transformer`'s target CRS.
    pub fn from_geographic<T: CoordinateTransformer + ?Sized>(
        lons: &[f64],
        lats: &[f64],
        elevations: &[f64],
        transformer: &T,
    ) -> Result<Self> {
        if elevations.len() != lons.len() {
            return Err(ConfigError::LengthMismatch {
                expected: lons.len(),
                actual: elevations.len(),
            });
        }

        let coords = transformer
            .forward_many(lons, lats)?
            .into_iter()
            .zip(elevations)
            .map(|((x, y), &z)| [x, y, z])
            .collect();

        Ok(Self {
            crs: transformer.target_epsg(),
            coords,
        })
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
}

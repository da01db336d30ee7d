use serde::{Deserialize, Serialize};

use crate::site_config::common::error::Result;
use crate::site_config::reproject::CoordinateTransformer;

/// Lens parameters, known from the manufacturer or calibrated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LensParameters {
    /// Radial distortion coefficient
    pub k1: f64,
    /// Principal point offset
    pub c: f64,
    /// Focal length
    pub f: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraType {
    /// User-chosen camera name
    pub name: String,
    #[serde(rename = "lensParameters")]
    pub lens_parameters: LensParameters,
}

/// Replaces the (lon, lat) of a lens position with projected (x, y); elevation is kept.
pub fn project_lens_position<T: CoordinateTransformer + ?Sized>(
    geographic: [f64; 3],
    transformer: &T,
) -> Result<[f64; 3]> {
    let [lon, lat, z] = geographic;
    let (x, y) = transformer.forward(lon, lat)?;
    Ok([x, y, z])
}

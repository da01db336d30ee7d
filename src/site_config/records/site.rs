use serde::{Deserialize, Serialize};

/// A monitored river location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub name: String,
    /// Opaque identifier in an external registry
    pub uuid: String,
    /// Approximate (lon, lat) of the site
    pub position: (f64, f64),
    /// EPSG code of the projected system all site geometry is expressed in
    pub crs: u32,
}

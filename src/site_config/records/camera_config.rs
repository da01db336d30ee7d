use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::site_config::records::{CameraType, Corners, GroundControlPoints, Polygon, Site};

/// A camera mounted at a site for a period of time, with everything needed to map its
/// images onto the site's projected coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    pub id: u32,
    pub camera_type: CameraType,
    pub site: Site,
    /// Start of the validity range
    pub time_start: NaiveDateTime,
    /// End of the validity range, used to match a movie to its configuration
    pub time_end: NaiveDateTime,
    /// GCPs with `dst` in the site CRS
    pub gcps: GroundControlPoints,
    pub corners: Corners,
    /// Reprojection resolution in metres
    pub resolution: f64,
    /// Lens (x, y, z) in the site CRS
    #[serde(rename = "lensPosition")]
    pub lens_position: [f64; 3],
    pub aoi_bbox: Polygon,
    pub aoi_window_size: u32,
}

impl CameraConfig {
    pub fn is_valid_at(&self, time: NaiveDateTime) -> bool {
        self.time_start <= time && time <= self.time_end
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::site_config::records::{Bathymetry, CameraConfig};

/// What a movie is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovieKind {
    /// Recorded to set up a camera configuration
    Configuration,
    /// Regular recording to be analysed
    Normal,
}

/// Location of the video in object storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReference {
    pub bucket: String,
    pub identifier: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: MovieKind,
    pub camera_config: CameraConfig,
    pub file: FileReference,
    pub timestamp: DateTime<Utc>,
    /// Frame size as `WIDTHxHEIGHT`
    pub resolution: String,
    pub fps: f64,
    pub bathymetry: Bathymetry,
    /// Water level relative to the gauge plate zero
    pub h_a: f64,
}

//! Site configuration assembly types

use std::path::PathBuf;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::site_config::common::error::Result;
use crate::site_config::reproject::epsg;
use crate::site_config::records::{
    Bathymetry, CameraConfig, CameraType, Corners, FileReference, GroundControlPoints, Movie,
    MovieKind, Polygon, Site,
};

/// River-bed profile as surveyed: parallel lon/lat/elevation sequences.
#[derive(Debug, Clone, PartialEq)]
pub struct BathymetryProfile {
    pub lons: Vec<f64>,
    pub lats: Vec<f64>,
    pub elevations: Vec<f64>,
}

/// Everything about a movie except the records it links to.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieMetadata {
    pub kind: MovieKind,
    pub file: FileReference,
    pub timestamp: DateTime<Utc>,
    pub resolution: String,
    pub fps: f64,
    pub h_a: f64,
}

/// Field data collected at a site, before any reprojection.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteSurvey {
    pub camera_type: CameraType,
    pub site: Site,
    /// GCPs with `dst` in geographic lon/lat
    pub gcps: GroundControlPoints,
    pub corners: Corners,
    /// Lens (lon, lat, z)
    pub lens_position: [f64; 3],
    pub time_start: NaiveDateTime,
    pub time_end: NaiveDateTime,
    pub bathymetry: BathymetryProfile,
    pub movie: MovieMetadata,
    /// Referenced for information only, never opened
    pub video_file: PathBuf,
}

/// Output of a full assembly run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssembledConfiguration {
    /// Pixel-space polygon spanned by the corners
    pub source_polygon: Polygon,
    pub movie: Movie,
}

impl AssembledConfiguration {
    pub fn camera_config(&self) -> &CameraConfig {
        &self.movie.camera_config
    }

    pub fn bathymetry(&self) -> &Bathymetry {
        &self.movie.bathymetry
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Configuration for site configuration assembly
#[derive(Debug, Clone)]
pub struct AssemblerConfig {
    /// EPSG code of the geographic system survey data is recorded in
    pub geographic_crs: u32,
    /// EPSG code of the projected system of the site
    pub site_crs: u32,
    /// Resolution in metres used when reprojecting frames to the AOI
    pub resolution: f64,
    /// Interrogation window size in pixels for the AOI
    pub aoi_window_size: u32,
    /// Whether to reverse the bathymetry profile before reprojection
    pub reverse_bathymetry: bool,
    pub camera_config_id: u32,
    pub movie_id: u32,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            geographic_crs: epsg::WGS84,
            site_crs: 32631,
            resolution: 0.01,
            aoi_window_size: 15,
            reverse_bathymetry: true,
            camera_config_id: 1,
            movie_id: 1,
        }
    }
}

impl AssemblerConfig {
    pub fn builder() -> AssemblerConfigBuilder {
        AssemblerConfigBuilder::default()
    }
}

/// Builder for AssemblerConfig
#[derive(Default)]
pub struct AssemblerConfigBuilder {
    geographic_crs: Option<u32>,
    site_crs: Option<u32>,
    resolution: Option<f64>,
    aoi_window_size: Option<u32>,
    reverse_bathymetry: Option<bool>,
    camera_config_id: Option<u32>,
    movie_id: Option<u32>,
}

impl AssemblerConfigBuilder {
    pub fn geographic_crs(mut self, code: u32) -> Self {
        self.geographic_crs = Some(code);
        self
    }

    pub fn site_crs(mut self, code: u32) -> Self {
        self.site_crs = Some(code);
        self
    }

    pub fn resolution(mut self, resolution: f64) -> Self {
        self.resolution = Some(resolution);
        self
    }

    pub fn aoi_window_size(mut self, size: u32) -> Self {
        self.aoi_window_size = Some(size);
        self
    }

    pub fn reverse_bathymetry(mut self, reverse: bool) -> Self {
        self.reverse_bathymetry = Some(reverse);
        self
    }

    pub fn camera_config_id(mut self, id: u32) -> Self {
        self.camera_config_id = Some(id);
        self
    }

    pub fn movie_id(mut self, id: u32) -> Self {
        self.movie_id = Some(id);
        self
    }

    pub fn build(self) -> AssemblerConfig {
        let default = AssemblerConfig::default();
        AssemblerConfig {
            geographic_crs: self.geographic_crs.unwrap_or(default.geographic_crs),
            site_crs: self.site_crs.unwrap_or(default.site_crs),
            resolution: self.resolution.unwrap_or(default.resolution),
            aoi_window_size: self.aoi_window_size.unwrap_or(default.aoi_window_size),
            reverse_bathymetry: self.reverse_bathymetry.unwrap_or(default.reverse_bathymetry),
            camera_config_id: self.camera_config_id.unwrap_or(default.camera_config_id),
            movie_id: self.movie_id.unwrap_or(default.movie_id),
        }
    }
}

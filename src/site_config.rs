//! River camera site configuration
//!
//! This module prepares the configuration of a river-flow camera site: it reprojects
//! surveyed geographic coordinates into the site's metric CRS, assembles camera,
//! bathymetry and movie records, and derives the area of interest from the GCPs.

pub mod common;
pub mod reproject;
pub mod records;
pub mod aoi;
pub mod assembly;

pub use common::{
    ConfigError,
    Result,
};

pub use reproject::{
    CoordinateTransformer,
    Proj4Transformer,
};

pub use records::{
    Bathymetry,
    CameraConfig,
    CameraType,
    Corners,
    GroundControlPoints,
    LensParameters,
    Movie,
    Polygon,
    Site,
};

pub use aoi::{
    AoiDelegate,
    PerspectiveAoi,
};

pub use assembly::{
    AssembledConfiguration,
    AssemblerConfig,
    AssemblerConfigBuilder,
    ConfigAssembler,
    SiteSurvey,
};

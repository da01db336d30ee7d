//! Configuration records
//!
//! One plain, serializable struct per entity of a camera site setup. Coordinates are
//! stored as fixed-size number arrays so the JSON form is nested arrays only.

mod camera;
mod site;
mod gcps;
mod corners;
mod polygon;
mod camera_config;
mod bathymetry;
mod movie;

pub use camera::{CameraType, LensParameters, project_lens_position};
pub use site::Site;
pub use gcps::GroundControlPoints;
pub use corners::Corners;
pub use polygon::Polygon;
pub use camera_config::CameraConfig;
pub use bathymetry::Bathymetry;
pub use movie::{FileReference, Movie, MovieKind};

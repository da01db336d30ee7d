//! Coordinate reprojection module
//!
//! This module converts longitude/latitude pairs into the metric coordinates of a
//! projected reference system identified by its EPSG code.

mod transformer;
mod proj_transformer;
pub mod epsg;

pub use transformer::CoordinateTransformer;
pub use proj_transformer::Proj4Transformer;

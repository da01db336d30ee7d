use crate::site_config::common::error::Result;
use crate::site_config::records::{Corners, Polygon};

pub trait AoiDelegate {
    /// Computes the bounding shape of the area of interest.
    ///
    /// `src` holds GCP pixel points and `dst` the matching points, already in the site CRS.
    fn get_aoi(&self, src: &[[f64; 2]], dst: &[[f64; 2]], corners: &Corners) -> Result<Polygon>;
}

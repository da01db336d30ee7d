use crate::site_config::common::error::{ConfigError, Result};

/// Converts between a geographic (lon/lat, degrees) and a projected (metres) CRS.
///
/// Pairs are always ordered x first: longitude before latitude, easting before northing.
pub trait CoordinateTransformer {
    fn source_epsg(&self) -> u32;

    fn target_epsg(&self) -> u32;

    fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64)>;

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64)>;

    /// Reprojects parallel longitude and latitude sequences, preserving their order.
    fn forward_many(&self, lons: &[f64], lats: &[f64]) -> Result<Vec<(f64, f64)>> {
        if lons.len() != lats.len() {
            return Err(ConfigError::LengthMismatch {
                expected: lons.len(),
                actual: lats.len(),
            });
        }

        lons.iter()
            .zip(lats)
            .map(|(&lon, &lat)| self.forward(lon, lat))
            .collect()
    }

    fn forward_points(&self, points: &[[f64; 2]]) -> Result<Vec<[f64; 2]>> {
        points
            .iter()
            .map(|&[lon, lat]| self.forward(lon, lat).map(|(x, y)| [x, y]))
            .collect()
    }
}

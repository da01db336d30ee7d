//! Coordinate transformer backed by the pure-Rust proj4rs engine.

use proj4rs::proj::Proj;
use tracing::debug;

use crate::site_config::common::error::{ConfigError, Result};
use crate::site_config::reproject::epsg;
use crate::site_config::reproject::transformer::CoordinateTransformer;

/// Transformer between two EPSG-identified systems, resolved once at construction.
///
/// Geographic systems are handled in degrees at the API boundary; proj4rs itself works
/// in radians for those, so conversion happens on the way in and out.
pub struct Proj4Transformer {
    source: Proj,
    target: Proj,
    source_epsg: u32,
    target_epsg: u32,
}

impl Proj4Transformer {
    /// Builds a transformer from `source_epsg` to `target_epsg`.
    ///
    /// # Errors
    ///
    /// * `ConfigError::UnsupportedCrs` - either code is not in the lookup table
    /// * `ConfigError::Projection` - proj4rs rejected the resolved definition
    pub fn from_epsg(source_epsg: u32, target_epsg: u32) -> Result<Self> {
        let source = Self::resolve(source_epsg)?;
        let target = Self::resolve(target_epsg)?;

        debug!("Coordinate transformer ready: EPSG:{} -> EPSG:{}", source_epsg, target_epsg);

        Ok(Self {
            source,
            target,
            source_epsg,
            target_epsg,
        })
    }

    fn resolve(code: u32) -> Result<Proj> {
        let definition = epsg::proj_string(code)?;
        Proj::from_proj_string(&definition)
            .map_err(|e| ConfigError::Projection(format!("EPSG:{}: {}", code, e)))
    }

    fn apply(
        from: &Proj,
        from_epsg: u32,
        to: &Proj,
        to_epsg: u32,
        a: f64,
        b: f64,
    ) -> Result<(f64, f64)> {
        let mut point = if epsg::is_geographic(from_epsg) {
            (a.to_radians(), b.to_radians(), 0.0)
        } else {
            (a, b, 0.0)
        };

        proj4rs::transform::transform(from, to, &mut point).map_err(|e| {
            ConfigError::Projection(format!(
                "({}, {}) EPSG:{} -> EPSG:{}: {}",
                a, b, from_epsg, to_epsg, e
            ))
        })?;

        let (x, y) = if epsg::is_geographic(to_epsg) {
            (point.0.to_degrees(), point.1.to_degrees())
        } else {
            (point.0, point.1)
        };

        if !x.is_finite() || !y.is_finite() {
            return Err(ConfigError::Projection(format!(
                "({}, {}) is outside the domain of EPSG:{}",
                a, b, to_epsg
            )));
        }

        Ok((x, y))
    }
}

impl CoordinateTransformer for Proj4Transformer {
    fn source_epsg(&self) -> u32 {
        self.source_epsg
    }

    fn target_epsg(&self) -> u32 {
        self.target_epsg
    }

    fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64)> {
        Self::apply(&self.source, self.source_epsg, &self.target, self.target_epsg, lon, lat)
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64)> {
        Self::apply(&self.target, self.target_epsg, &self.source, self.source_epsg, x, y)
    }
}

//! EPSG code lookup
//!
//! Resolves the EPSG codes used by river monitoring sites into PROJ definition strings.
//! Only geographic WGS 84 / ETRS89 systems and their UTM projections are known, plus
//! web mercator for map overlays.

use crate::site_config::common::error::{ConfigError, Result};

pub const WGS84: u32 = 4326;
pub const ETRS89: u32 = 4258;
pub const WEB_MERCATOR: u32 = 3857;

const WGS84_UTM_NORTH: u32 = 32600;
const WGS84_UTM_SOUTH: u32 = 32700;
const ETRS89_UTM: u32 = 25800;

const GRS80_TO_WGS84: &str = "+ellps=GRS80 +towgs84=0,0,0,0,0,0,0";

/// Returns the PROJ definition for `code`, or `UnsupportedCrs` when the code is unknown.
pub fn proj_string(code: u32) -> Result<String> {
    let definition = match code {
        WGS84 => "+proj=longlat +datum=WGS84 +no_defs".to_string(),
        ETRS89 => format!("+proj=longlat {GRS80_TO_WGS84} +no_defs"),
        WEB_MERCATOR => "+proj=merc +a=6378137 +b=6378137 +lat_ts=0 +lon_0=0 +x_0=0 +y_0=0 +k=1 +units=m +no_defs".to_string(),
        32601..=32660 => format!(
            "+proj=utm +zone={} +datum=WGS84 +units=m +no_defs",
            code - WGS84_UTM_NORTH
        ),
        32701..=32760 => format!(
            "+proj=utm +zone={} +south +datum=WGS84 +units=m +no_defs",
            code - WGS84_UTM_SOUTH
        ),
        25828..=25838 => format!(
            "+proj=utm +zone={} {GRS80_TO_WGS84} +units=m +no_defs",
            code - ETRS89_UTM
        ),
        _ => return Err(ConfigError::UnsupportedCrs(code)),
    };
    Ok(definition)
}

/// Geographic systems take and return degrees; everything else is metric.
pub fn is_geographic(code: u32) -> bool {
    matches!(code, WGS84 | ETRS89)
}

//! Example survey of the Hommerich gauging site on the Geul.
//!
//! Everything here is literal field data. Geographic values are WGS 84 lon/lat in
//! degrees; pixel values refer to the 1920x1080 frames of the site camera.

use std::path::PathBuf;

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::site_config::assembly::types::{BathymetryProfile, MovieMetadata, SiteSurvey};
use crate::site_config::common::error::{ConfigError, Result};
use crate::site_config::records::{
    CameraType, Corners, FileReference, GroundControlPoints, LensParameters, MovieKind, Site,
};

pub const VIDEO_FILE: &str = "../examples/sample_limburg.mkv";

/// Cross-section longitudes in survey order, which runs opposite to the profile direction.
pub const PROFILE_LONS: [f64; 59] = [
    5.913656, 5.91365083333333, 5.913643, 5.91363616666667,
    5.91362916666667, 5.91362416666667, 5.91362016666667, 5.91361516666667,
    5.91361083333333, 5.91360916666667, 5.913608, 5.91360433333333,
    5.91360033333333, 5.91359666666667, 5.913591, 5.91358466666667,
    5.91357866666667, 5.91357483333333, 5.91357133333333, 5.91356883333333,
    5.9135625, 5.91355666666667, 5.9135495, 5.91354166666667,
    5.91353316666667, 5.913522, 5.91351116666667, 5.913501,
    5.91349366666667, 5.91348466666667, 5.91347433333333, 5.9134625,
    5.91345116666667, 5.9134415, 5.91343133333333, 5.9134175,
    5.91340616666667, 5.91339466666667, 5.91338716666667, 5.91338083333333,
    5.91337616666667, 5.913372, 5.913366, 5.91335816666667,
    5.91335033333333, 5.9133445, 5.91334033333333, 5.91333666666667,
    5.91333283333333, 5.91332716666667, 5.91332, 5.913313,
    5.91330683333333, 5.91329983333333, 5.91329283333333, 5.91328883333333,
    5.91328266666667, 5.91327583333333, 5.91326916666667,
];

pub const PROFILE_LATS: [f64; 59] = [
    50.807302, 50.8073003333333, 50.8072993333333, 50.8072978333333,
    50.8072971666667, 50.8072961666667, 50.8072956666667, 50.8072946666667,
    50.8072943333333, 50.8072936666667, 50.8072928333333, 50.8072918333333,
    50.8072908333333, 50.8072891666667, 50.8072878333333, 50.8072865,
    50.807284, 50.8072825, 50.8072816666667, 50.8072808333333,
    50.8072796666667, 50.8072783333333, 50.807276, 50.8072741666667,
    50.807272, 50.8072695, 50.8072671666667, 50.807265,
    50.8072625, 50.80726, 50.8072578333333, 50.8072563333333,
    50.8072558333333, 50.807254, 50.8072528333333, 50.8072508333333,
    50.8072496666667, 50.8072476666667, 50.8072465, 50.8072455,
    50.8072451666667, 50.8072435, 50.8072421666667, 50.8072413333333,
    50.8072405, 50.8072403333333, 50.8072396666667, 50.8072395,
    50.8072391666667, 50.8072386666667, 50.8072378333333, 50.8072363333333,
    50.8072358333333, 50.807235, 50.8072348333333, 50.807235,
    50.8072343333333, 50.8072333333333, 50.8072325,
];

/// Bed elevations in metres, same order and vertical datum as `GroundControlPoints::z_0`.
pub const PROFILE_ELEVATIONS: [f64; 59] = [
    141.0, 140.9, 140.9, 140.8,
    140.7, 140.6, 140.5, 140.4,
    140.3, 140.2, 139.6, 139.4,
    139.3, 139.1, 139.1, 139.0,
    139.3, 139.0, 138.9, 138.4,
    138.3, 138.3, 138.4, 138.3,
    138.3, 138.3, 138.4, 138.4,
    138.4, 138.4, 138.4, 138.4,
    138.4, 138.4, 138.3, 138.4,
    138.4, 138.4, 138.4, 138.4,
    138.4, 138.7, 138.8, 138.9,
    139.0, 139.1, 139.3, 139.6,
    139.8, 140.0, 140.0, 140.2,
    140.3, 140.6, 140.8, 141.0,
    141.1, 141.2, 141.2,
];

fn parse_naive(value: &str) -> Result<NaiveDateTime> {
    value
        .parse::<NaiveDateTime>()
        .map_err(|e| ConfigError::InvalidTimestamp(format!("{}: {}", value, e)))
}

fn parse_utc(value: &str) -> Result<DateTime<Utc>> {
    value
        .parse::<DateTime<Utc>>()
        .map_err(|e| ConfigError::InvalidTimestamp(format!("{}: {}", value, e)))
}

pub fn hommerich_geul() -> Result<SiteSurvey> {
    let camera_type = CameraType {
        name: "Foscam E9900P".to_string(),
        lens_parameters: LensParameters {
            k1: -3.0e-6,
            c: 2.0,
            f: 4.0,
        },
    };

    let site = Site {
        name: "Hommerich - Geul".to_string(),
        uuid: "blah".to_string(),
        position: (5.91376662254334, 50.8071890242766),
        crs: 32631,
    };

    let gcps = GroundControlPoints {
        src: vec![[138.0, 270.0], [935.0, 194.0], [1322.0, 330.0], [1264.0, 867.0]],
        dst: vec![
            [5.913401333, 50.8072278333],
            [5.9133098333, 50.807340333],
            [5.9134281667, 50.8073605],
            [5.9135723333, 50.807271833],
        ],
        z_0: 138.4,
        h_ref: 0.05,
    };

    let corners = Corners {
        up_left: [8.0, 246.0],
        down_left: [1110.0, 141.0],
        down_right: [1866.0, 463.0],
        up_right: [1049.0, 1110.0],
    };

    let bathymetry = BathymetryProfile {
        lons: PROFILE_LONS.to_vec(),
        lats: PROFILE_LATS.to_vec(),
        elevations: PROFILE_ELEVATIONS.to_vec(),
    };

    let movie = MovieMetadata {
        kind: MovieKind::Normal,
        file: FileReference {
            bucket: "example".to_string(),
            identifier: "example_video.mp4".to_string(),
        },
        timestamp: parse_utc("2021-01-01T00:05:30Z")?,
        resolution: "1920x1080".to_string(),
        fps: 25.862,
        h_a: 0.1,
    };

    Ok(SiteSurvey {
        camera_type,
        site,
        gcps,
        corners,
        lens_position: [5.9136175, 50.807232333333, 143.1],
        time_start: parse_naive("2020-12-16T00:00:00")?,
        time_end: parse_naive("2020-12-31T00:00:00")?,
        bathymetry,
        movie,
        video_file: PathBuf::from(VIDEO_FILE),
    })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::{Arc, Mutex};

    use crate::site_config::aoi::AoiDelegate;
    use crate::site_config::assembly::assembler::ConfigAssembler;
    use crate::site_config::assembly::example_data::{
        hommerich_geul, PROFILE_ELEVATIONS, PROFILE_LATS, PROFILE_LONS,
    };
    use crate::site_config::assembly::types::{AssemblerConfig, SiteSurvey};
    use crate::site_config::common::error::{ConfigError, Result};
    use crate::site_config::records::{Corners, Polygon};
    use crate::site_config::reproject::CoordinateTransformer;

    const SCALE: f64 = 1000.0;

    struct MockTransformer {
        should_fail: bool,
        target: u32,
    }

    impl CoordinateTransformer for MockTransformer {
        fn source_epsg(&self) -> u32 {
            4326
        }

        fn target_epsg(&self) -> u32 {
            self.target
        }

        fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64)> {
            if self.should_fail {
                return Err(ConfigError::Projection("Mock projection error".to_string()));
            }
            Ok((lon * SCALE, lat * SCALE))
        }

        fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64)> {
            Ok((x / SCALE, y / SCALE))
        }
    }

    struct MockAoi {
        should_fail: bool,
        received_dst: Arc<Mutex<Vec<Vec<[f64; 2]>>>>,
    }

    impl AoiDelegate for MockAoi {
        fn get_aoi(&self, _src: &[[f64; 2]], dst: &[[f64; 2]], _corners: &Corners) -> Result<Polygon> {
            if self.should_fail {
                return Err(ConfigError::Aoi("Mock AOI error".to_string()));
            }
            self.received_dst.lock().unwrap().push(dst.to_vec());
            Ok(Polygon::from_bounds(0.0, 0.0, 1.0, 1.0))
        }
    }

    fn mock_assembler(
        transformer_fails: bool,
        aoi_fails: bool,
        config: AssemblerConfig,
    ) -> (ConfigAssembler<MockTransformer, MockAoi>, Arc<Mutex<Vec<Vec<[f64; 2]>>>>) {
        let received = Arc::new(Mutex::new(Vec::new()));
        let assembler = ConfigAssembler::with_custom(
            MockTransformer { should_fail: transformer_fails, target: 32631 },
            MockAoi { should_fail: aoi_fails, received_dst: received.clone() },
            config,
        )
        .unwrap();
        (assembler, received)
    }

    fn survey() -> SiteSurvey {
        hommerich_geul().unwrap()
    }

    #[test]
    fn test_config_builder() {
        let config = AssemblerConfig::builder()
            .site_crs(32632)
            .resolution(0.05)
            .aoi_window_size(31)
            .reverse_bathymetry(false)
            .build();

        assert_eq!(config.site_crs, 32632);
        assert_eq!(config.geographic_crs, 4326);
        assert_eq!(config.resolution, 0.05);
        assert_eq!(config.aoi_window_size, 31);
        assert!(!config.reverse_bathymetry);
        assert_eq!(config.camera_config_id, 1);
    }

    #[test]
    fn test_with_custom_rejects_disagreeing_config() {
        let config = AssemblerConfig::builder().site_crs(32632).build();
        let result = ConfigAssembler::with_custom(
            MockTransformer { should_fail: false, target: 32631 },
            MockAoi { should_fail: false, received_dst: Arc::new(Mutex::new(Vec::new())) },
            config,
        );

        assert!(matches!(
            result.err().unwrap(),
            ConfigError::ConfigCrsMismatch { configured: 32632, transformer: 32631 }
        ));

        let config = AssemblerConfig::builder().geographic_crs(4258).build();
        let result = ConfigAssembler::with_custom(
            MockTransformer { should_fail: false, target: 32631 },
            MockAoi { should_fail: false, received_dst: Arc::new(Mutex::new(Vec::new())) },
            config,
        );

        assert!(matches!(
            result.err().unwrap(),
            ConfigError::ConfigCrsMismatch { configured: 4258, transformer: 4326 }
        ));
    }

    #[test]
    fn test_set_config_keeps_crs_in_sync() {
        let (mut assembler, _) = mock_assembler(false, false, AssemblerConfig::default());

        let result = assembler.set_config(AssemblerConfig::builder().site_crs(32632).build());

        assert!(matches!(
            result.unwrap_err(),
            ConfigError::ConfigCrsMismatch { configured: 32632, transformer: 32631 }
        ));
        assert_eq!(assembler.config().site_crs, 32631);

        let result = assembler.set_config(AssemblerConfig::builder().resolution(0.05).build());

        assert!(result.is_ok());
        assert_eq!(assembler.config().resolution, 0.05);
    }

    #[test]
    fn test_reconfigure_rebuilds_transformer() {
        let mut assembler = ConfigAssembler::new(AssemblerConfig::default()).unwrap();
        let mut survey = survey();
        survey.site.crs = 32632;

        assembler
            .reconfigure(AssemblerConfig::builder().site_crs(32632).build())
            .unwrap();

        assert_eq!(assembler.config().site_crs, 32632);
        assert_eq!(assembler.transformer().target_epsg(), 32632);

        let mut output = Cursor::new(Vec::new());
        let result = assembler.run(&survey, &mut output).unwrap();

        // the site lies west of the zone 32 central meridian (9 degrees east)
        assert!(result.camera_config().lens_position[0] < 500_000.0);
        assert_eq!(result.bathymetry().crs, 32632);
    }

    #[test]
    fn test_reconfigure_with_unknown_code_keeps_previous_state() {
        let mut assembler = ConfigAssembler::new(AssemblerConfig::default()).unwrap();

        let result = assembler.reconfigure(AssemblerConfig::builder().site_crs(99999).build());

        assert!(matches!(result.unwrap_err(), ConfigError::UnsupportedCrs(99999)));
        assert_eq!(assembler.config().site_crs, 32631);
        assert_eq!(assembler.transformer().target_epsg(), 32631);
    }

    #[test]
    fn test_run_prints_polygon_then_bbox() {
        let (assembler, _) = mock_assembler(false, false, AssemblerConfig::default());

        let mut output = Cursor::new(Vec::new());
        let result = assembler.run(&survey(), &mut output);

        assert!(result.is_ok());
        let text = String::from_utf8(output.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "POLYGON ((8 246, 1110 141, 1866 463, 1049 1110, 8 246))",
                "POLYGON ((0 0, 1 0, 1 1, 0 1, 0 0))",
            ]
        );
    }

    #[test]
    fn test_aoi_receives_projected_gcps() {
        let (assembler, received) = mock_assembler(false, false, AssemblerConfig::default());
        let survey = survey();

        let camera_config = assembler.assemble_camera_config(&survey).unwrap();

        let expected: Vec<[f64; 2]> = survey
            .gcps
            .dst
            .iter()
            .map(|p| [p[0] * SCALE, p[1] * SCALE])
            .collect();
        let received = received.lock().unwrap();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0], expected);
        assert_eq!(camera_config.gcps.dst, expected);
        assert_eq!(camera_config.gcps.src, survey.gcps.src);
        assert_eq!(survey.gcps.dst[0], [5.913401333, 50.8072278333]);
    }

    #[test]
    fn test_lens_position_keeps_elevation() {
        let (assembler, _) = mock_assembler(false, false, AssemblerConfig::default());
        let survey = survey();

        let camera_config = assembler.assemble_camera_config(&survey).unwrap();

        assert_eq!(
            camera_config.lens_position,
            [5.9136175 * SCALE, 50.807232333333 * SCALE, 143.1]
        );
        assert_eq!(survey.lens_position, [5.9136175, 50.807232333333, 143.1]);
    }

    #[test]
    fn test_camera_config_fields_follow_config() {
        let config = AssemblerConfig::builder()
            .camera_config_id(7)
            .resolution(0.02)
            .aoi_window_size(21)
            .build();
        let (assembler, _) = mock_assembler(false, false, config);

        let camera_config = assembler.assemble_camera_config(&survey()).unwrap();

        assert_eq!(camera_config.id, 7);
        assert_eq!(camera_config.resolution, 0.02);
        assert_eq!(camera_config.aoi_window_size, 21);
        assert_eq!(camera_config.site.crs, 32631);
    }

    #[test]
    fn test_bathymetry_is_reversed_by_default() {
        let (assembler, _) = mock_assembler(false, false, AssemblerConfig::default());

        let bathymetry = assembler.assemble_bathymetry(&survey()).unwrap();

        assert_eq!(bathymetry.len(), 59);
        assert_eq!(bathymetry.crs, 32631);
        assert_eq!(
            bathymetry.coords[0],
            [PROFILE_LONS[58] * SCALE, PROFILE_LATS[58] * SCALE, PROFILE_ELEVATIONS[58]]
        );
        assert_eq!(
            bathymetry.coords[58],
            [PROFILE_LONS[0] * SCALE, PROFILE_LATS[0] * SCALE, PROFILE_ELEVATIONS[0]]
        );
    }

    #[test]
    fn test_bathymetry_in_survey_order() {
        let config = AssemblerConfig::builder().reverse_bathymetry(false).build();
        let (assembler, _) = mock_assembler(false, false, config);

        let bathymetry = assembler.assemble_bathymetry(&survey()).unwrap();

        for (i, coord) in bathymetry.coords.iter().enumerate() {
            assert_eq!(coord[2], PROFILE_ELEVATIONS[i]);
        }
    }

    #[test]
    fn test_bathymetry_length_mismatch() {
        let (assembler, _) = mock_assembler(false, false, AssemblerConfig::default());
        let mut survey = survey();
        survey.bathymetry.elevations.pop();

        let result = assembler.assemble_bathymetry(&survey);

        assert!(matches!(
            result.unwrap_err(),
            ConfigError::LengthMismatch { expected: 59, actual: 58 }
        ));
    }

    #[test]
    fn test_transformer_failure() {
        let (assembler, received) = mock_assembler(true, false, AssemblerConfig::default());

        let mut output = Cursor::new(Vec::new());
        let result = assembler.run(&survey(), &mut output);

        assert!(matches!(result.unwrap_err(), ConfigError::Projection(_)));
        assert!(received.lock().unwrap().is_empty());
    }

    #[test]
    fn test_aoi_failure() {
        let (assembler, _) = mock_assembler(false, true, AssemblerConfig::default());

        let mut output = Cursor::new(Vec::new());
        let result = assembler.run(&survey(), &mut output);

        assert!(matches!(result.unwrap_err(), ConfigError::Aoi(_)));
    }

    struct FailingWriter;

    impl std::io::Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_output_failure_is_io_error() {
        let (assembler, received) = mock_assembler(false, false, AssemblerConfig::default());

        let result = assembler.run(&survey(), &mut FailingWriter);

        match result.unwrap_err() {
            ConfigError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::BrokenPipe),
            other => panic!("unexpected error: {other}"),
        }
        assert!(received.lock().unwrap().is_empty());
    }

    #[test]
    fn test_site_crs_mismatch() {
        let (assembler, _) = mock_assembler(false, false, AssemblerConfig::default());
        let mut survey = survey();
        survey.site.crs = 32632;

        let result = assembler.assemble_camera_config(&survey);

        assert!(matches!(
            result.unwrap_err(),
            ConfigError::CrsMismatch { site: 32632, transformer: 32631 }
        ));
    }

    #[test]
    fn test_invalid_time_range() {
        let (assembler, _) = mock_assembler(false, false, AssemblerConfig::default());
        let mut survey = survey();
        std::mem::swap(&mut survey.time_start, &mut survey.time_end);

        let result = assembler.assemble_camera_config(&survey);

        assert!(matches!(result.unwrap_err(), ConfigError::InvalidTimeRange));
    }

    #[test]
    fn test_self_intersecting_corners() {
        let (assembler, received) = mock_assembler(false, false, AssemblerConfig::default());
        let mut survey = survey();
        std::mem::swap(&mut survey.corners.down_left, &mut survey.corners.down_right);

        let result = assembler.assemble_camera_config(&survey);

        assert!(matches!(result.unwrap_err(), ConfigError::InvalidCorners(_)));
        assert!(received.lock().unwrap().is_empty());
    }

    #[test]
    fn test_mismatched_gcps() {
        let (assembler, _) = mock_assembler(false, false, AssemblerConfig::default());
        let mut survey = survey();
        survey.gcps.dst.pop();

        let result = assembler.assemble_camera_config(&survey);

        assert!(matches!(
            result.unwrap_err(),
            ConfigError::LengthMismatch { expected: 4, actual: 3 }
        ));
    }

    #[test]
    fn test_movie_outside_validity_range_is_kept() {
        let (assembler, _) = mock_assembler(false, false, AssemblerConfig::default());
        let survey = survey();

        let mut output = Cursor::new(Vec::new());
        let result = assembler.run(&survey, &mut output).unwrap();

        assert!(!result
            .camera_config()
            .is_valid_at(survey.movie.timestamp.naive_utc()));
        assert_eq!(result.movie.timestamp, survey.movie.timestamp);
        assert_eq!(result.movie.fps, 25.862);
        assert_eq!(result.bathymetry().len(), 59);
    }

    #[test]
    fn test_full_pipeline_with_site_projection() {
        let assembler = ConfigAssembler::new(AssemblerConfig::default()).unwrap();
        let survey = survey();

        let mut output = Cursor::new(Vec::new());
        let result = assembler.run(&survey, &mut output).unwrap();

        let camera_config = result.camera_config();
        assert_eq!(camera_config.gcps.dst.len(), 4);
        assert_eq!(result.bathymetry().coords.len(), 59);
        assert_eq!(camera_config.lens_position[2], 143.1);

        // everything surveyed lies within a few hundred metres of the lens
        let [lx, ly, _] = camera_config.lens_position;
        for p in &camera_config.gcps.dst {
            assert!(((p[0] - lx).powi(2) + (p[1] - ly).powi(2)).sqrt() < 200.0);
        }
        for c in &result.bathymetry().coords {
            assert!(((c[0] - lx).powi(2) + (c[1] - ly).powi(2)).sqrt() < 200.0);
        }

        let bbox = camera_config.aoi_bbox.exterior();
        assert_eq!(bbox.len(), 5);
        assert_eq!(bbox[0], bbox[4]);
        for i in 0..3 {
            let e0 = [bbox[i + 1][0] - bbox[i][0], bbox[i + 1][1] - bbox[i][1]];
            let e1 = [bbox[i + 2][0] - bbox[i + 1][0], bbox[i + 2][1] - bbox[i + 1][1]];
            let dot = e0[0] * e1[0] + e0[1] * e1[1];
            let norm = (e0[0].hypot(e0[1])) * (e1[0].hypot(e1[1]));
            assert!(norm > 0.0);
            assert!((dot / norm).abs() < 1e-6, "corner {} is not square", i + 1);
        }

        let text = String::from_utf8(output.into_inner()).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.lines().all(|line| line.starts_with("POLYGON ((")));
    }

    #[test]
    fn test_json_is_plain_nested_data() {
        let (assembler, _) = mock_assembler(false, false, AssemblerConfig::default());

        let mut output = Cursor::new(Vec::new());
        let result = assembler.run(&survey(), &mut output).unwrap();
        let json = result.to_json().unwrap();

        assert!(json.contains("\"lensParameters\""));
        assert!(json.contains("\"lensPosition\""));
        assert!(json.contains("\"aoi_bbox\""));
        assert!(json.contains("\"type\": \"normal\""));
        assert!(json.contains("\"time_start\": \"2020-12-16T00:00:00\""));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let coords = value["movie"]["bathymetry"]["coords"].as_array().unwrap();
        assert_eq!(coords.len(), 59);
        assert!(coords.iter().all(|c| {
            c.as_array()
                .map(|xyz| xyz.len() == 3 && xyz.iter().all(|v| v.is_number()))
                .unwrap_or(false)
        }));
        let dst = value["movie"]["camera_config"]["gcps"]["dst"].as_array().unwrap();
        assert_eq!(dst.len(), 4);
    }
}

use std::io::Write;

use tracing::{debug, info, instrument, warn};

use crate::site_config::{
    aoi::{AoiDelegate, PerspectiveAoi},
    assembly::types::{AssembledConfiguration, AssemblerConfig, SiteSurvey},
    common::error::{ConfigError, Result},
    records::{project_lens_position, Bathymetry, CameraConfig, Movie, Site},
    reproject::{CoordinateTransformer, Proj4Transformer},
};

pub struct ConfigAssembler<T: CoordinateTransformer, A: AoiDelegate> {
    transformer: T,
    aoi: A,
    config: AssemblerConfig,
}

impl ConfigAssembler<Proj4Transformer, PerspectiveAoi> {
    pub fn new(config: AssemblerConfig) -> Result<Self> {
        let transformer = Proj4Transformer::from_epsg(config.geographic_crs, config.site_crs)?;
        Ok(Self {
            transformer,
            aoi: PerspectiveAoi,
            config,
        })
    }

    /// Replaces the configuration, rebuilding the transformer when a CRS code changes.
    pub fn reconfigure(&mut self, config: AssemblerConfig) -> Result<()> {
        if config.geographic_crs != self.transformer.source_epsg()
            || config.site_crs != self.transformer.target_epsg()
        {
            self.transformer = Proj4Transformer::from_epsg(config.geographic_crs, config.site_crs)?;
        }
        self.config = config;
        Ok(())
    }
}

impl<T: CoordinateTransformer, A: AoiDelegate> ConfigAssembler<T, A> {
    /// Fails with `ConfigCrsMismatch` when `config` names other CRS codes than `transformer`.
    pub fn with_custom(transformer: T, aoi: A, config: AssemblerConfig) -> Result<Self> {
        Self::check_crs(&transformer, &config)?;
        Ok(Self {
            transformer,
            aoi,
            config,
        })
    }

    fn check_crs(transformer: &T, config: &AssemblerConfig) -> Result<()> {
        let pairs = [
            (config.geographic_crs, transformer.source_epsg()),
            (config.site_crs, transformer.target_epsg()),
        ];
        for (configured, actual) in pairs {
            if configured != actual {
                return Err(ConfigError::ConfigCrsMismatch {
                    configured,
                    transformer: actual,
                });
            }
        }
        Ok(())
    }

    fn validate_site(&self, site: &Site) -> Result<()> {
        let target = self.transformer.target_epsg();
        if site.crs != target {
            return Err(ConfigError::CrsMismatch {
                site: site.crs,
                transformer: target,
            });
        }
        Ok(())
    }

    /// Builds the camera configuration, reprojecting GCPs and lens position.
    ///
    /// The survey keeps its geographic values; projected ones only live in the result.
    #[instrument(skip(self, survey), fields(site = %survey.site.name))]
    pub fn assemble_camera_config(&self, survey: &SiteSurvey) -> Result<CameraConfig> {
        self.validate_site(&survey.site)?;
        survey.corners.validate()?;
        if survey.time_end < survey.time_start {
            return Err(ConfigError::InvalidTimeRange);
        }

        let gcps = {
            let _span = tracing::info_span!("reproject_gcps", count = survey.gcps.len()).entered();
            survey.gcps.reprojected(&self.transformer)?
        };

        let lens_position = {
            let _span = tracing::info_span!("reproject_lens_position").entered();
            project_lens_position(survey.lens_position, &self.transformer)?
        };
        debug!(?lens_position, "Lens position in site CRS");

        let aoi_bbox = {
            let _span = tracing::info_span!("get_aoi").entered();
            self.aoi.get_aoi(&gcps.src, &gcps.dst, &survey.corners)?
        };

        info!(
            gcps = gcps.len(),
            crs = survey.site.crs,
            "Camera configuration assembled"
        );

        Ok(CameraConfig {
            id: self.config.camera_config_id,
            camera_type: survey.camera_type.clone(),
            site: survey.site.clone(),
            time_start: survey.time_start,
            time_end: survey.time_end,
            gcps,
            corners: survey.corners,
            resolution: self.config.resolution,
            lens_position,
            aoi_bbox,
            aoi_window_size: self.config.aoi_window_size,
        })
    }

    #[instrument(skip(self, survey), fields(points = survey.bathymetry.lons.len()))]
    pub fn assemble_bathymetry(&self, survey: &SiteSurvey) -> Result<Bathymetry> {
        self.validate_site(&survey.site)?;

        let profile = &survey.bathymetry;
        let bathymetry = if self.config.reverse_bathymetry {
            let reversed = |values: &[f64]| values.iter().rev().copied().collect::<Vec<_>>();
            Bathymetry::from_geographic(
                &reversed(&profile.lons),
                &reversed(&profile.lats),
                &reversed(&profile.elevations),
                &self.transformer,
            )?
        } else {
            Bathymetry::from_geographic(
                &profile.lons,
                &profile.lats,
                &profile.elevations,
                &self.transformer,
            )?
        };

        info!(points = bathymetry.len(), crs = bathymetry.crs, "Bathymetry assembled");
        Ok(bathymetry)
    }

    pub fn assemble_movie(
        &self,
        survey: &SiteSurvey,
        camera_config: CameraConfig,
        bathymetry: Bathymetry,
    ) -> Movie {
        let metadata = &survey.movie;
        if !camera_config.is_valid_at(metadata.timestamp.naive_utc()) {
            warn!(
                timestamp = %metadata.timestamp,
                time_start = %camera_config.time_start,
                time_end = %camera_config.time_end,
                "Movie recorded outside the camera configuration validity range"
            );
        }

        Movie {
            id: self.config.movie_id,
            kind: metadata.kind,
            camera_config,
            file: metadata.file.clone(),
            timestamp: metadata.timestamp,
            resolution: metadata.resolution.clone(),
            fps: metadata.fps,
            bathymetry,
            h_a: metadata.h_a,
        }
    }

    /// Assembles every record, writing the corner polygon and the AOI box to `output`.
    #[instrument(skip(self, survey, output), fields(site = %survey.site.name))]
    pub fn run(&self, survey: &SiteSurvey, output: &mut dyn Write) -> Result<AssembledConfiguration> {
        info!(video = %survey.video_file.display(), "Assembling site configuration");

        let source_polygon = survey.corners.polygon();
        writeln!(output, "{}", source_polygon)?;

        let camera_config = self.assemble_camera_config(survey)?;
        writeln!(output, "{}", camera_config.aoi_bbox)?;

        let bathymetry = self.assemble_bathymetry(survey)?;
        let movie = self.assemble_movie(survey, camera_config, bathymetry);

        Ok(AssembledConfiguration {
            source_polygon,
            movie,
        })
    }

    pub fn transformer(&self) -> &T {
        &self.transformer
    }

    pub fn config(&self) -> &AssemblerConfig {
        &self.config
    }

    /// Replaces the configuration; the CRS codes must still match the transformer.
    pub fn set_config(&mut self, config: AssemblerConfig) -> Result<()> {
        Self::check_crs(&self.transformer, &config)?;
        self.config = config;
        Ok(())
    }
}

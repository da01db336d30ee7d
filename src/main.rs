use orc_site_config_rs::logger;
use orc_site_config_rs::site_config::assembly::example_data;
use orc_site_config_rs::site_config::{AssemblerConfig, ConfigAssembler, CoordinateTransformer};

use tracing::{debug, error, info};

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting site configuration assembly...");

    let config = AssemblerConfig::builder()
        .site_crs(32631)
        .resolution(0.01)
        .aoi_window_size(15)
        .build();
    let assembler = ConfigAssembler::new(config)?;

    info!(
        "Reprojecting EPSG:{} -> EPSG:{}",
        assembler.transformer().source_epsg(),
        assembler.transformer().target_epsg()
    );

    let survey = example_data::hommerich_geul()?;
    info!("Site: {} ({})", survey.site.name, survey.camera_type.name);

    let stdout = std::io::stdout();
    let mut output = stdout.lock();
    let assembled = match assembler.run(&survey, &mut output) {
        Ok(assembled) => assembled,
        Err(e) => {
            error!("Assembly failed: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Assembly complete: {} GCPs, {} bathymetry points",
        assembled.camera_config().gcps.len(),
        assembled.bathymetry().len()
    );
    debug!("Configuration:\n{}", assembled.to_json()?);

    Ok(())
}

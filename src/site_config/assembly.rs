//! Site configuration assembly
//!
//! Orchestrates reprojection and the area-of-interest computation to turn a field
//! survey into camera configuration, bathymetry and movie records.

mod assembler;
pub mod example_data;
pub mod types;

#[cfg(test)]
mod tests;

pub use assembler::ConfigAssembler;
pub use types::{
    AssembledConfiguration, AssemblerConfig, AssemblerConfigBuilder, BathymetryProfile,
    MovieMetadata, SiteSurvey,
};

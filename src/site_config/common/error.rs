use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unsupported coordinate reference system: EPSG:{0}")]
    UnsupportedCrs(u32),

    #[error("Coordinate transformation failed: {0}")]
    Projection(String),

    #[error("Coordinate sequence length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Site CRS EPSG:{site} does not match transformer target EPSG:{transformer}")]
    CrsMismatch { site: u32, transformer: u32 },

    #[error("Configured CRS EPSG:{configured} does not match transformer EPSG:{transformer}")]
    ConfigCrsMismatch { configured: u32, transformer: u32 },

    #[error("Invalid corner points: {0}")]
    InvalidCorners(String),

    #[error("Validity range ends before it starts")]
    InvalidTimeRange,

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Area of interest computation failed: {0}")]
    Aoi(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

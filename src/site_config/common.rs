//! Common utilities module
//!
//! This module contains shared utilities used across the site configuration pipeline.

pub mod error;

pub use error::{ConfigError, Result};

//! Error types for configuration and level loading

use breach_physics::error::PhysicsError;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration and level loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is not valid TOML for the expected shape
    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// Level geometry is malformed
    #[error("Invalid level geometry: {0}")]
    Geometry(#[from] PhysicsError),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

pub(crate) fn read_file(path: &std::path::Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

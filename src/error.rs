//! Error types for zoomclust.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ZoomClustError>;

#[derive(Debug, Error)]
pub enum ZoomClustError {
    /// No cell size is configured for a zoom level the run has to process.
    #[error("No cluster size configured for zoom level {zoom}")]
    MissingClusterSize { zoom: u8 },

    /// An input record lacks one of the fields clustering reads.
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[cfg(feature = "toml")]
    #[error("TOML error: {0}")]
    Toml(String),
}

//! Clusterer builder for flexible configuration
//!
//! Collects zoom range and cell sizes and validates them once at `build`.

use crate::clusterer::ZoomLevelClusterer;
use crate::config::ClustererConfig;
use crate::error::Result;
use std::collections::BTreeMap;

/// Builder for a [`ZoomLevelClusterer`], starting from the default configuration.
///
/// # Examples
///
/// ```rust
/// use zoomclust::ClustererBuilder;
///
/// let clusterer = ClustererBuilder::new()
///     .min_zoom(2)
///     .cluster_size(2, 2800.0)
///     .build()?;
/// assert_eq!(clusterer.config().zoom_levels().len(), 7);
/// # Ok::<(), zoomclust::ZoomClustError>(())
/// ```
#[derive(Debug, Default)]
pub struct ClustererBuilder {
    config: ClustererConfig,
}

impl ClustererBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// First zoom level to cluster (inclusive).
    pub fn min_zoom(mut self, zoom: u8) -> Self {
        self.config.min_zoom = zoom;
        self
    }

    /// End of the clustered range (exclusive); also the fallback zoom level.
    pub fn max_zoom(mut self, zoom: u8) -> Self {
        self.config.max_zoom = zoom;
        self
    }

    /// Set the cell size in kilometers for one zoom level.
    pub fn cluster_size(mut self, zoom: u8, size_km: f64) -> Self {
        self.config.cluster_size.insert(zoom, size_km);
        self
    }

    /// Replace the whole zoom-to-size table.
    pub fn cluster_sizes(mut self, sizes: BTreeMap<u8, f64>) -> Self {
        self.config.cluster_size = sizes;
        self
    }

    /// Start from an existing configuration.
    pub fn config(mut self, config: ClustererConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate the configuration and create the clusterer.
    pub fn build(self) -> Result<ZoomLevelClusterer> {
        self.config.validate()?;
        Ok(ZoomLevelClusterer::new(self.config))
    }
}

//! Clusterer configuration
//!
//! Zoom range and per-zoom cell sizes, loadable from JSON or (with the
//! `toml` feature) TOML.

use crate::error::{Result, ZoomClustError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Configuration for a [`ZoomLevelClusterer`](crate::ZoomLevelClusterer).
///
/// Zoom levels in `min_zoom..max_zoom` are clustered; `max_zoom` itself is the
/// level every record starts at and keeps if it never represents a cluster.
///
/// # Example
///
/// ```rust
/// use zoomclust::ClustererConfig;
///
/// let config = ClustererConfig::default();
/// assert_eq!(config.cluster_size_for(3).unwrap(), 1400.0);
///
/// let json = r#"{
///     "min_zoom": 2,
///     "max_zoom": 4,
///     "cluster_size": {"2": 2800, "3": 1400}
/// }"#;
/// let config = ClustererConfig::from_json(json).unwrap();
/// assert_eq!(config.zoom_levels().collect::<Vec<_>>(), vec![2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClustererConfig {
    /// First zoom level clustered (inclusive)
    #[serde(default = "ClustererConfig::default_min_zoom")]
    pub min_zoom: u8,

    /// End of the clustered range (exclusive) and the fallback zoom level
    #[serde(default = "ClustererConfig::default_max_zoom")]
    pub max_zoom: u8,

    /// Cell side length in kilometers for each zoom level
    #[serde(
        default = "ClustererConfig::default_cluster_sizes",
        with = "zoom_keys"
    )]
    pub cluster_size: BTreeMap<u8, f64>,
}

impl ClustererConfig {
    const fn default_min_zoom() -> u8 {
        3
    }

    const fn default_max_zoom() -> u8 {
        9
    }

    fn default_cluster_sizes() -> BTreeMap<u8, f64> {
        BTreeMap::from([
            (3, 1400.0),
            (4, 700.0),
            (5, 350.0),
            (6, 175.0),
            (7, 88.0),
            (8, 44.0),
        ])
    }

    pub fn with_min_zoom(mut self, zoom: u8) -> Self {
        self.min_zoom = zoom;
        self
    }

    pub fn with_max_zoom(mut self, zoom: u8) -> Self {
        self.max_zoom = zoom;
        self
    }

    /// Set or replace the cell size for one zoom level.
    pub fn with_cluster_size(mut self, zoom: u8, size_km: f64) -> Self {
        self.cluster_size.insert(zoom, size_km);
        self
    }

    /// Replace the whole zoom-to-size table.
    pub fn with_cluster_sizes(mut self, sizes: BTreeMap<u8, f64>) -> Self {
        self.cluster_size = sizes;
        self
    }

    /// Zoom levels a run processes, coarsest first.
    pub fn zoom_levels(&self) -> std::ops::Range<u8> {
        self.min_zoom..self.max_zoom
    }

    /// Cell size for `zoom`, in kilometers.
    pub fn cluster_size_for(&self, zoom: u8) -> Result<f64> {
        self.cluster_size
            .get(&zoom)
            .copied()
            .ok_or(ZoomClustError::MissingClusterSize { zoom })
    }

    /// Validate configuration values
    ///
    /// Sizes are not range-checked: a zero or negative size is a legal, if
    /// degenerate, cell.
    pub fn validate(&self) -> Result<()> {
        if self.min_zoom > self.max_zoom {
            return Err(ZoomClustError::InvalidConfig(format!(
                "min_zoom ({}) must be <= max_zoom ({})",
                self.min_zoom, self.max_zoom
            )));
        }

        for zoom in self.zoom_levels() {
            self.cluster_size_for(zoom)?;
        }

        Ok(())
    }

    /// Load configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ClustererConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration as JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load configuration from TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: ClustererConfig =
            toml::from_str(toml_str).map_err(|e| ZoomClustError::Toml(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration as TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ZoomClustError::Toml(e.to_string()))
    }
}

impl Default for ClustererConfig {
    fn default() -> Self {
        Self {
            min_zoom: Self::default_min_zoom(),
            max_zoom: Self::default_max_zoom(),
            cluster_size: Self::default_cluster_sizes(),
        }
    }
}

/// Zoom-keyed maps go through string keys so TOML tables can hold them.
mod zoom_keys {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::collections::BTreeMap;

    pub fn serialize<S>(map: &BTreeMap<u8, f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let keyed: BTreeMap<String, f64> =
            map.iter().map(|(zoom, size)| (zoom.to_string(), *size)).collect();
        keyed.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BTreeMap<u8, f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let keyed = BTreeMap::<String, f64>::deserialize(deserializer)?;
        keyed
            .into_iter()
            .map(|(key, size)| {
                key.trim()
                    .parse::<u8>()
                    .map(|zoom| (zoom, size))
                    .map_err(|_| D::Error::custom(format!("invalid zoom level key: {:?}", key)))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ClustererConfig::default();
        assert_eq!(config.min_zoom, 3);
        assert_eq!(config.max_zoom, 9);
        assert_eq!(config.cluster_size.len(), 6);
        assert_eq!(config.cluster_size_for(8).unwrap(), 44.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_are_per_instance() {
        let mut first = ClustererConfig::default();
        first.cluster_size.insert(3, 1.0);

        let second = ClustererConfig::default();
        assert_eq!(second.cluster_size_for(3).unwrap(), 1400.0);
    }

    #[test]
    fn test_missing_cluster_size() {
        let config = ClustererConfig::default().with_max_zoom(10);
        match config.validate() {
            Err(ZoomClustError::MissingClusterSize { zoom }) => assert_eq!(zoom, 9),
            other => panic!("unexpected result: {:?}", other),
        }

        let fixed = config.with_cluster_size(9, 22.0);
        assert!(fixed.validate().is_ok());
    }

    #[test]
    fn test_inverted_zoom_range_rejected() {
        let config = ClustererConfig::default().with_min_zoom(10);
        assert!(matches!(
            config.validate(),
            Err(ZoomClustError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_empty_range_needs_no_sizes() {
        let config = ClustererConfig::default()
            .with_min_zoom(5)
            .with_max_zoom(5)
            .with_cluster_sizes(BTreeMap::new());
        assert!(config.validate().is_ok());
        assert_eq!(config.zoom_levels().count(), 0);
    }

    #[test]
    fn test_degenerate_sizes_allowed() {
        let config = ClustererConfig::default()
            .with_cluster_size(3, 0.0)
            .with_cluster_size(4, -5.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = ClustererConfig::default()
            .with_min_zoom(4)
            .with_max_zoom(6)
            .with_cluster_size(5, 300.0);

        let json = config.to_json().unwrap();
        assert!(json.contains("\"5\": 300.0"));

        let deserialized = ClustererConfig::from_json(&json).unwrap();
        assert_eq!(deserialized, config);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = ClustererConfig::from_json(r#"{"max_zoom": 6}"#).unwrap();
        assert_eq!(config.min_zoom, 3);
        assert_eq!(config.max_zoom, 6);
        assert_eq!(config.cluster_size_for(4).unwrap(), 700.0);
    }

    #[test]
    fn test_invalid_json_config() {
        let missing = ClustererConfig::from_json(r#"{"max_zoom": 6, "cluster_size": {"3": 1400}}"#);
        assert!(matches!(
            missing,
            Err(ZoomClustError::MissingClusterSize { zoom: 4 })
        ));

        let bad_key = ClustererConfig::from_json(r#"{"cluster_size": {"three": 1400}}"#);
        assert!(matches!(bad_key, Err(ZoomClustError::Serialization(_))));
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
min_zoom = 3
max_zoom = 5

[cluster_size]
3 = 1400
4 = 700.5
"#;
        let config = ClustererConfig::from_toml(toml_str).unwrap();
        assert_eq!(config.cluster_size_for(4).unwrap(), 700.5);

        let rendered = config.to_toml().unwrap();
        let reparsed = ClustererConfig::from_toml(&rendered).unwrap();
        assert_eq!(reparsed, config);
    }
}

//! Greedy per-zoom clustering that decides when each record becomes visible.
//!
//! For every zoom level from coarsest to finest the records are ranked
//! (capitals, then popularity), then dropped one by one into the first
//! existing cell that contains them, or seed a new cell sized for that zoom.
//! The first member of each cell is its representative and becomes visible
//! at that zoom unless it already was at a coarser one. Cells are rebuilt
//! from scratch at every zoom level.

use crate::builder::ClustererBuilder;
use crate::cluster::Cluster;
use crate::config::ClustererConfig;
use crate::error::Result;
use crate::record::{ZoomRecord, priority_order};
use crate::stats::{ClusterReport, ZoomPassStats};

/// Assigns each record the minimum zoom level at which it is shown.
///
/// # Examples
///
/// ```rust
/// use zoomclust::{City, ZoomLevelClusterer};
///
/// let mut cities = vec![
///     City::new(48.8566, 2.3522).with_capital(true).with_popularity(9.0),
///     City::new(48.8049, 2.1204).with_popularity(4.0), // Versailles
///     City::new(45.7640, 4.8357).with_popularity(6.0), // Lyon
/// ];
///
/// let clusterer = ZoomLevelClusterer::default();
/// clusterer.execute(&mut cities)?;
///
/// // Paris shows first; Versailles never separates from it
/// assert_eq!(cities[0].zoom_level, Some(3));
/// assert_eq!(cities[2].zoom_level, Some(9));
/// # Ok::<(), zoomclust::ZoomClustError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ZoomLevelClusterer {
    config: ClustererConfig,
}

impl ZoomLevelClusterer {
    /// Create a clusterer. The configuration is checked when a run starts.
    pub fn new(config: ClustererConfig) -> Self {
        Self { config }
    }

    pub fn builder() -> ClustererBuilder {
        ClustererBuilder::new()
    }

    pub fn config(&self) -> &ClustererConfig {
        &self.config
    }

    /// Cluster `records` in place.
    ///
    /// Every record's zoom level is reset to `max_zoom`, then lowered to the
    /// first zoom at which it represents a cell. The slice is left in priority
    /// order (stable, so equal-priority records keep their relative order).
    ///
    /// # Errors
    ///
    /// Returns [`ZoomClustError::MissingClusterSize`](crate::ZoomClustError::MissingClusterSize)
    /// if a zoom level in range has no cell size. This is checked before any
    /// record is touched.
    pub fn execute<R: ZoomRecord>(&self, records: &mut [R]) -> Result<ClusterReport> {
        let passes = self
            .config
            .zoom_levels()
            .map(|zoom| self.config.cluster_size_for(zoom).map(|size| (zoom, size)))
            .collect::<Result<Vec<_>>>()?;

        for record in records.iter_mut() {
            record.set_zoom_level(self.config.max_zoom);
        }

        let mut report = ClusterReport::new(records.len());

        for (zoom, size_km) in passes {
            log::info!("Processing zoom {}", zoom);
            if !(size_km.is_finite() && size_km > 0.0) {
                log::warn!(
                    "Degenerate cluster size {} km at zoom {}; cells will hold at most their seed",
                    size_km,
                    zoom
                );
            }

            // Re-ranked every pass; the order carries over to the next one.
            records.sort_by(priority_order);

            let clusters = build_clusters(records, size_km);
            let mut promoted = 0;
            for main in clusters.iter().filter_map(Cluster::main_item) {
                let record = &mut records[main];
                if record.zoom_level().is_none_or(|current| current > zoom) {
                    record.set_zoom_level(zoom);
                    promoted += 1;
                }
            }

            log::debug!(
                "Zoom {}: {} clusters, {} representatives promoted",
                zoom,
                clusters.len(),
                promoted
            );
            report.record_pass(ZoomPassStats {
                zoom,
                cell_size_km: size_km,
                clusters: clusters.len(),
                representatives_promoted: promoted,
            });
        }

        Ok(report)
    }

    /// Consuming form of [`execute`](Self::execute); returns the records in
    /// their final order.
    pub fn cluster<R: ZoomRecord>(&self, mut records: Vec<R>) -> Result<Vec<R>> {
        self.execute(&mut records)?;
        Ok(records)
    }
}

/// Partition `records`, in their current order, into cells of `size_km`.
///
/// Each record joins the first cell, in creation order, whose bounds contain
/// it; otherwise it seeds a new cell. Cells may overlap geometrically but
/// every record belongs to exactly one.
pub fn build_clusters<R: ZoomRecord>(records: &[R], size_km: f64) -> Vec<Cluster> {
    let mut clusters: Vec<Cluster> = Vec::new();

    for (index, record) in records.iter().enumerate() {
        let point = record.point();
        match clusters.iter_mut().find(|c| c.contains(&point)) {
            Some(cluster) => cluster.add_item(index),
            None => {
                let mut cluster = Cluster::new(point, size_km);
                cluster.add_item(index);
                clusters.push(cluster);
            }
        }
    }

    clusters
}

/// Records shown on a map at `zoom`.
pub fn visible_at<R: ZoomRecord>(records: &[R], zoom: u8) -> impl Iterator<Item = &R> {
    records
        .iter()
        .filter(move |r| r.zoom_level().is_some_and(|level| level <= zoom))
}

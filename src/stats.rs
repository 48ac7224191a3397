//! Run statistics reported by the clusterer.

use serde::{Deserialize, Serialize};

/// Outcome of one zoom pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoomPassStats {
    pub zoom: u8,
    /// Cell side length used for this pass, in kilometers
    pub cell_size_km: f64,
    /// Number of clusters (cells) created
    pub clusters: usize,
    /// Representatives whose zoom level was lowered to `zoom`
    pub representatives_promoted: usize,
}

/// Summary of a whole [`execute`](crate::ZoomLevelClusterer::execute) run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusterReport {
    /// Number of records processed
    pub record_count: usize,
    /// One entry per zoom pass, coarsest first
    pub passes: Vec<ZoomPassStats>,
}

impl ClusterReport {
    pub fn new(record_count: usize) -> Self {
        Self {
            record_count,
            passes: Vec::new(),
        }
    }

    /// Record a finished pass
    pub fn record_pass(&mut self, stats: ZoomPassStats) {
        self.passes.push(stats);
    }

    pub fn pass(&self, zoom: u8) -> Option<&ZoomPassStats> {
        self.passes.iter().find(|p| p.zoom == zoom)
    }

    /// Records that became visible below the fallback zoom level.
    pub fn total_promoted(&self) -> usize {
        self.passes.iter().map(|p| p.representatives_promoted).sum()
    }
}

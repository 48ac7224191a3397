//! Offline zoom-level assignment for map markers by greedy spatial clustering.
//!
//! For each zoom level, nearby records collapse into one cell and only the
//! cell's first record is shown; finer zoom levels use smaller cells, so more
//! records unlock as the map zooms in.
//!
//! ```rust
//! use zoomclust::{City, ZoomLevelClusterer};
//!
//! let mut cities = vec![
//!     City::new(0.0, 0.0),
//!     City::new(0.0, 0.001),
//! ];
//!
//! ZoomLevelClusterer::default().execute(&mut cities)?;
//! assert_eq!(cities[0].zoom_level, Some(3));
//! assert_eq!(cities[1].zoom_level, Some(9));
//! # Ok::<(), zoomclust::ZoomClustError>(())
//! ```

pub mod builder;
pub mod cluster;
pub mod clusterer;
pub mod config;
pub mod error;
pub mod geodesy;
pub mod io;
pub mod record;
pub mod stats;
pub mod validation;

pub use builder::ClustererBuilder;
pub use cluster::Cluster;
pub use clusterer::{ZoomLevelClusterer, build_clusters, visible_at};
pub use config::ClustererConfig;
pub use error::{Result, ZoomClustError};
pub use geodesy::{EARTH_RADIUS_KM, destination_point, distance};
pub use record::ZoomRecord;
pub use stats::{ClusterReport, ZoomPassStats};

pub use geo::Point;
pub use zoomclust_types::bbox::CellBounds;
pub use zoomclust_types::city::City;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {
    pub use crate::{
        City, ClustererBuilder, ClustererConfig, Result, ZoomClustError, ZoomLevelClusterer,
        ZoomRecord,
    };

    pub use geo::Point;

    pub use crate::geodesy::{destination_point, distance};
}

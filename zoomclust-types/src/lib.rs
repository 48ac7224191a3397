//! # zoomclust-types
//!
//! Core record and bounding-box types for zoomclust.
//!
//! - **Records**: `City`, a geographic point with a priority (capital flag,
//!   popularity), an output `zoom_level` and arbitrary pass-through properties
//! - **Boxes**: `CellBounds`, the lat/lon cell a cluster covers at one zoom level
//!
//! All types are serializable with Serde and built on top of the `geo` crate's
//! geometric primitives.
//!
//! ## Examples
//!
//! ```rust
//! use zoomclust_types::city::City;
//!
//! let paris = City::new(48.8566, 2.3522)
//!     .with_capital(true)
//!     .with_popularity(9.5)
//!     .with_property("name", "Paris");
//! assert_eq!(paris.point().x(), 2.3522);
//! ```

pub mod bbox;
pub mod city;

//! The view of a record the clusterer needs.

use geo::Point;
use std::cmp::Ordering;
use zoomclust_types::city::City;

/// A geographic record that can be ranked and assigned a zoom level.
///
/// Implemented for [`City`]; implement it for your own type to cluster
/// records without converting them.
pub trait ZoomRecord {
    /// Location (x = longitude, y = latitude).
    fn point(&self) -> Point;

    fn is_capital(&self) -> bool;

    fn popularity(&self) -> f64;

    fn zoom_level(&self) -> Option<u8>;

    fn set_zoom_level(&mut self, zoom: u8);
}

impl ZoomRecord for City {
    fn point(&self) -> Point {
        City::point(self)
    }

    fn is_capital(&self) -> bool {
        self.is_capital
    }

    fn popularity(&self) -> f64 {
        self.popularity
    }

    fn zoom_level(&self) -> Option<u8> {
        self.zoom_level
    }

    fn set_zoom_level(&mut self, zoom: u8) {
        self.zoom_level = Some(zoom);
    }
}

/// Display priority: capitals first, then higher popularity first.
///
/// `0.0` and `-0.0` compare equal; NaN falls back to `f64::total_cmp` so the
/// result is a total order and safe for `sort_by`.
pub fn priority_order<R: ZoomRecord>(a: &R, b: &R) -> Ordering {
    b.is_capital()
        .cmp(&a.is_capital())
        .then_with(|| descending(a.popularity(), b.popularity()))
}

fn descending(a: f64, b: f64) -> Ordering {
    if a == b {
        Ordering::Equal
    } else {
        b.total_cmp(&a)
    }
}

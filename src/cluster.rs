//! A single map cell and the records that fell into it during one zoom pass.

use crate::geodesy::cardinal_points;
use geo::Point;
use smallvec::SmallVec;
use zoomclust_types::bbox::CellBounds;

/// A cell seeded at one record's location.
///
/// The cell is roughly `size_km` on a side: its edges are the seed projected
/// half that distance north, east, south and west, so at higher latitudes it
/// spans more degrees of longitude. Members are indices into the record
/// slice being clustered, in arrival order.
#[derive(Debug, Clone)]
pub struct Cluster {
    center: Point,
    bounds: CellBounds,
    items: SmallVec<[usize; 4]>,
}

impl Cluster {
    /// Create an empty cluster centered on `center` (x = lon, y = lat).
    ///
    /// A non-positive size is accepted and yields a cell that holds at most
    /// the seed (size 0) or nothing (negative size, inverted edges).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zoomclust::Cluster;
    /// use geo::Point;
    ///
    /// let cluster = Cluster::new(Point::new(0.0, 0.0), 1400.0);
    /// assert!(cluster.contains(&Point::new(5.0, -5.0)));
    /// assert!(!cluster.contains(&Point::new(7.0, 0.0)));
    /// ```
    pub fn new(center: Point, size_km: f64) -> Self {
        let [north, east, south, west] = cardinal_points(&center, size_km / 2.0);
        Self {
            center,
            bounds: CellBounds::new(south.y(), west.x(), north.y(), east.x()),
            items: SmallVec::new(),
        }
    }

    /// The seed location, not a centroid.
    pub fn center(&self) -> Point {
        self.center
    }

    pub fn bounds(&self) -> &CellBounds {
        &self.bounds
    }

    #[inline]
    pub fn contains(&self, point: &Point) -> bool {
        self.bounds.contains(point)
    }

    pub fn add_item(&mut self, index: usize) {
        self.items.push(index);
    }

    pub fn items(&self) -> &[usize] {
        &self.items
    }

    /// First member to arrive; the cluster's representative.
    pub fn main_item(&self) -> Option<usize> {
        self.items.first().copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

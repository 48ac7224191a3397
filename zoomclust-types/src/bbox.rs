use geo::{Coord, Point, Rect};
use serde::{Deserialize, Serialize};

/// A lat/lon cell covered by one cluster.
///
/// Unlike `geo::Rect`, the edges are stored exactly as computed and never
/// reordered: a cell built from a negative size stays inverted and contains
/// no point at all.
///
/// No longitude wraparound is applied, so a cell whose edges straddle the
/// antimeridian will not contain points on the far side of it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellBounds {
    /// Southern edge (minimum latitude)
    pub south: f64,
    /// Western edge (minimum longitude)
    pub west: f64,
    /// Northern edge (maximum latitude)
    pub north: f64,
    /// Eastern edge (maximum longitude)
    pub east: f64,
}

impl CellBounds {
    /// Create a cell from its four edges, in degrees.
    ///
    /// # Examples
    ///
    /// ```
    /// use zoomclust_types::bbox::CellBounds;
    /// use geo::Point;
    ///
    /// let cell = CellBounds::new(40.7, -74.0, 40.8, -73.9);
    /// assert!(cell.contains(&Point::new(-73.95, 40.75)));
    /// ```
    pub fn new(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self {
            south,
            west,
            north,
            east,
        }
    }

    /// Build a cell from its south-west and north-east corners (x = lon, y = lat).
    pub fn from_corners(south_west: Coord, north_east: Coord) -> Self {
        Self::new(south_west.y, south_west.x, north_east.y, north_east.x)
    }

    pub fn south_west(&self) -> Coord {
        Coord {
            x: self.west,
            y: self.south,
        }
    }

    pub fn north_east(&self) -> Coord {
        Coord {
            x: self.east,
            y: self.north,
        }
    }

    /// Check whether a point (x = lon, y = lat) lies in the cell, edges included.
    #[inline]
    pub fn contains(&self, point: &Point) -> bool {
        self.south <= point.y()
            && point.y() <= self.north
            && self.west <= point.x()
            && point.x() <= self.east
    }

    /// True when either pair of opposite edges is reversed.
    pub fn is_inverted(&self) -> bool {
        self.south > self.north || self.west > self.east
    }

    pub fn width_degrees(&self) -> f64 {
        self.east - self.west
    }

    pub fn height_degrees(&self) -> f64 {
        self.north - self.south
    }

    /// Convert into a `geo::Rect`. Returns `None` for inverted or non-finite
    /// cells, which `Rect` would otherwise silently normalize.
    pub fn to_rect(&self) -> Option<Rect> {
        let finite = [self.south, self.west, self.north, self.east]
            .iter()
            .all(|v| v.is_finite());
        if !finite || self.is_inverted() {
            return None;
        }
        Some(Rect::new(self.south_west(), self.north_east()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let cell = CellBounds::new(-1.0, -2.0, 1.0, 2.0);
        assert!(cell.contains(&Point::new(0.0, 0.0)));
        assert!(cell.contains(&Point::new(-2.0, -1.0)));
        assert!(cell.contains(&Point::new(2.0, 1.0)));
        assert!(!cell.contains(&Point::new(2.0001, 0.0)));
        assert!(!cell.contains(&Point::new(0.0, -1.0001)));
    }

    #[test]
    fn test_inverted_cell_contains_nothing() {
        let cell = CellBounds::new(1.0, 1.0, -1.0, -1.0);
        assert!(cell.is_inverted());
        assert!(!cell.contains(&Point::new(0.0, 0.0)));
        assert!(!cell.contains(&Point::new(1.0, 1.0)));
        assert!(cell.to_rect().is_none());
    }

    #[test]
    fn test_degenerate_cell_contains_its_point() {
        let cell = CellBounds::new(10.0, 20.0, 10.0, 20.0);
        assert!(!cell.is_inverted());
        assert!(cell.contains(&Point::new(20.0, 10.0)));
        assert_eq!(cell.width_degrees(), 0.0);
    }

    #[test]
    fn test_corners() {
        let cell = CellBounds::from_corners(
            Coord { x: -74.0, y: 40.7 },
            Coord { x: -73.9, y: 40.8 },
        );
        assert_eq!(cell.south, 40.7);
        assert_eq!(cell.west, -74.0);
        assert_eq!(cell.north_east(), Coord { x: -73.9, y: 40.8 });

        let rect = cell.to_rect().unwrap();
        assert_eq!(rect.min().x, -74.0);
        assert_eq!(rect.max().y, 40.8);
    }

    #[test]
    fn test_nan_edges_contain_nothing() {
        let cell = CellBounds::new(f64::NAN, 0.0, 1.0, 1.0);
        assert!(!cell.contains(&Point::new(0.5, 0.5)));
        assert!(cell.to_rect().is_none());
    }
}

//! Validation for geographic coordinates.
//!
//! Opt-in: the clusterer itself accepts whatever coordinates it is given.

use crate::error::{Result, ZoomClustError};
use crate::record::ZoomRecord;
use geo::Point;

/// Validates a point (x = lon, y = lat) has valid longitude and latitude.
///
/// Longitude: [-180.0, 180.0], Latitude: [-90.0, 90.0]
///
/// # Examples
///
/// ```
/// use zoomclust::validation::validate_coordinates;
/// use geo::Point;
///
/// assert!(validate_coordinates(&Point::new(-74.0060, 40.7128)).is_ok());
/// assert!(validate_coordinates(&Point::new(200.0, 40.0)).is_err());
/// assert!(validate_coordinates(&Point::new(-74.0, 95.0)).is_err());
/// ```
pub fn validate_coordinates(point: &Point) -> Result<()> {
    let (lon, lat) = (point.x(), point.y());

    if !lon.is_finite() {
        return Err(ZoomClustError::InvalidInput(format!(
            "Longitude must be finite, got: {}",
            lon
        )));
    }

    if !lat.is_finite() {
        return Err(ZoomClustError::InvalidInput(format!(
            "Latitude must be finite, got: {}",
            lat
        )));
    }

    if !(-180.0..=180.0).contains(&lon) {
        return Err(ZoomClustError::InvalidInput(format!(
            "Longitude out of range [-180.0, 180.0]: {}",
            lon
        )));
    }

    if !(-90.0..=90.0).contains(&lat) {
        return Err(ZoomClustError::InvalidInput(format!(
            "Latitude out of range [-90.0, 90.0]: {}",
            lat
        )));
    }

    Ok(())
}

/// Validates every record's location and popularity.
pub fn validate_records<R: ZoomRecord>(records: &[R]) -> Result<()> {
    for (idx, record) in records.iter().enumerate() {
        validate_coordinates(&record.point())
            .map_err(|e| ZoomClustError::InvalidInput(format!("Record at index {}: {}", idx, e)))?;

        if record.popularity().is_nan() {
            return Err(ZoomClustError::InvalidInput(format!(
                "Record at index {}: popularity is NaN",
                idx
            )));
        }
    }
    Ok(())
}

//! Reading and writing city records as JSON or GeoJSON.
//!
//! Interchange helpers for the data-loading and export steps around a
//! clustering run. Unknown fields are carried through untouched.

use crate::error::{Result, ZoomClustError};
use serde_json::Value;
use zoomclust_types::city::City;

/// Converts one JSON object into a [`City`], naming the first missing
/// required field if any.
pub fn city_from_value(value: Value) -> Result<City> {
    let object = value
        .as_object()
        .ok_or_else(|| ZoomClustError::InvalidInput("City record must be a JSON object".into()))?;

    if let Some(field) = City::REQUIRED_FIELDS
        .iter()
        .find(|field| !object.contains_key(**field))
    {
        return Err(ZoomClustError::MissingField((*field).to_string()));
    }

    Ok(serde_json::from_value(value)?)
}

/// Parses a JSON array of city objects.
///
/// # Examples
///
/// ```rust
/// use zoomclust::io::cities_from_json;
///
/// let json = r#"[{"lat": 41.9, "lon": 12.5, "is_capital": true, "popularity": 8, "name": "Rome"}]"#;
/// let cities = cities_from_json(json)?;
/// assert_eq!(cities[0].property("name").unwrap(), "Rome");
/// # Ok::<(), zoomclust::ZoomClustError>(())
/// ```
pub fn cities_from_json(json: &str) -> Result<Vec<City>> {
    let value: Value = serde_json::from_str(json)?;
    match value {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(idx, item)| {
                city_from_value(item).map_err(|e| match e {
                    ZoomClustError::MissingField(field) => {
                        ZoomClustError::MissingField(format!("{} (record {})", field, idx))
                    }
                    other => other,
                })
            })
            .collect(),
        _ => Err(ZoomClustError::InvalidInput(
            "Expected a JSON array of city records".to_string(),
        )),
    }
}

/// Serializes cities as a JSON array, including `zoom_level` where set.
pub fn cities_to_json(cities: &[City]) -> Result<String> {
    Ok(serde_json::to_string(cities)?)
}

#[cfg(feature = "geojson")]
pub use self::geojson_io::{cities_from_geojson, cities_to_geojson};

#[cfg(feature = "geojson")]
mod geojson_io {
    use super::city_from_value;
    use crate::error::{Result, ZoomClustError};
    use geojson::{Feature, FeatureCollection, Geometry, Value as GeoValue};
    use serde_json::{Map, Value};
    use zoomclust_types::city::City;

    /// Parses a FeatureCollection of Point features into cities.
    ///
    /// Longitude and latitude come from the geometry; every other field,
    /// `is_capital` and `popularity` included, from `properties`.
    pub fn cities_from_geojson(geojson: &str) -> Result<Vec<City>> {
        let collection: FeatureCollection = serde_json::from_str(geojson)
            .map_err(|e| ZoomClustError::InvalidInput(format!("Failed to parse GeoJSON: {}", e)))?;

        collection
            .features
            .into_iter()
            .enumerate()
            .map(|(idx, feature)| city_from_feature(feature, idx))
            .collect()
    }

    fn city_from_feature(feature: Feature, idx: usize) -> Result<City> {
        let coords = match feature.geometry.map(|g| g.value) {
            Some(GeoValue::Point(coords)) => coords,
            Some(_) => {
                return Err(ZoomClustError::InvalidInput(format!(
                    "Feature {}: geometry is not a Point",
                    idx
                )));
            }
            None => {
                return Err(ZoomClustError::InvalidInput(format!(
                    "Feature {}: missing geometry",
                    idx
                )));
            }
        };
        if coords.len() < 2 {
            return Err(ZoomClustError::InvalidInput(format!(
                "Feature {}: Point must have at least 2 coordinates",
                idx
            )));
        }

        let mut properties = feature.properties.unwrap_or_default();
        properties.insert("lon".to_string(), Value::from(coords[0]));
        properties.insert("lat".to_string(), Value::from(coords[1]));

        city_from_value(Value::Object(properties))
    }

    /// Writes cities as a FeatureCollection of Point features.
    pub fn cities_to_geojson(cities: &[City]) -> Result<String> {
        let features = cities
            .iter()
            .map(|city| -> Result<Feature> {
                let mut properties = match serde_json::to_value(city)? {
                    Value::Object(map) => map,
                    _ => Map::new(),
                };
                properties.remove("lat");
                properties.remove("lon");

                Ok(Feature {
                    bbox: None,
                    geometry: Some(Geometry::new(GeoValue::Point(vec![city.lon, city.lat]))),
                    id: None,
                    properties: Some(properties),
                    foreign_members: None,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let collection = FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        };
        Ok(serde_json::to_string(&collection)?)
    }
}

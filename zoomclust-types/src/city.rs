use geo::Point;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A populated place to be ranked for map display.
///
/// `lat`, `lon`, `is_capital` and `popularity` are required on input.
/// `zoom_level` is the output of clustering and is normally absent until then.
/// Every other field lands in `properties` and is written back unchanged.
///
/// # Examples
///
/// ```
/// use zoomclust_types::city::City;
///
/// let json = r#"{"lat": 52.52, "lon": 13.405, "is_capital": 1, "popularity": 7, "name": "Berlin"}"#;
/// let city: City = serde_json::from_str(json).unwrap();
/// assert!(city.is_capital);
/// assert_eq!(city.property("name").and_then(|v| v.as_str()), Some("Berlin"));
/// assert!(city.zoom_level.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub lat: f64,
    pub lon: f64,
    /// Accepts a bool, a number (non-zero is true) or null (false).
    #[serde(deserialize_with = "deserialize_truthy")]
    pub is_capital: bool,
    pub popularity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom_level: Option<u8>,
    #[serde(flatten)]
    pub properties: Map<String, Value>,
}

impl City {
    /// Fields that must be present on every input record.
    pub const REQUIRED_FIELDS: [&'static str; 4] = ["lat", "lon", "is_capital", "popularity"];

    /// Create a non-capital city with zero popularity.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            is_capital: false,
            popularity: 0.0,
            zoom_level: None,
            properties: Map::new(),
        }
    }

    pub fn with_capital(mut self, is_capital: bool) -> Self {
        self.is_capital = is_capital;
        self
    }

    pub fn with_popularity(mut self, popularity: f64) -> Self {
        self.popularity = popularity;
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Location as a `geo::Point` (x = longitude, y = latitude).
    pub fn point(&self) -> Point {
        Point::new(self.lon, self.lat)
    }

    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }
}

fn deserialize_truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Bool(b) => Ok(b),
        Value::Null => Ok(false),
        Value::Number(n) => match n.as_f64() {
            Some(f) => Ok(f != 0.0),
            None => Err(de::Error::custom("is_capital number out of range")),
        },
        other => Err(de::Error::custom(format!(
            "is_capital must be a bool, number or null, got: {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_builder() {
        let city = City::new(35.6895, 139.6917)
            .with_capital(true)
            .with_popularity(10.0)
            .with_property("name", "Tokyo");

        assert!(city.is_capital);
        assert_eq!(city.popularity, 10.0);
        assert_eq!(city.point().x(), 139.6917);
        assert_eq!(city.point().y(), 35.6895);
        assert_eq!(city.property("name"), Some(&Value::from("Tokyo")));
    }

    #[test]
    fn test_truthy_capital_flag() {
        let parse = |flag: &str| {
            let json = format!(
                r#"{{"lat": 0, "lon": 0, "is_capital": {}, "popularity": 1}}"#,
                flag
            );
            serde_json::from_str::<City>(&json).map(|c| c.is_capital)
        };

        assert!(parse("true").unwrap());
        assert!(!parse("false").unwrap());
        assert!(parse("1").unwrap());
        assert!(!parse("0").unwrap());
        assert!(parse("0.5").unwrap());
        assert!(!parse("null").unwrap());
        assert!(parse("\"yes\"").is_err());
    }

    #[test]
    fn test_missing_required_field() {
        let json = r#"{"lat": 1.0, "lon": 2.0, "is_capital": false}"#;
        let err = serde_json::from_str::<City>(json).unwrap_err();
        assert!(err.to_string().contains("popularity"));
    }

    #[test]
    fn test_extra_fields_pass_through() {
        let json = r#"{"lat": 1.5, "lon": 2.5, "is_capital": false, "popularity": 3, "name": "X", "population": 1200, "tags": ["a", "b"]}"#;
        let mut city: City = serde_json::from_str(json).unwrap();
        assert_eq!(city.properties.len(), 3);

        city.zoom_level = Some(5);
        let out = serde_json::to_value(&city).unwrap();
        assert_eq!(out["name"], "X");
        assert_eq!(out["population"], 1200);
        assert_eq!(out["tags"][1], "b");
        assert_eq!(out["zoom_level"], 5);
        assert_eq!(out["is_capital"], false);
    }

    #[test]
    fn test_zoom_level_omitted_until_set() {
        let city = City::new(0.0, 0.0);
        let out = serde_json::to_value(&city).unwrap();
        assert!(out.get("zoom_level").is_none());
    }
}

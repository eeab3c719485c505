//! GeoJSON region model.
//!
//! Only the parts of a GeoJSON `FeatureCollection` the map needs are typed:
//! the feature list, each feature's `properties.name`, and the raw geometry
//! which is handed to the renderer untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One administrative boundary feature (a state or union territory).
///
/// Immutable after load. A feature without `properties.name` is kept and
/// simply never matches a craft registry entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    /// Value of `properties.name`, if present and a string.
    pub name: Option<String>,
    /// The full `properties` bag.
    pub properties: Map<String, Value>,
    /// Raw GeoJSON geometry (Polygon / MultiPolygon), `Null` if absent.
    pub geometry: Value,
}

impl Region {
    /// Builds a region with just a name and no geometry.
    ///
    /// Mostly useful for tests and for the lookup paths of the web API.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        let mut properties = Map::new();
        properties.insert("name".to_string(), Value::String(name.clone()));
        Self {
            name: Some(name),
            properties,
            geometry: Value::Null,
        }
    }

    /// Name used for labels and popups; empty when the feature has none.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// GeoJSON geometry type (`"Polygon"`, `"MultiPolygon"`, ...), if any.
    pub fn geometry_type(&self) -> Option<&str> {
        self.geometry.get("type").and_then(Value::as_str)
    }
}

/// Raw feature as it appears on the wire.
#[derive(Debug, Deserialize)]
struct RawFeature {
    #[serde(default)]
    properties: Option<Map<String, Value>>,
    #[serde(default)]
    geometry: Value,
}

/// Raw document as it appears on the wire.
#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    features: Vec<RawFeature>,
}

impl From<RawFeature> for Region {
    fn from(raw: RawFeature) -> Self {
        let properties = raw.properties.unwrap_or_default();
        let name = properties
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_string);
        Self {
            name,
            properties,
            geometry: raw.geometry,
        }
    }
}

/// Error produced when a document cannot be turned into regions.
#[derive(Debug, thiserror::Error)]
pub enum RegionParseError {
    /// The text is not valid JSON or does not have the feature layout.
    #[error("invalid GeoJSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Valid JSON, but the top-level `type` is something else.
    #[error("expected a FeatureCollection, found `{0}`")]
    NotFeatureCollection(String),
}

/// Ordered set of regions parsed from one GeoJSON document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegionCollection {
    regions: Vec<Region>,
}

impl RegionCollection {
    /// Parses a GeoJSON `FeatureCollection`.
    pub fn from_geojson(text: &str) -> Result<Self, RegionParseError> {
        let doc: RawDocument = serde_json::from_str(text)?;
        if doc.kind != "FeatureCollection" {
            return Err(RegionParseError::NotFeatureCollection(doc.kind));
        }
        Ok(Self {
            regions: doc.features.into_iter().map(Region::from).collect(),
        })
    }

    /// All regions in document order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Finds the first region with exactly this name.
    pub fn find(&self, name: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.name.as_deref() == Some(name))
    }

    /// Number of regions.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Returns true if the document had no features.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Names of all named regions, in document order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.regions.iter().filter_map(|r| r.name.as_deref())
    }
}

impl IntoIterator for RegionCollection {
    type Item = Region;
    type IntoIter = std::vec::IntoIter<Region>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "name": "Kerala", "code": "KL" },
                "geometry": { "type": "Polygon", "coordinates": [[[76.0, 10.0], [77.0, 10.0], [76.5, 9.0], [76.0, 10.0]]] }
            },
            {
                "type": "Feature",
                "properties": { "code": "XX" },
                "geometry": null
            },
            {
                "type": "Feature",
                "geometry": { "type": "MultiPolygon", "coordinates": [] }
            }
        ]
    }"#;

    #[test]
    fn test_parse_feature_collection() {
        let regions = RegionCollection::from_geojson(SAMPLE).unwrap();
        assert_eq!(regions.len(), 3);

        let kerala = &regions.regions()[0];
        assert_eq!(kerala.name.as_deref(), Some("Kerala"));
        assert_eq!(kerala.geometry_type(), Some("Polygon"));
        assert_eq!(kerala.properties["code"], "KL");
    }

    #[test]
    fn test_features_without_name_are_kept() {
        let regions = RegionCollection::from_geojson(SAMPLE).unwrap();
        assert_eq!(regions.regions()[1].name, None);
        assert_eq!(regions.regions()[1].display_name(), "");
        assert!(regions.regions()[2].properties.is_empty());
        assert_eq!(regions.names().collect::<Vec<_>>(), vec!["Kerala"]);
    }

    #[test]
    fn test_non_string_name_is_ignored() {
        let text = r#"{"type":"FeatureCollection","features":[{"type":"Feature","properties":{"name":42},"geometry":null}]}"#;
        let regions = RegionCollection::from_geojson(text).unwrap();
        assert_eq!(regions.regions()[0].name, None);
    }

    #[test]
    fn test_rejects_other_geojson_types() {
        let err = RegionCollection::from_geojson(r#"{"type":"Feature","properties":{}}"#)
            .unwrap_err();
        assert!(matches!(err, RegionParseError::NotFeatureCollection(ref t) if t == "Feature"));
    }

    #[test]
    fn test_rejects_invalid_json() {
        let err = RegionCollection::from_geojson("{not json").unwrap_err();
        assert!(matches!(err, RegionParseError::Json(_)));
    }

    #[test]
    fn test_find_is_exact() {
        let regions = RegionCollection::from_geojson(SAMPLE).unwrap();
        assert!(regions.find("Kerala").is_some());
        assert!(regions.find("kerala").is_none());
    }
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "といれ";

/// A single node returned by the interpreter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub id: i64,
    pub lat: f64,
    pub lon: f64,

    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

impl PointOfInterest {
    /// The `name` tag, or the default label for unnamed toilets.
    pub fn title(&self) -> &str {
        self.tags
            .get("name")
            .map(String::as_str)
            .unwrap_or(DEFAULT_TITLE)
    }

    pub fn tag_rows(&self) -> Vec<[String; 2]> {
        self.tags
            .iter()
            .map(|(k, v)| [k.clone(), v.clone()])
            .collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct InterpreterResponse {
    pub elements: Vec<PointOfInterest>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_tags_default_to_empty() {
        let r: InterpreterResponse = serde_json::from_str(
            r#"{"version":0.6,"elements":[{"type":"node","id":7,"lat":1.5,"lon":2.5}]}"#,
        )
        .unwrap();

        assert_eq!(r.elements.len(), 1);
        assert!(r.elements[0].tags.is_empty());
        assert_eq!(r.elements[0].title(), DEFAULT_TITLE);
    }

    #[test]
    fn title_prefers_name_tag() {
        let poi: PointOfInterest = serde_json::from_str(
            r#"{"id":1,"lat":0.0,"lon":0.0,"tags":{"name":"Station Toilet","amenity":"toilets"}}"#,
        )
        .unwrap();

        assert_eq!(poi.title(), "Station Toilet");
        assert_eq!(
            poi.tag_rows(),
            vec![
                ["amenity".to_string(), "toilets".to_string()],
                ["name".to_string(), "Station Toilet".to_string()],
            ]
        );
    }

    #[test]
    fn body_without_elements_is_rejected() {
        assert!(serde_json::from_str::<InterpreterResponse>(r#"{"remark":"timeout"}"#).is_err());
    }
}

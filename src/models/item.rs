//! Catalog item records as stored by the admin tooling.

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_ITEM_IMAGE, DEFAULT_ITEM_SIZE, DEFAULT_ITEM_VERSION};

/// A single catalog entry (a game mod).
///
/// Category and module are kept as the raw stored strings; records
/// with values outside the taxonomy simply never match a specific filter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub module: String,
    #[serde(default)]
    pub version: Option<String>,
    /// Human-readable size with unit, e.g. `"2.5MB"`.
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    /// RFC 3339 / ISO 8601 creation time.
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub downloads: Option<u64>,
    #[serde(default)]
    pub screenshots: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
}

impl Item {
    pub fn version_or_default(&self) -> &str {
        self.version.as_deref().unwrap_or(DEFAULT_ITEM_VERSION)
    }

    pub fn size_or_default(&self) -> &str {
        self.size.as_deref().unwrap_or(DEFAULT_ITEM_SIZE)
    }

    pub fn image_or_default(&self) -> &str {
        self.image
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(DEFAULT_ITEM_IMAGE)
    }

    /// Main image followed by non-empty screenshots.
    pub fn gallery(&self) -> Vec<String> {
        std::iter::once(self.image_or_default().to_string())
            .chain(
                self.screenshots
                    .iter()
                    .map(|s| s.trim())
                    .filter(|s| !s.is_empty())
                    .map(str::to_string),
            )
            .collect()
    }

    /// Link to the detail view for this item.
    pub fn detail_href(&self) -> String {
        let query: String = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("item", &self.id)
            .finish();
        format!("?{}", query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_record() {
        let item: Item = serde_json::from_str(r#"{"id":"x","name":"X"}"#).unwrap();
        assert_eq!(item.id, "x");
        assert_eq!(item.description, "");
        assert_eq!(item.version_or_default(), DEFAULT_ITEM_VERSION);
        assert_eq!(item.size_or_default(), DEFAULT_ITEM_SIZE);
        assert!(item.screenshots.is_empty());
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let item: Item = serde_json::from_str(
            r#"{"id":"a","name":"A","category":"武器","module":"枪械","createdAt":"2024-05-01","downloads":7,"extra":true}"#,
        )
        .unwrap();
        assert_eq!(item.created_at.as_deref(), Some("2024-05-01"));
        assert_eq!(item.downloads, Some(7));
    }

    #[test]
    fn test_gallery_skips_blank_screenshots() {
        let item = Item {
            image: Some("main.png".into()),
            screenshots: vec!["a.png".into(), "  ".into(), " b.png ".into()],
            ..serde_json::from_str(r#"{"id":"g","name":"G"}"#).unwrap()
        };
        assert_eq!(item.gallery(), vec!["main.png", "a.png", "b.png"]);
    }

    #[test]
    fn test_detail_href_encodes_id() {
        let item: Item = serde_json::from_str(r#"{"id":"modern weapons","name":"M"}"#).unwrap();
        assert_eq!(item.detail_href(), "?item=modern+weapons");
    }
}

use serde::{Deserialize, Serialize};

use crate::modules::catalog::domain::value_objects::MediaType;
use crate::shared::utils::text::UNKNOWN_YEAR;

/// Canonical search / browse result, independent of the upstream schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Upstream identifier, unique only within its site
    pub id: String,

    pub title: String,

    pub poster_url: String,

    /// Playable URLs in default play order, without duplicates
    pub episode_urls: Vec<String>,

    /// Key of the site that produced this item
    pub source_key: String,

    pub source_name: String,

    /// Upstream category field, may hold several comma separated labels
    pub category_label: String,

    /// Four digit year or `"unknown"`
    pub year: String,

    /// Free text with HTML stripped
    pub description: String,

    /// Upstream type name (e.g. "动作片"), when the site sends one
    #[serde(default)]
    pub type_label: Option<String>,

    /// Douban subject id, when the site sends one
    #[serde(default)]
    pub external_rating_id: Option<i64>,
}

impl CatalogItem {
    pub fn episode_count(&self) -> usize {
        self.episode_urls.len()
    }

    pub fn media_type(&self) -> MediaType {
        MediaType::from_episode_count(self.episode_urls.len())
    }

    /// Year used for grouping and ordering; blank years count as unknown
    pub fn effective_year(&self) -> &str {
        if self.year.trim().is_empty() {
            UNKNOWN_YEAR
        } else {
            &self.year
        }
    }

    pub fn has_known_year(&self) -> bool {
        self.effective_year() != UNKNOWN_YEAR
    }

    /// Category text used by the category filter: the category field,
    /// falling back to the type label when the site leaves it blank
    pub fn category_text(&self) -> &str {
        if !self.category_label.is_empty() {
            &self.category_label
        } else {
            self.type_label.as_deref().unwrap_or("")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(episodes: usize, year: &str) -> CatalogItem {
        CatalogItem {
            id: "1".to_string(),
            title: "Inception".to_string(),
            poster_url: String::new(),
            episode_urls: (0..episodes)
                .map(|i| format!("https://cdn.example.com/{}.m3u8", i))
                .collect(),
            source_key: "alpha".to_string(),
            source_name: "Alpha".to_string(),
            category_label: String::new(),
            year: year.to_string(),
            description: String::new(),
            type_label: Some("动作片".to_string()),
            external_rating_id: None,
        }
    }

    #[test]
    fn test_media_type_follows_episode_count() {
        assert_eq!(item(1, "2010").media_type(), MediaType::Movie);
        assert_eq!(item(3, "2010").media_type(), MediaType::Tv);
    }

    #[test]
    fn test_blank_year_is_unknown() {
        assert_eq!(item(1, "").effective_year(), "unknown");
        assert!(!item(1, "unknown").has_known_year());
        assert!(item(1, "2010").has_known_year());
    }

    #[test]
    fn test_category_text_falls_back_to_type_label() {
        let mut it = item(1, "2010");
        assert_eq!(it.category_text(), "动作片");
        it.category_label = "动作,科幻".to_string();
        assert_eq!(it.category_text(), "动作,科幻");
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(item(1, "2010")).unwrap();
        assert!(json.get("episodeUrls").is_some());
        assert!(json.get("sourceKey").is_some());
        assert!(json.get("externalRatingId").is_some());
    }
}

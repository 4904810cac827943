use serde::{Deserialize, Serialize};

use super::CatalogItem;
use crate::modules::catalog::domain::value_objects::MediaType;
use crate::shared::utils::text::UNKNOWN_YEAR;

/// Items from one or more sites that describe the same logical title.
/// Every member shares the normalized title, year and media type encoded in `group_key`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedGroup {
    pub group_key: String,
    /// Members in the order they were seen in the filtered input
    pub items: Vec<CatalogItem>,
}

impl AggregatedGroup {
    pub fn new(group_key: String, first: CatalogItem) -> Self {
        Self {
            group_key,
            items: vec![first],
        }
    }

    /// The representative member used for display and ordering
    pub fn first(&self) -> Option<&CatalogItem> {
        self.items.first()
    }

    pub fn title(&self) -> &str {
        self.first().map(|item| item.title.as_str()).unwrap_or("")
    }

    pub fn year(&self) -> &str {
        self.first()
            .map(CatalogItem::effective_year)
            .unwrap_or(UNKNOWN_YEAR)
    }

    pub fn media_type(&self) -> Option<MediaType> {
        self.first().map(CatalogItem::media_type)
    }

    /// Keys of the sites contributing to this group, in member order
    pub fn source_keys(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.source_key.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

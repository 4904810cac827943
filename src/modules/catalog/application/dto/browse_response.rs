use serde::{Deserialize, Serialize};

use crate::modules::catalog::domain::entities::{CatalogItem, CategoryNode, CategoryTree};
use crate::modules::provider::domain::value_objects::SiteOutcome;
use crate::shared::application::PaginationInfo;

/// Response DTO for one site's categories, flat and as a tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoriesResponse {
    pub source_key: String,
    pub source_name: String,
    pub categories: Vec<CategoryNode>,
    pub category_tree: CategoryTree,
    pub total: usize,
    /// Set when the site yielded nothing and the built-in taxonomy was used
    pub used_default_taxonomy: bool,
    pub outcome: SiteOutcome,
}

/// Response DTO for one listing page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideosResponse {
    pub source_key: String,
    pub source_name: String,
    /// Requested category id, empty when listing everything
    pub category_id: String,
    pub videos: Vec<CatalogItem>,
    pub pagination: PaginationInfo,
    pub outcome: SiteOutcome,
}

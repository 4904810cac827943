use serde::{Deserialize, Serialize};

use super::SearchView;
use crate::modules::catalog::domain::entities::{AggregatedGroup, CatalogItem};
use crate::modules::provider::domain::value_objects::SiteOutcome;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchResults {
    Aggregated(Vec<AggregatedGroup>),
    Flat(Vec<CatalogItem>),
}

impl SearchResults {
    pub fn empty(view: SearchView) -> Self {
        match view {
            SearchView::Aggregated => SearchResults::Aggregated(Vec::new()),
            SearchView::Flat => SearchResults::Flat(Vec::new()),
        }
    }

    /// Number of groups or items
    pub fn len(&self) -> usize {
        match self {
            SearchResults::Aggregated(groups) => groups.len(),
            SearchResults::Flat(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn groups(&self) -> Option<&[AggregatedGroup]> {
        match self {
            SearchResults::Aggregated(groups) => Some(groups),
            SearchResults::Flat(_) => None,
        }
    }

    pub fn items(&self) -> Option<&[CatalogItem]> {
        match self {
            SearchResults::Aggregated(_) => None,
            SearchResults::Flat(items) => Some(items),
        }
    }
}

/// Response DTO for a multi-site search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub regular_results: SearchResults,
    /// Always empty: adult sites are excluded before fan-out, never per item
    pub adult_results: Vec<CatalogItem>,
    /// One record per queried site
    pub outcomes: Vec<SiteOutcome>,
}

impl SearchResponse {
    pub fn new(regular_results: SearchResults, outcomes: Vec<SiteOutcome>) -> Self {
        Self {
            regular_results,
            adult_results: Vec::new(),
            outcomes,
        }
    }

    pub fn empty(view: SearchView) -> Self {
        Self::new(SearchResults::empty(view), Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.regular_results.is_empty()
    }
}

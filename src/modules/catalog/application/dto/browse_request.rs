use serde::{Deserialize, Serialize};

/// Who is browsing; drives the same adult-content policy as search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseScope {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub include_adult: bool,
}

impl BrowseScope {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn for_user(user_id: impl Into<String>, include_adult: bool) -> Self {
        Self {
            user_id: Some(user_id.into()),
            include_adult,
        }
    }
}

/// Request DTO for one site's category listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoriesRequest {
    pub source_key: String,
    #[serde(flatten)]
    pub scope: BrowseScope,
}

impl CategoriesRequest {
    pub fn new(source_key: impl Into<String>) -> Self {
        Self {
            source_key: source_key.into(),
            scope: BrowseScope::anonymous(),
        }
    }

    pub fn with_scope(mut self, scope: BrowseScope) -> Self {
        self.scope = scope;
        self
    }
}

fn first_page() -> u32 {
    1
}

/// Request DTO for one listing page of one site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideosRequest {
    pub source_key: String,
    /// Category id; blank or `"all"` lists everything
    #[serde(default)]
    pub category_id: Option<String>,
    /// 1-based; lower values are treated as 1
    #[serde(default = "first_page")]
    pub page: u32,
    /// Reported page size; defaults to the configured one
    #[serde(default)]
    pub page_size: Option<u32>,
    #[serde(flatten)]
    pub scope: BrowseScope,
}

impl VideosRequest {
    pub fn new(source_key: impl Into<String>) -> Self {
        Self {
            source_key: source_key.into(),
            category_id: None,
            page: 1,
            page_size: None,
            scope: BrowseScope::anonymous(),
        }
    }

    pub fn with_category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn with_scope(mut self, scope: BrowseScope) -> Self {
        self.scope = scope;
        self
    }
}

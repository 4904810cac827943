/// Pagination support for catalog listings
///
/// Upstream sites paginate on their own terms; these types carry the caller's
/// request and the upstream's answer back out unchanged.
use serde::{Deserialize, Serialize};

/// Pagination parameters for listing queries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationParams {
    pub page: u32,
    pub page_size: u32,
}

impl PaginationParams {
    /// Page numbers are 1-based; anything lower is clamped to the first page
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }
}

/// Pagination block reported with a listing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_count: u64,
    pub per_page: u32,
}

impl PaginationInfo {
    pub fn new(params: &PaginationParams, total_pages: u32, total_count: u64) -> Self {
        Self {
            current_page: params.page,
            total_pages,
            total_count,
            per_page: params.page_size,
        }
    }
}

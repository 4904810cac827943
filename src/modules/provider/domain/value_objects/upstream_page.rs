use crate::modules::catalog::domain::entities::CatalogItem;

/// One page of canonical items as reported by an upstream site
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpstreamPage {
    pub items: Vec<CatalogItem>,
    pub page: u32,
    pub total_pages: u32,
    pub total_count: u64,
}

impl UpstreamPage {
    pub fn empty(page: u32) -> Self {
        Self {
            page,
            ..Default::default()
        }
    }
}

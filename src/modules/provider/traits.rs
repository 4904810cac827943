use async_trait::async_trait;

use crate::modules::catalog::domain::entities::CategoryNode;
use crate::modules::provider::domain::{entities::Site, value_objects::UpstreamPage};
use crate::shared::errors::AppResult;

/// Translates one family of upstream APIs into canonical items and categories.
///
/// Errors are returned as-is; the orchestrator turns them into an empty
/// contribution plus a failed outcome record.
#[async_trait]
pub trait UpstreamAdapter: Send + Sync {
    /// Adapter family name, used in logs
    fn name(&self) -> &'static str;

    /// Flat category list of `site`, possibly empty
    async fn fetch_categories(&self, site: &Site) -> AppResult<Vec<CategoryNode>>;

    /// One listing page, optionally restricted to a category id
    async fn fetch_videos(
        &self,
        site: &Site,
        category_id: Option<&str>,
        page: u32,
    ) -> AppResult<UpstreamPage>;

    /// Keyword search on `site`
    async fn search(&self, site: &Site, query: &str) -> AppResult<UpstreamPage>;
}

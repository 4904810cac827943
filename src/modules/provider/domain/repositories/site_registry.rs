use async_trait::async_trait;

use crate::modules::provider::domain::entities::Site;
use crate::shared::errors::AppResult;

/// Source of the upstream sites available to a request.
/// Consulted on every call; the engine never caches its answer.
#[async_trait]
pub trait SiteRegistry: Send + Sync {
    /// All configured sites, minus adult-flagged ones when `filter_adult` is set
    async fn available_sites(&self, filter_adult: bool) -> AppResult<Vec<Site>>;
}

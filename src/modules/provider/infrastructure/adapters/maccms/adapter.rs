use async_trait::async_trait;
use std::time::Duration;

use super::mapper::MacCmsMapper;
use super::models::*;
use crate::modules::catalog::domain::entities::CategoryNode;
use crate::modules::catalog::domain::services::ALL_CATEGORIES;
use crate::modules::provider::domain::{entities::Site, value_objects::UpstreamPage};
use crate::modules::provider::infrastructure::http_client::UpstreamClient;
use crate::modules::provider::traits::UpstreamAdapter;
use crate::shared::config::EngineConfig;
use crate::shared::errors::AppResult;

/// Adapter for MacCMS-style collection APIs (`?ac=list` / `?ac=videolist`)
pub struct MacCmsAdapter {
    http_client: UpstreamClient,
    mapper: MacCmsMapper,
    category_timeout: Duration,
    video_timeout: Duration,
    search_timeout: Duration,
}

impl MacCmsAdapter {
    pub fn new(config: &EngineConfig) -> AppResult<Self> {
        Ok(Self::with_client(
            UpstreamClient::new(&config.user_agent)?,
            config,
        ))
    }

    /// Create adapter with a custom HTTP client (for testing)
    pub fn with_client(http_client: UpstreamClient, config: &EngineConfig) -> Self {
        Self {
            http_client,
            mapper: MacCmsMapper::new(),
            category_timeout: config.category_timeout,
            video_timeout: config.video_timeout,
            search_timeout: config.search_timeout,
        }
    }

    pub fn categories_url(site: &Site) -> String {
        site.endpoint("ac=list")
    }

    /// The category id is only sent when it names a real category
    pub fn videos_url(site: &Site, category_id: Option<&str>, page: u32) -> String {
        let mut query = format!("ac=videolist&pg={}", page);
        if let Some(category) = category_id
            .map(str::trim)
            .filter(|c| !c.is_empty() && *c != ALL_CATEGORIES)
        {
            query.push_str("&t=");
            query.push_str(&urlencoding::encode(category));
        }
        site.endpoint(&query)
    }

    pub fn search_url(site: &Site, query: &str) -> String {
        site.endpoint(&format!("ac=videolist&wd={}", urlencoding::encode(query)))
    }
}

#[async_trait]
impl UpstreamAdapter for MacCmsAdapter {
    fn name(&self) -> &'static str {
        "maccms"
    }

    async fn fetch_categories(&self, site: &Site) -> AppResult<Vec<CategoryNode>> {
        let url = Self::categories_url(site);
        log::debug!("MacCMS: Fetching categories from {} ({})", site.name, url);

        let response: MacCmsCategoryResponse = self
            .http_client
            .get_json(&site.key, &url, self.category_timeout)
            .await?;

        let categories = self.mapper.map_categories(response);
        log::info!(
            "MacCMS: {} categories from {}",
            categories.len(),
            site.name
        );
        Ok(categories)
    }

    async fn fetch_videos(
        &self,
        site: &Site,
        category_id: Option<&str>,
        page: u32,
    ) -> AppResult<UpstreamPage> {
        let page = page.max(1);
        let url = Self::videos_url(site, category_id, page);
        log::debug!("MacCMS: Listing {} page {} ({})", site.name, page, url);

        let response: MacCmsVideoListResponse = self
            .http_client
            .get_json(&site.key, &url, self.video_timeout)
            .await?;

        Ok(self.mapper.map_page(response, site, page))
    }

    async fn search(&self, site: &Site, query: &str) -> AppResult<UpstreamPage> {
        let url = Self::search_url(site, query);
        log::info!("MacCMS: Searching {} for '{}'", site.name, query);

        let response: MacCmsVideoListResponse = self
            .http_client
            .get_json(&site.key, &url, self.search_timeout)
            .await?;

        let page = self.mapper.map_page(response, site, 1);
        log::info!(
            "MacCMS: Found {} results on {} for '{}'",
            page.items.len(),
            site.name,
            query
        );
        Ok(page)
    }
}

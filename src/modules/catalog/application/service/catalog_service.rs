use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::modules::catalog::application::dto::{
    CategoriesRequest, CategoriesResponse, SearchRequest, SearchResponse, SearchResults,
    SearchView, VideosRequest, VideosResponse,
};
use crate::modules::catalog::domain::services::{ResultAggregator, ResultFilter, ALL_CATEGORIES};
use crate::modules::provider::domain::{
    entities::Site,
    repositories::{SiteRegistry, UserSettingsRepository},
    services::{FanoutOrchestrator, SiteSelectionService},
};
use crate::modules::provider::infrastructure::{
    adapters::MacCmsAdapter,
    monitoring::{LoggingOutcomeReporter, OutcomeReporter},
};
use crate::modules::provider::traits::UpstreamAdapter;
use crate::shared::application::{PaginationInfo, PaginationParams};
use crate::shared::config::EngineConfig;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::{LogContext, TimedOperation};

/// Application service behind the engine's three operations: search,
/// categories and videos.
///
/// Every call is a stateless fan-out. Sites come from the registry on each
/// call, the adult-content policy is resolved per call, and nothing is cached.
pub struct CatalogService {
    selection: SiteSelectionService,
    orchestrator: FanoutOrchestrator,
}

impl CatalogService {
    pub fn new(
        registry: Arc<dyn SiteRegistry>,
        settings: Arc<dyn UserSettingsRepository>,
        adapter: Arc<dyn UpstreamAdapter>,
        reporter: Arc<dyn OutcomeReporter>,
        config: EngineConfig,
    ) -> Self {
        Self {
            selection: SiteSelectionService::new(registry, settings),
            orchestrator: FanoutOrchestrator::new(adapter, reporter, config),
        }
    }

    /// Service wired to MacCMS sites over HTTP, logging one line per site call
    pub fn with_http(
        registry: Arc<dyn SiteRegistry>,
        settings: Arc<dyn UserSettingsRepository>,
        config: EngineConfig,
    ) -> AppResult<Self> {
        config.validate().map_err(AppError::ValidationError)?;
        let adapter = MacCmsAdapter::new(&config)?;

        Ok(Self::new(
            registry,
            settings,
            Arc::new(adapter),
            Arc::new(LoggingOutcomeReporter::new()),
            config,
        ))
    }

    pub fn config(&self) -> &EngineConfig {
        self.orchestrator.config()
    }

    /// Search the selected sites and return grouped (or flat) results.
    ///
    /// A blank query returns an empty result without contacting any site.
    /// Explicit site keys that resolve to nothing fail with `SiteNotFound`
    /// or `NoSitesAvailable`; failing sites simply contribute nothing.
    pub async fn search(&self, request: &SearchRequest) -> AppResult<SearchResponse> {
        self.run_search(request, None).await
    }

    /// [`search`](Self::search) that gives up with `AppError::Cancelled`
    /// as soon as `token` fires
    pub async fn search_with_cancellation(
        &self,
        request: &SearchRequest,
        token: &CancellationToken,
    ) -> AppResult<SearchResponse> {
        self.run_search(request, Some(token)).await
    }

    async fn run_search(
        &self,
        request: &SearchRequest,
        token: Option<&CancellationToken>,
    ) -> AppResult<SearchResponse> {
        let Some(query) = request.query_text() else {
            log::debug!("Empty search query, skipping fan-out");
            return Ok(SearchResponse::empty(request.view));
        };

        let timer = TimedOperation::new("catalog_search");
        let policy = self
            .selection
            .resolve_policy(request.user_id.as_deref(), request.include_adult)
            .await;
        let sites = self
            .selection
            .select_sites(&request.site_selection(), policy)
            .await?;

        if sites.is_empty() {
            log::info!("No sites available for search '{}'", query);
            return Ok(SearchResponse::empty(request.view));
        }

        let category_label = self.resolve_category_label(request, &sites, token).await?;

        let fanout = match token {
            Some(token) => {
                self.orchestrator
                    .search_with_cancellation(query, &sites, token)
                    .await?
            }
            None => self.orchestrator.search(query, &sites).await,
        };

        let site_keys: Vec<String> = sites.iter().map(|site| site.key.clone()).collect();
        let items = ResultFilter::apply(fanout.items, &site_keys, category_label.as_deref());

        let single_site = match sites.as_slice() {
            [site] => Some(site.key.as_str()),
            _ => None,
        };
        LogContext::search_operation(query, single_site, Some(items.len()));

        let results = match request.view {
            SearchView::Aggregated => {
                SearchResults::Aggregated(ResultAggregator::aggregate(items, query))
            }
            SearchView::Flat => SearchResults::Flat(items),
        };

        timer.finish_with_info(&format!(
            "'{}' across {} sites, {} results",
            query,
            sites.len(),
            results.len()
        ));

        Ok(SearchResponse::new(results, fanout.outcomes))
    }

    /// Explicit label first; otherwise a category id is looked up in the tree
    /// of the single selected site. Ids that cannot be resolved disable the filter.
    /// The lookup stops with `AppError::Cancelled` when `token` fires.
    async fn resolve_category_label(
        &self,
        request: &SearchRequest,
        sites: &[Site],
        token: Option<&CancellationToken>,
    ) -> AppResult<Option<String>> {
        if let Some(label) = request.category_label() {
            return Ok(Some(label.to_string()));
        }

        let Some(category_id) = request.category_id().filter(|id| *id != ALL_CATEGORIES) else {
            return Ok(None);
        };
        let [site] = sites else {
            log::debug!(
                "Category id '{}' ignored: it only applies to a single site search",
                category_id
            );
            return Ok(None);
        };

        let listing = match token {
            Some(token) => {
                tokio::select! {
                    biased;

                    _ = token.cancelled() => {
                        log::info!("Category lookup on {} cancelled", site.key);
                        return Err(AppError::Cancelled(format!(
                            "Category lookup for '{}' was cancelled",
                            category_id
                        )));
                    }
                    listing = self.orchestrator.list_categories(site) => listing,
                }
            }
            None => self.orchestrator.list_categories(site).await,
        };

        match listing.tree.find_name(category_id) {
            Some(name) => Ok(Some(name.to_string())),
            None => {
                log::warn!(
                    "Category id '{}' not found on {}, searching without a category filter",
                    category_id,
                    site.key
                );
                Ok(None)
            }
        }
    }

    /// Flat category list and tree of one site; falls back to the built-in
    /// taxonomy when the site yields nothing
    pub async fn categories(&self, request: &CategoriesRequest) -> AppResult<CategoriesResponse> {
        let site = self
            .find_site(
                &request.source_key,
                request.scope.user_id.as_deref(),
                request.scope.include_adult,
            )
            .await?;

        let listing = self.orchestrator.list_categories(&site).await;

        Ok(CategoriesResponse {
            source_key: site.key,
            source_name: site.name,
            total: listing.categories.len(),
            categories: listing.categories,
            category_tree: listing.tree,
            used_default_taxonomy: listing.used_default_taxonomy,
            outcome: listing.outcome,
        })
    }

    /// One listing page of one site; an upstream failure yields an empty page
    pub async fn videos(&self, request: &VideosRequest) -> AppResult<VideosResponse> {
        let site = self
            .find_site(
                &request.source_key,
                request.scope.user_id.as_deref(),
                request.scope.include_adult,
            )
            .await?;

        let params = PaginationParams::new(
            request.page,
            request
                .page_size
                .unwrap_or(self.config().default_page_size),
        );
        let category_id = request
            .category_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty());

        let (page, outcome) = self
            .orchestrator
            .list_videos(&site, category_id, params.page)
            .await;

        Ok(VideosResponse {
            source_key: site.key,
            source_name: site.name,
            category_id: category_id.unwrap_or_default().to_string(),
            videos: page.items,
            pagination: PaginationInfo::new(&params, page.total_pages, page.total_count),
            outcome,
        })
    }

    async fn find_site(
        &self,
        key: &str,
        user_id: Option<&str>,
        include_adult: bool,
    ) -> AppResult<Site> {
        let policy = self.selection.resolve_policy(user_id, include_adult).await;
        self.selection.find_site(key, policy).await
    }
}

use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::FutureExt;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::modules::catalog::domain::entities::{CatalogItem, CategoryNode, CategoryTree};
use crate::modules::catalog::domain::services::{default_taxonomy, CategoryTreeBuilder};
use crate::modules::provider::domain::{
    entities::Site,
    value_objects::{SiteOperation, SiteOutcome, UpstreamPage},
};
use crate::modules::provider::infrastructure::monitoring::OutcomeReporter;
use crate::modules::provider::traits::UpstreamAdapter;
use crate::shared::config::EngineConfig;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;

/// Concatenated fan-out output, in site order
#[derive(Debug, Clone, Default)]
pub struct FanoutResult {
    pub items: Vec<CatalogItem>,
    /// One record per queried site, in site order
    pub outcomes: Vec<SiteOutcome>,
}

/// Category listing of one site, after the default-taxonomy fallback
#[derive(Debug, Clone)]
pub struct CategoryListing {
    pub categories: Vec<CategoryNode>,
    pub tree: CategoryTree,
    pub used_default_taxonomy: bool,
    pub outcome: SiteOutcome,
}

/// Issues one time-limited adapter call per site, concurrently, and collects
/// whatever subset succeeds. A failing, slow or panicking site contributes
/// nothing and never disturbs the others.
pub struct FanoutOrchestrator {
    adapter: Arc<dyn UpstreamAdapter>,
    reporter: Arc<dyn OutcomeReporter>,
    config: EngineConfig,
}

impl FanoutOrchestrator {
    pub fn new(
        adapter: Arc<dyn UpstreamAdapter>,
        reporter: Arc<dyn OutcomeReporter>,
        config: EngineConfig,
    ) -> Self {
        Self {
            adapter,
            reporter,
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Search every site concurrently and wait for all of them to settle
    pub async fn search(&self, query: &str, sites: &[Site]) -> FanoutResult {
        match self.run_search(query, sites, None).await {
            Ok(result) => result,
            Err(e) => {
                // only cancellation fails a fan-out and there is no token here
                LogContext::error_with_context(&e, "Fan-out search ended unexpectedly");
                FanoutResult::default()
            }
        }
    }

    /// Like [`search`](Self::search), but aborts every in-flight site call when
    /// `token` fires and returns `AppError::Cancelled` without partial results
    pub async fn search_with_cancellation(
        &self,
        query: &str,
        sites: &[Site],
        token: &CancellationToken,
    ) -> AppResult<FanoutResult> {
        self.run_search(query, sites, Some(token)).await
    }

    async fn run_search(
        &self,
        query: &str,
        sites: &[Site],
        token: Option<&CancellationToken>,
    ) -> AppResult<FanoutResult> {
        let started = Instant::now();
        let limit = self.config.search_timeout;
        let mut tasks: JoinSet<(usize, Vec<CatalogItem>, SiteOutcome)> = JoinSet::new();

        for (index, site) in sites.iter().enumerate() {
            let adapter = Arc::clone(&self.adapter);
            let site = site.clone();
            let query = query.to_string();

            tasks.spawn(async move {
                let (page, outcome) = guarded_call(
                    &site,
                    SiteOperation::Search,
                    limit,
                    adapter.search(&site, &query),
                    |page: &UpstreamPage| page.items.len(),
                )
                .await;
                let items = page.map(|page| page.items).unwrap_or_default();
                (index, items, outcome)
            });
        }

        let mut slots: Vec<Option<(Vec<CatalogItem>, SiteOutcome)>> = vec![None; sites.len()];

        loop {
            tokio::select! {
                biased;

                _ = wait_for_cancel(token) => {
                    tasks.abort_all();
                    log::info!(
                        "Search for '{}' cancelled with {} site calls in flight",
                        query,
                        tasks.len()
                    );
                    return Err(AppError::Cancelled(format!("Search for '{}' was cancelled", query)));
                }
                next = tasks.join_next() => match next {
                    Some(Ok((index, items, outcome))) => slots[index] = Some((items, outcome)),
                    Some(Err(e)) => log::error!("Site search task did not complete: {}", e),
                    None => break,
                },
            }
        }

        let mut result = FanoutResult::default();
        for (site, slot) in sites.iter().zip(slots) {
            let (items, outcome) = slot.unwrap_or_else(|| {
                (
                    Vec::new(),
                    SiteOutcome::failed(
                        &site.key,
                        &site.name,
                        SiteOperation::Search,
                        "site task aborted",
                        started.elapsed().as_millis() as u64,
                    ),
                )
            });
            self.reporter.report(&outcome);
            result.items.extend(items);
            result.outcomes.push(outcome);
        }

        LogContext::performance_metric(
            "fanout_search",
            started.elapsed().as_millis() as u64,
            Some(&format!(
                "{} sites, {} items",
                sites.len(),
                result.items.len()
            )),
        );

        Ok(result)
    }

    /// Categories of one site; an empty or failed listing falls back to the
    /// built-in taxonomy
    pub async fn list_categories(&self, site: &Site) -> CategoryListing {
        let (categories, outcome) = guarded_call(
            site,
            SiteOperation::Categories,
            self.config.category_timeout,
            self.adapter.fetch_categories(site),
            Vec::len,
        )
        .await;
        self.reporter.report(&outcome);

        let (categories, used_default_taxonomy) = match categories {
            Some(categories) if !categories.is_empty() => (categories, false),
            _ => {
                log::info!(
                    "No categories from {} ({}), using default taxonomy",
                    site.name,
                    site.key
                );
                (default_taxonomy(), true)
            }
        };

        let tree = CategoryTreeBuilder::build(&categories);
        CategoryListing {
            categories,
            tree,
            used_default_taxonomy,
            outcome,
        }
    }

    /// One listing page of one site; failure yields an empty page
    pub async fn list_videos(
        &self,
        site: &Site,
        category_id: Option<&str>,
        page: u32,
    ) -> (UpstreamPage, SiteOutcome) {
        let page = page.max(1);
        let (listing, outcome) = guarded_call(
            site,
            SiteOperation::Videos,
            self.config.video_timeout,
            self.adapter.fetch_videos(site, category_id, page),
            |listing: &UpstreamPage| listing.items.len(),
        )
        .await;
        self.reporter.report(&outcome);

        (listing.unwrap_or_else(|| UpstreamPage::empty(page)), outcome)
    }
}

async fn wait_for_cancel(token: Option<&CancellationToken>) {
    match token {
        Some(token) => token.cancelled().await,
        None => std::future::pending::<()>().await,
    }
}

/// Run one adapter call under a time limit, turning errors, timeouts and
/// panics into an outcome record instead of a fault
async fn guarded_call<T, F>(
    site: &Site,
    operation: SiteOperation,
    limit: Duration,
    call: F,
    count: impl Fn(&T) -> usize,
) -> (Option<T>, SiteOutcome)
where
    F: Future<Output = AppResult<T>>,
{
    let started = Instant::now();
    let result = AssertUnwindSafe(tokio::time::timeout(limit, call))
        .catch_unwind()
        .await;
    let elapsed_ms = started.elapsed().as_millis() as u64;

    match result {
        Ok(Ok(Ok(value))) => {
            let outcome =
                SiteOutcome::success(&site.key, &site.name, operation, count(&value), elapsed_ms);
            (Some(value), outcome)
        }
        Ok(Ok(Err(AppError::UpstreamTimeout(_)))) | Ok(Err(_)) => (
            None,
            SiteOutcome::timed_out(&site.key, &site.name, operation, elapsed_ms),
        ),
        Ok(Ok(Err(e))) => {
            if !e.is_upstream_failure() {
                log::warn!("Unexpected {} error from site '{}': {}", operation, site.key, e);
            }
            (
                None,
                SiteOutcome::failed(&site.key, &site.name, operation, e.to_string(), elapsed_ms),
            )
        }
        Err(_) => {
            log::error!("{} call to site '{}' panicked", operation, site.key);
            (
                None,
                SiteOutcome::failed(&site.key, &site.name, operation, "adapter panicked", elapsed_ms),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::provider::domain::value_objects::OutcomeStatus;
    use crate::modules::provider::infrastructure::monitoring::CollectingOutcomeReporter;
    use async_trait::async_trait;

    /// Adapter whose behavior is chosen by site key
    struct ScriptedAdapter;

    fn item(site: &Site, title: &str) -> CatalogItem {
        CatalogItem {
            id: title.to_string(),
            title: title.to_string(),
            poster_url: String::new(),
            episode_urls: vec![format!("https://cdn.example.com/{}.m3u8", title)],
            source_key: site.key.clone(),
            source_name: site.name.clone(),
            category_label: String::new(),
            year: "2020".to_string(),
            description: String::new(),
            type_label: None,
            external_rating_id: None,
        }
    }

    #[async_trait]
    impl UpstreamAdapter for ScriptedAdapter {
        fn name(&self) -> &'static str {
            "scripted"
        }

        async fn fetch_categories(&self, site: &Site) -> AppResult<Vec<CategoryNode>> {
            match site.key.as_str() {
                "ok" => Ok(vec![
                    CategoryNode::new("1", "Movies", None),
                    CategoryNode::new("11", "Action", Some("1")),
                ]),
                "empty" => Ok(vec![]),
                _ => Err(AppError::ApiError("500".to_string())),
            }
        }

        async fn fetch_videos(
            &self,
            site: &Site,
            _category_id: Option<&str>,
            page: u32,
        ) -> AppResult<UpstreamPage> {
            match site.key.as_str() {
                "ok" => Ok(UpstreamPage {
                    items: vec![item(site, "one")],
                    page,
                    total_pages: 3,
                    total_count: 41,
                }),
                _ => Err(AppError::ApiError("500".to_string())),
            }
        }

        async fn search(&self, site: &Site, query: &str) -> AppResult<UpstreamPage> {
            match site.key.as_str() {
                "slow" => {
                    tokio::time::sleep(Duration::from_millis(300)).await;
                    Ok(UpstreamPage {
                        items: vec![item(site, query)],
                        ..Default::default()
                    })
                }
                "fail" => Err(AppError::ApiError("upstream returned 500".to_string())),
                "panic" => panic!("adapter bug"),
                "hang" => {
                    tokio::time::sleep(Duration::from_secs(3600)).await;
                    Ok(UpstreamPage::default())
                }
                _ => Ok(UpstreamPage {
                    items: vec![
                        item(site, &format!("{}-1", query)),
                        item(site, &format!("{}-2", query)),
                    ],
                    ..Default::default()
                }),
            }
        }
    }

    fn site(key: &str) -> Site {
        Site::new(key, key.to_uppercase(), format!("https://{}.example.com/api", key), false)
    }

    fn orchestrator(search_timeout: Duration) -> (FanoutOrchestrator, Arc<CollectingOutcomeReporter>) {
        let reporter = Arc::new(CollectingOutcomeReporter::new());
        let config = EngineConfig::default().with_timeouts(
            Duration::from_secs(1),
            Duration::from_secs(1),
            search_timeout,
        );
        (
            FanoutOrchestrator::new(Arc::new(ScriptedAdapter), reporter.clone(), config),
            reporter,
        )
    }

    fn sources(result: &FanoutResult) -> Vec<String> {
        result
            .items
            .iter()
            .map(|i| format!("{}:{}", i.source_key, i.title))
            .collect()
    }

    #[tokio::test]
    async fn test_slow_first_site_keeps_site_order() {
        let (orchestrator, _) = orchestrator(Duration::from_secs(2));
        let result = orchestrator
            .search("q", &[site("slow"), site("fast")])
            .await;

        assert_eq!(sources(&result), vec!["slow:q", "fast:q-1", "fast:q-2"]);
        assert!(result.outcomes.iter().all(SiteOutcome::is_success));
    }

    #[tokio::test]
    async fn test_failures_contribute_nothing() {
        let (orchestrator, reporter) = orchestrator(Duration::from_secs(2));
        let result = orchestrator
            .search("q", &[site("fail"), site("a"), site("panic"), site("b")])
            .await;

        assert_eq!(
            sources(&result),
            vec!["a:q-1", "a:q-2", "b:q-1", "b:q-2"]
        );
        let statuses: Vec<bool> = result.outcomes.iter().map(SiteOutcome::is_success).collect();
        assert_eq!(statuses, vec![false, true, false, true]);
        assert_eq!(reporter.outcomes().len(), 4);
    }

    #[tokio::test]
    async fn test_hanging_site_times_out() {
        let (orchestrator, _) = orchestrator(Duration::from_millis(100));
        let result = orchestrator.search("q", &[site("hang"), site("a")]).await;

        assert_eq!(sources(&result), vec!["a:q-1", "a:q-2"]);
        assert_eq!(result.outcomes[0].status, OutcomeStatus::TimedOut);
    }

    #[tokio::test]
    async fn test_repeated_search_is_identical() {
        let (orchestrator, _) = orchestrator(Duration::from_secs(2));
        let sites = [site("b"), site("slow"), site("a")];
        let first = orchestrator.search("q", &sites).await;
        let second = orchestrator.search("q", &sites).await;
        assert_eq!(first.items, second.items);
    }

    #[tokio::test]
    async fn test_no_sites_yields_empty_result() {
        let (orchestrator, _) = orchestrator(Duration::from_secs(1));
        let result = orchestrator.search("q", &[]).await;
        assert!(result.items.is_empty());
        assert!(result.outcomes.is_empty());
    }

    #[tokio::test]
    async fn test_cancellation_returns_no_partial_results() {
        let (orchestrator, _) = orchestrator(Duration::from_secs(60));
        let token = CancellationToken::new();
        let canceller = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            canceller.cancel();
        });

        let result = orchestrator
            .search_with_cancellation("q", &[site("a"), site("hang")], &token)
            .await;
        assert!(matches!(result, Err(AppError::Cancelled(_))));
    }

    #[tokio::test]
    async fn test_categories_fall_back_to_default_taxonomy() {
        let (orchestrator, _) = orchestrator(Duration::from_secs(1));

        let listing = orchestrator.list_categories(&site("ok")).await;
        assert!(!listing.used_default_taxonomy);
        assert_eq!(listing.tree.roots.len(), 1);
        assert_eq!(listing.tree.roots[0].children.len(), 1);

        let empty = orchestrator.list_categories(&site("empty")).await;
        assert!(empty.used_default_taxonomy);
        assert!(empty.outcome.is_success());

        let failed = orchestrator.list_categories(&site("broken")).await;
        assert!(failed.used_default_taxonomy);
        assert!(!failed.outcome.is_success());
        assert_eq!(failed.tree.roots.len(), 6);
    }

    #[tokio::test]
    async fn test_list_videos_degrades_to_empty_page() {
        let (orchestrator, _) = orchestrator(Duration::from_secs(1));

        let (page, outcome) = orchestrator.list_videos(&site("ok"), None, 0).await;
        assert_eq!(page.page, 1);
        assert_eq!(page.total_count, 41);
        assert_eq!(outcome.item_count, 1);

        let (empty, outcome) = orchestrator.list_videos(&site("broken"), Some("5"), 2).await;
        assert!(empty.items.is_empty());
        assert_eq!(empty.page, 2);
        assert_eq!(empty.total_pages, 0);
        assert!(!outcome.is_success());
    }
}

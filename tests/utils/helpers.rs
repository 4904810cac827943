/// Test helper functions and service builders
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use vodscope::modules::provider::infrastructure::CollectingOutcomeReporter;
use vodscope::{
    CatalogService, EngineConfig, InMemorySiteRegistry, InMemoryUserSettings, MacCmsAdapter, Site,
    SiteRegistry, UserSettingsRepository,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const API_PATH: &str = "/api.php/provide/vod";

/// Short timeouts so timeout tests stay fast
pub fn test_config() -> EngineConfig {
    EngineConfig::default().with_timeouts(
        Duration::from_millis(500),
        Duration::from_millis(500),
        Duration::from_millis(500),
    )
}

pub fn site_for(server: &MockServer, key: &str, is_adult: bool) -> Site {
    Site::new(
        key,
        format!("Site {}", key.to_uppercase()),
        format!("{}{}", server.uri(), API_PATH),
        is_adult,
    )
}

/// Answer `?ac=videolist&wd={query}` with `body`
pub async fn mount_search(server: &MockServer, query: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param("ac", "videolist"))
        .and(query_param("wd", query))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Answer every request with `template`
pub async fn mount_any(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .respond_with(template)
        .mount(server)
        .await;
}

/// Fail the test if the server receives any request
pub async fn forbid_requests(server: &MockServer) {
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}

pub struct TestServices {
    pub catalog: CatalogService,
    pub reporter: Arc<CollectingOutcomeReporter>,
}

/// Catalog service over real HTTP with the given collaborators
pub fn build_catalog_with(
    registry: Arc<dyn SiteRegistry>,
    settings: Arc<dyn UserSettingsRepository>,
) -> TestServices {
    let config = test_config();
    let adapter = MacCmsAdapter::new(&config).expect("adapter builds");
    let reporter = Arc::new(CollectingOutcomeReporter::new());
    let catalog = CatalogService::new(
        registry,
        settings,
        Arc::new(adapter),
        reporter.clone(),
        config,
    );
    TestServices { catalog, reporter }
}

/// Catalog service over an in-memory registry of `sites`
pub fn build_catalog(sites: Vec<Site>, settings: InMemoryUserSettings) -> TestServices {
    build_catalog_with(
        Arc::new(InMemorySiteRegistry::new(sites)),
        Arc::new(settings),
    )
}

pub mod modules;
pub mod shared;

pub use modules::catalog::{
    AggregatedGroup, BrowseScope, CatalogItem, CatalogService, CategoriesRequest,
    CategoriesResponse, CategoryNode, CategoryTree, SearchRequest, SearchResponse, SearchResults,
    SearchView, VideosRequest, VideosResponse,
};
pub use modules::provider::{
    InMemorySiteRegistry, InMemoryUserSettings, MacCmsAdapter, Site, SiteOutcome, SiteRegistry,
    UpstreamAdapter, UserSettingsRepository,
};
pub use shared::utils::init_logger;
pub use shared::{AppError, AppResult, EngineConfig};

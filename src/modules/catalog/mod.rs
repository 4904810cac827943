pub mod application;
pub mod domain;

// Re-exports for easy external access
pub use application::{
    BrowseScope, CatalogService, CategoriesRequest, CategoriesResponse, SearchRequest,
    SearchResponse, SearchResults, SearchView, VideosRequest, VideosResponse,
};
pub use domain::{
    AggregatedGroup, CatalogItem, CategoryNode, CategoryTree, CategoryTreeBuilder, MediaType,
    ResultAggregator, ResultFilter,
};

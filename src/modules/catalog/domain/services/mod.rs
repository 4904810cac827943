pub mod category_tree_builder;
pub mod default_taxonomy;
pub mod result_aggregator;
pub mod result_filter;

pub use category_tree_builder::{CategoryTreeBuilder, MAX_CATEGORY_DEPTH};
pub use default_taxonomy::{default_taxonomy, UNKNOWN_CATEGORY_NAME};
pub use result_aggregator::ResultAggregator;
pub use result_filter::{CategoryMatcher, ResultFilter, ALL_CATEGORIES};

pub mod aggregated_group;
pub mod catalog_item;
pub mod category;

pub use aggregated_group::AggregatedGroup;
pub use catalog_item::CatalogItem;
pub use category::{CategoryNode, CategoryTree, CategoryTreeNode, ROOT_PARENT_MARKER};

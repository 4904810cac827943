pub mod fanout_orchestrator;
pub mod site_selection_service;

pub use fanout_orchestrator::{CategoryListing, FanoutOrchestrator, FanoutResult};
pub use site_selection_service::SiteSelectionService;

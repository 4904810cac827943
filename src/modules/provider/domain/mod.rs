pub mod entities;
pub mod repositories;
pub mod services;
pub mod value_objects;

// Re-exports for easy access
pub use entities::Site;
pub use repositories::{SiteRegistry, UserSettingsRepository};
pub use services::{CategoryListing, FanoutOrchestrator, FanoutResult, SiteSelectionService};
pub use value_objects::{
    AdultContentPolicy, OutcomeStatus, SiteOperation, SiteOutcome, SiteSelection, UpstreamPage,
};

pub mod domain;
pub mod infrastructure;
pub mod traits;

// Re-exports for easy external access
pub use domain::{
    AdultContentPolicy, FanoutOrchestrator, Site, SiteOutcome, SiteRegistry, SiteSelection,
    UserSettingsRepository,
};
pub use infrastructure::{InMemorySiteRegistry, InMemoryUserSettings, MacCmsAdapter};
pub use traits::UpstreamAdapter;

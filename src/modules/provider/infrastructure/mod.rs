pub mod adapters;
pub mod http_client;
pub mod monitoring;
pub mod registry;

pub use adapters::{MacCmsAdapter, MacCmsMapper};
pub use http_client::UpstreamClient;
pub use monitoring::{CollectingOutcomeReporter, LoggingOutcomeReporter, OutcomeReporter};
pub use registry::{InMemorySiteRegistry, InMemoryUserSettings};

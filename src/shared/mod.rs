// Shared Kernel - types and helpers used by every bounded context

pub mod application; // Shared application layer patterns
pub mod config; // Engine configuration
pub mod errors; // Shared error types
pub mod utils; // Logging and text helpers

// Re-exports for convenience
pub use config::EngineConfig;
pub use errors::{AppError, AppResult};

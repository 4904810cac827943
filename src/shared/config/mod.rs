pub mod engine_config;

pub use engine_config::{EngineConfig, DEFAULT_USER_AGENT};

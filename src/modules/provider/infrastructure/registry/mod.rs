pub mod in_memory_site_registry;
pub mod in_memory_user_settings;

pub use in_memory_site_registry::InMemorySiteRegistry;
pub use in_memory_user_settings::InMemoryUserSettings;

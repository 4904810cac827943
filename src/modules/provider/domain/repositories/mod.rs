mod site_registry;
mod user_settings_repo;

pub use site_registry::*;
pub use user_settings_repo::*;

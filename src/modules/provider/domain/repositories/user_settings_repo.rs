use async_trait::async_trait;

use crate::shared::errors::AppResult;

/// Per-user settings store
#[async_trait]
pub trait UserSettingsRepository: Send + Sync {
    /// `Some(false)` means the user asked not to filter adult content;
    /// `None` means no preference has been stored
    async fn adult_content_filter_preference(&self, user_id: &str) -> AppResult<Option<bool>>;
}

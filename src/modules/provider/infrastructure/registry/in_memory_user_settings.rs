use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::modules::provider::domain::repositories::UserSettingsRepository;
use crate::shared::errors::{AppError, AppResult};

/// User id to adult-content filter preference
#[derive(Debug, Default)]
pub struct InMemoryUserSettings {
    preferences: RwLock<HashMap<String, bool>>,
}

impl InMemoryUserSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_preference(self, user_id: &str, filter_adult: bool) -> Self {
        self.set_preference(user_id, filter_adult);
        self
    }

    pub fn set_preference(&self, user_id: &str, filter_adult: bool) {
        match self.preferences.write() {
            Ok(mut guard) => {
                guard.insert(user_id.to_string(), filter_adult);
            }
            Err(poisoned) => {
                poisoned
                    .into_inner()
                    .insert(user_id.to_string(), filter_adult);
            }
        }
    }
}

#[async_trait]
impl UserSettingsRepository for InMemoryUserSettings {
    async fn adult_content_filter_preference(&self, user_id: &str) -> AppResult<Option<bool>> {
        let guard = self.preferences.read().map_err(|_| {
            AppError::InternalError("User settings lock poisoned".to_string())
        })?;
        Ok(guard.get(user_id).copied())
    }
}

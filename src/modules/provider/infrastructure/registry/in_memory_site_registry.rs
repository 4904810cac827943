use async_trait::async_trait;

use crate::modules::provider::domain::{entities::Site, repositories::SiteRegistry};
use crate::shared::errors::{AppError, AppResult};

/// Fixed site list held in memory, in configuration order
#[derive(Debug, Clone, Default)]
pub struct InMemorySiteRegistry {
    sites: Vec<Site>,
}

impl InMemorySiteRegistry {
    pub fn new(sites: Vec<Site>) -> Self {
        Self { sites }
    }

    /// Parse a JSON array of sites (`key`, `name`, `baseApiUrl`, optional `isAdult`).
    /// Keys must be unique and non-empty.
    pub fn from_json(json: &str) -> AppResult<Self> {
        let sites: Vec<Site> = serde_json::from_str(json)?;

        for (position, site) in sites.iter().enumerate() {
            if site.key.trim().is_empty() {
                return Err(AppError::ValidationError(format!(
                    "Site #{} has an empty key",
                    position
                )));
            }
            if site.base_api_url.trim().is_empty() {
                return Err(AppError::ValidationError(format!(
                    "Site '{}' has an empty baseApiUrl",
                    site.key
                )));
            }
            if sites[..position].iter().any(|other| other.key == site.key) {
                return Err(AppError::ValidationError(format!(
                    "Duplicate site key '{}'",
                    site.key
                )));
            }
        }

        Ok(Self::new(sites))
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}

#[async_trait]
impl SiteRegistry for InMemorySiteRegistry {
    async fn available_sites(&self, filter_adult: bool) -> AppResult<Vec<Site>> {
        Ok(self
            .sites
            .iter()
            .filter(|site| !(filter_adult && site.is_adult))
            .cloned()
            .collect())
    }
}

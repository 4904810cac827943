use std::sync::Arc;

use crate::modules::provider::domain::{
    entities::Site,
    repositories::{SiteRegistry, UserSettingsRepository},
    value_objects::{AdultContentPolicy, SiteSelection},
};
use crate::shared::errors::{AppError, AppResult};

/// Resolves the adult-content policy and the concrete site set for a request
pub struct SiteSelectionService {
    registry: Arc<dyn SiteRegistry>,
    settings: Arc<dyn UserSettingsRepository>,
}

impl SiteSelectionService {
    pub fn new(registry: Arc<dyn SiteRegistry>, settings: Arc<dyn UserSettingsRepository>) -> Self {
        Self { registry, settings }
    }

    /// Without a user there is no stored preference, so filtering stays on
    pub async fn resolve_policy(
        &self,
        user_id: Option<&str>,
        include_adult: bool,
    ) -> AdultContentPolicy {
        let user_id = user_id.map(str::trim).filter(|id| !id.is_empty());
        let Some(user_id) = user_id else {
            return AdultContentPolicy::filtered();
        };

        let preference = self
            .settings
            .adult_content_filter_preference(user_id)
            .await;
        let policy = AdultContentPolicy::resolve(preference, include_adult);

        log::debug!(
            "Adult content policy for user '{}': filter_adult={}",
            user_id,
            policy.filter_adult
        );
        policy
    }

    /// Sites to query, in selection order.
    ///
    /// `All` may legitimately resolve to nothing. Explicit keys that resolve to
    /// nothing fail with `NoSitesAvailable` when the keys exist but were filtered
    /// out by the policy, and with `SiteNotFound` otherwise.
    pub async fn select_sites(
        &self,
        selection: &SiteSelection,
        policy: AdultContentPolicy,
    ) -> AppResult<Vec<Site>> {
        let available = self.available(policy).await?;

        let keys = match selection {
            SiteSelection::All => return Ok(available),
            SiteSelection::Keys(keys) => keys,
        };

        let selected: Vec<Site> = keys
            .iter()
            .filter_map(|key| available.iter().find(|site| &site.key == key).cloned())
            .collect();

        if selected.len() < keys.len() {
            let missing: Vec<&str> = keys
                .iter()
                .filter(|key| !selected.iter().any(|site| &site.key == *key))
                .map(String::as_str)
                .collect();
            log::warn!("Requested sites unavailable: {}", missing.join(", "));
        }

        if !selected.is_empty() {
            return Ok(selected);
        }

        let unfiltered = self.registry.available_sites(false).await?;
        let exists = keys
            .iter()
            .any(|key| unfiltered.iter().any(|site| &site.key == key));

        if exists {
            Err(AppError::NoSitesAvailable(format!(
                "No sites available for: {}",
                keys.join(", ")
            )))
        } else {
            Err(AppError::SiteNotFound(format!(
                "Site not found: {}",
                keys.join(", ")
            )))
        }
    }

    /// Single site lookup used by the browse operations
    pub async fn find_site(&self, key: &str, policy: AdultContentPolicy) -> AppResult<Site> {
        let key = key.trim();
        if key.is_empty() {
            return Err(AppError::InvalidInput("Site key is required".to_string()));
        }

        let selection = SiteSelection::Keys(vec![key.to_string()]);
        self.select_sites(&selection, policy)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::SiteNotFound(format!("Site not found: {}", key)))
    }

    async fn available(&self, policy: AdultContentPolicy) -> AppResult<Vec<Site>> {
        let sites = self.registry.available_sites(policy.filter_adult).await?;
        if !policy.filter_adult {
            return Ok(sites);
        }

        // the registry may ignore the flag
        let (kept, leaked): (Vec<Site>, Vec<Site>) =
            sites.into_iter().partition(|site| !site.is_adult);
        if !leaked.is_empty() {
            log::warn!(
                "Registry returned {} adult sites under filtering, dropping them",
                leaked.len()
            );
        }
        Ok(kept)
    }
}

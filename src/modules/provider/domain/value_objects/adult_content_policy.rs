use serde::{Deserialize, Serialize};

use crate::shared::errors::AppResult;

/// Effective adult-content policy for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdultContentPolicy {
    pub filter_adult: bool,
}

impl Default for AdultContentPolicy {
    fn default() -> Self {
        Self::filtered()
    }
}

impl AdultContentPolicy {
    pub fn filtered() -> Self {
        Self { filter_adult: true }
    }

    pub fn unfiltered() -> Self {
        Self {
            filter_adult: false,
        }
    }

    /// Filtering is off only when the stored preference is explicitly "do not filter"
    /// and the caller asked for adult content on this call. A failed lookup filters.
    pub fn resolve(preference: AppResult<Option<bool>>, include_adult: bool) -> Self {
        match preference {
            Ok(Some(false)) if include_adult => Self::unfiltered(),
            Ok(_) => Self::filtered(),
            Err(e) => {
                log::warn!(
                    "Adult content preference lookup failed, filtering adult sites: {}",
                    e
                );
                Self::filtered()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::errors::AppError;

    #[test]
    fn test_policy_resolution_table() {
        assert!(AdultContentPolicy::resolve(Ok(None), true).filter_adult);
        assert!(AdultContentPolicy::resolve(Ok(Some(true)), true).filter_adult);
        assert!(AdultContentPolicy::resolve(Ok(Some(false)), false).filter_adult);
        assert!(!AdultContentPolicy::resolve(Ok(Some(false)), true).filter_adult);
    }

    #[test]
    fn test_store_error_fails_closed() {
        let failed = Err(AppError::ExternalServiceError("settings down".to_string()));
        assert!(AdultContentPolicy::resolve(failed, true).filter_adult);
    }

    #[test]
    fn test_default_filters() {
        assert!(AdultContentPolicy::default().filter_adult);
    }
}

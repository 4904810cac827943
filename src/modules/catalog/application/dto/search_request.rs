use serde::{Deserialize, Serialize};

use crate::modules::provider::domain::value_objects::SiteSelection;

/// Shape of the regular results in a search response
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchView {
    /// Grouped by logical title and ordered by relevance
    #[default]
    Aggregated,
    /// Filtered items in fan-out order
    Flat,
}

/// Request DTO for a multi-site search
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// Search text; blank text returns an empty result without contacting any site
    pub query: String,
    /// Restrict the search to one site
    #[serde(default)]
    pub source_key: Option<String>,
    /// Restrict the search to several sites; entries may be comma separated.
    /// Takes precedence over `source_key`.
    #[serde(default)]
    pub source_keys: Vec<String>,
    /// Category name to filter by; `"all"` or blank disables the filter
    #[serde(default)]
    pub category_label: Option<String>,
    /// Category id resolved to a name through the single selected site's tree.
    /// Ignored when `category_label` is set.
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    /// Ask for adult sites on this call (only honored if the user opted out of filtering)
    #[serde(default)]
    pub include_adult: bool,
    #[serde(default)]
    pub view: SearchView,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn with_source_key(mut self, key: impl Into<String>) -> Self {
        self.source_key = Some(key.into());
        self
    }

    pub fn with_source_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_category_label(mut self, label: impl Into<String>) -> Self {
        self.category_label = Some(label.into());
        self
    }

    pub fn with_category_id(mut self, id: impl Into<String>) -> Self {
        self.category_id = Some(id.into());
        self
    }

    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn including_adult(mut self) -> Self {
        self.include_adult = true;
        self
    }

    pub fn with_view(mut self, view: SearchView) -> Self {
        self.view = view;
        self
    }

    /// Trimmed query text, `None` when blank
    pub fn query_text(&self) -> Option<&str> {
        Some(self.query.trim()).filter(|q| !q.is_empty())
    }

    pub fn site_selection(&self) -> SiteSelection {
        SiteSelection::from_request(self.source_key.as_deref(), &self.source_keys)
    }

    pub fn category_label(&self) -> Option<&str> {
        self.category_label
            .as_deref()
            .map(str::trim)
            .filter(|label| !label.is_empty())
    }

    pub fn category_id(&self) -> Option<&str> {
        self.category_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_request() {
        let request: SearchRequest = serde_json::from_str(r#"{"query":"inception"}"#).unwrap();
        assert_eq!(request.query_text(), Some("inception"));
        assert_eq!(request.view, SearchView::Aggregated);
        assert!(!request.include_adult);
        assert_eq!(request.site_selection(), SiteSelection::All);
    }

    #[test]
    fn test_blank_query_and_label() {
        let request = SearchRequest::new("   ").with_category_label("  ");
        assert_eq!(request.query_text(), None);
        assert_eq!(request.category_label(), None);
    }

    #[test]
    fn test_builder_selection() {
        let request = SearchRequest::new("q")
            .with_source_key("solo")
            .with_source_keys(["a,b"]);
        assert_eq!(
            request.site_selection(),
            SiteSelection::Keys(vec!["a".to_string(), "b".to_string()])
        );
    }
}

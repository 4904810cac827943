use serde::{Deserialize, Serialize};

/// One upstream catalog API, as supplied by the site registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    /// Unique, stable identifier
    pub key: String,
    pub name: String,
    pub base_api_url: String,
    #[serde(default)]
    pub is_adult: bool,
}

impl Site {
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        base_api_url: impl Into<String>,
        is_adult: bool,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            base_api_url: base_api_url.into(),
            is_adult,
        }
    }

    /// Build `{base}?{query}`, or `{base}&{query}` when the base already carries a query string
    pub fn endpoint(&self, query: &str) -> String {
        let base = self.base_api_url.trim_end();
        let separator = if base.contains('?') { '&' } else { '?' };
        format!("{}{}{}", base, separator, query)
    }
}

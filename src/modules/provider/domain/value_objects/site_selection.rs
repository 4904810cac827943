use serde::{Deserialize, Serialize};

/// Which sites a request targets before the adult-content policy is applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "keys", rename_all = "camelCase")]
pub enum SiteSelection {
    /// Every site the registry offers
    All,
    /// Explicit keys, in caller order, without duplicates
    Keys(Vec<String>),
}

impl SiteSelection {
    /// Multiple keys win over a single key; entries may themselves be comma separated.
    /// Blank entries are ignored and no usable key means `All`.
    pub fn from_request(source_key: Option<&str>, source_keys: &[String]) -> Self {
        let from_many = Self::normalize(source_keys.iter().map(String::as_str));
        if !from_many.is_empty() {
            return Self::Keys(from_many);
        }

        let from_single = Self::normalize(source_key.into_iter());
        if from_single.is_empty() {
            Self::All
        } else {
            Self::Keys(from_single)
        }
    }

    fn normalize<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<String> {
        let mut keys: Vec<String> = Vec::new();
        for key in raw.flat_map(|entry| entry.split(',')).map(str::trim) {
            if !key.is_empty() && !keys.iter().any(|existing| existing == key) {
                keys.push(key.to_string());
            }
        }
        keys
    }
}

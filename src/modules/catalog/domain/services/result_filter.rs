use std::collections::HashSet;

use crate::modules::catalog::domain::entities::CatalogItem;

/// Trailing designator character meaning "film / show" (动作片 -> 动作)
pub const CATEGORY_DESIGNATOR_SUFFIX: char = '片';

/// Label the caller sends when no category filter is wanted
pub const ALL_CATEGORIES: &str = "all";

/// Matches an item's category field against a requested category label.
///
/// The label matches when the field equals it, contains it, or lists it as one
/// of its comma separated entries. The same checks are repeated with the
/// designator suffix removed from the label. Case sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMatcher {
    label: String,
    stripped: Option<String>,
}

impl CategoryMatcher {
    /// Returns `None` for blank labels and for `"all"`
    pub fn new(label: &str) -> Option<Self> {
        let label = label.trim();
        if label.is_empty() || label == ALL_CATEGORIES {
            return None;
        }

        let stripped = label
            .strip_suffix(CATEGORY_DESIGNATOR_SUFFIX)
            .filter(|s| !s.is_empty() && *s != label)
            .map(str::to_string);

        Some(Self {
            label: label.to_string(),
            stripped,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn matches(&self, category_field: &str) -> bool {
        Self::matches_label(category_field, &self.label)
            || self
                .stripped
                .as_deref()
                .is_some_and(|stripped| Self::matches_label(category_field, stripped))
    }

    fn matches_label(field: &str, label: &str) -> bool {
        field == label
            || field.contains(label)
            || field.split(',').map(str::trim).any(|entry| entry == label)
    }
}

/// Policies applied to the concatenated fan-out output, in order
pub struct ResultFilter;

impl ResultFilter {
    /// Keep only items produced by one of the selected sites
    pub fn retain_sites(items: Vec<CatalogItem>, site_keys: &[String]) -> Vec<CatalogItem> {
        let allowed: HashSet<&str> = site_keys.iter().map(String::as_str).collect();
        let before = items.len();
        let kept: Vec<CatalogItem> = items
            .into_iter()
            .filter(|item| allowed.contains(item.source_key.as_str()))
            .collect();

        if kept.len() != before {
            log::warn!(
                "Dropped {} items from sites outside the selected set",
                before - kept.len()
            );
        }
        kept
    }

    /// Keep items whose category text matches the label; no label keeps everything
    pub fn retain_category(items: Vec<CatalogItem>, label: Option<&str>) -> Vec<CatalogItem> {
        let Some(matcher) = label.and_then(CategoryMatcher::new) else {
            return items;
        };

        let before = items.len();
        let kept: Vec<CatalogItem> = items
            .into_iter()
            .filter(|item| matcher.matches(item.category_text()))
            .collect();

        log::info!(
            "Category filter '{}': {}/{} results kept",
            matcher.label(),
            kept.len(),
            before
        );
        kept
    }

    /// Site safety net followed by the optional category filter
    pub fn apply(
        items: Vec<CatalogItem>,
        site_keys: &[String],
        category_label: Option<&str>,
    ) -> Vec<CatalogItem> {
        let items = Self::retain_sites(items, site_keys);
        Self::retain_category(items, category_label)
    }
}

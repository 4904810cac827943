use std::cmp::Ordering;
use std::collections::HashMap;

use crate::modules::catalog::domain::entities::{AggregatedGroup, CatalogItem};
use crate::shared::utils::text::{strip_spaces, UNKNOWN_YEAR};

/// Groups per-site hits into logical titles and orders the groups
pub struct ResultAggregator;

impl ResultAggregator {
    /// `normalizedTitle-year-mediaType`, with every whitespace character removed from the title
    pub fn group_key(item: &CatalogItem) -> String {
        format!(
            "{}-{}-{}",
            strip_spaces(&item.title),
            item.effective_year(),
            item.media_type()
        )
    }

    /// Group items by key, keeping first-seen order inside each group,
    /// then sort the groups by relevance to `query`
    pub fn aggregate(items: Vec<CatalogItem>, query: &str) -> Vec<AggregatedGroup> {
        let item_count = items.len();
        let mut groups: Vec<AggregatedGroup> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for item in items {
            let key = Self::group_key(&item);
            match index.get(&key) {
                Some(&position) => groups[position].items.push(item),
                None => {
                    index.insert(key.clone(), groups.len());
                    groups.push(AggregatedGroup::new(key, item));
                }
            }
        }

        let needle = strip_spaces(query);
        groups.sort_by(|a, b| Self::compare_groups(a, b, &needle));

        tracing::debug!(
            items = item_count,
            groups = groups.len(),
            query = %query,
            "aggregated search results"
        );

        groups
    }

    /// Title match first, then newer years, unknown years last, then group key
    fn compare_groups(a: &AggregatedGroup, b: &AggregatedGroup, needle: &str) -> Ordering {
        let a_matches = strip_spaces(a.title()).contains(needle);
        let b_matches = strip_spaces(b.title()).contains(needle);

        if a_matches != b_matches {
            return if a_matches {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }

        let (a_year, b_year) = (a.year(), b.year());
        if a_year == b_year {
            return a.group_key.cmp(&b.group_key);
        }

        match (a_year == UNKNOWN_YEAR, b_year == UNKNOWN_YEAR) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => b_year.cmp(a_year),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(source: &str, title: &str, year: &str, episodes: usize) -> CatalogItem {
        CatalogItem {
            id: format!("{}-{}", source, title),
            title: title.to_string(),
            poster_url: String::new(),
            episode_urls: (0..episodes)
                .map(|i| format!("https://cdn.example.com/{}/{}.m3u8", source, i))
                .collect(),
            source_key: source.to_string(),
            source_name: source.to_uppercase(),
            category_label: String::new(),
            year: year.to_string(),
            description: String::new(),
            type_label: None,
            external_rating_id: None,
        }
    }

    fn keys(groups: &[AggregatedGroup]) -> Vec<&str> {
        groups.iter().map(|g| g.group_key.as_str()).collect()
    }

    #[test]
    fn test_space_insensitive_titles_share_a_group() {
        let groups = ResultAggregator::aggregate(
            vec![
                item("a", "Inception", "2010", 1),
                item("b", "In ception", "2010", 1),
            ],
            "Inception",
        );

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].group_key, "Inception-2010-movie");
        assert_eq!(groups[0].source_keys(), vec!["a", "b"]);
    }

    #[test]
    fn test_query_match_ignores_only_ascii_spaces() {
        let items = vec![item("a", "Zeta", "2024", 1), item("b", "流浪地球", "2019", 1)];

        let spaced = ResultAggregator::aggregate(items.clone(), "流浪 地球");
        assert_eq!(keys(&spaced), vec!["流浪地球-2019-movie", "Zeta-2024-movie"]);

        let ideographic = ResultAggregator::aggregate(items, "流浪\u{3000}地球");
        assert_eq!(keys(&ideographic), vec!["Zeta-2024-movie", "流浪地球-2019-movie"]);
    }

    #[test]
    fn test_media_type_splits_groups() {
        let groups = ResultAggregator::aggregate(
            vec![item("a", "Show", "2020", 1), item("b", "Show", "2020", 12)],
            "Show",
        );
        assert_eq!(keys(&groups), vec!["Show-2020-movie", "Show-2020-tv"]);
    }

    #[test]
    fn test_episode_free_items_are_tv() {
        let groups = ResultAggregator::aggregate(vec![item("a", "Trailer", "2020", 0)], "");
        assert_eq!(keys(&groups), vec!["Trailer-2020-tv"]);
    }

    #[test]
    fn test_query_match_sorts_first_regardless_of_year() {
        let groups = ResultAggregator::aggregate(
            vec![
                item("a", "Other Title", "2024", 1),
                item("b", "in sep tion", "1999", 1),
            ],
            "insep",
        );
        assert_eq!(
            keys(&groups),
            vec!["inseption-1999-movie", "OtherTitle-2024-movie"]
        );
    }

    #[test]
    fn test_year_ordering_newest_first_unknown_last() {
        let groups = ResultAggregator::aggregate(
            vec![
                item("a", "Alpha", "unknown", 1),
                item("a", "Beta", "2001", 1),
                item("a", "Gamma", "2019", 1),
            ],
            "",
        );
        assert_eq!(
            keys(&groups),
            vec!["Gamma-2019-movie", "Beta-2001-movie", "Alpha-unknown-movie"]
        );
    }

    #[test]
    fn test_equal_years_fall_back_to_key_order() {
        let groups = ResultAggregator::aggregate(
            vec![item("a", "Zeta", "2020", 1), item("a", "Alpha", "2020", 1)],
            "",
        );
        assert_eq!(keys(&groups), vec!["Alpha-2020-movie", "Zeta-2020-movie"]);
    }

    #[test]
    fn test_blank_year_groups_as_unknown() {
        let groups = ResultAggregator::aggregate(
            vec![item("a", "Film", "", 1), item("b", "Film", "unknown", 1)],
            "",
        );
        assert_eq!(keys(&groups), vec!["Film-unknown-movie"]);
        assert_eq!(groups[0].len(), 2);
    }

    #[test]
    fn test_member_order_follows_input() {
        let groups = ResultAggregator::aggregate(
            vec![
                item("c", "Film", "2020", 1),
                item("a", "Other", "2020", 1),
                item("b", "Film", "2020", 1),
                item("a", "Film", "2020", 1),
            ],
            "Film",
        );
        assert_eq!(groups[0].source_keys(), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_aggregate_is_deterministic() {
        let input = vec![
            item("a", "One", "2020", 1),
            item("b", "Two", "unknown", 3),
            item("c", "One", "2020", 1),
            item("d", "Three", "2015", 1),
        ];
        let first = ResultAggregator::aggregate(input.clone(), "o");
        let second = ResultAggregator::aggregate(input, "o");
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_input() {
        assert!(ResultAggregator::aggregate(vec![], "anything").is_empty());
    }
}

//! Text normalization helpers shared by the upstream mapper and the aggregator.

use regex::Regex;
use std::sync::OnceLock;

/// Sentinel year used when an upstream record carries no parseable year
pub const UNKNOWN_YEAR: &str = "unknown";

fn html_tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]+>").expect("html tag pattern is valid"))
}

fn year_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d{4}").expect("year pattern is valid"))
}

/// Strip HTML tags from free text, keeping line structure readable.
///
/// Tags become line breaks, runs of blank lines collapse to one, `&nbsp;`
/// becomes a plain space and the result is trimmed.
pub fn strip_html_tags(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let without_tags = html_tag_regex().replace_all(input, "\n");
    let without_entities = without_tags.replace("&nbsp;", " ");

    without_entities
        .lines()
        .map(|line| collapse_whitespace(line))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// First 4-digit run of the raw year field, or [`UNKNOWN_YEAR`]
pub fn extract_year(raw: Option<&str>) -> String {
    raw.and_then(|value| year_regex().find(value))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| UNKNOWN_YEAR.to_string())
}

/// Trim and collapse every whitespace run into a single ASCII space
pub fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Remove ASCII spaces only; other whitespace and case are kept
pub fn strip_spaces(input: &str) -> String {
    input.replace(' ', "")
}

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

use super::models::*;
use crate::modules::catalog::domain::entities::{CatalogItem, CategoryNode};
use crate::modules::catalog::domain::services::UNKNOWN_CATEGORY_NAME;
use crate::modules::provider::domain::{entities::Site, value_objects::UpstreamPage};
use crate::shared::utils::text::{collapse_whitespace, extract_year, strip_html_tags};

/// Separator between playlist groups in `vod_play_url`
pub const PLAYLIST_GROUP_SEPARATOR: &str = "$$$";

fn episode_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"\$(https?://[^"'\s]+?\.m3u8)"#).expect("episode pattern is valid")
    })
}

/// Maps MacCMS payloads to canonical categories and items
#[derive(Debug, Default, Clone, Copy)]
pub struct MacCmsMapper;

impl MacCmsMapper {
    pub fn new() -> Self {
        Self
    }

    /// `class` wins over `list` whenever it is an array, even an empty one
    pub fn map_categories(&self, response: MacCmsCategoryResponse) -> Vec<CategoryNode> {
        let raw = response.class.or(response.list).unwrap_or_default();

        raw.into_iter()
            .filter_map(|category| self.map_category(category))
            .collect()
    }

    fn map_category(&self, category: MacCmsCategory) -> Option<CategoryNode> {
        let name = non_blank(category.type_name);
        let id = non_blank(category.type_id).or_else(|| name.clone())?;
        let parent = non_blank(category.type_pid);

        Some(CategoryNode::new(
            id,
            name.unwrap_or_else(|| UNKNOWN_CATEGORY_NAME.to_string()),
            parent.as_deref(),
        ))
    }

    /// Items without a usable name are skipped
    pub fn map_video(&self, video: MacCmsVideo, site: &Site) -> Option<CatalogItem> {
        let title = collapse_whitespace(video.vod_name.as_deref()?);
        if title.is_empty() {
            return None;
        }

        let episode_urls = video
            .vod_play_url
            .as_deref()
            .map(Self::extract_episodes)
            .unwrap_or_default();

        Some(CatalogItem {
            id: video.vod_id.unwrap_or_default(),
            title,
            poster_url: video.vod_pic.unwrap_or_default(),
            episode_urls,
            source_key: site.key.clone(),
            source_name: site.name.clone(),
            category_label: video.vod_class.unwrap_or_default(),
            year: extract_year(video.vod_year.as_deref()),
            description: strip_html_tags(video.vod_content.as_deref().unwrap_or("")),
            type_label: non_blank(video.type_name),
            external_rating_id: video.vod_douban_id,
        })
    }

    pub fn map_videos(&self, videos: Vec<MacCmsVideo>, site: &Site) -> Vec<CatalogItem> {
        let total = videos.len();
        let items: Vec<CatalogItem> = videos
            .into_iter()
            .filter_map(|video| self.map_video(video, site))
            .collect();

        if items.len() < total {
            log::debug!(
                "{}: skipped {} nameless items",
                site.key,
                total - items.len()
            );
        }
        items
    }

    /// Listing page; pagination comes from the envelope, the page number from the request
    pub fn map_page(
        &self,
        response: MacCmsVideoListResponse,
        site: &Site,
        requested_page: u32,
    ) -> UpstreamPage {
        let items = self.map_videos(response.list.unwrap_or_default(), site);

        UpstreamPage {
            items,
            page: requested_page,
            total_pages: response
                .pagecount
                .map(|count| count.min(u32::MAX as u64) as u32)
                .unwrap_or(0),
            total_count: response.total.unwrap_or(0),
        }
    }

    /// Episode URLs of the playlist group with the most `.m3u8` links.
    ///
    /// The first group wins ties. Each URL loses its leading `$` and any
    /// `(...)` annotation, and duplicates are removed keeping first-seen order.
    pub fn extract_episodes(play_url: &str) -> Vec<String> {
        let mut best: Vec<&str> = Vec::new();
        for group in play_url.split(PLAYLIST_GROUP_SEPARATOR) {
            let matches: Vec<&str> = episode_regex()
                .find_iter(group)
                .map(|m| m.as_str())
                .collect();
            if matches.len() > best.len() {
                best = matches;
            }
        }

        let mut seen_raw = HashSet::new();
        let mut seen = HashSet::new();
        best.into_iter()
            .filter(|raw| seen_raw.insert(*raw))
            .map(|raw| {
                let link = raw.strip_prefix('$').unwrap_or(raw);
                match link.find('(') {
                    Some(paren) if paren > 0 => link[..paren].to_string(),
                    _ => link.to_string(),
                }
            })
            .filter(|link| seen.insert(link.clone()))
            .collect()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

use crate::modules::catalog::domain::entities::{CategoryNode, ROOT_PARENT_MARKER};

/// Name used when an upstream category carries no name at all
pub const UNKNOWN_CATEGORY_NAME: &str = "未知分类";

/// (id, name, parent id)
const DEFAULT_CATEGORIES: &[(&str, &str, &str)] = &[
    ("1", "电影", ROOT_PARENT_MARKER),
    ("11", "动作片", "1"),
    ("12", "喜剧片", "1"),
    ("13", "爱情片", "1"),
    ("14", "科幻片", "1"),
    ("15", "恐怖片", "1"),
    ("16", "战争片", "1"),
    ("2", "电视剧", ROOT_PARENT_MARKER),
    ("21", "国产剧", "2"),
    ("22", "美剧", "2"),
    ("23", "韩剧", "2"),
    ("24", "日剧", "2"),
    ("25", "港台剧", "2"),
    ("3", "综艺", ROOT_PARENT_MARKER),
    ("31", "真人秀", "3"),
    ("32", "脱口秀", "3"),
    ("33", "游戏竞技", "3"),
    ("4", "动漫", ROOT_PARENT_MARKER),
    ("41", "国产动漫", "4"),
    ("42", "日本动漫", "4"),
    ("43", "欧美动漫", "4"),
    ("5", "纪录片", ROOT_PARENT_MARKER),
    ("6", "体育", ROOT_PARENT_MARKER),
];

/// Built-in two level genre taxonomy, substituted when a site yields no categories
pub fn default_taxonomy() -> Vec<CategoryNode> {
    DEFAULT_CATEGORIES
        .iter()
        .map(|(id, name, parent)| CategoryNode::new(*id, *name, Some(*parent)))
        .collect()
}

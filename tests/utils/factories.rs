/// Upstream payload factories using builder pattern
///
/// Produces MacCMS-shaped JSON with sensible defaults
use serde_json::{json, Value};

pub struct VodFactory {
    id: Value,
    name: String,
    year: Option<String>,
    class: Option<String>,
    type_name: Option<String>,
    episodes: Vec<String>,
    content: String,
}

impl Default for VodFactory {
    fn default() -> Self {
        Self {
            id: json!(1),
            name: "Test Film".to_string(),
            year: Some("2020".to_string()),
            class: None,
            type_name: None,
            episodes: vec!["https://cdn.example.com/test/index.m3u8".to_string()],
            content: "<p>Test description</p>".to_string(),
        }
    }
}

impl VodFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = json!(id);
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn year(mut self, year: Option<&str>) -> Self {
        self.year = year.map(str::to_string);
        self
    }

    pub fn class(mut self, class: &str) -> Self {
        self.class = Some(class.to_string());
        self
    }

    pub fn type_name(mut self, type_name: &str) -> Self {
        self.type_name = Some(type_name.to_string());
        self
    }

    /// Replace the single default episode with `count` distinct episodes
    pub fn episodes(mut self, prefix: &str, count: usize) -> Self {
        self.episodes = (1..=count)
            .map(|n| format!("https://cdn.example.com/{}/{}.m3u8", prefix, n))
            .collect();
        self
    }

    pub fn build(self) -> Value {
        let play_url = self
            .episodes
            .iter()
            .enumerate()
            .map(|(n, url)| format!("第{}集${}", n + 1, url))
            .collect::<Vec<_>>()
            .join("#");

        let mut vod = json!({
            "vod_id": self.id,
            "vod_name": self.name,
            "vod_pic": "https://img.example.com/poster.jpg",
            "vod_play_url": play_url,
            "vod_content": self.content,
        });
        if let Some(year) = self.year {
            vod["vod_year"] = json!(year);
        }
        if let Some(class) = self.class {
            vod["vod_class"] = json!(class);
        }
        if let Some(type_name) = self.type_name {
            vod["type_name"] = json!(type_name);
        }
        vod
    }
}

/// `?ac=videolist` envelope around `items`
pub fn video_list(items: Vec<Value>, page: u64, pagecount: u64, total: u64) -> Value {
    json!({
        "code": 1,
        "msg": "数据列表",
        "page": page,
        "pagecount": pagecount,
        "limit": "20",
        "total": total,
        "list": items,
    })
}

/// `?ac=list` envelope using the `class` array
pub fn category_list(categories: &[(&str, &str, &str)]) -> Value {
    let class: Vec<Value> = categories
        .iter()
        .map(|(id, name, pid)| json!({"type_id": id, "type_name": name, "type_pid": pid}))
        .collect();
    json!({"code": 1, "msg": "数据列表", "class": class})
}

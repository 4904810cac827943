// MacCMS collection API models (`?ac=list`, `?ac=videolist`)
// Every field is optional and accepts the loose typing real sites emit.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MacCmsCategoryResponse {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub code: Option<i64>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub msg: Option<String>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub class: Option<Vec<MacCmsCategory>>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub list: Option<Vec<MacCmsCategory>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MacCmsCategory {
    #[serde(default, deserialize_with = "string_or_number")]
    pub type_id: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub type_name: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub type_pid: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MacCmsVideoListResponse {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub code: Option<i64>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub msg: Option<String>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub page: Option<u64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub pagecount: Option<u64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub total: Option<u64>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub list: Option<Vec<MacCmsVideo>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MacCmsVideo {
    #[serde(default, deserialize_with = "string_or_number")]
    pub vod_id: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub vod_name: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub vod_pic: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub vod_play_url: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub vod_class: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub vod_year: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub vod_content: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub vod_douban_id: Option<i64>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub type_name: Option<String>,
}

/// Strings pass through, numbers and booleans are stringified, anything else is `None`
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Arrays become `Some`, dropping elements that do not fit `T`; non-arrays become `None`
fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(values) => Some(
            values
                .into_iter()
                .filter_map(|value| serde_json::from_value(value).ok())
                .collect(),
        ),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_list_accepts_loose_types() {
        let json = r#"{
            "code": 1,
            "msg": "数据列表",
            "page": "2",
            "pagecount": 10,
            "total": "195",
            "list": [
                {"vod_id": 42, "vod_name": "Film", "vod_year": 2020, "vod_douban_id": "1234"},
                "garbage",
                {"vod_id": "x1", "vod_name": "Other", "vod_douban_id": null}
            ]
        }"#;

        let response: MacCmsVideoListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.page, Some(2));
        assert_eq!(response.pagecount, Some(10));
        assert_eq!(response.total, Some(195));

        let list = response.list.unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].vod_id.as_deref(), Some("42"));
        assert_eq!(list[0].vod_year.as_deref(), Some("2020"));
        assert_eq!(list[0].vod_douban_id, Some(1234));
        assert_eq!(list[1].vod_douban_id, None);
    }

    #[test]
    fn test_category_response_without_arrays() {
        let response: MacCmsCategoryResponse =
            serde_json::from_str(r#"{"code":1,"msg":"ok","class":"none"}"#).unwrap();
        assert!(response.class.is_none());
        assert!(response.list.is_none());
    }

    #[test]
    fn test_category_numeric_ids() {
        let response: MacCmsCategoryResponse = serde_json::from_str(
            r#"{"class":[{"type_id":1,"type_name":"电影","type_pid":0}]}"#,
        )
        .unwrap();
        let class = response.class.unwrap();
        assert_eq!(class[0].type_id.as_deref(), Some("1"));
        assert_eq!(class[0].type_pid.as_deref(), Some("0"));
    }
}

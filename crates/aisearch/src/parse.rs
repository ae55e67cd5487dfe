use crate::TranslationError;
use jobs_core::{DatePosted, PartialSearchFilter};
use regex::Regex;
use serde::Deserialize;
use std::sync::OnceLock;

static FENCE_REGEX: OnceLock<Regex> = OnceLock::new();

#[derive(Debug, Deserialize)]
struct RawReply {
    query: Option<String>,
    location: Option<String>,
    #[serde(rename = "datePosted")]
    date_posted: Option<String>,
}

/// Markdown のコードフェンス (```json / ```) を取り除く
///
/// 正規表現: `(?i)```(?:json)?`
pub fn strip_fences(reply: &str) -> String {
    let regex = FENCE_REGEX.get_or_init(|| Regex::new(r"(?i)```(?:json)?").unwrap());
    regex.replace_all(reply, "").trim().to_string()
}

/// モデルの返答を部分的な検索条件として読み込む
///
/// - JSON オブジェクトでない、または `query` が空なら `Malformed`
/// - `datePosted` が5区分のどれでもない場合、そのフィールドだけ捨てる
/// - 空の `location` も未指定として扱う
pub fn parse_reply(reply: &str) -> Result<PartialSearchFilter, TranslationError> {
    let cleaned = strip_fences(reply);

    let value: serde_json::Value = serde_json::from_str(&cleaned)
        .map_err(|e| TranslationError::Malformed(format!("invalid JSON: {}", e)))?;
    if !value.is_object() {
        return Err(TranslationError::Malformed(
            "reply is not a JSON object".to_string(),
        ));
    }

    let raw: RawReply = serde_json::from_value(value)
        .map_err(|e| TranslationError::Malformed(format!("unexpected shape: {}", e)))?;

    let query = raw
        .query
        .map(|q| q.trim().to_string())
        .filter(|q| !q.is_empty())
        .ok_or_else(|| TranslationError::Malformed("missing query".to_string()))?;

    let location = raw
        .location
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty());

    let date_posted = raw.date_posted.and_then(|d| {
        let parsed = DatePosted::from_str(&d.trim().to_ascii_lowercase());
        if parsed.is_none() {
            tracing::warn!("Ignoring unsupported datePosted from model: {:?}", d);
        }
        parsed
    });

    Ok(PartialSearchFilter {
        query,
        location,
        date_posted,
    })
}

use jobs_core::SearchFilter;

/// Fixed page window: one page, starting at page 1.
pub const PAGE: &str = "1";
pub const NUM_PAGES: &str = "1";

/// 求人検索 API へ送るクエリパラメータ一式
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRequest {
    pub params: Vec<(&'static str, String)>,
}

impl ListingRequest {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn query(&self) -> &str {
        self.get("query").unwrap_or_default()
    }
}

/// 検索条件を上流 API のリクエスト形式に正規化する
///
/// - `query` は `"<キーワード> in <地域>"`。地域が未指定なら既定地域を埋め込む
/// - `page` / `num_pages` は常に 1
/// - `remote_jobs_only` はリモート限定のときだけ付ける
/// - `employment_types` は常に付ける (既定値も空ではないため)
pub fn build_request(filter: &SearchFilter) -> ListingRequest {
    let full_query = format!(
        "{} in {}",
        filter.query_text.trim(),
        filter.effective_location()
    );

    let mut params = vec![
        ("query", full_query),
        ("page", PAGE.to_string()),
        ("num_pages", NUM_PAGES.to_string()),
        ("date_posted", filter.date_posted.as_str().to_string()),
    ];

    if filter.remote_only {
        params.push(("remote_jobs_only", "true".to_string()));
    }

    params.push((
        "employment_types",
        filter.employment_type.as_str().to_string(),
    ));

    ListingRequest { params }
}

use crate::error::AppError;
use crate::page::{self, SearchPage};
use crate::state::{SearchQuery, SharedState};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Html,
};
use jsearch::ListingError;

pub const LISTINGS_NOT_CONFIGURED: &str = "Job search is not configured on this server yet.";
pub const LISTINGS_UNAVAILABLE: &str =
    "Job search is temporarily unavailable. Please try again in a moment.";

/// 検索ページ。上流が失敗しても 0 件のページとして必ず描画する
///
/// 読めないクエリ文字列 (同じキーの重複など) は既定の検索として扱う。
pub async fn search_page(
    State(state): State<SharedState>,
    params: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Html<String>, AppError> {
    let params = match params {
        Ok(Query(params)) => params,
        Err(rejection) => {
            tracing::warn!("Ignoring unreadable search parameters: {}", rejection);
            SearchQuery::default()
        }
    };
    let filter = params.to_filter();
    let view = params.view();
    tracing::info!(
        "Received search request: {:?} (location={:?}, date_posted={}, remote={}, job_type={})",
        filter.query_text,
        filter.location,
        filter.date_posted.as_str(),
        filter.remote_only,
        filter.employment_type.as_str()
    );

    let (listings, notice) = match state.listings.search(&filter).await {
        Ok(listings) => (listings, None),
        Err(e) => {
            tracing::warn!("Rendering empty results: {}", e);
            (Vec::new(), Some(notice_for(&e)))
        }
    };

    let html = page::render(&SearchPage {
        filter: &filter,
        view,
        listings: &listings,
        notice,
        now: chrono::Utc::now(),
    })?;
    Ok(Html(html))
}

fn notice_for(err: &ListingError) -> &'static str {
    if err.is_configuration() {
        LISTINGS_NOT_CONFIGURED
    } else {
        LISTINGS_UNAVAILABLE
    }
}

use crate::error::AppError;
use crate::page::search_href;
use crate::state::{AiSearchForm, AiSearchRequest, SharedState};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    response::{Json, Redirect},
};
use jobs_core::PartialSearchFilter;

/// 自然文を検索条件に変換する JSON API
pub async fn ai_search(
    State(state): State<SharedState>,
    payload: Result<Json<AiSearchRequest>, JsonRejection>,
) -> Result<Json<PartialSearchFilter>, AppError> {
    let Json(payload) = payload?;
    tracing::info!("Received AI search request ({} chars)", payload.prompt.len());

    let filter = aisearch::translate(&state.translator, &payload.prompt).await?;
    Ok(Json(filter))
}

/// JavaScript なしで使うフォーム用。変換結果を検索ページへリダイレクトする
///
/// 変換に失敗した場合は入力をそのままキーワードとして検索する。
pub async fn ai_search_redirect(
    State(state): State<SharedState>,
    form: Result<Query<AiSearchForm>, QueryRejection>,
) -> Redirect {
    let form = match form {
        Ok(Query(form)) => form,
        Err(rejection) => {
            tracing::warn!("Ignoring unreadable AI search form: {}", rejection);
            AiSearchForm::default()
        }
    };
    let Some(prompt) = form.prompt() else {
        return Redirect::to("/");
    };

    let partial = match aisearch::translate(&state.translator, prompt).await {
        Ok(partial) => partial,
        Err(e) => {
            if e.is_configuration() {
                tracing::error!("AI search unavailable, falling back to keyword search: {}", e);
            } else {
                tracing::warn!("AI search failed, falling back to keyword search: {}", e);
            }
            PartialSearchFilter::plain(prompt)
        }
    };

    let filter = partial.merge_into(form.base_filter(prompt));
    Redirect::to(&search_href(&filter, form.view()))
}

pub mod api;
pub mod parse;
pub mod prompt;

use jobs_core::PartialSearchFilter;

pub use api::{GeminiClient, GeminiConfig, TextModel};
pub use parse::{parse_reply, strip_fences};
pub use prompt::build_prompt;

#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    #[error("Gemini API Key missing")]
    MissingApiKey,
    #[error("prompt is empty")]
    EmptyPrompt,
    #[error("text model request failed: {0:#}")]
    Upstream(anyhow::Error),
    #[error("model reply is not a usable filter: {0}")]
    Malformed(String),
}

impl TranslationError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingApiKey)
    }
}

/// 自然文の検索要求をモデルに渡し、部分的な検索条件に変換する
///
/// 失敗した場合、呼び出し側は `PartialSearchFilter::plain(prompt)` で通常検索に戻れる。
pub async fn translate<M>(model: &M, prompt: &str) -> Result<PartialSearchFilter, TranslationError>
where
    M: TextModel + ?Sized,
{
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Err(TranslationError::EmptyPrompt);
    }

    let reply = model.generate(&build_prompt(prompt)).await?;
    tracing::debug!("Model reply: {}", reply);

    let filter = parse_reply(&reply)?;
    tracing::info!(
        "Translated prompt into query={:?} location={:?} datePosted={:?}",
        filter.query,
        filter.location,
        filter.date_posted
    );
    Ok(filter)
}

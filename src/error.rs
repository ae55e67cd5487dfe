use aisearch::TranslationError;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    /// A credential this endpoint depends on is not configured.
    Configuration(String),
    Translation(TranslationError),
    /// The AI search body could not be read as `{"prompt": ...}`.
    RequestBody(JsonRejection),
    Render(askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Configuration(msg) => {
                error!("Configuration error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            AppError::Translation(err) => {
                error!("AI Search Error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to process AI search".to_string(),
                )
            }
            AppError::RequestBody(rejection) => {
                warn!("Unreadable AI search body: {}", rejection.body_text());
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to process AI search".to_string(),
                )
            }
            AppError::Render(err) => {
                error!("Failed to render page: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to render page".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<TranslationError> for AppError {
    fn from(err: TranslationError) -> Self {
        match err {
            TranslationError::MissingApiKey => AppError::Configuration(err.to_string()),
            TranslationError::EmptyPrompt => AppError::BadRequest("prompt is required".to_string()),
            other => AppError::Translation(other),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::RequestBody(rejection)
    }
}

impl From<askama::Error> for AppError {
    fn from(err: askama::Error) -> Self {
        AppError::Render(err)
    }
}

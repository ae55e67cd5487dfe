use aisearch::{GeminiClient, GeminiConfig};
use anyhow::Context;
use jobs_core::{DatePosted, EmploymentType, SearchFilter};
use jsearch::{JSearchClient, JSearchConfig};
use serde::Deserialize;
use std::time::Duration;

/// クエリが空のときに検索するキーワード
pub const DEFAULT_QUERY: &str = "Software Developer Intern";
pub const DEFAULT_TIMEOUT_SECS: u64 = 8;
pub const DEFAULT_PORT: u16 = 3000;

/// 起動時に一度だけ組み立てる設定
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub jsearch: JSearchConfig,
    pub gemini: GeminiConfig,
    pub upstream_timeout: Duration,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            jsearch: JSearchConfig::default(),
            gemini: GeminiConfig::default(),
            upstream_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            port: DEFAULT_PORT,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let jsearch = JSearchConfig {
            api_key: var("RAPIDAPI_KEY"),
            host: var("RAPIDAPI_HOST").unwrap_or(defaults.jsearch.host),
            base_url: var("JSEARCH_BASE_URL"),
        };

        let gemini = GeminiConfig {
            api_key: var("GEMINI_API_KEY"),
            model: var("GEMINI_MODEL").unwrap_or(defaults.gemini.model),
            api_base: var("GEMINI_API_URL").unwrap_or(defaults.gemini.api_base),
        };

        let upstream_timeout = var("UPSTREAM_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(defaults.upstream_timeout);

        let port = var("PORT")
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(defaults.port);

        Self {
            jsearch,
            gemini,
            upstream_timeout,
            port,
        }
    }
}

pub type SharedState = AppState;

#[derive(Clone)]
pub struct AppState {
    pub listings: JSearchClient,
    pub translator: GeminiClient,
}

impl AppState {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent("ShipIntern/1.0")
            .timeout(config.upstream_timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            listings: JSearchClient::new(http_client.clone(), &config.jsearch),
            translator: GeminiClient::new(http_client, &config.gemini),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "grid" => Some(Self::Grid),
            "list" => Some(Self::List),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::List => "list",
        }
    }
}

/// 検索ページのクエリパラメータ
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub query: Option<String>,
    pub location: Option<String>,
    pub date_posted: Option<String>,
    pub view: Option<String>,
    pub remote: Option<String>,
    pub job_type: Option<String>,
}

impl SearchQuery {
    pub fn to_filter(&self) -> SearchFilter {
        let query_text = non_blank(&self.query).unwrap_or(DEFAULT_QUERY).to_string();

        SearchFilter {
            query_text,
            location: non_blank(&self.location).map(str::to_string),
            date_posted: self
                .date_posted
                .as_deref()
                .and_then(DatePosted::from_str)
                .unwrap_or_default(),
            remote_only: is_true(&self.remote),
            employment_type: parse_job_type(&self.job_type),
        }
    }

    pub fn view(&self) -> ViewMode {
        parse_view(&self.view)
    }
}

/// `/ai-search` フォームのパラメータ
///
/// 通常検索と同じ入力欄から送られるため `query` も受け付ける。
#[derive(Debug, Default, Deserialize)]
pub struct AiSearchForm {
    #[serde(alias = "query")]
    pub prompt: Option<String>,
    pub view: Option<String>,
    pub remote: Option<String>,
    pub job_type: Option<String>,
}

impl AiSearchForm {
    pub fn prompt(&self) -> Option<&str> {
        non_blank(&self.prompt)
    }

    /// Filter state carried over from the page the form was submitted on.
    pub fn base_filter(&self, query_text: &str) -> SearchFilter {
        SearchFilter {
            remote_only: is_true(&self.remote),
            employment_type: parse_job_type(&self.job_type),
            ..SearchFilter::new(query_text)
        }
    }

    pub fn view(&self) -> ViewMode {
        parse_view(&self.view)
    }
}

#[derive(Debug, Deserialize)]
pub struct AiSearchRequest {
    #[serde(default)]
    pub prompt: String,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn is_true(value: &Option<String>) -> bool {
    value.as_deref() == Some("true")
}

fn parse_job_type(value: &Option<String>) -> EmploymentType {
    value
        .as_deref()
        .and_then(EmploymentType::from_str)
        .unwrap_or_default()
}

fn parse_view(value: &Option<String>) -> ViewMode {
    value
        .as_deref()
        .and_then(ViewMode::from_str)
        .unwrap_or_default()
}

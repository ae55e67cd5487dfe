use crate::request::{build_request, ListingRequest};
use jobs_core::{ListingRecord, ListingResponse, SearchFilter};
use reqwest::Client;

pub const DEFAULT_HOST: &str = "jsearch.p.rapidapi.com";

#[derive(Debug, Clone)]
pub struct JSearchConfig {
    pub api_key: Option<String>,
    pub host: String,
    /// Overrides `https://<host>`; used to point the client at a local server.
    pub base_url: Option<String>,
}

impl Default for JSearchConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            host: DEFAULT_HOST.to_string(),
            base_url: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ListingError {
    #[error("RAPIDAPI_KEY is not defined")]
    MissingApiKey,
    #[error("search query is empty")]
    EmptyQuery,
    #[error("failed to send listing request: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("API call failed: {status} - {body}")]
    Status { status: u16, body: String },
    #[error("failed to parse listing response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl ListingError {
    /// Missing credentials are a deployment problem, not an upstream one.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingApiKey)
    }
}

#[derive(Clone, Debug)]
pub struct JSearchClient {
    client: Client,
    api_key: Option<String>,
    host: String,
    base_url: String,
}

impl JSearchClient {
    pub fn new(client: Client, config: &JSearchConfig) -> Self {
        let host = if config.host.trim().is_empty() {
            DEFAULT_HOST.to_string()
        } else {
            config.host.trim().to_string()
        };

        let mut base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| format!("https://{}", host));
        if base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            client,
            api_key: config.api_key.clone().filter(|k| !k.is_empty()),
            host,
            base_url,
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub async fn search(&self, filter: &SearchFilter) -> Result<Vec<ListingRecord>, ListingError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            tracing::error!("RAPIDAPI_KEY is not defined");
            ListingError::MissingApiKey
        })?;

        if filter.query_text.trim().is_empty() {
            return Err(ListingError::EmptyQuery);
        }

        let request = build_request(filter);
        self.send(api_key, &request).await
    }

    async fn send(
        &self,
        api_key: &str,
        request: &ListingRequest,
    ) -> Result<Vec<ListingRecord>, ListingError> {
        let url = format!("{}/search", self.base_url);
        tracing::info!("Searching listings: {}", request.query());

        let res = self
            .client
            .get(&url)
            .header("x-rapidapi-key", api_key)
            .header("x-rapidapi-host", &self.host)
            .query(&request.params)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Error fetching listings: {}", e);
                ListingError::Transport(e)
            })?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            tracing::error!("API call failed: {} - {}", status, body);
            return Err(ListingError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let response: ListingResponse = res.json().await.map_err(|e| {
            tracing::error!("Failed to parse listing response: {}", e);
            ListingError::Decode(e)
        })?;

        tracing::debug!(
            "Listing API returned {} records (status={}, request_id={})",
            response.data.len(),
            response.status,
            response.request_id
        );
        Ok(response.data)
    }
}

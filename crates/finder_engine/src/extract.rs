use std::time::Duration;

use finder_logging::{finder_debug, finder_warn};
use serde::{Deserialize, Serialize};

use crate::{ExtractError, ExtractedKeywords, FailureKind};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/api/extract-keywords";

#[derive(Debug, Clone)]
pub struct ExtractSettings {
    pub endpoint: String,
    /// `None` leaves the request unbounded.
    pub connect_timeout: Option<Duration>,
    pub request_timeout: Option<Duration>,
}

impl Default for ExtractSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout: None,
            request_timeout: None,
        }
    }
}

#[async_trait::async_trait]
pub trait KeywordExtractor: Send + Sync {
    async fn extract(&self, url: &str) -> Result<ExtractedKeywords, ExtractError>;
}

#[derive(Debug, Serialize)]
struct ExtractRequest<'a> {
    url: &'a str,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ReqwestExtractor {
    settings: ExtractSettings,
}

impl ReqwestExtractor {
    pub fn new(settings: ExtractSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, ExtractError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = self.settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|err| ExtractError::new(FailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl KeywordExtractor for ReqwestExtractor {
    async fn extract(&self, url: &str) -> Result<ExtractedKeywords, ExtractError> {
        let client = self.build_client()?;

        finder_debug!("POST {} url={}", self.settings.endpoint, url);
        // `.json` also sets `Content-Type: application/json`.
        let response = client
            .post(&self.settings.endpoint)
            .json(&ExtractRequest { url })
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_reqwest_error)?;

        if !status.is_success() {
            let server_message = server_error_message(&body);
            if server_message.is_none() {
                finder_warn!("Service returned {} without an error message", status);
            }
            return Err(
                ExtractError::new(FailureKind::HttpStatus(status.as_u16()), status.to_string())
                    .with_server_message(server_message),
            );
        }

        serde_json::from_slice::<ExtractedKeywords>(&body).map_err(|err| {
            ExtractError::new(FailureKind::InvalidBody, err.to_string())
                .with_server_message(server_error_message(&body))
        })
    }
}

fn server_error_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.error)
}

fn map_reqwest_error(err: reqwest::Error) -> ExtractError {
    if err.is_timeout() {
        return ExtractError::new(FailureKind::Timeout, err.to_string());
    }
    ExtractError::new(FailureKind::Network, err.to_string())
}

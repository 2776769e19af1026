use std::fmt;

use serde::Deserialize;

pub type RequestId = u64;

/// Shown when a failure carries no message from the collaborator.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";

/// Success body returned by the keyword extraction service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExtractedKeywords {
    pub primary_keyword: String,
    pub secondary_keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    ExtractionCompleted {
        request_id: RequestId,
        result: Result<ExtractedKeywords, ExtractError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractError {
    pub kind: FailureKind,
    /// Diagnostic detail for logs; never shown to the user.
    pub message: String,
    /// The `error` field of the response body, if the service sent one.
    pub server_message: Option<String>,
}

impl ExtractError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            server_message: None,
        }
    }

    pub(crate) fn with_server_message(mut self, server_message: Option<String>) -> Self {
        self.server_message = server_message;
        self
    }

    /// The single human-readable string all failure kinds collapse into.
    pub fn user_message(&self) -> String {
        match self.server_message.as_deref() {
            Some(message) if !message.trim().is_empty() => message.to_string(),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ExtractError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// The request never completed.
    Network,
    Timeout,
    /// Non-success status; the body may or may not have carried a message.
    HttpStatus(u16),
    /// Success status, but the body is not a keyword document.
    InvalidBody,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::InvalidBody => write!(f, "invalid response body"),
        }
    }
}

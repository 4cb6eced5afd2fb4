//! Client layer for the shortening backend
//!
//! The backend is an opaque HTTP collaborator. Front-ends never talk HTTP
//! directly; they go through [`LinkBackend`] so flows can be driven by a fake
//! in tests.
//!
//! # Error policy
//!
//! - Non-2xx response → `ClientError::Rejected`, carrying the backend's
//!   `detail` message when it sent one
//! - Connection/transport failure → `ClientError::Transport`
//! - 2xx with an unexpected body → `ClientError::Decode`
//!
//! Flows surface all three the same way: the detail when present, otherwise
//! the flow's fallback message.

mod http;

pub use http::HttpBackend;

use std::fmt;

use async_trait::async_trait;

use crate::errors::SnaplinkError;
use crate::models::{AnalyticsResult, HealthStatus, ShortenRequest, ShortenResult};

// ============ ClientError ============

/// Errors from the client layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Backend answered with a non-success status
    Rejected { status: u16, detail: Option<String> },
    /// Request never produced a response (unreachable, timeout, ...)
    Transport(String),
    /// Response body did not match the expected shape
    Decode(String),
}

impl ClientError {
    /// Message provided by the backend, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            ClientError::Rejected {
                detail: Some(detail),
                ..
            } => Some(detail),
            _ => None,
        }
    }

    /// Message to show the user: the backend detail, else `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Rejected {
                status,
                detail: Some(detail),
            } => write!(f, "HTTP {}: {}", status, detail),
            ClientError::Rejected {
                status,
                detail: None,
            } => write!(f, "HTTP {}", status),
            ClientError::Transport(msg) => write!(f, "Transport error: {}", msg),
            ClientError::Decode(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<ClientError> for SnaplinkError {
    fn from(err: ClientError) -> Self {
        SnaplinkError::backend(err.to_string())
    }
}

// ============ LinkBackend ============

/// The remote shortening service
#[async_trait]
pub trait LinkBackend: Send + Sync {
    /// `POST /shorten`
    async fn shorten(&self, request: &ShortenRequest) -> Result<ShortenResult, ClientError>;

    /// `GET /analytics/{code}`
    async fn analytics(&self, code: &str) -> Result<AnalyticsResult, ClientError>;

    /// `GET /health`
    async fn health(&self) -> Result<HealthStatus, ClientError>;

    /// Where requests go, for display
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_detail() {
        let err = ClientError::Rejected {
            status: 400,
            detail: Some("alias taken".into()),
        };
        assert_eq!(err.user_message("Something went wrong!"), "alias taken");
    }

    #[test]
    fn test_user_message_falls_back() {
        let rejected = ClientError::Rejected {
            status: 500,
            detail: None,
        };
        assert_eq!(
            rejected.user_message("Something went wrong!"),
            "Something went wrong!"
        );

        let transport = ClientError::Transport("connection refused".into());
        assert_eq!(
            transport.user_message("Short URL not found!"),
            "Short URL not found!"
        );

        let decode = ClientError::Decode("missing field".into());
        assert_eq!(decode.user_message("fallback"), "fallback");
    }

    #[test]
    fn test_display() {
        let err = ClientError::Rejected {
            status: 404,
            detail: Some("Short URL not found!".into()),
        };
        assert_eq!(err.to_string(), "HTTP 404: Short URL not found!");
        assert_eq!(
            ClientError::Rejected {
                status: 502,
                detail: None
            }
            .to_string(),
            "HTTP 502"
        );
        assert!(
            ClientError::Transport("refused".into())
                .to_string()
                .contains("refused")
        );
    }

    #[test]
    fn test_into_snaplink_error() {
        let err: SnaplinkError = ClientError::Transport("down".into()).into();
        assert!(matches!(err, SnaplinkError::Backend(_)));
        assert!(err.message().contains("down"));
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ExpiryOption;
use super::timestamp;

/// Body of `POST /shorten`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortenRequest {
    pub original_url: String,
    /// Always sent, `null` when no alias was entered
    pub custom_alias: Option<String>,
    pub expiry_days: ExpiryOption,
}

/// Successful response of `POST /shorten`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortenResult {
    pub short_code: String,
    pub short_url: String,
    pub original_url: String,
    #[serde(default, with = "timestamp::option")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Successful response of `GET /analytics/{code}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsResult {
    #[serde(default)]
    pub short_code: Option<String>,
    pub short_url: String,
    pub original_url: String,
    pub click_count: u64,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "timestamp::option")]
    pub last_clicked: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::option")]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Response of `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

/// Error envelope used by the backend: `{"detail": "..."}`
///
/// `detail` is kept as raw JSON because validation failures put a list of
/// objects there instead of a message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// The user-facing message, only when `detail` is a non-empty string
    pub fn message(&self) -> Option<String> {
        match &self.detail {
            Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s.clone()),
            _ => None,
        }
    }
}

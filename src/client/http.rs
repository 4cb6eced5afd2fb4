//! HTTP implementation of [`LinkBackend`]
//!
//! ureq is blocking; every request runs on the tokio blocking pool so the
//! caller's event loop keeps running while a request is outstanding.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, trace, warn};
use ureq::Agent;
use ureq::http::Response;

use super::{ClientError, LinkBackend};
use crate::config::BackendConfig;
use crate::models::{AnalyticsResult, ErrorBody, HealthStatus, ShortenRequest, ShortenResult};

/// Backend reached over HTTP/JSON
#[derive(Clone)]
pub struct HttpBackend {
    base_url: String,
    agent: Agent,
}

impl HttpBackend {
    /// `timeout` of `None` keeps ureq's transport defaults
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Self {
        // Error statuses are read like any other response so the `detail`
        // body can reach the user.
        let agent: Agent = Agent::config_builder()
            .timeout_global(timeout)
            .http_status_as_error(false)
            .build()
            .into();

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, agent }
    }

    pub fn from_config(config: &BackendConfig) -> Self {
        Self::new(
            config.base_url.clone(),
            config.timeout_secs.map(Duration::from_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn shorten_endpoint(&self) -> String {
        format!("{}/shorten", self.base_url)
    }

    /// The code is encoded as exactly one path segment
    pub fn analytics_endpoint(&self, code: &str) -> String {
        format!("{}/analytics/{}", self.base_url, urlencoding::encode(code))
    }

    pub fn health_endpoint(&self) -> String {
        format!("{}/health", self.base_url)
    }

    fn post_json_sync<T: DeserializeOwned>(
        agent: Agent,
        url: String,
        body: ShortenRequest,
    ) -> Result<T, ClientError> {
        trace!("POST {}", url);
        let resp = agent
            .post(&url)
            .header("Accept", "application/json")
            .send_json(&body)
            .map_err(|e| {
                warn!("POST {} failed: {}", url, e);
                ClientError::Transport(e.to_string())
            })?;
        Self::read_response(&url, resp)
    }

    fn get_json_sync<T: DeserializeOwned>(agent: Agent, url: String) -> Result<T, ClientError> {
        trace!("GET {}", url);
        let resp = agent
            .get(&url)
            .header("Accept", "application/json")
            .call()
            .map_err(|e| {
                warn!("GET {} failed: {}", url, e);
                ClientError::Transport(e.to_string())
            })?;
        Self::read_response(&url, resp)
    }

    fn read_response<T: DeserializeOwned>(
        url: &str,
        resp: Response<ureq::Body>,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        let text = resp
            .into_body()
            .read_to_string()
            .map_err(|e| ClientError::Transport(format!("failed to read body: {}", e)))?;

        if status.is_success() {
            return serde_json::from_str::<T>(&text).map_err(|e| {
                warn!("Unexpected response body from {}: {}", url, e);
                ClientError::Decode(e.to_string())
            });
        }

        let detail = serde_json::from_str::<ErrorBody>(&text)
            .ok()
            .and_then(|body| body.message());
        debug!(
            "{} answered {} (detail: {:?})",
            url,
            status.as_u16(),
            detail
        );
        Err(ClientError::Rejected {
            status: status.as_u16(),
            detail,
        })
    }
}

/// Run a blocking request on the tokio blocking pool
async fn run_blocking<T, F>(task: F) -> Result<T, ClientError>
where
    F: FnOnce() -> Result<T, ClientError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| ClientError::Transport(format!("request task failed: {}", e)))?
}

#[async_trait]
impl LinkBackend for HttpBackend {
    async fn shorten(&self, request: &ShortenRequest) -> Result<ShortenResult, ClientError> {
        let agent = self.agent.clone();
        let url = self.shorten_endpoint();
        let body = request.clone();
        run_blocking(move || Self::post_json_sync(agent, url, body)).await
    }

    async fn analytics(&self, code: &str) -> Result<AnalyticsResult, ClientError> {
        let agent = self.agent.clone();
        let url = self.analytics_endpoint(code);
        run_blocking(move || Self::get_json_sync(agent, url)).await
    }

    async fn health(&self) -> Result<HealthStatus, ClientError> {
        let agent = self.agent.clone();
        let url = self.health_endpoint();
        run_blocking(move || Self::get_json_sync(agent, url)).await
    }

    fn name(&self) -> &str {
        &self.base_url
    }
}

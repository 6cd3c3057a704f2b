//! ShipEngine REST client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};
use url::Url;

use super::api_error::ApiErrorBody;
use crate::domain::entities::TrackingRecord;
use crate::domain::providers::{ProviderError, TrackingProvider};

/// Production ShipEngine API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.shipengine.com";

const API_KEY_HEADER: &str = "API-Key";

/// Tracking provider backed by the ShipEngine REST API.
///
/// Wraps a pooled [`reqwest::Client`]; cloning the client is cheap and all
/// clones share connections. No retries are attempted: one lookup is one
/// HTTP request.
#[derive(Clone)]
pub struct ShipEngineClient {
    http: Client,
    base_url: Url,
    api_key: String,
}

impl ShipEngineClient {
    /// Builds a client for the given API base URL and key.
    ///
    /// # Arguments
    ///
    /// - `base_url` - API root, e.g. [`DEFAULT_BASE_URL`]; any path prefix is kept
    /// - `api_key` - ShipEngine API key sent in the `API-Key` header
    /// - `timeout` - total time allowed per request
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Configuration`] if the base URL cannot serve as
    /// a base or the HTTP client cannot be built.
    pub fn new(
        base_url: &str,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ProviderError::Configuration(format!("{base_url}: {e}")))?;

        if base_url.cannot_be_a_base() {
            return Err(ProviderError::Configuration(format!(
                "{base_url} cannot be used as a base URL"
            )));
        }

        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| ProviderError::Configuration(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            api_key: api_key.into(),
        })
    }

    /// Builds `{base}/v1/labels/{label_id}/track`, percent-encoding the label.
    ///
    /// `.` and `..` are rejected: they are dot segments in any encoding and
    /// would address another resource.
    fn track_url(&self, label_id: &str) -> Result<Url, ProviderError> {
        if matches!(label_id, "." | "..") {
            return Err(ProviderError::InvalidLabel(label_id.to_string()));
        }

        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|_| {
                ProviderError::Configuration(format!(
                    "{} cannot be used as a base URL",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(["v1", "labels", label_id, "track"]);

        Ok(url)
    }
}

#[async_trait]
impl TrackingProvider for ShipEngineClient {
    fn name(&self) -> &str {
        "ShipEngine"
    }

    async fn track_by_label_id(&self, label_id: &str) -> Result<TrackingRecord, ProviderError> {
        let url = self.track_url(label_id)?;
        debug!(%url, "Requesting tracking information");

        let response = self
            .http
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        if !status.is_success() {
            let api_error = serde_json::from_slice::<ApiErrorBody>(&body).ok();
            let message = error_message(status, api_error.as_ref());
            warn!(
                status = status.as_u16(),
                request_id = api_error
                    .as_ref()
                    .and_then(|e| e.request_id.as_deref())
                    .unwrap_or("-"),
                %message,
                "ShipEngine rejected tracking request"
            );
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice(&body).map_err(|e| ProviderError::Decode(e.to_string()))
    }
}

/// Readable message for a failed request, falling back to the status line
/// when the body is not a ShipEngine error envelope.
fn error_message(status: StatusCode, api_error: Option<&ApiErrorBody>) -> String {
    api_error
        .and_then(ApiErrorBody::message)
        .unwrap_or_else(|| format!("ShipEngine responded with {status}"))
}

//! HTTP gateway used by the client model to reach the insights API.
//!
//! The trait is the client-side port; [`HttpInsightsGateway`] is the reqwest
//! adapter used against a running server. Tests inject a mock to exercise the
//! page model without the network.

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use crate::domain::Insight;

/// Errors surfaced by gateway calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// The request never produced an HTTP response.
    #[error("transport failure: {message}")]
    Transport { message: String },

    /// The server answered with a non-success status.
    #[error("server rejected request with status {status}: {message}")]
    Rejected { status: u16, message: String },
}

impl GatewayError {
    fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }
}

/// Client-side port for the insights API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InsightsGateway: Send + Sync {
    /// Fetch all insights.
    async fn list(&self) -> Result<Vec<Insight>, GatewayError>;

    /// Store a new insight.
    async fn create(&self, brand: i64, text: &str) -> Result<(), GatewayError>;

    /// Delete the insight with the given id.
    async fn delete(&self, id: i64) -> Result<(), GatewayError>;
}

/// Error body returned by the server on rejected requests.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Extract the server's error message, falling back to the status reason when
/// the body is not the expected JSON shape.
async fn reject_on_error(response: reqwest::Response) -> Result<reqwest::Response, GatewayError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let fallback = status
        .canonical_reason()
        .unwrap_or("unknown error")
        .to_string();
    let message = response
        .json::<ErrorBody>()
        .await
        .map_or(fallback, |body| body.error);
    Err(GatewayError::rejected(status.as_u16(), message))
}

/// `reqwest`-backed gateway talking to a live server.
#[derive(Clone)]
pub struct HttpInsightsGateway {
    base_url: Url,
    http: reqwest::Client,
}

impl HttpInsightsGateway {
    /// Create a gateway rooted at the given base URL.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, GatewayError> {
        self.base_url
            .join(path)
            .map_err(|err| GatewayError::transport(format!("invalid endpoint {path}: {err}")))
    }
}

#[async_trait]
impl InsightsGateway for HttpInsightsGateway {
    async fn list(&self) -> Result<Vec<Insight>, GatewayError> {
        let url = self.endpoint("insights")?;
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| GatewayError::transport(err.to_string()))?;
        let response = reject_on_error(response).await?;
        response
            .json::<Vec<Insight>>()
            .await
            .map_err(|err| GatewayError::transport(format!("invalid response body: {err}")))
    }

    async fn create(&self, brand: i64, text: &str) -> Result<(), GatewayError> {
        let url = self.endpoint("insights/create")?;
        let response = self
            .http
            .post(url)
            .json(&serde_json::json!({ "brand": brand, "text": text }))
            .send()
            .await
            .map_err(|err| GatewayError::transport(err.to_string()))?;
        reject_on_error(response).await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), GatewayError> {
        let url = self.endpoint(&format!("insights/delete/{id}"))?;
        let response = self
            .http
            .delete(url)
            .send()
            .await
            .map_err(|err| GatewayError::transport(err.to_string()))?;
        reject_on_error(response).await?;
        Ok(())
    }
}

use async_trait::async_trait;
use reqwest::Client;

use crate::{ApiError, ClientConfig, VisualizationRequest, VisualizationResponse};

/// Anything that can answer a visualization query.
///
/// Futures are not `Send`: the browser fetch backend is single-threaded.
#[async_trait(?Send)]
pub trait VisualizationService {
    /// Issue exactly one request. Returns the decoded body for any 2xx status,
    /// including bodies that report `success: false`.
    async fn visualize(&self, query: &str) -> Result<VisualizationResponse, ApiError>;
}

/// HTTP client for the hosted visualization endpoint.
#[derive(Debug, Clone)]
pub struct VisualizationClient {
    client: Client,
    endpoint: String,
}

impl VisualizationClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        #[allow(unused_mut)]
        let mut builder = Client::builder();

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: config.endpoint.clone(),
        })
    }
}

#[async_trait(?Send)]
impl VisualizationService for VisualizationClient {
    async fn visualize(&self, query: &str) -> Result<VisualizationResponse, ApiError> {
        tracing::info!(endpoint = %self.endpoint, "Submitting visualization query");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&VisualizationRequest { query })
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Visualization request failed"))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Visualization service returned an error status");
            return Err(ApiError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let parsed: VisualizationResponse = serde_json::from_str(&body)?;

        tracing::debug!(
            success = parsed.success,
            traces = parsed.data.len(),
            snippet_bytes = parsed.html_snippet.len(),
            "Visualization response decoded"
        );

        Ok(parsed)
    }
}

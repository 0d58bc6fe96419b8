use crate::domain::model::{SolverResult, SubmissionRequest};
use crate::domain::ports::{ConfigProvider, SolverApi};
use crate::utils::error::{FormError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};

/// HTTP client for the remote knapsack solver. One POST per submission,
/// no retries; any timeout is the transport's default.
pub struct SolverClient {
    client: Client,
    endpoint: String,
}

impl SolverClient {
    pub fn new(config: &impl ConfigProvider) -> Self {
        Self::with_endpoint(config.solver_endpoint())
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl SolverApi for SolverClient {
    async fn submit(&self, request: &SubmissionRequest) -> Result<SolverResult> {
        tracing::debug!(
            "Submitting {} projects (capacity {}) to {}",
            request.items.len(),
            request.capacity,
            self.endpoint
        );

        let response = self.client.post(&self.endpoint).json(request).send().await?;

        let status = response.status();
        tracing::debug!("Solver response status: {}", status);

        // Failing to read the body is a transport failure regardless of the
        // status line, so it maps to Network, not Service.
        let body = response.text().await?;

        if !status.is_success() {
            return Err(FormError::Service {
                message: service_error_message(status, &body),
            });
        }

        // A success status with a body that does not match the contract is
        // still a service failure; no partial result leaks out.
        serde_json::from_str::<SolverResult>(&body).map_err(|e| {
            tracing::warn!("Solver returned 2xx with a malformed body: {}", e);
            FormError::Service {
                message: format!("Solver returned an unexpected response: {}", e),
            }
        })
    }
}

/// Prefers the server's own `detail` text; falls back to the numeric status
/// when the body is not JSON or carries no detail.
fn service_error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("detail")
                .and_then(|detail| detail.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| format!("Solver service returned status {}", status.as_u16()))
}

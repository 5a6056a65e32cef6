// HTTP client for a running moderation service.
//
// This is how the chat backend talks to the service: POST {text, user_id}
// to /moderate and read back the verdict. Wrapped behind ModerationScorer so
// callers can swap between a remote service and the local word list.

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::debug;

use super::traits::ModerationScorer;
use crate::models::{HealthReport, ModerationRequest, ModerationResult};

/// Default address of the moderation service.
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:8000";

/// Thin reqwest wrapper around the moderation service's two endpoints.
pub struct ModerationClient {
    client: reqwest::Client,
    base_url: String,
}

impl ModerationClient {
    /// Create a client pointing at the given base URL (no trailing path).
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("clustertalk-moderation/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the service's health report.
    pub async fn health(&self) -> Result<HealthReport> {
        let url = format!("{}/health", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Health check failed: {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("GET /health returned {status}: {body}");
        }

        response
            .json::<HealthReport>()
            .await
            .context("Failed to parse health response")
    }
}

#[async_trait]
impl ModerationScorer for ModerationClient {
    async fn moderate(&self, request: &ModerationRequest) -> Result<ModerationResult> {
        let url = format!("{}/moderate", self.base_url);

        debug!(user_id = %request.user_id, url = %url, "POST /moderate");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .context("Failed to call moderation service")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Moderation service returned {status}: {body}");
        }

        response
            .json::<ModerationResult>()
            .await
            .context("Failed to parse moderation response")
    }
}

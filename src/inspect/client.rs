// src/inspect/client.rs
// =============================================================================
// The seam between the report and the remote API.
//
// IndexInspector has a single method, so the report can be driven by the real
// Search Console client or by a fake in tests.
//
// Rust concepts:
// - Traits: an interface the report is generic over
// - impl Future in traits: an async method without boxing
// - Client reuse: one reqwest Client (and one token) for every request
// =============================================================================

use super::types::{ApiErrorResponse, InspectUrlIndexResponse, InspectionRequest, InspectionResult};
use crate::auth::{self, AccessToken};
use crate::error::MonitorError;
use reqwest::Client;
use std::future::Future;
use std::path::Path;
use std::time::Duration;

/// Public Search Console endpoint
pub const DEFAULT_API_BASE: &str = "https://searchconsole.googleapis.com";

/// Separates an error's summary from the raw response body echoed after it
pub const BODY_MARKER: &str = " content: ";

pub trait IndexInspector {
    /// Fetches the index status of one URL
    fn inspect(
        &self,
        request: &InspectionRequest,
    ) -> impl Future<Output = Result<InspectionResult, MonitorError>> + Send;
}

/// Authenticated client for the URL Inspection API
#[derive(Debug, Clone)]
pub struct SearchConsoleClient {
    http: Client,
    token: AccessToken,
    endpoint: String,
}

impl SearchConsoleClient {
    pub fn new(http: Client, token: AccessToken, api_base: &str) -> Self {
        SearchConsoleClient {
            http,
            token,
            endpoint: format!(
                "{}/v1/urlInspection/index:inspect",
                api_base.trim_end_matches('/')
            ),
        }
    }

    /// Loads the key, authenticates once, and returns a ready client
    pub async fn connect(credentials: &Path, api_base: &str) -> Result<Self, MonitorError> {
        let key = auth::load_key(credentials)?;

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| MonitorError::AuthFailed(format!("could not build HTTP client: {}", e)))?;

        let token = auth::authenticate(&http, &key).await?;

        Ok(SearchConsoleClient::new(http, token, api_base))
    }
}

impl IndexInspector for SearchConsoleClient {
    async fn inspect(&self, request: &InspectionRequest) -> Result<InspectionResult, MonitorError> {
        let failed = |reason: String| MonitorError::InspectionFailed {
            page: request.inspection_url.clone(),
            reason,
        };

        log::debug!("POST {} for {}", self.endpoint, request.inspection_url);

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(self.token.as_str())
            .json(request)
            .send()
            .await
            .map_err(|e| failed(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Keep the API's own message first; the raw body goes after
            // BODY_MARKER, which the report cuts off
            let reason = match serde_json::from_str::<ApiErrorResponse>(&body) {
                Ok(api) => format!(
                    "HTTP {} {}: {}{}{}",
                    status.as_u16(),
                    api.error.status.unwrap_or_default(),
                    api.error.message,
                    BODY_MARKER,
                    body
                ),
                Err(_) => format!("HTTP {}{}{}", status.as_u16(), BODY_MARKER, body),
            };
            return Err(failed(reason));
        }

        let parsed: InspectUrlIndexResponse = response
            .json()
            .await
            .map_err(|e| failed(format!("unexpected response: {}", e)))?;

        Ok(InspectionResult::from(parsed))
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a trait with one method?
//    - The report only needs "give me the status of this URL"
//    - Tests implement the trait on a fake that answers from a table
//    - No network, no credentials needed to test the report
//
// 2. What is `impl Future<Output = ...> + Send` in a trait?
//    - It is what an `async fn` desugars to
//    - Writing it out lets us require Send, so the future can move
//      between runtime threads
//    - Implementations can still simply write `async fn inspect(...)`
//
// 3. Why keep the raw body after BODY_MARKER?
//    - It is useful with RUST_LOG=debug
//    - The report prints only the part before it
// -----------------------------------------------------------------------------

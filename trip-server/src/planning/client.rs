//! Planning service HTTP client.
//!
//! Provides the async client for the remote `POST /plan_trip` endpoint.
//! One request in, one itinerary text (or error) out; retries and
//! cancellation are deliberately absent.

use crate::domain::TripRequest;

use super::PlanTrip;
use super::error::PlannerError;
use super::types::{PlanTripRequest, PlanTripResponse};

/// Default base URL for the planning service (local development).
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Default request timeout in seconds.
///
/// Planning is backed by a language model upstream, so responses can take
/// tens of seconds; this is much longer than a typical API timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 90;

/// Configuration for the planner client.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Base URL for the service (defaults to local loopback).
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl PlannerConfig {
    /// Set a custom base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Planning service API client.
#[derive(Debug, Clone)]
pub struct PlannerClient {
    http: reqwest::Client,
    base_url: String,
}

impl PlannerClient {
    /// Create a new planner client with the given configuration.
    pub fn new(config: PlannerConfig) -> Result<Self, PlannerError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }
}

impl PlanTrip for PlannerClient {
    /// Request an itinerary for the given preferences.
    ///
    /// Any non-success status is surfaced as [`PlannerError::Api`] without
    /// interpreting the body. On success, the `itinerary` field is returned
    /// exactly as the service sent it.
    async fn plan_trip(&self, request: &TripRequest) -> Result<String, PlannerError> {
        let url = format!("{}/plan_trip", self.base_url);
        let payload = PlanTripRequest::from(request);

        tracing::debug!(destination = request.destination(), "planning request");

        let response = self.http.post(&url).json(&payload).send().await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PlannerError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let parsed: PlanTripResponse =
            serde_json::from_str(&body).map_err(|e| PlannerError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        Ok(parsed.itinerary)
    }
}

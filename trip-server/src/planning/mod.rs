//! Planning service client.
//!
//! This module provides an HTTP client for the remote trip-planning
//! service, which turns a set of trip preferences into itinerary text.
//!
//! Key characteristics of the service:
//! - One endpoint: `POST /plan_trip` with a JSON preference payload
//! - Success responses carry a single `itinerary` string field
//! - Failure bodies are not structured; they are not parsed here
//!
//! The [`PlanTrip`] trait is the seam between the request coordinator and
//! the transport: the real client, the caching wrapper, and the mock all
//! implement it.

mod client;
mod error;
mod mock;
mod types;

use std::future::Future;

use crate::domain::TripRequest;

pub use client::{PlannerClient, PlannerConfig};
pub use error::PlannerError;
pub use mock::MockPlannerClient;
pub use types::{PlanTripRequest, PlanTripResponse};

/// Anything that can turn trip preferences into itinerary text.
pub trait PlanTrip {
    /// Issue exactly one planning request for the given preferences,
    /// resolving to the raw itinerary text.
    fn plan_trip(
        &self,
        request: &TripRequest,
    ) -> impl Future<Output = Result<String, PlannerError>> + Send;
}

//! Wire types for the planning service API.

use serde::{Deserialize, Serialize};

use crate::domain::{Budget, TravelStyle, TripRequest};

/// JSON body for `POST /plan_trip`.
///
/// Field names follow the service's schema; note the underscore form of
/// `travel_style` at the wire boundary.
#[derive(Debug, Clone, Serialize)]
pub struct PlanTripRequest {
    pub destination: String,
    pub days: u8,
    pub interests: String,
    pub budget: Budget,
    pub travel_style: TravelStyle,
}

impl From<&TripRequest> for PlanTripRequest {
    fn from(request: &TripRequest) -> Self {
        Self {
            destination: request.destination().to_string(),
            days: request.days(),
            interests: request.interests().to_string(),
            budget: request.budget(),
            travel_style: request.travel_style(),
        }
    }
}

/// Success payload from `POST /plan_trip`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanTripResponse {
    /// The itinerary text, passed through to the parser unmodified.
    pub itinerary: String,
}

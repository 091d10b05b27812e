//! Trip preference types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Minimum trip length in days.
pub const MIN_DAYS: u8 = 1;

/// Maximum trip length in days.
pub const MAX_DAYS: u8 = 30;

/// Error returned when constructing an invalid trip request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidTripRequest {
    /// Destination was empty or whitespace-only.
    #[error("destination must not be empty")]
    EmptyDestination,

    /// Days outside the allowed range.
    #[error("days must be between 1 and 30, got {0}")]
    DaysOutOfRange(u8),
}

/// Spending level for the trip.
///
/// Serialized in lowercase at the wire boundary (`"budget"`, `"moderate"`,
/// `"luxury"`), matching the planning service's enum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Budget {
    Budget,
    #[default]
    Moderate,
    Luxury,
}

impl Budget {
    /// The wire form of this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Budget::Budget => "budget",
            Budget::Moderate => "moderate",
            Budget::Luxury => "luxury",
        }
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pace preference for the trip.
///
/// Serialized in lowercase at the wire boundary (`"relaxed"`, `"balanced"`,
/// `"adventurous"`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelStyle {
    Relaxed,
    #[default]
    Balanced,
    Adventurous,
}

impl TravelStyle {
    /// The wire form of this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelStyle::Relaxed => "relaxed",
            TravelStyle::Balanced => "balanced",
            TravelStyle::Adventurous => "adventurous",
        }
    }
}

impl fmt::Display for TravelStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated set of trip preferences, immutable once constructed.
///
/// Guarantees by construction: the destination is non-empty (after
/// trimming) and days is within `[MIN_DAYS, MAX_DAYS]`. A fresh value is
/// created per submission; it also serves as the cache key for planning
/// responses, hence `Eq + Hash`.
///
/// # Examples
///
/// ```
/// use trip_server::domain::{Budget, TravelStyle, TripRequest};
///
/// let request = TripRequest::new(
///     "Lisbon",
///     5,
///     "food, museums",
///     Budget::Moderate,
///     TravelStyle::Balanced,
/// )
/// .unwrap();
/// assert_eq!(request.destination(), "Lisbon");
///
/// // Empty destination is rejected
/// assert!(TripRequest::new("", 5, "", Budget::Moderate, TravelStyle::Balanced).is_err());
///
/// // Out-of-range days is rejected
/// assert!(TripRequest::new("Lisbon", 31, "", Budget::Moderate, TravelStyle::Balanced).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TripRequest {
    destination: String,
    days: u8,
    interests: String,
    budget: Budget,
    travel_style: TravelStyle,
}

impl TripRequest {
    /// Construct a validated trip request.
    ///
    /// The destination is stored trimmed. Interests may be empty; the
    /// planning service applies its own default in that case.
    pub fn new(
        destination: impl Into<String>,
        days: u8,
        interests: impl Into<String>,
        budget: Budget,
        travel_style: TravelStyle,
    ) -> Result<Self, InvalidTripRequest> {
        let destination = destination.into();
        let destination = destination.trim();
        if destination.is_empty() {
            return Err(InvalidTripRequest::EmptyDestination);
        }

        if !(MIN_DAYS..=MAX_DAYS).contains(&days) {
            return Err(InvalidTripRequest::DaysOutOfRange(days));
        }

        Ok(Self {
            destination: destination.to_string(),
            days,
            interests: interests.into(),
            budget,
            travel_style,
        })
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn days(&self) -> u8 {
        self.days
    }

    pub fn interests(&self) -> &str {
        &self.interests
    }

    pub fn budget(&self) -> Budget {
        self.budget
    }

    pub fn travel_style(&self) -> TravelStyle {
        self.travel_style
    }
}

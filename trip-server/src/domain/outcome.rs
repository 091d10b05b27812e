//! The terminal result of a planning request.

/// The outcome of one planning request: either the raw itinerary text from
/// the service, or a short user-facing failure message.
///
/// At most one outcome is "current" at a time; starting a new submission
/// supersedes the previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanningOutcome {
    /// The service responded with an itinerary. The text is exactly the
    /// `itinerary` field from the response, unmodified.
    Success(String),

    /// The request failed (transport error or non-success response),
    /// collapsed to a short user-facing message.
    Failure(String),
}

impl PlanningOutcome {
    /// The itinerary text, if this outcome is a success.
    pub fn itinerary(&self) -> Option<&str> {
        match self {
            PlanningOutcome::Success(text) => Some(text),
            PlanningOutcome::Failure(_) => None,
        }
    }

    /// The failure message, if this outcome is a failure.
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            PlanningOutcome::Success(_) => None,
            PlanningOutcome::Failure(message) => Some(message),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, PlanningOutcome::Success(_))
    }
}

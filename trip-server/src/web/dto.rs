//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Budget, TravelStyle};
use crate::itinerary::ItineraryBlock;

/// Body of a plan submission.
///
/// Optional fields fall back to the same defaults the form pre-selects:
/// 3 days, moderate budget, balanced style, no stated interests.
#[derive(Debug, Deserialize)]
pub struct PlanTripForm {
    /// Where to go. Must be non-empty.
    pub destination: String,

    /// Trip length in days; clamped to [1, 30] by the route handler.
    #[serde(default = "default_days")]
    pub days: u8,

    /// Free-text interests; may be empty.
    #[serde(default)]
    pub interests: String,

    /// Spending level.
    #[serde(default)]
    pub budget: Budget,

    /// Pace preference.
    #[serde(default)]
    pub travel_style: TravelStyle,
}

fn default_days() -> u8 {
    3
}

/// JSON response for a successful plan.
#[derive(Debug, Serialize)]
pub struct PlanTripResult {
    /// The raw itinerary text, unmodified.
    pub itinerary: String,

    /// The parsed block sequence, one entry per line.
    pub blocks: Vec<BlockResult>,
}

/// One parsed itinerary block, tagged by kind.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BlockResult {
    DayHeader { text: String },
    ActivityItem { text: String },
    Paragraph { text: String },
    Blank,
}

impl BlockResult {
    /// Create from a parsed block.
    pub fn from_block(block: &ItineraryBlock) -> Self {
        match block {
            ItineraryBlock::DayHeader(text) => BlockResult::DayHeader { text: text.clone() },
            ItineraryBlock::ActivityItem(text) => BlockResult::ActivityItem { text: text.clone() },
            ItineraryBlock::Paragraph(text) => BlockResult::Paragraph { text: text.clone() },
            ItineraryBlock::Blank => BlockResult::Blank,
        }
    }
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

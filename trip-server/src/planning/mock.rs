//! Mock planner client for development and tests without the real service.
//!
//! Serves itinerary text from `.txt` fixture files, falling back to a
//! synthesized basic itinerary for destinations without a fixture (the
//! same shape the real service produces when its model is unavailable).

use std::collections::HashMap;
use std::path::Path;

use crate::domain::TripRequest;

use super::PlanTrip;
use super::error::PlannerError;

/// Mock planner client that serves canned itineraries.
#[derive(Debug, Clone, Default)]
pub struct MockPlannerClient {
    /// Pre-loaded itineraries, keyed by lowercased destination.
    itineraries: HashMap<String, String>,
}

impl MockPlannerClient {
    /// Create a mock client with no fixtures; every request gets the
    /// synthesized fallback itinerary.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a mock client by loading `.txt` files from a directory.
    ///
    /// Expects files named `{destination}.txt` (e.g. `lisbon.txt`);
    /// lookups are case-insensitive on the destination.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, PlannerError> {
        let data_dir = data_dir.as_ref();
        let mut itineraries = HashMap::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| PlannerError::Api {
            status: 0,
            message: format!("Failed to read mock data directory: {}", e),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| PlannerError::Api {
                status: 0,
                message: format!("Failed to read directory entry: {}", e),
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("txt") {
                continue;
            }

            let destination = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| PlannerError::Api {
                    status: 0,
                    message: format!("Invalid filename: {:?}", path),
                })?
                .to_lowercase();

            let text = std::fs::read_to_string(&path).map_err(|e| PlannerError::Api {
                status: 0,
                message: format!("Failed to read {:?}: {}", path, e),
            })?;

            itineraries.insert(destination, text);
        }

        Ok(Self { itineraries })
    }

    /// Add a canned itinerary for a destination.
    pub fn with_itinerary(
        mut self,
        destination: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        self.itineraries
            .insert(destination.into().to_lowercase(), text.into());
        self
    }

    /// List destinations with fixtures.
    pub fn available_destinations(&self) -> Vec<&str> {
        self.itineraries.keys().map(|k| k.as_str()).collect()
    }

    /// Synthesized basic itinerary, mirroring the real service's fallback.
    fn fallback_itinerary(request: &TripRequest) -> String {
        let interests = if request.interests().is_empty() {
            "general sightseeing"
        } else {
            request.interests()
        };

        format!(
            "**Day 1: Arrival**\n\
             - Arrive in {destination}\n\
             - Explore local {interests}\n\
             \n\
             **Day 2**\n\
             - Visit top attractions in {destination}\n\
             \n\
             **Day 3**\n\
             - Enjoy local cuisine and relax\n\
             \n\
             Trip planned for {days} days.\n",
            destination = request.destination(),
            interests = interests,
            days = request.days(),
        )
    }
}

impl PlanTrip for MockPlannerClient {
    /// Mimics the real `PlannerClient::plan_trip` interface. Never fails:
    /// unknown destinations get the fallback itinerary.
    async fn plan_trip(&self, request: &TripRequest) -> Result<String, PlannerError> {
        let key = request.destination().to_lowercase();

        Ok(self
            .itineraries
            .get(&key)
            .cloned()
            .unwrap_or_else(|| Self::fallback_itinerary(request)))
    }
}

//! Domain types for the trip planner.
//!
//! This module contains the core domain model types that represent
//! validated trip preferences. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod outcome;
mod trip;

pub use outcome::PlanningOutcome;
pub use trip::{Budget, InvalidTripRequest, TravelStyle, TripRequest, MAX_DAYS, MIN_DAYS};

//! Web layer for the trip planner.
//!
//! Serves the preference form, handles plan submissions, and renders
//! parsed itinerary blocks. The templates consume only the parser's
//! block sequence, never raw itinerary text.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
pub use templates::*;

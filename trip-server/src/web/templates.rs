//! Askama templates for the web frontend.

use askama::Template;

use crate::itinerary::ItineraryBlock;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the trip preference form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;

/// About page.
#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate;

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Rendered itinerary fragment: the parsed block sequence for one trip.
#[derive(Template)]
#[template(path = "itinerary.html")]
pub struct ItineraryTemplate {
    pub destination: String,
    pub blocks: Vec<ItineraryBlock>,
}

/// Error fragment.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
}

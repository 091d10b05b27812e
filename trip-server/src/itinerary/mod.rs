//! Itinerary text parsing.
//!
//! The planning service returns an itinerary as a loosely-structured text
//! blob: bold-marked day headers, dash bullets for activities, prose lines,
//! and blank separators. This module turns that blob into an ordered
//! sequence of typed blocks so the rendering layer never has to look at
//! raw text.
//!
//! The parser is total and pure: every line classifies to exactly one
//! block, the same input always yields the same sequence, and nothing here
//! can fail.

mod block;
mod parse;

pub use block::ItineraryBlock;
pub use parse::parse_itinerary;

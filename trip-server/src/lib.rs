//! Trip planner server.
//!
//! A web application that collects trip preferences, asks a remote
//! planning service for an itinerary, and renders the returned text as
//! structured blocks.

pub mod cache;
pub mod coordinator;
pub mod domain;
pub mod itinerary;
pub mod planning;
pub mod web;

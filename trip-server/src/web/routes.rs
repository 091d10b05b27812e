//! HTTP route handlers.

use askama::Template;
use axum::{
    Form, Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::coordinator::AlreadyPending;
use crate::domain::{MAX_DAYS, MIN_DAYS, PlanningOutcome, TripRequest};
use crate::itinerary::parse_itinerary;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/about", get(about_page))
        .route("/plan", post(plan_trip))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the preference form.
async fn index_page() -> Result<Html<String>, AppError> {
    let html = IndexTemplate.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;
    Ok(Html(html))
}

/// About page.
async fn about_page() -> Result<Html<String>, AppError> {
    let html = AboutTemplate.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;
    Ok(Html(html))
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Submit trip preferences and render the resulting itinerary.
///
/// Days are clamped to the allowed range here (the form enforces the same
/// bounds client-side); an empty destination is a 400. The resolved
/// outcome is rendered as an HTML fragment or JSON based on the Accept
/// header.
async fn plan_trip(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<PlanTripForm>,
) -> Result<Response, AppError> {
    let days = form.days.clamp(MIN_DAYS, MAX_DAYS);

    let request = TripRequest::new(
        form.destination,
        days,
        form.interests,
        form.budget,
        form.travel_style,
    )
    .map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;

    let destination = request.destination().to_string();

    let outcome = state.coordinator.submit(request).await?;

    match outcome {
        PlanningOutcome::Success(itinerary) => {
            let blocks = parse_itinerary(&itinerary);

            if accepts_html(&headers) {
                let template = ItineraryTemplate {
                    destination,
                    blocks,
                };
                let html = template.render().map_err(|e| AppError::Internal {
                    message: format!("Template error: {}", e),
                })?;

                Ok(Html(html).into_response())
            } else {
                let blocks = blocks.iter().map(BlockResult::from_block).collect();
                Ok(Json(PlanTripResult { itinerary, blocks }).into_response())
            }
        }
        PlanningOutcome::Failure(message) => {
            if accepts_html(&headers) {
                let template = ErrorTemplate {
                    title: "Planning failed".to_string(),
                    message,
                };
                let html = template.render().map_err(|e| AppError::Internal {
                    message: format!("Template error: {}", e),
                })?;

                Ok(Html(html).into_response())
            } else {
                let body = Json(ErrorResponse { error: message });
                Ok((StatusCode::BAD_GATEWAY, body).into_response())
            }
        }
    }
}

/// Application-level errors for route handlers.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Busy { message: String },
    Internal { message: String },
}

impl From<AlreadyPending> for AppError {
    fn from(e: AlreadyPending) -> Self {
        AppError::Busy {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::Busy { message } => (StatusCode::CONFLICT, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        tracing::warn!(status = %status, "{message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

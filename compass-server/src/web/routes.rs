//! HTTP route handlers.

use askama::Template;
use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tracing::{error, warn};

use crate::resolver::{ResolveError, resolve_nearest};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/map", get(map_page))
        .route("/health", get(health))
        .route("/update", post(update_location))
        .route("/api/markers", get(markers))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Compass page.
async fn index_page() -> Result<Html<String>, AppError> {
    let html = IndexTemplate.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;
    Ok(Html(html))
}

/// Map page showing every restroom in the catalog.
async fn map_page() -> Result<Html<String>, AppError> {
    let html = MapTemplate.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;
    Ok(Html(html))
}

/// Handle a client location update: respond with the nearest restroom.
async fn update_location(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<NearestResponse>, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: UpdateRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!("bad /update body ({}): {}", e, String::from_utf8_lossy(&body));
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let nearest = resolve_nearest(&state.catalog, req.lat, req.lon)?;

    Ok(Json(NearestResponse::from(nearest)))
}

/// Dump the full catalog as map markers.
async fn markers(State(state): State<AppState>) -> Json<MarkersResponse> {
    Json(MarkersResponse::from_catalog(&state.catalog))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<ResolveError> for AppError {
    fn from(e: ResolveError) -> Self {
        match e {
            ResolveError::InvalidQuery(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            ResolveError::NoCandidates => AppError::NotFound {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        error!("[{status}] {message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_query_maps_to_bad_request() {
        let err = AppError::from(ResolveError::InvalidQuery(
            crate::domain::InvalidCoordinate::Latitude(95.0),
        ));
        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[test]
    fn no_candidates_maps_to_not_found() {
        let err = AppError::from(ResolveError::NoCandidates);
        assert!(matches!(err, AppError::NotFound { .. }));
        match err {
            AppError::NotFound { message } => assert_eq!(message, "no restrooms in catalog"),
            _ => unreachable!(),
        }
    }
}

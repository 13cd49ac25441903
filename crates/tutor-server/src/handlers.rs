//! HTTP Handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use tutor_directory::{
    DirectoryError, FilterState, RawFilterState, SubjectTag, TutorRecord, subject_catalog,
};

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub tutors: usize,
    pub catalog_source: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub count: usize,
    pub filters: FilterState,
    pub tutors: Vec<TutorRecord>,
}

#[derive(Debug, Deserialize)]
pub struct BookingLinkQuery {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BookingLinkResponse {
    pub url: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn directory_error(err: DirectoryError) -> ApiError {
    let status = match err {
        DirectoryError::InvalidFilterState { .. } => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
        tracing::error!("Directory error: {}", err);
    } else {
        tracing::warn!("Rejected request: {}", err);
    }
    (
        status,
        Json(ErrorResponse {
            error: err.user_message(),
            code: err.code().into(),
        }),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        tutors: state.catalog.len(),
        catalog_source: state.catalog_source.to_string(),
    })
}

/// Subject catalog in grid order
pub async fn list_subjects() -> Json<Vec<SubjectTag>> {
    Json(subject_catalog())
}

/// Full tutor catalog in catalog order
pub async fn list_tutors(State(state): State<AppState>) -> Json<Vec<TutorRecord>> {
    Json(state.catalog.tutors().to_vec())
}

/// Single tutor by id
pub async fn get_tutor(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<TutorRecord>, ApiError> {
    state.catalog.get(id).cloned().map(Json).ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("No tutor with id {}", id),
                code: "NOT_FOUND".into(),
            }),
        )
    })
}

/// Filtered, sorted view of the catalog
pub async fn search_tutors(
    State(state): State<AppState>,
    Query(raw): Query<RawFilterState>,
) -> Result<Json<SearchResponse>, ApiError> {
    let filters = FilterState::try_from(raw).map_err(directory_error)?;
    let tutors = state.catalog.view(&filters);

    Ok(Json(SearchResponse {
        count: tutors.len(),
        filters,
        tutors,
    }))
}

/// Outbound booking deep link
pub async fn booking_link(
    State(state): State<AppState>,
    Query(query): Query<BookingLinkQuery>,
) -> Json<BookingLinkResponse> {
    Json(BookingLinkResponse {
        url: state.booking.url(query.message.as_deref()),
    })
}

//! # REST API for Fixtures and Match Results

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use tracing::info;

use super::{domain_error_response, AppState};
use shared::ScheduleFixtureRequest;

/// Query parameters for the fixture list endpoint
#[derive(Deserialize, Debug)]
pub struct FixtureListQuery {
    /// Keep only played (`true`) or unplayed (`false`) fixtures
    pub played: Option<bool>,
}

/// Schedule a fixture between two clubs
pub async fn schedule_fixture(
    State(state): State<AppState>,
    Json(request): Json<ScheduleFixtureRequest>,
) -> impl IntoResponse {
    info!("POST /api/fixtures - request: {:?}", request);

    match state.match_service.schedule(request).await {
        Ok(response) => (StatusCode::CREATED, Json(response)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// Get a fixture by ID
pub async fn get_fixture(
    State(state): State<AppState>,
    Path(fixture_id): Path<i64>,
) -> impl IntoResponse {
    info!("GET /api/fixtures/{}", fixture_id);

    match state.match_service.get(fixture_id).await {
        Ok(fixture) => (StatusCode::OK, Json(fixture)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// List fixtures, optionally filtered by played state
pub async fn list_fixtures(
    State(state): State<AppState>,
    Query(query): Query<FixtureListQuery>,
) -> impl IntoResponse {
    info!("GET /api/fixtures - query: {:?}", query);

    match state.match_service.list(query.played).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// Simulate an unplayed fixture
pub async fn simulate_fixture(
    State(state): State<AppState>,
    Path(fixture_id): Path<i64>,
) -> impl IntoResponse {
    info!("POST /api/fixtures/{}/simulate", fixture_id);

    match state.match_service.simulate(fixture_id).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// Explicitly re-run a fixture, overwriting its score
pub async fn resimulate_fixture(
    State(state): State<AppState>,
    Path(fixture_id): Path<i64>,
) -> impl IntoResponse {
    info!("POST /api/fixtures/{}/resimulate", fixture_id);

    match state.match_service.resimulate(fixture_id).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// Delete a fixture
pub async fn delete_fixture(
    State(state): State<AppState>,
    Path(fixture_id): Path<i64>,
) -> impl IntoResponse {
    info!("DELETE /api/fixtures/{}", fixture_id);

    match state.match_service.delete(fixture_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => domain_error_response(e),
    }
}

//! # REST API for Leagues

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::info;

use super::{domain_error_response, AppState};
use shared::{CreateLeagueRequest, UpdateLeagueNameRequest, UpdateLeagueSeasonRequest};

/// Create a new league
pub async fn create_league(
    State(state): State<AppState>,
    Json(request): Json<CreateLeagueRequest>,
) -> impl IntoResponse {
    info!("POST /api/leagues - request: {:?}", request);

    match state.league_service.create_league(request).await {
        Ok(response) => (StatusCode::CREATED, Json(response)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// Get a league by ID
pub async fn get_league(
    State(state): State<AppState>,
    Path(league_id): Path<i64>,
) -> impl IntoResponse {
    info!("GET /api/leagues/{}", league_id);

    match state.league_service.get_league(league_id).await {
        Ok(league) => (StatusCode::OK, Json(league)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// List all leagues
pub async fn list_leagues(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/leagues");

    match state.league_service.list_leagues().await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// Rename a league
pub async fn update_league_name(
    State(state): State<AppState>,
    Path(league_id): Path<i64>,
    Json(request): Json<UpdateLeagueNameRequest>,
) -> impl IntoResponse {
    info!("PUT /api/leagues/{}/name - request: {:?}", league_id, request);

    match state.league_service.update_name(league_id, request).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// Move a league to a new season
pub async fn update_league_season(
    State(state): State<AppState>,
    Path(league_id): Path<i64>,
    Json(request): Json<UpdateLeagueSeasonRequest>,
) -> impl IntoResponse {
    info!("PUT /api/leagues/{}/season - request: {:?}", league_id, request);

    match state.league_service.update_season(league_id, request).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// Delete a league
pub async fn delete_league(
    State(state): State<AppState>,
    Path(league_id): Path<i64>,
) -> impl IntoResponse {
    info!("DELETE /api/leagues/{}", league_id);

    match state.league_service.delete_league(league_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => domain_error_response(e),
    }
}

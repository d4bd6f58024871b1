//! # REST API for Club Management

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::info;

use super::{domain_error_response, AppState};
use shared::{CreateClubRequest, UpdateFormationRequest, UpdateTacticsRequest};

/// Create a new club
pub async fn create_club(
    State(state): State<AppState>,
    Json(request): Json<CreateClubRequest>,
) -> impl IntoResponse {
    info!("POST /api/clubs - request: {:?}", request);

    match state.club_service.create_club(request).await {
        Ok(response) => (StatusCode::CREATED, Json(response)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// Get a club by ID
pub async fn get_club(
    State(state): State<AppState>,
    Path(club_id): Path<i64>,
) -> impl IntoResponse {
    info!("GET /api/clubs/{}", club_id);

    match state.club_service.get_club(club_id).await {
        Ok(club) => (StatusCode::OK, Json(club)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// List all clubs
pub async fn list_clubs(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/clubs");

    match state.club_service.list_clubs().await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// Players currently on a club's roster
pub async fn get_roster(
    State(state): State<AppState>,
    Path(club_id): Path<i64>,
) -> impl IntoResponse {
    info!("GET /api/clubs/{}/roster", club_id);

    match state.club_service.roster(club_id).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// Update a club's formation
pub async fn update_formation(
    State(state): State<AppState>,
    Path(club_id): Path<i64>,
    Json(request): Json<UpdateFormationRequest>,
) -> impl IntoResponse {
    info!("PUT /api/clubs/{}/formation - request: {:?}", club_id, request);

    match state.club_service.update_formation(club_id, request).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// Update a club's tactics
pub async fn update_tactics(
    State(state): State<AppState>,
    Path(club_id): Path<i64>,
    Json(request): Json<UpdateTacticsRequest>,
) -> impl IntoResponse {
    info!("PUT /api/clubs/{}/tactics - request: {:?}", club_id, request);

    match state.club_service.update_tactics(club_id, request).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// Delete a club
pub async fn delete_club(
    State(state): State<AppState>,
    Path(club_id): Path<i64>,
) -> impl IntoResponse {
    info!("DELETE /api/clubs/{}", club_id);

    match state.club_service.delete_club(club_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => domain_error_response(e),
    }
}

//! # REST API for Player Management

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::info;

use super::{domain_error_response, AppState};
use shared::{CreatePlayerRequest, UpdateContractRequest, UpdateMoraleRequest, UpdateSkillsRequest};

/// Create a new player
pub async fn create_player(
    State(state): State<AppState>,
    Json(request): Json<CreatePlayerRequest>,
) -> impl IntoResponse {
    info!("POST /api/players - request: {:?}", request);

    match state.player_service.create_player(request).await {
        Ok(response) => (StatusCode::CREATED, Json(response)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// Get a player by ID
pub async fn get_player(
    State(state): State<AppState>,
    Path(player_id): Path<i64>,
) -> impl IntoResponse {
    info!("GET /api/players/{}", player_id);

    match state.player_service.get_player(player_id).await {
        Ok(player) => (StatusCode::OK, Json(player)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// List all players
pub async fn list_players(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/players");

    match state.player_service.list_players().await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// Update a player's skill rating
pub async fn update_skills(
    State(state): State<AppState>,
    Path(player_id): Path<i64>,
    Json(request): Json<UpdateSkillsRequest>,
) -> impl IntoResponse {
    info!("PUT /api/players/{}/skills - request: {:?}", player_id, request);

    match state.player_service.update_skills(player_id, request).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// Update a player's morale
pub async fn update_morale(
    State(state): State<AppState>,
    Path(player_id): Path<i64>,
    Json(request): Json<UpdateMoraleRequest>,
) -> impl IntoResponse {
    info!("PUT /api/players/{}/morale - request: {:?}", player_id, request);

    match state.player_service.update_morale(player_id, request).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// Update a player's contract end year
pub async fn update_contract(
    State(state): State<AppState>,
    Path(player_id): Path<i64>,
    Json(request): Json<UpdateContractRequest>,
) -> impl IntoResponse {
    info!("PUT /api/players/{}/contract - request: {:?}", player_id, request);

    match state.player_service.update_contract(player_id, request).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// Delete a player
pub async fn delete_player(
    State(state): State<AppState>,
    Path(player_id): Path<i64>,
) -> impl IntoResponse {
    info!("DELETE /api/players/{}", player_id);

    match state.player_service.delete_player(player_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => domain_error_response(e),
    }
}

//! # REST API for Game Settings

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::info;

use super::{domain_error_response, AppState};
use shared::UpdateSettingsRequest;

/// Current settings
pub async fn get_settings(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/settings");

    match state.settings_service.get_settings().await {
        Ok(settings) => (StatusCode::OK, Json(settings)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// Apply settings; omitted fields keep their current values
pub async fn apply_settings(
    State(state): State<AppState>,
    Json(request): Json<UpdateSettingsRequest>,
) -> impl IntoResponse {
    info!("PUT /api/settings - request: {:?}", request);

    match state.settings_service.apply_settings(request).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

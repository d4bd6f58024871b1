//! # REST API for Transfers

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::info;

use super::{domain_error_response, AppState};
use shared::{BuyPlayerRequest, NegotiateContractRequest, SellPlayerRequest};

/// Buy an unowned player for a club
pub async fn buy_player(
    State(state): State<AppState>,
    Json(request): Json<BuyPlayerRequest>,
) -> impl IntoResponse {
    info!("POST /api/transfers/buy - request: {:?}", request);

    match state.transfer_service.buy(request).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// Sell a player off a club's roster
pub async fn sell_player(
    State(state): State<AppState>,
    Json(request): Json<SellPlayerRequest>,
) -> impl IntoResponse {
    info!("POST /api/transfers/sell - request: {:?}", request);

    match state.transfer_service.sell(request).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// Renegotiate a player's contract
pub async fn negotiate_contract(
    State(state): State<AppState>,
    Json(request): Json<NegotiateContractRequest>,
) -> impl IntoResponse {
    info!("POST /api/transfers/contract - request: {:?}", request);

    match state.transfer_service.negotiate_contract(request).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// List players without a club
pub async fn list_available_players(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/players/available");

    match state.transfer_service.list_available().await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

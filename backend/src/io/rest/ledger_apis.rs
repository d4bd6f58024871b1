//! # REST API for Club Finances

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::info;

use super::{domain_error_response, AppState};
use shared::{AddExpenseRequest, AddRevenueRequest, OpenLedgerRequest, SetBudgetRequest};

/// Open a ledger for a club
pub async fn open_ledger(
    State(state): State<AppState>,
    Json(request): Json<OpenLedgerRequest>,
) -> impl IntoResponse {
    info!("POST /api/ledgers - request: {:?}", request);

    match state.ledger_service.open(request).await {
        Ok(response) => (StatusCode::CREATED, Json(response)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// Current ledger snapshot for a club
pub async fn get_ledger(
    State(state): State<AppState>,
    Path(club_id): Path<i64>,
) -> impl IntoResponse {
    info!("GET /api/ledgers/{}", club_id);

    match state.ledger_service.get(club_id).await {
        Ok(ledger) => (StatusCode::OK, Json(ledger)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// Administrative budget override
pub async fn set_budget(
    State(state): State<AppState>,
    Path(club_id): Path<i64>,
    Json(request): Json<SetBudgetRequest>,
) -> impl IntoResponse {
    info!("PUT /api/ledgers/{}/budget - request: {:?}", club_id, request);

    match state.ledger_service.set_budget(club_id, request).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// Record revenue for a club
pub async fn add_revenue(
    State(state): State<AppState>,
    Path(club_id): Path<i64>,
    Json(request): Json<AddRevenueRequest>,
) -> impl IntoResponse {
    info!("POST /api/ledgers/{}/revenue - request: {:?}", club_id, request);

    match state.ledger_service.add_revenue(club_id, request).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// Record an expense for a club
pub async fn add_expense(
    State(state): State<AppState>,
    Path(club_id): Path<i64>,
    Json(request): Json<AddExpenseRequest>,
) -> impl IntoResponse {
    info!("POST /api/ledgers/{}/expenses - request: {:?}", club_id, request);

    match state.ledger_service.add_expense(club_id, request).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// Close a club's ledger
pub async fn close_ledger(
    State(state): State<AppState>,
    Path(club_id): Path<i64>,
) -> impl IntoResponse {
    info!("DELETE /api/ledgers/{}", club_id);

    match state.ledger_service.close(club_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => domain_error_response(e),
    }
}

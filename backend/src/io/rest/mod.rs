//! # REST API Interface Layer
//!
//! HTTP endpoints for the football manager backend. This layer handles
//! request/response serialization, translation of domain failures to HTTP
//! status codes, and request logging. It contains no business logic; every
//! handler is a thin call into a domain service.

pub mod club_apis;
pub mod fixture_apis;
pub mod league_apis;
pub mod ledger_apis;
pub mod player_apis;
pub mod settings_apis;
pub mod transfer_apis;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::domain::{
    ClubService, DomainError, LeagueService, LedgerService, MatchService, PlayerService,
    SettingsService, TransferService,
};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub club_service: ClubService,
    pub player_service: PlayerService,
    pub ledger_service: LedgerService,
    pub transfer_service: TransferService,
    pub match_service: MatchService,
    pub league_service: LeagueService,
    pub settings_service: SettingsService,
}

/// The HTTP status a caller should see for each failure kind
fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::AlreadyExists { .. }
        | DomainError::InsufficientFunds { .. }
        | DomainError::PlayerAlreadyOwned { .. }
        | DomainError::NotOwned { .. }
        | DomainError::DeadlinePassed { .. }
        | DomainError::AlreadySimulated { .. } => StatusCode::CONFLICT,
        DomainError::InvalidClubs { .. } | DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Render a domain failure as an HTTP response with a specific message
pub(crate) fn domain_error_response(err: DomainError) -> Response {
    error!("Request failed: {err}");
    (status_for(&err), err.to_string()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Entity;

    #[test]
    fn test_every_failure_kind_has_a_distinct_rendering() {
        assert_eq!(
            status_for(&DomainError::not_found(Entity::Fixture, 1)),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&DomainError::AlreadyExists { club_id: 1 }),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_for(&DomainError::InsufficientFunds { budget: 1, required: 2 }),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_for(&DomainError::InvalidClubs { home_club_id: 1, away_club_id: 2 }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&DomainError::Validation("bad".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&DomainError::Storage(anyhow::anyhow!("io"))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_buy_request_wire_shape() {
        let request: shared::BuyPlayerRequest =
            serde_json::from_str(r#"{"club_id": 3, "player_id": 9, "price": 250000}"#).unwrap();
        assert_eq!(request.club_id, 3);
        assert_eq!(request.player_id, 9);
        assert_eq!(request.price, 250_000);
    }
}

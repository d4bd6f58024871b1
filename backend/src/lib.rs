//! # Football Manager Backend
//!
//! Backend for a turn-based football management game. It brings together:
//! - **Domain**: ledger bookkeeping, transfers, match simulation, entity CRUD
//! - **Storage**: SQLite persistence, the single source of truth between calls
//! - **IO**: the REST layer that exposes the services to a frontend
//!
//! The backend is UI-agnostic: the same services back the HTTP surface, a
//! CLI, or the test harness without modification.

pub mod domain;
pub mod io;
pub mod storage;

use std::sync::Arc;

use anyhow::Result;
use axum::{
    http::{HeaderValue, Method},
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::domain::{
    ClubService, LeagueService, LedgerService, MatchService, PlayerService, SettingsService,
    TransferService,
};
use crate::io::rest::{self, AppState};
use crate::storage::DbConnection;

/// Initialize the backend with all required services
pub async fn initialize_backend() -> Result<AppState> {
    info!("Setting up database");
    let db = Arc::new(DbConnection::init().await?);

    info!("Setting up domain services");
    let ledger_service = LedgerService::new(db.clone());
    let app_state = AppState {
        club_service: ClubService::new(db.clone()),
        player_service: PlayerService::new(db.clone()),
        transfer_service: TransferService::new(db.clone(), ledger_service.clone()),
        match_service: MatchService::new(db.clone()),
        league_service: LeagueService::new(db.clone()),
        settings_service: SettingsService::new(db),
        ledger_service,
    };

    Ok(app_state)
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    // CORS setup to allow frontend to make requests
    let cors = CorsLayer::new()
        .allow_origin("http://localhost:8080".parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route(
            "/clubs",
            post(rest::club_apis::create_club).get(rest::club_apis::list_clubs),
        )
        .route(
            "/clubs/:club_id",
            get(rest::club_apis::get_club).delete(rest::club_apis::delete_club),
        )
        .route("/clubs/:club_id/roster", get(rest::club_apis::get_roster))
        .route("/clubs/:club_id/formation", put(rest::club_apis::update_formation))
        .route("/clubs/:club_id/tactics", put(rest::club_apis::update_tactics))
        .route(
            "/players",
            post(rest::player_apis::create_player).get(rest::player_apis::list_players),
        )
        .route("/players/available", get(rest::transfer_apis::list_available_players))
        .route(
            "/players/:player_id",
            get(rest::player_apis::get_player).delete(rest::player_apis::delete_player),
        )
        .route("/players/:player_id/skills", put(rest::player_apis::update_skills))
        .route("/players/:player_id/morale", put(rest::player_apis::update_morale))
        .route("/players/:player_id/contract", put(rest::player_apis::update_contract))
        .route("/ledgers", post(rest::ledger_apis::open_ledger))
        .route(
            "/ledgers/:club_id",
            get(rest::ledger_apis::get_ledger).delete(rest::ledger_apis::close_ledger),
        )
        .route("/ledgers/:club_id/budget", put(rest::ledger_apis::set_budget))
        .route("/ledgers/:club_id/revenue", post(rest::ledger_apis::add_revenue))
        .route("/ledgers/:club_id/expenses", post(rest::ledger_apis::add_expense))
        .route("/transfers/buy", post(rest::transfer_apis::buy_player))
        .route("/transfers/sell", post(rest::transfer_apis::sell_player))
        .route("/transfers/contract", post(rest::transfer_apis::negotiate_contract))
        .route(
            "/fixtures",
            post(rest::fixture_apis::schedule_fixture).get(rest::fixture_apis::list_fixtures),
        )
        .route(
            "/fixtures/:fixture_id",
            get(rest::fixture_apis::get_fixture).delete(rest::fixture_apis::delete_fixture),
        )
        .route("/fixtures/:fixture_id/simulate", post(rest::fixture_apis::simulate_fixture))
        .route("/fixtures/:fixture_id/resimulate", post(rest::fixture_apis::resimulate_fixture))
        .route(
            "/leagues",
            post(rest::league_apis::create_league).get(rest::league_apis::list_leagues),
        )
        .route(
            "/leagues/:league_id",
            get(rest::league_apis::get_league).delete(rest::league_apis::delete_league),
        )
        .route("/leagues/:league_id/name", put(rest::league_apis::update_league_name))
        .route("/leagues/:league_id/season", put(rest::league_apis::update_league_season))
        .route(
            "/settings",
            get(rest::settings_apis::get_settings).put(rest::settings_apis::apply_settings),
        );

    Router::new().nest("/api", api_routes).layer(cors).with_state(app_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::{Json, Path, State};
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use shared::{BuyPlayerRequest, CreateClubRequest, CreatePlayerRequest, OpenLedgerRequest};

    async fn test_state() -> AppState {
        let db = Arc::new(DbConnection::init_test().await.expect("test database"));
        let ledger_service = LedgerService::new(db.clone());
        AppState {
            club_service: ClubService::new(db.clone()),
            player_service: PlayerService::new(db.clone()),
            transfer_service: TransferService::new(db.clone(), ledger_service.clone()),
            match_service: MatchService::new(db.clone()),
            league_service: LeagueService::new(db.clone()),
            settings_service: SettingsService::new(db),
            ledger_service,
        }
    }

    #[tokio::test]
    async fn test_router_builds_with_all_routes() {
        let state = test_state().await;
        let _router = create_router(state);
    }

    #[tokio::test]
    async fn test_buy_flow_through_handlers() {
        let state = test_state().await;

        let response = rest::club_apis::create_club(
            State(state.clone()),
            Json(CreateClubRequest {
                name: "Handler FC".to_string(),
                formation: "4-4-2".to_string(),
                tactics: "balanced".to_string(),
                country: None,
                division: None,
            }),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::CREATED);

        // Open the ledger and create a player directly through the services
        let club_id = state.club_service.list_clubs().await.unwrap().clubs[0].id;
        state
            .ledger_service
            .open(OpenLedgerRequest { club_id, budget: 500_000, revenue: 0, expenses: 0 })
            .await
            .unwrap();
        let player_id = state
            .player_service
            .create_player(CreatePlayerRequest {
                name: "Handler Target".to_string(),
                position: "ST".to_string(),
                skills: 70,
                morale: 70,
                contract_end: 2027,
            })
            .await
            .unwrap()
            .player
            .id;

        let response = rest::transfer_apis::buy_player(
            State(state.clone()),
            Json(BuyPlayerRequest { club_id, player_id, price: 600_000 }),
        )
        .await
        .into_response();
        // More than the budget: the purchase is refused as a conflict
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let response = rest::transfer_apis::buy_player(
            State(state.clone()),
            Json(BuyPlayerRequest { club_id, player_id, price: 100_000 }),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let response = rest::ledger_apis::get_ledger(State(state), Path(club_id))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}

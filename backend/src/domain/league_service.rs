//! League management service. Plain CRUD over league records; standings
//! computation is intentionally absent.

use std::sync::Arc;
use tracing::info;

use crate::domain::error::{DomainError, Entity};
use crate::storage::DbConnection;
use shared::{
    CreateLeagueRequest, League, LeagueListResponse, LeagueResponse, UpdateLeagueNameRequest,
    UpdateLeagueSeasonRequest,
};

#[derive(Clone)]
pub struct LeagueService {
    db: Arc<DbConnection>,
}

impl LeagueService {
    pub fn new(db: Arc<DbConnection>) -> Self {
        Self { db }
    }

    pub async fn create_league(
        &self,
        request: CreateLeagueRequest,
    ) -> Result<LeagueResponse, DomainError> {
        info!("Creating league '{}' for season '{}'", request.name, request.season);

        if request.name.trim().is_empty() {
            return Err(DomainError::Validation("League name cannot be empty".to_string()));
        }

        let id = self.db.add_league(request.name.trim(), &request.season).await?;

        Ok(LeagueResponse {
            league: League {
                id,
                name: request.name.trim().to_string(),
                season: request.season,
            },
            success_message: "League created successfully".to_string(),
        })
    }

    pub async fn get_league(&self, league_id: i64) -> Result<League, DomainError> {
        self.db
            .get_league(league_id)
            .await?
            .ok_or(DomainError::NotFound { entity: Entity::League, id: league_id })
    }

    pub async fn list_leagues(&self) -> Result<LeagueListResponse, DomainError> {
        let leagues = self.db.list_leagues().await?;
        Ok(LeagueListResponse { leagues })
    }

    pub async fn update_name(
        &self,
        league_id: i64,
        request: UpdateLeagueNameRequest,
    ) -> Result<LeagueResponse, DomainError> {
        if !self.db.update_league_name(league_id, &request.name).await? {
            return Err(DomainError::NotFound { entity: Entity::League, id: league_id });
        }

        let league = self.get_league(league_id).await?;
        Ok(LeagueResponse {
            league,
            success_message: "League name updated successfully".to_string(),
        })
    }

    pub async fn update_season(
        &self,
        league_id: i64,
        request: UpdateLeagueSeasonRequest,
    ) -> Result<LeagueResponse, DomainError> {
        if !self.db.update_league_season(league_id, &request.season).await? {
            return Err(DomainError::NotFound { entity: Entity::League, id: league_id });
        }

        let league = self.get_league(league_id).await?;
        Ok(LeagueResponse {
            league,
            success_message: "League season updated successfully".to_string(),
        })
    }

    pub async fn delete_league(&self, league_id: i64) -> Result<(), DomainError> {
        info!("Deleting league {}", league_id);

        if !self.db.delete_league(league_id).await? {
            return Err(DomainError::NotFound { entity: Entity::League, id: league_id });
        }
        Ok(())
    }
}

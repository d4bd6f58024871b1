//! Club management service.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::error::{DomainError, Entity};
use crate::storage::DbConnection;
use shared::{
    Club, ClubListResponse, ClubResponse, CreateClubRequest, PlayerListResponse,
    UpdateFormationRequest, UpdateTacticsRequest,
};

const MAX_NAME_LEN: usize = 100;

#[derive(Clone)]
pub struct ClubService {
    db: Arc<DbConnection>,
}

impl ClubService {
    pub fn new(db: Arc<DbConnection>) -> Self {
        Self { db }
    }

    /// Create a new club
    pub async fn create_club(&self, request: CreateClubRequest) -> Result<ClubResponse, DomainError> {
        info!("Creating club: name={}, formation={}", request.name, request.formation);

        validate_name(&request.name)?;

        let id = self
            .db
            .add_club(
                request.name.trim(),
                &request.formation,
                &request.tactics,
                request.country.as_deref(),
                request.division.as_deref(),
            )
            .await?;

        let club = self
            .db
            .get_club(id)
            .await?
            .ok_or(DomainError::NotFound { entity: Entity::Club, id })?;

        info!("Created club '{}' with ID {}", club.name, club.id);

        Ok(ClubResponse {
            club,
            success_message: "Club created successfully".to_string(),
        })
    }

    pub async fn get_club(&self, club_id: i64) -> Result<Club, DomainError> {
        self.db
            .get_club(club_id)
            .await?
            .ok_or(DomainError::NotFound { entity: Entity::Club, id: club_id })
    }

    pub async fn list_clubs(&self) -> Result<ClubListResponse, DomainError> {
        let clubs = self.db.list_clubs().await?;
        info!("Found {} clubs", clubs.len());
        Ok(ClubListResponse { clubs })
    }

    /// Players currently on the club's roster
    pub async fn roster(&self, club_id: i64) -> Result<PlayerListResponse, DomainError> {
        // Distinguish an empty roster from a missing club
        self.get_club(club_id).await?;
        let players = self.db.roster_of_club(club_id).await?;
        Ok(PlayerListResponse { players })
    }

    pub async fn update_formation(
        &self,
        club_id: i64,
        request: UpdateFormationRequest,
    ) -> Result<ClubResponse, DomainError> {
        info!("Updating formation of club {} to '{}'", club_id, request.formation);

        if !self.db.update_club_formation(club_id, &request.formation).await? {
            return Err(DomainError::NotFound { entity: Entity::Club, id: club_id });
        }

        let club = self.get_club(club_id).await?;
        Ok(ClubResponse {
            club,
            success_message: "Formation updated successfully".to_string(),
        })
    }

    pub async fn update_tactics(
        &self,
        club_id: i64,
        request: UpdateTacticsRequest,
    ) -> Result<ClubResponse, DomainError> {
        info!("Updating tactics of club {} to '{}'", club_id, request.tactics);

        if !self.db.update_club_tactics(club_id, &request.tactics).await? {
            return Err(DomainError::NotFound { entity: Entity::Club, id: club_id });
        }

        let club = self.get_club(club_id).await?;
        Ok(ClubResponse {
            club,
            success_message: "Tactics updated successfully".to_string(),
        })
    }

    /// Delete a club. Roster links go with it; the players themselves stay
    /// and become available again.
    pub async fn delete_club(&self, club_id: i64) -> Result<(), DomainError> {
        info!("Deleting club {}", club_id);

        if !self.db.delete_club(club_id).await? {
            warn!("Club {} not found for deletion", club_id);
            return Err(DomainError::NotFound { entity: Entity::Club, id: club_id });
        }
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::Validation("Club name cannot be empty".to_string()));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(DomainError::Validation(format!(
            "Club name cannot exceed {MAX_NAME_LEN} characters"
        )));
    }
    Ok(())
}

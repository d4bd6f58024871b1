//! Player management service.
//!
//! Skill and morale ratings are kept inside 0..=100; everything else about a
//! player is an opaque label as far as this service is concerned.

use std::sync::Arc;
use tracing::info;

use crate::domain::error::{DomainError, Entity};
use crate::storage::DbConnection;
use shared::{
    CreatePlayerRequest, Player, PlayerListResponse, PlayerResponse, UpdateContractRequest,
    UpdateMoraleRequest, UpdateSkillsRequest,
};

const RATING_MIN: i64 = 0;
const RATING_MAX: i64 = 100;

#[derive(Clone)]
pub struct PlayerService {
    db: Arc<DbConnection>,
}

impl PlayerService {
    pub fn new(db: Arc<DbConnection>) -> Self {
        Self { db }
    }

    pub async fn create_player(
        &self,
        request: CreatePlayerRequest,
    ) -> Result<PlayerResponse, DomainError> {
        info!("Creating player: name={}, position={}", request.name, request.position);

        if request.name.trim().is_empty() {
            return Err(DomainError::Validation("Player name cannot be empty".to_string()));
        }
        validate_rating("skills", request.skills)?;
        validate_rating("morale", request.morale)?;

        let id = self
            .db
            .add_player(
                request.name.trim(),
                &request.position,
                request.skills,
                request.morale,
                request.contract_end,
            )
            .await?;

        Ok(PlayerResponse {
            player: Player {
                id,
                name: request.name.trim().to_string(),
                position: request.position,
                skills: request.skills,
                morale: request.morale,
                contract_end: request.contract_end,
            },
            success_message: "Player created successfully".to_string(),
        })
    }

    pub async fn get_player(&self, player_id: i64) -> Result<Player, DomainError> {
        self.db
            .get_player(player_id)
            .await?
            .ok_or(DomainError::NotFound { entity: Entity::Player, id: player_id })
    }

    pub async fn list_players(&self) -> Result<PlayerListResponse, DomainError> {
        let players = self.db.list_players().await?;
        info!("Found {} players", players.len());
        Ok(PlayerListResponse { players })
    }

    pub async fn update_skills(
        &self,
        player_id: i64,
        request: UpdateSkillsRequest,
    ) -> Result<PlayerResponse, DomainError> {
        validate_rating("skills", request.skills)?;

        if !self.db.update_player_skills(player_id, request.skills).await? {
            return Err(DomainError::NotFound { entity: Entity::Player, id: player_id });
        }

        let player = self.get_player(player_id).await?;
        Ok(PlayerResponse {
            player,
            success_message: "Skills updated successfully".to_string(),
        })
    }

    pub async fn update_morale(
        &self,
        player_id: i64,
        request: UpdateMoraleRequest,
    ) -> Result<PlayerResponse, DomainError> {
        validate_rating("morale", request.morale)?;

        if !self.db.update_player_morale(player_id, request.morale).await? {
            return Err(DomainError::NotFound { entity: Entity::Player, id: player_id });
        }

        let player = self.get_player(player_id).await?;
        Ok(PlayerResponse {
            player,
            success_message: "Morale updated successfully".to_string(),
        })
    }

    pub async fn update_contract(
        &self,
        player_id: i64,
        request: UpdateContractRequest,
    ) -> Result<PlayerResponse, DomainError> {
        if !self
            .db
            .update_player_contract(player_id, request.contract_end)
            .await?
        {
            return Err(DomainError::NotFound { entity: Entity::Player, id: player_id });
        }

        let player = self.get_player(player_id).await?;
        Ok(PlayerResponse {
            player,
            success_message: "Contract updated successfully".to_string(),
        })
    }

    /// Delete a player outright, including any roster link
    pub async fn delete_player(&self, player_id: i64) -> Result<(), DomainError> {
        info!("Deleting player {}", player_id);

        if !self.db.delete_player(player_id).await? {
            return Err(DomainError::NotFound { entity: Entity::Player, id: player_id });
        }
        Ok(())
    }
}

fn validate_rating(field: &str, value: i64) -> Result<(), DomainError> {
    if !(RATING_MIN..=RATING_MAX).contains(&value) {
        return Err(DomainError::Validation(format!(
            "Player {field} must be between {RATING_MIN} and {RATING_MAX}, got {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup() -> PlayerService {
        let db = Arc::new(DbConnection::init_test().await.unwrap());
        PlayerService::new(db)
    }

    fn create_request(name: &str, skills: i64, morale: i64) -> CreatePlayerRequest {
        CreatePlayerRequest {
            name: name.to_string(),
            position: "CM".to_string(),
            skills,
            morale,
            contract_end: 2027,
        }
    }

    #[tokio::test]
    async fn test_create_and_fetch_player() {
        let service = setup().await;

        let response = service.create_player(create_request("Dani Mora", 77, 85)).await.unwrap();
        assert_eq!(response.player.name, "Dani Mora");

        let player = service.get_player(response.player.id).await.unwrap();
        assert_eq!(player, response.player);
    }

    #[tokio::test]
    async fn test_ratings_are_bounded() {
        let service = setup().await;

        let err = service.create_player(create_request("Too Good", 101, 50)).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let err = service.create_player(create_request("Too Sad", 50, -1)).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let player_id = service
            .create_player(create_request("Fine", 50, 50))
            .await
            .unwrap()
            .player
            .id;
        let err = service
            .update_skills(player_id, UpdateSkillsRequest { skills: 250 })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        // Bounds are inclusive
        service.update_skills(player_id, UpdateSkillsRequest { skills: 100 }).await.unwrap();
        service.update_morale(player_id, UpdateMoraleRequest { morale: 0 }).await.unwrap();
    }

    #[tokio::test]
    async fn test_updates_are_persisted() {
        let service = setup().await;
        let player_id = service
            .create_player(create_request("Mutable Man", 60, 60))
            .await
            .unwrap()
            .player
            .id;

        service.update_skills(player_id, UpdateSkillsRequest { skills: 65 }).await.unwrap();
        service.update_morale(player_id, UpdateMoraleRequest { morale: 90 }).await.unwrap();
        let response = service
            .update_contract(player_id, UpdateContractRequest { contract_end: 2031 })
            .await
            .unwrap();

        assert_eq!(response.player.skills, 65);
        assert_eq!(response.player.morale, 90);
        assert_eq!(response.player.contract_end, 2031);
    }

    #[tokio::test]
    async fn test_missing_player_is_not_found() {
        let service = setup().await;

        assert!(matches!(
            service.get_player(7).await.unwrap_err(),
            DomainError::NotFound { entity: Entity::Player, id: 7 }
        ));
        assert!(matches!(
            service.delete_player(7).await.unwrap_err(),
            DomainError::NotFound { .. }
        ));
    }
}

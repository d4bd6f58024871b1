//! Failure taxonomy for the domain services.
//!
//! Every expected failure is a distinct variant so callers can render a
//! specific message instead of a catch-all. Storage failures pass through
//! the `Storage` variant untouched.

use thiserror::Error;

/// What kind of entity a lookup failed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Club,
    Player,
    Ledger,
    Fixture,
    League,
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Entity::Club => "club",
            Entity::Player => "player",
            Entity::Ledger => "ledger",
            Entity::Fixture => "fixture",
            Entity::League => "league",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity} {id} not found")]
    NotFound { entity: Entity, id: i64 },

    #[error("ledger already exists for club {club_id}")]
    AlreadyExists { club_id: i64 },

    #[error("insufficient funds: budget {budget} cannot cover {required}")]
    InsufficientFunds { budget: i64, required: i64 },

    #[error("player {player_id} already belongs to club {owner_club_id}")]
    PlayerAlreadyOwned { player_id: i64, owner_club_id: i64 },

    #[error("player {player_id} is not on the roster of club {club_id}")]
    NotOwned { player_id: i64, club_id: i64 },

    #[error("fixture references a missing club (home {home_club_id}, away {away_club_id})")]
    InvalidClubs { home_club_id: i64, away_club_id: i64 },

    #[error("transfer window closed on {deadline}")]
    DeadlinePassed { deadline: String },

    #[error("fixture {fixture_id} has already been played")]
    AlreadySimulated { fixture_id: i64 },

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl DomainError {
    pub fn not_found(entity: Entity, id: i64) -> Self {
        DomainError::NotFound { entity, id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        let err = DomainError::not_found(Entity::Club, 42);
        assert_eq!(err.to_string(), "club 42 not found");

        let err = DomainError::InsufficientFunds {
            budget: 1_000_000,
            required: 1_500_000,
        };
        assert!(err.to_string().contains("1000000"));
        assert!(err.to_string().contains("1500000"));
    }
}

//! Shared data types for the football manager backend.
//!
//! These are the wire-level records and request/response types exchanged
//! between the backend services and any caller (REST handlers, CLI, tests).
//! Typed records are constructed once at the storage boundary and passed
//! around as-is; nothing in here touches the database.

use serde::{Deserialize, Serialize};

/// A managed football club.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Club {
    pub id: i64,
    pub name: String,
    /// Tactical formation label, e.g. "4-4-2"
    pub formation: String,
    /// Playing style label, e.g. "attacking"
    pub tactics: String,
    pub country: String,
    pub division: String,
}

/// A player record. A player belongs to at most one club at a time;
/// ownership lives in the roster relation, not on this record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: i64,
    pub name: String,
    /// Position label, e.g. "GK", "ST"
    pub position: String,
    /// Skill rating in 0..=100
    pub skills: i64,
    /// Morale in 0..=100
    pub morale: i64,
    /// Year the current contract expires
    pub contract_end: i64,
}

/// Per-club financial record.
///
/// Outside of administrative budget overrides, the invariant
/// `budget == initial_budget + revenue - expenses` holds after every mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    pub id: i64,
    pub club_id: i64,
    pub budget: i64,
    /// Cumulative revenue, monotonically non-decreasing
    pub revenue: i64,
    /// Cumulative expenses, monotonically non-decreasing
    pub expenses: i64,
}

/// A scheduled match between two clubs. Scores are absent until the
/// fixture is simulated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: i64,
    pub home_club_id: i64,
    pub away_club_id: i64,
    /// Scheduled date, YYYY-MM-DD
    pub date: String,
    pub home_score: Option<i64>,
    pub away_score: Option<i64>,
}

impl Fixture {
    /// A fixture is played once both scores have been recorded.
    pub fn is_played(&self) -> bool {
        self.home_score.is_some() && self.away_score.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct League {
    pub id: i64,
    pub name: String,
    /// Season label, e.g. "2025/26"
    pub season: String,
}

/// Game-wide settings, persisted as a single row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub difficulty: String,
    pub audio: String,
}

// ---------------------------------------------------------------------------
// Club requests/responses
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateClubRequest {
    pub name: String,
    pub formation: String,
    pub tactics: String,
    /// Defaults to "England" when omitted
    pub country: Option<String>,
    /// Defaults to "Premier" when omitted
    pub division: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateFormationRequest {
    pub formation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateTacticsRequest {
    pub tactics: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClubResponse {
    pub club: Club,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClubListResponse {
    pub clubs: Vec<Club>,
}

// ---------------------------------------------------------------------------
// Player requests/responses
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePlayerRequest {
    pub name: String,
    pub position: String,
    pub skills: i64,
    pub morale: i64,
    pub contract_end: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateSkillsRequest {
    pub skills: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateMoraleRequest {
    pub morale: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateContractRequest {
    pub contract_end: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerResponse {
    pub player: Player,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerListResponse {
    pub players: Vec<Player>,
}

// ---------------------------------------------------------------------------
// Ledger requests/responses
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenLedgerRequest {
    pub club_id: i64,
    pub budget: i64,
    #[serde(default)]
    pub revenue: i64,
    #[serde(default)]
    pub expenses: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetBudgetRequest {
    pub budget: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddRevenueRequest {
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddExpenseRequest {
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerResponse {
    pub ledger: Ledger,
    pub success_message: String,
}

// ---------------------------------------------------------------------------
// Transfer requests/responses
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuyPlayerRequest {
    pub club_id: i64,
    pub player_id: i64,
    pub price: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellPlayerRequest {
    pub club_id: i64,
    pub player_id: i64,
    pub price: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NegotiateContractRequest {
    pub player_id: i64,
    /// Year the renegotiated contract runs to
    pub contract_end: i64,
    pub salary_increase: i64,
}

/// Result of a completed buy or sell: the moved player and the club's
/// ledger after the debit/credit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferResponse {
    pub player_id: i64,
    pub ledger: Ledger,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractNegotiationResponse {
    pub player: Player,
    /// Ledger of the player's club after the wage expense was applied.
    /// `None` when no club was affected (unowned player, or no wage change).
    pub ledger: Option<Ledger>,
    pub success_message: String,
}

// ---------------------------------------------------------------------------
// Fixture requests/responses
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleFixtureRequest {
    pub home_club_id: i64,
    pub away_club_id: i64,
    /// YYYY-MM-DD; defaults to today when omitted
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureResponse {
    pub fixture: Fixture,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureListResponse {
    pub fixtures: Vec<Fixture>,
}

// ---------------------------------------------------------------------------
// League requests/responses
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateLeagueRequest {
    pub name: String,
    pub season: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateLeagueNameRequest {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateLeagueSeasonRequest {
    pub season: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueResponse {
    pub league: League,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueListResponse {
    pub leagues: Vec<League>,
}

// ---------------------------------------------------------------------------
// Settings requests/responses
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateSettingsRequest {
    pub difficulty: Option<String>,
    pub audio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsResponse {
    pub settings: Settings,
    pub success_message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unplayed_fixture_serializes_null_scores() {
        let fixture = Fixture {
            id: 1,
            home_club_id: 10,
            away_club_id: 20,
            date: "2026-03-14".to_string(),
            home_score: None,
            away_score: None,
        };

        assert!(!fixture.is_played());

        let json = serde_json::to_string(&fixture).unwrap();
        assert!(json.contains("\"home_score\":null"));

        let back: Fixture = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fixture);
    }

    #[test]
    fn fixture_with_both_scores_is_played() {
        let fixture = Fixture {
            id: 2,
            home_club_id: 10,
            away_club_id: 20,
            date: "2026-03-14".to_string(),
            home_score: Some(3),
            away_score: Some(1),
        };
        assert!(fixture.is_played());
    }

    #[test]
    fn open_ledger_request_defaults_totals_to_zero() {
        let request: OpenLedgerRequest =
            serde_json::from_str(r#"{"club_id": 7, "budget": 1000000}"#).unwrap();
        assert_eq!(request.revenue, 0);
        assert_eq!(request.expenses, 0);
    }
}

//! Fixture scheduling and match result generation.
//!
//! A fixture moves `Scheduled` -> `Played` exactly once through `simulate`;
//! the score write is guarded at the store so a played fixture can never be
//! overwritten by accident. Deliberate re-runs go through `resimulate`,
//! which is the only unguarded path.

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use rand::Rng;
use tracing::info;

use crate::domain::error::{DomainError, Entity};
use crate::storage::DbConnection;
use shared::{Fixture, FixtureListResponse, FixtureResponse, ScheduleFixtureRequest};

/// Highest number of goals either side can score in a simulation
pub const MAX_GOALS: i64 = 5;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone)]
pub struct MatchService {
    db: Arc<DbConnection>,
}

impl MatchService {
    pub fn new(db: Arc<DbConnection>) -> Self {
        Self { db }
    }

    /// Create a fixture with no score. The date defaults to today.
    pub async fn schedule(
        &self,
        request: ScheduleFixtureRequest,
    ) -> Result<FixtureResponse, DomainError> {
        info!(
            "Scheduling fixture: home={}, away={}, date={:?}",
            request.home_club_id, request.away_club_id, request.date
        );

        let home_ok = self.db.club_exists(request.home_club_id).await?;
        let away_ok = self.db.club_exists(request.away_club_id).await?;
        if !home_ok || !away_ok {
            return Err(DomainError::InvalidClubs {
                home_club_id: request.home_club_id,
                away_club_id: request.away_club_id,
            });
        }

        let date = match request.date {
            Some(date) => {
                NaiveDate::parse_from_str(&date, DATE_FORMAT).map_err(|_| {
                    DomainError::Validation(format!("Fixture date must be YYYY-MM-DD, got '{date}'"))
                })?;
                date
            }
            None => Local::now().date_naive().format(DATE_FORMAT).to_string(),
        };

        let id = self
            .db
            .add_fixture(request.home_club_id, request.away_club_id, &date)
            .await?;

        Ok(FixtureResponse {
            fixture: Fixture {
                id,
                home_club_id: request.home_club_id,
                away_club_id: request.away_club_id,
                date,
                home_score: None,
                away_score: None,
            },
            success_message: "Fixture scheduled successfully".to_string(),
        })
    }

    pub async fn get(&self, fixture_id: i64) -> Result<Fixture, DomainError> {
        self.db
            .get_fixture(fixture_id)
            .await?
            .ok_or(DomainError::NotFound { entity: Entity::Fixture, id: fixture_id })
    }

    /// All fixtures, optionally narrowed to played or unplayed ones
    pub async fn list(&self, played: Option<bool>) -> Result<FixtureListResponse, DomainError> {
        let fixtures = self
            .db
            .list_fixtures()
            .await?
            .into_iter()
            .filter(|fixture| played.map_or(true, |wanted| fixture.is_played() == wanted))
            .collect();
        Ok(FixtureListResponse { fixtures })
    }

    /// Generate and persist the final score for an unplayed fixture.
    /// A played fixture fails with `AlreadySimulated`; use `resimulate`
    /// for a deliberate re-run.
    pub async fn simulate(&self, fixture_id: i64) -> Result<FixtureResponse, DomainError> {
        let fixture = self.get(fixture_id).await?;
        if fixture.is_played() {
            return Err(DomainError::AlreadySimulated { fixture_id });
        }

        let (home_score, away_score) = draw_scoreline(&mut rand::thread_rng());

        // Guarded write: a concurrent simulation that got there first wins
        if !self
            .db
            .record_first_fixture_score(fixture_id, home_score, away_score)
            .await?
        {
            return Err(DomainError::AlreadySimulated { fixture_id });
        }

        info!("Fixture {} simulated: {} - {}", fixture_id, home_score, away_score);

        Ok(FixtureResponse {
            fixture: Fixture {
                home_score: Some(home_score),
                away_score: Some(away_score),
                ..fixture
            },
            success_message: format!("Match finished {} - {}", home_score, away_score),
        })
    }

    /// Explicitly re-run a fixture, overwriting any previous score
    pub async fn resimulate(&self, fixture_id: i64) -> Result<FixtureResponse, DomainError> {
        let fixture = self.get(fixture_id).await?;

        let (home_score, away_score) = draw_scoreline(&mut rand::thread_rng());
        self.db
            .record_fixture_score(fixture_id, home_score, away_score)
            .await?;

        info!(
            "Fixture {} re-simulated: {} - {}",
            fixture_id, home_score, away_score
        );

        Ok(FixtureResponse {
            fixture: Fixture {
                home_score: Some(home_score),
                away_score: Some(away_score),
                ..fixture
            },
            success_message: format!("Match re-run, finished {} - {}", home_score, away_score),
        })
    }

    /// Remove a fixture, played or not
    pub async fn delete(&self, fixture_id: i64) -> Result<(), DomainError> {
        info!("Deleting fixture {}", fixture_id);

        if !self.db.delete_fixture(fixture_id).await? {
            return Err(DomainError::NotFound { entity: Entity::Fixture, id: fixture_id });
        }
        Ok(())
    }
}

/// Both sides draw independently and uniformly from 0..=MAX_GOALS
fn draw_scoreline<R: Rng>(rng: &mut R) -> (i64, i64) {
    (rng.gen_range(0..=MAX_GOALS), rng.gen_range(0..=MAX_GOALS))
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup() -> (MatchService, Arc<DbConnection>) {
        let db = Arc::new(DbConnection::init_test().await.unwrap());
        (MatchService::new(db.clone()), db)
    }

    async fn seed_clubs(db: &DbConnection) -> (i64, i64) {
        let home = db.add_club("Home FC", "4-4-2", "balanced", None, None).await.unwrap();
        let away = db.add_club("Away FC", "4-3-3", "attacking", None, None).await.unwrap();
        (home, away)
    }

    #[tokio::test]
    async fn test_schedule_requires_existing_clubs() {
        let (service, db) = setup().await;
        let (home, _away) = seed_clubs(&db).await;

        let err = service
            .schedule(ScheduleFixtureRequest {
                home_club_id: home,
                away_club_id: 9999,
                date: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidClubs { away_club_id: 9999, .. }));
    }

    #[tokio::test]
    async fn test_schedule_defaults_to_today() {
        let (service, db) = setup().await;
        let (home, away) = seed_clubs(&db).await;

        let response = service
            .schedule(ScheduleFixtureRequest { home_club_id: home, away_club_id: away, date: None })
            .await
            .unwrap();

        let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
        assert_eq!(response.fixture.date, today);
        assert!(!response.fixture.is_played());
    }

    #[tokio::test]
    async fn test_schedule_rejects_malformed_dates() {
        let (service, db) = setup().await;
        let (home, away) = seed_clubs(&db).await;

        let err = service
            .schedule(ScheduleFixtureRequest {
                home_club_id: home,
                away_club_id: away,
                date: Some("15/08/2026".to_string()),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_simulate_scores_once_and_stays_stable() {
        let (service, db) = setup().await;
        let (home, away) = seed_clubs(&db).await;
        let fixture_id = service
            .schedule(ScheduleFixtureRequest {
                home_club_id: home,
                away_club_id: away,
                date: Some("2026-08-15".to_string()),
            })
            .await
            .unwrap()
            .fixture
            .id;

        let response = service.simulate(fixture_id).await.unwrap();
        let home_score = response.fixture.home_score.unwrap();
        let away_score = response.fixture.away_score.unwrap();
        assert!((0..=MAX_GOALS).contains(&home_score));
        assert!((0..=MAX_GOALS).contains(&away_score));

        // Reading the fixture back returns the same pair
        let stored = service.get(fixture_id).await.unwrap();
        assert_eq!(stored.home_score, Some(home_score));
        assert_eq!(stored.away_score, Some(away_score));

        // A second simulation is refused rather than silently overwriting
        let err = service.simulate(fixture_id).await.unwrap_err();
        assert!(matches!(err, DomainError::AlreadySimulated { .. }));
        let stored_again = service.get(fixture_id).await.unwrap();
        assert_eq!(stored_again.home_score, Some(home_score));
        assert_eq!(stored_again.away_score, Some(away_score));
    }

    #[tokio::test]
    async fn test_resimulate_is_the_explicit_overwrite_path() {
        let (service, db) = setup().await;
        let (home, away) = seed_clubs(&db).await;
        let fixture_id = service
            .schedule(ScheduleFixtureRequest {
                home_club_id: home,
                away_club_id: away,
                date: Some("2026-08-15".to_string()),
            })
            .await
            .unwrap()
            .fixture
            .id;

        service.simulate(fixture_id).await.unwrap();
        let response = service.resimulate(fixture_id).await.unwrap();
        assert!(response.fixture.is_played());

        let stored = service.get(fixture_id).await.unwrap();
        assert_eq!(stored.home_score, response.fixture.home_score);
        assert_eq!(stored.away_score, response.fixture.away_score);
    }

    #[tokio::test]
    async fn test_simulate_missing_fixture_is_not_found() {
        let (service, _db) = setup().await;

        let err = service.simulate(12345).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::NotFound { entity: Entity::Fixture, id: 12345 }
        ));
    }

    #[tokio::test]
    async fn test_delete_from_either_state() {
        let (service, db) = setup().await;
        let (home, away) = seed_clubs(&db).await;

        let scheduled = service
            .schedule(ScheduleFixtureRequest {
                home_club_id: home,
                away_club_id: away,
                date: Some("2026-08-15".to_string()),
            })
            .await
            .unwrap()
            .fixture
            .id;
        let played = service
            .schedule(ScheduleFixtureRequest {
                home_club_id: home,
                away_club_id: away,
                date: Some("2026-08-22".to_string()),
            })
            .await
            .unwrap()
            .fixture
            .id;
        service.simulate(played).await.unwrap();

        let unplayed = service.list(Some(false)).await.unwrap().fixtures;
        assert_eq!(unplayed.len(), 1);
        assert_eq!(unplayed[0].id, scheduled);
        let finished = service.list(Some(true)).await.unwrap().fixtures;
        assert_eq!(finished.len(), 1);
        assert_eq!(finished[0].id, played);

        service.delete(scheduled).await.unwrap();
        service.delete(played).await.unwrap();
        assert!(service.list(None).await.unwrap().fixtures.is_empty());

        let err = service.delete(scheduled).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[test]
    fn test_scorelines_cover_the_full_range_and_nothing_else() {
        let mut rng = rand::thread_rng();
        let mut home_seen = [false; (MAX_GOALS + 1) as usize];
        let mut away_seen = [false; (MAX_GOALS + 1) as usize];

        for _ in 0..10_000 {
            let (home, away) = draw_scoreline(&mut rng);
            assert!((0..=MAX_GOALS).contains(&home), "home score {home} out of range");
            assert!((0..=MAX_GOALS).contains(&away), "away score {away} out of range");
            home_seen[home as usize] = true;
            away_seen[away as usize] = true;
        }

        // Over 10k draws every value in 0..=5 shows up on both sides
        assert!(home_seen.iter().all(|seen| *seen));
        assert!(away_seen.iter().all(|seen| *seen));
    }
}

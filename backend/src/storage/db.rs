//! SQLite persistence for the football manager backend.
//!
//! All SQL lives here. Rows are deserialized into the shared typed records at
//! this boundary and nowhere else. Cross-entity mutations (player purchase and
//! sale) run inside a single transaction so a partial failure rolls back
//! instead of leaving a debit without a roster change.

use anyhow::Result;
use sqlx::sqlite::SqliteRow;
use sqlx::{migrate::MigrateDatabase, Row, Sqlite, SqlitePool};
use std::sync::Arc;

use crate::domain::error::{DomainError, Entity};
use shared::{Club, Fixture, League, Ledger, Player, Settings};

// The database URL for the production database
const DATABASE_URL: &str = "sqlite:football_manager.db";

const DEFAULT_COUNTRY: &str = "England";
const DEFAULT_DIVISION: &str = "Premier";
const DEFAULT_DIFFICULTY: &str = "normal";
const DEFAULT_AUDIO: &str = "on";

/// DbConnection manages database operations
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Create a new database connection
    pub async fn new(url: &str) -> Result<Self> {
        // Create database if it doesn't exist
        if !Sqlite::database_exists(url).await.unwrap_or(false) {
            Sqlite::create_database(url).await?
        }

        let pool = SqlitePool::connect(url).await?;
        Self::setup_schema(&pool).await?;

        Ok(Self { pool: Arc::new(pool) })
    }

    /// Initialize the standard database
    pub async fn init() -> Result<Self> {
        Self::new(DATABASE_URL).await
    }

    /// Initialize a test database with a unique name
    #[cfg(test)]
    pub async fn init_test() -> Result<Self> {
        // Generate a unique database name for tests
        let test_id = uuid::Uuid::new_v4().to_string();
        let db_url = format!("file:memdb_{}?mode=memory&cache=shared", test_id);

        Self::new(&db_url).await
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS clubs (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                formation TEXT NOT NULL,
                tactics TEXT NOT NULL,
                country TEXT NOT NULL DEFAULT 'England',
                division TEXT NOT NULL DEFAULT 'Premier'
            );
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS players (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                position TEXT NOT NULL,
                skills INTEGER NOT NULL,
                morale INTEGER NOT NULL,
                contract_end INTEGER NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS club_players (
                club_id INTEGER NOT NULL,
                player_id INTEGER NOT NULL,
                PRIMARY KEY (club_id, player_id),
                FOREIGN KEY (club_id) REFERENCES clubs (id) ON DELETE CASCADE,
                FOREIGN KEY (player_id) REFERENCES players (id) ON DELETE CASCADE
            );
            "#,
        )
        .execute(pool)
        .await?;

        // One owner per player, enforced by the store as well as the services
        sqlx::query(
            r#"
            CREATE UNIQUE INDEX IF NOT EXISTS idx_club_players_player
            ON club_players(player_id);
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS fixtures (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                home_club_id INTEGER NOT NULL,
                away_club_id INTEGER NOT NULL,
                date TEXT NOT NULL,
                home_score INTEGER,
                away_score INTEGER,
                FOREIGN KEY (home_club_id) REFERENCES clubs (id),
                FOREIGN KEY (away_club_id) REFERENCES clubs (id)
            );
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS leagues (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                season TEXT NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS ledgers (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                club_id INTEGER NOT NULL,
                budget INTEGER NOT NULL,
                revenue INTEGER NOT NULL DEFAULT 0,
                expenses INTEGER NOT NULL DEFAULT 0,
                FOREIGN KEY (club_id) REFERENCES clubs (id)
            );
            "#,
        )
        .execute(pool)
        .await?;

        // One ledger per club
        sqlx::query(
            r#"
            CREATE UNIQUE INDEX IF NOT EXISTS idx_ledgers_club
            ON ledgers(club_id);
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS settings (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                difficulty TEXT NOT NULL,
                audio TEXT NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query("INSERT OR IGNORE INTO settings (id, difficulty, audio) VALUES (1, ?, ?)")
            .bind(DEFAULT_DIFFICULTY)
            .bind(DEFAULT_AUDIO)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Get the underlying SQLite pool
    pub fn pool(&self) -> &SqlitePool {
        &*self.pool
    }

    // -----------------------------------------------------------------------
    // Club methods
    // -----------------------------------------------------------------------

    /// Insert a club and return its assigned id
    pub async fn add_club(
        &self,
        name: &str,
        formation: &str,
        tactics: &str,
        country: Option<&str>,
        division: Option<&str>,
    ) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO clubs (name, formation, tactics, country, division)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(name)
        .bind(formation)
        .bind(tactics)
        .bind(country.unwrap_or(DEFAULT_COUNTRY))
        .bind(division.unwrap_or(DEFAULT_DIVISION))
        .execute(&*self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn get_club(&self, club_id: i64) -> Result<Option<Club>> {
        let row = sqlx::query(
            "SELECT id, name, formation, tactics, country, division FROM clubs WHERE id = ?",
        )
        .bind(club_id)
        .fetch_optional(&*self.pool)
        .await?;

        Ok(row.map(|r| club_from_row(&r)))
    }

    pub async fn list_clubs(&self) -> Result<Vec<Club>> {
        let rows = sqlx::query(
            "SELECT id, name, formation, tactics, country, division FROM clubs ORDER BY name",
        )
        .fetch_all(&*self.pool)
        .await?;

        Ok(rows.iter().map(club_from_row).collect())
    }

    pub async fn club_exists(&self, club_id: i64) -> Result<bool> {
        let row = sqlx::query("SELECT id FROM clubs WHERE id = ?")
            .bind(club_id)
            .fetch_optional(&*self.pool)
            .await?;
        Ok(row.is_some())
    }

    pub async fn update_club_formation(&self, club_id: i64, formation: &str) -> Result<bool> {
        let result = sqlx::query("UPDATE clubs SET formation = ? WHERE id = ?")
            .bind(formation)
            .bind(club_id)
            .execute(&*self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn update_club_tactics(&self, club_id: i64, tactics: &str) -> Result<bool> {
        let result = sqlx::query("UPDATE clubs SET tactics = ? WHERE id = ?")
            .bind(tactics)
            .bind(club_id)
            .execute(&*self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a club and its roster links. Player records survive and become
    /// unowned; the club's ledger is not touched (closing it is a separate,
    /// explicit operation).
    pub async fn delete_club(&self, club_id: i64) -> Result<bool> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM club_players WHERE club_id = ?")
            .bind(club_id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM clubs WHERE id = ?")
            .bind(club_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Player methods
    // -----------------------------------------------------------------------

    pub async fn add_player(
        &self,
        name: &str,
        position: &str,
        skills: i64,
        morale: i64,
        contract_end: i64,
    ) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO players (name, position, skills, morale, contract_end)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(name)
        .bind(position)
        .bind(skills)
        .bind(morale)
        .bind(contract_end)
        .execute(&*self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn get_player(&self, player_id: i64) -> Result<Option<Player>> {
        let row = sqlx::query(
            "SELECT id, name, position, skills, morale, contract_end FROM players WHERE id = ?",
        )
        .bind(player_id)
        .fetch_optional(&*self.pool)
        .await?;

        Ok(row.map(|r| player_from_row(&r)))
    }

    pub async fn list_players(&self) -> Result<Vec<Player>> {
        let rows = sqlx::query(
            "SELECT id, name, position, skills, morale, contract_end FROM players ORDER BY name",
        )
        .fetch_all(&*self.pool)
        .await?;

        Ok(rows.iter().map(player_from_row).collect())
    }

    pub async fn update_player_skills(&self, player_id: i64, skills: i64) -> Result<bool> {
        let result = sqlx::query("UPDATE players SET skills = ? WHERE id = ?")
            .bind(skills)
            .bind(player_id)
            .execute(&*self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn update_player_morale(&self, player_id: i64, morale: i64) -> Result<bool> {
        let result = sqlx::query("UPDATE players SET morale = ? WHERE id = ?")
            .bind(morale)
            .bind(player_id)
            .execute(&*self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn update_player_contract(&self, player_id: i64, contract_end: i64) -> Result<bool> {
        let result = sqlx::query("UPDATE players SET contract_end = ? WHERE id = ?")
            .bind(contract_end)
            .bind(player_id)
            .execute(&*self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a player together with any roster link
    pub async fn delete_player(&self, player_id: i64) -> Result<bool> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM club_players WHERE player_id = ?")
            .bind(player_id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM players WHERE id = ?")
            .bind(player_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Roster methods
    // -----------------------------------------------------------------------

    /// The club currently owning a player, if any
    pub async fn owner_of_player(&self, player_id: i64) -> Result<Option<i64>> {
        let row = sqlx::query("SELECT club_id FROM club_players WHERE player_id = ?")
            .bind(player_id)
            .fetch_optional(&*self.pool)
            .await?;
        Ok(row.map(|r| r.get("club_id")))
    }

    pub async fn roster_of_club(&self, club_id: i64) -> Result<Vec<Player>> {
        let rows = sqlx::query(
            r#"
            SELECT p.id, p.name, p.position, p.skills, p.morale, p.contract_end
            FROM players p
            INNER JOIN club_players cp ON cp.player_id = p.id
            WHERE cp.club_id = ?
            ORDER BY p.name
            "#,
        )
        .bind(club_id)
        .fetch_all(&*self.pool)
        .await?;

        Ok(rows.iter().map(player_from_row).collect())
    }

    /// Players with no roster link at all
    pub async fn available_players(&self) -> Result<Vec<Player>> {
        let rows = sqlx::query(
            r#"
            SELECT p.id, p.name, p.position, p.skills, p.morale, p.contract_end
            FROM players p
            LEFT JOIN club_players cp ON cp.player_id = p.id
            WHERE cp.player_id IS NULL
            ORDER BY p.name
            "#,
        )
        .fetch_all(&*self.pool)
        .await?;

        Ok(rows.iter().map(player_from_row).collect())
    }

    // -----------------------------------------------------------------------
    // Ledger methods
    // -----------------------------------------------------------------------

    pub async fn insert_ledger(
        &self,
        club_id: i64,
        budget: i64,
        revenue: i64,
        expenses: i64,
    ) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO ledgers (club_id, budget, revenue, expenses)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(club_id)
        .bind(budget)
        .bind(revenue)
        .bind(expenses)
        .execute(&*self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn get_ledger(&self, club_id: i64) -> Result<Option<Ledger>> {
        let row = sqlx::query(
            "SELECT id, club_id, budget, revenue, expenses FROM ledgers WHERE club_id = ?",
        )
        .bind(club_id)
        .fetch_optional(&*self.pool)
        .await?;

        Ok(row.map(|r| ledger_from_row(&r)))
    }

    /// Administrative budget override; revenue and expense totals are untouched
    pub async fn update_ledger_budget(&self, club_id: i64, new_budget: i64) -> Result<bool> {
        let result = sqlx::query("UPDATE ledgers SET budget = ? WHERE club_id = ?")
            .bind(new_budget)
            .bind(club_id)
            .execute(&*self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Increment revenue and budget together in one statement, so concurrent
    /// callers on the same club serialize at the store.
    pub async fn credit_revenue(&self, club_id: i64, amount: i64) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE ledgers
            SET revenue = revenue + ?, budget = budget + ?
            WHERE club_id = ?
            "#,
        )
        .bind(amount)
        .bind(amount)
        .bind(club_id)
        .execute(&*self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Increment expenses and decrement budget together in one statement.
    /// With a floor configured, the update only applies while the resulting
    /// budget stays at or above it; the caller distinguishes a floored update
    /// from a missing ledger by re-reading.
    pub async fn charge_expense(
        &self,
        club_id: i64,
        amount: i64,
        floor: Option<i64>,
    ) -> Result<bool> {
        let result = match floor {
            Some(floor) => {
                sqlx::query(
                    r#"
                    UPDATE ledgers
                    SET expenses = expenses + ?, budget = budget - ?
                    WHERE club_id = ? AND budget - ? >= ?
                    "#,
                )
                .bind(amount)
                .bind(amount)
                .bind(club_id)
                .bind(amount)
                .bind(floor)
                .execute(&*self.pool)
                .await?
            }
            None => {
                sqlx::query(
                    r#"
                    UPDATE ledgers
                    SET expenses = expenses + ?, budget = budget - ?
                    WHERE club_id = ?
                    "#,
                )
                .bind(amount)
                .bind(amount)
                .bind(club_id)
                .execute(&*self.pool)
                .await?
            }
        };
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_ledger(&self, club_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM ledgers WHERE club_id = ?")
            .bind(club_id)
            .execute(&*self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Transfer methods (cross-entity, single transaction)
    // -----------------------------------------------------------------------

    /// Debit the buyer's budget and add the player to its roster as one
    /// atomic unit. Any failure after the debit rolls the debit back.
    pub async fn apply_player_purchase(
        &self,
        club_id: i64,
        player_id: i64,
        price: i64,
    ) -> Result<Ledger, DomainError> {
        let mut tx = self.pool.begin().await.map_err(to_storage_error)?;

        let ledger = sqlx::query(
            "SELECT id, club_id, budget, revenue, expenses FROM ledgers WHERE club_id = ?",
        )
        .bind(club_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(to_storage_error)?
        .map(|r| ledger_from_row(&r))
        .ok_or(DomainError::NotFound {
            entity: Entity::Ledger,
            id: club_id,
        })?;

        if ledger.budget < price {
            return Err(DomainError::InsufficientFunds {
                budget: ledger.budget,
                required: price,
            });
        }

        let player = sqlx::query("SELECT id FROM players WHERE id = ?")
            .bind(player_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(to_storage_error)?;
        if player.is_none() {
            return Err(DomainError::NotFound {
                entity: Entity::Player,
                id: player_id,
            });
        }

        let owner = sqlx::query("SELECT club_id FROM club_players WHERE player_id = ?")
            .bind(player_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(to_storage_error)?;
        if let Some(row) = owner {
            return Err(DomainError::PlayerAlreadyOwned {
                player_id,
                owner_club_id: row.get("club_id"),
            });
        }

        sqlx::query("UPDATE ledgers SET budget = budget - ? WHERE club_id = ?")
            .bind(price)
            .bind(club_id)
            .execute(&mut *tx)
            .await
            .map_err(to_storage_error)?;

        sqlx::query("INSERT INTO club_players (club_id, player_id) VALUES (?, ?)")
            .bind(club_id)
            .bind(player_id)
            .execute(&mut *tx)
            .await
            .map_err(to_storage_error)?;

        tx.commit().await.map_err(to_storage_error)?;

        Ok(Ledger {
            budget: ledger.budget - price,
            ..ledger
        })
    }

    /// Remove the player from the seller's roster and credit the sale price
    /// to its budget as one atomic unit. The price is capital, not revenue,
    /// so the revenue total is untouched.
    pub async fn apply_player_sale(
        &self,
        club_id: i64,
        player_id: i64,
        price: i64,
    ) -> Result<Ledger, DomainError> {
        let mut tx = self.pool.begin().await.map_err(to_storage_error)?;

        let removed = sqlx::query("DELETE FROM club_players WHERE club_id = ? AND player_id = ?")
            .bind(club_id)
            .bind(player_id)
            .execute(&mut *tx)
            .await
            .map_err(to_storage_error)?;
        if removed.rows_affected() == 0 {
            return Err(DomainError::NotOwned { player_id, club_id });
        }

        let updated = sqlx::query("UPDATE ledgers SET budget = budget + ? WHERE club_id = ?")
            .bind(price)
            .bind(club_id)
            .execute(&mut *tx)
            .await
            .map_err(to_storage_error)?;
        if updated.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                entity: Entity::Ledger,
                id: club_id,
            });
        }

        let ledger = sqlx::query(
            "SELECT id, club_id, budget, revenue, expenses FROM ledgers WHERE club_id = ?",
        )
        .bind(club_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(to_storage_error)?;

        tx.commit().await.map_err(to_storage_error)?;

        Ok(ledger_from_row(&ledger))
    }

    // -----------------------------------------------------------------------
    // Fixture methods
    // -----------------------------------------------------------------------

    pub async fn add_fixture(
        &self,
        home_club_id: i64,
        away_club_id: i64,
        date: &str,
    ) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO fixtures (home_club_id, away_club_id, date)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(home_club_id)
        .bind(away_club_id)
        .bind(date)
        .execute(&*self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn get_fixture(&self, fixture_id: i64) -> Result<Option<Fixture>> {
        let row = sqlx::query(
            r#"
            SELECT id, home_club_id, away_club_id, date, home_score, away_score
            FROM fixtures
            WHERE id = ?
            "#,
        )
        .bind(fixture_id)
        .fetch_optional(&*self.pool)
        .await?;

        Ok(row.map(|r| fixture_from_row(&r)))
    }

    pub async fn list_fixtures(&self) -> Result<Vec<Fixture>> {
        let rows = sqlx::query(
            r#"
            SELECT id, home_club_id, away_club_id, date, home_score, away_score
            FROM fixtures
            ORDER BY date, id
            "#,
        )
        .fetch_all(&*self.pool)
        .await?;

        Ok(rows.iter().map(fixture_from_row).collect())
    }

    /// Write the score only if the fixture has not been played yet.
    /// Returns false when the fixture is missing or already scored.
    pub async fn record_first_fixture_score(
        &self,
        fixture_id: i64,
        home_score: i64,
        away_score: i64,
    ) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE fixtures
            SET home_score = ?, away_score = ?
            WHERE id = ? AND home_score IS NULL AND away_score IS NULL
            "#,
        )
        .bind(home_score)
        .bind(away_score)
        .bind(fixture_id)
        .execute(&*self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Overwrite the score unconditionally (explicit re-simulation)
    pub async fn record_fixture_score(
        &self,
        fixture_id: i64,
        home_score: i64,
        away_score: i64,
    ) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE fixtures
            SET home_score = ?, away_score = ?
            WHERE id = ?
            "#,
        )
        .bind(home_score)
        .bind(away_score)
        .bind(fixture_id)
        .execute(&*self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_fixture(&self, fixture_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM fixtures WHERE id = ?")
            .bind(fixture_id)
            .execute(&*self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // League methods
    // -----------------------------------------------------------------------

    pub async fn add_league(&self, name: &str, season: &str) -> Result<i64> {
        let result = sqlx::query("INSERT INTO leagues (name, season) VALUES (?, ?)")
            .bind(name)
            .bind(season)
            .execute(&*self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn get_league(&self, league_id: i64) -> Result<Option<League>> {
        let row = sqlx::query("SELECT id, name, season FROM leagues WHERE id = ?")
            .bind(league_id)
            .fetch_optional(&*self.pool)
            .await?;

        Ok(row.map(|r| league_from_row(&r)))
    }

    pub async fn list_leagues(&self) -> Result<Vec<League>> {
        let rows = sqlx::query("SELECT id, name, season FROM leagues ORDER BY name")
            .fetch_all(&*self.pool)
            .await?;

        Ok(rows.iter().map(league_from_row).collect())
    }

    pub async fn update_league_name(&self, league_id: i64, name: &str) -> Result<bool> {
        let result = sqlx::query("UPDATE leagues SET name = ? WHERE id = ?")
            .bind(name)
            .bind(league_id)
            .execute(&*self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn update_league_season(&self, league_id: i64, season: &str) -> Result<bool> {
        let result = sqlx::query("UPDATE leagues SET season = ? WHERE id = ?")
            .bind(season)
            .bind(league_id)
            .execute(&*self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_league(&self, league_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM leagues WHERE id = ?")
            .bind(league_id)
            .execute(&*self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Settings methods
    // -----------------------------------------------------------------------

    pub async fn get_settings(&self) -> Result<Settings> {
        let row = sqlx::query("SELECT difficulty, audio FROM settings WHERE id = 1")
            .fetch_one(&*self.pool)
            .await?;

        Ok(Settings {
            difficulty: row.get("difficulty"),
            audio: row.get("audio"),
        })
    }

    pub async fn update_settings(&self, settings: &Settings) -> Result<()> {
        sqlx::query("UPDATE settings SET difficulty = ?, audio = ? WHERE id = 1")
            .bind(&settings.difficulty)
            .bind(&settings.audio)
            .execute(&*self.pool)
            .await?;
        Ok(())
    }
}

fn to_storage_error(err: sqlx::Error) -> DomainError {
    DomainError::Storage(err.into())
}

fn club_from_row(row: &SqliteRow) -> Club {
    Club {
        id: row.get("id"),
        name: row.get("name"),
        formation: row.get("formation"),
        tactics: row.get("tactics"),
        country: row.get("country"),
        division: row.get("division"),
    }
}

fn player_from_row(row: &SqliteRow) -> Player {
    Player {
        id: row.get("id"),
        name: row.get("name"),
        position: row.get("position"),
        skills: row.get("skills"),
        morale: row.get("morale"),
        contract_end: row.get("contract_end"),
    }
}

fn ledger_from_row(row: &SqliteRow) -> Ledger {
    Ledger {
        id: row.get("id"),
        club_id: row.get("club_id"),
        budget: row.get("budget"),
        revenue: row.get("revenue"),
        expenses: row.get("expenses"),
    }
}

fn fixture_from_row(row: &SqliteRow) -> Fixture {
    Fixture {
        id: row.get("id"),
        home_club_id: row.get("home_club_id"),
        away_club_id: row.get("away_club_id"),
        date: row.get("date"),
        home_score: row.get("home_score"),
        away_score: row.get("away_score"),
    }
}

fn league_from_row(row: &SqliteRow) -> League {
    League {
        id: row.get("id"),
        name: row.get("name"),
        season: row.get("season"),
    }
}

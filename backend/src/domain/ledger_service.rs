//! Club finance service.
//!
//! Owns the per-club budget/revenue/expense record and keeps
//! `budget == initial_budget + revenue - expenses` true under every mutation.
//! The only way out of that invariant is the administrative `set_budget`
//! override, which exists for initialization and corrections.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::error::{DomainError, Entity};
use crate::storage::DbConnection;
use shared::{AddExpenseRequest, AddRevenueRequest, Ledger, LedgerResponse, OpenLedgerRequest, SetBudgetRequest};

#[derive(Clone)]
pub struct LedgerService {
    db: Arc<DbConnection>,
    /// Lowest budget an expense may leave behind. `None` keeps budgets
    /// unconstrained below zero, matching the historical behavior.
    budget_floor: Option<i64>,
}

impl LedgerService {
    pub fn new(db: Arc<DbConnection>) -> Self {
        Self { db, budget_floor: None }
    }

    pub fn with_budget_floor(db: Arc<DbConnection>, floor: i64) -> Self {
        Self { db, budget_floor: Some(floor) }
    }

    /// Open a ledger for a club. Each club has at most one.
    pub async fn open(&self, request: OpenLedgerRequest) -> Result<LedgerResponse, DomainError> {
        info!(
            "Opening ledger for club {}: budget={}, revenue={}, expenses={}",
            request.club_id, request.budget, request.revenue, request.expenses
        );

        if request.revenue < 0 || request.expenses < 0 {
            return Err(DomainError::Validation(
                "Revenue and expense totals cannot be negative".to_string(),
            ));
        }

        if self.db.get_ledger(request.club_id).await?.is_some() {
            warn!("Ledger already exists for club {}", request.club_id);
            return Err(DomainError::AlreadyExists { club_id: request.club_id });
        }

        let id = self
            .db
            .insert_ledger(request.club_id, request.budget, request.revenue, request.expenses)
            .await?;

        Ok(LedgerResponse {
            ledger: Ledger {
                id,
                club_id: request.club_id,
                budget: request.budget,
                revenue: request.revenue,
                expenses: request.expenses,
            },
            success_message: "Ledger opened successfully".to_string(),
        })
    }

    /// Current ledger snapshot for a club
    pub async fn get(&self, club_id: i64) -> Result<Ledger, DomainError> {
        self.db
            .get_ledger(club_id)
            .await?
            .ok_or(DomainError::NotFound { entity: Entity::Ledger, id: club_id })
    }

    /// Administrative budget override. Revenue and expense totals keep their
    /// values, so after this call the budget is no longer derivable from
    /// them; intended for initialization and corrections only.
    pub async fn set_budget(
        &self,
        club_id: i64,
        request: SetBudgetRequest,
    ) -> Result<LedgerResponse, DomainError> {
        warn!("Overriding budget for club {} to {}", club_id, request.budget);

        if !self.db.update_ledger_budget(club_id, request.budget).await? {
            return Err(DomainError::NotFound { entity: Entity::Ledger, id: club_id });
        }

        let ledger = self.get(club_id).await?;
        Ok(LedgerResponse {
            ledger,
            success_message: "Budget updated successfully".to_string(),
        })
    }

    /// Record income: revenue and budget both grow by `amount`
    pub async fn add_revenue(
        &self,
        club_id: i64,
        request: AddRevenueRequest,
    ) -> Result<LedgerResponse, DomainError> {
        if request.amount <= 0 {
            return Err(DomainError::Validation(
                "Revenue amount must be positive".to_string(),
            ));
        }

        if !self.db.credit_revenue(club_id, request.amount).await? {
            return Err(DomainError::NotFound { entity: Entity::Ledger, id: club_id });
        }

        let ledger = self.get(club_id).await?;
        info!(
            "Revenue for club {} increased by {}. New budget: {}",
            club_id, request.amount, ledger.budget
        );
        Ok(LedgerResponse {
            ledger,
            success_message: "Revenue recorded successfully".to_string(),
        })
    }

    /// Record an operating cost: expenses grow and budget shrinks by
    /// `amount`. With no floor configured the budget may overdraw.
    pub async fn add_expense(
        &self,
        club_id: i64,
        request: AddExpenseRequest,
    ) -> Result<LedgerResponse, DomainError> {
        if request.amount <= 0 {
            return Err(DomainError::Validation(
                "Expense amount must be positive".to_string(),
            ));
        }

        if !self.db.charge_expense(club_id, request.amount, self.budget_floor).await? {
            // The update applies to nothing either because the ledger is
            // missing or because the configured floor rejected it.
            return match self.db.get_ledger(club_id).await? {
                None => Err(DomainError::NotFound { entity: Entity::Ledger, id: club_id }),
                Some(ledger) => Err(DomainError::InsufficientFunds {
                    budget: ledger.budget,
                    required: request.amount,
                }),
            };
        }

        let ledger = self.get(club_id).await?;
        info!(
            "Expenses for club {} increased by {}. New budget: {}",
            club_id, request.amount, ledger.budget
        );
        Ok(LedgerResponse {
            ledger,
            success_message: "Expense recorded successfully".to_string(),
        })
    }

    /// Delete the ledger permanently
    pub async fn close(&self, club_id: i64) -> Result<(), DomainError> {
        info!("Closing ledger for club {}", club_id);

        if !self.db.delete_ledger(club_id).await? {
            return Err(DomainError::NotFound { entity: Entity::Ledger, id: club_id });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup() -> (LedgerService, Arc<DbConnection>, i64) {
        let db = Arc::new(DbConnection::init_test().await.unwrap());
        let club_id = db
            .add_club("Test FC", "4-4-2", "balanced", None, None)
            .await
            .unwrap();
        (LedgerService::new(db.clone()), db, club_id)
    }

    fn open_request(club_id: i64, budget: i64) -> OpenLedgerRequest {
        OpenLedgerRequest { club_id, budget, revenue: 0, expenses: 0 }
    }

    #[tokio::test]
    async fn test_open_is_unique_per_club() {
        let (service, _db, club_id) = setup().await;

        let response = service.open(open_request(club_id, 1_000_000)).await.unwrap();
        assert_eq!(response.ledger.budget, 1_000_000);

        let err = service.open(open_request(club_id, 5)).await.unwrap_err();
        assert!(matches!(err, DomainError::AlreadyExists { .. }));
    }

    #[tokio::test]
    async fn test_get_missing_ledger_is_not_found() {
        let (service, _db, club_id) = setup().await;

        let err = service.get(club_id).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::NotFound { entity: Entity::Ledger, .. }
        ));
    }

    #[tokio::test]
    async fn test_budget_tracks_revenue_minus_expenses() {
        let (service, _db, club_id) = setup().await;
        let initial = 1_000_000;
        service.open(open_request(club_id, initial)).await.unwrap();

        service.add_revenue(club_id, AddRevenueRequest { amount: 250_000 }).await.unwrap();
        service.add_expense(club_id, AddExpenseRequest { amount: 40_000 }).await.unwrap();
        service.add_revenue(club_id, AddRevenueRequest { amount: 10_000 }).await.unwrap();
        service.add_expense(club_id, AddExpenseRequest { amount: 300_000 }).await.unwrap();

        let ledger = service.get(club_id).await.unwrap();
        assert_eq!(ledger.revenue, 260_000);
        assert_eq!(ledger.expenses, 340_000);
        assert_eq!(ledger.budget, initial + ledger.revenue - ledger.expenses);
    }

    #[tokio::test]
    async fn test_amounts_must_be_positive() {
        let (service, _db, club_id) = setup().await;
        service.open(open_request(club_id, 100)).await.unwrap();

        let err = service
            .add_revenue(club_id, AddRevenueRequest { amount: 0 })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let err = service
            .add_expense(club_id, AddExpenseRequest { amount: -5 })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        // Nothing moved
        let ledger = service.get(club_id).await.unwrap();
        assert_eq!(ledger.budget, 100);
    }

    #[tokio::test]
    async fn test_expense_overdraws_without_floor() {
        let (service, _db, club_id) = setup().await;
        service.open(open_request(club_id, 100)).await.unwrap();

        let response = service
            .add_expense(club_id, AddExpenseRequest { amount: 500 })
            .await
            .unwrap();
        assert_eq!(response.ledger.budget, -400);
    }

    #[tokio::test]
    async fn test_expense_rejected_below_configured_floor() {
        let db = Arc::new(DbConnection::init_test().await.unwrap());
        let club_id = db.add_club("Floored FC", "4-4-2", "balanced", None, None).await.unwrap();
        let service = LedgerService::with_budget_floor(db, 0);
        service.open(open_request(club_id, 100)).await.unwrap();

        let err = service
            .add_expense(club_id, AddExpenseRequest { amount: 500 })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InsufficientFunds { budget: 100, required: 500 }));

        // Within the floor the charge still applies
        let response = service
            .add_expense(club_id, AddExpenseRequest { amount: 100 })
            .await
            .unwrap();
        assert_eq!(response.ledger.budget, 0);
    }

    #[tokio::test]
    async fn test_set_budget_leaves_totals_alone() {
        let (service, _db, club_id) = setup().await;
        service.open(open_request(club_id, 1_000)).await.unwrap();
        service.add_revenue(club_id, AddRevenueRequest { amount: 500 }).await.unwrap();

        let response = service
            .set_budget(club_id, SetBudgetRequest { budget: 9_999 })
            .await
            .unwrap();
        assert_eq!(response.ledger.budget, 9_999);
        assert_eq!(response.ledger.revenue, 500);
        assert_eq!(response.ledger.expenses, 0);
    }

    #[tokio::test]
    async fn test_close_then_everything_is_not_found() {
        let (service, _db, club_id) = setup().await;
        service.open(open_request(club_id, 1_000)).await.unwrap();

        service.close(club_id).await.unwrap();

        assert!(matches!(service.get(club_id).await.unwrap_err(), DomainError::NotFound { .. }));
        assert!(matches!(service.close(club_id).await.unwrap_err(), DomainError::NotFound { .. }));
        let err = service
            .add_revenue(club_id, AddRevenueRequest { amount: 10 })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}

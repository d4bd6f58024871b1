//! Player transfer service.
//!
//! Moves players between "unowned" and a club's roster, always paired with
//! the matching ledger mutation. A purchase debits the buyer and assigns the
//! player in one storage transaction; a sale removes the player and credits
//! the seller the same way, so no half-applied transfer can be observed.
//! Purchase and sale prices are capital movements, not revenue/expenses.

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tracing::info;

use crate::domain::error::{DomainError, Entity};
use crate::domain::ledger_service::LedgerService;
use crate::storage::DbConnection;
use shared::{
    AddExpenseRequest, BuyPlayerRequest, ContractNegotiationResponse, NegotiateContractRequest,
    Player, PlayerListResponse, SellPlayerRequest, TransferResponse,
};

#[derive(Clone)]
pub struct TransferService {
    db: Arc<DbConnection>,
    ledger_service: LedgerService,
    /// Last date on which transfers may still be concluded. `None` keeps the
    /// window open all year.
    transfer_deadline: Option<NaiveDate>,
}

impl TransferService {
    pub fn new(db: Arc<DbConnection>, ledger_service: LedgerService) -> Self {
        Self {
            db,
            ledger_service,
            transfer_deadline: None,
        }
    }

    pub fn with_deadline(
        db: Arc<DbConnection>,
        ledger_service: LedgerService,
        deadline: NaiveDate,
    ) -> Self {
        Self {
            db,
            ledger_service,
            transfer_deadline: Some(deadline),
        }
    }

    /// Whether the transfer window is closed on the given date
    pub fn window_closed_on(&self, date: NaiveDate) -> bool {
        matches!(self.transfer_deadline, Some(deadline) if date > deadline)
    }

    fn check_window(&self) -> Result<(), DomainError> {
        if let Some(deadline) = self.transfer_deadline {
            if Local::now().date_naive() > deadline {
                return Err(DomainError::DeadlinePassed {
                    deadline: deadline.format("%Y-%m-%d").to_string(),
                });
            }
        }
        Ok(())
    }

    /// Buy an unowned player for the given club
    pub async fn buy(&self, request: BuyPlayerRequest) -> Result<TransferResponse, DomainError> {
        info!(
            "Club {} buying player {} for {}",
            request.club_id, request.player_id, request.price
        );

        self.check_window()?;
        if request.price < 0 {
            return Err(DomainError::Validation(
                "Purchase price cannot be negative".to_string(),
            ));
        }

        let ledger = self
            .db
            .apply_player_purchase(request.club_id, request.player_id, request.price)
            .await?;

        Ok(TransferResponse {
            player_id: request.player_id,
            ledger,
            success_message: format!(
                "Player {} bought for {}",
                request.player_id, request.price
            ),
        })
    }

    /// Sell a player off the given club's roster; the player becomes unowned
    pub async fn sell(&self, request: SellPlayerRequest) -> Result<TransferResponse, DomainError> {
        info!(
            "Club {} selling player {} for {}",
            request.club_id, request.player_id, request.price
        );

        self.check_window()?;
        if request.price < 0 {
            return Err(DomainError::Validation(
                "Sale price cannot be negative".to_string(),
            ));
        }

        let ledger = self
            .db
            .apply_player_sale(request.club_id, request.player_id, request.price)
            .await?;

        Ok(TransferResponse {
            player_id: request.player_id,
            ledger,
            success_message: format!("Player {} sold for {}", request.player_id, request.price),
        })
    }

    /// Extend a player's contract. When the player is owned, the salary
    /// increase lands on the owning club as a wage expense.
    pub async fn negotiate_contract(
        &self,
        request: NegotiateContractRequest,
    ) -> Result<ContractNegotiationResponse, DomainError> {
        info!(
            "Negotiating contract for player {}: end={}, salary increase={}",
            request.player_id, request.contract_end, request.salary_increase
        );

        if request.salary_increase < 0 {
            return Err(DomainError::Validation(
                "Salary increase cannot be negative".to_string(),
            ));
        }

        let player = self
            .db
            .get_player(request.player_id)
            .await?
            .ok_or(DomainError::NotFound { entity: Entity::Player, id: request.player_id })?;

        self.db
            .update_player_contract(request.player_id, request.contract_end)
            .await?;

        let owner = self.db.owner_of_player(request.player_id).await?;
        let ledger = match owner {
            Some(club_id) if request.salary_increase > 0 => {
                let response = self
                    .ledger_service
                    .add_expense(club_id, AddExpenseRequest { amount: request.salary_increase })
                    .await?;
                Some(response.ledger)
            }
            _ => None,
        };

        let message = match &ledger {
            Some(ledger) => format!(
                "Contract extended to {}; wages charged to club {}",
                request.contract_end, ledger.club_id
            ),
            None => format!("Contract extended to {}; no club affected", request.contract_end),
        };

        Ok(ContractNegotiationResponse {
            player: Player {
                contract_end: request.contract_end,
                ..player
            },
            ledger,
            success_message: message,
        })
    }

    /// All players with no current club
    pub async fn list_available(&self) -> Result<PlayerListResponse, DomainError> {
        let players = self.db.available_players().await?;
        info!("Found {} available players", players.len());
        Ok(PlayerListResponse { players })
    }
}

//! The ledger: the only place the persisted state is mutated.
//!
//! Every successful [`Ledger::record_action`] appends one entry to the day's
//! log, bumps the streak, and saves. If the save fails the in-memory state
//! keeps the new entry and the error is returned to the caller.

use jiff::civil::Date;

use crate::model::{ActionEntry, LedgerState};
use crate::storage::{Store, StoreError};

/// Errors returned by ledger operations.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("action name must not be empty")]
    EmptyName,

    #[error("quantity must not be negative, got {0}")]
    NegativeQuantity(i64),

    #[error("quantity must be a whole number, got '{0}'")]
    InvalidQuantity(String),

    #[error("quantity {quantity} would overflow the points total for {date}")]
    QuantityTooLarge { quantity: u64, date: Date },

    #[error("streak counter is at its maximum")]
    StreakOverflow,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl LedgerError {
    /// Whether the caller supplied bad input, as opposed to a storage failure.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::EmptyName
                | Self::NegativeQuantity(_)
                | Self::InvalidQuantity(_)
                | Self::QuantityTooLarge { .. }
        )
    }
}

pub type Result<T> = core::result::Result<T, LedgerError>;

/// Owns the live state and the store it is persisted to.
#[derive(Debug)]
pub struct Ledger {
    state: LedgerState,
    store: Store,
}

impl Ledger {
    /// Loads the state from `store` and takes ownership of both.
    pub fn open(store: Store) -> Result<Self> {
        let state = store.load()?;
        Ok(Self { state, store })
    }

    /// Records an action on `today` and persists the new state.
    ///
    /// Points are derived from the quantity. The streak goes up by one on
    /// every call, even when `today` already had entries.
    ///
    /// Fails without touching the state if the day's points total or the
    /// streak would overflow.
    pub fn record_action(
        &mut self,
        name: &str,
        quantity: i64,
        today: Date,
    ) -> Result<ActionEntry> {
        if name.is_empty() {
            return Err(LedgerError::EmptyName);
        }
        let quantity =
            u64::try_from(quantity).map_err(|_| LedgerError::NegativeQuantity(quantity))?;

        let entry = ActionEntry::new(name, quantity);
        if self
            .state
            .points_on(today)
            .checked_add(entry.points)
            .is_none()
        {
            return Err(LedgerError::QuantityTooLarge {
                quantity,
                date: today,
            });
        }
        let streak = self
            .state
            .streak
            .checked_add(1)
            .ok_or(LedgerError::StreakOverflow)?;

        self.state
            .daily_log
            .entry(today)
            .or_default()
            .push(entry.clone());
        self.state.streak = streak;

        tracing::debug!(
            %today,
            name,
            quantity,
            points = entry.points,
            streak = self.state.streak,
            "recorded action"
        );

        if let Err(e) = self.store.save(&self.state) {
            tracing::warn!(
                path = %self.store.path().display(),
                error = %e,
                "failed to save after recording action"
            );
            return Err(e.into());
        }
        Ok(entry)
    }

    /// Total points recorded on `date`; zero when nothing was recorded.
    pub fn points_for_date(&self, date: Date) -> u64 {
        self.state.points_on(date)
    }

    pub fn current_streak(&self) -> u64 {
        self.state.streak
    }

    /// Read-only view of the live state, for display and reporting.
    pub fn state(&self) -> &LedgerState {
        &self.state
    }
}

/// Parses a quantity typed by the user: ASCII digits only.
pub fn parse_quantity(input: &str) -> Result<i64> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LedgerError::InvalidQuantity(input.to_string()));
    }
    trimmed
        .parse()
        .map_err(|_| LedgerError::InvalidQuantity(input.to_string()))
}

//! Error types for game operations.

use thiserror::Error;

use crate::card::Card;
use crate::strategy::HandAction;

/// Errors that can occur while placing or changing a wager.
///
/// [`WagerError::InsufficientBankroll`] is the routine, recoverable case: the
/// caller clamps the amount, skips the option, or asks again.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum WagerError {
    /// The amount exceeds the available bankroll.
    #[error("insufficient bankroll: requested {requested}, available {available}")]
    InsufficientBankroll {
        /// The amount that was requested.
        requested: f64,
        /// The bankroll at the time of the request.
        available: f64,
    },
    /// The amount is negative or not a finite number.
    #[error("invalid wager amount: {0}")]
    InvalidAmount(f64),
    /// Insurance has already been placed this turn.
    #[error("insurance already placed this turn")]
    InsuranceAlreadyPlaced,
    /// The hand the wager targets does not exist.
    #[error("hand {0} not found")]
    HandNotFound(usize),
    /// The bankroll went negative despite the debit guard.
    #[error("bankroll cannot go negative (bankroll {0})")]
    Overdraft(f64),
}

impl WagerError {
    /// Returns whether the error is a routine shortfall rather than a fault.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::InsufficientBankroll { .. })
    }
}

/// Fatal errors raised by the turn controller.
///
/// These indicate a broken contract or an internal inconsistency, never a
/// player-facing condition, and end the run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    /// The decision source chose an action that was not offered.
    #[error("unhandled action {action:?} (offered {offered:?})")]
    UnhandledAction {
        /// The action returned by the decision source.
        action: HandAction,
        /// The actions that were offered.
        offered: Vec<HandAction>,
    },
    /// A hand that must exist in the current phase is missing.
    #[error("missing {0} hand")]
    MissingHand(&'static str),
    /// A wager that was validated beforehand failed.
    #[error("wager invariant violated: {0}")]
    Wager(#[from] WagerError),
}

/// Errors that can occur when arranging the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// The requested card is not in the pile.
    #[error("card {0} is not in the pile")]
    CardUnavailable(Card),
}

//! Settlement and per-turn result types.

use core::fmt;

use crate::game::TurnEvent;
use crate::hand::{GamblerHand, HandStatus};

/// Result of a single gambler hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandOutcome {
    /// The hand beat the dealer.
    Win,
    /// The hand lost its wager.
    Loss,
    /// Tie; the wager is returned.
    Push,
    /// A blackjack facing a dealer Ace took an immediate 1:1 payout.
    EvenMoney,
    /// The insurance side bet won; the hand wager is forfeited.
    InsuranceWin,
}

impl fmt::Display for HandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Win => "Win",
            Self::Loss => "Loss",
            Self::Push => "Push",
            Self::EvenMoney => "Even Money",
            Self::InsuranceWin => "Insurance Win",
        };
        f.write_str(name)
    }
}

/// Payout odds. Only the three fixed schedules of the game exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Odds {
    /// 1:1, a regular win or even money.
    OneToOne,
    /// 3:2, a natural blackjack.
    ThreeToTwo,
    /// 2:1, a winning insurance bet.
    TwoToOne,
}

impl Odds {
    /// Profit paid on `stake`, not including the stake itself.
    #[must_use]
    pub fn profit(self, stake: f64) -> f64 {
        match self {
            Self::OneToOne => stake,
            Self::ThreeToTwo => stake * 1.5,
            Self::TwoToOne => stake * 2.0,
        }
    }

    /// Profit plus the returned stake.
    #[must_use]
    pub fn payout(self, stake: f64) -> f64 {
        self.profit(stake) + stake
    }
}

impl fmt::Display for Odds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let odds = match self {
            Self::OneToOne => "1:1",
            Self::ThreeToTwo => "3:2",
            Self::TwoToOne => "2:1",
        };
        f.write_str(odds)
    }
}

/// Final state of one gambler hand in a turn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandReport {
    /// The hand number.
    pub number: usize,
    /// The hand's final status.
    pub status: HandStatus,
    /// The settled outcome.
    pub outcome: Option<HandOutcome>,
    /// The hand's final total.
    pub total: u8,
    /// The wager on the hand.
    pub wager: f64,
    /// The insurance stake on the hand.
    pub insurance: f64,
    /// Everything paid back on the hand.
    pub earnings: f64,
}

impl From<&GamblerHand> for HandReport {
    fn from(hand: &GamblerHand) -> Self {
        Self {
            number: hand.number(),
            status: hand.status(),
            outcome: hand.outcome(),
            total: hand.final_total(),
            wager: hand.wager(),
            insurance: hand.insurance(),
            earnings: hand.earnings(),
        }
    }
}

impl HandReport {
    /// Net result of the hand.
    #[must_use]
    pub fn net(&self) -> f64 {
        self.earnings - self.wager - self.insurance
    }
}

/// Everything a finished turn reports to a metrics sink.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnReport {
    /// The turn number, starting at 1.
    pub turn: u32,
    /// Every gambler hand, in play order.
    pub hands: Vec<HandReport>,
    /// The dealer's final hand status.
    pub dealer_status: HandStatus,
    /// The dealer's final total.
    pub dealer_total: u8,
    /// Whether the dealer had blackjack.
    pub dealer_blackjack: bool,
    /// The gambler's bankroll after settlement.
    pub bankroll: f64,
    /// The turn's activity log, in order.
    pub events: Vec<TurnEvent>,
}

impl TurnReport {
    /// Net result of the turn across every hand.
    #[must_use]
    pub fn net(&self) -> f64 {
        self.hands.iter().map(HandReport::net).sum()
    }
}

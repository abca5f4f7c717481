//! Per-turn metrics and multi-game summaries.

use core::fmt;

use crate::hand::HandStatus;
use crate::result::{HandOutcome, TurnReport};

/// Receives one report per finished turn.
pub trait MetricsSink {
    /// Called once before the first turn with the starting bankroll.
    fn record_start(&mut self, bankroll: f64) {
        let _ = bankroll;
    }

    /// Called after every finished turn.
    fn record_turn(&mut self, report: &TurnReport);
}

/// Discards every report.
impl MetricsSink for () {
    fn record_turn(&mut self, _report: &TurnReport) {}
}

/// Keeps every report.
impl MetricsSink for Vec<TurnReport> {
    fn record_turn(&mut self, report: &TurnReport) {
        self.push(report.clone());
    }
}

/// Outcome counters and the bankroll over time for one game.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricTracker {
    /// Hands won, even money included.
    pub wins: u32,
    /// Hands lost.
    pub losses: u32,
    /// Hands pushed.
    pub pushes: u32,
    /// Hands settled by a winning insurance bet.
    pub insurance_wins: u32,
    /// Gambler hands with blackjack status.
    pub gambler_blackjacks: u32,
    /// Dealer blackjacks.
    pub dealer_blackjacks: u32,
    /// Bankroll at the start, then after every turn.
    pub bankroll_progression: Vec<f64>,
}

impl MetricTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of settled hands.
    #[must_use]
    pub const fn hands(&self) -> u32 {
        self.wins + self.losses + self.pushes + self.insurance_wins
    }

    /// Bankroll after the last recorded turn.
    #[must_use]
    pub fn final_bankroll(&self) -> Option<f64> {
        self.bankroll_progression.last().copied()
    }

    fn record_outcome(&mut self, outcome: HandOutcome) {
        match outcome {
            HandOutcome::Win | HandOutcome::EvenMoney => self.wins += 1,
            HandOutcome::Loss => self.losses += 1,
            HandOutcome::Push => self.pushes += 1,
            HandOutcome::InsuranceWin => self.insurance_wins += 1,
        }
    }
}

impl MetricsSink for MetricTracker {
    fn record_start(&mut self, bankroll: f64) {
        self.bankroll_progression.push(bankroll);
    }

    fn record_turn(&mut self, report: &TurnReport) {
        for hand in &report.hands {
            if hand.status == HandStatus::Blackjack {
                self.gambler_blackjacks += 1;
            }
            match hand.outcome {
                Some(outcome) => self.record_outcome(outcome),
                None => log::warn!("turn {}: hand {} was never settled", report.turn, hand.number),
            }
        }
        if report.dealer_blackjack {
            self.dealer_blackjacks += 1;
        }
        self.bankroll_progression.push(report.bankroll);
    }
}

/// Aggregate results of many games played from the same starting bankroll.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Number of games.
    pub games: usize,
    /// Starting bankroll of every game.
    pub initial_bankroll: f64,
    /// Hands won, even money included.
    pub wins: u32,
    /// Hands lost.
    pub losses: u32,
    /// Hands pushed.
    pub pushes: u32,
    /// Hands settled by a winning insurance bet.
    pub insurance_wins: u32,
    /// Gambler blackjacks.
    pub gambler_blackjacks: u32,
    /// Dealer blackjacks.
    pub dealer_blackjacks: u32,
    /// Lowest final bankroll.
    pub min_bankroll: f64,
    /// Highest final bankroll.
    pub max_bankroll: f64,
    /// Mean final bankroll.
    pub avg_bankroll: f64,
}

impl Summary {
    /// Aggregates trackers. Returns `None` if there are none or a tracker
    /// never recorded its starting bankroll.
    #[must_use]
    pub fn from_trackers(trackers: &[MetricTracker]) -> Option<Self> {
        let initial_bankroll = *trackers.first()?.bankroll_progression.first()?;
        let finals = trackers
            .iter()
            .map(MetricTracker::final_bankroll)
            .collect::<Option<Vec<_>>>()?;

        #[expect(
            clippy::cast_precision_loss,
            reason = "game counts are far below f64 precision"
        )]
        let avg_bankroll = finals.iter().sum::<f64>() / finals.len() as f64;

        Some(Self {
            games: trackers.len(),
            initial_bankroll,
            wins: trackers.iter().map(|t| t.wins).sum(),
            losses: trackers.iter().map(|t| t.losses).sum(),
            pushes: trackers.iter().map(|t| t.pushes).sum(),
            insurance_wins: trackers.iter().map(|t| t.insurance_wins).sum(),
            gambler_blackjacks: trackers.iter().map(|t| t.gambler_blackjacks).sum(),
            dealer_blackjacks: trackers.iter().map(|t| t.dealer_blackjacks).sum(),
            min_bankroll: finals.iter().copied().fold(f64::INFINITY, f64::min),
            max_bankroll: finals.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            avg_bankroll,
        })
    }

    /// Number of settled hands across every game.
    #[must_use]
    pub const fn hands(&self) -> u32 {
        self.wins + self.losses + self.pushes + self.insurance_wins
    }

    /// Mean final bankroll minus the starting bankroll.
    #[must_use]
    pub fn avg_winnings(&self) -> f64 {
        self.avg_bankroll - self.initial_bankroll
    }

    fn percent(&self, count: u32) -> f64 {
        match self.hands() {
            0 => 0.0,
            hands => f64::from(count) / f64::from(hands) * 100.0,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const TEXT_WIDTH: usize = 20;
        const NUM_WIDTH: usize = 16;

        let winnings_pct = if self.initial_bankroll > 0.0 {
            self.avg_winnings() / self.initial_bankroll * 100.0
        } else {
            0.0
        };

        writeln!(f, "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}", "games", self.games)?;
        writeln!(f, "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}", "hands", self.hands())?;
        for (label, count) in [
            ("wins", self.wins),
            ("losses", self.losses),
            ("pushes", self.pushes),
            ("insurance wins", self.insurance_wins),
        ] {
            writeln!(
                f,
                "{label:<TEXT_WIDTH$}{count:>NUM_WIDTH$} ({:.2}%)",
                self.percent(count)
            )?;
        }
        writeln!(
            f,
            "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}",
            "player blackjacks", self.gambler_blackjacks
        )?;
        writeln!(
            f,
            "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}",
            "dealer blackjacks", self.dealer_blackjacks
        )?;
        writeln!(f, "{:<TEXT_WIDTH$}{:>NUM_WIDTH$.2}", "max bankroll", self.max_bankroll)?;
        writeln!(f, "{:<TEXT_WIDTH$}{:>NUM_WIDTH$.2}", "min bankroll", self.min_bankroll)?;
        writeln!(f, "{:<TEXT_WIDTH$}{:>NUM_WIDTH$.2}", "avg bankroll", self.avg_bankroll)?;
        writeln!(
            f,
            "{:<TEXT_WIDTH$}{:>NUM_WIDTH$.2} ({winnings_pct:.2}%)",
            "avg winnings",
            self.avg_winnings()
        )
    }
}

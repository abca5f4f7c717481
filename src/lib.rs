//! A single-player blackjack turn engine.
//!
//! The crate provides a [`GameController`] that runs repeated turns between
//! one gambler and the dealer: wager check, deal, blackjack and insurance
//! resolution, the gambler's hands (with splits and doubles), the dealer's
//! fixed play, and settlement. Decisions come from a [`DecisionSource`];
//! every state change is recorded as a [`TurnEvent`] and each finished turn
//! is reported to a [`MetricsSink`].
//!
//! # Example
//!
//! ```
//! use bjsim::{BasicStrategy, GameController, GameOptions, MetricTracker};
//!
//! let options = GameOptions::default()
//!     .with_bankroll(500.0)
//!     .with_auto_wager(25.0)
//!     .with_max_turns(Some(50));
//! let mut game = GameController::new(options, BasicStrategy::new(), 7);
//!
//! let mut tracker = MetricTracker::new();
//! game.play(&mut tracker).unwrap();
//! assert!(game.gambler().bankroll() >= 0.0);
//! assert_eq!(tracker.bankroll_progression[0], 500.0);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod metrics;
pub mod options;
pub mod player;
pub mod result;
pub mod shoe;
pub mod strategy;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::{GameError, ShoeError, WagerError};
pub use game::{GameController, PreTurn, TurnEvent, TurnObserver, TurnPhase};
pub use hand::{DealerHand, GamblerHand, Hand, HandStatus, Totals};
pub use metrics::{MetricTracker, MetricsSink, Summary};
pub use options::GameOptions;
pub use player::{Dealer, Gambler};
pub use result::{HandOutcome, HandReport, Odds, TurnReport};
pub use shoe::Shoe;
pub use strategy::{ActionOptions, BasicStrategy, DecisionSource, HandAction, InsuranceStrategy};

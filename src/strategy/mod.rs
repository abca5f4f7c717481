//! Decision sources: who chooses the gambler's moves.
//!
//! The turn engine never decides anything on the gambler's behalf. Every
//! yes/no question and every hand action goes through a [`DecisionSource`],
//! so an interactive prompt and a table-driven strategy plug into the same
//! state machine.

use core::fmt;

use crate::card::Card;
use crate::hand::GamblerHand;

mod basic;

pub use basic::{BasicStrategy, InsuranceStrategy};

/// An action the gambler can take on a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandAction {
    /// Draw one card.
    Hit,
    /// Take no more cards.
    Stand,
    /// Double the wager and draw exactly one card.
    Double,
    /// Split a pair into two hands.
    Split,
}

impl HandAction {
    /// One-letter shortcut for prompts.
    #[must_use]
    pub const fn shortcut(self) -> char {
        match self {
            Self::Hit => 'h',
            Self::Stand => 's',
            Self::Double => 'd',
            Self::Split => 'x',
        }
    }
}

impl fmt::Display for HandAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hit => "Hit",
            Self::Stand => "Stand",
            Self::Double => "Double",
            Self::Split => "Split",
        };
        f.write_str(name)
    }
}

/// The actions offered for a hand, in display order.
///
/// Hit and Stand are always offered; Double and Split only when the hand and
/// the bankroll allow them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOptions(Vec<HandAction>);

impl ActionOptions {
    /// Builds the offered set.
    #[must_use]
    pub fn new(can_double: bool, can_split: bool) -> Self {
        let mut actions = vec![HandAction::Hit, HandAction::Stand];
        if can_double {
            actions.push(HandAction::Double);
        }
        if can_split {
            actions.push(HandAction::Split);
        }
        Self(actions)
    }

    /// Returns whether `action` is offered.
    #[must_use]
    pub fn contains(&self, action: HandAction) -> bool {
        self.0.contains(&action)
    }

    /// Returns the offered actions.
    #[must_use]
    pub fn as_slice(&self) -> &[HandAction] {
        &self.0
    }

    /// Looks up an offered action by its shortcut.
    #[must_use]
    pub fn by_shortcut(&self, shortcut: char) -> Option<HandAction> {
        self.0.iter().copied().find(|a| a.shortcut() == shortcut)
    }
}

impl fmt::Display for ActionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, action) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{action} ({})", action.shortcut())?;
        }
        Ok(())
    }
}

/// Answers every question the turn engine asks the gambler.
///
/// Implementations may prompt a person or consult a table. Calls are
/// synchronous; the engine waits for each answer.
pub trait DecisionSource {
    /// Whether the gambler wants to change the auto-wager or cash out.
    fn wants_to_change_wager(&mut self) -> bool;

    /// The new auto-wager. Zero cashes out.
    fn new_auto_wager(&mut self) -> f64;

    /// The action to take on `hand`. Must be one of `options`.
    fn hand_action(
        &mut self,
        hand: &GamblerHand,
        options: &ActionOptions,
        dealer_up_card: Card,
    ) -> HandAction;

    /// Whether a blackjack facing a dealer Ace takes even money.
    fn wants_even_money(&mut self) -> bool;

    /// Whether to buy insurance against a dealer Ace.
    fn wants_insurance(&mut self) -> bool;
}

impl<S: DecisionSource + ?Sized> DecisionSource for Box<S> {
    fn wants_to_change_wager(&mut self) -> bool {
        (**self).wants_to_change_wager()
    }

    fn new_auto_wager(&mut self) -> f64 {
        (**self).new_auto_wager()
    }

    fn hand_action(
        &mut self,
        hand: &GamblerHand,
        options: &ActionOptions,
        dealer_up_card: Card,
    ) -> HandAction {
        (**self).hand_action(hand, options, dealer_up_card)
    }

    fn wants_even_money(&mut self) -> bool {
        (**self).wants_even_money()
    }

    fn wants_insurance(&mut self) -> bool {
        (**self).wants_insurance()
    }
}

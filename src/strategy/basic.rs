//! Table-driven basic strategy.

use crate::card::Card;
use crate::hand::GamblerHand;

use super::{ActionOptions, DecisionSource, HandAction};

/// One strategy table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Hit,
    Stand,
    /// Double if allowed, otherwise hit.
    Double,
    /// Double if allowed, otherwise stand.
    DoubleOrStand,
}

use Cell::{Double as D, DoubleOrStand as Ds, Hit as H, Stand as S};

// Columns are the dealer up card: 2, 3, 4, 5, 6, 7, 8, 9, 10, A.

/// Hard totals 8 through 17.
const HARD: [[Cell; 10]; 10] = [
    [H, H, H, H, H, H, H, H, H, H],
    [H, D, D, D, D, H, H, H, H, H],
    [D, D, D, D, D, D, D, D, H, H],
    [D, D, D, D, D, D, D, D, D, D],
    [H, H, S, S, S, H, H, H, H, H],
    [S, S, S, S, S, H, H, H, H, H],
    [S, S, S, S, S, H, H, H, H, H],
    [S, S, S, S, S, H, H, H, H, H],
    [S, S, S, S, S, H, H, H, H, H],
    [S, S, S, S, S, S, S, S, S, S],
];

/// Soft totals 13 (A,2) through 20 (A,9).
const SOFT: [[Cell; 10]; 8] = [
    [H, H, H, D, D, H, H, H, H, H],
    [H, H, H, D, D, H, H, H, H, H],
    [H, H, D, D, D, H, H, H, H, H],
    [H, H, D, D, D, H, H, H, H, H],
    [H, D, D, D, D, H, H, H, H, H],
    [Ds, Ds, Ds, Ds, Ds, S, S, H, H, H],
    [S, S, S, S, Ds, S, S, S, S, S],
    [S, S, S, S, S, S, S, S, S, S],
];

/// Whether to split a pair, by pair value: A, 2, 3, ..., 10.
const SPLIT: [[bool; 10]; 10] = {
    const T: bool = true;
    const F: bool = false;
    [
        [T, T, T, T, T, T, T, T, T, T],
        [T, T, T, T, T, T, F, F, F, F],
        [T, T, T, T, T, T, F, F, F, F],
        [F, F, F, T, T, F, F, F, F, F],
        [F, F, F, F, F, F, F, F, F, F],
        [T, T, T, T, T, F, F, F, F, F],
        [T, T, T, T, T, T, F, F, F, F],
        [T, T, T, T, T, T, T, T, T, T],
        [T, T, T, T, T, F, T, T, F, F],
        [F, F, F, F, F, F, F, F, F, F],
    ]
};

const fn column(up_card: Card) -> usize {
    if up_card.is_ace() {
        9
    } else {
        up_card.value() as usize - 2
    }
}

fn hard_cell(total: u8, column: usize) -> Cell {
    match total {
        0..=7 => H,
        8..=17 => HARD[total as usize - 8][column],
        _ => S,
    }
}

fn soft_cell(total: u8, column: usize) -> Cell {
    match total {
        0..=12 => H,
        13..=20 => SOFT[total as usize - 13][column],
        _ => S,
    }
}

/// Multi-deck basic strategy for a dealer who hits soft 17, with doubling
/// after splits. Never changes the wager and never takes insurance or even
/// money.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BasicStrategy;

impl BasicStrategy {
    /// Creates the strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Looks up the action for `hand` against `up_card`, restricted to `options`.
    #[must_use]
    pub fn decide(&self, hand: &GamblerHand, options: &ActionOptions, up_card: Card) -> HandAction {
        let column = column(up_card);

        if options.contains(HandAction::Split) {
            if let Some(first) = hand.cards().first() {
                if SPLIT[first.value() as usize - 1][column] {
                    return HandAction::Split;
                }
            }
        }

        let total = hand.final_total();
        let cell = if hand.is_soft() {
            soft_cell(total, column)
        } else {
            hard_cell(total, column)
        };

        let can_double = options.contains(HandAction::Double);
        match cell {
            H => HandAction::Hit,
            S => HandAction::Stand,
            D if can_double => HandAction::Double,
            D => HandAction::Hit,
            Ds if can_double => HandAction::Double,
            Ds => HandAction::Stand,
        }
    }
}

impl DecisionSource for BasicStrategy {
    fn wants_to_change_wager(&mut self) -> bool {
        false
    }

    /// Never consulted, since the strategy never asks to change the wager.
    fn new_auto_wager(&mut self) -> f64 {
        0.0
    }

    fn hand_action(
        &mut self,
        hand: &GamblerHand,
        options: &ActionOptions,
        dealer_up_card: Card,
    ) -> HandAction {
        self.decide(hand, options, dealer_up_card)
    }

    fn wants_even_money(&mut self) -> bool {
        false
    }

    fn wants_insurance(&mut self) -> bool {
        false
    }
}

/// [`BasicStrategy`] play that always buys insurance against a dealer Ace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InsuranceStrategy {
    basic: BasicStrategy,
}

impl InsuranceStrategy {
    /// Creates the strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            basic: BasicStrategy::new(),
        }
    }
}

impl DecisionSource for InsuranceStrategy {
    fn wants_to_change_wager(&mut self) -> bool {
        false
    }

    fn new_auto_wager(&mut self) -> f64 {
        0.0
    }

    fn hand_action(
        &mut self,
        hand: &GamblerHand,
        options: &ActionOptions,
        dealer_up_card: Card,
    ) -> HandAction {
        self.basic.decide(hand, options, dealer_up_card)
    }

    fn wants_even_money(&mut self) -> bool {
        false
    }

    fn wants_insurance(&mut self) -> bool {
        true
    }
}

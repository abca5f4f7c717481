//! Gambler and dealer hand representations.

use core::fmt;
use core::ops::Deref;

use crate::card::Card;
use crate::result::HandOutcome;

/// The possible totals of a set of cards.
///
/// Only one Ace can ever count as 11 without busting, so a hand has at most
/// two meaningful totals: `low` (every Ace is 1) and `high` (one Ace is 11).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    /// Total with every Ace counted as 1.
    pub low: u8,
    /// Total with one Ace counted as 11, present only if it does not exceed 21.
    pub high: Option<u8>,
}

impl Totals {
    /// Computes the totals of the given cards.
    #[must_use]
    pub fn of(cards: &[Card]) -> Self {
        let mut non_ace_total: u8 = 0;
        let mut num_aces: u8 = 0;

        for card in cards {
            if card.is_ace() {
                num_aces = num_aces.saturating_add(1);
            } else {
                non_ace_total = non_ace_total.saturating_add(card.value());
            }
        }

        if num_aces == 0 {
            return Self {
                low: non_ace_total,
                high: None,
            };
        }

        let low = non_ace_total.saturating_add(num_aces);
        let high = low.saturating_add(10);

        Self {
            low,
            high: (high <= 21).then_some(high),
        }
    }

    /// The single total used for outcomes: `high` if valid, else `low`.
    #[must_use]
    pub fn best(self) -> u8 {
        self.high.unwrap_or(self.low)
    }
}

impl fmt::Display for Totals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.high {
            Some(21) => write!(f, "21"),
            Some(high) => write!(f, "{} or {high}", self.low),
            None => write!(f, "{}", self.low),
        }
    }
}

/// Hand status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandStatus {
    /// Dealt but not yet played.
    Pending,
    /// Currently being played.
    Playing,
    /// Stood.
    Stood,
    /// Doubled down; takes no further action.
    Doubled,
    /// Over 21.
    Busted,
    /// Two cards totalling 21.
    Blackjack,
    /// Finished without being played out, e.g. a turn settled before play.
    Played,
}

impl HandStatus {
    /// Returns whether the hand can still take actions or be played.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Pending | Self::Playing)
    }
}

impl fmt::Display for HandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pending => "Pending",
            Self::Playing => "Playing",
            Self::Stood => "Stood",
            Self::Doubled => "Doubled",
            Self::Busted => "Busted",
            Self::Blackjack => "Blackjack",
            Self::Played => "Played",
        };
        f.write_str(name)
    }
}

/// An ordered set of cards and its lifecycle status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    status: HandStatus,
}

impl Hand {
    /// Creates a hand from dealt cards.
    ///
    /// A two-card 21 starts out as [`HandStatus::Blackjack`]; every other hand
    /// starts out [`HandStatus::Pending`].
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        let mut hand = Self {
            cards,
            status: HandStatus::Pending,
        };
        if hand.is_blackjack() {
            hand.status = HandStatus::Blackjack;
        }
        hand
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the current status of the hand.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    /// Sets the hand status.
    ///
    /// Status only moves forward: a hand never returns to `Pending`.
    pub fn set_status(&mut self, status: HandStatus) {
        debug_assert!(
            status != HandStatus::Pending || self.status == HandStatus::Pending,
            "hand cannot return to pending from {}",
            self.status
        );
        self.status = status;
    }

    /// Returns the hand's low and (if valid) high totals.
    #[must_use]
    pub fn totals(&self) -> Totals {
        Totals::of(&self.cards)
    }

    /// The total used for bust and outcome comparison.
    #[must_use]
    pub fn final_total(&self) -> u8 {
        self.totals().best()
    }

    /// Total to show for the hand: both totals while it is still open,
    /// otherwise the final one.
    #[must_use]
    pub fn display_total(&self) -> String {
        if self.status.is_open() {
            self.totals().to_string()
        } else {
            self.final_total().to_string()
        }
    }

    /// Returns whether the hand totals exactly 21.
    #[must_use]
    pub fn is_21(&self) -> bool {
        self.final_total() == 21
    }

    /// Returns whether the hand is two cards totalling 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.is_21()
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.final_total() > 21
    }

    /// Returns whether the hand is soft (an Ace currently counts as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.totals().high.is_some()
    }

    fn take_cards(&mut self) -> Vec<Card> {
        core::mem::take(&mut self.cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

/// A gambler's hand: cards plus the money riding on them.
#[derive(Debug, Clone, PartialEq)]
pub struct GamblerHand {
    hand: Hand,
    /// Position in the gambler's hand list, starting at 1.
    number: usize,
    wager: f64,
    insurance: f64,
    outcome: Option<HandOutcome>,
    /// Everything paid back on the hand, stakes included.
    earnings: f64,
    lost_insurance: bool,
    from_split: bool,
}

impl GamblerHand {
    /// Creates a dealt hand with no wager.
    #[must_use]
    pub fn new(cards: Vec<Card>, number: usize) -> Self {
        Self {
            hand: Hand::new(cards),
            number,
            wager: 0.0,
            insurance: 0.0,
            outcome: None,
            earnings: 0.0,
            lost_insurance: false,
            from_split: false,
        }
    }

    /// Creates a single-card hand split off another hand.
    #[must_use]
    pub fn from_split(card: Card, number: usize) -> Self {
        let mut hand = Self::new(vec![card], number);
        hand.from_split = true;
        hand
    }

    /// Returns the hand number (1 for the dealt hand, then in split order).
    #[must_use]
    pub const fn number(&self) -> usize {
        self.number
    }

    /// Returns the wager on the hand.
    #[must_use]
    pub const fn wager(&self) -> f64 {
        self.wager
    }

    /// Returns the insurance stake on the hand.
    #[must_use]
    pub const fn insurance(&self) -> f64 {
        self.insurance
    }

    /// Returns the settled outcome, if any.
    #[must_use]
    pub const fn outcome(&self) -> Option<HandOutcome> {
        self.outcome
    }

    /// Returns everything paid back on the hand.
    #[must_use]
    pub const fn earnings(&self) -> f64 {
        self.earnings
    }

    /// Returns whether an insurance stake on this hand was lost.
    #[must_use]
    pub const fn lost_insurance(&self) -> bool {
        self.lost_insurance
    }

    /// Returns whether the hand took part in a split.
    #[must_use]
    pub const fn is_from_split(&self) -> bool {
        self.from_split
    }

    /// Net result of the hand: earnings minus every stake placed on it.
    #[must_use]
    pub fn net(&self) -> f64 {
        self.earnings - self.wager - self.insurance
    }

    /// Returns whether the hand is two cards of the same rank.
    #[must_use]
    pub fn is_splittable(&self) -> bool {
        matches!(self.hand.cards(), [first, second] if first.rank == second.rank)
    }

    /// Returns whether the hand is still on its first two cards.
    #[must_use]
    pub fn is_doubleable(&self) -> bool {
        self.hand.len() == 2
    }

    pub(crate) fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    pub(crate) fn add_wager(&mut self, amount: f64) {
        self.wager += amount;
    }

    pub(crate) fn set_insurance(&mut self, amount: f64) {
        self.insurance = amount;
    }

    pub(crate) fn forfeit_insurance(&mut self) {
        self.lost_insurance = true;
    }

    pub(crate) fn mark_from_split(&mut self) {
        self.from_split = true;
    }

    pub(crate) fn record(&mut self, outcome: HandOutcome, earnings: f64) {
        self.outcome = Some(outcome);
        self.earnings += earnings;
    }

    /// Removes the second card so it can start a new hand.
    pub(crate) fn take_split_card(&mut self) -> Option<Card> {
        if self.is_splittable() {
            self.hand.cards.pop()
        } else {
            None
        }
    }

    pub(crate) fn into_cards(mut self) -> Vec<Card> {
        self.hand.take_cards()
    }
}

impl Deref for GamblerHand {
    type Target = Hand;

    fn deref(&self) -> &Hand {
        &self.hand
    }
}

/// The house hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealerHand {
    hand: Hand,
    revealed: bool,
}

impl DealerHand {
    /// Creates the dealer's hand from dealt cards, with the buried cards hidden.
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            hand: Hand::new(cards),
            revealed: false,
        }
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<Card> {
        self.hand.cards().first().copied()
    }

    /// Returns the cards hidden until the hand is revealed.
    #[must_use]
    pub fn buried_cards(&self) -> &[Card] {
        self.hand.cards().get(1..).unwrap_or_default()
    }

    /// Returns whether the buried cards have been revealed.
    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Reveals the buried cards.
    pub const fn reveal(&mut self) {
        self.revealed = true;
    }

    /// Total visible to the gambler: the up card alone until revealed.
    #[must_use]
    pub fn visible_totals(&self) -> Totals {
        if self.revealed {
            self.hand.totals()
        } else {
            Totals::of(self.hand.cards().get(..1).unwrap_or_default())
        }
    }

    pub(crate) fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    pub(crate) fn into_cards(mut self) -> Vec<Card> {
        self.hand.take_cards()
    }
}

impl Deref for DealerHand {
    type Target = Hand;

    fn deref(&self) -> &Hand {
        &self.hand
    }
}

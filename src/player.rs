//! The two actors at the table: the gambler and the dealer.

use crate::card::Card;
use crate::error::WagerError;
use crate::hand::{DealerHand, GamblerHand, Hand};
use crate::strategy::HandAction;

/// The bettor: a bankroll, a standing auto-wager, and this turn's hands.
///
/// Every debit goes through one guard, so the bankroll can never go negative.
/// A wager is recorded on a hand only after its debit has succeeded.
#[derive(Debug, Clone, PartialEq)]
pub struct Gambler {
    name: String,
    bankroll: f64,
    auto_wager: f64,
    hands: Vec<GamblerHand>,
}

impl Gambler {
    /// Creates a gambler with no hands.
    #[must_use]
    pub fn new(name: impl Into<String>, bankroll: f64, auto_wager: f64) -> Self {
        Self {
            name: name.into(),
            bankroll: bankroll.max(0.0),
            auto_wager: auto_wager.max(0.0),
            hands: Vec::new(),
        }
    }

    /// Returns the gambler's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current bankroll.
    #[must_use]
    pub const fn bankroll(&self) -> f64 {
        self.bankroll
    }

    /// Returns the standing auto-wager.
    #[must_use]
    pub const fn auto_wager(&self) -> f64 {
        self.auto_wager
    }

    /// Returns this turn's hands, in play order.
    #[must_use]
    pub fn hands(&self) -> &[GamblerHand] {
        &self.hands
    }

    /// Returns the hand dealt at the start of the turn.
    #[must_use]
    pub fn first_hand(&self) -> Option<&GamblerHand> {
        self.hands.first()
    }

    /// The gambler is done once they cash out (auto-wager 0) or go broke.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.auto_wager <= 0.0 || self.bankroll <= 0.0
    }

    /// Returns whether `amount` can be debited from the bankroll.
    #[must_use]
    pub fn can_place_wager(&self, amount: f64) -> bool {
        Self::validate(amount).is_ok() && amount <= self.bankroll
    }

    /// Returns whether the auto-wager is affordable.
    #[must_use]
    pub fn can_place_auto_wager(&self) -> bool {
        self.can_place_wager(self.auto_wager)
    }

    /// Insurance is half the first hand's wager.
    #[must_use]
    pub fn insurance_amount(&self) -> Option<f64> {
        self.first_hand().map(|hand| hand.wager() / 2.0)
    }

    /// Returns whether an insurance wager is affordable and not yet placed.
    #[must_use]
    pub fn can_place_insurance_wager(&self) -> bool {
        match (self.first_hand(), self.insurance_amount()) {
            (Some(hand), Some(amount)) => hand.insurance() == 0.0 && self.can_place_wager(amount),
            _ => false,
        }
    }

    /// Places a wager on the hand at `index`, adding to any wager already there.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand does not exist, the amount is invalid, or
    /// the bankroll cannot cover it. Nothing changes on error.
    pub fn place_hand_wager(&mut self, amount: f64, index: usize) -> Result<(), WagerError> {
        if index >= self.hands.len() {
            return Err(WagerError::HandNotFound(index));
        }
        self.debit(amount)?;
        self.hands[index].add_wager(amount);
        Ok(())
    }

    /// Places the auto-wager on the first hand.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no hand or the bankroll cannot cover it.
    pub fn place_auto_wager(&mut self) -> Result<(), WagerError> {
        self.place_hand_wager(self.auto_wager, 0)
    }

    /// Places the insurance side bet on the first hand and returns its amount.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no hand, insurance was already placed, or
    /// the bankroll cannot cover it.
    pub fn place_insurance_wager(&mut self) -> Result<f64, WagerError> {
        let amount = self.insurance_amount().ok_or(WagerError::HandNotFound(0))?;
        if self.hands[0].insurance() > 0.0 {
            return Err(WagerError::InsuranceAlreadyPlaced);
        }
        self.debit(amount)?;
        self.hands[0].set_insurance(amount);
        Ok(amount)
    }

    /// Replaces the standing auto-wager. Zero means cashing out.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is invalid or exceeds the bankroll.
    pub fn set_new_auto_wager(&mut self, amount: f64) -> Result<(), WagerError> {
        Self::validate(amount)?;
        if amount > self.bankroll {
            return Err(WagerError::InsufficientBankroll {
                requested: amount,
                available: self.bankroll,
            });
        }
        self.auto_wager = amount;
        Ok(())
    }

    /// Lowers the auto-wager to the bankroll if it is no longer affordable.
    ///
    /// Returns the previous auto-wager when it was clamped.
    pub(crate) fn clamp_auto_wager(&mut self) -> Option<f64> {
        if self.can_place_auto_wager() {
            return None;
        }
        let previous = self.auto_wager;
        self.auto_wager = self.bankroll;
        Some(previous)
    }

    /// Sets the auto-wager to zero, ending the game after this turn.
    pub fn cash_out(&mut self) {
        self.auto_wager = 0.0;
    }

    /// Credits the bankroll.
    pub fn payout(&mut self, amount: f64) {
        self.bankroll += amount;
    }

    fn validate(amount: f64) -> Result<(), WagerError> {
        if amount.is_finite() && amount >= 0.0 {
            Ok(())
        } else {
            Err(WagerError::InvalidAmount(amount))
        }
    }

    fn debit(&mut self, amount: f64) -> Result<(), WagerError> {
        Self::validate(amount)?;
        if amount > self.bankroll {
            return Err(WagerError::InsufficientBankroll {
                requested: amount,
                available: self.bankroll,
            });
        }
        self.bankroll -= amount;
        if self.bankroll < 0.0 {
            return Err(WagerError::Overdraft(self.bankroll));
        }
        Ok(())
    }

    pub(crate) fn hand_mut(&mut self, index: usize) -> Option<&mut GamblerHand> {
        self.hands.get_mut(index)
    }

    /// Adds a hand and returns its index.
    pub(crate) fn push_hand(&mut self, hand: GamblerHand) -> usize {
        self.hands.push(hand);
        self.hands.len() - 1
    }

    /// Number the next hand in the list will receive.
    pub(crate) fn next_hand_number(&self) -> usize {
        self.hands.len() + 1
    }

    pub(crate) fn next_pending_hand(&self) -> Option<usize> {
        self.hands
            .iter()
            .position(|hand| hand.status() == crate::hand::HandStatus::Pending)
    }

    /// Drops every hand, returning their cards.
    pub(crate) fn discard_hands(&mut self) -> Vec<Card> {
        self.hands
            .drain(..)
            .flat_map(GamblerHand::into_cards)
            .collect()
    }
}

/// The house: one hand per turn, played by a fixed rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dealer {
    name: String,
    hand: Option<DealerHand>,
}

impl Dealer {
    /// Creates a dealer with no hand.
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: String::from("Dealer"),
            hand: None,
        }
    }

    /// Returns the dealer's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current hand, if a turn is in progress.
    #[must_use]
    pub const fn hand(&self) -> Option<&DealerHand> {
        self.hand.as_ref()
    }

    /// Returns the up card of the current hand.
    #[must_use]
    pub fn up_card(&self) -> Option<Card> {
        self.hand.as_ref().and_then(DealerHand::up_card)
    }

    /// Returns whether the dealer is showing an Ace.
    #[must_use]
    pub fn is_showing_ace(&self) -> bool {
        self.up_card().is_some_and(Card::is_ace)
    }

    /// Returns whether the dealer is showing a ten-value card.
    #[must_use]
    pub fn is_showing_ten_value(&self) -> bool {
        self.up_card().is_some_and(Card::is_ten_value)
    }

    /// The dealer's fixed policy: hit below 17 and on soft 17, stand otherwise.
    #[must_use]
    pub fn action_for(hand: &Hand) -> HandAction {
        let total = hand.final_total();
        if total < 17 || (total == 17 && hand.is_soft()) {
            HandAction::Hit
        } else {
            HandAction::Stand
        }
    }

    pub(crate) fn set_hand(&mut self, hand: DealerHand) {
        self.hand = Some(hand);
    }

    pub(crate) fn hand_mut(&mut self) -> Option<&mut DealerHand> {
        self.hand.as_mut()
    }

    /// Drops the hand, returning its cards.
    pub(crate) fn discard_hand(&mut self) -> Vec<Card> {
        self.hand.take().map(DealerHand::into_cards).unwrap_or_default()
    }
}

impl Default for Dealer {
    fn default() -> Self {
        Self::new()
    }
}

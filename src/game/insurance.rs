use crate::error::GameError;
use crate::result::HandOutcome;
use crate::strategy::DecisionSource;

use super::{GameController, PreTurn, TurnEvent};

impl<S: DecisionSource> GameController<S> {
    /// Resolves blackjacks, even money and insurance before any hand is
    /// played.
    ///
    /// The gambler's blackjack is announced before the dealer's hand is
    /// checked.
    pub(super) fn play_pre_turn(&mut self) -> Result<PreTurn, GameError> {
        let gambler_blackjack = self.gambler_hand(0)?.is_blackjack();
        let dealer_blackjack = self.dealer_hand()?.is_blackjack();

        if gambler_blackjack {
            self.emit(TurnEvent::GamblerBlackjack);
        }

        if self.dealer.is_showing_ace() {
            self.emit(TurnEvent::DealerShowsAce);
            return if gambler_blackjack {
                self.resolve_even_money(dealer_blackjack)
            } else {
                self.resolve_insurance(dealer_blackjack)
            };
        }

        if self.dealer.is_showing_ten_value() {
            if dealer_blackjack {
                self.reveal_dealer_blackjack()?;
                let outcome = if gambler_blackjack {
                    HandOutcome::Push
                } else {
                    HandOutcome::Loss
                };
                self.settle_hand(0, outcome)?;
                return Ok(PreTurn::TurnOver);
            }
            self.emit(TurnEvent::DealerNoBlackjack);
        }

        if gambler_blackjack {
            self.settle_hand(0, HandOutcome::Win)?;
            return Ok(PreTurn::TurnOver);
        }
        Ok(PreTurn::PlayTurn)
    }

    /// A blackjack facing an Ace: take even money or ride it out.
    fn resolve_even_money(&mut self, dealer_blackjack: bool) -> Result<PreTurn, GameError> {
        let outcome = if self.source.wants_even_money() {
            HandOutcome::EvenMoney
        } else if dealer_blackjack {
            self.reveal_dealer_blackjack()?;
            HandOutcome::Push
        } else {
            self.emit(TurnEvent::DealerNoBlackjack);
            HandOutcome::Win
        };
        self.settle_hand(0, outcome)?;
        Ok(PreTurn::TurnOver)
    }

    /// No blackjack facing an Ace: offer insurance, then check the dealer.
    fn resolve_insurance(&mut self, dealer_blackjack: bool) -> Result<PreTurn, GameError> {
        let insured = self.offer_insurance()?;

        if dealer_blackjack {
            self.reveal_dealer_blackjack()?;
            let outcome = if insured {
                HandOutcome::InsuranceWin
            } else {
                HandOutcome::Loss
            };
            self.settle_hand(0, outcome)?;
            return Ok(PreTurn::TurnOver);
        }

        self.emit(TurnEvent::DealerNoBlackjack);
        if insured {
            let hand = self.gambler_hand_mut(0)?;
            hand.forfeit_insurance();
            let amount = hand.insurance();
            self.emit(TurnEvent::InsuranceLost(amount));
        }
        Ok(PreTurn::PlayTurn)
    }

    /// Places insurance if the gambler can afford it and wants it.
    fn offer_insurance(&mut self) -> Result<bool, GameError> {
        if !self.gambler.can_place_insurance_wager() {
            log::warn!(
                "{} cannot afford insurance (bankroll ${:.2})",
                self.gambler.name(),
                self.gambler.bankroll()
            );
            self.emit(TurnEvent::InsuranceUnaffordable);
            return Ok(false);
        }
        if !self.source.wants_insurance() {
            return Ok(false);
        }

        let amount = self.gambler.place_insurance_wager()?;
        self.emit(TurnEvent::InsurancePlaced(amount));
        Ok(true)
    }

    fn reveal_dealer_blackjack(&mut self) -> Result<(), GameError> {
        self.dealer_hand_mut()?.reveal();
        self.emit(TurnEvent::DealerBlackjack);
        Ok(())
    }
}

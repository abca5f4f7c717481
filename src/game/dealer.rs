use core::cmp::Ordering;

use crate::error::GameError;
use crate::hand::{GamblerHand, HandStatus};
use crate::player::Dealer;
use crate::result::{HandOutcome, Odds};
use crate::strategy::{DecisionSource, HandAction};

use super::{GameController, TurnEvent};

impl<S: DecisionSource> GameController<S> {
    /// Reveals the dealer's hand and plays it by the house rule.
    ///
    /// The dealer only draws if some gambler hand is still live; against
    /// nothing but busted hands the dealer hand is marked played.
    pub(super) fn play_dealer_turn(&mut self) -> Result<(), GameError> {
        let hand = self.dealer_hand_mut()?;
        hand.reveal();
        let total = hand.final_total();
        self.emit(TurnEvent::DealerRevealed { total });

        let live = self
            .gambler
            .hands()
            .iter()
            .any(|hand| hand.status() != HandStatus::Busted);
        if !live {
            self.dealer_hand_mut()?
                .hand_mut()
                .set_status(HandStatus::Played);
            return Ok(());
        }

        self.dealer_hand_mut()?
            .hand_mut()
            .set_status(HandStatus::Playing);
        while Dealer::action_for(self.dealer_hand()?) == HandAction::Hit {
            let card = self.shoe.deal_card();
            self.dealer_hand_mut()?.hand_mut().add_card(card);
            self.emit(TurnEvent::DealerHit(card));
        }

        let hand = self.dealer_hand_mut()?;
        let total = hand.final_total();
        if hand.is_busted() {
            hand.hand_mut().set_status(HandStatus::Busted);
            self.emit(TurnEvent::DealerBusted { total });
        } else {
            hand.hand_mut().set_status(HandStatus::Stood);
            self.emit(TurnEvent::DealerStood { total });
        }
        Ok(())
    }

    /// Settles every hand that has no outcome yet against the dealer.
    pub(super) fn settle_up(&mut self) -> Result<(), GameError> {
        let dealer = self.dealer_hand()?;
        let dealer_busted = dealer.is_busted();
        let dealer_total = dealer.final_total();

        for index in 0..self.gambler.hands().len() {
            let hand = self.gambler_hand(index)?;
            if hand.outcome().is_some() {
                continue;
            }

            let outcome = if hand.is_busted() {
                HandOutcome::Loss
            } else if dealer_busted {
                HandOutcome::Win
            } else {
                match hand.final_total().cmp(&dealer_total) {
                    Ordering::Greater => HandOutcome::Win,
                    Ordering::Less => HandOutcome::Loss,
                    Ordering::Equal => HandOutcome::Push,
                }
            };
            self.settle_hand(index, outcome)?;
        }
        Ok(())
    }

    /// Records `outcome` on a hand and pays the gambler.
    pub(super) fn settle_hand(&mut self, index: usize, outcome: HandOutcome) -> Result<(), GameError> {
        let hand = self.gambler_hand(index)?;
        let earnings = match outcome {
            HandOutcome::Win => self.win_odds(hand).payout(hand.wager()),
            HandOutcome::EvenMoney => Odds::OneToOne.payout(hand.wager()),
            HandOutcome::Push => hand.wager(),
            HandOutcome::InsuranceWin => Odds::TwoToOne.payout(hand.insurance()),
            HandOutcome::Loss => 0.0,
        };
        let number = hand.number();

        self.gambler.payout(earnings);
        self.gambler_hand_mut(index)?.record(outcome, earnings);
        self.emit(TurnEvent::Settled {
            hand: number,
            outcome,
            earnings,
        });
        Ok(())
    }

    /// A dealt blackjack wins 3:2. A split hand's 21 wins 1:1 unless the
    /// options pay it the bonus.
    fn win_odds(&self, hand: &GamblerHand) -> Odds {
        let bonus = !hand.is_from_split() || self.options.split_blackjack_pays_bonus;
        if hand.status() == HandStatus::Blackjack && bonus {
            Odds::ThreeToTwo
        } else {
            Odds::OneToOne
        }
    }
}

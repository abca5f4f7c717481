use crate::error::GameError;
use crate::hand::{GamblerHand, HandStatus};
use crate::result::HandOutcome;
use crate::strategy::{ActionOptions, DecisionSource, HandAction};

use super::{GameController, TurnEvent};

impl<S: DecisionSource> GameController<S> {
    /// Plays every pending hand. Splits append hands while this runs.
    pub(super) fn play_gambler_turn(&mut self) -> Result<(), GameError> {
        while let Some(index) = self.gambler.next_pending_hand() {
            self.play_gambler_hand(index)?;
        }
        Ok(())
    }

    fn play_gambler_hand(&mut self, index: usize) -> Result<(), GameError> {
        self.gambler_hand_mut(index)?
            .hand_mut()
            .set_status(HandStatus::Playing);

        while self.gambler_hand(index)?.status() == HandStatus::Playing {
            if self.gambler_hand(index)?.len() == 1 {
                self.complete_split_hand(index)?;
                continue;
            }

            let options = self.available_options(index)?;
            let up_card = self.up_card()?;
            let hand = self
                .gambler
                .hands()
                .get(index)
                .ok_or(GameError::MissingHand("gambler"))?;
            let action = self.source.hand_action(hand, &options, up_card);
            if !options.contains(action) {
                return Err(GameError::UnhandledAction {
                    action,
                    offered: options.as_slice().to_vec(),
                });
            }

            match action {
                HandAction::Hit => self.hit(index)?,
                HandAction::Stand => self.stand(index)?,
                HandAction::Double => self.double(index)?,
                HandAction::Split => self.split(index)?,
            }
        }
        Ok(())
    }

    /// Hit and Stand always; Double and Split when the hand allows them and
    /// the bankroll covers a second wager.
    fn available_options(&self, index: usize) -> Result<ActionOptions, GameError> {
        let hand = self.gambler_hand(index)?;
        let affordable = self.gambler.can_place_wager(hand.wager());
        Ok(ActionOptions::new(
            hand.is_doubleable() && affordable,
            hand.is_splittable() && affordable,
        ))
    }

    /// Deals the second card to a hand left with one card by a split.
    ///
    /// Split Aces get exactly one more card. Any other split hand stays in
    /// play and goes back to the decision source.
    fn complete_split_hand(&mut self, index: usize) -> Result<(), GameError> {
        let card = self.shoe.deal_card();
        let hand = self.gambler_hand_mut(index)?;
        hand.hand_mut().add_card(card);
        let number = hand.number();
        let split_aces = hand.cards().first().is_some_and(|c| c.is_ace());
        let blackjack = split_aces && hand.is_blackjack();
        if split_aces {
            let status = if blackjack {
                HandStatus::Blackjack
            } else {
                HandStatus::Stood
            };
            hand.hand_mut().set_status(status);
        }

        self.emit(TurnEvent::SplitHandDealt { hand: number, card });
        if blackjack {
            self.emit(TurnEvent::TwentyOne { hand: number });
        }
        Ok(())
    }

    fn hit(&mut self, index: usize) -> Result<(), GameError> {
        let card = self.shoe.deal_card();
        let hand = self.gambler_hand_mut(index)?;
        hand.hand_mut().add_card(card);
        let number = hand.number();
        self.emit(TurnEvent::Hit { hand: number, card });
        self.check_twenty_one_or_bust(index, HandStatus::Playing)
    }

    fn stand(&mut self, index: usize) -> Result<(), GameError> {
        let hand = self.gambler_hand_mut(index)?;
        hand.hand_mut().set_status(HandStatus::Stood);
        let number = hand.number();
        self.emit(TurnEvent::Stood { hand: number });
        Ok(())
    }

    fn double(&mut self, index: usize) -> Result<(), GameError> {
        let wager = self.gambler_hand(index)?.wager();
        self.gambler.place_hand_wager(wager, index)?;

        let card = self.shoe.deal_card();
        let hand = self.gambler_hand_mut(index)?;
        hand.hand_mut().add_card(card);
        let number = hand.number();
        self.emit(TurnEvent::Doubled { hand: number, card });
        self.check_twenty_one_or_bust(index, HandStatus::Doubled)
    }

    /// Moves the second card to a new hand carrying the same wager. The
    /// original hand is played again with its remaining card.
    fn split(&mut self, index: usize) -> Result<(), GameError> {
        let number = self.gambler.next_hand_number();
        let hand = self.gambler_hand_mut(index)?;
        let card = hand
            .take_split_card()
            .ok_or(GameError::MissingHand("splittable"))?;
        hand.mark_from_split();
        let wager = hand.wager();
        let original = hand.number();

        let new_index = self.gambler.push_hand(GamblerHand::from_split(card, number));
        self.gambler.place_hand_wager(wager, new_index)?;
        self.emit(TurnEvent::Split {
            hand: original,
            new_hand: number,
        });
        Ok(())
    }

    /// After a drawn card: 21 stands, over 21 busts and loses at once,
    /// anything else takes `otherwise`.
    fn check_twenty_one_or_bust(
        &mut self,
        index: usize,
        otherwise: HandStatus,
    ) -> Result<(), GameError> {
        let hand = self.gambler_hand_mut(index)?;
        let number = hand.number();

        if hand.is_21() {
            hand.hand_mut().set_status(HandStatus::Stood);
            self.emit(TurnEvent::TwentyOne { hand: number });
        } else if hand.is_busted() {
            hand.hand_mut().set_status(HandStatus::Busted);
            self.emit(TurnEvent::Busted { hand: number });
            self.settle_hand(index, HandOutcome::Loss)?;
        } else {
            hand.hand_mut().set_status(otherwise);
        }
        Ok(())
    }
}

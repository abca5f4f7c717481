use crate::error::{GameError, WagerError};
use crate::strategy::DecisionSource;

use super::{GameController, TurnEvent};

impl<S: DecisionSource> GameController<S> {
    /// Vets the auto-wager before a deal and lets the gambler change it.
    ///
    /// Returns `false` if the game is over: the gambler is broke or cashed
    /// out.
    pub(super) fn check_gambler_wager(&mut self) -> Result<bool, GameError> {
        if self.gambler.bankroll() <= 0.0 {
            log::info!("{} is out of money", self.gambler.name());
            return Ok(false);
        }

        if let Some(from) = self.gambler.clamp_auto_wager() {
            let to = self.gambler.auto_wager();
            log::warn!("auto-wager ${from:.2} exceeds bankroll; reduced to ${to:.2}");
            self.emit(TurnEvent::AutoWagerClamped { from, to });
        }

        if self.source.wants_to_change_wager() {
            self.change_auto_wager()?;
        }

        if self.gambler.auto_wager() <= 0.0 {
            self.emit(TurnEvent::CashedOut);
        }
        Ok(!self.gambler.is_finished())
    }

    /// Asks for a new auto-wager until one is accepted or the retries run out.
    ///
    /// An amount the bankroll cannot cover is clamped to the bankroll once the
    /// retries are exhausted; an invalid amount leaves the wager unchanged.
    fn change_auto_wager(&mut self) -> Result<(), GameError> {
        let mut rejected = None;

        for _ in 0..=self.options.wager_retries {
            let amount = self.source.new_auto_wager();
            match self.gambler.set_new_auto_wager(amount) {
                Ok(()) => {
                    if amount > 0.0 {
                        self.emit(TurnEvent::AutoWagerChanged(amount));
                    }
                    return Ok(());
                }
                Err(err) => {
                    log::debug!("new auto-wager rejected: {err}");
                    self.emit(TurnEvent::AutoWagerRejected(amount));
                    rejected = Some(err);
                }
            }
        }

        match rejected {
            Some(WagerError::InsufficientBankroll {
                requested,
                available,
            }) => {
                log::warn!(
                    "no affordable auto-wager after {} retries; using the bankroll",
                    self.options.wager_retries
                );
                self.gambler.set_new_auto_wager(available)?;
                self.emit(TurnEvent::AutoWagerClamped {
                    from: requested,
                    to: available,
                });
            }
            Some(err) => log::warn!("keeping auto-wager after repeated invalid input: {err}"),
            None => {}
        }
        Ok(())
    }
}

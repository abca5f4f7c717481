//! The turn engine.

use crate::card::Card;
use crate::error::GameError;
use crate::hand::{DealerHand, GamblerHand, HandStatus};
use crate::metrics::MetricsSink;
use crate::options::GameOptions;
use crate::player::{Dealer, Gambler};
use crate::result::{HandReport, TurnReport};
use crate::shoe::Shoe;
use crate::strategy::DecisionSource;

mod actions;
mod bet;
mod dealer;
pub mod event;
mod insurance;
pub mod state;

pub use event::{TurnEvent, TurnObserver};
pub use state::{PreTurn, TurnPhase};

/// Runs blackjack turns for one gambler against the dealer.
///
/// The controller owns the shoe, both players and the decision source, and
/// drives each turn through [`TurnPhase`] in order. Every state change is
/// recorded as a [`TurnEvent`] and handed to the optional [`TurnObserver`].
pub struct GameController<S> {
    options: GameOptions,
    shoe: Shoe,
    gambler: Gambler,
    dealer: Dealer,
    source: S,
    phase: TurnPhase,
    /// Turns played so far.
    turn: u32,
    /// Events of the current turn.
    events: Vec<TurnEvent>,
    observer: Option<Box<dyn TurnObserver>>,
}

impl<S: DecisionSource> GameController<S> {
    /// Creates a controller with a freshly shuffled shoe.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::{BasicStrategy, GameController, GameOptions};
    ///
    /// let options = GameOptions::default().with_max_turns(Some(10));
    /// let mut game = GameController::new(options, BasicStrategy::new(), 42);
    /// let turns = game.play(&mut ()).unwrap();
    /// assert!(turns <= 10);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, source: S, seed: u64) -> Self {
        let shoe = Shoe::new(options.decks, seed);
        Self::with_shoe(options, shoe, source)
    }

    /// Creates a controller around an existing shoe.
    #[must_use]
    pub fn with_shoe(options: GameOptions, shoe: Shoe, source: S) -> Self {
        let gambler = Gambler::new(options.name.as_str(), options.bankroll, options.auto_wager);
        Self {
            options,
            shoe,
            gambler,
            dealer: Dealer::new(),
            source,
            phase: TurnPhase::WagerCheck,
            turn: 0,
            events: Vec::new(),
            observer: None,
        }
    }

    /// Attaches an observer that is called after every event.
    #[must_use]
    pub fn with_observer(mut self, observer: impl TurnObserver + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Returns the shoe mutably, e.g. to stack the next deal.
    pub const fn shoe_mut(&mut self) -> &mut Shoe {
        &mut self.shoe
    }

    /// Returns the gambler.
    #[must_use]
    pub const fn gambler(&self) -> &Gambler {
        &self.gambler
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Returns the decision source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Returns the number of turns played.
    #[must_use]
    pub const fn turns_played(&self) -> u32 {
        self.turn
    }

    /// Returns the events of the turn in progress (or of the last wager
    /// check that ended the game).
    #[must_use]
    pub fn events(&self) -> &[TurnEvent] {
        &self.events
    }

    /// Plays turns until the gambler cashes out, goes broke, or the
    /// configured turn limit is reached. Returns the number of turns played.
    ///
    /// # Errors
    ///
    /// Returns an error if a turn hits a structural fault; see
    /// [`GameController::play_turn`].
    pub fn play(&mut self, sink: &mut impl MetricsSink) -> Result<u32, GameError> {
        log::info!(
            "{} sits down with ${:.2} (auto-wager ${:.2}, {} decks)",
            self.gambler.name(),
            self.gambler.bankroll(),
            self.gambler.auto_wager(),
            self.shoe.decks()
        );
        sink.record_start(self.gambler.bankroll());

        while self.options.max_turns.is_none_or(|max| self.turn < max) {
            match self.play_turn()? {
                Some(report) => sink.record_turn(&report),
                None => break,
            }
        }

        log::info!(
            "{} leaves after {} turns with ${:.2}",
            self.gambler.name(),
            self.turn,
            self.gambler.bankroll()
        );
        Ok(self.turn)
    }

    /// Plays one full turn.
    ///
    /// Returns `None` without dealing if the gambler is finished (cashed out
    /// or broke) after the wager check.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnhandledAction`] if the decision source picks an
    /// action that was not offered, or another [`GameError`] if an internal
    /// invariant breaks. Insufficient bankroll never surfaces here.
    pub fn play_turn(&mut self) -> Result<Option<TurnReport>, GameError> {
        self.events.clear();

        self.phase = TurnPhase::WagerCheck;
        if !self.check_gambler_wager()? {
            return Ok(None);
        }
        self.turn += 1;

        self.phase = TurnPhase::Deal;
        self.deal()?;

        self.phase = TurnPhase::PreTurn;
        if self.play_pre_turn()? == PreTurn::PlayTurn {
            self.phase = TurnPhase::GamblerPlay;
            self.play_gambler_turn()?;

            self.phase = TurnPhase::DealerPlay;
            self.play_dealer_turn()?;

            self.phase = TurnPhase::Settle;
            self.settle_up()?;
        }

        self.phase = TurnPhase::Finalize;
        self.finalize_turn().map(Some)
    }

    /// Deals gambler, dealer, gambler, dealer and places the auto-wager.
    fn deal(&mut self) -> Result<(), GameError> {
        let gambler_first = self.shoe.deal_card();
        let dealer_first = self.shoe.deal_card();
        let gambler_second = self.shoe.deal_card();
        let dealer_second = self.shoe.deal_card();

        let number = self.gambler.next_hand_number();
        self.gambler.push_hand(GamblerHand::new(
            vec![gambler_first, gambler_second],
            number,
        ));
        self.dealer
            .set_hand(DealerHand::new(vec![dealer_first, dealer_second]));
        self.emit(TurnEvent::Dealt {
            gambler: [gambler_first, gambler_second],
            up_card: dealer_first,
        });

        // Affordable: the wager check clamped it.
        let amount = self.gambler.auto_wager();
        self.gambler.place_auto_wager()?;
        self.emit(TurnEvent::WagerPlaced { hand: number, amount });
        Ok(())
    }

    /// Closes out unplayed hands, builds the report and returns every card to
    /// the shoe.
    fn finalize_turn(&mut self) -> Result<TurnReport, GameError> {
        for index in 0..self.gambler.hands().len() {
            if let Some(hand) = self.gambler.hand_mut(index) {
                if hand.status().is_open() {
                    hand.hand_mut().set_status(HandStatus::Played);
                }
            }
        }
        let dealer = self.dealer_hand_mut()?;
        if dealer.status().is_open() {
            dealer.hand_mut().set_status(HandStatus::Played);
        }
        let dealer = self.dealer_hand()?;
        let (dealer_status, dealer_total, dealer_blackjack) =
            (dealer.status(), dealer.final_total(), dealer.is_blackjack());

        let report = TurnReport {
            turn: self.turn,
            hands: self.gambler.hands().iter().map(HandReport::from).collect(),
            dealer_status,
            dealer_total,
            dealer_blackjack,
            bankroll: self.gambler.bankroll(),
            events: core::mem::take(&mut self.events),
        };

        let cards = self.gambler.discard_hands();
        self.shoe.discard(cards);
        let cards = self.dealer.discard_hand();
        self.shoe.discard(cards);

        log::debug!(
            "turn {} over: net ${:.2}, bankroll ${:.2}",
            report.turn,
            report.net(),
            report.bankroll
        );
        Ok(report)
    }

    /// Records an event, logs it and notifies the observer.
    fn emit(&mut self, event: TurnEvent) {
        log::debug!("turn {}: {event}", self.turn);
        if let Some(observer) = self.observer.as_mut() {
            observer.on_event(&event, &self.gambler, &self.dealer);
        }
        self.events.push(event);
    }

    fn dealer_hand(&self) -> Result<&DealerHand, GameError> {
        self.dealer.hand().ok_or(GameError::MissingHand("dealer"))
    }

    fn dealer_hand_mut(&mut self) -> Result<&mut DealerHand, GameError> {
        self.dealer
            .hand_mut()
            .ok_or(GameError::MissingHand("dealer"))
    }

    fn gambler_hand(&self, index: usize) -> Result<&GamblerHand, GameError> {
        self.gambler
            .hands()
            .get(index)
            .ok_or(GameError::MissingHand("gambler"))
    }

    fn gambler_hand_mut(&mut self, index: usize) -> Result<&mut GamblerHand, GameError> {
        self.gambler
            .hand_mut(index)
            .ok_or(GameError::MissingHand("gambler"))
    }

    fn up_card(&self) -> Result<Card, GameError> {
        self.dealer.up_card().ok_or(GameError::MissingHand("dealer"))
    }
}

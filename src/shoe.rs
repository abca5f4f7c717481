//! The shoe: a shuffled multi-deck card source that refills itself.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{self, Card, DECK_SIZE};
use crate::error::ShoeError;

/// A pool of cards drawn from one or more 52-card decks.
///
/// Cards leave the pile when dealt and come back through [`Shoe::discard`].
/// When the pile runs out it is refilled by shuffling the discarded cards, so
/// a card held in a hand is never duplicated and the pile is never observed
/// empty by a caller.
#[derive(Debug, Clone)]
pub struct Shoe {
    /// Cards waiting to be dealt. The top of the pile is the last element.
    pile: Vec<Card>,
    /// Cards returned from finished hands.
    discards: Vec<Card>,
    /// Number of decks in the full population.
    decks: u8,
    /// Number of reshuffles since creation.
    reshuffles: usize,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a shuffled shoe of `decks` decks using the given seed.
    ///
    /// A shoe always holds at least one deck.
    #[must_use]
    pub fn new(decks: u8, seed: u64) -> Self {
        let decks = decks.max(1);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut pile = Self::population(decks);
        pile.shuffle(&mut rng);

        Self {
            pile,
            discards: Vec::new(),
            decks,
            reshuffles: 0,
            rng,
        }
    }

    /// Builds the full, unshuffled card population for `decks` decks.
    fn population(decks: u8) -> Vec<Card> {
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);
        for _ in 0..decks {
            cards.extend(card::deck());
        }
        cards
    }

    /// Deals the top card of the pile.
    ///
    /// If the pile is empty, before or after the draw, it is refilled first so
    /// the next caller always finds cards.
    pub fn deal_card(&mut self) -> Card {
        loop {
            if let Some(card) = self.pile.pop() {
                if self.pile.is_empty() {
                    self.refill();
                }
                return card;
            }
            self.refill();
        }
    }

    /// Deals `n` cards in order.
    pub fn deal_n_cards(&mut self, n: usize) -> Vec<Card> {
        (0..n).map(|_| self.deal_card()).collect()
    }

    /// Returns finished cards to the shoe's discard tray.
    pub fn discard<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.discards.extend(cards);
    }

    /// Refills the pile by shuffling every discarded card back into it.
    pub fn reshuffle(&mut self) {
        self.pile.append(&mut self.discards);
        self.pile.shuffle(&mut self.rng);
        self.reshuffles += 1;
        log::info!(
            "reshuffled shoe ({} cards in pile, reshuffle #{})",
            self.pile.len(),
            self.reshuffles
        );
    }

    fn refill(&mut self) {
        // Only reachable when every card of the shoe is held in hands at once.
        if self.discards.is_empty() {
            log::warn!("no discards to reshuffle; rebuilding the pile from a fresh population");
            self.discards = Self::population(self.decks);
        }
        self.reshuffle();
    }

    /// Moves the given cards to the top of the pile so they are dealt first,
    /// in the given order.
    ///
    /// The cards are taken out of the pile itself, so the shoe keeps its card
    /// count. Used to script deterministic deals.
    ///
    /// # Errors
    ///
    /// Returns an error if a requested card is not in the pile. The pile is
    /// left unchanged in that case.
    pub fn stack(&mut self, draws: &[Card]) -> Result<(), ShoeError> {
        let mut remaining = self.pile.clone();
        for &card in draws {
            let position = remaining
                .iter()
                .position(|&c| c == card)
                .ok_or(ShoeError::CardUnavailable(card))?;
            remaining.remove(position);
        }

        remaining.extend(draws.iter().rev().copied());
        self.pile = remaining;
        Ok(())
    }

    /// Returns the number of cards left in the pile.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.pile.len()
    }

    /// Returns the number of cards in the discard tray.
    #[must_use]
    pub fn discarded(&self) -> usize {
        self.discards.len()
    }

    /// Returns the number of decks in the shoe.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Returns the total number of cards the shoe was built from.
    #[must_use]
    pub const fn total_cards(&self) -> usize {
        self.decks as usize * DECK_SIZE
    }

    /// Returns how many times the pile has been reshuffled.
    #[must_use]
    pub const fn reshuffles(&self) -> usize {
        self.reshuffles
    }
}

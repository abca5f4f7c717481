//! Card types and deck utilities.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
}

impl Suit {
    /// Every suit, in deck-building order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Clubs, Self::Diamonds];

    /// Returns the suit name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spades => "Spades",
            Self::Hearts => "Hearts",
            Self::Clubs => "Clubs",
            Self::Diamonds => "Diamonds",
        }
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// Ace, worth 1 or 11.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// Every rank, in deck-building order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the rank's hard value.
    ///
    /// An Ace reports 1 here; whether it counts as 11 is decided by the hand
    /// that holds it.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Ace => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten | Self::Jack | Self::Queen | Self::King => 10,
        }
    }

    /// Returns the rank name ("Ace", "2", ..., "King").
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Returns the card's hard value (an Ace is 1).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.rank.value()
    }

    /// Returns whether the card is an Ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        matches!(self.rank, Rank::Ace)
    }

    /// Returns whether the card is worth ten (10, Jack, Queen, King).
    #[must_use]
    pub const fn is_ten_value(self) -> bool {
        self.rank.value() == 10
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank.name(), self.suit.name())
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Builds one unshuffled 52-card deck.
#[must_use]
pub fn deck() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(suit, rank)))
        .collect()
}

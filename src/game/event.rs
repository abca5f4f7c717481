//! The turn's activity log.

use core::fmt;

use crate::card::Card;
use crate::player::{Dealer, Gambler};
use crate::result::HandOutcome;

/// Something that happened during a turn.
///
/// Events are recorded in order; their `Display` form is the human-readable
/// activity log line.
#[derive(Debug, Clone, PartialEq)]
pub enum TurnEvent {
    /// The auto-wager was lowered to the bankroll.
    AutoWagerClamped {
        /// The unaffordable auto-wager.
        from: f64,
        /// The new auto-wager.
        to: f64,
    },
    /// A new auto-wager was accepted.
    AutoWagerChanged(f64),
    /// A new auto-wager was rejected for exceeding the bankroll.
    AutoWagerRejected(f64),
    /// The gambler cashed out.
    CashedOut,
    /// The initial cards were dealt.
    Dealt {
        /// The gambler's two cards.
        gambler: [Card; 2],
        /// The dealer's visible card.
        up_card: Card,
    },
    /// A wager was placed on a hand.
    WagerPlaced {
        /// The hand number.
        hand: usize,
        /// The amount placed.
        amount: f64,
    },
    /// The gambler was dealt a blackjack.
    GamblerBlackjack,
    /// The dealer shows an Ace.
    DealerShowsAce,
    /// The dealer's hand was checked and is a blackjack.
    DealerBlackjack,
    /// The dealer's hand was checked and is not a blackjack.
    DealerNoBlackjack,
    /// An insurance bet was placed.
    InsurancePlaced(f64),
    /// Insurance was not offered because the bankroll could not cover it.
    InsuranceUnaffordable,
    /// The insurance bet lost.
    InsuranceLost(f64),
    /// A split hand received its second card.
    SplitHandDealt {
        /// The hand number.
        hand: usize,
        /// The card dealt.
        card: Card,
    },
    /// A hand was hit.
    Hit {
        /// The hand number.
        hand: usize,
        /// The card dealt.
        card: Card,
    },
    /// A hand stood.
    Stood {
        /// The hand number.
        hand: usize,
    },
    /// A hand doubled down.
    Doubled {
        /// The hand number.
        hand: usize,
        /// The card dealt.
        card: Card,
    },
    /// A hand was split.
    Split {
        /// The hand that was split.
        hand: usize,
        /// The new hand.
        new_hand: usize,
    },
    /// A hand reached 21 and stands automatically.
    TwentyOne {
        /// The hand number.
        hand: usize,
    },
    /// A hand went over 21.
    Busted {
        /// The hand number.
        hand: usize,
    },
    /// The dealer revealed the buried cards.
    DealerRevealed {
        /// The dealer's total.
        total: u8,
    },
    /// The dealer drew a card.
    DealerHit(Card),
    /// The dealer stood.
    DealerStood {
        /// The dealer's total.
        total: u8,
    },
    /// The dealer went over 21.
    DealerBusted {
        /// The dealer's total.
        total: u8,
    },
    /// A hand was settled.
    Settled {
        /// The hand number.
        hand: usize,
        /// The outcome.
        outcome: HandOutcome,
        /// Everything paid back on the hand.
        earnings: f64,
    },
}

impl fmt::Display for TurnEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AutoWagerClamped { from, to } => {
                write!(f, "Insufficient bankroll for auto-wager ${from:.2}; reduced to ${to:.2}")
            }
            Self::AutoWagerChanged(amount) => write!(f, "Auto-wager set to ${amount:.2}"),
            Self::AutoWagerRejected(amount) => {
                write!(f, "Insufficient bankroll to set auto-wager ${amount:.2}")
            }
            Self::CashedOut => f.write_str("Cashed out"),
            Self::Dealt { gambler, up_card } => write!(
                f,
                "Dealt {} | {}; dealer shows {up_card}",
                gambler[0], gambler[1]
            ),
            Self::WagerPlaced { hand, amount } => {
                write!(f, "Hand {hand}: wagered ${amount:.2}")
            }
            Self::GamblerBlackjack => f.write_str("Gambler has blackjack!"),
            Self::DealerShowsAce => f.write_str("Dealer is showing an Ace"),
            Self::DealerBlackjack => f.write_str("Dealer has blackjack"),
            Self::DealerNoBlackjack => f.write_str("Dealer does not have blackjack"),
            Self::InsurancePlaced(amount) => write!(f, "Insurance placed: ${amount:.2}"),
            Self::InsuranceUnaffordable => {
                f.write_str("Insufficient bankroll to place insurance wager")
            }
            Self::InsuranceLost(amount) => write!(f, "Insurance wager of ${amount:.2} lost"),
            Self::SplitHandDealt { hand, card } => {
                write!(f, "Hand {hand}: second card {card} added to split hand")
            }
            Self::Hit { hand, card } => write!(f, "Hand {hand}: hit, drew {card}"),
            Self::Stood { hand } => write!(f, "Hand {hand}: stood"),
            Self::Doubled { hand, card } => write!(f, "Hand {hand}: doubled, drew {card}"),
            Self::Split { hand, new_hand } => {
                write!(f, "Hand {hand}: split into hand {new_hand}")
            }
            Self::TwentyOne { hand } => write!(f, "Hand {hand}: 21!"),
            Self::Busted { hand } => write!(f, "Hand {hand}: busted"),
            Self::DealerRevealed { total } => write!(f, "Dealer reveals {total}"),
            Self::DealerHit(card) => write!(f, "Dealer hits, drew {card}"),
            Self::DealerStood { total } => write!(f, "Dealer stands on {total}"),
            Self::DealerBusted { total } => write!(f, "Dealer busts with {total}"),
            Self::Settled {
                hand,
                outcome,
                earnings,
            } => write!(f, "Hand {hand}: {outcome} (paid ${earnings:.2})"),
        }
    }
}

/// Receives each event as it happens, with the table state right after it.
///
/// This is the hook for a renderer: the controller calls it after every
/// state transition and never formats output itself.
pub trait TurnObserver {
    /// Called after `event` was applied.
    fn on_event(&mut self, event: &TurnEvent, gambler: &Gambler, dealer: &Dealer);
}

impl<F> TurnObserver for F
where
    F: FnMut(&TurnEvent, &Gambler, &Dealer),
{
    fn on_event(&mut self, event: &TurnEvent, gambler: &Gambler, dealer: &Dealer) {
        self(event, gambler, dealer);
    }
}

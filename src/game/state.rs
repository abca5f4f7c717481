//! Turn phases.

/// Phase of the turn state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    /// Vetting the auto-wager and offering a change or cash-out.
    WagerCheck,
    /// Dealing the initial four cards.
    Deal,
    /// Resolving blackjacks, even money and insurance.
    PreTurn,
    /// Playing the gambler's hands.
    GamblerPlay,
    /// Playing the dealer's hand.
    DealerPlay,
    /// Comparing hands and paying out.
    Settle,
    /// Discarding hands and reporting.
    Finalize,
}

/// How the pre-turn resolution left the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreTurn {
    /// A blackjack or insurance outcome settled the turn.
    TurnOver,
    /// The gambler plays the hand out.
    PlayTurn,
}

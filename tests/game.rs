//! Game integration tests.

#![allow(clippy::float_cmp)]

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use bjsim::{
    ActionOptions, BasicStrategy, Card, DECK_SIZE, DecisionSource, GameController, GameError,
    GameOptions, GamblerHand, HandAction, HandOutcome, HandStatus, MetricTracker, MetricsSink,
    Rank, Shoe, Suit, TurnEvent, TurnReport,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// Answers from queues; falls back to standing and declining everything.
#[derive(Debug, Default)]
struct Script {
    actions: VecDeque<HandAction>,
    change_wager: VecDeque<bool>,
    new_wagers: VecDeque<f64>,
    even_money: bool,
    insurance: bool,
}

impl Script {
    fn actions(actions: &[HandAction]) -> Self {
        Self {
            actions: actions.iter().copied().collect(),
            ..Self::default()
        }
    }
}

impl DecisionSource for Script {
    fn wants_to_change_wager(&mut self) -> bool {
        self.change_wager.pop_front().unwrap_or(false)
    }

    fn new_auto_wager(&mut self) -> f64 {
        self.new_wagers.pop_front().unwrap_or(0.0)
    }

    fn hand_action(
        &mut self,
        _hand: &GamblerHand,
        _options: &ActionOptions,
        _dealer_up_card: Card,
    ) -> HandAction {
        self.actions.pop_front().unwrap_or(HandAction::Stand)
    }

    fn wants_even_money(&mut self) -> bool {
        self.even_money
    }

    fn wants_insurance(&mut self) -> bool {
        self.insurance
    }
}

fn game_with(options: GameOptions, script: Script, draws: &[Card]) -> GameController<Script> {
    let mut game = GameController::new(options, script, 7);
    game.shoe_mut().stack(draws).unwrap();
    game
}

fn game(script: Script, draws: &[Card]) -> GameController<Script> {
    let options = GameOptions::default()
        .with_bankroll(1000.0)
        .with_auto_wager(100.0);
    game_with(options, script, draws)
}

fn play_one(game: &mut GameController<Script>) -> TurnReport {
    game.play_turn().unwrap().unwrap()
}

fn has_event(report: &TurnReport, event: &TurnEvent) -> bool {
    report.events.contains(event)
}

#[test]
fn blackjack_against_low_card_pays_three_to_two() {
    let mut game = game(
        Script::default(),
        &[
            card(Suit::Spades, Rank::Ace),
            card(Suit::Hearts, Rank::Five),
            card(Suit::Spades, Rank::King),
            card(Suit::Hearts, Rank::Nine),
        ],
    );

    let report = play_one(&mut game);
    let hand = &report.hands[0];
    assert_eq!(hand.status, HandStatus::Blackjack);
    assert_eq!(hand.outcome, Some(HandOutcome::Win));
    assert_eq!(hand.earnings, 250.0);
    assert_eq!(hand.net(), 150.0);
    assert_eq!(report.bankroll, 1150.0);
    assert!(has_event(&report, &TurnEvent::GamblerBlackjack));
    assert_eq!(report.dealer_status, HandStatus::Played);
}

#[test]
fn declined_insurance_loses_to_dealer_blackjack() {
    let script = Script::actions(&[HandAction::Hit]);
    let mut game = game(
        script,
        &[
            card(Suit::Spades, Rank::Ten),
            card(Suit::Hearts, Rank::Ace),
            card(Suit::Spades, Rank::Six),
            card(Suit::Hearts, Rank::King),
        ],
    );

    let report = play_one(&mut game);
    assert_eq!(report.hands[0].outcome, Some(HandOutcome::Loss));
    assert_eq!(report.hands[0].earnings, 0.0);
    assert_eq!(report.bankroll, 900.0);
    assert!(report.dealer_blackjack);
    assert!(has_event(&report, &TurnEvent::DealerBlackjack));
    // No hand was played.
    assert_eq!(game.source().actions.len(), 1);
}

#[test]
fn split_eights_settle_independently() {
    let mut game = game(
        Script::actions(&[HandAction::Split, HandAction::Stand, HandAction::Hit]),
        &[
            card(Suit::Spades, Rank::Eight),
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Hearts, Rank::Eight),
            card(Suit::Hearts, Rank::Seven),
            card(Suit::Clubs, Rank::Ace),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Clubs, Rank::King),
        ],
    );

    let report = play_one(&mut game);
    assert_eq!(report.hands.len(), 2);

    let first = &report.hands[0];
    assert_eq!(first.total, 19);
    assert_eq!(first.status, HandStatus::Stood);
    assert_eq!(first.outcome, Some(HandOutcome::Win));
    assert_eq!(first.earnings, 200.0);

    let second = &report.hands[1];
    assert_eq!(second.number, 2);
    assert_eq!(second.wager, 100.0);
    assert_eq!(second.status, HandStatus::Busted);
    assert_eq!(second.outcome, Some(HandOutcome::Loss));

    // The busted hand lost before the dealer revealed.
    let settled = report
        .events
        .iter()
        .position(|e| matches!(e, TurnEvent::Settled { hand: 2, .. }))
        .unwrap();
    let revealed = report
        .events
        .iter()
        .position(|e| matches!(e, TurnEvent::DealerRevealed { .. }))
        .unwrap();
    assert!(settled < revealed);

    assert_eq!(report.dealer_total, 17);
    assert_eq!(report.bankroll, 1000.0);
}

#[test]
fn higher_total_wins_one_to_one() {
    let mut game = game(
        Script::actions(&[HandAction::Stand]),
        &[
            card(Suit::Spades, Rank::Ten),
            card(Suit::Hearts, Rank::Nine),
            card(Suit::Spades, Rank::Queen),
            card(Suit::Hearts, Rank::Ten),
        ],
    );

    let report = play_one(&mut game);
    assert_eq!(report.hands[0].outcome, Some(HandOutcome::Win));
    assert_eq!(report.hands[0].earnings, 200.0);
    assert_eq!(report.dealer_total, 19);
    assert_eq!(report.dealer_status, HandStatus::Stood);
    assert_eq!(report.bankroll, 1100.0);
}

#[test]
fn equal_totals_push() {
    let mut game = game(
        Script::actions(&[HandAction::Stand]),
        &[
            card(Suit::Spades, Rank::Ten),
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Spades, Rank::Eight),
            card(Suit::Hearts, Rank::Eight),
        ],
    );

    let report = play_one(&mut game);
    assert_eq!(report.hands[0].outcome, Some(HandOutcome::Push));
    assert_eq!(report.hands[0].earnings, 100.0);
    assert_eq!(report.net(), 0.0);
    assert_eq!(report.bankroll, 1000.0);
    assert!(has_event(&report, &TurnEvent::DealerNoBlackjack));
}

#[test]
fn long_session_reshuffles_and_conserves_cards() {
    let mut shoe = Shoe::new(3, 11);
    let total = shoe.total_cards();
    assert_eq!(total, 3 * DECK_SIZE);

    for _ in 0..40 {
        let held = shoe.deal_n_cards(4);
        assert_eq!(held.len(), 4);
        assert!(shoe.cards_remaining() > 0);
        assert_eq!(shoe.cards_remaining() + shoe.discarded() + held.len(), total);
        shoe.discard(held);
    }
    assert!(shoe.reshuffles() >= 1);

    // Everything is back in the shoe: one full pass deals each card of each
    // deck exactly once.
    shoe.reshuffle();
    let mut counts: HashMap<Card, usize> = HashMap::new();
    for card in shoe.deal_n_cards(total) {
        *counts.entry(card).or_default() += 1;
    }
    assert_eq!(counts.len(), DECK_SIZE);
    assert!(counts.values().all(|&n| n == 3));
}

#[test]
fn controller_returns_every_card_between_turns() {
    let options = GameOptions::default()
        .with_bankroll(10_000.0)
        .with_auto_wager(10.0)
        .with_decks(1);
    let mut game = GameController::new(options, BasicStrategy::new(), 3);

    for _ in 0..150 {
        let report = game.play_turn().unwrap().unwrap();
        assert!(report.bankroll >= 0.0);
        assert!(report.hands.iter().all(|h| h.outcome.is_some()));
        let shoe = game.shoe();
        assert_eq!(shoe.cards_remaining() + shoe.discarded(), DECK_SIZE);
    }
    assert!(game.shoe().reshuffles() > 0);
}

fn dealer_draws(seed: u64) -> Vec<Card> {
    let options = GameOptions::default();
    let mut game = GameController::new(options, Script::actions(&[HandAction::Stand]), seed);
    game.shoe_mut()
        .stack(&[
            card(Suit::Spades, Rank::Ten),
            card(Suit::Hearts, Rank::Six),
            card(Suit::Spades, Rank::Nine),
            card(Suit::Hearts, Rank::Ace),
            card(Suit::Clubs, Rank::Five),
            card(Suit::Clubs, Rank::Ten),
        ])
        .unwrap();
    let report = play_one(&mut game);
    assert_eq!(report.dealer_status, HandStatus::Busted);
    assert_eq!(report.dealer_total, 22);
    assert_eq!(report.hands[0].outcome, Some(HandOutcome::Win));
    report
        .events
        .iter()
        .filter_map(|e| match e {
            TurnEvent::DealerHit(card) => Some(*card),
            _ => None,
        })
        .collect()
}

#[test]
fn dealer_hits_soft_seventeen_deterministically() {
    // Soft 17 hits to a hard 12, which hits again and busts.
    let expected = vec![card(Suit::Clubs, Rank::Five), card(Suit::Clubs, Rank::Ten)];
    assert_eq!(dealer_draws(1), expected);
    assert_eq!(dealer_draws(99), expected);
}

#[test]
fn dealer_stands_on_hard_seventeen() {
    let mut game = game(
        Script::actions(&[HandAction::Stand]),
        &[
            card(Suit::Spades, Rank::Ten),
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Spades, Rank::Six),
            card(Suit::Hearts, Rank::Seven),
        ],
    );

    let report = play_one(&mut game);
    assert!(
        !report
            .events
            .iter()
            .any(|e| matches!(e, TurnEvent::DealerHit(_)))
    );
    assert_eq!(report.dealer_status, HandStatus::Stood);
    assert_eq!(report.hands[0].outcome, Some(HandOutcome::Loss));
}

#[test]
fn blackjack_takes_even_money() {
    let script = Script {
        even_money: true,
        ..Script::default()
    };
    let mut game = game(
        script,
        &[
            card(Suit::Spades, Rank::Ace),
            card(Suit::Hearts, Rank::Ace),
            card(Suit::Spades, Rank::King),
            card(Suit::Hearts, Rank::Nine),
        ],
    );

    let report = play_one(&mut game);
    assert_eq!(report.hands[0].outcome, Some(HandOutcome::EvenMoney));
    assert_eq!(report.hands[0].earnings, 200.0);
    assert_eq!(report.bankroll, 1100.0);
    assert_eq!(report.events[2], TurnEvent::GamblerBlackjack);
    assert_eq!(report.events[3], TurnEvent::DealerShowsAce);
}

#[test]
fn riding_blackjack_pushes_against_dealer_blackjack() {
    let mut game = game(
        Script::default(),
        &[
            card(Suit::Spades, Rank::Ace),
            card(Suit::Hearts, Rank::Ace),
            card(Suit::Spades, Rank::King),
            card(Suit::Hearts, Rank::Queen),
        ],
    );

    let report = play_one(&mut game);
    assert_eq!(report.hands[0].outcome, Some(HandOutcome::Push));
    assert_eq!(report.bankroll, 1000.0);
    assert!(report.dealer_blackjack);
}

#[test]
fn dealer_blackjack_under_ten_beats_gambler() {
    let mut game = game(
        Script::actions(&[HandAction::Hit]),
        &[
            card(Suit::Spades, Rank::Ten),
            card(Suit::Hearts, Rank::King),
            card(Suit::Spades, Rank::Six),
            card(Suit::Hearts, Rank::Ace),
        ],
    );

    let report = play_one(&mut game);
    assert_eq!(report.hands[0].outcome, Some(HandOutcome::Loss));
    assert_eq!(report.hands[0].status, HandStatus::Played);
    assert_eq!(report.bankroll, 900.0);
    assert!(report.dealer_blackjack);
    assert!(has_event(&report, &TurnEvent::DealerBlackjack));
    assert!(!has_event(&report, &TurnEvent::DealerShowsAce));
    assert_eq!(game.source().actions.len(), 1);
}

#[test]
fn blackjacks_on_both_sides_push_under_ten() {
    let mut game = game(
        Script::default(),
        &[
            card(Suit::Spades, Rank::Ace),
            card(Suit::Hearts, Rank::King),
            card(Suit::Spades, Rank::Queen),
            card(Suit::Hearts, Rank::Ace),
        ],
    );

    let report = play_one(&mut game);
    assert_eq!(report.hands[0].outcome, Some(HandOutcome::Push));
    assert_eq!(report.hands[0].earnings, 100.0);
    assert_eq!(report.bankroll, 1000.0);
    assert!(report.dealer_blackjack);
    assert!(has_event(&report, &TurnEvent::GamblerBlackjack));
}

#[test]
fn riding_blackjack_wins_three_to_two_when_dealer_ace_misses() {
    let mut game = game(
        Script::default(),
        &[
            card(Suit::Spades, Rank::Ace),
            card(Suit::Hearts, Rank::Ace),
            card(Suit::Spades, Rank::King),
            card(Suit::Hearts, Rank::Nine),
        ],
    );

    let report = play_one(&mut game);
    let hand = &report.hands[0];
    assert_eq!(hand.outcome, Some(HandOutcome::Win));
    assert_eq!(hand.earnings, 250.0);
    assert_eq!(report.bankroll, 1150.0);
    assert!(!report.dealer_blackjack);
    assert!(has_event(&report, &TurnEvent::DealerShowsAce));
}

#[test]
fn insurance_pays_two_to_one_on_dealer_blackjack() {
    let script = Script {
        insurance: true,
        ..Script::default()
    };
    let mut game = game(
        script,
        &[
            card(Suit::Spades, Rank::Ten),
            card(Suit::Hearts, Rank::Ace),
            card(Suit::Spades, Rank::Six),
            card(Suit::Hearts, Rank::King),
        ],
    );

    let report = play_one(&mut game);
    let hand = &report.hands[0];
    assert_eq!(hand.outcome, Some(HandOutcome::InsuranceWin));
    assert_eq!(hand.insurance, 50.0);
    assert_eq!(hand.earnings, 150.0);
    assert_eq!(hand.net(), 0.0);
    assert_eq!(report.bankroll, 1000.0);
    assert!(has_event(&report, &TurnEvent::InsurancePlaced(50.0)));
}

#[test]
fn insurance_is_lost_and_hand_plays_on() {
    let mut script = Script::actions(&[HandAction::Stand]);
    script.insurance = true;
    let mut game = game(
        script,
        &[
            card(Suit::Spades, Rank::Ten),
            card(Suit::Hearts, Rank::Ace),
            card(Suit::Spades, Rank::Nine),
            card(Suit::Hearts, Rank::Seven),
        ],
    );

    let report = play_one(&mut game);
    assert!(has_event(&report, &TurnEvent::InsuranceLost(50.0)));
    // Soft 18 stands.
    assert_eq!(report.dealer_total, 18);
    let hand = &report.hands[0];
    assert_eq!(hand.outcome, Some(HandOutcome::Win));
    assert_eq!(hand.net(), 50.0);
    assert_eq!(report.bankroll, 1050.0);
}

#[test]
fn unaffordable_insurance_is_skipped_and_broke_gambler_stops() {
    let script = Script {
        insurance: true,
        ..Script::default()
    };
    let options = GameOptions::default()
        .with_bankroll(100.0)
        .with_auto_wager(100.0);
    let mut game = game_with(
        options,
        script,
        &[
            card(Suit::Spades, Rank::Ten),
            card(Suit::Hearts, Rank::Ace),
            card(Suit::Spades, Rank::Six),
            card(Suit::Hearts, Rank::King),
        ],
    );

    let report = play_one(&mut game);
    assert!(has_event(&report, &TurnEvent::InsuranceUnaffordable));
    assert_eq!(report.hands[0].insurance, 0.0);
    assert_eq!(report.hands[0].outcome, Some(HandOutcome::Loss));
    assert_eq!(report.bankroll, 0.0);

    assert!(game.play_turn().unwrap().is_none());
    assert!(game.gambler().is_finished());
}

#[test]
fn offering_an_unavailable_action_is_fatal() {
    let mut game = game(
        Script::actions(&[HandAction::Split]),
        &[
            card(Suit::Spades, Rank::Ten),
            card(Suit::Hearts, Rank::Five),
            card(Suit::Spades, Rank::Nine),
            card(Suit::Clubs, Rank::Five),
        ],
    );

    let err = game.play_turn().unwrap_err();
    assert_eq!(
        err,
        GameError::UnhandledAction {
            action: HandAction::Split,
            offered: vec![HandAction::Hit, HandAction::Stand, HandAction::Double],
        }
    );
}

#[test]
fn double_to_twenty_one_stands_with_twice_the_wager() {
    let mut game = game(
        Script::actions(&[HandAction::Double]),
        &[
            card(Suit::Spades, Rank::Six),
            card(Suit::Hearts, Rank::Nine),
            card(Suit::Spades, Rank::Five),
            card(Suit::Hearts, Rank::Eight),
            card(Suit::Clubs, Rank::Ten),
        ],
    );

    let report = play_one(&mut game);
    let hand = &report.hands[0];
    assert_eq!(hand.wager, 200.0);
    assert_eq!(hand.status, HandStatus::Stood);
    assert_eq!(hand.outcome, Some(HandOutcome::Win));
    assert_eq!(report.bankroll, 1200.0);
    assert!(has_event(&report, &TurnEvent::TwentyOne { hand: 1 }));
}

#[test]
fn doubled_hand_takes_exactly_one_card() {
    let mut game = game(
        Script::actions(&[HandAction::Double, HandAction::Hit]),
        &[
            card(Suit::Spades, Rank::Six),
            card(Suit::Hearts, Rank::Nine),
            card(Suit::Spades, Rank::Five),
            card(Suit::Hearts, Rank::Eight),
            card(Suit::Clubs, Rank::Two),
        ],
    );

    let report = play_one(&mut game);
    let hand = &report.hands[0];
    assert_eq!(hand.status, HandStatus::Doubled);
    assert_eq!(hand.total, 13);
    assert_eq!(hand.outcome, Some(HandOutcome::Loss));
    assert_eq!(report.bankroll, 800.0);
    assert_eq!(game.source().actions.len(), 1);
}

fn split_aces(bonus: bool) -> TurnReport {
    let options = GameOptions::default()
        .with_bankroll(1000.0)
        .with_auto_wager(100.0)
        .with_split_blackjack_pays_bonus(bonus);
    let mut game = game_with(
        options,
        Script::actions(&[HandAction::Split, HandAction::Hit]),
        &[
            card(Suit::Spades, Rank::Ace),
            card(Suit::Hearts, Rank::Six),
            card(Suit::Hearts, Rank::Ace),
            card(Suit::Diamonds, Rank::Ten),
            card(Suit::Spades, Rank::King),
            card(Suit::Spades, Rank::Five),
            card(Suit::Clubs, Rank::Ten),
        ],
    );
    let report = play_one(&mut game);
    // Split aces take no further action.
    assert_eq!(game.source().actions.len(), 1);
    report
}

#[test]
fn split_aces_get_one_card_and_21_pays_even() {
    let report = split_aces(false);
    assert_eq!(report.hands[0].status, HandStatus::Blackjack);
    assert_eq!(report.hands[1].status, HandStatus::Stood);
    assert_eq!(report.hands[1].total, 16);
    assert_eq!(report.dealer_status, HandStatus::Busted);
    assert_eq!(report.hands[0].earnings, 200.0);
    assert_eq!(report.hands[1].earnings, 200.0);
    assert_eq!(report.bankroll, 1200.0);
}

#[test]
fn split_blackjack_bonus_is_configurable() {
    let report = split_aces(true);
    assert_eq!(report.hands[0].earnings, 250.0);
    assert_eq!(report.bankroll, 1250.0);
}

#[test]
fn split_tens_reaching_21_keep_playing() {
    let mut game = game(
        Script::actions(&[HandAction::Split, HandAction::Stand, HandAction::Stand]),
        &[
            card(Suit::Spades, Rank::Ten),
            card(Suit::Hearts, Rank::Seven),
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Ace),
            card(Suit::Diamonds, Rank::Nine),
        ],
    );

    let report = play_one(&mut game);
    assert!(game.source().actions.is_empty());
    assert_eq!(report.hands[0].status, HandStatus::Stood);
    assert_eq!(report.hands[0].total, 21);
    assert!(!has_event(&report, &TurnEvent::TwentyOne { hand: 1 }));
    assert_eq!(report.hands[0].earnings, 200.0);
    assert_eq!(report.hands[1].earnings, 200.0);
    assert_eq!(report.bankroll, 1200.0);

    let mut tracker = MetricTracker::new();
    tracker.record_turn(&report);
    assert_eq!(tracker.gambler_blackjacks, 0);
}

#[test]
fn unaffordable_auto_wager_is_clamped() {
    let options = GameOptions::default()
        .with_bankroll(50.0)
        .with_auto_wager(100.0);
    let mut game = game_with(
        options,
        Script::actions(&[HandAction::Stand]),
        &[
            card(Suit::Spades, Rank::Ten),
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Spades, Rank::Eight),
            card(Suit::Hearts, Rank::Eight),
        ],
    );

    let report = play_one(&mut game);
    assert_eq!(
        report.events[0],
        TurnEvent::AutoWagerClamped {
            from: 100.0,
            to: 50.0
        }
    );
    assert_eq!(report.hands[0].wager, 50.0);
    assert_eq!(report.bankroll, 50.0);
}

#[test]
fn rejected_auto_wager_is_retried_then_clamped() {
    let mut script = Script::default();
    script.change_wager.push_back(true);
    script.new_wagers.extend([500.0; 4]);
    let options = GameOptions::default()
        .with_bankroll(100.0)
        .with_auto_wager(10.0)
        .with_wager_retries(3);
    let mut game = game_with(options, script, &[]);

    let report = play_one(&mut game);
    let rejected = report
        .events
        .iter()
        .filter(|e| matches!(e, TurnEvent::AutoWagerRejected(_)))
        .count();
    assert_eq!(rejected, 4);
    assert!(has_event(
        &report,
        &TurnEvent::AutoWagerClamped {
            from: 500.0,
            to: 100.0
        }
    ));
    assert_eq!(report.hands[0].wager, 100.0);
}

#[test]
fn accepted_auto_wager_change_applies_to_the_deal() {
    let mut script = Script::default();
    script.change_wager.push_back(true);
    script.new_wagers.push_back(25.0);
    let mut game = game(script, &[]);

    let report = play_one(&mut game);
    assert_eq!(report.events[0], TurnEvent::AutoWagerChanged(25.0));
    assert_eq!(report.hands[0].wager, 25.0);
    assert_eq!(game.gambler().auto_wager(), 25.0);
}

#[test]
fn cashing_out_ends_the_game() {
    let mut script = Script::default();
    script.change_wager.push_back(true);
    script.new_wagers.push_back(0.0);
    let mut game = game(script, &[]);

    let mut tracker = MetricTracker::new();
    assert_eq!(game.play(&mut tracker).unwrap(), 0);
    assert_eq!(game.events(), &[TurnEvent::CashedOut]);
    assert_eq!(tracker.bankroll_progression, vec![1000.0]);
    assert_eq!(game.gambler().bankroll(), 1000.0);
}

#[test]
fn play_stops_at_max_turns() {
    let options = GameOptions::default()
        .with_bankroll(1000.0)
        .with_auto_wager(10.0)
        .with_max_turns(Some(5));
    let mut game = GameController::new(options, BasicStrategy::new(), 21);

    let mut tracker = MetricTracker::new();
    assert_eq!(game.play(&mut tracker).unwrap(), 5);
    assert_eq!(tracker.bankroll_progression.len(), 6);
    assert_eq!(
        tracker.bankroll_progression.last().copied(),
        Some(game.gambler().bankroll())
    );
}

#[test]
fn observer_sees_every_event_with_table_state() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&seen);
    let mut game = game(
        Script::actions(&[HandAction::Stand]),
        &[
            card(Suit::Spades, Rank::Ten),
            card(Suit::Hearts, Rank::Nine),
            card(Suit::Spades, Rank::Queen),
            card(Suit::Hearts, Rank::Ten),
        ],
    )
    .with_observer(move |event: &TurnEvent, gambler: &bjsim::Gambler, _: &bjsim::Dealer| {
        log.borrow_mut().push((event.to_string(), gambler.bankroll()));
    });

    let report = play_one(&mut game);
    let seen = seen.borrow();
    assert_eq!(seen.len(), report.events.len());
    assert!(seen[0].0.starts_with("Dealt"));
    // The wager is already debited when it is reported.
    assert_eq!(seen[1].1, 900.0);
    assert_eq!(seen.last().map(|(_, bankroll)| *bankroll), Some(1100.0));
}

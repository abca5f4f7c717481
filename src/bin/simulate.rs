//! Runs many independent blackjack games with a static strategy and prints
//! a summary of the results.

use std::process::ExitCode;

use bjsim::{
    BasicStrategy, DecisionSource, GameController, GameError, GameOptions, InsuranceStrategy,
    MetricTracker, Summary,
};
use clap::{Parser, ValueEnum};
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Strategy {
    /// Basic strategy, never insures.
    Basic,
    /// Basic strategy, always insures.
    Insurance,
}

#[derive(Debug, Parser)]
#[command(name = "simulate", about = "Simulate blackjack games with a static strategy")]
struct Cli {
    /// Auto-wager placed on every hand
    #[arg(short = 'a', long, default_value_t = 100.0)]
    auto_wager: f64,

    /// Starting bankroll of every game
    #[arg(short = 'b', long, default_value_t = 1000.0)]
    bankroll: f64,

    /// Number of decks in the shoe
    #[arg(short = 'd', long, default_value_t = 3)]
    decks: u8,

    /// Number of games to simulate
    #[arg(short = 'g', long, default_value_t = 100)]
    games: usize,

    /// Strategy the gambler plays
    #[arg(short = 's', long, value_enum, default_value_t = Strategy::Basic)]
    strategy: Strategy,

    /// Maximum turns per game
    #[arg(short = 't', long, default_value_t = 25)]
    turns: u32,

    /// Base seed; game `n` uses `seed + n`. Random if omitted
    #[arg(long)]
    seed: Option<u64>,
}

fn run_game<S: DecisionSource>(
    options: GameOptions,
    source: S,
    seed: u64,
) -> Result<MetricTracker, GameError> {
    let mut tracker = MetricTracker::new();
    GameController::new(options, source, seed).play(&mut tracker)?;
    Ok(tracker)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(rand::random);
    let options = GameOptions::default()
        .with_bankroll(cli.bankroll)
        .with_auto_wager(cli.auto_wager)
        .with_decks(cli.decks)
        .with_max_turns(Some(cli.turns));

    log::info!(
        "simulating {} games ({:?} strategy, base seed {seed})",
        cli.games,
        cli.strategy
    );

    let trackers = (0..cli.games)
        .into_par_iter()
        .map(|game| {
            let seed = seed.wrapping_add(game as u64);
            match cli.strategy {
                Strategy::Basic => run_game(options.clone(), BasicStrategy::new(), seed),
                Strategy::Insurance => run_game(options.clone(), InsuranceStrategy::new(), seed),
            }
        })
        .collect::<Result<Vec<_>, _>>();

    let trackers = match trackers {
        Ok(trackers) => trackers,
        Err(err) => {
            log::error!("simulation failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    match Summary::from_trackers(&trackers) {
        Some(summary) => {
            println!("{summary}");
            ExitCode::SUCCESS
        }
        None => {
            log::error!("no games were played");
            ExitCode::FAILURE
        }
    }
}

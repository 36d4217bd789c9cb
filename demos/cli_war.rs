//! CLI War example.
//!
//! Run with `cargo run --example cli_war -- --players 4 --algorithm FisherYates`.
//! Set `RUST_LOG=warrs=debug` to trace the engine.

#![allow(clippy::missing_docs_in_private_items)]

use std::process::ExitCode;
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use clap::Parser;
use tracing_subscriber::EnvFilter;
use warrs::{Game, GameConfig, Spool};

#[derive(Parser, Debug)]
#[command(name = "cli_war", about = "Watch a seeded game of War")]
struct Args {
    /// Number of players at the table.
    #[arg(short, long, default_value_t = 2)]
    players: usize,

    /// Shuffle algorithm; unknown names fall back to Random.
    #[arg(short, long, default_value = "Random")]
    algorithm: String,

    /// Seed for the shuffle and commentary; defaults to the clock.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print everything at once instead of pacing the output.
    #[arg(long)]
    no_interactive: bool,

    /// Milliseconds between paced messages.
    #[arg(long, default_value_t = 1000)]
    interval_ms: u64,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });

    let config = GameConfig::default()
        .with_players(args.players)
        .with_algorithm_name(&args.algorithm)
        .with_interactive(!args.no_interactive);

    let mut game = match Game::new(config, seed) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut spool =
        Spool::from_config(&config).with_interval(Duration::from_millis(args.interval_ms));
    let outcome = match game.run(&mut spool) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut shown_at = Duration::ZERO;
    for message in spool.drain() {
        thread::sleep(message.delay.saturating_sub(shown_at));
        shown_at = message.delay;
        println!("{}", message.text);
    }

    tracing::info!(
        seed,
        rounds = outcome.rounds,
        tie = outcome.is_tie(),
        "game complete"
    );
    ExitCode::SUCCESS
}

//! Terminal frontend for the `dg` dice-elimination game.

mod commands;

use std::process;
use std::time::Duration;

use clap::{Parser, Subcommand};
use dg_engine::GameConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "dg",
    about = "dg — a multiplayer dice-elimination game for the terminal",
    version,
    propagate_version = true
)]
struct Cli {
    /// Increase diagnostic output (-v info, -vv debug). `DG_LOG` overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one game, narrating every round
    Play {
        /// Number of players
        #[arg(short, long, default_value = "4", allow_negative_numbers = true)]
        players: i64,

        /// Dice each player starts with
        #[arg(short, long, default_value = "4", allow_negative_numbers = true)]
        dice: i64,

        /// Seconds to pause between rounds
        #[arg(long, default_value = "0")]
        delay: u64,

        /// RNG seed for a reproducible game (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Only print the final result
        #[arg(short, long)]
        quiet: bool,

        /// Print the final game state as JSON instead of narrating
        #[arg(long, conflicts_with = "quiet")]
        json: bool,
    },

    /// Play many games silently and report how they went
    Simulate {
        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Number of players
        #[arg(short, long, default_value = "4", allow_negative_numbers = true)]
        players: i64,

        /// Dice each player starts with
        #[arg(short, long, default_value = "4", allow_negative_numbers = true)]
        dice: i64,

        /// Seed of the first game; game `n` uses `seed + n`
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Play {
            players,
            dice,
            delay,
            seed,
            quiet,
            json,
        } => {
            let mut config = GameConfig::default()
                .with_players(players)
                .with_dice(dice)
                .with_delay(Duration::from_secs(delay));
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            commands::play::run(&config, quiet, json)
        }
        Commands::Simulate {
            games,
            players,
            dice,
            seed,
        } => {
            let config = GameConfig::default()
                .with_players(players)
                .with_dice(dice)
                .with_seed(seed);
            commands::simulate::run(&config, games)
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "dg=info,dg_engine=info",
        _ => "dg=debug,dg_engine=debug",
    };
    let filter = EnvFilter::try_from_env("DG_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_env_filter(filter)
        .init();
}

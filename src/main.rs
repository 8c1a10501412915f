//! WallGo: a wall-building territory game engine.
//!
//! ## Usage
//!
//! - `wallgo` - Show a demo
//! - `wallgo play` - Start the text protocol on stdin/stdout
//! - `wallgo demo --seed 3` - Play a random game and print it
//!
//! Set `RUST_LOG=debug` to trace every command.

use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use wallgo::config::GameConfig;
use wallgo::constants::{DEFAULT_BOARD_SIZE, DEFAULT_PLAYERS, DEFAULT_STONES_PER_PLAYER};
use wallgo::playout::play_random_game;
use wallgo::protocol::ProtocolEngine;

/// WallGo: a wall-building territory game engine
#[derive(Parser)]
#[command(name = "wallgo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board size (NxN)
    #[arg(long, global = true, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,

    /// Number of players
    #[arg(long, global = true, default_value_t = DEFAULT_PLAYERS)]
    players: usize,

    /// Stones each player places
    #[arg(long, global = true, default_value_t = DEFAULT_STONES_PER_PLAYER)]
    stones: usize,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read commands from stdin and answer on stdout
    Play,
    /// Play a random game and print the final board
    Demo {
        /// Seed for the random choices
        #[arg(long, default_value_t = 1)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so they never mix with protocol responses
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig::new(cli.size, cli.players, cli.stones);

    match cli.command {
        Some(Commands::Play) => {
            info!(?config, "starting text protocol");
            let mut engine = ProtocolEngine::new(config)?;
            engine.run(io::stdin().lock(), io::stdout().lock())?;
        }
        Some(Commands::Demo { seed }) => run_demo(config, seed)?,
        None => run_demo(config, 1)?,
    }
    Ok(())
}

fn run_demo(config: GameConfig, seed: u64) -> Result<()> {
    println!("WallGo: random self-play\n");
    println!(
        "{0}x{0} board, {1} players, {2} stones each, seed {seed}\n",
        config.board_size, config.players, config.stones_per_player
    );

    let (game, result) = play_random_game(config, seed)?;

    println!("{}", game.board());
    let board = game.board();
    let walls = board.horizontal_walls().count() + board.vertical_walls().count();
    println!("Walls placed: {walls}");
    for (player, region) in result.regions().iter().enumerate() {
        println!("Player {player}: region of {} cells", region.len());
    }
    println!("Result: {result}");
    Ok(())
}

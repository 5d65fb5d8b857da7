//! Gonu-Rust: a Ho-bak-gonu (pumpkin gonu) engine.
//!
//! ## Usage
//!
//! - `gonu-rust` - Watch the engine play itself
//! - `gonu-rust play` - Play against the engine (you are White)
//! - `gonu-rust play --two-player` - Hot-seat game for two humans
//! - `gonu-rust demo` - Engine self-play
//!
//! The `--depth` flag sets the search depth in plies for all modes.

use clap::{Parser, Subcommand};

use gonu_rust::board::{Board, Player};
use gonu_rust::constants::{DEFAULT_DEPTH, MAX_GAME_MOVES};
use gonu_rust::game::{Game, Mode};
use gonu_rust::search::best_move;

/// Gonu-Rust: a Ho-bak-gonu engine
#[derive(Parser)]
#[command(name = "gonu-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Minimax search depth in plies
    #[arg(long, global = true, default_value_t = DEFAULT_DEPTH)]
    depth: u32,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game against the engine
    Play {
        /// Both sides are played by humans at the same terminal
        #[arg(long)]
        two_player: bool,
    },
    /// Watch the engine play itself
    Demo,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play { two_player }) => {
            let mode = if two_player {
                Mode::HumanVsHuman
            } else {
                Mode::HumanVsEngine
            };
            Game::new(mode, cli.depth).run()
        }
        Some(Commands::Demo) | None => {
            run_demo(cli.depth);
            Ok(())
        }
    }
}

/// Engine self-play from the initial layout, one board per move.
fn run_demo(depth: u32) {
    println!("Gonu-Rust self-play demo (depth {depth})\n");

    let mut board = Board::new();
    let mut turn = Player::White;
    println!("{board}");

    for ply in 1..=MAX_GAME_MOVES {
        let Some(mv) = best_move(&board, turn, depth) else {
            println!("{turn} has no moves and loses.");
            return;
        };

        board = board.apply(mv);
        println!("{ply}. {turn} plays {mv}");
        println!("{board}");

        let next = turn.opponent();
        if !board.has_moves(next) {
            println!("{next} is trapped. {turn} wins!");
            return;
        }
        turn = next;
    }

    println!("No decision after {MAX_GAME_MOVES} plies; stopping.");
}

//! Gonu-Rust: a Ho-bak-gonu (pumpkin gonu) engine.
//!
//! Ho-bak-gonu is a Korean two-player strategy game played on a fixed
//! 11-node graph. Each turn a player slides one of their three pieces along
//! an edge to an empty node; a player left without a legal move loses.
//! There are no captures and no lines to complete, so the whole game is
//! about mobility.
//!
//! This crate provides the rules engine (move generation and move
//! application) and a depth-limited minimax search with alpha-beta pruning
//! for the computer player, plus a small terminal front end.
//!
//! ## Modules
//!
//! - [`constants`] - Board topology and search parameters
//! - [`board`] - Board state, move generation, move application
//! - [`search`] - Position evaluation and alpha-beta minimax
//! - [`game`] - Interactive terminal driver
//!
//! ## Example
//!
//! ```
//! use gonu_rust::board::{Board, Player};
//! use gonu_rust::search::best_move;
//!
//! // From the initial layout White has exactly one legal move: 1 -> 3.
//! let board = Board::new();
//! let moves = board.legal_moves(Player::White);
//! assert_eq!(moves.len(), 1);
//!
//! // Ask the engine for White's move.
//! let chosen = best_move(&board, Player::White, 4);
//! assert_eq!(chosen, Some(moves[0]));
//! ```

pub mod board;
pub mod constants;
pub mod game;
pub mod search;

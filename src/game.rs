//! Interactive terminal driver.
//!
//! The driver owns everything the engine does not: the authoritative board,
//! whose turn it is, the score tally across rounds, and all input/output.
//! Each turn it either validates a human move against the move generator or
//! asks the search for the engine's move, applies it, and checks whether the
//! next mover is immobilized, which decides the round.
//!
//! Moves are entered as two node indices, e.g. `1 3`. `moves` lists the
//! legal moves for the side to play, `quit` leaves the game.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::board::{Board, Move, Player};
use crate::constants::NODE_COUNT;
use crate::search::best_move;

/// Who drives each side.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Human plays White, the engine plays Black.
    HumanVsEngine,
    /// Two humans at the same terminal.
    HumanVsHuman,
}

/// Rounds won by each side so far.
#[derive(Debug, Default)]
pub struct Scores {
    pub white: u32,
    pub black: u32,
}

/// A running game session: board, turn, scores, and engine settings.
pub struct Game {
    board: Board,
    turn: Player,
    scores: Scores,
    mode: Mode,
    depth: u32,
}

impl Game {
    pub fn new(mode: Mode, depth: u32) -> Self {
        Self {
            board: Board::new(),
            turn: Player::White,
            scores: Scores::default(),
            mode,
            depth,
        }
    }

    /// Run rounds until the player quits. White always moves first; scores
    /// carry over between rounds.
    pub fn run(&mut self) -> Result<()> {
        println!("Ho-bak-gonu: trap your opponent so they cannot move.");
        println!("Enter moves as two node indices, e.g. '1 3'. Type 'moves' or 'quit'.");

        let stdin = io::stdin();
        let mut input = stdin.lock();

        loop {
            let Some(winner) = self.play_round(&mut input)? else {
                break;
            };

            match winner {
                Player::White => self.scores.white += 1,
                Player::Black => self.scores.black += 1,
            }
            println!("\n{winner} wins the round!");
            println!(
                "Score: White {}, Black {}",
                self.scores.white, self.scores.black
            );

            if !prompt_yes_no(&mut input, "Play another round? [y/n] ")? {
                break;
            }
            self.reset_round();
        }

        Ok(())
    }

    /// Play one round to completion. Returns the winner, or `None` if the
    /// player quit mid-round.
    fn play_round(&mut self, input: &mut impl BufRead) -> Result<Option<Player>> {
        loop {
            println!("\n{}", self.board);
            let mover = self.turn;

            let mv = if self.engine_to_move() {
                match best_move(&self.board, mover, self.depth) {
                    Some(mv) => {
                        println!("Engine plays {mv}");
                        mv
                    }
                    // The engine is already trapped before it can act: the
                    // round goes to the other side, not to an error path.
                    None => return Ok(Some(mover.opponent())),
                }
            } else {
                match self.prompt_move(&mut *input, mover)? {
                    Some(mv) => mv,
                    None => return Ok(None),
                }
            };

            self.board = self.board.apply(mv);
            self.turn = mover.opponent();

            if !self.board.has_moves(self.turn) {
                println!("\n{}", self.board);
                println!("{} has no moves left.", self.turn);
                return Ok(Some(mover));
            }
        }
    }

    fn engine_to_move(&self) -> bool {
        self.mode == Mode::HumanVsEngine && self.turn == Player::Black
    }

    fn reset_round(&mut self) {
        self.board = Board::new();
        self.turn = Player::White;
    }

    /// Prompt until a legal move or a quit. Returns `None` on quit or EOF.
    fn prompt_move(&self, input: &mut impl BufRead, mover: Player) -> Result<Option<Move>> {
        let legal = self.board.legal_moves(mover);

        loop {
            print!("{mover} to move: ");
            io::stdout().flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let line = line.trim();

            if line.is_empty() {
                continue;
            }
            if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("q") {
                return Ok(None);
            }
            if line.eq_ignore_ascii_case("moves") {
                for mv in &legal {
                    println!("  {mv}");
                }
                continue;
            }

            match parse_move(line) {
                Some(mv) if legal.contains(&mv) => return Ok(Some(mv)),
                Some(mv) => println!("Illegal move {mv}: not one of your legal moves."),
                None => println!("Could not parse that; enter two node indices like '1 3'."),
            }
        }
    }
}

/// Parse a move as two node indices separated by whitespace, '-', or ','.
fn parse_move(line: &str) -> Option<Move> {
    let mut parts = line
        .split(|c: char| c.is_whitespace() || c == '-' || c == ',')
        .filter(|s| !s.is_empty());

    let from: usize = parts.next()?.parse().ok()?;
    let to: usize = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    if from >= NODE_COUNT || to >= NODE_COUNT {
        return None;
    }
    Some(Move { from, to })
}

fn prompt_yes_no(input: &mut impl BufRead, question: &str) -> Result<bool> {
    loop {
        print!("{question}");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(false);
        }
        match line.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" | "q" | "quit" => return Ok(false),
            _ => {}
        }
    }
}

//! Board state, move generation, and move application.
//!
//! A [`Board`] is a snapshot value: eleven cells, each empty or holding a
//! white or black piece. Applying a move never mutates the board it was
//! given; it produces a new value. The engine is stateless across calls and
//! holds no board reference of its own, which is what makes the search safe
//! to run from any thread or event loop.
//!
//! Move generation is the heart of the rules: a player with an empty move
//! list has lost. That condition is reported as an empty `Vec`, never as an
//! error.

use std::fmt;
use std::str::FromStr;

use crate::constants::{ADJACENCY, NODE_COUNT};

/// One of the two sides.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Player {
    White,
    Black,
}

impl Player {
    /// The other side.
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::White => write!(f, "White"),
            Player::Black => write!(f, "Black"),
        }
    }
}

/// A single cell: empty or occupied by one side.
pub type Cell = Option<Player>;

/// A piece relocation from one node to an adjacent empty node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: usize,
    pub to: usize,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// A gonu position: the occupancy of all eleven nodes.
///
/// `Board` is `Copy` (eleven cells), so hypothetical moves during search
/// just copy the value instead of doing make/undo bookkeeping.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; NODE_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The initial layout: white on the top row (0, 1, 2), black on the
    /// bottom row (8, 9, 10), the wheel empty.
    pub fn new() -> Self {
        let mut cells = [None; NODE_COUNT];
        for node in 0..3 {
            cells[node] = Some(Player::White);
        }
        for node in 8..NODE_COUNT {
            cells[node] = Some(Player::Black);
        }
        Board { cells }
    }

    /// An empty board, mostly useful for building test positions.
    pub fn empty() -> Self {
        Board {
            cells: [None; NODE_COUNT],
        }
    }

    /// Build a board from explicit cell contents.
    pub fn from_cells(cells: [Cell; NODE_COUNT]) -> Self {
        Board { cells }
    }

    /// The occupant of a node.
    #[inline]
    pub fn get(&self, node: usize) -> Cell {
        self.cells[node]
    }

    /// Number of pieces the given side has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.cells.iter().filter(|&&c| c == Some(player)).count()
    }

    /// All legal moves for `player`, in ascending `from` order and
    /// adjacency-list order for `to`.
    ///
    /// An empty result means `player` is immobilized and has lost; it is a
    /// meaningful outcome, not an error. Malformed boards are the caller's
    /// problem; this is a low-level primitive with no validation.
    pub fn legal_moves(&self, player: Player) -> Vec<Move> {
        let mut moves = Vec::new();
        for (from, &cell) in self.cells.iter().enumerate() {
            if cell != Some(player) {
                continue;
            }
            for &to in ADJACENCY[from] {
                if self.cells[to].is_none() {
                    moves.push(Move { from, to });
                }
            }
        }
        moves
    }

    /// Whether `player` has at least one legal move.
    ///
    /// Cheaper than [`Board::legal_moves`] when only the immobilization
    /// check is needed, which is the hot path of the search.
    pub fn has_moves(&self, player: Player) -> bool {
        self.cells.iter().enumerate().any(|(from, &cell)| {
            cell == Some(player) && ADJACENCY[from].iter().any(|&to| self.cells[to].is_none())
        })
    }

    /// Apply a legal move, producing the resulting board.
    ///
    /// The move must come from [`Board::legal_moves`]; applying anything
    /// else is a caller bug.
    pub fn apply(&self, mv: Move) -> Board {
        debug_assert!(self.cells[mv.from].is_some(), "move from an empty node");
        debug_assert!(self.cells[mv.to].is_none(), "move onto an occupied node");
        debug_assert!(ADJACENCY[mv.from].contains(&mv.to), "move along a non-edge");
        let mut next = *self;
        next.cells[mv.to] = next.cells[mv.from];
        next.cells[mv.from] = None;
        next
    }
}

/// Parse failure for the compact board notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseBoardError {
    /// The string does not have exactly one character per node.
    BadLength(usize),
    /// A character other than `W`, `B`, or `.` appeared.
    BadCell(char),
}

impl fmt::Display for ParseBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseBoardError::BadLength(len) => {
                write!(f, "expected {NODE_COUNT} cells, got {len}")
            }
            ParseBoardError::BadCell(c) => {
                write!(f, "expected 'W', 'B', or '.', got {c:?}")
            }
        }
    }
}

impl std::error::Error for ParseBoardError {}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Compact notation: one character per node in index order,
    /// `W`/`B` for pieces and `.` for an empty cell, e.g. the initial
    /// layout is `"WWW.....BBB"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != NODE_COUNT {
            return Err(ParseBoardError::BadLength(chars.len()));
        }
        let mut cells = [None; NODE_COUNT];
        for (node, &c) in chars.iter().enumerate() {
            cells[node] = match c {
                'W' | 'w' => Some(Player::White),
                'B' | 'b' => Some(Player::Black),
                '.' => None,
                other => return Err(ParseBoardError::BadCell(other)),
            };
        }
        Ok(Board { cells })
    }
}

#[inline]
fn cell_char(cell: Cell) -> char {
    match cell {
        Some(Player::White) => 'W',
        Some(Player::Black) => 'B',
        None => '.',
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = |node: usize| cell_char(self.cells[node]);
        writeln!(f, "{}---{}---{}", c(0), c(1), c(2))?;
        writeln!(f, "    |")?;
        writeln!(f, "    {}", c(3))?;
        writeln!(f, "  / | \\")?;
        writeln!(f, " {}--{}--{}", c(4), c(5), c(6))?;
        writeln!(f, "  \\ | /")?;
        writeln!(f, "    {}", c(7))?;
        writeln!(f, "    |")?;
        writeln!(f, "{}---{}---{}", c(8), c(9), c(10))
    }
}

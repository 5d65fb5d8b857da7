//! Board topology and engine parameters.
//!
//! The gonu board is a fixed 11-node graph: a row of three nodes at the top,
//! a row of three at the bottom, and a five-node wheel in between (a hub
//! connected to four rim nodes). The top and bottom rows each link into the
//! wheel through their center node.
//!
//! All of the search tuning values live here as named constants. They encode
//! play strength, not correctness; changing them changes how the engine
//! plays, nothing else.

// =============================================================================
// Board Topology
// =============================================================================

/// Number of nodes on the board.
pub const NODE_COUNT: usize = 11;

/// Pieces per side in the initial layout.
pub const PIECES_PER_SIDE: usize = 3;

/// Adjacency list: `ADJACENCY[i]` are the nodes one move away from node `i`.
///
/// Node layout:
///
/// ```text
/// 0---1---2
///     |
///     3
///   / | \
///  4--5--6
///   \ | /
///     7
///     |
/// 8---9---10
/// ```
pub const ADJACENCY: [&[usize]; NODE_COUNT] = [
    &[1],          // 0: top left
    &[0, 2, 3],    // 1: top center, gateway into the wheel
    &[1],          // 2: top right
    &[1, 4, 5, 6], // 3: wheel top
    &[3, 5, 7],    // 4: wheel left
    &[3, 4, 6, 7], // 5: hub
    &[3, 5, 7],    // 6: wheel right
    &[4, 5, 6, 9], // 7: wheel bottom, gateway to the bottom row
    &[9],          // 8: bottom left
    &[7, 8, 10],   // 9: bottom center
    &[9],          // 10: bottom right
];

/// The wheel hub and its four rim nodes.
///
/// The hub has the highest branching factor on the board, so holding these
/// nodes constrains both sides' future mobility.
pub const CENTRAL_NODES: [usize; 5] = [3, 4, 5, 6, 7];

// =============================================================================
// Search Parameters
// =============================================================================

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u32 = 4;

/// Score of a decided position: a side with no legal moves has lost.
pub const WIN_SCORE: i32 = 10_000;

/// Evaluation weight per legal move of our own.
pub const OWN_MOBILITY_WEIGHT: i32 = 20;

/// Evaluation weight per legal move of the opponent.
///
/// Heavier than [`OWN_MOBILITY_WEIGHT`]: the only way to win is to take the
/// opponent's moves away, so denying mobility is the offensive action here.
pub const OPPONENT_MOBILITY_WEIGHT: i32 = 50;

/// Evaluation bonus for each central node a side occupies.
pub const CENTER_BONUS: i32 = 30;

// =============================================================================
// Driver Limits
// =============================================================================

/// Ply cap for engine self-play; gonu positions can repeat forever.
pub const MAX_GAME_MOVES: usize = 100;

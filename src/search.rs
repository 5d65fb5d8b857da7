//! Position evaluation and depth-limited minimax with alpha-beta pruning.
//!
//! Victory in gonu is purely about mobility, so the evaluation counts legal
//! moves instead of material: denying the opponent a move is weighted more
//! heavily than gaining one of our own, with a bonus for holding the central
//! wheel where the branching factor is highest.
//!
//! [`best_move`] shuffles the candidate moves before scoring them so that
//! equally good moves are chosen at random, and short-circuits on any move
//! that immobilizes the opponent outright; an immobilizing move is always
//! optimal, so there is nothing left to search.
//!
//! Everything here is pure computation over board snapshots. No state
//! survives a call, which keeps the search safe to dispatch from a worker
//! thread or run inline in an event loop.

use crate::board::{Board, Move, Player};
use crate::constants::{
    CENTER_BONUS, CENTRAL_NODES, OPPONENT_MOBILITY_WEIGHT, OWN_MOBILITY_WEIGHT, WIN_SCORE,
};

/// Static evaluation of `board` from `ai`'s point of view.
///
/// Returns `WIN_SCORE` if the opponent is immobilized, `-WIN_SCORE` if `ai`
/// is, and otherwise a mobility balance plus the central-node bonus. Used at
/// the depth frontier of the search; terminal nodes are scored before this
/// is consulted.
pub fn evaluate(board: &Board, ai: Player) -> i32 {
    let opponent = ai.opponent();
    let ai_moves = board.legal_moves(ai).len() as i32;
    let opp_moves = board.legal_moves(opponent).len() as i32;

    if opp_moves == 0 {
        return WIN_SCORE;
    }
    if ai_moves == 0 {
        return -WIN_SCORE;
    }

    let mut score = ai_moves * OWN_MOBILITY_WEIGHT - opp_moves * OPPONENT_MOBILITY_WEIGHT;

    for &node in &CENTRAL_NODES {
        match board.get(node) {
            Some(p) if p == ai => score += CENTER_BONUS,
            Some(_) => score -= CENTER_BONUS,
            None => {}
        }
    }

    score
}

/// Minimax score of `board` with alpha-beta pruning.
///
/// `maximizing` selects whose turn it is at this node: `true` means `ai`
/// moves, `false` means the opponent does. A mover without a legal move is
/// a terminal node and scores `WIN_SCORE` or `-WIN_SCORE` regardless of the
/// remaining depth; otherwise depth 0 falls back to [`evaluate`].
///
/// Called with a full `(i32::MIN, i32::MAX)` window this returns the exact
/// minimax value; the pruning only skips subtrees that cannot change it.
pub fn minimax(
    board: &Board,
    depth: u32,
    maximizing: bool,
    ai: Player,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    let mover = if maximizing { ai } else { ai.opponent() };
    let moves = board.legal_moves(mover);

    // A blocked mover has lost, no matter how much depth is left.
    if moves.is_empty() {
        return if maximizing { -WIN_SCORE } else { WIN_SCORE };
    }

    if depth == 0 {
        return evaluate(board, ai);
    }

    if maximizing {
        let mut best = i32::MIN;
        for mv in moves {
            let child = board.apply(mv);
            let score = minimax(&child, depth - 1, false, ai, alpha, beta);
            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = i32::MAX;
        for mv in moves {
            let child = board.apply(mv);
            let score = minimax(&child, depth - 1, true, ai, alpha, beta);
            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

/// Choose a move for `player`, searching `depth` plies ahead.
///
/// Returns `None` when `player` has no legal move, meaning the engine has
/// already lost before acting; the caller must award the game to the
/// opponent rather than treat this as a failure.
///
/// Candidates are shuffled first so that ties between equally scored moves
/// resolve randomly instead of always favoring the lowest node index. Seed
/// the global RNG with [`fastrand::seed`] for reproducible play.
pub fn best_move(board: &Board, player: Player, depth: u32) -> Option<Move> {
    let mut moves = board.legal_moves(player);
    if moves.is_empty() {
        return None;
    }
    fastrand::shuffle(&mut moves);

    let opponent = player.opponent();
    let mut best_score = i32::MIN;
    let mut best = None;

    for mv in moves {
        let child = board.apply(mv);

        // Immediate-win shortcut: a move that traps the opponent is always
        // optimal, skip the recursion.
        if !child.has_moves(opponent) {
            return Some(mv);
        }

        let score = minimax(
            &child,
            depth.saturating_sub(1),
            false,
            player,
            i32::MIN,
            i32::MAX,
        );
        // Strict improvement only: ties keep the earlier candidate, which
        // together with the shuffle picks uniformly among tied-best moves.
        if score > best_score {
            best_score = score;
            best = Some(mv);
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_DEPTH;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_evaluate_initial_board_is_symmetric() {
        // One move each, no central nodes held: 1*20 - 1*50 = -30 for
        // either side.
        let start = Board::new();
        assert_eq!(evaluate(&start, Player::White), -30);
        assert_eq!(evaluate(&start, Player::Black), -30);
    }

    #[test]
    fn test_evaluate_terminal_positions() {
        // White is walled in on the top row.
        let b = board("WWWB.B...B.");
        assert_eq!(evaluate(&b, Player::Black), WIN_SCORE);
        assert_eq!(evaluate(&b, Player::White), -WIN_SCORE);
    }

    #[test]
    fn test_evaluate_mobility_and_center() {
        // White: only 1 -> 3. Black: 4 -> {3,5,7}, 8 -> 9, 10 -> 9, five
        // moves, plus node 4 held in the wheel.
        // For Black: 5*20 - 1*50 + 30 = 80.
        let b = board("WWW.B...B.B");
        assert_eq!(evaluate(&b, Player::Black), 80);
    }

    #[test]
    fn test_minimax_terminal_beats_depth() {
        let b = board("WWWB.B...B.");
        // White to move and blocked: loss for the maximizer, win for the
        // minimizer's opponent, at any depth.
        assert_eq!(
            minimax(&b, 6, true, Player::White, i32::MIN, i32::MAX),
            -WIN_SCORE
        );
        assert_eq!(
            minimax(&b, 0, false, Player::Black, i32::MIN, i32::MAX),
            WIN_SCORE
        );
    }

    #[test]
    fn test_best_move_none_when_blocked() {
        let b = board("WWWB.B...B.");
        assert_eq!(best_move(&b, Player::White, DEFAULT_DEPTH), None);
    }

    #[test]
    fn test_best_move_takes_immediate_win() {
        // Black's 4 -> 3 seals White's last exit. The shortcut must find it
        // whatever order the shuffle produces.
        let b = board("WWW.B...B.B");
        for seed in 0..32 {
            fastrand::seed(seed);
            assert_eq!(
                best_move(&b, Player::Black, DEFAULT_DEPTH),
                Some(Move { from: 4, to: 3 })
            );
        }
    }

    #[test]
    fn test_best_move_from_initial_board() {
        let start = Board::new();
        assert_eq!(
            best_move(&start, Player::White, DEFAULT_DEPTH),
            Some(Move { from: 1, to: 3 })
        );
    }
}

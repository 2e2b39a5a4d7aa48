// Negamax Search with Alpha-Beta Pruning
//
// Negamax uses the zero-sum property of chess, max(a, b) = -min(-a, -b):
// one function searches for both sides and negates the score at each level.
//
// Each node:
// - polls the search context and unwinds with 0 once the budget is spent
// - drops into quiescence search at the horizon
// - answers from the transposition table when the stored bound settles it
// - otherwise searches the ordered moves, cutting off on a fail high
//
// The root has its own move loop: it never answers from the table, and it
// always has a concrete move to report.

use super::evaluation::{mated_score, DRAW_SCORE, MATE_SCORE};
use super::move_ordering::order_moves;
use super::quiescence::quiesce;
use super::time_control::SearchContext;
use super::transposition_table::{score_from_table, score_to_table, Bound, TranspositionEntry, TranspositionTable};
use crate::game_repr::{MoveList, SearchPosition};

/// Window bound; larger than any score a node can return
pub const INFINITY: i32 = 100_000;

/// Scores beyond this magnitude come from a forced mate
pub const MATE_THRESHOLD: i32 = MATE_SCORE - 200;

/// Helper function to detect if a score represents a mate
pub fn is_mate_score(score: i32) -> bool {
    score.abs() > MATE_THRESHOLD
}

/// Outcome of one completed root iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootMove<M> {
    pub best_move: M,
    pub score: i32,
}

/// Negamax search with alpha-beta pruning
///
/// # Arguments
///
/// * `pos` - Current position (mutated and restored by make/undo)
/// * `ctx` - Cancellation token and node counter
/// * `tt` - Transposition table for caching positions
/// * `alpha` - Lower bound
/// * `beta` - Upper bound
/// * `depth` - Remaining search depth (0 = call quiescence)
/// * `ply_from_root` - Distance from the root, for mate scoring
///
/// # Returns
///
/// Score from the perspective of the side to move. Once `ctx` has aborted
/// the value is meaningless and the caller must discard it.
pub fn negamax<P: SearchPosition>(
    pos: &mut P,
    ctx: &mut SearchContext<'_>,
    tt: &mut TranspositionTable<P::Move>,
    mut alpha: i32,
    beta: i32,
    depth: i32,
    ply_from_root: u32,
) -> i32 {
    if ctx.should_stop() {
        return 0;
    }

    if depth <= 0 {
        let limit = ctx.quiescence_limit;
        return quiesce(pos, ctx, alpha, beta, limit, ply_from_root);
    }

    ctx.nodes += 1;

    let key = pos.zobrist_key();
    let mut hash_move = None;

    if let Some(entry) = tt.probe(key) {
        let entry = TranspositionEntry {
            score: score_from_table(entry.score, ply_from_root),
            ..*entry
        };
        if let Some(score) = entry.usable_score(depth, alpha, beta) {
            return score;
        }
        // Still worth trying first even when the score is not usable
        hash_move = entry.best_move;
    }

    let mut moves = MoveList::new();
    pos.legal_moves_into(false, &mut moves);

    if moves.is_empty() {
        return if pos.is_in_checkmate() {
            mated_score(ply_from_root)
        } else {
            DRAW_SCORE
        };
    }

    order_moves(&*pos, &mut moves, hash_move);

    let original_alpha = alpha;
    let mut best_score = -INFINITY;
    let mut best_move = None;

    for mv in moves {
        let score = {
            let mut child = pos.play(mv);
            -negamax(&mut *child, ctx, tt, -beta, -alpha, depth - 1, ply_from_root + 1)
        };

        if ctx.aborted() {
            return 0;
        }

        if score > best_score {
            best_score = score;
            best_move = Some(mv);
        }

        if best_score >= beta {
            break;
        }

        if best_score > alpha {
            alpha = best_score;
        }
    }

    tt.store(
        key,
        score_to_table(best_score, ply_from_root),
        depth,
        Bound::classify(best_score, original_alpha, beta),
        best_move,
    );

    best_score
}

/// Search every root move to `depth` with a full window
///
/// The best move starts as the first ordered move, so a result always names
/// a legal move. Returns `None` only when the root has no legal moves. If
/// the context aborts part way, the partial result is returned and the
/// caller is expected to check `ctx.aborted()`.
pub fn search_root<P: SearchPosition>(
    pos: &mut P,
    ctx: &mut SearchContext<'_>,
    tt: &mut TranspositionTable<P::Move>,
    depth: i32,
) -> Option<RootMove<P::Move>> {
    let key = pos.zobrist_key();
    let hash_move = tt.probe(key).and_then(|entry| entry.best_move);

    let mut moves = MoveList::new();
    pos.legal_moves_into(false, &mut moves);
    order_moves(&*pos, &mut moves, hash_move);

    let mut best = RootMove {
        best_move: *moves.first()?,
        score: -INFINITY,
    };
    let mut alpha = -INFINITY;
    let beta = INFINITY;

    ctx.nodes += 1;

    for mv in moves {
        if ctx.should_stop() {
            break;
        }

        let score = {
            let mut child = pos.play(mv);
            -negamax(&mut *child, ctx, tt, -beta, -alpha, depth - 1, 1)
        };

        if ctx.aborted() {
            break;
        }

        if score > best.score {
            best = RootMove { best_move: mv, score };
        }

        if score > alpha {
            alpha = score;
        }
    }

    if !ctx.aborted() {
        tt.store(key, best.score, depth, Bound::Exact, Some(best.best_move));
    }

    Some(best)
}

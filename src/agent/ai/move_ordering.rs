// Move ordering for alpha-beta search
//
// Priority, highest first:
// 1. The transposition table's stored move for this position
// 2. Captures by MVV-LVA (most valuable victim, least valuable attacker)
// 3. Promotions by promoted piece
// 4. Everything else
//
// Equal scores keep generation order.

use crate::game_repr::{MoveInfo, MoveList, SearchPosition};
use smallvec::SmallVec;

/// Score given to the hash move; above any capture score
pub const HASH_MOVE_SCORE: i32 = 100_000;

/// Score for move ordering (higher = better)
#[derive(Debug, Clone, Copy)]
struct MoveScore<M> {
    mov: M,
    score: i32,
}

/// Score a single move for ordering purposes
///
/// A capture scores `100 * victim - attacker` using piece ordinals
/// (pawn 1 .. king 6), so taking a queen with a pawn beats taking it with a
/// rook, and any capture beats a promotion.
pub fn score_move(info: &MoveInfo) -> i32 {
    if let Some(victim) = info.captured {
        return 100 * victim.ordinal() - info.moving.ordinal();
    }

    if let Some(promoted) = info.promotion {
        return promoted.ordinal();
    }

    0
}

/// Reorder `moves` in place, best candidates first
pub fn order_moves<P: SearchPosition>(pos: &P, moves: &mut MoveList<P::Move>, hash_move: Option<P::Move>) {
    if moves.len() < 2 {
        return;
    }

    let mut scored_moves: SmallVec<[MoveScore<P::Move>; 64]> = moves
        .iter()
        .map(|&mov| MoveScore {
            mov,
            score: if Some(mov) == hash_move {
                HASH_MOVE_SCORE
            } else {
                score_move(&pos.classify(mov))
            },
        })
        .collect();

    // Stable, so ties keep generation order
    scored_moves.sort_by(|a, b| b.score.cmp(&a.score));

    for (slot, scored) in moves.iter_mut().zip(scored_moves) {
        *slot = scored.mov;
    }
}

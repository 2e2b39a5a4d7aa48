// Quiescence Search - Tactical Stability Extension
//
// A fixed-depth search that stops in the middle of an exchange misjudges the
// position: after QxP it believes it is a pawn up, one ply before PxQ.
// Below the horizon we keep searching captures only, so leaves are scored
// once the exchange has played out.
//
// The side to move may always decline to capture, so the static evaluation
// ("stand pat") is a lower bound on the node. A hard ply limit bounds the
// extension no matter how many captures remain; past it the stand pat is
// trusted as is.

use super::evaluation::evaluate;
use super::move_ordering::order_moves;
use super::time_control::SearchContext;
use crate::game_repr::{MoveList, SearchPosition};

/// Quiescence search - search captures until the ply limit runs out
///
/// # Arguments
///
/// * `pos` - Current position (mutated and restored by make/undo)
/// * `ctx` - Search context; counts nodes and picks the evaluator
/// * `alpha` - Lower bound
/// * `beta` - Upper bound
/// * `plies_remaining` - Capture plies still allowed below this node
/// * `ply_from_root` - Distance from the root, for mate scoring
///
/// # Returns
///
/// Fail-hard score from the perspective of the side to move
pub fn quiesce<P: SearchPosition>(
    pos: &mut P,
    ctx: &mut SearchContext<'_>,
    mut alpha: i32,
    beta: i32,
    plies_remaining: u8,
    ply_from_root: u32,
) -> i32 {
    ctx.nodes += 1;

    let stand_pat = evaluate(&*pos, ply_from_root, ctx.eval_style);

    if plies_remaining == 0 {
        return stand_pat;
    }

    if stand_pat >= beta {
        return beta;
    }

    if stand_pat > alpha {
        alpha = stand_pat;
    }

    let mut captures = MoveList::new();
    pos.legal_moves_into(true, &mut captures);
    order_moves(&*pos, &mut captures, None);

    for mv in captures {
        let score = {
            let mut child = pos.play(mv);
            -quiesce(&mut *child, ctx, -beta, -alpha, plies_remaining - 1, ply_from_root + 1)
        };

        if score >= beta {
            return beta;
        }

        if score > alpha {
            alpha = score;
        }
    }

    alpha
}

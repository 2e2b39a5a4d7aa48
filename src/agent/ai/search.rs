// Iterative Deepening Search Orchestrator
//
// Searches depth 1, 2, 3, ... until the depth ceiling, the move budget or a
// proven mate stops it. Each iteration seeds the next through the
// transposition table: the previous best root move is ordered first.
// An iteration cut short by the clock is thrown away whole.

use super::config::SearchConfig;
use super::move_ordering::order_moves;
use super::negamax::{is_mate_score, search_root};
use super::time_control::{Clock, SearchContext};
use super::transposition_table::TranspositionTable;
use crate::game_repr::{MoveList, SearchPosition};

/// Result of a search operation
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<M> {
    /// `None` only when the position has no legal moves
    pub best_move: Option<M>,
    pub score: i32,
    /// Last fully completed depth; 0 if none completed
    pub depth: i32,
    pub nodes_searched: u64,
    pub time_ms: u64,
}

impl<M> SearchResult<M> {
    /// Create a new search result with no move found
    pub fn new() -> Self {
        Self {
            best_move: None,
            score: 0,
            depth: 0,
            nodes_searched: 0,
            time_ms: 0,
        }
    }

    /// Nodes per second over the whole search
    pub fn nps(&self) -> u64 {
        if self.time_ms > 0 {
            self.nodes_searched * 1000 / self.time_ms
        } else {
            self.nodes_searched
        }
    }
}

impl<M> Default for SearchResult<M> {
    fn default() -> Self {
        Self::new()
    }
}

/// Perform iterative deepening search to find the best move
///
/// # Arguments
/// * `pos` - Position to search; restored before returning
/// * `clock` - Turn clock; the move budget is `remaining / time_divisor`
/// * `tt` - Transposition table, kept across turns by the caller
/// * `config` - Depth ceiling, quiescence limit and evaluator
///
/// # Returns
/// SearchResult with the move of the deepest completed iteration, or the
/// first ordered legal move when not even depth 1 completed
pub fn iterative_deepening_search<P: SearchPosition>(
    pos: &mut P,
    clock: &dyn Clock,
    tt: &mut TranspositionTable<P::Move>,
    config: &SearchConfig,
) -> SearchResult<P::Move> {
    let mut ctx = SearchContext::new(clock, config);
    let mut result = SearchResult::new();

    result.best_move = first_ordered_move(pos);
    if result.best_move.is_none() {
        log::debug!("no legal moves, nothing to search");
        return result;
    }

    for depth in 1..=config.max_depth.max(1) {
        let Some(root) = search_root(pos, &mut ctx, tt, depth) else {
            break;
        };

        if ctx.aborted() {
            log::debug!(
                "depth {} aborted after {} ms (budget {} ms), keeping depth {}",
                depth,
                ctx.elapsed_ms(),
                ctx.budget_ms(),
                result.depth
            );
            break;
        }

        result.best_move = Some(root.best_move);
        result.score = root.score;
        result.depth = depth;
        result.nodes_searched = ctx.nodes;
        result.time_ms = ctx.elapsed_ms();

        print_search_info(&result);

        if is_mate_score(root.score) {
            log::debug!("mate score {} at depth {}, stopping early", root.score, depth);
            break;
        }
    }

    result.nodes_searched = ctx.nodes;
    result.time_ms = ctx.elapsed_ms();
    log::debug!(
        "transposition table: {} of {} buckets used, hit rate {:.1}%",
        tt.size(),
        tt.capacity(),
        tt.hit_rate() * 100.0
    );

    result
}

fn first_ordered_move<P: SearchPosition>(pos: &P) -> Option<P::Move> {
    let mut moves = MoveList::new();
    pos.legal_moves_into(false, &mut moves);
    order_moves(pos, &mut moves, None);
    moves.first().copied()
}

/// Log search information for a completed depth
fn print_search_info<M: std::fmt::Debug>(result: &SearchResult<M>) {
    log::info!(
        "depth {} score cp {} nodes {} time {} nps {} pv {:?}",
        result.depth,
        result.score,
        result.nodes_searched,
        result.time_ms,
        result.nps(),
        result.best_move
    );
}

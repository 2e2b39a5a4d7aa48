// AI Agent - Negamax with Alpha-Beta Pruning
//
// A classical chess AI: iterative deepening negamax with alpha-beta pruning,
// a transposition table and a capture-only quiescence search, scored by a
// phase-blended piece-square evaluation.
//
// Key features:
// - Works against any rules engine implementing `SearchPosition`
// - Deterministic for a given position, table state and completed depth
// - Cooperative time control through a per-search context
// - Transposition table kept across the turns of one game

mod config;
mod evaluation;
mod move_ordering;
mod negamax;
mod negamax_player;
mod piece_square_tables;
mod quiescence;
mod search;
mod time_control;
mod transposition_table;

#[cfg(test)]
mod tests;

pub use config::{Difficulty, EvalStyle, SearchConfig};
pub use negamax_player::NegamaxPlayer;
pub use time_control::{Clock, SearchContext, TurnTimer};

// Re-export useful types
pub use evaluation::{evaluate, game_phase, mated_score, DRAW_SCORE, MATE_SCORE};
pub use move_ordering::{order_moves, score_move};
pub use negamax::{is_mate_score, negamax, search_root, RootMove, INFINITY, MATE_THRESHOLD};
pub use quiescence::quiesce;
pub use search::{iterative_deepening_search, SearchResult};
pub use transposition_table::{Bound, TranspositionEntry, TranspositionTable};

//! Chess move selection: iterative deepening negamax with alpha-beta pruning,
//! a transposition table and quiescence search, played through any rules
//! engine that implements [`game_repr::SearchPosition`].

pub mod agent;
pub mod error;
pub mod game_repr;

pub use agent::ai::{Difficulty, EvalStyle, NegamaxPlayer, SearchConfig, SearchResult, TurnTimer};
pub use error::{PositionError, PositionResult};
pub use game_repr::{ChessPosition, SearchPosition};

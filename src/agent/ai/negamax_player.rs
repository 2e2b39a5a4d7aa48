//! NegamaxPlayer - Classical chess AI using Negamax with Alpha-Beta pruning
//!
//! The player owns the transposition table, so results found on one turn
//! keep paying off on the next. The table is cleared when a game ends.
//! Move selection itself is delegated to
//! [`iterative_deepening_search`](super::search::iterative_deepening_search).
//!
//! # Examples
//!
//! ```rust,no_run
//! use chess_bot::agent::ai::{Difficulty, NegamaxPlayer, SearchConfig, TurnTimer};
//! use chess::ChessMove;
//! use chess_bot::game_repr::ChessPosition;
//!
//! // Create an AI with medium difficulty
//! let mut ai: NegamaxPlayer<ChessMove> = NegamaxPlayer::with_difficulty(Difficulty::Medium);
//!
//! // Or create with custom settings
//! let config = SearchConfig::default().with_max_depth(5);
//! let custom: NegamaxPlayer<ChessMove> = NegamaxPlayer::new(config, "Deep Blue".to_string());
//!
//! let mut pos = ChessPosition::default();
//! let result = ai.select_move(&mut pos, &TurnTimer::start(60_000));
//! println!("{:?} at depth {}", result.best_move, result.depth);
//! ```

use super::config::{Difficulty, SearchConfig};
use super::search::{iterative_deepening_search, SearchResult};
use super::time_control::Clock;
use super::transposition_table::TranspositionTable;
use crate::agent::player::{GameResult, Player};
use crate::game_repr::SearchPosition;

/// AI Player that uses Negamax algorithm with alpha-beta pruning
///
/// Deterministic for a given position, table state and completed depth.
/// Generic over the move type of the rules engine it plays through.
pub struct NegamaxPlayer<M> {
    config: SearchConfig,

    /// Persists across turns of one game
    tt: TranspositionTable<M>,

    /// Display name for this AI player
    name: String,

    last_result: Option<SearchResult<M>>,
}

impl<M: Copy> NegamaxPlayer<M> {
    /// Create a new NegamaxPlayer with custom settings and name
    ///
    /// Allocates the transposition table up front.
    pub fn new(config: SearchConfig, name: String) -> Self {
        Self {
            tt: TranspositionTable::with_capacity(config.tt_capacity),
            config,
            name,
            last_result: None,
        }
    }

    /// Create a new NegamaxPlayer with specified difficulty and auto-generated name
    ///
    /// The player name is "AI ({difficulty})".
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        let name = format!("AI ({})", difficulty.name());
        Self::new(difficulty.config(), name)
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search settings for future moves; the table is kept unless its
    /// capacity changes
    pub fn set_config(&mut self, config: SearchConfig) {
        if config.tt_capacity != self.tt.capacity() {
            self.tt = TranspositionTable::with_capacity(config.tt_capacity);
        }
        self.config = config;
    }

    /// Read-only view of the transposition table, for statistics
    pub fn table(&self) -> &TranspositionTable<M> {
        &self.tt
    }

    /// Result of the most recent search, if any
    pub fn last_result(&self) -> Option<&SearchResult<M>> {
        self.last_result.as_ref()
    }

    /// Forget everything learned in the previous game
    pub fn new_game(&mut self) {
        log::debug!(
            "[{}] clearing transposition table ({} entries, hit rate {:.1}%)",
            self.name,
            self.tt.size(),
            self.tt.hit_rate() * 100.0
        );
        self.tt.clear();
        self.last_result = None;
    }

    /// Search `pos` within the clock's per-move budget
    ///
    /// `pos` is restored before returning. The result names a legal move
    /// unless `pos` has none.
    pub fn select_move<P>(&mut self, pos: &mut P, clock: &dyn Clock) -> SearchResult<M>
    where
        P: SearchPosition<Move = M>,
    {
        let result = iterative_deepening_search(pos, clock, &mut self.tt, &self.config);

        log::debug!(
            "[{}] searched to depth {}, {} nodes in {} ms, score {}",
            self.name,
            result.depth,
            result.nodes_searched,
            result.time_ms,
            result.score
        );

        self.last_result = Some(result.clone());
        result
    }
}

impl<M: Copy> Default for NegamaxPlayer<M> {
    fn default() -> Self {
        Self::new(SearchConfig::default(), "AI (Negamax)".to_string())
    }
}

impl<P: SearchPosition> Player<P> for NegamaxPlayer<P::Move> {
    fn get_move(&mut self, pos: &mut P, clock: &dyn Clock) -> Option<P::Move> {
        self.select_move(pos, clock).best_move
    }

    fn game_ended(&mut self, result: GameResult) {
        log::debug!("[{}] game over: {:?}", self.name, result);
        self.new_game();
    }

    fn name(&self) -> &str {
        &self.name
    }
}

//! Player trait and associated types for chess game agents.
//!
//! A host program runs the game: it owns the position and the clocks, and once
//! per turn asks the player to move. The player only sees the position through
//! [`SearchPosition`] and the time through [`Clock`], so any rules engine and
//! any timer can drive it.
//!
//! # Synchronous Design
//!
//! `get_move()` blocks until a move is chosen. The search inside it is
//! single-threaded and bounded by the clock it is handed.
//!
//! # Examples
//!
//! ```rust,no_run
//! use chess_bot::agent::ai::{Difficulty, NegamaxPlayer, TurnTimer};
//! use chess_bot::agent::player::Player;
//! use chess_bot::game_repr::ChessPosition;
//!
//! let mut pos = ChessPosition::default();
//! let mut bot = NegamaxPlayer::with_difficulty(Difficulty::Medium);
//! let timer = TurnTimer::start(60_000);
//! let mv = bot.get_move(&mut pos, &timer);
//! ```

use super::ai::Clock;
use crate::game_repr::SearchPosition;

/// Result of a completed chess game.
///
/// Passed to players via `game_ended()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// White player won the game (Black was checkmated or resigned)
    WhiteWins,
    /// Black player won the game (White was checkmated or resigned)
    BlackWins,
    /// Game ended in a draw (by agreement, insufficient material, 50-move rule, etc.)
    Draw,
    /// Player to move has no legal moves but is not in check
    Stalemate,
}

impl GameResult {
    /// Create a GameResult from the winning side
    pub fn from_winner(white_won: bool) -> Self {
        if white_won {
            GameResult::WhiteWins
        } else {
            GameResult::BlackWins
        }
    }

    /// Result of a game that just stopped at `pos`, if it is over
    pub fn from_final_position<P: SearchPosition>(pos: &P) -> Option<Self> {
        if pos.is_in_checkmate() {
            // The side to move is the side that got mated
            return Some(Self::from_winner(!pos.white_to_move()));
        }

        let mut moves = crate::game_repr::MoveList::new();
        pos.legal_moves_into(false, &mut moves);
        moves.is_empty().then_some(GameResult::Stalemate)
    }
}

/// Trait for entities that can provide chess moves.
///
/// Only `get_move()` must be implemented. The notification hooks default to
/// doing nothing.
pub trait Player<P: SearchPosition> {
    /// Request the next move for the side to move in `pos`.
    ///
    /// `pos` may be mutated during the call but must be returned unchanged.
    ///
    /// # Return Value
    ///
    /// - `Some(mv)`: a legal move of `pos`
    /// - `None`: the position has no legal moves
    fn get_move(&mut self, pos: &mut P, clock: &dyn Clock) -> Option<P::Move>;

    /// Notify this player that the opponent made a move.
    fn opponent_moved(&mut self, _mv: P::Move) {
        // Default: do nothing
    }

    /// Notify this player that the game has ended.
    ///
    /// Players that keep state across turns reset it here.
    fn game_ended(&mut self, _result: GameResult) {
        // Default: do nothing
    }

    /// Get the display name of this player.
    fn name(&self) -> &str {
        "Player"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::ChessPosition;

    #[test]
    fn test_result_from_mated_position() {
        // Fool's mate: White to move and mated
        let pos = ChessPosition::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3").unwrap();
        assert_eq!(GameResult::from_final_position(&pos), Some(GameResult::BlackWins));
    }

    #[test]
    fn test_result_from_stalemate_and_ongoing() {
        let stalemate = ChessPosition::from_fen("7k/8/5KQ1/8/8/8/8/8 b - - 0 1").unwrap();
        assert_eq!(GameResult::from_final_position(&stalemate), Some(GameResult::Stalemate));

        assert_eq!(GameResult::from_final_position(&ChessPosition::default()), None);
    }
}

//! Error types for the input surfaces of the bot
//!
//! The search itself never fails: time exhaustion, terminal nodes and hash
//! collisions all degrade to a score. Errors only exist where text from the
//! outside world is parsed into a position or a move.

use thiserror::Error;

/// Errors raised while building a position or resolving a move
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// The FEN string could not be parsed by the rules engine
    #[error("Invalid FEN string: {fen}")]
    InvalidFen { fen: String },

    /// No legal move in the position matches the UCI text
    #[error("No legal move matches {uci}")]
    UnknownMove { uci: String },
}

/// Result type alias for position operations
pub type PositionResult<T> = Result<T, PositionError>;

// Rules-engine boundary
//
// The search never looks inside a board. It asks a `SearchPosition` for legal
// moves, applies and takes them back, and reads bitboards and a hash key.
// `ChessPosition` answers those questions with the `chess` crate.

mod chess_position;
mod piece;
mod position;

pub use chess_position::*;
pub use piece::*;
pub use position::*;

#[cfg(test)]
mod tests;

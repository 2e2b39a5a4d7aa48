use super::*;
use crate::game_repr::ChessPosition;
use chess::ChessMove;

// ==================== HELPER FUNCTIONS ====================

/// Clock frozen at a given point of the turn
pub struct FixedClock {
    elapsed_ms: u64,
    remaining_ms: u64,
}

impl FixedClock {
    pub fn new(elapsed_ms: u64, remaining_ms: u64) -> Self {
        Self {
            elapsed_ms,
            remaining_ms,
        }
    }
}

impl Clock for FixedClock {
    fn elapsed_ms_this_turn(&self) -> u64 {
        self.elapsed_ms
    }

    fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }
}

/// Transposition table small enough to allocate per test
pub fn small_table() -> TranspositionTable<ChessMove> {
    TranspositionTable::with_capacity(1 << 16)
}

pub fn position(fen: &str) -> ChessPosition {
    ChessPosition::from_fen(fen).unwrap()
}

/// Middlegame and endgame positions with captures available for both sides
pub const TACTICAL_FENS: [&str; 5] = [
    "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "4k3/8/8/2q5/1rnb4/8/3R4/4K3 w - - 0 1",
    "rnbqkbnr/ppp2ppp/8/3pp3/4P3/3P1N2/PPP2PPP/RNBQKB1R b KQkq - 0 3",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
];

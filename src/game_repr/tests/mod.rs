use super::*;

// ==================== HELPER FUNCTIONS ====================

pub fn position(fen: &str) -> ChessPosition {
    ChessPosition::from_fen(fen).unwrap()
}

/// Leaf moves of a `depth`-ply tree that capture something
pub fn perft_captures(pos: &mut ChessPosition, depth: u32) -> u64 {
    let mut moves = MoveList::new();
    pos.legal_moves_into(depth == 1, &mut moves);

    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .into_iter()
        .map(|mv| perft_captures(&mut *pos.play(mv), depth - 1))
        .sum()
}

// ==================== TEST MODULES ====================

mod perft;

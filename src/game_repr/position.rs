use super::piece::{MoveInfo, PieceCounts, PieceKind};
use smallvec::SmallVec;
use std::fmt::Debug;
use std::ops::{Deref, DerefMut};

/// Move buffer used at every search node
pub type MoveList<M> = SmallVec<[M; 64]>;

/// Everything the search needs from a rules engine
///
/// Implementors own board representation, legal move generation, make/undo
/// and hashing. The search only ever talks to a position through this trait,
/// which keeps it usable with any engine that can answer these questions.
pub trait SearchPosition {
    /// Opaque move token produced by `legal_moves_into`
    type Move: Copy + Eq + Debug;

    /// Fill `moves` with all legal moves, or only legal captures
    ///
    /// The order is the engine's generation order and is treated as
    /// arbitrary by the search.
    fn legal_moves_into(&self, captures_only: bool, moves: &mut MoveList<Self::Move>);

    /// Apply a legal move in place
    fn make_move(&mut self, mv: Self::Move);

    /// Exactly reverse the most recent `make_move(mv)`
    fn undo_move(&mut self, mv: Self::Move);

    fn is_in_checkmate(&self) -> bool;

    /// 64-bit occupancy mask, bit 0 = a1, bit 63 = h8
    fn piece_bitboard(&self, kind: PieceKind, is_white: bool) -> u64;

    /// Zobrist-style position fingerprint
    fn zobrist_key(&self) -> u64;

    fn white_to_move(&self) -> bool;

    /// Half-moves played since the start of the game
    fn ply_count(&self) -> u32;

    /// Classify a legal move of the current position
    fn classify(&self, mv: Self::Move) -> MoveInfo;

    fn piece_counts(&self) -> PieceCounts {
        let mut counts = PieceCounts::default();
        for kind in PieceKind::ALL {
            for is_white in [true, false] {
                counts.set(kind, is_white, self.piece_bitboard(kind, is_white).count_ones());
            }
        }
        counts
    }

    /// Count leaf nodes of the legal move tree `depth` plies deep
    ///
    /// Walks the tree through `make_move`/`undo_move`, so it checks move
    /// generation and take-back together.
    fn perft(&mut self, depth: u32) -> u64
    where
        Self: Sized,
    {
        if depth == 0 {
            return 1;
        }

        let mut moves = MoveList::new();
        self.legal_moves_into(false, &mut moves);
        if depth == 1 {
            return moves.len() as u64;
        }

        moves
            .into_iter()
            .map(|mv| self.play(mv).perft(depth - 1))
            .sum()
    }

    /// Make `mv` and return a guard that undoes it when dropped
    fn play(&mut self, mv: Self::Move) -> MadeMove<'_, Self>
    where
        Self: Sized,
    {
        self.make_move(mv);
        MadeMove { pos: self, mv }
    }
}

/// A move that is currently applied to a position
///
/// Derefs to the position so the child node can be searched through it; the
/// move is taken back on drop, whichever way the caller leaves the scope.
pub struct MadeMove<'a, P: SearchPosition> {
    pos: &'a mut P,
    mv: P::Move,
}

impl<P: SearchPosition> Deref for MadeMove<'_, P> {
    type Target = P;

    fn deref(&self) -> &P {
        self.pos
    }
}

impl<P: SearchPosition> DerefMut for MadeMove<'_, P> {
    fn deref_mut(&mut self) -> &mut P {
        self.pos
    }
}

impl<P: SearchPosition> Drop for MadeMove<'_, P> {
    fn drop(&mut self) {
        self.pos.undo_move(self.mv);
    }
}

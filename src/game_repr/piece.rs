/// Kind of a chess piece, independent of color
///
/// The discriminants follow the usual pawn-to-king order and double as the
/// row index into every per-piece evaluation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    pub const COUNT: usize = 6;

    pub const ALL: [PieceKind; PieceKind::COUNT] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// 1-based rank of the piece (pawn = 1 .. king = 6), used as a cheap
    /// value proxy when ordering moves
    #[inline]
    pub fn ordinal(self) -> i32 {
        self as i32 + 1
    }
}

/// What a move does, as far as move ordering cares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveInfo {
    pub moving: PieceKind,
    pub captured: Option<PieceKind>,
    pub promotion: Option<PieceKind>,
}

impl MoveInfo {
    pub fn quiet(moving: PieceKind) -> Self {
        Self {
            moving,
            captured: None,
            promotion: None,
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }
}

/// Per-kind, per-side piece counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PieceCounts {
    /// [color][piece_kind], color 0 = white
    counts: [[u32; PieceKind::COUNT]; 2],
}

impl PieceCounts {
    pub fn set(&mut self, kind: PieceKind, is_white: bool, count: u32) {
        self.counts[color_index(is_white)][kind.index()] = count;
    }

    pub fn get(&self, kind: PieceKind, is_white: bool) -> u32 {
        self.counts[color_index(is_white)][kind.index()]
    }

    /// Both sides combined
    pub fn total(&self, kind: PieceKind) -> u32 {
        self.counts[0][kind.index()] + self.counts[1][kind.index()]
    }

    /// Knights, bishops, rooks and queens of both sides
    pub fn non_pawn_non_king(&self) -> u32 {
        [PieceKind::Knight, PieceKind::Bishop, PieceKind::Rook, PieceKind::Queen]
            .iter()
            .map(|&kind| self.total(kind))
            .sum()
    }
}

#[inline]
fn color_index(is_white: bool) -> usize {
    if is_white {
        0
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_follow_value_order() {
        let ordinals: Vec<i32> = PieceKind::ALL.iter().map(|k| k.ordinal()).collect();
        assert_eq!(ordinals, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_piece_counts_totals() {
        let mut counts = PieceCounts::default();
        counts.set(PieceKind::Knight, true, 2);
        counts.set(PieceKind::Knight, false, 1);
        counts.set(PieceKind::Queen, false, 1);
        counts.set(PieceKind::Pawn, true, 8);

        assert_eq!(counts.total(PieceKind::Knight), 3);
        assert_eq!(counts.get(PieceKind::Queen, true), 0);
        assert_eq!(counts.non_pawn_non_king(), 4);
    }
}

// Position evaluation function
// Returns score in centipawns from the perspective of the side to move

use super::config::EvalStyle;
use super::piece_square_tables::*;
use crate::game_repr::{PieceCounts, PieceKind, SearchPosition};

/// Score of delivering mate on the current move; mates further away score
/// one point less per ply
pub const MATE_SCORE: i32 = 10_000;

pub const DRAW_SCORE: i32 = 0;

/// Score for the side to move when it is checkmated `ply_from_root` plies
/// below the root
#[inline]
pub fn mated_score(ply_from_root: u32) -> i32 {
    -(MATE_SCORE - ply_from_root as i32)
}

/// Tapered evaluation score with middlegame and endgame components
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TaperedScore {
    pub mg: i32, // Middlegame score
    pub eg: i32, // Endgame score
}

impl TaperedScore {
    pub fn new(mg: i32, eg: i32) -> Self {
        Self { mg, eg }
    }

    /// Interpolate between middlegame and endgame scores based on game phase
    /// phase: 0 (bare kings and pawns) to MAX_PHASE (full material)
    pub fn interpolate(&self, phase: i32) -> i32 {
        (self.mg * phase + self.eg * (MAX_PHASE - phase)) / MAX_PHASE
    }

    pub fn add(&mut self, other: TaperedScore) {
        self.mg += other.mg;
        self.eg += other.eg;
    }

    pub fn sub(&mut self, other: TaperedScore) {
        self.mg -= other.mg;
        self.eg -= other.eg;
    }
}

/// Coarse game stage used by the discrete evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStage {
    Opening,
    Middlegame,
    Endgame,
}

impl GameStage {
    /// More than 12 knights, bishops, rooks and queens on the board is the
    /// opening, fewer than 5 is the endgame
    pub fn from_counts(counts: &PieceCounts) -> Self {
        match counts.non_pawn_non_king() {
            n if n > 12 => GameStage::Opening,
            n if n < 5 => GameStage::Endgame,
            _ => GameStage::Middlegame,
        }
    }
}

/// Main evaluation function
///
/// Checkmate overrides everything: the mated side gets `-(MATE_SCORE - ply)`.
/// Any other position gets material plus position from White's point of
/// view, negated when Black is to move.
pub fn evaluate<P: SearchPosition>(pos: &P, ply_from_root: u32, style: EvalStyle) -> i32 {
    if pos.is_in_checkmate() {
        return mated_score(ply_from_root);
    }

    let white_score = match style {
        EvalStyle::Tapered => evaluate_tapered(pos),
        EvalStyle::Discrete => evaluate_discrete(pos),
    };

    if pos.white_to_move() {
        white_score
    } else {
        -white_score
    }
}

/// Calculate game phase from the remaining non-pawn material
/// Knights and bishops count 1, rooks 2, queens 4; saturates at MAX_PHASE
pub fn game_phase<P: SearchPosition>(pos: &P) -> i32 {
    let mut phase = 0;
    for kind in PieceKind::ALL {
        let weight = PHASE_WEIGHTS[kind.index()];
        if weight == 0 {
            continue;
        }
        for is_white in [true, false] {
            phase += weight * pos.piece_bitboard(kind, is_white).count_ones() as i32;
        }
    }
    phase.min(MAX_PHASE)
}

/// Material and piece-square sums for both phase endpoints, White minus Black
fn evaluate_material_and_position<P: SearchPosition>(pos: &P) -> TaperedScore {
    let tables = &*EVAL_TABLES;
    let mut score = TaperedScore::default();

    for is_white in [true, false] {
        for kind in PieceKind::ALL {
            let mut pieces = pos.piece_bitboard(kind, is_white);
            while pieces != 0 {
                let square = pieces.trailing_zeros() as usize;
                pieces &= pieces - 1;

                let term = TaperedScore::new(
                    tables.value(PhaseEndpoint::Midgame, kind, square, is_white),
                    tables.value(PhaseEndpoint::Endgame, kind, square, is_white),
                );
                if is_white {
                    score.add(term);
                } else {
                    score.sub(term);
                }
            }
        }
    }

    score
}

fn evaluate_tapered<P: SearchPosition>(pos: &P) -> i32 {
    evaluate_material_and_position(pos).interpolate(game_phase(pos))
}

/// Material plus one point per piece standing on a good square for the
/// current stage
fn evaluate_discrete<P: SearchPosition>(pos: &P) -> i32 {
    let counts = pos.piece_counts();

    let mut score: i32 = PieceKind::ALL
        .iter()
        .map(|&kind| {
            let diff = counts.get(kind, true) as i32 - counts.get(kind, false) as i32;
            PIECE_WEIGHTS[kind.index()] * diff
        })
        .sum();

    score += masked_difference(pos, PieceKind::Knight, WHITE_KNIGHT, BLACK_KNIGHT);
    score += masked_difference(pos, PieceKind::Bishop, WHITE_BISHOP, BLACK_BISHOP);
    score += masked_difference(pos, PieceKind::Rook, WHITE_ROOK, BLACK_ROOK);
    score += masked_difference(pos, PieceKind::Queen, WHITE_QUEEN, BLACK_QUEEN);

    match GameStage::from_counts(&counts) {
        GameStage::Endgame => {
            score += masked_difference(pos, PieceKind::Pawn, WHITE_PAWN_ENDGAME, BLACK_PAWN_ENDGAME);
            score += masked_difference(pos, PieceKind::King, WHITE_KING_ENDGAME, BLACK_KING_ENDGAME);
        }
        GameStage::Middlegame => {
            score += masked_difference(pos, PieceKind::Pawn, WHITE_PAWN_MIDDLE, BLACK_PAWN_MIDDLE);
            score += masked_difference(pos, PieceKind::King, WHITE_KING_MIDDLE, BLACK_KING_MIDDLE);
        }
        GameStage::Opening => {
            score += masked_difference(pos, PieceKind::Pawn, WHITE_PAWN_OPENING, BLACK_PAWN_OPENING);
        }
    }

    score
}

#[inline]
fn masked_difference<P: SearchPosition>(pos: &P, kind: PieceKind, white_mask: u64, black_mask: u64) -> i32 {
    let white = (pos.piece_bitboard(kind, true) & white_mask).count_ones() as i32;
    let black = (pos.piece_bitboard(kind, false) & black_mask).count_ones() as i32;
    white - black
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::ChessPosition;

    fn position(fen: &str) -> ChessPosition {
        ChessPosition::from_fen(fen).unwrap()
    }

    #[test]
    fn test_starting_position_is_equal() {
        let pos = ChessPosition::default();
        assert_eq!(evaluate(&pos, 0, EvalStyle::Tapered), 0);
        assert_eq!(evaluate(&pos, 0, EvalStyle::Discrete), 0);
    }

    #[test]
    fn test_interpolate_endpoints() {
        let score = TaperedScore::new(240, -48);
        assert_eq!(score.interpolate(MAX_PHASE), 240);
        assert_eq!(score.interpolate(0), -48);
        assert_eq!(score.interpolate(12), 96);
    }

    #[test]
    fn test_game_phase_saturates() {
        assert_eq!(game_phase(&ChessPosition::default()), MAX_PHASE);

        // Promoted queens push the raw sum past the cap
        let promoted = position("qqnqknnr/pppppppp/8/8/8/8/PPPPPPPP/QQNQKNNR w - - 0 1");
        assert_eq!(game_phase(&promoted), MAX_PHASE);

        let bare = position("4k3/pppp4/8/8/8/8/4PPPP/4K3 w - - 0 1");
        assert_eq!(game_phase(&bare), 0);
    }

    #[test]
    fn test_checkmate_scores_by_distance() {
        let mated = position("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
        assert_eq!(evaluate(&mated, 0, EvalStyle::Tapered), -MATE_SCORE);
        assert_eq!(evaluate(&mated, 3, EvalStyle::Tapered), -(MATE_SCORE - 3));
        assert_eq!(evaluate(&mated, 3, EvalStyle::Discrete), -(MATE_SCORE - 3));
    }

    #[test]
    fn test_game_stage_thresholds() {
        let opening = ChessPosition::default().piece_counts();
        assert_eq!(GameStage::from_counts(&opening), GameStage::Opening);

        let middlegame = position("r3k2r/pppq1ppp/2n5/8/8/2N5/PPPQ1PPP/R3K2R w KQkq - 0 1").piece_counts();
        assert_eq!(GameStage::from_counts(&middlegame), GameStage::Middlegame);

        let endgame = position("4k3/4p3/8/8/8/8/4P3/3RK3 w - - 0 1").piece_counts();
        assert_eq!(GameStage::from_counts(&endgame), GameStage::Endgame);
    }
}

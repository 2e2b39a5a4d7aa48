// Piece-square tables for positional evaluation
// Values in centipawns (100 = 1 pawn), one midgame and one endgame table per piece.
// Tables are written rank 8 first (a8..h8 on the first row), so a white piece on
// square `sq` (a1 = 0) reads entry `sq ^ 56`; black pieces read `sq` directly.

use crate::game_repr::PieceKind;
use once_cell::sync::Lazy;

/// Material weight per piece kind
pub const PIECE_WEIGHTS: [i32; PieceKind::COUNT] = [100, 310, 330, 500, 1000, 10000];

/// Contribution of each piece kind to the game phase
pub const PHASE_WEIGHTS: [i32; PieceKind::COUNT] = [0, 1, 1, 2, 4, 0];

/// Phase of the starting material; larger totals saturate here
pub const MAX_PHASE: i32 = 24;

pub const MG_PAWN: [i32; 64] = [
       0,    0,    0,    0,    0,    0,    0,    0,
      96,  128,   56,   88,   64,  120,   32,   -8,
       0,    0,   24,   24,   64,   56,   24,  -16,
      -8,    8,    0,   16,   16,    8,   16,  -16,
     -24,    0,    0,    8,   16,    0,    8,  -24,
     -24,    0,    0,   -8,    0,    0,   32,   -8,
     -32,    0,  -16,  -16,   -8,   24,   32,  -16,
       0,    0,    0,    0,    0,    0,    0,    0,
];

pub const EG_PAWN: [i32; 64] = [
       0,    0,    0,    0,    0,    0,    0,    0,
     176,  168,  152,  128,  144,  128,  160,  184,
      88,   96,   80,   64,   56,   48,   80,   80,
      32,   24,    8,    0,    0,    0,   16,   16,
       8,    8,    0,    0,    0,   -8,    0,    0,
       0,    0,    0,    0,    0,    0,    0,   -8,
       8,    8,    8,    8,    8,    0,    0,    0,
       0,    0,    0,    0,    0,    0,    0,    0,
];

pub const MG_KNIGHT: [i32; 64] = [
    -160,  -88,  -32,  -48,   56,  -96,   -8, -104,
     -72,  -40,   72,   32,   16,   56,    0,  -16,
     -40,   56,   32,   64,   80,  128,   72,   40,
      -8,   16,   16,   48,   32,   64,   16,   16,
      -8,    0,   16,    8,   24,   16,   16,   -8,
     -16,   -8,    8,    8,   16,   16,   24,  -16,
     -24,  -48,   -8,    0,    0,   16,   -8,  -16,
    -104,  -16,  -56,  -32,  -16,  -24,  -16,  -16,
];

pub const EG_KNIGHT: [i32; 64] = [
     -56,  -32,   -8,  -24,  -24,  -24,  -56,  -96,
     -24,   -8,  -24,    0,   -8,  -24,  -24,  -48,
     -24,  -16,    8,    8,    0,   -8,  -16,  -40,
     -16,    0,   16,   16,   16,    8,    8,  -16,
     -16,    0,   16,   24,   16,   16,    0,  -16,
     -16,    0,    0,    8,    8,    0,  -16,  -16,
     -40,  -16,   -8,    0,    0,  -16,  -16,  -40,
     -24,  -48,  -16,   -8,  -16,  -16,  -48,  -64,
];

pub const MG_BISHOP: [i32; 64] = [
     -24,    0,  -80,  -32,  -24,  -40,    0,   -8,
     -24,   16,  -16,   -8,   24,   56,   16,  -40,
     -16,   32,   40,   40,   32,   48,   32,    0,
       0,    0,   16,   48,   32,   32,    0,    0,
       0,    8,    8,   24,   32,    8,    8,    0,
       0,    8,    8,    8,    8,   24,   16,    8,
       0,    8,   16,    0,    0,   16,   32,    0,
     -32,    0,   -8,  -16,   -8,   -8,  -32,  -16,
];

pub const EG_BISHOP: [i32; 64] = [
      -8,  -16,   -8,   -8,    0,   -8,  -16,  -24,
      -8,    0,    0,   -8,    0,   -8,    0,   -8,
       0,   -8,    0,    0,    0,    0,    0,    0,
       0,    8,    8,    8,    8,    8,    0,    0,
       0,    0,    8,   16,    0,    8,    0,   -8,
      -8,    0,    8,    8,    8,    0,    0,   -8,
      -8,  -16,    0,    0,    0,   -8,   -8,  -24,
     -16,   -8,  -16,    0,   -8,  -16,    0,  -16,
];

pub const MG_ROOK: [i32; 64] = [
      32,   40,   32,   48,   56,    8,   24,   40,
      24,   32,   56,   56,   80,   64,   24,   40,
       0,   16,   24,   32,   16,   40,   56,   16,
     -24,   -8,    0,   24,   24,   32,   -8,  -16,
     -32,  -24,   -8,    0,    8,    0,    0,  -16,
     -40,  -24,  -16,  -16,    0,    0,    0,  -32,
     -40,  -16,  -16,   -8,    0,    8,    0,  -64,
     -16,   -8,    0,   16,   16,    0,  -32,  -24,
];

pub const EG_ROOK: [i32; 64] = [
       8,    8,   16,    8,    8,    8,    8,    0,
       8,    8,    8,    8,    0,    0,    8,    0,
       0,    0,    0,    0,    0,    0,    0,    0,
       0,    0,    8,    0,    0,    0,    0,    0,
       0,    0,    8,    0,    0,    0,   -8,   -8,
       0,    0,    0,    0,    0,   -8,   -8,  -16,
       0,    0,    0,    0,   -8,   -8,   -8,    0,
      -8,    0,    0,    0,    0,   -8,    0,  -16,
];

pub const MG_QUEEN: [i32; 64] = [
     -24,    0,   24,    8,   56,   40,   40,   40,
     -24,  -32,    0,    0,  -16,   56,   24,   48,
      -8,  -16,    0,    8,   24,   56,   40,   56,
     -24,  -24,  -16,  -16,    0,   16,    0,    0,
      -8,  -24,   -8,   -8,    0,    0,    0,    0,
      -8,    0,   -8,    0,    0,    0,    8,    0,
     -32,   -8,    8,    0,    8,    8,    0,    0,
       0,  -16,   -8,    8,   -8,  -24,  -24,  -48,
];

pub const EG_QUEEN: [i32; 64] = [
      -8,   16,   16,   24,   24,   16,    8,   16,
     -16,   16,   32,   40,   56,   24,   24,    0,
     -16,    0,    8,   48,   40,   32,   16,    8,
       0,   16,   24,   40,   56,   40,   56,   32,
     -16,   24,   16,   40,   24,   32,   32,   16,
     -16,  -24,    8,    0,    8,   16,    8,    0,
     -16,  -16,  -24,  -16,  -16,  -16,  -32,  -32,
     -32,  -24,  -16,  -40,    0,  -32,  -16,  -40,
];

pub const MG_KING: [i32; 64] = [
     -64,   16,   16,   -8,  -56,  -32,    0,    8,
      24,    0,  -16,    0,   -8,    0,  -32,  -24,
      -8,   24,    0,  -16,  -16,    0,   16,  -16,
     -16,  -16,   -8,  -24,  -24,  -24,   -8,  -32,
     -48,    0,  -24,  -32,  -40,  -40,  -32,  -48,
      -8,   -8,  -16,  -40,  -40,  -24,   -8,  -24,
       0,    0,   -8,  -64,  -40,  -16,    8,    8,
      -8,   32,    8,  -48,    8,  -24,   24,    8,
];

pub const EG_KING: [i32; 64] = [
     -72,  -32,  -16,  -16,   -8,    8,    0,  -16,
      -8,   16,    8,   16,   16,   32,   16,    8,
       8,   16,   16,    8,   16,   40,   40,    8,
      -8,   16,   24,   24,   24,   32,   24,    0,
     -16,    0,   16,   24,   24,   16,    8,   -8,
     -16,    0,    8,   16,   16,   16,    0,   -8,
     -24,   -8,    0,    8,    8,    0,    0,  -16,
     -48,  -32,  -16,   -8,  -24,   -8,  -24,  -40,
];

/// Which end of the game-phase axis a table describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseEndpoint {
    Midgame = 0,
    Endgame = 1,
}

/// Material plus position, per (phase endpoint, piece kind, square)
pub struct EvalTables {
    values: [[[i32; 64]; PieceKind::COUNT]; 2],
}

impl EvalTables {
    fn build() -> Self {
        let midgame = [&MG_PAWN, &MG_KNIGHT, &MG_BISHOP, &MG_ROOK, &MG_QUEEN, &MG_KING];
        let endgame = [&EG_PAWN, &EG_KNIGHT, &EG_BISHOP, &EG_ROOK, &EG_QUEEN, &EG_KING];

        let mut values = [[[0; 64]; PieceKind::COUNT]; 2];
        for kind in PieceKind::ALL {
            let k = kind.index();
            for square in 0..64 {
                values[PhaseEndpoint::Midgame as usize][k][square] = midgame[k][square] + PIECE_WEIGHTS[k];
                values[PhaseEndpoint::Endgame as usize][k][square] = endgame[k][square] + PIECE_WEIGHTS[k];
            }
        }

        Self { values }
    }

    /// Value of a `kind` piece of the given color standing on `square` (a1 = 0)
    #[inline]
    pub fn value(&self, endpoint: PhaseEndpoint, kind: PieceKind, square: usize, is_white: bool) -> i32 {
        self.values[endpoint as usize][kind.index()][table_square(square, is_white)]
    }
}

/// Built once, on first evaluation
pub static EVAL_TABLES: Lazy<EvalTables> = Lazy::new(EvalTables::build);

/// Positional part only, without material
pub fn get_pst_value(kind: PieceKind, square: usize, is_white: bool, endpoint: PhaseEndpoint) -> i32 {
    EVAL_TABLES.value(endpoint, kind, square, is_white) - PIECE_WEIGHTS[kind.index()]
}

#[inline]
fn table_square(square: usize, is_white: bool) -> usize {
    if is_white {
        square ^ 56
    } else {
        square
    }
}

// Good-square masks for the discrete (three stage) evaluator.
// Bit 0 = a1. Each white mask is the vertical mirror of its black twin.
pub const WHITE_PAWN_OPENING: u64 = 0x0000_0018_3c3c_e700;
pub const BLACK_PAWN_OPENING: u64 = 0x00e7_3c3c_1800_0000;
pub const WHITE_PAWN_MIDDLE: u64 = 0x0000_003c_7ee7_c300;
pub const BLACK_PAWN_MIDDLE: u64 = 0x00c3_e77e_3c00_0000;
pub const WHITE_PAWN_ENDGAME: u64 = 0x00ff_ffff_0000_0000;
pub const BLACK_PAWN_ENDGAME: u64 = 0x0000_0000_ffff_ff00;
pub const WHITE_KING_MIDDLE: u64 = 0x0000_0000_0000_00c7;
pub const BLACK_KING_MIDDLE: u64 = 0xc700_0000_0000_0000;
pub const WHITE_KING_ENDGAME: u64 = 0x00ff_ffff_ffff_0000;
pub const BLACK_KING_ENDGAME: u64 = 0x0000_ffff_ffff_ff00;
pub const WHITE_KNIGHT: u64 = 0x0000_667e_7e7e_1800;
pub const BLACK_KNIGHT: u64 = 0x0018_7e7e_7e66_0000;
pub const WHITE_BISHOP: u64 = 0x0000_3c7e_ffff_4200;
pub const BLACK_BISHOP: u64 = 0x0042_ffff_7e3c_0000;
pub const WHITE_ROOK: u64 = 0x00ff_3c3c_3c3c_3c3c;
pub const BLACK_ROOK: u64 = 0x3c3c_3c3c_3c3c_ff00;
pub const WHITE_QUEEN: u64 = 0x0000_7e7e_7e7e_7e00;
pub const BLACK_QUEEN: u64 = 0x007e_7e7e_7e7e_0000;

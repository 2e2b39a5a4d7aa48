// Adapter exposing the `chess` crate as a `SearchPosition`
//
// `chess::Board` is an immutable, copyable value: moves produce a new board.
// Make/undo is layered on top with a stack of previous boards, so undo is a
// pop and always restores the exact previous state (hash included).

use super::piece::{MoveInfo, PieceKind};
use super::position::{MoveList, SearchPosition};
use crate::error::{PositionError, PositionResult};
use chess::{Board, BoardStatus, ChessMove, Color, MoveGen, Piece};
use std::fmt;
use std::str::FromStr;

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Clone)]
pub struct ChessPosition {
    board: Board,
    /// Boards before each applied move, most recent last
    history: Vec<Board>,
    /// Ply count of the board this position was created from
    base_ply: u32,
}

impl ChessPosition {
    pub fn from_fen(fen: &str) -> PositionResult<Self> {
        let board = Board::from_str(fen).map_err(|_| PositionError::InvalidFen {
            fen: fen.to_string(),
        })?;

        Ok(Self {
            board,
            history: Vec::with_capacity(128),
            base_ply: ply_from_fen(fen),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Resolve a move written in UCI notation (`e2e4`, `e7e8q`)
    pub fn parse_move(&self, uci: &str) -> PositionResult<ChessMove> {
        MoveGen::new_legal(&self.board)
            .find(|mv| mv.to_string() == uci)
            .ok_or_else(|| PositionError::UnknownMove {
                uci: uci.to_string(),
            })
    }

    pub fn is_legal(&self, mv: ChessMove) -> bool {
        MoveGen::new_legal(&self.board).any(|legal| legal == mv)
    }

    pub fn is_stalemate(&self) -> bool {
        self.board.status() == BoardStatus::Stalemate
    }
}

impl Default for ChessPosition {
    fn default() -> Self {
        Self {
            board: Board::default(),
            history: Vec::with_capacity(128),
            base_ply: 0,
        }
    }
}

impl fmt::Debug for ChessPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChessPosition({})", self.board)
    }
}

impl SearchPosition for ChessPosition {
    type Move = ChessMove;

    fn legal_moves_into(&self, captures_only: bool, moves: &mut MoveList<ChessMove>) {
        moves.clear();
        let generator = MoveGen::new_legal(&self.board);
        if captures_only {
            moves.extend(generator.filter(|&mv| self.captured_kind(mv).is_some()));
        } else {
            moves.extend(generator);
        }
    }

    fn make_move(&mut self, mv: ChessMove) {
        self.history.push(self.board);
        self.board = self.board.make_move_new(mv);
    }

    fn undo_move(&mut self, _mv: ChessMove) {
        if let Some(previous) = self.history.pop() {
            self.board = previous;
        }
    }

    fn is_in_checkmate(&self) -> bool {
        self.board.status() == BoardStatus::Checkmate
    }

    fn piece_bitboard(&self, kind: PieceKind, is_white: bool) -> u64 {
        let color = if is_white { Color::White } else { Color::Black };
        (*self.board.pieces(to_piece(kind)) & *self.board.color_combined(color)).0
    }

    fn zobrist_key(&self) -> u64 {
        self.board.get_hash()
    }

    fn white_to_move(&self) -> bool {
        self.board.side_to_move() == Color::White
    }

    fn ply_count(&self) -> u32 {
        self.base_ply + self.history.len() as u32
    }

    fn classify(&self, mv: ChessMove) -> MoveInfo {
        let moving = self
            .board
            .piece_on(mv.get_source())
            .map(from_piece)
            .unwrap_or(PieceKind::Pawn);

        MoveInfo {
            moving,
            captured: self.captured_kind(mv),
            promotion: mv.get_promotion().map(from_piece),
        }
    }
}

impl ChessPosition {
    fn captured_kind(&self, mv: ChessMove) -> Option<PieceKind> {
        if let Some(victim) = self.board.piece_on(mv.get_dest()) {
            return Some(from_piece(victim));
        }

        // En passant: a pawn changing file onto an empty square
        let is_pawn = self.board.piece_on(mv.get_source()) == Some(Piece::Pawn);
        if is_pawn && mv.get_source().get_file() != mv.get_dest().get_file() {
            return Some(PieceKind::Pawn);
        }

        None
    }
}

fn from_piece(piece: Piece) -> PieceKind {
    match piece {
        Piece::Pawn => PieceKind::Pawn,
        Piece::Knight => PieceKind::Knight,
        Piece::Bishop => PieceKind::Bishop,
        Piece::Rook => PieceKind::Rook,
        Piece::Queen => PieceKind::Queen,
        Piece::King => PieceKind::King,
    }
}

fn to_piece(kind: PieceKind) -> Piece {
    match kind {
        PieceKind::Pawn => Piece::Pawn,
        PieceKind::Knight => Piece::Knight,
        PieceKind::Bishop => Piece::Bishop,
        PieceKind::Rook => Piece::Rook,
        PieceKind::Queen => Piece::Queen,
        PieceKind::King => Piece::King,
    }
}

/// Half-moves played, from the side-to-move and fullmove fields of a FEN
fn ply_from_fen(fen: &str) -> u32 {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    let black_to_move = fields.get(1).is_some_and(|&side| side == "b");
    let fullmove = fields
        .get(5)
        .and_then(|n| n.parse::<u32>().ok())
        .unwrap_or(1)
        .max(1);

    (fullmove - 1) * 2 + u32::from(black_to_move)
}

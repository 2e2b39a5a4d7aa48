use super::*;

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const POSITION_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

// ==================== STARTING POSITION ====================

#[test]
fn test_perft_starting_position_depth_1() {
    assert_eq!(ChessPosition::default().perft(1), 20);
}

#[test]
fn test_perft_starting_position_depth_2() {
    assert_eq!(ChessPosition::default().perft(2), 400);
}

#[test]
fn test_perft_starting_position_depth_3() {
    let mut pos = ChessPosition::default();
    assert_eq!(pos.perft(3), 8902);
    assert_eq!(perft_captures(&mut pos, 3), 34);
}

// ==================== KIWIPETE ====================
// Castling, en passant and promotions all in reach

#[test]
fn test_perft_kiwipete_depth_1() {
    let mut pos = position(KIWIPETE);
    assert_eq!(pos.perft(1), 48);
    assert_eq!(perft_captures(&mut pos, 1), 8);
}

#[test]
fn test_perft_kiwipete_depth_2() {
    let mut pos = position(KIWIPETE);
    assert_eq!(pos.perft(2), 2039);
    assert_eq!(perft_captures(&mut pos, 2), 351);
}

#[test]
fn test_perft_kiwipete_depth_3() {
    assert_eq!(position(KIWIPETE).perft(3), 97862);
}

// ==================== ENDGAME ====================

#[test]
fn test_perft_position_3() {
    let mut pos = position(POSITION_3);
    assert_eq!(pos.perft(1), 14);
    assert_eq!(pos.perft(2), 191);
    assert_eq!(pos.perft(3), 2812);
    assert_eq!(perft_captures(&mut pos, 2), 14);
}

#[test]
fn test_perft_leaves_position_untouched() {
    let mut pos = position(KIWIPETE);
    let key = pos.zobrist_key();
    let ply = pos.ply_count();

    pos.perft(3);

    assert_eq!(pos.zobrist_key(), key);
    assert_eq!(pos.ply_count(), ply);
}

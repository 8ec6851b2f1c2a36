use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Route `log` output through the test harness; safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Mask of a named square, e.g. `sq("e4")`
pub fn sq(name: &str) -> u64 {
    algebraic_to_mask(name).unwrap()
}

/// Board with no pieces, white to move and no castling rights
pub fn empty_board() -> Position {
    let state = PositionState {
        castling: CastlingRights::none(),
        ..PositionState::default()
    };
    Position::new(Bitboards::empty(), state)
}

/// Helper function to place a piece
pub fn place_piece(pos: &mut Position, square: &str, piece: Piece) {
    pos.bitboards.add(piece, sq(square));
}

pub fn white(piece_type: Type) -> Piece {
    Piece::new(Color::White, piece_type)
}

pub fn black(piece_type: Type) -> Piece {
    Piece::new(Color::Black, piece_type)
}

/// Helper function to check if a move exists in the move list
pub fn has_move(moves: &[Move], from: &str, to: &str) -> bool {
    moves
        .iter()
        .any(|m| m.from_mask() == sq(from) && m.to_mask() == sq(to))
}

/// Play a list of `(from, to)` moves, panicking on the first illegal one
pub fn play(pos: &mut Position, moves: &[(&str, &str)]) {
    for &(from, to) in moves {
        assert!(pos.try_move_algebraic(from, to, None), "{from}{to} should be legal in {pos}");
    }
}

// ==================== TEST MODULES ====================

mod pawn_movement;
mod fen_parsing;

use super::bitboards::{Bitboards, ROW_0, ROW_1, ROW_6, ROW_7};
use super::piece::{Color, Piece, Type};
use super::piece_moves::attack_mask;
use super::state::PositionState;

/*
 * MODULE IS RESPONSIBLE FOR
 * THE POSITION SNAPSHOT AND READ-ONLY QUERIES.
 * Mutation lives in make_move.rs.
 */

/// One position: piece placement plus the state fields. The move engine is
/// the only code that writes either half after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) bitboards: Bitboards,
    pub(crate) state: PositionState,
}

impl Default for Position {
    /// The standard starting position, white to move.
    fn default() -> Self {
        let mut bitboards = Bitboards::empty();
        let back_rank = [
            (Type::Rook, 0b1000_0001u64),
            (Type::Knight, 0b0100_0010),
            (Type::Bishop, 0b0010_0100),
            (Type::Queen, 0b0000_1000),
            (Type::King, 0b0001_0000),
        ];
        for (piece_type, cols) in back_rank {
            bitboards.add(Piece::new(Color::Black, piece_type), cols & ROW_0);
            bitboards.add(Piece::new(Color::White, piece_type), (cols << 56) & ROW_7);
        }
        bitboards.add(Piece::new(Color::Black, Type::Pawn), ROW_1);
        bitboards.add(Piece::new(Color::White, Type::Pawn), ROW_6);

        Self::new(bitboards, PositionState::default())
    }
}

impl Position {
    pub fn new(bitboards: Bitboards, state: PositionState) -> Self {
        Self { bitboards, state }
    }

    pub fn bitboards(&self) -> &Bitboards {
        &self.bitboards
    }

    pub fn state(&self) -> &PositionState {
        &self.state
    }

    pub fn side_to_move(&self) -> Color {
        self.state.side_to_move
    }

    pub fn piece_at(&self, square: u64) -> Option<Piece> {
        self.bitboards.piece_at(square)
    }

    /// The king's square, if `color` has exactly one king.
    pub fn king_square(&self, color: Color) -> Option<u64> {
        let kings = self.bitboards.get(Piece::new(color, Type::King));
        (kings.count_ones() == 1).then_some(kings)
    }

    /// Whether a piece of `by` could capture on `square` if an enemy stood
    /// there. Empty squares are probed with a stand-in king so pawn
    /// diagonals count while pawn pushes do not.
    pub fn is_square_attacked(&self, square: u64, by: Color) -> bool {
        let mut board = self.bitboards;
        if let Some(occupant) = board.piece_at(square) {
            board.remove(occupant, square);
        }
        board.add(Piece::new(by.opposite(), Type::King), square);
        attack_mask(&board, by, 0).attacks & square != 0
    }

    /// Checks if the king of the given color is currently attacked
    pub fn is_in_check(&self, color: Color) -> bool {
        let king = self.bitboards.get(Piece::new(color, Type::King));
        if king == 0 {
            return false; // No king found (test boards)
        }
        // en passant never captures a king, so the target is left out
        attack_mask(&self.bitboards, color.opposite(), 0).attacks & king != 0
    }
}

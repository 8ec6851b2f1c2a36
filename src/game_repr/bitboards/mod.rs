use std::fmt;

use super::piece::{Color, Piece};

pub mod squares;
pub use squares::*;

/// Bitboard representation using 12 u64 values (6 piece types × 2 colors)
/// Each bit represents presence/absence of a piece on that square (0-63)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bitboards {
    /// 12 piece-specific bitboards indexed by `Piece::index`
    /// White: 0=Pawn, 1=Knight, 2=Bishop, 3=Rook, 4=Queen, 5=King
    /// Black: 6=Pawn, 7=Knight, 8=Bishop, 9=Rook, 10=Queen, 11=King
    pieces: [u64; 12],
}

impl Default for Bitboards {
    fn default() -> Self {
        Self::empty()
    }
}

impl Bitboards {
    /// Create empty bitboards
    pub fn empty() -> Self {
        Self { pieces: [0; 12] }
    }

    /// Mask of squares occupied by `piece`
    #[inline(always)]
    pub fn get(&self, piece: Piece) -> u64 {
        self.pieces[piece.index()]
    }

    /// Put `piece` on every square of `mask`
    #[inline]
    pub fn add(&mut self, piece: Piece, mask: u64) {
        self.pieces[piece.index()] |= mask;
    }

    /// Take `piece` off every square of `mask`
    #[inline]
    pub fn remove(&mut self, piece: Piece, mask: u64) {
        self.pieces[piece.index()] &= !mask;
    }

    /// Get bitboard for all pieces of a color
    #[inline(always)]
    pub fn occupied_by_color(&self, color: Color) -> u64 {
        let base = match color {
            Color::White => 0,
            Color::Black => 6,
        };
        self.pieces[base..base + 6].iter().fold(0, |acc, bb| acc | bb)
    }

    #[inline]
    pub fn white_occupied(&self) -> u64 {
        self.occupied_by_color(Color::White)
    }

    #[inline]
    pub fn black_occupied(&self) -> u64 {
        self.occupied_by_color(Color::Black)
    }

    /// Get bitboard for all occupied squares
    #[inline(always)]
    pub fn all_occupied(&self) -> u64 {
        self.pieces.iter().fold(0, |acc, bb| acc | bb)
    }

    /// The piece on a single square, if any. Checks every mask, so on a
    /// board that breaks disjointness the first match in index order wins.
    pub fn piece_at(&self, square: u64) -> Option<Piece> {
        if square == 0 {
            return None;
        }
        Piece::all().find(|&p| self.get(p) & square != 0)
    }

    /// True when no square is claimed by two pieces.
    pub fn is_disjoint(&self) -> bool {
        let mut seen = 0u64;
        for bb in self.pieces {
            if seen & bb != 0 {
                return false;
            }
            seen |= bb;
        }
        true
    }

    /// 8x8 grid of FEN letters, `None` on empty squares. Row 0 is the eighth rank.
    pub fn to_char_board(&self) -> [[Option<char>; 8]; 8] {
        let mut board = [[None; 8]; 8];
        for piece in Piece::all() {
            for (row, col) in mask_to_coordinates(self.get(piece)) {
                board[row as usize][col as usize] = Some(piece.to_char());
            }
        }
        board
    }
}

impl fmt::Display for Bitboards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, rank) in self.to_char_board().iter().enumerate() {
            write!(f, "{} ", 8 - row)?;
            for square in rank {
                write!(f, " {}", square.unwrap_or('.'))?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

// Rows by FEN order: ROW_0 is the eighth rank, ROW_7 the first.
pub const ROW_0: u64 = 0x0000_0000_0000_00FF;
pub const ROW_1: u64 = 0x0000_0000_0000_FF00;
pub const ROW_6: u64 = 0x00FF_0000_0000_0000;
pub const ROW_7: u64 = 0xFF00_0000_0000_0000;

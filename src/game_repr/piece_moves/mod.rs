//! Pseudo-legal move masks.
//!
//! Every generator returns a [`MoveMasks`] triple for one piece: the squares
//! it can travel to, the friendly pieces that stopped it, and the enemy
//! pieces it can capture. None of them look at king safety; that is the move
//! engine's job.

use std::ops::{BitOr, BitOrAssign};

use super::bitboards::{coordinate_to_mask, mask_to_coordinate, squares, Bitboards};
use super::piece::{Color, Piece, Type};

pub mod bishop;
pub mod king;
pub mod knight;
pub mod pawn;
pub mod queen;
pub mod rook;

pub use bishop::*;
pub use king::*;
pub use knight::*;
pub use pawn::*;
pub use queen::*;
pub use rook::*;

/// (row step, column step, max steps)
pub type Direction = (i32, i32, u32);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveMasks {
    /// Squares the piece may move to.
    pub valid: u64,
    /// Friendly pieces that cut a path short.
    pub blocked: u64,
    /// Enemy pieces the piece can capture.
    pub attacks: u64,
}

impl BitOr for MoveMasks {
    type Output = MoveMasks;

    fn bitor(self, rhs: MoveMasks) -> MoveMasks {
        MoveMasks {
            valid: self.valid | rhs.valid,
            blocked: self.blocked | rhs.blocked,
            attacks: self.attacks | rhs.attacks,
        }
    }
}

impl BitOrAssign for MoveMasks {
    fn bitor_assign(&mut self, rhs: MoveMasks) {
        *self = *self | rhs;
    }
}

/// Walk from (row, col) in steps of (dr, dc), at most `max_steps` times.
///
/// A friendly piece ends the walk and lands in `blocked` only. An enemy
/// piece ends the walk and lands in both `valid` and `attacks`. The start
/// square is never part of the result.
pub fn trace_ray(
    friendly: u64,
    enemy: u64,
    mut row: i32,
    dr: i32,
    mut col: i32,
    dc: i32,
    max_steps: u32,
) -> MoveMasks {
    let mut masks = MoveMasks::default();
    for _ in 0..max_steps {
        row += dr;
        col += dc;
        let Some(pos) = coordinate_to_mask(row, col) else {
            break;
        };

        if pos & friendly != 0 {
            masks.blocked |= pos;
            break;
        }

        masks.valid |= pos;
        if pos & enemy != 0 {
            masks.attacks |= pos;
            break;
        }
    }
    masks
}

/// Union of `trace_ray` over `dirs` starting from the single square `pos`.
pub fn create_mask(pos: u64, friendly: u64, enemy: u64, dirs: &[Direction]) -> MoveMasks {
    let Some((row, col)) = mask_to_coordinate(pos) else {
        return MoveMasks::default();
    };

    dirs.iter().fold(MoveMasks::default(), |acc, &(dr, dc, steps)| {
        acc | trace_ray(friendly, enemy, row, dr, col, dc, steps)
    })
}

/// Masks for `piece` standing on `pos`.
pub fn piece_mask(piece: Piece, pos: u64, friendly: u64, enemy: u64, en_passant: u64) -> MoveMasks {
    match piece.piece_type {
        Type::Rook => rook_mask(pos, friendly, enemy),
        Type::Bishop => bishop_mask(pos, friendly, enemy),
        Type::Queen => queen_mask(pos, friendly, enemy),
        Type::King => king_mask(pos, friendly, enemy),
        Type::Knight => knight_mask(pos, friendly, enemy),
        Type::Pawn => pawn_mask(piece.color, pos, friendly, enemy, en_passant),
    }
}

/// Union of the masks of every piece of `color`.
pub fn attack_mask(bitboards: &Bitboards, color: Color, en_passant: u64) -> MoveMasks {
    let friendly = bitboards.occupied_by_color(color);
    let enemy = bitboards.occupied_by_color(color.opposite());

    let mut masks = MoveMasks::default();
    for piece in Piece::of_color(color) {
        for pos in squares(bitboards.get(piece)) {
            masks |= piece_mask(piece, pos, friendly, enemy, en_passant);
        }
    }
    masks
}

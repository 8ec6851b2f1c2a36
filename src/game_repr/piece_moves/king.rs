use super::{create_mask, Direction, MoveMasks};

pub const KING_DIRECTIONS: [Direction; 8] = [
    (1, 1, 1),
    (-1, -1, 1),
    (1, -1, 1),
    (-1, 1, 1),
    (1, 0, 1),
    (-1, 0, 1),
    (0, 1, 1),
    (0, -1, 1),
];

/// One step in every direction. Castling is not a mask move; the move
/// engine handles it separately.
pub fn king_mask(pos: u64, friendly: u64, enemy: u64) -> MoveMasks {
    create_mask(pos, friendly, enemy, &KING_DIRECTIONS)
}

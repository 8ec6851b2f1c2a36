use super::{create_mask, Direction, MoveMasks};

pub const BISHOP_DIRECTIONS: [Direction; 4] = [
    (1, 1, 8),   // down right
    (-1, -1, 8), // up left
    (1, -1, 8),  // down left
    (-1, 1, 8),  // up right
];

pub fn bishop_mask(pos: u64, friendly: u64, enemy: u64) -> MoveMasks {
    create_mask(pos, friendly, enemy, &BISHOP_DIRECTIONS)
}

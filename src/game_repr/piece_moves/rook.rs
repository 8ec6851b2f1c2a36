use super::{create_mask, Direction, MoveMasks};

pub const ROOK_DIRECTIONS: [Direction; 4] = [
    (1, 0, 8),  // down
    (-1, 0, 8), // up
    (0, 1, 8),  // right
    (0, -1, 8), // left
];

pub fn rook_mask(pos: u64, friendly: u64, enemy: u64) -> MoveMasks {
    create_mask(pos, friendly, enemy, &ROOK_DIRECTIONS)
}

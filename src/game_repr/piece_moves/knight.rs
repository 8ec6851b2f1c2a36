use super::{create_mask, Direction, MoveMasks};

pub const KNIGHT_OFFSETS: [Direction; 8] = [
    (2, 1, 1),
    (2, -1, 1),
    (-2, 1, 1),
    (-2, -1, 1),
    (1, 2, 1),
    (-1, 2, 1),
    (1, -2, 1),
    (-1, -2, 1),
];

pub fn knight_mask(pos: u64, friendly: u64, enemy: u64) -> MoveMasks {
    create_mask(pos, friendly, enemy, &KNIGHT_OFFSETS)
}

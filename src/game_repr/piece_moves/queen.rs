use super::{bishop_mask, rook_mask, MoveMasks};

/// Rook and bishop rays together.
pub fn queen_mask(pos: u64, friendly: u64, enemy: u64) -> MoveMasks {
    rook_mask(pos, friendly, enemy) | bishop_mask(pos, friendly, enemy)
}

use super::MoveMasks;
use crate::game_repr::bitboards::{coordinate_to_mask, mask_to_coordinate, ROW_0, ROW_1, ROW_6, ROW_7};
use crate::game_repr::piece::Color;

/// Row a pawn of `color` starts on, as a mask.
#[inline]
pub fn pawn_home_row(color: Color) -> u64 {
    match color {
        Color::White => ROW_6,
        Color::Black => ROW_1,
    }
}

/// Row where a pawn of `color` promotes.
#[inline]
pub fn promotion_row(color: Color) -> u64 {
    match color {
        Color::White => ROW_0,
        Color::Black => ROW_7,
    }
}

/// Square of the pawn taken when capturing en passant onto `target`: one
/// row behind the target from the capturer's side.
#[inline]
pub fn en_passant_victim(capturer: Color, target: u64) -> u64 {
    match capturer {
        Color::White => target << 8,
        Color::Black => target >> 8,
    }
}

pub fn pawn_mask(color: Color, pos: u64, friendly: u64, enemy: u64, en_passant: u64) -> MoveMasks {
    let Some((row, col)) = mask_to_coordinate(pos) else {
        return MoveMasks::default();
    };
    let dr = color.forward();
    let mut masks = MoveMasks::default();

    // straight advance, two squares from the home row
    let reach = if pos & pawn_home_row(color) != 0 { 2 } else { 1 };
    let mut r = row;
    for _ in 0..reach {
        r += dr;
        let Some(step) = coordinate_to_mask(r, col) else {
            break;
        };
        if step & friendly != 0 {
            masks.blocked |= step;
            break;
        }
        // no forward captures
        if step & enemy != 0 {
            break;
        }
        masks.valid |= step;
    }

    for dc in [-1, 1] {
        if let Some(diag) = coordinate_to_mask(row + dr, col + dc) {
            if diag & enemy != 0 {
                masks.valid |= diag;
                masks.attacks |= diag;
            }
        }
    }

    if let Some((ep_row, ep_col)) = mask_to_coordinate(en_passant) {
        if ep_row == row + dr && (ep_col - col).abs() == 1 {
            masks.valid |= en_passant;
            masks.attacks |= en_passant_victim(color, en_passant);
        }
    }

    masks
}

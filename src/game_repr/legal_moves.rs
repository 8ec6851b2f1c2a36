use log::debug;
use rayon::prelude::*;

use super::bitboards::{square_index, squares};
use super::make_move::castling_targets;
use super::moves::{Move, MoveList, Promotion};
use super::piece::Type;
use super::piece_moves::{piece_mask, promotion_row};
use super::position::Position;

impl Position {
    /// Every legal move for the side to move.
    pub fn legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        self.clone().for_each_legal(&mut |_, mv| moves.push(mv));
        moves
    }

    /// Legal moves of the piece on `square`. Empty for an empty square, an
    /// enemy piece or a mask that is not a single square.
    pub fn legal_moves_from(&self, square: u64) -> MoveList {
        let mut moves = MoveList::new();
        if square_index(square).is_some() {
            self.clone()
                .for_each_legal_from(square, &mut |_, mv| moves.push(mv));
        }
        moves
    }

    pub fn has_legal_moves(&self) -> bool {
        let mut scratch = self.clone();
        let mut found = false;
        for from in squares(self.bitboards.occupied_by_color(self.state.side_to_move)) {
            scratch.for_each_legal_from(from, &mut |_, _| found = true);
            if found {
                return true;
            }
        }
        false
    }

    /// Call `visit` once per legal move, with the move played on `self`.
    /// The move is taken back after `visit` returns, so `visit` must leave
    /// the position as it found it.
    fn for_each_legal<F: FnMut(&mut Position, Move)>(&mut self, visit: &mut F) {
        for from in squares(self.bitboards.occupied_by_color(self.state.side_to_move)) {
            self.for_each_legal_from(from, visit);
        }
    }

    /// Candidates come from the pseudo-legal mask plus castling targets.
    fn for_each_legal_from<F: FnMut(&mut Position, Move)>(&mut self, from: u64, visit: &mut F) {
        let Some(piece) = self.bitboards.piece_at(from) else {
            return;
        };
        if piece.color != self.state.side_to_move {
            return;
        }

        let friendly = self.bitboards.occupied_by_color(piece.color);
        let enemy = self.bitboards.occupied_by_color(piece.color.opposite());
        let mut targets = piece_mask(piece, from, friendly, enemy, self.state.en_passant).valid;
        if piece.piece_type == Type::King {
            targets |= castling_targets(piece.color, from);
        }

        let promotes = match piece.piece_type {
            Type::Pawn => promotion_row(piece.color),
            _ => 0,
        };
        for to in squares(targets) {
            let Some(mv) = Move::from_masks(from, to, None) else {
                continue;
            };
            if to & promotes != 0 {
                for promotion in Promotion::ALL {
                    self.visit_if_legal(Move::with_promotion(mv.from(), mv.to(), promotion), visit);
                }
            } else {
                self.visit_if_legal(mv, visit);
            }
        }
    }

    fn visit_if_legal<F: FnMut(&mut Position, Move)>(&mut self, mv: Move, visit: &mut F) {
        if let Ok(undo) = self.attempt(mv) {
            visit(self, mv);
            self.unmake_move(undo);
        }
    }

    /// Leaf count below `self`, walking the tree in place.
    fn count_leaves(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let mut nodes = 0;
        if depth == 1 {
            // Bulk counting at the last ply
            self.for_each_legal(&mut |_, _| nodes += 1);
        } else {
            self.for_each_legal(&mut |pos, _| nodes += pos.count_leaves(depth - 1));
        }
        nodes
    }

    /// Count leaf nodes of the legal move tree `depth` plies deep.
    pub fn perft(&self, depth: u32) -> u64 {
        self.clone().count_leaves(depth) // Clone once at the root
    }

    /// Per-root-move perft counts, in enumeration order.
    pub fn divide(&self, depth: u32) -> Vec<(Move, u64)> {
        if depth == 0 {
            return Vec::new();
        }

        let mut counts = Vec::new();
        self.clone().for_each_legal(&mut |pos, mv| {
            let count = pos.count_leaves(depth - 1);
            debug!("{mv}: {count}");
            counts.push((mv, count));
        });
        debug!("divide({depth}) total: {}", counts.iter().map(|(_, n)| n).sum::<u64>());
        counts
    }

    /// `perft` with the root moves spread over the rayon pool, one cloned
    /// snapshot per root move.
    pub fn perft_parallel(&self, depth: u32) -> u64 {
        if depth <= 1 {
            return self.perft(depth);
        }

        let moves = self.legal_moves();
        moves
            .as_slice()
            .par_iter()
            .map(|&mv| {
                let mut pos = self.clone();
                match pos.attempt(mv) {
                    Ok(_) => pos.count_leaves(depth - 1),
                    Err(_) => 0,
                }
            })
            .sum()
    }
}

use log::{debug, trace};
use thiserror::Error;

use super::bitboards::{algebraic_to_mask, coordinate_to_mask, Coordinate};
use super::moves::{Move, Promotion};
use super::piece::{Color, Piece, Type};
use super::piece_moves::{en_passant_victim, piece_mask, promotion_row};
use super::position::Position;
use super::state::{CastleSide, PositionState};

/// Why a move was refused. The position is unchanged in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("{0}: no piece on the start square")]
    EmptySquare(Move),
    #[error("{0}: the piece does not belong to the side to move")]
    WrongSide(Move),
    #[error("{0}: destination is not reachable")]
    Unreachable(Move),
    #[error("{0}: castling right has been lost")]
    NoCastlingRight(Move),
    #[error("{0}: castling path is blocked or the rook is missing")]
    CastlingBlocked(Move),
    #[error("{0}: king would castle out of or through check")]
    CastlingThroughCheck(Move),
    #[error("{0}: pawn reaching the last row needs a promotion piece")]
    PromotionRequired(Move),
    #[error("{0}: leaves own king in check")]
    KingExposed(Move),
}

/// One piece moved on the board, plus whatever it removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Relocation {
    piece: Piece,
    from: u64,
    to: u64,
    captured: Option<(Piece, u64)>,
}

/// Everything `unmake_move` needs to put a position back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoInfo {
    mv: Move,
    prior: PositionState,
    relocations: [Option<Relocation>; 2],
    promoted: Option<Piece>,
}

impl UndoInfo {
    pub fn mv(&self) -> Move {
        self.mv
    }

    /// Whether the move removed an enemy piece.
    pub fn is_capture(&self) -> bool {
        self.relocations
            .iter()
            .flatten()
            .any(|relocation| relocation.captured.is_some())
    }
}

/// Fixed squares of one castling move.
struct CastlingPath {
    king_from: u64,
    king_to: u64,
    rook_from: u64,
    rook_to: u64,
    /// Must be empty.
    between: u64,
    /// Square the king crosses.
    transit: u64,
}

fn castling_path(color: Color, side: CastleSide) -> CastlingPath {
    let row: u32 = match color {
        Color::White => 7,
        Color::Black => 0,
    };
    let sq = |col: u32| 1u64 << (row * 8 + col);
    match side {
        CastleSide::Kingside => CastlingPath {
            king_from: sq(4),
            king_to: sq(6),
            rook_from: sq(7),
            rook_to: sq(5),
            between: sq(5) | sq(6),
            transit: sq(5),
        },
        CastleSide::Queenside => CastlingPath {
            king_from: sq(4),
            king_to: sq(2),
            rook_from: sq(0),
            rook_to: sq(3),
            between: sq(1) | sq(2) | sq(3),
            transit: sq(3),
        },
    }
}

const CASTLE_SIDES: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

fn castle_side(piece: Piece, from: u64, to: u64) -> Option<CastleSide> {
    if piece.piece_type != Type::King {
        return None;
    }
    CASTLE_SIDES.into_iter().find(|&side| {
        let path = castling_path(piece.color, side);
        path.king_from == from && path.king_to == to
    })
}

/// Castling destinations for a king of `color` standing on `from`, before any
/// right, path or attack checks.
pub(super) fn castling_targets(color: Color, from: u64) -> u64 {
    CASTLE_SIDES
        .into_iter()
        .map(|side| castling_path(color, side))
        .filter(|path| path.king_from == from)
        .fold(0, |acc, path| acc | path.king_to)
}

impl Position {
    /// Validate and play `mv`. On success the returned `UndoInfo` can be
    /// handed to `unmake_move` to restore this exact position.
    pub fn make_move(&mut self, mv: Move) -> Result<UndoInfo, IllegalMove> {
        let result = self.attempt(mv);
        match &result {
            Ok(_) => trace!("played {mv}, now {}", self.to_fen()),
            Err(err) => debug!("rejected {err}"),
        }
        result
    }

    /// Reverse a move previously returned by `make_move` on this position.
    pub fn unmake_move(&mut self, undo: UndoInfo) {
        if let (Some(promoted), Some(pawn_move)) = (undo.promoted, undo.relocations[0]) {
            self.bitboards.remove(promoted, pawn_move.to);
            self.bitboards.add(pawn_move.piece, pawn_move.to);
        }
        for relocation in undo.relocations.iter().rev().flatten() {
            self.revert(relocation);
        }
        self.state = undo.prior;
    }

    /// Play a move given as two single-square masks. Returns false and leaves
    /// the position untouched if the move is illegal.
    pub fn try_move(&mut self, from: u64, to: u64, promotion: Option<Promotion>) -> bool {
        match Move::from_masks(from, to, promotion) {
            Some(mv) => self.make_move(mv).is_ok(),
            None => {
                debug!("rejected move request {from:#x} -> {to:#x}: not single squares");
                false
            }
        }
    }

    /// Same as `try_move`, with (row, col) squares.
    pub fn try_move_coords(
        &mut self,
        from: Coordinate,
        to: Coordinate,
        promotion: Option<Promotion>,
    ) -> bool {
        match (coordinate_to_mask(from.0, from.1), coordinate_to_mask(to.0, to.1)) {
            (Some(from), Some(to)) => self.try_move(from, to, promotion),
            _ => {
                debug!("rejected move request {from:?} -> {to:?}: off the board");
                false
            }
        }
    }

    /// Same as `try_move`, with square names like `"e2"`.
    pub fn try_move_algebraic(&mut self, from: &str, to: &str, promotion: Option<Promotion>) -> bool {
        match (algebraic_to_mask(from), algebraic_to_mask(to)) {
            (Some(from), Some(to)) => self.try_move(from, to, promotion),
            _ => {
                debug!("rejected move request {from:?} -> {to:?}: bad square name");
                false
            }
        }
    }

    /// `make_move` without logging; the enumerator and perft call this in
    /// tight loops.
    pub(super) fn attempt(&mut self, mv: Move) -> Result<UndoInfo, IllegalMove> {
        let (from, to) = (mv.from_mask(), mv.to_mask());
        let piece = self.bitboards.piece_at(from).ok_or(IllegalMove::EmptySquare(mv))?;
        let color = piece.color;
        if color != self.state.side_to_move {
            return Err(IllegalMove::WrongSide(mv));
        }

        let friendly = self.bitboards.occupied_by_color(color);
        let enemy = self.bitboards.occupied_by_color(color.opposite());
        let masks = piece_mask(piece, from, friendly, enemy, self.state.en_passant);
        if masks.valid & to == 0 {
            return match castle_side(piece, from, to) {
                Some(side) => self.castle(mv, side),
                None => Err(IllegalMove::Unreachable(mv)),
            };
        }

        // a designator on any other move is ignored
        let promotion = if piece.piece_type == Type::Pawn && to & promotion_row(color) != 0 {
            Some(mv.promotion().ok_or(IllegalMove::PromotionRequired(mv))?)
        } else {
            None
        };

        let prior = self.state;
        let relocation = self.relocate_checked(mv, piece, from, to)?;
        let promoted = promotion.map(|promotion| {
            let promoted = Piece::new(color, promotion.piece_type());
            self.bitboards.remove(piece, to);
            self.bitboards.add(promoted, to);
            promoted
        });
        self.commit(piece, from, to, relocation.captured.is_some());

        Ok(UndoInfo {
            mv,
            prior,
            relocations: [Some(relocation), None],
            promoted,
        })
    }

    fn castle(&mut self, mv: Move, side: CastleSide) -> Result<UndoInfo, IllegalMove> {
        let color = self.state.side_to_move;
        let path = castling_path(color, side);
        let king = Piece::new(color, Type::King);
        let rook = Piece::new(color, Type::Rook);

        if !self.state.castling.has(color, side) {
            return Err(IllegalMove::NoCastlingRight(mv));
        }
        if self.bitboards.get(rook) & path.rook_from == 0
            || self.bitboards.all_occupied() & path.between != 0
        {
            return Err(IllegalMove::CastlingBlocked(mv));
        }
        let opponent = color.opposite();
        if self.is_square_attacked(path.king_from, opponent)
            || self.is_square_attacked(path.transit, opponent)
        {
            return Err(IllegalMove::CastlingThroughCheck(mv));
        }

        let prior = self.state;
        let king_move = self.relocate_checked(mv, king, path.king_from, path.king_to)?;
        let rook_move = match self.relocate_checked(mv, rook, path.rook_from, path.rook_to) {
            Ok(rook_move) => rook_move,
            Err(err) => {
                self.revert(&king_move);
                return Err(err);
            }
        };
        self.commit(king, path.king_from, path.king_to, false);

        Ok(UndoInfo {
            mv,
            prior,
            relocations: [Some(king_move), Some(rook_move)],
            promoted: None,
        })
    }

    /// Move `piece` and remove whatever it captures, including an en passant
    /// victim. No legality checks.
    fn relocate(&mut self, piece: Piece, from: u64, to: u64) -> Relocation {
        let mut captured = self.bitboards.piece_at(to).map(|victim| (victim, to));
        if captured.is_none()
            && piece.piece_type == Type::Pawn
            && to == self.state.en_passant
            && to != 0
        {
            let square = en_passant_victim(piece.color, to);
            captured = self
                .bitboards
                .piece_at(square)
                .filter(|victim| victim.color != piece.color)
                .map(|victim| (victim, square));
        }

        if let Some((victim, square)) = captured {
            self.bitboards.remove(victim, square);
        }
        self.bitboards.remove(piece, from);
        self.bitboards.add(piece, to);

        Relocation {
            piece,
            from,
            to,
            captured,
        }
    }

    fn revert(&mut self, relocation: &Relocation) {
        self.bitboards.remove(relocation.piece, relocation.to);
        self.bitboards.add(relocation.piece, relocation.from);
        if let Some((victim, square)) = relocation.captured {
            self.bitboards.add(victim, square);
        }
    }

    /// Relocate, then roll back if the mover's own king ends up attacked.
    fn relocate_checked(
        &mut self,
        mv: Move,
        piece: Piece,
        from: u64,
        to: u64,
    ) -> Result<Relocation, IllegalMove> {
        let relocation = self.relocate(piece, from, to);
        if self.is_in_check(piece.color) {
            self.revert(&relocation);
            return Err(IllegalMove::KingExposed(mv));
        }
        Ok(relocation)
    }

    /// State bookkeeping after the pieces are in place.
    fn commit(&mut self, piece: Piece, from: u64, to: u64, captured: bool) {
        let color = piece.color;
        let is_pawn = piece.piece_type == Type::Pawn;

        let (double_step, skipped) = match color {
            Color::White => (from >> 16, from >> 8),
            Color::Black => (from << 16, from << 8),
        };
        self.state.en_passant = if is_pawn && to == double_step { skipped } else { 0 };

        let rights = &mut self.state.castling;
        if piece.piece_type == Type::King {
            rights.revoke_all(color);
        }
        for owner in [Color::White, Color::Black] {
            for side in CASTLE_SIDES {
                let corner = castling_path(owner, side).rook_from;
                if from == corner || to == corner {
                    rights.revoke(owner, side);
                }
            }
        }

        if is_pawn || captured {
            self.state.halfmove_clock = 0;
        } else {
            self.state.halfmove_clock = self.state.halfmove_clock.saturating_add(1);
        }
        if color == Color::Black {
            self.state.fullmove_number = self.state.fullmove_number.saturating_add(1);
        }
        self.state.side_to_move = color.opposite();

        debug_assert!(self.bitboards.is_disjoint(), "piece masks overlap after {from:#x} -> {to:#x}");
    }
}

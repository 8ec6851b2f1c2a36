use super::piece::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

/// Castling availability, one flag per color and wing. A flag only says the
/// king and that rook have not moved; it says nothing about attacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::all()
    }
}

impl CastlingRights {
    pub const fn all() -> Self {
        Self {
            white_kingside: true,
            white_queenside: true,
            black_kingside: true,
            black_queenside: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            white_kingside: false,
            white_queenside: false,
            black_kingside: false,
            black_queenside: false,
        }
    }

    pub fn has(&self, color: Color, side: CastleSide) -> bool {
        match (color, side) {
            (Color::White, CastleSide::Kingside) => self.white_kingside,
            (Color::White, CastleSide::Queenside) => self.white_queenside,
            (Color::Black, CastleSide::Kingside) => self.black_kingside,
            (Color::Black, CastleSide::Queenside) => self.black_queenside,
        }
    }

    pub fn revoke(&mut self, color: Color, side: CastleSide) {
        let flag = match (color, side) {
            (Color::White, CastleSide::Kingside) => &mut self.white_kingside,
            (Color::White, CastleSide::Queenside) => &mut self.white_queenside,
            (Color::Black, CastleSide::Kingside) => &mut self.black_kingside,
            (Color::Black, CastleSide::Queenside) => &mut self.black_queenside,
        };
        *flag = false;
    }

    pub fn revoke_all(&mut self, color: Color) {
        self.revoke(color, CastleSide::Kingside);
        self.revoke(color, CastleSide::Queenside);
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::none()
    }
}

/// Everything about a position that is not piece placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionState {
    pub side_to_move: Color,
    pub castling: CastlingRights,
    /// Square skipped by the last double pawn step, or 0.
    pub en_passant: u64,
    /// Half moves since the last capture or pawn move.
    pub halfmove_clock: u32,
    /// Starts at 1 and increments after black moves.
    pub fullmove_number: u32,
}

impl Default for PositionState {
    fn default() -> Self {
        Self {
            side_to_move: Color::White,
            castling: CastlingRights::all(),
            en_passant: 0,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

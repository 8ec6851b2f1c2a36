use std::fmt;

use smallvec::SmallVec;

use super::bitboards::{algebraic_to_mask, index_to_mask, mask_to_algebraic, square_index};
use super::piece::Type;

/*-------ARCHITECTURE--------*/

// | 6 bits | 6 bits | 3 bits    |
// |  From  |   To   | Promotion |
// |        15 of 16 bits        |

/// Move lists rarely exceed 64 entries, so they stay on the stack.
pub type MoveList = SmallVec<[Move; 64]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Promotion {
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl Promotion {
    pub const ALL: [Promotion; 4] = [
        Promotion::Queen,
        Promotion::Rook,
        Promotion::Bishop,
        Promotion::Knight,
    ];

    pub fn piece_type(self) -> Type {
        match self {
            Promotion::Queen => Type::Queen,
            Promotion::Rook => Type::Rook,
            Promotion::Bishop => Type::Bishop,
            Promotion::Knight => Type::Knight,
        }
    }

    /// Accepts `q`, `r`, `b`, `n` in either case.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'q' => Some(Promotion::Queen),
            'r' => Some(Promotion::Rook),
            'b' => Some(Promotion::Bishop),
            'n' => Some(Promotion::Knight),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Promotion::Queen => 'q',
            Promotion::Rook => 'r',
            Promotion::Bishop => 'b',
            Promotion::Knight => 'n',
        }
    }

    fn code(self) -> u16 {
        match self {
            Promotion::Queen => 1,
            Promotion::Rook => 2,
            Promotion::Bishop => 3,
            Promotion::Knight => 4,
        }
    }

    fn from_code(code: u16) -> Option<Self> {
        match code {
            1 => Some(Promotion::Queen),
            2 => Some(Promotion::Rook),
            3 => Some(Promotion::Bishop),
            4 => Some(Promotion::Knight),
            _ => None,
        }
    }
}

/// A requested move: start square, destination square and an optional
/// promotion choice. Squares are bit indices (see `bitboards::squares`).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    buf: u16,
}

impl Move {
    pub fn new(from: u8, to: u8) -> Move {
        Self::pack(from, to, None)
    }

    pub fn with_promotion(from: u8, to: u8, promotion: Promotion) -> Move {
        Self::pack(from, to, Some(promotion))
    }

    fn pack(from: u8, to: u8, promotion: Option<Promotion>) -> Move {
        debug_assert!(from < 64 && to < 64, "square index out of range");
        let mut buf = 0u16;
        buf |= ((from & 0x3F) as u16) << 10;
        buf |= ((to & 0x3F) as u16) << 4;
        buf |= promotion.map_or(0, Promotion::code);
        Self { buf }
    }

    /// Build a move from two single-square masks.
    pub fn from_masks(from: u64, to: u64, promotion: Option<Promotion>) -> Option<Move> {
        Some(Self::pack(square_index(from)?, square_index(to)?, promotion))
    }

    /// Parse long algebraic text such as `e2e4` or `e7e8q`.
    pub fn from_uci(text: &str) -> Option<Move> {
        if !text.is_ascii() || !(4..=5).contains(&text.len()) {
            return None;
        }
        let from = algebraic_to_mask(&text[0..2])?;
        let to = algebraic_to_mask(&text[2..4])?;
        let promotion = match text[4..].chars().next() {
            Some(c) => Some(Promotion::from_char(c)?),
            None => None,
        };
        Self::from_masks(from, to, promotion)
    }

    #[inline]
    pub fn from(&self) -> u8 {
        ((self.buf >> 10) & 0x3F) as u8
    }

    #[inline]
    pub fn to(&self) -> u8 {
        ((self.buf >> 4) & 0x3F) as u8
    }

    #[inline]
    pub fn from_mask(&self) -> u64 {
        1u64 << self.from()
    }

    #[inline]
    pub fn to_mask(&self) -> u64 {
        1u64 << self.to()
    }

    pub fn promotion(&self) -> Option<Promotion> {
        Promotion::from_code(self.buf & 0x7)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = |idx: u8| index_to_mask(idx).and_then(mask_to_algebraic).unwrap_or_default();
        write!(f, "{}{}", name(self.from()), name(self.to()))?;
        if let Some(p) = self.promotion() {
            write!(f, "{}", p.to_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}

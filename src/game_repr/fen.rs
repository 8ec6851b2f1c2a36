use std::fmt;
use std::str::FromStr;

use log::debug;
use thiserror::Error;

use super::bitboards::{algebraic_to_mask, coordinate_to_mask, mask_to_algebraic, mask_to_coordinate, Bitboards};
use super::piece::{Color, Piece};
use super::position::Position;
use super::state::{CastlingRights, PositionState};

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("expected 6 space-separated fields, found {0}")]
    FieldCount(usize),
    #[error("expected 8 ranks, found {0}")]
    RankCount(usize),
    #[error("rank {rank} covers {columns} columns instead of 8")]
    RankWidth { rank: usize, columns: usize },
    #[error("unknown piece letter {0:?}")]
    UnknownPiece(char),
    #[error("invalid side to move {0:?}")]
    SideToMove(String),
    #[error("castling letter {0:?} appears twice")]
    DuplicateCastling(char),
    #[error("invalid castling field {0:?}")]
    Castling(String),
    #[error("invalid en passant square {0:?}")]
    EnPassant(String),
    #[error("invalid halfmove clock {0:?}")]
    HalfmoveClock(String),
    #[error("invalid fullmove number {0:?}")]
    FullmoveNumber(String),
}

impl Position {
    /// Parse a position from FEN. Nothing is built unless every field is valid.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let position = parse(fen);
        if let Err(err) = &position {
            debug!("rejected FEN {fen:?}: {err}");
        }
        position
    }

    pub fn to_fen(&self) -> String {
        let mut fen = String::with_capacity(90);

        for (i, rank) in self.bitboards.to_char_board().iter().enumerate() {
            if i > 0 {
                fen.push('/');
            }
            let mut gap = 0;
            for square in rank {
                match square {
                    Some(c) => {
                        if gap > 0 {
                            fen.push_str(&gap.to_string());
                            gap = 0;
                        }
                        fen.push(*c);
                    }
                    None => gap += 1,
                }
            }
            if gap > 0 {
                fen.push_str(&gap.to_string());
            }
        }

        let state = &self.state;
        fen.push(' ');
        fen.push(match state.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        fen.push(' ');
        let rights = state.castling;
        if rights.is_empty() {
            fen.push('-');
        } else {
            for (flag, c) in [
                (rights.white_kingside, 'K'),
                (rights.white_queenside, 'Q'),
                (rights.black_kingside, 'k'),
                (rights.black_queenside, 'q'),
            ] {
                if flag {
                    fen.push(c);
                }
            }
        }

        fen.push(' ');
        match mask_to_algebraic(state.en_passant) {
            Some(square) => fen.push_str(&square),
            None => fen.push('-'),
        }

        fen.push_str(&format!(" {} {}", state.halfmove_clock, state.fullmove_number));
        fen
    }
}

fn parse(fen: &str) -> Result<Position, FenError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    let &[placement, side, castling, en_passant, halfmove, fullmove] = fields.as_slice() else {
        return Err(FenError::FieldCount(fields.len()));
    };

    let bitboards = parse_placement(placement)?;

    let side_to_move = match side {
        "w" | "W" => Color::White,
        "b" | "B" => Color::Black,
        _ => return Err(FenError::SideToMove(side.to_string())),
    };

    let state = PositionState {
        side_to_move,
        castling: parse_castling(castling)?,
        en_passant: parse_en_passant(en_passant)?,
        halfmove_clock: parse_counter(halfmove)
            .ok_or_else(|| FenError::HalfmoveClock(halfmove.to_string()))?,
        fullmove_number: parse_counter(fullmove)
            .filter(|&n| n >= 1)
            .ok_or_else(|| FenError::FullmoveNumber(fullmove.to_string()))?,
    };

    Ok(Position::new(bitboards, state))
}

fn parse_placement(placement: &str) -> Result<Bitboards, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::RankCount(ranks.len()));
    }

    let mut bitboards = Bitboards::empty();
    for (row, rank) in ranks.iter().enumerate() {
        let mut col = 0usize;
        for c in rank.chars() {
            match c {
                '1'..='8' => col += c as usize - '0' as usize,
                _ => {
                    let piece = Piece::from_char(c).ok_or(FenError::UnknownPiece(c))?;
                    if let Some(square) = coordinate_to_mask(row as i32, col as i32) {
                        bitboards.add(piece, square);
                    }
                    col += 1;
                }
            }
            if col > 8 {
                return Err(FenError::RankWidth { rank: 8 - row, columns: col });
            }
        }
        if col != 8 {
            return Err(FenError::RankWidth { rank: 8 - row, columns: col });
        }
    }
    Ok(bitboards)
}

fn parse_castling(field: &str) -> Result<CastlingRights, FenError> {
    let mut rights = CastlingRights::none();
    if field == "-" {
        return Ok(rights);
    }

    for c in field.chars() {
        let flag = match c {
            'K' => &mut rights.white_kingside,
            'Q' => &mut rights.white_queenside,
            'k' => &mut rights.black_kingside,
            'q' => &mut rights.black_queenside,
            _ => return Err(FenError::Castling(field.to_string())),
        };
        if *flag {
            return Err(FenError::DuplicateCastling(c));
        }
        *flag = true;
    }
    Ok(rights)
}

/// Plain decimal digits only; `u32::from_str` would also take a leading `+`.
fn parse_counter(field: &str) -> Option<u32> {
    if !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

/// The target square must sit on the 3rd or 6th rank.
fn parse_en_passant(field: &str) -> Result<u64, FenError> {
    if field == "-" {
        return Ok(0);
    }
    algebraic_to_mask(field)
        .filter(|&square| matches!(mask_to_coordinate(square), Some((2 | 5, _))))
        .ok_or_else(|| FenError::EnPassant(field.to_string()))
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fen())
    }
}

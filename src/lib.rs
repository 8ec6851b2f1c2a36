//! Bitboard chess position with pseudo-legal move masks, a transactional
//! move engine that rejects self-check, and legal move enumeration.
//!
//! ```
//! use bitboard_chess::game_repr::Position;
//!
//! let mut pos = Position::default();
//! assert!(pos.try_move_algebraic("e2", "e4", None));
//! assert_eq!(pos.to_fen(), "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1");
//! ```

pub mod game_repr;

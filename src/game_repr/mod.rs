mod fen;
mod legal_moves;
mod make_move;
mod moves;
mod piece;
mod position;
mod state;
pub mod bitboards;
pub mod piece_moves;

#[cfg(test)]
mod tests;

pub use fen::*;
pub use legal_moves::*;
pub use make_move::*;
pub use moves::*;
pub use piece::*;
pub use position::*;
pub use state::*;
pub use bitboards::*;

// Board representation and FEN codec
pub mod board;
pub mod error;
pub mod fen;
pub mod piece;
pub mod square;

// Re-export main types for convenience
pub use board::{Board, CastlingFlag, CastlingRights, START_FEN};
pub use error::{FenError, Result};
pub use piece::{Color, Piece, PieceType};
pub use square::Square;

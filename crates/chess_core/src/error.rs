use std::num::ParseIntError;

use thiserror::Error;

/// Reasons a FEN string is rejected. Decoding stops at the first one found.
///
/// Ranks are reported the way they are written on a board (1-8), files as the
/// number of squares already filled in that rank.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("fen position contains invalid character '{character}' at offset {offset}: {placement}")]
    InvalidCharacter {
        character: char,
        offset: usize,
        placement: String,
    },

    #[error("too many squares ({files}) in rank {rank}: {placement}")]
    RankOverflow {
        rank: u8,
        files: u8,
        placement: String,
    },

    #[error("not enough squares ({files}) in rank {rank}: {placement}")]
    RankUnderflow {
        rank: u8,
        files: u8,
        placement: String,
    },

    #[error("too many ranks ({ranks}): {placement}")]
    TooManyRanks { ranks: u8, placement: String },

    #[error("not reached last square (file={file}, rank={rank}) after reading fen: {placement}")]
    IncompleteTraversal {
        file: u8,
        rank: u8,
        placement: String,
    },

    #[error("fen next player must be 'w' or 'b', got '{0}'")]
    InvalidSideToMove(String),

    #[error("fen castling rights must match K?Q?k?q? or '-', got '{0}'")]
    InvalidCastlingRights(String),

    #[error("fen en passant square must be a square a1-h8 or '-', got '{0}'")]
    InvalidEnPassantSquare(String),

    #[error("fen {field} '{value}' is not a non-negative number: {source}")]
    InvalidNumber {
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

pub type Result<T> = std::result::Result<T, FenError>;

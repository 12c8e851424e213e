//! FEN decoding and encoding.
//!
//! Only the placement field is mandatory. The remaining fields are positional
//! and default to `w - - 0 1` when they are left off the end of the string:
//!
//! ```text
//! rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1
//! <placement>                                 <side> <castling> <ep> <halfmove> <move>
//! ```

use std::fmt::Write;
use std::sync::OnceLock;

use log::debug;
use regex::Regex;

use crate::{Board, CastlingFlag, CastlingRights, Color, FenError, Piece, Square};

fn illegal_placement_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("[^1-8pPnNbBrRqQkK/]").expect("valid regex"))
}

fn castling_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("^(K?Q?k?q?|-)$").expect("valid regex"))
}

fn en_passant_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("^([a-h][1-8]|-)$").expect("valid regex"))
}

/// Decodes `text` into a new [`Board`].
///
/// The first violation found is returned; nothing is partially applied.
/// A move number of 0 is read as 1.
pub fn decode(text: &str) -> Result<Board, FenError> {
    let mut fields = text.trim().split(' ');
    let mut board = Board::empty();

    // `split` always yields at least one item, possibly empty
    let placement = fields.next().unwrap_or_default();
    decode_placement(&mut board, placement)?;

    board.set_move_number(1);

    if let Some(side) = fields.next() {
        let color =
            Color::from_fen(side).ok_or_else(|| FenError::InvalidSideToMove(side.to_string()))?;
        board.set_next_player(color);
    }

    if let Some(castling) = fields.next() {
        board.set_castling(decode_castling(castling)?);
    }

    if let Some(en_passant) = fields.next() {
        board.set_en_passant(decode_en_passant(en_passant)?);
    }

    if let Some(clock) = fields.next() {
        board.set_halfmove_clock(decode_number("halfmove clock", clock)?);
    }

    if let Some(number) = fields.next() {
        let number = decode_number("move number", number)?;
        board.set_move_number(number.max(1));
    }

    let ignored = fields.count();
    if ignored > 0 {
        debug!("ignoring {ignored} trailing fen field(s)");
    }

    debug!("decoded fen {}", board.to_fen());
    Ok(board)
}

fn decode_placement(board: &mut Board, placement: &str) -> Result<(), FenError> {
    if let Some(m) = illegal_placement_chars().find(placement) {
        return Err(FenError::InvalidCharacter {
            character: m.as_str().chars().next().unwrap_or_default(),
            offset: m.start(),
            placement: placement.to_string(),
        });
    }

    // Cursor starts on a8. `rank` is zero-based; errors report it one-based.
    let mut file: u8 = 0;
    let mut rank: u8 = 7;

    for (offset, c) in placement.char_indices() {
        if let Some(run) = c.to_digit(10) {
            file += run as u8;
            if file > 8 {
                return Err(FenError::RankOverflow {
                    rank: rank + 1,
                    files: file,
                    placement: placement.to_string(),
                });
            }
        } else if c == '/' {
            if file < 8 {
                return Err(FenError::RankUnderflow {
                    rank: rank + 1,
                    files: file,
                    placement: placement.to_string(),
                });
            }
            if rank == 0 {
                return Err(FenError::TooManyRanks {
                    ranks: 9,
                    placement: placement.to_string(),
                });
            }
            file = 0;
            rank -= 1;
        } else {
            // the character class check above leaves only piece letters here
            let Some(piece) = Piece::from_char(c) else {
                return Err(FenError::InvalidCharacter {
                    character: c,
                    offset,
                    placement: placement.to_string(),
                });
            };
            let Some(square) = Square::from_coords(file, rank) else {
                return Err(FenError::RankOverflow {
                    rank: rank + 1,
                    files: file + 1,
                    placement: placement.to_string(),
                });
            };
            board.put_piece(piece, square);
            file += 1;
        }
    }

    if file != 8 || rank != 0 {
        return Err(FenError::IncompleteTraversal {
            file,
            rank: rank + 1,
            placement: placement.to_string(),
        });
    }
    Ok(())
}

fn decode_castling(token: &str) -> Result<CastlingRights, FenError> {
    if !castling_pattern().is_match(token) {
        return Err(FenError::InvalidCastlingRights(token.to_string()));
    }
    let mut rights = CastlingRights::NONE;
    for flag in token.chars().filter_map(CastlingFlag::from_char) {
        rights.insert(flag);
    }
    Ok(rights)
}

fn decode_en_passant(token: &str) -> Result<Option<Square>, FenError> {
    if !en_passant_pattern().is_match(token) {
        return Err(FenError::InvalidEnPassantSquare(token.to_string()));
    }
    if token == "-" {
        return Ok(None);
    }
    Square::from_algebraic(token)
        .map(Some)
        .ok_or_else(|| FenError::InvalidEnPassantSquare(token.to_string()))
}

fn decode_number(field: &'static str, token: &str) -> Result<u32, FenError> {
    token.parse().map_err(|source| FenError::InvalidNumber {
        field,
        value: token.to_string(),
        source,
    })
}

/// Encodes `board` as a six-field FEN string. Never fails.
pub fn encode(board: &Board) -> String {
    let mut fen = String::with_capacity(90);

    for rank in (0u8..8).rev() {
        let mut empty = 0;
        for file in 0u8..8 {
            match Square::from_coords(file, rank).and_then(|sq| board.piece_at(sq)) {
                Some(piece) => {
                    if empty > 0 {
                        let _ = write!(fen, "{empty}");
                        empty = 0;
                    }
                    fen.push(piece.to_char());
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            let _ = write!(fen, "{empty}");
        }
        if rank > 0 {
            fen.push('/');
        }
    }

    let en_passant = board
        .en_passant()
        .map_or_else(|| "-".to_string(), |sq| sq.to_string());

    let _ = write!(
        fen,
        " {} {} {} {} {}",
        board.next_player().to_char(),
        board.castling(),
        en_passant,
        board.halfmove_clock(),
        board.move_number()
    );
    fen
}

use std::fmt;
use std::str::FromStr;

use crate::{fen, Color, FenError, Piece, PieceType, Square};

/// FEN of the standard starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// One castling right, named by its FEN letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastlingFlag {
    WhiteKingside,
    WhiteQueenside,
    BlackKingside,
    BlackQueenside,
}

impl CastlingFlag {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'K' => Some(Self::WhiteKingside),
            'Q' => Some(Self::WhiteQueenside),
            'k' => Some(Self::BlackKingside),
            'q' => Some(Self::BlackQueenside),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl CastlingRights {
    pub const NONE: Self = Self {
        white_kingside: false,
        white_queenside: false,
        black_kingside: false,
        black_queenside: false,
    };

    pub const ALL: Self = Self {
        white_kingside: true,
        white_queenside: true,
        black_kingside: true,
        black_queenside: true,
    };

    pub const WHITE: Self = Self {
        white_kingside: true,
        white_queenside: true,
        ..Self::NONE
    };

    pub const BLACK: Self = Self {
        black_kingside: true,
        black_queenside: true,
        ..Self::NONE
    };

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }

    pub fn has(&self, flag: CastlingFlag) -> bool {
        match flag {
            CastlingFlag::WhiteKingside => self.white_kingside,
            CastlingFlag::WhiteQueenside => self.white_queenside,
            CastlingFlag::BlackKingside => self.black_kingside,
            CastlingFlag::BlackQueenside => self.black_queenside,
        }
    }

    pub fn insert(&mut self, flag: CastlingFlag) {
        let slot = match flag {
            CastlingFlag::WhiteKingside => &mut self.white_kingside,
            CastlingFlag::WhiteQueenside => &mut self.white_queenside,
            CastlingFlag::BlackKingside => &mut self.black_kingside,
            CastlingFlag::BlackQueenside => &mut self.black_queenside,
        };
        *slot = true;
    }

    /// Flags in FEN order, paired with their letters.
    fn flags(&self) -> [(bool, char); 4] {
        [
            (self.white_kingside, 'K'),
            (self.white_queenside, 'Q'),
            (self.black_kingside, 'k'),
            (self.black_queenside, 'q'),
        ]
    }
}

impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        for (present, letter) in self.flags() {
            if present {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

/// A single position snapshot: what a FEN string describes, nothing more.
///
/// The board knows nothing about chess rules. Every mutator is an
/// unconditional write; move legality, check and turn order are left to
/// whoever drives it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; Square::COUNT],
    next_player: Color,
    castling: CastlingRights,
    en_passant: Option<Square>,
    halfmove_clock: u32,
    move_number: u32,
}

impl Board {
    /// The standard starting position.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.setup_initial_position();
        board
    }

    /// A cleared board, identical to the result of [`Board::clear`].
    pub fn empty() -> Self {
        Self {
            squares: [None; Square::COUNT],
            next_player: Color::White,
            castling: CastlingRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            move_number: 0,
        }
    }

    /// Decodes a FEN string into a new board.
    pub fn from_fen(text: &str) -> Result<Self, FenError> {
        fen::decode(text)
    }

    pub fn to_fen(&self) -> String {
        fen::encode(self)
    }

    /// Replaces this board with the decoded `text`.
    ///
    /// The string is decoded into a separate board first; on error `self` is
    /// left exactly as it was.
    pub fn set_fen(&mut self, text: &str) -> Result<(), FenError> {
        *self = fen::decode(text)?;
        Ok(())
    }

    /// Clears the board, then decodes `text` into it.
    ///
    /// Unlike [`Board::set_fen`], a failed decode leaves the board cleared
    /// rather than unchanged. Callers must treat an error as "board is now
    /// empty".
    pub fn clear_and_set_fen(&mut self, text: &str) -> Result<(), FenError> {
        self.clear();
        *self = fen::decode(text)?;
        Ok(())
    }

    fn setup_initial_position(&mut self) {
        let piece_order = [
            PieceType::Rook,
            PieceType::Knight,
            PieceType::Bishop,
            PieceType::Queen,
            PieceType::King,
            PieceType::Bishop,
            PieceType::Knight,
            PieceType::Rook,
        ];

        for (file, piece_type) in (0u8..8).zip(piece_order) {
            self.put_at(file, 0, Piece::new(piece_type, Color::White));
            self.put_at(file, 1, Piece::new(PieceType::Pawn, Color::White));
            self.put_at(file, 6, Piece::new(PieceType::Pawn, Color::Black));
            self.put_at(file, 7, Piece::new(piece_type, Color::Black));
        }

        self.next_player = Color::White;
        self.castling = CastlingRights::ALL;
        self.en_passant = None;
        self.halfmove_clock = 0;
        self.move_number = 1;
    }

    fn put_at(&mut self, file: u8, rank: u8, piece: Piece) {
        if let Some(square) = Square::from_coords(file, rank) {
            self.put_piece(piece, square);
        }
    }

    /// Empties every square and resets the side fields.
    ///
    /// The move number is reset to 0, not 1; [`fen::encode`] writes whatever
    /// value is present.
    pub fn clear(&mut self) {
        self.squares = [None; Square::COUNT];
        self.next_player = Color::White;
        self.castling = CastlingRights::NONE;
        self.en_passant = None;
        self.halfmove_clock = 0;
        self.move_number = 0;
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    /// Writes `piece` to `square` and returns what was there before.
    pub fn put_piece(&mut self, piece: Piece, square: Square) -> Option<Piece> {
        self.set_piece(square, Some(piece))
    }

    /// Raw slot write; `None` empties the square. Returns the previous content.
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.squares[square.index()], piece)
    }

    pub fn remove_piece(&mut self, square: Square) -> Option<Piece> {
        self.set_piece(square, None)
    }

    /// Lifts whatever is on `from` and drops it on `to`, returning the piece
    /// that was overwritten on `to`.
    ///
    /// No checks of any kind: moving from an empty square empties `to`, and
    /// castling rights, en passant and clocks are left alone.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.remove_piece(from);
        self.set_piece(to, moving)
    }

    /// Occupied squares in index order (a1, b1, ..., h8).
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    pub fn next_player(&self) -> Color {
        self.next_player
    }

    pub fn set_next_player(&mut self, color: Color) {
        self.next_player = color;
    }

    pub fn flip_next_player(&mut self) {
        self.next_player = self.next_player.flip();
    }

    pub fn castling(&self) -> CastlingRights {
        self.castling
    }

    pub fn set_castling(&mut self, castling: CastlingRights) {
        self.castling = castling;
    }

    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    pub fn set_en_passant(&mut self, square: Option<Square>) {
        self.en_passant = square;
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn set_halfmove_clock(&mut self, plies: u32) {
        self.halfmove_clock = plies;
    }

    pub fn move_number(&self) -> u32 {
        self.move_number
    }

    pub fn set_move_number(&mut self, number: u32) {
        self.move_number = number;
    }

    /// Multi-line dump: the FEN, a framed grid of piece glyphs with rank 8 on
    /// top, and the side to move.
    pub fn pretty(&self) -> String {
        const FRAME: &str = "+---+---+---+---+---+---+---+---+\n";

        let mut out = String::new();
        out.push_str(&self.to_fen());
        out.push('\n');
        out.push_str(FRAME);
        for rank in (0u8..8).rev() {
            for file in 0u8..8 {
                let glyph = Square::from_coords(file, rank)
                    .and_then(|sq| self.piece_at(sq))
                    .map_or(' ', Piece::glyph);
                out.push_str("| ");
                out.push(glyph);
                out.push(' ');
            }
            out.push_str("|\n");
            out.push_str(FRAME);
        }
        out.push_str(&format!("Next Player    : {}\n", self.next_player));
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fen())
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        fen::decode(s)
    }
}

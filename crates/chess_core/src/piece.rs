use std::fmt;

/// Side to move, and the owner of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn flip(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// FEN letter for the side-to-move field.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    /// Parses the side-to-move field. Only the exact tokens `w` and `b` are accepted.
    pub fn from_fen(token: &str) -> Option<Self> {
        match token {
            "w" => Some(Color::White),
            "b" => Some(Color::Black),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceType {
    King,
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
}

impl PieceType {
    pub const ALL: [PieceType; 6] = [
        PieceType::King,
        PieceType::Pawn,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Queen,
    ];

    /// Uppercase FEN letter.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            PieceType::King => 'K',
            PieceType::Pawn => 'P',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Rook => 'R',
            PieceType::Queen => 'Q',
        }
    }
}

/// A colored piece. Empty squares are `Option<Piece>::None` throughout the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub piece_type: PieceType,
    pub color: Color,
}

impl Piece {
    pub const fn new(piece_type: PieceType, color: Color) -> Self {
        Self { piece_type, color }
    }

    /// FEN letter: uppercase for White, lowercase for Black.
    pub const fn to_char(self) -> char {
        let c = self.piece_type.to_char();
        match self.color {
            Color::White => c,
            Color::Black => c.to_ascii_lowercase(),
        }
    }

    /// Parses one of `PNBRQKpnbrqk`. Anything else, digits included, is `None`.
    pub fn from_char(c: char) -> Option<Self> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let piece_type = match c.to_ascii_uppercase() {
            'K' => PieceType::King,
            'P' => PieceType::Pawn,
            'N' => PieceType::Knight,
            'B' => PieceType::Bishop,
            'R' => PieceType::Rook,
            'Q' => PieceType::Queen,
            _ => return None,
        };
        Some(Self::new(piece_type, color))
    }

    /// Unicode chess symbol, used by the text board dump.
    pub const fn glyph(self) -> char {
        match (self.color, self.piece_type) {
            (Color::White, PieceType::King) => '♔',
            (Color::White, PieceType::Queen) => '♕',
            (Color::White, PieceType::Rook) => '♖',
            (Color::White, PieceType::Bishop) => '♗',
            (Color::White, PieceType::Knight) => '♘',
            (Color::White, PieceType::Pawn) => '♙',
            (Color::Black, PieceType::King) => '♚',
            (Color::Black, PieceType::Queen) => '♛',
            (Color::Black, PieceType::Rook) => '♜',
            (Color::Black, PieceType::Bishop) => '♝',
            (Color::Black, PieceType::Knight) => '♞',
            (Color::Black, PieceType::Pawn) => '♟',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_flip_is_an_involution() {
        assert_eq!(Color::White.flip(), Color::Black);
        assert_eq!(Color::Black.flip(), Color::White);
        assert_eq!(Color::White.flip().flip(), Color::White);
    }

    #[test]
    fn color_fen_tokens() {
        assert_eq!(Color::from_fen("w"), Some(Color::White));
        assert_eq!(Color::from_fen("b"), Some(Color::Black));
        assert_eq!(Color::from_fen("W"), None);
        assert_eq!(Color::from_fen("|"), None);
        assert_eq!(Color::from_fen("wb"), None);
        assert_eq!(Color::White.to_char(), 'w');
        assert_eq!(Color::Black.to_char(), 'b');
    }

    #[test]
    fn piece_letters_round_trip() {
        for c in "PNBRQKpnbrqk".chars() {
            let piece = Piece::from_char(c).unwrap();
            assert_eq!(piece.to_char(), c);
        }
        assert_eq!(
            Piece::from_char('n'),
            Some(Piece::new(PieceType::Knight, Color::Black))
        );
        assert_eq!(Piece::from_char('x'), None);
        assert_eq!(Piece::from_char('1'), None);
        assert_eq!(Piece::from_char('/'), None);
    }

    #[test]
    fn glyphs_differ_by_color() {
        let white = Piece::new(PieceType::Queen, Color::White);
        let black = Piece::new(PieceType::Queen, Color::Black);
        assert_eq!(white.glyph(), '♕');
        assert_eq!(black.glyph(), '♛');
    }
}

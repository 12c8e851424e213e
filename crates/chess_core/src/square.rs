use std::fmt;

/// One of the 64 board cells, `index = rank * 8 + file` with a1 = 0 and h8 = 63.
///
/// Construction is checked, so every `Square` value addresses a real cell.
/// "No square" (unset en passant, no drag in progress) is `Option<Square>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    pub const COUNT: usize = 64;

    pub const fn new(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Self(index))
        } else {
            None
        }
    }

    /// File and rank are zero-based: file 0 is the a-file, rank 0 is rank 1.
    pub const fn from_coords(file: u8, rank: u8) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Self(rank * 8 + file))
        } else {
            None
        }
    }

    /// Parses "a1".."h8".
    pub fn from_algebraic(notation: &str) -> Option<Self> {
        match notation.as_bytes() {
            [file @ b'a'..=b'h', rank @ b'1'..=b'8'] => {
                Self::from_coords(*file - b'a', *rank - b'1')
            }
            _ => None,
        }
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn file_char(self) -> char {
        (b'a' + self.file()) as char
    }

    pub const fn rank_char(self) -> char {
        (b'1' + self.rank()) as char
    }

    /// Checkerboard colour. a1 is dark.
    pub const fn is_light(self) -> bool {
        (self.file() + self.rank()) % 2 == 1
    }

    pub fn all() -> impl DoubleEndedIterator<Item = Square> {
        (0..64).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_rank_major() {
        assert_eq!(Square::from_coords(0, 0).unwrap().index(), 0);
        assert_eq!(Square::from_coords(7, 0).unwrap().index(), 7);
        assert_eq!(Square::from_coords(0, 1).unwrap().index(), 8);
        assert_eq!(Square::from_coords(7, 7).unwrap().index(), 63);

        let e4 = Square::new(28).unwrap();
        assert_eq!(e4.file(), 4);
        assert_eq!(e4.rank(), 3);
    }

    #[test]
    fn construction_rejects_out_of_range() {
        assert_eq!(Square::new(64), None);
        assert_eq!(Square::new(255), None);
        assert_eq!(Square::from_coords(8, 0), None);
        assert_eq!(Square::from_coords(0, 8), None);
    }

    #[test]
    fn algebraic_notation() {
        assert_eq!(Square::from_algebraic("a1"), Square::new(0));
        assert_eq!(Square::from_algebraic("h8"), Square::new(63));
        assert_eq!(Square::from_algebraic("e3"), Square::new(20));
        assert_eq!(Square::from_algebraic("i1"), None);
        assert_eq!(Square::from_algebraic("a9"), None);
        assert_eq!(Square::from_algebraic("a0"), None);
        assert_eq!(Square::from_algebraic("A1"), None);
        assert_eq!(Square::from_algebraic("e"), None);
        assert_eq!(Square::from_algebraic("e44"), None);
        assert_eq!(Square::from_algebraic(""), None);
    }

    #[test]
    fn display_matches_algebraic() {
        for sq in Square::all() {
            assert_eq!(Square::from_algebraic(&sq.to_string()), Some(sq));
        }
        assert_eq!(Square::new(0).unwrap().to_string(), "a1");
        assert_eq!(Square::new(63).unwrap().to_string(), "h8");
    }

    #[test]
    fn checkerboard_colours() {
        assert!(!Square::from_algebraic("a1").unwrap().is_light());
        assert!(Square::from_algebraic("h1").unwrap().is_light());
        assert!(!Square::from_algebraic("h8").unwrap().is_light());
        assert!(Square::from_algebraic("a8").unwrap().is_light());
    }
}

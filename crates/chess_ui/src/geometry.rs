//! Pixel geometry of an 8x8 board drawn with rank 8 at the top and the
//! a-file on the left. The origin is the top-left corner of the canvas,
//! y grows downwards.

use chess_core::Square;

use crate::BoardConfig;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: f32,
}

impl Rect {
    pub fn center(&self) -> Point {
        self.origin.offset(self.size / 2.0, self.size / 2.0)
    }

    /// Half-open: the right and bottom edges belong to the neighbour.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.origin.x
            && p.y >= self.origin.y
            && p.x < self.origin.x + self.size
            && p.y < self.origin.y + self.size
    }
}

/// Raw file/rank under `(x, y)` for squares of edge `square_size`.
///
/// No bounds are enforced: pointers left of or below the board give values
/// outside 0..8. Use [`square_at`] when a real square is needed.
pub fn file_rank_at(x: f32, y: f32, square_size: f32) -> (i32, i32) {
    let file = cell_index(x, square_size);
    let rank = 7 - cell_index(y, square_size);
    (file, rank)
}

/// `floor(v / size)`, corrected so that a coordinate computed as
/// `i as f32 * size` always lands in cell `i`. The division alone can round
/// just below an integer.
fn cell_index(v: f32, size: f32) -> i32 {
    let mut i = (v / size).floor() as i32;
    if i < i32::MAX && (i + 1) as f32 * size <= v {
        i += 1;
    }
    if i > i32::MIN && i as f32 * size > v {
        i -= 1;
    }
    i
}

/// The square under `(x, y)`, or `None` off the board.
pub fn square_at(x: f32, y: f32, square_size: f32) -> Option<Square> {
    let (file, rank) = file_rank_at(x, y, square_size);
    let file = u8::try_from(file).ok()?;
    let rank = u8::try_from(rank).ok()?;
    Square::from_coords(file, rank)
}

/// Top-left pixel of `square`.
pub fn square_origin(square: Square, square_size: f32) -> Point {
    Point::new(
        square.file() as f32 * square_size,
        (7 - square.rank()) as f32 * square_size,
    )
}

/// Clamps a dragged item's top-left corner so the whole item of edge
/// `item_size` stays on a canvas of edge `canvas_size`. Each axis is
/// clamped on its own.
pub fn clamp_to_canvas(top_left: Point, item_size: f32, canvas_size: f32) -> Point {
    let max = (canvas_size - item_size).max(0.0);
    Point::new(top_left.x.clamp(0.0, max), top_left.y.clamp(0.0, max))
}

/// Geometry of one rendered board: square edge plus piece scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardGeometry {
    square_size: f32,
    piece_scale: f32,
}

impl BoardGeometry {
    pub fn new(square_size: f32, piece_scale: f32) -> Self {
        Self {
            square_size,
            piece_scale,
        }
    }

    /// The board takes the canvas width minus one pixel for the outer border.
    pub fn from_config(config: &BoardConfig) -> Self {
        let board_size = config.canvas_size - 1.0;
        Self::new(board_size / 8.0, config.piece_scale)
    }

    pub fn square_size(&self) -> f32 {
        self.square_size
    }

    pub fn board_size(&self) -> f32 {
        self.square_size * 8.0
    }

    pub fn piece_size(&self) -> f32 {
        self.square_size * self.piece_scale
    }

    pub fn square_at(&self, p: Point) -> Option<Square> {
        square_at(p.x, p.y, self.square_size)
    }

    pub fn square_rect(&self, square: Square) -> Rect {
        Rect {
            origin: square_origin(square, self.square_size),
            size: self.square_size,
        }
    }

    /// Where a piece on `square` is drawn: scaled down and centred.
    pub fn piece_rect(&self, square: Square) -> Rect {
        let inset = (self.square_size - self.piece_size()) / 2.0;
        Rect {
            origin: square_origin(square, self.square_size).offset(inset, inset),
            size: self.piece_size(),
        }
    }

    /// Top-left of a piece being dragged with its centre under `pointer`,
    /// kept inside the board.
    pub fn drag_origin(&self, pointer: Point) -> Point {
        let half = self.piece_size() / 2.0;
        clamp_to_canvas(
            pointer.offset(-half, -half),
            self.piece_size(),
            self.board_size(),
        )
    }

    /// Pixel height for coordinate labels.
    pub fn label_font_px(&self) -> f32 {
        self.square_size * 0.15
    }

    /// Rank digit position, drawn in the top-left of the a-file square.
    pub fn rank_label_pos(&self, rank: u8) -> Point {
        let s = self.square_size;
        Point::new(s * 0.05, (7 - rank.min(7)) as f32 * s + s * 0.05)
    }

    /// File letter position, drawn in the bottom-right of the rank-1 square.
    pub fn file_label_pos(&self, file: u8) -> Point {
        let s = self.square_size;
        Point::new(file.min(7) as f32 * s + s * 0.85, 7.0 * s + s * 0.80)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn top_left_pixel_is_a8() {
        assert_eq!(square_at(0.0, 0.0, 80.0), Some(sq("a8")));
        assert_eq!(square_at(639.0, 639.0, 80.0), Some(sq("h1")));
        assert_eq!(square_at(330.0, 350.0, 80.0), Some(sq("e4")));
    }

    #[test]
    fn raw_mapping_goes_out_of_range() {
        assert_eq!(file_rank_at(-1.0, 0.0, 80.0), (-1, 7));
        assert_eq!(file_rank_at(640.0, 640.0, 80.0), (8, -1));
        assert_eq!(square_at(-1.0, 0.0, 80.0), None);
        assert_eq!(square_at(640.0, 10.0, 80.0), None);
        assert_eq!(square_at(10.0, 640.0, 80.0), None);
    }

    #[test]
    fn origin_of_corner_squares() {
        assert_eq!(square_origin(sq("a8"), 80.0), Point::new(0.0, 0.0));
        assert_eq!(square_origin(sq("a1"), 80.0), Point::new(0.0, 560.0));
        assert_eq!(square_origin(sq("h8"), 80.0), Point::new(560.0, 0.0));
        assert_eq!(square_origin(sq("e4"), 50.0), Point::new(200.0, 200.0));
    }

    #[test]
    fn origin_maps_back_to_its_square() {
        for size in [0.0511, 0.3, 1.0, 7.1, 37.5, 80.0, 99.875, 333.33] {
            for square in Square::all() {
                let p = square_origin(square, size);
                assert_eq!(square_at(p.x, p.y, size), Some(square), "{square} @ {size}");
            }
        }
    }

    #[test]
    fn fractional_sizes_round_trip() {
        // 7 * 0.0511 divided by 0.0511 comes out just under 7 in f32
        let size = 0.0511;
        let a1 = square_origin(sq("a1"), size);
        assert_eq!(file_rank_at(a1.x, a1.y, size), (0, 0));
        assert_eq!(square_at(a1.x, a1.y, size), Some(sq("a1")));

        let mut size = 0.01f32;
        while size < 500.0 {
            for square in Square::all() {
                let p = square_origin(square, size);
                assert_eq!(square_at(p.x, p.y, size), Some(square), "{square} @ {size}");
            }
            size += 0.0137;
        }
    }

    #[test]
    fn clamp_is_per_axis() {
        assert_eq!(
            clamp_to_canvas(Point::new(-10.0, 50.0), 72.0, 640.0),
            Point::new(0.0, 50.0)
        );
        assert_eq!(
            clamp_to_canvas(Point::new(600.0, -3.0), 72.0, 640.0),
            Point::new(568.0, 0.0)
        );
        assert_eq!(
            clamp_to_canvas(Point::new(100.0, 100.0), 72.0, 640.0),
            Point::new(100.0, 100.0)
        );
    }

    #[test]
    fn from_config_leaves_a_border_pixel() {
        let geometry = BoardGeometry::from_config(&BoardConfig {
            canvas_size: 641.0,
            piece_scale: 0.9,
        });
        assert_eq!(geometry.square_size(), 80.0);
        assert_eq!(geometry.board_size(), 640.0);
        assert!((geometry.piece_size() - 72.0).abs() < 1e-4);
    }

    #[test]
    fn pieces_are_centred_in_their_square() {
        let geometry = BoardGeometry::new(80.0, 0.9);
        let square = geometry.square_rect(sq("c6"));
        let piece = geometry.piece_rect(sq("c6"));
        let (sc, pc) = (square.center(), piece.center());
        assert!((sc.x - pc.x).abs() < 1e-4 && (sc.y - pc.y).abs() < 1e-4);
        assert!(square.contains(piece.origin));
    }

    #[test]
    fn drag_origin_centres_then_clamps() {
        let geometry = BoardGeometry::new(80.0, 0.5);
        assert_eq!(geometry.drag_origin(Point::new(100.0, 100.0)), Point::new(80.0, 80.0));
        assert_eq!(geometry.drag_origin(Point::new(5.0, 700.0)), Point::new(0.0, 600.0));
    }

    #[test]
    fn labels_sit_inside_their_squares() {
        let geometry = BoardGeometry::new(80.0, 0.9);
        for i in 0u8..8 {
            let rank_rect = geometry.square_rect(Square::from_coords(0, i).unwrap());
            assert!(rank_rect.contains(geometry.rank_label_pos(i)));
            let file_rect = geometry.square_rect(Square::from_coords(i, 0).unwrap());
            assert!(file_rect.contains(geometry.file_label_pos(i)));
        }
        assert!((geometry.label_font_px() - 12.0).abs() < 1e-4);
    }
}

//! Press / drag / release handling for moving pieces with a pointer.
//!
//! ```text
//! Idle --press on a piece--> Pressed --motion--> Dragging --release--> Idle (+ move applied)
//!                               |
//!                               +------release (no motion)-----------> Idle
//! ```

use chess_core::{Board, Piece, Square};
use log::{debug, trace};

use crate::geometry::{BoardGeometry, Point};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Idle,
    /// A piece was pressed but the pointer has not moved yet.
    Pressed { from: Square, piece: Piece },
    /// The piece follows the pointer; `top_left` is where it is drawn.
    Dragging {
        from: Square,
        piece: Piece,
        top_left: Point,
    },
}

/// A drop that was written to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    /// Whatever stood on `to` before the drop.
    pub captured: Option<Piece>,
}

/// Turns pointer events into [`Board::move_piece`] calls.
///
/// Drops are not checked for legality; any piece can go to any square.
#[derive(Debug, Clone)]
pub struct DragController {
    geometry: BoardGeometry,
    state: DragState,
}

impl DragController {
    pub fn new(geometry: BoardGeometry) -> Self {
        Self {
            geometry,
            state: DragState::Idle,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn geometry(&self) -> &BoardGeometry {
        &self.geometry
    }

    /// Applies a new layout, e.g. after the canvas was resized. Any drag in
    /// progress is dropped without touching the board.
    pub fn set_geometry(&mut self, geometry: BoardGeometry) {
        self.geometry = geometry;
        self.cancel();
    }

    /// Pointer pressed. Picks up the piece under the pointer, if any, and
    /// returns its square.
    pub fn press(&mut self, board: &Board, pointer: Point) -> Option<Square> {
        let from = self.geometry.square_at(pointer);
        let picked = from.and_then(|sq| board.piece_at(sq).map(|piece| (sq, piece)));

        self.state = match picked {
            Some((from, piece)) => {
                trace!("pressed {piece} on {from}");
                DragState::Pressed { from, piece }
            }
            None => DragState::Idle,
        };
        picked.map(|(sq, _)| sq)
    }

    /// Pointer moved. Returns the clamped top-left corner the dragged piece
    /// should be drawn at, or `None` when nothing is being dragged.
    pub fn drag_to(&mut self, pointer: Point) -> Option<Point> {
        let (from, piece) = match self.state {
            DragState::Idle => return None,
            DragState::Pressed { from, piece } | DragState::Dragging { from, piece, .. } => {
                (from, piece)
            }
        };

        let top_left = self.geometry.drag_origin(pointer);
        trace!("dragging {piece} from {from} to ({}, {})", top_left.x, top_left.y);
        self.state = DragState::Dragging {
            from,
            piece,
            top_left,
        };
        Some(top_left)
    }

    /// Pointer released. A drag in progress is dropped on the square under
    /// the centre of the dragged piece and applied to `board`; a press
    /// without motion changes nothing.
    pub fn release(&mut self, board: &mut Board) -> Option<AppliedMove> {
        let state = std::mem::replace(&mut self.state, DragState::Idle);
        let DragState::Dragging {
            from,
            piece,
            top_left,
        } = state
        else {
            return None;
        };

        let half = self.geometry.piece_size() / 2.0;
        let center = top_left.offset(half, half);
        let Some(to) = self.geometry.square_at(center) else {
            debug!("dropped {piece} from {from} outside the board");
            return None;
        };

        let captured = board.move_piece(from, to);
        debug!("moved {piece} from {from} to {to}");
        Some(AppliedMove {
            from,
            to,
            piece,
            captured,
        })
    }

    /// Abandons any press or drag without touching the board.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }
}

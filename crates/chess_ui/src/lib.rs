//! Toolkit-independent board interaction: pixel geometry, drag handling and
//! layout configuration. Rendering stays with the caller; this crate only
//! says where things go and what a pointer gesture does to the board.

pub mod config;
pub mod geometry;
pub mod interaction;

pub use config::{BoardConfig, ConfigError};
pub use geometry::{
    clamp_to_canvas, file_rank_at, square_at, square_origin, BoardGeometry, Point, Rect,
};
pub use interaction::{AppliedMove, DragController, DragState};

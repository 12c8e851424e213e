//! Board layout configuration.

use thiserror::Error;

/// Canvas edge used when nothing else is configured, matching an 800x800 window.
pub const DEFAULT_CANVAS_SIZE: f32 = 800.0;

/// Pieces fill this fraction of their square by default.
pub const DEFAULT_PIECE_SCALE: f32 = 0.9;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("canvas size must be a finite number above 1 pixel, got {0}")]
    CanvasSize(f32),

    #[error("piece scale must be in (0, 1], got {0}")]
    PieceScale(f32),
}

/// Layout parameters for one rendered board.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardConfig {
    /// Edge of the square canvas in pixels. One pixel is kept for the border.
    pub canvas_size: f32,

    /// Piece edge relative to the square edge.
    pub piece_scale: f32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            canvas_size: DEFAULT_CANVAS_SIZE,
            piece_scale: DEFAULT_PIECE_SCALE,
        }
    }
}

impl BoardConfig {
    /// Default layout on a canvas of the given edge.
    pub fn with_canvas(canvas_size: f32) -> Self {
        Self {
            canvas_size,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.canvas_size.is_finite() || self.canvas_size <= 1.0 {
            return Err(ConfigError::CanvasSize(self.canvas_size));
        }
        if !(self.piece_scale > 0.0 && self.piece_scale <= 1.0) {
            return Err(ConfigError::PieceScale(self.piece_scale));
        }
        Ok(())
    }
}

//! Command-line front end for the FEN position editor.

use anyhow::{bail, Context, Result};
use chess_core::{Board, Square, START_FEN};
use chess_ui::{BoardConfig, BoardGeometry, DragController, Point};
use clap::{Args, Parser, Subcommand};
use log::{info, warn};

/// Inspect and edit chess positions given as FEN strings.
#[derive(Parser)]
#[command(name = "fen-editor")]
#[command(about = "Decode, edit and re-encode FEN positions")]
struct Cli {
    /// Log at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a position as a board diagram.
    Show {
        /// FEN to show; the starting position when omitted.
        fen: Option<String>,
    },

    /// Check a FEN and print its canonical form.
    Validate { fen: String },

    /// Move whatever stands on FROM to TO, with no legality checks.
    Move {
        fen: String,
        from: String,
        to: String,
    },

    /// Toggle the side to move.
    Flip { fen: String },

    /// Print the square under a canvas pixel.
    #[command(allow_negative_numbers = true)]
    Pick {
        #[command(flatten)]
        layout: Layout,

        x: f32,
        y: f32,
    },

    /// Replay a press at (X0, Y0) dragged and released at (X1, Y1).
    #[command(allow_negative_numbers = true)]
    Drag {
        #[command(flatten)]
        layout: Layout,

        /// Starting position; the standard one when omitted.
        #[arg(long)]
        fen: Option<String>,

        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
    },
}

#[derive(Args)]
struct Layout {
    /// Canvas edge in pixels.
    #[arg(long, default_value_t = chess_ui::config::DEFAULT_CANVAS_SIZE)]
    canvas: f32,

    /// Piece edge relative to the square edge.
    #[arg(long, default_value_t = chess_ui::config::DEFAULT_PIECE_SCALE)]
    piece_scale: f32,
}

impl Layout {
    fn geometry(&self) -> Result<BoardGeometry> {
        let config = BoardConfig {
            canvas_size: self.canvas,
            piece_scale: self.piece_scale,
        };
        config.validate().context("invalid board layout")?;
        Ok(BoardGeometry::from_config(&config))
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn parse_board(fen: &str) -> Result<Board> {
    Board::from_fen(fen)
        .map_err(|err| {
            warn!("rejected fen: {err}");
            err
        })
        .with_context(|| format!("cannot read position '{fen}'"))
}

fn parse_square(name: &str) -> Result<Square> {
    match Square::from_algebraic(name) {
        Some(square) => Ok(square),
        None => bail!("'{name}' is not a square (expected a1..h8)"),
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Show { fen } => {
            let board = parse_board(fen.as_deref().unwrap_or(START_FEN))?;
            print!("{}", board.pretty());
        }
        Commands::Validate { fen } => {
            let board = parse_board(&fen)?;
            println!("{board}");
        }
        Commands::Move { fen, from, to } => {
            let mut board = parse_board(&fen)?;
            let (from, to) = (parse_square(&from)?, parse_square(&to)?);
            if let Some(captured) = board.move_piece(from, to) {
                info!("{captured} on {to} was overwritten");
            }
            println!("{board}");
        }
        Commands::Flip { fen } => {
            let mut board = parse_board(&fen)?;
            board.flip_next_player();
            println!("{board}");
        }
        Commands::Pick { layout, x, y } => {
            let geometry = layout.geometry()?;
            match geometry.square_at(Point::new(x, y)) {
                Some(square) => println!("{square} ({})", square.index()),
                None => bail!("({x}, {y}) is outside the board"),
            }
        }
        Commands::Drag {
            layout,
            fen,
            x0,
            y0,
            x1,
            y1,
        } => {
            let mut board = parse_board(fen.as_deref().unwrap_or(START_FEN))?;
            let mut controller = DragController::new(layout.geometry()?);
            if controller.press(&board, Point::new(x0, y0)).is_none() {
                bail!("no piece under ({x0}, {y0})");
            }
            controller.drag_to(Point::new(x1, y1));
            match controller.release(&mut board) {
                Some(applied) => info!("{} {}-{}", applied.piece, applied.from, applied.to),
                None => warn!("drag ended without a move"),
            }
            println!("{board}");
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(cli.command)
}

//! Engine module - the falling-block state machine
//!
//! Owns the board, the active piece and the score. Mutations go through
//! [`Engine::step`] (gravity) and [`Engine::apply_input`]; everything else is a
//! read-only query. Every rejected move is a silent no-op, and once the top row is
//! occupied the engine stops accepting mutations altogether.

use tracing::{debug, info};

use crate::board::Board;
use crate::pieces::{get_shape, initial_cells, rotate_ccw, rotate_cw, spawn_offset_range, translate};
use crate::rng::{PieceRng, SimpleRng};
use crate::snapshot::GameSnapshot;
use crate::types::{
    Color, Coord, GameAction, ShapeKind, LINE_CLEAR_SCORE, PLACEMENT_SCORE, SOFT_DROP_STEPS,
};

/// The falling piece: four absolute board cells and one color.
///
/// The first cell is the rotation pivot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    cells: [Coord; 4],
    color: Color,
}

impl Piece {
    pub fn new(cells: [Coord; 4], color: Color) -> Self {
        Self { cells, color }
    }

    pub fn cells(&self) -> &[Coord; 4] {
        &self.cells
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn pivot(&self) -> Coord {
        self.cells[0]
    }

    pub fn translated(&self, dx: i16, dy: i16) -> Self {
        Self {
            cells: translate(&self.cells, dx, dy),
            ..*self
        }
    }

    pub fn rotated_ccw(&self) -> Self {
        Self {
            cells: rotate_ccw(&self.cells),
            ..*self
        }
    }

    pub fn rotated_cw(&self) -> Self {
        Self {
            cells: rotate_cw(&self.cells),
            ..*self
        }
    }

    /// Every cell on the board and empty
    pub fn fits(&self, board: &Board) -> bool {
        self.cells.iter().all(|&(x, y)| board.is_valid(x, y))
    }

    /// Every cell one row lower is free (the space above the board counts as free)
    pub fn can_fall(&self, board: &Board) -> bool {
        self.cells
            .iter()
            .all(|&(x, y)| board.is_free_or_above(x, y + 1))
    }
}

/// Complete engine state
#[derive(Debug, Clone)]
pub struct Engine<R: PieceRng = SimpleRng> {
    board: Board,
    active: Piece,
    score: u32,
    lines_cleared: u32,
    pieces_locked: u32,
    rng: R,
}

impl Engine<SimpleRng> {
    /// Create an engine backed by a seeded [`SimpleRng`]
    pub fn with_seed(columns: u16, rows: u16, seed: u32) -> Self {
        Self::new(columns, rows, SimpleRng::new(seed))
    }
}

impl<R: PieceRng> Engine<R> {
    /// Create a new game: empty board, score 0, and the fixed centered I-piece on
    /// row 0 in a random palette color.
    pub fn new(columns: u16, rows: u16, mut rng: R) -> Self {
        let color = rng.choose(&Color::ALL);
        Self {
            board: Board::new(columns, rows),
            active: Piece::new(initial_cells(columns), color),
            score: 0,
            lines_cleared: 0,
            pieces_locked: 0,
            rng,
        }
    }

    /// Resume from an arbitrary position (score starts at 0).
    ///
    /// Used for scripted scenarios; the board dimensions are taken from `board`.
    pub fn from_parts(board: Board, active: Piece, rng: R) -> Self {
        Self {
            board,
            active,
            score: 0,
            lines_cleared: 0,
            pieces_locked: 0,
            rng,
        }
    }

    pub fn columns(&self) -> u16 {
        self.board.columns()
    }

    pub fn rows(&self) -> u16 {
        self.board.rows()
    }

    /// Read-only view of the locked cells
    pub fn grid(&self) -> &Board {
        &self.board
    }

    pub fn active_piece(&self) -> &Piece {
        &self.active
    }

    pub fn active_color(&self) -> Color {
        self.active.color()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total rows removed this game
    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    /// The game is over once any cell of the top row is occupied
    pub fn is_over(&self) -> bool {
        self.board.row_occupied(0)
    }

    pub fn row_occupied(&self, y: u16) -> bool {
        self.board.row_occupied(y as usize)
    }

    /// Produce a new piece: a uniformly chosen template at a uniformly chosen valid
    /// horizontal offset, in a uniformly chosen color. The spawn position is not
    /// checked against locked cells.
    ///
    /// Once the game is over this draws nothing and returns the active piece.
    pub fn spawn_piece(&mut self) -> Piece {
        if self.is_over() {
            return self.active;
        }
        self.draw_piece()
    }

    fn draw_piece(&mut self) -> Piece {
        let kind = self.rng.choose(&ShapeKind::ALL);
        let (lo, hi) = spawn_offset_range(kind, self.columns());
        // next_between falls back to `lo` when the template is wider than the board.
        let offset = self.rng.next_between(lo, hi);
        let color = self.rng.choose(&Color::ALL);
        Piece::new(translate(&get_shape(kind), offset, 0), color)
    }

    /// Gravity tick: move the active piece down one row, or lock it if it cannot move.
    pub fn step(&mut self) -> &mut Self {
        if self.is_over() {
            return self;
        }
        if !self.try_fall() {
            self.lock_active();
        }
        self
    }

    /// Apply one input. Moves that do not fit are ignored.
    pub fn apply_input(&mut self, action: GameAction) -> &mut Self {
        if self.is_over() {
            return self;
        }
        match action {
            GameAction::MoveLeft => {
                self.try_replace(self.active.translated(-1, 0));
            }
            GameAction::MoveRight => {
                self.try_replace(self.active.translated(1, 0));
            }
            GameAction::RotateCcw => {
                self.try_replace(self.active.rotated_ccw());
            }
            GameAction::RotateCw => {
                self.try_replace(self.active.rotated_cw());
            }
            GameAction::SoftDrop => self.soft_drop(),
        }
        self
    }

    /// Copy the observable state into `out`, reusing its allocation
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.columns = self.columns();
        out.rows = self.rows();
        out.board.clear();
        out.board.extend_from_slice(self.board.cells());
        out.active = *self.active.cells();
        out.active_color = self.active.color();
        out.score = self.score;
        out.lines = self.lines_cleared;
        out.paused = false;
        out.game_over = self.is_over();
        out.fail_line = None;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Commit `candidate` if all of its cells are on the board and empty
    fn try_replace(&mut self, candidate: Piece) -> bool {
        if candidate.fits(&self.board) {
            self.active = candidate;
            return true;
        }
        false
    }

    fn try_fall(&mut self) -> bool {
        if self.active.can_fall(&self.board) {
            self.active = self.active.translated(0, 1);
            return true;
        }
        false
    }

    /// Up to three single-row advances; the first blocked one locks and ends the drop
    fn soft_drop(&mut self) {
        for _ in 0..SOFT_DROP_STEPS {
            if !self.try_fall() {
                self.lock_active();
                break;
            }
        }
    }

    /// Freeze the active piece, clear full rows, score, and spawn the next piece
    fn lock_active(&mut self) {
        let written = self
            .board
            .lock_cells(self.active.cells(), self.active.color());
        let cleared = self.board.clear_full_rows() as u32;

        let gained = cleared * LINE_CLEAR_SCORE + PLACEMENT_SCORE;
        self.score = self.score.saturating_add(gained);
        self.lines_cleared += cleared;
        self.pieces_locked += 1;

        debug!(
            cells = written,
            lines = cleared,
            gained,
            score = self.score,
            "piece locked"
        );

        self.active = self.draw_piece();

        if self.is_over() {
            info!(
                score = self.score,
                lines = self.lines_cleared,
                pieces = self.pieces_locked,
                "top row occupied, game over"
            );
        }
    }
}

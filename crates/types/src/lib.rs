//! Shared types and constants
//!
//! Pure data used by every other crate in the workspace: the color palette,
//! the seven shape kinds, the input actions the engine understands, and the
//! default dimensions and timing of a game. Nothing here depends on I/O.
//!
//! # Board Coordinates
//!
//! `(x, y)` with x growing to the right and y growing downwards. Row 0 is the
//! top of the board, row `rows - 1` the bottom. Coordinates are signed so a
//! candidate position can fall outside the board before it is validated.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_COLUMNS` | 20 | Board width |
//! | `DEFAULT_ROWS` | 30 | Board height |
//! | `DROP_INTERVAL_MS` | 200 | Gravity cadence |
//! | `DEFAULT_FPS` | 10 | Frame rate of the terminal loop |
//! | `SOFT_DROP_STEPS` | 3 | Rows advanced per soft-drop input |
//! | `FAIL_LINE_PERCENT` | 20 | Fail line position from the top |
//!
//! # Examples
//!
//! ```
//! use mehrstein_types::{Color, GameAction, ShapeKind, DEFAULT_COLUMNS, DEFAULT_ROWS};
//!
//! assert_eq!(Color::from_str("cyan"), Some(Color::Cyan));
//! assert_eq!(ShapeKind::from_str("T"), Some(ShapeKind::T));
//! assert_eq!(GameAction::from_str("softDrop"), Some(GameAction::SoftDrop));
//!
//! assert_eq!(DEFAULT_COLUMNS, 20);
//! assert_eq!(DEFAULT_ROWS, 30);
//! ```

/// Default board width in cells
pub const DEFAULT_COLUMNS: u16 = 20;

/// Default board height in cells
pub const DEFAULT_ROWS: u16 = 30;

/// Smallest width that fits every shape template (the I-piece is 4 wide)
pub const MIN_COLUMNS: u16 = 4;

/// Smallest accepted height
pub const MIN_ROWS: u16 = 4;

/// Gravity interval in milliseconds (one row per 200ms)
pub const DROP_INTERVAL_MS: u32 = 200;

/// Frames per second of the terminal loop
pub const DEFAULT_FPS: u32 = 10;

/// Rows a single soft-drop input tries to advance
pub const SOFT_DROP_STEPS: u8 = 3;

/// Points per cleared row
pub const LINE_CLEAR_SCORE: u32 = 100;

/// Points for every locked piece, whether or not it cleared rows
pub const PLACEMENT_SCORE: u32 = 10;

/// Fail line position as a percentage of the board height, measured from the top
pub const FAIL_LINE_PERCENT: u16 = 20;

/// A key counts as released once no press/repeat event arrived for this long
pub const KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Absolute board coordinate `(x, y)`
pub type Coord = (i16, i16);

/// Piece colors
///
/// Every piece gets one palette color at spawn, independent of its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Magenta,
    Cyan,
    Orange,
}

impl Color {
    /// The full palette, in selection order
    pub const ALL: [Color; 7] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::Magenta,
        Color::Cyan,
        Color::Orange,
    ];

    /// Parse a color name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use mehrstein_types::Color;
    ///
    /// assert_eq!(Color::from_str("Red"), Some(Color::Red));
    /// assert_eq!(Color::from_str("ORANGE"), Some(Color::Orange));
    /// assert_eq!(Color::from_str("black"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" => Some(Color::Red),
            "green" => Some(Color::Green),
            "blue" => Some(Color::Blue),
            "yellow" => Some(Color::Yellow),
            "magenta" => Some(Color::Magenta),
            "cyan" => Some(Color::Cyan),
            "orange" => Some(Color::Orange),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::Orange => "orange",
        }
    }
}

/// The seven shape templates of the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl ShapeKind {
    /// Every kind, in catalog order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::J,
        ShapeKind::L,
    ];

    /// Parse shape kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeKind::I),
            "o" => Some(ShapeKind::O),
            "t" => Some(ShapeKind::T),
            "s" => Some(ShapeKind::S),
            "z" => Some(ShapeKind::Z),
            "j" => Some(ShapeKind::J),
            "l" => Some(ShapeKind::L),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "i",
            ShapeKind::O => "o",
            ShapeKind::T => "t",
            ShapeKind::S => "s",
            ShapeKind::Z => "z",
            ShapeKind::J => "j",
            ShapeKind::L => "l",
        }
    }
}

/// Input intents understood by the engine
///
/// Anything else a front-end wants to do (pause, quit, restart) lives outside
/// the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Shift the piece one column left
    MoveLeft,
    /// Shift the piece one column right
    MoveRight,
    /// Rotate 90° counter-clockwise around the pivot
    RotateCcw,
    /// Rotate 90° clockwise around the pivot
    RotateCw,
    /// Advance up to three rows, locking at the first blocked row
    SoftDrop,
}

impl GameAction {
    /// Every action, in the order a frame applies held keys
    pub const ALL: [GameAction; 5] = [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::RotateCcw,
        GameAction::RotateCw,
        GameAction::SoftDrop,
    ];

    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use mehrstein_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("rotateccw"), Some(GameAction::RotateCcw));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "rotateccw" => Some(GameAction::RotateCcw),
            "rotatecw" => Some(GameAction::RotateCw),
            "softdrop" => Some(GameAction::SoftDrop),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::RotateCw => "rotateCw",
            GameAction::SoftDrop => "softDrop",
        }
    }

    /// Position of this action in [`GameAction::ALL`]
    pub fn index(&self) -> usize {
        match self {
            GameAction::MoveLeft => 0,
            GameAction::MoveRight => 1,
            GameAction::RotateCcw => 2,
            GameAction::RotateCw => 3,
            GameAction::SoftDrop => 4,
        }
    }
}

/// A board cell: `None` is empty, `Some(color)` is a locked block
pub type Cell = Option<Color>;

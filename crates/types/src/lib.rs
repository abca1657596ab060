//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the engine.
//! All types are plain data with no engine logic, making them usable in any
//! context (core logic, a rendering collaborator, a headless driver).
//!
//! # Board Dimensions
//!
//! Default playfield dimensions (a board may be built with other sizes):
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//! - **Shape matrices**: 4x4, so the spawn column is `(width - 4) / 2`
//!
//! # Gravity Intervals by Level
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 1000ms |
//! | 2 | 850ms |
//! | 3 | 700ms |
//! | 4 | 575ms |
//! | 5 | 460ms |
//! | 6 | 360ms |
//! | 7 | 280ms |
//! | 8 | 210ms |
//! | 9 | 150ms |
//! | 10 | 100ms |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, GameMode, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! // Parse from string (case-insensitive)
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(parsed, PieceKind::T);
//!
//! // Color ids are 1..=7
//! assert_eq!(PieceKind::from_color_id(parsed.color_id()), Some(PieceKind::T));
//!
//! // Parse game action and mode
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//! assert_eq!(GameMode::from_str("Survival"), Some(GameMode::Survival));
//!
//! // Board dimensions
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use serde::Serialize;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Side length of every rotation matrix
pub const SHAPE_SIZE: usize = 4;

/// Minimum number of pieces kept in the lookahead queue
pub const QUEUE_MIN_LEN: usize = 3;

/// Number of upcoming pieces exposed to a preview
pub const PREVIEW_LEN: usize = 3;

/// Lowest (starting) level
pub const MIN_LEVEL: u32 = 1;

/// Highest reachable level
pub const MAX_LEVEL: u32 = 10;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Combo multiplier cap
pub const MAX_COMBO: u32 = 4;

/// Base of the line-clear bonus (`LINE_BONUS_BASE * lines^2`)
pub const LINE_BONUS_BASE: u32 = 50;

/// Survival mode: maximum banked shields
pub const MAX_SHIELDS: u32 = 3;

/// Survival mode: lines in one landing that earn a shield
pub const SHIELD_LINES: u32 = 4;

/// Survival mode: default no-clear landings before a garbage row
pub const DEFAULT_SURVIVAL_THRESHOLD: u32 = 4;

/// Survival mode: levels per one-step reduction of the garbage threshold
pub const SURVIVAL_LEVELS_PER_STEP: u32 = 3;

/// Rush mode: default line target
pub const DEFAULT_RUSH_TARGET: u32 = 40;

/// Rush mode: cumulative line milestones, ascending
pub const RUSH_MILESTONES: [u32; 4] = [10, 20, 30, 40];

/// Gravity intervals by level (milliseconds per row)
///
/// Index 0 = Level 1, Index 9 = Level 10
pub const DROP_INTERVALS: [u32; 10] = [1000, 850, 700, 575, 460, 360, 280, 210, 150, 100];


/// The seven piece kinds
///
/// Each piece has a distinct shape and color id:
/// - **I** (1): horizontal bar
/// - **O** (2): 2x2 square
/// - **T** (3): T-shaped
/// - **S** (4): S-shaped
/// - **Z** (5): Z-shaped (mirror of S)
/// - **J** (6): J-shaped
/// - **L** (7): L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in color-id order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }

    /// Cell value written into the grid for this piece (1..=7)
    pub fn color_id(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }

    /// Inverse of [`PieceKind::color_id`]
    pub fn from_color_id(id: u8) -> Option<Self> {
        match id {
            1..=7 => Some(Self::ALL[(id - 1) as usize]),
            _ => None,
        }
    }

    /// Number of distinct orientations in the rotation cycle
    pub fn rotation_count(&self) -> usize {
        match self {
            PieceKind::O => 1,
            PieceKind::I | PieceKind::S | PieceKind::Z => 2,
            PieceKind::T | PieceKind::J | PieceKind::L => 4,
        }
    }
}

/// Game actions that can be applied to modify game state
///
/// These actions are used by both human input and scripted drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (with soft drop scoring)
    SoftDrop,
    /// Instantly drop piece to its landing row and lock it
    HardDrop,
    /// Advance to the next rotation variant
    Rotate,
    /// Hold current piece (once per piece)
    Hold,
    /// One gravity step
    Tick,
    /// Restart the game
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("rotate"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" | "movedown" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "rotate" => Some(GameAction::Rotate),
            "hold" => Some(GameAction::Hold),
            "tick" => Some(GameAction::Tick),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::Rotate => "rotate",
            GameAction::Hold => "hold",
            GameAction::Tick => "tick",
            GameAction::Restart => "restart",
        }
    }
}

/// Game mode selected at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Endless play, no extra pressure or goal
    #[default]
    Classic,
    /// Garbage rows rise after streaks of non-clearing landings
    Survival,
    /// Race to a fixed number of cleared lines
    Rush,
}

impl GameMode {
    /// Parse mode from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(GameMode::Classic),
            "survival" => Some(GameMode::Survival),
            "rush" => Some(GameMode::Rush),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Classic => "classic",
            GameMode::Survival => "survival",
            GameMode::Rush => "rush",
        }
    }
}

/// A cell on the game board
///
/// - `0`: Empty cell
/// - `1..=7`: Settled cell, value is the [`PieceKind::color_id`] (or a garbage color)
pub type Cell = u8;

/// Empty cell value
pub const EMPTY: Cell = 0;

//! Read-only views of engine state for rendering and protocol collaborators
//!
//! Snapshots are owned copies: holding one never borrows the board, and
//! mutating the board never changes a snapshot already taken.

use arrayvec::ArrayVec;
use serde::Serialize;

use crate::pieces::Shape;
use crate::types::{Cell, GameMode, PieceKind, PREVIEW_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: usize,
    pub x: i32,
    pub y: i32,
    pub shape: Shape,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BoardSnapshot {
    pub width: u8,
    pub height: u8,
    /// Settled cells, top row first
    pub grid: Vec<Vec<Cell>>,
    pub active: Option<ActiveSnapshot>,
    pub ghost_y: Option<i32>,
    pub next_queue: ArrayVec<PieceKind, PREVIEW_LEN>,
    pub hold: Option<PieceKind>,
    pub hold_shape: Option<Shape>,
    pub can_hold: bool,
}

impl BoardSnapshot {
    pub fn clear(&mut self) {
        self.width = 0;
        self.height = 0;
        self.grid.clear();
        self.active = None;
        self.ghost_y = None;
        self.next_queue.clear();
        self.hold = None;
        self.hold_shape = None;
        self.can_hold = true;
    }
}

impl Default for BoardSnapshot {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            grid: Vec::new(),
            active: None,
            ghost_y: None,
            next_queue: ArrayVec::new(),
            hold: None,
            hold_shape: None,
            can_hold: true,
        }
    }
}

/// Mode-specific counters
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum ModeSnapshot {
    Classic,
    Survival {
        shields: u32,
        no_clear_streak: u32,
        landings_until_garbage: u32,
    },
    Rush {
        lines_cleared: u32,
        target_lines: u32,
        completed: bool,
        completion_time_seconds: Option<f64>,
        last_milestone: Option<u32>,
    },
}

impl ModeSnapshot {
    pub fn mode(&self) -> GameMode {
        match self {
            ModeSnapshot::Classic => GameMode::Classic,
            ModeSnapshot::Survival { .. } => GameMode::Survival,
            ModeSnapshot::Rush { .. } => GameMode::Rush,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSnapshot {
    pub board: BoardSnapshot,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub combo: u32,
    pub mode: ModeSnapshot,
    pub game_over: bool,
    pub drop_interval_ms: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over && self.board.active.is_some()
    }
}

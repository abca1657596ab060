//! Board module - the command surface over grid, active piece, hold and queue
//!
//! The board is the single owner of the grid. Collision, movement, rotation and
//! ghost projection borrow it per call, so there is never a stale copy to re-sync
//! after a merge or a clear.
//!
//! Illegal commands are not errors: they return `false` and leave the state
//! untouched. Spawning and holding report a blocked spawn position as
//! `true` ("game over"); the caller decides what to do with it.
//!
//! The board also owns the [`Score`] so a full reset clears everything at once.

use arrayvec::ArrayVec;
use log::{debug, trace};

use crate::collision::has_collision;
use crate::config::EngineConfig;
use crate::error::{ConfigError, Result};
use crate::ghost::compute_landing_y;
use crate::grid::{compact_full_rows, merge, ClearResult, Grid};
use crate::movement::{try_move, Position};
use crate::pieces::{get_spawn_shape, Shape};
use crate::rng::{GameRng, PieceGenerator};
use crate::rotator::{try_rotate, Rotator};
use crate::scoring::Score;
use crate::snapshot::{ActiveSnapshot, BoardSnapshot};
use crate::types::{Cell, PieceKind, PREVIEW_LEN, SHAPE_SIZE};

/// Mixed into the seed so garbage holes do not mirror the piece sequence
const GARBAGE_SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Number of distinct garbage colors (ids 1..=7)
const GARBAGE_COLORS: u32 = 7;

/// The falling piece: its rotation state and matrix offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub rotator: Rotator,
    pub position: Position,
}

impl ActivePiece {
    pub fn kind(&self) -> PieceKind {
        self.rotator.kind()
    }

    pub fn rotation(&self) -> usize {
        self.rotator.rotation()
    }

    pub fn shape(&self) -> Shape {
        self.rotator.current_shape()
    }
}

#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    active: Option<ActivePiece>,
    hold: Option<PieceKind>,
    hold_used: bool,
    generator: PieceGenerator,
    garbage_rng: GameRng,
    score: Score,
}

impl Board {
    /// Create an empty board; no piece is active until the first spawn
    pub fn new(width: u8, height: u8, seed: u64) -> Result<Self> {
        Self::with_grid(Grid::new(width, height), seed)
    }

    /// Create a board around a preset grid (puzzles, scripted scenarios)
    pub fn with_grid(grid: Grid, seed: u64) -> Result<Self> {
        if (grid.width() as usize) < SHAPE_SIZE || (grid.height() as usize) < SHAPE_SIZE {
            return Err(ConfigError::BoardTooSmall {
                width: grid.width(),
                height: grid.height(),
            });
        }

        Ok(Self {
            grid,
            active: None,
            hold: None,
            hold_used: false,
            generator: PieceGenerator::new(seed),
            garbage_rng: GameRng::new(seed ^ GARBAGE_SEED_SALT),
            score: Score::new(),
        })
    }

    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        config.validate()?;
        Self::new(config.width, config.height, config.seed)
    }

    pub fn width(&self) -> u8 {
        self.grid.width()
    }

    pub fn height(&self) -> u8 {
        self.grid.height()
    }

    /// Matrix offset every piece starts from
    pub fn spawn_position(&self) -> Position {
        Position::new((self.grid.width() as i32 - SHAPE_SIZE as i32) / 2, 0)
    }

    pub fn move_down(&mut self) -> bool {
        self.move_active(0, 1)
    }

    pub fn move_left(&mut self) -> bool {
        self.move_active(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.move_active(1, 0)
    }

    fn move_active(&mut self, dx: i32, dy: i32) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        let shape = active.shape();
        try_move(&self.grid, &shape, &mut active.position, dx, dy)
    }

    /// Advance the rotation, trying wall kicks when it does not fit in place
    pub fn rotate(&mut self) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        match try_rotate(&self.grid, &mut active.rotator, &mut active.position) {
            Some(kick) => {
                trace!("rotated {:?} to {} (kick {})", active.kind(), active.rotation(), kick);
                true
            }
            None => false,
        }
    }

    /// Draw the next piece from the queue and place it at the spawn position
    ///
    /// Returns true when the spawn position is blocked (game over).
    pub fn spawn_new_piece(&mut self) -> bool {
        let kind = self.generator.consume();
        self.spawn_kind(kind)
    }

    /// Place a specific piece at the spawn position, replacing any active piece
    ///
    /// Returns true when the spawn position is blocked (game over); the piece is
    /// then not placed.
    pub fn spawn_kind(&mut self, kind: PieceKind) -> bool {
        let position = self.spawn_position();
        if has_collision(&self.grid, &get_spawn_shape(kind), position.x, position.y) {
            debug!("spawn of {:?} blocked at {:?}", kind, position);
            self.active = None;
            return true;
        }

        self.active = Some(ActivePiece {
            rotator: Rotator::new(kind),
            position,
        });
        false
    }

    /// Stash the active piece, or swap it with the held one
    ///
    /// Allowed once per piece: the flag is cleared when a piece is merged.
    /// Returns true when the piece that takes over cannot spawn (game over).
    pub fn hold_or_swap(&mut self) -> bool {
        if self.hold_used {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        self.hold_used = true;
        match self.hold.replace(active.kind()) {
            None => {
                debug!("hold {:?}", active.kind());
                self.spawn_new_piece()
            }
            Some(held) => {
                debug!("swap {:?} for held {:?}", active.kind(), held);
                self.spawn_kind(held)
            }
        }
    }

    /// Write the active piece into the grid; hold becomes available again
    pub fn merge_active_into_grid(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };
        let position = active.position;
        self.grid = merge(&self.grid, &active.shape(), position.x, position.y);
        self.hold_used = false;
        trace!("merged {:?} at {:?}", active.kind(), position);
    }

    /// Remove full rows; the result is zero-valued when nothing was full
    pub fn clear_full_rows(&mut self) -> ClearResult {
        let result = compact_full_rows(&self.grid);
        if result.is_clear() {
            debug!("cleared rows {:?}", result.cleared_rows);
            self.grid = result.grid.clone();
        }
        result
    }

    /// Push a garbage row in at the bottom
    ///
    /// Every row moves up by one and the top row is lost. The new row has a single
    /// hole at a random column; all other cells share one random color.
    /// If the rising stack reaches the active piece, the piece is lifted until it
    /// fits again. Returns true (game over) when no lift makes it fit; the piece is
    /// then removed, as with a blocked spawn.
    pub fn add_garbage_row(&mut self) -> bool {
        let width = self.grid.width() as u32;
        let hole = self.garbage_rng.next_range(width) as usize;
        let color = (1 + self.garbage_rng.next_range(GARBAGE_COLORS)) as Cell;

        let mut row: Vec<Cell> = vec![color; width as usize];
        row[hole] = 0;
        self.grid.push_bottom_row(&row);
        debug!("garbage row color {} hole {}", color, hole);

        let Some(active) = self.active.as_mut() else {
            return false;
        };
        let shape = active.shape();
        // Below this offset every cell of the matrix is above the grid
        let highest = -(SHAPE_SIZE as i32);
        while active.position.y > highest
            && has_collision(&self.grid, &shape, active.position.x, active.position.y)
        {
            active.position.y -= 1;
        }

        if has_collision(&self.grid, &shape, active.position.x, active.position.y) {
            debug!("garbage pushed the stack into {:?}", active.kind());
            self.active = None;
            return true;
        }
        false
    }

    /// Clear grid, score and hold, then spawn a fresh piece
    pub fn reset(&mut self) {
        self.grid.clear();
        self.score.reset();
        self.hold = None;
        self.hold_used = false;
        self.active = None;
        self.spawn_new_piece();
    }

    /// Move the active piece to its landing row; returns the rows travelled
    pub fn drop_to_landing(&mut self) -> u32 {
        let Some(active) = self.active.as_mut() else {
            return 0;
        };
        let position = active.position;
        let landing = compute_landing_y(&self.grid, &active.shape(), position.x, position.y);
        active.position.y = landing;
        (landing - position.y) as u32
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn active_shape(&self) -> Option<Shape> {
        self.active.map(|p| p.shape())
    }

    pub fn active_snapshot(&self) -> Option<ActiveSnapshot> {
        self.active.map(|p| ActiveSnapshot {
            kind: p.kind(),
            rotation: p.rotation(),
            x: p.position.x,
            y: p.position.y,
            shape: p.shape(),
        })
    }

    /// Row offset the active piece would land at
    pub fn ghost_y(&self) -> Option<i32> {
        let active = self.active?;
        Some(compute_landing_y(
            &self.grid,
            &active.shape(),
            active.position.x,
            active.position.y,
        ))
    }

    /// Upcoming pieces (at most three)
    pub fn next_queue(&self) -> ArrayVec<PieceKind, PREVIEW_LEN> {
        self.generator.peek_queue(PREVIEW_LEN).collect()
    }

    pub fn hold_piece(&self) -> Option<PieceKind> {
        self.hold
    }

    pub fn hold_shape(&self) -> Option<Shape> {
        self.hold.map(get_spawn_shape)
    }

    /// True when hold is available for the current piece
    pub fn can_hold(&self) -> bool {
        self.active.is_some() && !self.hold_used
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    pub fn score_mut(&mut self) -> &mut Score {
        &mut self.score
    }

    pub fn seed(&self) -> u64 {
        self.generator.seed()
    }

    pub fn snapshot_into(&self, out: &mut BoardSnapshot) {
        out.width = self.grid.width();
        out.height = self.grid.height();
        out.grid.resize(self.grid.height() as usize, Vec::new());
        for (dst, src) in out.grid.iter_mut().zip(self.grid.rows()) {
            dst.clear();
            dst.extend_from_slice(src);
        }
        out.active = self.active_snapshot();
        out.ghost_y = self.ghost_y();
        out.next_queue = self.next_queue();
        out.hold = self.hold;
        out.hold_shape = self.hold_shape();
        out.can_hold = self.can_hold();
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut s = BoardSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }
}

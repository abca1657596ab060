//! Game module - the command pipeline a driver talks to
//!
//! Ties together the board (grid, pieces, hold, queue, score) and the mode
//! rules. Every landing runs the same sequence:
//!
//! 1. merge the active piece into the grid
//! 2. compact full rows
//! 3. register the clear (or the non-clearing landing) with the score
//! 4. let the mode react (garbage, shields, rush progress)
//! 5. spawn the next piece; a blocked spawn latches game over
//!
//! The game has no clock of its own. The driver calls [`Game::tick`] at the
//! interval given by [`Game::drop_interval_ms`]; pausing means not calling it.

use log::info;

use crate::board::Board;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::grid::ClearResult;
use crate::modes::{ModeEvent, ModeStrategy};
use crate::scoring::{calculate_drop_score, get_drop_interval_ms, Score};
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, GameMode};

/// Outcome of a landing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Landing {
    pub clear: ClearResult,
    /// Points awarded for the clear (combo applied)
    pub points: u32,
    pub mode_event: ModeEvent,
    /// The next piece could not spawn
    pub game_over: bool,
}

/// Outcome of one gravity step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickResult {
    /// The piece moved down one row
    Moved,
    /// The piece could not move and was locked
    Landed(Landing),
    /// Nothing to do: the game is over
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    config: EngineConfig,
    board: Board,
    mode: ModeStrategy,
    game_over: bool,
}

impl Game {
    /// Build a game and spawn its first piece
    pub fn new(config: EngineConfig) -> Result<Self> {
        let board = Board::from_config(&config)?;
        let mode = ModeStrategy::from_config(&config);
        info!(
            "new {} game {}x{} seed {}",
            config.mode.as_str(),
            config.width,
            config.height,
            config.seed
        );

        let mut game = Self {
            config,
            board,
            mode,
            game_over: false,
        };
        game.game_over = game.board.spawn_new_piece();
        Ok(game)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> &Score {
        self.board.score()
    }

    pub fn mode(&self) -> &ModeStrategy {
        &self.mode
    }

    pub fn game_mode(&self) -> GameMode {
        self.mode.mode()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Game over, or the mode's goal was reached
    pub fn is_finished(&self) -> bool {
        self.game_over || self.mode.is_completed()
    }

    /// Gravity interval for the current level
    pub fn drop_interval_ms(&self) -> u32 {
        get_drop_interval_ms(self.score().level())
    }

    pub fn move_left(&mut self) -> bool {
        !self.game_over && self.board.move_left()
    }

    pub fn move_right(&mut self) -> bool {
        !self.game_over && self.board.move_right()
    }

    pub fn rotate(&mut self) -> bool {
        !self.game_over && self.board.rotate()
    }

    /// Hold or swap the active piece; returns true if that ended the game
    pub fn hold(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        if self.board.hold_or_swap() {
            self.set_game_over();
        }
        self.game_over
    }

    /// Player-driven move down, worth one point per row
    pub fn soft_drop(&mut self) -> bool {
        if self.game_over || !self.board.move_down() {
            return false;
        }
        self.board
            .score_mut()
            .add_raw_points(calculate_drop_score(1, false));
        true
    }

    /// Drop to the landing row (two points per row) and lock
    pub fn hard_drop(&mut self) -> Option<Landing> {
        if self.game_over || self.board.active().is_none() {
            return None;
        }
        let rows = self.board.drop_to_landing();
        self.board
            .score_mut()
            .add_raw_points(calculate_drop_score(rows, true));
        Some(self.land())
    }

    /// One gravity step: fall a row, or lock when blocked
    pub fn tick(&mut self) -> TickResult {
        if self.game_over {
            return TickResult::GameOver;
        }
        if self.board.move_down() {
            return TickResult::Moved;
        }
        TickResult::Landed(self.land())
    }

    /// Lock the active piece and run the landing sequence
    fn land(&mut self) -> Landing {
        self.board.merge_active_into_grid();
        let clear = self.board.clear_full_rows();

        let points = if clear.is_clear() {
            self.board
                .score_mut()
                .register_lines_cleared(clear.lines_removed, clear.score_bonus)
        } else {
            self.board.score_mut().register_landing_without_clear();
            0
        };

        let mode_event = self.mode.on_landing(&mut self.board, clear.lines_removed);

        if self.board.spawn_new_piece() {
            self.set_game_over();
        }

        Landing {
            clear,
            points,
            mode_event,
            game_over: self.game_over,
        }
    }

    fn set_game_over(&mut self) {
        if !self.game_over {
            info!(
                "game over: score {} level {} lines {}",
                self.score().score(),
                self.score().level(),
                self.score().total_lines()
            );
        }
        self.game_over = true;
    }

    /// Start over with an empty board; the piece sequence continues
    pub fn restart(&mut self) {
        self.board.reset();
        self.mode.reset();
        self.game_over = self.board.active().is_none();
    }

    /// Apply a game action
    ///
    /// Returns whether the action changed anything. After game over only
    /// `Restart` has an effect.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop().is_some(),
            GameAction::Rotate => self.rotate(),
            GameAction::Hold => {
                let could_hold = !self.game_over && self.board.can_hold();
                self.hold();
                could_hold
            }
            GameAction::Tick => !matches!(self.tick(), TickResult::GameOver),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let score = self.score();
        GameSnapshot {
            board: self.board.snapshot(),
            score: score.score(),
            level: score.level(),
            lines: score.total_lines(),
            combo: score.combo(),
            mode: self.mode.snapshot(score),
            game_over: self.game_over,
            drop_interval_ms: self.drop_interval_ms(),
        }
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

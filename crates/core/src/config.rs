//! Engine configuration
//!
//! Everything a board, score and mode need at construction. Values are checked
//! once by [`EngineConfig::validate`]; a bad configuration never reaches play.

use crate::error::{ConfigError, Result};
use crate::types::{
    GameMode, BOARD_HEIGHT, BOARD_WIDTH, DEFAULT_RUSH_TARGET, DEFAULT_SURVIVAL_THRESHOLD,
    SHAPE_SIZE,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub width: u8,
    pub height: u8,
    pub seed: u64,
    pub mode: GameMode,
    /// Survival: no-clear landings before a garbage row at level 1
    pub survival_base_threshold: u32,
    /// Rush: lines needed to finish
    pub rush_target_lines: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            seed: 1,
            mode: GameMode::Classic,
            survival_base_threshold: DEFAULT_SURVIVAL_THRESHOLD,
            rush_target_lines: DEFAULT_RUSH_TARGET,
        }
    }
}

impl EngineConfig {
    pub fn new(mode: GameMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_size(mut self, width: u8, height: u8) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Select the mode by name (case-insensitive)
    pub fn with_mode_name(self, name: &str) -> Result<Self> {
        let mode =
            GameMode::from_str(name).ok_or_else(|| ConfigError::UnknownMode(name.to_string()))?;
        Ok(self.with_mode(mode))
    }

    pub fn with_survival_threshold(mut self, threshold: u32) -> Self {
        self.survival_base_threshold = threshold;
        self
    }

    pub fn with_rush_target(mut self, lines: u32) -> Self {
        self.rush_target_lines = lines;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if (self.width as usize) < SHAPE_SIZE || (self.height as usize) < SHAPE_SIZE {
            return Err(ConfigError::BoardTooSmall {
                width: self.width,
                height: self.height,
            });
        }
        if self.mode == GameMode::Survival && self.survival_base_threshold == 0 {
            return Err(ConfigError::ZeroSurvivalThreshold);
        }
        if self.mode == GameMode::Rush && self.rush_target_lines == 0 {
            return Err(ConfigError::ZeroRushTarget);
        }
        Ok(())
    }
}

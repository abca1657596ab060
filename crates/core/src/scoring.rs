//! Scoring module - score, level, line total and combo
//!
//! Line clears award `50 * lines^2`, multiplied by the combo counter after it
//! has been advanced for this clear. The combo counts consecutive clearing
//! landings, capped at 4, and drops to 0 on any landing that clears nothing.
//! Level is `1 + lines / 10`, capped at 10, and never decreases.

use serde::Serialize;

use crate::types::{
    DROP_INTERVALS, LINES_PER_LEVEL, LINE_BONUS_BASE, MAX_COMBO, MAX_LEVEL, MIN_LEVEL,
};

/// Score counters observed by the display layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Score {
    score: u32,
    level: u32,
    total_lines: u32,
    combo: u32,
}

impl Score {
    pub fn new() -> Self {
        Self {
            score: 0,
            level: MIN_LEVEL,
            total_lines: 0,
            combo: 0,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn total_lines(&self) -> u32 {
        self.total_lines
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    /// Add drop points; combo and level are untouched
    pub fn add_raw_points(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Register a landing that removed `lines_removed` rows worth `base_bonus`
    ///
    /// Returns the points actually awarded. Zero lines is a non-clearing landing.
    pub fn register_lines_cleared(&mut self, lines_removed: u32, base_bonus: u32) -> u32 {
        if lines_removed == 0 {
            self.register_landing_without_clear();
            return 0;
        }

        self.total_lines = self.total_lines.saturating_add(lines_removed);
        self.combo = (self.combo + 1).min(MAX_COMBO);

        let awarded = base_bonus.saturating_mul(self.combo);
        self.score = self.score.saturating_add(awarded);

        self.level = self.level.max(calculate_level(self.total_lines));
        awarded
    }

    /// A landing that cleared nothing breaks the combo
    pub fn register_landing_without_clear(&mut self) {
        self.combo = 0;
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::new()
    }
}

/// Line-clear bonus before combo scaling: `50 * lines^2`
pub fn calculate_line_bonus(lines: u32) -> u32 {
    LINE_BONUS_BASE.saturating_mul(lines.saturating_mul(lines))
}

/// Level for a line total: `min(10, 1 + total_lines / 10)`
pub fn calculate_level(total_lines: u32) -> u32 {
    (MIN_LEVEL + total_lines / LINES_PER_LEVEL).min(MAX_LEVEL)
}

/// Calculate drop score
/// soft_drop: +1 per cell
/// hard_drop: +2 per cell
pub fn calculate_drop_score(cells: u32, is_hard_drop: bool) -> u32 {
    if is_hard_drop {
        cells * 2
    } else {
        cells
    }
}

/// Gravity interval for a level (in milliseconds)
/// Levels outside 1..=10 are clamped
pub fn get_drop_interval_ms(level: u32) -> u32 {
    let idx = level.clamp(MIN_LEVEL, MAX_LEVEL) - MIN_LEVEL;
    DROP_INTERVALS[idx as usize]
}

//! Game modes - pressure and goal rules layered on top of the board
//!
//! - **Survival**: every streak of non-clearing landings raises a garbage row.
//!   The streak length shrinks as the level climbs. Clearing four lines at once
//!   banks a shield that absorbs one garbage row.
//! - **Rush**: clear a target number of lines as fast as possible, with
//!   milestones every ten lines.
//!
//! Modes never touch the grid directly; the only board command they issue is
//! [`Board::add_garbage_row`].

use std::time::{Duration, Instant};

use log::{debug, info};

use crate::board::Board;
use crate::config::EngineConfig;
use crate::scoring::Score;
use crate::snapshot::ModeSnapshot;
use crate::types::{
    GameMode, MAX_SHIELDS, MIN_LEVEL, RUSH_MILESTONES, SHIELD_LINES, SURVIVAL_LEVELS_PER_STEP,
};

/// What a landing triggered in the active mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeEvent {
    None,
    /// Survival: a shield absorbed the garbage row
    ShieldConsumed,
    /// Survival: a garbage row was pushed in
    GarbageAdded,
    /// Rush: a milestone was crossed
    Milestone(u32),
    /// Rush: the target was reached on this landing
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Survival {
    base_threshold: u32,
    no_clear_streak: u32,
    shields: u32,
}

impl Survival {
    pub fn new(base_threshold: u32) -> Self {
        Self {
            base_threshold,
            no_clear_streak: 0,
            shields: 0,
        }
    }

    /// No-clear landings tolerated at `level`
    ///
    /// `max(1, base - (level - 1) / 3)`, never above `base`.
    pub fn threshold_for_level(base_threshold: u32, level: u32) -> u32 {
        let steps = level.saturating_sub(MIN_LEVEL) / SURVIVAL_LEVELS_PER_STEP;
        base_threshold
            .saturating_sub(steps)
            .max(1)
            .min(base_threshold)
    }

    pub fn base_threshold(&self) -> u32 {
        self.base_threshold
    }

    pub fn no_clear_streak(&self) -> u32 {
        self.no_clear_streak
    }

    pub fn shields(&self) -> u32 {
        self.shields
    }

    /// Landings left before the next garbage row (or shield use)
    pub fn landings_until_garbage(&self, score: &Score, base_threshold: u32) -> u32 {
        Self::threshold_for_level(base_threshold, score.level()).saturating_sub(self.no_clear_streak)
    }

    /// React to a landing that removed `lines_removed` rows
    ///
    /// Shields are awarded before the streak is checked.
    pub fn on_landing(&mut self, board: &mut Board, lines_removed: u32) -> ModeEvent {
        if lines_removed >= SHIELD_LINES && self.shields < MAX_SHIELDS {
            self.shields += 1;
            debug!("survival shield earned ({} banked)", self.shields);
        }

        let threshold = Self::threshold_for_level(self.base_threshold, board.score().level());

        if lines_removed > 0 {
            self.no_clear_streak = 0;
        } else {
            self.no_clear_streak += 1;
        }

        if self.no_clear_streak < threshold {
            return ModeEvent::None;
        }

        self.no_clear_streak = 0;
        if self.shields > 0 {
            self.shields -= 1;
            debug!("survival shield consumed ({} left)", self.shields);
            ModeEvent::ShieldConsumed
        } else {
            board.add_garbage_row();
            ModeEvent::GarbageAdded
        }
    }

    pub fn reset(&mut self) {
        self.no_clear_streak = 0;
        self.shields = 0;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rush {
    target_lines: u32,
    lines_cleared: u32,
    completed: bool,
    start_time: Instant,
    end_time: Option<Instant>,
    last_milestone: Option<u32>,
}

impl Rush {
    /// Create a race that starts now
    pub fn new(target_lines: u32) -> Self {
        Self::new_at(target_lines, Instant::now())
    }

    pub fn new_at(target_lines: u32, now: Instant) -> Self {
        Self {
            target_lines,
            lines_cleared: 0,
            completed: false,
            start_time: now,
            end_time: None,
            last_milestone: None,
        }
    }

    /// Restart the race clock and counters
    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    pub fn start_at(&mut self, now: Instant) {
        *self = Self::new_at(self.target_lines, now);
    }

    pub fn reset(&mut self) {
        self.start();
    }

    pub fn target_lines(&self) -> u32 {
        self.target_lines
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn last_milestone(&self) -> Option<u32> {
        self.last_milestone
    }

    pub fn last_milestone_message(&self) -> Option<String> {
        self.last_milestone
            .map(|m| format!("{} lines cleared", m))
    }

    /// Time from start to the landing that reached the target
    pub fn completion_time(&self) -> Option<Duration> {
        self.end_time.map(|end| end.duration_since(self.start_time))
    }

    /// Completion time in seconds, or `-1.0` while the race is running
    pub fn completion_time_seconds(&self) -> f64 {
        self.completion_time()
            .map_or(-1.0, |elapsed| elapsed.as_secs_f64())
    }

    /// Time since start, frozen once completed
    pub fn elapsed_at(&self, now: Instant) -> Duration {
        self.end_time
            .unwrap_or(now)
            .saturating_duration_since(self.start_time)
    }

    pub fn register_clear(&mut self, lines_removed: u32) -> ModeEvent {
        self.register_clear_at(lines_removed, Instant::now())
    }

    /// Count cleared lines, recording milestones and completion
    ///
    /// Only the lowest milestone crossed by this call is reported.
    pub fn register_clear_at(&mut self, lines_removed: u32, now: Instant) -> ModeEvent {
        if lines_removed == 0 {
            return ModeEvent::None;
        }

        let previous = self.lines_cleared;
        self.lines_cleared = self.lines_cleared.saturating_add(lines_removed);

        let milestone = RUSH_MILESTONES
            .iter()
            .copied()
            .find(|&m| previous < m && self.lines_cleared >= m);
        if let Some(m) = milestone {
            self.last_milestone = Some(m);
            debug!("rush milestone {}", m);
        }

        if !self.completed && self.lines_cleared >= self.target_lines {
            self.completed = true;
            self.end_time = Some(now);
            info!(
                "rush completed: {} lines in {:.3}s",
                self.lines_cleared,
                self.completion_time_seconds()
            );
            return ModeEvent::Completed;
        }

        milestone.map_or(ModeEvent::None, ModeEvent::Milestone)
    }
}

/// The rules of the selected mode, chosen once at construction
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModeStrategy {
    #[default]
    Classic,
    Survival(Survival),
    Rush(Rush),
}

impl ModeStrategy {
    pub fn from_config(config: &EngineConfig) -> Self {
        match config.mode {
            GameMode::Classic => ModeStrategy::Classic,
            GameMode::Survival => ModeStrategy::Survival(Survival::new(config.survival_base_threshold)),
            GameMode::Rush => ModeStrategy::Rush(Rush::new(config.rush_target_lines)),
        }
    }

    pub fn mode(&self) -> GameMode {
        match self {
            ModeStrategy::Classic => GameMode::Classic,
            ModeStrategy::Survival(_) => GameMode::Survival,
            ModeStrategy::Rush(_) => GameMode::Rush,
        }
    }

    /// Dispatch a landing; classic play ignores it
    pub fn on_landing(&mut self, board: &mut Board, lines_removed: u32) -> ModeEvent {
        match self {
            ModeStrategy::Classic => ModeEvent::None,
            ModeStrategy::Survival(survival) => survival.on_landing(board, lines_removed),
            ModeStrategy::Rush(rush) => rush.register_clear(lines_removed),
        }
    }

    pub fn reset(&mut self) {
        match self {
            ModeStrategy::Classic => {}
            ModeStrategy::Survival(survival) => survival.reset(),
            ModeStrategy::Rush(rush) => rush.reset(),
        }
    }

    /// True once the mode's goal is reached
    pub fn is_completed(&self) -> bool {
        matches!(self, ModeStrategy::Rush(rush) if rush.is_completed())
    }

    pub fn survival(&self) -> Option<&Survival> {
        match self {
            ModeStrategy::Survival(survival) => Some(survival),
            _ => None,
        }
    }

    pub fn rush(&self) -> Option<&Rush> {
        match self {
            ModeStrategy::Rush(rush) => Some(rush),
            _ => None,
        }
    }

    pub fn snapshot(&self, score: &Score) -> ModeSnapshot {
        match self {
            ModeStrategy::Classic => ModeSnapshot::Classic,
            ModeStrategy::Survival(survival) => ModeSnapshot::Survival {
                shields: survival.shields(),
                no_clear_streak: survival.no_clear_streak(),
                landings_until_garbage: survival
                    .landings_until_garbage(score, survival.base_threshold()),
            },
            ModeStrategy::Rush(rush) => ModeSnapshot::Rush {
                lines_cleared: rush.lines_cleared(),
                target_lines: rush.target_lines(),
                completed: rush.is_completed(),
                completion_time_seconds: rush.completion_time().map(|d| d.as_secs_f64()),
                last_milestone: rush.last_milestone(),
            },
        }
    }
}

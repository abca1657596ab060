//! Headless demo session
//!
//! Drops pieces with a greedy column scan: every rotation and column is tried
//! on a cloned game, the resulting stack is scored, and the best placement is
//! replayed on the real game through [`GameAction`]s.

use anyhow::{anyhow, Result};
use log::{info, LevelFilter};

use crate::core::{EngineConfig, Game, Grid, ModeEvent};
use crate::types::{GameAction, GameMode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub mode: GameMode,
    pub seed: u64,
    pub pieces: u32,
    pub log_level: LevelFilter,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::Classic,
            seed: 1,
            pieces: 100,
            log_level: LevelFilter::Info,
        }
    }
}

impl DemoConfig {
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig::new(self.mode).with_seed(self.seed)
    }
}

pub fn parse_demo_args(args: &[String]) -> Result<DemoConfig> {
    let mut config = DemoConfig::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--mode" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --mode"))?;
                config.mode = EngineConfig::default().with_mode_name(v)?.mode;
            }
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                config.seed = v
                    .parse::<u64>()
                    .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
            }
            "--pieces" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --pieces"))?;
                config.pieces = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --pieces value: {}", v))?;
            }
            "--log-level" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --log-level"))?;
                config.log_level = v
                    .parse::<LevelFilter>()
                    .map_err(|_| anyhow!("invalid --log-level value: {}", v))?;
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(config)
}

/// A placement: rotate `rotations` times, push to the wall, then step right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub rotations: usize,
    pub shift: usize,
}

impl Placement {
    fn actions(&self, width: u8) -> impl Iterator<Item = GameAction> {
        std::iter::repeat(GameAction::Rotate)
            .take(self.rotations)
            .chain(std::iter::repeat(GameAction::MoveLeft).take(width as usize))
            .chain(std::iter::repeat(GameAction::MoveRight).take(self.shift))
            .chain(std::iter::once(GameAction::HardDrop))
    }
}

/// Weighted aggregate height, covered holes and bumpiness of a settled grid
fn stack_penalty(grid: &Grid) -> i64 {
    let height = grid.height() as i32;
    let mut aggregate = 0i64;
    let mut holes = 0i64;
    let mut bumpiness = 0i64;
    let mut previous: Option<i64> = None;

    for x in 0..grid.width() as i32 {
        let mut top = None;
        for y in 0..height {
            let filled = !grid.is_free(x, y);
            match (top, filled) {
                (None, true) => top = Some(y),
                (Some(_), false) => holes += 1,
                _ => {}
            }
        }
        let column = top.map_or(0, |top| (height - top) as i64);
        aggregate += column;
        if let Some(previous) = previous {
            bumpiness += (column - previous).abs();
        }
        previous = Some(column);
    }
    51 * aggregate + 36 * holes + 18 * bumpiness
}

/// Try every rotation and column on a copy of the game
///
/// Placements that end the game are only chosen when nothing else is left.
pub fn choose_placement(game: &Game) -> Option<Placement> {
    let active = game.board().active()?;
    let width = game.board().width();
    let lines_before = game.score().total_lines() as i64;

    let mut best: Option<(i64, Placement)> = None;
    for rotations in 0..active.kind().rotation_count() {
        for shift in 0..width as usize {
            let placement = Placement { rotations, shift };
            let mut trial = game.clone();
            for action in placement.actions(width) {
                trial.apply_action(action);
            }
            let value = if trial.game_over() {
                i64::MIN
            } else {
                let lines = trial.score().total_lines() as i64 - lines_before;
                76 * lines - stack_penalty(trial.board().grid())
            };
            if best.map_or(true, |(b, _)| value > b) {
                best = Some((value, placement));
            }
        }
    }
    best.map(|(_, placement)| placement)
}

/// Play up to `config.pieces` pieces; stops early on game over or rush completion
pub fn run_demo(config: &DemoConfig) -> Result<Game> {
    let mut game = Game::new(config.engine_config())?;
    let width = game.board().width();

    for piece in 0..config.pieces {
        if game.is_finished() {
            break;
        }
        let Some(placement) = choose_placement(&game) else {
            break;
        };
        for action in placement.actions(width) {
            if action != GameAction::HardDrop {
                game.apply_action(action);
            }
        }
        let Some(landing) = game.hard_drop() else {
            break;
        };
        if landing.clear.is_clear() {
            info!(
                "piece {}: cleared {} (+{}), score {}",
                piece + 1,
                landing.clear.lines_removed,
                landing.points,
                game.score().score()
            );
        }
        match landing.mode_event {
            ModeEvent::None => {}
            ModeEvent::Milestone(lines) => info!("milestone: {} lines cleared", lines),
            event => info!("piece {}: {:?}", piece + 1, event),
        }
    }

    info!(
        "finished: score {} level {} lines {} game_over {}",
        game.score().score(),
        game.score().level(),
        game.score().total_lines(),
        game.game_over()
    );
    Ok(game)
}

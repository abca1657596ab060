//! Core game logic - pure, deterministic, and testable
//!
//! All the rules of the falling-block puzzle live here: the grid, the piece
//! catalog, collision, rotation with wall kicks, movement, ghost projection,
//! scoring and the game modes. Nothing here renders, reads keys or sleeps.
//!
//! - **Deterministic**: the same seed gives the same piece sequence and garbage
//! - **Headless**: a driver owns the clock and calls [`Game::tick`]
//! - **Snapshot based**: collaborators read owned [`GameSnapshot`] copies
//!
//! # Module Structure
//!
//! - [`grid`]: cell matrix plus the pure `intersect` / `merge` / `compact_full_rows`
//! - [`pieces`]: the seven piece kinds and their rotation matrices
//! - [`collision`]: bounds and overlap checks
//! - [`rng`]: seeded RNG and the lookahead piece generator
//! - [`rotator`]: rotation cycle and wall kicks
//! - [`movement`]: positions and translation
//! - [`ghost`]: landing row projection
//! - [`board`]: the command surface (move, rotate, hold, spawn, clear, garbage)
//! - [`scoring`]: score, combo and level
//! - [`modes`]: survival and rush rules
//! - [`game`]: the landing pipeline and action dispatch
//!
//! # Example
//!
//! ```
//! use blockfall_core::{EngineConfig, Game, TickResult};
//! use blockfall_core::types::{GameAction, GameMode};
//!
//! let mut game = Game::new(EngineConfig::new(GameMode::Classic).with_seed(7)).unwrap();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! // Hard drop awards two points per row
//! assert!(game.score().score() > 0);
//! assert!(matches!(game.tick(), TickResult::Moved | TickResult::Landed(_)));
//! ```

pub mod board;
pub mod collision;
pub mod config;
pub mod error;
pub mod game;
pub mod ghost;
pub mod grid;
pub mod modes;
pub mod movement;
pub mod pieces;
pub mod rng;
pub mod rotator;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{ActivePiece, Board};
pub use config::EngineConfig;
pub use error::{ConfigError, Result};
pub use game::{Game, Landing, TickResult};
pub use grid::{compact_full_rows, intersect, merge, ClearResult, Grid};
pub use modes::{ModeEvent, ModeStrategy, Rush, Survival};
pub use movement::Position;
pub use pieces::{get_shape, get_spawn_shape, Shape};
pub use rng::{GameRng, PieceGenerator};
pub use scoring::Score;
pub use snapshot::{ActiveSnapshot, BoardSnapshot, GameSnapshot, ModeSnapshot};

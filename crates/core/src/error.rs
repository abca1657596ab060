//! Construction-time errors
//!
//! Gameplay never fails: blocked moves and game over are reported through
//! return values. Only an engine that cannot be built is an error.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown game mode: {0:?} (expected classic, survival or rush)")]
    UnknownMode(String),
    #[error("board of {width}x{height} cannot hold a 4x4 piece")]
    BoardTooSmall { width: u8, height: u8 },
    #[error("survival garbage threshold must be at least 1")]
    ZeroSurvivalThreshold,
    #[error("rush target must be at least 1 line")]
    ZeroRushTarget,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

//! blockfall (workspace facade crate).
//!
//! The engine lives in `crates/core` and the shared vocabulary in `crates/types`;
//! this package re-exports both as `blockfall::{core,types}` and hosts the
//! headless demo runner.

pub use blockfall_core as core;
pub use blockfall_types as types;

pub mod demo;

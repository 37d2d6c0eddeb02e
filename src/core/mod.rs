//! Core types: configuration, geometry, deterministic RNG, errors.
//!
//! These are shared by the catalog, the engine and the presentation layer.

pub mod config;
pub mod error;
pub mod geometry;
pub mod rng;

pub use config::{GameConfig, LayoutConfig, DEFAULT_FRAME_RATE, DEFAULT_MAX_LEVEL};
pub use error::{MatchError, Result};
pub use geometry::{Point, Rect};
pub use rng::{GameRng, GameRngState};

//! Tile-matching engine: level generation, flip/match logic, lock timer,
//! and level progression.
//!
//! ## Key Types
//!
//! - `MatchEngine`: Owns the level in progress and drives its state machine
//! - `LevelState`: Tiles, pending comparison buffer, lock and completion
//! - `Tile`: One tile with its identity, grid cell, bounds and face state
//! - `GridLayout`: Maps deal order to grid cells and screen rectangles

pub mod layout;
pub mod level;
pub mod match_engine;
pub mod tile;

pub use layout::{GridCell, GridLayout};
pub use level::{generate_level, FlippedQueue, LevelState, Phase};
pub use match_engine::{MatchEngine, RevealOutcome, TickOutcome};
pub use tile::Tile;

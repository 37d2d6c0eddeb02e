//! # alien-memory
//!
//! Engine for a memory-matching (concentration) game: a grid of face-down
//! alien tiles, revealed two at a time by mouse clicks, with levels that
//! grow by one pair each time and wrap after the last.
//!
//! ## Design Principles
//!
//! 1. **Frame-Driven**: Everything runs synchronously inside the host's
//!    render loop. One `tick` per frame; the mismatch lock counts frames.
//!
//! 2. **Explicit Context**: No process-wide state. The host builds an
//!    `AppContext` once and drives it each frame.
//!
//! 3. **Explicit Catalog**: Tile identities come from an `AssetCatalog`
//!    handed in at startup, never from a directory scan inside the engine.
//!
//! 4. **Deterministic**: All randomness flows from a seeded ChaCha8 RNG.
//!
//! ## Modules
//!
//! - `core`: Configuration, geometry, RNG, errors
//! - `catalog`: Tile identities and their images
//! - `engine`: Level generation and the flip/match state machine
//! - `presentation`: Input events, media toggles, frame views, app context

pub mod core;
pub mod catalog;
pub mod engine;
pub mod presentation;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, LayoutConfig,
    GameRng, GameRngState,
    MatchError, Result,
    Point, Rect,
};

pub use crate::catalog::{Asset, AssetCatalog, Identity};

pub use crate::engine::{
    generate_level, GridCell, GridLayout, LevelState, MatchEngine, Phase, RevealOutcome,
    Tile, TickOutcome,
};

pub use crate::presentation::{
    AppContext, FrameStatus, FrameView, InputEvent, Key, MediaService, MouseButton, Renderer,
};

//! Level state and level generation.
//!
//! ## LevelState
//!
//! Everything about the level in progress:
//! - Level number and the dealt tiles (deal order = layout order)
//! - Pending comparison buffer (identities of up to 2 unresolved tiles)
//! - Mismatch lock and its tick counter
//! - Completion flag
//!
//! A fresh `LevelState` is generated for every level; nothing carries over.
//!
//! Tiles live in an `im::Vector` so the presentation layer can take an
//! O(1) snapshot every frame without copying the board.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{info, instrument};

use super::layout::GridLayout;
use super::tile::Tile;
use crate::catalog::{AssetCatalog, Identity};
use crate::core::{GameConfig, GameRng, MatchError, Point, Result};

/// Identities of revealed tiles awaiting comparison. Never holds more
/// than two entries.
pub type FlippedQueue = SmallVec<[Identity; 2]>;

/// Where a level stands in its play cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Accepting clicks.
    Playing,
    /// A mismatched pair is on display; clicks are ignored.
    Locked,
    /// Every tile is revealed; waiting for the advance key.
    Complete,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Playing => "playing",
            Phase::Locked => "locked",
            Phase::Complete => "complete",
        };
        f.write_str(name)
    }
}

/// State of the level being played.
///
/// Cloning is O(1) for the tile vector, so hosts may keep snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelState {
    pub(crate) level: u32,
    pub(crate) tiles: Vector<Tile>,
    pub(crate) flipped: FlippedQueue,
    pub(crate) locked: bool,
    pub(crate) lock_timer: u32,
    pub(crate) complete: bool,
    pub(crate) layout: GridLayout,
}

impl LevelState {
    /// Level number, starting at 1.
    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Tiles in deal order.
    #[must_use]
    pub fn tiles(&self) -> &Vector<Tile> {
        &self.tiles
    }

    #[must_use]
    pub fn tile(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Number of pairs dealt.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.tiles.len() / 2
    }

    /// Pending comparison buffer.
    #[must_use]
    pub fn flipped(&self) -> &[Identity] {
        &self.flipped
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Ticks elapsed since the current lock began.
    #[must_use]
    pub fn lock_timer(&self) -> u32 {
        self.lock_timer
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Grid geometry the tiles were placed with.
    #[must_use]
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.complete {
            Phase::Complete
        } else if self.locked {
            Phase::Locked
        } else {
            Phase::Playing
        }
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.revealed).count()
    }

    /// Check whether every tile shows its face.
    #[must_use]
    pub fn all_revealed(&self) -> bool {
        self.tiles.iter().all(|t| t.revealed)
    }

    /// Index of the first hidden tile under `position`, in deal order.
    #[must_use]
    pub fn hidden_tile_at(&self, position: Point) -> Option<usize> {
        self.tiles
            .iter()
            .position(|t| !t.revealed && t.bounds.contains(position))
    }
}

/// Deal a new level.
///
/// Picks `level + 1` distinct identities from the catalog, duplicates
/// them, shuffles the resulting multiset uniformly and lays the tiles out
/// on the grid face down.
///
/// ## Errors
///
/// - `InvalidLevel` if `level` is outside `1..=config.max_level`
/// - `InsufficientAssets` if the catalog holds fewer than `level + 1`
///   identities
#[instrument(skip(catalog, config, rng), fields(catalog_size = catalog.len()))]
pub fn generate_level(
    level: u32,
    catalog: &AssetCatalog,
    config: &GameConfig,
    rng: &mut GameRng,
) -> Result<LevelState> {
    if !config.is_valid_level(level) {
        return Err(MatchError::InvalidLevel {
            level,
            max_level: config.max_level,
        });
    }

    let pairs = GameConfig::pair_count(level);
    let selected = catalog.sample(pairs, rng)?;

    let mut deal: Vec<Identity> = Vec::with_capacity(pairs * 2);
    deal.extend(selected.iter().cloned());
    deal.extend(selected);
    rng.shuffle(&mut deal);

    let layout = GridLayout::for_level(level, &config.layout);
    let tiles: Vector<Tile> = deal
        .into_iter()
        .enumerate()
        .map(|(i, identity)| Tile::new(identity, layout.cell(i), layout.tile_bounds(i)))
        .collect();

    info!(level, pairs, columns = layout.columns(), "level dealt");

    Ok(LevelState {
        level,
        tiles,
        flipped: FlippedQueue::new(),
        locked: false,
        lock_timer: 0,
        complete: false,
        layout,
    })
}

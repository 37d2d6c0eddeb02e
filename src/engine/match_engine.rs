//! The match engine: flip, compare, lock, and advance.
//!
//! ## State machine
//!
//! ```text
//! Playing --(pair mismatch)--> Locked --(lock elapses)--> Playing
//! Playing --(last pair matched)--> Complete --(advance)--> Playing (next level)
//! ```
//!
//! There is no terminal state: after the last level play wraps to level 1.
//!
//! All operations are synchronous and meant to be called from the host's
//! render loop: `handle_pointer_down` for each click, `tick` once per
//! frame, `advance_level` when the advance key is pressed.

use tracing::{debug, info, instrument, warn};

use super::level::{generate_level, LevelState, Phase};
use crate::catalog::{AssetCatalog, Identity};
use crate::core::{GameConfig, GameRng, GameRngState, MatchError, Point, Result};

/// What a pointer-down did to the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Locked, complete, or no hidden tile under the pointer.
    Ignored,
    /// First tile of a pair turned over.
    Flipped { index: usize },
    /// Second tile matched the first.
    Matched {
        index: usize,
        identity: Identity,
        level_complete: bool,
    },
    /// Second tile differs from the first; the board is now locked.
    Mismatched { index: usize },
}

impl RevealOutcome {
    /// Check whether the click changed anything.
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, RevealOutcome::Ignored)
    }
}

/// What a frame tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not locked; nothing to do.
    Idle,
    /// Lock still running.
    Waiting { remaining: u32 },
    /// Lock elapsed; the mismatched tiles were turned back over.
    Unlocked { hidden: usize },
}

/// Owns the level in progress and everything needed to deal the next one.
///
/// ## Example
///
/// ```
/// use alien_memory::catalog::AssetCatalog;
/// use alien_memory::core::GameConfig;
/// use alien_memory::engine::{MatchEngine, Phase};
///
/// let names: Vec<String> = (1..=6).map(|i| format!("alien{}.png", i)).collect();
/// let catalog = AssetCatalog::from_file_names("images/aliens", &names).unwrap();
/// let engine = MatchEngine::new(catalog, GameConfig::default(), 42).unwrap();
///
/// assert_eq!(engine.level(), 1);
/// assert_eq!(engine.state().tile_count(), 4);
/// assert_eq!(engine.phase(), Phase::Playing);
/// ```
#[derive(Clone, Debug)]
pub struct MatchEngine {
    catalog: AssetCatalog,
    config: GameConfig,
    rng: GameRng,
    state: LevelState,
}

impl MatchEngine {
    /// Create an engine and deal level 1.
    ///
    /// The catalog must be able to supply every level up to
    /// `config.max_level`; a short catalog is reported here rather than
    /// at a later level transition.
    #[instrument(skip(catalog, config), fields(catalog_size = catalog.len()))]
    pub fn new(catalog: AssetCatalog, config: GameConfig, seed: u64) -> Result<Self> {
        let required = config.required_identities();
        if catalog.len() < required {
            warn!(
                required,
                available = catalog.len(),
                "asset catalog cannot supply the final level"
            );
            return Err(MatchError::InsufficientAssets {
                requested: required,
                available: catalog.len(),
            });
        }

        let mut rng = GameRng::new(seed);
        let state = generate_level(1, &catalog, &config, &mut rng)?;

        Ok(Self {
            catalog,
            config,
            rng,
            state,
        })
    }

    /// Current level state. Read-only; only the engine mutates it.
    #[must_use]
    pub fn state(&self) -> &LevelState {
        &self.state
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.state.level
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.state.locked
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state.complete
    }

    /// Check whether the current level is the last before wrapping.
    #[must_use]
    pub fn is_final_level(&self) -> bool {
        self.state.level >= self.config.max_level
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &AssetCatalog {
        &self.catalog
    }

    /// RNG position, for reproducing the upcoming deals.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Turn over the first hidden tile under `position`.
    ///
    /// Ignored while locked, or when the pointer misses every hidden tile.
    /// Revealing a second tile resolves the pair: a match clears the
    /// buffer and may complete the level, a mismatch locks the board.
    pub fn handle_pointer_down(&mut self, position: Point) -> RevealOutcome {
        if self.state.locked {
            return RevealOutcome::Ignored;
        }

        let Some(index) = self.state.hidden_tile_at(position) else {
            return RevealOutcome::Ignored;
        };

        let identity = {
            let tile = &mut self.state.tiles[index];
            tile.show();
            tile.identity.clone()
        };
        debug!(index, identity = %identity, "tile revealed");
        self.state.flipped.push(identity);

        if self.state.flipped.len() < 2 {
            return RevealOutcome::Flipped { index };
        }

        if self.state.flipped[0] != self.state.flipped[1] {
            self.state.locked = true;
            self.state.lock_timer = 0;
            debug!(
                first = %self.state.flipped[0],
                second = %self.state.flipped[1],
                "mismatch, locking"
            );
            return RevealOutcome::Mismatched { index };
        }

        let identity = self.state.flipped[0].clone();
        self.state.flipped.clear();
        self.state.complete = self.state.all_revealed();
        debug!(identity = %identity, "pair matched");
        if self.state.complete {
            info!(level = self.state.level, "level complete");
        }

        RevealOutcome::Matched {
            index,
            identity,
            level_complete: self.state.complete,
        }
    }

    /// Advance the mismatch lock by one frame.
    ///
    /// After `config.lock_ticks()` ticks the board unlocks and every tile
    /// whose identity is pending is turned back over.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.state.locked {
            return TickOutcome::Idle;
        }

        self.state.lock_timer += 1;
        let threshold = self.config.lock_ticks();
        if self.state.lock_timer < threshold {
            return TickOutcome::Waiting {
                remaining: threshold - self.state.lock_timer,
            };
        }

        self.state.locked = false;
        self.state.lock_timer = 0;

        let flipped = std::mem::take(&mut self.state.flipped);
        let mut hidden = 0;
        for tile in self.state.tiles.iter_mut() {
            if tile.revealed && flipped.contains(&tile.identity) {
                tile.hide();
                hidden += 1;
            }
        }
        debug!(hidden, "lock elapsed");

        TickOutcome::Unlocked { hidden }
    }

    /// Deal the next level if the current one is complete.
    ///
    /// Returns `Ok(false)` without touching the state when the level is
    /// still in progress. After the last level play wraps to level 1.
    pub fn advance_level(&mut self) -> Result<bool> {
        if !self.state.complete {
            return Ok(false);
        }

        let next = self.config.next_level(self.state.level);
        self.state = generate_level(next, &self.catalog, &self.config, &mut self.rng)?;
        info!(level = next, "advanced");
        Ok(true)
    }
}

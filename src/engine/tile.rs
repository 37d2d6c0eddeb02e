//! Tiles on the board.

use serde::{Deserialize, Serialize};

use super::layout::GridCell;
use crate::catalog::Identity;
use crate::core::Rect;

/// A single face-down or face-up tile.
///
/// The cell and bounds are fixed when the level is dealt; only `revealed`
/// changes during play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Pair-membership key. Exactly one other tile shares it.
    pub identity: Identity,

    /// Grid position derived from the deal index.
    pub cell: GridCell,

    /// Screen rectangle used for drawing and hit-testing.
    pub bounds: Rect,

    /// Whether the face is currently shown.
    pub revealed: bool,
}

impl Tile {
    /// Create a hidden tile.
    #[must_use]
    pub fn new(identity: Identity, cell: GridCell, bounds: Rect) -> Self {
        Self {
            identity,
            cell,
            bounds,
            revealed: false,
        }
    }

    /// Show the face.
    pub fn show(&mut self) {
        self.revealed = true;
    }

    /// Turn the tile back over.
    pub fn hide(&mut self) {
        self.revealed = false;
    }
}

//! Grid layout: where each tile of a level sits on screen.
//!
//! Tiles are placed row-major in deal order. A level numbered `n` asks for
//! `n + 1` rows; the column count is that figure or the configured
//! minimum, whichever is larger. Both the column and the row of tile `i`
//! are computed against the column count:
//!
//! ```text
//! column = i % columns
//! row    = i / columns
//! ```
//!
//! so no two tiles ever share a cell. The grid is centred horizontally in
//! the window and starts `margin_top` pixels below the top edge.

use serde::{Deserialize, Serialize};

use crate::core::{LayoutConfig, Rect};

/// Column/row coordinate of a tile in the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    pub column: u32,
    pub row: u32,
}

impl GridCell {
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }
}

/// Resolved grid geometry for one level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLayout {
    columns: u32,
    tile_width: u32,
    tile_height: u32,
    padding: u32,
    left: i32,
    top: i32,
}

impl GridLayout {
    /// Compute the layout for a level.
    #[must_use]
    pub fn for_level(level: u32, config: &LayoutConfig) -> Self {
        let rows = level + 1;
        let columns = config.min_columns.max(rows);

        let grid_width = config.tile_width * columns + config.padding * (columns - 1);
        let left = (config.window_width as i32 - grid_width as i32) / 2;

        Self {
            columns,
            tile_width: config.tile_width,
            tile_height: config.tile_height,
            padding: config.padding,
            left,
            top: config.margin_top as i32,
        }
    }

    /// Number of columns in the grid.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows needed to hold `tile_count` tiles.
    #[must_use]
    pub const fn rows_for(&self, tile_count: usize) -> u32 {
        (tile_count as u32).div_ceil(self.columns)
    }

    /// Grid cell of the tile dealt at `index`.
    #[must_use]
    pub const fn cell(&self, index: usize) -> GridCell {
        let index = index as u32;
        GridCell::new(index % self.columns, index / self.columns)
    }

    /// Screen rectangle of a grid cell.
    #[must_use]
    pub const fn bounds(&self, cell: GridCell) -> Rect {
        let step_x = (self.tile_width + self.padding) as i32;
        let step_y = (self.tile_height + self.padding) as i32;
        Rect::new(
            self.left + step_x * cell.column as i32,
            self.top + step_y * cell.row as i32,
            self.tile_width,
            self.tile_height,
        )
    }

    /// Screen rectangle of the tile dealt at `index`.
    #[must_use]
    pub const fn tile_bounds(&self, index: usize) -> Rect {
        self.bounds(self.cell(index))
    }
}

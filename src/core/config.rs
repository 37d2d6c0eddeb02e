//! Game configuration types.
//!
//! Hosts configure the engine at startup by providing:
//! - `LayoutConfig`: Tile size, spacing and window geometry
//! - `GameConfig`: Level range, frame rate and layout
//!
//! Defaults reproduce the shipped game: five levels at 60 frames per
//! second on a 1280x860 window with 128px tiles.

use serde::{Deserialize, Serialize};

/// Highest level before play wraps back to level 1.
pub const DEFAULT_MAX_LEVEL: u32 = 5;

/// Frame rate of the host loop. One second of lock equals this many ticks.
pub const DEFAULT_FRAME_RATE: u32 = 60;

/// Grid and window geometry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Tile image width in pixels.
    pub tile_width: u32,

    /// Tile image height in pixels.
    pub tile_height: u32,

    /// Gap between neighbouring tiles.
    pub padding: u32,

    /// Distance from the top of the window to the first tile row.
    pub margin_top: u32,

    /// Window width; the grid is centred horizontally within it.
    pub window_width: u32,

    /// Window height.
    pub window_height: u32,

    /// Minimum column count. Levels with more rows widen the grid.
    pub min_columns: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            tile_width: 128,
            tile_height: 128,
            padding: 20,
            margin_top: 160,
            window_width: 1280,
            window_height: 860,
            min_columns: 4,
        }
    }
}

impl LayoutConfig {
    /// Create the default layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tile image size.
    #[must_use]
    pub fn with_tile_size(mut self, width: u32, height: u32) -> Self {
        self.tile_width = width;
        self.tile_height = height;
        self
    }

    /// Set the gap between tiles.
    #[must_use]
    pub fn with_padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    /// Set the top margin above the grid.
    #[must_use]
    pub fn with_margin_top(mut self, margin_top: u32) -> Self {
        self.margin_top = margin_top;
        self
    }

    /// Set the window size.
    #[must_use]
    pub fn with_window(mut self, width: u32, height: u32) -> Self {
        self.window_width = width;
        self.window_height = height;
        self
    }

    /// Set the minimum column count.
    #[must_use]
    pub fn with_min_columns(mut self, columns: u32) -> Self {
        assert!(columns > 0, "Grid needs at least 1 column");
        self.min_columns = columns;
        self
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Last level; advancing past it wraps to level 1.
    pub max_level: u32,

    /// Host frame rate. The mismatch lock lasts one second, i.e. this
    /// many calls to `MatchEngine::tick`.
    pub frame_rate: u32,

    /// Grid geometry.
    pub layout: LayoutConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_level: DEFAULT_MAX_LEVEL,
            frame_rate: DEFAULT_FRAME_RATE,
            layout: LayoutConfig::default(),
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of levels before wrapping.
    #[must_use]
    pub fn with_max_level(mut self, max_level: u32) -> Self {
        assert!(max_level > 0, "Must have at least 1 level");
        self.max_level = max_level;
        self
    }

    /// Set the host frame rate.
    #[must_use]
    pub fn with_frame_rate(mut self, frame_rate: u32) -> Self {
        assert!(frame_rate > 0, "Frame rate must be positive");
        self.frame_rate = frame_rate;
        self
    }

    /// Set the grid geometry.
    #[must_use]
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    /// Number of ticks a mismatched pair stays visible.
    #[must_use]
    pub fn lock_ticks(&self) -> u32 {
        self.frame_rate
    }

    /// Number of pairs dealt on a level.
    #[must_use]
    pub const fn pair_count(level: u32) -> usize {
        level as usize + 1
    }

    /// Level that follows `level`, wrapping after `max_level`.
    #[must_use]
    pub fn next_level(&self, level: u32) -> u32 {
        if level >= self.max_level {
            1
        } else {
            level + 1
        }
    }

    /// Check whether `level` lies in `1..=max_level`.
    #[must_use]
    pub fn is_valid_level(&self, level: u32) -> bool {
        (1..=self.max_level).contains(&level)
    }

    /// Distinct identities the catalog must hold to play every level.
    #[must_use]
    pub fn required_identities(&self) -> usize {
        Self::pair_count(self.max_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.max_level, 5);
        assert_eq!(config.frame_rate, 60);
        assert_eq!(config.lock_ticks(), 60);
        assert_eq!(config.layout.tile_width, 128);
        assert_eq!(config.layout.min_columns, 4);
        assert_eq!(config.required_identities(), 6);
    }

    #[test]
    fn test_pair_count() {
        assert_eq!(GameConfig::pair_count(1), 2);
        assert_eq!(GameConfig::pair_count(2), 3);
        assert_eq!(GameConfig::pair_count(5), 6);
    }

    #[test]
    fn test_next_level_wraps() {
        let config = GameConfig::default();
        assert_eq!(config.next_level(1), 2);
        assert_eq!(config.next_level(4), 5);
        assert_eq!(config.next_level(5), 1);

        let short = GameConfig::new().with_max_level(2);
        assert_eq!(short.next_level(2), 1);
    }

    #[test]
    fn test_valid_level() {
        let config = GameConfig::default();
        assert!(!config.is_valid_level(0));
        assert!(config.is_valid_level(1));
        assert!(config.is_valid_level(5));
        assert!(!config.is_valid_level(6));
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new()
            .with_max_level(3)
            .with_frame_rate(30)
            .with_layout(LayoutConfig::new().with_tile_size(64, 64).with_padding(8));

        assert_eq!(config.max_level, 3);
        assert_eq!(config.lock_ticks(), 30);
        assert_eq!(config.layout.tile_width, 64);
        assert_eq!(config.layout.padding, 8);
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = GameConfig::new().with_frame_rate(144);
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 level")]
    fn test_zero_levels() {
        let _ = GameConfig::new().with_max_level(0);
    }
}

//! Per-frame view model handed to the renderer.
//!
//! The view borrows from the application context, so building one every
//! frame costs a vector of tile views and no image or string copies
//! beyond the level label.

use std::path::Path;

use crate::catalog::Identity;
use crate::core::{Point, Rect};
use crate::engine::Phase;

use super::media::MediaControls;

pub const TITLE: &str = "Memory Game";
pub const INSTRUCTIONS: &str = "Find 2 of each";
pub const LEVEL_COMPLETE_PROMPT: &str = "Level complete. Press Space for next level";
pub const GAME_WON_PROMPT: &str = "Congrats. You Won. Press Space to play again";

/// Which point of the text box `anchor` refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    /// `anchor` is the middle of the top edge.
    MidTop,
    /// `anchor` is the middle of the bottom edge.
    MidBottom,
}

/// Text style of a HUD line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextStyle {
    Title,
    Body,
}

/// One line of HUD text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextView {
    pub text: String,
    pub anchor: Point,
    pub align: TextAlign,
    pub style: TextStyle,
}

/// Image to draw for a tile this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileImage<'a> {
    /// The alien face.
    Face(&'a Path),
    /// The cover image, or `None` for a blank card.
    Cover(Option<&'a Path>),
}

/// A tile as the renderer sees it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileView<'a> {
    pub identity: &'a Identity,
    pub bounds: Rect,
    pub revealed: bool,
    pub image: TileImage<'a>,
}

/// Everything needed to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameView<'a> {
    pub window_width: u32,
    pub window_height: u32,
    pub level: u32,
    pub phase: Phase,
    pub title: TextView,
    pub level_label: TextView,
    pub instructions: TextView,
    /// Shown only while the level is complete.
    pub prompt: Option<TextView>,
    pub tiles: Vec<TileView<'a>>,
    pub media: MediaControls,
}

impl FrameView<'_> {
    /// Check whether the background video should advance this frame.
    #[must_use]
    pub fn video_playing(&self) -> bool {
        self.media.video.enabled
    }

    #[must_use]
    pub fn music_playing(&self) -> bool {
        self.media.music.enabled
    }

    /// All HUD lines in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &TextView> {
        [&self.title, &self.level_label, &self.instructions]
            .into_iter()
            .chain(self.prompt.as_ref())
    }
}

/// Draws frames. Implemented by the host's window/graphics layer.
pub trait Renderer {
    fn draw(&mut self, view: &FrameView<'_>);
}

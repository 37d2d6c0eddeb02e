//! Presentation boundary: input, media toggles, and frame views.
//!
//! The window, graphics, fonts, audio and video decoding belong to the
//! host. This module is the seam between that host and the engine:
//!
//! - `InputEvent`: What the host delivers each frame
//! - `MediaService`: What the host plays when a toggle flips
//! - `FrameView` / `Renderer`: What the host draws each frame
//! - `AppContext`: The application object tying them together

pub mod app;
pub mod input;
pub mod media;
pub mod view;

pub use app::{AppContext, FrameStatus};
pub use input::{InputEvent, Key, MouseButton};
pub use media::{MediaControls, MediaKind, MediaService, ToggleButton, TOGGLE_ICON_SIZE};
pub use view::{
    FrameView, Renderer, TextAlign, TextStyle, TextView, TileImage, TileView, GAME_WON_PROMPT,
    INSTRUCTIONS, LEVEL_COMPLETE_PROMPT, TITLE,
};

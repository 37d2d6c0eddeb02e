//! Background music and video toggles.
//!
//! The audio/video service is independent of the engine. The application
//! context owns two on/off flags and tells a `MediaService` whenever one
//! of the toggle buttons flips them.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{LayoutConfig, Point, Rect};

/// Side length of the square toggle icons.
pub const TOGGLE_ICON_SIZE: u32 = 32;

/// Host-side playback of background music and video.
///
/// Both methods default to doing nothing, so hosts that poll the flags
/// from the frame view can use `()`.
pub trait MediaService {
    /// Pause or resume the background music.
    fn set_music_playing(&mut self, _playing: bool) {}

    /// Start or stop the background video.
    fn set_video_playing(&mut self, _playing: bool) {}
}

impl MediaService for () {}

/// Which toggle a button controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaKind {
    Music,
    Video,
}

/// An on/off button in the top-right corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleButton {
    pub kind: MediaKind,
    pub bounds: Rect,
    pub enabled: bool,
}

impl ToggleButton {
    /// Flip the flag and return its new value.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }
}

/// Both media toggles. Music sits 10px from the right edge, video 50px.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaControls {
    pub music: ToggleButton,
    pub video: ToggleButton,
}

impl MediaControls {
    /// Place the buttons for the configured window; both start enabled.
    #[must_use]
    pub fn new(layout: &LayoutConfig) -> Self {
        let right = layout.window_width as i32;
        Self {
            music: ToggleButton {
                kind: MediaKind::Music,
                bounds: Rect::from_top_right(right - 10, 10, TOGGLE_ICON_SIZE, TOGGLE_ICON_SIZE),
                enabled: true,
            },
            video: ToggleButton {
                kind: MediaKind::Video,
                bounds: Rect::from_top_right(right - 50, 10, TOGGLE_ICON_SIZE, TOGGLE_ICON_SIZE),
                enabled: true,
            },
        }
    }

    /// Flip every toggle under `position` and notify the media service.
    ///
    /// Returns the toggles that changed, at most one for non-overlapping
    /// buttons.
    pub fn press<M: MediaService + ?Sized>(&mut self, position: Point, media: &mut M) -> Vec<MediaKind> {
        let mut pressed = Vec::new();

        if self.music.bounds.contains(position) {
            let playing = self.music.toggle();
            media.set_music_playing(playing);
            debug!(playing, "music toggled");
            pressed.push(MediaKind::Music);
        }
        if self.video.bounds.contains(position) {
            let playing = self.video.toggle();
            media.set_video_playing(playing);
            debug!(playing, "video toggled");
            pressed.push(MediaKind::Video);
        }

        pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        music: Vec<bool>,
        video: Vec<bool>,
    }

    impl MediaService for Recorder {
        fn set_music_playing(&mut self, playing: bool) {
            self.music.push(playing);
        }

        fn set_video_playing(&mut self, playing: bool) {
            self.video.push(playing);
        }
    }

    #[test]
    fn test_button_placement() {
        let controls = MediaControls::new(&LayoutConfig::default());
        assert_eq!(controls.music.bounds.right(), 1270);
        assert_eq!(controls.video.bounds.right(), 1230);
        assert_eq!(controls.music.bounds.y, 10);
        assert!(controls.music.enabled);
        assert!(controls.video.enabled);
    }

    #[test]
    fn test_press_music() {
        let mut controls = MediaControls::new(&LayoutConfig::default());
        let mut media = Recorder::default();
        let center = controls.music.bounds.center();

        assert_eq!(controls.press(center, &mut media), vec![MediaKind::Music]);
        assert!(!controls.music.enabled);
        assert!(controls.video.enabled);

        controls.press(center, &mut media);
        assert!(controls.music.enabled);
        assert_eq!(media.music, vec![false, true]);
        assert!(media.video.is_empty());
    }

    #[test]
    fn test_press_video() {
        let mut controls = MediaControls::new(&LayoutConfig::default());
        let mut media = Recorder::default();

        controls.press(controls.video.bounds.center(), &mut media);
        assert!(!controls.video.enabled);
        assert_eq!(media.video, vec![false]);
    }

    #[test]
    fn test_press_elsewhere() {
        let mut controls = MediaControls::new(&LayoutConfig::default());
        assert!(controls.press(Point::new(0, 0), &mut ()).is_empty());
        assert!(controls.music.enabled && controls.video.enabled);
    }
}

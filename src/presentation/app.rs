//! Application context: the one object a host loop talks to.
//!
//! Built once at startup and passed around explicitly. It owns the match
//! engine, the media toggles and the host's media service, turns each
//! frame's input batch into engine calls, and produces the frame view.
//!
//! ## Frame order
//!
//! 1. Apply the input batch in arrival order. A primary click goes to the
//!    toggle buttons, then to the board.
//! 2. Tick the engine once.
//! 3. Build the view and hand it to the renderer.

use tracing::{debug, instrument};

use super::input::{InputEvent, Key};
use super::media::{MediaControls, MediaService};
use super::view::{
    FrameView, Renderer, TextAlign, TextStyle, TextView, TileImage, TileView, GAME_WON_PROMPT,
    INSTRUCTIONS, LEVEL_COMPLETE_PROMPT, TITLE,
};
use crate::catalog::AssetCatalog;
use crate::core::{GameConfig, Point, Result};
use crate::engine::{MatchEngine, Phase};

/// Whether the host loop should keep running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStatus {
    Continue,
    Quit,
}

/// Explicit application state for a host loop.
pub struct AppContext<M: MediaService = ()> {
    engine: MatchEngine,
    media: M,
    controls: MediaControls,
    frames: u64,
}

impl<M: MediaService> AppContext<M> {
    /// Validate the catalog, deal level 1 and place the media toggles.
    pub fn new(catalog: AssetCatalog, config: GameConfig, seed: u64, media: M) -> Result<Self> {
        let controls = MediaControls::new(&config.layout);
        let engine = MatchEngine::new(catalog, config, seed)?;
        Ok(Self {
            engine,
            media,
            controls,
            frames: 0,
        })
    }

    #[must_use]
    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    #[must_use]
    pub fn controls(&self) -> &MediaControls {
        &self.controls
    }

    #[must_use]
    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    /// Frames run so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame: apply input, tick, and draw.
    #[instrument(skip_all, fields(frame = self.frames, events = events.len()))]
    pub fn frame<R: Renderer + ?Sized>(
        &mut self,
        events: &[InputEvent],
        renderer: &mut R,
    ) -> Result<FrameStatus> {
        let status = self.step(events)?;
        renderer.draw(&self.view());
        Ok(status)
    }

    /// Apply input and tick, for hosts that draw on their own.
    pub fn step(&mut self, events: &[InputEvent]) -> Result<FrameStatus> {
        let status = self.handle_events(events)?;
        self.engine.tick();
        self.frames += 1;
        Ok(status)
    }

    /// Apply one frame's input batch without ticking or drawing.
    pub fn handle_events(&mut self, events: &[InputEvent]) -> Result<FrameStatus> {
        let mut status = FrameStatus::Continue;

        for event in events {
            match *event {
                InputEvent::Quit => {
                    debug!("quit requested");
                    status = FrameStatus::Quit;
                }
                InputEvent::KeyDown(Key::Space) => {
                    self.engine.advance_level()?;
                }
                InputEvent::KeyDown(Key::Other) => {}
                InputEvent::PointerDown { .. } => {
                    if let Some(position) = event.primary_click() {
                        self.click(position);
                    }
                }
            }
        }

        Ok(status)
    }

    fn click(&mut self, position: Point) {
        self.controls.press(position, &mut self.media);
        self.engine.handle_pointer_down(position);
    }

    /// Build the view of the current frame.
    #[must_use]
    pub fn view(&self) -> FrameView<'_> {
        let config = self.engine.config();
        let state = self.engine.state();
        let catalog = self.engine.catalog();
        let width = config.layout.window_width;
        let height = config.layout.window_height;
        let center_x = width as i32 / 2;

        let tiles = state
            .tiles()
            .iter()
            .map(|tile| {
                let asset = catalog.get(tile.identity.as_str());
                let image = match (tile.revealed, asset) {
                    (true, Some(asset)) => TileImage::Face(asset.face.as_path()),
                    (_, asset) => TileImage::Cover(asset.and_then(|a| a.cover.as_deref())),
                };
                TileView {
                    identity: &tile.identity,
                    bounds: tile.bounds,
                    revealed: tile.revealed,
                    image,
                }
            })
            .collect();

        let prompt = state.is_complete().then(|| TextView {
            text: if self.engine.is_final_level() {
                GAME_WON_PROMPT
            } else {
                LEVEL_COMPLETE_PROMPT
            }
            .to_string(),
            anchor: Point::new(center_x, height as i32 - 40),
            align: TextAlign::MidBottom,
            style: TextStyle::Body,
        });

        FrameView {
            window_width: width,
            window_height: height,
            level: state.level(),
            phase: state.phase(),
            title: hud_line(TITLE, center_x, 10, TextStyle::Title),
            level_label: hud_line(format!("Level {}", state.level()), center_x, 80, TextStyle::Body),
            instructions: hud_line(INSTRUCTIONS, center_x, 120, TextStyle::Body),
            prompt,
            tiles,
            media: self.controls,
        }
    }

    /// Current phase, for hosts that only need the state machine.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.engine.phase()
    }
}

fn hud_line(text: impl Into<String>, x: i32, y: i32, style: TextStyle) -> TextView {
    TextView {
        text: text.into(),
        anchor: Point::new(x, y),
        align: TextAlign::MidTop,
        style,
    }
}

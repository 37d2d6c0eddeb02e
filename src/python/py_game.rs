//! Game bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::catalog::AssetCatalog;
use crate::core::{GameConfig, MatchError};
use crate::presentation::{AppContext, FrameStatus, InputEvent, Key, TileImage};

fn to_py_err(err: MatchError) -> PyErr {
    PyErr::new::<PyValueError, _>(err.to_string())
}

/// Python wrapper for the application context.
///
/// The Python host owns the window, mixer and video capture; it feeds
/// clicks and key presses in, calls `step()` once per frame, and reads
/// the tile layout, HUD text and media flags back out.
#[pyclass(name = "Game")]
pub struct PyGame {
    app: AppContext,
    pending: Vec<InputEvent>,
}

#[pymethods]
impl PyGame {
    /// Create a game.
    ///
    /// # Arguments
    /// - asset_names: Image file names; identities are the names without extension
    /// - image_dir: Directory the face images live in
    /// - seed: RNG seed for reproducible deals
    /// - frame_rate: Host frame rate; a mismatch stays visible this many frames
    #[new]
    #[pyo3(signature = (asset_names, image_dir = "images/aliens", seed = 42, frame_rate = 60))]
    fn new(asset_names: Vec<String>, image_dir: &str, seed: u64, frame_rate: u32) -> PyResult<Self> {
        if frame_rate == 0 {
            return Err(PyErr::new::<PyValueError, _>("frame_rate must be positive"));
        }
        let catalog = AssetCatalog::from_file_names(image_dir, &asset_names).map_err(to_py_err)?;
        let config = GameConfig::new().with_frame_rate(frame_rate);
        let app = AppContext::new(catalog, config, seed, ()).map_err(to_py_err)?;
        Ok(Self {
            app,
            pending: Vec::new(),
        })
    }

    /// Queue a primary-button click for the next step.
    fn click(&mut self, x: i32, y: i32) {
        self.pending.push(InputEvent::click(x, y));
    }

    /// Queue a key press (e.g. "space") for the next step.
    fn key_down(&mut self, name: &str) {
        self.pending.push(InputEvent::KeyDown(Key::from_name(name)));
    }

    /// Queue a quit request.
    fn quit(&mut self) {
        self.pending.push(InputEvent::Quit);
    }

    /// Apply queued input and tick once. Returns False when the host
    /// should stop its loop.
    fn step(&mut self) -> PyResult<bool> {
        let events = std::mem::take(&mut self.pending);
        let status = self.app.step(&events).map_err(to_py_err)?;
        Ok(status == FrameStatus::Continue)
    }

    #[getter]
    fn level(&self) -> u32 {
        self.app.engine().level()
    }

    #[getter]
    fn phase(&self) -> String {
        self.app.phase().to_string()
    }

    #[getter]
    fn complete(&self) -> bool {
        self.app.engine().is_complete()
    }

    #[getter]
    fn locked(&self) -> bool {
        self.app.engine().is_locked()
    }

    #[getter]
    fn music_playing(&self) -> bool {
        self.app.controls().music.enabled
    }

    #[getter]
    fn video_playing(&self) -> bool {
        self.app.controls().video.enabled
    }

    /// Tiles as `(identity, x, y, width, height, image_path_or_None)`.
    ///
    /// The path is the face image for revealed tiles and the cover image
    /// (or None for a blank card) for hidden ones.
    fn tiles(&self) -> Vec<(String, i32, i32, u32, u32, Option<String>)> {
        self.app
            .view()
            .tiles
            .iter()
            .map(|t| {
                let image = match t.image {
                    TileImage::Face(path) => Some(path),
                    TileImage::Cover(path) => path,
                };
                (
                    t.identity.to_string(),
                    t.bounds.x,
                    t.bounds.y,
                    t.bounds.width,
                    t.bounds.height,
                    image.map(|p| p.to_string_lossy().into_owned()),
                )
            })
            .collect()
    }

    /// HUD lines as `(text, x, y, anchored_at_bottom)`.
    fn texts(&self) -> Vec<(String, i32, i32, bool)> {
        use crate::presentation::TextAlign;

        self.app
            .view()
            .texts()
            .map(|t| (t.text.clone(), t.anchor.x, t.anchor.y, t.align == TextAlign::MidBottom))
            .collect()
    }

    /// Toggle buttons as `(kind, x, y, width, height, enabled)`.
    fn toggles(&self) -> Vec<(String, i32, i32, u32, u32, bool)> {
        let controls = self.app.controls();
        [("music", controls.music), ("video", controls.video)]
            .into_iter()
            .map(|(name, b)| {
                (
                    name.to_string(),
                    b.bounds.x,
                    b.bounds.y,
                    b.bounds.width,
                    b.bounds.height,
                    b.enabled,
                )
            })
            .collect()
    }

    fn __repr__(&self) -> String {
        format!("Game(level={}, phase={})", self.level(), self.phase())
    }
}

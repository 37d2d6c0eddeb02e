//! Python bindings for the alien-memory engine.
//!
//! Lets a Python host (e.g. a pygame window) drive the game while the
//! matching logic stays in Rust.
//!
//! # Quick Start
//!
//! ```python
//! import os
//! import alien_memory
//!
//! game = alien_memory.Game(os.listdir("images/aliens"), seed=7)
//!
//! while running:
//!     for event in pygame.event.get():
//!         if event.type == pygame.MOUSEBUTTONDOWN and event.button == 1:
//!             game.click(*event.pos)
//!         elif event.type == pygame.KEYDOWN and event.key == pygame.K_SPACE:
//!             game.key_down("space")
//!     running = game.step()
//!     for identity, x, y, w, h, image in game.tiles():
//!         ...
//! ```

use pyo3::prelude::*;

mod py_game;

pub use py_game::*;

/// alien_memory: tile-matching engine for a memory game.
#[pymodule]
fn alien_memory(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGame>()?;
    Ok(())
}

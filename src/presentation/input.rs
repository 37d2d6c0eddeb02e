//! Input events delivered by the host once per frame batch.

use serde::{Deserialize, Serialize};

use crate::core::Point;

/// Mouse button that produced a pointer-down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Primary,
    Middle,
    Secondary,
}

/// Keys the game distinguishes. Everything else arrives as `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Advances to the next level once the current one is complete.
    Space,
    Other,
}

impl Key {
    /// Map a host key name (`"space"`, `"a"`, ...) to a key.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("space") || name == " " {
            Key::Space
        } else {
            Key::Other
        }
    }
}

/// A discrete input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    PointerDown { position: Point, button: MouseButton },
    KeyDown(Key),
    /// The window was closed.
    Quit,
}

impl InputEvent {
    /// Primary-button click at `(x, y)`.
    #[must_use]
    pub const fn click(x: i32, y: i32) -> Self {
        InputEvent::PointerDown {
            position: Point::new(x, y),
            button: MouseButton::Primary,
        }
    }

    /// Position of a primary-button click, if this is one.
    #[must_use]
    pub fn primary_click(&self) -> Option<Point> {
        match *self {
            InputEvent::PointerDown {
                position,
                button: MouseButton::Primary,
            } => Some(position),
            _ => None,
        }
    }
}

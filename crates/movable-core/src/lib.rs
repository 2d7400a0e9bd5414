#![forbid(unsafe_code)]

//! Deterministic drag-to-reposition lifecycle for floating panels.
//!
//! The core type is [`Mover`]: a stateful processor that interprets a stream
//! of low-level pointer events into an "armed → dragging → settled"
//! interaction and keeps the managed element under the pointer. The element
//! itself is reached only through the [`MovableElement`] seam, so the machine
//! runs (and tests) identically on native targets and in the browser.
//!
//! # State Machine
//!
//! ```text
//! Idle --[pointer down, can_drag true]--> Armed
//! Armed --[pointer move, |dx|+|dy| < threshold]--> Armed
//! Armed --[pointer move, |dx|+|dy| >= threshold]--> Dragging
//! Dragging --[pointer move]--> Dragging (repositions element)
//! Armed|Dragging --[pointer up | pointer cancel | disable()]--> Idle
//! ```
//!
//! # Invariants
//!
//! 1. At most one active session per `Mover`; a second pointer-down while a
//!    session is open is ignored until the first session ends.
//! 2. Exactly one transition to dragging per session; the drag offset is
//!    captured once, at the threshold crossing.
//! 3. Pointer capture is only released if it was actually acquired.
//! 4. The terminal cleanup path is shared by pointer-up, pointer-cancel and
//!    `disable()`, so no session state survives any exit.

pub mod config;
pub mod element;
pub mod mover;

pub use config::{
    ArmedCallback, DEFAULT_DRAG_THRESHOLD, DragPredicate, MoverConfig, MoverConfigUpdate,
    MoverOrigin, OriginEdge,
};
pub use element::{MockElement, MovableElement};
pub use mover::{CancelReason, IgnoredReason, Mover, MoverEffect};

use serde::{Deserialize, Serialize};

/// Position in client (viewport) pixel coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another point, the metric used for the drag
    /// threshold check.
    #[must_use]
    pub fn manhattan_distance(self, other: Self) -> f64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

/// Pointer button reported with a pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Snapshot of active keyboard modifiers captured with one pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierSnapshot {
    pub shift: bool,
    pub alt: bool,
    pub ctrl: bool,
    pub meta: bool,
}

impl ModifierSnapshot {
    #[must_use]
    pub const fn none() -> Self {
        Self {
            shift: false,
            alt: false,
            ctrl: false,
            meta: false,
        }
    }
}

impl Default for ModifierSnapshot {
    fn default() -> Self {
        Self::none()
    }
}

/// Everything the Mover (and a `can_drag` predicate) needs from one platform
/// pointer event.
///
/// `pointer_id` is a signed value matching the DOM's `pointerId`; negative
/// ids are real (some engines hand them to pen/touch pointers) and are
/// treated like any other id.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerInput {
    pub pointer_id: i32,
    pub position: Point,
    pub button: PointerButton,
    pub modifiers: ModifierSnapshot,
}

impl PointerInput {
    /// Build a primary-button input with no modifiers.
    #[must_use]
    pub fn new(pointer_id: i32, position: Point) -> Self {
        Self {
            pointer_id,
            position,
            button: PointerButton::Primary,
            modifiers: ModifierSnapshot::none(),
        }
    }

    #[must_use]
    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: ModifierSnapshot) -> Self {
        self.modifiers = modifiers;
        self
    }
}

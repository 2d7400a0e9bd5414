#![forbid(unsafe_code)]

//! Mover configuration and injected interaction strategies.
//!
//! The plain-data half ([`MoverConfig`]) is an immutable snapshot replaced
//! wholesale through [`MoverConfigUpdate`]: `Some` fields override, `None`
//! fields keep the previous value (shallow merge). The strategy half
//! (`on_armed`, `can_drag`) follows the same merge rule but lives outside
//! `MoverConfig` so the snapshot stays `Clone + PartialEq + serde`.

use crate::PointerInput;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Callback invoked when a drag session is armed (pointer down accepted).
pub type ArmedCallback = Box<dyn FnMut()>;

/// Predicate gating session start; absent means "always draggable".
pub type DragPredicate = Box<dyn Fn(&PointerInput) -> bool>;

/// Default Manhattan displacement (px) before a session starts dragging.
pub const DEFAULT_DRAG_THRESHOLD: f64 = 5.0;

/// Which edge of the positioning context a panel originates from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OriginEdge {
    #[default]
    Auto,
    Start,
    End,
}

/// Per-axis origin hint for the managed panel.
///
/// The Mover carries this for its host (initial placement is the host's job);
/// it never reads it during a drag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoverOrigin {
    pub x: OriginEdge,
    pub y: OriginEdge,
}

/// Plain-data Mover configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoverConfig {
    /// Placement hint for the host surface.
    pub origin: MoverOrigin,
    /// Manhattan displacement (px) required to start dragging. A non-positive
    /// value degenerates to "dragging from the first move"; that is defined
    /// behavior, not an error, so no validation is performed.
    pub drag_threshold: f64,
}

impl Default for MoverConfig {
    fn default() -> Self {
        Self {
            origin: MoverOrigin::default(),
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
        }
    }
}

/// Partial configuration for `Mover::configure`; every field optional.
#[derive(Default)]
pub struct MoverConfigUpdate {
    pub origin: Option<MoverOrigin>,
    pub drag_threshold: Option<f64>,
    pub on_armed: Option<ArmedCallback>,
    pub can_drag: Option<DragPredicate>,
}

impl MoverConfigUpdate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn origin(mut self, origin: MoverOrigin) -> Self {
        self.origin = Some(origin);
        self
    }

    #[must_use]
    pub fn drag_threshold(mut self, threshold: f64) -> Self {
        self.drag_threshold = Some(threshold);
        self
    }

    #[must_use]
    pub fn on_armed(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_armed = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn can_drag(mut self, predicate: impl Fn(&PointerInput) -> bool + 'static) -> Self {
        self.can_drag = Some(Box::new(predicate));
        self
    }
}

impl fmt::Debug for MoverConfigUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MoverConfigUpdate")
            .field("origin", &self.origin)
            .field("drag_threshold", &self.drag_threshold)
            .field("on_armed", &self.on_armed.is_some())
            .field("can_drag", &self.can_drag.is_some())
            .finish()
    }
}

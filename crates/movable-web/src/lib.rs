#![forbid(unsafe_code)]

//! Browser half of `movable`.
//!
//! [`movable_core::Mover`] is platform-independent; this crate supplies the
//! DOM plumbing around it:
//!
//! - `DomElement`: `MovableElement` over a [`web_sys::HtmlElement`] (position
//!   writes, pointer capture, `touch-action: none`);
//! - [`DomMover`]: owns the `pointerdown` element listener and the
//!   document-level move/up/cancel listeners as matched closure pairs, so
//!   repeated enable/disable cycles can never leak a handler;
//! - [`HostSurface`]: the isolated rendering container (shadow root) that
//!   floating panels live in, with style injection and show/hide/dispose.
//!
//! All DOM-touching modules are gated to `wasm32`; the crate still builds on
//! native targets so the pure helpers in [`style`] stay testable there.

pub mod style;

#[cfg(target_arch = "wasm32")]
pub mod dom_mover;
#[cfg(target_arch = "wasm32")]
pub mod element;
#[cfg(target_arch = "wasm32")]
pub mod host;

#[cfg(target_arch = "wasm32")]
pub use dom_mover::DomMover;
#[cfg(target_arch = "wasm32")]
pub use element::DomElement;
#[cfg(target_arch = "wasm32")]
pub use host::HostSurface;

use std::fmt;

/// DOM-side failures surfaced to callers.
///
/// Pointer-capture denial is deliberately *not* represented here; the Mover
/// treats it as defined best-effort behavior, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomMoverError {
    /// No global `window` object (not running in a browsing context).
    NoWindow,
    /// The window has no document.
    NoDocument,
    /// `document.body` is not available yet.
    NoBody,
    /// A DOM call threw; `op` names the operation, `message` the thrown value.
    Dom { op: &'static str, message: String },
}

impl fmt::Display for DomMoverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "no global window object"),
            Self::NoDocument => write!(f, "window has no document"),
            Self::NoBody => write!(f, "document has no body"),
            Self::Dom { op, message } => write!(f, "dom operation {op} failed: {message}"),
        }
    }
}

impl std::error::Error for DomMoverError {}

#[cfg(target_arch = "wasm32")]
pub(crate) fn dom_error(op: &'static str, err: &wasm_bindgen::JsValue) -> DomMoverError {
    DomMoverError::Dom {
        op,
        message: format!("{err:?}"),
    }
}

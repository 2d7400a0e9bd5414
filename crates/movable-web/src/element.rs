#![forbid(unsafe_code)]

//! `MovableElement` for real DOM elements.
//!
//! [`DomElement`] is a thin newtype over [`web_sys::HtmlElement`]; style and
//! capture failures are logged rather than propagated since a drag in
//! progress has no caller to hand an error to.

use crate::style::px;
use movable_core::{MovableElement, Point};
use web_sys::HtmlElement;

#[derive(Debug, Clone)]
pub struct DomElement {
    inner: HtmlElement,
}

impl DomElement {
    #[must_use]
    pub fn new(inner: HtmlElement) -> Self {
        Self { inner }
    }

    #[must_use]
    pub fn html_element(&self) -> &HtmlElement {
        &self.inner
    }
}

impl From<HtmlElement> for DomElement {
    fn from(inner: HtmlElement) -> Self {
        Self::new(inner)
    }
}

impl MovableElement for DomElement {
    fn top_left(&self) -> Point {
        let rect = self.inner.get_bounding_client_rect();
        Point::new(rect.left(), rect.top())
    }

    fn set_position(&mut self, left: f64, top: f64) {
        let style = self.inner.style();
        if style.set_property("left", &px(left)).is_err()
            || style.set_property("top", &px(top)).is_err()
        {
            tracing::warn!(left, top, "failed to write element position");
        }
    }

    fn set_pointer_capture(&mut self, pointer_id: i32) -> bool {
        self.inner.set_pointer_capture(pointer_id).is_ok()
    }

    fn release_pointer_capture(&mut self, pointer_id: i32) {
        if self.inner.release_pointer_capture(pointer_id).is_err() {
            tracing::warn!(pointer_id, "failed to release pointer capture");
        }
    }

    fn disable_touch_panning(&mut self) {
        if self.inner.style().set_property("touch-action", "none").is_err() {
            tracing::warn!("failed to disable touch panning");
        }
    }
}

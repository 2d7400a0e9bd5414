#![forbid(unsafe_code)]

//! The element seam: everything the Mover needs from the platform element,
//! and nothing more.

use crate::Point;

/// A positionable element the Mover can reposition and capture pointers on.
///
/// Preconditions on the implementor, not enforced here:
/// - `set_position` places the element via left/top pixel offsets relative to
///   an ancestor positioning context established by the caller;
/// - the element supports pointer-capture semantics keyed by pointer id;
/// - the element stays attached to its document for the duration of a session
///   (removal mid-session is a precondition violation with undefined effect).
pub trait MovableElement {
    /// Current top-left corner of the element's bounding box, in the same
    /// client coordinate space as incoming pointer positions.
    fn top_left(&self) -> Point;

    /// Place the element at `left`/`top` pixels.
    fn set_position(&mut self, left: f64, top: f64);

    /// Request pointer capture for `pointer_id`. Returns `false` when the
    /// platform denies the request; the Mover then continues the drag
    /// uncaptured, best-effort.
    fn set_pointer_capture(&mut self, pointer_id: i32) -> bool;

    /// Release a previously acquired capture. Only called when the matching
    /// `set_pointer_capture` returned `true`.
    fn release_pointer_capture(&mut self, pointer_id: i32);

    /// Disable native touch scrolling/panning that would otherwise compete
    /// with manual dragging (`touch-action: none` on the web).
    fn disable_touch_panning(&mut self);
}

/// Recording test double for [`MovableElement`].
///
/// Every call lands in a public ledger so suites can assert exactly what a
/// dispatch did to the element. `set_position` also moves the reported
/// bounding box, mirroring a browser element whose positioning context sits
/// at the viewport origin.
#[derive(Debug, Default)]
pub struct MockElement {
    top_left: Point,
    /// Last position written via `set_position`, if any.
    pub position: Option<(f64, f64)>,
    /// Every `set_position` call in order.
    pub position_writes: Vec<(f64, f64)>,
    /// Pointer ids passed to `set_pointer_capture`.
    pub capture_calls: Vec<i32>,
    /// Pointer ids passed to `release_pointer_capture`.
    pub release_calls: Vec<i32>,
    /// Pointer id currently captured, if any.
    pub captured: Option<i32>,
    /// When true, capture requests are denied.
    pub deny_capture: bool,
    /// Whether `disable_touch_panning` has been called.
    pub touch_panning_disabled: bool,
}

impl MockElement {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A mock whose bounding box starts at the given corner.
    #[must_use]
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            top_left: Point::new(x, y),
            ..Self::default()
        }
    }

    /// A mock that denies every pointer-capture request.
    #[must_use]
    pub fn denying_capture(x: f64, y: f64) -> Self {
        Self {
            top_left: Point::new(x, y),
            deny_capture: true,
            ..Self::default()
        }
    }
}

impl MovableElement for MockElement {
    fn top_left(&self) -> Point {
        self.top_left
    }

    fn set_position(&mut self, left: f64, top: f64) {
        self.position = Some((left, top));
        self.position_writes.push((left, top));
        self.top_left = Point::new(left, top);
    }

    fn set_pointer_capture(&mut self, pointer_id: i32) -> bool {
        self.capture_calls.push(pointer_id);
        if self.deny_capture {
            return false;
        }
        self.captured = Some(pointer_id);
        true
    }

    fn release_pointer_capture(&mut self, pointer_id: i32) {
        self.release_calls.push(pointer_id);
        if self.captured == Some(pointer_id) {
            self.captured = None;
        }
    }

    fn disable_touch_panning(&mut self) {
        self.touch_panning_disabled = true;
    }
}

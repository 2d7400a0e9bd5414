#![forbid(unsafe_code)]

//! DOM listener lifecycle around the core Mover.
//!
//! [`DomMover`] owns four closures for the four event names it ever touches:
//! one `pointerdown` listener on the managed element (attached by
//! [`enable`](DomMover::enable)) and three document-level listeners
//! (`pointermove` / `pointerup` / `pointercancel`) attached around an
//! arm-eligible pointer-down: they are in place before the `on_armed`
//! callback runs and come back off when the down is rejected. Every attach
//! has exactly one detach under the same event name and
//! the same closure, so repeated enable/disable cycles and interrupted
//! sessions can never leak a handler; dropping the `DomMover` runs the same
//! teardown.
//!
//! Re-entrancy: the configured `on_armed` callback runs while the Mover is
//! borrowed and must not call back into this `DomMover` synchronously.

use crate::element::DomElement;
use crate::{DomMoverError, dom_error};
use movable_core::{
    ModifierSnapshot, Mover, MoverConfigUpdate, MoverEffect, Point, PointerButton, PointerInput,
};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use tracing::{debug, trace, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, HtmlElement, PointerEvent};

const POINTER_DOWN: &str = "pointerdown";
const POINTER_MOVE: &str = "pointermove";
const POINTER_UP: &str = "pointerup";
const POINTER_CANCEL: &str = "pointercancel";

type PointerClosure = Closure<dyn FnMut(PointerEvent)>;

/// Distill a DOM pointer event into core input.
///
/// The pointer id is carried through signed and untouched (negative ids are
/// valid, some engines assign them to pen/touch pointers); `button` is `-1`
/// on move events, which folds into `Primary` (only pointer-down consults
/// it).
fn pointer_input(event: &PointerEvent) -> PointerInput {
    let position = Point::new(f64::from(event.client_x()), f64::from(event.client_y()));
    let button = match event.button() {
        1 => PointerButton::Middle,
        2 => PointerButton::Secondary,
        _ => PointerButton::Primary,
    };
    let modifiers = ModifierSnapshot {
        shift: event.shift_key(),
        alt: event.alt_key(),
        ctrl: event.ctrl_key(),
        meta: event.meta_key(),
    };
    PointerInput {
        pointer_id: event.pointer_id(),
        position,
        button,
        modifiers,
    }
}

struct MoverState {
    mover: RefCell<Mover<DomElement>>,
    element: HtmlElement,
    document: Document,
    on_down: PointerClosure,
    on_move: PointerClosure,
    on_up: PointerClosure,
    on_cancel: PointerClosure,
    down_attached: Cell<bool>,
    session_attached: Cell<bool>,
}

fn pointer_closure(
    weak: Weak<MoverState>,
    handler: fn(&MoverState, &PointerEvent),
) -> PointerClosure {
    Closure::new(move |event: PointerEvent| {
        if let Some(state) = weak.upgrade() {
            handler(&state, &event);
        }
    })
}

impl MoverState {
    fn handle_down(&self, event: &PointerEvent) {
        let input = pointer_input(event);
        // Attach ahead of the dispatch: when the down arms, the configured
        // on_armed callback must already see the document observers in place.
        let may_arm = {
            let mover = self.mover.borrow();
            mover.is_enabled() && mover.active_pointer_id().is_none()
        };
        if may_arm {
            self.attach_session_observers();
        }
        let effect = self.mover.borrow_mut().pointer_down(&input);
        trace!(pointer_id = input.pointer_id, ?effect, "pointerdown");
        if may_arm && !matches!(effect, MoverEffect::Armed { .. }) {
            // Predicate-rejected down: no session, take the observers back off.
            self.detach_session_observers();
        }
    }

    fn handle_move(&self, event: &PointerEvent) {
        let input = pointer_input(event);
        let mut mover = self.mover.borrow_mut();
        // Suppress text selection / native drag for every session move,
        // dragging or not.
        if mover.active_pointer_id() == Some(input.pointer_id) {
            event.prevent_default();
        }
        let effect = mover.pointer_move(&input);
        trace!(pointer_id = input.pointer_id, ?effect, "pointermove");
    }

    fn handle_up(&self, event: &PointerEvent) {
        self.handle_terminal(event, false);
    }

    fn handle_cancel(&self, event: &PointerEvent) {
        self.handle_terminal(event, true);
    }

    fn handle_terminal(&self, event: &PointerEvent, cancel: bool) {
        let input = pointer_input(event);
        let effect = {
            let mut mover = self.mover.borrow_mut();
            if cancel {
                mover.pointer_cancel(&input)
            } else {
                mover.pointer_up(&input)
            }
        };
        trace!(pointer_id = input.pointer_id, ?effect, "pointer session end");
        if matches!(
            effect,
            MoverEffect::Settled { .. } | MoverEffect::Canceled { .. }
        ) {
            self.detach_session_observers();
        }
    }

    fn session_pairs(&self) -> [(&'static str, &PointerClosure); 3] {
        [
            (POINTER_MOVE, &self.on_move),
            (POINTER_UP, &self.on_up),
            (POINTER_CANCEL, &self.on_cancel),
        ]
    }

    fn attach_pointer_down(&self) -> Result<(), DomMoverError> {
        if self.down_attached.get() {
            return Ok(());
        }
        self.element
            .add_event_listener_with_callback(POINTER_DOWN, self.on_down.as_ref().unchecked_ref())
            .map_err(|err| dom_error("addEventListener", &err))?;
        self.down_attached.set(true);
        Ok(())
    }

    fn detach_pointer_down(&self) {
        if !self.down_attached.replace(false) {
            return;
        }
        if let Err(err) = self
            .element
            .remove_event_listener_with_callback(POINTER_DOWN, self.on_down.as_ref().unchecked_ref())
        {
            warn!(?err, "failed to remove pointerdown listener");
        }
    }

    fn attach_session_observers(&self) {
        if self.session_attached.replace(true) {
            return;
        }
        for (name, closure) in self.session_pairs() {
            if let Err(err) = self
                .document
                .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
            {
                warn!(event = name, ?err, "failed to attach session observer");
            }
        }
    }

    fn detach_session_observers(&self) {
        if !self.session_attached.replace(false) {
            return;
        }
        for (name, closure) in self.session_pairs() {
            if let Err(err) = self
                .document
                .remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
            {
                warn!(event = name, ?err, "failed to detach session observer");
            }
        }
    }

    fn teardown(&self) {
        self.detach_pointer_down();
        self.detach_session_observers();
        let effect = self.mover.borrow_mut().disable();
        debug!(?effect, "dom mover disabled");
    }
}

/// Drag controller bound to a DOM element.
pub struct DomMover {
    state: Rc<MoverState>,
}

impl DomMover {
    /// Bind to `element` with the default configuration.
    pub fn new(element: HtmlElement) -> Result<Self, DomMoverError> {
        Self::with_config(element, MoverConfigUpdate::new())
    }

    /// Bind to `element` with a partial configuration merged over defaults.
    ///
    /// Disables the element's native touch panning immediately; no listener
    /// is attached until [`enable`](Self::enable).
    pub fn with_config(
        element: HtmlElement,
        update: MoverConfigUpdate,
    ) -> Result<Self, DomMoverError> {
        let document = web_sys::window()
            .ok_or(DomMoverError::NoWindow)?
            .document()
            .ok_or(DomMoverError::NoDocument)?;
        let mover = Mover::with_config(DomElement::new(element.clone()), update);
        let state = Rc::new_cyclic(|weak: &Weak<MoverState>| MoverState {
            mover: RefCell::new(mover),
            element,
            document,
            on_down: pointer_closure(weak.clone(), MoverState::handle_down),
            on_move: pointer_closure(weak.clone(), MoverState::handle_move),
            on_up: pointer_closure(weak.clone(), MoverState::handle_up),
            on_cancel: pointer_closure(weak.clone(), MoverState::handle_cancel),
            down_attached: Cell::new(false),
            session_attached: Cell::new(false),
        });
        Ok(Self { state })
    }

    /// Register the `pointerdown` listener on the managed element. Idempotent.
    pub fn enable(&self) -> Result<(), DomMoverError> {
        if self.state.mover.borrow().is_enabled() {
            return Ok(());
        }
        self.state.attach_pointer_down()?;
        let effect = self.state.mover.borrow_mut().enable();
        debug!(?effect, "dom mover enabled");
        Ok(())
    }

    /// Remove every listener and discard any in-progress session (releasing
    /// pointer capture if held). Safe to call at any time.
    pub fn disable(&self) {
        self.state.teardown();
    }

    /// Shallow-merge `update` over the current configuration.
    pub fn configure(&self, update: MoverConfigUpdate) {
        self.state.mover.borrow_mut().configure(update);
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.state.mover.borrow().is_enabled()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state.mover.borrow().is_dragging()
    }

    /// Pointer id of the open session, if any.
    #[must_use]
    pub fn active_pointer_id(&self) -> Option<i32> {
        self.state.mover.borrow().active_pointer_id()
    }

    /// The managed element.
    #[must_use]
    pub fn element(&self) -> &HtmlElement {
        &self.state.element
    }
}

impl Drop for DomMover {
    fn drop(&mut self) {
        self.state.teardown();
    }
}

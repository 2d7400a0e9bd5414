#![forbid(unsafe_code)]

//! The drag lifecycle machine.
//!
//! [`Mover`] owns one managed element and converts pointer event sequences
//! into position updates. Every dispatch returns a [`MoverEffect`] so hosts
//! and tests can observe exactly what the event did; silently-discarded
//! events come back as [`MoverEffect::Ignored`] with an explicit reason
//! instead of an error.

use crate::config::{ArmedCallback, DragPredicate, MoverConfig, MoverConfigUpdate};
use crate::element::MovableElement;
use crate::{Point, PointerInput};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a session ended without settling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CancelReason {
    /// The platform delivered a pointer-cancel for the session's pointer.
    PointerCancel,
    /// `disable()` tore the session down.
    Disabled,
}

/// Why an incoming event was discarded without touching the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoredReason {
    /// `enable()` while already enabled; registration stays single.
    AlreadyEnabled,
    /// `disable()` while already disabled and idle.
    AlreadyDisabled,
    /// Pointer-down while the Mover is disabled.
    NotEnabled,
    /// Pointer-down while a session is already open.
    SessionActive,
    /// The `can_drag` predicate rejected the pointer-down.
    PredicateRejected,
    /// Move/up/cancel with no open session.
    NoSession,
    /// Event pointer id does not match the session's pointer id.
    PointerMismatch,
    /// Armed move below the drag threshold; jitter absorbed.
    BelowThreshold,
}

/// What one dispatched event did.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum MoverEffect {
    /// Pointer-down observation is now active.
    Enabled,
    /// Pointer-down observation removed; no session was open.
    Disabled,
    /// A session armed; document-level move/up/cancel observation should now
    /// be attached by the host.
    Armed { pointer_id: i32, start: Point },
    /// The threshold was crossed: offset captured, capture requested, element
    /// repositioned for this event. `capture_acquired` is `false` when the
    /// platform denied capture and the drag continues uncaptured.
    DragStarted {
        pointer_id: i32,
        offset: Point,
        capture_acquired: bool,
        left: f64,
        top: f64,
    },
    /// The element was repositioned while dragging.
    Moved { pointer_id: i32, left: f64, top: f64 },
    /// The session ended on pointer-up; host observation should detach.
    Settled { pointer_id: i32 },
    /// The session ended without settling; host observation should detach.
    Canceled {
        pointer_id: i32,
        reason: CancelReason,
    },
    /// The event was discarded.
    Ignored { reason: IgnoredReason },
}

/// Session phase. Dragging carries its data so it can never exist
/// half-initialized.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Armed,
    Dragging {
        /// Vector from the session start to the box top-left at crossing.
        offset: Point,
        /// Whether pointer capture was actually acquired.
        capture_held: bool,
    },
}

/// One bounded pointer-down → pointer-up/cancel/disable interval.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Session {
    pointer_id: i32,
    start: Point,
    phase: Phase,
}

/// Pointer-driven drag controller for one managed element.
pub struct Mover<E: MovableElement> {
    element: E,
    config: MoverConfig,
    on_armed: Option<ArmedCallback>,
    can_drag: Option<DragPredicate>,
    enabled: bool,
    session: Option<Session>,
}

impl<E: MovableElement> fmt::Debug for Mover<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mover")
            .field("enabled", &self.enabled)
            .field("active_pointer_id", &self.active_pointer_id())
            .field("dragging", &self.is_dragging())
            .field("config", &self.config)
            .finish()
    }
}

impl<E: MovableElement> Mover<E> {
    /// Bind a Mover to `element` with the default configuration and disable
    /// the element's native touch panning. No session starts and no
    /// observation is attached until [`enable`](Self::enable).
    pub fn new(element: E) -> Self {
        let mut element = element;
        element.disable_touch_panning();
        Self {
            element,
            config: MoverConfig::default(),
            on_armed: None,
            can_drag: None,
            enabled: false,
            session: None,
        }
    }

    /// Bind with a partial configuration merged over the defaults.
    pub fn with_config(element: E, update: MoverConfigUpdate) -> Self {
        let mut mover = Self::new(element);
        mover.configure(update);
        mover
    }

    /// Shallow-merge `update` over the current configuration and strategies:
    /// `Some` fields override, `None` fields keep their previous value.
    ///
    /// An in-progress session keeps its captured start position and offset;
    /// only subsequent threshold checks see a new `drag_threshold`.
    pub fn configure(&mut self, update: MoverConfigUpdate) {
        if let Some(origin) = update.origin {
            self.config.origin = origin;
        }
        if let Some(threshold) = update.drag_threshold {
            self.config.drag_threshold = threshold;
        }
        if let Some(callback) = update.on_armed {
            self.on_armed = Some(callback);
        }
        if let Some(predicate) = update.can_drag {
            self.can_drag = Some(predicate);
        }
    }

    /// Begin listening for session-initiating pointer-downs.
    ///
    /// Guarded: a second `enable()` without an intervening `disable()` is a
    /// no-op, so host-side registration can stay a matched pair.
    pub fn enable(&mut self) -> MoverEffect {
        if self.enabled {
            return MoverEffect::Ignored {
                reason: IgnoredReason::AlreadyEnabled,
            };
        }
        self.enabled = true;
        #[cfg(feature = "tracing")]
        tracing::debug!("mover enabled");
        MoverEffect::Enabled
    }

    /// Stop listening and tear down any in-progress session through the same
    /// cleanup path as pointer-up/cancel. Safe to call when idle.
    pub fn disable(&mut self) -> MoverEffect {
        if !self.enabled && self.session.is_none() {
            return MoverEffect::Ignored {
                reason: IgnoredReason::AlreadyDisabled,
            };
        }
        self.enabled = false;
        if let Some(session) = self.session.take() {
            self.release_if_held(&session);
            #[cfg(feature = "tracing")]
            tracing::debug!(pointer_id = session.pointer_id, "mover disabled mid-session");
            return MoverEffect::Canceled {
                pointer_id: session.pointer_id,
                reason: CancelReason::Disabled,
            };
        }
        #[cfg(feature = "tracing")]
        tracing::debug!("mover disabled");
        MoverEffect::Disabled
    }

    /// Handle a pointer-down on the managed element (session entry).
    pub fn pointer_down(&mut self, input: &PointerInput) -> MoverEffect {
        if !self.enabled {
            return MoverEffect::Ignored {
                reason: IgnoredReason::NotEnabled,
            };
        }
        if self.session.is_some() {
            return MoverEffect::Ignored {
                reason: IgnoredReason::SessionActive,
            };
        }
        if let Some(predicate) = self.can_drag.as_ref()
            && !predicate(input)
        {
            return MoverEffect::Ignored {
                reason: IgnoredReason::PredicateRejected,
            };
        }

        self.session = Some(Session {
            pointer_id: input.pointer_id,
            start: input.position,
            phase: Phase::Armed,
        });
        if let Some(callback) = self.on_armed.as_mut() {
            callback();
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(pointer_id = input.pointer_id, "session armed");
        MoverEffect::Armed {
            pointer_id: input.pointer_id,
            start: input.position,
        }
    }

    /// Handle a pointer-move. Hosts must suppress the platform default action
    /// for every move whose pointer id matches the open session (see
    /// [`active_pointer_id`](Self::active_pointer_id)), including
    /// below-threshold moves.
    pub fn pointer_move(&mut self, input: &PointerInput) -> MoverEffect {
        let Some(session) = self.session.as_mut() else {
            return MoverEffect::Ignored {
                reason: IgnoredReason::NoSession,
            };
        };
        if session.pointer_id != input.pointer_id {
            return MoverEffect::Ignored {
                reason: IgnoredReason::PointerMismatch,
            };
        }

        match session.phase {
            Phase::Armed => {
                let displacement = input.position.manhattan_distance(session.start);
                if displacement < self.config.drag_threshold {
                    return MoverEffect::Ignored {
                        reason: IgnoredReason::BelowThreshold,
                    };
                }

                let box_top_left = self.element.top_left();
                let offset = Point::new(
                    session.start.x - box_top_left.x,
                    session.start.y - box_top_left.y,
                );
                let capture_held = self.element.set_pointer_capture(session.pointer_id);
                session.phase = Phase::Dragging {
                    offset,
                    capture_held,
                };
                let left = input.position.x - offset.x;
                let top = input.position.y - offset.y;
                self.element.set_position(left, top);
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    pointer_id = input.pointer_id,
                    capture_held,
                    "drag started"
                );
                MoverEffect::DragStarted {
                    pointer_id: input.pointer_id,
                    offset,
                    capture_acquired: capture_held,
                    left,
                    top,
                }
            }
            Phase::Dragging { offset, .. } => {
                let left = input.position.x - offset.x;
                let top = input.position.y - offset.y;
                self.element.set_position(left, top);
                MoverEffect::Moved {
                    pointer_id: input.pointer_id,
                    left,
                    top,
                }
            }
        }
    }

    /// Handle a pointer-up (normal session exit).
    pub fn pointer_up(&mut self, input: &PointerInput) -> MoverEffect {
        match self.finish_session(input.pointer_id) {
            Some(pointer_id) => MoverEffect::Settled { pointer_id },
            None => self.foreign_terminal_effect(input.pointer_id),
        }
    }

    /// Handle a pointer-cancel (interrupted session exit).
    pub fn pointer_cancel(&mut self, input: &PointerInput) -> MoverEffect {
        match self.finish_session(input.pointer_id) {
            Some(pointer_id) => MoverEffect::Canceled {
                pointer_id,
                reason: CancelReason::PointerCancel,
            },
            None => self.foreign_terminal_effect(input.pointer_id),
        }
    }

    /// Current configuration snapshot.
    #[must_use]
    pub const fn config(&self) -> &MoverConfig {
        &self.config
    }

    /// Whether pointer-down observation is active.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Pointer id of the open session, if any.
    #[must_use]
    pub fn active_pointer_id(&self) -> Option<i32> {
        self.session.as_ref().map(|session| session.pointer_id)
    }

    /// Whether the open session has crossed the drag threshold.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| matches!(session.phase, Phase::Dragging { .. }))
    }

    #[must_use]
    pub const fn element(&self) -> &E {
        &self.element
    }

    pub const fn element_mut(&mut self) -> &mut E {
        &mut self.element
    }

    /// Give the element back, discarding any session state.
    #[must_use]
    pub fn into_element(self) -> E {
        self.element
    }

    /// The single terminal cleanup path shared by up, cancel and `disable()`:
    /// release capture if held, destroy the session atomically. Returns the
    /// session's pointer id when a session for `pointer_id` was torn down.
    fn finish_session(&mut self, pointer_id: i32) -> Option<i32> {
        match self.session.take() {
            None => None,
            Some(session) if session.pointer_id != pointer_id => {
                // Foreign pointer: put the session back untouched.
                self.session = Some(session);
                None
            }
            Some(session) => {
                self.release_if_held(&session);
                #[cfg(feature = "tracing")]
                tracing::trace!(pointer_id, "session ended");
                Some(session.pointer_id)
            }
        }
    }

    fn release_if_held(&mut self, session: &Session) {
        if let Phase::Dragging {
            capture_held: true, ..
        } = session.phase
        {
            self.element.release_pointer_capture(session.pointer_id);
        }
    }

    fn foreign_terminal_effect(&self, pointer_id: i32) -> MoverEffect {
        let reason = match self.session {
            Some(ref session) if session.pointer_id != pointer_id => {
                IgnoredReason::PointerMismatch
            }
            _ => IgnoredReason::NoSession,
        };
        MoverEffect::Ignored { reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PointerButton;
    use crate::element::MockElement;
    use std::cell::Cell;
    use std::rc::Rc;

    fn down(id: i32, x: f64, y: f64) -> PointerInput {
        PointerInput::new(id, Point::new(x, y))
    }

    fn mover_at(x: f64, y: f64) -> Mover<MockElement> {
        let mut mover = Mover::new(MockElement::at(x, y));
        assert_eq!(mover.enable(), MoverEffect::Enabled);
        mover
    }

    #[test]
    fn construction_disables_touch_panning_without_arming() {
        let mover = Mover::new(MockElement::new());
        assert!(mover.element().touch_panning_disabled);
        assert!(!mover.is_enabled());
        assert_eq!(mover.active_pointer_id(), None);
    }

    #[test]
    fn pointer_down_before_enable_is_ignored() {
        let mut mover = Mover::new(MockElement::new());
        assert_eq!(
            mover.pointer_down(&down(1, 0.0, 0.0)),
            MoverEffect::Ignored {
                reason: IgnoredReason::NotEnabled
            }
        );
    }

    #[test]
    fn double_enable_is_a_guarded_noop() {
        let mut mover = mover_at(0.0, 0.0);
        assert_eq!(
            mover.enable(),
            MoverEffect::Ignored {
                reason: IgnoredReason::AlreadyEnabled
            }
        );
    }

    #[test]
    fn pointer_down_arms_and_invokes_callback() {
        let armed = Rc::new(Cell::new(0u32));
        let armed_probe = Rc::clone(&armed);
        let mut mover = Mover::with_config(
            MockElement::at(50.0, 60.0),
            MoverConfigUpdate::new().on_armed(move || armed_probe.set(armed_probe.get() + 1)),
        );
        mover.enable();

        let effect = mover.pointer_down(&down(7, 100.0, 100.0));
        assert_eq!(
            effect,
            MoverEffect::Armed {
                pointer_id: 7,
                start: Point::new(100.0, 100.0)
            }
        );
        assert_eq!(armed.get(), 1);
        assert_eq!(mover.active_pointer_id(), Some(7));
        assert!(!mover.is_dragging());
    }

    #[test]
    fn second_pointer_down_is_ignored_while_session_open() {
        let mut mover = mover_at(0.0, 0.0);
        mover.pointer_down(&down(1, 10.0, 10.0));
        assert_eq!(
            mover.pointer_down(&down(2, 20.0, 20.0)),
            MoverEffect::Ignored {
                reason: IgnoredReason::SessionActive
            }
        );
        assert_eq!(mover.active_pointer_id(), Some(1));
    }

    #[test]
    fn rejected_predicate_never_arms_and_later_events_are_inert() {
        let mut mover = Mover::with_config(
            MockElement::at(0.0, 0.0),
            MoverConfigUpdate::new().can_drag(|input| input.button == PointerButton::Primary),
        );
        mover.enable();

        let effect =
            mover.pointer_down(&down(4, 5.0, 5.0).with_button(PointerButton::Secondary));
        assert_eq!(
            effect,
            MoverEffect::Ignored {
                reason: IgnoredReason::PredicateRejected
            }
        );
        assert_eq!(mover.active_pointer_id(), None);
        assert_eq!(
            mover.pointer_move(&down(4, 50.0, 50.0)),
            MoverEffect::Ignored {
                reason: IgnoredReason::NoSession
            }
        );
        assert_eq!(
            mover.pointer_up(&down(4, 50.0, 50.0)),
            MoverEffect::Ignored {
                reason: IgnoredReason::NoSession
            }
        );
        assert!(mover.element().position.is_none());
    }

    #[test]
    fn below_threshold_moves_never_touch_the_element() {
        let mut mover = mover_at(80.0, 90.0);
        mover.pointer_down(&down(1, 100.0, 100.0));

        // Manhattan distances 3 and 4, threshold 5.
        for (x, y) in [(102.0, 101.0), (98.0, 102.0)] {
            assert_eq!(
                mover.pointer_move(&down(1, x, y)),
                MoverEffect::Ignored {
                    reason: IgnoredReason::BelowThreshold
                }
            );
        }
        assert!(mover.element().position.is_none());
        assert!(mover.element().capture_calls.is_empty());
        assert!(!mover.is_dragging());
    }

    #[test]
    fn threshold_crossing_captures_offset_and_pointer_exactly_once() {
        let mut mover = mover_at(80.0, 90.0);
        mover.pointer_down(&down(1, 100.0, 100.0));

        // Distance 5 == threshold: crossing happens on this move.
        let effect = mover.pointer_move(&down(1, 104.0, 101.0));
        assert_eq!(
            effect,
            MoverEffect::DragStarted {
                pointer_id: 1,
                offset: Point::new(20.0, 10.0),
                capture_acquired: true,
                left: 84.0,
                top: 91.0,
            }
        );
        assert!(mover.is_dragging());
        assert_eq!(mover.element().capture_calls, vec![1]);

        // Further moves reposition without re-capturing.
        let effect = mover.pointer_move(&down(1, 110.0, 105.0));
        assert_eq!(
            effect,
            MoverEffect::Moved {
                pointer_id: 1,
                left: 90.0,
                top: 95.0
            }
        );
        assert_eq!(mover.element().capture_calls, vec![1]);
    }

    #[test]
    fn moves_with_foreign_pointer_id_are_ignored() {
        let mut mover = mover_at(0.0, 0.0);
        mover.pointer_down(&down(1, 0.0, 0.0));
        assert_eq!(
            mover.pointer_move(&down(2, 100.0, 100.0)),
            MoverEffect::Ignored {
                reason: IgnoredReason::PointerMismatch
            }
        );
        assert!(mover.element().position.is_none());
    }

    #[test]
    fn pointer_up_releases_held_capture_and_clears_session() {
        let mut mover = mover_at(0.0, 0.0);
        mover.pointer_down(&down(1, 10.0, 10.0));
        mover.pointer_move(&down(1, 30.0, 10.0));
        assert!(mover.is_dragging());

        assert_eq!(
            mover.pointer_up(&down(1, 30.0, 10.0)),
            MoverEffect::Settled { pointer_id: 1 }
        );
        assert_eq!(mover.element().release_calls, vec![1]);
        assert_eq!(mover.active_pointer_id(), None);
    }

    #[test]
    fn pointer_up_without_drag_settles_without_release() {
        let mut mover = mover_at(0.0, 0.0);
        mover.pointer_down(&down(1, 10.0, 10.0));
        assert_eq!(
            mover.pointer_up(&down(1, 11.0, 10.0)),
            MoverEffect::Settled { pointer_id: 1 }
        );
        assert!(mover.element().release_calls.is_empty());
    }

    #[test]
    fn pointer_cancel_carries_cancel_reason() {
        let mut mover = mover_at(0.0, 0.0);
        mover.pointer_down(&down(1, 10.0, 10.0));
        mover.pointer_move(&down(1, 40.0, 10.0));
        assert_eq!(
            mover.pointer_cancel(&down(1, 40.0, 10.0)),
            MoverEffect::Canceled {
                pointer_id: 1,
                reason: CancelReason::PointerCancel
            }
        );
        assert_eq!(mover.element().release_calls, vec![1]);
    }

    #[test]
    fn pointer_up_for_foreign_pointer_keeps_session_open() {
        let mut mover = mover_at(0.0, 0.0);
        mover.pointer_down(&down(1, 10.0, 10.0));
        assert_eq!(
            mover.pointer_up(&down(2, 10.0, 10.0)),
            MoverEffect::Ignored {
                reason: IgnoredReason::PointerMismatch
            }
        );
        assert_eq!(mover.active_pointer_id(), Some(1));
    }

    #[test]
    fn denied_capture_continues_uncaptured_and_never_releases() {
        let mut mover = Mover::new(MockElement::denying_capture(0.0, 0.0));
        mover.enable();
        mover.pointer_down(&down(1, 10.0, 10.0));

        let effect = mover.pointer_move(&down(1, 20.0, 10.0));
        assert!(matches!(
            effect,
            MoverEffect::DragStarted {
                capture_acquired: false,
                ..
            }
        ));
        assert!(mover.is_dragging());

        // Dragging still repositions.
        mover.pointer_move(&down(1, 25.0, 12.0));
        assert_eq!(mover.element().position, Some((15.0, 2.0)));

        mover.pointer_up(&down(1, 25.0, 12.0));
        assert!(mover.element().release_calls.is_empty());
    }

    #[test]
    fn disable_mid_drag_cancels_releases_and_stops_updates() {
        let mut mover = mover_at(0.0, 0.0);
        mover.pointer_down(&down(1, 10.0, 10.0));
        mover.pointer_move(&down(1, 30.0, 10.0));

        assert_eq!(
            mover.disable(),
            MoverEffect::Canceled {
                pointer_id: 1,
                reason: CancelReason::Disabled
            }
        );
        assert_eq!(mover.element().release_calls, vec![1]);

        let frozen = mover.element().position;
        assert_eq!(
            mover.pointer_move(&down(1, 90.0, 90.0)),
            MoverEffect::Ignored {
                reason: IgnoredReason::NoSession
            }
        );
        assert_eq!(mover.element().position, frozen);
    }

    #[test]
    fn disable_when_idle_and_double_disable() {
        let mut mover = mover_at(0.0, 0.0);
        assert_eq!(mover.disable(), MoverEffect::Disabled);
        assert_eq!(
            mover.disable(),
            MoverEffect::Ignored {
                reason: IgnoredReason::AlreadyDisabled
            }
        );
    }

    #[test]
    fn configure_merges_shallowly_over_current_values() {
        let mut mover = mover_at(0.0, 0.0);
        mover.configure(MoverConfigUpdate::new().drag_threshold(9.0));
        mover.configure(MoverConfigUpdate::new().origin(crate::MoverOrigin {
            x: crate::OriginEdge::End,
            y: crate::OriginEdge::Start,
        }));
        // The second update left the threshold alone.
        assert_eq!(mover.config().drag_threshold, 9.0);
        assert_eq!(mover.config().origin.x, crate::OriginEdge::End);
    }

    #[test]
    fn configure_mid_session_applies_to_subsequent_threshold_checks() {
        let mut mover = mover_at(0.0, 0.0);
        mover.configure(MoverConfigUpdate::new().drag_threshold(100.0));
        mover.pointer_down(&down(1, 10.0, 10.0));
        assert_eq!(
            mover.pointer_move(&down(1, 20.0, 10.0)),
            MoverEffect::Ignored {
                reason: IgnoredReason::BelowThreshold
            }
        );

        mover.configure(MoverConfigUpdate::new().drag_threshold(5.0));
        assert!(matches!(
            mover.pointer_move(&down(1, 20.0, 10.0)),
            MoverEffect::DragStarted { .. }
        ));
    }

    #[test]
    fn non_positive_threshold_drags_from_the_first_move() {
        let mut mover = Mover::with_config(
            MockElement::at(0.0, 0.0),
            MoverConfigUpdate::new().drag_threshold(-1.0),
        );
        mover.enable();
        mover.pointer_down(&down(1, 10.0, 10.0));
        assert!(matches!(
            mover.pointer_move(&down(1, 10.0, 10.0)),
            MoverEffect::DragStarted { .. }
        ));
    }

    #[test]
    fn negative_pointer_ids_drive_a_full_session() {
        let mut mover = mover_at(0.0, 0.0);

        assert!(matches!(
            mover.pointer_down(&down(-2, 10.0, 10.0)),
            MoverEffect::Armed { pointer_id: -2, .. }
        ));
        assert_eq!(mover.active_pointer_id(), Some(-2));

        assert!(matches!(
            mover.pointer_move(&down(-2, 30.0, 10.0)),
            MoverEffect::DragStarted { pointer_id: -2, .. }
        ));
        assert_eq!(mover.element().capture_calls, vec![-2]);

        assert_eq!(
            mover.pointer_up(&down(-2, 30.0, 10.0)),
            MoverEffect::Settled { pointer_id: -2 }
        );
        assert_eq!(mover.element().release_calls, vec![-2]);
    }

    #[test]
    fn effect_serde_round_trip() {
        let effect = MoverEffect::DragStarted {
            pointer_id: 3,
            offset: Point::new(4.0, 5.0),
            capture_acquired: true,
            left: 10.0,
            top: 12.0,
        };
        let json = serde_json::to_string(&effect).expect("serialize");
        assert!(json.contains("\"effect\":\"drag_started\""));
        let back: MoverEffect = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(effect, back);
    }

    #[test]
    fn debug_format_reports_lifecycle_fields() {
        let mover = mover_at(0.0, 0.0);
        let rendered = format!("{mover:?}");
        assert!(rendered.contains("Mover"));
        assert!(rendered.contains("enabled: true"));
    }
}

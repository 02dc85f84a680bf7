//! Central owner of all live animation handles.
//!
//! The `MotionManager` tracks every handle, enforces the at-most-one
//! invariant per (element, kind) pair, advances tweens on frame ticks, and
//! applies the resulting values through the injected [`Stage`]. Finished
//! and killed handles stay queryable until [`MotionManager::cleanup`] so
//! callers can observe terminal states after an update.
//!
//! # Usage
//!
//! ```
//! use atelier_motion::easing::Easing;
//! use atelier_motion::manager::MotionManager;
//! use atelier_motion::stage::FakeStage;
//! use atelier_motion::tween::Tween;
//! use atelier_motion::types::{MotionKind, MotionProperty};
//!
//! let mut stage = FakeStage::new();
//! let mut manager = MotionManager::new();
//!
//! let tween = Tween::new(800.0)
//!     .with_easing(Easing::EaseOut)
//!     .with_track(MotionProperty::Opacity, 0.0, 1.0);
//! let id = manager.start(&mut stage, "page", MotionKind::FadeSlide, tween);
//!
//! manager.update(&mut stage, 16.7); // one frame
//! assert!(manager.live_count() == 1);
//! # let _ = id;
//! ```

use std::collections::HashMap;

use crate::events::{EventQueue, MotionEvent};
use crate::stage::Stage;
use crate::tween::Tween;
use crate::types::{HandleId, HandleState, MotionKind};

/// One member of a staggered group, targeting its own element id.
#[derive(Debug, Clone)]
struct GroupMember {
    target: String,
    tween: Tween,
}

/// The animated payload of a handle: a single tween, or a staggered group
/// of tweens fanned out over fragment targets (character reveals).
#[derive(Debug, Clone)]
enum MotionBody {
    Single(Tween),
    Group(Vec<GroupMember>),
}

/// A live or recently-terminal animation handle.
#[derive(Debug, Clone)]
struct Motion {
    element: String,
    kind: MotionKind,
    body: MotionBody,
    /// Aggregate state as of the last observation, for edge detection.
    state: HandleState,
}

impl Motion {
    fn aggregate_state(&self) -> HandleState {
        match &self.body {
            MotionBody::Single(tween) => tween.state(),
            MotionBody::Group(members) => {
                let mut all_terminal = true;
                let mut any_killed = false;
                let mut any_playing = false;
                let mut any_reversed = false;
                for m in members {
                    match m.tween.state() {
                        HandleState::Playing => {
                            any_playing = true;
                            all_terminal = false;
                        }
                        HandleState::Reversed => {
                            any_reversed = true;
                            all_terminal = false;
                        }
                        HandleState::Idle => all_terminal = false,
                        HandleState::Killed => any_killed = true,
                        HandleState::Settled => {}
                    }
                }
                if all_terminal {
                    if any_killed {
                        HandleState::Killed
                    } else {
                        HandleState::Settled
                    }
                } else if any_playing {
                    HandleState::Playing
                } else if any_reversed {
                    HandleState::Reversed
                } else {
                    HandleState::Idle
                }
            }
        }
    }
}

/// Central manager for all animation handles.
#[derive(Debug, Default)]
pub struct MotionManager {
    motions: HashMap<HandleId, Motion>,

    /// Index enforcing at most one live handle per (element, kind) pair.
    pair_index: HashMap<(String, MotionKind), HandleId>,

    events: EventQueue,
}

impl MotionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a handle playing immediately.
    ///
    /// If a live handle already exists for this (element, kind) pair it is
    /// killed first. A detached target yields an already-killed handle and
    /// a warning; primitives never error.
    pub fn start(
        &mut self,
        stage: &mut dyn Stage,
        element: &str,
        kind: MotionKind,
        mut tween: Tween,
    ) -> HandleId {
        tween.play();
        self.insert(stage, element, kind, MotionBody::Single(tween), true)
    }

    /// Start a handle paused at its start value, awaiting [`Self::play`].
    /// Used by hover toggles.
    pub fn start_paused(
        &mut self,
        stage: &mut dyn Stage,
        element: &str,
        kind: MotionKind,
        tween: Tween,
    ) -> HandleId {
        self.insert(stage, element, kind, MotionBody::Single(tween), false)
    }

    /// Start a staggered group under one handle.
    ///
    /// Each member gets an extra delay of `interval_ms` times its index, so
    /// entrances fire in member order regardless of when thresholds are
    /// crossed.
    pub fn start_group(
        &mut self,
        stage: &mut dyn Stage,
        element: &str,
        kind: MotionKind,
        interval_ms: f32,
        members: Vec<(String, Tween)>,
    ) -> HandleId {
        let members = members
            .into_iter()
            .enumerate()
            .map(|(i, (target, tween))| {
                let mut tween = tween.with_delay(interval_ms * i as f32);
                tween.play();
                GroupMember { target, tween }
            })
            .collect();
        self.insert(stage, element, kind, MotionBody::Group(members), true)
    }

    fn insert(
        &mut self,
        stage: &mut dyn Stage,
        element: &str,
        kind: MotionKind,
        body: MotionBody,
        started: bool,
    ) -> HandleId {
        let id = HandleId::new();

        if !stage.is_attached(element) {
            tracing::warn!(element, ?kind, "animation target detached; no-op handle");
            let mut motion = Motion {
                element: element.to_string(),
                kind,
                body,
                state: HandleState::Killed,
            };
            match &mut motion.body {
                MotionBody::Single(t) => t.kill(),
                MotionBody::Group(members) => members.iter_mut().for_each(|m| m.tween.kill()),
            }
            self.motions.insert(id, motion);
            return id;
        }

        // At most one live handle per (element, kind).
        let key = (element.to_string(), kind);
        if let Some(&prior) = self.pair_index.get(&key) {
            self.kill(prior);
        }

        let state = if started {
            HandleState::Playing
        } else {
            HandleState::Idle
        };
        self.motions.insert(
            id,
            Motion {
                element: element.to_string(),
                kind,
                body,
                state,
            },
        );
        self.pair_index.insert(key, id);

        if started {
            self.events.push(MotionEvent::Started {
                handle: id,
                element: element.to_string(),
                kind,
            });
        }

        id
    }

    /// Play (or replay) a handle forward. Emits `Started` when leaving
    /// `Idle`. No-op on terminal handles.
    pub fn play(&mut self, id: HandleId) {
        let Some(motion) = self.motions.get_mut(&id) else {
            return;
        };
        let was_idle = motion.state == HandleState::Idle;
        match &mut motion.body {
            MotionBody::Single(t) => t.play(),
            MotionBody::Group(members) => members.iter_mut().for_each(|m| m.tween.play()),
        }
        let state = motion.aggregate_state();
        motion.state = state;
        if was_idle && state == HandleState::Playing {
            self.events.push(MotionEvent::Started {
                handle: id,
                element: motion.element.clone(),
                kind: motion.kind,
            });
        }
    }

    /// Reverse a handle from its current progress back toward its start
    /// value. No-op on killed handles.
    pub fn reverse(&mut self, id: HandleId) {
        if let Some(motion) = self.motions.get_mut(&id) {
            match &mut motion.body {
                MotionBody::Single(t) => t.reverse(),
                MotionBody::Group(members) => members.iter_mut().for_each(|m| m.tween.reverse()),
            }
            motion.state = motion.aggregate_state();
        }
    }

    /// Kill a handle. Idempotent: killing a terminal or unknown handle is
    /// a no-op. Frozen values are not snapped to either endpoint.
    pub fn kill(&mut self, id: HandleId) {
        let Some(motion) = self.motions.get_mut(&id) else {
            return;
        };
        if motion.state.is_terminal() {
            return;
        }
        match &mut motion.body {
            MotionBody::Single(t) => t.kill(),
            MotionBody::Group(members) => members.iter_mut().for_each(|m| m.tween.kill()),
        }
        motion.state = HandleState::Killed;
        let key = (motion.element.clone(), motion.kind);
        let element = motion.element.clone();
        let kind = motion.kind;
        if self.pair_index.get(&key) == Some(&id) {
            self.pair_index.remove(&key);
        }
        self.events.push(MotionEvent::Killed {
            handle: id,
            element,
            kind,
        });
    }

    /// Kill every live handle targeting `element`, across all kinds.
    pub fn kill_all_for_element(&mut self, element: &str) {
        let ids: Vec<HandleId> = self
            .motions
            .iter()
            .filter(|(_, m)| m.element == element && m.state.is_live())
            .map(|(id, _)| *id)
            .collect();
        for id in ids {
            self.kill(id);
        }
    }

    /// Kill every live handle. The universal cancellation path for route
    /// changes.
    pub fn kill_all(&mut self) {
        let ids: Vec<HandleId> = self
            .motions
            .iter()
            .filter(|(_, m)| m.state.is_live())
            .map(|(id, _)| *id)
            .collect();
        for id in ids {
            self.kill(id);
        }
    }

    /// Advance all live handles by `delta_ms` and apply current values
    /// through the stage.
    ///
    /// Called once per frame. Settled handles get their exact end values
    /// applied; completed reversals get their start values and emit
    /// `Reversed`.
    pub fn update(&mut self, stage: &mut dyn Stage, delta_ms: f32) {
        for (id, motion) in self.motions.iter_mut() {
            if motion.state.is_terminal() {
                continue;
            }

            let before = motion.state;
            match &mut motion.body {
                MotionBody::Single(tween) => {
                    tween.update(delta_ms);
                    if tween.state() != HandleState::Idle || before == HandleState::Reversed {
                        for (property, value) in tween.current_values() {
                            stage.apply(&motion.element, property, value);
                        }
                    }
                }
                MotionBody::Group(members) => {
                    for m in members.iter_mut() {
                        let was = m.tween.state();
                        m.tween.update(delta_ms);
                        if m.tween.state() != HandleState::Idle || was == HandleState::Reversed {
                            for (property, value) in m.tween.current_values() {
                                stage.apply(&m.target, property, value);
                            }
                        }
                    }
                }
            }

            let after = motion.aggregate_state();
            motion.state = after;

            if after != before {
                match after {
                    HandleState::Settled => self.events.push(MotionEvent::Settled {
                        handle: *id,
                        element: motion.element.clone(),
                        kind: motion.kind,
                    }),
                    HandleState::Idle if before == HandleState::Reversed => {
                        self.events.push(MotionEvent::Reversed {
                            handle: *id,
                            element: motion.element.clone(),
                            kind: motion.kind,
                        })
                    }
                    _ => {}
                }
                if after == HandleState::Settled {
                    let key = (motion.element.clone(), motion.kind);
                    if self.pair_index.get(&key) == Some(id) {
                        self.pair_index.remove(&key);
                    }
                }
            }
        }
    }

    /// State of a handle, terminal states included (until [`Self::cleanup`]).
    pub fn state_of(&self, id: HandleId) -> Option<HandleState> {
        self.motions.get(&id).map(|m| m.state)
    }

    /// Number of handles that still advance on ticks.
    pub fn live_count(&self) -> usize {
        self.motions.values().filter(|m| m.state.is_live()).count()
    }

    /// Number of handles currently in `Playing`.
    pub fn playing_count(&self) -> usize {
        self.motions
            .values()
            .filter(|m| m.state == HandleState::Playing)
            .count()
    }

    /// Live handles targeting `element`.
    pub fn live_count_for_element(&self, element: &str) -> usize {
        self.motions
            .values()
            .filter(|m| m.element == element && m.state.is_live())
            .count()
    }

    pub fn has_live_animations(&self) -> bool {
        self.motions.values().any(|m| m.state.is_live())
    }

    /// Drop terminal handles. Live handles are untouched.
    pub fn cleanup(&mut self) {
        self.motions.retain(|_, m| m.state.is_live());
    }

    /// Drain all pending lifecycle events.
    pub fn drain_events(&mut self) -> impl Iterator<Item = MotionEvent> + '_ {
        self.events.drain()
    }

    pub fn has_pending_events(&self) -> bool {
        !self.events.is_empty()
    }

    pub fn pop_event(&mut self) -> Option<MotionEvent> {
        self.events.pop()
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }
}

static_assertions::assert_impl_all!(MotionManager: Send);

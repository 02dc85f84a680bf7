//! Route transition orchestration.
//!
//! One object owns the page lifecycle: teardown of the outgoing page
//! (killing its handles and reveal bindings), the scroll reset, the
//! incoming page's entrance, and activation of the new page's reveal
//! bindings once the entrance settles. Navigations arriving mid-entrance
//! cancel cleanly, so rapid clicking never leaves two pages animating.

use atelier_motion::easing::Easing;
use atelier_motion::events::MotionEvent;
use atelier_motion::manager::MotionManager;
use atelier_motion::primitives::{FadeSlideSpec, fade_slide_in};
use atelier_motion::stage::Stage;
use atelier_motion::tween::Tween;
use atelier_motion::types::{HandleId, HandleState, MotionKind, MotionProperty};
use atelier_scroll::position::ScrollController;
use atelier_scroll::reveal::{RevealEngine, RevealSpec};

use crate::route::Route;

/// Exit rise distance, in layout units. The page lifts slightly while
/// fading, the inverse gesture of the entrance.
pub const EXIT_DISTANCE: f64 = 20.0;
pub const EXIT_DURATION_MS: f32 = 400.0;

/// Where the current page is in its transition lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No page yet; nothing has navigated.
    Idle,
    /// The entrance is playing; reveal bindings are queued, not active.
    Entering,
    /// The entrance finished; reveals and hovers are live.
    Settled,
    /// A cosmetic exit is playing.
    Exiting,
}

/// The page transition coordinator.
pub struct Orchestrator {
    manager: MotionManager,
    scroll: ScrollController,
    reveals: RevealEngine,
    route: Option<Route>,
    phase: Phase,
    entrance: Option<HandleId>,
    /// Reveal bindings declared during the entrance, activated on settle.
    pending_reveals: Vec<(String, RevealSpec)>,
    entrance_spec: FadeSlideSpec,
}

impl Orchestrator {
    pub fn new(stage: &mut dyn Stage) -> Self {
        Self {
            manager: MotionManager::new(),
            scroll: ScrollController::new(stage),
            reveals: RevealEngine::new(),
            route: None,
            phase: Phase::Idle,
            entrance: None,
            pending_reveals: Vec::new(),
            entrance_spec: FadeSlideSpec::default(),
        }
    }

    /// Navigate to `path`.
    ///
    /// Tears the outgoing page down completely (every handle killed, every
    /// reveal binding dropped), resets the scroll position exactly once,
    /// then starts the incoming page's entrance. Safe to call at any phase,
    /// including mid-entrance.
    pub fn navigate(&mut self, stage: &mut dyn Stage, path: &str) {
        let route = Route::parse(path);
        tracing::info!(to = %route.path(), from = ?self.route.as_ref().map(Route::path), "navigate");

        self.reveals.clear(&mut self.manager);
        self.manager.kill_all();
        self.manager.cleanup();
        self.manager.clear_events();
        self.pending_reveals.clear();

        self.scroll.on_route_change(stage, path);

        let element = route.page_element();
        let entrance = fade_slide_in(&mut self.manager, stage, &element, self.entrance_spec);
        self.route = Some(route);

        // A detached page root yields a dead handle; treat the page as
        // settled so its reveals are not stranded.
        if self.manager.state_of(entrance) == Some(HandleState::Killed) {
            self.entrance = None;
            self.phase = Phase::Settled;
        } else {
            self.entrance = Some(entrance);
            self.phase = Phase::Entering;
        }
    }

    /// Play the outgoing gesture for the current page: a short lift-and-fade.
    /// Purely cosmetic; navigation does not wait for it.
    pub fn begin_exit(&mut self, stage: &mut dyn Stage) {
        let Some(route) = &self.route else {
            return;
        };
        if self.phase == Phase::Exiting {
            return;
        }

        let duration = if stage.prefers_reduced_motion() {
            0.0
        } else {
            EXIT_DURATION_MS
        };
        let tween = Tween::new(duration)
            .with_easing(Easing::EaseIn)
            .with_track(MotionProperty::Opacity, 1.0, 0.0)
            .with_track(MotionProperty::TranslateY, 0.0, -EXIT_DISTANCE);
        let element = route.page_element();
        self.manager
            .start(stage, &element, MotionKind::FadeSlide, tween);
        self.entrance = None;
        self.phase = Phase::Exiting;
    }

    /// Declare a reveal binding for the current page.
    ///
    /// During the entrance the binding is queued and activates when the
    /// entrance settles; on a settled page it activates immediately.
    pub fn bind_reveal(&mut self, stage: &mut dyn Stage, element: &str, spec: RevealSpec) {
        if self.phase == Phase::Settled {
            self.reveals
                .register(&mut self.manager, stage, element, spec);
        } else {
            self.pending_reveals.push((element.to_string(), spec));
        }
    }

    /// Advance one frame: animations, scroll retries and glides, entrance
    /// settlement, and reveal evaluation.
    pub fn update(&mut self, stage: &mut dyn Stage, delta_ms: f32) {
        self.manager.update(stage, delta_ms);
        self.scroll.update(stage, delta_ms);

        let events: Vec<MotionEvent> = self.manager.drain_events().collect();
        for event in events {
            if let MotionEvent::Settled { handle, .. } = event {
                if Some(handle) == self.entrance {
                    tracing::debug!(route = ?self.route.as_ref().map(Route::path), "entrance settled");
                    self.entrance = None;
                    self.phase = Phase::Settled;
                    self.activate_pending_reveals(stage);
                }
            }
        }

        if self.phase == Phase::Settled {
            self.reveals.update(&mut self.manager, stage);
        }
    }

    fn activate_pending_reveals(&mut self, stage: &mut dyn Stage) {
        for (element, spec) in std::mem::take(&mut self.pending_reveals) {
            self.reveals
                .register(&mut self.manager, stage, &element, spec);
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    /// The motion manager, for hover toggles and decorative handles that
    /// live outside the page lifecycle.
    pub fn motions(&self) -> &MotionManager {
        &self.manager
    }

    pub fn motions_mut(&mut self) -> &mut MotionManager {
        &mut self.manager
    }

    pub fn scroll(&self) -> &ScrollController {
        &self.scroll
    }

    pub fn scroll_mut(&mut self) -> &mut ScrollController {
        &mut self.scroll
    }

    pub fn reveals(&self) -> &RevealEngine {
        &self.reveals
    }

    /// Override the sibling reveal stagger interval, normally from
    /// configuration.
    pub fn set_reveal_stagger(&mut self, stagger_ms: f32) {
        self.reveals.set_stagger_ms(stagger_ms);
    }
}

static_assertions::assert_impl_all!(Orchestrator: Send);

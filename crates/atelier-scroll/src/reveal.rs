//! Scroll-triggered reveal bindings.
//!
//! Sections register once and fade in when the viewport reaches them. A
//! binding watches the threshold line at a fraction of the viewport height:
//! when the element's top crosses it scrolling down, the reveal plays;
//! crossing back up either does nothing (one-shot) or reverses the reveal
//! so it replays on the next descent.
//!
//! Bindings that trigger on the same tick start in registration order with
//! a fixed stagger, so sibling cards cascade instead of popping in at once.

use serde::{Deserialize, Serialize};

use atelier_motion::manager::MotionManager;
use atelier_motion::primitives::{FadeSlideSpec, fade_slide_in};
use atelier_motion::stage::Stage;
use atelier_motion::types::HandleId;

/// Delay between sibling reveals triggered on the same tick.
pub const SIBLING_STAGGER_MS: f32 = 100.0;

/// What happens when an already-revealed element scrolls back above the
/// threshold line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplayPolicy {
    /// Reveal once and stay revealed.
    Once,
    /// Reverse on the way up so the reveal replays on the next descent.
    ToggleOnReverse,
}

/// Per-binding reveal configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevealSpec {
    /// Fraction of the viewport height the element's top must rise above
    /// before the reveal fires. 0.8 means the top 80% of the viewport.
    pub threshold: f64,
    pub replay: ReplayPolicy,
    pub animation: FadeSlideSpec,
}

impl Default for RevealSpec {
    fn default() -> Self {
        Self {
            threshold: 0.8,
            replay: ReplayPolicy::ToggleOnReverse,
            animation: FadeSlideSpec::default(),
        }
    }
}

#[derive(Debug)]
struct Binding {
    element: String,
    spec: RevealSpec,
    /// Whether the element was past the threshold line last tick, for
    /// crossing-edge detection.
    was_beyond: bool,
    fired: u32,
    handle: Option<HandleId>,
}

/// Registry of scroll-triggered reveals for the current page.
#[derive(Debug)]
pub struct RevealEngine {
    bindings: Vec<Binding>,
    stagger_ms: f32,
}

impl Default for RevealEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RevealEngine {
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
            stagger_ms: SIBLING_STAGGER_MS,
        }
    }

    /// Override the sibling stagger interval, normally from configuration.
    pub fn with_stagger_ms(mut self, stagger_ms: f32) -> Self {
        self.set_stagger_ms(stagger_ms);
        self
    }

    pub fn set_stagger_ms(&mut self, stagger_ms: f32) {
        self.stagger_ms = stagger_ms.max(0.0);
    }

    pub fn stagger_ms(&self) -> f32 {
        self.stagger_ms
    }

    /// Bind `element` to reveal when scrolled into view.
    ///
    /// When the host cannot observe scroll geometry the binding degrades to
    /// revealing immediately, so content is never stuck hidden. Re-registering
    /// an element replaces its previous binding.
    pub fn register(
        &mut self,
        manager: &mut MotionManager,
        stage: &mut dyn Stage,
        element: &str,
        spec: RevealSpec,
    ) {
        self.unregister(manager, element);

        if !stage.supports_observation() {
            tracing::debug!(element, "no scroll observation; revealing immediately");
            let handle = fade_slide_in(manager, stage, element, spec.animation);
            self.bindings.push(Binding {
                element: element.to_string(),
                spec,
                was_beyond: true,
                fired: 1,
                handle: Some(handle),
            });
            return;
        }

        self.bindings.push(Binding {
            element: element.to_string(),
            spec,
            was_beyond: false,
            fired: 0,
            handle: None,
        });
    }

    /// Remove a binding and kill its in-flight reveal. Unknown elements are
    /// a no-op, so teardown paths can call this unconditionally.
    pub fn unregister(&mut self, manager: &mut MotionManager, element: &str) {
        if let Some(pos) = self.bindings.iter().position(|b| b.element == element) {
            let binding = self.bindings.remove(pos);
            if let Some(handle) = binding.handle {
                manager.kill(handle);
            }
        }
    }

    /// Drop every binding, killing in-flight reveals. Called on route
    /// teardown.
    pub fn clear(&mut self, manager: &mut MotionManager) {
        for binding in self.bindings.drain(..) {
            if let Some(handle) = binding.handle {
                manager.kill(handle);
            }
        }
    }

    /// Re-evaluate every binding against the current scroll geometry.
    ///
    /// Downward crossings trigger reveals; same-tick triggers start in
    /// registration order, each delayed by one more stagger interval.
    /// Upward crossings reverse toggling bindings from wherever their
    /// reveal currently is.
    pub fn update(&mut self, manager: &mut MotionManager, stage: &mut dyn Stage) {
        let offset = stage.scroll_offset();
        let viewport = stage.viewport_height();

        let mut triggered: Vec<usize> = Vec::new();
        for (i, binding) in self.bindings.iter_mut().enumerate() {
            let Some(top) = stage.element_top(&binding.element) else {
                // Not laid out; leave the binding armed.
                continue;
            };
            let line = offset + viewport * binding.spec.threshold;
            let beyond = top <= line;

            if beyond && !binding.was_beyond {
                let replays = binding.spec.replay == ReplayPolicy::ToggleOnReverse;
                if binding.fired == 0 || replays {
                    triggered.push(i);
                }
            } else if !beyond && binding.was_beyond {
                if binding.spec.replay == ReplayPolicy::ToggleOnReverse {
                    if let Some(handle) = binding.handle {
                        manager.reverse(handle);
                    }
                }
            }
            binding.was_beyond = beyond;
        }

        for (rank, &i) in triggered.iter().enumerate() {
            let binding = &mut self.bindings[i];
            binding.fired += 1;

            // A prior reveal that reversed back (or is mid-reversal) is
            // replayed in place; otherwise start fresh with its stagger slot.
            let live_prior = binding
                .handle
                .filter(|&h| manager.state_of(h).is_some_and(|s| s.is_live()));
            match live_prior {
                Some(handle) => manager.play(handle),
                None => {
                    let mut animation = binding.spec.animation;
                    animation.delay_ms += self.stagger_ms * rank as f32;
                    let handle = fade_slide_in(manager, stage, &binding.element, animation);
                    binding.handle = Some(handle);
                }
            }
        }
    }

    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

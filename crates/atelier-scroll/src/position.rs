//! Deterministic viewport scroll control.
//!
//! The controller is the sole writer of the scroll offset besides the user.
//! It claims authority from the host on construction (disabling native
//! scroll restoration), forces the offset to zero on every route change,
//! and owns the smooth glide used by the scroll-to-top affordance.
//!
//! Forcing the offset can race a smooth-scrolling container that has not
//! finished initializing, so a reset retries on a short schedule:
//! immediate, then two bounded retries on subsequent ticks, then silent
//! give-up.

use atelier_motion::easing::Easing;
use atelier_motion::stage::Stage;

/// Offset beyond which the scroll-to-top affordance shows. The source
/// exhibits both 50 and 300; this implementation standardizes on the
/// smooth-animated variant's 300 units.
pub const SCROLL_TO_TOP_THRESHOLD: f64 = 300.0;

/// Duration of the affordance's glide back to the top.
pub const GLIDE_DURATION_MS: f32 = 600.0;

const RESET_RETRIES: u8 = 2;

/// In-flight smooth scroll toward offset zero.
#[derive(Debug, Clone)]
struct Glide {
    from: f64,
    elapsed_ms: f32,
}

impl Glide {
    fn offset_at(&self, progress: f32) -> f64 {
        let eased = Easing::EaseInOut.evaluate(progress) as f64;
        self.from * (1.0 - eased)
    }
}

/// Owner of viewport scroll position across navigations.
#[derive(Debug)]
pub struct ScrollController {
    pending_reset_retries: u8,
    glide: Option<Glide>,
    resets: u32,
}

impl ScrollController {
    /// Claim scroll authority: disables the host's native restoration so
    /// this controller alone decides post-navigation positions.
    pub fn new(stage: &mut dyn Stage) -> Self {
        stage.disable_native_scroll_restoration();
        Self {
            pending_reset_retries: 0,
            glide: None,
            resets: 0,
        }
    }

    /// Synchronously force the viewport to the top.
    ///
    /// Cancels any glide in flight. If the host reports a non-zero offset
    /// right after the write (an initialization race), bounded retries are
    /// scheduled for the next ticks.
    pub fn reset_to_top(&mut self, stage: &mut dyn Stage) {
        self.glide = None;
        self.resets += 1;
        stage.set_scroll_offset(0.0);
        if stage.scroll_offset() != 0.0 {
            self.pending_reset_retries = RESET_RETRIES;
        } else {
            self.pending_reset_retries = 0;
        }
    }

    /// Invoked exactly once per navigation, before the incoming page's
    /// entrance starts.
    pub fn on_route_change(&mut self, stage: &mut dyn Stage, route: &str) {
        tracing::debug!(route, "scroll reset on navigation");
        self.reset_to_top(stage);
    }

    /// Begin a smooth glide from the current offset to the top.
    ///
    /// Restarting mid-glide retargets from the current offset. A viewport
    /// already at the top is a no-op.
    pub fn glide_to_top(&mut self, stage: &mut dyn Stage) {
        let from = stage.scroll_offset();
        if from == 0.0 {
            self.glide = None;
            return;
        }
        self.glide = Some(Glide {
            from,
            elapsed_ms: 0.0,
        });
    }

    /// Advance reset retries and any glide in flight.
    pub fn update(&mut self, stage: &mut dyn Stage, delta_ms: f32) {
        if self.pending_reset_retries > 0 {
            stage.set_scroll_offset(0.0);
            if stage.scroll_offset() == 0.0 {
                self.pending_reset_retries = 0;
            } else {
                self.pending_reset_retries -= 1;
                if self.pending_reset_retries == 0 {
                    tracing::warn!("scroll reset retries exhausted; giving up");
                }
            }
        }

        if let Some(glide) = self.glide.as_mut() {
            glide.elapsed_ms += delta_ms;
            let progress = (glide.elapsed_ms / GLIDE_DURATION_MS).clamp(0.0, 1.0);
            let offset = glide.offset_at(progress);
            stage.set_scroll_offset(offset);
            if progress >= 1.0 {
                self.glide = None;
            }
        }
    }

    /// True while a glide is animating toward the top.
    pub fn is_gliding(&self) -> bool {
        self.glide.is_some()
    }

    /// How many scroll resets have been issued.
    pub fn reset_count(&self) -> u32 {
        self.resets
    }
}

/// Visibility state of the scroll-to-top affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AffordanceState {
    Hidden,
    Visible,
}

/// The visibility-gated "back to top" control.
///
/// `{hidden} --offset>threshold--> {visible}`,
/// `{visible} --offset<=threshold--> {hidden}`,
/// `{visible} --activate--> glide to 0 --> {hidden}`.
#[derive(Debug)]
pub struct ScrollToTop {
    threshold: f64,
    state: AffordanceState,
}

impl Default for ScrollToTop {
    fn default() -> Self {
        Self::new(SCROLL_TO_TOP_THRESHOLD)
    }
}

impl ScrollToTop {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            state: AffordanceState::Hidden,
        }
    }

    /// Re-evaluate visibility from the current offset. Called once per
    /// tick and after any scroll event.
    pub fn update(&mut self, stage: &dyn Stage) {
        self.state = if stage.scroll_offset() > self.threshold {
            AffordanceState::Visible
        } else {
            AffordanceState::Hidden
        };
    }

    pub fn is_visible(&self) -> bool {
        self.state == AffordanceState::Visible
    }

    /// Activate the control: glide the viewport back to the top. Ignored
    /// while hidden.
    pub fn activate(&mut self, controller: &mut ScrollController, stage: &mut dyn Stage) {
        if self.state == AffordanceState::Visible {
            controller.glide_to_top(stage);
        }
    }
}

//! The animation primitive library.
//!
//! Thin, disposable constructors over [`MotionManager`] and [`Tween`]:
//! fade-slide entrances, hover toggles, rotation loops, and staggered
//! character reveals. No primitive ever returns an error: a detached
//! target yields a logged no-op handle, and a reduced-motion preference
//! yields handles that reach their end state instantly (or, for purely
//! decorative motion, do nothing at all).
//!
//! Defaults follow the site's observed cadences: 30-unit rise over 800 ms
//! for entrances, 300 ms hover lifts, 50 ms character stagger.

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::manager::MotionManager;
use crate::stage::Stage;
use crate::text::{TextFragment, split_fragments};
use crate::tween::Tween;
use crate::types::{HandleId, MotionKind, MotionProperty};

/// Options for [`fade_slide_in`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FadeSlideSpec {
    /// Vertical offset the target rises from, in layout units.
    pub distance: f64,
    pub duration_ms: f32,
    pub easing: Easing,
    pub delay_ms: f32,
}

impl Default for FadeSlideSpec {
    fn default() -> Self {
        Self {
            distance: 30.0,
            duration_ms: 800.0,
            easing: Easing::EaseOut,
            delay_ms: 0.0,
        }
    }
}

/// Options for [`hover_toggle`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverToggleSpec {
    /// How far the target lifts on hover, in layout units.
    pub lift: f64,
    /// Peak glow/shadow intensity, 0.0 to 1.0.
    pub shadow: f64,
    pub duration_ms: f32,
}

impl Default for HoverToggleSpec {
    fn default() -> Self {
        Self {
            lift: 6.0,
            shadow: 1.0,
            duration_ms: 300.0,
        }
    }
}

/// Options for [`infinite_rotate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotateSpec {
    pub ms_per_turn: f32,
}

impl Default for RotateSpec {
    fn default() -> Self {
        Self {
            ms_per_turn: 12_000.0,
        }
    }
}

/// Options for [`char_reveal_text`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StaggerTextSpec {
    /// Rise distance of each character.
    pub distance: f64,
    /// Duration of one character's entrance.
    pub duration_ms: f32,
    /// Delay between consecutive characters.
    pub stagger_ms: f32,
    pub easing: Easing,
}

impl Default for StaggerTextSpec {
    fn default() -> Self {
        Self {
            distance: 60.0,
            duration_ms: 800.0,
            stagger_ms: 50.0,
            easing: Easing::back_out(1.7),
        }
    }
}

/// A fragmented heading plus the handle staggering its entrance.
#[derive(Debug)]
pub struct CharReveal {
    pub fragments: Vec<TextFragment>,
    pub handle: HandleId,
}

/// Fragment element id for character `index` under `element`.
pub fn fragment_id(element: &str, index: usize) -> String {
    format!("{element}/char{index}")
}

/// Fade the target in while sliding it up to its natural position.
///
/// Idempotent per target: a still-running fade-slide on the same element
/// is killed before the new one starts. Under reduced motion the end state
/// is applied on the next tick with no intermediate frames.
pub fn fade_slide_in(
    manager: &mut MotionManager,
    stage: &mut dyn Stage,
    element: &str,
    spec: FadeSlideSpec,
) -> HandleId {
    let duration = effective_duration(stage, spec.duration_ms);
    let tween = Tween::new(duration)
        .with_easing(spec.easing)
        .with_delay(spec.delay_ms)
        .with_track(MotionProperty::Opacity, 0.0, 1.0)
        .with_track(MotionProperty::TranslateY, spec.distance, 0.0);
    manager.start(stage, element, MotionKind::FadeSlide, tween)
}

/// Build a paused lift/glow timeline for a hoverable target.
///
/// Drive it with [`hover_enter`] and [`hover_leave`]; leaving mid-enter
/// reverses from the current progress. Under reduced motion the handle
/// accepts enter/leave but carries no tracks, so nothing visible changes;
/// it remains disposal-safe.
pub fn hover_toggle(
    manager: &mut MotionManager,
    stage: &mut dyn Stage,
    element: &str,
    spec: HoverToggleSpec,
) -> HandleId {
    let tween = if stage.prefers_reduced_motion() {
        Tween::new(0.0)
    } else {
        Tween::new(spec.duration_ms)
            .with_easing(Easing::EaseOut)
            .with_track(MotionProperty::TranslateY, 0.0, -spec.lift)
            .with_track(MotionProperty::ShadowStrength, 0.0, spec.shadow)
    };
    manager.start_paused(stage, element, MotionKind::HoverToggle, tween)
}

/// Pointer entered the hover target: play the lift forward.
pub fn hover_enter(manager: &mut MotionManager, handle: HandleId) {
    manager.play(handle);
}

/// Pointer left the hover target: reverse from the current progress.
pub fn hover_leave(manager: &mut MotionManager, handle: HandleId) {
    manager.reverse(handle);
}

/// Start an unbounded rotation loop.
///
/// Disposal freezes the target at its current angle; there is no snap back
/// to zero. Under reduced motion the handle is inert.
pub fn infinite_rotate(
    manager: &mut MotionManager,
    stage: &mut dyn Stage,
    element: &str,
    spec: RotateSpec,
) -> HandleId {
    if stage.prefers_reduced_motion() {
        return manager.start_paused(stage, element, MotionKind::InfiniteRotate, Tween::new(0.0));
    }
    let tween = Tween::new(spec.ms_per_turn)
        .with_easing(Easing::Linear)
        .with_track(MotionProperty::Rotation, 0.0, 360.0)
        .looping();
    manager.start(stage, element, MotionKind::InfiniteRotate, tween)
}

/// Fragment a heading and stagger its characters in.
///
/// Returns the display fragments (grapheme clusters joined by non-breaking
/// spaces) plus one handle covering the whole staggered entrance. Joining
/// spaces are not animated. Under reduced motion every character reaches
/// its end state on the first tick.
pub fn char_reveal_text(
    manager: &mut MotionManager,
    stage: &mut dyn Stage,
    element: &str,
    text: &str,
    spec: StaggerTextSpec,
) -> CharReveal {
    let fragments = split_fragments(text);
    let duration = effective_duration(stage, spec.duration_ms);
    let stagger = if stage.prefers_reduced_motion() {
        0.0
    } else {
        spec.stagger_ms
    };

    let members: Vec<(String, Tween)> = fragments
        .iter()
        .enumerate()
        .filter(|(_, f)| !f.is_space)
        .map(|(i, _)| {
            let tween = Tween::new(duration)
                .with_easing(spec.easing)
                .with_track(MotionProperty::Opacity, 0.0, 1.0)
                .with_track(MotionProperty::TranslateY, spec.distance, 0.0);
            (fragment_id(element, i), tween)
        })
        .collect();

    let handle = manager.start_group(stage, element, MotionKind::StaggerText, stagger, members);
    CharReveal { fragments, handle }
}

fn effective_duration(stage: &dyn Stage, duration_ms: f32) -> f32 {
    if stage.prefers_reduced_motion() {
        0.0
    } else {
        duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::FakeStage;
    use crate::types::HandleState;

    #[test]
    fn test_fade_slide_reaches_natural_position() {
        let mut stage = FakeStage::new();
        let mut manager = MotionManager::new();

        let id = fade_slide_in(&mut manager, &mut stage, "page", FadeSlideSpec::default());
        manager.update(&mut stage, 1000.0);

        assert_eq!(manager.state_of(id), Some(HandleState::Settled));
        assert_eq!(stage.applied("page", MotionProperty::Opacity), Some(1.0));
        assert_eq!(stage.applied("page", MotionProperty::TranslateY), Some(0.0));
    }

    #[test]
    fn test_fade_slide_restart_kills_prior() {
        let mut stage = FakeStage::new();
        let mut manager = MotionManager::new();

        let first = fade_slide_in(&mut manager, &mut stage, "page", FadeSlideSpec::default());
        let second = fade_slide_in(&mut manager, &mut stage, "page", FadeSlideSpec::default());

        assert_eq!(manager.state_of(first), Some(HandleState::Killed));
        assert_eq!(manager.state_of(second), Some(HandleState::Playing));
    }

    #[test]
    fn test_hover_reduced_motion_is_visually_inert() {
        let mut stage = FakeStage::new().with_reduced_motion();
        let mut manager = MotionManager::new();

        let id = hover_toggle(&mut manager, &mut stage, "btn", HoverToggleSpec::default());
        hover_enter(&mut manager, id);
        manager.update(&mut stage, 100.0);
        hover_leave(&mut manager, id);
        manager.update(&mut stage, 100.0);

        assert_eq!(stage.applied_count(), 0);

        // Still disposal-safe.
        manager.kill(id);
        manager.kill(id);
    }

    #[test]
    fn test_reduced_motion_entrance_is_instant() {
        let mut stage = FakeStage::new().with_reduced_motion();
        let mut manager = MotionManager::new();

        let id = fade_slide_in(&mut manager, &mut stage, "page", FadeSlideSpec::default());
        manager.update(&mut stage, 1.0);

        assert_eq!(manager.state_of(id), Some(HandleState::Settled));
        assert_eq!(stage.applied("page", MotionProperty::Opacity), Some(1.0));
    }

    #[test]
    fn test_rotate_freezes_on_kill() {
        let mut stage = FakeStage::new();
        let mut manager = MotionManager::new();

        let id = infinite_rotate(
            &mut manager,
            &mut stage,
            "badge",
            RotateSpec {
                ms_per_turn: 1000.0,
            },
        );
        manager.update(&mut stage, 250.0);
        let angle = stage.applied("badge", MotionProperty::Rotation).unwrap();
        assert!((angle - 90.0).abs() < 1.0);

        manager.kill(id);
        manager.update(&mut stage, 500.0);
        // Frozen at the angle it was killed at, no snap.
        assert_eq!(
            stage.applied("badge", MotionProperty::Rotation),
            Some(angle)
        );
    }

    #[test]
    fn test_char_reveal_staggers_fragments() {
        let mut stage = FakeStage::new();
        let mut manager = MotionManager::new();

        let reveal = char_reveal_text(
            &mut manager,
            &mut stage,
            "hero",
            "ab",
            StaggerTextSpec {
                distance: 60.0,
                duration_ms: 100.0,
                stagger_ms: 50.0,
                easing: Easing::Linear,
            },
        );
        assert_eq!(reveal.fragments.len(), 2);

        manager.update(&mut stage, 60.0);
        let c0 = stage
            .applied(&fragment_id("hero", 0), MotionProperty::Opacity)
            .unwrap();
        let c1 = stage
            .applied(&fragment_id("hero", 1), MotionProperty::Opacity)
            .unwrap();
        assert!(c0 > c1, "first character leads: {c0} vs {c1}");

        manager.update(&mut stage, 200.0);
        assert_eq!(manager.state_of(reveal.handle), Some(HandleState::Settled));
    }

    #[test]
    fn test_char_reveal_skips_joining_spaces() {
        let mut stage = FakeStage::new();
        let mut manager = MotionManager::new();

        let reveal = char_reveal_text(
            &mut manager,
            &mut stage,
            "hero",
            "a b",
            StaggerTextSpec::default(),
        );
        // Fragments: a, NBSP, b. The space at index 1 is never animated.
        assert_eq!(reveal.fragments.len(), 3);
        manager.update(&mut stage, 5000.0);
        assert!(
            stage
                .applied(&fragment_id("hero", 1), MotionProperty::Opacity)
                .is_none()
        );
        assert!(
            stage
                .applied(&fragment_id("hero", 2), MotionProperty::Opacity)
                .is_some()
        );
    }

    #[test]
    fn test_detached_target_never_panics() {
        let mut stage = FakeStage::new();
        stage.detach("gone");
        let mut manager = MotionManager::new();

        let a = fade_slide_in(&mut manager, &mut stage, "gone", FadeSlideSpec::default());
        let b = hover_toggle(&mut manager, &mut stage, "gone", HoverToggleSpec::default());
        let c = infinite_rotate(&mut manager, &mut stage, "gone", RotateSpec::default());

        for id in [a, b, c] {
            assert_eq!(manager.state_of(id), Some(HandleState::Killed));
            manager.kill(id);
        }
        manager.update(&mut stage, 100.0);
        assert_eq!(stage.applied_count(), 0);
    }
}

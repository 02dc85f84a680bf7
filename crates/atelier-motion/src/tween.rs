//! Reversible multi-track tweens.
//!
//! A `Tween` drives one or more visual properties on a single target from a
//! start value to an end value over a bounded duration. Unlike a one-shot
//! interpolation it can be paused, played, reversed from its current
//! progress, and looped, which is what hover toggles and rotation loops
//! need.
//!
//! Progress is tracked directly (0.0 to 1.0) rather than as elapsed time so
//! that direction flips mid-flight continue from the current visual state
//! instead of restarting or jumping to an end.

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::types::{HandleState, MotionProperty};

/// One animated property with its endpoint values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub property: MotionProperty,
    pub from: f64,
    pub to: f64,
}

impl Track {
    pub fn new(property: MotionProperty, from: f64, to: f64) -> Self {
        Self { property, from, to }
    }
}

/// A pausable, reversible tween over a fixed set of tracks.
#[derive(Debug, Clone)]
pub struct Tween {
    tracks: Vec<Track>,
    duration_ms: f32,
    /// Consumed once, before forward progress first advances.
    remaining_delay_ms: f32,
    easing: Easing,
    progress: f32,
    state: HandleState,
    looping: bool,
}

impl Tween {
    /// Create a paused tween with the given duration.
    pub fn new(duration_ms: f32) -> Self {
        Self {
            tracks: Vec::new(),
            duration_ms: duration_ms.max(0.0),
            remaining_delay_ms: 0.0,
            easing: Easing::default(),
            progress: 0.0,
            state: HandleState::Idle,
            looping: false,
        }
    }

    /// Add a track animating `property` from `from` to `to`.
    pub fn with_track(mut self, property: MotionProperty, from: f64, to: f64) -> Self {
        self.tracks.push(Track::new(property, from, to));
        self
    }

    /// Set the easing function.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Set a start delay, consumed before forward progress begins.
    pub fn with_delay(mut self, delay_ms: f32) -> Self {
        self.remaining_delay_ms = delay_ms.max(0.0);
        self
    }

    /// Make the tween wrap around instead of settling.
    pub fn looping(mut self) -> Self {
        self.looping = true;
        self
    }

    pub fn state(&self) -> HandleState {
        self.state
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn duration_ms(&self) -> f32 {
        self.duration_ms
    }

    /// Begin (or resume) playing forward from the current progress.
    ///
    /// No-op once the tween is terminal.
    pub fn play(&mut self) {
        if self.state.is_live() {
            self.state = HandleState::Playing;
        }
    }

    /// Reverse from the current progress back toward the start value.
    ///
    /// A settled tween reverses from its end; a killed tween stays killed.
    pub fn reverse(&mut self) {
        match self.state {
            HandleState::Killed => {}
            HandleState::Settled => {
                self.progress = 1.0;
                self.state = HandleState::Reversed;
            }
            _ => self.state = HandleState::Reversed,
        }
    }

    /// Mark the tween killed. Idempotent; the current values freeze as the
    /// last applied state (no snap to either endpoint).
    pub fn kill(&mut self) {
        self.state = HandleState::Killed;
    }

    /// Advance by `delta_ms`, returning `true` while the tween is live.
    ///
    /// Reversal that reaches the start value returns the tween to `Idle`
    /// so it can replay; forward completion settles it (unless looping).
    pub fn update(&mut self, delta_ms: f32) -> bool {
        match self.state {
            HandleState::Idle => true,
            HandleState::Settled | HandleState::Killed => false,
            HandleState::Playing => {
                let mut delta = delta_ms;
                if self.remaining_delay_ms > 0.0 {
                    let consumed = delta.min(self.remaining_delay_ms);
                    self.remaining_delay_ms -= consumed;
                    delta -= consumed;
                    if delta <= 0.0 {
                        return true;
                    }
                }

                self.progress += self.delta_progress(delta);
                if self.progress >= 1.0 {
                    if self.looping {
                        while self.progress >= 1.0 {
                            self.progress -= 1.0;
                        }
                        true
                    } else {
                        self.progress = 1.0;
                        self.state = HandleState::Settled;
                        false
                    }
                } else {
                    true
                }
            }
            HandleState::Reversed => {
                self.progress -= self.delta_progress(delta_ms);
                if self.progress <= 0.0 {
                    self.progress = 0.0;
                    self.state = HandleState::Idle;
                }
                true
            }
        }
    }

    fn delta_progress(&self, delta_ms: f32) -> f32 {
        if self.duration_ms > 0.0 {
            delta_ms / self.duration_ms
        } else {
            // Zero-duration tweens complete on their first advance.
            1.0
        }
    }

    /// Current value of one track's property.
    pub fn value_of(&self, property: MotionProperty) -> Option<f64> {
        let track = self.tracks.iter().find(|t| t.property == property)?;
        Some(self.track_value(track))
    }

    /// Current values of every track.
    pub fn current_values(&self) -> impl Iterator<Item = (MotionProperty, f64)> + '_ {
        self.tracks
            .iter()
            .map(|t| (t.property, self.track_value(t)))
    }

    fn track_value(&self, track: &Track) -> f64 {
        let eased = match self.state {
            HandleState::Settled => 1.0,
            _ => self.easing.evaluate(self.progress),
        };
        track.from + (track.to - track.from) * eased as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fade(duration_ms: f32) -> Tween {
        Tween::new(duration_ms)
            .with_easing(Easing::Linear)
            .with_track(MotionProperty::Opacity, 0.0, 1.0)
    }

    #[test]
    fn test_forward_lifecycle() {
        let mut tween = fade(100.0);
        assert_eq!(tween.state(), HandleState::Idle);

        tween.play();
        assert!(tween.update(50.0));
        assert_eq!(tween.state(), HandleState::Playing);
        assert!((tween.value_of(MotionProperty::Opacity).unwrap() - 0.5).abs() < 0.01);

        assert!(!tween.update(60.0));
        assert_eq!(tween.state(), HandleState::Settled);
        assert_eq!(tween.value_of(MotionProperty::Opacity), Some(1.0));
    }

    #[test]
    fn test_idle_does_not_advance() {
        let mut tween = fade(100.0);
        assert!(tween.update(500.0));
        assert_eq!(tween.state(), HandleState::Idle);
        assert_eq!(tween.value_of(MotionProperty::Opacity), Some(0.0));
    }

    #[test]
    fn test_delay_consumed_before_progress() {
        let mut tween = fade(100.0).with_delay(50.0);
        tween.play();

        tween.update(25.0);
        assert_eq!(tween.value_of(MotionProperty::Opacity), Some(0.0));

        // 25ms finishes the delay, the remaining 50ms advances progress.
        tween.update(75.0);
        assert!((tween.value_of(MotionProperty::Opacity).unwrap() - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_reverse_from_current_progress() {
        let mut tween = fade(100.0);
        tween.play();
        tween.update(60.0);

        tween.reverse();
        assert_eq!(tween.state(), HandleState::Reversed);
        tween.update(30.0);
        let v = tween.value_of(MotionProperty::Opacity).unwrap();
        assert!((v - 0.3).abs() < 0.01, "expected ~0.3, got {v}");

        // Reaching the start returns to Idle, ready to replay.
        tween.update(40.0);
        assert_eq!(tween.state(), HandleState::Idle);
        assert_eq!(tween.value_of(MotionProperty::Opacity), Some(0.0));

        tween.play();
        tween.update(50.0);
        assert_eq!(tween.state(), HandleState::Playing);
    }

    #[test]
    fn test_reverse_from_settled() {
        let mut tween = fade(100.0);
        tween.play();
        tween.update(150.0);
        assert_eq!(tween.state(), HandleState::Settled);

        tween.reverse();
        tween.update(50.0);
        let v = tween.value_of(MotionProperty::Opacity).unwrap();
        assert!((v - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_kill_is_idempotent_and_freezes() {
        let mut tween = fade(100.0);
        tween.play();
        tween.update(40.0);

        tween.kill();
        tween.kill();
        assert_eq!(tween.state(), HandleState::Killed);

        // No advance after kill; value frozen at current progress.
        assert!(!tween.update(100.0));
        let v = tween.value_of(MotionProperty::Opacity).unwrap();
        assert!((v - 0.4).abs() < 0.01);
    }

    #[test]
    fn test_play_after_kill_is_noop() {
        let mut tween = fade(100.0);
        tween.kill();
        tween.play();
        assert_eq!(tween.state(), HandleState::Killed);
        tween.reverse();
        assert_eq!(tween.state(), HandleState::Killed);
    }

    #[test]
    fn test_looping_wraps_and_never_settles() {
        let mut tween = Tween::new(100.0)
            .with_easing(Easing::Linear)
            .with_track(MotionProperty::Rotation, 0.0, 360.0)
            .looping();
        tween.play();

        assert!(tween.update(250.0));
        assert_eq!(tween.state(), HandleState::Playing);
        let v = tween.value_of(MotionProperty::Rotation).unwrap();
        assert!((v - 180.0).abs() < 1.0, "expected ~180, got {v}");
    }

    #[test]
    fn test_zero_duration_completes_on_first_advance() {
        let mut tween = fade(0.0);
        tween.play();
        assert!(!tween.update(1.0));
        assert_eq!(tween.state(), HandleState::Settled);
        assert_eq!(tween.value_of(MotionProperty::Opacity), Some(1.0));
    }

    #[test]
    fn test_multi_track_values() {
        let mut tween = Tween::new(100.0)
            .with_easing(Easing::Linear)
            .with_track(MotionProperty::Opacity, 0.0, 1.0)
            .with_track(MotionProperty::TranslateY, 30.0, 0.0);
        tween.play();
        tween.update(50.0);

        assert!((tween.value_of(MotionProperty::Opacity).unwrap() - 0.5).abs() < 0.01);
        assert!((tween.value_of(MotionProperty::TranslateY).unwrap() - 15.0).abs() < 0.5);
        assert_eq!(tween.value_of(MotionProperty::Scale), None);
    }
}

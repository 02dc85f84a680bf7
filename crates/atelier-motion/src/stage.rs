//! The injected host capability.
//!
//! Everything the coordinator knows about the page it animates flows
//! through the `Stage` trait: element attachment, visual property writes,
//! viewport geometry, the scroll offset, and user preferences. Controllers
//! take `&mut dyn Stage` rather than touching a process-wide engine, so
//! tests substitute [`FakeStage`] and assert exactly what was applied
//! without a real run-loop.

use std::collections::{HashMap, HashSet};

use crate::types::MotionProperty;

/// Host surface the coordinator animates against.
///
/// The scroll offset is the one piece of global mutable state; only the
/// scroll controller may call [`Stage::set_scroll_offset`]. Animation
/// primitives write visuals exclusively through [`Stage::apply`].
pub trait Stage {
    /// Whether the element is currently attached to the document. Detached
    /// targets turn every primitive into a logged no-op.
    fn is_attached(&self, element: &str) -> bool;

    /// Write a visual property value to an element.
    fn apply(&mut self, element: &str, property: MotionProperty, value: f64);

    /// Current viewport scroll offset.
    fn scroll_offset(&self) -> f64;

    /// Force the viewport scroll offset. Reserved for the scroll
    /// controller.
    fn set_scroll_offset(&mut self, offset: f64);

    /// Height of the viewport, in the same units as offsets.
    fn viewport_height(&self) -> f64;

    /// Document-space top edge of an element, if it is laid out.
    fn element_top(&self, element: &str) -> Option<f64>;

    /// Whether the user's system requests minimized animation.
    fn prefers_reduced_motion(&self) -> bool {
        false
    }

    /// Whether viewport-intersection observation is available. When false
    /// the reveal engine degrades to reveal-immediately-on-registration.
    fn supports_observation(&self) -> bool {
        true
    }

    /// Disable any host-native automatic scroll restoration, making the
    /// scroll controller the sole authority over the offset.
    fn disable_native_scroll_restoration(&mut self) {}
}

/// In-memory stage for tests and headless runs.
///
/// Records every applied (element, property) value, simulates attachment,
/// element layout, and the scroll offset, and counts setter calls so tests
/// can assert the single-writer policy.
#[derive(Debug, Default)]
pub struct FakeStage {
    applied: HashMap<(String, MotionProperty), f64>,
    detached: HashSet<String>,
    element_tops: HashMap<String, f64>,
    scroll_offset: f64,
    viewport_height: f64,
    reduced_motion: bool,
    observation: bool,
    scroll_writes: u32,
    restoration_disabled: bool,
}

impl FakeStage {
    pub fn new() -> Self {
        Self {
            viewport_height: 900.0,
            observation: true,
            ..Self::default()
        }
    }

    pub fn with_reduced_motion(mut self) -> Self {
        self.reduced_motion = true;
        self
    }

    pub fn without_observation(mut self) -> Self {
        self.observation = false;
        self
    }

    /// Mark an element as removed from the document.
    pub fn detach(&mut self, element: &str) {
        self.detached.insert(element.to_string());
    }

    /// Place an element's top edge in document space.
    pub fn place_element(&mut self, element: &str, top: f64) {
        self.element_tops.insert(element.to_string(), top);
    }

    /// Simulate the user scrolling to `offset`.
    pub fn user_scroll(&mut self, offset: f64) {
        self.scroll_offset = offset;
    }

    /// Last value applied for (element, property), if any.
    pub fn applied(&self, element: &str, property: MotionProperty) -> Option<f64> {
        self.applied
            .get(&(element.to_string(), property))
            .copied()
    }

    /// Number of distinct (element, property) pairs written so far.
    pub fn applied_count(&self) -> usize {
        self.applied.len()
    }

    /// How many times the scroll offset setter was invoked.
    pub fn scroll_write_count(&self) -> u32 {
        self.scroll_writes
    }

    pub fn restoration_disabled(&self) -> bool {
        self.restoration_disabled
    }
}

impl Stage for FakeStage {
    fn is_attached(&self, element: &str) -> bool {
        !self.detached.contains(element)
    }

    fn apply(&mut self, element: &str, property: MotionProperty, value: f64) {
        self.applied.insert((element.to_string(), property), value);
    }

    fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        self.scroll_offset = offset;
        self.scroll_writes += 1;
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn element_top(&self, element: &str) -> Option<f64> {
        self.element_tops.get(element).copied()
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    fn supports_observation(&self) -> bool {
        self.observation
    }

    fn disable_native_scroll_restoration(&mut self) {
        self.restoration_disabled = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fake_stage_records_applies() {
        let mut stage = FakeStage::new();
        stage.apply("hero", MotionProperty::Opacity, 0.5);
        stage.apply("hero", MotionProperty::Opacity, 0.9);

        assert_eq!(stage.applied("hero", MotionProperty::Opacity), Some(0.9));
        assert_eq!(stage.applied("hero", MotionProperty::Scale), None);
        assert_eq!(stage.applied_count(), 1);
    }

    #[test]
    fn test_attachment() {
        let mut stage = FakeStage::new();
        assert!(stage.is_attached("hero"));
        stage.detach("hero");
        assert!(!stage.is_attached("hero"));
    }

    #[test]
    fn test_scroll_write_counting() {
        let mut stage = FakeStage::new();
        stage.user_scroll(400.0);
        assert_eq!(stage.scroll_write_count(), 0);

        stage.set_scroll_offset(0.0);
        assert_eq!(stage.scroll_offset(), 0.0);
        assert_eq!(stage.scroll_write_count(), 1);
    }
}

//! Core motion types and identifiers.
//!
//! This module defines the fundamental types for the motion system:
//! - `HandleId`: Unique identifier for a running animation
//! - `HandleState`: Lifecycle state of an animation handle
//! - `MotionKind`: The tagged set of animation kinds the coordinator knows
//! - `MotionProperty`: Visual properties a tween can drive

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for an animation handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandleId(pub u64);

impl HandleId {
    /// Generate a new unique handle ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for HandleId {
    fn default() -> Self {
        Self::new()
    }
}

/// Lifecycle state of an animation handle.
///
/// `Settled` and `Killed` are terminal. A reversed handle that reaches its
/// start value returns to `Idle`, so hover toggles can replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandleState {
    /// Created or paused at its start value, awaiting a trigger.
    Idle,
    /// Actively playing forward.
    Playing,
    /// Playing backward from its current progress.
    Reversed,
    /// Completed normally at its end value.
    Settled,
    /// Disposed before (or after) completion. Disposal is idempotent.
    Killed,
}

impl Default for HandleState {
    fn default() -> Self {
        Self::Idle
    }
}

impl HandleState {
    /// True while the handle still advances on update ticks.
    pub fn is_live(&self) -> bool {
        matches!(self, Self::Idle | Self::Playing | Self::Reversed)
    }

    /// True once the handle can never advance again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Settled | Self::Killed)
    }
}

/// The animation kinds the coordinator treats uniformly.
///
/// At most one handle per (element, kind) pair is live at a time; starting
/// a new one kills the prior one for that pair first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionKind {
    /// Entrance from offset + transparent to natural position + opaque.
    FadeSlide,
    /// Per-character staggered text entrance.
    StaggerText,
    /// Paused timeline played on pointer enter, reversed on leave.
    HoverToggle,
    /// Unbounded looping rotation.
    InfiniteRotate,
}

/// Visual properties a tween can drive on a target element.
///
/// Scroll offset is deliberately absent: only the scroll controller may
/// write the viewport offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionProperty {
    Opacity,
    TranslateX,
    TranslateY,
    Scale,
    /// Rotation in degrees.
    Rotation,
    /// Normalized glow/box-shadow intensity, 0.0 to 1.0.
    ShadowStrength,
}

//! Scroll position control and scroll-triggered reveals.
//!
//! Two concerns live here: the [`ScrollController`], sole writer of the
//! viewport offset (navigation resets, the scroll-to-top glide), and the
//! [`RevealEngine`], which binds page sections to fade in as the user
//! scrolls down to them.

pub mod position;
pub mod reveal;

pub use position::{
    AffordanceState, GLIDE_DURATION_MS, SCROLL_TO_TOP_THRESHOLD, ScrollController, ScrollToTop,
};
pub use reveal::{ReplayPolicy, RevealEngine, RevealSpec, SIBLING_STAGGER_MS};

//! Atelier motion system.
//!
//! Disposable animation handles, reversible tweens, and the primitive
//! library the page coordinator is built on.
//!
//! # Features
//!
//! - **Tweens**: multi-track, pausable, reversible-from-current-progress
//! - **Primitives**: fade-slide entrances, hover toggles, rotation loops,
//!   staggered character reveals
//! - **Manager**: one owner for every handle, enforcing at most one live
//!   handle per (element, kind) pair
//! - **Stage**: injected host capability, so tests substitute a fake and
//!   assert applied values without a real run-loop
//! - **Events**: drainable lifecycle queue (started/settled/reversed/killed)
//!
//! Primitives never throw: detached targets log and no-op, reduced motion
//! reaches end states instantly, disposal is idempotent everywhere.

pub mod easing;
pub mod events;
pub mod manager;
pub mod primitives;
pub mod stage;
pub mod text;
pub mod tween;
pub mod types;

pub use easing::Easing;
pub use events::{EventQueue, MotionEvent};
pub use manager::MotionManager;
pub use primitives::{
    CharReveal, FadeSlideSpec, HoverToggleSpec, RotateSpec, StaggerTextSpec, char_reveal_text,
    fade_slide_in, fragment_id, hover_enter, hover_leave, hover_toggle, infinite_rotate,
};
pub use stage::{FakeStage, Stage};
pub use text::{NBSP, TextFragment, split_fragments};
pub use tween::{Track, Tween};
pub use types::{HandleId, HandleState, MotionKind, MotionProperty};

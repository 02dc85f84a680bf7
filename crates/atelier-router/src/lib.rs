//! Route table and page transition orchestration.
//!
//! [`Route`] resolves paths to pages; the [`Orchestrator`] runs the full
//! navigation lifecycle: teardown, scroll reset, entrance, reveal
//! activation.

pub mod orchestrator;
pub mod route;

pub use orchestrator::{EXIT_DISTANCE, EXIT_DURATION_MS, Orchestrator, Phase};
pub use route::{Route, ServiceArea};

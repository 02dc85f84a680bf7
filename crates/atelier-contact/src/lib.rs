//! Contact form boundary: local validation plus non-blocking submission
//! to the site's API server.

pub mod service;
pub mod validate;

pub use service::{ContactService, SubmitOutcome, SubmitResult};
pub use validate::{ContactForm, FieldError, MIN_MESSAGE_CHARS, validate};

//! Non-blocking contact form submission.
//!
//! Each accepted submission runs on its own worker thread doing a blocking
//! POST, with the result delivered through a channel on a later `poll`.
//! The caller's frame loop never blocks on the network.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use serde::Deserialize;

use crate::validate::{ContactForm, FieldError, validate};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Server reply body for a contact submission.
#[derive(Debug, Deserialize)]
struct SubmitReply {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Option<Vec<FieldError>>,
}

#[derive(Debug, thiserror::Error)]
enum SubmitFailure {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unreadable reply: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Final outcome of one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The server accepted the message.
    Accepted { message: String },
    /// The server rejected individual fields.
    Rejected { errors: Vec<FieldError> },
    /// The request never got a usable reply (network, timeout, bad body).
    Failed { error: String },
}

#[derive(Debug)]
pub struct SubmitResult {
    pub request_id: u64,
    pub outcome: SubmitOutcome,
}

struct PendingSubmit {
    request_id: u64,
    receiver: Receiver<SubmitOutcome>,
    join: Option<JoinHandle<()>>,
}

/// Manages contact form submissions without blocking the frame loop.
pub struct ContactService {
    api_base: String,
    pending: Vec<PendingSubmit>,
    timeout: Duration,
    next_id: u64,
}

impl ContactService {
    /// `api_base` is the server origin, e.g. `http://localhost:4000`.
    pub fn new(api_base: &str) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            pending: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
            next_id: 0,
        }
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    /// Validate and submit a form.
    ///
    /// Local validation failures are returned synchronously and nothing is
    /// sent. On success the request id is returned; its outcome arrives on
    /// a later [`Self::poll`].
    pub fn submit(&mut self, form: &ContactForm) -> Result<u64, Vec<FieldError>> {
        let errors = validate(form);
        if !errors.is_empty() {
            tracing::debug!(count = errors.len(), "contact form failed local validation");
            return Err(errors);
        }

        self.next_id += 1;
        let request_id = self.next_id;
        let url = format!("{}/api/contact", self.api_base);
        let payload = form.clone();
        let timeout = self.timeout;

        let (tx, rx) = mpsc::channel();
        let join = thread::spawn(move || {
            let outcome = match post_form(&url, &payload, timeout) {
                Ok(outcome) => outcome,
                Err(err) => SubmitOutcome::Failed {
                    error: err.to_string(),
                },
            };
            let _ = tx.send(outcome);
        });

        self.pending.push(PendingSubmit {
            request_id,
            receiver: rx,
            join: Some(join),
        });
        Ok(request_id)
    }

    /// Poll for completed submissions, returning all results that are ready.
    pub fn poll(&mut self) -> Vec<SubmitResult> {
        let mut ready = Vec::new();
        let mut still = Vec::new();
        for mut pending in self.pending.drain(..) {
            match pending.receiver.try_recv() {
                Ok(outcome) => {
                    if let Some(join) = pending.join.take() {
                        let _ = join.join();
                    }
                    ready.push(SubmitResult {
                        request_id: pending.request_id,
                        outcome,
                    });
                }
                Err(TryRecvError::Empty) => still.push(pending),
                Err(TryRecvError::Disconnected) => {
                    if let Some(join) = pending.join.take() {
                        let _ = join.join();
                    }
                    ready.push(SubmitResult {
                        request_id: pending.request_id,
                        outcome: SubmitOutcome::Failed {
                            error: "worker disconnected".to_string(),
                        },
                    });
                }
            }
        }
        self.pending = still;
        ready
    }

    /// Drop a pending submission so its eventual result is ignored.
    pub fn cancel(&mut self, request_id: u64) {
        self.pending.retain(|p| p.request_id != request_id);
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

fn post_form(url: &str, form: &ContactForm, timeout: Duration) -> Result<SubmitOutcome, SubmitFailure> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()?;
    let response = client.post(url).json(form).send()?;
    let status = response.status();
    let text = response.text()?;
    let reply: SubmitReply = serde_json::from_str(&text)?;

    if status.is_success() && reply.success {
        Ok(SubmitOutcome::Accepted {
            message: reply
                .message
                .unwrap_or_else(|| "Message sent".to_string()),
        })
    } else {
        Ok(SubmitOutcome::Rejected {
            errors: reply.errors.unwrap_or_default(),
        })
    }
}

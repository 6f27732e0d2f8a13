//! Simulated submission: a delayed, cancellable hand-off of a validated payload.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::contact::ContactForm;
use super::forgot_password::ForgotPasswordForm;
use super::login::LoginForm;
use super::service::SessionId;
use super::signup::SignupForm;
use super::FormKind;

/// Validated payload of any form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "form", rename_all = "snake_case")]
pub enum FormPayload {
    Login(LoginForm),
    Signup(SignupForm),
    Contact(ContactForm),
    ForgotPassword(ForgotPasswordForm),
}

impl FormPayload {
    /// Address the submission is associated with, used for log lines instead of the full body.
    pub fn contact_email(&self) -> &str {
        match self {
            FormPayload::Login(form) => &form.email,
            FormPayload::Signup(form) => &form.admin.email,
            FormPayload::Contact(form) => &form.email,
            FormPayload::ForgotPassword(form) => &form.email,
        }
    }
}

/// What the sink receives once the simulated latency has elapsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionRecord {
    pub session_id: SessionId,
    pub kind: FormKind,
    pub payload: FormPayload,
    pub submitted_at: DateTime<Utc>,
}

/// Receiver of completed submissions. There is no backend; implementations log or collect.
pub trait SubmissionSink: Send + Sync {
    fn deliver(&self, record: SubmissionRecord);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionOutcome {
    Delivered,
    Cancelled,
}

/// Handle to a running simulated submission.
///
/// Dropping the handle cancels the submission, so a task never outlives the form session
/// that owns it.
#[derive(Debug)]
pub struct SubmissionTask {
    cancel: CancellationToken,
    handle: Option<JoinHandle<SubmissionOutcome>>,
}

impl SubmissionTask {
    /// Waits `delay`, then hands `record` to `complete`, which delivers it and reports whether
    /// it did. Nothing is handed over if the task is cancelled first.
    ///
    /// `complete` runs after a final cancellation check. A caller that cancels from another
    /// thread must re-check its own state inside `complete` under the lock the canceller holds.
    pub fn spawn<F>(record: SubmissionRecord, delay: Duration, complete: F) -> Self
    where
        F: FnOnce(SubmissionRecord) -> bool + Send + 'static,
    {
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        let handle = tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = token.cancelled() => {
                    debug!(session = %record.session_id, kind = %record.kind, "submission cancelled");
                    SubmissionOutcome::Cancelled
                }
                _ = tokio::time::sleep(delay) => {
                    if token.is_cancelled() {
                        debug!(session = %record.session_id, kind = %record.kind, "submission cancelled");
                        return SubmissionOutcome::Cancelled;
                    }
                    let session = record.session_id.clone();
                    let kind = record.kind;
                    let email = record.payload.contact_email().to_string();
                    if complete(record) {
                        info!(%session, %kind, %email, "form submitted");
                        SubmissionOutcome::Delivered
                    } else {
                        debug!(%session, %kind, "form gone before delivery");
                        SubmissionOutcome::Cancelled
                    }
                }
            }
        });

        Self {
            cancel,
            handle: Some(handle),
        }
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.handle
            .as_ref()
            .map(JoinHandle::is_finished)
            .unwrap_or(true)
    }

    /// Waits for the task to settle. A task that panicked or was aborted counts as cancelled.
    pub async fn join(mut self) -> SubmissionOutcome {
        match self.handle.take() {
            Some(handle) => handle.await.unwrap_or(SubmissionOutcome::Cancelled),
            None => SubmissionOutcome::Cancelled,
        }
    }
}

impl Drop for SubmissionTask {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info};

use super::contact::{ContactForm, ContactFormState};
use super::forgot_password::ForgotPasswordForm;
use super::login::LoginForm;
use super::signup::{AdminDetails, CompanyDetails, SignupStep, SignupWizard};
use super::submission::{FormPayload, SubmissionRecord, SubmissionSink, SubmissionTask};
use super::validation::{FieldErrors, Validate};
use super::FormKind;
use crate::config::{SessionConfig, SubmissionConfig};

/// Identifier of a mounted form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_session_id() -> SessionId {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SessionId(format!("form-{id:06}"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// Accepting input.
    Idle,
    /// Validated and waiting on the simulated latency; the loading indicator is shown.
    Pending,
    /// The simulated submission finished.
    Completed,
}

impl SessionStatus {
    pub fn label(self) -> &'static str {
        match self {
            SessionStatus::Idle => "idle",
            SessionStatus::Pending => "pending",
            SessionStatus::Completed => "completed",
        }
    }
}

enum SessionForm {
    Single,
    Contact(ContactFormState),
    Signup(SignupWizard),
}

struct FormSession {
    kind: FormKind,
    status: SessionStatus,
    errors: FieldErrors,
    form: SessionForm,
    mounted_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
    last_active: Instant,
    task: Option<SubmissionTask>,
}

impl FormSession {
    fn new(kind: FormKind) -> Self {
        let form = match kind {
            FormKind::Contact => SessionForm::Contact(ContactFormState::new()),
            FormKind::Signup | FormKind::ModalSignup => {
                SessionForm::Signup(SignupWizard::new(kind.signup_variant().unwrap_or_default()))
            }
            _ => SessionForm::Single,
        };

        Self {
            kind,
            status: SessionStatus::Idle,
            errors: FieldErrors::new(),
            form,
            mounted_at: Utc::now(),
            completed_at: None,
            last_active: Instant::now(),
            task: None,
        }
    }

    fn touch(&mut self) {
        self.last_active = Instant::now();
    }

    fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        self.status != SessionStatus::Pending && now.duration_since(self.last_active) >= ttl
    }

    fn view(&self, id: &SessionId) -> SessionView {
        let errors = match &self.form {
            SessionForm::Signup(wizard) => wizard.errors().clone(),
            SessionForm::Contact(state) => state.errors.clone(),
            SessionForm::Single => self.errors.clone(),
        };
        let signup_step = match &self.form {
            SessionForm::Signup(wizard) => Some(wizard.step()),
            _ => None,
        };

        SessionView {
            session_id: id.clone(),
            kind: self.kind,
            status: self.status,
            is_loading: self.status == SessionStatus::Pending,
            is_success: self.status == SessionStatus::Completed,
            errors,
            signup_step,
            mounted_at: self.mounted_at,
            completed_at: self.completed_at,
        }
    }

    fn ensure_kind(
        &self,
        allowed: impl Fn(FormKind) -> bool,
        requested: FormKind,
    ) -> Result<(), FormServiceError> {
        if allowed(self.kind) {
            Ok(())
        } else {
            Err(FormServiceError::WrongForm {
                mounted: self.kind,
                requested,
            })
        }
    }

    fn ensure_idle(&self) -> Result<(), FormServiceError> {
        if self.status == SessionStatus::Pending {
            Err(FormServiceError::SubmissionInFlight)
        } else {
            Ok(())
        }
    }
}

/// Snapshot of a session returned to callers.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub session_id: SessionId,
    pub kind: FormKind,
    pub status: SessionStatus,
    pub is_loading: bool,
    /// Set once the simulated submission has been delivered.
    pub is_success: bool,
    pub errors: FieldErrors,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signup_step: Option<SignupStep>,
    pub mounted_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

type SessionMap = Arc<Mutex<HashMap<SessionId, FormSession>>>;

/// Owns the mounted form sessions and their simulated submissions.
pub struct FormService<S: ?Sized> {
    sink: Arc<S>,
    delays: SubmissionConfig,
    lifetime: SessionConfig,
    sessions: SessionMap,
}

impl<S> FormService<S>
where
    S: SubmissionSink + ?Sized + 'static,
{
    pub fn new(sink: Arc<S>, delays: SubmissionConfig) -> Self {
        Self {
            sink,
            delays,
            lifetime: SessionConfig::default(),
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn with_sessions(mut self, lifetime: SessionConfig) -> Self {
        self.lifetime = lifetime;
        self
    }

    pub fn session_count(&self) -> usize {
        self.lock().len()
    }

    /// Releases every session idle for at least the configured TTL. Sessions waiting on a
    /// submission are kept until it settles.
    pub fn reap_expired(&self) -> usize {
        let now = Instant::now();
        let ttl = self.lifetime.ttl;
        let mut sessions = self.lock();
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired(now, ttl));
        before - sessions.len()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<SessionId, FormSession>> {
        self.sessions.lock().expect("session mutex poisoned")
    }

    /// Creates a blank session for `kind`.
    pub fn mount(&self, kind: FormKind) -> SessionView {
        let id = next_session_id();
        let session = FormSession::new(kind);
        let view = session.view(&id);
        self.lock().insert(id.clone(), session);
        debug!(session = %id, %kind, "form mounted");
        view
    }

    pub fn status(&self, id: &SessionId) -> Result<SessionView, FormServiceError> {
        let sessions = self.lock();
        let session = sessions
            .get(id)
            .ok_or_else(|| FormServiceError::SessionNotFound(id.clone()))?;
        Ok(session.view(id))
    }

    /// Discards the session; a pending submission is cancelled and never delivered.
    pub fn unmount(&self, id: &SessionId) -> Result<SessionView, FormServiceError> {
        let session = self
            .lock()
            .remove(id)
            .ok_or_else(|| FormServiceError::SessionNotFound(id.clone()))?;

        if let Some(task) = &session.task {
            if !task.is_finished() {
                info!(session = %id, kind = %session.kind, "form unmounted with submission pending");
            }
            task.cancel();
        }

        Ok(session.view(id))
    }

    pub fn submit_login(
        &self,
        id: &SessionId,
        form: LoginForm,
    ) -> Result<SessionView, FormServiceError> {
        self.submit_single(id, FormKind::Login, FormKind::is_login, form, FormPayload::Login)
    }

    pub fn submit_forgot_password(
        &self,
        id: &SessionId,
        form: ForgotPasswordForm,
    ) -> Result<SessionView, FormServiceError> {
        self.submit_single(
            id,
            FormKind::ForgotPassword,
            |kind| kind == FormKind::ForgotPassword,
            form,
            FormPayload::ForgotPassword,
        )
    }

    fn submit_single<F>(
        &self,
        id: &SessionId,
        requested: FormKind,
        allowed: impl Fn(FormKind) -> bool,
        form: F,
        wrap: impl FnOnce(F) -> FormPayload,
    ) -> Result<SessionView, FormServiceError>
    where
        F: Validate,
    {
        let mut sessions = self.lock();
        let session = sessions
            .get_mut(id)
            .ok_or_else(|| FormServiceError::SessionNotFound(id.clone()))?;
        session.ensure_kind(allowed, requested)?;
        session.ensure_idle()?;
        session.touch();

        if let Err(errors) = form.validate() {
            session.errors = errors.clone();
            return Err(FormServiceError::Validation(errors));
        }

        session.errors.clear();
        self.start(id, session, wrap(form));
        Ok(session.view(id))
    }

    /// Replaces the contact form values and submits them.
    pub fn submit_contact(
        &self,
        id: &SessionId,
        form: ContactForm,
    ) -> Result<SessionView, FormServiceError> {
        let mut sessions = self.lock();
        let session = sessions
            .get_mut(id)
            .ok_or_else(|| FormServiceError::SessionNotFound(id.clone()))?;
        session.ensure_idle()?;
        session.touch();

        let payload = match &mut session.form {
            SessionForm::Contact(state) => {
                state.values = form;
                state.submit().ok_or_else(|| FormServiceError::Validation(state.errors.clone()))?
            }
            _ => {
                return Err(FormServiceError::WrongForm {
                    mounted: session.kind,
                    requested: FormKind::Contact,
                })
            }
        };

        self.start(id, session, FormPayload::Contact(payload));
        Ok(session.view(id))
    }

    /// Stores the company step and tries to advance to the admin step.
    pub fn signup_next(
        &self,
        id: &SessionId,
        company: CompanyDetails,
    ) -> Result<SessionView, FormServiceError> {
        self.with_wizard(id, |wizard| {
            wizard.company = company;
            if wizard.next() {
                Ok(())
            } else {
                Err(FormServiceError::Validation(wizard.errors().clone()))
            }
        })
    }

    pub fn signup_back(&self, id: &SessionId) -> Result<SessionView, FormServiceError> {
        self.with_wizard(id, |wizard| {
            wizard.back();
            Ok(())
        })
    }

    /// Stores the admin step and submits the combined signup payload.
    pub fn submit_signup(
        &self,
        id: &SessionId,
        admin: AdminDetails,
    ) -> Result<SessionView, FormServiceError> {
        let mut sessions = self.lock();
        let session = sessions
            .get_mut(id)
            .ok_or_else(|| FormServiceError::SessionNotFound(id.clone()))?;
        session.ensure_idle()?;
        session.touch();

        let payload = match &mut session.form {
            SessionForm::Signup(wizard) => {
                wizard.admin = admin;
                match wizard.submit(FormPayload::Signup) {
                    Some(payload) => payload,
                    // Submitted from a valid company step: the wizard only advanced.
                    None if wizard.errors().is_empty() => return Ok(session.view(id)),
                    None => return Err(FormServiceError::Validation(wizard.errors().clone())),
                }
            }
            _ => {
                return Err(FormServiceError::WrongForm {
                    mounted: session.kind,
                    requested: FormKind::Signup,
                })
            }
        };

        self.start(id, session, payload);
        Ok(session.view(id))
    }

    fn with_wizard(
        &self,
        id: &SessionId,
        apply: impl FnOnce(&mut SignupWizard) -> Result<(), FormServiceError>,
    ) -> Result<SessionView, FormServiceError> {
        let mut sessions = self.lock();
        let session = sessions
            .get_mut(id)
            .ok_or_else(|| FormServiceError::SessionNotFound(id.clone()))?;
        session.ensure_idle()?;
        session.touch();

        match &mut session.form {
            SessionForm::Signup(wizard) => apply(wizard)?,
            _ => {
                return Err(FormServiceError::WrongForm {
                    mounted: session.kind,
                    requested: FormKind::Signup,
                })
            }
        }

        Ok(session.view(id))
    }

    fn start(&self, id: &SessionId, session: &mut FormSession, payload: FormPayload) {
        let record = SubmissionRecord {
            session_id: id.clone(),
            kind: session.kind,
            payload,
            submitted_at: Utc::now(),
        };
        let delay = self.delays.delay_for(session.kind);
        let sessions = Arc::clone(&self.sessions);
        let sink = Arc::clone(&self.sink);

        session.status = SessionStatus::Pending;
        session.completed_at = None;
        // Delivery happens under the session lock, so an unmount either precedes it and wins
        // or follows a completed submission.
        session.task = Some(SubmissionTask::spawn(record, delay, move |record| {
            let mut sessions = sessions.lock().expect("session mutex poisoned");
            match sessions.get_mut(&record.session_id) {
                Some(session) if session.status == SessionStatus::Pending => {
                    sink.deliver(record);
                    session.status = SessionStatus::Completed;
                    session.completed_at = Some(Utc::now());
                    session.touch();
                    true
                }
                _ => false,
            }
        }));

        debug!(
            session = %id,
            kind = %session.kind,
            delay_ms = delay.as_millis() as u64,
            "simulated submission started"
        );
    }

    /// Sweeps expired sessions every `sweep_interval` until the service is dropped.
    pub fn spawn_reaper(self: &Arc<Self>) -> JoinHandle<()> {
        let service = Arc::downgrade(self);
        let every = self.lifetime.sweep_interval.max(Duration::from_millis(1));

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let Some(service) = service.upgrade() else {
                    break;
                };
                let released = service.reap_expired();
                if released > 0 {
                    debug!(
                        released,
                        remaining = service.session_count(),
                        "expired form sessions released"
                    );
                }
            }
        })
    }
}

/// Error raised by the form service.
#[derive(Debug, thiserror::Error)]
pub enum FormServiceError {
    #[error("form has validation errors: {0}")]
    Validation(FieldErrors),
    #[error("form session {0} not found")]
    SessionNotFound(SessionId),
    #[error("a submission is already in progress")]
    SubmissionInFlight,
    #[error("session holds a {mounted} form, not {requested}")]
    WrongForm {
        mounted: FormKind,
        requested: FormKind,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::submission::SubmissionOutcome;

    #[derive(Default)]
    struct Collecting {
        records: Mutex<Vec<SubmissionRecord>>,
    }

    impl SubmissionSink for Collecting {
        fn deliver(&self, record: SubmissionRecord) {
            self.records.lock().expect("sink mutex poisoned").push(record);
        }
    }

    impl Collecting {
        fn count(&self) -> usize {
            self.records.lock().expect("sink mutex poisoned").len()
        }
    }

    fn service() -> (FormService<Collecting>, Arc<Collecting>) {
        let sink = Arc::new(Collecting::default());
        (
            FormService::new(sink.clone(), SubmissionConfig::default()),
            sink,
        )
    }

    fn login(email: &str) -> LoginForm {
        LoginForm {
            email: email.to_string(),
            password: "hunter2".to_string(),
            ..LoginForm::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn invalid_login_never_starts_a_submission() {
        let (service, sink) = service();
        let view = service.mount(FormKind::Login);

        let err = service
            .submit_login(&view.session_id, login("not-an-email"))
            .expect_err("bad email rejected");
        assert!(matches!(err, FormServiceError::Validation(ref errors) if errors.contains("email")));

        let after = service.status(&view.session_id).expect("session exists");
        assert_eq!(after.status, SessionStatus::Idle);
        assert!(!after.is_loading);
        assert!(after.errors.contains("email"));

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(sink.count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn login_completes_after_configured_delay() {
        let (service, sink) = service();
        let view = service.mount(FormKind::Login);

        let pending = service
            .submit_login(&view.session_id, login("buyer@chainlink.pro"))
            .expect("valid login accepted");
        assert!(pending.is_loading);

        tokio::time::sleep(Duration::from_millis(999)).await;
        assert_eq!(sink.count(), 0);

        tokio::time::sleep(Duration::from_millis(2)).await;
        tokio::task::yield_now().await;
        let done = service.status(&view.session_id).expect("session exists");
        assert_eq!(done.status, SessionStatus::Completed);
        assert!(done.completed_at.is_some());
        assert_eq!(sink.count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn second_submit_while_pending_is_rejected() {
        let (service, _sink) = service();
        let view = service.mount(FormKind::ForgotPassword);
        let form = ForgotPasswordForm {
            email: "reset@chainlink.pro".to_string(),
        };

        service
            .submit_forgot_password(&view.session_id, form.clone())
            .expect("first submit accepted");
        let err = service
            .submit_forgot_password(&view.session_id, form)
            .expect_err("second submit rejected");
        assert!(matches!(err, FormServiceError::SubmissionInFlight));
    }

    #[tokio::test(start_paused = true)]
    async fn unmount_cancels_pending_submission() {
        let (service, sink) = service();
        let view = service.mount(FormKind::ForgotPassword);
        service
            .submit_forgot_password(
                &view.session_id,
                ForgotPasswordForm {
                    email: "reset@chainlink.pro".to_string(),
                },
            )
            .expect("submit accepted");

        let last = service.unmount(&view.session_id).expect("unmounted");
        assert_eq!(last.status, SessionStatus::Pending);

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(sink.count(), 0);
        assert!(matches!(
            service.status(&view.session_id),
            Err(FormServiceError::SessionNotFound(_))
        ));
    }

    #[tokio::test]
    async fn login_payload_is_rejected_by_contact_session() {
        let (service, _sink) = service();
        let view = service.mount(FormKind::Contact);
        let err = service
            .submit_login(&view.session_id, login("buyer@chainlink.pro"))
            .expect_err("wrong form rejected");
        assert!(matches!(
            err,
            FormServiceError::WrongForm {
                mounted: FormKind::Contact,
                requested: FormKind::Login
            }
        ));
    }

    #[tokio::test]
    async fn signup_sessions_start_on_company_step() {
        let (service, _sink) = service();
        let view = service.mount(FormKind::ModalSignup);
        assert_eq!(view.signup_step, Some(SignupStep::Company));

        let err = service
            .signup_next(&view.session_id, CompanyDetails::default())
            .expect_err("blank company rejected");
        assert!(matches!(err, FormServiceError::Validation(_)));
        let after = service.status(&view.session_id).expect("session exists");
        assert_eq!(after.signup_step, Some(SignupStep::Company));
        assert!(after.errors.contains("company_name"));
    }

    fn forgot_password() -> ForgotPasswordForm {
        ForgotPasswordForm {
            email: "reset@chainlink.pro".to_string(),
        }
    }

    fn expiring_service(ttl_secs: u64) -> (Arc<FormService<Collecting>>, Arc<Collecting>) {
        let sink = Arc::new(Collecting::default());
        let service = FormService::new(sink.clone(), SubmissionConfig::default()).with_sessions(
            SessionConfig {
                ttl: Duration::from_secs(ttl_secs),
                sweep_interval: Duration::from_secs(30),
            },
        );
        (Arc::new(service), sink)
    }

    #[tokio::test(start_paused = true)]
    async fn abandoned_and_completed_sessions_expire() {
        let (service, sink) = expiring_service(600);
        let reaper = service.spawn_reaper();

        for _ in 0..1_000 {
            service.mount(FormKind::Contact);
        }
        let reset = service.mount(FormKind::ForgotPassword);
        service
            .submit_forgot_password(&reset.session_id, forgot_password())
            .expect("valid email accepted");

        tokio::time::sleep(Duration::from_secs(2)).await;
        let done = service
            .status(&reset.session_id)
            .expect("readable after completion");
        assert_eq!(done.status, SessionStatus::Completed);
        assert_eq!(service.session_count(), 1_001);

        tokio::time::sleep(Duration::from_secs(3600)).await;
        assert_eq!(service.session_count(), 0);
        assert!(matches!(
            service.status(&reset.session_id),
            Err(FormServiceError::SessionNotFound(_))
        ));
        assert_eq!(sink.count(), 1);
        reaper.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn activity_extends_a_session() {
        let (service, _sink) = expiring_service(600);
        let reaper = service.spawn_reaper();
        let view = service.mount(FormKind::Signup);

        tokio::time::sleep(Duration::from_secs(500)).await;
        service.signup_back(&view.session_id).expect("still mounted");

        tokio::time::sleep(Duration::from_secs(400)).await;
        assert!(service.status(&view.session_id).is_ok());

        tokio::time::sleep(Duration::from_secs(300)).await;
        assert!(service.status(&view.session_id).is_err());
        reaper.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn pending_sessions_outlive_the_ttl() {
        let (service, sink) = expiring_service(0);
        let view = service.mount(FormKind::ForgotPassword);
        service
            .submit_forgot_password(&view.session_id, forgot_password())
            .expect("valid email accepted");

        assert_eq!(service.reap_expired(), 0);
        tokio::time::sleep(Duration::from_millis(1600)).await;
        assert_eq!(sink.count(), 1);
        assert_eq!(service.reap_expired(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn reaper_stops_with_the_service() {
        let (service, _sink) = expiring_service(600);
        let reaper = service.spawn_reaper();
        drop(service);

        tokio::time::sleep(Duration::from_secs(61)).await;
        assert!(reaper.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn session_detached_before_cancel_is_not_delivered() {
        let (service, sink) = service();
        let view = service.mount(FormKind::ForgotPassword);
        service
            .submit_forgot_password(&view.session_id, forgot_password())
            .expect("valid email accepted");

        // Removed from the registry but not yet cancelled, as when an unmount races the timer.
        let mut detached = service
            .lock()
            .remove(&view.session_id)
            .expect("session mounted");
        let task = detached.task.take().expect("submission running");

        assert_eq!(task.join().await, SubmissionOutcome::Cancelled);
        assert_eq!(sink.count(), 0);
    }
}

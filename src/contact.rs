use std::{
    fmt,
    str::FromStr,
    sync::{Arc, LazyLock, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use log::{debug, info, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::notify::{Notification, Notifier};
use crate::scheduler::{Scheduler, TaskId};

pub const SUCCESS_TITLE: &str = "Message sent successfully!";
pub const SUCCESS_DESCRIPTION: &str = "Thank you for reaching out. I'll get back to you soon.";
pub const FAILURE_TITLE: &str = "Message could not be sent";

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Body,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Body];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Body => "body",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Field::Name),
            "email" => Ok(Field::Email),
            "body" | "message" => Ok(Field::Body),
            other => Err(DraftError::UnknownField(other.to_string())),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("{0} is required")]
    EmptyField(Field),
    #[error("email address is malformed")]
    MalformedEmail,
    #[error("no such field: {0}")]
    UnknownField(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("submission failed: {0}")]
    SubmissionFailed(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftMessage {
    pub name: String,
    pub email: String,
    pub body: String,
}

impl DraftMessage {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Body => &self.body,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Body => &mut self.body,
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    pub fn validate(&self) -> Result<(), DraftError> {
        if let Some(field) = Field::ALL
            .into_iter()
            .find(|f| self.get(*f).trim().is_empty())
        {
            return Err(DraftError::EmptyField(field));
        }
        if !EMAIL_SHAPE.is_match(self.email.trim()) {
            return Err(DraftError::MalformedEmail);
        }
        Ok(())
    }
}

/// Delivers a validated draft once the submission delay has elapsed.
pub trait Transport: Send + Sync {
    fn send(&self, draft: &DraftMessage) -> Result<(), SubmitError>;
}

/// Pretends to deliver; nothing leaves the page.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedTransport;

impl Transport for SimulatedTransport {
    fn send(&self, draft: &DraftMessage) -> Result<(), SubmitError> {
        info!("simulated delivery of message from {}", draft.name);
        Ok(())
    }
}

/// What happens to a pending submission when its form goes away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisposalPolicy {
    #[default]
    CancelPending,
    LetFinish,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormConfig {
    pub delay: Duration,
    pub disposal: DisposalPolicy,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(1000),
            disposal: DisposalPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreReason {
    InFlight,
    Invalid(DraftError),
    Disposed,
    /// The scheduler refused the deferred completion.
    Unscheduled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Scheduled(TaskId),
    Ignored(IgnoreReason),
}

/// What the UI mirrors after every change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub draft: DraftMessage,
    pub submitting: bool,
}

type Listener = Arc<dyn Fn(&FormSnapshot) + Send + Sync>;

#[derive(Default)]
struct FormState {
    draft: DraftMessage,
    submitting: bool,
    pending: Option<TaskId>,
    disposed: bool,
}

/// Draft state and simulated submission for the contact section.
///
/// Cloning shares the same form; the deferred completion holds a clone.
#[derive(Clone)]
pub struct ContactForm {
    state: Arc<Mutex<FormState>>,
    scheduler: Arc<dyn Scheduler>,
    notifier: Arc<dyn Notifier>,
    transport: Arc<dyn Transport>,
    listener: Option<Listener>,
    config: FormConfig,
}

impl ContactForm {
    pub fn new(
        scheduler: Arc<dyn Scheduler>,
        notifier: Arc<dyn Notifier>,
        config: FormConfig,
    ) -> Self {
        Self {
            state: Arc::default(),
            scheduler,
            notifier,
            transport: Arc::new(SimulatedTransport),
            listener: None,
            config,
        }
    }

    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    pub fn on_change(mut self, listener: impl Fn(&FormSnapshot) + Send + Sync + 'static) -> Self {
        self.listener = Some(Arc::new(listener));
        self
    }

    pub fn snapshot(&self) -> FormSnapshot {
        let state = self.state();
        FormSnapshot {
            draft: state.draft.clone(),
            submitting: state.submitting,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.state().submitting
    }

    pub fn update_field(&self, field: Field, value: impl Into<String>) {
        *self.state().draft.slot(field) = value.into();
        self.publish();
    }

    pub fn submit(&self) -> SubmitOutcome {
        let draft = {
            let mut state = self.state();
            if state.disposed {
                return SubmitOutcome::Ignored(IgnoreReason::Disposed);
            }
            if state.submitting {
                debug!("submission already in flight, ignoring");
                return SubmitOutcome::Ignored(IgnoreReason::InFlight);
            }
            if let Err(e) = state.draft.validate() {
                debug!("ignoring submission of invalid draft: {e}");
                return SubmitOutcome::Ignored(IgnoreReason::Invalid(e));
            }
            state.submitting = true;
            state.draft.clone()
        };
        self.publish();

        let form = self.clone();
        let scheduled = self
            .scheduler
            .schedule(self.config.delay, Box::new(move || form.complete(draft)));
        let Some(id) = scheduled else {
            warn!("couldn't schedule submission, rolling back");
            self.state().submitting = false;
            self.publish();
            return SubmitOutcome::Ignored(IgnoreReason::Unscheduled);
        };
        {
            let mut state = self.state();
            if state.submitting {
                state.pending = Some(id);
            }
        }
        debug!("submission scheduled as {id}");
        SubmitOutcome::Scheduled(id)
    }

    /// Drops a pending submission, leaving the draft as typed.
    pub fn cancel(&self) -> bool {
        let cancelled = {
            let mut state = self.state();
            let Some(id) = state.pending.take() else {
                return false;
            };
            state.submitting = false;
            self.scheduler.cancel(id)
        };
        if cancelled {
            debug!("pending submission cancelled");
        }
        self.publish();
        cancelled
    }

    /// Called when the owning view is torn down.
    pub fn dispose(&self) {
        if self.config.disposal == DisposalPolicy::CancelPending {
            self.cancel();
        }
        self.state().disposed = true;
    }

    fn complete(&self, draft: DraftMessage) {
        let result = self.transport.send(&draft);
        {
            let mut state = self.state();
            state.pending = None;
            state.submitting = false;
            if result.is_ok() {
                state.draft = DraftMessage::default();
            }
        }
        self.publish();

        match result {
            Ok(()) => self
                .notifier
                .notify(Notification::success(SUCCESS_TITLE, SUCCESS_DESCRIPTION)),
            Err(e) => {
                warn!("{e}");
                self.notifier
                    .notify(Notification::error(FAILURE_TITLE, e.to_string()));
            }
        }
    }

    fn publish(&self) {
        let Some(listener) = &self.listener else {
            return;
        };
        let snapshot = {
            let state = self.state();
            if state.disposed {
                return;
            }
            FormSnapshot {
                draft: state.draft.clone(),
                submitting: state.submitting,
            }
        };
        listener(&snapshot);
    }

    fn state(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NotificationKind;
    use crate::scheduler::{ManualScheduler, Task};

    #[derive(Default)]
    struct RecordingNotifier {
        seen: Mutex<Vec<Notification>>,
    }

    impl RecordingNotifier {
        fn seen(&self) -> Vec<Notification> {
            self.seen.lock().unwrap().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notification: Notification) {
            self.seen.lock().unwrap().push(notification);
        }
    }

    struct FailingTransport;

    impl Transport for FailingTransport {
        fn send(&self, _draft: &DraftMessage) -> Result<(), SubmitError> {
            Err(SubmitError::SubmissionFailed("relay offline".to_string()))
        }
    }

    /// Drops every task, like a browser that refuses the timer.
    struct RefusingScheduler;

    impl Scheduler for RefusingScheduler {
        fn schedule(&self, _delay: Duration, _task: Task) -> Option<TaskId> {
            None
        }

        fn cancel(&self, _id: TaskId) -> bool {
            false
        }
    }

    fn setup(config: FormConfig) -> (ContactForm, ManualScheduler, Arc<RecordingNotifier>) {
        let scheduler = ManualScheduler::new();
        let notifier = Arc::new(RecordingNotifier::default());
        let form = ContactForm::new(Arc::new(scheduler.clone()), notifier.clone(), config);
        (form, scheduler, notifier)
    }

    fn fill(form: &ContactForm) {
        for (name, value) in [("name", "Ada"), ("email", "ada@x.com"), ("body", "hi")] {
            let field = name.parse::<Field>().expect("known field");
            form.update_field(field, value);
        }
    }

    #[test]
    fn test_submit_scenario() {
        let (form, scheduler, notifier) = setup(FormConfig::default());
        fill(&form);

        assert!(matches!(form.submit(), SubmitOutcome::Scheduled(_)));
        assert!(form.is_submitting());

        scheduler.advance(Duration::from_millis(999));
        assert!(form.is_submitting());
        assert!(notifier.seen().is_empty());

        scheduler.advance(Duration::from_millis(1));
        let snapshot = form.snapshot();
        assert!(!snapshot.submitting);
        assert_eq!(snapshot.draft, DraftMessage::default());

        let seen = notifier.seen();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].title, "Message sent successfully!");
        assert_eq!(seen[0].kind, NotificationKind::Success);
    }

    #[test]
    fn test_reentrant_submit_is_ignored() {
        let (form, scheduler, notifier) = setup(FormConfig::default());
        fill(&form);

        assert!(matches!(form.submit(), SubmitOutcome::Scheduled(_)));
        assert_eq!(
            form.submit(),
            SubmitOutcome::Ignored(IgnoreReason::InFlight)
        );
        assert_eq!(scheduler.pending(), 1);

        scheduler.advance(Duration::from_secs(5));
        assert_eq!(notifier.seen().len(), 1);
    }

    #[test]
    fn test_invalid_drafts_are_ignored() {
        let (form, scheduler, _) = setup(FormConfig::default());
        assert_eq!(
            form.submit(),
            SubmitOutcome::Ignored(IgnoreReason::Invalid(DraftError::EmptyField(Field::Name)))
        );

        form.update_field(Field::Name, "Ada");
        form.update_field(Field::Email, "not-an-address");
        form.update_field(Field::Body, "hello");
        assert_eq!(
            form.submit(),
            SubmitOutcome::Ignored(IgnoreReason::Invalid(DraftError::MalformedEmail))
        );

        form.update_field(Field::Email, "ada@x.com");
        form.update_field(Field::Body, "   ");
        assert_eq!(
            form.submit(),
            SubmitOutcome::Ignored(IgnoreReason::Invalid(DraftError::EmptyField(Field::Body)))
        );
        assert!(!form.is_submitting());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_email_shapes() {
        let draft = |email: &str| DraftMessage {
            name: "Ada".to_string(),
            email: email.to_string(),
            body: "hi".to_string(),
        };
        assert!(draft("ada@x.com").validate().is_ok());
        assert!(draft(" ada@lovelace.co.uk ").validate().is_ok());
        for bad in ["ada", "ada@", "@x.com", "ada@x", "a da@x.com", "ada@@x.com"] {
            assert_eq!(
                draft(bad).validate(),
                Err(DraftError::MalformedEmail),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_unknown_field_name() {
        assert_eq!(
            "phone".parse::<Field>(),
            Err(DraftError::UnknownField("phone".to_string()))
        );
        assert_eq!("message".parse::<Field>(), Ok(Field::Body));
    }

    #[test]
    fn test_failed_delivery_keeps_draft() {
        let (form, scheduler, notifier) = setup(FormConfig::default());
        let form = form.with_transport(Arc::new(FailingTransport));
        fill(&form);

        form.submit();
        scheduler.advance(Duration::from_millis(1000));

        let snapshot = form.snapshot();
        assert!(!snapshot.submitting);
        assert_eq!(snapshot.draft.name, "Ada");
        assert_eq!(snapshot.draft.email, "ada@x.com");

        let seen = notifier.seen();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].kind, NotificationKind::Error);
        assert!(seen[0].description.contains("relay offline"));

        // retry is allowed once the failure has been reported
        assert!(matches!(form.submit(), SubmitOutcome::Scheduled(_)));
    }

    #[test]
    fn test_cancel_keeps_draft() {
        let (form, scheduler, notifier) = setup(FormConfig::default());
        fill(&form);
        form.submit();

        assert!(form.cancel());
        assert!(!form.is_submitting());
        assert!(!form.cancel());

        scheduler.advance(Duration::from_secs(2));
        assert!(notifier.seen().is_empty());
        assert_eq!(form.snapshot().draft.body, "hi");
    }

    #[test]
    fn test_dispose_cancels_pending_by_default() {
        let (form, scheduler, notifier) = setup(FormConfig::default());
        fill(&form);
        form.submit();
        form.dispose();

        assert_eq!(scheduler.pending(), 0);
        scheduler.advance(Duration::from_secs(2));
        assert!(notifier.seen().is_empty());
        assert_eq!(
            form.submit(),
            SubmitOutcome::Ignored(IgnoreReason::Disposed)
        );
    }

    #[test]
    fn test_dispose_can_let_submission_finish() {
        let config = FormConfig {
            disposal: DisposalPolicy::LetFinish,
            ..FormConfig::default()
        };
        let (form, scheduler, notifier) = setup(config);
        fill(&form);
        form.submit();
        form.dispose();

        assert_eq!(scheduler.pending(), 1);
        scheduler.advance(Duration::from_secs(1));
        assert_eq!(notifier.seen().len(), 1);
        assert!(form.snapshot().draft.is_empty());
    }

    #[test]
    fn test_listener_sees_every_change() {
        let seen = Arc::new(Mutex::new(Vec::<FormSnapshot>::new()));
        let (form, scheduler, _) = setup(FormConfig::default());
        let form = form.on_change({
            let seen = seen.clone();
            move |s| seen.lock().unwrap().push(s.clone())
        });
        fill(&form);
        form.submit();
        scheduler.advance(Duration::from_millis(1000));

        let seen = seen.lock().unwrap();
        // three keystrokes, submitting, completion
        assert_eq!(seen.len(), 5);
        assert!(seen[3].submitting);
        assert_eq!(seen[3].draft.name, "Ada");
        assert_eq!(seen[4], FormSnapshot::default());
    }

    #[test]
    fn test_listener_silent_after_dispose() {
        let calls = Arc::new(Mutex::new(0));
        let config = FormConfig {
            disposal: DisposalPolicy::LetFinish,
            ..FormConfig::default()
        };
        let (form, scheduler, _) = setup(config);
        let form = form.on_change({
            let calls = calls.clone();
            move |_| *calls.lock().unwrap() += 1
        });
        fill(&form);
        form.submit();
        let before = *calls.lock().unwrap();
        form.dispose();
        scheduler.advance(Duration::from_secs(1));
        assert_eq!(*calls.lock().unwrap(), before);
    }

    #[test]
    fn test_refused_schedule_rolls_back() {
        let notifier = Arc::new(RecordingNotifier::default());
        let form = ContactForm::new(
            Arc::new(RefusingScheduler),
            notifier.clone(),
            FormConfig::default(),
        );
        fill(&form);

        assert_eq!(
            form.submit(),
            SubmitOutcome::Ignored(IgnoreReason::Unscheduled)
        );
        assert!(!form.is_submitting());
        assert_eq!(form.snapshot().draft.get(Field::Name), "Ada");

        // not stuck as in-flight
        assert_eq!(
            form.submit(),
            SubmitOutcome::Ignored(IgnoreReason::Unscheduled)
        );
        assert!(notifier.seen().is_empty());
    }
}

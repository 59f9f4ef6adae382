//! End-to-end session scenarios against a scripted in-memory thread service.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use jobreach_core::{
    JobCategory, MessageId, RemoteError, Role, RunId, RunStatus, ThreadId, ThreadMessage,
    ThreadService,
};
use jobreach_providers::RetryPolicy;
use jobreach_session::{Admission, SessionError, SessionIntake, SessionLimits, SessionManager};

struct MockInner {
    fail_create_thread: AtomicBool,
    /// Status returned by `run_status` once the script is exhausted.
    default_status: RunStatus,
    /// Statuses consumed one per `run_status` call.
    status_script: Mutex<VecDeque<RunStatus>>,
    thread_calls: AtomicUsize,
    status_calls: AtomicUsize,
    runs_created: AtomicUsize,
    posted: Mutex<Vec<String>>,
    /// Thread contents as `list_messages` reports them. Each created run
    /// appends one canned assistant reply tagged with its run id.
    listed: Mutex<Vec<ThreadMessage>>,
}

#[derive(Clone)]
struct MockThread(Arc<MockInner>);

impl MockThread {
    fn new(default_status: RunStatus) -> Self {
        Self(Arc::new(MockInner {
            fail_create_thread: AtomicBool::new(false),
            default_status,
            status_script: Mutex::new(VecDeque::new()),
            thread_calls: AtomicUsize::new(0),
            status_calls: AtomicUsize::new(0),
            runs_created: AtomicUsize::new(0),
            posted: Mutex::new(Vec::new()),
            listed: Mutex::new(Vec::new()),
        }))
    }

    fn completing() -> Self {
        Self::new(RunStatus::Completed)
    }

    fn script(&self, statuses: &[RunStatus]) {
        let mut script = self.0.status_script.lock().unwrap();
        script.clear();
        script.extend(statuses.iter().copied());
    }

    fn reset_status_calls(&self) {
        self.0.status_calls.store(0, Ordering::SeqCst);
    }

    fn status_calls(&self) -> usize {
        self.0.status_calls.load(Ordering::SeqCst)
    }

    fn runs_created(&self) -> usize {
        self.0.runs_created.load(Ordering::SeqCst)
    }

    fn thread_calls(&self) -> usize {
        self.0.thread_calls.load(Ordering::SeqCst)
    }

    fn posted(&self) -> Vec<String> {
        self.0.posted.lock().unwrap().clone()
    }

    fn add_decoy(&self, run_id: &str, role: Role, content: &str) {
        self.0.listed.lock().unwrap().push(ThreadMessage {
            run_id: Some(RunId(run_id.to_string())),
            role,
            content: content.to_string(),
        });
    }
}

#[async_trait]
impl ThreadService for MockThread {
    async fn create_thread(&self) -> Result<ThreadId, RemoteError> {
        self.0.thread_calls.fetch_add(1, Ordering::SeqCst);
        if self.0.fail_create_thread.load(Ordering::SeqCst) {
            return Err(RemoteError::Transient(anyhow::anyhow!("service down")));
        }
        Ok(ThreadId("thread-1".to_string()))
    }

    async fn post_message(
        &self,
        _thread_id: &ThreadId,
        _role: Role,
        content: &str,
    ) -> Result<MessageId, RemoteError> {
        let mut posted = self.0.posted.lock().unwrap();
        posted.push(content.to_string());
        Ok(MessageId(format!("msg-{}", posted.len())))
    }

    async fn create_run(
        &self,
        _thread_id: &ThreadId,
        _assistant_id: &str,
    ) -> Result<RunId, RemoteError> {
        let n = self.0.runs_created.fetch_add(1, Ordering::SeqCst) + 1;
        let run_id = format!("run-{n}");
        // The remote appends this run's output to the thread.
        self.0.listed.lock().unwrap().push(ThreadMessage {
            run_id: Some(RunId(run_id.clone())),
            role: Role::Assistant,
            content: format!("reply-{n}"),
        });
        Ok(RunId(run_id))
    }

    async fn run_status(
        &self,
        _thread_id: &ThreadId,
        _run_id: &RunId,
    ) -> Result<RunStatus, RemoteError> {
        self.0.status_calls.fetch_add(1, Ordering::SeqCst);
        let scripted = self.0.status_script.lock().unwrap().pop_front();
        Ok(scripted.unwrap_or(self.0.default_status))
    }

    async fn list_messages(&self, _thread_id: &ThreadId) -> Result<Vec<ThreadMessage>, RemoteError> {
        Ok(self.0.listed.lock().unwrap().clone())
    }
}

fn intake() -> SessionIntake {
    SessionIntake {
        category: JobCategory::SoftwareEngineering,
        job_description: "Senior Rust engineer at Acme.".to_string(),
        profile: "8 years of systems programming.".to_string(),
    }
}

fn limits() -> SessionLimits {
    SessionLimits {
        max_questions: 500,
        poll_interval: Duration::from_secs(1),
        poll_timeout: Duration::from_secs(120),
    }
}

fn manager(mock: &MockThread, lim: SessionLimits) -> SessionManager<MockThread> {
    SessionManager::new(mock.clone(), "asst-1", lim, RetryPolicy::default())
}

#[tokio::test(start_paused = true)]
async fn start_seeds_the_thread_without_consuming_quota() {
    let mock = MockThread::completing();
    let mut mgr = manager(&mock, limits());

    mgr.start(&intake()).await.unwrap();

    assert_eq!(mock.thread_calls(), 1);
    assert_eq!(mock.runs_created(), 2);
    let posted = mock.posted();
    assert_eq!(posted.len(), 2);
    assert!(posted[0].contains("Software Engineering role"));
    assert!(posted[0].contains("Senior Rust engineer at Acme."));
    assert!(posted[1].contains("seven distinct"));

    let session = mgr.session();
    assert!(session.is_active);
    assert!(!session.is_awaiting_response);
    assert_eq!(session.question_count, 0);
    // Seed prompts are not shown locally; only the assistant output is.
    assert_eq!(session.transcript.len(), 2);
    assert!(session.transcript.iter().all(|m| m.role == Role::Assistant));
    assert_eq!(session.transcript[0].content, "reply-1");
    assert_eq!(session.transcript[1].content, "reply-2");
}

#[tokio::test(start_paused = true)]
async fn ask_appends_user_entry_then_assistant_replies() {
    let mock = MockThread::completing();
    let mut mgr = manager(&mock, limits());
    mgr.start(&intake()).await.unwrap();

    let admission = mgr
        .ask("Cold Email | Hiring Manager", "full templated text")
        .await
        .unwrap();

    assert_eq!(admission, Admission::Allowed);
    assert_eq!(mock.posted().last().unwrap(), "full templated text");

    let session = mgr.session();
    assert_eq!(session.question_count, 1);
    assert_eq!(mgr.remaining_questions(), 499);
    let len = session.transcript.len();
    assert_eq!(session.transcript[len - 2].role, Role::User);
    assert_eq!(
        session.transcript[len - 2].content,
        "Cold Email | Hiring Manager"
    );
    assert_eq!(session.transcript[len - 1].role, Role::Assistant);
    assert_eq!(session.transcript[len - 1].content, "reply-3");
}

#[tokio::test(start_paused = true)]
async fn poll_loop_fetches_status_until_completed_and_filters_by_run() {
    let mock = MockThread::completing();
    let mut mgr = manager(&mock, limits());
    mgr.start(&intake()).await.unwrap();

    // Stale output from other runs must not be harvested.
    mock.add_decoy("run-0", Role::Assistant, "stale");
    mock.add_decoy("run-99", Role::User, "not an answer");

    mock.script(&[
        RunStatus::Queued,
        RunStatus::InProgress,
        RunStatus::InProgress,
        RunStatus::Completed,
    ]);
    mock.reset_status_calls();

    mgr.ask("Q", "Q").await.unwrap();

    assert_eq!(mock.status_calls(), 4);
    let session = mgr.session();
    let last = session.transcript.last().unwrap();
    assert_eq!(last.role, Role::Assistant);
    assert_eq!(last.content, "reply-3");
    assert!(!session.transcript.iter().any(|m| m.content == "stale"));
}

#[tokio::test(start_paused = true)]
async fn failed_run_keeps_user_message_and_adds_no_reply() {
    let mock = MockThread::completing();
    let mut mgr = manager(&mock, limits());
    mgr.start(&intake()).await.unwrap();
    let before = mgr.session().transcript.len();

    mock.script(&[RunStatus::Queued, RunStatus::Failed]);
    mock.reset_status_calls();

    let err = mgr.ask("doomed question", "doomed question").await.unwrap_err();
    assert!(matches!(
        err,
        SessionError::RunTerminated {
            status: RunStatus::Failed
        }
    ));
    assert_eq!(mock.status_calls(), 2);

    let session = mgr.session();
    assert!(!session.is_awaiting_response);
    assert_eq!(session.transcript.len(), before + 1);
    let last = session.transcript.last().unwrap();
    assert_eq!(last.role, Role::User);
    assert_eq!(last.content, "doomed question");
}

#[tokio::test(start_paused = true)]
async fn expired_run_surfaces_its_status() {
    let mock = MockThread::completing();
    let mut mgr = manager(&mock, limits());
    mgr.start(&intake()).await.unwrap();

    mock.script(&[RunStatus::Expired]);
    let err = mgr.ask("Q", "Q").await.unwrap_err();
    assert!(matches!(
        err,
        SessionError::RunTerminated {
            status: RunStatus::Expired
        }
    ));
}

#[tokio::test(start_paused = true)]
async fn thread_creation_failure_leaves_session_inactive() {
    let mock = MockThread::completing();
    mock.0.fail_create_thread.store(true, Ordering::SeqCst);
    let mut mgr = manager(&mock, limits());

    let err = mgr.start(&intake()).await.unwrap_err();
    assert!(matches!(err, SessionError::Init(_)));
    // Fixed-delay retry: three attempts before giving up.
    assert_eq!(mock.thread_calls(), 3);

    let session = mgr.session();
    assert!(!session.is_active);
    assert!(session.thread_id.is_none());
    assert!(session.transcript.is_empty());
}

#[tokio::test(start_paused = true)]
async fn stalled_run_times_out() {
    let mock = MockThread::new(RunStatus::InProgress);
    let mut mgr = manager(
        &mock,
        SessionLimits {
            poll_timeout: Duration::from_secs(5),
            ..limits()
        },
    );

    let err = mgr.start(&intake()).await.unwrap_err();
    assert!(matches!(err, SessionError::PollTimeout { .. }));
    assert!(!mgr.session().is_awaiting_response);
}

#[tokio::test(start_paused = true)]
async fn cancellation_aborts_the_poll_loop() {
    let mock = MockThread::new(RunStatus::InProgress);
    let token = CancellationToken::new();
    let mut mgr = manager(&mock, limits()).with_cancellation(token.clone());
    token.cancel();

    let err = mgr.start(&intake()).await.unwrap_err();
    assert!(matches!(err, SessionError::Cancelled));
    assert!(!mgr.session().is_awaiting_response);
}

#[tokio::test(start_paused = true)]
async fn quota_denies_after_ceiling_until_reset() {
    let mock = MockThread::completing();
    let mut mgr = manager(
        &mock,
        SessionLimits {
            max_questions: 2,
            ..limits()
        },
    );
    mgr.start(&intake()).await.unwrap();

    assert_eq!(mgr.ask("q1", "q1").await.unwrap(), Admission::Allowed);
    assert_eq!(mgr.ask("q2", "q2").await.unwrap(), Admission::Allowed);
    let runs_before = mock.runs_created();

    assert_eq!(mgr.ask("q3", "q3").await.unwrap(), Admission::Denied);
    assert_eq!(mgr.ask("q4", "q4").await.unwrap(), Admission::Denied);
    // Denied submissions never reach the remote.
    assert_eq!(mock.runs_created(), runs_before);
    assert_eq!(mgr.session().question_count, 2);
    assert_eq!(mgr.remaining_questions(), 0);

    mgr.reset();
    assert!(!mgr.session().is_active);
    assert!(mgr.session().transcript.is_empty());
    assert_eq!(mgr.session().question_count, 0);
}

#[tokio::test(start_paused = true)]
async fn ask_before_start_is_rejected() {
    let mock = MockThread::completing();
    let mut mgr = manager(&mock, limits());

    let err = mgr.ask("early", "early").await.unwrap_err();
    assert!(matches!(err, SessionError::Inactive));
    assert_eq!(mock.runs_created(), 0);
}

#[tokio::test(start_paused = true)]
async fn restart_clears_previous_session_state() {
    let mock = MockThread::completing();
    let mut mgr = manager(&mock, limits());
    mgr.start(&intake()).await.unwrap();
    mgr.ask("q1", "q1").await.unwrap();

    mgr.start(&intake()).await.unwrap();

    assert_eq!(mock.thread_calls(), 2);
    let session = mgr.session();
    assert_eq!(session.question_count, 0);
    // Only the fresh seed replies remain.
    assert_eq!(
        session
            .transcript
            .iter()
            .filter(|m| m.role == Role::User)
            .count(),
        0
    );
}

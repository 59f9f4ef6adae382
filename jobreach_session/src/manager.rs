//! Session lifecycle and the run/poll engine.
//!
//! `SessionManager` owns one [`Session`] and a [`ThreadService`]. Every
//! remote call goes through the fixed-delay retry executor; every
//! submission follows the same cycle: append outgoing message, post it,
//! create a run, poll to a terminal status under a deadline, then harvest
//! the assistant messages that run produced.

use std::time::Duration;

use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use jobreach_core::{JobCategory, Role, RunStatus, ThreadId, ThreadService};
use jobreach_providers::{RemoteServiceError, RetryPolicy, retry_fixed};

use crate::prompts;
use crate::quota::{Admission, QuotaEnforcer};
use crate::session::Session;

/// Pacing and ceilings for one session.
#[derive(Debug, Clone, Copy)]
pub struct SessionLimits {
    /// User questions allowed before a forced reset.
    pub max_questions: u32,
    /// Pause between run-status polls.
    pub poll_interval: Duration,
    /// Overall deadline for one run to reach a terminal status.
    pub poll_timeout: Duration,
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self {
            max_questions: 500,
            poll_interval: Duration::from_secs(1),
            poll_timeout: Duration::from_secs(120),
        }
    }
}

/// Validated inputs for starting a session.
#[derive(Debug, Clone)]
pub struct SessionIntake {
    pub category: JobCategory,
    pub job_description: String,
    pub profile: String,
}

/// Failures surfaced by the session core.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Thread creation failed after retries; the session stays inactive.
    #[error("failed to initialize session: {0}")]
    Init(#[source] RemoteServiceError),

    /// A remote call failed after retries mid-session.
    #[error(transparent)]
    Remote(#[from] RemoteServiceError),

    /// The run reached a terminal status other than completed. The user's
    /// message is already in the transcript; no assistant reply was added.
    #[error("run ended without completing: {status}")]
    RunTerminated { status: RunStatus },

    /// The run never reached a terminal status within the deadline.
    #[error("run did not finish within {timeout:?}")]
    PollTimeout { timeout: Duration },

    /// No active session; call `start` first.
    #[error("session is not active")]
    Inactive,

    /// A run is already outstanding for this session.
    #[error("a response is already pending for this session")]
    Busy,

    /// The caller cancelled while a run was being polled.
    #[error("session was cancelled")]
    Cancelled,
}

/// Drives one session against a remote thread service.
pub struct SessionManager<S> {
    service: S,
    assistant_id: String,
    limits: SessionLimits,
    retry: RetryPolicy,
    quota: QuotaEnforcer,
    session: Session,
    cancel: CancellationToken,
}

impl<S: ThreadService> SessionManager<S> {
    pub fn new(
        service: S,
        assistant_id: impl Into<String>,
        limits: SessionLimits,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            service,
            assistant_id: assistant_id.into(),
            quota: QuotaEnforcer::new(limits.max_questions),
            limits,
            retry,
            session: Session::new(),
            cancel: CancellationToken::new(),
        }
    }

    /// Install a cancellation token; cancelling it aborts any in-flight
    /// poll loop with [`SessionError::Cancelled`].
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn limits(&self) -> &SessionLimits {
        &self.limits
    }

    /// Questions left before the quota denies further submissions.
    #[must_use]
    pub const fn remaining_questions(&self) -> u32 {
        self.session.remaining_questions(self.limits.max_questions)
    }

    /// Start a fresh session: clear prior state, open exactly one remote
    /// thread, then run the two seed submissions (analysis, then the
    /// outreach-draft batch). Seeds are quota-exempt and only their
    /// assistant output lands in the transcript.
    pub async fn start(&mut self, intake: &SessionIntake) -> Result<(), SessionError> {
        self.session.reset();
        info!("Starting session for a {} application", intake.category);

        let thread_id = retry_fixed(|| self.service.create_thread(), &self.retry)
            .await
            .map_err(SessionError::Init)?;
        info!("Session thread: {thread_id}");
        self.session.thread_id = Some(thread_id);
        self.session.is_active = true;

        let analysis =
            prompts::analysis_request(intake.category, &intake.job_description, &intake.profile);
        self.submit(&analysis, None).await?;
        self.submit(prompts::seed_drafts_request(), None).await?;

        Ok(())
    }

    /// Submit a user question, subject to the quota.
    ///
    /// `display` is what the transcript records (a shortcut label, or the
    /// question itself); `remote` is the full text posted to the thread.
    /// Returns `Denied` without touching the remote once the ceiling is
    /// reached; the caller must `reset` to continue.
    pub async fn ask(&mut self, display: &str, remote: &str) -> Result<Admission, SessionError> {
        if !self.session.is_active {
            return Err(SessionError::Inactive);
        }
        if self.session.is_awaiting_response {
            return Err(SessionError::Busy);
        }
        match self.quota.check_and_increment(&mut self.session) {
            Admission::Denied => Ok(Admission::Denied),
            Admission::Allowed => {
                self.submit(remote, Some(display)).await?;
                Ok(Admission::Allowed)
            }
        }
    }

    /// Clear all session state. Idempotent; safe to call at any time
    /// between submissions.
    pub fn reset(&mut self) {
        info!("Resetting session");
        self.session.reset();
    }

    /// One full submission cycle against the active thread.
    ///
    /// The outgoing message is appended optimistically before the remote
    /// confirms anything, and stays in the transcript even when the run
    /// fails. `is_awaiting_response` is released on every exit path.
    async fn submit(
        &mut self,
        content: &str,
        display: Option<&str>,
    ) -> Result<(), SessionError> {
        let thread_id = self
            .session
            .thread_id
            .clone()
            .ok_or(SessionError::Inactive)?;

        if let Some(text) = display {
            self.session.add_message(Role::User, text.to_string());
        }

        self.session.is_awaiting_response = true;
        let outcome = self.drive_run(&thread_id, content).await;
        self.session.is_awaiting_response = false;

        for reply in outcome? {
            self.session.add_message(Role::Assistant, reply);
        }
        Ok(())
    }

    /// Post the message, create a run, poll it to completion, and return
    /// the assistant messages that run produced, in remote order.
    async fn drive_run(
        &self,
        thread_id: &ThreadId,
        content: &str,
    ) -> Result<Vec<String>, SessionError> {
        retry_fixed(
            || self.service.post_message(thread_id, Role::User, content),
            &self.retry,
        )
        .await?;

        let run_id = retry_fixed(
            || self.service.create_run(thread_id, &self.assistant_id),
            &self.retry,
        )
        .await?;
        debug!("Polling run {run_id} on thread {thread_id}");

        let deadline = tokio::time::Instant::now() + self.limits.poll_timeout;
        loop {
            let status = retry_fixed(
                || self.service.run_status(thread_id, &run_id),
                &self.retry,
            )
            .await?;

            match status {
                RunStatus::Completed => break,
                s if s.is_terminal() => {
                    return Err(SessionError::RunTerminated { status: s });
                }
                _ => {}
            }

            if tokio::time::Instant::now() >= deadline {
                return Err(SessionError::PollTimeout {
                    timeout: self.limits.poll_timeout,
                });
            }

            tokio::select! {
                () = self.cancel.cancelled() => return Err(SessionError::Cancelled),
                () = tokio::time::sleep(self.limits.poll_interval) => {}
            }
        }

        let messages =
            retry_fixed(|| self.service.list_messages(thread_id), &self.retry).await?;
        let replies: Vec<String> = messages
            .into_iter()
            .filter(|m| m.role == Role::Assistant && m.run_id.as_ref() == Some(&run_id))
            .map(|m| m.content)
            .collect();
        debug!("Run {run_id} produced {} assistant message(s)", replies.len());
        Ok(replies)
    }
}

#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Shared types for the jobreach workspace.
//!
//! The central abstraction is [`ThreadService`]: a remote conversation-thread
//! backend that can open threads, accept messages, process runs, and hand
//! back the messages a run produced. Everything above it (session lifecycle,
//! polling, quota) lives in `jobreach_session`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Role of a message author.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
        }
    }
}

/// A single transcript entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Remote identifier of a conversation thread. Opaque; issued by the service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ThreadId(pub String);

impl fmt::Display for ThreadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Remote identifier of one unit of work against a thread.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct RunId(pub String);

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Remote identifier of a posted message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct MessageId(pub String);

/// Lifecycle state of a run as reported by the remote service.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Queued,
    InProgress,
    Completed,
    Failed,
    Cancelled,
    Expired,
}

impl RunStatus {
    /// Whether the run will make no further progress.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::Completed | Self::Failed | Self::Cancelled | Self::Expired
        )
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Queued => "queued",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Cancelled => "cancelled",
            Self::Expired => "expired",
        };
        write!(f, "{s}")
    }
}

/// A message as listed from the remote thread.
///
/// `run_id` is `None` for messages the caller posted itself; assistant
/// output always carries the id of the run that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadMessage {
    pub run_id: Option<RunId>,
    pub role: Role,
    pub content: String,
}

/// Job category the candidate is targeting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum JobCategory {
    ProductManagement,
    ProductMarketing,
    ProjectManagement,
    SoftwareEngineering,
    StrategicAccountManagement,
}

impl JobCategory {
    pub const ALL: [Self; 5] = [
        Self::ProductManagement,
        Self::ProductMarketing,
        Self::ProjectManagement,
        Self::SoftwareEngineering,
        Self::StrategicAccountManagement,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ProductManagement => "Product Management",
            Self::ProductMarketing => "Product Marketing",
            Self::ProjectManagement => "Project Management",
            Self::SoftwareEngineering => "Software Engineering",
            Self::StrategicAccountManagement => "Strategic Account Management",
        }
    }
}

impl fmt::Display for JobCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for JobCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown job category: {s}"))
    }
}

/// A single remote-call failure, classified by whether retrying can help.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// Rate limits, timeouts, 5xx responses, transport failures.
    #[error("transient remote failure: {0}")]
    Transient(#[source] anyhow::Error),
    /// Malformed arguments, auth failures, anything a retry cannot fix.
    #[error("permanent remote failure: {0}")]
    Permanent(#[source] anyhow::Error),
}

impl RemoteError {
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Transient(_))
    }
}

/// Remote conversation-thread backend.
///
/// Implementations own transport and authentication. Callers own retry and
/// polling policy; a single call here is exactly one remote round trip.
#[async_trait]
pub trait ThreadService: Send + Sync {
    /// Open a fresh conversation thread.
    async fn create_thread(&self) -> Result<ThreadId, RemoteError>;

    /// Append a message to the thread without processing it.
    async fn post_message(
        &self,
        thread_id: &ThreadId,
        role: Role,
        content: &str,
    ) -> Result<MessageId, RemoteError>;

    /// Ask the given assistant to process the thread's pending input.
    async fn create_run(
        &self,
        thread_id: &ThreadId,
        assistant_id: &str,
    ) -> Result<RunId, RemoteError>;

    /// Fetch the current status of a run.
    async fn run_status(
        &self,
        thread_id: &ThreadId,
        run_id: &RunId,
    ) -> Result<RunStatus, RemoteError>;

    /// List all messages on the thread, in remote-provided order.
    async fn list_messages(&self, thread_id: &ThreadId) -> Result<Vec<ThreadMessage>, RemoteError>;
}

//! Session state: the lifecycle data for one user's interaction window.
//!
//! The original design kept these fields in ambient UI state; here the
//! session is an explicit value owned by the manager and visible to the
//! caller, with no hidden global.

use chrono::{DateTime, Utc};

use jobreach_core::{ChatMessage, Role, ThreadId};

/// All local state for one interaction window.
///
/// The transcript is append-only while the session is active; `reset`
/// restores every field to its initial value.
#[derive(Debug, Clone)]
pub struct Session {
    /// Remote thread backing this session; set exactly once per session.
    pub thread_id: Option<ThreadId>,
    /// Ordered exchange history. Order is the only guarantee.
    pub transcript: Vec<ChatMessage>,
    /// User-initiated submissions so far; never exceeds the quota ceiling.
    pub question_count: u32,
    /// True between lifecycle start and reset.
    pub is_active: bool,
    /// True while a run is outstanding; rejects overlapping submissions.
    pub is_awaiting_response: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            thread_id: None,
            transcript: Vec::new(),
            question_count: 0,
            is_active: false,
            is_awaiting_response: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Append a transcript entry.
    pub fn add_message(&mut self, role: Role, content: String) {
        self.transcript.push(ChatMessage { role, content });
        self.updated_at = Utc::now();
    }

    /// Restore all fields to their initial values. Idempotent.
    pub fn reset(&mut self) {
        self.thread_id = None;
        self.transcript.clear();
        self.question_count = 0;
        self.is_active = false;
        self.is_awaiting_response = false;
        self.updated_at = Utc::now();
    }

    /// Questions left before the ceiling forces a reset.
    #[must_use]
    pub const fn remaining_questions(&self, ceiling: u32) -> u32 {
        ceiling.saturating_sub(self.question_count)
    }

    #[must_use]
    pub fn assistant_messages(&self) -> Vec<&ChatMessage> {
        self.transcript
            .iter()
            .filter(|m| m.role == Role::Assistant)
            .collect()
    }

    #[must_use]
    pub const fn message_count(&self) -> usize {
        self.transcript.len()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_restores_pristine_state() {
        let mut session = Session::new();
        session.thread_id = Some(ThreadId("thread_1".to_string()));
        session.is_active = true;
        session.is_awaiting_response = true;
        session.question_count = 12;
        session.add_message(Role::User, "Hello".to_string());
        session.add_message(Role::Assistant, "Hi!".to_string());

        session.reset();

        assert!(session.thread_id.is_none());
        assert!(session.transcript.is_empty());
        assert_eq!(session.question_count, 0);
        assert!(!session.is_active);
        assert!(!session.is_awaiting_response);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut session = Session::new();
        session.reset();
        let transcript_len = session.transcript.len();
        session.reset();
        assert_eq!(session.transcript.len(), transcript_len);
        assert_eq!(session.question_count, 0);
        assert!(!session.is_active);
    }

    #[test]
    fn remaining_questions_saturates() {
        let mut session = Session::new();
        session.question_count = 499;
        assert_eq!(session.remaining_questions(500), 1);
        session.question_count = 500;
        assert_eq!(session.remaining_questions(500), 0);
        assert_eq!(session.remaining_questions(0), 0);
    }

    #[test]
    fn assistant_messages_filters_roles() {
        let mut session = Session::new();
        session.add_message(Role::User, "question".to_string());
        session.add_message(Role::Assistant, "answer".to_string());
        session.add_message(Role::Assistant, "more".to_string());
        assert_eq!(session.assistant_messages().len(), 2);
    }
}

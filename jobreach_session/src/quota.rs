//! Per-session question quota.
//!
//! The enforcer is the sole admission gate for user and templated
//! submissions; seed submissions during lifecycle start never pass through
//! it. Denial is a value, not an error: the caller presents the
//! limit-reached condition and offers a reset.

use crate::session::Session;
use tracing::info;

/// Outcome of the admission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Allowed,
    Denied,
}

/// Counts questions against a fixed per-session ceiling.
#[derive(Debug, Clone, Copy)]
pub struct QuotaEnforcer {
    ceiling: u32,
}

impl QuotaEnforcer {
    #[must_use]
    pub const fn new(ceiling: u32) -> Self {
        Self { ceiling }
    }

    #[must_use]
    pub const fn ceiling(&self) -> u32 {
        self.ceiling
    }

    /// Admit one question, incrementing the session counter, or deny once
    /// the ceiling is reached. Denial persists until the session is reset.
    pub fn check_and_increment(&self, session: &mut Session) -> Admission {
        if session.question_count < self.ceiling {
            session.question_count += 1;
            Admission::Allowed
        } else {
            info!(
                "Question quota reached ({} of {}); session needs a reset",
                session.question_count, self.ceiling
            );
            Admission::Denied
        }
    }
}

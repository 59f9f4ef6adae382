#![warn(
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

//! Conversational-session orchestration.
//!
//! One [`Session`] is one user's interaction window: a remote thread, an
//! append-only transcript, a question counter, and the flags that keep
//! submissions serialized. [`SessionManager`] drives the lifecycle: it opens
//! the thread, seeds it, and runs every subsequent prompt through the
//! submit-run-poll-harvest cycle, with the [`QuotaEnforcer`] gating user
//! questions.

mod manager;
mod quota;
pub mod prompts;
mod session;

pub use manager::{SessionError, SessionIntake, SessionLimits, SessionManager};
pub use quota::{Admission, QuotaEnforcer};
pub use session::Session;

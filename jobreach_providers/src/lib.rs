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

//! Remote-service plumbing: the retry executor and the production
//! [`jobreach_core::ThreadService`] implementation backed by the OpenAI
//! Assistants API.

mod openai;
mod retry;

pub use openai::AssistantsClient;
pub use retry::{RemoteServiceError, RetryPolicy, retry_fixed};

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

//! Text-acquisition collaborators: input validation, job-posting URL fetch,
//! and text cleanup. These sit in front of the session core; anything that
//! fails here never reaches it.

mod fetch;
mod validate;

pub use fetch::{JobPostingFetcher, clean_text};
pub use validate::{IntakeLimits, validate_job_description, validate_profile};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntakeError {
    /// Malformed or oversized input, rejected before any remote call.
    #[error("invalid input: {0}")]
    Validation(String),

    /// The posting could not be fetched or yielded no usable text.
    #[error("failed to extract job description: {0}")]
    Extraction(#[source] anyhow::Error),
}

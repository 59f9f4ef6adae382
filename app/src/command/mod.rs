//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy with its own input type, dispatched
//! statically from `main`.

use jobreach_config::Config;
use jobreach_providers::RetryPolicy;
use jobreach_session::SessionLimits;
use std::time::Duration;

mod chat;
mod init;
mod templates;
mod version;

pub use chat::{ChatInput, ChatStrategy};
pub use init::InitStrategy;
pub use templates::TemplatesStrategy;
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Session pacing from the loaded config.
pub fn session_limits(config: &Config) -> SessionLimits {
    SessionLimits {
        max_questions: config.limits.max_questions,
        poll_interval: Duration::from_secs(config.limits.poll_interval_secs),
        poll_timeout: Duration::from_secs(config.limits.poll_timeout_secs),
    }
}

/// Remote-call retry policy from the loaded config.
pub fn retry_policy(config: &Config) -> RetryPolicy {
    RetryPolicy {
        max_retries: config.limits.max_retries,
        retry_delay: Duration::from_secs(config.limits.retry_delay_secs),
    }
}

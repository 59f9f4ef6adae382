//! Configuration bootstrap command.

use jobreach_config::Config;

use super::CommandStrategy;

/// Strategy for executing the Init command.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl CommandStrategy for InitStrategy {
    type Input = ();

    async fn execute(&self, (): Self::Input) -> anyhow::Result<()> {
        Config::create_config()
    }
}

//! Version command.

use super::CommandStrategy;

/// Strategy for executing the Version command.
#[derive(Debug, Clone, Copy)]
pub struct VersionStrategy;

impl CommandStrategy for VersionStrategy {
    type Input = ();

    async fn execute(&self, (): Self::Input) -> anyhow::Result<()> {
        println!("jobreach {}", env!("CARGO_PKG_VERSION"));
        Ok(())
    }
}

//! List the predefined question templates.

use jobreach_session::prompts;

use super::CommandStrategy;

/// Strategy for executing the Templates command.
#[derive(Debug, Clone, Copy)]
pub struct TemplatesStrategy;

impl CommandStrategy for TemplatesStrategy {
    type Input = ();

    async fn execute(&self, (): Self::Input) -> anyhow::Result<()> {
        println!("Predefined questions (type the label during a chat session):\n");
        for question in prompts::PREDEFINED {
            println!("  {}", question.label);
        }
        Ok(())
    }
}

//! Interactive outreach session against one job posting.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use tracing::info;

use jobreach_core::JobCategory;
use jobreach_intake::{
    IntakeLimits, JobPostingFetcher, validate_job_description, validate_profile,
};
use jobreach_providers::AssistantsClient;
use jobreach_session::{Admission, SessionIntake, SessionManager, prompts};

use super::{CommandStrategy, retry_policy, session_limits};

/// Input parameters for the Chat command strategy.
#[derive(Debug, Clone)]
pub struct ChatInput {
    pub category: String,
    pub job_file: Option<PathBuf>,
    pub job_url: Option<String>,
    pub profile_file: Option<PathBuf>,
    /// Single question to ask after seeding (non-interactive mode).
    pub message: Option<String>,
}

/// Strategy for executing the Chat command: gather inputs, seed a session,
/// then hand the user an interactive prompt.
#[derive(Debug, Clone, Copy)]
pub struct ChatStrategy;

impl CommandStrategy for ChatStrategy {
    type Input = ChatInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = jobreach_config::Config::load()?;
        info!("Loaded config from ~/jobreach/config.json");

        let category: JobCategory = input
            .category
            .parse()
            .map_err(|e: String| anyhow::anyhow!(e))?;

        let limits = IntakeLimits {
            max_job_description_len: config.intake.max_job_description_len,
            max_profile_bytes: config.intake.max_profile_bytes,
        };

        let job_description = acquire_job_text(&input, &config).await?;
        validate_job_description(&job_description, &limits)?;

        let profile = match &input.profile_file {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("cannot read profile file {}", path.display()))?,
            None => String::new(),
        };
        validate_profile(&profile, &limits)?;

        let client = AssistantsClient::new(config.providers.openai.api_key.clone());
        let mut manager = SessionManager::new(
            client,
            config.assistant_id.clone(),
            session_limits(&config),
            retry_policy(&config),
        );

        println!("Analyzing the posting and drafting outreach messages...");
        manager
            .start(&SessionIntake {
                category,
                job_description,
                profile,
            })
            .await?;

        for message in manager.session().assistant_messages() {
            println!("\n{}\n", message.content);
        }

        if let Some(question) = input.message {
            match manager.ask(&question, &question).await? {
                Admission::Allowed => {
                    for reply in latest_assistant_replies(&manager) {
                        println!("{reply}");
                    }
                }
                Admission::Denied => println!("Question limit reached for this session."),
            }
            return Ok(());
        }

        run_interactive(&mut manager).await
    }
}

async fn acquire_job_text(input: &ChatInput, config: &jobreach_config::Config) -> anyhow::Result<String> {
    match (&input.job_file, &input.job_url) {
        (Some(path), _) => std::fs::read_to_string(path)
            .with_context(|| format!("cannot read job file {}", path.display())),
        (None, Some(url)) => {
            let api_key = config.intake.scraper_api_key.clone().ok_or_else(|| {
                anyhow::anyhow!(
                    "job-URL intake needs intake.scraper_api_key in the config; \
                     pass --job-file instead"
                )
            })?;
            let fetcher = JobPostingFetcher::new(api_key)?;
            Ok(fetcher.fetch_job_text(url).await?)
        }
        (None, None) => anyhow::bail!("provide either --job-file or --job-url"),
    }
}

async fn run_interactive(
    manager: &mut SessionManager<AssistantsClient>,
) -> anyhow::Result<()> {
    println!("Ask follow-up questions, or type a template label (see ':templates').");
    println!("Type 'exit' to end the session.\n");

    loop {
        print!("[{} credits left] > ", manager.remaining_questions());
        std::io::stdout().flush()?;

        let mut line = String::new();
        if std::io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();

        if matches!(line, "exit" | "quit" | "q") {
            println!("Session ended.");
            break;
        }
        if line.is_empty() {
            continue;
        }
        if line == ":templates" {
            for question in prompts::PREDEFINED {
                println!("  {}", question.label);
            }
            continue;
        }

        // Template labels are shown in the transcript; the thread gets the
        // full templated text.
        let (display, remote) = prompts::find(line)
            .map_or((line, line), |q| (q.label, q.prompt));

        match manager.ask(display, remote).await {
            Ok(Admission::Allowed) => {
                for message in latest_assistant_replies(manager) {
                    println!("\n{message}\n");
                }
            }
            Ok(Admission::Denied) => {
                println!(
                    "You have reached the maximum number of questions for this session. \
                     Start a new session to continue."
                );
                break;
            }
            Err(e) => eprintln!("Error: {e}"),
        }
    }

    Ok(())
}

/// Assistant entries appended after the last user entry.
fn latest_assistant_replies(manager: &SessionManager<AssistantsClient>) -> Vec<String> {
    let transcript = &manager.session().transcript;
    let last_user = transcript
        .iter()
        .rposition(|m| m.role == jobreach_core::Role::User)
        .map_or(0, |i| i + 1);
    transcript[last_user..]
        .iter()
        .map(|m| m.content.clone())
        .collect()
}

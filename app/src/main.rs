#![deny(
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

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod command;

use command::{
    ChatInput, ChatStrategy, CommandStrategy, InitStrategy, TemplatesStrategy, VersionStrategy,
};

#[derive(Parser)]
#[command(name = "jobreach")]
#[command(about = "Outreach-message assistant for job applications", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a session against a job posting and chat about outreach drafts
    Chat {
        /// Job category (e.g. "Software Engineering")
        #[arg(short, long)]
        category: String,

        /// File containing the job description text
        #[arg(long, conflicts_with = "job_url")]
        job_file: Option<PathBuf>,

        /// URL of the job posting (needs intake.scraper_api_key configured)
        #[arg(long)]
        job_url: Option<String>,

        /// File with candidate notes or resume text
        #[arg(long)]
        profile_file: Option<PathBuf>,

        /// Single question to ask (non-interactive mode)
        #[arg(short = 'm', long)]
        message: Option<String>,
    },
    /// Initialize configuration
    Init,
    /// List the predefined question templates
    Templates,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Chat {
            category,
            job_file,
            job_url,
            profile_file,
            message,
        } => {
            ChatStrategy
                .execute(ChatInput {
                    category,
                    job_file,
                    job_url,
                    profile_file,
                    message,
                })
                .await
        }
        Commands::Init => InitStrategy.execute(()).await,
        Commands::Templates => TemplatesStrategy.execute(()).await,
        Commands::Version => VersionStrategy.execute(()).await,
    }
}

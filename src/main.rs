mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod services;
#[cfg(test)]
mod testing;
mod workflow;

use std::path::PathBuf;
use std::sync::Arc;

use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cmd::summary::{self, SummaryOutcome};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::domain::project::Project;
use crate::domain::run::{RunConfig, SyncPolicy};
use crate::domain::window::LookbackWindow;
use crate::error::AppResult;
use crate::infra::git::GitCli;
use crate::infra::llm::OpenAiClient;

#[derive(Parser, Debug)]
#[command(
    name = "gitrecap",
    author,
    version,
    about = "Summarize recent git work across projects"
)]
struct Cli {
    /// Author name (git --author pattern) to filter commits by.
    #[arg(short, long)]
    username: String,

    /// Author email, matched in addition to the username.
    #[arg(short, long)]
    email: Option<String>,

    /// Project directories to collect commits from.
    #[arg(short, long, num_args = 1.., required = true)]
    projects: Vec<PathBuf>,

    /// Number of days to look back for commits.
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    days: u32,

    /// What to do when `git pull` fails for a project.
    #[arg(long, value_enum, default_value_t = SyncPolicy::Lenient)]
    sync: SyncPolicy,

    /// Model used for the summary.
    #[arg(long, env = "GITRECAP_MODEL")]
    model: Option<String>,

    /// Language the summary is written in.
    #[arg(long, env = "GITRECAP_LANGUAGE")]
    language: Option<String>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.model, cli.language);
    if config.api_key.is_none() {
        eprintln!("Warning: OPENAI_API_KEY not set; summarization will fail.");
    }

    let window = LookbackWindow::new(cli.days)?;
    let run_config = RunConfig {
        author: cli.username,
        email: cli.email,
        projects: cli.projects.into_iter().map(Project::from_path).collect(),
        window,
        sync_policy: cli.sync,
    };

    let language_model = Arc::new(OpenAiClient::new(&config));
    let context = AppContext::new(config, Arc::new(GitCli::new()), language_model);

    let today = Local::now().date_naive();
    match summary::run(&context, &run_config, today).await? {
        SummaryOutcome::NoCommits => {
            println!(
                "No git commits found for the last {}.",
                run_config.window.describe()
            );
        }
        SummaryOutcome::Summary(text) => {
            println!("Git Work Summary:");
            println!("{text}");
        }
    }

    Ok(())
}

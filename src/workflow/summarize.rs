use std::fmt::Write as _;

use crate::context::AppContext;
use crate::domain::commit_log::CommitLog;
use crate::domain::prompt::ChatPrompt;
use crate::domain::window::LookbackWindow;
use crate::error::AppResult;

pub fn system_instruction(language: &str) -> String {
    format!(
        "You are a helpful assistant that summarizes git commit messages into concise summaries and key points.\n\
         1. Answer in {language}.\n\
         2. Use short bullet points and avoid unnecessary technical jargon.\n\
         3. The commits may come from several projects; keep work on different projects apart and call out the project names."
    )
}

pub fn build_user_prompt(window: &LookbackWindow, log: &CommitLog) -> String {
    let mut prompt = format!(
        "Here are my git commit messages from the last {}, grouped by project:\n",
        window.describe()
    );
    for entry in log.iter() {
        let _ = write!(prompt, "\n## {}\n", entry.project);
        for subject in &entry.subjects {
            let _ = writeln!(prompt, "- {subject}");
        }
    }
    prompt.push_str(
        "\nPlease provide a concise summary and key points of the work done, per project where useful.",
    );
    prompt
}

/// Asks the language model to summarize `log`. The caller makes sure `log` is
/// not empty.
pub async fn summarize_work(
    ctx: &AppContext,
    window: &LookbackWindow,
    log: &CommitLog,
) -> AppResult<String> {
    let prompt = ChatPrompt {
        system: system_instruction(&ctx.config.language),
        user: build_user_prompt(window, log),
    };

    tracing::info!(
        projects = log.len(),
        commits = log.total_commits(),
        "summarizing commits"
    );
    let summary = ctx.language_model.complete(&prompt).await?;
    Ok(summary.trim().to_string())
}

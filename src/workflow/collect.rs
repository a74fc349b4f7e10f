use chrono::NaiveDate;

use crate::context::AppContext;
use crate::domain::commit_log::CommitLog;
use crate::domain::run::{RunConfig, SyncPolicy};
use crate::error::AppResult;
use crate::services::CommitQuery;

/// Gathers commit subjects for every configured project, one project at a time.
///
/// A project whose log query fails is logged and left out. Only a sync failure
/// under [`SyncPolicy::Strict`] ends the run early.
pub async fn collect_commit_log(
    ctx: &AppContext,
    run: &RunConfig,
    today: NaiveDate,
) -> AppResult<CommitLog> {
    let query = CommitQuery {
        since: run.window.cutoff_string(today),
        authors: run.author_patterns(),
    };
    let mut log = CommitLog::new();

    for project in &run.projects {
        match run.sync_policy {
            SyncPolicy::Skip => {}
            SyncPolicy::Strict => ctx.version_control.sync(&project.path).await?,
            SyncPolicy::Lenient => {
                if let Err(error) = ctx.version_control.sync(&project.path).await {
                    tracing::warn!(
                        project = %project.path.display(),
                        %error,
                        "sync failed, using local history"
                    );
                }
            }
        }

        let subjects = match ctx
            .version_control
            .commit_subjects(&project.path, &query)
            .await
        {
            Ok(subjects) => subjects,
            Err(error) => {
                tracing::error!(
                    project = %project.path.display(),
                    %error,
                    "failed to read commits, skipping project"
                );
                continue;
            }
        };

        if subjects.is_empty() {
            tracing::info!(
                project = %project.path.display(),
                since = %query.since,
                "no commits found"
            );
            continue;
        }

        tracing::info!(
            project = %project.name,
            since = %query.since,
            count = subjects.len(),
            "collected commits"
        );
        log.record(&project.name, subjects);
    }

    Ok(log)
}

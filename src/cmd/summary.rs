use chrono::NaiveDate;

use crate::context::AppContext;
use crate::domain::run::RunConfig;
use crate::error::AppResult;
use crate::workflow::collect::collect_commit_log;
use crate::workflow::summarize::summarize_work;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryOutcome {
    /// Nothing matched in any project; the model was not contacted.
    NoCommits,
    Summary(String),
}

pub async fn run(
    ctx: &AppContext,
    args: &RunConfig,
    today: NaiveDate,
) -> AppResult<SummaryOutcome> {
    let log = collect_commit_log(ctx, args, today).await?;
    if log.is_empty() {
        return Ok(SummaryOutcome::NoCommits);
    }

    let summary = summarize_work(ctx, &args.window, &log).await?;
    Ok(SummaryOutcome::Summary(summary))
}

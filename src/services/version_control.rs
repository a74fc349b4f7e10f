use std::path::Path;

use async_trait::async_trait;

use crate::error::AppResult;

/// Filters for a commit subject query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitQuery {
    /// Cutoff date, `YYYY-MM-DD`.
    pub since: String,
    /// Author patterns, OR'd together. Empty means any author.
    pub authors: Vec<String>,
}

impl CommitQuery {
    pub fn log_args(&self) -> Vec<String> {
        let mut args = vec![
            "log".to_string(),
            format!("--since={}", self.since),
            "--pretty=format:%s".to_string(),
        ];
        args.extend(
            self.authors
                .iter()
                .map(|author| format!("--author={author}")),
        );
        args
    }
}

#[async_trait]
pub trait VersionControlService: Send + Sync {
    /// Brings the working copy at `project` up to date with its remote.
    async fn sync(&self, project: &Path) -> AppResult<()>;
    /// Commit subjects matching `query`, newest first.
    async fn commit_subjects(
        &self,
        project: &Path,
        query: &CommitQuery,
    ) -> AppResult<Vec<String>>;
}

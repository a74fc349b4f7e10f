use std::ffi::OsString;
use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::{AppError, AppResult};
use crate::services::{CommitQuery, VersionControlService};

pub struct GitCli {
    program: OsString,
}

impl GitCli {
    pub fn new() -> Self {
        Self {
            program: OsString::from("git"),
        }
    }

    async fn run(&self, project: &Path, args: &[String]) -> AppResult<String> {
        let output = Command::new(&self.program)
            .arg("-C")
            .arg(project)
            .args(args)
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let subcommand = args.first().map(String::as_str).unwrap_or_default();
            return Err(AppError::VersionControl(format!(
                "git {subcommand} failed in {} ({}): {}",
                project.display(),
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VersionControlService for GitCli {
    async fn sync(&self, project: &Path) -> AppResult<()> {
        let stdout = self.run(project, &["pull".to_string()]).await?;
        tracing::debug!(project = %project.display(), output = %stdout.trim(), "git pull finished");
        Ok(())
    }

    async fn commit_subjects(
        &self,
        project: &Path,
        query: &CommitQuery,
    ) -> AppResult<Vec<String>> {
        let args = query.log_args();
        tracing::info!(
            project = %project.display(),
            command = %format!("git -C {} {}", project.display(), args.join(" ")),
            "querying commit subjects"
        );
        let stdout = self.run(project, &args).await?;
        Ok(split_subjects(&stdout))
    }
}

fn split_subjects(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

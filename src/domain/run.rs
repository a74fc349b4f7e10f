use clap::ValueEnum;

use crate::domain::project::Project;
use crate::domain::window::LookbackWindow;

/// What to do when `git pull` fails for a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SyncPolicy {
    /// Log the failure and still query the local history.
    #[default]
    Lenient,
    /// Abort the whole run.
    Strict,
    /// Do not synchronize at all.
    Skip,
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub author: String,
    pub email: Option<String>,
    pub projects: Vec<Project>,
    pub window: LookbackWindow,
    pub sync_policy: SyncPolicy,
}

impl RunConfig {
    /// Author patterns for the log query. Blank values are left out; an empty
    /// result means no author filter.
    pub fn author_patterns(&self) -> Vec<String> {
        [Some(self.author.as_str()), self.email.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|pattern| !pattern.is_empty())
            .map(str::to_string)
            .collect()
    }
}

//! In-memory service fakes for workflow tests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::config::AppConfig;
use crate::context::AppContext;
use crate::domain::prompt::ChatPrompt;
use crate::error::{AppError, AppResult};
use crate::services::{CommitQuery, LanguageModelService, VersionControlService};

enum Repo {
    Subjects(Vec<String>),
    Broken(String),
}

#[derive(Default)]
pub struct FakeGit {
    repos: HashMap<PathBuf, Repo>,
    failing_sync: Vec<PathBuf>,
    pub synced: Mutex<Vec<PathBuf>>,
    pub queries: Mutex<Vec<(PathBuf, CommitQuery)>>,
}

impl FakeGit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_repo(mut self, path: &str, subjects: &[&str]) -> Self {
        self.repos.insert(
            PathBuf::from(path),
            Repo::Subjects(subjects.iter().map(|s| s.to_string()).collect()),
        );
        self
    }

    pub fn with_broken_repo(mut self, path: &str, reason: &str) -> Self {
        self.repos
            .insert(PathBuf::from(path), Repo::Broken(reason.to_string()));
        self
    }

    pub fn with_failing_sync(mut self, path: &str) -> Self {
        self.failing_sync.push(PathBuf::from(path));
        self
    }

    pub fn queried_paths(&self) -> Vec<PathBuf> {
        self.queries
            .lock()
            .unwrap()
            .iter()
            .map(|(path, _)| path.clone())
            .collect()
    }
}

#[async_trait]
impl VersionControlService for FakeGit {
    async fn sync(&self, project: &Path) -> AppResult<()> {
        self.synced.lock().unwrap().push(project.to_path_buf());
        if self.failing_sync.iter().any(|path| path == project) {
            return Err(AppError::VersionControl(format!(
                "git pull failed in {}",
                project.display()
            )));
        }
        Ok(())
    }

    async fn commit_subjects(
        &self,
        project: &Path,
        query: &CommitQuery,
    ) -> AppResult<Vec<String>> {
        self.queries
            .lock()
            .unwrap()
            .push((project.to_path_buf(), query.clone()));
        match self.repos.get(project) {
            Some(Repo::Subjects(subjects)) => Ok(subjects.clone()),
            Some(Repo::Broken(reason)) => Err(AppError::VersionControl(reason.clone())),
            None => Err(AppError::VersionControl(format!(
                "fatal: cannot change to '{}': No such file or directory",
                project.display()
            ))),
        }
    }
}

pub struct FakeModel {
    answer: Result<String, String>,
    pub prompts: Mutex<Vec<ChatPrompt>>,
}

impl FakeModel {
    pub fn answering(answer: &str) -> Self {
        Self {
            answer: Ok(answer.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            answer: Err(reason.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn last_prompt(&self) -> Option<ChatPrompt> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl LanguageModelService for FakeModel {
    async fn complete(&self, prompt: &ChatPrompt) -> AppResult<String> {
        self.prompts.lock().unwrap().push(prompt.clone());
        self.answer
            .clone()
            .map_err(AppError::LanguageModel)
    }
}

pub fn test_context(git: Arc<FakeGit>, model: Arc<FakeModel>) -> AppContext {
    let config = AppConfig::from_lookup(|_| None, None, None);
    AppContext::new(config, git, model)
}

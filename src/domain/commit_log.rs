/// Commit subjects collected for one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCommits {
    pub project: String,
    pub subjects: Vec<String>,
}

/// Project name to commit subjects, in the order projects were first recorded.
///
/// Projects without subjects never get an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitLog {
    entries: Vec<ProjectCommits>,
}

impl CommitLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `subjects` under `project`. Subjects for a name that is already
    /// present are appended to that entry so names stay unique.
    pub fn record(&mut self, project: &str, subjects: Vec<String>) {
        if subjects.is_empty() {
            return;
        }
        match self.entries.iter_mut().find(|entry| entry.project == project) {
            Some(entry) => entry.subjects.extend(subjects),
            None => self.entries.push(ProjectCommits {
                project: project.to_string(),
                subjects,
            }),
        }
    }

    #[cfg(test)]
    pub fn get(&self, project: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|entry| entry.project == project)
            .map(|entry| entry.subjects.as_slice())
    }

    #[cfg(test)]
    pub fn contains(&self, project: &str) -> bool {
        self.get(project).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_commits(&self) -> usize {
        self.entries.iter().map(|entry| entry.subjects.len()).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProjectCommits> {
        self.entries.iter()
    }
}

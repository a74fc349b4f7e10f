pub mod commit_log;
pub mod project;
pub mod prompt;
pub mod run;
pub mod window;

pub mod collect;
pub mod summarize;

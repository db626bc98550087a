// Infrastructure layer - SQLite persistence and process-level concerns

pub mod logging;
pub mod persistence;

// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuestlineError {
    /// A flattened task lists a dependency that names no flattened task.
    #[error("Unknown task dependency {dependency} of {task}")]
    UnknownDependency { dependency: String, task: String },

    /// Two tasks ended up with the same qualified name.
    #[error("Duplicate task: {0}")]
    DuplicateTask(String),

    #[error("Unknown routing task {0}")]
    UnknownRoutingTask(String),

    #[error("Cyclic dependency involving task {0}")]
    CyclicDependency(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, QuestlineError>;

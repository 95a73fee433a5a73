// src/config/mod.rs

//! Quest book loading and validation.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a quest book from disk (`loader.rs`).
//! - Validate names, dependencies and the configured route (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path};
pub use model::{ConfigSection, QuestBook, QuestConfig, RawQuestBook, TaskConfig};

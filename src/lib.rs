// src/lib.rs

//! Flatten quests into one namespaced task graph and order it by a route.
//!
//! The two core operations are [`flatten`] and [`order`]. Quest books
//! loaded through [`config`] run both in one go via [`plan`].

pub mod completion;
pub mod config;
pub mod errors;
pub mod flatten;
pub mod logging;
pub mod route;
pub mod types;

use std::path::Path;

use tracing::info;

use crate::config::QuestBook;
use crate::config::loader::load_and_validate;
use crate::errors::Result;

pub use crate::completion::Completion;
pub use crate::errors::QuestlineError;
pub use crate::flatten::flatten;
pub use crate::route::{Router, order, route_priorities};
pub use crate::types::{Quest, Task, TaskLike};

/// Flatten a quest book and order its tasks by the book's route.
pub fn plan(book: &QuestBook) -> Result<Vec<Task<String>>> {
    let tasks = flatten(&book.quests(), book.config.implicit_after)?;
    let ordered = order(
        &tasks,
        book.config.route.as_slice(),
        book.config.ignore_missing_tasks,
    )?;

    info!(
        tasks = ordered.len(),
        route = book.config.route.len(),
        "planned quest book"
    );
    Ok(ordered.into_iter().cloned().collect())
}

/// Load, validate and plan the quest book at `path`.
pub fn plan_from_path(path: impl AsRef<Path>) -> Result<Vec<Task<String>>> {
    let book = load_and_validate(path)?;
    plan(&book)
}

// src/config/loader.rs

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::model::{QuestBook, RawQuestBook};
use crate::errors::Result;

/// Load a quest book from a given path and return the raw `RawQuestBook`.
///
/// This only performs TOML deserialization; it does **not** check names,
/// dependencies or the route. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawQuestBook> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let book: RawQuestBook = toml::from_str(&contents)?;
    debug!(path = %path.display(), quests = book.quest.len(), "loaded quest book");

    Ok(book)
}

/// Load a quest book from path and validate it.
///
/// This is the recommended entry point:
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde`).
/// - Checks for:
///   - empty books and malformed names,
///   - duplicate or unknown task dependencies,
///   - route entries that name no task (unless ignored) and cycles on the route.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<QuestBook> {
    let raw = load_from_path(&path)?;
    QuestBook::try_from(raw)
}

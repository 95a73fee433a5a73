// src/config/validate.rs

use crate::config::model::{QuestBook, RawQuestBook};
use crate::errors::{QuestlineError, Result};
use crate::flatten::flatten;
use crate::route::Router;
use crate::types::QUEST_SEPARATOR;

impl TryFrom<RawQuestBook> for QuestBook {
    type Error = QuestlineError;

    fn try_from(raw: RawQuestBook) -> std::result::Result<Self, Self::Error> {
        let book = QuestBook::new_unchecked(raw.config, raw.quest);
        validate_book(&book)?;
        Ok(book)
    }
}

fn validate_book(book: &QuestBook) -> Result<()> {
    ensure_has_quests(book)?;
    validate_names(book)?;
    validate_flatten_and_route(book)?;
    Ok(())
}

fn ensure_has_quests(book: &QuestBook) -> Result<()> {
    if book.quest.is_empty() {
        return Err(QuestlineError::ConfigError(
            "quest book must contain at least one [[quest]] section".to_string(),
        ));
    }
    Ok(())
}

fn validate_names(book: &QuestBook) -> Result<()> {
    for quest in &book.quest {
        if quest.name.trim().is_empty() {
            return Err(QuestlineError::ConfigError(
                "quest name must not be empty".to_string(),
            ));
        }
        if quest.name.contains(QUEST_SEPARATOR) {
            return Err(QuestlineError::ConfigError(format!(
                "quest name '{}' must not contain '{}'",
                quest.name, QUEST_SEPARATOR
            )));
        }

        for task in &quest.tasks {
            if task.name.trim().is_empty() {
                return Err(QuestlineError::ConfigError(format!(
                    "quest '{}' has a task with an empty name",
                    quest.name
                )));
            }
            if task.name.contains(QUEST_SEPARATOR) {
                return Err(QuestlineError::ConfigError(format!(
                    "task '{}' in quest '{}' must not contain '{}'",
                    task.name, quest.name, QUEST_SEPARATOR
                )));
            }
        }
    }
    Ok(())
}

/// Flatten the book once and run its route, so dependency and route errors
/// surface at load time rather than at planning time.
fn validate_flatten_and_route(book: &QuestBook) -> Result<()> {
    let tasks = flatten(&book.quests(), book.config.implicit_after)?;
    Router::new(&tasks).priorities(book.config.route.as_slice(), book.config.ignore_missing_tasks)?;
    Ok(())
}

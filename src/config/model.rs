// src/config/model.rs

use serde::Deserialize;

use crate::completion::Completion;
use crate::logging::LogLevel;
use crate::types::{Quest, Task};

/// Quest book as read from a TOML file, before validation.
///
/// ```toml
/// [config]
/// implicit_after = true
/// route = ["deploy/ship"]
///
/// [[quest]]
/// name = "build"
///
/// [[quest.task]]
/// name = "compile"
/// action = "cargo build"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct RawQuestBook {
    #[serde(default)]
    pub config: ConfigSection,

    #[serde(default)]
    pub quest: Vec<QuestConfig>,
}

/// `[config]` section: how the book is flattened and routed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigSection {
    /// Chain tasks without `after` to the previously emitted task.
    #[serde(default)]
    pub implicit_after: bool,

    /// Skip route entries that name no task instead of failing.
    #[serde(default)]
    pub ignore_missing_tasks: bool,

    /// Qualified task names, most urgent first.
    #[serde(default)]
    pub route: Vec<String>,

    #[serde(default)]
    pub log_level: Option<LogLevel>,
}

/// `[[quest]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestConfig {
    pub name: String,

    /// Static quest completion; `None` leaves task completion alone.
    #[serde(default)]
    pub completed: Option<bool>,

    #[serde(default, rename = "task")]
    pub tasks: Vec<TaskConfig>,
}

/// `[[quest.task]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskConfig {
    pub name: String,

    /// Quest-local names, or `"<quest>/<task>"` for other quests.
    #[serde(default)]
    pub after: Option<Vec<String>>,

    /// Opaque action payload handed to whatever runs the task.
    #[serde(default)]
    pub action: String,

    #[serde(default)]
    pub completed: bool,
}

impl TaskConfig {
    fn to_task(&self) -> Task<String> {
        Task {
            name: self.name.clone(),
            after: self.after.clone(),
            completed: Completion::fixed(self.completed),
            action: self.action.clone(),
        }
    }
}

impl QuestConfig {
    fn to_quest(&self) -> Quest<String> {
        Quest {
            name: self.name.clone(),
            tasks: self.tasks.iter().map(TaskConfig::to_task).collect(),
            completed: self.completed.map(Completion::fixed),
        }
    }
}

/// Validated quest book.
///
/// Only constructed through [`TryFrom<RawQuestBook>`], so the quests are
/// known to flatten cleanly and the route is known to resolve.
#[derive(Debug, Clone)]
pub struct QuestBook {
    pub config: ConfigSection,
    pub quest: Vec<QuestConfig>,
}

impl QuestBook {
    pub(crate) fn new_unchecked(config: ConfigSection, quest: Vec<QuestConfig>) -> Self {
        Self { config, quest }
    }

    /// Build the in-memory quests described by this book.
    pub fn quests(&self) -> Vec<Quest<String>> {
        self.quest.iter().map(QuestConfig::to_quest).collect()
    }
}

#![allow(dead_code)]

use questline::{Completion, Quest, Task};

/// Builder for `Quest` to simplify test setup.
pub struct QuestBuilder {
    quest: Quest<String>,
}

impl QuestBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            quest: Quest::new(name, Vec::new()),
        }
    }

    pub fn with_task(mut self, task: Task<String>) -> Self {
        self.quest.tasks.push(task);
        self
    }

    pub fn completed(mut self, completion: Completion) -> Self {
        self.quest.completed = Some(completion);
        self
    }

    pub fn build(self) -> Quest<String> {
        self.quest
    }
}

/// Builder for `Task`; the action payload defaults to `"run <name>"`.
pub struct TaskBuilder {
    task: Task<String>,
}

impl TaskBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            task: Task::new(name, format!("run {name}")),
        }
    }

    /// Append one dependency, turning an undeclared `after` into a list.
    pub fn after(mut self, dep: &str) -> Self {
        self.task
            .after
            .get_or_insert_with(Vec::new)
            .push(dep.to_string());
        self
    }

    /// Declare an explicit, empty dependency list.
    pub fn no_deps(mut self) -> Self {
        self.task.after = Some(Vec::new());
        self
    }

    pub fn completed(mut self, completion: Completion) -> Self {
        self.task.completed = completion;
        self
    }

    pub fn done(self, value: bool) -> Self {
        self.completed(Completion::fixed(value))
    }

    pub fn build(self) -> Task<String> {
        self.task
    }
}

/// Shorthand for a flat task list (as if already flattened).
pub fn tasks(specs: &[(&str, &[&str])]) -> Vec<Task<String>> {
    specs
        .iter()
        .map(|(name, after)| {
            let b = TaskBuilder::new(name);
            if after.is_empty() {
                b.build()
            } else {
                after.iter().fold(b, |b, dep| b.after(dep)).build()
            }
        })
        .collect()
}

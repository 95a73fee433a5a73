// src/types.rs

//! Quest and task value types shared by the flattener and the router.

use crate::completion::Completion;

/// Canonical task name type.
pub type TaskName = String;

/// Separator between the quest name and the task name in a qualified name.
pub const QUEST_SEPARATOR: char = '/';

/// Qualify `name` with `quest` unless it already names a task in some quest.
///
/// Names that contain [`QUEST_SEPARATOR`] are treated as absolute and
/// returned unchanged, so qualifying twice gives the same result.
pub fn qualify(quest: &str, name: &str) -> TaskName {
    if name.contains(QUEST_SEPARATOR) {
        name.to_string()
    } else {
        format!("{quest}{QUEST_SEPARATOR}{name}")
    }
}

/// A named unit of work.
///
/// `A` is the action payload; it is carried through flattening and routing
/// without ever being inspected.
#[derive(Debug, Clone)]
pub struct Task<A> {
    pub name: TaskName,
    /// Tasks this one must follow.
    ///
    /// `None` means no dependencies were declared, which is different from
    /// an explicit empty list when implicit chaining is enabled.
    pub after: Option<Vec<TaskName>>,
    pub completed: Completion,
    pub action: A,
}

impl<A> Task<A> {
    pub fn new(name: impl Into<TaskName>, action: A) -> Self {
        Self {
            name: name.into(),
            after: None,
            completed: Completion::default(),
            action,
        }
    }

    pub fn with_after<I, S>(mut self, after: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<TaskName>,
    {
        self.after = Some(after.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_completed(mut self, completed: Completion) -> Self {
        self.completed = completed;
        self
    }

    pub fn is_complete(&self) -> bool {
        self.completed.is_complete()
    }
}

/// A named, ordered group of tasks with an optional overriding completion.
#[derive(Debug, Clone)]
pub struct Quest<A> {
    pub name: String,
    pub tasks: Vec<Task<A>>,
    /// When this reports complete, every task of the quest is complete.
    pub completed: Option<Completion>,
}

impl<A> Quest<A> {
    pub fn new(name: impl Into<String>, tasks: Vec<Task<A>>) -> Self {
        Self {
            name: name.into(),
            tasks,
            completed: None,
        }
    }

    pub fn with_completed(mut self, completed: Completion) -> Self {
        self.completed = Some(completed);
        self
    }
}

/// Read access to the parts of a task the router cares about.
pub trait TaskLike {
    fn name(&self) -> &str;

    fn after(&self) -> &[TaskName];
}

impl<A> TaskLike for Task<A> {
    fn name(&self) -> &str {
        &self.name
    }

    fn after(&self) -> &[TaskName] {
        self.after.as_deref().unwrap_or(&[])
    }
}

impl<T: TaskLike + ?Sized> TaskLike for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn after(&self) -> &[TaskName] {
        (**self).after()
    }
}

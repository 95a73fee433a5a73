// src/route/priority.rs

use std::collections::HashMap;

use crate::types::TaskName;

/// Priority of a task the route never reaches.
pub const UNROUTED_PRIORITY: f64 = 1000.0;

/// Priority subtracted for each `after` hop away from a routed task.
pub const DEPENDENCY_STEP: f64 = 0.01;

/// Per-task priorities computed by the router. Lower sorts earlier.
#[derive(Debug, Clone, Default)]
pub struct Priorities {
    values: HashMap<TaskName, f64>,
}

impl Priorities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Priority of `task`, or [`UNROUTED_PRIORITY`] if the route never touched it.
    pub fn get(&self, task: &str) -> f64 {
        self.values.get(task).copied().unwrap_or(UNROUTED_PRIORITY)
    }

    pub fn is_routed(&self, task: &str) -> bool {
        self.values.contains_key(task)
    }

    /// Store `priority` if it is strictly lower than the current one.
    ///
    /// Returns whether the stored value changed.
    pub fn improve(&mut self, task: &str, priority: f64) -> bool {
        if self.get(task) <= priority {
            return false;
        }
        self.values.insert(task.to_string(), priority);
        true
    }

    /// Number of tasks whose priority was set by the route.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

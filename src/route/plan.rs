// src/route/plan.rs

//! Result type for a single routing pass.

use crate::route::priority::Priorities;
use crate::types::{TaskLike, TaskName};

/// Structured result of [`Router::plan`](crate::route::Router::plan).
///
/// Useful for callers and tests that want to inspect the priorities behind
/// an ordering, not just the ordering itself.
#[derive(Debug, Clone)]
pub struct RoutePlan<'a, T> {
    /// Tasks sorted by ascending priority; ties keep their input order.
    pub order: Vec<&'a T>,
    /// Priorities assigned by the route.
    pub priorities: Priorities,
    /// Unknown names skipped because missing tasks were ignored, in the
    /// order they were first encountered.
    pub skipped: Vec<TaskName>,
}

impl<'a, T: TaskLike> RoutePlan<'a, T> {
    /// Names of the ordered tasks.
    pub fn names(&self) -> Vec<&'a str> {
        self.order.iter().map(|&t| T::name(t)).collect()
    }

    pub fn priority_of(&self, task: &str) -> f64 {
        self.priorities.get(task)
    }
}

#[cfg(test)]
mod tests {
    use crate::route::Router;
    use crate::types::Task;

    #[test]
    fn names_outlive_the_plan() {
        let tasks = vec![Task::new("a", ()), Task::new("b", ()).with_after(["a"])];
        let router = Router::new(&tasks);

        let names = {
            let plan = router.plan(&["b"], false).unwrap();
            plan.names()
        };
        assert_eq!(names, ["a", "b"]);
    }
}

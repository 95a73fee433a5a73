// src/route/router.rs

use tracing::{debug, info, warn};

use crate::errors::{QuestlineError, Result};
use crate::route::graph::DagGraph;
use crate::route::plan::RoutePlan;
use crate::route::priority::{DEPENDENCY_STEP, Priorities};
use crate::types::{TaskLike, TaskName};

/// Orders a fixed task list according to routes.
///
/// The router borrows the tasks and never mutates them, so one router can
/// serve any number of routes, from any number of threads.
#[derive(Debug, Clone)]
pub struct Router<'a, T> {
    tasks: &'a [T],
    graph: DagGraph,
}

impl<'a, T: TaskLike> Router<'a, T> {
    pub fn new(tasks: &'a [T]) -> Self {
        let graph = DagGraph::from_tasks(tasks);
        debug!(tasks = tasks.len(), "router: indexed tasks");
        Self { tasks, graph }
    }

    /// Compute route priorities without sorting.
    pub fn priorities<S: AsRef<str>>(
        &self,
        routing: &[S],
        ignore_missing_tasks: bool,
    ) -> Result<Priorities> {
        self.propagate(routing, ignore_missing_tasks)
            .map(|(priorities, _)| priorities)
    }

    /// Return the tasks stably sorted by route priority.
    pub fn order<S: AsRef<str>>(
        &self,
        routing: &[S],
        ignore_missing_tasks: bool,
    ) -> Result<Vec<&'a T>> {
        self.plan(routing, ignore_missing_tasks).map(|plan| plan.order)
    }

    /// Compute priorities and ordering together.
    pub fn plan<S: AsRef<str>>(
        &self,
        routing: &[S],
        ignore_missing_tasks: bool,
    ) -> Result<RoutePlan<'a, T>> {
        let (priorities, skipped) = self.propagate(routing, ignore_missing_tasks)?;

        let mut order: Vec<&'a T> = self.tasks.iter().collect();
        // `sort_by` is stable: equal priorities keep their input order.
        order.sort_by(|a, b| priorities.get(a.name()).total_cmp(&priorities.get(b.name())));

        info!(
            route = routing.len(),
            routed = priorities.len(),
            skipped = skipped.len(),
            "router: ordered tasks by route"
        );

        Ok(RoutePlan {
            order,
            priorities,
            skipped,
        })
    }

    /// Give each routing entry its index as priority and push improved
    /// priorities down `after` edges, one [`DEPENDENCY_STEP`] per hop.
    ///
    /// A dependency is only expanded when its priority strictly improves.
    /// In an acyclic graph no path has `tasks.len()` hops, so reaching that
    /// depth means a cycle keeps improving itself.
    fn propagate<S: AsRef<str>>(
        &self,
        routing: &[S],
        ignore_missing_tasks: bool,
    ) -> Result<(Priorities, Vec<TaskName>)> {
        let mut priorities = Priorities::new();
        let mut skipped: Vec<TaskName> = Vec::new();
        let max_hops = self.tasks.len();

        for (index, entry) in routing.iter().enumerate() {
            let mut stack: Vec<(&str, f64, usize)> = vec![(entry.as_ref(), index as f64, 0)];

            while let Some((name, candidate, hops)) = stack.pop() {
                let Some(deps) = self.graph.dependencies_of(name) else {
                    if !ignore_missing_tasks {
                        return Err(QuestlineError::UnknownRoutingTask(name.to_string()));
                    }
                    debug!(task = %name, "router: skipping unknown task");
                    if !skipped.iter().any(|s| s == name) {
                        skipped.push(name.to_string());
                    }
                    continue;
                };

                if !priorities.improve(name, candidate) {
                    continue;
                }

                if hops >= max_hops {
                    let member = self
                        .graph
                        .cycle_reachable_from(name)
                        .unwrap_or_else(|| name.to_string());
                    warn!(
                        task = %member,
                        route_entry = %entry.as_ref(),
                        "router: dependency cycle"
                    );
                    return Err(QuestlineError::CyclicDependency(member));
                }

                // Reverse so the first `after` entry is expanded first.
                for dep in deps.iter().rev() {
                    stack.push((dep.as_str(), candidate - DEPENDENCY_STEP, hops + 1));
                }
            }
        }

        Ok((priorities, skipped))
    }
}

/// Order `tasks` by `routing`. See [`Router::order`].
pub fn order<'a, T: TaskLike, S: AsRef<str>>(
    tasks: &'a [T],
    routing: &[S],
    ignore_missing_tasks: bool,
) -> Result<Vec<&'a T>> {
    Router::new(tasks).order(routing, ignore_missing_tasks)
}

/// Priorities `routing` assigns to `tasks`. See [`Router::priorities`].
pub fn route_priorities<T: TaskLike, S: AsRef<str>>(
    tasks: &[T],
    routing: &[S],
    ignore_missing_tasks: bool,
) -> Result<Priorities> {
    Router::new(tasks).priorities(routing, ignore_missing_tasks)
}

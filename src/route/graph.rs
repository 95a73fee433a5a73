// src/route/graph.rs

use std::collections::{HashMap, HashSet};

use petgraph::algo::tarjan_scc;
use petgraph::graphmap::DiGraphMap;
use petgraph::visit::Dfs;

use crate::types::{TaskLike, TaskName};

/// In-memory dependency graph keyed by task name.
///
/// Nothing here assumes the graph is acyclic or that every `after` entry
/// resolves; the router decides what to do about either. When a name occurs
/// more than once, the last task with that name wins.
#[derive(Debug, Clone, Default)]
pub struct DagGraph {
    deps: HashMap<TaskName, Vec<TaskName>>,
}

impl DagGraph {
    pub fn from_tasks<T: TaskLike>(tasks: &[T]) -> Self {
        let deps = tasks
            .iter()
            .map(|task| (task.name().to_string(), task.after().to_vec()))
            .collect();
        Self { deps }
    }

    /// Immediate dependencies of a task, or `None` if the task is unknown.
    pub fn dependencies_of(&self, name: &str) -> Option<&[TaskName]> {
        self.deps.get(name).map(|d| d.as_slice())
    }

    /// Find a task that sits on a dependency cycle reachable from `start`
    /// by following `after` edges.
    ///
    /// Returns the lexicographically smallest member of the first such cycle
    /// so that error messages are stable across runs.
    pub fn cycle_reachable_from(&self, start: &str) -> Option<TaskName> {
        // Edge direction: task -> dependency.
        let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();
        for (name, deps) in &self.deps {
            graph.add_node(name.as_str());
            for dep in deps {
                graph.add_edge(name.as_str(), dep.as_str(), ());
            }
        }

        if !graph.contains_node(start) {
            return None;
        }

        let mut reachable: HashSet<&str> = HashSet::new();
        let mut dfs = Dfs::new(&graph, start);
        while let Some(node) = dfs.next(&graph) {
            reachable.insert(node);
        }

        tarjan_scc(&graph)
            .into_iter()
            .filter(|scc| scc.iter().any(|n| reachable.contains(n)))
            .filter(|scc| scc.len() > 1 || graph.contains_edge(scc[0], scc[0]))
            .filter_map(|scc| scc.into_iter().min())
            .min()
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Task;

    #[test]
    fn dependencies_are_indexed_by_name() {
        let tasks = vec![Task::new("a", ()), Task::new("b", ()).with_after(["a"])];
        let graph = DagGraph::from_tasks(&tasks);

        assert_eq!(graph.dependencies_of("b"), Some(&["a".to_string()][..]));
        assert!(graph.dependencies_of("a").unwrap().is_empty());
        assert_eq!(graph.dependencies_of("ghost"), None);
    }

    #[test]
    fn finds_cycle_downstream_of_start() {
        let tasks = vec![
            Task::new("top", ()).with_after(["x"]),
            Task::new("x", ()).with_after(["y"]),
            Task::new("y", ()).with_after(["x"]),
            Task::new("z", ()).with_after(["z"]),
        ];
        let graph = DagGraph::from_tasks(&tasks);

        assert_eq!(graph.cycle_reachable_from("top").as_deref(), Some("x"));
        assert_eq!(graph.cycle_reachable_from("z").as_deref(), Some("z"));
    }

    #[test]
    fn acyclic_graph_has_no_cycle() {
        let tasks = vec![
            Task::new("a", ()),
            Task::new("b", ()).with_after(["a"]),
            Task::new("c", ()).with_after(["a", "b"]),
        ];
        let graph = DagGraph::from_tasks(&tasks);
        assert_eq!(graph.cycle_reachable_from("c"), None);
    }
}

// tests/route_properties.rs
mod common;
use crate::common::{init_tracing, names};

use std::collections::HashSet;

use proptest::prelude::*;
use questline::route::UNROUTED_PRIORITY;
use questline::{Router, Task, TaskLike};
use questline_test_utils::builders::TaskBuilder;

// Strategy to generate an acyclic flattened task list.
// Acyclicity is ensured by only letting task N depend on tasks 0..N-1.
fn dag_strategy(max_tasks: usize) -> impl Strategy<Value = Vec<Task<String>>> {
    (1..=max_tasks).prop_flat_map(|num_tasks| {
        proptest::collection::vec(
            proptest::collection::vec(any::<usize>(), 0..3),
            num_tasks,
        )
        .prop_map(|raw_deps| {
            raw_deps
                .into_iter()
                .enumerate()
                .map(|(i, potential)| {
                    let mut builder = TaskBuilder::new(&format!("Q/t{i}"));
                    if i > 0 {
                        let deps: HashSet<usize> = potential.into_iter().map(|d| d % i).collect();
                        for dep in deps {
                            builder = builder.after(&format!("Q/t{dep}"));
                        }
                    }
                    builder.build()
                })
                .collect()
        })
    })
}

fn route_strategy() -> impl Strategy<Value = (Vec<Task<String>>, Vec<String>)> {
    dag_strategy(12).prop_flat_map(|tasks| {
        let n = tasks.len();
        let route = proptest::collection::vec(0..n, 0..5)
            .prop_map(|idx| idx.into_iter().map(|i| format!("Q/t{i}")).collect::<Vec<_>>());
        (Just(tasks), route)
    })
}

proptest! {
    #[test]
    fn ordering_is_a_permutation((tasks, route) in route_strategy()) {
        init_tracing();

        let ordered = Router::new(&tasks).order(&route, false).unwrap();

        let mut got = names(&ordered);
        let mut want = names(&tasks);
        got.sort();
        want.sort();
        prop_assert_eq!(got, want);
    }

    #[test]
    fn reordering_is_idempotent((tasks, route) in route_strategy()) {
        init_tracing();

        let once = Router::new(&tasks).order(&route, false).unwrap();
        let twice = Router::new(&once).order(&route, false).unwrap();
        prop_assert_eq!(names(&once), names(&twice));
    }

    #[test]
    fn routed_dependencies_precede_their_dependents((tasks, route) in route_strategy()) {
        init_tracing();

        let router = Router::new(&tasks);
        let plan = router.plan(&route, false).unwrap();
        let position = |name: &str| plan.order.iter().position(|t| t.name() == name).unwrap();

        for task in &tasks {
            if !plan.priorities.is_routed(&task.name) {
                continue;
            }
            prop_assert!(plan.priority_of(&task.name) < UNROUTED_PRIORITY);
            for dep in task.after() {
                prop_assert!(plan.priorities.is_routed(dep));
                prop_assert!(plan.priority_of(dep) < plan.priority_of(&task.name));
                prop_assert!(position(dep) < position(&task.name));
            }
        }
    }

    #[test]
    fn unrouted_tasks_keep_input_order((tasks, route) in route_strategy()) {
        init_tracing();

        let plan = Router::new(&tasks).plan(&route, false).unwrap();

        let unrouted_in: Vec<&str> = tasks
            .iter()
            .map(|t| t.name.as_str())
            .filter(|n| !plan.priorities.is_routed(n))
            .collect();
        let unrouted_out: Vec<&str> = plan
            .names()
            .into_iter()
            .filter(|n| !plan.priorities.is_routed(n))
            .collect();
        prop_assert_eq!(unrouted_in, unrouted_out);
    }
}

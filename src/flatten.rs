// src/flatten.rs

//! Flatten quests into a single namespaced task sequence.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::errors::{QuestlineError, Result};
use crate::types::{Quest, Task, qualify};

/// Flatten `quests` into one ordered task list.
///
/// For every task, in quest order then task order:
/// - its name becomes `"<quest>/<task>"`;
/// - local `after` entries are qualified with the owning quest, entries that
///   already contain a separator are kept as cross-quest references;
/// - with `implicit_after`, a task without declared dependencies follows the
///   task emitted just before it (which may belong to a previous quest);
/// - a quest completion, if any, is OR-ed in front of the task completion.
///
/// The caller's quests are not modified. Fails with
/// [`QuestlineError::DuplicateTask`] when two tasks share a qualified name and
/// with [`QuestlineError::UnknownDependency`] when an `after` entry names no
/// flattened task.
pub fn flatten<A: Clone>(quests: &[Quest<A>], implicit_after: bool) -> Result<Vec<Task<A>>> {
    let mut result: Vec<Task<A>> = Vec::new();

    for quest in quests {
        debug!(
            quest = %quest.name,
            tasks = quest.tasks.len(),
            has_completion = quest.completed.is_some(),
            "flattening quest"
        );

        for original in &quest.tasks {
            let mut task = original.clone();
            task.name = qualify(&quest.name, &original.name);
            task.after = original
                .after
                .as_ref()
                .map(|after| after.iter().map(|dep| qualify(&quest.name, dep)).collect());

            if implicit_after && task.after.is_none() {
                if let Some(previous) = result.last() {
                    task.after = Some(vec![previous.name.clone()]);
                }
            }

            if let Some(ref quest_done) = quest.completed {
                task.completed = quest_done.clone().or(task.completed);
            }

            result.push(task);
        }
    }

    verify_names(&result)?;

    info!(
        quests = quests.len(),
        tasks = result.len(),
        implicit_after,
        "flattened quests"
    );
    Ok(result)
}

/// Check that qualified names are unique and every dependency resolves.
fn verify_names<A>(tasks: &[Task<A>]) -> Result<()> {
    let mut names: HashSet<&str> = HashSet::with_capacity(tasks.len());
    for task in tasks {
        if !names.insert(task.name.as_str()) {
            return Err(QuestlineError::DuplicateTask(task.name.clone()));
        }
    }

    for task in tasks {
        for dep in task.after.iter().flatten() {
            if !names.contains(dep.as_str()) {
                return Err(QuestlineError::UnknownDependency {
                    dependency: dep.clone(),
                    task: task.name.clone(),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::Completion;
    use crate::types::TaskLike;

    fn names<A>(tasks: &[Task<A>]) -> Vec<&str> {
        tasks.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn qualifies_names_in_order() {
        let quests = vec![
            Quest::new("Q1", vec![Task::new("a", ()), Task::new("b", ())]),
            Quest::new("Q2", vec![Task::new("a", ())]),
        ];

        let flat = flatten(&quests, false).unwrap();
        assert_eq!(names(&flat), ["Q1/a", "Q1/b", "Q2/a"]);
        assert!(flat.iter().all(|t| t.after.is_none()));
        // Caller data untouched.
        assert_eq!(quests[0].tasks[0].name, "a");
    }

    #[test]
    fn implicit_chain_crosses_quests_but_respects_explicit_after() {
        let quests = vec![
            Quest::new("Q1", vec![Task::new("a", ()), Task::new("b", ())]),
            Quest::new(
                "Q2",
                vec![
                    Task::new("c", ()),
                    Task::new("d", ()).with_after(Vec::<String>::new()),
                ],
            ),
        ];

        let flat = flatten(&quests, true).unwrap();
        assert!(flat[0].after.is_none());
        assert_eq!(flat[1].after(), ["Q1/a"]);
        assert_eq!(flat[2].after(), ["Q1/b"]);
        assert_eq!(flat[3].after, Some(vec![]));
    }

    #[test]
    fn duplicate_qualified_name_is_rejected() {
        let quests = vec![Quest::new("Q", vec![Task::new("a", ()), Task::new("a", ())])];

        match flatten(&quests, false) {
            Err(QuestlineError::DuplicateTask(name)) => assert_eq!(name, "Q/a"),
            other => panic!("expected DuplicateTask, got {other:?}"),
        }
    }

    #[test]
    fn quest_completion_is_composed_not_evaluated() {
        let quests = vec![
            Quest::new("Q", vec![Task::new("a", ())]).with_completed(Completion::check(|| {
                panic!("flatten must not evaluate completions")
            })),
        ];

        let flat = flatten(&quests, false).unwrap();
        assert_eq!(flat[0].completed.leaf_count(), 2);
    }
}

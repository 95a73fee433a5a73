// src/completion.rs

//! Completion predicates attached to quests and tasks.
//!
//! A [`Completion`] is either a leaf check supplied by the caller or an
//! OR-combination of two other completions. Nothing in this crate ever
//! evaluates a completion; the flattener only composes them and the
//! execution engine downstream decides when to call [`Completion::is_complete`].

use std::fmt;
use std::sync::Arc;

/// Shared, thread-safe zero-argument predicate.
pub type CheckFn = Arc<dyn Fn() -> bool + Send + Sync>;

#[derive(Clone)]
pub enum Completion {
    /// Externally supplied predicate.
    Check(CheckFn),
    /// Complete when either side is complete. The left side is evaluated
    /// first and short-circuits.
    Either(Box<Completion>, Box<Completion>),
}

impl Completion {
    /// Wrap a closure as a leaf predicate.
    pub fn check<F>(f: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        Completion::Check(Arc::new(f))
    }

    /// A predicate that always returns `value`.
    pub fn fixed(value: bool) -> Self {
        Completion::check(move || value)
    }

    /// OR-combine `self` with `other`; `self` is checked first.
    pub fn or(self, other: Completion) -> Self {
        Completion::Either(Box::new(self), Box::new(other))
    }

    pub fn is_complete(&self) -> bool {
        match self {
            Completion::Check(f) => f(),
            Completion::Either(first, second) => first.is_complete() || second.is_complete(),
        }
    }

    /// Number of leaf predicates composed into this completion.
    pub fn leaf_count(&self) -> usize {
        match self {
            Completion::Check(_) => 1,
            Completion::Either(first, second) => first.leaf_count() + second.leaf_count(),
        }
    }
}

impl Default for Completion {
    fn default() -> Self {
        Completion::fixed(false)
    }
}

impl fmt::Debug for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Completion::Check(_) => f.write_str("Check(..)"),
            Completion::Either(first, second) => {
                f.debug_tuple("Either").field(first).field(second).finish()
            }
        }
    }
}

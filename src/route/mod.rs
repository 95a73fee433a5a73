// src/route/mod.rs

//! Route-based task ordering.
//!
//! - [`graph`] holds the `after` adjacency of a task list and locates cycles.
//! - [`priority`] stores per-task priorities computed from a route.
//! - [`plan`] is the rich result of a routing pass.
//! - [`router`] propagates route priorities and sorts the tasks.

pub mod graph;
pub mod plan;
pub mod priority;
pub mod router;

pub use graph::DagGraph;
pub use plan::RoutePlan;
pub use priority::{DEPENDENCY_STEP, Priorities, UNROUTED_PRIORITY};
pub use router::{Router, order, route_priorities};

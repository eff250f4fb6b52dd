//! Domain model for tracked competitive-programming tasks.
//!
//! # Responsibility
//! - Define the canonical `Task` record and its enums.
//! - Define `TaskCollection`, the ordered sequence bound to the task slot.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Tasks are replaced, never edited in place.
//! - Collection ids are unique; insertion order is display order.

pub mod collection;
pub mod task;

//! Task use-cases over the shared task store.
//!
//! # Responsibility
//! - Bind the task collection to its fixed slot.
//! - Provide the entry-form and list/card use-cases the shell composes.
//!
//! # Invariants
//! - Every mutation goes through `PersistentStore::update`.
//! - No use-case keeps its own copy of the collection.

pub mod entry_form;
pub mod task_list;
pub mod task_store;

//! Core domain logic for the competitive-programming task tracker.
//! Front ends drive `AppShell`; everything durable goes through one slot.

pub mod app;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use app::{AppShell, APP_TITLE};
pub use config::AppConfig;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::collection::{CollectionError, TaskCollection};
pub use model::task::{
    derive_problem_url, Platform, Task, TaskId, TaskStatus, TaskValidationError,
};
pub use repo::slot_repo::{RepoError, RepoResult, SlotRepository, SqliteSlotRepository};
pub use service::entry_form::{FormError, SubmitError, TaskEntryForm};
pub use service::task_list::{
    due_marker, render_cards, toggle_task, DueFlags, DueMarker, TaskCard, EMPTY_LIST_MESSAGE,
};
pub use service::task_store::{open_task_store, TaskStore, TASKS_SLOT_KEY};
pub use store::{PersistentStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

//! Application root composing header, entry panel and task list.
//!
//! # Responsibility
//! - Own the one `TaskStore` and lend it to the form and list use-cases.
//! - Track whether the slide-over entry panel is open.
//!
//! # Invariants
//! - No component other than the shell holds the store.
//! - Closing the panel discards the draft; reopening starts blank.

use crate::model::collection::TaskCollection;
use crate::model::task::TaskId;
use crate::repo::slot_repo::SlotRepository;
use crate::service::entry_form::{SubmitError, TaskEntryForm};
use crate::service::task_list::{render_cards, toggle_task, TaskCard};
use crate::service::task_store::{open_task_store, TaskStore};
use crate::store::StoreResult;
use chrono::{DateTime, Utc};

/// Title rendered in the header bar.
pub const APP_TITLE: &str = "Compete Tasks";

pub struct AppShell<R: SlotRepository> {
    store: TaskStore<R>,
    panel: Option<TaskEntryForm>,
}

impl<R: SlotRepository> AppShell<R> {
    /// Starts the app, loading the task slot once.
    pub fn start(repo: R) -> Self {
        Self::with_store(open_task_store(repo))
    }

    pub fn with_store(store: TaskStore<R>) -> Self {
        Self { store, panel: None }
    }

    pub fn tasks(&self) -> &TaskCollection {
        self.store.value()
    }

    /// Header control: opens the entry panel, keeping an existing draft.
    pub fn open_entry_panel(&mut self) -> &mut TaskEntryForm {
        self.panel.get_or_insert_with(TaskEntryForm::new)
    }

    pub fn close_entry_panel(&mut self) {
        self.panel = None;
    }

    pub fn is_entry_panel_open(&self) -> bool {
        self.panel.is_some()
    }

    pub fn entry_form(&self) -> Option<&TaskEntryForm> {
        self.panel.as_ref()
    }

    /// Submits the open panel's draft, opening a blank panel if none is open.
    ///
    /// The panel stays open after submit, matching the slide-over behavior.
    pub fn submit_entry(&mut self) -> Result<TaskId, SubmitError> {
        let form = self.panel.get_or_insert_with(TaskEntryForm::new);
        form.submit(&mut self.store)
    }

    /// Checkbox handler of a card.
    pub fn toggle(&mut self, id: TaskId) -> StoreResult<bool> {
        toggle_task(&mut self.store, id)
    }

    /// Cards in display order against `now`.
    pub fn render(&self, now: DateTime<Utc>) -> Vec<TaskCard> {
        render_cards(self.store.value(), now)
    }

    pub fn into_store(self) -> TaskStore<R> {
        self.store
    }
}

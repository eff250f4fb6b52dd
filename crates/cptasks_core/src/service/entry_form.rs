//! Task entry form.
//!
//! # Responsibility
//! - Hold the draft of a new task, including the transient tag input.
//! - Validate the draft and append the resulting task to the shared store.
//!
//! # Invariants
//! - A rejected submit never mutates the collection.
//! - The draft is reset only after the task has been persisted.
//! - Draft tags are trimmed, non-empty and unique (case-sensitive).

use crate::model::collection::CollectionError;
use crate::model::task::{derive_problem_url, Platform, Task, TaskId};
use crate::repo::slot_repo::SlotRepository;
use crate::service::task_store::TaskStore;
use crate::store::StoreError;
use chrono::NaiveDate;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Inline validation message shown next to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    TitleRequired,
    NonPositiveDifficulty,
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TitleRequired => write!(f, "title required"),
            Self::NonPositiveDifficulty => write!(f, "difficulty must be positive"),
        }
    }
}

impl Error for FormError {}

/// Why a submit did not produce a task.
#[derive(Debug)]
pub enum SubmitError {
    Invalid(FormError),
    Collection(CollectionError),
    Store(StoreError),
}

impl Display for SubmitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(err) => write!(f, "{err}"),
            Self::Collection(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SubmitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(err) => Some(err),
            Self::Collection(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for SubmitError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<CollectionError> for SubmitError {
    fn from(value: CollectionError) -> Self {
        Self::Collection(value)
    }
}

/// Draft state of the "add task" panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskEntryForm {
    title: String,
    platform: Platform,
    difficulty: Option<u32>,
    due: Option<NaiveDate>,
    url: String,
    tags: Vec<String>,
    tag_input: String,
    error: Option<FormError>,
}

impl TaskEntryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn difficulty(&self) -> Option<u32> {
        self.difficulty
    }

    pub fn due(&self) -> Option<NaiveDate> {
        self.due
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn tag_input(&self) -> &str {
        &self.tag_input
    }

    /// Current inline error, cleared by a successful submit.
    pub fn error(&self) -> Option<FormError> {
        self.error
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_platform(&mut self, platform: Platform) {
        self.platform = platform;
    }

    pub fn set_difficulty(&mut self, difficulty: Option<u32>) {
        self.difficulty = difficulty;
    }

    pub fn set_due(&mut self, due: Option<NaiveDate>) {
        self.due = due;
    }

    /// Only used when the platform is `Other`.
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    pub fn set_tag_input(&mut self, text: impl Into<String>) {
        self.tag_input = text.into();
    }

    /// Adds a trimmed tag to the draft and clears the tag input.
    ///
    /// Returns `false` (and leaves the input untouched) when the trimmed
    /// text is empty or already present.
    pub fn add_tag(&mut self, text: &str) -> bool {
        let tag = text.trim();
        if tag.is_empty() || self.tags.iter().any(|existing| existing == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        self.tag_input.clear();
        true
    }

    /// Adds the current tag input, as pressing Enter in the tag field does.
    pub fn commit_tag_input(&mut self) -> bool {
        let text = self.tag_input.clone();
        self.add_tag(&text)
    }

    /// Removes `tag` from the draft. Returns whether it was present.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        match self.tags.iter().position(|existing| existing == tag) {
            Some(index) => {
                self.tags.remove(index);
                true
            }
            None => false,
        }
    }

    /// Validates the draft and appends the new task to `store`.
    ///
    /// # Errors
    /// - `SubmitError::Invalid` for a blank title or zero difficulty; the
    ///   inline error is set and the store is untouched.
    /// - `SubmitError::Store` when the slot write fails; the draft is kept.
    pub fn submit<R: SlotRepository>(
        &mut self,
        store: &mut TaskStore<R>,
    ) -> Result<TaskId, SubmitError> {
        let task = match self.build_task() {
            Ok(task) => task,
            Err(err) => {
                warn!("event=task_add module=entry_form status=rejected reason={err:?}");
                self.error = Some(err);
                return Err(SubmitError::Invalid(err));
            }
        };

        let id = task.id;
        let next = store.value().appended(task)?;
        store.update(next)?;
        info!(
            "event=task_add module=entry_form status=ok task_id={id} total={}",
            store.value().len()
        );

        self.reset();
        Ok(id)
    }

    fn build_task(&self) -> Result<Task, FormError> {
        if self.title.trim().is_empty() {
            return Err(FormError::TitleRequired);
        }
        if self.difficulty == Some(0) {
            return Err(FormError::NonPositiveDifficulty);
        }

        let url = match self.platform {
            Platform::Other => Some(self.url.clone()),
            platform => derive_problem_url(platform, &self.title),
        }
        .filter(|url| !url.is_empty());

        let mut task = Task::new(self.title.clone(), self.platform);
        task.difficulty = self.difficulty;
        task.due = self.due;
        task.url = url;
        task.tags = (!self.tags.is_empty()).then(|| self.tags.clone());
        Ok(task)
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

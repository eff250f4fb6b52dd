//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record persisted in the task slot.
//! - Own the fixed per-platform problem URL table.
//!
//! # Invariants
//! - `id` is stable and never reassigned.
//! - `title` is non-blank after trimming.
//! - `difficulty`, when present, is positive.
//! - `tags`, when present, hold non-empty unique strings in insertion order.
//! - Deserialization runs `Task::validate()`; invalid records are rejected.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of one task.
pub type TaskId = Uuid;

/// Completion state of a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Not solved yet.
    #[default]
    Todo,
    /// Solved.
    Done,
}

impl TaskStatus {
    /// Returns the opposite state.
    pub fn flipped(self) -> Self {
        match self {
            Self::Todo => Self::Done,
            Self::Done => Self::Todo,
        }
    }
}

/// Judging site a task belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Atcoder,
    Codeforces,
    Leetcode,
    Other,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Atcoder,
        Platform::Codeforces,
        Platform::Leetcode,
        Platform::Other,
    ];

    /// Fixed problem URL prefix. Empty for `Other`.
    pub fn base_url(self) -> &'static str {
        match self {
            Self::Atcoder => "https://atcoder.jp/contests/",
            Self::Codeforces => "https://codeforces.com/problem/",
            Self::Leetcode => "https://leetcode.com/problems/",
            Self::Other => "",
        }
    }

    /// Wire literal, also used for display.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Atcoder => "atcoder",
            Self::Codeforces => "codeforces",
            Self::Leetcode => "leetcode",
            Self::Other => "other",
        }
    }

    /// Parses a wire literal, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|platform| platform.as_str() == normalized)
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation failures for task records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    NilId,
    BlankTitle,
    NonPositiveDifficulty,
    EmptyTag,
    DuplicateTag(String),
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "task id must not be nil"),
            Self::BlankTitle => write!(f, "task title must not be blank"),
            Self::NonPositiveDifficulty => write!(f, "difficulty must be positive"),
            Self::EmptyTag => write!(f, "tags must not be empty"),
            Self::DuplicateTag(tag) => write!(f, "duplicate tag `{tag}`"),
        }
    }
}

impl Error for TaskValidationError {}

/// One tracked problem.
///
/// Optional fields are omitted from the wire form when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskWire")]
pub struct Task {
    pub id: TaskId,
    /// Stored exactly as entered; only its trimmed form must be non-empty.
    pub title: String,
    pub status: TaskStatus,
    pub platform: Platform,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<u32>,
    /// Serialized as `yyyy-MM-dd`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[derive(Deserialize)]
struct TaskWire {
    id: TaskId,
    title: String,
    status: TaskStatus,
    platform: Platform,
    #[serde(default)]
    difficulty: Option<u32>,
    #[serde(default)]
    due: Option<NaiveDate>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    tags: Option<Vec<String>>,
}

impl TryFrom<TaskWire> for Task {
    type Error = TaskValidationError;

    fn try_from(wire: TaskWire) -> Result<Self, Self::Error> {
        let task = Task {
            id: wire.id,
            title: wire.title,
            status: wire.status,
            platform: wire.platform,
            difficulty: wire.difficulty,
            due: wire.due,
            url: wire.url,
            tags: wire.tags,
        };
        task.validate()?;
        Ok(task)
    }
}

impl Task {
    /// Creates a `todo` task with a fresh id and no optional fields.
    pub fn new(title: impl Into<String>, platform: Platform) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            status: TaskStatus::Todo,
            platform,
            difficulty: None,
            due: None,
            url: None,
            tags: None,
        }
    }

    /// Checks the record invariants listed in the module docs.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id.is_nil() {
            return Err(TaskValidationError::NilId);
        }
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::BlankTitle);
        }
        if self.difficulty == Some(0) {
            return Err(TaskValidationError::NonPositiveDifficulty);
        }
        if let Some(tags) = &self.tags {
            let mut seen = HashSet::with_capacity(tags.len());
            for tag in tags {
                if tag.is_empty() {
                    return Err(TaskValidationError::EmptyTag);
                }
                if !seen.insert(tag.as_str()) {
                    return Err(TaskValidationError::DuplicateTag(tag.clone()));
                }
            }
        }
        Ok(())
    }

    /// Returns a copy with the status flipped and every other field kept.
    pub fn toggled(&self) -> Self {
        Self {
            status: self.status.flipped(),
            ..self.clone()
        }
    }

    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }
}

/// Builds the problem URL for `platform` from a title.
///
/// Returns `None` for `Platform::Other`, whose URL is user-supplied.
pub fn derive_problem_url(platform: Platform, title: &str) -> Option<String> {
    match platform {
        Platform::Other => None,
        known => Some(format!("{}{}", known.base_url(), title.trim())),
    }
}

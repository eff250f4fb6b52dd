//! Task list and card view model.
//!
//! # Responsibility
//! - Derive per-card display state (overdue / due-soon) against a given now.
//! - Flip completion of one task through the shared store.
//!
//! # Invariants
//! - Rendering is pure; it reads the collection and never writes.
//! - A due date is interpreted as midnight UTC of that day.
//! - Overdue and due-soon are not disjoint; overdue wins. Done tasks show
//!   neither.

use crate::model::collection::TaskCollection;
use crate::model::task::{Platform, Task, TaskId};
use crate::repo::slot_repo::SlotRepository;
use crate::service::task_store::TaskStore;
use crate::store::StoreResult;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use log::{debug, info};
use std::fmt::{Display, Formatter};

/// Width of the due-soon window.
pub const DUE_SOON_WINDOW_DAYS: i64 = 3;

/// Shown instead of cards when the collection is empty.
pub const EMPTY_LIST_MESSAGE: &str = "No tasks yet. Add one from the header.";

/// Deadline marker rendered on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueMarker {
    Overdue,
    DueSoon,
}

impl DueMarker {
    pub fn label(self) -> &'static str {
        match self {
            Self::Overdue => "overdue",
            Self::DueSoon => "due-soon",
        }
    }
}

/// Raw deadline predicates for one task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DueFlags {
    pub is_overdue: bool,
    pub is_due_soon: bool,
}

impl DueFlags {
    pub fn for_task(task: &Task, now: DateTime<Utc>) -> Self {
        match task.due {
            Some(due) => {
                let due_at = due_instant(due);
                Self {
                    is_overdue: due_at < now,
                    is_due_soon: due_at <= now + Duration::days(DUE_SOON_WINDOW_DAYS),
                }
            }
            None => Self::default(),
        }
    }
}

fn due_instant(due: NaiveDate) -> DateTime<Utc> {
    due.and_time(chrono::NaiveTime::MIN).and_utc()
}

/// Marker to display for `task`, honoring precedence and completion.
pub fn due_marker(task: &Task, now: DateTime<Utc>) -> Option<DueMarker> {
    if task.is_done() {
        return None;
    }
    let flags = DueFlags::for_task(task, now);
    if flags.is_overdue {
        Some(DueMarker::Overdue)
    } else if flags.is_due_soon {
        Some(DueMarker::DueSoon)
    } else {
        None
    }
}

/// Render-ready projection of one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCard {
    pub id: TaskId,
    pub title: String,
    pub platform: Platform,
    pub done: bool,
    pub due: Option<NaiveDate>,
    pub difficulty: Option<u32>,
    pub url: Option<String>,
    pub tags: Vec<String>,
    pub marker: Option<DueMarker>,
}

impl TaskCard {
    pub fn from_task(task: &Task, now: DateTime<Utc>) -> Self {
        Self {
            id: task.id,
            title: task.title.clone(),
            platform: task.platform,
            done: task.is_done(),
            due: task.due,
            difficulty: task.difficulty,
            url: task.url.clone(),
            tags: task.tags.clone().unwrap_or_default(),
            marker: due_marker(task, now),
        }
    }

    /// Short due label, e.g. `due Oct 18`.
    pub fn due_label(&self) -> Option<String> {
        self.due.map(|due| format!("due {}", due.format("%b %-d")))
    }
}

impl Display for TaskCard {
    /// One-line card: checkbox, title, platform, due, difficulty, marker.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let checkbox = if self.done { "[x]" } else { "[ ]" };
        write!(f, "{checkbox} {}  ({})", self.title, self.platform)?;
        if let Some(label) = self.due_label() {
            write!(f, "  {label}")?;
        }
        if let Some(difficulty) = self.difficulty {
            write!(f, "  ★ {difficulty}")?;
        }
        if let Some(marker) = self.marker {
            write!(f, "  [{}]", marker.label())?;
        }
        Ok(())
    }
}

/// Projects the whole collection in display order.
pub fn render_cards(tasks: &TaskCollection, now: DateTime<Utc>) -> Vec<TaskCard> {
    tasks
        .iter()
        .map(|task| TaskCard::from_task(task, now))
        .collect()
}

/// Flips completion of `id`.
///
/// Returns `Ok(false)` without writing when no task matches.
pub fn toggle_task<R: SlotRepository>(store: &mut TaskStore<R>, id: TaskId) -> StoreResult<bool> {
    let Some(next) = store.value().toggled(id) else {
        debug!("event=task_toggle module=task_list status=ignored task_id={id}");
        return Ok(false);
    };
    store.update(next)?;
    info!("event=task_toggle module=task_list status=ok task_id={id}");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::{due_instant, TaskCard};
    use crate::model::task::{Platform, Task};
    use chrono::{NaiveDate, TimeZone, Utc};

    #[test]
    fn due_instant_is_utc_midnight() {
        let due = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert_eq!(
            due_instant(due),
            Utc.with_ymd_and_hms(2026, 10, 18, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn card_line_includes_due_label_difficulty_and_marker() {
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
        let mut task = Task::new("ABC300 D", Platform::Atcoder);
        task.due = NaiveDate::from_ymd_opt(2026, 10, 18);
        task.difficulty = Some(1200);

        let line = TaskCard::from_task(&task, now).to_string();
        assert_eq!(line, "[ ] ABC300 D  (atcoder)  due Oct 18  ★ 1200  [due-soon]");
    }
}

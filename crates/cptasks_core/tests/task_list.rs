use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use cptasks_core::db::open_db_in_memory;
use cptasks_core::{
    due_marker, open_task_store, render_cards, toggle_task, DueFlags, DueMarker, Platform,
    SlotRepository, SqliteSlotRepository, Task, TaskEntryForm, TaskStatus, TASKS_SLOT_KEY,
};
use uuid::Uuid;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
}

fn task_due(due: NaiveDate) -> Task {
    let mut task = Task::new("ABC300 E", Platform::Atcoder);
    task.due = Some(due);
    task
}

fn today() -> NaiveDate {
    now().date_naive()
}

#[test]
fn yesterday_is_overdue_unless_done() {
    let mut task = task_due(today() - Duration::days(1));
    assert_eq!(due_marker(&task, now()), Some(DueMarker::Overdue));

    task.status = TaskStatus::Done;
    assert_eq!(due_marker(&task, now()), None);
}

#[test]
fn within_three_days_is_due_soon() {
    let task = task_due(today() + Duration::days(2));
    assert_eq!(due_marker(&task, now()), Some(DueMarker::DueSoon));

    let mut done = task.clone();
    done.status = TaskStatus::Done;
    assert_eq!(due_marker(&done, now()), None);
}

#[test]
fn far_future_and_undated_tasks_have_no_marker() {
    let far = task_due(today() + Duration::days(10));
    assert_eq!(due_marker(&far, now()), None);

    let undated = Task::new("no deadline", Platform::Leetcode);
    assert_eq!(DueFlags::for_task(&undated, now()), DueFlags::default());
    assert_eq!(due_marker(&undated, now()), None);
}

#[test]
fn overdue_and_due_soon_overlap_and_overdue_wins() {
    let task = task_due(today() - Duration::days(5));
    let flags = DueFlags::for_task(&task, now());
    assert!(flags.is_overdue);
    assert!(flags.is_due_soon);
    assert_eq!(due_marker(&task, now()), Some(DueMarker::Overdue));
}

#[test]
fn due_soon_boundary_is_inclusive() {
    let at = Utc.with_ymd_and_hms(2026, 10, 16, 0, 0, 0).unwrap();
    let task = task_due(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());

    let flags = DueFlags::for_task(&task, at);
    assert!(flags.is_due_soon);
    assert!(!flags.is_overdue);
}

#[test]
fn due_today_counts_as_overdue_after_utc_midnight() {
    let task = task_due(today());
    assert_eq!(due_marker(&task, now()), Some(DueMarker::Overdue));
}

#[test]
fn toggle_twice_restores_original_task() {
    let conn = open_db_in_memory().unwrap();
    let mut store = open_task_store(SqliteSlotRepository::new(&conn));
    let mut form = TaskEntryForm::new();
    form.set_title("keep");
    form.submit(&mut store).unwrap();
    form.set_title("flip");
    form.set_difficulty(Some(1500));
    form.add_tag("bitmask");
    let id = form.submit(&mut store).unwrap();
    let before = store.value().clone();

    assert!(toggle_task(&mut store, id).unwrap());
    assert_eq!(store.value().get(id).unwrap().status, TaskStatus::Done);
    assert_eq!(store.value().iter().next(), before.iter().next());

    assert!(toggle_task(&mut store, id).unwrap());
    assert_eq!(store.value(), &before);
}

#[test]
fn toggle_unknown_id_is_a_noop_without_write() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSlotRepository::new(&conn);
    let mut store = open_task_store(&repo);

    assert!(!toggle_task(&mut store, Uuid::new_v4()).unwrap());
    assert!(store.value().is_empty());
    assert_eq!(repo.read_slot(TASKS_SLOT_KEY).unwrap(), None);
}

#[test]
fn toggle_is_persisted() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSlotRepository::new(&conn);
    let mut store = open_task_store(&repo);
    let mut form = TaskEntryForm::new();
    form.set_title("persist me");
    let id = form.submit(&mut store).unwrap();

    toggle_task(&mut store, id).unwrap();

    let reopened = open_task_store(&repo);
    assert_eq!(reopened.value().get(id).unwrap().status, TaskStatus::Done);
}

#[test]
fn render_cards_follows_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let mut store = open_task_store(SqliteSlotRepository::new(&conn));
    let mut form = TaskEntryForm::new();
    for title in ["b-problem", "a-problem"] {
        form.set_title(title);
        form.submit(&mut store).unwrap();
    }

    let cards = render_cards(store.value(), now());
    let titles: Vec<&str> = cards.iter().map(|card| card.title.as_str()).collect();
    assert_eq!(titles, ["b-problem", "a-problem"]);
    assert!(cards.iter().all(|card| !card.done && card.marker.is_none()));
}

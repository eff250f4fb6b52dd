use cptasks_core::db::{open_db, open_db_in_memory};
use cptasks_core::{
    open_task_store, Platform, PersistentStore, RepoError, SlotRepository,
    SqliteSlotRepository, StoreError, Task, TaskCollection, TASKS_SLOT_KEY,
};

#[test]
fn absent_slot_yields_initial_value() {
    let conn = open_db_in_memory().unwrap();
    let store = PersistentStore::open(SqliteSlotRepository::new(&conn), "counter", 7_u32);

    assert_eq!(*store.value(), 7);
}

#[test]
fn malformed_slot_falls_back_silently() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSlotRepository::new(&conn);
    repo.write_slot(TASKS_SLOT_KEY, "{not json").unwrap();

    let store = open_task_store(&repo);
    assert!(store.value().is_empty());
}

#[test]
fn structurally_invalid_collection_falls_back() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSlotRepository::new(&conn);
    let task = serde_json::to_value(Task::new("dup", Platform::Atcoder)).unwrap();
    let duplicated = serde_json::json!([task.clone(), task]).to_string();
    repo.write_slot(TASKS_SLOT_KEY, &duplicated).unwrap();

    let store = open_task_store(&repo);
    assert!(store.value().is_empty());
}

#[test]
fn update_writes_serialized_value_to_slot() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSlotRepository::new(&conn);
    let mut store = open_task_store(&repo);

    let task = Task::new("ABC123", Platform::Atcoder);
    let next = store.value().appended(task.clone()).unwrap();
    store.update(next).unwrap();

    let text = repo.read_slot(TASKS_SLOT_KEY).unwrap().unwrap();
    let stored: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(stored, serde_json::json!([serde_json::to_value(&task).unwrap()]));
}

#[test]
fn update_replaces_prior_slot_content() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSlotRepository::new(&conn);
    let mut store = PersistentStore::open(&repo, "labels", Vec::<String>::new());

    store.update(vec!["a".to_string()]).unwrap();
    store.update(vec!["b".to_string(), "c".to_string()]).unwrap();

    assert_eq!(
        repo.read_slot("labels").unwrap().as_deref(),
        Some(r#"["b","c"]"#)
    );
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM kv_slots;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn failed_write_keeps_previous_value() {
    let conn = open_db_in_memory().unwrap();
    let mut store = PersistentStore::open(SqliteSlotRepository::new(&conn), "", 1_u32);
    assert_eq!(*store.value(), 1);

    let err = store.update(2).unwrap_err();
    assert!(matches!(err, StoreError::Repo(RepoError::InvalidKey)));
    assert_eq!(*store.value(), 1);
}

#[test]
fn collection_round_trips_across_restarts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cptasks.sqlite3");

    let mut expected = TaskCollection::new();
    for (idx, platform) in Platform::ALL.into_iter().enumerate() {
        let mut task = Task::new(format!("problem {idx}"), platform);
        task.difficulty = Some(100 * (idx as u32 + 1));
        task.due = chrono::NaiveDate::from_ymd_opt(2026, 11, idx as u32 + 1);
        task.tags = Some(vec![format!("tag{idx}")]);
        expected = expected.appended(task).unwrap();
    }
    let done_id = expected.iter().nth(1).unwrap().id;
    expected = expected.toggled(done_id).unwrap();

    {
        let conn = open_db(&path).unwrap();
        let mut store = open_task_store(SqliteSlotRepository::new(&conn));
        store.update(expected.clone()).unwrap();
    }

    let conn = open_db(&path).unwrap();
    let reopened = open_task_store(SqliteSlotRepository::new(&conn));
    assert_eq!(reopened.value(), &expected);
}

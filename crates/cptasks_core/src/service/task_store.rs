//! Binding of the task collection to its durable slot.

use crate::model::collection::TaskCollection;
use crate::repo::slot_repo::SlotRepository;
use crate::store::PersistentStore;

/// Fixed slot holding the serialized task collection.
pub const TASKS_SLOT_KEY: &str = "cp-tasks";

/// The single store instance the application root owns.
pub type TaskStore<R> = PersistentStore<TaskCollection, R>;

/// Opens the task slot, starting from an empty collection when the slot is
/// absent or unreadable.
pub fn open_task_store<R: SlotRepository>(repo: R) -> TaskStore<R> {
    PersistentStore::open(repo, TASKS_SLOT_KEY, TaskCollection::new())
}

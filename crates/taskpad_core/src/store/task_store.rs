//! Authoritative task collection and its mutation operations.
//!
//! # Responsibility
//! - Own the insertion-ordered task collection for the process session.
//! - Apply create/toggle/edit/delete with silent-rejection semantics.
//! - Persist the whole collection after every successful mutation.
//!
//! # Invariants
//! - Task ids are unique within the collection at all times.
//! - In-memory state is the source of truth; durability is best-effort
//!   per write and a failed write never rolls a mutation back.
//! - Rejected operations (empty text, unknown id) change nothing and do
//!   not rewrite the slot.

use crate::model::task::{Category, Task, TaskId};
use crate::store::storage::TaskStorage;
use chrono::{DateTime, Utc};
use log::{debug, warn};
use uuid::Uuid;

/// Owner of the canonical task collection.
///
/// The presentation layer calls the five mutators and reads back the
/// snapshot; no other component holds a mutable reference to the
/// collection.
pub struct TaskStore<S: TaskStorage> {
    storage: S,
    tasks: Vec<Task>,
}

impl<S: TaskStorage> TaskStore<S> {
    /// Creates an empty store over the given slot. Call [`load`] to hydrate
    /// from durable state.
    ///
    /// [`load`]: TaskStore::load
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            tasks: Vec::new(),
        }
    }

    /// Replaces the collection with the durable slot contents.
    ///
    /// A missing slot yields an empty collection. A read or parse failure
    /// is logged and also yields an empty collection; hydration is never
    /// fatal to the caller.
    pub fn load(&mut self) {
        self.tasks = match self.storage.load() {
            Ok(Some(tasks)) => tasks,
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!("event=slot_load status=error detail={err}");
                Vec::new()
            }
        };
    }

    /// Read-only snapshot of the current collection, in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Appends a new task and persists the collection.
    ///
    /// Returns the fresh id, or `None` when `text` trims to nothing (the
    /// collection is left untouched).
    pub fn create(
        &mut self,
        text: &str,
        category: Category,
        due_date: Option<DateTime<Utc>>,
    ) -> Option<TaskId> {
        let mut task = match Task::new(text, category, due_date) {
            Ok(task) => task,
            Err(err) => {
                debug!("event=create_rejected detail={err}");
                return None;
            }
        };
        task.id = self.fresh_id(task.id);
        let id = task.id;
        self.tasks.push(task);
        self.persist();
        Some(id)
    }

    /// Flips `completed` on the matching task and persists.
    ///
    /// Returns `false` (no-op) when `id` is not in the collection.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        let Some(task) = self.find_mut(id) else {
            return false;
        };
        task.toggle_completed();
        self.persist();
        true
    }

    /// Replaces the matching task's text with the trimmed value and
    /// persists. All other fields are left unchanged.
    ///
    /// Returns `false` (no-op) when `id` is unknown or `new_text` trims to
    /// nothing.
    pub fn edit(&mut self, id: TaskId, new_text: &str) -> bool {
        let Some(task) = self.find_mut(id) else {
            return false;
        };
        if let Err(err) = task.rename(new_text) {
            debug!("event=edit_rejected id={id} detail={err}");
            return false;
        }
        self.persist();
        true
    }

    /// Removes the matching task and persists.
    ///
    /// Returns `false` (no-op) when `id` is not in the collection.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            return false;
        }
        self.persist();
        true
    }

    fn find_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }

    /// Ensures the candidate id is unused in this collection, regenerating
    /// on the off chance a v4 id collides.
    fn fresh_id(&self, candidate: TaskId) -> TaskId {
        let mut id = candidate;
        while self.tasks.iter().any(|task| task.id == id) {
            id = Uuid::new_v4();
        }
        id
    }

    /// Serializes the whole collection into the slot. Failures are logged
    /// and swallowed; the in-memory mutation stands regardless.
    fn persist(&self) {
        if let Err(err) = self.storage.save(&self.tasks) {
            warn!("event=slot_save status=error detail={err}");
        }
    }
}

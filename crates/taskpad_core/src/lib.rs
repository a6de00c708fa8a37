//! Core domain logic for Taskpad, a personal task list.
//! This crate is the single source of truth for business invariants;
//! presentation layers call in and render whatever comes back.

pub mod logging;
pub mod model;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Category, Task, TaskId, TaskValidationError, UnknownCategory};
pub use store::storage::{
    JsonSlotStorage, MemoryStorage, StorageError, StorageResult, TaskStorage,
};
pub use store::task_store::TaskStore;
pub use view::projector::{project, SortMode};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

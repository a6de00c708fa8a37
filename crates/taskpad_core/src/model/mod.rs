//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the canonical task record used by store and view layers.
//! - Enforce text validity at construction and rename time.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Stored text is always trimmed and non-empty.

pub mod task;

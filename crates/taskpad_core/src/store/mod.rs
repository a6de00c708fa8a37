//! Task store: the authoritative collection and its durability seam.
//!
//! # Responsibility
//! - Own the insertion-ordered task collection for the session.
//! - Define the storage contract and the JSON single-slot implementation.
//!
//! # Invariants
//! - The store is the sole writer of persisted state.
//! - The unit of durability is the whole collection, never one record.

pub mod storage;
pub mod task_store;

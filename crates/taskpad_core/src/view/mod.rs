//! Derived view computation over the task collection.
//!
//! # Responsibility
//! - Turn (collection, search string, sort mode) into a display sequence.
//!
//! # Invariants
//! - Projection is pure: no mutation, no persistence, no shared state.

pub mod projector;

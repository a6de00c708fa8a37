//! Search filter and sort projection.
//!
//! # Responsibility
//! - Compute the display sequence for the presentation layer.
//!
//! # Invariants
//! - The input collection is never mutated or returned by reference.
//! - Sorting is stable: equal-rank records keep collection order across
//!   calls.

use crate::model::task::Task;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Closed set of sort modes offered by the presentation layer.
///
/// Deserialization uses the wire names (`dueDate`, `createdAt`,
/// `alphabetical`), so an unrecognized mode is rejected at the serde
/// boundary rather than reaching the projection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortMode {
    /// Ascending by due date; tasks without one sort after every dated task.
    DueDate,
    /// Descending by creation time (most recent first). The default view.
    #[default]
    CreatedAt,
    /// Ascending by text, case-insensitively.
    Alphabetical,
}

/// Computes the display sequence for the given search string and sort mode.
///
/// A record is kept when its text or its category name contains the search
/// string case-insensitively; the empty string matches everything. The
/// survivors are stably sorted per [`SortMode`] and returned as a fresh
/// sequence.
pub fn project(tasks: &[Task], search: &str, sort: SortMode) -> Vec<Task> {
    let needle = search.to_lowercase();
    let mut view: Vec<Task> = tasks
        .iter()
        .filter(|task| matches_search(task, &needle))
        .cloned()
        .collect();

    match sort {
        SortMode::DueDate => view.sort_by(|a, b| compare_due_dates(a, b)),
        SortMode::CreatedAt => view.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortMode::Alphabetical => {
            view.sort_by(|a, b| a.text.to_lowercase().cmp(&b.text.to_lowercase()))
        }
    }

    view
}

fn matches_search(task: &Task, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    task.text.to_lowercase().contains(needle) || task.category.as_str().contains(needle)
}

/// Ascending due-date order with "no deadline" greater than any date.
///
/// Two undated tasks compare equal, so the stable sort keeps their
/// collection order.
fn compare_due_dates(a: &Task, b: &Task) -> Ordering {
    match (a.due_date, b.due_date) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

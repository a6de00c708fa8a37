//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record shared by store and view layers.
//! - Provide lifecycle helpers for completion and rename semantics.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `text` is trimmed and non-empty at all times.
//! - `created_at` is fixed at creation and never rewritten.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier for every task record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Closed category set for task records.
///
/// The presentation layer supplies one of these from its selector widget;
/// free-text categories are not representable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Personal,
    Work,
    Shopping,
    Other,
}

impl Category {
    /// Wire/display name, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Work => "work",
            Self::Shopping => "shopping",
            Self::Other => "other",
        }
    }

    /// All categories in selector order.
    pub const ALL: [Category; 4] = [
        Category::Personal,
        Category::Work,
        Category::Shopping,
        Category::Other,
    ];
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for category names outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl Display for UnknownCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown category `{}`; expected personal|work|shopping|other",
            self.0
        )
    }
}

impl Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "personal" => Ok(Self::Personal),
            "work" => Ok(Self::Work),
            "shopping" => Ok(Self::Shopping),
            "other" => Ok(Self::Other),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// Validation error for task construction and rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Submitted text was empty after trimming.
    EmptyText,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "task text cannot be empty"),
        }
    }
}

impl Error for TaskValidationError {}

/// Canonical task record.
///
/// Serialized field names follow the durable-slot wire contract
/// (`dueDate`, `createdAt`), so a slot written by this crate round-trips
/// field-for-field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Stable unique ID, assigned at creation.
    pub id: TaskId,
    /// Trimmed, non-empty display text.
    pub text: String,
    /// Completion flag; starts `false`.
    pub completed: bool,
    /// One of the closed category set; defaults to `personal`.
    pub category: Category,
    /// Optional deadline. `None` means "no deadline", never a sentinel date.
    pub due_date: Option<DateTime<Utc>>,
    /// Creation timestamp, immutable after construction.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a task with a generated stable ID and the current time.
    ///
    /// # Invariants
    /// - `text` is stored trimmed.
    /// - `completed` starts as `false`.
    ///
    /// # Errors
    /// - `TaskValidationError::EmptyText` when `text` trims to nothing.
    pub fn new(
        text: &str,
        category: Category,
        due_date: Option<DateTime<Utc>>,
    ) -> Result<Self, TaskValidationError> {
        let text = normalize_text(text)?;
        Ok(Self {
            id: Uuid::new_v4(),
            text,
            completed: false,
            category,
            due_date,
            created_at: Utc::now(),
        })
    }

    /// Flips the completion flag. Applying it twice restores the original.
    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }

    /// Replaces the display text with the trimmed value.
    ///
    /// All other fields are left unchanged.
    ///
    /// # Errors
    /// - `TaskValidationError::EmptyText` when `text` trims to nothing;
    ///   the current text is kept.
    pub fn rename(&mut self, text: &str) -> Result<(), TaskValidationError> {
        self.text = normalize_text(text)?;
        Ok(())
    }
}

/// Trims submitted text and rejects all-whitespace input.
pub(crate) fn normalize_text(text: &str) -> Result<String, TaskValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TaskValidationError::EmptyText);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::{normalize_text, Category, Task, TaskValidationError};
    use std::str::FromStr;

    #[test]
    fn new_trims_text_and_sets_defaults() {
        let task = Task::new("  buy milk  ", Category::Shopping, None).unwrap();
        assert_eq!(task.text, "buy milk");
        assert!(!task.completed);
        assert_eq!(task.category, Category::Shopping);
        assert_eq!(task.due_date, None);
        assert!(!task.id.is_nil());
    }

    #[test]
    fn new_rejects_whitespace_text() {
        let err = Task::new("   ", Category::Personal, None).unwrap_err();
        assert_eq!(err, TaskValidationError::EmptyText);
    }

    #[test]
    fn rename_keeps_text_on_empty_input() {
        let mut task = Task::new("original", Category::Personal, None).unwrap();
        assert!(task.rename(" \t ").is_err());
        assert_eq!(task.text, "original");
        assert!(task.rename(" new ").is_ok());
        assert_eq!(task.text, "new");
    }

    #[test]
    fn category_parses_wire_names() {
        assert_eq!(Category::from_str("work").unwrap(), Category::Work);
        assert_eq!(Category::from_str(" SHOPPING ").unwrap(), Category::Shopping);
        assert!(Category::from_str("chores").is_err());
        assert_eq!(Category::default(), Category::Personal);
    }

    #[test]
    fn normalize_text_returns_trimmed_value() {
        assert_eq!(normalize_text(" a b ").unwrap(), "a b");
        assert!(normalize_text("").is_err());
    }
}

use chrono::{DateTime, TimeZone, Utc};
use taskpad_core::{project, Category, SortMode, Task};
use uuid::Uuid;

fn stamped(text: &str, created_at: DateTime<Utc>, due_date: Option<DateTime<Utc>>) -> Task {
    Task {
        id: Uuid::new_v4(),
        text: text.to_string(),
        completed: false,
        category: Category::Personal,
        due_date,
        created_at,
    }
}

fn at(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap()
}

#[test]
fn empty_search_keeps_every_record() {
    let tasks = vec![
        stamped("one", at(1), None),
        stamped("two", at(2), None),
        stamped("three", at(3), None),
    ];

    let view = project(&tasks, "", SortMode::CreatedAt);
    assert_eq!(view.len(), tasks.len());
}

#[test]
fn unmatched_search_returns_empty_sequence() {
    let tasks = vec![stamped("buy milk", at(1), None)];

    let view = project(&tasks, "xyzzy", SortMode::CreatedAt);
    assert!(view.is_empty());
}

#[test]
fn filter_is_case_insensitive_over_text() {
    let tasks = vec![
        stamped("Buy Milk", at(1), None),
        stamped("write report", at(2), None),
    ];

    let view = project(&tasks, "MILK", SortMode::CreatedAt);
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].text, "Buy Milk");
}

#[test]
fn created_at_sort_is_most_recent_first() {
    let tasks = vec![
        stamped("t1", at(1), None),
        stamped("t2", at(2), None),
        stamped("t3", at(3), None),
    ];

    let view = project(&tasks, "", SortMode::CreatedAt);
    let texts: Vec<&str> = view.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["t3", "t2", "t1"]);
}

#[test]
fn due_date_sort_places_undated_last() {
    let tasks = vec![
        stamped("no deadline", at(1), None),
        stamped("due late", at(2), Some(at(20))),
        stamped("due soon", at(3), Some(at(5))),
    ];

    let view = project(&tasks, "", SortMode::DueDate);
    let texts: Vec<&str> = view.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["due soon", "due late", "no deadline"]);
}

#[test]
fn undated_records_keep_collection_order() {
    let tasks = vec![
        stamped("first undated", at(1), None),
        stamped("dated", at(2), Some(at(10))),
        stamped("second undated", at(3), None),
    ];

    let view = project(&tasks, "", SortMode::DueDate);
    let texts: Vec<&str> = view.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["dated", "first undated", "second undated"]);
}

#[test]
fn alphabetical_sort_ignores_case() {
    let tasks = vec![
        stamped("banana", at(1), None),
        stamped("Apple", at(2), None),
        stamped("cherry", at(3), None),
    ];

    let view = project(&tasks, "", SortMode::Alphabetical);
    let texts: Vec<&str> = view.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["Apple", "banana", "cherry"]);
}

#[test]
fn projection_returns_a_fresh_sequence() {
    let tasks = vec![stamped("original", at(1), None)];

    let mut view = project(&tasks, "", SortMode::CreatedAt);
    view[0].text = "mutated copy".to_string();

    assert_eq!(tasks[0].text, "original");
}

//! Persistence format and restart behaviour.

use rota::todo::adapters::MemoryTaskStore;
use rota::todo::domain::Task;
use rota::todo::services::TodoController;
use rota::todo::view::HtmlSurface;
use rstest::rstest;

use super::helpers::{controller, task};

#[rstest]
fn a_restart_reloads_the_same_tasks_in_order() {
    let store = MemoryTaskStore::new();
    {
        let mut todo = controller(store.clone());
        todo.add_task(task("a")).expect("add should succeed");
        todo.add_task(task("b")).expect("add should succeed");
        todo.add_task(task("c")).expect("add should succeed");
        todo.toggle_blocked(0).expect("toggle should succeed");
        todo.toggle_completed(1).expect("toggle should succeed");
    }

    let reloaded = controller(store);

    assert_eq!(reloaded.count(), 3);
    let descriptions: Vec<&str> = reloaded.tasks().iter().map(Task::description).collect();
    assert_eq!(descriptions, vec!["a", "b", "c"]);
    let first = reloaded.tasks().first().expect("task should be present");
    assert!(first.is_blocked());
    assert!(!first.is_completed());
    let second = reloaded.tasks().get(1).expect("task should be present");
    assert!(second.is_completed());
    assert_eq!(reloaded.hydration().loaded, 3);
    assert!(reloaded.hydration().skipped.is_empty());
}

#[rstest]
fn every_save_overwrites_the_previous_snapshot() {
    let store = MemoryTaskStore::new();
    let mut todo = controller(store.clone());
    todo.add_task(task("a")).expect("add should succeed");
    todo.add_task(task("b")).expect("add should succeed");

    todo.remove_task(0).expect("remove should succeed");

    let blob = store.raw().expect("blob should be stored");
    assert!(blob.contains("\"b\""));
    assert!(!blob.contains("\"a\""));
}

#[rstest]
fn the_stored_blob_is_a_json_array_of_flat_records() {
    let store = MemoryTaskStore::new();
    let mut todo = controller(store.clone());
    todo.add_task(task("buy milk")).expect("add should succeed");
    todo.toggle_completed(0).expect("toggle should succeed");

    let blob = store.raw().expect("blob should be stored");
    let value: serde_json::Value = serde_json::from_str(&blob).expect("blob should be JSON");
    let records = value.as_array().expect("blob should be an array");
    assert_eq!(records.len(), 1);
    let record = records
        .first()
        .and_then(serde_json::Value::as_object)
        .expect("record should be an object");
    assert_eq!(
        record.get("description").and_then(serde_json::Value::as_str),
        Some("buy milk")
    );
    assert_eq!(
        record.get("completed").and_then(serde_json::Value::as_bool),
        Some(true)
    );
    assert_eq!(
        record.get("blocked").and_then(serde_json::Value::as_bool),
        Some(false)
    );
}

#[rstest]
fn hydration_skips_invalid_records_but_keeps_the_rest() {
    let store = MemoryTaskStore::with_raw(
        r#"[{"description":"keep"},{"description":"   "},{"description":"also keep","blocked":true}]"#,
    );

    let reloaded =
        TodoController::new(store, HtmlSurface::new()).expect("construction should succeed");

    assert_eq!(reloaded.count(), 2);
    assert_eq!(reloaded.hydration().loaded, 2);
    assert_eq!(reloaded.hydration().skipped.len(), 1);
    assert_eq!(
        reloaded
            .hydration()
            .skipped
            .first()
            .map(|skip| skip.position),
        Some(1)
    );
}

//! End-to-end scenarios over the controller, store, and HTML surface.

use rota::todo::adapters::MemoryTaskStore;
use rota::todo::domain::Task;
use rota::todo::services::{TodoError, UserAction};
use rstest::rstest;

use super::helpers::{controller, task};

#[rstest]
fn adding_a_first_task_populates_list_and_view() {
    let mut todo = controller(MemoryTaskStore::new());

    todo.add_task(task("buy milk"))
        .expect("add should succeed");

    assert_eq!(todo.count(), 1);
    let added = todo.tasks().first().expect("task should be present");
    assert_eq!(added.description(), "buy milk");
    assert!(!added.is_completed());
    assert!(todo.surface().html().contains("buy milk"));
}

#[rstest]
fn blocking_then_toggling_leaves_the_task_uncompleted() {
    let mut todo = controller(MemoryTaskStore::new());
    todo.add_task(task("a")).expect("add should succeed");
    todo.add_task(task("b")).expect("add should succeed");

    todo.toggle_blocked(0).expect("toggle should succeed");
    todo.toggle_completed(0).expect("toggle should succeed");

    let first = todo.tasks().first().expect("task should be present");
    assert!(!first.is_completed());
    assert!(first.is_blocked());
    let second = todo.tasks().get(1).expect("task should be present");
    assert!(!second.is_completed());
    assert!(!second.is_blocked());
}

#[rstest]
fn removing_the_first_task_shifts_the_second_to_the_front() {
    let mut todo = controller(MemoryTaskStore::new());
    todo.add_task(task("a")).expect("add should succeed");
    todo.add_task(task("b")).expect("add should succeed");

    let removed = todo.remove_task(0).expect("remove should succeed");

    assert_eq!(removed.description(), "a");
    assert_eq!(todo.count(), 1);
    assert_eq!(
        todo.tasks().first().map(Task::description),
        Some("b")
    );
    assert!(todo.surface().html().contains("data-index=\"0\""));
    assert!(!todo.surface().html().contains("data-index=\"1\""));
}

#[rstest]
fn an_empty_description_submission_is_rejected() {
    let mut todo = controller(MemoryTaskStore::new());

    let result = todo.handle(UserAction::Submit {
        description: String::new(),
    });

    let error = result.expect_err("submission should fail");
    assert!(matches!(error, TodoError::Validation(_)));
    assert!(error.to_string().contains("description"));
    assert_eq!(todo.count(), 0);
}

#[rstest]
fn out_of_bounds_actions_fail_and_leave_everything_visible_unchanged() {
    let mut todo = controller(MemoryTaskStore::new());
    todo.add_task(task("only")).expect("add should succeed");
    let html_before = todo.surface().html().to_owned();

    assert!(matches!(
        todo.handle(UserAction::Remove { index: 1 }),
        Err(TodoError::Index(_))
    ));
    assert!(matches!(
        todo.handle(UserAction::ToggleCompleted { index: 9 }),
        Err(TodoError::Index(_))
    ));

    assert_eq!(todo.count(), 1);
    assert_eq!(todo.surface().html(), html_before);
}

#[rstest]
fn clearing_the_list_empties_view_and_storage() {
    let store = MemoryTaskStore::new();
    let mut todo = controller(store.clone());
    todo.add_task(task("a")).expect("add should succeed");
    todo.add_task(task("b")).expect("add should succeed");

    todo.remove_all_tasks().expect("clear should succeed");

    assert_eq!(todo.count(), 0);
    assert!(!todo.surface().html().contains("class=\"item"));
    assert_eq!(store.raw().as_deref(), Some("[]"));
}

//! Board transitions mirrored to on-disk slots

use std::sync::Arc;

use dashboard_core::board::{BoardStore, Outcome, Transition};
use dashboard_core::filter::{BoardView, TaskFilter};
use dashboard_core::storage::FileSlotStorage;
use dashboard_core::task::{SlotTaskRepository, TaskDraft, TaskStatus};
use tempfile::TempDir;

async fn open_store(dir: &TempDir) -> BoardStore {
    let storage = Arc::new(FileSlotStorage::new(dir.path()));
    BoardStore::open(Arc::new(SlotTaskRepository::new(storage))).await
}

async fn add(store: &mut BoardStore, draft: TaskDraft) -> String {
    match store.dispatch(Transition::Add(draft)).await.unwrap() {
        Outcome::Added(id) => id,
        other => panic!("Expected Added, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_filtered_columns_survive_restart() {
    let dir = TempDir::new().unwrap();

    {
        let mut store = open_store(&dir).await;
        let sink = add(&mut store, TaskDraft::new("Fix sink").with_category("Plumbing")).await;
        add(&mut store, TaskDraft::new("Rewire lamp").with_category("Electrical")).await;
        add(&mut store, TaskDraft::new("Unclog drain").with_category("Plumbing")).await;

        store
            .dispatch(Transition::Move {
                id: sink,
                status: TaskStatus::Done,
            })
            .await
            .unwrap();
    }

    let store = open_store(&dir).await;
    let tasks = store.board().tasks();
    let view = BoardView::build(tasks, &TaskFilter::new().with_category("Plumbing"));

    assert_eq!(view.matched, 2);
    let progress = view.column(TaskStatus::Progress).unwrap();
    let done = view.column(TaskStatus::Done).unwrap();
    assert_eq!(progress.tasks[0].title, "Unclog drain");
    assert_eq!(done.tasks[0].title, "Fix sink");
    assert_eq!(view.column(TaskStatus::Todo).unwrap().count(), 0);
}

#[tokio::test]
async fn test_edit_then_delete() {
    let dir = TempDir::new().unwrap();
    let mut store = open_store(&dir).await;
    let id = add(&mut store, TaskDraft::new("Paint fence")).await;

    let mut edited = store.get(&id).unwrap().clone();
    edited.description = "Two coats".to_string();
    assert_eq!(
        store.dispatch(Transition::Update(edited)).await.unwrap(),
        Outcome::Updated
    );
    assert_eq!(store.get(&id).unwrap().description, "Two coats");

    store.dispatch(Transition::Delete(id.clone())).await.unwrap();
    assert_eq!(
        store.dispatch(Transition::Delete(id)).await.unwrap(),
        Outcome::Unchanged
    );

    let reopened = open_store(&dir).await;
    assert!(reopened.board().is_empty());
}

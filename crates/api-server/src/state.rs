//! Application state

use std::path::PathBuf;
use std::sync::Arc;

use tl_core::task::{JsonDocumentStore, TaskStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    pub task_store: TaskStore,
}

impl AppState {
    /// Create a new AppState backed by the given tasks file
    pub async fn new(tasks_path: PathBuf) -> tl_core::Result<Self> {
        let task_store = TaskStore::open(JsonDocumentStore::new(tasks_path)).await?;

        Ok(Self {
            inner: Arc::new(AppStateInner { task_store }),
        })
    }

    /// Get reference to the task store
    pub fn task_store(&self) -> &TaskStore {
        &self.inner.task_store
    }
}

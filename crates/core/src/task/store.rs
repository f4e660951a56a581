//! In-memory task store backed by the JSON document
//!
//! The store owns the collection, loaded once at startup and mutated in
//! place; every mutation rewrites the backing document.

use tokio::sync::RwLock;
use uuid::Uuid;

use super::model::{Task, TaskDraft};
use super::persistence::{DocumentStore, TaskDocument};
use crate::{Error, Result};

/// Task store holding the collection and driving persistence
pub struct TaskStore {
    /// In-memory collection, in document order
    document: RwLock<TaskDocument>,
    storage: Box<dyn DocumentStore>,
}

impl TaskStore {
    /// Load the collection from storage.
    ///
    /// Fails if the backing document is missing or unreadable; the store
    /// is unusable until this completes.
    pub async fn open(storage: impl DocumentStore + 'static) -> Result<Self> {
        let document = storage.load().await?;
        Ok(Self {
            document: RwLock::new(document),
            storage: Box::new(storage),
        })
    }

    /// List tasks whose `completed` flag matches `completed`.
    ///
    /// Insertion order is preserved unless `sort_by_created_desc` is set,
    /// in which case newest tasks come first.
    pub async fn list(&self, completed: bool, sort_by_created_desc: bool) -> Vec<Task> {
        let document = self.document.read().await;
        let mut tasks: Vec<Task> = document
            .tasks
            .iter()
            .filter(|t| t.completed == completed)
            .cloned()
            .collect();

        if sort_by_created_desc {
            tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        }

        tasks
    }

    /// Get the first task whose id matches exactly
    pub async fn get(&self, id: &str) -> Option<Task> {
        let document = self.document.read().await;
        document.tasks.iter().find(|t| t.id == id).cloned()
    }

    /// List tasks whose priority matches `level` exactly.
    ///
    /// `level` is not checked against the known priorities; an
    /// unrecognized level yields an empty list.
    pub async fn list_by_priority(&self, level: &str) -> Vec<Task> {
        let document = self.document.read().await;
        document
            .tasks
            .iter()
            .filter(|t| t.priority.as_str() == level)
            .cloned()
            .collect()
    }

    /// Validate a draft, stamp it, and append it to the collection.
    ///
    /// A missing id is filled with a fresh UUID; a supplied id is kept
    /// as-is (uniqueness is not checked).
    pub async fn create(&self, draft: TaskDraft) -> Result<Task> {
        draft.validate()?;

        let task = Task {
            id: draft
                .id
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            title: draft.title,
            description: draft.description,
            completed: draft.completed,
            priority: draft.priority,
            created_at: chrono::Utc::now().timestamp_millis(),
        };

        {
            let mut document = self.document.write().await;
            document.tasks.push(task.clone());
        }
        self.persist().await?;
        Ok(task)
    }

    /// Replace every field of the matched task with the draft's fields,
    /// keeping `id` and `created_at` from the stored task.
    ///
    /// Validation happens before the existence check: an invalid draft
    /// for a nonexistent id reports `InvalidTask`, not `TaskNotFound`.
    pub async fn update(&self, id: &str, draft: TaskDraft) -> Result<Task> {
        draft.validate()?;

        let updated = {
            let mut document = self.document.write().await;
            let task = document
                .tasks
                .iter_mut()
                .find(|t| t.id == id)
                .ok_or_else(|| Error::TaskNotFound(id.to_string()))?;

            task.title = draft.title;
            task.description = draft.description;
            task.completed = draft.completed;
            task.priority = draft.priority;
            task.clone()
        };
        self.persist().await?;
        Ok(updated)
    }

    /// Remove the first task matching `id`
    pub async fn delete(&self, id: &str) -> Result<()> {
        {
            let mut document = self.document.write().await;
            let index = document
                .tasks
                .iter()
                .position(|t| t.id == id)
                .ok_or_else(|| Error::TaskNotFound(id.to_string()))?;
            document.tasks.remove(index);
        }
        self.persist().await?;
        Ok(())
    }

    /// Persist the current in-memory collection to storage.
    ///
    /// A failed save leaves the in-memory mutation in place; the
    /// collection and the document diverge until the next successful
    /// save.
    async fn persist(&self) -> Result<()> {
        let document = self.document.read().await;
        self.storage.save(&document).await
    }
}

//! Task document persistence
//!
//! The entire task collection lives in a single JSON document that is
//! rewritten wholesale on every mutation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

use super::model::Task;
use crate::Result;

/// On-disk shape of the backing document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskDocument {
    pub tasks: Vec<Task>,
}

/// Storage interface for the backing document.
///
/// Isolates the whole-file persistence strategy from the task store so a
/// storage change does not touch the store's logic.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Read and parse the entire backing document.
    ///
    /// Fails if the document is missing, unreadable, or not valid JSON.
    async fn load(&self) -> Result<TaskDocument>;

    /// Serialize the collection and replace the backing document.
    async fn save(&self, document: &TaskDocument) -> Result<()>;
}

/// JSON file-backed document store
pub struct JsonDocumentStore {
    /// Path to the JSON file
    path: PathBuf,
}

impl JsonDocumentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DocumentStore for JsonDocumentStore {
    async fn load(&self) -> Result<TaskDocument> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let document = serde_json::from_str(&content)?;
        Ok(document)
    }

    async fn save(&self, document: &TaskDocument) -> Result<()> {
        let content = serde_json::to_string_pretty(document)?;

        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&self.path, content).await?;
        debug!("Saved task document: {}", self.path.display());
        Ok(())
    }
}

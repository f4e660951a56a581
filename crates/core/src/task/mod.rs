//! Task module
//!
//! This module contains task-related types and logic.

mod model;
mod persistence;
mod store;

pub use model::*;
pub use persistence::{DocumentStore, JsonDocumentStore, TaskDocument};
pub use store::TaskStore;

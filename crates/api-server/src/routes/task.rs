//! Task API endpoints
//!
//! RESTful API for task CRUD operations.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use tl_core::task::{Task, TaskDraft};
use tl_core::Error;

use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ListTasksQuery {
    #[serde(default)]
    pub completed: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

type ApiError = (StatusCode, Json<MessageResponse>);

fn not_found() -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(MessageResponse::new("Task not found")),
    )
}

fn invalid_task_data() -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(MessageResponse::new("Invalid task data")),
    )
}

fn internal_error() -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(MessageResponse::new("Internal server error")),
    )
}

/// Map a store failure to the status and body seen by the client
fn store_error(err: Error) -> ApiError {
    match err {
        Error::TaskNotFound(_) => not_found(),
        Error::InvalidTask(err) => {
            tracing::debug!("rejected task payload: {err}");
            invalid_task_data()
        }
        err => {
            tracing::error!("task store failure: {err}");
            internal_error()
        }
    }
}

/// Parse a request body against the task schema.
///
/// The body is taken as a raw JSON value so that schema rejections
/// produce the service's own 400 body rather than a framework rejection.
fn parse_draft(body: Value) -> Result<TaskDraft, ApiError> {
    serde_json::from_value(body).map_err(|err| {
        tracing::debug!("rejected task payload: {err}");
        invalid_task_data()
    })
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /tasks - List tasks by completion state
async fn list_tasks(
    State(state): State<AppState>,
    Query(query): Query<ListTasksQuery>,
) -> Json<Vec<Task>> {
    // An absent parameter or anything other than "true" selects the
    // incomplete tasks; there is no way to list both states at once.
    let completed = query
        .completed
        .map(|value| value.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    let sort_by_created_desc = query.sort.is_some();

    let tasks = state.task_store().list(completed, sort_by_created_desc).await;
    Json(tasks)
}

/// GET /tasks/{id} - Get a single task
async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Task>, ApiError> {
    match state.task_store().get(&id).await {
        Some(task) => Ok(Json(task)),
        None => Err(not_found()),
    }
}

/// GET /tasks/priority/{level} - List tasks with the given priority
async fn list_tasks_by_priority(
    State(state): State<AppState>,
    Path(level): Path<String>,
) -> Json<Vec<Task>> {
    Json(state.task_store().list_by_priority(&level).await)
}

/// POST /tasks - Create a new task
async fn create_task(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let draft = parse_draft(body)?;

    let created = state
        .task_store()
        .create(draft)
        .await
        .map_err(store_error)?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /tasks/{id} - Replace an existing task
async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Task>, ApiError> {
    let draft = parse_draft(body)?;

    let updated = state
        .task_store()
        .update(&id, draft)
        .await
        .map_err(store_error)?;

    Ok(Json(updated))
}

/// DELETE /tasks/{id} - Delete a task
async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.task_store().delete(&id).await.map_err(store_error)?;

    Ok(Json(MessageResponse::new("Task deleted")))
}

// ============================================================================
// Router
// ============================================================================

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route("/tasks/priority/{level}", get(list_tasks_by_priority))
        .route(
            "/tasks/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
}

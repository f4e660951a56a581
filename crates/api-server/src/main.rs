//! Tasklist API server
//!
//! Serves CRUD operations over the task collection, persisted as a
//! single JSON document on disk.

mod routes;
mod state;

use axum::Router;
use std::net::SocketAddr;
use std::path::PathBuf;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::state::AppState;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine the backing document
    let tasks_path = std::env::var("TASKS_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data/tasks.json"));

    tracing::info!("Using tasks file: {:?}", tasks_path);

    // The store loads the document once; a missing or unreadable
    // document is fatal at startup.
    let app_state = AppState::new(tasks_path)
        .await
        .expect("Failed to load the tasks document");

    let app = Router::new()
        .merge(routes::health::router())
        .merge(routes::task::router())
        .with_state(app_state)
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], 3000));
    tracing::info!("REST API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

//! HTTP Routes
//!
//! JSON endpoints for the todo list, plus static hosting of the browser client.

use std::path::Path as FsPath;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::domain::Todo;
use crate::error::ServerError;
use crate::repository::{MarkableRepository, Repository};
use crate::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct AddRequest {
    pub text: String,
    #[serde(default)]
    pub parent_id: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MarkRequest {
    pub mark: bool,
}

/// API routes only
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/todos", get(list_todos).post(add_todo))
        .route("/todos/:id", delete(delete_todo))
        .route("/todos/:id/mark", post(mark_todo))
        .with_state(state)
}

/// API routes with the static client served for every other path
pub fn setup_router(state: AppState, static_dir: &FsPath) -> Router {
    api_router(state)
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
}

async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ServerError> {
    let todos = state.todo_repo.list().await?;
    tracing::debug!(count = todos.len(), "listed todos");
    Ok(Json(todos))
}

async fn add_todo(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<AddRequest>, ServerError>,
) -> Result<Json<Todo>, ServerError> {
    let draft = match req.parent_id {
        Some(parent_id) => Todo::new_child(0, req.text, parent_id),
        None => Todo::new(0, req.text),
    };
    let created = state.todo_repo.create(&draft).await?;
    tracing::info!(id = created.id, parent_id = ?created.parent_id, "created todo");
    Ok(Json(created))
}

async fn mark_todo(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<u32>, ServerError>,
    WithRejection(Json(req), _): WithRejection<Json<MarkRequest>, ServerError>,
) -> Result<StatusCode, ServerError> {
    state.todo_repo.set_mark(id, req.mark).await?;
    tracing::info!(id, mark = req.mark, "marked todo");
    Ok(StatusCode::OK)
}

async fn delete_todo(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<u32>, ServerError>,
) -> Result<StatusCode, ServerError> {
    state.todo_repo.delete(id).await?;
    tracing::info!(id, "deleted todo");
    Ok(StatusCode::OK)
}

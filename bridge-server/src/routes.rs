//! HTTP route handlers for task invocation.

use axum::Router;
use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use serde::Serialize;
use serde_json::Value;
use taskbridge::core::task::TaskName;
use taskbridge::dispatch::{DispatchError, Reply};

use crate::state::AppState;

/// Build the task router.
///
/// Task payloads carry whole documents and CSV batches, so request bodies are unbounded.
pub fn task_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/tasks", get(list_tasks))
        .route(
            "/tasks/{name}",
            post(run_task).layer(DefaultBodyLimit::disable()),
        )
}

async fn health() -> &'static str {
    "ok"
}

/// GET /tasks - names of every registered task.
async fn list_tasks() -> Json<Vec<&'static str>> {
    Json(TaskName::ALL.iter().map(|task| task.as_str()).collect())
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// POST /tasks/{name} - body is the task payload as JSON; empty body means `null`.
///
/// `exitProcess` answers `null` and then stops the server; the process exits 0.
async fn run_task(State(state): State<AppState>, Path(name): Path<String>, body: Bytes) -> Response {
    let payload = match parse_payload(&body) {
        Ok(payload) => payload,
        Err(err) => {
            return error_response(StatusCode::BAD_REQUEST, format!("invalid JSON body: {err}"));
        }
    };

    match state.dispatcher.dispatch(&name, payload).await {
        Ok(Reply::Value(value)) => Json(value).into_response(),
        Ok(Reply::Exit) => {
            state.request_exit();
            Json(Value::Null).into_response()
        }
        Err(err) => error_response(status_for(&err), err.to_string()),
    }
}

fn parse_payload(body: &[u8]) -> Result<Value, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body)
}

fn status_for(err: &DispatchError) -> StatusCode {
    match err {
        DispatchError::UnknownTask(_) => StatusCode::NOT_FOUND,
        DispatchError::Payload { .. } => StatusCode::BAD_REQUEST,
        DispatchError::Task { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorBody { error })).into_response()
}

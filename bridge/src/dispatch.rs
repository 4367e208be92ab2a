//! Name-based task dispatch.
//!
//! [`Dispatcher`] owns the process-wide [`StatusCounter`] and the resolved
//! [`BridgePaths`]; a host constructs one at startup and routes every task
//! invocation through [`Dispatcher::dispatch`].

use serde::{Deserialize, Deserializer};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::core::status::StatusCounter;
use crate::core::summary::RunSummary;
use crate::core::task::TaskName;
use crate::io::csv_store::write_csv;
use crate::io::files::{ensure_parent_dir, home_dir, list_dir, remove_file};
use crate::io::json_store::{read_json, store_json};
use crate::io::log_stream::{LogStream, append_to_stream, message_text};
use crate::io::paths::BridgePaths;
use crate::io::run_summary::write_run_summary;

/// Successful result of a task.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// JSON result delivered to the caller (`null` for side-effect-only tasks).
    Value(Value),
    /// The caller asked the host process to exit with a success status.
    /// The host delivers `null`, then terminates.
    Exit,
}

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("unknown task `{0}`")]
    UnknownTask(String),
    #[error("invalid payload for task `{task}`: {source}")]
    Payload {
        task: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("task `{task}` failed: {error:#}")]
    Task {
        task: &'static str,
        error: anyhow::Error,
    },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonWriteRequest {
    file_path: String,
    #[serde(default)]
    data: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CsvWriteRequest {
    file_path: String,
    #[serde(default)]
    data: Value,
    headers: Vec<String>,
    /// Absent means append; an explicit `null` means overwrite.
    #[serde(default = "append_by_default", deserialize_with = "null_as_false")]
    append: bool,
}

fn append_by_default() -> bool {
    true
}

fn null_as_false<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

pub struct Dispatcher {
    paths: BridgePaths,
    counter: StatusCounter,
}

impl Dispatcher {
    pub fn new(paths: BridgePaths) -> Self {
        Self {
            paths,
            counter: StatusCounter::new(),
        }
    }

    pub fn counter(&self) -> &StatusCounter {
        &self.counter
    }

    /// Route `payload` to the task registered as `name`.
    ///
    /// Unknown names are rejected without running anything.
    pub async fn dispatch(&self, name: &str, payload: Value) -> Result<Reply, DispatchError> {
        let task =
            TaskName::from_name(name).ok_or_else(|| DispatchError::UnknownTask(name.to_string()))?;
        debug!(task = task.as_str(), "dispatching task");
        let result = self.run(task, payload).await;
        if let Err(err) = &result {
            warn!(task = task.as_str(), error = %err, "task rejected");
        }
        result
    }

    async fn run(&self, task: TaskName, payload: Value) -> Result<Reply, DispatchError> {
        let name = task.as_str();
        match task {
            TaskName::EnsureDirectoryExistence => {
                let path: String = decode(name, payload)?;
                ensure_parent_dir(&self.paths.resolve(path)).map_err(|error| failed(name, error))?;
                Ok(null())
            }
            TaskName::IncrementStatusCount => {
                let category: String = decode(name, payload)?;
                if self.counter.increment(&category).is_none() {
                    debug!(category = %category, "ignoring unknown status category");
                }
                Ok(null())
            }
            TaskName::GetStatusCounts => {
                let counts = serde_json::to_value(self.counter.snapshot())
                    .map_err(|error| failed(name, error.into()))?;
                Ok(Reply::Value(counts))
            }
            TaskName::WriteAppliedCounts => {
                let summary: RunSummary = decode(name, payload)?;
                write_run_summary(&self.paths.summary_path, &summary)
                    .map_err(|error| failed(name, error))?;
                info!(path = %self.paths.summary_path.display(), "run summary written");
                Ok(null())
            }
            TaskName::ListFilesInDir => {
                let dir: String = decode(name, payload)?;
                let names = list_dir(&self.paths.resolve(dir))
                    .await
                    .map_err(|error| failed(name, error))?;
                Ok(Reply::Value(Value::from(names)))
            }
            TaskName::ReadJsonFile => {
                let path: String = decode(name, payload)?;
                let value = read_json(&self.paths.resolve(path)).unwrap_or(Value::Null);
                Ok(Reply::Value(value))
            }
            TaskName::WriteJsonFile => {
                let request: JsonWriteRequest = decode(name, payload)?;
                let outcome = store_json(&self.paths.resolve(request.file_path), &request.data);
                Ok(Reply::Value(outcome.map_or(Value::Null, Value::String)))
            }
            TaskName::GetHomeDir => {
                let home = home_dir().map_err(|error| failed(name, error))?;
                Ok(Reply::Value(Value::String(
                    home.to_string_lossy().into_owned(),
                )))
            }
            TaskName::LogApplicationInfo => self.log(name, LogStream::AppInfo, &payload),
            TaskName::LogApplicationError => self.log(name, LogStream::AppError, &payload),
            TaskName::LogInfo => self.log(name, LogStream::TestInfo, &payload),
            TaskName::LogError => self.log(name, LogStream::TestError, &payload),
            TaskName::WriteCsv => {
                let request: CsvWriteRequest = decode(name, payload)?;
                let written = write_csv(
                    &self.paths.resolve(request.file_path),
                    &request.data,
                    &request.headers,
                    request.append,
                );
                Ok(Reply::Value(Value::Bool(written)))
            }
            TaskName::DeleteFile => {
                let path: String = decode(name, payload)?;
                remove_file(&self.paths.resolve(path))
                    .await
                    .map_err(|error| failed(name, error))?;
                Ok(null())
            }
            TaskName::ExitProcess => {
                info!("exit requested by caller");
                Ok(Reply::Exit)
            }
        }
    }

    fn log(
        &self,
        name: &'static str,
        stream: LogStream,
        payload: &Value,
    ) -> Result<Reply, DispatchError> {
        // A lost line is already reported by the appender.
        append_to_stream(&self.paths, stream, &message_text(payload))
            .map_err(|error| failed(name, error))?;
        Ok(null())
    }
}

fn decode<T: DeserializeOwned>(task: &'static str, payload: Value) -> Result<T, DispatchError> {
    serde_json::from_value(payload).map_err(|source| DispatchError::Payload { task, source })
}

fn failed(task: &'static str, error: anyhow::Error) -> DispatchError {
    DispatchError::Task { task, error }
}

fn null() -> Reply {
    Reply::Value(Value::Null)
}

//! Append-only product log streams written on behalf of test specifications.
//!
//! Appending is best-effort: a failed append is reported through tracing and
//! surfaces as `false`, never as an error. Only a failure to create the
//! stream's directory propagates.

use std::path::Path;

use anyhow::Result;
use serde_json::Value;
use tracing::warn;

use super::files::{append_text, ensure_parent_dir};
use super::paths::BridgePaths;

/// The four fixed log streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogStream {
    AppInfo,
    AppError,
    TestInfo,
    TestError,
}

/// Append `message` plus one newline to `stream`.
///
/// Returns whether the line landed. Callers may ignore the flag.
pub fn append_to_stream(paths: &BridgePaths, stream: LogStream, message: &str) -> Result<bool> {
    append_line(&paths.log_path(stream), message)
}

/// Append `message` plus one newline to the file at `path`.
pub fn append_line(path: &Path, message: &str) -> Result<bool> {
    ensure_parent_dir(path)?;
    match append_text(path, &format!("{message}\n")) {
        Ok(()) => Ok(true),
        Err(err) => {
            warn!(path = %path.display(), error = %format!("{err:#}"), "error appending to file");
            Ok(false)
        }
    }
}

/// Text logged for a task payload: strings verbatim, anything else as compact JSON.
pub fn message_text(payload: &Value) -> String {
    match payload {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

//! Whole-document JSON snapshots: read fully, replace fully.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error, info};

use super::files::write_atomic;

/// Why a JSON document could not be read.
#[derive(Debug, Error)]
pub enum JsonReadError {
    #[error("file not found: {}", .path.display())]
    NotFound { path: PathBuf },
    #[error("read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read and parse the JSON document at `path`.
pub fn load_json(path: &Path) -> Result<Value, JsonReadError> {
    debug!(path = %path.display(), "loading json document");
    let contents = fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            JsonReadError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            JsonReadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    serde_json::from_str(&contents).map_err(|source| JsonReadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Task-facing read: any failure becomes `None`, with the cause logged.
pub fn read_json(path: &Path) -> Option<Value> {
    match load_json(path) {
        Ok(value) => Some(value),
        Err(err) => {
            error!(error = %err, "error reading json file");
            None
        }
    }
}

/// Replace the document at `path` with pretty-printed `value`.
pub fn write_json(path: &Path, value: &Value) -> Result<()> {
    let mut buf = serde_json::to_string_pretty(value).context("serialize json")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

/// Task-facing write: returns the error message on failure instead of raising.
pub fn store_json(path: &Path, value: &Value) -> Option<String> {
    match write_json(path, value) {
        Ok(()) => {
            info!(path = %path.display(), "json file written");
            None
        }
        Err(err) => {
            let message = format!("{err:#}");
            error!(path = %path.display(), error = %message, "error writing json file");
            Some(message)
        }
    }
}

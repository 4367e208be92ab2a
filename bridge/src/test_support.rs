//! Test-only helpers for driving a dispatcher inside a scratch project.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde_json::Value;
use tempfile::TempDir;

use crate::dispatch::{Dispatcher, Reply};
use crate::io::config::BridgeConfig;
use crate::io::paths::BridgePaths;

/// A dispatcher rooted in a fresh temporary project directory.
pub struct TestBridge {
    dir: TempDir,
    dispatcher: Dispatcher,
}

impl TestBridge {
    pub fn new() -> Result<Self> {
        Self::with_config(&BridgeConfig::default())
    }

    pub fn with_config(cfg: &BridgeConfig) -> Result<Self> {
        let dir = tempfile::tempdir().context("create temp project dir")?;
        let dispatcher = Dispatcher::new(BridgePaths::new(dir.path(), cfg));
        Ok(Self { dir, dispatcher })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Invoke a task and return its JSON result; any rejection or exit is an error.
    pub async fn call(&self, task: &str, payload: Value) -> Result<Value> {
        match self.dispatcher.dispatch(task, payload).await? {
            Reply::Value(value) => Ok(value),
            Reply::Exit => Err(anyhow!("task {task} requested process exit")),
        }
    }

    /// Read a file under the project directory as text.
    pub fn read(&self, relative: &str) -> Result<String> {
        let path = self.join(relative);
        fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))
    }
}

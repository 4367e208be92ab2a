//! Canonical locations for a bridge rooted at a project directory.

use std::path::{Path, PathBuf};

use super::config::BridgeConfig;
use super::log_stream::LogStream;

const INFO_LOG: &str = "info.log";
const ERROR_LOG: &str = "error.log";

/// All fixed paths the bridge writes to, plus resolution of caller paths.
#[derive(Debug, Clone)]
pub struct BridgePaths {
    pub root: PathBuf,
    pub summary_path: PathBuf,
    pub app_log_dir: PathBuf,
    pub test_log_dir: PathBuf,
}

impl BridgePaths {
    pub fn new(root: impl Into<PathBuf>, cfg: &BridgeConfig) -> Self {
        let root = root.into();
        Self {
            summary_path: root.join(&cfg.summary_file),
            app_log_dir: root.join(&cfg.app_log_dir),
            test_log_dir: root.join(&cfg.test_log_dir),
            root,
        }
    }

    /// Resolve a caller-supplied path. Relative paths are taken from the project root.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    pub fn log_path(&self, stream: LogStream) -> PathBuf {
        match stream {
            LogStream::AppInfo => self.app_log_dir.join(INFO_LOG),
            LogStream::AppError => self.app_log_dir.join(ERROR_LOG),
            LogStream::TestInfo => self.test_log_dir.join(INFO_LOG),
            LogStream::TestError => self.test_log_dir.join(ERROR_LOG),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_is_stable() {
        let temp = tempfile::tempdir().expect("tempdir");
        let paths = BridgePaths::new(temp.path(), &BridgeConfig::default());

        assert!(paths.summary_path.ends_with("appliedCount.json"));
        assert!(
            paths
                .log_path(LogStream::AppInfo)
                .ends_with(Path::new("applylogs/info.log"))
        );
        assert!(
            paths
                .log_path(LogStream::AppError)
                .ends_with(Path::new("applylogs/error.log"))
        );
        assert!(
            paths
                .log_path(LogStream::TestInfo)
                .ends_with(Path::new("cypress/logs/info.log"))
        );
        assert!(
            paths
                .log_path(LogStream::TestError)
                .ends_with(Path::new("cypress/logs/error.log"))
        );
    }

    #[test]
    fn resolve_keeps_absolute_and_roots_relative() {
        let temp = tempfile::tempdir().expect("tempdir");
        let paths = BridgePaths::new(temp.path(), &BridgeConfig::default());

        let absolute = temp.path().join("elsewhere.json");
        assert_eq!(paths.resolve(&absolute), absolute);
        assert_eq!(
            paths.resolve("data/out.csv"),
            temp.path().join("data").join("out.csv")
        );
    }
}

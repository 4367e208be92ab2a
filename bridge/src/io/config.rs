//! Bridge configuration stored in `taskbridge.toml` at the project root.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Default config file name, looked up under the project root.
pub const CONFIG_FILE: &str = "taskbridge.toml";

/// Bridge configuration (TOML).
///
/// Every location is relative to the project root. Missing fields default to
/// the layout test specifications already expect.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BridgeConfig {
    /// Run summary written by `writeAppliedCounts`.
    pub summary_file: String,

    /// Directory holding application `info.log` / `error.log`.
    pub app_log_dir: String,

    /// Directory holding test `info.log` / `error.log`.
    pub test_log_dir: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            summary_file: "appliedCount.json".to_string(),
            app_log_dir: "applylogs".to_string(),
            test_log_dir: "cypress/logs".to_string(),
        }
    }
}

impl BridgeConfig {
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("summary_file", &self.summary_file),
            ("app_log_dir", &self.app_log_dir),
            ("test_log_dir", &self.test_log_dir),
        ] {
            if value.trim().is_empty() {
                return Err(anyhow!("{field} must be non-empty"));
            }
            if Path::new(value).is_absolute() {
                return Err(anyhow!(
                    "{field} must be relative to the project root, got {value}"
                ));
            }
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `BridgeConfig::default()`.
pub fn load_config(path: &Path) -> Result<BridgeConfig> {
    if !path.exists() {
        let cfg = BridgeConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: BridgeConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, BridgeConfig::default());
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "app_log_dir = \"logs/apply\"\n").expect("write");

        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.app_log_dir, "logs/apply");
        assert_eq!(cfg.summary_file, "appliedCount.json");
        assert_eq!(cfg.test_log_dir, "cypress/logs");
    }

    #[test]
    fn rejects_empty_and_absolute_locations() {
        let empty = BridgeConfig {
            summary_file: " ".to_string(),
            ..BridgeConfig::default()
        };
        assert!(empty.validate().is_err());

        let absolute = BridgeConfig {
            test_log_dir: std::env::temp_dir().display().to_string(),
            ..BridgeConfig::default()
        };
        let err = absolute.validate().expect_err("absolute rejected");
        assert!(err.to_string().contains("test_log_dir"));
    }

    #[test]
    fn malformed_toml_reports_path() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "summary_file = [").expect("write");

        let err = load_config(&path).expect_err("parse error");
        assert!(format!("{err:#}").contains(CONFIG_FILE));
    }
}

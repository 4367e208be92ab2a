//! Run summary file (`appliedCount.json` by default).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use super::files::write_atomic;
use crate::core::summary::RunSummary;

/// Load a previously written run summary.
pub fn load_run_summary(path: &Path) -> Result<RunSummary> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read run summary {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("parse run summary {}", path.display()))
}

/// Replace the run summary with `summary`. Prior content is discarded.
pub fn write_run_summary(path: &Path, summary: &RunSummary) -> Result<()> {
    debug!(path = %path.display(), ?summary, "writing run summary");
    let mut buf = serde_json::to_string_pretty(summary)?;
    buf.push('\n');
    write_atomic(path, &buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn run_summary_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("appliedCount.json");

        let summary = RunSummary {
            applied: Some(json!(3)),
            already_applied: Some(json!(1)),
            no_longer_available: Some(json!(0)),
            failed: Some(json!(2)),
            skipped: Some(json!(4)),
        };
        write_run_summary(&path, &summary).expect("write");
        assert_eq!(load_run_summary(&path).expect("load"), summary);
    }

    /// Guards the external file format: field order, spelling and indentation.
    #[test]
    fn run_summary_format_is_stable() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("appliedCount.json");

        let summary = RunSummary {
            applied: Some(json!(3)),
            already_applied: Some(json!(0)),
            no_longer_available: Some(json!(0)),
            failed: Some(json!(1)),
            skipped: Some(json!(0)),
        };
        write_run_summary(&path, &summary).expect("write");
        let contents = fs::read_to_string(&path).expect("read");
        let expected = "{\n  \"applied\": 3,\n  \"alreadyApplied\": 0,\n  \"noLongerAvailable\": 0,\n  \"failed\": 1,\n  \"skipped\": 0\n}\n";
        assert_eq!(contents, expected);
    }

    #[test]
    fn each_write_replaces_the_previous_snapshot() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("appliedCount.json");

        write_run_summary(
            &path,
            &RunSummary {
                applied: Some(json!(10)),
                skipped: Some(json!(5)),
                ..RunSummary::default()
            },
        )
        .expect("write");
        let latest = RunSummary {
            failed: Some(json!(1)),
            ..RunSummary::default()
        };
        write_run_summary(&path, &latest).expect("write");

        assert_eq!(load_run_summary(&path).expect("load"), latest);
    }
}

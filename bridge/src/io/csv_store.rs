//! CSV documents appended to across task calls.
//!
//! A document gets its header line exactly once: when the file is created or
//! found blank. With `append = false` the file is truncated and rewritten as
//! header plus the new rows in a single write.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{error, info};

use super::files::{append_text, ensure_parent_dir};
use crate::core::csv_rows::{encode_rows, header_line};

/// Write `data` (one record or an array of records) to the CSV file at `path`.
///
/// Returns `false` on any failure; the cause is reported through tracing only.
pub fn write_csv(path: &Path, data: &Value, headers: &[String], append: bool) -> bool {
    match try_write_csv(path, data, headers, append) {
        Ok(()) => {
            info!(path = %path.display(), append, "csv file written");
            true
        }
        Err(err) => {
            error!(path = %path.display(), error = %format!("{err:#}"), "error writing csv file");
            false
        }
    }
}

fn try_write_csv(path: &Path, data: &Value, headers: &[String], append: bool) -> Result<()> {
    let records = match data {
        Value::Array(items) => items.as_slice(),
        single => std::slice::from_ref(single),
    };
    let body = encode_rows(records, headers)?;
    let header = header_line(headers);

    ensure_parent_dir(path)?;

    if !append {
        return fs::write(path, format!("{header}\n{body}\n"))
            .with_context(|| format!("write {}", path.display()));
    }

    if needs_header(path)? {
        fs::write(path, format!("{header}\n"))
            .with_context(|| format!("write header {}", path.display()))?;
    }
    append_text(path, &format!("{body}\n"))
}

/// A header is due when the file is absent or holds only whitespace.
fn needs_header(path: &Path) -> Result<bool> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(contents.trim().is_empty()),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(true),
        Err(err) => Err(err).with_context(|| format!("read {}", path.display())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn fresh_file_gets_header_then_escaped_row() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("out.csv");

        assert!(write_csv(
            &path,
            &json!({"a": "x\"y", "b": 1}),
            &headers(&["a", "b"]),
            true
        ));

        let contents = fs::read_to_string(&path).expect("read");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines, vec!["a,b", r#""x\"y","1""#]);
    }

    #[test]
    fn successive_appends_write_one_header() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("out.csv");
        let cols = headers(&["id", "status"]);

        assert!(write_csv(&path, &json!({"id": 1, "status": "applied"}), &cols, true));
        assert!(write_csv(&path, &json!({"id": 2, "status": "fail"}), &cols, true));

        let contents = fs::read_to_string(&path).expect("read");
        assert_eq!(
            contents,
            "id,status\n\"1\",\"applied\"\n\"2\",\"fail\"\n"
        );
    }

    #[test]
    fn array_data_writes_every_record() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("out.csv");

        assert!(write_csv(
            &path,
            &json!([{"a": "1"}, {"a": "2"}]),
            &headers(&["a"]),
            true
        ));
        assert_eq!(
            fs::read_to_string(&path).expect("read"),
            "a\n\"1\"\n\"2\"\n"
        );
    }

    #[test]
    fn blank_existing_file_gets_header() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("out.csv");
        fs::write(&path, " \n\t\n").expect("write");

        assert!(write_csv(&path, &json!({"a": "v"}), &headers(&["a"]), true));
        assert_eq!(fs::read_to_string(&path).expect("read"), "a\n\"v\"\n");
    }

    #[test]
    fn existing_content_is_not_given_a_second_header() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("out.csv");
        fs::write(&path, "legacy,header\n").expect("write");

        assert!(write_csv(&path, &json!({"a": "v"}), &headers(&["a"]), true));
        assert_eq!(
            fs::read_to_string(&path).expect("read"),
            "legacy,header\n\"v\"\n"
        );
    }

    #[test]
    fn overwrite_keeps_header_with_new_rows() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("out.csv");
        let cols = headers(&["a"]);

        assert!(write_csv(&path, &json!({"a": "old"}), &cols, true));
        assert!(write_csv(&path, &json!({"a": "new"}), &cols, false));

        assert_eq!(fs::read_to_string(&path).expect("read"), "a\n\"new\"\n");
    }

    #[test]
    fn creates_missing_parent_directories() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("reports").join("2024").join("out.csv");

        assert!(write_csv(&path, &json!({"a": 1}), &headers(&["a"]), true));
        assert!(path.is_file());
    }

    #[test]
    fn io_failure_returns_false() {
        let temp = tempfile::tempdir().expect("tempdir");
        // A directory cannot be written as a file.
        assert!(!write_csv(
            temp.path(),
            &json!({"a": 1}),
            &headers(&["a"]),
            true
        ));
    }
}

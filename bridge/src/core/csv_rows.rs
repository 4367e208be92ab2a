//! CSV row encoding for caller-supplied records.
//!
//! Rows are always fully quoted. Embedded double quotes are escaped with a
//! backslash (`\"`) rather than doubled; existing consumers of these files
//! parse that form, so it must not change to RFC 4180 escaping.

use anyhow::{Context, Result, anyhow};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde_json::{Number, Value};

/// Text written for a header the record does not contain.
pub const MISSING_FIELD: &str = "undefined";

/// Text written for a record field that holds a JSON object.
const OBJECT_FIELD: &str = "[object Object]";

/// Encode `records` as CSV body rows, one row per record, columns in `headers` order.
///
/// The result has no header row and no trailing newline. An empty record
/// list encodes to an empty string.
pub fn encode_rows(records: &[Value], headers: &[String]) -> Result<String> {
    if records.is_empty() {
        return Ok(String::new());
    }
    if headers.is_empty() {
        // A row with no columns is an empty line.
        return Ok(vec![""; records.len()].join("\n"));
    }

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .double_quote(false)
        .escape(b'\\')
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for record in records {
        let fields = headers
            .iter()
            .map(|header| field_text(record.get(header.as_str())));
        writer.write_record(fields).context("encode csv row")?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| anyhow!("flush csv rows: {}", err.error()))?;
    let mut text = String::from_utf8(bytes).context("csv rows are not valid UTF-8")?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

/// Header line for a CSV document: header names joined by commas, unquoted.
pub fn header_line(headers: &[String]) -> String {
    headers.join(",")
}

/// Textual form of a record field as test specifications expect to read it back.
pub fn field_text(value: Option<&Value>) -> String {
    match value {
        None => MISSING_FIELD.to_string(),
        Some(value) => value_text(value),
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number_text(number),
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => value_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => OBJECT_FIELD.to_string(),
    }
}

fn number_text(number: &Number) -> String {
    let integral = number
        .as_f64()
        .filter(|float| number.is_f64() && float.fract() == 0.0 && float.abs() < 1e21);
    match integral {
        Some(float) => format!("{float:.0}"),
        None => number.to_string(),
    }
}

//! Final outcome record persisted at the end of a test run.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Outcome totals written to the run summary file.
///
/// The failure total is persisted as `failed` while the counter category is
/// `fail`. Downstream readers depend on both spellings.
///
/// Values are written exactly as the caller supplied them, `null` included:
/// they are not checked against the live counter or for sign, and fields the
/// caller omits are omitted from the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub applied: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub already_applied: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub no_longer_available: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub failed: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub skipped: Option<Value>,
}

/// A field that is present keeps its value, even `null`; only absence maps to `None`.
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn failures_are_spelled_failed() {
        let payload = json!({
            "applied": 3,
            "alreadyApplied": 0,
            "noLongerAvailable": 0,
            "failed": 1,
            "skipped": 0
        });
        let summary: RunSummary = serde_json::from_value(payload.clone()).expect("deserialize");
        assert_eq!(summary.failed, Some(json!(1)));
        assert_eq!(serde_json::to_value(&summary).expect("serialize"), payload);
    }

    #[test]
    fn extra_fields_are_dropped_and_missing_fields_omitted() {
        let summary: RunSummary =
            serde_json::from_value(json!({"applied": 2, "fail": 9, "note": "x"}))
                .expect("deserialize");
        assert_eq!(summary.applied, Some(json!(2)));
        assert_eq!(summary.failed, None);
        assert_eq!(
            serde_json::to_value(&summary).expect("serialize"),
            json!({"applied": 2})
        );
    }

    #[test]
    fn explicit_null_is_written_as_null() {
        let summary: RunSummary =
            serde_json::from_value(json!({"applied": 1, "failed": null})).expect("deserialize");
        assert_eq!(summary.failed, Some(Value::Null));
        assert_eq!(
            serde_json::to_value(&summary).expect("serialize"),
            json!({"applied": 1, "failed": null})
        );
    }

    #[test]
    fn values_pass_through_unvalidated() {
        let summary: RunSummary =
            serde_json::from_value(json!({"skipped": -1, "applied": 3.0})).expect("deserialize");
        assert_eq!(summary.skipped, Some(json!(-1)));
        assert_eq!(summary.applied, Some(json!(3.0)));
    }
}

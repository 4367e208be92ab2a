//! Outcome tally shared by every task invocation of a bridge process.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Closed set of outcome categories a test run can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatusCategory {
    Applied,
    AlreadyApplied,
    NoLongerAvailable,
    Fail,
    Skipped,
}

impl StatusCategory {
    pub const ALL: [StatusCategory; 5] = [
        StatusCategory::Applied,
        StatusCategory::AlreadyApplied,
        StatusCategory::NoLongerAvailable,
        StatusCategory::Fail,
        StatusCategory::Skipped,
    ];

    /// Look up a category by its wire name (`"alreadyApplied"`, `"fail"`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == name)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatusCategory::Applied => "applied",
            StatusCategory::AlreadyApplied => "alreadyApplied",
            StatusCategory::NoLongerAvailable => "noLongerAvailable",
            StatusCategory::Fail => "fail",
            StatusCategory::Skipped => "skipped",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

/// Point-in-time copy of the tally, keyed by category wire name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub applied: u64,
    pub already_applied: u64,
    pub no_longer_available: u64,
    pub fail: u64,
    pub skipped: u64,
}

impl StatusCounts {
    pub fn get(&self, category: StatusCategory) -> u64 {
        match category {
            StatusCategory::Applied => self.applied,
            StatusCategory::AlreadyApplied => self.already_applied,
            StatusCategory::NoLongerAvailable => self.no_longer_available,
            StatusCategory::Fail => self.fail,
            StatusCategory::Skipped => self.skipped,
        }
    }
}

/// Process-lifetime tally of outcome categories.
///
/// Starts at zero for every category and is never reset. Counts are atomic so
/// overlapping task requests still produce exact totals.
#[derive(Debug, Default)]
pub struct StatusCounter {
    counts: [AtomicU64; 5],
}

impl StatusCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one to the named category. Unrecognized names are ignored.
    ///
    /// Returns the category that was incremented, if any.
    pub fn increment(&self, name: &str) -> Option<StatusCategory> {
        let category = StatusCategory::from_name(name)?;
        self.record(category);
        Some(category)
    }

    pub fn record(&self, category: StatusCategory) {
        self.counts[category.slot()].fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> StatusCounts {
        let load = |category: StatusCategory| self.counts[category.slot()].load(Ordering::Relaxed);
        StatusCounts {
            applied: load(StatusCategory::Applied),
            already_applied: load(StatusCategory::AlreadyApplied),
            no_longer_available: load(StatusCategory::NoLongerAvailable),
            fail: load(StatusCategory::Fail),
            skipped: load(StatusCategory::Skipped),
        }
    }
}

//! Task bridge for end-to-end test runs.
//!
//! Test specifications run in a sandbox without filesystem access. They call
//! named tasks on this bridge instead, and each task is a thin wrapper over a
//! filesystem or process primitive. The crate keeps the usual split:
//!
//! - **[`core`]**: Pure logic (CSV row encoding, status tallies, task names).
//!   No I/O.
//! - **[`io`]**: Side-effecting operations (directories, CSV/JSON documents,
//!   log streams, the run summary file).
//!
//! [`dispatch`] ties both together behind a single name-based entry point.

pub mod core;
pub mod dispatch;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

//! Pure, deterministic logic for the task bridge.
//!
//! Nothing here touches the filesystem, so every module is testable in isolation.

pub mod csv_rows;
pub mod status;
pub mod summary;
pub mod task;

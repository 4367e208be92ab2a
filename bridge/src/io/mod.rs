//! I/O helpers backing the bridge tasks.

pub mod config;
pub mod csv_store;
pub mod files;
pub mod json_store;
pub mod log_stream;
pub mod paths;
pub mod run_summary;

//! Stable exit codes for the bridge server process.

/// Clean shutdown, including an `exitProcess` task request.
pub const OK: i32 = 0;
/// Startup failed (invalid config, unusable project directory, bind error).
pub const INVALID: i32 = 1;

//! Logging setup shared by the litigation-compare binaries.
//!
//! Output goes to stderr in both formats: stdout belongs to the terminal UI or
//! to the headless JSON protocol.

pub mod logging;

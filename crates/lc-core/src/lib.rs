//! Domain core for the litigation workflow comparison.
//!
//! Everything the comparison page displays is derived from a handful of capped
//! counters and a cycling step index, advanced by two periodic timers. This
//! crate holds that state, the timers, the display formatters and the static
//! comparison content. It has no terminal dependency; presentation lives in
//! `lc-tui`.
//!
//! Key components:
//! - **Counters**: saturating counters and the metrics reducer ([`metrics`])
//! - **Steps**: the fixed process-step table and its cycler ([`steps`])
//! - **Timers**: owned periodic timers with catch-up ([`timer`])
//! - **Component**: mount/pump/teardown lifecycle ([`component`])
//! - **Formatting**: grouped numbers, elapsed time, currency ([`format`])

pub mod component;
pub mod config;
pub mod content;
pub mod counter;
pub mod format;
pub mod metrics;
pub mod steps;
pub mod timer;

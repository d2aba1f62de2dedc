//! Headless command system.
//!
//! Drives the comparison from stdin without a terminal, against a simulated
//! clock, so automation can step time deterministically:
//! - **Text**: `:` prefixed commands, e.g. `:advance 500`.
//! - **JSON**: `{"cmd":"advance","args":[500]}`.
//!
//! `snapshot` returns the component state as a JSON string.

use std::time::{Duration, Instant};

use crate::app::App;

// ---------------------------------------------------------------------------
// AppCommand enum
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Move the simulated clock forward by this many milliseconds.
    Advance(u64),
    Snapshot,
    Teardown,
    Quit,
}

// ---------------------------------------------------------------------------
// Simulated clock
// ---------------------------------------------------------------------------

/// Monotonic clock that only moves when told to.
///
/// The clock never passes the last instant `Instant` can represent: an
/// advance that would overflow leaves it where it is.
#[derive(Debug, Clone, Copy)]
pub struct SimClock {
    now: Instant,
    offset: Duration,
}

impl SimClock {
    pub fn new(origin: Instant) -> Self {
        Self {
            now: origin,
            offset: Duration::ZERO,
        }
    }

    pub fn now(&self) -> Instant {
        self.now
    }

    /// Simulated time since the clock started.
    pub fn elapsed(&self) -> Duration {
        self.offset
    }

    pub fn advance(&mut self, by: Duration) -> Instant {
        match (self.now.checked_add(by), self.offset.checked_add(by)) {
            (Some(now), Some(offset)) => {
                self.now = now;
                self.offset = offset;
            }
            _ => tracing::warn!(by_ms = by.as_millis() as u64, "simulated clock at its ceiling"),
        }
        self.now
    }
}

// ---------------------------------------------------------------------------
// Text command parser  (`:` prefixed)
// ---------------------------------------------------------------------------

/// Parse a `:` prefixed command string.
///
/// Examples: `:advance 2000`, `:snapshot`, `:teardown`, `:quit`.
pub fn parse_command(input: &str) -> Option<AppCommand> {
    let input = input.trim();
    let input = input.strip_prefix(':')?;
    let mut parts = input.splitn(2, ' ');
    let verb = parts.next()?.trim();
    let arg = parts.next().map(|s| s.trim());

    match verb {
        "advance" | "adv" => {
            let ms: u64 = arg?.parse().ok()?;
            Some(AppCommand::Advance(ms))
        }
        "snapshot" | "snap" | "s" => Some(AppCommand::Snapshot),
        "teardown" | "unmount" => Some(AppCommand::Teardown),
        "quit" | "q" => Some(AppCommand::Quit),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// JSON command parser
// ---------------------------------------------------------------------------

/// Parse a JSON command.
///
/// Expected format: `{"cmd":"advance","args":[500]}` or `{"cmd":"snapshot"}`.
pub fn parse_json_command(json: &str) -> Option<AppCommand> {
    let v: serde_json::Value = serde_json::from_str(json).ok()?;
    let cmd = v.get("cmd")?.as_str()?;
    let args = v.get("args");

    let arg_u64 = |idx: usize| -> Option<u64> { args?.as_array()?.get(idx)?.as_u64() };

    match cmd {
        "advance" => Some(AppCommand::Advance(arg_u64(0)?)),
        "snapshot" => Some(AppCommand::Snapshot),
        "teardown" => Some(AppCommand::Teardown),
        "quit" => Some(AppCommand::Quit),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Command execution
// ---------------------------------------------------------------------------

/// Execute a command against the application state.
///
/// Returns `Some(json_string)` with the snapshot for `Snapshot` and an event
/// object for `Advance` and `Teardown`; `Quit` returns `None`.
pub fn execute_command(app: &mut App, clock: &mut SimClock, cmd: AppCommand) -> Option<String> {
    match cmd {
        AppCommand::Advance(ms) => {
            let now = clock.advance(Duration::from_millis(ms));
            let report = app.tick(now);
            let value = serde_json::json!({
                "event": "advanced",
                "ms": ms,
                "clock_ms": clock.elapsed().as_millis() as u64,
                "metric_ticks": report.metric_ticks,
                "step_ticks": report.step_ticks,
            });
            Some(value.to_string())
        }
        AppCommand::Snapshot => serde_json::to_string(&app.snapshot()).ok(),
        AppCommand::Teardown => {
            app.comparison.teardown();
            Some(serde_json::json!({"event": "torn_down"}).to_string())
        }
        AppCommand::Quit => {
            app.quit();
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Line dispatch
// ---------------------------------------------------------------------------

/// Handle one line of headless input and return the JSON lines to print.
///
/// Blank lines produce nothing. Unknown input produces an `error` event; a
/// command with no reply of its own produces `ok`, and `quit` is followed by
/// a `quit` event.
pub fn handle_line(app: &mut App, clock: &mut SimClock, line: &str) -> Vec<String> {
    let line = line.trim();
    if line.is_empty() {
        return Vec::new();
    }

    // Try JSON command first, then text command
    let Some(cmd) = parse_json_command(line).or_else(|| parse_command(line)) else {
        tracing::debug!(input = line, "unknown headless command");
        return vec![serde_json::json!({
            "event": "error",
            "message": format!("unknown command: {}", line),
        })
        .to_string()];
    };

    let mut out = vec![execute_command(app, clock, cmd)
        .unwrap_or_else(|| serde_json::json!({"event": "ok"}).to_string())];
    if app.should_quit {
        out.push(serde_json::json!({"event": "quit"}).to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_text_commands() {
        assert_eq!(parse_command(":advance 500"), Some(AppCommand::Advance(500)));
        assert_eq!(parse_command("  :snap "), Some(AppCommand::Snapshot));
        assert_eq!(parse_command(":teardown"), Some(AppCommand::Teardown));
        assert_eq!(parse_command(":q"), Some(AppCommand::Quit));
    }

    #[test]
    fn parse_text_rejects_bad_input() {
        assert_eq!(parse_command("advance 500"), None);
        assert_eq!(parse_command(":advance"), None);
        assert_eq!(parse_command(":advance -3"), None);
        assert_eq!(parse_command(":reset"), None);
    }

    #[test]
    fn parse_json_commands() {
        assert_eq!(
            parse_json_command(r#"{"cmd":"advance","args":[2000]}"#),
            Some(AppCommand::Advance(2000))
        );
        assert_eq!(parse_json_command(r#"{"cmd":"snapshot"}"#), Some(AppCommand::Snapshot));
        assert_eq!(parse_json_command(r#"{"cmd":"advance"}"#), None);
        assert_eq!(parse_json_command(r#"{"cmd":"bogus"}"#), None);
        assert_eq!(parse_json_command("not json"), None);
    }

    #[test]
    fn sim_clock_stops_at_its_ceiling() {
        let origin = Instant::now();
        let mut clock = SimClock::new(origin);
        for _ in 0..1_000 {
            clock.advance(Duration::from_millis(u64::MAX));
        }
        let stuck = clock.now();
        assert!(stuck >= origin);
        assert_eq!(clock.advance(Duration::MAX), stuck);
        assert_eq!(clock.elapsed(), stuck - origin);
    }

    #[test]
    fn sim_clock_moves_only_on_advance() {
        let origin = Instant::now();
        let mut clock = SimClock::new(origin);
        assert_eq!(clock.now(), origin);
        clock.advance(Duration::from_millis(250));
        assert_eq!(clock.elapsed(), Duration::from_millis(250));
        assert_eq!(clock.now(), origin + Duration::from_millis(250));
    }
}

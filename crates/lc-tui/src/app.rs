use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use lc_core::component::{Comparison, PumpReport, Snapshot};
use lc_core::config::Config;

/// Application state for the comparison page.
///
/// Keys can only quit. Nothing the user presses changes the counters or the
/// active step; those move with the timers alone.
pub struct App {
    pub comparison: Comparison,
    pub should_quit: bool,
    /// Thousands separator from `display.thousands_separator`.
    pub separator: char,
    /// Dormant ROI summary, only ever set from configuration.
    pub show_roi_summary: bool,
    /// Set on the pump that saturates the last counter, cleared by the loop.
    pub just_completed: bool,
}

impl App {
    /// Build the app and mount the comparison at `now`.
    pub fn new(config: &Config, now: Instant) -> Self {
        Self {
            comparison: Comparison::mounted(config.timing.timing(), now),
            should_quit: false,
            separator: config.display.separator(),
            show_roi_summary: config.display.show_roi_summary,
            just_completed: false,
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            _ => {}
        }
    }

    /// Apply due timer firings.
    pub fn tick(&mut self, now: Instant) -> PumpReport {
        let was_complete = self.comparison.metrics().all_saturated();
        let report = self.comparison.pump(now);
        if !was_complete && self.comparison.metrics().all_saturated() {
            self.just_completed = true;
        }
        report
    }

    /// Tear the component down and flag the loop to exit.
    pub fn quit(&mut self) {
        self.comparison.teardown();
        self.should_quit = true;
    }

    pub fn snapshot(&self) -> Snapshot {
        self.comparison.snapshot(self.separator)
    }
}

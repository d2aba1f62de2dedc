//! The comparison component: state plus the two timers that animate it.
//!
//! Lifecycle:
//! 1. [`Comparison::mount`] resets the state and acquires both timers.
//! 2. The owning loop calls [`Comparison::pump`] whenever it wakes; due
//!    firings are applied, missed ones included.
//! 3. [`Comparison::teardown`] (or dropping the component) releases both
//!    timers. Nothing mutates the state afterwards. Teardown is idempotent.

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::content;
use crate::format::{format_number_with, format_percent, format_time, format_usd_with};
use crate::metrics::MetricsState;
use crate::steps::StepCycler;
use crate::timer::{PeriodicTimer, Timing};

/// Firings applied by one [`Comparison::pump`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PumpReport {
    pub metric_ticks: u64,
    pub step_ticks: u64,
}

impl PumpReport {
    pub fn changed(&self) -> bool {
        self.metric_ticks > 0 || self.step_ticks > 0
    }
}

#[derive(Debug)]
pub struct Comparison {
    timing: Timing,
    metrics: MetricsState,
    steps: StepCycler,
    metrics_timer: Option<PeriodicTimer>,
    step_timer: Option<PeriodicTimer>,
}

impl Comparison {
    /// An unmounted component. Its state stays at zero until mounted.
    pub fn new(timing: Timing) -> Self {
        Self {
            timing,
            metrics: MetricsState::new(),
            steps: StepCycler::new(),
            metrics_timer: None,
            step_timer: None,
        }
    }

    /// Create and mount in one step.
    pub fn mounted(timing: Timing, now: Instant) -> Self {
        let mut component = Self::new(timing);
        component.mount(now);
        component
    }

    /// Reset the state and start both timers at `now`.
    ///
    /// Mounting an already mounted component is a no-op.
    pub fn mount(&mut self, now: Instant) {
        if self.is_active() {
            tracing::warn!("comparison already mounted, ignoring");
            return;
        }
        self.metrics = MetricsState::new();
        self.steps = StepCycler::new();
        self.metrics_timer = Some(PeriodicTimer::start(self.timing.metrics_interval, now));
        self.step_timer = Some(PeriodicTimer::start(self.timing.step_interval, now));
        tracing::debug!(
            metrics_interval_ms = self.timing.metrics_interval.as_millis() as u64,
            step_interval_ms = self.timing.step_interval.as_millis() as u64,
            "comparison mounted"
        );
    }

    /// Stop both timers immediately. No final tick is applied.
    pub fn teardown(&mut self) {
        let metrics = self.metrics_timer.take();
        let steps = self.step_timer.take();
        if metrics.is_some() || steps.is_some() {
            tracing::debug!(
                metric_ticks = metrics.map(|t| t.fired()).unwrap_or(0),
                step_ticks = steps.map(|t| t.fired()).unwrap_or(0),
                "comparison torn down"
            );
        }
    }

    /// True while at least one timer is held.
    pub fn is_active(&self) -> bool {
        self.metrics_timer.is_some() || self.step_timer.is_some()
    }

    /// Apply every firing due at `now`.
    pub fn pump(&mut self, now: Instant) -> PumpReport {
        let mut report = PumpReport::default();
        if let Some(timer) = self.metrics_timer.as_mut() {
            report.metric_ticks = timer.due(now);
            self.metrics = self.metrics.advance(report.metric_ticks);
        }
        if let Some(timer) = self.step_timer.as_mut() {
            report.step_ticks = timer.due(now);
            self.steps.advance(report.step_ticks);
        }
        report
    }

    /// How long the owning loop may sleep before a timer becomes due.
    /// `None` once torn down.
    pub fn until_next_due(&self, now: Instant) -> Option<Duration> {
        [self.metrics_timer.as_ref(), self.step_timer.as_ref()]
            .into_iter()
            .flatten()
            .map(|t| t.until_due(now))
            .min()
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    pub fn metrics(&self) -> &MetricsState {
        &self.metrics
    }

    pub fn steps(&self) -> &StepCycler {
        &self.steps
    }

    /// Raw values plus their display strings.
    pub fn snapshot(&self, separator: char) -> Snapshot {
        let m = &self.metrics;
        Snapshot {
            active: self.is_active(),
            human_progress: m.human_progress(),
            ai_progress: m.ai_progress(),
            human_documents: m.human_documents(),
            ai_documents: m.ai_documents(),
            processed_documents: m.processed_documents(),
            elapsed_ticks: m.elapsed_ticks(),
            active_step: self.steps.index(),
            active_step_title: self.steps.active_step().title,
            timeline_fill: self.steps.fill_fraction(),
            display: SnapshotDisplay {
                human_progress: format_percent(m.human_progress()),
                ai_progress: format_percent(m.ai_progress()),
                processed_documents: format_number_with(
                    f64::from(m.processed_documents()),
                    separator,
                ),
                elapsed: format_time(m.elapsed_ticks()),
                human_cost: format_usd_with(content::HUMAN_COST_PER_CASE, separator),
                ai_cost: format_usd_with(content::AI_COST_PER_CASE, separator),
                annual_savings: format!(
                    "${}",
                    format_number_with(content::annual_savings(), separator)
                ),
            },
        }
    }
}

impl Drop for Comparison {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// A point-in-time view of the component, serializable for the headless driver.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub active: bool,
    pub human_progress: f64,
    pub ai_progress: f64,
    pub human_documents: u32,
    pub ai_documents: u32,
    pub processed_documents: u32,
    pub elapsed_ticks: u64,
    pub active_step: usize,
    pub active_step_title: &'static str,
    pub timeline_fill: f64,
    pub display: SnapshotDisplay,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotDisplay {
    pub human_progress: String,
    pub ai_progress: String,
    pub processed_documents: String,
    pub elapsed: String,
    pub human_cost: String,
    pub ai_cost: String,
    pub annual_savings: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn unmounted_component_never_moves() {
        let t0 = Instant::now();
        let mut c = Comparison::new(Timing::default());
        assert!(!c.is_active());
        assert_eq!(c.pump(t0 + ms(10_000)), PumpReport::default());
        assert_eq!(c.metrics().elapsed_ticks(), 0);
    }

    #[test]
    fn pump_reports_ticks() {
        let t0 = Instant::now();
        let mut c = Comparison::mounted(Timing::default(), t0);
        let report = c.pump(t0 + ms(2000));
        assert_eq!(report.metric_ticks, 20);
        assert_eq!(report.step_ticks, 1);
        assert!(report.changed());
        assert_eq!(c.steps().index(), 1);
        assert_eq!(c.metrics().ai_documents(), 200);
    }

    #[test]
    fn until_next_due_picks_the_sooner_timer() {
        let t0 = Instant::now();
        let c = Comparison::mounted(Timing::default(), t0);
        assert_eq!(c.until_next_due(t0 + ms(30)), Some(ms(70)));
    }

    #[test]
    fn until_next_due_is_none_after_teardown() {
        let t0 = Instant::now();
        let mut c = Comparison::mounted(Timing::default(), t0);
        c.teardown();
        assert_eq!(c.until_next_due(t0), None);
    }

    #[test]
    fn double_mount_keeps_running_state() {
        let t0 = Instant::now();
        let mut c = Comparison::mounted(Timing::default(), t0);
        c.pump(t0 + ms(500));
        c.mount(t0 + ms(500));
        assert_eq!(c.metrics().elapsed_ticks(), 5);
    }

    #[test]
    fn snapshot_display_strings() {
        let t0 = Instant::now();
        let mut c = Comparison::mounted(Timing::default(), t0);
        c.pump(t0 + ms(100 * 250));
        let snap = c.snapshot(',');
        assert!(snap.active);
        assert_eq!(snap.processed_documents, 1000);
        assert_eq!(snap.display.processed_documents, "1,000");
        assert_eq!(snap.display.elapsed, "4 minutes");
        assert_eq!(snap.display.human_progress, "25%");
        assert_eq!(snap.display.ai_progress, "100%");
        assert_eq!(snap.display.annual_savings, "$1,259,158");
        assert_eq!(snap.display.human_cost, "$3,450.00");
    }
}

//! Periodic timers for a single-threaded render loop.
//!
//! A [`PeriodicTimer`] does not own a thread or a task. The loop that owns it
//! asks, each time it wakes, how many periods have elapsed since the last
//! check. Missed periods are all reported (catch-up), so anything driven by the
//! timer stays a function of wall-clock time even when the loop stalls.
//!
//! Dropping the timer is the release: once the owner lets go of it there is
//! nothing left that could fire.

use std::time::{Duration, Instant};

/// Shortest period a timer accepts. Zero would make every instant due.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Intervals for the two comparison timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Metrics timer period (default: 100 ms).
    pub metrics_interval: Duration,
    /// Step cycler period (default: 2000 ms).
    pub step_interval: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            metrics_interval: Duration::from_millis(100),
            step_interval: Duration::from_millis(2000),
        }
    }
}

/// A fixed-period timer that first fires one full period after it starts.
#[derive(Debug, Clone)]
pub struct PeriodicTimer {
    period: Duration,
    /// `None` once the next deadline is past what `Instant` can represent.
    next_due: Option<Instant>,
    fired: u64,
}

impl PeriodicTimer {
    /// Start a timer at `now`. Periods below [`MIN_PERIOD`] are raised to it.
    pub fn start(period: Duration, now: Instant) -> Self {
        let period = period.max(MIN_PERIOD);
        Self {
            period,
            next_due: now.checked_add(period),
            fired: 0,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// The instant of the next firing, `None` when it lies beyond the range
    /// of `Instant` and the timer will never fire again.
    pub fn next_due(&self) -> Option<Instant> {
        self.next_due
    }

    /// Total firings reported so far.
    pub fn fired(&self) -> u64 {
        self.fired
    }

    /// Number of firings due at `now`, consuming them.
    ///
    /// A time earlier than the previous call reports zero.
    pub fn due(&mut self, now: Instant) -> u64 {
        let Some(next_due) = self.next_due else {
            return 0;
        };
        if now < next_due {
            return 0;
        }
        let period_nanos = self.period.as_nanos();
        let behind = (now - next_due).as_nanos();
        let count = behind / period_nanos + 1;
        // Every reported firing moves the deadline by a full period; a shift
        // that cannot be represented parks the timer for good.
        self.next_due = nanos_to_duration(period_nanos.saturating_mul(count))
            .and_then(|shift| next_due.checked_add(shift));
        if self.next_due.is_none() {
            tracing::warn!(
                period_ms = self.period.as_millis() as u64,
                "timer deadline out of range, parking"
            );
        }
        let count = u64::try_from(count).unwrap_or(u64::MAX);
        self.fired = self.fired.saturating_add(count);
        count
    }

    /// Time left until the next firing, zero when already due and
    /// `Duration::MAX` for a parked timer.
    pub fn until_due(&self, now: Instant) -> Duration {
        self.next_due
            .map_or(Duration::MAX, |due| due.saturating_duration_since(now))
    }
}

fn nanos_to_duration(nanos: u128) -> Option<Duration> {
    const NANOS_PER_SEC: u128 = 1_000_000_000;
    let secs = u64::try_from(nanos / NANOS_PER_SEC).ok()?;
    Some(Duration::new(secs, (nanos % NANOS_PER_SEC) as u32))
}

//! Animated metrics driven by the 100 ms metrics timer.
//!
//! Six values move on every tick: four capped counters that feed the progress
//! bars and document grids, the processed-document total and the uncapped
//! elapsed-time accumulator. [`MetricsState::advance`] is the pure reducer;
//! the timer only decides how many ticks to feed it.

use serde::{Deserialize, Serialize};

use crate::counter::CappedCounter;

// ---------------------------------------------------------------------------
// Increments and ceilings
// ---------------------------------------------------------------------------

/// Human progress is tracked in tenths of a percent: +1 tenth (0.1 %) per tick.
pub const HUMAN_PROGRESS_STEP_TENTHS: u32 = 1;
pub const HUMAN_PROGRESS_CEILING_TENTHS: u32 = 1000;

pub const AI_PROGRESS_STEP: u32 = 1;
pub const AI_PROGRESS_CEILING: u32 = 100;

pub const HUMAN_DOCUMENTS_STEP: u32 = 1;
pub const AI_DOCUMENTS_STEP: u32 = 10;
pub const PROCESSED_DOCUMENTS_STEP: u32 = 5;
pub const DOCUMENTS_CEILING: u32 = 1000;

/// Number of cells in each document grid.
pub const GRID_CELLS: usize = 10;

/// Divisor of the grid fill predicate. A grid is fully lit at 91 documents,
/// long before its counter saturates.
pub const DOCUMENTS_PER_CELL: u32 = 10;

// ---------------------------------------------------------------------------
// MetricsState
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsState {
    human_progress: CappedCounter,
    ai_progress: CappedCounter,
    human_documents: CappedCounter,
    ai_documents: CappedCounter,
    processed_documents: CappedCounter,
    elapsed_ticks: u64,
}

impl Default for MetricsState {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsState {
    /// Fresh state, every value at zero.
    pub const fn new() -> Self {
        Self {
            human_progress: CappedCounter::new(
                HUMAN_PROGRESS_STEP_TENTHS,
                HUMAN_PROGRESS_CEILING_TENTHS,
            ),
            ai_progress: CappedCounter::new(AI_PROGRESS_STEP, AI_PROGRESS_CEILING),
            human_documents: CappedCounter::new(HUMAN_DOCUMENTS_STEP, DOCUMENTS_CEILING),
            ai_documents: CappedCounter::new(AI_DOCUMENTS_STEP, DOCUMENTS_CEILING),
            processed_documents: CappedCounter::new(PROCESSED_DOCUMENTS_STEP, DOCUMENTS_CEILING),
            elapsed_ticks: 0,
        }
    }

    /// Pure reducer: the state after `ticks` further firings of the metrics
    /// timer.
    #[must_use]
    pub fn advance(mut self, ticks: u64) -> Self {
        self.apply(ticks);
        self
    }

    /// Apply a single firing in place.
    pub fn tick(&mut self) {
        self.apply(1);
    }

    fn apply(&mut self, ticks: u64) {
        if ticks == 0 {
            return;
        }
        let counters = [
            ("human_progress", &mut self.human_progress),
            ("ai_progress", &mut self.ai_progress),
            ("human_documents", &mut self.human_documents),
            ("ai_documents", &mut self.ai_documents),
            ("processed_documents", &mut self.processed_documents),
        ];
        for (name, counter) in counters {
            if counter.advance(ticks) {
                tracing::info!(counter = name, ceiling = counter.ceiling(), "counter reached ceiling");
            }
        }
        self.elapsed_ticks = self.elapsed_ticks.saturating_add(ticks);
    }

    /// Human progress in percent, `[0, 100]`.
    pub fn human_progress(&self) -> f64 {
        f64::from(self.human_progress.value()) / 10.0
    }

    /// Human progress in tenths of a percent, `[0, 1000]`.
    pub fn human_progress_tenths(&self) -> u32 {
        self.human_progress.value()
    }

    /// AI progress in percent, `[0, 100]`.
    pub fn ai_progress(&self) -> f64 {
        f64::from(self.ai_progress.value())
    }

    pub fn human_documents(&self) -> u32 {
        self.human_documents.value()
    }

    pub fn ai_documents(&self) -> u32 {
        self.ai_documents.value()
    }

    pub fn processed_documents(&self) -> u32 {
        self.processed_documents.value()
    }

    /// Elapsed ticks, displayed as seconds. Never capped.
    pub fn elapsed_ticks(&self) -> u64 {
        self.elapsed_ticks
    }

    /// True once every capped counter sits at its ceiling.
    pub fn all_saturated(&self) -> bool {
        self.human_progress.is_saturated()
            && self.ai_progress.is_saturated()
            && self.human_documents.is_saturated()
            && self.ai_documents.is_saturated()
            && self.processed_documents.is_saturated()
    }
}

// ---------------------------------------------------------------------------
// Document grid
// ---------------------------------------------------------------------------

/// Whether grid cell `index` is drawn filled for a document count.
///
/// A cell is filled when `index < documents / 10` with real division, so 47
/// documents fill cells 0 through 4.
pub fn grid_cell_filled(index: usize, documents: u32) -> bool {
    (index as u64) * u64::from(DOCUMENTS_PER_CELL) < u64::from(documents)
}

/// Fill flags for every cell of a document grid.
pub fn grid_fill(documents: u32) -> [bool; GRID_CELLS] {
    std::array::from_fn(|i| grid_cell_filled(i, documents))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_zero() {
        let s = MetricsState::new();
        assert_eq!(s.human_progress(), 0.0);
        assert_eq!(s.ai_progress(), 0.0);
        assert_eq!(s.human_documents(), 0);
        assert_eq!(s.ai_documents(), 0);
        assert_eq!(s.processed_documents(), 0);
        assert_eq!(s.elapsed_ticks(), 0);
    }

    #[test]
    fn one_tick_applies_every_increment() {
        let mut s = MetricsState::new();
        s.tick();
        assert_eq!(s.human_progress_tenths(), 1);
        assert_eq!(s.ai_progress(), 1.0);
        assert_eq!(s.human_documents(), 1);
        assert_eq!(s.ai_documents(), 10);
        assert_eq!(s.processed_documents(), 5);
        assert_eq!(s.elapsed_ticks(), 1);
    }

    #[test]
    fn ai_side_finishes_at_one_hundred_ticks() {
        let s = MetricsState::new().advance(100);
        assert_eq!(s.ai_progress(), 100.0);
        assert_eq!(s.ai_documents(), 1000);
        assert_eq!(s.human_progress(), 10.0);
        assert_eq!(s.human_documents(), 100);
    }

    #[test]
    fn everything_saturates_by_one_thousand_ticks() {
        let s = MetricsState::new().advance(999);
        assert!(!s.all_saturated());
        let s = s.advance(1);
        assert!(s.all_saturated());
        assert_eq!(s.human_progress(), 100.0);
        assert_eq!(s.elapsed_ticks(), 1000);
    }

    #[test]
    fn grid_fill_for_forty_seven_documents() {
        let fill = grid_fill(47);
        assert!(fill[..5].iter().all(|&f| f));
        assert!(fill[5..].iter().all(|&f| !f));
    }

    #[test]
    fn grid_boundaries() {
        assert!(!grid_cell_filled(0, 0));
        assert!(grid_cell_filled(0, 1));
        assert!(!grid_cell_filled(1, 10));
        assert!(grid_cell_filled(1, 11));
        assert!(grid_fill(1000).iter().all(|&f| f));
    }
}
